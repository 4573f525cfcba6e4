use crate::session::SessionError;

/// Errors that can occur in the TUI layer.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// An I/O error occurred (terminal, event reading, etc.).
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A session error occurred while persisting sign-in state.
    #[error("Session error: {0}")]
    Session(#[from] SessionError),
}
