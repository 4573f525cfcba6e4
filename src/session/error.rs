/// Errors that can occur while loading or persisting the session.
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    /// An I/O error occurred while reading or writing the session file.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The session file exists but does not contain a valid session.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The platform does not provide a data directory.
    #[error("could not determine XDG data directory")]
    NoDataDir,
}
