/// Errors from the booking service client.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The request never completed (connection, timeout, decode).
    #[error("network error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The service answered with a non-success status.
    #[error("{message}")]
    Rejected { status: u16, message: String },

    /// A local file could not be read (avatar upload).
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
