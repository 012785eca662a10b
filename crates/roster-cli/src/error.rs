//! Error types for the roster tool.

/// Errors a command can end with.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// Failure from the client library or the service behind it.
    #[error(transparent)]
    Client(#[from] roster_client::Error),

    /// Bad usage caught before any request is made.
    #[error("{0}")]
    Usage(String),

    /// Terminal I/O failed while prompting.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Creates a usage error.
    pub fn usage(message: impl Into<String>) -> Self {
        Self::Usage(message.into())
    }
}

/// Result type alias using our error type.
pub type Result<T> = std::result::Result<T, Error>;
