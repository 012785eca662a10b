//! Error types for directory clients.

/// Errors produced while talking to a directory.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// Error from the core directory types.
    #[error(transparent)]
    Core(#[from] roster_core::Error),

    /// Transport-level HTTP failure: connection refused, timeout,
    /// malformed response body.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Failure reported by the service in its error body.
    #[error("Service error ({status}): {message}")]
    Api {
        /// HTTP status code the service answered with
        status: u16,
        /// Message from the service's error body
        message: String,
    },
}

impl Error {
    /// Creates a service-reported error from a status and message.
    pub fn api(status: u16, message: impl Into<String>) -> Self {
        Self::Api {
            status,
            message: message.into(),
        }
    }

    /// Returns true if the failure means the record does not exist,
    /// whether reported locally or by the service.
    pub fn is_not_found(&self) -> bool {
        match self {
            Self::Core(err) => err.is_not_found(),
            Self::Api { status, .. } => *status == 404,
            _ => false,
        }
    }

    /// Returns true if the failure is a rejected payload, whether
    /// caught locally or reported by the service.
    pub fn is_validation(&self) -> bool {
        match self {
            Self::Core(err) => err.is_validation(),
            Self::Api { status, .. } => *status == 400,
            _ => false,
        }
    }
}

/// Result type alias using our error type.
pub type Result<T> = std::result::Result<T, Error>;
