//! Error types for the directory service.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};

/// Result type alias for service operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while bringing the service up.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// Error from the core directory types.
    #[error(transparent)]
    Core(#[from] roster_core::Error),

    /// Config file could not be read, or the listener could not bind.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Config file is not valid TOML for a server config.
    #[error("config error: {0}")]
    Config(#[from] toml::de::Error),
}

/// Wire shape of every failure answer.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorBody {
    /// Explanation of what went wrong
    pub error: String,
}

/// A failed request, carrying the directory error it came from.
///
/// Renders as the status the error calls for plus the service's
/// uniform `{"error": ...}` body: 400 for a rejected payload, 404 for
/// an unknown id, 500 for anything else.
#[derive(Debug, thiserror::Error)]
#[error(transparent)]
pub struct ApiError(#[from] roster_core::Error);

impl ApiError {
    fn status(&self) -> StatusCode {
        match &self.0 {
            roster_core::Error::Validation { .. } => StatusCode::BAD_REQUEST,
            roster_core::Error::MemberNotFound { .. } => StatusCode::NOT_FOUND,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = self.0.to_string();
        if status.is_server_error() {
            tracing::error!(%status, %message, "request failed");
        } else {
            tracing::debug!(%status, %message, "request rejected");
        }
        (status, Json(ErrorBody { error: message })).into_response()
    }
}
