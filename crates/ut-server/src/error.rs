//! Mapping table errors onto HTTP responses.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use ut_table::{ErrorKind, TableError};

/// An error raised while handling a request.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The table engine rejected the request.
    #[error(transparent)]
    Table(#[from] TableError),

    /// The roll path segment is not a number.
    #[error("invalid roll: {0}")]
    InvalidRoll(String),
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

impl ApiError {
    /// Status code for this error.
    pub fn status(&self) -> StatusCode {
        match self {
            Self::InvalidRoll(_) => StatusCode::UNPROCESSABLE_ENTITY,
            Self::Table(err) => match err.kind() {
                ErrorKind::Lookup | ErrorKind::Range => StatusCode::UNPROCESSABLE_ENTITY,
                ErrorKind::Random | ErrorKind::Schema => StatusCode::INTERNAL_SERVER_ERROR,
            },
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
        } else {
            tracing::debug!(error = %self, "request rejected");
        }
        (
            status,
            Json(ErrorBody {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}
