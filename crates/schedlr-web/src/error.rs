use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use schedlr_core::{ConfigError, SourceError, SourceErrorKind};
use serde_json::json;
use thiserror::Error;

/// Request-level failure rendered as `{"error": "<message>"}`.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{}", .0.message())]
    Source(#[from] SourceError),

    #[error("{0}")]
    BadRequest(String),
}

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Source(error) => match error.kind() {
                SourceErrorKind::NotFound => StatusCode::NOT_FOUND,
                SourceErrorKind::UpstreamClient
                | SourceErrorKind::UpstreamUnavailable
                | SourceErrorKind::UpstreamUnknown => StatusCode::INTERNAL_SERVER_ERROR,
            },
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        match &self {
            Self::Source(error) if status.is_server_error() => {
                tracing::error!(code = error.code(), error = %error.message(), "Upstream request failed");
            }
            _ => tracing::warn!(status = status.as_u16(), error = %self, "Request rejected"),
        }
        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}

/// Process-level failures mapped to exit codes.
#[derive(Debug, Error)]
pub enum ServerError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl ServerError {
    pub const fn exit_code(&self) -> u8 {
        match self {
            Self::Config(_) => 2,
            Self::Io(_) => 10,
        }
    }
}
