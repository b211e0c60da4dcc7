//! Error handling - every failure renders as `{ "error": "..." }`.

use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use anon_shared::ErrorBody;
use std::fmt;

use anon_core::error::{UpstreamError, ValidationError};

/// Application-level error type.
#[derive(Debug)]
pub enum AppError {
    /// Malformed local input. Never reaches upstream.
    BadRequest(String),
    /// Upstream rejected the call; status and message are relayed.
    Upstream { status: StatusCode, message: String },
    /// Anything else. The detail is logged, not returned.
    Internal(String),
}

impl AppError {
    /// Map an upstream failure, using `fallback` when upstream sent no message.
    pub fn upstream(err: UpstreamError, fallback: &str) -> Self {
        match err.status() {
            Some(status) => AppError::Upstream {
                status: StatusCode::from_u16(status)
                    .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR),
                message: err.message_or(fallback),
            },
            None => AppError::Internal(err.to_string()),
        }
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::BadRequest(msg) => write!(f, "Bad request: {}", msg),
            AppError::Upstream { status, message } => {
                write!(f, "Upstream error ({}): {}", status.as_u16(), message)
            }
            AppError::Internal(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::Upstream { status, .. } => *status,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let body = match self {
            AppError::BadRequest(msg) => ErrorBody::new(msg.clone()),
            AppError::Upstream { message, .. } => ErrorBody::new(message.clone()),
            AppError::Internal(detail) => {
                tracing::error!("Error in API call: {}", detail);
                ErrorBody::internal_error()
            }
        };

        HttpResponse::build(self.status_code()).json(body)
    }
}

impl From<ValidationError> for AppError {
    fn from(err: ValidationError) -> Self {
        AppError::BadRequest(err.to_string())
    }
}

impl From<UpstreamError> for AppError {
    fn from(err: UpstreamError) -> Self {
        let fallback = err.to_string();
        AppError::upstream(err, &fallback)
    }
}

/// Result type alias for handlers.
pub type AppResult<T> = Result<T, AppError>;
