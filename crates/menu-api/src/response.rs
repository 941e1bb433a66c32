//! Envelope shared by every editor endpoint

use axum::http::StatusCode;
use chrono::Utc;
use serde::Serialize;

#[derive(Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub success: bool,
    pub data: Option<T>,
    pub error: Option<ApiErrorBody>,
    pub timestamp: String,
}

/// Machine-readable failure kinds a client can branch on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    BadRequest,
    MenuNotFound,
    SessionNotFound,
    ValidationFailed,
    StorageError,
}

impl ErrorCode {
    pub fn status(self) -> StatusCode {
        match self {
            ErrorCode::BadRequest => StatusCode::BAD_REQUEST,
            ErrorCode::MenuNotFound | ErrorCode::SessionNotFound => StatusCode::NOT_FOUND,
            ErrorCode::ValidationFailed => StatusCode::UNPROCESSABLE_ENTITY,
            ErrorCode::StorageError => StatusCode::SERVICE_UNAVAILABLE,
        }
    }

    /// The session is left as it was, so the same request may be sent again
    pub fn is_retryable(self) -> bool {
        matches!(self, ErrorCode::StorageError)
    }
}

#[derive(Serialize)]
pub struct ApiErrorBody {
    pub code: ErrorCode,
    pub message: String,
    pub retryable: bool,
}

impl<T: Serialize> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
            timestamp: Utc::now().to_rfc3339(),
        }
    }

    pub fn error(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(ApiErrorBody {
                code,
                message: message.into(),
                retryable: code.is_retryable(),
            }),
            timestamp: Utc::now().to_rfc3339(),
        }
    }
}
