use axum::{
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use menu_core::DomainError;
use crate::response::{ApiResponse, ErrorCode};

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error(transparent)]
    Domain(#[from] DomainError),
}

impl ApiError {
    pub fn code(&self) -> ErrorCode {
        match self {
            ApiError::BadRequest(_) => ErrorCode::BadRequest,
            ApiError::Domain(DomainError::MenuNotFound(_)) => ErrorCode::MenuNotFound,
            ApiError::Domain(DomainError::SessionNotFound(_)) => ErrorCode::SessionNotFound,
            ApiError::Domain(DomainError::ValidationFailed(_)) => ErrorCode::ValidationFailed,
            ApiError::Domain(DomainError::StorageError(_)) => ErrorCode::StorageError,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let code = self.code();
        match &self {
            ApiError::Domain(DomainError::StorageError(msg)) => tracing::error!("Storage error: {}", msg),
            other => tracing::warn!("{:?}: {}", code, other),
        }

        let body = Json(ApiResponse::<()>::error(code, self.to_string()));
        (code.status(), body).into_response()
    }
}
