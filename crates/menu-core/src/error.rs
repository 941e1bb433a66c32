//! Domain errors

use thiserror::Error;
use uuid::Uuid;

use crate::domain::MenuId;

#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Menu not found: {0}")]
    MenuNotFound(MenuId),

    #[error("Editor session not found: {0}")]
    SessionNotFound(Uuid),

    #[error("Validation failed: {0}")]
    ValidationFailed(String),

    #[error("Storage error: {0}")]
    StorageError(String),
}

impl DomainError {
    /// Storage failures leave the editing session intact and may be retried
    pub fn is_retryable(&self) -> bool {
        matches!(self, DomainError::StorageError(_))
    }
}
