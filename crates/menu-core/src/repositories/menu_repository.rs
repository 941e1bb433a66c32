//! Menu persistence port

use async_trait::async_trait;
use crate::domain::{MenuDocument, MenuId};
use crate::error::DomainError;

/// Load/save boundary for menu documents.
///
/// `save` assigns an id when the document has none and returns the
/// persisted value. Implementations report an empty name as
/// `ValidationFailed` and backend trouble as `StorageError`.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MenuRepository: Send + Sync {
    async fn load(&self, id: &MenuId) -> Result<MenuDocument, DomainError>;
    async fn save(&self, menu: &MenuDocument) -> Result<MenuDocument, DomainError>;
}
