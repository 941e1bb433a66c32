// ============================================================================
// Menu Infrastructure - In-Memory Menu Repository
// File: crates/menu-infrastructure/src/memory/menu_repo_impl.rs
// ============================================================================

use async_trait::async_trait;
use dashmap::DashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tracing::{debug, info, warn};
use uuid::Uuid;

use menu_core::domain::{MenuDocument, MenuId};
use menu_core::error::DomainError;
use menu_core::repositories::MenuRepository;
use menu_shared::constants::MENU_ID_PREFIX;

use super::seed::sample_menu;

/// Thread-safe menu store kept in process memory.
/// Each save replaces the whole document under its id.
#[derive(Clone, Default)]
pub struct InMemoryMenuRepository {
    menus: Arc<DashMap<MenuId, MenuDocument>>,
    failing_saves: Arc<AtomicUsize>,
}

impl InMemoryMenuRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Repository holding the sample menu under `menu_sample`
    pub fn with_sample_menu() -> Self {
        let repo = Self::new();
        let menu = sample_menu();
        if let Some(id) = menu.id().cloned() {
            repo.menus.insert(id, menu);
        }
        info!("Seeded in-memory menu repository with sample menu");
        repo
    }

    /// Make the next `count` saves fail with a storage error
    pub fn fail_next_saves(&self, count: usize) {
        self.failing_saves.store(count, Ordering::SeqCst);
    }

    pub fn len(&self) -> usize {
        self.menus.len()
    }

    pub fn is_empty(&self) -> bool {
        self.menus.is_empty()
    }

    fn take_injected_failure(&self) -> bool {
        self.failing_saves
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |n| n.checked_sub(1))
            .is_ok()
    }
}

#[async_trait]
impl MenuRepository for InMemoryMenuRepository {
    async fn load(&self, id: &MenuId) -> Result<MenuDocument, DomainError> {
        let menu = self
            .menus
            .get(id)
            .map(|entry| entry.value().clone())
            .ok_or_else(|| DomainError::MenuNotFound(id.clone()))?;

        debug!("Loaded menu {} from memory", id);
        Ok(menu)
    }

    async fn save(&self, menu: &MenuDocument) -> Result<MenuDocument, DomainError> {
        if self.take_injected_failure() {
            warn!("Injected storage failure while saving menu {:?}", menu.id());
            return Err(DomainError::StorageError("in-memory store unavailable".to_string()));
        }

        if menu.name().trim().is_empty() {
            return Err(DomainError::ValidationFailed("Menu name is required".to_string()));
        }

        let id = match menu.id() {
            Some(id) => id.clone(),
            None => MenuId::from(format!("{}_{}", MENU_ID_PREFIX, Uuid::new_v4().simple())),
        };
        let persisted = menu.clone().with_id(id.clone());
        self.menus.insert(id.clone(), persisted.clone());

        info!("Stored menu {} in memory", id);
        Ok(persisted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use menu_shared::constants::SAMPLE_MENU_ID;

    fn draft(name: &str) -> MenuDocument {
        MenuDocument::hydrate(None, name.to_string(), String::new(), vec![])
    }

    #[tokio::test]
    async fn test_load_sample_menu() {
        let repo = InMemoryMenuRepository::with_sample_menu();
        let menu = repo.load(&MenuId::from(SAMPLE_MENU_ID)).await.unwrap();

        assert_eq!(menu.name(), "Sample Menu");
        assert_eq!(menu.categories().len(), 2);
        assert_eq!(menu.item_count(), 3);
        assert!(menu.check_structure().is_ok());
    }

    #[tokio::test]
    async fn test_load_unknown_menu() {
        let repo = InMemoryMenuRepository::new();
        let result = repo.load(&MenuId::from("menu_nope")).await;
        assert!(matches!(result, Err(DomainError::MenuNotFound(_))));
    }

    #[tokio::test]
    async fn test_save_assigns_id_once() {
        let repo = InMemoryMenuRepository::new();

        let saved = repo.save(&draft("Lunch")).await.unwrap();
        let id = saved.id().cloned().unwrap();
        assert!(id.as_str().starts_with("menu_"));

        let again = repo.save(&saved).await.unwrap();
        assert_eq!(again.id(), Some(&id));
        assert_eq!(repo.len(), 1);
        assert_eq!(repo.load(&id).await.unwrap(), again);
    }

    #[tokio::test]
    async fn test_save_rejects_empty_name() {
        let repo = InMemoryMenuRepository::new();
        let result = repo.save(&draft("")).await;
        assert!(matches!(result, Err(DomainError::ValidationFailed(_))));
        assert!(repo.is_empty());
    }

    #[tokio::test]
    async fn test_injected_failures_are_transient() {
        let repo = InMemoryMenuRepository::new();
        repo.fail_next_saves(1);

        let first = repo.save(&draft("Lunch")).await;
        assert!(matches!(first, Err(DomainError::StorageError(_))));
        assert!(repo.is_empty());

        assert!(repo.save(&draft("Lunch")).await.is_ok());
    }
}
