// ============================================================================
// Menu Core - Menu Editor Service
// File: crates/menu-core/src/services/menu_editor_service.rs
// ============================================================================
//! Opens editing sessions and runs the explicit save flow

use std::sync::Arc;
use tracing::{info, warn, error};
use validator::Validate;

use super::editor_session::EditorSession;
use crate::domain::{MenuDocument, MenuId};
use crate::engine::{seeded_document, IdGenerator};
use crate::error::DomainError;
use crate::repositories::MenuRepository;

/// Menu editor service bound to one persistence adapter
pub struct MenuEditorService<R: MenuRepository + ?Sized> {
    menu_repo: Arc<R>,
    ids: Arc<dyn IdGenerator>,
}

impl<R: MenuRepository + ?Sized> MenuEditorService<R> {
    pub fn new(menu_repo: Arc<R>, ids: Arc<dyn IdGenerator>) -> Self {
        Self { menu_repo, ids }
    }

    /// Session over a brand-new menu with one empty category
    pub fn open_new(&self) -> EditorSession {
        let document = seeded_document(self.ids.as_ref());
        info!("Opened editor on a new menu");
        EditorSession::new(document, self.ids.clone())
    }

    /// Session over an existing menu
    pub async fn open(&self, menu_id: &MenuId) -> Result<EditorSession, DomainError> {
        info!("Loading menu {} for editing", menu_id);

        let document = self.menu_repo.load(menu_id).await.map_err(|e| {
            warn!("Failed to load menu {}: {}", menu_id, e);
            e
        })?;

        if let Err(violation) = document.check_structure() {
            // Still editable; save will refuse it until the clash is removed
            warn!("Menu {} loaded with structural problem: {}", menu_id, violation);
        }

        Ok(EditorSession::new(document, self.ids.clone()))
    }

    /// Save-time checks: unique ids, a non-blank name, parseable prices.
    /// An empty category list is accepted.
    pub fn validate(&self, document: &MenuDocument) -> Result<(), DomainError> {
        document
            .check_structure()
            .map_err(|e| DomainError::ValidationFailed(e.to_string()))?;
        document
            .validate()
            .map_err(|e| DomainError::ValidationFailed(e.to_string()))?;
        Ok(())
    }

    /// Validate and persist a document snapshot. Calls the repository at
    /// most once.
    pub async fn save_document(&self, document: &MenuDocument) -> Result<MenuDocument, DomainError> {
        if let Err(e) = self.validate(document) {
            warn!("Save rejected: {}", e);
            return Err(e);
        }

        let saved = self.menu_repo.save(document).await.map_err(|e| {
            error!("Failed to save menu {:?}: {}", document.id(), e);
            e
        })?;

        info!(
            "Menu saved: {} ({} categories, {} items)",
            saved.id().map(MenuId::as_str).unwrap_or("<unassigned>"),
            saved.categories().len(),
            saved.item_count()
        );
        Ok(saved)
    }

    /// Save the session's current document.
    ///
    /// On success the persisted value supersedes the session document; on
    /// any error the session is left exactly as it was, so a retry is safe.
    pub async fn save<'s>(&self, session: &'s mut EditorSession) -> Result<&'s MenuDocument, DomainError> {
        let saved_at = session.revision();
        let saved = self.save_document(session.document()).await?;
        session.adopt_saved(saved, saved_at);
        Ok(session.document())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::{CreatedEntity, Intent, ItemEdit, MenuEdit, SequentialIdGenerator};
    use crate::repositories::MockMenuRepository;
    use crate::domain::{Category, CategoryId, Item, ItemId};
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn service(repo: MockMenuRepository) -> MenuEditorService<MockMenuRepository> {
        MenuEditorService::new(Arc::new(repo), Arc::new(SequentialIdGenerator::new()))
    }

    fn stored_menu() -> MenuDocument {
        MenuDocument::hydrate(
            Some(MenuId::from("menu_42")),
            "Sample Menu".to_string(),
            String::new(),
            vec![Category::new(
                CategoryId::from("cat_1"),
                "Appetizers".to_string(),
                String::new(),
                vec![Item::new(
                    ItemId::from("item_1"),
                    "Garlic Bread".to_string(),
                    String::new(),
                    "5.99".to_string(),
                    None,
                )],
            )],
        )
    }

    fn rename(session: &mut EditorSession, name: &str) {
        session.apply(Intent::SetMenuField { edit: MenuEdit::Name(name.to_string()) });
    }

    #[test]
    fn test_open_new_seeds_document() {
        let service = service(MockMenuRepository::new());
        let session = service.open_new();

        assert!(session.is_new());
        assert_eq!(session.document().categories().len(), 1);
        assert_eq!(session.document().categories()[0].name(), "New Category");
    }

    #[tokio::test]
    async fn test_open_loads_existing_menu() {
        let mut repo = MockMenuRepository::new();
        repo.expect_load()
            .withf(|id| id.as_str() == "menu_42")
            .times(1)
            .returning(|_| Ok(stored_menu()));

        let session = service(repo).open(&MenuId::from("menu_42")).await.unwrap();
        assert!(!session.is_new());
        assert_eq!(session.document(), &stored_menu());
    }

    #[tokio::test]
    async fn test_open_unknown_menu() {
        let mut repo = MockMenuRepository::new();
        repo.expect_load()
            .returning(|id| Err(DomainError::MenuNotFound(id.clone())));

        let result = service(repo).open(&MenuId::from("missing")).await;
        assert!(matches!(result, Err(DomainError::MenuNotFound(_))));
    }

    #[tokio::test]
    async fn test_save_rejects_blank_name_without_persisting() {
        let mut repo = MockMenuRepository::new();
        repo.expect_save().times(0);
        let service = service(repo);

        let mut session = service.open_new();
        rename(&mut session, "   ");
        let before = session.document().clone();

        let result = service.save(&mut session).await;
        assert!(matches!(result, Err(DomainError::ValidationFailed(_))));
        assert_eq!(session.document(), &before);
        assert!(session.is_new());
    }

    #[tokio::test]
    async fn test_save_rejects_unparseable_price() {
        let mut repo = MockMenuRepository::new();
        repo.expect_save().times(0);
        let service = service(repo);

        let mut session = service.open_new();
        rename(&mut session, "Lunch");
        let category_id = session.document().categories()[0].id().clone();
        let outcome = session.apply(Intent::AddItem { category_id: category_id.clone() });
        let Some(CreatedEntity::Item { item_id, .. }) = outcome.created else {
            panic!("expected a created item");
        };
        session.apply(Intent::SetItemField {
            category_id,
            item_id,
            edit: ItemEdit::Price("-2".to_string()),
        });

        let result = service.save(&mut session).await;
        assert!(matches!(result, Err(DomainError::ValidationFailed(_))));
    }

    #[tokio::test]
    async fn test_save_accepts_menu_without_categories() {
        let mut repo = MockMenuRepository::new();
        repo.expect_save()
            .times(1)
            .returning(|menu| Ok(menu.clone().with_id(MenuId::from("menu_1"))));
        let service = service(repo);

        let mut session = service.open_new();
        rename(&mut session, "Drinks");
        let category_id = session.document().categories()[0].id().clone();
        session.apply(Intent::RemoveCategory { category_id });

        let saved = service.save(&mut session).await.unwrap();
        assert!(saved.categories().is_empty());
    }

    #[tokio::test]
    async fn test_first_save_assigns_id() {
        let mut repo = MockMenuRepository::new();
        repo.expect_save()
            .times(2)
            .returning(|menu| {
                let id = menu.id().cloned().unwrap_or_else(|| MenuId::from("menu_new"));
                Ok(menu.clone().with_id(id))
            });
        let service = service(repo);

        let mut session = service.open_new();
        rename(&mut session, "Lunch");

        let saved = service.save(&mut session).await.unwrap();
        assert_eq!(saved.id().map(MenuId::as_str), Some("menu_new"));
        assert!(!session.is_new());

        rename(&mut session, "Late Lunch");
        let saved = service.save(&mut session).await.unwrap();
        assert_eq!(saved.id().map(MenuId::as_str), Some("menu_new"));
        assert_eq!(saved.name(), "Late Lunch");
    }

    #[tokio::test]
    async fn test_storage_error_keeps_session_and_retry_succeeds() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = calls.clone();

        let mut repo = MockMenuRepository::new();
        repo.expect_save()
            .times(2)
            .returning(move |menu| {
                if counter.fetch_add(1, Ordering::SeqCst) == 0 {
                    Err(DomainError::StorageError("connection reset".to_string()))
                } else {
                    Ok(menu.clone().with_id(MenuId::from("menu_7")))
                }
            });
        let service = service(repo);

        let mut session = service.open_new();
        rename(&mut session, "Lunch");
        let before = session.document().clone();
        let revision = session.revision();

        let err = service.save(&mut session).await.unwrap_err();
        assert!(err.is_retryable());
        assert_eq!(session.document(), &before);
        assert_eq!(session.revision(), revision);
        assert!(session.is_new());

        let saved = service.save(&mut session).await.unwrap();
        assert_eq!(saved.id().map(MenuId::as_str), Some("menu_7"));
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_save_refuses_duplicate_ids() {
        let mut repo = MockMenuRepository::new();
        repo.expect_save().times(0);
        let service = service(repo);

        let duplicate = Category::new(CategoryId::from("cat_1"), "Again".into(), String::new(), vec![]);
        let mut categories = stored_menu().categories().to_vec();
        categories.push(duplicate);
        let document = MenuDocument::hydrate(None, "Broken".into(), String::new(), categories);

        let result = service.save_document(&document).await;
        assert!(matches!(result, Err(DomainError::ValidationFailed(_))));
    }
}
