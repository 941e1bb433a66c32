// ============================================================================
// Menu Core - Editor Session
// File: crates/menu-core/src/services/editor_session.rs
// Description: Owner of the current menu document during one editing session
// ============================================================================

use serde::Serialize;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::debug;

use crate::domain::MenuDocument;
use crate::engine::{apply_intent, CreatedEntity, IdGenerator, Intent};

/// Holds the current document value and threads it through the engine.
///
/// Earlier values are never touched, so a caller may keep any snapshot it
/// took via [`EditorSession::document`].
#[derive(Debug, Clone)]
pub struct EditorSession {
    document: MenuDocument,
    ids: Arc<dyn IdGenerator>,
    is_new: bool,
    revision: u64,
    last_touched: Instant,
}

/// What one applied intent did
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IntentOutcome {
    pub changed: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created: Option<CreatedEntity>,
}

impl EditorSession {
    pub fn new(document: MenuDocument, ids: Arc<dyn IdGenerator>) -> Self {
        let is_new = document.is_new();
        Self {
            document,
            ids,
            is_new,
            revision: 0,
            last_touched: Instant::now(),
        }
    }

    pub fn document(&self) -> &MenuDocument {
        &self.document
    }

    /// Opened on a menu that has never been saved
    pub fn is_new(&self) -> bool {
        self.is_new
    }

    /// Bumped on every intent that changed the document
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Screen policy: the last category cannot be deleted from the editor.
    /// The engine itself accepts an empty menu.
    pub fn can_remove_category(&self) -> bool {
        self.document.categories().len() > 1
    }

    /// Mark the session as in use now
    pub fn touch(&mut self) {
        self.last_touched = Instant::now();
    }

    /// Idle for longer than `ttl`
    pub fn is_expired(&self, ttl: Duration) -> bool {
        self.last_touched.elapsed() > ttl
    }

    pub fn apply(&mut self, intent: Intent) -> IntentOutcome {
        let name = intent.name();
        let applied = apply_intent(&self.document, intent, self.ids.as_ref());

        if applied.changed {
            self.document = applied.document;
            self.revision += 1;
        }
        debug!(intent = name, changed = applied.changed, revision = self.revision, "Applied intent");

        IntentOutcome {
            changed: applied.changed,
            created: applied.created,
        }
    }

    /// Take over the result of a save started at revision `saved_at`.
    ///
    /// If nothing changed since, the persisted document replaces the local
    /// one. Otherwise only the assigned id is adopted so edits made while
    /// the save was pending survive.
    pub fn adopt_saved(&mut self, saved: MenuDocument, saved_at: u64) {
        if self.revision == saved_at {
            self.document = saved;
        } else if let Some(id) = saved.id() {
            self.document = self.document.clone().with_id(id.clone());
        }
        self.is_new = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::MenuId;
    use crate::engine::{seeded_document, Direction, ItemEdit, MenuEdit, SequentialIdGenerator};

    fn new_session() -> EditorSession {
        let ids: Arc<dyn IdGenerator> = Arc::new(SequentialIdGenerator::new());
        let document = seeded_document(ids.as_ref());
        EditorSession::new(document, ids)
    }

    #[test]
    fn test_new_session_is_seeded() {
        let session = new_session();
        assert!(session.is_new());
        assert_eq!(session.revision(), 0);
        assert_eq!(session.document().categories().len(), 1);
        assert!(!session.can_remove_category());
    }

    #[test]
    fn test_apply_bumps_revision_only_on_change() {
        let mut session = new_session();
        let category_id = session.document().categories()[0].id().clone();

        let outcome = session.apply(Intent::MoveCategory { category_id, direction: Direction::Up });
        assert!(!outcome.changed);
        assert_eq!(session.revision(), 0);

        let outcome = session.apply(Intent::AddCategory);
        assert!(outcome.changed);
        assert!(matches!(outcome.created, Some(CreatedEntity::Category { .. })));
        assert_eq!(session.revision(), 1);
        assert!(session.can_remove_category());
    }

    #[test]
    fn test_snapshots_stay_intact() {
        let mut session = new_session();
        let snapshot = session.document().clone();

        session.apply(Intent::SetMenuField { edit: MenuEdit::Name("Brunch".into()) });
        assert_eq!(snapshot.name(), "");
        assert_eq!(session.document().name(), "Brunch");
    }

    #[test]
    fn test_idle_session_expires() {
        let mut session = new_session();
        assert!(!session.is_expired(Duration::from_secs(60)));

        std::thread::sleep(Duration::from_millis(5));
        assert!(session.is_expired(Duration::from_millis(1)));

        session.touch();
        assert!(!session.is_expired(Duration::from_secs(60)));
    }

    #[test]
    fn test_adopt_saved_replaces_when_unchanged() {
        let mut session = new_session();
        session.apply(Intent::SetMenuField { edit: MenuEdit::Name("Brunch".into()) });

        let saved = session.document().clone().with_id(MenuId::from("menu_1"));
        session.adopt_saved(saved.clone(), session.revision());

        assert!(!session.is_new());
        assert_eq!(session.document(), &saved);
    }

    #[test]
    fn test_adopt_saved_keeps_pending_edits() {
        let mut session = new_session();
        let category_id = session.document().categories()[0].id().clone();
        let saved_at = session.revision();
        let saved = session.document().clone().with_id(MenuId::from("menu_1"));

        let outcome = session.apply(Intent::AddItem { category_id: category_id.clone() });
        let Some(CreatedEntity::Item { item_id, .. }) = outcome.created else {
            panic!("expected a created item");
        };
        session.apply(Intent::SetItemField {
            category_id: category_id.clone(),
            item_id: item_id.clone(),
            edit: ItemEdit::Price("3.50".into()),
        });

        session.adopt_saved(saved, saved_at);
        assert_eq!(session.document().id().map(|id| id.as_str()), Some("menu_1"));
        assert_eq!(session.document().item(&category_id, &item_id).unwrap().price(), "3.50");
    }
}
