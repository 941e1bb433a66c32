//! Request and response payloads for the editor endpoints

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use menu_core::domain::{MenuDocument, MenuId};
use menu_core::services::{EditorSession, IntentOutcome};

/// Open session request. No `menu_id` starts a brand-new menu.
#[derive(Debug, Default, Deserialize)]
pub struct OpenSessionRequest {
    #[serde(default)]
    pub menu_id: Option<MenuId>,
}

/// Current state of one editing session
#[derive(Debug, Serialize)]
pub struct SessionSnapshot {
    pub session_id: Uuid,
    pub is_new: bool,
    pub revision: u64,
    pub can_remove_category: bool,
    pub menu: MenuDocument,
}

impl SessionSnapshot {
    pub fn from_session(session_id: Uuid, session: &EditorSession) -> Self {
        Self {
            session_id,
            is_new: session.is_new(),
            revision: session.revision(),
            can_remove_category: session.can_remove_category(),
            menu: session.document().clone(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct IntentResponse {
    #[serde(flatten)]
    pub outcome: IntentOutcome,
    pub session: SessionSnapshot,
}
