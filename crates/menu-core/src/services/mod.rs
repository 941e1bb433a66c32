//! Domain services (editing sessions and save flow)

pub mod editor_session;
pub mod menu_editor_service;

pub use editor_session::{EditorSession, IntentOutcome};
pub use menu_editor_service::MenuEditorService;
