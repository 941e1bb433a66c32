use std::sync::Arc;

use menu_core::repositories::MenuRepository;
use menu_core::services::MenuEditorService;
use menu_shared::config::AppConfig;

use crate::sessions::SessionStore;

#[derive(Clone)]
pub struct AppState {
    pub editor: Arc<MenuEditorService<dyn MenuRepository>>,
    pub sessions: Arc<SessionStore>,
    pub config: AppConfig,
}

impl AppState {
    pub fn new(editor: Arc<MenuEditorService<dyn MenuRepository>>, config: AppConfig) -> Self {
        Self {
            editor,
            sessions: Arc::new(SessionStore::new(config.editor.session_ttl())),
            config,
        }
    }
}
