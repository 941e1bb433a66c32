//! Router assembly

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::trace::TraceLayer;

use crate::handlers::{editor, health};
use crate::state::AppState;

pub fn router(state: AppState) -> Router {
    Router::new()
        // Health check
        .route("/health", get(health::health_check))
        // Editor sessions
        .route("/api/v1/editor/sessions", post(editor::open_session))
        .route(
            "/api/v1/editor/sessions/{session_id}",
            get(editor::get_session).delete(editor::close_session),
        )
        .route("/api/v1/editor/sessions/{session_id}/intents", post(editor::apply_intent))
        .route("/api/v1/editor/sessions/{session_id}/save", post(editor::save_session))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}
