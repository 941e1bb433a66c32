// ============================================================================
// Menu API - Editor Handlers
// File: crates/menu-api/src/handlers/editor.rs
// ============================================================================
//! Editing session handlers (open, inspect, apply intent, save, discard)

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    Json,
};
use tracing::info;
use uuid::Uuid;

use menu_core::domain::MenuDocument;
use menu_core::engine::Intent;
use menu_core::services::EditorSession;
use menu_core::DomainError;

use crate::dto::{IntentResponse, OpenSessionRequest, SessionSnapshot};
use crate::error::ApiError;
use crate::response::ApiResponse;
use crate::sessions::SessionStore;
use crate::state::AppState;

type ApiResult<T> = Result<Json<ApiResponse<T>>, ApiError>;

/// Open session - POST /api/v1/editor/sessions
pub async fn open_session(
    State(state): State<AppState>,
    payload: Result<Json<OpenSessionRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<ApiResponse<SessionSnapshot>>), ApiError> {
    let Json(request) = payload.map_err(|e| ApiError::BadRequest(e.body_text()))?;

    let session = match &request.menu_id {
        Some(menu_id) => state.editor.open(menu_id).await?,
        None => state.editor.open_new(),
    };

    let session_id = Uuid::new_v4();
    let snapshot = SessionSnapshot::from_session(session_id, &session);
    state.sessions.insert(session_id, session);

    info!("Editor session {} opened (menu: {:?})", session_id, request.menu_id);
    Ok((StatusCode::CREATED, Json(ApiResponse::success(snapshot))))
}

/// Session snapshot - GET /api/v1/editor/sessions/{session_id}
pub async fn get_session(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
) -> ApiResult<SessionSnapshot> {
    let session = state
        .sessions
        .get_mut(&session_id)
        .ok_or(DomainError::SessionNotFound(session_id))?;

    Ok(Json(ApiResponse::success(SessionSnapshot::from_session(session_id, &session))))
}

/// Apply intent - POST /api/v1/editor/sessions/{session_id}/intents
pub async fn apply_intent(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
    payload: Result<Json<Intent>, JsonRejection>,
) -> ApiResult<IntentResponse> {
    let Json(intent) = payload.map_err(|e| ApiError::BadRequest(e.body_text()))?;

    let mut session = state
        .sessions
        .get_mut(&session_id)
        .ok_or(DomainError::SessionNotFound(session_id))?;

    let outcome = session.apply(intent);
    let snapshot = SessionSnapshot::from_session(session_id, &session);

    Ok(Json(ApiResponse::success(IntentResponse {
        outcome,
        session: snapshot,
    })))
}

/// Save - POST /api/v1/editor/sessions/{session_id}/save
///
/// The session entry is released while the repository call is pending, so
/// intents keep flowing; see `EditorSession::adopt_saved` for how the two
/// are reconciled.
pub async fn save_session(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
) -> ApiResult<SessionSnapshot> {
    let detached = state
        .sessions
        .get_mut(&session_id)
        .map(|session| session.value().clone())
        .ok_or(DomainError::SessionNotFound(session_id))?;
    let saved_at = detached.revision();

    let saved = state.editor.save_document(detached.document()).await?;

    let snapshot = settle_save(&state.sessions, session_id, detached, saved, saved_at);
    Ok(Json(ApiResponse::success(snapshot)))
}

/// Hand a finished save back to its session.
///
/// The menu is already stored at this point. If the session was closed or
/// expired meanwhile, the copy taken when the save started is settled
/// instead and reported, so the caller still learns the persisted id.
fn settle_save(
    sessions: &SessionStore,
    session_id: Uuid,
    mut detached: EditorSession,
    saved: MenuDocument,
    saved_at: u64,
) -> SessionSnapshot {
    match sessions.get_mut(&session_id) {
        Some(mut session) => {
            session.adopt_saved(saved, saved_at);
            SessionSnapshot::from_session(session_id, &session)
        }
        None => {
            info!(
                "Editor session {} ended while saving; menu {:?} was stored, returning the saved snapshot",
                session_id,
                saved.id()
            );
            detached.adopt_saved(saved, saved_at);
            SessionSnapshot::from_session(session_id, &detached)
        }
    }
}

/// Discard - DELETE /api/v1/editor/sessions/{session_id}
pub async fn close_session(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    state
        .sessions
        .remove(&session_id)
        .ok_or(DomainError::SessionNotFound(session_id))?;

    info!("Editor session {} closed", session_id);
    Ok(StatusCode::NO_CONTENT)
}
