// ============================================================================
// Menu API - Session Store
// File: crates/menu-api/src/sessions.rs
// Description: Open editing sessions with idle expiry
// ============================================================================

use dashmap::{mapref::one::RefMut, DashMap};
use std::time::Duration;
use tracing::{debug, info};
use uuid::Uuid;

use menu_core::services::EditorSession;

/// Open editing sessions keyed by session id.
///
/// A session idle for longer than `ttl` is dropped on its next access, and
/// [`SessionStore::cleanup_expired`] sweeps the ones nobody comes back to.
#[derive(Debug)]
pub struct SessionStore {
    sessions: DashMap<Uuid, EditorSession>,
    ttl: Duration,
}

impl SessionStore {
    pub fn new(ttl: Duration) -> Self {
        Self {
            sessions: DashMap::new(),
            ttl,
        }
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Register a freshly opened session, sweeping expired ones first
    pub fn insert(&self, session_id: Uuid, session: EditorSession) {
        self.cleanup_expired();
        self.sessions.insert(session_id, session);
        debug!("Stored editor session {} ({} open)", session_id, self.sessions.len());
    }

    /// Live session for `session_id`, marked as touched.
    /// Returns None if not found or expired
    pub fn get_mut(&self, session_id: &Uuid) -> Option<RefMut<'_, Uuid, EditorSession>> {
        let mut entry = self.sessions.get_mut(session_id)?;

        // Lazy deletion
        if entry.is_expired(self.ttl) {
            drop(entry);
            let ttl = self.ttl;
            self.sessions.remove_if(session_id, |_, session| session.is_expired(ttl));
            debug!("Editor session {} expired, removed from store", session_id);
            return None;
        }

        entry.touch();
        Some(entry)
    }

    pub fn remove(&self, session_id: &Uuid) -> Option<EditorSession> {
        self.sessions.remove(session_id).map(|(_, session)| session)
    }

    /// Drop every expired session, returning how many went
    pub fn cleanup_expired(&self) -> usize {
        let start_len = self.sessions.len();
        let ttl = self.ttl;
        self.sessions.retain(|_, session| !session.is_expired(ttl));

        let count = start_len.saturating_sub(self.sessions.len());
        if count > 0 {
            info!("Discarded {} idle editor sessions", count);
        }
        count
    }

    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }
}
