//! The process-wide conversation store.
//!
//! The store maps session identifiers to their transcripts. It replaces the
//! bare shared map a naive implementation would use with an explicit
//! registry: a read/write-locked map whose entries each carry their own
//! lock, so appends for one session are serialized without blocking other
//! sessions.

use crate::error::SessionError;
use crate::session::Session;
use crate::turn::Turn;
use chrono::{Duration, Utc};
use motochat_core::SessionId;
use std::collections::HashMap;
use std::sync::{Arc, Mutex, RwLock};

/// Holds, per session identifier, an ordered transcript of turns.
///
/// Turns are append-only. A user/assistant exchange is appended under a
/// single per-session lock, so two requests racing on the same session can
/// never interleave half-exchanges in the transcript.
#[derive(Debug, Default)]
pub struct ConversationStore {
    sessions: RwLock<HashMap<SessionId, Arc<Mutex<Session>>>>,
}

impl ConversationStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers an empty session under the given identifier.
    pub fn register(&self, id: SessionId) {
        let mut sessions = self.sessions.write().unwrap();
        sessions.insert(id, Arc::new(Mutex::new(Session::new(id))));
    }

    /// Returns a snapshot of the session's transcript, or `None` if the
    /// identifier is unknown or already evicted.
    #[must_use]
    pub fn get(&self, id: SessionId) -> Option<Vec<Turn>> {
        let entry = self.entry(id)?;
        let session = entry.lock().unwrap();
        Some(session.turns.clone())
    }

    /// Returns true if the identifier maps to a live session.
    #[must_use]
    pub fn contains(&self, id: SessionId) -> bool {
        let sessions = self.sessions.read().unwrap();
        sessions.contains_key(&id)
    }

    /// Appends a single turn to a session's transcript.
    pub fn append(&self, id: SessionId, turn: Turn) -> Result<(), SessionError> {
        let entry = self.entry(id).ok_or(SessionError::NotFound { id })?;
        let mut session = entry.lock().unwrap();
        session.append(turn);
        Ok(())
    }

    /// Appends a user turn and its paired assistant turn, in that order,
    /// under one lock.
    pub fn append_exchange(
        &self,
        id: SessionId,
        user_turn: Turn,
        assistant_turn: Turn,
    ) -> Result<(), SessionError> {
        let entry = self.entry(id).ok_or(SessionError::NotFound { id })?;
        let mut session = entry.lock().unwrap();
        session.append(user_turn);
        session.append(assistant_turn);
        Ok(())
    }

    /// Evicts every session that has been idle longer than `max_idle`.
    ///
    /// Returns the number of sessions removed.
    pub fn remove_idle(&self, max_idle: Duration) -> usize {
        let cutoff = Utc::now() - max_idle;
        let mut sessions = self.sessions.write().unwrap();
        let before = sessions.len();
        sessions.retain(|_, entry| {
            let session = entry.lock().unwrap();
            !session.idle_since(cutoff)
        });
        before - sessions.len()
    }

    /// Returns the number of live sessions.
    #[must_use]
    pub fn len(&self) -> usize {
        let sessions = self.sessions.read().unwrap();
        sessions.len()
    }

    /// Returns true if no sessions are live.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn entry(&self, id: SessionId) -> Option<Arc<Mutex<Session>>> {
        let sessions = self.sessions.read().unwrap();
        sessions.get(&id).cloned()
    }

    /// Rewinds a session's activity clock. Test hook for eviction.
    #[cfg(test)]
    fn backdate(&self, id: SessionId, minutes: i64) {
        let entry = self.entry(id).expect("session should exist");
        let mut session = entry.lock().unwrap();
        session.last_active_at = Utc::now() - Duration::minutes(minutes);
    }
}
