//! Session lifecycle: identifier allocation.
//!
//! Identifiers are ULIDs, so they are unguessable and never reused for the
//! lifetime of the process. Expiry is the store's concern
//! ([`ConversationStore::remove_idle`](crate::store::ConversationStore::remove_idle));
//! there is no destroy operation on the public surface.

use crate::store::ConversationStore;
use motochat_core::SessionId;
use std::sync::Arc;

/// Allocates new session identifiers and registers their empty transcripts.
#[derive(Debug, Clone)]
pub struct SessionLifecycle {
    store: Arc<ConversationStore>,
}

impl SessionLifecycle {
    /// Creates a lifecycle bound to a store.
    #[must_use]
    pub fn new(store: Arc<ConversationStore>) -> Self {
        Self { store }
    }

    /// Allocates a fresh session id and registers an empty transcript for it.
    ///
    /// Infallible; the only side effect is the new store entry.
    #[must_use]
    pub fn create_session(&self) -> SessionId {
        let id = SessionId::new();
        self.store.register(id);
        tracing::debug!(session_id = %id, "session created");
        id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_session_registers_empty_transcript() {
        let store = Arc::new(ConversationStore::new());
        let lifecycle = SessionLifecycle::new(store.clone());

        let id = lifecycle.create_session();

        assert_eq!(store.get(id), Some(Vec::new()));
    }

    #[test]
    fn created_ids_are_distinct() {
        let store = Arc::new(ConversationStore::new());
        let lifecycle = SessionLifecycle::new(store.clone());

        let a = lifecycle.create_session();
        let b = lifecycle.create_session();

        assert_ne!(a, b);
        assert_eq!(store.len(), 2);
    }
}
