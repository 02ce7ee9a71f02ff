//! A single visitor's conversation session.

use crate::turn::Turn;
use chrono::{DateTime, Utc};
use motochat_core::SessionId;
use serde::{Deserialize, Serialize};

/// A conversation session: an identifier plus its ordered transcript.
///
/// Sessions are owned by the [`ConversationStore`](crate::store::ConversationStore);
/// turns are only ever appended, never rewritten or removed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    /// Unique session identifier.
    pub id: SessionId,
    /// Ordered transcript of turns.
    pub turns: Vec<Turn>,
    /// When the session was created.
    pub created_at: DateTime<Utc>,
    /// When the session last saw a transcript mutation.
    pub last_active_at: DateTime<Utc>,
}

impl Session {
    /// Creates a new, empty session.
    #[must_use]
    pub fn new(id: SessionId) -> Self {
        let now = Utc::now();
        Self {
            id,
            turns: Vec::new(),
            created_at: now,
            last_active_at: now,
        }
    }

    /// Appends a turn to the transcript.
    pub fn append(&mut self, turn: Turn) {
        self.turns.push(turn);
        self.last_active_at = Utc::now();
    }

    /// Returns the number of turns.
    #[must_use]
    pub fn turn_count(&self) -> usize {
        self.turns.len()
    }

    /// Returns true if the session has been idle since before the cutoff.
    #[must_use]
    pub fn idle_since(&self, cutoff: DateTime<Utc>) -> bool {
        self.last_active_at < cutoff
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::turn::{Part, Turn};
    use chrono::Duration;

    #[test]
    fn session_starts_empty() {
        let session = Session::new(SessionId::new());
        assert_eq!(session.turn_count(), 0);
        assert_eq!(session.created_at, session.last_active_at);
    }

    #[test]
    fn append_updates_last_active() {
        let mut session = Session::new(SessionId::new());
        let created = session.last_active_at;
        session.append(Turn::user(vec![Part::text("hola")]));
        assert_eq!(session.turn_count(), 1);
        assert!(session.last_active_at >= created);
    }

    #[test]
    fn idle_since_cutoff() {
        let session = Session::new(SessionId::new());
        let past = Utc::now() - Duration::minutes(5);
        let future = Utc::now() + Duration::minutes(5);
        assert!(!session.idle_since(past));
        assert!(session.idle_since(future));
    }
}
