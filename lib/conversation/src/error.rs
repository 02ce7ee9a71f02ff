//! Error types for the conversation crate.

use motochat_core::SessionId;
use std::fmt;

/// Errors from session store operations.
///
/// An unknown identifier is a client-correctable condition, never a server
/// fault; callers surface it as an invalid-session reply.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    /// Session not found (unknown id, or already evicted).
    NotFound { id: SessionId },
}

impl fmt::Display for SessionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotFound { id } => write!(f, "session not found: {id}"),
        }
    }
}

impl std::error::Error for SessionError {}
