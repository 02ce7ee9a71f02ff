//! Error types for the assistant crate.

use motochat_ai::BackendError;
use motochat_core::SessionId;
use std::fmt;

/// Errors from routing one inbound turn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouterError {
    /// The session id is unknown or already evicted. A client error; the
    /// HTTP layer answers 400, never a server fault.
    UnknownSession { id: SessionId },
    /// The generative backend failed; the visitor gets an apology.
    Backend { source: BackendError },
}

impl fmt::Display for RouterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownSession { id } => write!(f, "unknown session: {id}"),
            Self::Backend { source } => write!(f, "generative backend failed: {source}"),
        }
    }
}

impl std::error::Error for RouterError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::UnknownSession { .. } => None,
            Self::Backend { source } => Some(source),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_session_display() {
        let id = SessionId::new();
        let err = RouterError::UnknownSession { id };
        assert!(err.to_string().contains("unknown session"));
    }

    #[test]
    fn backend_error_keeps_source() {
        let err = RouterError::Backend {
            source: BackendError::Timeout,
        };
        assert!(std::error::Error::source(&err).is_some());
    }
}
