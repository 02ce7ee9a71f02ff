//! Error types for the AI crate.

use std::fmt;

/// Errors from generative backend operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BackendError {
    /// Request failed to reach the service.
    RequestFailed { reason: String },
    /// Response parsing failed.
    ResponseParseFailed { reason: String },
    /// Timeout waiting for a response.
    Timeout,
    /// Rate limit or quota exceeded.
    RateLimited { retry_after_secs: Option<u64> },
    /// The API key was rejected.
    Unauthorized,
    /// Invalid configuration.
    InvalidConfig { reason: String },
}

impl fmt::Display for BackendError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::RequestFailed { reason } => {
                write!(f, "backend request failed: {reason}")
            }
            Self::ResponseParseFailed { reason } => {
                write!(f, "failed to parse backend response: {reason}")
            }
            Self::Timeout => write!(f, "backend request timed out"),
            Self::RateLimited { retry_after_secs } => {
                if let Some(secs) = retry_after_secs {
                    write!(f, "rate limited, retry after {secs}s")
                } else {
                    write!(f, "rate limited")
                }
            }
            Self::Unauthorized => write!(f, "backend rejected the API key"),
            Self::InvalidConfig { reason } => {
                write!(f, "invalid backend configuration: {reason}")
            }
        }
    }
}

impl std::error::Error for BackendError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_failed_display() {
        let err = BackendError::RequestFailed {
            reason: "connection refused".to_string(),
        };
        assert!(err.to_string().contains("connection refused"));
    }

    #[test]
    fn rate_limited_display() {
        let err = BackendError::RateLimited {
            retry_after_secs: Some(30),
        };
        assert!(err.to_string().contains("30s"));
    }
}
