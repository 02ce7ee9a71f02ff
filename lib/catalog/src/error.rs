//! Error types for the catalog crate.

use std::fmt;

/// Errors from catalog lookups.
///
/// Callers downgrade these to an apology reply; a lookup fault must never
/// surface to the visitor as a raw error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    /// The backing store is unavailable.
    StorageFailed { reason: String },
    /// A search query failed to execute.
    QueryFailed { reason: String },
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::StorageFailed { reason } => {
                write!(f, "catalog storage failed: {reason}")
            }
            Self::QueryFailed { reason } => {
                write!(f, "catalog query failed: {reason}")
            }
        }
    }
}

impl std::error::Error for CatalogError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn storage_error_display() {
        let err = CatalogError::StorageFailed {
            reason: "database locked".to_string(),
        };
        assert!(err.to_string().contains("database locked"));
    }
}
