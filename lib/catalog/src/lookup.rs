//! The catalog lookup contract.

use crate::error::CatalogError;
use crate::product::ProductRecord;
use async_trait::async_trait;
use serde::Deserialize;

/// Looks up at most one product for a free-text query.
///
/// Implementations normalize the query with
/// [`clean_query`](crate::query::clean_query) and match it as a
/// case-insensitive substring of product names, returning the first match
/// in catalog order. First-match, not best-match, is the contract.
#[async_trait]
pub trait CatalogLookup: Send + Sync {
    /// Searches the catalog.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing store cannot be consulted.
    async fn search(&self, raw_query: &str) -> Result<Option<ProductRecord>, CatalogError>;
}

/// Which catalog variant to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CatalogKind {
    /// SQLite-backed store.
    #[default]
    Sql,
    /// In-memory demo catalog.
    Memory,
}

/// Catalog configuration.
///
/// The router only ever sees the [`CatalogLookup`] trait; the variant is
/// chosen here, at the edge.
#[derive(Debug, Clone, Deserialize)]
pub struct CatalogConfig {
    /// Which variant to run.
    #[serde(default)]
    pub kind: CatalogKind,
    /// Database URL for the `sql` variant.
    #[serde(default = "default_database_url")]
    pub database_url: String,
}

fn default_database_url() -> String {
    "sqlite:motochat.db".to_string()
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            kind: CatalogKind::default(),
            database_url: default_database_url(),
        }
    }
}
