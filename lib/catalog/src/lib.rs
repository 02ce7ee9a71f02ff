//! Product catalog lookup for the motochat assistant.
//!
//! This crate provides:
//!
//! - **Query normalization**: the trigger-word stripping contract shared
//!   with the message router's classifier
//! - **Lookup trait**: `search(query) -> record | not found`, with variant
//!   implementations selected by configuration
//! - **Variants**: a SQLite-backed store and an in-memory catalog

pub mod error;
pub mod lookup;
pub mod memory;
pub mod product;
pub mod query;
pub mod sql;

pub use error::CatalogError;
pub use lookup::{CatalogConfig, CatalogKind, CatalogLookup};
pub use memory::MemoryCatalog;
pub use product::ProductRecord;
pub use query::{TRIGGER_WORDS, clean_query, contains_trigger};
pub use sql::SqlCatalog;
