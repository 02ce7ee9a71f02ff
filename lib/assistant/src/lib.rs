//! The session-scoped message router for the motochat assistant.
//!
//! This crate provides:
//!
//! - **Classification**: a total function from message text to one of the
//!   two reply routes
//! - **Message router**: validates the session, dispatches to the catalog
//!   or the generative backend, and folds the exchange into history
//! - **Reply texts**: the Spanish-language replies the visitor sees

pub mod classify;
pub mod error;
pub mod reply;
pub mod router;

pub use classify::{Route, classify};
pub use error::RouterError;
pub use router::MessageRouter;
