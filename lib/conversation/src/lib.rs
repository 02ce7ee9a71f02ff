//! Conversation state for the motochat assistant.
//!
//! This crate provides:
//!
//! - **Turn model**: role-tagged turns made of text and image parts
//! - **Conversation store**: the process-wide session registry
//! - **Session lifecycle**: identifier allocation and idle eviction

pub mod error;
pub mod lifecycle;
pub mod session;
pub mod store;
pub mod turn;

pub use error::SessionError;
pub use lifecycle::SessionLifecycle;
pub use session::Session;
pub use store::ConversationStore;
pub use turn::{Part, Role, Turn};
