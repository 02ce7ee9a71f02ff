//! Shared application state.

use motochat_assistant::MessageRouter;
use motochat_conversation::{ConversationStore, SessionLifecycle};
use std::sync::Arc;

/// State shared by all request handlers.
pub struct AppState {
    /// Session id allocation.
    pub lifecycle: SessionLifecycle,
    /// The message router.
    pub router: MessageRouter,
}

impl AppState {
    /// Creates the application state around a store and a router.
    #[must_use]
    pub fn new(store: Arc<ConversationStore>, router: MessageRouter) -> Self {
        Self {
            lifecycle: SessionLifecycle::new(store),
            router,
        }
    }
}
