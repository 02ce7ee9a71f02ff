//! The session-scoped message router.
//!
//! Per inbound turn the router runs a small state machine:
//! validate the session, classify the text, dispatch to the catalog or the
//! generative backend, and fold the result back into per-session history.

use crate::classify::{Route, classify};
use crate::error::RouterError;
use crate::reply;
use motochat_ai::{ChatMessage, ChatPart, GenerateRequest, GenerativeBackend};
use motochat_catalog::{CatalogLookup, clean_query};
use motochat_conversation::{ConversationStore, Part, Role, Turn};
use motochat_core::SessionId;
use std::sync::Arc;

/// Routes inbound turns to the catalog or the generative backend.
///
/// The router owns all transcript mutation: catalog turns leave the
/// transcript untouched, generative turns append the (user, assistant)
/// exchange. It never learns which catalog variant is behind the trait.
pub struct MessageRouter {
    store: Arc<ConversationStore>,
    catalog: Arc<dyn CatalogLookup>,
    backend: Arc<dyn GenerativeBackend>,
    persona: String,
}

impl MessageRouter {
    /// Creates a router.
    #[must_use]
    pub fn new(
        store: Arc<ConversationStore>,
        catalog: Arc<dyn CatalogLookup>,
        backend: Arc<dyn GenerativeBackend>,
        persona: impl Into<String>,
    ) -> Self {
        Self {
            store,
            catalog,
            backend,
            persona: persona.into(),
        }
    }

    /// Handles one inbound turn for a session and returns the reply text.
    ///
    /// # Errors
    ///
    /// Returns [`RouterError::UnknownSession`] for an unknown or evicted
    /// session id, and [`RouterError::Backend`] when the generative
    /// backend fails. Catalog faults never surface as errors; they
    /// degrade to apology text.
    pub async fn handle(
        &self,
        session_id: SessionId,
        parts: Vec<Part>,
    ) -> Result<String, RouterError> {
        let history = self
            .store
            .get(session_id)
            .ok_or(RouterError::UnknownSession { id: session_id })?;

        let text = joined_text(&parts);
        match classify(&text) {
            Route::Catalog => {
                tracing::debug!(session_id = %session_id, "catalog turn");
                Ok(self.catalog_reply(&text).await)
            }
            Route::Generative => {
                tracing::debug!(
                    session_id = %session_id,
                    history_turns = history.len(),
                    "generative turn"
                );
                self.generative_reply(session_id, history, parts).await
            }
        }
    }

    /// Catalog path. Stateless: neither the question nor the answer is
    /// appended, so generative history is never polluted with catalog Q&A.
    async fn catalog_reply(&self, text: &str) -> String {
        match self.catalog.search(text).await {
            Ok(Some(record)) => reply::product_found(&record),
            Ok(None) => reply::product_not_found(&clean_query(text)),
            Err(err) => {
                tracing::warn!(error = %err, "catalog lookup failed");
                reply::catalog_unavailable().to_string()
            }
        }
    }

    /// Generative path: persona + prior transcript + the new turn's parts.
    async fn generative_reply(
        &self,
        session_id: SessionId,
        history: Vec<Turn>,
        parts: Vec<Part>,
    ) -> Result<String, RouterError> {
        let request = GenerateRequest::new(parts.iter().map(chat_part).collect())
            .with_system(self.persona.clone())
            .with_history(history.iter().map(chat_message).collect());

        let generated = self.backend.generate(&request).await.map_err(|source| {
            tracing::warn!(session_id = %session_id, error = %source, "generative backend failed");
            RouterError::Backend { source }
        })?;

        // The backend call already succeeded and the visitor must see the
        // answer; a failed append leaves the transcript consistent up to
        // the successful writes.
        if let Err(err) = self.store.append_exchange(
            session_id,
            Turn::user(parts),
            Turn::assistant_text(generated.text.clone()),
        ) {
            tracing::warn!(session_id = %session_id, error = %err, "transcript append failed");
        }

        Ok(generated.text)
    }
}

fn joined_text(parts: &[Part]) -> String {
    parts
        .iter()
        .filter_map(Part::as_text)
        .collect::<Vec<_>>()
        .join("\n")
}

fn chat_part(part: &Part) -> ChatPart {
    match part {
        Part::Text { text } => ChatPart::text(text.clone()),
        Part::Image { data, media_type } => {
            ChatPart::inline_image(data.clone(), media_type.clone())
        }
    }
}

fn chat_message(turn: &Turn) -> ChatMessage {
    let parts = turn.parts.iter().map(chat_part).collect();
    match turn.role {
        Role::User => ChatMessage::user(parts),
        Role::Assistant => ChatMessage::assistant(parts),
    }
}
