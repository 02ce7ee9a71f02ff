//! Generative backend abstraction.
//!
//! The router speaks to the language service through this interface; the
//! provider behind it is chosen at startup.

use crate::error::BackendError;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// The role of a chat message sender.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    /// Visitor/human message.
    User,
    /// Assistant/AI message.
    Assistant,
}

/// A typed content fragment within a chat message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ChatPart {
    /// Plain text.
    Text { text: String },
    /// An inline image.
    InlineImage { data: Vec<u8>, media_type: String },
}

impl ChatPart {
    /// Creates a text part.
    #[must_use]
    pub fn text(text: impl Into<String>) -> Self {
        Self::Text { text: text.into() }
    }

    /// Creates an inline image part.
    #[must_use]
    pub fn inline_image(data: Vec<u8>, media_type: impl Into<String>) -> Self {
        Self::InlineImage {
            data,
            media_type: media_type.into(),
        }
    }
}

/// A message in a generative conversation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    /// The role of the message sender.
    pub role: ChatRole,
    /// The message's content parts.
    pub parts: Vec<ChatPart>,
}

impl ChatMessage {
    /// Creates a user message.
    #[must_use]
    pub fn user(parts: Vec<ChatPart>) -> Self {
        Self {
            role: ChatRole::User,
            parts,
        }
    }

    /// Creates an assistant message.
    #[must_use]
    pub fn assistant(parts: Vec<ChatPart>) -> Self {
        Self {
            role: ChatRole::Assistant,
            parts,
        }
    }
}

/// A request to the generative backend.
#[derive(Debug, Clone)]
pub struct GenerateRequest {
    /// System instruction (the assistant persona), if any.
    pub system: Option<String>,
    /// Prior conversation, oldest first.
    pub history: Vec<ChatMessage>,
    /// The new turn's parts.
    pub parts: Vec<ChatPart>,
}

impl GenerateRequest {
    /// Creates a request for a new turn with no history.
    #[must_use]
    pub fn new(parts: Vec<ChatPart>) -> Self {
        Self {
            system: None,
            history: Vec::new(),
            parts,
        }
    }

    /// Adds a system instruction.
    #[must_use]
    pub fn with_system(mut self, system: impl Into<String>) -> Self {
        self.system = Some(system.into());
        self
    }

    /// Adds the prior conversation.
    #[must_use]
    pub fn with_history(mut self, history: Vec<ChatMessage>) -> Self {
        self.history = history;
        self
    }
}

/// A reply from the generative backend: a single text part.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateReply {
    /// The generated text.
    pub text: String,
}

/// Trait for generative language backends.
///
/// Any failure (transport, timeout, quota, malformed response) surfaces as
/// a [`BackendError`]; callers treat the whole class as recoverable and
/// answer the visitor with an apology instead.
#[async_trait]
pub trait GenerativeBackend: Send + Sync {
    /// Generates a reply for the given request.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend call fails.
    async fn generate(&self, request: &GenerateRequest) -> Result<GenerateReply, BackendError>;

    /// Returns the model name.
    fn model(&self) -> &str;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_builder() {
        let request = GenerateRequest::new(vec![ChatPart::text("hola")])
            .with_system("Sos un asistente de repuestos.")
            .with_history(vec![ChatMessage::user(vec![ChatPart::text("buenas")])]);

        assert_eq!(request.system.as_deref(), Some("Sos un asistente de repuestos."));
        assert_eq!(request.history.len(), 1);
        assert_eq!(request.parts.len(), 1);
    }

    #[test]
    fn message_roles() {
        let user = ChatMessage::user(vec![ChatPart::text("hola")]);
        let assistant = ChatMessage::assistant(vec![ChatPart::text("buenas")]);
        assert_eq!(user.role, ChatRole::User);
        assert_eq!(assistant.role, ChatRole::Assistant);
    }

    #[test]
    fn chat_part_serde_roundtrip() {
        let part = ChatPart::inline_image(vec![1, 2, 3], "image/png");
        let json = serde_json::to_string(&part).expect("serialize");
        let parsed: ChatPart = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(part, parsed);
    }
}
