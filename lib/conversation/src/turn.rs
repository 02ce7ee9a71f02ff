//! Turn and part types for conversations.

use chrono::{DateTime, Utc};
use motochat_core::TurnId;
use serde::{Deserialize, Serialize};

/// The role of a turn's author.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Visitor/human turn.
    User,
    /// Assistant turn.
    Assistant,
}

/// A typed content fragment within a turn.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Part {
    /// Plain text.
    Text {
        /// The text content.
        text: String,
    },
    /// An inline image.
    Image {
        /// Raw image bytes.
        data: Vec<u8>,
        /// The image media type, e.g. `image/jpeg`.
        media_type: String,
    },
}

impl Part {
    /// Creates a text part.
    #[must_use]
    pub fn text(text: impl Into<String>) -> Self {
        Self::Text { text: text.into() }
    }

    /// Creates an image part.
    #[must_use]
    pub fn image(data: Vec<u8>, media_type: impl Into<String>) -> Self {
        Self::Image {
            data,
            media_type: media_type.into(),
        }
    }

    /// Returns the text content, if this is a text part.
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text { text } => Some(text),
            Self::Image { .. } => None,
        }
    }
}

/// One message exchanged in a conversation.
///
/// Turns are immutable once appended to a transcript.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Turn {
    /// Unique turn identifier.
    pub id: TurnId,
    /// Who authored the turn.
    pub role: Role,
    /// The turn's content parts. A user turn always has at least one;
    /// that is enforced at the HTTP boundary before a turn is built.
    pub parts: Vec<Part>,
    /// When the turn was created.
    pub timestamp: DateTime<Utc>,
}

impl Turn {
    /// Creates a new turn.
    #[must_use]
    pub fn new(role: Role, parts: Vec<Part>) -> Self {
        Self {
            id: TurnId::new(),
            role,
            parts,
            timestamp: Utc::now(),
        }
    }

    /// Creates a user turn from parts.
    #[must_use]
    pub fn user(parts: Vec<Part>) -> Self {
        Self::new(Role::User, parts)
    }

    /// Creates an assistant turn holding a single text part.
    #[must_use]
    pub fn assistant_text(text: impl Into<String>) -> Self {
        Self::new(Role::Assistant, vec![Part::text(text)])
    }

    /// Concatenates the turn's text parts.
    #[must_use]
    pub fn text(&self) -> String {
        self.parts
            .iter()
            .filter_map(Part::as_text)
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Returns true if the turn carries an image part.
    #[must_use]
    pub fn has_image(&self) -> bool {
        self.parts
            .iter()
            .any(|p| matches!(p, Part::Image { .. }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_turn_creation() {
        let turn = Turn::user(vec![Part::text("hola")]);
        assert_eq!(turn.role, Role::User);
        assert_eq!(turn.text(), "hola");
        assert!(!turn.has_image());
    }

    #[test]
    fn assistant_text_turn() {
        let turn = Turn::assistant_text("buenas");
        assert_eq!(turn.role, Role::Assistant);
        assert_eq!(turn.parts.len(), 1);
    }

    #[test]
    fn turn_with_image() {
        let turn = Turn::user(vec![
            Part::text("¿qué repuesto es este?"),
            Part::image(vec![0xff, 0xd8], "image/jpeg"),
        ]);
        assert!(turn.has_image());
        assert_eq!(turn.text(), "¿qué repuesto es este?");
    }

    #[test]
    fn image_only_turn_has_empty_text() {
        let turn = Turn::user(vec![Part::image(vec![1, 2, 3], "image/png")]);
        assert_eq!(turn.text(), "");
    }

    #[test]
    fn turn_serde_roundtrip() {
        let turn = Turn::user(vec![Part::text("hola")]);
        let json = serde_json::to_string(&turn).expect("serialize");
        let parsed: Turn = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(turn.id, parsed.id);
        assert_eq!(turn.parts, parsed.parts);
    }
}
