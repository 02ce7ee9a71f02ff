//! Generative language backend for the motochat assistant.
//!
//! This crate provides:
//!
//! - **Backend trait**: transcript in, one text reply out
//! - **Gemini client**: the production implementation over the Google
//!   Generative Language API, with a bounded request timeout

pub mod backend;
pub mod error;
pub mod gemini;

pub use backend::{
    ChatMessage, ChatPart, ChatRole, GenerateReply, GenerateRequest, GenerativeBackend,
};
pub use error::BackendError;
pub use gemini::{GeminiBackend, GeminiConfig};
