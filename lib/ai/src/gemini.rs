//! Google Generative Language API ("Gemini") backend.

use crate::backend::{
    ChatMessage, ChatPart, ChatRole, GenerateReply, GenerateRequest, GenerativeBackend,
};
use crate::error::BackendError;
use async_trait::async_trait;
use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Configuration for the Gemini backend.
#[derive(Debug, Clone, Deserialize)]
pub struct GeminiConfig {
    /// API key for the Generative Language API. Required; supplied via the
    /// environment.
    pub api_key: String,

    /// Model identifier.
    #[serde(default = "default_model")]
    pub model: String,

    /// Base URL of the API.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Total request timeout in seconds. Expiry is reported as
    /// [`BackendError::Timeout`] and handled like any other backend
    /// failure.
    #[serde(default = "default_timeout_seconds")]
    pub timeout_seconds: u64,
}

fn default_model() -> String {
    "gemini-1.5-flash".to_string()
}

fn default_base_url() -> String {
    "https://generativelanguage.googleapis.com".to_string()
}

fn default_timeout_seconds() -> u64 {
    30
}

#[derive(Serialize)]
struct GeminiRequest {
    contents: Vec<GeminiContent>,
    #[serde(rename = "systemInstruction", skip_serializing_if = "Option::is_none")]
    system_instruction: Option<GeminiSystemInstruction>,
}

#[derive(Serialize)]
struct GeminiSystemInstruction {
    parts: Vec<GeminiPart>,
}

#[derive(Serialize, Deserialize)]
struct GeminiContent {
    role: String,
    parts: Vec<GeminiPart>,
}

#[derive(Serialize, Deserialize, Default)]
struct GeminiPart {
    #[serde(skip_serializing_if = "Option::is_none")]
    text: Option<String>,
    #[serde(rename = "inlineData", skip_serializing_if = "Option::is_none")]
    inline_data: Option<GeminiInlineData>,
}

#[derive(Serialize, Deserialize)]
struct GeminiInlineData {
    #[serde(rename = "mimeType")]
    mime_type: String,
    data: String,
}

#[derive(Deserialize)]
struct GeminiResponse {
    #[serde(default)]
    candidates: Vec<GeminiCandidate>,
}

#[derive(Deserialize)]
struct GeminiCandidate {
    content: GeminiResponseContent,
}

#[derive(Deserialize)]
struct GeminiResponseContent {
    #[serde(default)]
    parts: Vec<GeminiPart>,
}

fn wire_part(part: &ChatPart) -> GeminiPart {
    match part {
        ChatPart::Text { text } => GeminiPart {
            text: Some(text.clone()),
            inline_data: None,
        },
        ChatPart::InlineImage { data, media_type } => GeminiPart {
            text: None,
            inline_data: Some(GeminiInlineData {
                mime_type: media_type.clone(),
                data: BASE64.encode(data),
            }),
        },
    }
}

fn wire_content(message: &ChatMessage) -> GeminiContent {
    // Gemini names the assistant role "model".
    let role = match message.role {
        ChatRole::User => "user",
        ChatRole::Assistant => "model",
    };
    GeminiContent {
        role: role.to_string(),
        parts: message.parts.iter().map(wire_part).collect(),
    }
}

/// Generative backend over the Gemini `generateContent` endpoint.
pub struct GeminiBackend {
    config: GeminiConfig,
    http: reqwest::Client,
}

impl GeminiBackend {
    /// Creates a backend from configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built.
    pub fn new(config: GeminiConfig) -> Result<Self, BackendError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()
            .map_err(|e| BackendError::InvalidConfig {
                reason: e.to_string(),
            })?;

        Ok(Self { config, http })
    }

    fn request_url(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent?key={}",
            self.config.base_url.trim_end_matches('/'),
            self.config.model,
            self.config.api_key
        )
    }
}

#[async_trait]
impl GenerativeBackend for GeminiBackend {
    async fn generate(&self, request: &GenerateRequest) -> Result<GenerateReply, BackendError> {
        let mut contents: Vec<GeminiContent> =
            request.history.iter().map(wire_content).collect();
        contents.push(GeminiContent {
            role: "user".to_string(),
            parts: request.parts.iter().map(wire_part).collect(),
        });

        let system_instruction = request.system.as_ref().map(|system| GeminiSystemInstruction {
            parts: vec![GeminiPart {
                text: Some(system.clone()),
                inline_data: None,
            }],
        });

        let body = GeminiRequest {
            contents,
            system_instruction,
        };

        let response = self
            .http
            .post(self.request_url())
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    BackendError::Timeout
                } else {
                    BackendError::RequestFailed {
                        reason: e.to_string(),
                    }
                }
            })?;

        match response.status() {
            StatusCode::OK => {
                let body: GeminiResponse =
                    response
                        .json()
                        .await
                        .map_err(|e| BackendError::ResponseParseFailed {
                            reason: e.to_string(),
                        })?;

                let text = body
                    .candidates
                    .into_iter()
                    .next()
                    .and_then(|c| c.content.parts.into_iter().find_map(|p| p.text))
                    .ok_or_else(|| BackendError::ResponseParseFailed {
                        reason: "no text candidate in response".to_string(),
                    })?;

                Ok(GenerateReply { text })
            }
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => Err(BackendError::Unauthorized),
            StatusCode::TOO_MANY_REQUESTS => {
                let retry_after = response
                    .headers()
                    .get(reqwest::header::RETRY_AFTER)
                    .and_then(|v| v.to_str().ok())
                    .and_then(|v| v.parse().ok());
                Err(BackendError::RateLimited {
                    retry_after_secs: retry_after,
                })
            }
            status => {
                let error_body: Option<serde_json::Value> = response.json().await.ok();
                let message = error_body
                    .as_ref()
                    .and_then(|v| v.get("error"))
                    .and_then(|e| e.get("message"))
                    .and_then(|m| m.as_str())
                    .unwrap_or("unknown error");
                Err(BackendError::RequestFailed {
                    reason: format!("{status}: {message}"),
                })
            }
        }
    }

    fn model(&self) -> &str {
        &self.config.model
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_from_key(api_key: &str) -> GeminiConfig {
        GeminiConfig {
            api_key: api_key.to_string(),
            model: default_model(),
            base_url: default_base_url(),
            timeout_seconds: default_timeout_seconds(),
        }
    }

    #[test]
    fn config_defaults() {
        let config: GeminiConfig =
            serde_json::from_str(r#"{"api_key": "k"}"#).expect("deserialize");
        assert_eq!(config.model, "gemini-1.5-flash");
        assert_eq!(config.base_url, "https://generativelanguage.googleapis.com");
        assert_eq!(config.timeout_seconds, 30);
    }

    #[test]
    fn request_url_shape() {
        let backend = GeminiBackend::new(config_from_key("k")).expect("backend");
        assert_eq!(
            backend.request_url(),
            "https://generativelanguage.googleapis.com/v1beta/models/gemini-1.5-flash:generateContent?key=k"
        );
    }

    #[test]
    fn assistant_role_maps_to_model() {
        let content = wire_content(&ChatMessage::assistant(vec![ChatPart::text("buenas")]));
        assert_eq!(content.role, "model");
        assert_eq!(content.parts[0].text.as_deref(), Some("buenas"));
    }

    #[test]
    fn inline_image_is_base64_encoded() {
        let part = wire_part(&ChatPart::inline_image(vec![0xff, 0xd8, 0xff], "image/jpeg"));
        let inline = part.inline_data.expect("inline data");
        assert_eq!(inline.mime_type, "image/jpeg");
        assert_eq!(inline.data, BASE64.encode([0xff, 0xd8, 0xff]));
    }
}
