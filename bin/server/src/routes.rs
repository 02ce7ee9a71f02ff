//! HTTP routes for the chat API.

use crate::error::ApiError;
use crate::image_data::parse_data_url;
use crate::state::AppState;
use axum::extract::{DefaultBodyLimit, State};
use axum::routing::{get, post};
use axum::{Json, Router};
use motochat_assistant::RouterError;
use motochat_conversation::Part;
use motochat_core::SessionId;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use std::sync::Arc;
use tower_http::services::ServeDir;

/// Maximum request body size. Inline images arrive base64-encoded inside
/// the JSON body, so the limit is generous.
const MAX_BODY_BYTES: usize = 50 * 1024 * 1024;

/// Request body for `POST /chat`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatRequest {
    /// The session this turn belongs to.
    pub session_id: String,
    /// Message text; may be empty when an image is attached.
    #[serde(default)]
    pub message: String,
    /// Optional image as a `data:<mime>;base64,<payload>` URL.
    #[serde(default)]
    pub image_data: Option<String>,
}

/// Response body for `POST /chat` (and its error replies).
#[derive(Debug, Serialize, Deserialize)]
pub struct ChatResponse {
    /// The assistant's reply text.
    pub response: String,
}

/// Response body for `GET /start-session`.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StartSessionResponse {
    /// The freshly issued session id.
    pub session_id: String,
}

/// Builds the application router.
#[must_use]
pub fn app(state: Arc<AppState>, assets_dir: &str) -> Router {
    Router::new()
        .route("/start-session", get(start_session))
        .route("/chat", post(chat))
        .fallback_service(ServeDir::new(assets_dir))
        .layer(DefaultBodyLimit::max(MAX_BODY_BYTES))
        .with_state(state)
}

/// Issues a fresh session id with an empty transcript.
pub async fn start_session(State(state): State<Arc<AppState>>) -> Json<StartSessionResponse> {
    let id = state.lifecycle.create_session();
    tracing::info!(session_id = %id, "session started");
    Json(StartSessionResponse {
        session_id: id.to_string(),
    })
}

/// Routes one chat turn and returns the assistant's reply.
pub async fn chat(
    State(state): State<Arc<AppState>>,
    Json(request): Json<ChatRequest>,
) -> Result<Json<ChatResponse>, ApiError> {
    let session_id =
        SessionId::from_str(&request.session_id).map_err(|_| ApiError::InvalidSession)?;

    // Boundary validation: reject malformed input before the router runs,
    // so no session state is mutated for a bad request.
    let mut parts = Vec::new();
    if !request.message.is_empty() {
        parts.push(Part::text(request.message.clone()));
    }
    if let Some(image_data) = request.image_data.as_deref().filter(|s| !s.is_empty()) {
        let (data, media_type) = parse_data_url(image_data).map_err(|err| {
            tracing::debug!(error = %err, "rejected image payload");
            ApiError::InvalidImage {
                reason: err.to_string(),
            }
        })?;
        parts.push(Part::image(data, media_type));
    }
    if parts.is_empty() {
        return Err(ApiError::EmptyTurn);
    }

    match state.router.handle(session_id, parts).await {
        Ok(response) => Ok(Json(ChatResponse { response })),
        Err(RouterError::UnknownSession { id }) => {
            tracing::debug!(session_id = %id, "chat for unknown session");
            Err(ApiError::InvalidSession)
        }
        Err(RouterError::Backend { source }) => {
            tracing::error!(session_id = %session_id, error = %source, "chat turn failed");
            Err(ApiError::Backend)
        }
    }
}
