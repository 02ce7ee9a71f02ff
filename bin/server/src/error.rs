//! API error responses.
//!
//! Every error leaves the process as a well-formed JSON reply. Client
//! errors (unknown session, malformed input) are 400s; a backend fault is
//! a 500 carrying the apology text. Nothing here is fatal to the process.

use crate::routes::ChatResponse;
use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use motochat_assistant::reply;

/// Errors surfaced by the chat API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// Unknown, malformed, or evicted session id.
    InvalidSession,
    /// Empty message with no image attached.
    EmptyTurn,
    /// The image payload could not be decoded.
    InvalidImage { reason: String },
    /// The generative backend failed.
    Backend,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            Self::InvalidSession => (
                StatusCode::BAD_REQUEST,
                "ID de sesión inválido o no encontrado.".to_string(),
            ),
            Self::EmptyTurn => (
                StatusCode::BAD_REQUEST,
                "Envía un mensaje de texto o una imagen.".to_string(),
            ),
            Self::InvalidImage { .. } => (
                StatusCode::BAD_REQUEST,
                "La imagen adjunta no es válida.".to_string(),
            ),
            Self::Backend => (
                StatusCode::INTERNAL_SERVER_ERROR,
                reply::processing_failed().to_string(),
            ),
        };
        (status, Json(ChatResponse { response: message })).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_session_is_a_client_error() {
        let response = ApiError::InvalidSession.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn backend_failure_is_a_server_error() {
        let response = ApiError::Backend.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
