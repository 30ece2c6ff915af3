use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, IdentifyError>;

#[derive(Error, Debug)]
pub enum IdentifyError {
    #[error("API key not configured")]
    ApiKeyNotConfigured,

    /// AudD answered, but with its own error payload.
    #[error("{0}")]
    Upstream(String),

    /// Network failure, malformed response, or a bad inbound form.
    #[error("{0}")]
    Transport(String),
}

impl IntoResponse for IdentifyError {
    fn into_response(self) -> Response {
        match &self {
            IdentifyError::ApiKeyNotConfigured => {
                tracing::warn!("identify request refused: no API key configured");
            }
            IdentifyError::Upstream(msg) => {
                tracing::warn!("AudD reported an error: {}", msg);
            }
            IdentifyError::Transport(msg) => {
                tracing::error!("identify request failed: {}", msg);
            }
        }

        // Clients branch on the presence of the `error` field, not the HTTP
        // status; every failure keeps the success status code.
        (StatusCode::OK, Json(json!({ "error": self.to_string() }))).into_response()
    }
}
