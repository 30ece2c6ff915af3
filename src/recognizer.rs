//! Outbound client for the AudD music recognition API.
//!
//! The whole service is a relay around [`identify`]: one multipart POST per
//! inbound request, no retries, no timeout beyond what the transport imposes.

use axum::body::Bytes;
use reqwest::multipart;

use crate::config::Config;
use crate::error::{IdentifyError, Result};

/// Catalog providers requested alongside the recognition result.
const RETURN_PROVIDERS: &str = "apple_music,spotify";

/// AudD identifies samples by content, so every upload is forwarded under
/// the same filename and MIME type regardless of what the client sent.
const UPLOAD_FILENAME: &str = "audio_file.wav";
const UPLOAD_MIME: &str = "audio/wav";

/// Send one audio sample to AudD and return its JSON verdict unchanged.
///
/// If AudD itself reports a failure (`{"error": {"error_message": ...}}`),
/// the nested message is unwrapped into [`IdentifyError::Upstream`] and the
/// rest of the error structure is discarded.
pub async fn identify(
    client: &reqwest::Client,
    config: &Config,
    audio: Bytes,
) -> Result<serde_json::Value> {
    let Some(api_key) = config.audd_api_key.as_deref() else {
        return Err(IdentifyError::ApiKeyNotConfigured);
    };

    tracing::debug!(
        url = %config.audd_api_url,
        audio_bytes = audio.len(),
        "sending recognition request"
    );

    let file_part = multipart::Part::bytes(audio.to_vec())
        .file_name(UPLOAD_FILENAME)
        .mime_str(UPLOAD_MIME)
        .map_err(|e| IdentifyError::Transport(format!("failed to build file part: {}", e)))?;

    let form = multipart::Form::new()
        .text("api_token", api_key.to_string())
        .text("return", RETURN_PROVIDERS)
        .part("file", file_part);

    let response = client
        .post(&config.audd_api_url)
        .multipart(form)
        .send()
        .await
        .map_err(|e| IdentifyError::Transport(format!("request failed: {}", e)))?;

    let body: serde_json::Value = response
        .json()
        .await
        .map_err(|e| IdentifyError::Transport(format!("invalid response: {}", e)))?;

    if let Some(error) = body.get("error") {
        let message = error
            .get("error_message")
            .and_then(|m| m.as_str())
            .map(str::to_string)
            .unwrap_or_else(|| error.to_string());
        return Err(IdentifyError::Upstream(message));
    }

    Ok(body)
}
