use crate::{AppState, Result};
use axum::{
    body::Bytes,
    extract::{Multipart, State},
    Json,
};
use std::sync::Arc;

use crate::error::IdentifyError;
use crate::recognizer;

/// POST /api/identify: relay an uploaded audio sample to AudD.
///
/// The first file-bearing multipart field wins (the frontend sends it as
/// `file`). A request with no file at all forwards an empty payload and
/// lets AudD report the failure.
pub async fn identify_song(
    State(state): State<Arc<AppState>>,
    mut multipart: Multipart,
) -> Result<Json<serde_json::Value>> {
    tracing::info!("Received identify request");

    let mut audio = Bytes::new();

    while let Some(field) = multipart.next_field().await.map_err(|e| {
        tracing::error!("Failed to read multipart field: {}", e);
        IdentifyError::Transport(format!("Failed to read form field: {}", e))
    })? {
        let name = field.name().unwrap_or("").to_string();
        if field.file_name().is_none() && name != "file" {
            tracing::debug!("Skipping field: {}", name);
            continue;
        }

        tracing::debug!("Reading upload from field: {}", name);
        audio = field
            .bytes()
            .await
            .map_err(|e| IdentifyError::Transport(format!("Failed to read upload: {}", e)))?;
        break;
    }

    let result = recognizer::identify(&state.http, &state.config, audio).await?;
    Ok(Json(result))
}
