//! Handler for the `/render` endpoint.
//!
//! Pipeline: validate -> build prompt -> generate -> extract code -> render.
//! Each failure is converted to an [`AppError`] at this boundary.

use std::sync::Arc;

use axum::extract::State;
use axum::Json;
use manimate_core::extract::extract_python_code;
use manimate_core::prompt::build_prompt;
use serde::Deserialize;

use crate::error::{AppError, AppResult};
use crate::response::ResponseEnvelope;
use crate::state::AppState;

/// Detail returned when the message is empty or whitespace-only.
pub const EMPTY_MESSAGE_DETAIL: &str = "Message cannot be empty";

#[derive(Debug, Deserialize)]
pub struct RenderRequest {
    pub message: String,
}

/// POST /render
///
/// Rejects an empty message before any external call. The render itself
/// runs on a spawned task so a client disconnect does not abort the
/// renderer mid-run.
pub async fn render_video(
    State(state): State<AppState>,
    Json(input): Json<RenderRequest>,
) -> AppResult<Json<ResponseEnvelope>> {
    if input.message.trim().is_empty() {
        return Err(AppError::BadRequest(EMPTY_MESSAGE_DETAIL.to_string()));
    }

    let prompt = build_prompt(&input.message);
    let text = state.generator.generate(&prompt).await?;

    let code = extract_python_code(&text).map(str::to_owned);
    if code.is_none() {
        tracing::warn!(
            response_len = text.len(),
            "No python code block found in generated output"
        );
    }

    let renderer = Arc::clone(&state.renderer);
    let video = tokio::spawn(async move { renderer.render(code.as_deref()).await })
        .await
        .map_err(|e| AppError::InternalError(format!("Render task failed: {e}")))??;

    tracing::info!(script_id = %video.id, url = %video.url, render_ms = video.render_ms, "Render request completed");

    Ok(Json(ResponseEnvelope::video(video.url)))
}
