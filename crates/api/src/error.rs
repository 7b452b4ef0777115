use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use manimate_core::render::RenderError;
use manimate_llm::GenerationError;
use serde_json::json;

/// Application-level error type for HTTP handlers.
///
/// Wraps the pipeline errors from the core and llm crates and adds
/// HTTP-specific variants. Implements [`IntoResponse`] to produce consistent
/// `{ "detail": ..., "code": ... }` JSON error responses.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// The LLM call failed.
    #[error("Error generating content: {0}")]
    Generation(#[from] GenerationError),

    /// Any stage of the render pipeline failed.
    #[error("Error rendering video: {0}")]
    Render(#[from] RenderError),

    /// A bad request with a human-readable message.
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// An internal error with a human-readable message.
    #[error("Internal error: {0}")]
    InternalError(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            // --- Pipeline failures (detail embeds the cause) ---
            AppError::Generation(err) => {
                tracing::error!(error = %err, "Error generating content");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "GENERATION_FAILED",
                    self.to_string(),
                )
            }
            AppError::Render(err) => {
                tracing::error!(error = %err, "Error rendering video");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    render_error_code(err),
                    self.to_string(),
                )
            }

            // --- HTTP-specific errors ---
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "BAD_REQUEST", msg.clone()),
            AppError::InternalError(msg) => {
                tracing::error!(error = %msg, "Internal error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "An internal error occurred".to_string(),
                )
            }
        };

        let body = json!({
            "detail": message,
            "code": code,
        });

        (status, axum::Json(body)).into_response()
    }
}

/// Stable machine-readable code for each render failure stage.
fn render_error_code(err: &RenderError) -> &'static str {
    match err {
        RenderError::MissingCode => "MISSING_CODE",
        RenderError::ScriptWrite { .. } => "SCRIPT_WRITE_FAILED",
        RenderError::Spawn { .. } => "RENDERER_UNAVAILABLE",
        RenderError::ProcessFailed { .. } => "RENDER_FAILED",
        RenderError::Timeout { .. } => "RENDER_TIMEOUT",
        RenderError::OutputMissing { .. } => "OUTPUT_MISSING",
        RenderError::OutputCheck { .. } => "OUTPUT_CHECK_FAILED",
        RenderError::Relocate { .. } => "RELOCATE_FAILED",
    }
}
