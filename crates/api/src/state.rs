use std::sync::Arc;

use manimate_core::render::RenderOrchestrator;
use manimate_llm::TextGenerator;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc`).
#[derive(Clone)]
pub struct AppState {
    /// LLM client. A trait object so tests can inject a fake.
    pub generator: Arc<dyn TextGenerator>,
    /// Script-to-video pipeline.
    pub renderer: Arc<RenderOrchestrator>,
}
