pub mod health;
pub mod render;

use axum::Router;

use crate::state::AppState;

/// Build the API route tree.
///
/// ```text
/// GET  /          fixed greeting
/// GET  /health    service status
/// POST /render    description in, video URL out
/// ```
///
/// `/static` is mounted separately by the router builder.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(health::router())
        .merge(render::router())
}
