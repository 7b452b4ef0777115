use axum::routing::post;
use axum::Router;

use crate::handlers::render;
use crate::state::AppState;

/// Routes mounted at `/render`.
///
/// ```text
/// POST /render    generate and render an animation
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/render", post(render::render_video))
}
