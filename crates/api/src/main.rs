use std::net::SocketAddr;
use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use manimate_api::config::ServerConfig;
use manimate_api::router::build_app_router;
use manimate_api::state::AppState;
use manimate_core::render::{RenderOrchestrator, RenderWorkspace};
use manimate_llm::GeminiClient;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    // --- Tracing ---
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "manimate_api=debug,manimate_core=debug,manimate_llm=debug,tower_http=debug".into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // --- Configuration ---
    let config = ServerConfig::from_env();
    tracing::info!(
        host = %config.host,
        port = %config.port,
        work_dir = %config.work_dir.display(),
        model = %config.gemini.model,
        quality = %config.renderer.quality,
        "Loaded server configuration"
    );
    if config.renderer.timeout.is_none() {
        tracing::warn!("RENDER_TIMEOUT_SECS is unset; renders may block indefinitely");
    }

    // --- Render workspace ---
    let workspace = RenderWorkspace::new(config.work_dir.clone());
    workspace
        .prepare()
        .await
        .expect("Failed to create render directories");
    tracing::info!(root = %workspace.root().display(), "Render directories prepared");

    // --- App state ---
    let generator = GeminiClient::new(config.gemini.clone());
    let renderer = RenderOrchestrator::new(workspace, config.renderer.clone());

    let state = AppState {
        generator: Arc::new(generator),
        renderer: Arc::new(renderer),
    };

    // --- Router ---
    let app = build_app_router(state, &config);

    // --- Start server ---
    let addr = SocketAddr::new(
        config.host.parse().expect("Invalid HOST address"),
        config.port,
    );
    tracing::info!(%addr, "Starting server");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind to address");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("Server error");

    tracing::info!("Graceful shutdown complete");
}

/// Wait for a termination signal to initiate graceful shutdown.
///
/// Handles both SIGINT (Ctrl-C) and SIGTERM (on Unix).
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl-C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            tracing::info!("Received SIGINT (Ctrl-C), starting graceful shutdown");
        }
        () = terminate => {
            tracing::info!("Received SIGTERM, starting graceful shutdown");
        }
    }
}
