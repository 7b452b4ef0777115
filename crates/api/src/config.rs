use std::path::PathBuf;
use std::time::Duration;

use manimate_core::quality::RenderQuality;
use manimate_core::render::{RendererConfig, DEFAULT_RENDERER_PROGRAM};
use manimate_llm::gemini::{DEFAULT_ENDPOINT, DEFAULT_MODEL};
use manimate_llm::GeminiConfig;

/// Server configuration loaded from environment variables.
///
/// Everything except the provider credential has a default suitable for
/// local development.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `8000`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS`.
    /// A single `*` allows any origin.
    pub cors_origins: Vec<String>,
    /// Whole-request timeout in seconds. `None` disables it.
    pub request_timeout_secs: Option<u64>,
    /// Root directory for generated scripts, renderer media, and static files.
    pub work_dir: PathBuf,
    /// External renderer invocation.
    pub renderer: RendererConfig,
    /// Generation provider settings.
    pub gemini: GeminiConfig,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default                                            |
    /// |------------------------|----------------------------------------------------|
    /// | `GOOGLE_API_KEY`       | required                                           |
    /// | `GEMINI_MODEL`         | `gemini-2.5-pro`                                   |
    /// | `GEMINI_ENDPOINT`      | `https://generativelanguage.googleapis.com/v1beta` |
    /// | `HOST`                 | `0.0.0.0`                                          |
    /// | `PORT`                 | `8000`                                             |
    /// | `CORS_ORIGINS`         | `*`                                                |
    /// | `REQUEST_TIMEOUT_SECS` | unset (no timeout)                                 |
    /// | `RENDER_TIMEOUT_SECS`  | unset (no timeout)                                 |
    /// | `MANIM_BIN`            | `manim`                                            |
    /// | `MANIM_ARGS`           | empty                                              |
    /// | `RENDER_QUALITY`       | `low`                                              |
    /// | `WORK_DIR`             | `.`                                                |
    ///
    /// Panics on a missing credential or an unparsable value; the service
    /// must not start half-configured.
    pub fn from_env() -> Self {
        let api_key = match std::env::var("GOOGLE_API_KEY") {
            Ok(key) if !key.trim().is_empty() => key,
            _ => {
                tracing::error!("Google API key not found");
                panic!("GOOGLE_API_KEY must be set");
            }
        };

        let gemini = GeminiConfig {
            api_key,
            model: std::env::var("GEMINI_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.into()),
            endpoint: std::env::var("GEMINI_ENDPOINT").unwrap_or_else(|_| DEFAULT_ENDPOINT.into()),
        };

        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "8000".into())
            .parse()
            .expect("PORT must be a valid u16");

        let cors_origins: Vec<String> = std::env::var("CORS_ORIGINS")
            .unwrap_or_else(|_| "*".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let request_timeout_secs = optional_secs("REQUEST_TIMEOUT_SECS");

        let work_dir = PathBuf::from(std::env::var("WORK_DIR").unwrap_or_else(|_| ".".into()));

        let quality: RenderQuality = std::env::var("RENDER_QUALITY")
            .unwrap_or_else(|_| "low".into())
            .parse()
            .unwrap_or_else(|e| panic!("RENDER_QUALITY is invalid: {e}"));

        let renderer = RendererConfig {
            program: std::env::var("MANIM_BIN").unwrap_or_else(|_| DEFAULT_RENDERER_PROGRAM.into()),
            base_args: std::env::var("MANIM_ARGS")
                .map(|args| args.split_whitespace().map(str::to_string).collect())
                .unwrap_or_default(),
            quality,
            timeout: optional_secs("RENDER_TIMEOUT_SECS").map(Duration::from_secs),
        };

        Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            work_dir,
            renderer,
            gemini,
        }
    }
}

/// Read an optional seconds value. Unset or empty means `None`.
fn optional_secs(var: &str) -> Option<u64> {
    std::env::var(var)
        .ok()
        .filter(|v| !v.trim().is_empty())
        .map(|v| {
            v.trim()
                .parse()
                .unwrap_or_else(|_| panic!("{var} must be a valid u64"))
        })
}
