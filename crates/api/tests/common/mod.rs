#![allow(dead_code)]

use std::path::Path;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Method, Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use tempfile::TempDir;
use tower::ServiceExt;

use manimate_api::config::ServerConfig;
use manimate_api::router::build_app_router;
use manimate_api::state::AppState;
use manimate_core::quality::RenderQuality;
use manimate_core::render::{RenderOrchestrator, RenderWorkspace, RendererConfig};
use manimate_llm::{GeminiConfig, GenerationError, TextGenerator};

/// Renderer stand-in that writes a video where the real renderer would:
/// `$1` quality flag, `$2` script path, `$3` scene class.
pub const RENDERER_WRITES_VIDEO: &str = r#"stem=$(basename "$2" .py)
out="media/videos/$stem/480p15"
mkdir -p "$out"
printf 'fake-mp4' > "$out/$3.mp4"
"#;

/// Renderer stand-in that fails with a traceback on stderr.
pub const RENDERER_FAILS: &str = "echo 'NameError: name Circl is not defined' 1>&2\nexit 1\n";

/// Renderer stand-in that exits cleanly without producing anything.
pub const RENDERER_NO_OUTPUT: &str = "exit 0\n";

/// LLM reply containing a valid scene.
pub const SCENE_REPLY: &str = "```python\nclass GeneratedScene(Scene):\n    def construct(self):\n        c = Circle(color=BLUE)\n        self.play(GrowFromCenter(c))\n```";

/// Canned [`TextGenerator`] that records every prompt it receives.
pub struct FakeGenerator {
    reply: Result<String, String>,
    pub prompts: Mutex<Vec<String>>,
}

impl FakeGenerator {
    pub fn replying(text: &str) -> Arc<Self> {
        Arc::new(Self {
            reply: Ok(text.to_string()),
            prompts: Mutex::new(Vec::new()),
        })
    }

    pub fn failing(message: &str) -> Arc<Self> {
        Arc::new(Self {
            reply: Err(message.to_string()),
            prompts: Mutex::new(Vec::new()),
        })
    }

    pub fn call_count(&self) -> usize {
        self.prompts.lock().unwrap().len()
    }
}

#[async_trait]
impl TextGenerator for FakeGenerator {
    async fn generate(&self, prompt: &str) -> Result<String, GenerationError> {
        self.prompts.lock().unwrap().push(prompt.to_string());
        match &self.reply {
            Ok(text) => Ok(text.clone()),
            Err(msg) => Err(GenerationError::Api {
                status: 429,
                body: msg.clone(),
            }),
        }
    }
}

/// Build a test `ServerConfig` rooted at `work_dir`.
pub fn test_config(work_dir: &Path, renderer_script: &Path) -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: Some(30),
        work_dir: work_dir.to_path_buf(),
        renderer: RendererConfig {
            program: "sh".to_string(),
            base_args: vec![renderer_script.to_string_lossy().into_owned()],
            quality: RenderQuality::Low,
            timeout: Some(Duration::from_secs(10)),
        },
        gemini: GeminiConfig::new("test-key"),
    }
}

/// A router wired to a fake generator and a fake renderer, in its own
/// temporary work directory.
pub struct TestApp {
    pub router: Router,
    pub generator: Arc<FakeGenerator>,
    pub dir: TempDir,
}

impl TestApp {
    pub fn workspace(&self) -> RenderWorkspace {
        RenderWorkspace::new(self.dir.path())
    }
}

/// Build the full application router with the production middleware stack.
pub async fn build_test_app(generator: Arc<FakeGenerator>, renderer_body: &str) -> TestApp {
    let dir = tempfile::tempdir().expect("create temp dir");
    let renderer_script = dir.path().join("fake_renderer.sh");
    std::fs::write(&renderer_script, renderer_body).expect("write fake renderer");

    let config = test_config(dir.path(), &renderer_script);

    let workspace = RenderWorkspace::new(dir.path());
    workspace.prepare().await.expect("prepare workspace");

    let state = AppState {
        generator: generator.clone(),
        renderer: Arc::new(RenderOrchestrator::new(workspace, config.renderer.clone())),
    };

    TestApp {
        router: build_app_router(state, &config),
        generator,
        dir,
    }
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn post_json(app: Router, uri: &str, json: serde_json::Value) -> Response<Body> {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(json.to_string()))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn body_bytes(response: Response<Body>) -> Vec<u8> {
    response
        .into_body()
        .collect()
        .await
        .unwrap()
        .to_bytes()
        .to_vec()
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    serde_json::from_slice(&body_bytes(response).await).unwrap()
}

/// Number of entries directly inside `dir` (0 if it does not exist).
pub fn count_entries(dir: &Path) -> usize {
    std::fs::read_dir(dir).map(|d| d.count()).unwrap_or(0)
}
