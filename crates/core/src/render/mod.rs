//! Render orchestration: generated source in, published video out.
//!
//! The [`RenderOrchestrator`] runs one render per call:
//! 1. Reject missing or blank code.
//! 2. Allocate a fresh script id.
//! 3. Write `<preamble><code>` to `temp_scenes/scene_<id>.py`.
//! 4. Run the renderer against the script and wait for it.
//! 5. Locate the video at the renderer's output convention path.
//! 6. Move it to `static/videos/<id>.mp4` and return its URL.
//!
//! Nothing is retried and generated files are never cleaned up here.

mod error;
pub mod workspace;

use std::path::PathBuf;
use std::time::Duration;

use tokio::process::Command;
use uuid::Uuid;

use crate::prompt::SCENE_CLASS_NAME;
use crate::quality::RenderQuality;
use crate::scripting::subprocess::{self, SubprocessError};

pub use error::RenderError;
pub use workspace::RenderWorkspace;

/// Import line prepended to every generated script.
pub const SCRIPT_PREAMBLE: &str = "from manim import *\n";

/// Default renderer executable.
pub const DEFAULT_RENDERER_PROGRAM: &str = "manim";

/// How the external renderer is invoked.
#[derive(Debug, Clone)]
pub struct RendererConfig {
    /// Executable to spawn.
    pub program: String,
    /// Arguments placed before the quality flag (e.g. `["-m", "manim"]` when
    /// `program` is a python interpreter).
    pub base_args: Vec<String>,
    /// Quality tier; selects both the flag and the output directory tag.
    pub quality: RenderQuality,
    /// Kill the renderer after this long. `None` waits indefinitely.
    pub timeout: Option<Duration>,
}

impl Default for RendererConfig {
    fn default() -> Self {
        Self {
            program: DEFAULT_RENDERER_PROGRAM.to_string(),
            base_args: Vec::new(),
            quality: RenderQuality::Low,
            timeout: None,
        }
    }
}

/// A video that has been rendered and moved into the static directory.
#[derive(Debug, Clone)]
pub struct RenderedVideo {
    pub id: Uuid,
    /// Filesystem path of the published video.
    pub path: PathBuf,
    /// URL the static file server exposes it under.
    pub url: String,
    /// Wall-clock time the renderer ran for.
    pub render_ms: u64,
}

/// Build the full script text for `code`.
pub fn script_contents(code: &str) -> String {
    format!("{SCRIPT_PREAMBLE}{code}")
}

/// Coordinates script materialization, the renderer subprocess, and output
/// relocation.
#[derive(Debug, Clone)]
pub struct RenderOrchestrator {
    workspace: RenderWorkspace,
    config: RendererConfig,
}

impl RenderOrchestrator {
    pub fn new(workspace: RenderWorkspace, config: RendererConfig) -> Self {
        Self { workspace, config }
    }

    pub fn workspace(&self) -> &RenderWorkspace {
        &self.workspace
    }

    pub fn config(&self) -> &RendererConfig {
        &self.config
    }

    /// Render `code` under a freshly generated id.
    ///
    /// `code` is the extractor's result; `None` or blank code fails with
    /// [`RenderError::MissingCode`] before anything touches the filesystem.
    pub async fn render(&self, code: Option<&str>) -> Result<RenderedVideo, RenderError> {
        let code = code
            .filter(|c| !c.trim().is_empty())
            .ok_or(RenderError::MissingCode)?;
        self.render_with_id(Uuid::new_v4(), code).await
    }

    /// Render `code` under a caller-chosen id.
    pub async fn render_with_id(&self, id: Uuid, code: &str) -> Result<RenderedVideo, RenderError> {
        if code.trim().is_empty() {
            return Err(RenderError::MissingCode);
        }

        self.write_script(id, code).await?;
        let render_ms = self.run_renderer(id).await?;

        let output = self.workspace.output_path(id, self.config.quality);
        match tokio::fs::try_exists(&output).await {
            Ok(true) => {}
            Ok(false) => {
                tracing::warn!(script_id = %id, path = %output.display(), "Renderer produced no video");
                return Err(RenderError::OutputMissing { path: output });
            }
            Err(source) => {
                tracing::error!(script_id = %id, path = %output.display(), error = %source, "Cannot inspect renderer output");
                return Err(RenderError::OutputCheck {
                    path: output,
                    source,
                });
            }
        }

        let published = self.workspace.published_path(id);
        tokio::fs::rename(&output, &published)
            .await
            .map_err(|source| RenderError::Relocate {
                from: output.clone(),
                to: published.clone(),
                source,
            })?;
        tracing::info!(script_id = %id, path = %published.display(), "Video published");

        Ok(RenderedVideo {
            id,
            path: published,
            url: RenderWorkspace::video_url(id),
            render_ms,
        })
    }

    /// Write the script for `id` and return its path.
    pub async fn write_script(&self, id: Uuid, code: &str) -> Result<PathBuf, RenderError> {
        let path = self.workspace.script_path(id);
        tokio::fs::write(&path, script_contents(code))
            .await
            .map_err(|source| RenderError::ScriptWrite {
                path: path.clone(),
                source,
            })?;
        tracing::debug!(script_id = %id, path = %path.display(), "Script written");
        Ok(path)
    }

    /// Run the renderer for `id`, returning its duration on a zero exit.
    async fn run_renderer(&self, id: Uuid) -> Result<u64, RenderError> {
        let mut cmd = Command::new(&self.config.program);
        cmd.args(&self.config.base_args)
            .arg(self.config.quality.flag())
            .arg(RenderWorkspace::script_relative_path(id))
            .arg(SCENE_CLASS_NAME)
            .current_dir(self.workspace.root());

        tracing::info!(
            script_id = %id,
            program = %self.config.program,
            quality = %self.config.quality,
            "Starting render"
        );

        let output = subprocess::run_command(&mut cmd, self.config.timeout)
            .await
            .map_err(|e| match e {
                SubprocessError::Spawn(source) | SubprocessError::Wait(source) => {
                    RenderError::Spawn {
                        program: self.config.program.clone(),
                        source,
                    }
                }
                SubprocessError::Timeout { elapsed_ms } => RenderError::Timeout { elapsed_ms },
            })?;

        if !output.success() {
            tracing::warn!(
                script_id = %id,
                exit_code = output.exit_code,
                duration_ms = output.duration_ms,
                "Renderer failed"
            );
            return Err(RenderError::ProcessFailed {
                exit_code: output.exit_code,
                stdout: output.stdout,
                stderr: output.stderr,
            });
        }

        tracing::info!(script_id = %id, duration_ms = output.duration_ms, "Render completed");
        Ok(output.duration_ms)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
