//! On-disk layout shared by the orchestrator and the static file server.
//!
//! ```text
//! <root>/temp_scenes/scene_<id>.py                        generated script
//! <root>/media/videos/scene_<id>/<tag>/GeneratedScene.mp4 renderer output
//! <root>/static/videos/<id>.mp4                           published video
//! ```
//!
//! The media path is the renderer's own naming convention and must track the
//! installed renderer version.

use std::path::{Path, PathBuf};

use uuid::Uuid;

use crate::prompt::SCENE_CLASS_NAME;
use crate::quality::RenderQuality;

/// Directory (relative to the root) holding generated scripts.
pub const SCRIPTS_DIR: &str = "temp_scenes";

/// Directory (relative to the root) the renderer writes videos under.
pub const MEDIA_VIDEOS_DIR: &str = "media/videos";

/// Directory (relative to the root) served under [`STATIC_URL_PREFIX`].
pub const STATIC_DIR: &str = "static";

/// Subdirectory of [`STATIC_DIR`] holding published videos.
pub const VIDEOS_SUBDIR: &str = "videos";

/// URL prefix the static directory is mounted at.
pub const STATIC_URL_PREFIX: &str = "/static";

/// Resolves every path the render pipeline touches from a single root.
#[derive(Debug, Clone)]
pub struct RenderWorkspace {
    root: PathBuf,
}

impl RenderWorkspace {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn scripts_dir(&self) -> PathBuf {
        self.root.join(SCRIPTS_DIR)
    }

    pub fn static_dir(&self) -> PathBuf {
        self.root.join(STATIC_DIR)
    }

    pub fn static_videos_dir(&self) -> PathBuf {
        self.static_dir().join(VIDEOS_SUBDIR)
    }

    /// File stem of the script for `id`, also the renderer's output folder name.
    pub fn script_stem(id: Uuid) -> String {
        format!("scene_{id}")
    }

    /// Script path relative to the root, as passed to the renderer.
    pub fn script_relative_path(id: Uuid) -> PathBuf {
        Path::new(SCRIPTS_DIR).join(format!("{}.py", Self::script_stem(id)))
    }

    pub fn script_path(&self, id: Uuid) -> PathBuf {
        self.root.join(Self::script_relative_path(id))
    }

    /// Where the renderer is expected to leave the video for `id`.
    pub fn output_path(&self, id: Uuid, quality: RenderQuality) -> PathBuf {
        self.root
            .join(MEDIA_VIDEOS_DIR)
            .join(Self::script_stem(id))
            .join(quality.dir_tag())
            .join(format!("{SCENE_CLASS_NAME}.mp4"))
    }

    /// Final location of the published video for `id`.
    pub fn published_path(&self, id: Uuid) -> PathBuf {
        self.static_videos_dir().join(format!("{id}.mp4"))
    }

    /// Public URL of the published video for `id`.
    pub fn video_url(id: Uuid) -> String {
        format!("{STATIC_URL_PREFIX}/{VIDEOS_SUBDIR}/{id}.mp4")
    }

    /// Create the script and static video directories if they are missing.
    pub async fn prepare(&self) -> std::io::Result<()> {
        tokio::fs::create_dir_all(self.scripts_dir()).await?;
        tokio::fs::create_dir_all(self.static_videos_dir()).await?;
        Ok(())
    }
}
