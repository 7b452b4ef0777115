//! Response envelope returned by the render endpoint.

use serde::Serialize;

/// Role tag on every envelope.
pub const ROLE_LLM: &str = "LLM";

/// Human-readable content for a successful render.
pub const VIDEO_CONTENT: &str = "Video generated successfully";

/// `{ "role": ..., "content": ..., "type": ..., "url": ... }`
#[derive(Debug, Serialize)]
pub struct ResponseEnvelope {
    pub role: &'static str,
    pub content: String,
    #[serde(rename = "type")]
    pub kind: MediaKind,
    pub url: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    Video,
}

impl ResponseEnvelope {
    /// Envelope for a rendered video available at `url`.
    pub fn video(url: String) -> Self {
        Self {
            role: ROLE_LLM,
            content: VIDEO_CONTENT.to_string(),
            kind: MediaKind::Video,
            url,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn video_envelope_serializes_flat() {
        let envelope = ResponseEnvelope::video("/static/videos/abc.mp4".to_string());
        assert_eq!(
            serde_json::to_value(&envelope).unwrap(),
            serde_json::json!({
                "role": "LLM",
                "content": "Video generated successfully",
                "type": "video",
                "url": "/static/videos/abc.mp4",
            })
        );
    }
}
