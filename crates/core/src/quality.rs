//! Renderer quality tiers.

use std::fmt;
use std::str::FromStr;

/// A quality name that matches no tier.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown render quality '{0}' (expected low, medium, high, production, or fourk)")]
pub struct UnknownQuality(pub String);

/// Quality preset passed to the renderer.
///
/// Each tier maps to a command-line flag and to the directory name the
/// renderer writes its output under (`<height>p<fps>`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RenderQuality {
    #[default]
    Low,
    Medium,
    High,
    Production,
    Fourk,
}

impl RenderQuality {
    /// Command-line flag selecting this tier.
    pub fn flag(self) -> &'static str {
        match self {
            Self::Low => "-ql",
            Self::Medium => "-qm",
            Self::High => "-qh",
            Self::Production => "-qp",
            Self::Fourk => "-qk",
        }
    }

    /// Output directory tag the renderer uses for this tier.
    pub fn dir_tag(self) -> &'static str {
        match self {
            Self::Low => "480p15",
            Self::Medium => "720p30",
            Self::High => "1080p60",
            Self::Production => "1440p60",
            Self::Fourk => "2160p60",
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
            Self::Production => "production",
            Self::Fourk => "fourk",
        }
    }
}

impl fmt::Display for RenderQuality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RenderQuality {
    type Err = UnknownQuality;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "low" => Ok(Self::Low),
            "medium" => Ok(Self::Medium),
            "high" => Ok(Self::High),
            "production" => Ok(Self::Production),
            "fourk" | "4k" => Ok(Self::Fourk),
            other => Err(UnknownQuality(other.to_string())),
        }
    }
}
