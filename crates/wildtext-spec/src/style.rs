//! Style selector.

use serde::{Deserialize, Serialize};

use crate::error::{ErrorCode, ValidationError};

/// Visual styles supported by WildText.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Style {
    /// Particle energy field: seeded particles inside the glyphs over flowing
    /// energy lines.
    Particle,
    /// Holographic glitch: per-channel split glyphs over a wave hue field, with
    /// glitch slices and scan lines.
    Holographic,
    /// Liquid metal chrome: dripping glyphs over blurred metallic blobs.
    Liquid,
}

impl Style {
    /// Returns the style as a string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Style::Particle => "particle",
            Style::Holographic => "holographic",
            Style::Liquid => "liquid",
        }
    }

    /// One-line description used by listings.
    pub fn description(&self) -> &'static str {
        match self {
            Style::Particle => "Particle energy field",
            Style::Holographic => "Holographic glitch",
            Style::Liquid => "Liquid metal chrome",
        }
    }

    /// Returns all styles.
    pub fn all() -> &'static [Style] {
        &[Style::Particle, Style::Holographic, Style::Liquid]
    }
}

impl std::fmt::Display for Style {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Style {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "particle" => Ok(Style::Particle),
            "holographic" => Ok(Style::Holographic),
            "liquid" => Ok(Style::Liquid),
            _ => Err(ValidationError::with_path(
                ErrorCode::UnknownStyle,
                format!(
                    "unknown style: {} (expected particle, holographic, or liquid)",
                    s
                ),
                "style",
            )),
        }
    }
}
