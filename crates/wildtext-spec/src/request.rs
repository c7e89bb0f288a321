//! Request and resolved configuration types.

use serde::{Deserialize, Serialize};

use crate::error::{SpecError, ValidationError};
use crate::style::Style;
use crate::validation::{validate_config, validate_request};

/// Default canvas width in pixels.
pub const DEFAULT_WIDTH: i64 = 1080;

/// Default canvas height in pixels.
pub const DEFAULT_HEIGHT: i64 = 1080;

/// Largest seed picked when a request omits one (inclusive).
pub const MAX_RANDOM_SEED: u64 = 999_999;

fn default_width() -> i64 {
    DEFAULT_WIDTH
}

fn default_height() -> i64 {
    DEFAULT_HEIGHT
}

/// An unresolved generation request.
///
/// The style is kept as a string and the dimensions as signed integers so
/// that malformed input reaches validation and is reported with an error
/// code instead of failing to parse.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RenderRequest {
    /// Text to render.
    pub text: String,

    /// Style name (`particle`, `holographic`, or `liquid`).
    pub style: String,

    /// Seed for all randomness; picked by the caller when omitted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,

    /// Canvas width in pixels.
    #[serde(default = "default_width")]
    pub width: i64,

    /// Canvas height in pixels.
    #[serde(default = "default_height")]
    pub height: i64,
}

impl RenderRequest {
    /// Creates a request with default dimensions and no seed.
    pub fn new(text: impl Into<String>, style: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            style: style.into(),
            seed: None,
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
        }
    }

    /// Sets the seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Sets the canvas dimensions.
    pub fn with_size(mut self, width: i64, height: i64) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Parses a request from a JSON document.
    pub fn from_json(json: &str) -> Result<Self, SpecError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Serializes the request to pretty-printed JSON.
    pub fn to_json_pretty(&self) -> Result<String, SpecError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Validates the request and resolves it into a [`StyleConfig`].
    ///
    /// `fallback_seed` is used only when the request carries no seed.
    pub fn resolve_with_seed(&self, fallback_seed: u64) -> Result<StyleConfig, ValidationError> {
        let (style, width, height) = validate_request(self)?;
        Ok(StyleConfig {
            style,
            text: self.text.clone(),
            seed: self.seed.unwrap_or(fallback_seed),
            width,
            height,
        })
    }
}

/// A validated generation request with a concrete seed.
///
/// Identical configs always produce byte-identical images.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StyleConfig {
    /// Selected style.
    pub style: Style,
    /// Text to render.
    pub text: String,
    /// Resolved seed.
    pub seed: u64,
    /// Canvas width in pixels.
    pub width: u32,
    /// Canvas height in pixels.
    pub height: u32,
}

impl StyleConfig {
    /// Creates a config. Dimensions are checked by [`StyleConfig::validate`]
    /// and by the backend before rendering.
    pub fn new(text: impl Into<String>, style: Style, seed: u64, width: u32, height: u32) -> Self {
        Self {
            style,
            text: text.into(),
            seed,
            width,
            height,
        }
    }

    /// Returns a copy with a different seed (used for batch variations).
    pub fn with_seed(&self, seed: u64) -> Self {
        Self {
            seed,
            ..self.clone()
        }
    }

    /// Validates the dimensions of this config.
    pub fn validate(&self) -> Result<(), ValidationError> {
        validate_config(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_request_json_defaults() {
        let request = RenderRequest::from_json(r#"{"text": "WILD", "style": "liquid"}"#).unwrap();
        assert_eq!(
            request,
            RenderRequest {
                text: "WILD".to_string(),
                style: "liquid".to_string(),
                seed: None,
                width: 1080,
                height: 1080,
            }
        );
    }

    #[test]
    fn test_request_json_rejects_unknown_fields() {
        let err = RenderRequest::from_json(r#"{"text": "A", "style": "particle", "batch": 3}"#)
            .unwrap_err()
            .into_validation_error();
        assert_eq!(err.code, ErrorCode::InvalidRequest);
    }

    #[test]
    fn test_resolve_keeps_explicit_seed() {
        let config = RenderRequest::new("GENIUS", "holographic")
            .with_seed(7)
            .resolve_with_seed(123)
            .unwrap();
        assert_eq!(
            config,
            StyleConfig::new("GENIUS", Style::Holographic, 7, 1080, 1080)
        );
    }

    #[test]
    fn test_resolve_uses_fallback_seed() {
        let config = RenderRequest::new("A", "particle")
            .with_size(64, 32)
            .resolve_with_seed(99)
            .unwrap();
        assert_eq!(config.seed, 99);
        assert_eq!((config.width, config.height), (64, 32));
    }

    #[test]
    fn test_resolve_rejects_bad_style_and_size() {
        let err = RenderRequest::new("X", "not-a-style")
            .with_seed(0)
            .resolve_with_seed(0)
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::UnknownStyle);

        let err = RenderRequest::new("X", "particle")
            .with_seed(0)
            .with_size(0, 1080)
            .resolve_with_seed(0)
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidDimensions);
    }

    #[test]
    fn test_config_with_seed() {
        let config = StyleConfig::new("A", Style::Particle, 10, 8, 8);
        let next = config.with_seed(11);
        assert_eq!(next.seed, 11);
        assert_eq!(next.text, "A");
        assert_eq!(config.seed, 10);
    }

    #[test]
    fn test_request_json_round_trip() {
        let request = RenderRequest::new("NEXT LEVEL", "particle")
            .with_seed(5)
            .with_size(320, 240);
        let json = request.to_json_pretty().unwrap();
        assert_eq!(RenderRequest::from_json(&json).unwrap(), request);
    }
}
