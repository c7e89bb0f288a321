//! Reference requests used across the end-to-end tests.

use wildtext_spec::{RenderRequest, Style, StyleConfig};

/// Canvas side used by the full-size scenarios.
pub const FULL_SIZE: u32 = 1080;

/// Scenario 1: liquid metal "WILD", seed 42.
pub fn wild_liquid() -> StyleConfig {
    StyleConfig::new("WILD", Style::Liquid, 42, FULL_SIZE, FULL_SIZE)
}

/// Scenario 2: empty text with the particle style, seed 1.
pub fn empty_particle() -> StyleConfig {
    StyleConfig::new("", Style::Particle, 1, FULL_SIZE, FULL_SIZE)
}

/// Scenario 3: holographic "GENIUS", seed 7.
pub fn genius_holographic() -> StyleConfig {
    StyleConfig::new("GENIUS", Style::Holographic, 7, FULL_SIZE, FULL_SIZE)
}

/// Scenario 4: an unknown style name.
pub fn unknown_style_request() -> RenderRequest {
    RenderRequest::new("X", "not-a-style").with_seed(0)
}

/// Scenario 5: zero width.
pub fn zero_width_request() -> RenderRequest {
    RenderRequest::new("X", "particle").with_seed(0).with_size(0, 1080)
}
