//! Main entry point for text visual generation.
//!
//! A generation validates its config, renders the glyph mask, creates one
//! [`DeterministicRng`] from the seed, and hands both to the style renderer.

use thiserror::Error;
use tracing::{debug, instrument};

use wildtext_spec::{
    BackendError, RenderRequest, Style, StyleConfig, ValidationError, MAX_RANDOM_SEED,
};

use crate::canvas::Canvas;
use crate::effects::{Drip, GlitchSlice};
use crate::mask::MaskProvider;
use crate::png::{write_rgb_to_vec_with_hash, PngConfig, PngError};
use crate::rng::{random_seed, DeterministicRng};
use crate::style::renderer_for;

/// Errors from text visual generation.
#[derive(Debug, Error)]
pub enum GenerateError {
    #[error("invalid configuration: {0}")]
    Configuration(#[from] ValidationError),

    #[error("resource unavailable: {0}")]
    ResourceUnavailable(String),

    #[error("computation error: {0}")]
    Computation(String),

    #[error("PNG error: {0}")]
    Png(#[from] PngError),
}

impl GenerateError {
    /// True for errors caused by the request rather than the engine.
    pub fn is_configuration(&self) -> bool {
        matches!(self, GenerateError::Configuration(_))
    }
}

impl BackendError for GenerateError {
    fn code(&self) -> &'static str {
        match self {
            GenerateError::Configuration(_) => "WILDTEXT_001",
            GenerateError::ResourceUnavailable(_) => "WILDTEXT_002",
            GenerateError::Computation(_) => "WILDTEXT_003",
            GenerateError::Png(_) => "WILDTEXT_004",
        }
    }

    fn category(&self) -> &'static str {
        "wildtext"
    }
}

/// Record of the random decisions one generation made.
///
/// Diagnostic only; it is never read back by the renderers.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderTrace {
    /// Particle candidates drawn from the RNG.
    pub particles_evaluated: usize,
    /// Particles that landed inside the mask and were drawn.
    pub particles_drawn: usize,
    /// Energy flow segments drawn.
    pub flow_segments: usize,
    /// Liquid metal blobs drawn.
    pub blobs: usize,
    /// Glitch slices in draw order.
    pub glitch_slices: Vec<GlitchSlice>,
    /// Drips in column order.
    pub drips: Vec<Drip>,
    /// Scan-line opacities, one per scanned row, top to bottom.
    pub scan_lines: Vec<u8>,
}

/// Result of one generation.
#[derive(Debug, Clone)]
pub struct RenderResult {
    /// The final image.
    pub canvas: Canvas,
    /// The seed that produced it.
    pub seed: u64,
    /// The style that produced it.
    pub style: Style,
    /// Random decisions taken along the way.
    pub trace: RenderTrace,
}

impl RenderResult {
    /// Encode the canvas as a deterministic PNG, returning the bytes and
    /// their BLAKE3 hash.
    pub fn encode_png(&self, config: &PngConfig) -> Result<(Vec<u8>, String), GenerateError> {
        Ok(write_rgb_to_vec_with_hash(&self.canvas, config)?)
    }
}

/// Generate an image from a validated config.
///
/// Identical configs produce byte-identical canvases.
#[instrument(skip_all, fields(style = %config.style, seed = config.seed, width = config.width, height = config.height))]
pub fn generate(config: &StyleConfig, provider: &MaskProvider) -> Result<RenderResult, GenerateError> {
    config.validate()?;

    let renderer = renderer_for(config.style);
    let mask = provider.render_mask(
        &config.text,
        config.width,
        config.height,
        renderer.font_size(),
    )?;
    debug!(inked = mask.count_above(0), "mask ready");

    let mut rng = DeterministicRng::new(config.seed);
    let mut trace = RenderTrace::default();
    let canvas = renderer.render(mask, &mut rng, &mut trace)?;

    if !canvas.same_size(config.width, config.height) {
        return Err(GenerateError::Computation(format!(
            "renderer produced {}x{}, expected {}x{}",
            canvas.width, canvas.height, config.width, config.height
        )));
    }

    debug!(
        particles_drawn = trace.particles_drawn,
        glitch_slices = trace.glitch_slices.len(),
        drips = trace.drips.len(),
        "generation complete"
    );

    Ok(RenderResult {
        canvas,
        seed: config.seed,
        style: config.style,
        trace,
    })
}

/// Validate and generate an unresolved request.
///
/// A request without a seed gets a fresh one in `[0, 999999]`, reported in
/// the result.
pub fn generate_request(
    request: &RenderRequest,
    provider: &MaskProvider,
) -> Result<RenderResult, GenerateError> {
    let seed = request
        .seed
        .unwrap_or_else(|| random_seed(MAX_RANDOM_SEED));
    let config = request.resolve_with_seed(seed)?;
    generate(&config, provider)
}

#[cfg(test)]
mod tests {
    use super::*;
    use wildtext_spec::ErrorCode;

    fn small(style: Style, text: &str, seed: u64) -> StyleConfig {
        StyleConfig::new(text, style, seed, 96, 64)
    }

    #[test]
    fn test_error_codes() {
        let err = GenerateError::from(ValidationError::new(ErrorCode::UnknownStyle, "nope"));
        assert_eq!(err.code(), "WILDTEXT_001");
        assert!(err.is_configuration());
        assert_eq!(err.category(), "wildtext");
        assert_eq!(GenerateError::ResourceUnavailable("x".into()).code(), "WILDTEXT_002");
        assert_eq!(GenerateError::Computation("x".into()).code(), "WILDTEXT_003");
    }

    #[test]
    fn test_encode_png_reports_png_error_code() {
        let result = RenderResult {
            canvas: Canvas::new_black(0, 0),
            seed: 0,
            style: Style::Particle,
            trace: RenderTrace::default(),
        };
        let err = result.encode_png(&PngConfig::default()).unwrap_err();
        assert!(matches!(err, GenerateError::Png(PngError::InvalidDimensions(_))));
        assert_eq!(err.code(), "WILDTEXT_004");
        assert!(!err.is_configuration());
    }

    #[test]
    fn test_encode_png_hash_matches_bytes() {
        let provider = MaskProvider::builtin();
        let result = generate(&small(Style::Liquid, "OK", 3), &provider).unwrap();
        let (bytes, hash) = result.encode_png(&PngConfig::default()).unwrap();
        assert_eq!(hash, crate::png::hash_png(&bytes));
        assert_eq!(crate::png::decode_rgb(&bytes).unwrap(), result.canvas);
    }

    #[test]
    fn test_generate_is_deterministic_for_every_style() {
        let provider = MaskProvider::builtin();
        for &style in Style::all() {
            let a = generate(&small(style, "HI", 5), &provider).unwrap();
            let b = generate(&small(style, "HI", 5), &provider).unwrap();
            assert_eq!(a.canvas, b.canvas, "style {}", style);
            assert_eq!(a.trace, b.trace, "style {}", style);
            assert_eq!(a.seed, 5);
            assert_eq!(a.style, style);
        }
    }

    #[test]
    fn test_zero_dimension_config_is_rejected() {
        let provider = MaskProvider::builtin();
        let config = StyleConfig::new("X", Style::Particle, 0, 0, 1080);
        let err = generate(&config, &provider).unwrap_err();
        assert!(err.is_configuration());
    }

    #[test]
    fn test_request_with_unknown_style_is_rejected() {
        let provider = MaskProvider::builtin();
        let request = RenderRequest::new("X", "not-a-style").with_seed(0);
        match generate_request(&request, &provider) {
            Err(GenerateError::Configuration(err)) => assert_eq!(err.code, ErrorCode::UnknownStyle),
            other => panic!("expected configuration error, got {:?}", other.map(|r| r.seed)),
        }
    }

    #[test]
    fn test_request_without_seed_reports_picked_seed() {
        let provider = MaskProvider::builtin();
        let request = RenderRequest::new("A", "holographic").with_size(32, 24);
        let result = generate_request(&request, &provider).unwrap();
        assert!(result.seed <= MAX_RANDOM_SEED);

        let again = request.clone().with_seed(result.seed);
        let replay = generate_request(&again, &provider).unwrap();
        assert_eq!(result.canvas, replay.canvas);
    }
}
