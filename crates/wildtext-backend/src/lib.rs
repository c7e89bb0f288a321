//! WildText Generation Backend
//!
//! This crate turns a text string, a style, and a seed into a raster image.
//! All output is byte-identical given the same config, on every platform
//! with a correctly rounded `sin`/`cos`.
//!
//! # Pipeline
//!
//! - **Mask**: [`MaskProvider`] rasterizes the text through an ordered chain
//!   of [`GlyphRasterizer`]s, falling back to the built-in 5x7 bitmap font,
//!   and centers the ink on the canvas
//! - **Fields**: seeded particle, flow, and blob fields plus the seed-free
//!   holographic wave field ([`field`])
//! - **Styles**: particle, holographic, and liquid metal renderers ([`style`])
//! - **Effects and compositing**: blur, blending, glitches, drips, and tone
//!   adjustments ([`effects`], [`composite`], [`filter`])
//! - **Deterministic PNG**: fixed encoder settings and BLAKE3 hashing ([`png`])
//!
//! # Example
//!
//! ```no_run
//! use wildtext_backend::{generate, MaskProvider};
//! use wildtext_backend::png::{write_rgb, PngConfig};
//! use wildtext_spec::{Style, StyleConfig};
//! use std::path::Path;
//!
//! let config = StyleConfig::new("WILD", Style::Liquid, 42, 1080, 1080);
//! let result = generate(&config, &MaskProvider::builtin()).unwrap();
//! write_rgb(&result.canvas, Path::new("WILD_liquid_seed42.png"), &PngConfig::default()).unwrap();
//! ```
//!
//! # Determinism
//!
//! - One PCG32 RNG per generation, passed by `&mut` to every stage in a
//!   fixed order
//! - Blur, blending, and compositing use integer or correctly rounded math
//! - Procedural colors are quantized by truncation
//! - PNG encoding uses fixed compression settings

pub mod canvas;
pub mod color;
pub mod composite;
pub mod effects;
pub mod field;
pub mod filter;
pub mod font;
pub mod generate;
pub mod mask;
pub mod png;
pub mod rng;
pub mod style;

// Re-export main types for convenience
pub use canvas::{Canvas, Layer, Mask};
pub use color::Color;
pub use effects::{Drip, GlitchSlice};
pub use font::BitmapFont;
pub use generate::{generate, generate_request, GenerateError, RenderResult, RenderTrace};
pub use mask::{GlyphBitmap, GlyphRasterizer, MaskProvider, RasterizeError};
pub use png::{PngConfig, PngError};
pub use rng::DeterministicRng;
pub use style::{renderer_for, StyleRenderer};
