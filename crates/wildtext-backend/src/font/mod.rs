//! Glyph rasterizers shipped with the crate.

mod bitmap;

pub use bitmap::{BitmapFont, GLYPH_HEIGHT, GLYPH_WIDTH};
