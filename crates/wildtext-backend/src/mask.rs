//! Glyph mask provider.
//!
//! Turns text into a grayscale [`Mask`] centered on the canvas. Rasterizers
//! are injected as an ordered list of candidates; the first one that succeeds
//! wins, and the built-in [`BitmapFont`] is used when none does.

use thiserror::Error;
use tracing::{debug, instrument, warn};

use crate::canvas::Mask;
use crate::font::BitmapFont;
use crate::generate::GenerateError;

/// Errors a rasterizer can report.
#[derive(Debug, Error)]
pub enum RasterizeError {
    /// The rasterizer could not load its font.
    #[error("font not available: {0}")]
    FontUnavailable(String),

    /// The rendered text would not fit in memory.
    #[error("glyph bitmap too large: {0}x{1}")]
    TooLarge(u64, u64),

    /// The rasterizer returned an inconsistent bitmap.
    #[error("malformed glyph bitmap: {0}")]
    Malformed(String),
}

/// A rasterized line of text, tightly or loosely cropped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GlyphBitmap {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// Coverage values, row-major.
    pub data: Vec<u8>,
}

impl GlyphBitmap {
    /// Create a blank bitmap.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            data: vec![0; width as usize * height as usize],
        }
    }

    /// A zero-sized bitmap.
    pub fn empty() -> Self {
        Self::new(0, 0)
    }

    /// Get a pixel at the given coordinates.
    #[inline]
    pub fn get(&self, x: u32, y: u32) -> u8 {
        self.data[y as usize * self.width as usize + x as usize]
    }

    /// Fill a rectangle, clipped to the bitmap.
    pub fn fill_rect(&mut self, x: u32, y: u32, w: u32, h: u32, value: u8) {
        let x1 = x.saturating_add(w).min(self.width);
        let y1 = y.saturating_add(h).min(self.height);
        for py in y.min(y1)..y1 {
            let row = py as usize * self.width as usize;
            for px in x.min(x1)..x1 {
                self.data[row + px as usize] = value;
            }
        }
    }

    /// Inclusive bounding box of non-zero pixels.
    fn ink_bounds(&self) -> Option<(u32, u32, u32, u32)> {
        let mut bounds: Option<(u32, u32, u32, u32)> = None;
        for y in 0..self.height {
            for x in 0..self.width {
                if self.get(x, y) == 0 {
                    continue;
                }
                bounds = Some(match bounds {
                    None => (x, y, x, y),
                    Some((x0, y0, x1, y1)) => (x0.min(x), y0.min(y), x1.max(x), y1.max(y)),
                });
            }
        }
        bounds
    }

    fn check_shape(&self) -> Result<(), RasterizeError> {
        let expected = self.width as usize * self.height as usize;
        if self.data.len() != expected {
            return Err(RasterizeError::Malformed(format!(
                "expected {} bytes for {}x{}, got {}",
                expected,
                self.width,
                self.height,
                self.data.len()
            )));
        }
        Ok(())
    }
}

/// A source of glyph coverage for a line of text.
///
/// Implementations must be deterministic: the same text and size always
/// produce the same bitmap.
pub trait GlyphRasterizer: Send + Sync {
    /// Short name used in logs.
    fn name(&self) -> &str;

    /// Rasterize `text` at the nominal `font_size`.
    fn rasterize(&self, text: &str, font_size: u32) -> Result<GlyphBitmap, RasterizeError>;
}

/// Renders centered text masks through an ordered rasterizer chain.
pub struct MaskProvider {
    candidates: Vec<Box<dyn GlyphRasterizer>>,
    fallback: BitmapFont,
}

impl MaskProvider {
    /// Create a provider with an ordered list of candidates.
    pub fn new(candidates: Vec<Box<dyn GlyphRasterizer>>) -> Self {
        Self {
            candidates,
            fallback: BitmapFont::new(),
        }
    }

    /// Create a provider that only uses the built-in font.
    pub fn builtin() -> Self {
        Self::new(Vec::new())
    }

    /// Append a candidate to the end of the chain.
    pub fn with_candidate(mut self, candidate: Box<dyn GlyphRasterizer>) -> Self {
        self.candidates.push(candidate);
        self
    }

    /// Names of the candidates in resolution order, fallback last.
    pub fn candidate_names(&self) -> Vec<&str> {
        self.candidates
            .iter()
            .map(|c| c.name())
            .chain(std::iter::once(self.fallback.name()))
            .collect()
    }

    /// Render `text` into a `width` x `height` mask, centered on the canvas.
    ///
    /// Empty or whitespace-only text yields an all-zero mask.
    #[instrument(skip(self), fields(chars = text.chars().count()))]
    pub fn render_mask(
        &self,
        text: &str,
        width: u32,
        height: u32,
        font_size: u32,
    ) -> Result<Mask, GenerateError> {
        if text.trim().is_empty() {
            return Ok(Mask::new(width, height));
        }

        let bitmap = self.rasterize(text, font_size)?;
        Ok(center_bitmap(&bitmap, width, height))
    }

    fn rasterize(&self, text: &str, font_size: u32) -> Result<GlyphBitmap, GenerateError> {
        for candidate in &self.candidates {
            match candidate
                .rasterize(text, font_size)
                .and_then(|b| b.check_shape().map(|_| b))
            {
                Ok(bitmap) => {
                    debug!(rasterizer = candidate.name(), "glyphs rasterized");
                    return Ok(bitmap);
                }
                Err(err) => {
                    warn!(rasterizer = candidate.name(), error = %err, "rasterizer failed, trying next");
                }
            }
        }

        self.fallback
            .rasterize(text, font_size)
            .map_err(|err| GenerateError::ResourceUnavailable(format!("built-in font: {}", err)))
    }
}

impl Default for MaskProvider {
    fn default() -> Self {
        Self::builtin()
    }
}

/// Blit the inked region of `bitmap` centered on a new mask; overflow is clipped.
fn center_bitmap(bitmap: &GlyphBitmap, width: u32, height: u32) -> Mask {
    let mut mask = Mask::new(width, height);
    let Some((x0, y0, x1, y1)) = bitmap.ink_bounds() else {
        return mask;
    };

    let ink_w = (x1 - x0 + 1) as i64;
    let ink_h = (y1 - y0 + 1) as i64;
    let off_x = (width as i64 - ink_w).div_euclid(2);
    let off_y = (height as i64 - ink_h).div_euclid(2);

    for by in y0..=y1 {
        let ty = off_y + (by - y0) as i64;
        if !(0..height as i64).contains(&ty) {
            continue;
        }
        for bx in x0..=x1 {
            let tx = off_x + (bx - x0) as i64;
            if !(0..width as i64).contains(&tx) {
                continue;
            }
            mask.set(tx as u32, ty as u32, bitmap.get(bx, by));
        }
    }
    mask
}
