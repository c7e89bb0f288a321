//! Built-in dot-matrix glyph rasterizer.
//!
//! Renders ASCII text from a hardcoded 5x7 pattern table, scaling each dot
//! to a square block. It never touches the filesystem, so masks rendered with
//! it are identical on every machine.

use crate::mask::{GlyphBitmap, GlyphRasterizer, RasterizeError};

/// Glyph cell width in dots.
pub const GLYPH_WIDTH: u32 = 5;
/// Glyph cell height in dots.
pub const GLYPH_HEIGHT: u32 = 7;
/// Blank dot columns between glyphs.
const GLYPH_SPACING: u32 = 1;
/// Font size units per dot.
const SIZE_PER_DOT: u32 = 8;
/// Upper bound on the rasterized bitmap area.
const MAX_BITMAP_PIXELS: u64 = 64 * 1024 * 1024;

/// Dot-matrix rasterizer backed by the 5x7 pattern table.
#[derive(Debug, Clone, Copy, Default)]
pub struct BitmapFont;

impl BitmapFont {
    /// Create the built-in font.
    pub const fn new() -> Self {
        Self
    }

    /// Pixels per dot for a nominal font size.
    pub fn dot_scale(font_size: u32) -> u32 {
        (font_size / SIZE_PER_DOT).max(1)
    }
}

impl GlyphRasterizer for BitmapFont {
    fn name(&self) -> &str {
        "builtin-5x7"
    }

    fn rasterize(&self, text: &str, font_size: u32) -> Result<GlyphBitmap, RasterizeError> {
        let chars: Vec<char> = text.chars().collect();
        if chars.is_empty() {
            return Ok(GlyphBitmap::empty());
        }

        let scale = Self::dot_scale(font_size) as u64;
        let advance = (GLYPH_WIDTH + GLYPH_SPACING) as u64 * scale;
        let width = chars.len() as u64 * advance - GLYPH_SPACING as u64 * scale;
        let height = GLYPH_HEIGHT as u64 * scale;
        if width * height > MAX_BITMAP_PIXELS {
            return Err(RasterizeError::TooLarge(width, height));
        }

        let mut bitmap = GlyphBitmap::new(width as u32, height as u32);
        for (i, &ch) in chars.iter().enumerate() {
            let pattern = glyph_pattern(ch);
            let origin_x = i as u64 * advance;
            for dy in 0..GLYPH_HEIGHT {
                for dx in 0..GLYPH_WIDTH {
                    if pattern[(dy * GLYPH_WIDTH + dx) as usize] == 0 {
                        continue;
                    }
                    let px = origin_x + dx as u64 * scale;
                    let py = dy as u64 * scale;
                    bitmap.fill_rect(px as u32, py as u32, scale as u32, scale as u32, 255);
                }
            }
        }

        Ok(bitmap)
    }
}

/// Get the dot pattern for a character.
///
/// Lowercase letters fold to uppercase; characters outside the table render
/// as `?`.
fn glyph_pattern(ch: char) -> &'static [u8] {
    let ch = ch.to_ascii_uppercase();
    let code = ch as u32;
    let index = if (32..32 + FONT_5X7.len() as u32).contains(&code) {
        code - 32
    } else {
        '?' as u32 - 32
    };
    FONT_5X7[index as usize]
}

// Hardcoded font patterns (1 = pixel on, 0 = pixel off)
// Each pattern is a flattened 5x7 array stored row-major

/// 5x7 font patterns (space through _)
const FONT_5X7: &[&[u8]] = &[
    // Space (32)
    &[
        0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
        0, 0, 0, 0, 0,
    ],
    // ! (33)
    &[
        0, 0, 1, 0, 0, 0, 0, 1, 0, 0, 0, 0, 1, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0,
        0, 0, 0, 0, 0,
    ],
    // " (34)
    &[
        0, 1, 0, 1, 0, 0, 1, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
        0, 0, 0, 0, 0,
    ],
    // # (35)
    &[
        0, 1, 0, 1, 0, 1, 1, 1, 1, 1, 0, 1, 0, 1, 0, 1, 1, 1, 1, 1, 0, 1, 0, 1, 0, 0, 0, 0, 0, 0,
        0, 0, 0, 0, 0,
    ],
    // $ (36)
    &[
        0, 0, 1, 0, 0, 0, 1, 1, 1, 0, 1, 0, 1, 0, 0, 0, 1, 1, 1, 0, 0, 0, 1, 0, 1, 0, 1, 1, 1, 0,
        0, 0, 1, 0, 0,
    ],
    // % (37)
    &[
        1, 1, 0, 0, 1, 1, 1, 0, 1, 0, 0, 0, 1, 0, 0, 0, 1, 0, 1, 1, 1, 0, 0, 1, 1, 0, 0, 0, 0, 0,
        0, 0, 0, 0, 0,
    ],
    // & (38)
    &[
        0, 1, 1, 0, 0, 1, 0, 0, 1, 0, 0, 1, 1, 0, 0, 1, 0, 0, 1, 0, 1, 0, 0, 1, 1, 0, 1, 1, 0, 1,
        0, 0, 0, 0, 0,
    ],
    // ' (39)
    &[
        0, 0, 1, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
        0, 0, 0, 0, 0,
    ],
    // ( (40)
    &[
        0, 0, 1, 0, 0, 0, 1, 0, 0, 0, 0, 1, 0, 0, 0, 0, 1, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 1, 0, 0,
        0, 0, 0, 0, 0,
    ],
    // ) (41)
    &[
        0, 0, 1, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 1, 0, 0, 0, 0, 1, 0, 0, 0, 0, 1, 0, 0, 0, 1, 0, 0,
        0, 0, 0, 0, 0,
    ],
    // * (42)
    &[
        0, 0, 0, 0, 0, 1, 0, 1, 0, 1, 0, 1, 1, 1, 0, 1, 0, 1, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
        0, 0, 0, 0, 0,
    ],
    // + (43)
    &[
        0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 1, 0, 0, 1, 1, 1, 1, 1, 0, 0, 1, 0, 0, 0, 0, 1, 0, 0,
        0, 0, 0, 0, 0,
    ],
    // , (44)
    &[
        0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 1, 0, 0,
        0, 1, 0, 0, 0,
    ],
    // - (45)
    &[
        0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 1, 1, 1, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
        0, 0, 0, 0, 0,
    ],
    // . (46)
    &[
        0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0,
        0, 0, 0, 0, 0,
    ],
    // / (47)
    &[
        0, 0, 0, 0, 1, 0, 0, 0, 1, 0, 0, 0, 1, 0, 0, 0, 1, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0,
        0, 0, 0, 0, 0,
    ],
    // 0 (48)
    &[
        0, 1, 1, 1, 0, 1, 0, 0, 0, 1, 1, 0, 0, 1, 1, 1, 0, 1, 0, 1, 1, 1, 0, 0, 1, 1, 0, 0, 0, 1,
        0, 1, 1, 1, 0,
    ],
    // 1 (49)
    &[
        0, 0, 1, 0, 0, 0, 1, 1, 0, 0, 0, 0, 1, 0, 0, 0, 0, 1, 0, 0, 0, 0, 1, 0, 0, 0, 0, 1, 0, 0,
        0, 1, 1, 1, 0,
    ],
    // 2 (50)
    &[
        0, 1, 1, 1, 0, 1, 0, 0, 0, 1, 0, 0, 0, 0, 1, 0, 0, 0, 1, 0, 0, 0, 1, 0, 0, 0, 1, 0, 0, 0,
        1, 1, 1, 1, 1,
    ],
    // 3 (51)
    &[
        1, 1, 1, 1, 1, 0, 0, 0, 1, 0, 0, 0, 1, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 1, 1, 0, 0, 0, 1,
        0, 1, 1, 1, 0,
    ],
    // 4 (52)
    &[
        0, 0, 0, 1, 0, 0, 0, 1, 1, 0, 0, 1, 0, 1, 0, 1, 0, 0, 1, 0, 1, 1, 1, 1, 1, 0, 0, 0, 1, 0,
        0, 0, 0, 1, 0,
    ],
    // 5 (53)
    &[
        1, 1, 1, 1, 1, 1, 0, 0, 0, 0, 1, 1, 1, 1, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 1, 1, 0, 0, 0, 1,
        0, 1, 1, 1, 0,
    ],
    // 6 (54)
    &[
        0, 0, 1, 1, 0, 0, 1, 0, 0, 0, 1, 0, 0, 0, 0, 1, 1, 1, 1, 0, 1, 0, 0, 0, 1, 1, 0, 0, 0, 1,
        0, 1, 1, 1, 0,
    ],
    // 7 (55)
    &[
        1, 1, 1, 1, 1, 0, 0, 0, 0, 1, 0, 0, 0, 1, 0, 0, 0, 1, 0, 0, 0, 1, 0, 0, 0, 0, 1, 0, 0, 0,
        0, 1, 0, 0, 0,
    ],
    // 8 (56)
    &[
        0, 1, 1, 1, 0, 1, 0, 0, 0, 1, 1, 0, 0, 0, 1, 0, 1, 1, 1, 0, 1, 0, 0, 0, 1, 1, 0, 0, 0, 1,
        0, 1, 1, 1, 0,
    ],
    // 9 (57)
    &[
        0, 1, 1, 1, 0, 1, 0, 0, 0, 1, 1, 0, 0, 0, 1, 0, 1, 1, 1, 1, 0, 0, 0, 0, 1, 0, 0, 0, 1, 0,
        0, 1, 1, 0, 0,
    ],
    // : (58)
    &[
        0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0,
        0, 0, 0, 0, 0,
    ],
    // ; (59)
    &[
        0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 1, 0, 0,
        0, 1, 0, 0, 0,
    ],
    // < (60)
    &[
        0, 0, 0, 1, 0, 0, 0, 1, 0, 0, 0, 1, 0, 0, 0, 1, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 1, 0, 0,
        0, 0, 0, 1, 0,
    ],
    // = (61)
    &[
        0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 1, 1, 1, 1, 0, 0, 0, 0, 0, 1, 1, 1, 1, 1, 0, 0, 0, 0, 0,
        0, 0, 0, 0, 0,
    ],
    // > (62)
    &[
        0, 1, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 1, 0, 0, 0, 1, 0, 0, 0, 1, 0, 0,
        0, 1, 0, 0, 0,
    ],
    // ? (63)
    &[
        0, 1, 1, 1, 0, 1, 0, 0, 0, 1, 0, 0, 0, 0, 1, 0, 0, 0, 1, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0,
        0, 0, 1, 0, 0,
    ],
    // @ (64)
    &[
        0, 1, 1, 1, 0, 1, 0, 0, 0, 1, 1, 0, 1, 1, 1, 1, 0, 1, 0, 1, 1, 0, 1, 1, 1, 1, 0, 0, 0, 0,
        0, 1, 1, 1, 0,
    ],
    // A (65)
    &[
        0, 1, 1, 1, 0, 1, 0, 0, 0, 1, 1, 0, 0, 0, 1, 1, 1, 1, 1, 1, 1, 0, 0, 0, 1, 1, 0, 0, 0, 1,
        1, 0, 0, 0, 1,
    ],
    // B (66)
    &[
        1, 1, 1, 1, 0, 1, 0, 0, 0, 1, 1, 0, 0, 0, 1, 1, 1, 1, 1, 0, 1, 0, 0, 0, 1, 1, 0, 0, 0, 1,
        1, 1, 1, 1, 0,
    ],
    // C (67)
    &[
        0, 1, 1, 1, 0, 1, 0, 0, 0, 1, 1, 0, 0, 0, 0, 1, 0, 0, 0, 0, 1, 0, 0, 0, 0, 1, 0, 0, 0, 1,
        0, 1, 1, 1, 0,
    ],
    // D (68)
    &[
        1, 1, 1, 1, 0, 1, 0, 0, 0, 1, 1, 0, 0, 0, 1, 1, 0, 0, 0, 1, 1, 0, 0, 0, 1, 1, 0, 0, 0, 1,
        1, 1, 1, 1, 0,
    ],
    // E (69)
    &[
        1, 1, 1, 1, 1, 1, 0, 0, 0, 0, 1, 0, 0, 0, 0, 1, 1, 1, 1, 0, 1, 0, 0, 0, 0, 1, 0, 0, 0, 0,
        1, 1, 1, 1, 1,
    ],
    // F (70)
    &[
        1, 1, 1, 1, 1, 1, 0, 0, 0, 0, 1, 0, 0, 0, 0, 1, 1, 1, 1, 0, 1, 0, 0, 0, 0, 1, 0, 0, 0, 0,
        1, 0, 0, 0, 0,
    ],
    // G (71)
    &[
        0, 1, 1, 1, 0, 1, 0, 0, 0, 1, 1, 0, 0, 0, 0, 1, 0, 1, 1, 1, 1, 0, 0, 0, 1, 1, 0, 0, 0, 1,
        0, 1, 1, 1, 1,
    ],
    // H (72)
    &[
        1, 0, 0, 0, 1, 1, 0, 0, 0, 1, 1, 0, 0, 0, 1, 1, 1, 1, 1, 1, 1, 0, 0, 0, 1, 1, 0, 0, 0, 1,
        1, 0, 0, 0, 1,
    ],
    // I (73)
    &[
        0, 1, 1, 1, 0, 0, 0, 1, 0, 0, 0, 0, 1, 0, 0, 0, 0, 1, 0, 0, 0, 0, 1, 0, 0, 0, 0, 1, 0, 0,
        0, 1, 1, 1, 0,
    ],
    // J (74)
    &[
        0, 0, 1, 1, 1, 0, 0, 0, 1, 0, 0, 0, 0, 1, 0, 0, 0, 0, 1, 0, 0, 0, 0, 1, 0, 1, 0, 0, 1, 0,
        0, 1, 1, 0, 0,
    ],
    // K (75)
    &[
        1, 0, 0, 0, 1, 1, 0, 0, 1, 0, 1, 0, 1, 0, 0, 1, 1, 0, 0, 0, 1, 0, 1, 0, 0, 1, 0, 0, 1, 0,
        1, 0, 0, 0, 1,
    ],
    // L (76)
    &[
        1, 0, 0, 0, 0, 1, 0, 0, 0, 0, 1, 0, 0, 0, 0, 1, 0, 0, 0, 0, 1, 0, 0, 0, 0, 1, 0, 0, 0, 0,
        1, 1, 1, 1, 1,
    ],
    // M (77)
    &[
        1, 0, 0, 0, 1, 1, 1, 0, 1, 1, 1, 0, 1, 0, 1, 1, 0, 0, 0, 1, 1, 0, 0, 0, 1, 1, 0, 0, 0, 1,
        1, 0, 0, 0, 1,
    ],
    // N (78)
    &[
        1, 0, 0, 0, 1, 1, 1, 0, 0, 1, 1, 0, 1, 0, 1, 1, 0, 0, 1, 1, 1, 0, 0, 0, 1, 1, 0, 0, 0, 1,
        1, 0, 0, 0, 1,
    ],
    // O (79)
    &[
        0, 1, 1, 1, 0, 1, 0, 0, 0, 1, 1, 0, 0, 0, 1, 1, 0, 0, 0, 1, 1, 0, 0, 0, 1, 1, 0, 0, 0, 1,
        0, 1, 1, 1, 0,
    ],
    // P (80)
    &[
        1, 1, 1, 1, 0, 1, 0, 0, 0, 1, 1, 0, 0, 0, 1, 1, 1, 1, 1, 0, 1, 0, 0, 0, 0, 1, 0, 0, 0, 0,
        1, 0, 0, 0, 0,
    ],
    // Q (81)
    &[
        0, 1, 1, 1, 0, 1, 0, 0, 0, 1, 1, 0, 0, 0, 1, 1, 0, 0, 0, 1, 1, 0, 1, 0, 1, 1, 0, 0, 1, 0,
        0, 1, 1, 0, 1,
    ],
    // R (82)
    &[
        1, 1, 1, 1, 0, 1, 0, 0, 0, 1, 1, 0, 0, 0, 1, 1, 1, 1, 1, 0, 1, 0, 1, 0, 0, 1, 0, 0, 1, 0,
        1, 0, 0, 0, 1,
    ],
    // S (83)
    &[
        0, 1, 1, 1, 1, 1, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 1, 1, 1, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 1,
        1, 1, 1, 1, 0,
    ],
    // T (84)
    &[
        1, 1, 1, 1, 1, 0, 0, 1, 0, 0, 0, 0, 1, 0, 0, 0, 0, 1, 0, 0, 0, 0, 1, 0, 0, 0, 0, 1, 0, 0,
        0, 0, 1, 0, 0,
    ],
    // U (85)
    &[
        1, 0, 0, 0, 1, 1, 0, 0, 0, 1, 1, 0, 0, 0, 1, 1, 0, 0, 0, 1, 1, 0, 0, 0, 1, 1, 0, 0, 0, 1,
        0, 1, 1, 1, 0,
    ],
    // V (86)
    &[
        1, 0, 0, 0, 1, 1, 0, 0, 0, 1, 1, 0, 0, 0, 1, 1, 0, 0, 0, 1, 1, 0, 0, 0, 1, 0, 1, 0, 1, 0,
        0, 0, 1, 0, 0,
    ],
    // W (87)
    &[
        1, 0, 0, 0, 1, 1, 0, 0, 0, 1, 1, 0, 0, 0, 1, 1, 0, 1, 0, 1, 1, 0, 1, 0, 1, 1, 1, 0, 1, 1,
        1, 0, 0, 0, 1,
    ],
    // X (88)
    &[
        1, 0, 0, 0, 1, 1, 0, 0, 0, 1, 0, 1, 0, 1, 0, 0, 0, 1, 0, 0, 0, 1, 0, 1, 0, 1, 0, 0, 0, 1,
        1, 0, 0, 0, 1,
    ],
    // Y (89)
    &[
        1, 0, 0, 0, 1, 1, 0, 0, 0, 1, 0, 1, 0, 1, 0, 0, 0, 1, 0, 0, 0, 0, 1, 0, 0, 0, 0, 1, 0, 0,
        0, 0, 1, 0, 0,
    ],
    // Z (90)
    &[
        1, 1, 1, 1, 1, 0, 0, 0, 0, 1, 0, 0, 0, 1, 0, 0, 0, 1, 0, 0, 0, 1, 0, 0, 0, 1, 0, 0, 0, 0,
        1, 1, 1, 1, 1,
    ],
    // [ (91)
    &[
        0, 1, 1, 1, 0, 0, 1, 0, 0, 0, 0, 1, 0, 0, 0, 0, 1, 0, 0, 0, 0, 1, 0, 0, 0, 0, 1, 0, 0, 0,
        0, 1, 1, 1, 0,
    ],
    // \ (92)
    &[
        1, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0,
        0, 0, 0, 0, 0,
    ],
    // ] (93)
    &[
        0, 1, 1, 1, 0, 0, 0, 0, 1, 0, 0, 0, 0, 1, 0, 0, 0, 0, 1, 0, 0, 0, 0, 1, 0, 0, 0, 0, 1, 0,
        0, 1, 1, 1, 0,
    ],
    // ^ (94)
    &[
        0, 0, 1, 0, 0, 0, 1, 0, 1, 0, 1, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
        0, 0, 0, 0, 0,
    ],
    // _ (95)
    &[
        0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
        1, 1, 1, 1, 1,
    ],
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_covers_space_through_underscore() {
        assert_eq!(FONT_5X7.len(), 64);
        for pattern in FONT_5X7 {
            assert_eq!(pattern.len(), (GLYPH_WIDTH * GLYPH_HEIGHT) as usize);
        }
    }

    #[test]
    fn test_empty_text_is_empty_bitmap() {
        let bitmap = BitmapFont::new().rasterize("", 200).unwrap();
        assert_eq!((bitmap.width, bitmap.height), (0, 0));
    }

    #[test]
    fn test_bitmap_dimensions_scale_with_font_size() {
        let font = BitmapFont::new();
        let bitmap = font.rasterize("AB", 16).unwrap();
        // Two 5-dot glyphs plus one spacing column, 2px per dot.
        assert_eq!((bitmap.width, bitmap.height), (22, 14));

        let tiny = font.rasterize("A", 1).unwrap();
        assert_eq!((tiny.width, tiny.height), (5, 7));
    }

    #[test]
    fn test_glyph_dots_become_blocks() {
        // 'I' top row is .XXX.
        let bitmap = BitmapFont::new().rasterize("I", 16).unwrap();
        assert_eq!(bitmap.get(0, 0), 0);
        assert_eq!(bitmap.get(2, 0), 255);
        assert_eq!(bitmap.get(3, 1), 255);
        assert_eq!(bitmap.get(8, 0), 0);
    }

    #[test]
    fn test_lowercase_folds_and_unknown_is_question_mark() {
        assert_eq!(glyph_pattern('w'), glyph_pattern('W'));
        assert_eq!(glyph_pattern('~'), glyph_pattern('?'));
        assert_eq!(glyph_pattern('é'), glyph_pattern('?'));
    }

    #[test]
    fn test_oversized_text_fails() {
        let text = "W".repeat(100_000);
        let err = BitmapFont::new().rasterize(&text, 800).unwrap_err();
        assert!(matches!(err, RasterizeError::TooLarge(_, _)));
    }
}
