//! Pixel buffers shared by every pipeline stage.
//!
//! All buffers of one generation have the same dimensions, fixed at
//! construction.

/// An opaque RGB canvas, 8 bits per channel, row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Canvas {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// Pixel data (RGB, row-major).
    pub data: Vec<[u8; 3]>,
}

impl Canvas {
    /// Create a new canvas filled with a color.
    pub fn new(width: u32, height: u32, fill: [u8; 3]) -> Self {
        let size = width as usize * height as usize;
        Self {
            width,
            height,
            data: vec![fill; size],
        }
    }

    /// Create a new canvas filled with black.
    pub fn new_black(width: u32, height: u32) -> Self {
        Self::new(width, height, [0, 0, 0])
    }

    /// Build a canvas from interleaved RGB bytes.
    ///
    /// Returns `None` when the byte count does not match the dimensions.
    pub fn from_rgb8(width: u32, height: u32, bytes: &[u8]) -> Option<Self> {
        if bytes.len() != width as usize * height as usize * 3 {
            return None;
        }
        let data = bytes
            .chunks_exact(3)
            .map(|px| [px[0], px[1], px[2]])
            .collect();
        Some(Self {
            width,
            height,
            data,
        })
    }

    #[inline]
    fn index(&self, x: u32, y: u32) -> usize {
        y as usize * self.width as usize + x as usize
    }

    /// Get a pixel at the given coordinates.
    #[inline]
    pub fn get(&self, x: u32, y: u32) -> [u8; 3] {
        self.data[self.index(x, y)]
    }

    /// Set a pixel at the given coordinates.
    #[inline]
    pub fn set(&mut self, x: u32, y: u32, rgb: [u8; 3]) {
        let idx = self.index(x, y);
        self.data[idx] = rgb;
    }

    /// One row of pixels.
    #[inline]
    pub fn row(&self, y: u32) -> &[[u8; 3]] {
        let start = self.index(0, y);
        &self.data[start..start + self.width as usize]
    }

    /// One row of pixels, mutably.
    #[inline]
    pub fn row_mut(&mut self, y: u32) -> &mut [[u8; 3]] {
        let start = self.index(0, y);
        let width = self.width as usize;
        &mut self.data[start..start + width]
    }

    /// Whether this canvas has the given dimensions.
    pub fn same_size(&self, width: u32, height: u32) -> bool {
        self.width == width && self.height == height
    }

    /// Extract one channel (0 = red, 1 = green, 2 = blue).
    pub fn channel(&self, c: usize) -> Vec<u8> {
        self.data.iter().map(|px| px[c]).collect()
    }

    /// Convert to interleaved 8-bit RGB bytes.
    pub fn to_rgb8(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(self.data.len() * 3);
        for px in &self.data {
            bytes.extend_from_slice(px);
        }
        bytes
    }
}

/// An RGBA overlay layer, 8 bits per channel, straight (non-premultiplied) alpha.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layer {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// Pixel data (RGBA, row-major).
    pub data: Vec<[u8; 4]>,
}

impl Layer {
    /// Create a fully transparent layer.
    pub fn new_transparent(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            data: vec![[0, 0, 0, 0]; width as usize * height as usize],
        }
    }

    /// Build a layer from a color canvas and a per-pixel alpha mask.
    pub fn from_canvas_and_alpha(canvas: &Canvas, alpha: &Mask) -> Self {
        let data = canvas
            .data
            .iter()
            .zip(&alpha.data)
            .map(|(px, &a)| [px[0], px[1], px[2], a])
            .collect();
        Self {
            width: canvas.width,
            height: canvas.height,
            data,
        }
    }

    /// Get a pixel at the given coordinates.
    #[inline]
    pub fn get(&self, x: u32, y: u32) -> [u8; 4] {
        self.data[y as usize * self.width as usize + x as usize]
    }

    /// Set a pixel at the given coordinates (replaces, does not blend).
    #[inline]
    pub fn set(&mut self, x: u32, y: u32, rgba: [u8; 4]) {
        let idx = y as usize * self.width as usize + x as usize;
        self.data[idx] = rgba;
    }
}

/// Grayscale glyph mask (single channel, row-major).
///
/// 0 is background and 255 is fully inside a glyph.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mask {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// Pixel data (single channel, row-major).
    pub data: Vec<u8>,
}

impl Mask {
    /// Create a new all-zero mask.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            data: vec![0; width as usize * height as usize],
        }
    }

    /// Get a pixel at the given coordinates.
    #[inline]
    pub fn get(&self, x: u32, y: u32) -> u8 {
        self.data[y as usize * self.width as usize + x as usize]
    }

    /// Set a pixel at the given coordinates.
    #[inline]
    pub fn set(&mut self, x: u32, y: u32, value: u8) {
        let idx = y as usize * self.width as usize + x as usize;
        self.data[idx] = value;
    }

    /// True if no pixel is set.
    pub fn is_empty(&self) -> bool {
        self.data.iter().all(|&v| v == 0)
    }

    /// Number of pixels strictly above `threshold`.
    pub fn count_above(&self, threshold: u8) -> usize {
        self.data.iter().filter(|&&v| v > threshold).count()
    }

    /// Inclusive bounding box `(x0, y0, x1, y1)` of non-zero pixels.
    pub fn ink_bounds(&self) -> Option<(u32, u32, u32, u32)> {
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

    /// Copy of this mask with its content moved `dx` pixels horizontally
    /// (negative moves left). Vacated pixels are 0.
    pub fn shifted_x(&self, dx: i32) -> Mask {
        let mut out = Mask::new(self.width, self.height);
        let w = self.width as i64;
        for y in 0..self.height {
            for x in 0..self.width {
                let sx = x as i64 - dx as i64;
                if (0..w).contains(&sx) {
                    out.set(x, y, self.get(sx as u32, y));
                }
            }
        }
        out
    }
}
