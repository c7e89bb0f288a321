//! Color utilities for text visual synthesis.

/// RGB color with f64 components (0.0 to 1.0 range).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

impl Color {
    /// Create a new color.
    pub const fn rgb(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b }
    }

    /// Create black.
    pub const fn black() -> Self {
        Self::rgb(0.0, 0.0, 0.0)
    }

    /// Create a color from HSV values, all in [0, 1].
    ///
    /// Hue wraps, so 1.0 and 0.0 are both red.
    pub fn from_hsv(h: f64, s: f64, v: f64) -> Self {
        if s <= 0.0 {
            return Self::rgb(v, v, v);
        }

        let h6 = h.rem_euclid(1.0) * 6.0;
        let i = h6.floor();
        let f = h6 - i;
        let p = v * (1.0 - s);
        let q = v * (1.0 - s * f);
        let t = v * (1.0 - s * (1.0 - f));

        match (i as i32).rem_euclid(6) {
            0 => Self::rgb(v, t, p),
            1 => Self::rgb(q, v, p),
            2 => Self::rgb(p, v, t),
            3 => Self::rgb(p, q, v),
            4 => Self::rgb(t, p, v),
            _ => Self::rgb(v, p, q),
        }
    }

    fn clamp(&self) -> Color {
        Color {
            r: self.r.clamp(0.0, 1.0),
            g: self.g.clamp(0.0, 1.0),
            b: self.b.clamp(0.0, 1.0),
        }
    }

    /// Convert to 8-bit RGB, truncating toward zero.
    ///
    /// Truncation (not rounding) is part of the output contract: every
    /// procedural color in the pipeline is quantized this way.
    pub fn to_rgb8(&self) -> [u8; 3] {
        let c = self.clamp();
        [
            (c.r * 255.0) as u8,
            (c.g * 255.0) as u8,
            (c.b * 255.0) as u8,
        ]
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::black()
    }
}

/// Integer luma of an 8-bit RGB pixel (ITU-R 601 weights, 16-bit fixed point).
#[inline]
pub fn luma8(rgb: [u8; 3]) -> u8 {
    let l = rgb[0] as u32 * 19595 + rgb[1] as u32 * 38470 + rgb[2] as u32 * 7471 + 0x8000;
    (l >> 16) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-10
    }

    #[test]
    fn test_hsv_primaries() {
        let red = Color::from_hsv(0.0, 1.0, 1.0);
        assert!(approx(red.r, 1.0) && approx(red.g, 0.0) && approx(red.b, 0.0));

        let green = Color::from_hsv(1.0 / 3.0, 1.0, 1.0);
        assert!(approx(green.g, 1.0));
        assert!(green.r < 1e-9 && green.b < 1e-9);

        let blue = Color::from_hsv(2.0 / 3.0, 1.0, 1.0);
        assert!(approx(blue.b, 1.0));
    }

    #[test]
    fn test_hsv_hue_wraps() {
        assert_eq!(Color::from_hsv(1.0, 0.8, 0.9), Color::from_hsv(0.0, 0.8, 0.9));
        assert_eq!(Color::from_hsv(1.25, 0.5, 0.5), Color::from_hsv(0.25, 0.5, 0.5));
    }

    #[test]
    fn test_hsv_zero_saturation_is_gray() {
        assert_eq!(Color::from_hsv(0.4, 0.0, 0.25), Color::rgb(0.25, 0.25, 0.25));
    }

    #[test]
    fn test_to_rgb8_truncates() {
        assert_eq!(Color::rgb(0.999, 0.999, 0.999).to_rgb8(), [254, 254, 254]);
        assert_eq!(Color::rgb(1.0, 1.0, 1.0).to_rgb8(), [255, 255, 255]);
        assert_eq!(Color::rgb(-1.0, 2.0, 0.5).to_rgb8(), [0, 255, 127]);
    }

    #[test]
    fn test_luma8() {
        assert_eq!(luma8([0, 0, 0]), 0);
        assert_eq!(luma8([255, 255, 255]), 255);
        assert_eq!(luma8([255, 0, 0]), 76);
        assert_eq!(luma8([0, 255, 0]), 150);
        assert_eq!(luma8([0, 0, 255]), 29);
    }
}
