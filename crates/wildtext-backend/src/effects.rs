//! Post effects.
//!
//! Each style runs a fixed, ordered subset of these passes. Passes that take
//! the RNG draw from it in a documented order; the rest are pure functions.

use tracing::debug;

use crate::canvas::{Canvas, Mask};
use crate::color::luma8;
use crate::composite::{blend, blend_channel, composite_channel, merge_channels, split_channels};
use crate::filter::gaussian_blur;
use crate::generate::GenerateError;
use crate::rng::DeterministicRng;

/// A horizontal strip displaced by the glitch pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GlitchSlice {
    /// Top row of the strip.
    pub y: u32,
    /// Horizontal displacement (negative moves left).
    pub offset: i32,
    /// Nominal strip height; clipped at the bottom edge.
    pub height: u32,
}

/// A drip hanging below a glyph column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Drip {
    /// Column the drip starts from.
    pub column: u32,
    /// Row of the lowest inked pixel in that column.
    pub origin: u32,
    /// Length in rows.
    pub length: u32,
    /// Width in columns.
    pub width: u32,
}

/// Scale brightness: blend from black by `factor`.
pub fn enhance_brightness(canvas: &Canvas, factor: f64) -> Canvas {
    let mut out = canvas.clone();
    for px in &mut out.data {
        for c in px.iter_mut() {
            *c = blend_channel(0, *c, factor);
        }
    }
    out
}

/// Scale saturation: blend from each pixel's own luma grey by `factor`.
pub fn enhance_saturation(canvas: &Canvas, factor: f64) -> Canvas {
    let mut out = canvas.clone();
    for px in &mut out.data {
        let grey = luma8(*px);
        for c in px.iter_mut() {
            *c = blend_channel(grey, *c, factor);
        }
    }
    out
}

/// Scale contrast: blend from the mean luma grey by `factor`.
pub fn enhance_contrast(canvas: &Canvas, factor: f64) -> Canvas {
    let mut out = canvas.clone();
    if canvas.data.is_empty() {
        return out;
    }

    let total: u64 = canvas.data.iter().map(|&px| luma8(px) as u64).sum();
    let n = canvas.data.len() as u64;
    let mean = ((total + n / 2) / n) as u8;

    for px in &mut out.data {
        for c in px.iter_mut() {
            *c = blend_channel(mean, *c, factor);
        }
    }
    out
}

/// Split red and blue apart horizontally: red moves `strength` pixels left,
/// blue moves right, green stays. Vacated pixels are 0.
pub fn chromatic_aberration(canvas: &Canvas, strength: i32) -> Result<Canvas, GenerateError> {
    let [r, g, b] = split_channels(canvas);
    merge_channels(&r.shifted_x(-strength), &g, &b.shifted_x(strength))
}

/// Add a per-channel boost wherever the matching stencil exceeds `threshold`,
/// saturating at 255.
pub fn stencil_boost(
    canvas: &Canvas,
    stencils: [&Mask; 3],
    threshold: u8,
    boost: [u8; 3],
) -> Result<Canvas, GenerateError> {
    let planes = split_channels(canvas);
    let mut boosted = Vec::with_capacity(3);
    for ((mut plane, stencil), add) in planes.into_iter().zip(stencils).zip(boost) {
        if stencil.width != plane.width || stencil.height != plane.height {
            return Err(GenerateError::Computation(format!(
                "stencil is {}x{}, expected {}x{}",
                stencil.width, stencil.height, plane.width, plane.height
            )));
        }
        for (v, &s) in plane.data.iter_mut().zip(&stencil.data) {
            if s > threshold {
                *v = v.saturating_add(add);
            }
        }
        boosted.push(plane);
    }
    merge_channels(&boosted[0], &boosted[1], &boosted[2])
}

/// Displace `count` random horizontal strips.
///
/// Draws per slice: y in `[0, h)`, offset in `[-10, 10]`, height in `[2, 8]`.
/// The strip is copied, then pasted at `x + offset`; pixels pushed off the
/// canvas are dropped and uncovered pixels keep their previous values.
pub fn glitch_slices(
    canvas: &mut Canvas,
    rng: &mut DeterministicRng,
    count: usize,
) -> Vec<GlitchSlice> {
    let w = canvas.width as i64;
    let mut slices = Vec::with_capacity(count);
    if canvas.height == 0 {
        return slices;
    }

    for _ in 0..count {
        let slice = GlitchSlice {
            y: rng.gen_range(0..canvas.height),
            offset: rng.gen_range(-10..=10),
            height: rng.gen_range(2..=8),
        };

        let end = (slice.y + slice.height).min(canvas.height);
        for y in slice.y..end {
            let src = canvas.row(y).to_vec();
            let dst = canvas.row_mut(y);
            for (x, px) in src.into_iter().enumerate() {
                let tx = x as i64 + slice.offset as i64;
                if (0..w).contains(&tx) {
                    dst[tx as usize] = px;
                }
            }
        }
        slices.push(slice);
    }

    debug!(count = slices.len(), "glitch slices applied");
    slices
}

/// Overlay white scan lines on every `spacing`-th row, top to bottom.
///
/// Draws one opacity in `[10, 30]` per scanned row. Returns the opacities.
pub fn scan_lines(canvas: &mut Canvas, rng: &mut DeterministicRng, spacing: u32) -> Vec<u8> {
    let mut opacities = Vec::new();
    for y in (0..canvas.height).step_by(spacing.max(1) as usize) {
        let alpha: u8 = rng.gen_range(10..=30);
        for px in canvas.row_mut(y) {
            for c in px.iter_mut() {
                *c = composite_channel(255, *c, alpha);
            }
        }
        opacities.push(alpha);
    }
    opacities
}

/// Hang drips below the glyphs, modifying the mask in place.
///
/// Columns are visited left to right, each reading the mask as already
/// modified by earlier drips. For a column with a pixel above 128, one draw
/// decides whether it drips (`> 0.7`); a dripping column then draws length
/// in `[20, 80]` and width in `[3, 10]` and writes a linear fade from 255
/// downward from the lowest such pixel.
pub fn drip(mask: &mut Mask, rng: &mut DeterministicRng) -> Vec<Drip> {
    let (w, h) = (mask.width, mask.height);
    let mut drips = Vec::new();

    for x in 0..w {
        let Some(bottom) = (0..h).rev().find(|&y| mask.get(x, y) > 128) else {
            continue;
        };

        if rng.gen_f64() <= 0.7 {
            continue;
        }
        let length: u32 = rng.gen_range(20..=80);
        let width: u32 = rng.gen_range(3..=10);

        let half_lo = (-(width as i64)).div_euclid(2);
        let half_hi = width as i64 / 2;
        for dy in 0..length {
            let y = bottom + dy;
            if y >= h {
                break;
            }
            let fade = 1.0 - dy as f64 / length as f64;
            let value = (255.0 * fade) as u8;
            for dx in half_lo..half_hi {
                let nx = x as i64 + dx;
                if (0..w as i64).contains(&nx) {
                    mask.set(nx as u32, y, value);
                }
            }
        }

        drips.push(Drip {
            column: x,
            origin: bottom,
            length,
            width,
        });
    }

    debug!(count = drips.len(), "drips applied");
    drips
}

/// Blend in a vertically flipped copy that darkens toward the bottom.
///
/// Row `y` of the flipped copy is scaled by `1 - (y / h) * 0.7`, truncated.
pub fn reflection(canvas: &Canvas, amount: f64) -> Result<Canvas, GenerateError> {
    let h = canvas.height;
    let mut flipped = Canvas::new_black(canvas.width, h);
    for y in 0..h {
        let fade = 1.0 - (y as f64 / h as f64) * 0.7;
        let src = canvas.row(h - 1 - y);
        for (dst, &px) in flipped.row_mut(y).iter_mut().zip(src) {
            *dst = px.map(|c| (c as f64 * fade) as u8);
        }
    }
    blend(canvas, &flipped, amount)
}

/// Blend the canvas with its own Gaussian blur.
pub fn glow(canvas: &Canvas, radius: f64, amount: f64) -> Result<Canvas, GenerateError> {
    let blurred = gaussian_blur(canvas, radius);
    blend(canvas, &blurred, amount)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_brightness_scales_and_clamps() {
        let canvas = Canvas::new(1, 1, [100, 200, 0]);
        assert_eq!(enhance_brightness(&canvas, 1.3).get(0, 0), [130, 255, 0]);
    }

    #[test]
    fn test_saturation_leaves_grey_alone() {
        let canvas = Canvas::new(2, 2, [90, 90, 90]);
        assert_eq!(enhance_saturation(&canvas, 1.5), canvas);
    }

    #[test]
    fn test_contrast_pivots_on_mean() {
        let mut canvas = Canvas::new_black(2, 1);
        canvas.set(1, 0, [200, 200, 200]);
        let out = enhance_contrast(&canvas, 1.4);
        // mean luma is 100
        assert_eq!(out.get(0, 0), [0, 0, 0]);
        assert_eq!(out.get(1, 0), [240, 240, 240]);
    }

    #[test]
    fn test_chromatic_aberration_directions() {
        let mut canvas = Canvas::new_black(8, 1);
        canvas.set(4, 0, [10, 20, 30]);
        let out = chromatic_aberration(&canvas, 3).unwrap();
        assert_eq!(out.get(1, 0), [10, 0, 0]);
        assert_eq!(out.get(4, 0), [0, 20, 0]);
        assert_eq!(out.get(7, 0), [0, 0, 30]);
    }

    #[test]
    fn test_stencil_boost_saturates() {
        let canvas = Canvas::new(2, 1, [200, 10, 10]);
        let mut on = Mask::new(2, 1);
        on.set(0, 0, 255);
        let off = Mask::new(2, 1);
        let out = stencil_boost(&canvas, [&on, &off, &on], 128, [100, 80, 120]).unwrap();
        assert_eq!(out.get(0, 0), [255, 10, 130]);
        assert_eq!(out.get(1, 0), [200, 10, 10]);
    }

    #[test]
    fn test_glitch_slices_draw_in_range() {
        let mut canvas = Canvas::new_black(40, 30);
        let mut rng = DeterministicRng::new(3);
        let slices = glitch_slices(&mut canvas, &mut rng, 20);
        assert_eq!(slices.len(), 20);
        for s in slices {
            assert!(s.y < 30);
            assert!((-10..=10).contains(&s.offset));
            assert!((2..=8).contains(&s.height));
        }
    }

    #[test]
    fn test_glitch_paste_keeps_uncovered_pixels() {
        let mut canvas = Canvas::new_black(16, 1);
        for x in 0..16 {
            canvas.set(x, 0, [x as u8, 0, 0]);
        }
        let original = canvas.clone();
        let mut rng = DeterministicRng::new(11);
        let slices = glitch_slices(&mut canvas, &mut rng, 1);
        let offset = slices[0].offset;

        for x in 0..16i32 {
            let expected = if x - offset >= 0 && x - offset < 16 {
                original.get((x - offset) as u32, 0)
            } else {
                original.get(x as u32, 0)
            };
            assert_eq!(canvas.get(x as u32, 0), expected, "x={}", x);
        }
    }

    #[test]
    fn test_scan_lines_hit_every_fourth_row() {
        let mut canvas = Canvas::new_black(3, 10);
        let mut rng = DeterministicRng::new(9);
        let opacities = scan_lines(&mut canvas, &mut rng, 4);
        assert_eq!(opacities.len(), 3);
        for (i, &alpha) in opacities.iter().enumerate() {
            assert!((10..=30).contains(&alpha));
            let y = i as u32 * 4;
            assert_eq!(canvas.get(0, y)[0], composite_channel(255, 0, alpha));
        }
        assert_eq!(canvas.get(0, 1), [0, 0, 0]);
    }

    #[test]
    fn test_drip_fades_below_glyph() {
        let mut mask = Mask::new(40, 200);
        for x in 0..40 {
            for y in 10..20 {
                mask.set(x, y, 255);
            }
        }
        let mut rng = DeterministicRng::new(42);
        let drips = drip(&mut mask, &mut rng);

        let mut replay = Mask::new(40, 200);
        for x in 0..40 {
            for y in 10..20 {
                replay.set(x, y, 255);
            }
        }
        assert_eq!(drip(&mut replay, &mut DeterministicRng::new(42)), drips);
        assert_eq!(replay, mask);

        assert!(!drips.is_empty());
        for d in &drips {
            assert!((20..=80).contains(&d.length));
            assert!((3..=10).contains(&d.width));
            assert!(d.origin >= 19);
        }
        assert!((20..200).any(|y| (0..40).any(|x| mask.get(x, y) > 0)));
    }

    #[test]
    fn test_drip_on_empty_mask_draws_nothing() {
        let mut mask = Mask::new(10, 10);
        let mut rng = DeterministicRng::new(1);
        assert!(drip(&mut mask, &mut rng).is_empty());
        assert_eq!(rng.gen_u32(), DeterministicRng::new(1).gen_u32());
    }

    #[test]
    fn test_reflection_of_black_is_black() {
        let canvas = Canvas::new_black(4, 4);
        assert_eq!(reflection(&canvas, 0.2).unwrap(), canvas);
    }
}
