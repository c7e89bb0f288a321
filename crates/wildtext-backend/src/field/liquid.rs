//! Liquid metal blob field.

use tracing::debug;

use crate::canvas::Canvas;
use crate::composite::{blend_channel, fade_table};
use crate::filter::gaussian_blur;
use crate::rng::DeterministicRng;

/// Blobs drawn by the liquid style.
pub const BLOB_COUNT: usize = 100;

const BACKGROUND: [u8; 3] = [10, 10, 15];
const RING_STEP: i64 = 5;
const BLOB_OPACITY: f64 = 0.3;
const BLOB_BLUR_RADIUS: f64 = 15.0;

/// A radial blob of concentric metallic rings.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RadialBlob {
    /// Center, each coordinate up to 100 px outside the canvas.
    pub center: (i64, i64),
    /// Outer radius, in `[50, 300]`.
    pub radius: u32,
    /// Brightness, in `[0.3, 0.9)`.
    pub brightness: f64,
}

impl RadialBlob {
    /// Number of rings: radius, radius - 5, ... down to the last positive one.
    fn ring_count(&self) -> usize {
        ((self.radius as i64 - 1) / RING_STEP + 1) as usize
    }

    /// Color of each ring, outermost first.
    fn ring_colors(&self) -> Vec<[u8; 3]> {
        let base = (self.brightness * 255.0) as u32 as f64;
        (0..self.ring_count())
            .map(|k| {
                let r = self.radius as i64 - k as i64 * RING_STEP;
                let alpha = (r as f64 / self.radius as f64) * self.brightness;
                let grey = (alpha * base) as u32;
                [
                    grey.min(255) as u8,
                    (grey + 20).min(255) as u8,
                    (grey + 40).min(255) as u8,
                ]
            })
            .collect()
    }

    /// Index of the innermost ring whose disc contains a point at squared
    /// distance `d2`, or `None` outside the blob.
    fn ring_at(&self, d2: i64) -> Option<usize> {
        let radius = self.radius as i64;
        if d2 > radius * radius {
            return None;
        }
        let last = self.ring_count() as i64 - 1;
        let ring_r = |k: i64| radius - k * RING_STEP;

        let guess = ((radius as f64 - (d2 as f64).sqrt()) / RING_STEP as f64).floor() as i64;
        let mut k = guess.clamp(0, last);
        while k < last && ring_r(k + 1) * ring_r(k + 1) >= d2 {
            k += 1;
        }
        while k > 0 && ring_r(k) * ring_r(k) < d2 {
            k -= 1;
        }
        Some(k as usize)
    }
}

/// Draw `count` blobs.
///
/// Per blob the draws are cx in `[-100, w + 100]`, cy in `[-100, h + 100]`,
/// radius in `[50, 300]`, brightness in `[0.3, 0.9)`.
pub fn generate_blobs(
    rng: &mut DeterministicRng,
    count: usize,
    width: u32,
    height: u32,
) -> Vec<RadialBlob> {
    let (w, h) = (width as i64, height as i64);
    (0..count)
        .map(|_| {
            let cx = rng.gen_range(-100..=w + 100);
            let cy = rng.gen_range(-100..=h + 100);
            RadialBlob {
                center: (cx, cy),
                radius: rng.gen_range(50..=300),
                brightness: rng.gen_range(0.3..0.9),
            }
        })
        .collect()
}

/// Render the blob field.
///
/// Starting from a dark blue-grey, each blob is drawn on black and blended
/// onto the accumulator at 0.3, so pixels outside a blob fade toward black.
/// The result is blurred with radius 15.
pub fn render_liquid_field(blobs: &[RadialBlob], width: u32, height: u32) -> Canvas {
    let mut acc = Canvas::new(width, height, BACKGROUND);
    let fade = fade_table(BLOB_OPACITY);

    for blob in blobs {
        let colors = blob.ring_colors();
        let (cx, cy) = blob.center;
        let radius = blob.radius as i64;

        for y in 0..height {
            let dy = y as i64 - cy;
            let row = acc.row_mut(y);
            if dy.abs() > radius {
                for px in row.iter_mut() {
                    *px = px.map(|c| fade[c as usize]);
                }
                continue;
            }
            for (x, px) in row.iter_mut().enumerate() {
                let dx = x as i64 - cx;
                match blob.ring_at(dx * dx + dy * dy) {
                    Some(k) => {
                        let color = colors[k];
                        for c in 0..3 {
                            px[c] = blend_channel(px[c], color[c], BLOB_OPACITY);
                        }
                    }
                    None => *px = px.map(|c| fade[c as usize]),
                }
            }
        }
    }

    debug!(blobs = blobs.len(), "liquid field accumulated");
    gaussian_blur(&acc, BLOB_BLUR_RADIUS)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn blob(radius: u32, brightness: f64) -> RadialBlob {
        RadialBlob {
            center: (0, 0),
            radius,
            brightness,
        }
    }

    #[test]
    fn test_blobs_in_range() {
        let mut rng = DeterministicRng::new(21);
        let blobs = generate_blobs(&mut rng, 100, 200, 150);
        assert_eq!(blobs.len(), 100);
        for b in &blobs {
            assert!((-100..=300).contains(&b.center.0));
            assert!((-100..=250).contains(&b.center.1));
            assert!((50..=300).contains(&b.radius));
            assert!((0.3..0.9).contains(&b.brightness));
        }
    }

    #[test]
    fn test_ring_selection_picks_innermost_containing_ring() {
        let b = blob(52, 0.5);
        // rings: 52, 47, ..., 2
        assert_eq!(b.ring_count(), 11);
        assert_eq!(b.ring_at(0), Some(10));
        assert_eq!(b.ring_at(4), Some(10));
        assert_eq!(b.ring_at(5), Some(9));
        assert_eq!(b.ring_at(47 * 47), Some(1));
        assert_eq!(b.ring_at(47 * 47 + 1), Some(0));
        assert_eq!(b.ring_at(52 * 52), Some(0));
        assert_eq!(b.ring_at(52 * 52 + 1), None);
    }

    #[test]
    fn test_ring_selection_matches_brute_force() {
        let b = blob(73, 0.5);
        for d2 in 0..=(73 * 73 + 5) {
            let brute = (0..b.ring_count())
                .rev()
                .find(|&k| {
                    let r = 73 - k as i64 * 5;
                    r * r >= d2
                });
            assert_eq!(b.ring_at(d2), brute, "d2={}", d2);
        }
    }

    #[test]
    fn test_ring_colors_darken_inward() {
        let colors = blob(50, 0.8).ring_colors();
        assert_eq!(colors[0], [163, 183, 203]);
        assert!(colors.windows(2).all(|w| w[0][0] >= w[1][0]));
    }

    #[test]
    fn test_empty_field_is_background() {
        let field = render_liquid_field(&[], 8, 8);
        assert_eq!(field, Canvas::new(8, 8, BACKGROUND));
    }
}
