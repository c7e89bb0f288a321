//! Particle field.

use crate::color::Color;
use crate::rng::DeterministicRng;

/// Particle candidates drawn by the particle style.
pub const PARTICLE_COUNT: usize = 8000;

/// A single particle candidate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    /// Center column, in `[0, w)`.
    pub x: u32,
    /// Center row, in `[0, h)`.
    pub y: u32,
    /// Disc radius, in `[1, 4)`.
    pub size: f64,
    /// Value and opacity, in `[0.3, 1)`.
    pub brightness: f64,
    /// Hue, in `[0, 1)`.
    pub hue: f64,
}

impl Particle {
    /// RGBA fill: HSV(hue, 0.8, brightness) with alpha `brightness * 255`.
    pub fn rgba(&self) -> [u8; 4] {
        let [r, g, b] = Color::from_hsv(self.hue, 0.8, self.brightness).to_rgb8();
        [r, g, b, (self.brightness * 255.0) as u8]
    }
}

/// Draw `count` particles over a `width` x `height` canvas.
///
/// Per particle the draws are x, y, size, brightness, hue.
pub fn generate_particles(
    rng: &mut DeterministicRng,
    count: usize,
    width: u32,
    height: u32,
) -> Vec<Particle> {
    (0..count)
        .map(|_| Particle {
            x: rng.gen_range(0..width),
            y: rng.gen_range(0..height),
            size: rng.gen_range(1.0..4.0),
            brightness: rng.gen_range(0.3..1.0),
            hue: rng.gen_range(0.0..1.0),
        })
        .collect()
}
