//! Holographic wave hue field.

use crate::canvas::Canvas;
use crate::color::Color;

/// Render the wave field for a `width` x `height` canvas.
///
/// `w1 = sin((x + y) * 0.01) * 0.5 + 0.5` and
/// `w2 = cos((x - y) * 0.008) * 0.5 + 0.5` depend only on the pixel's
/// diagonal indices, so both are tabulated once and looked up per pixel.
/// The pixel is HSV((0.3 * w1 + 0.2 * w2) mod 1, 0.7, 0.5 * w1).
pub fn render_wave_field(width: u32, height: u32) -> Canvas {
    let (w, h) = (width as i64, height as i64);
    let mut canvas = Canvas::new_black(width, height);
    if w == 0 || h == 0 {
        return canvas;
    }

    // index = x + y
    let wave1: Vec<f64> = (0..w + h - 1)
        .map(|i| (i as f64 * 0.01).sin() * 0.5 + 0.5)
        .collect();
    // index = x - y + (h - 1)
    let wave2: Vec<f64> = (-(h - 1)..w)
        .map(|d| (d as f64 * 0.008).cos() * 0.5 + 0.5)
        .collect();

    for y in 0..h {
        let row = canvas.row_mut(y as u32);
        for (x, px) in row.iter_mut().enumerate() {
            let x = x as i64;
            let w1 = wave1[(x + y) as usize];
            let w2 = wave2[(x - y + h - 1) as usize];
            let hue = (w1 * 0.3 + w2 * 0.2).rem_euclid(1.0);
            *px = Color::from_hsv(hue, 0.7, w1 * 0.5).to_rgb8();
        }
    }
    canvas
}
