//! Spatial filters on RGB canvases.

use crate::canvas::Canvas;

/// Number of box passes used to approximate a Gaussian.
const BOX_PASSES: usize = 3;

/// Box radius whose `BOX_PASSES`-fold convolution has standard deviation
/// closest to `sigma`.
pub fn box_radius_for_sigma(sigma: f64) -> usize {
    if sigma <= 0.0 {
        return 0;
    }
    let ideal_width = (12.0 * sigma * sigma / BOX_PASSES as f64 + 1.0).sqrt();
    ((ideal_width - 1.0) / 2.0).round() as usize
}

/// Apply Gaussian blur approximated via box blur (3 passes).
///
/// Sums are integers and every pass rounds half up, so the result is
/// bit-exact on every platform. Edges clamp to the border pixel.
pub fn gaussian_blur(input: &Canvas, radius: f64) -> Canvas {
    let r = box_radius_for_sigma(radius);
    if r == 0 || input.data.is_empty() {
        return input.clone();
    }

    let w = input.width as usize;
    let h = input.height as usize;

    // Box blur over `len` samples spaced `stride` apart starting at `start`.
    fn box_blur_line(
        src: &[[u8; 3]],
        dst: &mut [[u8; 3]],
        start: usize,
        stride: usize,
        len: usize,
        r: usize,
    ) {
        let d = (2 * r + 1) as u32;
        let at = |i: isize| -> [u8; 3] {
            let clamped = i.clamp(0, len as isize - 1) as usize;
            src[start + clamped * stride]
        };

        let mut sum = [0u32; 3];
        for k in -(r as isize)..=(r as isize) {
            let px = at(k);
            for c in 0..3 {
                sum[c] += px[c] as u32;
            }
        }

        for i in 0..len {
            let out = &mut dst[start + i * stride];
            for c in 0..3 {
                out[c] = ((sum[c] + d / 2) / d) as u8;
            }
            let incoming = at(i as isize + r as isize + 1);
            let outgoing = at(i as isize - r as isize);
            for c in 0..3 {
                sum[c] = sum[c] + incoming[c] as u32 - outgoing[c] as u32;
            }
        }
    }

    let mut buf1 = input.data.clone();
    let mut buf2 = vec![[0u8; 3]; buf1.len()];

    for _ in 0..BOX_PASSES {
        for y in 0..h {
            box_blur_line(&buf1, &mut buf2, y * w, 1, w, r);
        }
        for x in 0..w {
            box_blur_line(&buf2, &mut buf1, x, w, h, r);
        }
    }

    Canvas {
        width: input.width,
        height: input.height,
        data: buf1,
    }
}
