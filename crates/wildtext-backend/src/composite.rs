//! Compositor: alpha compositing, linear blending, and channel split/merge.
//!
//! Every operation here is integer or correctly-rounded float math on 8-bit
//! values, so results are identical on every platform.

use crate::canvas::{Canvas, Layer, Mask};
use crate::generate::GenerateError;

/// Composite one 8-bit channel of `fg` over an opaque `bg` at `alpha`.
#[inline]
pub fn composite_channel(fg: u8, bg: u8, alpha: u8) -> u8 {
    let a = alpha as u32;
    ((fg as u32 * a + bg as u32 * (255 - a) + 127) / 255) as u8
}

/// Linear blend `a + (b - a) * t`, rounded and clamped to 0..=255.
///
/// `t` outside `[0, 1]` extrapolates.
#[inline]
pub fn blend_channel(a: u8, b: u8, t: f64) -> u8 {
    let a = a as f64;
    let v = a + (b as f64 - a) * t;
    v.round().clamp(0.0, 255.0) as u8
}

/// Table of `blend_channel(a, 0, t)` for every `a`.
pub fn fade_table(t: f64) -> [u8; 256] {
    let mut table = [0u8; 256];
    for (a, slot) in table.iter_mut().enumerate() {
        *slot = blend_channel(a as u8, 0, t);
    }
    table
}

pub(crate) fn ensure_same_size(
    what: &str,
    width: u32,
    height: u32,
    expected_w: u32,
    expected_h: u32,
) -> Result<(), GenerateError> {
    if width != expected_w || height != expected_h {
        return Err(GenerateError::Computation(format!(
            "{} is {}x{}, expected {}x{}",
            what, width, height, expected_w, expected_h
        )));
    }
    Ok(())
}

/// Alpha-composite an RGBA layer over an opaque canvas.
pub fn alpha_composite(bg: &Canvas, layer: &Layer) -> Result<Canvas, GenerateError> {
    ensure_same_size("layer", layer.width, layer.height, bg.width, bg.height)?;

    let data = bg
        .data
        .iter()
        .zip(&layer.data)
        .map(|(b, f)| {
            let a = f[3];
            [
                composite_channel(f[0], b[0], a),
                composite_channel(f[1], b[1], a),
                composite_channel(f[2], b[2], a),
            ]
        })
        .collect();

    Ok(Canvas {
        width: bg.width,
        height: bg.height,
        data,
    })
}

/// Blend two canvases: `a + (b - a) * t` per channel.
pub fn blend(a: &Canvas, b: &Canvas, t: f64) -> Result<Canvas, GenerateError> {
    let mut out = a.clone();
    blend_in_place(&mut out, b, t)?;
    Ok(out)
}

/// Blend `b` into `a` in place.
pub fn blend_in_place(a: &mut Canvas, b: &Canvas, t: f64) -> Result<(), GenerateError> {
    ensure_same_size("blend source", b.width, b.height, a.width, a.height)?;

    for (pa, pb) in a.data.iter_mut().zip(&b.data) {
        for c in 0..3 {
            pa[c] = blend_channel(pa[c], pb[c], t);
        }
    }
    Ok(())
}

/// Split a canvas into its red, green, and blue planes.
pub fn split_channels(canvas: &Canvas) -> [Mask; 3] {
    [0, 1, 2].map(|c| Mask {
        width: canvas.width,
        height: canvas.height,
        data: canvas.channel(c),
    })
}

/// Merge three planes into an opaque canvas.
pub fn merge_channels(r: &Mask, g: &Mask, b: &Mask) -> Result<Canvas, GenerateError> {
    ensure_same_size("green plane", g.width, g.height, r.width, r.height)?;
    ensure_same_size("blue plane", b.width, b.height, r.width, r.height)?;

    let data = r
        .data
        .iter()
        .zip(&g.data)
        .zip(&b.data)
        .map(|((&r, &g), &b)| [r, g, b])
        .collect();

    Ok(Canvas {
        width: r.width,
        height: r.height,
        data,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_composite_channel_endpoints() {
        assert_eq!(composite_channel(200, 10, 255), 200);
        assert_eq!(composite_channel(200, 10, 0), 10);
        assert_eq!(composite_channel(255, 0, 128), 128);
        assert_eq!(composite_channel(255, 255, 77), 255);
    }

    #[test]
    fn test_blend_channel_rounds_and_clamps() {
        assert_eq!(blend_channel(100, 200, 0.0), 100);
        assert_eq!(blend_channel(100, 200, 1.0), 200);
        assert_eq!(blend_channel(100, 200, 0.3), 130);
        assert_eq!(blend_channel(0, 200, 1.3), 255);
        assert_eq!(blend_channel(100, 0, 0.3), 70);
        assert_eq!(blend_channel(128, 100, 1.5), 86);
    }

    #[test]
    fn test_fade_table_matches_blend() {
        let table = fade_table(0.3);
        for a in [0u8, 1, 10, 127, 255] {
            assert_eq!(table[a as usize], blend_channel(a, 0, 0.3));
        }
    }

    #[test]
    fn test_alpha_composite_uses_layer_alpha() {
        let bg = Canvas::new(2, 1, [0, 0, 0]);
        let mut layer = Layer::new_transparent(2, 1);
        layer.set(1, 0, [255, 255, 255, 255]);
        let out = alpha_composite(&bg, &layer).unwrap();
        assert_eq!(out.data, vec![[0, 0, 0], [255, 255, 255]]);
    }

    #[test]
    fn test_size_mismatch_is_a_computation_error() {
        let a = Canvas::new_black(2, 2);
        let b = Canvas::new_black(3, 2);
        assert!(matches!(blend(&a, &b, 0.5), Err(GenerateError::Computation(_))));
        assert!(matches!(
            alpha_composite(&a, &Layer::new_transparent(2, 3)),
            Err(GenerateError::Computation(_))
        ));
    }

    #[test]
    fn test_split_then_merge_restores_canvas() {
        let mut canvas = Canvas::new_black(3, 2);
        canvas.set(2, 1, [9, 8, 7]);
        let [r, g, b] = split_channels(&canvas);
        assert_eq!(b.get(2, 1), 7);
        assert_eq!(merge_channels(&r, &g, &b).unwrap(), canvas);
    }
}
