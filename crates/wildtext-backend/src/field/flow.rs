//! Energy flow field: short colored strokes, blurred into a glow.

use std::f64::consts::TAU;

use tracing::debug;

use crate::canvas::Canvas;
use crate::color::Color;
use crate::composite::composite_channel;
use crate::filter::gaussian_blur;
use crate::rng::DeterministicRng;

/// Segments drawn by the particle style.
pub const FLOW_SEGMENT_COUNT: usize = 200;

/// Blur radius applied after stroking.
const FLOW_BLUR_RADIUS: f64 = 5.0;

/// One straight stroke of the flow field.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlowSegment {
    /// Start point.
    pub start: (f64, f64),
    /// End point.
    pub end: (f64, f64),
    /// Hue, in `[0.5, 0.8)`.
    pub hue: f64,
    /// Stroke width in pixels, in `[1, 3]`.
    pub width: u32,
}

impl FlowSegment {
    /// Stroke color: HSV(hue, 0.8, 0.9).
    pub fn rgb(&self) -> [u8; 3] {
        Color::from_hsv(self.hue, 0.8, 0.9).to_rgb8()
    }

    /// Distance from `p` to the segment.
    fn distance(&self, p: (f64, f64)) -> f64 {
        let (ax, ay) = self.start;
        let (bx, by) = self.end;
        let (dx, dy) = (bx - ax, by - ay);
        let len2 = dx * dx + dy * dy;
        let t = if len2 > 0.0 {
            (((p.0 - ax) * dx + (p.1 - ay) * dy) / len2).clamp(0.0, 1.0)
        } else {
            0.0
        };
        let (qx, qy) = (ax + t * dx, ay + t * dy);
        ((p.0 - qx).powi(2) + (p.1 - qy).powi(2)).sqrt()
    }
}

/// Draw `count` flow segments.
///
/// Per segment the draws are x in `[0, w]`, y in `[0, h]`, angle in
/// `[0, 2pi)`, length in `[50, 200]`, hue in `[0.5, 0.8)`, width in `[1, 3]`.
pub fn generate_flow_segments(
    rng: &mut DeterministicRng,
    count: usize,
    width: u32,
    height: u32,
) -> Vec<FlowSegment> {
    (0..count)
        .map(|_| {
            let x = rng.gen_range(0..=width) as f64;
            let y = rng.gen_range(0..=height) as f64;
            let angle: f64 = rng.gen_range(0.0..TAU);
            let length = rng.gen_range(50u32..=200) as f64;
            let hue = rng.gen_range(0.5..0.8);
            let stroke = rng.gen_range(1..=3);
            FlowSegment {
                start: (x, y),
                end: (x + angle.cos() * length, y + angle.sin() * length),
                hue,
                width: stroke,
            }
        })
        .collect()
}

/// Stroke `segments` onto black and blur the result.
///
/// Strokes are anti-aliased with round caps; coverage is
/// `clamp(width / 2 + 0.5 - distance, 0, 1)` at each pixel center.
pub fn render_energy_field(segments: &[FlowSegment], width: u32, height: u32) -> Canvas {
    let mut canvas = Canvas::new_black(width, height);
    for segment in segments {
        stroke_segment(&mut canvas, segment);
    }
    debug!(segments = segments.len(), "energy field stroked");
    gaussian_blur(&canvas, FLOW_BLUR_RADIUS)
}

fn stroke_segment(canvas: &mut Canvas, segment: &FlowSegment) {
    let reach = segment.width as f64 / 2.0 + 0.5;
    let color = segment.rgb();

    let min_x = (segment.start.0.min(segment.end.0) - reach).floor().max(0.0);
    let max_x = (segment.start.0.max(segment.end.0) + reach)
        .ceil()
        .min(canvas.width as f64 - 1.0);
    let min_y = (segment.start.1.min(segment.end.1) - reach).floor().max(0.0);
    let max_y = (segment.start.1.max(segment.end.1) + reach)
        .ceil()
        .min(canvas.height as f64 - 1.0);
    if min_x > max_x || min_y > max_y {
        return;
    }

    for y in min_y as u32..=max_y as u32 {
        for x in min_x as u32..=max_x as u32 {
            let coverage = (reach - segment.distance((x as f64, y as f64))).clamp(0.0, 1.0);
            if coverage <= 0.0 {
                continue;
            }
            let alpha = (coverage * 255.0) as u8;
            let px = canvas.get(x, y);
            canvas.set(
                x,
                y,
                [
                    composite_channel(color[0], px[0], alpha),
                    composite_channel(color[1], px[1], alpha),
                    composite_channel(color[2], px[2], alpha),
                ],
            );
        }
    }
}
