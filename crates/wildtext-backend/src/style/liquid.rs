//! Liquid metal chrome style.

use tracing::{debug, instrument};
use wildtext_spec::Style;

use crate::canvas::{Canvas, Layer, Mask};
use crate::composite::alpha_composite;
use crate::effects::{drip, enhance_contrast, glow, reflection};
use crate::field::{generate_blobs, render_liquid_field, BLOB_COUNT};
use crate::generate::{GenerateError, RenderTrace};
use crate::rng::DeterministicRng;

use super::StyleRenderer;

const MASK_THRESHOLD: u8 = 50;
const REFLECTION: f64 = 0.2;
const GLOW_RADIUS: f64 = 10.0;
const GLOW: f64 = 0.3;
const CONTRAST: f64 = 1.4;

/// Dripping chrome glyphs over blurred metallic blobs.
#[derive(Debug, Clone, Copy, Default)]
pub struct LiquidMetalStyle;

impl StyleRenderer for LiquidMetalStyle {
    fn style(&self) -> Style {
        Style::Liquid
    }

    fn font_size(&self) -> u32 {
        220
    }

    #[instrument(name = "liquid_style", skip_all)]
    fn render(
        &self,
        mut mask: Mask,
        rng: &mut DeterministicRng,
        trace: &mut RenderTrace,
    ) -> Result<Canvas, GenerateError> {
        let (w, h) = (mask.width, mask.height);

        trace.drips = drip(&mut mask, rng);

        let blobs = generate_blobs(rng, BLOB_COUNT, w, h);
        trace.blobs = blobs.len();
        let background = render_liquid_field(&blobs, w, h);

        let chrome = metallic_fill(&mask);
        let layer = Layer::from_canvas_and_alpha(&chrome, &mask);
        let composed = alpha_composite(&background, &layer)?;
        debug!(drips = trace.drips.len(), "chrome composited");

        let reflected = reflection(&composed, REFLECTION)?;
        let glowing = glow(&reflected, GLOW_RADIUS, GLOW)?;
        Ok(enhance_contrast(&glowing, CONTRAST))
    }
}

/// Vertical chrome gradient wherever the mask exceeds the threshold.
///
/// Channels saturate at 255 near the bottom edge.
fn metallic_fill(mask: &Mask) -> Canvas {
    let mut chrome = Canvas::new_black(mask.width, mask.height);
    for y in 0..mask.height {
        let gradient = (y as f64 / mask.height as f64) * 0.6 + 0.4;
        let base = (gradient * 200.0) as u8;
        let color = [40, 50, 60].map(|lift| base.saturating_add(lift));
        for x in 0..mask.width {
            if mask.get(x, y) > MASK_THRESHOLD {
                chrome.set(x, y, color);
            }
        }
    }
    chrome
}
