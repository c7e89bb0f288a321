//! Holographic glitch style.

use tracing::{debug, instrument};
use wildtext_spec::Style;

use crate::canvas::{Canvas, Mask};
use crate::effects::{enhance_saturation, glitch_slices, scan_lines, stencil_boost};
use crate::field::render_wave_field;
use crate::generate::{GenerateError, RenderTrace};
use crate::rng::DeterministicRng;

use super::StyleRenderer;

/// Horizontal offsets of the red, green, and blue stencils.
const CHANNEL_SHIFTS: [i32; 3] = [-5, 0, 5];
const CHANNEL_BOOST: [u8; 3] = [100, 80, 120];
const STENCIL_THRESHOLD: u8 = 128;
const GLITCH_SLICES: usize = 20;
const SCAN_LINE_SPACING: u32 = 4;
const SATURATION: f64 = 1.5;

/// Channel-split glyphs over a wave hue field, with glitches and scan lines.
#[derive(Debug, Clone, Copy, Default)]
pub struct HolographicStyle;

impl StyleRenderer for HolographicStyle {
    fn style(&self) -> Style {
        Style::Holographic
    }

    fn font_size(&self) -> u32 {
        200
    }

    #[instrument(name = "holographic_style", skip_all)]
    fn render(
        &self,
        mask: Mask,
        rng: &mut DeterministicRng,
        trace: &mut RenderTrace,
    ) -> Result<Canvas, GenerateError> {
        let background = render_wave_field(mask.width, mask.height);

        let stencils = CHANNEL_SHIFTS.map(|dx| mask.shifted_x(dx));
        let mut canvas = stencil_boost(
            &background,
            [&stencils[0], &stencils[1], &stencils[2]],
            STENCIL_THRESHOLD,
            CHANNEL_BOOST,
        )?;

        trace.glitch_slices = glitch_slices(&mut canvas, rng, GLITCH_SLICES);
        trace.scan_lines = scan_lines(&mut canvas, rng, SCAN_LINE_SPACING);
        debug!(scan_lines = trace.scan_lines.len(), "holographic passes applied");

        Ok(enhance_saturation(&canvas, SATURATION))
    }
}
