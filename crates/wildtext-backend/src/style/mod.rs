//! Style renderers.
//!
//! Each style combines the glyph mask, its seeded fields, and an ordered set
//! of post effects into a final canvas.

mod holographic;
mod liquid;
mod particle;

pub use holographic::HolographicStyle;
pub use liquid::LiquidMetalStyle;
pub use particle::ParticleStyle;

use wildtext_spec::Style;

use crate::canvas::{Canvas, Mask};
use crate::generate::{GenerateError, RenderTrace};
use crate::rng::DeterministicRng;

/// Trait for style renderers.
pub trait StyleRenderer: Send + Sync {
    /// The style this renderer implements.
    fn style(&self) -> Style;

    /// Nominal font size for the glyph mask.
    fn font_size(&self) -> u32;

    /// Render the final canvas from the style's mask.
    ///
    /// All randomness is drawn from `rng`; decisions are recorded in `trace`.
    fn render(
        &self,
        mask: Mask,
        rng: &mut DeterministicRng,
        trace: &mut RenderTrace,
    ) -> Result<Canvas, GenerateError>;
}

/// Look up the renderer for a style.
pub fn renderer_for(style: Style) -> &'static dyn StyleRenderer {
    match style {
        Style::Particle => &ParticleStyle,
        Style::Holographic => &HolographicStyle,
        Style::Liquid => &LiquidMetalStyle,
    }
}
