//! Particle energy field style.

use tracing::{debug, instrument};
use wildtext_spec::Style;

use crate::canvas::{Canvas, Layer, Mask};
use crate::composite::alpha_composite;
use crate::effects::{chromatic_aberration, enhance_brightness};
use crate::field::{
    generate_flow_segments, generate_particles, render_energy_field, Particle,
    FLOW_SEGMENT_COUNT, PARTICLE_COUNT,
};
use crate::generate::{GenerateError, RenderTrace};
use crate::rng::DeterministicRng;

use super::StyleRenderer;

const MASK_THRESHOLD: u8 = 50;
const BRIGHTNESS: f64 = 1.3;
const ABERRATION: i32 = 3;

/// Seeded particles inside the glyphs over a blurred energy flow field.
#[derive(Debug, Clone, Copy, Default)]
pub struct ParticleStyle;

impl StyleRenderer for ParticleStyle {
    fn style(&self) -> Style {
        Style::Particle
    }

    fn font_size(&self) -> u32 {
        200
    }

    #[instrument(name = "particle_style", skip_all)]
    fn render(
        &self,
        mask: Mask,
        rng: &mut DeterministicRng,
        trace: &mut RenderTrace,
    ) -> Result<Canvas, GenerateError> {
        let (w, h) = (mask.width, mask.height);

        let segments = generate_flow_segments(rng, FLOW_SEGMENT_COUNT, w, h);
        trace.flow_segments = segments.len();
        let background = render_energy_field(&segments, w, h);

        let particles = generate_particles(rng, PARTICLE_COUNT, w, h);
        trace.particles_evaluated = particles.len();

        let mut layer = Layer::new_transparent(w, h);
        let mut drawn = 0;
        for particle in particles
            .iter()
            .filter(|p| mask.get(p.x, p.y) > MASK_THRESHOLD)
        {
            draw_disc(&mut layer, particle);
            drawn += 1;
        }
        trace.particles_drawn = drawn;
        debug!(evaluated = trace.particles_evaluated, drawn, "particles placed");

        let composed = alpha_composite(&background, &layer)?;
        let brightened = enhance_brightness(&composed, BRIGHTNESS);
        chromatic_aberration(&brightened, ABERRATION)
    }
}

/// Fill a disc of radius `size` around the particle, replacing what is there.
fn draw_disc(layer: &mut Layer, particle: &Particle) {
    let rgba = particle.rgba();
    let reach = particle.size.ceil() as i64;
    let r2 = particle.size * particle.size;
    let (cx, cy) = (particle.x as i64, particle.y as i64);

    for y in (cy - reach).max(0)..=(cy + reach).min(layer.height as i64 - 1) {
        for x in (cx - reach).max(0)..=(cx + reach).min(layer.width as i64 - 1) {
            let (dx, dy) = ((x - cx) as f64, (y - cy) as f64);
            if dx * dx + dy * dy <= r2 {
                layer.set(x as u32, y as u32, rgba);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_mask_draws_no_particles() {
        let mask = Mask::new(48, 32);
        let mut rng = DeterministicRng::new(1);
        let mut trace = RenderTrace::default();
        ParticleStyle.render(mask, &mut rng, &mut trace).unwrap();
        assert_eq!(trace.particles_evaluated, PARTICLE_COUNT);
        assert_eq!(trace.particles_drawn, 0);
        assert_eq!(trace.flow_segments, FLOW_SEGMENT_COUNT);
    }

    #[test]
    fn test_full_mask_draws_every_particle() {
        let mut mask = Mask::new(48, 32);
        mask.data.fill(255);
        let mut rng = DeterministicRng::new(1);
        let mut trace = RenderTrace::default();
        ParticleStyle.render(mask, &mut rng, &mut trace).unwrap();
        assert_eq!(trace.particles_drawn, PARTICLE_COUNT);
    }

    #[test]
    fn test_draw_disc_is_clipped_and_round() {
        let mut layer = Layer::new_transparent(5, 5);
        let particle = Particle {
            x: 0,
            y: 0,
            size: 2.0,
            brightness: 1.0,
            hue: 0.0,
        };
        draw_disc(&mut layer, &particle);
        assert_eq!(layer.get(0, 0)[3], 255);
        assert_eq!(layer.get(2, 0)[3], 255);
        assert_eq!(layer.get(2, 2)[3], 0);
        assert_eq!(layer.get(3, 0)[3], 0);
    }
}
