//! Seeded field synthesizers.
//!
//! Random fields draw from the caller's [`DeterministicRng`](crate::rng::DeterministicRng)
//! in a fixed per-item order. The holographic wave field is a pure function
//! of the coordinates and draws nothing.

pub mod flow;
pub mod holographic;
pub mod liquid;
pub mod particles;

pub use flow::{generate_flow_segments, render_energy_field, FlowSegment, FLOW_SEGMENT_COUNT};
pub use holographic::render_wave_field;
pub use liquid::{generate_blobs, render_liquid_field, RadialBlob, BLOB_COUNT};
pub use particles::{generate_particles, Particle, PARTICLE_COUNT};
