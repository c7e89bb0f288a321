//! WildText End-to-End Test Infrastructure
//!
//! This crate holds the full-size scenario and determinism tests:
//!
//! - **Determinism**: identical configs render byte-identical canvases
//! - **Scenarios**: the reference requests at 1080x1080, including the
//!   configuration-error cases
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test -p wildtext-tests --release
//! ```
//!
//! Full-size renders are slow in debug builds; `--release` is recommended.

pub mod determinism;
pub mod fixtures;
