//! WildText CLI library.
//!
//! This crate provides the command implementations behind the `wildtext`
//! binary: generating images, listing styles, and verifying saved PNGs
//! against a fresh render.

pub mod commands;
pub mod logging;
