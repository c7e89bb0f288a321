//! WildText Request Library
//!
//! This crate provides the request types, style selection, and validation for
//! WildText generations. A request names the text to render, one of the three
//! visual styles, an optional seed, and the canvas dimensions.
//!
//! # Overview
//!
//! - [`RenderRequest`]: the unresolved request, as read from CLI flags or JSON
//! - [`StyleConfig`]: the validated request with a concrete seed; it fully
//!   determines the rendered image
//! - [`Style`]: the style selector (`particle`, `holographic`, `liquid`)
//!
//! # Example
//!
//! ```
//! use wildtext_spec::{RenderRequest, Style};
//!
//! let request = RenderRequest::new("WILD", "liquid").with_seed(42);
//! let config = request.resolve_with_seed(0).unwrap();
//! assert_eq!(config.style, Style::Liquid);
//! assert_eq!(config.seed, 42);
//! assert_eq!((config.width, config.height), (1080, 1080));
//! ```
//!
//! # Modules
//!
//! - [`error`]: Error codes and the `BackendError` trait
//! - [`request`]: Request and resolved config types
//! - [`style`]: Style selector
//! - [`validation`]: Request validation functions

pub mod error;
pub mod request;
pub mod style;
pub mod validation;

// Re-export commonly used types at the crate root
pub use error::{BackendError, ErrorCode, SpecError, ValidationError};
pub use request::{RenderRequest, StyleConfig, DEFAULT_HEIGHT, DEFAULT_WIDTH, MAX_RANDOM_SEED};
pub use style::Style;
pub use validation::{validate_dimensions, validate_request, MAX_DIMENSION};
