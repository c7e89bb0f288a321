//! Request validation logic.
//!
//! Validation runs before any computation. Style is checked first so an
//! unknown style is reported even when the dimensions are also wrong.

use crate::error::{ErrorCode, ValidationError};
use crate::request::{RenderRequest, StyleConfig};
use crate::style::Style;

/// Largest accepted width or height.
///
/// Generators allocate several `width * height` buffers per call; keeping
/// this bounded prevents accidental OOMs from malformed requests.
pub const MAX_DIMENSION: u32 = 4096;

/// Validates that both dimensions are positive and within [`MAX_DIMENSION`].
///
/// # Example
/// ```
/// use wildtext_spec::validate_dimensions;
///
/// assert_eq!(validate_dimensions(1080, 720).unwrap(), (1080, 720));
/// assert!(validate_dimensions(0, 100).is_err());
/// assert!(validate_dimensions(100, -5).is_err());
/// ```
pub fn validate_dimensions(width: i64, height: i64) -> Result<(u32, u32), ValidationError> {
    let width = validate_dimension("width", width)?;
    let height = validate_dimension("height", height)?;
    Ok((width, height))
}

fn validate_dimension(name: &str, value: i64) -> Result<u32, ValidationError> {
    if value <= 0 {
        return Err(ValidationError::with_path(
            ErrorCode::InvalidDimensions,
            format!("{} must be at least 1, got {}", name, value),
            name,
        ));
    }
    if value > MAX_DIMENSION as i64 {
        return Err(ValidationError::with_path(
            ErrorCode::InvalidDimensions,
            format!("{} is too large: max is {}, got {}", name, MAX_DIMENSION, value),
            name,
        ));
    }
    Ok(value as u32)
}

/// Validates a request, returning the parsed style and dimensions.
pub fn validate_request(request: &RenderRequest) -> Result<(Style, u32, u32), ValidationError> {
    let style: Style = request.style.parse()?;
    let (width, height) = validate_dimensions(request.width, request.height)?;
    Ok((style, width, height))
}

/// Validates the dimensions of an already-resolved config.
pub fn validate_config(config: &StyleConfig) -> Result<(), ValidationError> {
    validate_dimensions(config.width as i64, config.height as i64).map(|_| ())
}
