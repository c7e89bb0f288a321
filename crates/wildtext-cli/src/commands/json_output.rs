//! JSON output types for machine-readable CLI output.
//!
//! Every command accepting `--json` prints exactly one of these documents to
//! stdout.

use serde::{Deserialize, Serialize};
use wildtext_backend::RenderResult;
use wildtext_spec::ValidationError;

/// Error codes for CLI operations.
///
/// These codes are stable and can be used for programmatic error handling.
/// Validation failures pass through their own `E0xx` codes.
pub mod error_codes {
    /// File could not be read
    pub const FILE_READ: &str = "CLI_001";
    /// File could not be written
    pub const FILE_WRITE: &str = "CLI_002";
    /// Generation error (wraps backend errors)
    pub const GENERATION_ERROR: &str = "CLI_003";
    /// PNG could not be decoded
    pub const PNG_DECODE: &str = "CLI_004";
}

/// A structured error in JSON output.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct JsonError {
    /// Stable error code (e.g., "CLI_001", "E001")
    pub code: String,
    /// Human-readable error message
    pub message: String,
    /// Request field at fault (if applicable)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
}

impl JsonError {
    /// Creates a new error with code and message.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            path: None,
        }
    }
}

impl From<&ValidationError> for JsonError {
    fn from(err: &ValidationError) -> Self {
        Self {
            code: err.code.code().to_string(),
            message: err.message.clone(),
            path: err.path.clone(),
        }
    }
}

/// Summary of the random decisions behind one image.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TraceSummary {
    pub particles_evaluated: usize,
    pub particles_drawn: usize,
    pub flow_segments: usize,
    pub blobs: usize,
    pub glitch_slices: usize,
    pub drips: usize,
    pub scan_lines: usize,
}

impl TraceSummary {
    fn from_result(result: &RenderResult) -> Self {
        let t = &result.trace;
        Self {
            particles_evaluated: t.particles_evaluated,
            particles_drawn: t.particles_drawn,
            flow_segments: t.flow_segments,
            blobs: t.blobs,
            glitch_slices: t.glitch_slices.len(),
            drips: t.drips.len(),
            scan_lines: t.scan_lines.len(),
        }
    }
}

/// One generated image.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ImageRecord {
    /// Output file path
    pub path: String,
    /// Seed that produced the image
    pub seed: u64,
    /// Style name
    pub style: String,
    /// Image width in pixels
    pub width: u32,
    /// Image height in pixels
    pub height: u32,
    /// BLAKE3 hash of the PNG bytes
    pub hash: String,
    /// Random decisions taken
    pub trace: TraceSummary,
}

impl ImageRecord {
    /// Builds a record for an image written to `path`.
    pub fn new(path: impl Into<String>, result: &RenderResult, hash: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            seed: result.seed,
            style: result.style.as_str().to_string(),
            width: result.canvas.width,
            height: result.canvas.height,
            hash: hash.into(),
            trace: TraceSummary::from_result(result),
        }
    }
}

/// JSON output for the `generate` command.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateOutput {
    /// Whether every image was generated
    pub success: bool,
    /// Errors encountered
    pub errors: Vec<JsonError>,
    /// Images written before any error
    pub images: Vec<ImageRecord>,
}

impl GenerateOutput {
    /// Creates a successful generate output.
    pub fn success(images: Vec<ImageRecord>) -> Self {
        Self {
            success: true,
            errors: Vec::new(),
            images,
        }
    }

    /// Creates a failed generate output.
    pub fn failure(errors: Vec<JsonError>, images: Vec<ImageRecord>) -> Self {
        Self {
            success: false,
            errors,
            images,
        }
    }
}

/// One entry of the `styles` listing.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct StyleInfo {
    pub name: String,
    pub description: String,
    pub font_size: u32,
}

/// JSON output for the `verify` command.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VerifyOutput {
    /// Whether the file matches a fresh render
    pub success: bool,
    /// Errors encountered before comparison
    pub errors: Vec<JsonError>,
    /// Pixels that differ (absent when comparison did not run)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub differing_pixels: Option<usize>,
    /// BLAKE3 hash of the file on disk
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_hash: Option<String>,
}

impl VerifyOutput {
    /// Creates an output for a completed comparison.
    pub fn compared(differing_pixels: usize, file_hash: String) -> Self {
        Self {
            success: differing_pixels == 0,
            errors: Vec::new(),
            differing_pixels: Some(differing_pixels),
            file_hash: Some(file_hash),
        }
    }

    /// Creates a failed verify output.
    pub fn failure(errors: Vec<JsonError>) -> Self {
        Self {
            success: false,
            errors,
            differing_pixels: None,
            file_hash: None,
        }
    }
}

/// Print a document as pretty JSON on stdout.
pub fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use wildtext_spec::ErrorCode;

    #[test]
    fn test_validation_error_passes_code_through() {
        let err = ValidationError::with_path(ErrorCode::InvalidDimensions, "bad", "width");
        let json = JsonError::from(&err);
        assert_eq!(json.code, "E002");
        assert_eq!(json.path.as_deref(), Some("width"));
    }

    #[test]
    fn test_failure_output_serializes_without_result_fields() {
        let output = VerifyOutput::failure(vec![JsonError::new(error_codes::FILE_READ, "missing")]);
        let value = serde_json::to_value(&output).unwrap();
        assert_eq!(value["success"], false);
        assert!(value.get("differing_pixels").is_none());
        assert_eq!(value["errors"][0]["code"], "CLI_001");
        assert!(value["errors"][0].get("path").is_none());
    }
}
