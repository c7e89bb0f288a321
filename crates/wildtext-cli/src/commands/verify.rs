//! Verify command implementation
//!
//! Regenerates an image from its text, style, and seed and compares the
//! pixels with a saved PNG.

use anyhow::Result;
use colored::Colorize;
use std::fs;
use std::process::ExitCode;

use wildtext_backend::png::{decode_rgb, hash_png};
use wildtext_backend::{generate, Canvas, MaskProvider};
use wildtext_spec::{BackendError, RenderRequest, ValidationError};

use super::json_output::{error_codes, print_json, JsonError, VerifyOutput};
use super::{configuration_exit, EXIT_FAILURE, EXIT_MISMATCH};

/// Arguments of the verify command.
#[derive(Debug, Clone)]
pub struct VerifyArgs {
    pub text: String,
    pub style: String,
    pub seed: u64,
    pub file: String,
    pub width: i64,
    pub height: i64,
    pub json: bool,
}

/// Number of pixels that differ between two canvases of equal size.
pub fn count_differing_pixels(a: &Canvas, b: &Canvas) -> usize {
    a.data.iter().zip(&b.data).filter(|(x, y)| x != y).count()
}

/// Run the verify command.
///
/// # Returns
/// Exit code: 0 if the file matches, 1 on a configuration error, 2 if the
/// file cannot be read or decoded, 3 if pixels differ.
pub fn run(args: &VerifyArgs) -> Result<ExitCode> {
    let request = RenderRequest::new(args.text.clone(), args.style.clone())
        .with_seed(args.seed)
        .with_size(args.width, args.height);
    let config = match request.resolve_with_seed(args.seed) {
        Ok(config) => config,
        Err(err) => return configuration_error(&err, args.json),
    };

    let bytes = match fs::read(&args.file) {
        Ok(bytes) => bytes,
        Err(e) => {
            return failure(
                JsonError::new(error_codes::FILE_READ, format!("{}: {}", args.file, e)),
                args.json,
            )
        }
    };
    let saved = match decode_rgb(&bytes) {
        Ok(canvas) => canvas,
        Err(e) => {
            return failure(
                JsonError::new(error_codes::PNG_DECODE, format!("{}: {}", args.file, e)),
                args.json,
            )
        }
    };

    let fresh = match generate(&config, &MaskProvider::builtin()) {
        Ok(result) => result.canvas,
        Err(e) => {
            return failure(
                JsonError::new(e.code(), e.to_string()),
                args.json,
            )
        }
    };

    let file_hash = hash_png(&bytes);
    let differing = if fresh.same_size(saved.width, saved.height) {
        count_differing_pixels(&fresh, &saved)
    } else {
        fresh.data.len().max(saved.data.len())
    };

    if args.json {
        print_json(&VerifyOutput::compared(differing, file_hash))?;
    } else {
        println!("{} {}", "File:".cyan().bold(), args.file);
        println!("{} {}", "Hash:".dimmed(), file_hash);
        if differing == 0 {
            println!("{} pixels match a fresh render", "PASSED".green().bold());
        } else if !fresh.same_size(saved.width, saved.height) {
            println!(
                "{} file is {}x{}, expected {}x{}",
                "FAILED".red().bold(),
                saved.width,
                saved.height,
                fresh.width,
                fresh.height
            );
        } else {
            println!("{} {} pixel(s) differ", "FAILED".red().bold(), differing);
        }
    }

    if differing == 0 {
        Ok(ExitCode::SUCCESS)
    } else {
        Ok(ExitCode::from(EXIT_MISMATCH))
    }
}

fn configuration_error(err: &ValidationError, json: bool) -> Result<ExitCode> {
    if json {
        print_json(&VerifyOutput::failure(vec![JsonError::from(err)]))?;
    } else {
        eprintln!("{} {}", "error:".red().bold(), err);
    }
    Ok(configuration_exit())
}

fn failure(err: JsonError, json: bool) -> Result<ExitCode> {
    if json {
        print_json(&VerifyOutput::failure(vec![err]))?;
    } else {
        eprintln!("{} {}", "error:".red().bold(), err.message);
    }
    Ok(ExitCode::from(EXIT_FAILURE))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_count_differing_pixels() {
        let a = Canvas::new_black(3, 1);
        let mut b = a.clone();
        assert_eq!(count_differing_pixels(&a, &b), 0);
        b.set(2, 0, [0, 0, 1]);
        assert_eq!(count_differing_pixels(&a, &b), 1);
    }
}
