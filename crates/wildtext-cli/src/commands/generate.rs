//! Generate command implementation
//!
//! Renders one image, or a batch of seed variations, and writes each as a
//! deterministic PNG.

use anyhow::{Context, Result};
use colored::Colorize;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing::{debug, info_span};

use wildtext_backend::png::PngConfig;
use wildtext_backend::rng::random_seed;
use wildtext_backend::{generate, GenerateError, MaskProvider};
use wildtext_spec::{
    BackendError, RenderRequest, SpecError, StyleConfig, ValidationError, MAX_RANDOM_SEED,
};

use super::json_output::{error_codes, print_json, GenerateOutput, ImageRecord, JsonError};
use super::{configuration_exit, output_file_name};

/// Arguments of the generate command.
#[derive(Debug, Clone)]
pub struct GenerateArgs {
    /// Text to render (ignored when `request` is given)
    pub text: Option<String>,
    /// Style name
    pub style: String,
    /// Base seed; batch image `i` uses `seed + i`
    pub seed: Option<u64>,
    /// Number of images
    pub batch: u32,
    /// Canvas width
    pub width: i64,
    /// Canvas height
    pub height: i64,
    /// Output directory (default: ./output)
    pub out_dir: Option<String>,
    /// JSON request file replacing text/style/seed/width/height
    pub request: Option<String>,
    /// Machine-readable output
    pub json: bool,
}

impl Default for GenerateArgs {
    fn default() -> Self {
        Self {
            text: None,
            style: "particle".to_string(),
            seed: None,
            batch: 1,
            width: wildtext_spec::DEFAULT_WIDTH,
            height: wildtext_spec::DEFAULT_HEIGHT,
            out_dir: None,
            request: None,
            json: false,
        }
    }
}

/// Default output directory.
pub const DEFAULT_OUT_DIR: &str = "output";

/// Run the generate command.
///
/// # Returns
/// Exit code: 0 on success, 1 on a configuration error. Generation and I/O
/// errors are returned as `Err`.
pub fn run(args: &GenerateArgs) -> Result<ExitCode> {
    let request = match load_request(args) {
        Ok(request) => request,
        Err(err) => return report_configuration_error(&err, args.json),
    };
    let base = match request.resolve_with_seed(0) {
        Ok(config) => config,
        Err(err) => return report_configuration_error(&err, args.json),
    };

    let out_dir = PathBuf::from(args.out_dir.as_deref().unwrap_or(DEFAULT_OUT_DIR));
    fs::create_dir_all(&out_dir)
        .with_context(|| format!("Failed to create output directory: {}", out_dir.display()))?;

    if !args.json {
        println!("{} '{}'", "Text:".cyan().bold(), request.text);
        println!("{} {}", "Style:".cyan().bold(), base.style);
        println!("{} {}", "Batch:".cyan().bold(), args.batch);
    }

    let provider = MaskProvider::builtin();
    let mut images = Vec::new();

    for i in 0..args.batch {
        let seed = match request.seed {
            Some(seed) => seed.wrapping_add(i as u64),
            None => random_seed(MAX_RANDOM_SEED),
        };
        let config = base.with_seed(seed);

        let _span = info_span!("batch_item", index = i, seed).entered();
        if !args.json {
            println!("\n[{}/{}]", i + 1, args.batch);
        }

        match render_one(&config, &provider, &out_dir) {
            Ok(record) => {
                if !args.json {
                    println!("{} {}", "Saved:".green().bold(), record.path);
                    println!("  {} {}", "seed:".dimmed(), record.seed);
                    println!("  {} {}", "hash:".dimmed(), record.hash);
                }
                images.push(record);
            }
            Err(RenderFailure::Configuration(err)) => {
                return report_configuration_error(&err, args.json);
            }
            Err(RenderFailure::Other { code, error }) => {
                if args.json {
                    let output = GenerateOutput::failure(
                        vec![JsonError::new(code, format!("{:#}", error))],
                        images,
                    );
                    print_json(&output)?;
                }
                return Err(error);
            }
        }
    }

    if args.json {
        print_json(&GenerateOutput::success(images))?;
    } else {
        println!("\n{} Generated {} image(s)", "SUCCESS".green().bold(), images.len());
    }
    Ok(ExitCode::SUCCESS)
}

enum RenderFailure {
    Configuration(ValidationError),
    Other {
        code: &'static str,
        error: anyhow::Error,
    },
}

fn render_one(
    config: &StyleConfig,
    provider: &MaskProvider,
    out_dir: &Path,
) -> std::result::Result<ImageRecord, RenderFailure> {
    let result = generate(config, provider).map_err(|err| match err {
        GenerateError::Configuration(v) => RenderFailure::Configuration(v),
        other => RenderFailure::Other {
            code: error_codes::GENERATION_ERROR,
            error: anyhow::anyhow!("{} ({})", other, other.code()),
        },
    })?;

    let (bytes, hash) = result
        .encode_png(&PngConfig::default())
        .map_err(|err| RenderFailure::Other {
            code: error_codes::GENERATION_ERROR,
            error: anyhow::anyhow!("Failed to encode PNG: {} ({})", err, err.code()),
        })?;

    let path = out_dir.join(output_file_name(&config.text, config.style, result.seed));
    fs::write(&path, &bytes).map_err(|err| RenderFailure::Other {
        code: error_codes::FILE_WRITE,
        error: anyhow::Error::new(err).context(format!("Failed to write {}", path.display())),
    })?;
    debug!(path = %path.display(), bytes = bytes.len(), "image written");

    Ok(ImageRecord::new(path.display().to_string(), &result, hash))
}

/// Build the request from a JSON file or from the flags.
fn load_request(args: &GenerateArgs) -> std::result::Result<RenderRequest, ValidationError> {
    if let Some(path) = &args.request {
        let content = fs::read_to_string(path)
            .map_err(|e| SpecError::from(e).into_validation_error())?;
        return RenderRequest::from_json(&content).map_err(SpecError::into_validation_error);
    }

    let text = args.text.clone().unwrap_or_default();
    let mut request = RenderRequest::new(text, args.style.clone()).with_size(args.width, args.height);
    request.seed = args.seed;
    Ok(request)
}

fn report_configuration_error(err: &ValidationError, json: bool) -> Result<ExitCode> {
    if json {
        print_json(&GenerateOutput::failure(vec![JsonError::from(err)], Vec::new()))?;
    } else {
        eprintln!("{} {}", "error:".red().bold(), err);
    }
    Ok(configuration_exit())
}
