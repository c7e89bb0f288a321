//! WildText CLI - Command-line interface for text visual generation
//!
//! This binary renders text into deterministic images in one of three
//! styles, lists the styles, and verifies saved images against a fresh
//! render.

use clap::{Parser, Subcommand};
use std::process::ExitCode;

use wildtext_cli::commands::{self, generate::GenerateArgs, verify::VerifyArgs};
use wildtext_cli::logging;

/// WildText - Procedural Text Visual Generator
#[derive(Parser)]
#[command(name = "wildtext")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable debug logging on stderr (RUST_LOG overrides)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate images from text
    Generate {
        /// Text to render
        #[arg(short, long, required_unless_present = "request")]
        text: Option<String>,

        /// Visual style (particle, holographic, liquid)
        #[arg(short, long, default_value = "particle")]
        style: String,

        /// Seed for reproducibility (random when omitted)
        #[arg(long)]
        seed: Option<u64>,

        /// Number of variations; image i uses seed + i
        #[arg(short, long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..))]
        batch: u32,

        /// Output width in pixels
        #[arg(long, default_value_t = 1080, allow_hyphen_values = true)]
        width: i64,

        /// Output height in pixels
        #[arg(long, default_value_t = 1080, allow_hyphen_values = true)]
        height: i64,

        /// Output directory (default: ./output)
        #[arg(short, long)]
        out_dir: Option<String>,

        /// JSON request file (text, style, seed, width, height)
        #[arg(short, long, conflicts_with = "text")]
        request: Option<String>,

        /// Output machine-readable JSON (no colored output)
        #[arg(long)]
        json: bool,
    },

    /// List the available styles
    Styles {
        /// Output machine-readable JSON (no colored output)
        #[arg(long)]
        json: bool,
    },

    /// Check a saved PNG against a fresh render
    Verify {
        /// Text the image was rendered from
        #[arg(short, long)]
        text: String,

        /// Style the image was rendered with
        #[arg(short, long)]
        style: String,

        /// Seed the image was rendered with
        #[arg(long)]
        seed: u64,

        /// PNG file to check
        #[arg(short, long)]
        file: String,

        /// Image width in pixels
        #[arg(long, default_value_t = 1080, allow_hyphen_values = true)]
        width: i64,

        /// Image height in pixels
        #[arg(long, default_value_t = 1080, allow_hyphen_values = true)]
        height: i64,

        /// Output machine-readable JSON (no colored output)
        #[arg(long)]
        json: bool,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let result = match cli.command {
        Commands::Generate {
            text,
            style,
            seed,
            batch,
            width,
            height,
            out_dir,
            request,
            json,
        } => commands::generate::run(&GenerateArgs {
            text,
            style,
            seed,
            batch,
            width,
            height,
            out_dir,
            request,
            json,
        }),
        Commands::Styles { json } => commands::styles::run(json),
        Commands::Verify {
            text,
            style,
            seed,
            file,
            width,
            height,
            json,
        } => commands::verify::run(&VerifyArgs {
            text,
            style,
            seed,
            file,
            width,
            height,
            json,
        }),
    };

    match result {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{}: {:#}", colored::Colorize::red("error"), e);
            ExitCode::from(commands::EXIT_FAILURE)
        }
    }
}
