//! Command-level tests: files written by `generate` and checked by `verify`.

use std::fs;
use std::process::ExitCode;

use wildtext_cli::commands::generate::{self, GenerateArgs};
use wildtext_cli::commands::verify::{self, VerifyArgs};
use wildtext_cli::commands::{EXIT_CONFIGURATION, EXIT_MISMATCH};

fn small_args(out_dir: &str) -> GenerateArgs {
    GenerateArgs {
        text: Some("NEXT LEVEL".into()),
        style: "holographic".into(),
        seed: Some(7),
        width: 96,
        height: 64,
        out_dir: Some(out_dir.to_string()),
        json: true,
        ..GenerateArgs::default()
    }
}

#[test]
fn test_batch_writes_consecutive_seeds() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().to_str().unwrap();
    let args = GenerateArgs {
        batch: 3,
        ..small_args(out)
    };

    let code = generate::run(&args).unwrap();
    assert_eq!(code, ExitCode::SUCCESS);

    for seed in 7..10 {
        let name = format!("NEXT_LEVEL_holographic_seed{}.png", seed);
        assert!(dir.path().join(&name).exists(), "missing {}", name);
    }
}

#[test]
fn test_unknown_style_exits_with_configuration_code() {
    let dir = tempfile::tempdir().unwrap();
    let args = GenerateArgs {
        style: "not-a-style".into(),
        ..small_args(dir.path().to_str().unwrap())
    };
    let code = generate::run(&args).unwrap();
    assert_eq!(code, ExitCode::from(EXIT_CONFIGURATION));
    assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 0);
}

#[test]
fn test_zero_width_exits_with_configuration_code() {
    let dir = tempfile::tempdir().unwrap();
    let args = GenerateArgs {
        width: 0,
        ..small_args(dir.path().to_str().unwrap())
    };
    assert_eq!(generate::run(&args).unwrap(), ExitCode::from(EXIT_CONFIGURATION));
}

#[test]
fn test_verify_accepts_generated_file_and_rejects_other_seed() {
    let dir = tempfile::tempdir().unwrap();
    let args = small_args(dir.path().to_str().unwrap());
    generate::run(&args).unwrap();
    let file = dir.path().join("NEXT_LEVEL_holographic_seed7.png");

    let mut verify_args = VerifyArgs {
        text: "NEXT LEVEL".into(),
        style: "holographic".into(),
        seed: 7,
        file: file.display().to_string(),
        width: 96,
        height: 64,
        json: true,
    };
    assert_eq!(verify::run(&verify_args).unwrap(), ExitCode::SUCCESS);

    verify_args.seed = 8;
    assert_eq!(verify::run(&verify_args).unwrap(), ExitCode::from(EXIT_MISMATCH));
}

#[test]
fn test_verify_negative_width_exits_with_configuration_code() {
    let args = VerifyArgs {
        text: "X".into(),
        style: "particle".into(),
        seed: 0,
        file: "does-not-matter.png".into(),
        width: -5,
        height: 64,
        json: true,
    };
    assert_eq!(verify::run(&args).unwrap(), ExitCode::from(EXIT_CONFIGURATION));
}

#[test]
fn test_request_file_drives_generation() {
    let dir = tempfile::tempdir().unwrap();
    let request = dir.path().join("request.json");
    fs::write(
        &request,
        r#"{"text": "WILD", "style": "liquid", "seed": 42, "width": 80, "height": 60}"#,
    )
    .unwrap();
    let out = dir.path().join("out");

    let args = GenerateArgs {
        request: Some(request.display().to_string()),
        out_dir: Some(out.display().to_string()),
        json: true,
        ..GenerateArgs::default()
    };
    assert_eq!(generate::run(&args).unwrap(), ExitCode::SUCCESS);
    assert!(out.join("WILD_liquid_seed42.png").exists());
}
