//! Styles command implementation

use anyhow::Result;
use colored::Colorize;
use std::process::ExitCode;

use wildtext_backend::renderer_for;
use wildtext_spec::Style;

use super::json_output::{print_json, StyleInfo};

/// Describe every available style.
pub fn style_infos() -> Vec<StyleInfo> {
    Style::all()
        .iter()
        .map(|&style| StyleInfo {
            name: style.as_str().to_string(),
            description: style.description().to_string(),
            font_size: renderer_for(style).font_size(),
        })
        .collect()
}

/// Run the styles command.
pub fn run(json_output: bool) -> Result<ExitCode> {
    let infos = style_infos();
    if json_output {
        print_json(&infos)?;
        return Ok(ExitCode::SUCCESS);
    }

    println!("{}", "Available styles:".cyan().bold());
    for info in &infos {
        println!("  {:<12} {}", info.name.green(), info.description);
    }
    Ok(ExitCode::SUCCESS)
}
