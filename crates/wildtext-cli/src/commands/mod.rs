//! CLI command implementations

pub mod generate;
pub mod json_output;
pub mod styles;
pub mod verify;

use std::process::ExitCode;

use wildtext_spec::Style;

/// Exit code for configuration errors (bad style, dimensions, or request).
pub const EXIT_CONFIGURATION: u8 = 1;
/// Exit code for generation and I/O errors.
pub const EXIT_FAILURE: u8 = 2;
/// Exit code when `verify` finds differing pixels.
pub const EXIT_MISMATCH: u8 = 3;

pub(crate) fn configuration_exit() -> ExitCode {
    ExitCode::from(EXIT_CONFIGURATION)
}

/// File-name-safe form of the text: spaces and `/` become `_`, first 20
/// characters kept.
pub fn safe_text(text: &str) -> String {
    text.chars()
        .map(|c| if c == ' ' || c == '/' { '_' } else { c })
        .take(20)
        .collect()
}

/// Output file name for one image: `{safe_text}_{style}_seed{seed}.png`.
pub fn output_file_name(text: &str, style: Style, seed: u64) -> String {
    format!("{}_{}_seed{}.png", safe_text(text), style, seed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_safe_text() {
        assert_eq!(safe_text("NEXT LEVEL"), "NEXT_LEVEL");
        assert_eq!(safe_text("a/b c"), "a_b_c");
        assert_eq!(safe_text("ABCDEFGHIJKLMNOPQRSTUVWXYZ"), "ABCDEFGHIJKLMNOPQRST");
        assert_eq!(safe_text(""), "");
    }

    #[test]
    fn test_output_file_name() {
        assert_eq!(
            output_file_name("WILD", Style::Liquid, 42),
            "WILD_liquid_seed42.png"
        );
    }
}
