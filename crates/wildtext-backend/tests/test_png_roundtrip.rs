//! PNG encode/decode of generated canvases.

use wildtext_backend::png::{decode_rgb, write_rgb, write_rgb_to_vec_with_hash, PngConfig};
use wildtext_backend::{generate, MaskProvider};
use wildtext_spec::{Style, StyleConfig};

#[test]
fn test_generated_canvas_survives_png() {
    let provider = MaskProvider::builtin();
    for &style in Style::all() {
        let config = StyleConfig::new("NEXT LEVEL", style, 11, 160, 90);
        let result = generate(&config, &provider).unwrap();

        let (bytes, hash) = write_rgb_to_vec_with_hash(&result.canvas, &PngConfig::default()).unwrap();
        let decoded = decode_rgb(&bytes).unwrap();
        assert_eq!(decoded, result.canvas, "{} round trip", style);

        let (again, hash_again) =
            write_rgb_to_vec_with_hash(&result.canvas, &PngConfig::default()).unwrap();
        assert_eq!(bytes, again);
        assert_eq!(hash, hash_again);
    }
}

#[test]
fn test_png_file_matches_fresh_render() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("WILD_liquid_seed42.png");
    let provider = MaskProvider::builtin();
    let config = StyleConfig::new("WILD", Style::Liquid, 42, 128, 128);

    let first = generate(&config, &provider).unwrap();
    write_rgb(&first.canvas, &path, &PngConfig::default()).unwrap();

    let bytes = std::fs::read(&path).unwrap();
    let second = generate(&config, &provider).unwrap();
    assert_eq!(decode_rgb(&bytes).unwrap(), second.canvas);
}
