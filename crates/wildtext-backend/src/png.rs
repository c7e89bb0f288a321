//! Deterministic PNG writer and reader.
//!
//! Uses fixed compression settings to ensure byte-identical output
//! for the same canvas. No timestamps or other variable chunks are written.

use std::io::{Cursor, Write};
use std::path::Path;

use png::{BitDepth, ColorType, Compression, Decoder, Encoder, FilterType};
use thiserror::Error;

use crate::canvas::Canvas;

/// Errors from PNG operations.
#[derive(Debug, Error)]
pub enum PngError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("PNG encoding error: {0}")]
    Encoding(#[from] png::EncodingError),

    #[error("PNG decoding error: {0}")]
    Decoding(#[from] png::DecodingError),

    #[error("unsupported PNG format: {0}")]
    UnsupportedFormat(String),

    #[error("Invalid dimensions: {0}")]
    InvalidDimensions(String),
}

/// PNG export configuration for deterministic output.
#[derive(Debug, Clone)]
pub struct PngConfig {
    /// Compression level. Use a fixed value for determinism.
    pub compression: Compression,
    /// Filter type. Use a fixed value for determinism.
    pub filter: FilterType,
}

impl Default for PngConfig {
    fn default() -> Self {
        Self {
            compression: Compression::Default,
            filter: FilterType::NoFilter,
        }
    }
}

impl PngConfig {
    /// Create config optimized for file size (slower, but deterministic).
    pub fn best_compression() -> Self {
        Self {
            compression: Compression::Best,
            filter: FilterType::Paeth,
        }
    }

    /// Create config optimized for speed (faster, but larger files).
    pub fn fast() -> Self {
        Self {
            compression: Compression::Fast,
            filter: FilterType::NoFilter,
        }
    }
}

/// Write a canvas to a PNG file.
pub fn write_rgb(canvas: &Canvas, path: &Path, config: &PngConfig) -> Result<(), PngError> {
    let file = std::fs::File::create(path)?;
    let writer = std::io::BufWriter::new(file);

    write_rgb_to_writer(canvas, writer, config)
}

/// Write a canvas to any writer.
pub fn write_rgb_to_writer<W: Write>(
    canvas: &Canvas,
    writer: W,
    config: &PngConfig,
) -> Result<(), PngError> {
    if canvas.width == 0 || canvas.height == 0 {
        return Err(PngError::InvalidDimensions(format!(
            "cannot encode a {}x{} image",
            canvas.width, canvas.height
        )));
    }

    let mut encoder = Encoder::new(writer, canvas.width, canvas.height);
    encoder.set_color(ColorType::Rgb);
    encoder.set_depth(BitDepth::Eight);
    encoder.set_compression(config.compression);
    encoder.set_filter(config.filter);

    let mut png_writer = encoder.write_header()?;
    png_writer.write_image_data(&canvas.to_rgb8())?;

    Ok(())
}

/// Compute the BLAKE3 hash of PNG data.
pub fn hash_png(data: &[u8]) -> String {
    blake3::hash(data).to_hex().to_string()
}

/// Encode to a `Vec<u8>` and return the bytes with their hash.
pub fn write_rgb_to_vec_with_hash(
    canvas: &Canvas,
    config: &PngConfig,
) -> Result<(Vec<u8>, String), PngError> {
    let mut data = Vec::new();
    write_rgb_to_writer(canvas, &mut data, config)?;
    let hash = hash_png(&data);
    Ok((data, hash))
}

/// Decode an 8-bit RGB PNG into a canvas.
///
/// Other color types and bit depths are rejected rather than converted.
pub fn decode_rgb(bytes: &[u8]) -> Result<Canvas, PngError> {
    let decoder = Decoder::new(Cursor::new(bytes));
    let mut reader = decoder.read_info()?;
    let mut buf = vec![0; reader.output_buffer_size()];
    let info = reader.next_frame(&mut buf)?;

    if info.color_type != ColorType::Rgb || info.bit_depth != BitDepth::Eight {
        return Err(PngError::UnsupportedFormat(format!(
            "expected 8-bit RGB, got {:?} at {:?}",
            info.color_type, info.bit_depth
        )));
    }

    buf.truncate(info.buffer_size());
    Canvas::from_rgb8(info.width, info.height, &buf).ok_or_else(|| {
        PngError::InvalidDimensions(format!(
            "{} bytes do not fill {}x{}",
            buf.len(),
            info.width,
            info.height
        ))
    })
}

/// Read and decode an 8-bit RGB PNG file.
pub fn read_rgb(path: &Path) -> Result<Canvas, PngError> {
    let bytes = std::fs::read(path)?;
    decode_rgb(&bytes)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gradient(w: u32, h: u32) -> Canvas {
        let mut canvas = Canvas::new_black(w, h);
        for y in 0..h {
            for x in 0..w {
                canvas.set(x, y, [(x * 4) as u8, (y * 4) as u8, 128]);
            }
        }
        canvas
    }

    #[test]
    fn test_rgb_deterministic() {
        let canvas = gradient(64, 64);
        let config = PngConfig::default();

        let (data1, hash1) = write_rgb_to_vec_with_hash(&canvas, &config).unwrap();
        let (data2, hash2) = write_rgb_to_vec_with_hash(&canvas, &config).unwrap();

        assert_eq!(data1, data2, "PNG data should be identical");
        assert_eq!(hash1, hash2, "PNG hashes should be identical");
        assert_eq!(hash1.len(), 64);
    }

    #[test]
    fn test_decode_restores_pixels_for_every_config() {
        let canvas = gradient(33, 17);
        for config in [PngConfig::default(), PngConfig::fast(), PngConfig::best_compression()] {
            let (data, _) = write_rgb_to_vec_with_hash(&canvas, &config).unwrap();
            assert_eq!(decode_rgb(&data).unwrap(), canvas);
        }
    }

    #[test]
    fn test_decode_rejects_grayscale() {
        let mut data = Vec::new();
        {
            let mut encoder = Encoder::new(&mut data, 2, 2);
            encoder.set_color(ColorType::Grayscale);
            encoder.set_depth(BitDepth::Eight);
            let mut writer = encoder.write_header().unwrap();
            writer.write_image_data(&[0, 1, 2, 3]).unwrap();
        }
        assert!(matches!(decode_rgb(&data), Err(PngError::UnsupportedFormat(_))));
    }

    #[test]
    fn test_decode_rejects_garbage() {
        assert!(matches!(decode_rgb(b"not a png"), Err(PngError::Decoding(_))));
    }

    #[test]
    fn test_empty_canvas_is_rejected() {
        let canvas = Canvas::new_black(0, 4);
        assert!(matches!(
            write_rgb_to_vec_with_hash(&canvas, &PngConfig::default()),
            Err(PngError::InvalidDimensions(_))
        ));
    }

    #[test]
    fn test_file_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.png");
        let canvas = gradient(8, 8);
        write_rgb(&canvas, &path, &PngConfig::default()).unwrap();
        assert_eq!(read_rgb(&path).unwrap(), canvas);
    }
}
