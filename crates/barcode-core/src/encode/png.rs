//! PNG encoding for rendered symbols.
//!
//! This module uses the `image` crate's PNG encoder with a fixed compression
//! level and filter so identical pixels always produce identical bytes.

use std::io::{self, Write};

use image::codecs::png::{CompressionType, FilterType, PngEncoder};
use image::{ExtendedColorType, ImageEncoder, ImageError, RgbImage};
use thiserror::Error;

/// The eight bytes every PNG file starts with.
pub const PNG_SIGNATURE: [u8; 8] = [0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A];

/// Errors that can occur during PNG encoding.
#[derive(Debug, Error)]
pub enum EncodeError {
    /// Pixel data length doesn't match expected dimensions
    #[error("Invalid pixel data: expected {expected} bytes (width * height * 3), got {actual}")]
    InvalidPixelData { expected: usize, actual: usize },

    /// Width or height is zero
    #[error("Invalid dimensions: width ({width}) and height ({height}) must be non-zero")]
    InvalidDimensions { width: u32, height: u32 },

    /// The output sink rejected a write
    #[error("PNG write failed: {0}")]
    Io(#[from] io::Error),

    /// PNG encoding failed
    #[error("PNG encoding failed: {0}")]
    EncodingFailed(String),
}

impl From<ImageError> for EncodeError {
    fn from(err: ImageError) -> Self {
        match err {
            ImageError::IoError(e) => EncodeError::Io(e),
            other => EncodeError::EncodingFailed(other.to_string()),
        }
    }
}

/// Encode an `RgbImage` to PNG bytes.
///
/// # Arguments
///
/// * `image` - 24-bit RGB image
///
/// # Returns
///
/// PNG-encoded bytes on success, or an error if encoding fails.
pub fn encode_image(image: &RgbImage) -> Result<Vec<u8>, EncodeError> {
    let mut buffer = Vec::new();
    write_png(image, &mut buffer)?;
    Ok(buffer)
}

/// Stream an `RgbImage` as PNG into `sink`.
///
/// A failing sink is reported as [`EncodeError::Io`]; nothing is retried.
pub fn write_png<W: Write>(image: &RgbImage, sink: W) -> Result<(), EncodeError> {
    write_rgb(image.as_raw(), image.width(), image.height(), sink)
}

fn write_rgb<W: Write>(pixels: &[u8], width: u32, height: u32, sink: W) -> Result<(), EncodeError> {
    if width == 0 || height == 0 {
        return Err(EncodeError::InvalidDimensions { width, height });
    }

    let expected_len = (width as usize) * (height as usize) * 3;
    if pixels.len() != expected_len {
        return Err(EncodeError::InvalidPixelData {
            expected: expected_len,
            actual: pixels.len(),
        });
    }

    // Compression and filter are fixed; output must be reproducible.
    let encoder = PngEncoder::new_with_quality(sink, CompressionType::Default, FilterType::Sub);
    encoder.write_image(pixels, width, height, ExtendedColorType::Rgb8)?;

    Ok(())
}


// ============================================================================
// Property-Based Tests
// ============================================================================
