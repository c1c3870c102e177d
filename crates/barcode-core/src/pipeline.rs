//! Request pipeline: identifier, payload and size in, PNG bytes out.
//!
//! Stages run in a fixed order and the first failure short-circuits:
//!
//! 1. Symbology lookup
//! 2. Symbol encoding
//! 3. Size parsing
//! 4. Scaling
//! 5. Truecolor normalization
//! 6. PNG serialization
//!
//! Encoding deliberately runs before size parsing, so a rejected payload is
//! reported even when the size is also malformed.

use thiserror::Error;

use crate::encode::{self, EncodeError};
use crate::raster::{scale, to_truecolor, ScaleError};
use crate::size::{SizeError, TargetSize};
use crate::symbol::{encode_symbol, SymbolError};
use crate::symbology::{Symbology, UnsupportedSymbology};

/// Largest width or height accepted by default.
pub const DEFAULT_MAX_DIMENSION: u32 = 4096;

/// Pipeline limits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenerateOptions {
    /// Largest accepted width or height, in pixels.
    pub max_dimension: u32,
}

impl Default for GenerateOptions {
    fn default() -> Self {
        Self {
            max_dimension: DEFAULT_MAX_DIMENSION,
        }
    }
}

/// One failure per pipeline stage.
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error(transparent)]
    UnsupportedSymbology(#[from] UnsupportedSymbology),

    #[error(transparent)]
    Encoding(#[from] SymbolError),

    #[error("invalid size")]
    InvalidSizeFormat,

    #[error("invalid size parameters")]
    InvalidSizeValue,

    #[error(transparent)]
    Scaling(#[from] ScaleError),

    #[error(transparent)]
    Serialization(#[from] EncodeError),
}

impl From<SizeError> for PipelineError {
    fn from(err: SizeError) -> Self {
        match err {
            SizeError::Format => PipelineError::InvalidSizeFormat,
            SizeError::Value => PipelineError::InvalidSizeValue,
        }
    }
}

/// Run the whole pipeline on raw request values.
///
/// # Arguments
///
/// * `symbology` - Identifier such as `"qr"` or `"code128"` (case-sensitive)
/// * `payload` - Text to encode
/// * `size` - `"<width>x<height>"` in pixels
/// * `options` - Limits applied to the size
///
/// # Returns
///
/// PNG bytes of exactly `width x height` pixels, or the error of the first
/// stage that failed.
///
/// # Example
///
/// ```ignore
/// use barcode_core::{generate, GenerateOptions};
///
/// let png = generate("qr", "HELLO", "200x200", &GenerateOptions::default()).unwrap();
/// assert_eq!(&png[1..4], b"PNG");
/// ```
pub fn generate(
    symbology: &str,
    payload: &str,
    size: &str,
    options: &GenerateOptions,
) -> Result<Vec<u8>, PipelineError> {
    let symbology: Symbology = symbology.parse()?;
    let matrix = encode_symbol(symbology, payload)?;
    let size = TargetSize::parse(size, options.max_dimension)?;

    let scaled = scale(&matrix, size.width(), size.height())?;
    let truecolor = to_truecolor(&scaled);
    Ok(encode::encode_image(&truecolor)?)
}


// ============================================================================
// Property-Based Tests
// ============================================================================

#[cfg(test)]
mod proptests {
    use super::*;
    use image::GenericImageView;
    use proptest::prelude::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(32))]

        /// Property: The PNG always has the requested dimensions.
        #[test]
        fn prop_qr_output_matches_size(
            width in 1u32..=300,
            height in 1u32..=300,
            payload in "[A-Za-z0-9 ]{1,40}",
        ) {
            let png = generate("qr", &payload, &format!("{width}x{height}"), &GenerateOptions::default()).unwrap();
            let decoded = image::load_from_memory(&png).unwrap();
            prop_assert_eq!(decoded.dimensions(), (width, height));
        }

        /// Property: Any printable ASCII text encodes as Code 128.
        #[test]
        fn prop_code128_accepts_printable_ascii(payload in "[ -~]{1,40}") {
            let png = generate("code128", &payload, "200x40", &GenerateOptions::default());
            prop_assert!(png.is_ok(), "{:?}", png.err());
        }

        /// Property: Any ASCII text encodes as Code 39 in full ASCII mode.
        #[test]
        fn prop_code39_accepts_ascii(payload in "[\\x00-\\x7f]{1,20}") {
            let png = generate("code39", &payload, "400x40", &GenerateOptions::default());
            prop_assert!(png.is_ok(), "{:?}", png.err());
        }

        /// Property: Any short ASCII text encodes as Code 93, control characters included.
        #[test]
        fn prop_code93_accepts_ascii(payload in "[\\x00-\\x7f]{1,10}") {
            let png = generate("code93", &payload, "400x40", &GenerateOptions::default());
            prop_assert!(png.is_ok(), "{:?}", png.err());
        }

        /// Property: Non-digit EAN payloads are always encoding errors.
        #[test]
        fn prop_ean_rejects_letters(payload in "[0-9]{0,6}[A-Za-z][0-9]{0,6}") {
            let result = generate("ean", &payload, "100x50", &GenerateOptions::default());
            prop_assert!(matches!(result, Err(PipelineError::Encoding(_))));
        }
    }
}
