//! Symbol encoders, one per symbology.
//!
//! Each encoder is a pure function from a payload string to a [`ModuleMatrix`]
//! at natural size (one pixel per module). Symbology rules that the backend
//! leaves implicit, such as EAN lengths or Code 39 full ASCII expansion, are
//! checked here first so rejections carry a precise message.
//!
//! # Fixed Options
//!
//! | Symbology | Options |
//! |-----------|---------|
//! | EAN       | EAN-8 or EAN-13 by length, check digit computed or verified |
//! | Code 39   | full ASCII, mod-43 check character |
//! | Code 93   | full ASCII, C and K check characters |
//! | Code 128  | automatic code set |
//! | Aztec     | 33 % error correction, automatic layer count |
//! | QR        | level M, automatic mode selection |

mod aztec;
mod code128;
mod code39;
mod code93;
mod ean;
mod qr;

pub use aztec::{Aztec, AUTO_LAYERS, DEFAULT_EC_PERCENT};
pub use code128::Code128;
pub use code39::Code39;
pub use code93::Code93;
pub use ean::Ean;
pub use qr::{Qr, DEFAULT_QR_LEVEL};

use rxing::{BarcodeFormat, EncodeHints, MultiFormatWriter, Writer};
use thiserror::Error;

use crate::raster::ModuleMatrix;
use crate::symbology::Symbology;

pub(crate) static EAN: Ean = Ean;
pub(crate) static CODE39: Code39 = Code39 {
    full_ascii: true,
    checksum: true,
};
pub(crate) static CODE93: Code93 = Code93 { full_ascii: true };
pub(crate) static CODE128: Code128 = Code128;
pub(crate) static AZTEC: Aztec = Aztec {
    ec_percent: DEFAULT_EC_PERCENT,
    layers: AUTO_LAYERS,
};
pub(crate) static QR: Qr = Qr {
    level: DEFAULT_QR_LEVEL,
};

/// Errors raised when a payload can not be encoded.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SymbolError {
    /// Nothing to encode
    #[error("payload must not be empty")]
    EmptyPayload,

    /// A character outside the symbology's character set
    #[error("{symbology}: character {character:?} at position {position} can not be encoded")]
    InvalidCharacter {
        symbology: Symbology,
        character: char,
        position: usize,
    },

    /// Payload length not allowed by the symbology
    #[error("{symbology}: payload must be {expected} characters long, got {actual}")]
    InvalidLength {
        symbology: Symbology,
        expected: &'static str,
        actual: usize,
    },

    /// Supplied check digit does not match the computed one
    #[error("{symbology}: check digit mismatch, expected {expected} but got {actual}")]
    ChecksumMismatch {
        symbology: Symbology,
        expected: char,
        actual: char,
    },

    /// The encoding backend refused the payload
    #[error("{symbology}: {message}")]
    Rejected {
        symbology: Symbology,
        message: String,
    },
}

/// Strategy interface for a single symbology.
pub trait SymbolEncoder: Send + Sync {
    /// The symbology this encoder produces.
    fn symbology(&self) -> Symbology;

    /// Encode `payload` into a module grid at natural size.
    fn encode(&self, payload: &str) -> Result<ModuleMatrix, SymbolError>;
}

/// Encode `payload` with the fixed options of `symbology`.
///
/// Empty payloads are rejected for every symbology before the encoder runs.
///
/// # Example
///
/// ```ignore
/// use barcode_core::{encode_symbol, Raster, Symbology};
///
/// let matrix = encode_symbol(Symbology::Qr, "HELLO").unwrap();
/// assert_eq!(matrix.width(), matrix.height());
/// ```
pub fn encode_symbol(symbology: Symbology, payload: &str) -> Result<ModuleMatrix, SymbolError> {
    if payload.is_empty() {
        return Err(SymbolError::EmptyPayload);
    }
    symbology.encoder().encode(payload)
}

/// Run the rxing writer at natural size (width and height 0) and copy out the modules.
fn render(
    symbology: Symbology,
    format: BarcodeFormat,
    contents: &str,
    hints: &EncodeHints,
) -> Result<ModuleMatrix, SymbolError> {
    let matrix = MultiFormatWriter::default()
        .encode_with_hints(contents, &format, 0, 0, hints)
        .map_err(|e| SymbolError::Rejected {
            symbology,
            message: e.to_string(),
        })?;

    Ok(ModuleMatrix::from_bit_matrix(&matrix))
}

/// First character of `payload` that fails `allowed`, with its position.
fn find_invalid(
    symbology: Symbology,
    payload: &str,
    allowed: impl Fn(char) -> bool,
) -> Result<(), SymbolError> {
    match payload.chars().enumerate().find(|&(_, c)| !allowed(c)) {
        Some((position, character)) => Err(SymbolError::InvalidCharacter {
            symbology,
            character,
            position,
        }),
        None => Ok(()),
    }
}
