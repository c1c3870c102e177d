//! Aztec codes.
//!
//! Payloads are encoded as UTF-8 bytes behind an ECI marker, so any text is
//! accepted, not only ISO-8859-1.

use rxing::{BarcodeFormat, EncodeHintValue, EncodeHints};

use super::{render, SymbolEncoder, SymbolError};
use crate::raster::ModuleMatrix;
use crate::symbology::Symbology;

/// Default share of codewords spent on error correction, in percent.
pub const DEFAULT_EC_PERCENT: u32 = 33;

/// Layer count that lets the writer pick the smallest symbol that fits.
pub const AUTO_LAYERS: i32 = 0;

const CHARACTER_SET: &str = "UTF-8";

/// Aztec encoder.
#[derive(Debug, Clone, Copy)]
pub struct Aztec {
    /// Error correction percentage.
    pub ec_percent: u32,
    /// Layer count: negative for compact, positive for full-range, 0 for automatic.
    pub layers: i32,
}

impl Aztec {
    fn hints(&self) -> EncodeHints {
        EncodeHints::default()
            .with(EncodeHintValue::ErrorCorrection(self.ec_percent.to_string()))
            .with(EncodeHintValue::AztecLayers(self.layers))
            .with(EncodeHintValue::CharacterSet(CHARACTER_SET.to_string()))
    }
}

impl SymbolEncoder for Aztec {
    fn symbology(&self) -> Symbology {
        Symbology::Aztec
    }

    fn encode(&self, payload: &str) -> Result<ModuleMatrix, SymbolError> {
        render(
            Symbology::Aztec,
            BarcodeFormat::AZTEC,
            payload,
            &self.hints(),
        )
    }
}
