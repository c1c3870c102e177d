//! QR codes. The writer picks numeric, alphanumeric, byte or kanji mode.

use rxing::{BarcodeFormat, EncodeHintValue, EncodeHints};

use super::{render, SymbolEncoder, SymbolError};
use crate::raster::ModuleMatrix;
use crate::symbology::Symbology;

/// Error correction level M, about 15 % recovery.
pub const DEFAULT_QR_LEVEL: &str = "M";

/// QR encoder.
#[derive(Debug, Clone, Copy)]
pub struct Qr {
    /// Error correction level name: `L`, `M`, `Q` or `H`.
    pub level: &'static str,
}

impl SymbolEncoder for Qr {
    fn symbology(&self) -> Symbology {
        Symbology::Qr
    }

    fn encode(&self, payload: &str) -> Result<ModuleMatrix, SymbolError> {
        let hints = EncodeHints::default()
            .with(EncodeHintValue::ErrorCorrection(self.level.to_string()));

        render(Symbology::Qr, BarcodeFormat::QR_CODE, payload, &hints)
    }
}
