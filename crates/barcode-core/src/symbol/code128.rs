//! Code 128 with automatic code set selection.

use rxing::{BarcodeFormat, EncodeHints};

use super::{render, SymbolEncoder, SymbolError};
use crate::raster::ModuleMatrix;
use crate::symbology::Symbology;

/// Code 128 encoder. Character set and length limits are enforced by the writer.
#[derive(Debug, Clone, Copy, Default)]
pub struct Code128;

impl SymbolEncoder for Code128 {
    fn symbology(&self) -> Symbology {
        Symbology::Code128
    }

    fn encode(&self, payload: &str) -> Result<ModuleMatrix, SymbolError> {
        render(
            Symbology::Code128,
            BarcodeFormat::CODE_128,
            payload,
            &EncodeHints::default(),
        )
    }
}
