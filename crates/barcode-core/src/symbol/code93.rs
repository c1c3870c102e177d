//! Code 93.
//!
//! Both check characters (C and K) are mandatory in Code 93 and are always
//! appended by the writer. In full ASCII mode the writer also handles the
//! shift-pair expansion; this encoder only guards the character set.

use rxing::{BarcodeFormat, EncodeHints};

use super::{find_invalid, render, SymbolEncoder, SymbolError};
use crate::raster::ModuleMatrix;
use crate::symbology::Symbology;

/// Characters Code 93 encodes without shift pairs.
const BASIC: &str = "0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ-. $/+%";

/// Code 93 encoder.
#[derive(Debug, Clone, Copy)]
pub struct Code93 {
    /// Accept any ASCII character, not just the 43 basic ones.
    pub full_ascii: bool,
}

impl SymbolEncoder for Code93 {
    fn symbology(&self) -> Symbology {
        Symbology::Code93
    }

    fn encode(&self, payload: &str) -> Result<ModuleMatrix, SymbolError> {
        if self.full_ascii {
            find_invalid(Symbology::Code93, payload, |c| c.is_ascii())?;
        } else {
            find_invalid(Symbology::Code93, payload, |c| BASIC.contains(c))?;
        }

        render(
            Symbology::Code93,
            BarcodeFormat::CODE_93,
            payload,
            &EncodeHints::default(),
        )
    }
}
