//! The closed set of supported symbologies.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::symbol::{self, SymbolEncoder};

/// Returned when an identifier does not name a supported symbology.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unsupported symbology: {0}")]
pub struct UnsupportedSymbology(pub String);

/// Barcode and 2-D code standards the pipeline can render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Symbology {
    /// EAN-8 / EAN-13, picked by payload length.
    Ean,
    /// Code 39, full ASCII with a mod-43 check character.
    Code39,
    /// Code 93, full ASCII with C and K check characters.
    Code93,
    /// Code 128 with automatic code set selection.
    Code128,
    /// Aztec with default error correction and automatic layers.
    Aztec,
    /// QR with error correction level M and automatic mode selection.
    Qr,
}

impl Symbology {
    /// All symbologies, in identifier order.
    pub const ALL: [Symbology; 6] = [
        Symbology::Ean,
        Symbology::Code39,
        Symbology::Code93,
        Symbology::Code128,
        Symbology::Aztec,
        Symbology::Qr,
    ];

    /// The identifier used in request paths.
    pub fn as_str(self) -> &'static str {
        match self {
            Symbology::Ean => "ean",
            Symbology::Code39 => "code39",
            Symbology::Code93 => "code93",
            Symbology::Code128 => "code128",
            Symbology::Aztec => "aztec",
            Symbology::Qr => "qr",
        }
    }

    /// The encoder for this symbology, with its fixed options applied.
    pub fn encoder(self) -> &'static dyn SymbolEncoder {
        match self {
            Symbology::Ean => &symbol::EAN,
            Symbology::Code39 => &symbol::CODE39,
            Symbology::Code93 => &symbol::CODE93,
            Symbology::Code128 => &symbol::CODE128,
            Symbology::Aztec => &symbol::AZTEC,
            Symbology::Qr => &symbol::QR,
        }
    }
}

impl FromStr for Symbology {
    type Err = UnsupportedSymbology;

    /// Identifiers are matched exactly; `QR` or ` qr` are rejected.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Symbology::ALL
            .into_iter()
            .find(|symbology| symbology.as_str() == s)
            .ok_or_else(|| UnsupportedSymbology(s.to_string()))
    }
}

impl fmt::Display for Symbology {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
