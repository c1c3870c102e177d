//! EAN-8 and EAN-13.
//!
//! The variant is chosen from the payload length:
//!
//! - 7 or 12 digits: the check digit is computed and appended
//! - 8 or 13 digits: the last digit is verified as the check digit

use rxing::{BarcodeFormat, EncodeHints};

use super::{find_invalid, render, SymbolEncoder, SymbolError};
use crate::raster::ModuleMatrix;
use crate::symbology::Symbology;

const ALLOWED_LENGTHS: &str = "7, 8, 12 or 13";

/// EAN encoder.
#[derive(Debug, Clone, Copy, Default)]
pub struct Ean;

impl SymbolEncoder for Ean {
    fn symbology(&self) -> Symbology {
        Symbology::Ean
    }

    fn encode(&self, payload: &str) -> Result<ModuleMatrix, SymbolError> {
        let contents = complete(payload)?;
        let format = if contents.len() == 8 {
            BarcodeFormat::EAN_8
        } else {
            BarcodeFormat::EAN_13
        };

        render(Symbology::Ean, format, &contents, &EncodeHints::default())
    }
}

/// Validate the payload and return it with its check digit in place.
fn complete(payload: &str) -> Result<String, SymbolError> {
    find_invalid(Symbology::Ean, payload, |c| c.is_ascii_digit())?;

    // Digits only from here, so byte length equals character count
    match payload.len() {
        7 | 12 => {
            let mut contents = payload.to_string();
            contents.push(check_digit(payload));
            Ok(contents)
        }
        8 | 13 => {
            let (data, supplied) = payload.split_at(payload.len() - 1);
            let expected = check_digit(data);
            let actual = supplied.chars().next().unwrap_or_default();
            if expected != actual {
                return Err(SymbolError::ChecksumMismatch {
                    symbology: Symbology::Ean,
                    expected,
                    actual,
                });
            }
            Ok(payload.to_string())
        }
        actual => Err(SymbolError::InvalidLength {
            symbology: Symbology::Ean,
            expected: ALLOWED_LENGTHS,
            actual,
        }),
    }
}

/// GS1 mod-10 check digit: weights 3, 1, 3, ... from the rightmost data digit.
fn check_digit(data: &str) -> char {
    let sum: u32 = data
        .bytes()
        .rev()
        .enumerate()
        .map(|(i, b)| {
            let digit = u32::from(b - b'0');
            if i % 2 == 0 {
                digit * 3
            } else {
                digit
            }
        })
        .sum();

    char::from(b'0' + ((10 - sum % 10) % 10) as u8)
}
