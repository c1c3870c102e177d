//! Code 39 with optional full ASCII expansion and mod-43 check character.
//!
//! Full ASCII mode maps each of the 128 ASCII characters onto one or two
//! characters of the basic 43-character alphabet using the `$`, `%`, `/`
//! and `+` shift characters. The check character is computed over the
//! expanded text, so it is always a basic alphabet character.

use rxing::{BarcodeFormat, EncodeHints};

use super::{find_invalid, render, SymbolEncoder, SymbolError};
use crate::raster::ModuleMatrix;
use crate::symbology::Symbology;

/// The basic Code 39 alphabet, in check-value order.
const ALPHABET: &[u8; 43] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ-. $/+%";

/// Code 39 encoder.
#[derive(Debug, Clone, Copy)]
pub struct Code39 {
    /// Accept any ASCII character by expanding it into shift pairs.
    pub full_ascii: bool,
    /// Append the mod-43 check character.
    pub checksum: bool,
}

impl SymbolEncoder for Code39 {
    fn symbology(&self) -> Symbology {
        Symbology::Code39
    }

    fn encode(&self, payload: &str) -> Result<ModuleMatrix, SymbolError> {
        let mut contents = if self.full_ascii {
            expand_full_ascii(payload)?
        } else {
            find_invalid(Symbology::Code39, payload, |c| value_of(c).is_some())?;
            payload.to_string()
        };

        if self.checksum {
            contents.push(check_character(&contents));
        }

        render(
            Symbology::Code39,
            BarcodeFormat::CODE_39,
            &contents,
            &EncodeHints::default(),
        )
    }
}

/// Position of `c` in the basic alphabet.
fn value_of(c: char) -> Option<usize> {
    if !c.is_ascii() {
        return None;
    }
    ALPHABET.iter().position(|&a| a == c as u8)
}

/// Mod-43 check character over basic-alphabet text.
fn check_character(contents: &str) -> char {
    let sum: usize = contents.chars().filter_map(value_of).sum();
    char::from(ALPHABET[sum % 43])
}

/// Rewrite arbitrary ASCII text into the basic alphabet.
fn expand_full_ascii(payload: &str) -> Result<String, SymbolError> {
    find_invalid(Symbology::Code39, payload, |c| c.is_ascii())?;

    let mut expanded = String::with_capacity(payload.len() * 2);
    for c in payload.chars() {
        match c {
            '0'..='9' | 'A'..='Z' | ' ' | '-' | '.' => expanded.push(c),
            '\0' => expanded.push_str("%U"),
            '\u{1}'..='\u{1a}' => push_shifted(&mut expanded, '$', 'A', c, '\u{1}'),
            '\u{1b}'..='\u{1f}' => push_shifted(&mut expanded, '%', 'A', c, '\u{1b}'),
            '!'..='/' => push_shifted(&mut expanded, '/', 'A', c, '!'),
            ':' => expanded.push_str("/Z"),
            ';'..='?' => push_shifted(&mut expanded, '%', 'F', c, ';'),
            '@' => expanded.push_str("%V"),
            '['..='_' => push_shifted(&mut expanded, '%', 'K', c, '['),
            '`' => expanded.push_str("%W"),
            'a'..='z' => push_shifted(&mut expanded, '+', 'A', c, 'a'),
            // '{' '|' '}' '~' DEL
            _ => push_shifted(&mut expanded, '%', 'P', c, '{'),
        }
    }

    Ok(expanded)
}

/// Push `shift` followed by `base` advanced by the distance of `c` from `first`.
fn push_shifted(out: &mut String, shift: char, base: char, c: char, first: char) {
    out.push(shift);
    out.push(char::from(base as u8 + (c as u8 - first as u8)));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::raster::Raster;

    const FULL: Code39 = Code39 {
        full_ascii: true,
        checksum: true,
    };

    #[test]
    fn test_check_character() {
        assert_eq!(check_character("CODE39"), 'W');
        assert_eq!(check_character("+A"), '8');
        assert_eq!(check_character(""), '0');
    }

    #[test]
    fn test_expand_basic_characters_unchanged() {
        assert_eq!(expand_full_ascii("ABC-123. ").unwrap(), "ABC-123. ");
    }

    #[test]
    fn test_expand_lowercase() {
        assert_eq!(expand_full_ascii("az").unwrap(), "+A+Z");
    }

    #[test]
    fn test_expand_shift_characters_are_escaped() {
        assert_eq!(expand_full_ascii("$%+/").unwrap(), "/D/E/K/O");
    }

    #[test]
    fn test_expand_punctuation() {
        assert_eq!(expand_full_ascii("!*:@").unwrap(), "/A/J/Z%V");
        assert_eq!(expand_full_ascii(";?[_`").unwrap(), "%F%J%K%O%W");
        assert_eq!(expand_full_ascii("{~\u{7f}").unwrap(), "%P%S%T");
    }

    #[test]
    fn test_expand_control_characters() {
        assert_eq!(expand_full_ascii("\0\u{1}\u{1a}\u{1b}\u{1f}").unwrap(), "%U$A$Z%A%E");
    }

    #[test]
    fn test_expand_output_is_basic_alphabet() {
        let all_ascii: String = (0u8..128).map(char::from).collect();
        let expanded = expand_full_ascii(&all_ascii).unwrap();
        assert!(expanded.chars().all(|c| value_of(c).is_some()));
    }

    #[test]
    fn test_expand_rejects_non_ascii() {
        assert!(matches!(
            expand_full_ascii("caf\u{e9}"),
            Err(SymbolError::InvalidCharacter { character: '\u{e9}', position: 3, .. })
        ));
    }

    #[test]
    fn test_basic_mode_rejects_lowercase() {
        let basic = Code39 {
            full_ascii: false,
            checksum: false,
        };
        assert!(matches!(
            basic.encode("abc"),
            Err(SymbolError::InvalidCharacter { character: 'a', position: 0, .. })
        ));
        assert!(basic.encode("ABC").is_ok());
    }

    #[test]
    fn test_full_ascii_accepts_mixed_case() {
        let matrix = FULL.encode("Hello, World!").unwrap();
        assert!(matrix.dark_count() > 0);
    }

    #[test]
    fn test_checksum_widens_symbol() {
        let plain = Code39 {
            full_ascii: true,
            checksum: false,
        };
        let with_check = FULL.encode("CODE39").unwrap();
        let without_check = plain.encode("CODE39").unwrap();

        assert!(with_check.width() > without_check.width());
    }

    #[test]
    fn test_too_long_is_rejected_by_backend() {
        let long = "A".repeat(100);
        assert!(matches!(
            FULL.encode(&long),
            Err(SymbolError::Rejected { symbology: Symbology::Code39, .. })
        ));
    }
}
