//! Target size parsing.
//!
//! Sizes arrive as `"<width>x<height>"`, e.g. `"300x150"`. A malformed string
//! and a well-formed string with unusable numbers are different failures and
//! are reported separately.

use std::fmt;

use thiserror::Error;

/// Errors from parsing a size specifier.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SizeError {
    /// Not two `x`-separated base-10 integers
    #[error("invalid size")]
    Format,

    /// Parsed, but zero, negative or above the allowed maximum
    #[error("invalid size parameters")]
    Value,
}

/// Validated output dimensions, both in `1..=max_dimension`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TargetSize {
    width: u32,
    height: u32,
}

impl TargetSize {
    /// Parse a `"<width>x<height>"` specifier.
    ///
    /// # Errors
    ///
    /// * [`SizeError::Format`] - no separator, more than one separator, an
    ///   empty part, an explicit `+` sign, or a part that is not an integer
    ///   (`"100"`, `"10xabc"`, `"+5x10"`)
    /// * [`SizeError::Value`] - a part is `<= 0` or above `max_dimension`
    ///   (`"0x50"`, `"-5x10"`)
    pub fn parse(input: &str, max_dimension: u32) -> Result<Self, SizeError> {
        let mut parts = input.split('x');
        let (Some(width), Some(height), None) = (parts.next(), parts.next(), parts.next()) else {
            return Err(SizeError::Format);
        };

        let width = parse_dimension(width)?;
        let height = parse_dimension(height)?;

        Self::new(width, height, max_dimension)
    }

    /// Validate already numeric dimensions.
    pub fn new(width: i64, height: i64, max_dimension: u32) -> Result<Self, SizeError> {
        let limit = i64::from(max_dimension);
        if !(1..=limit).contains(&width) || !(1..=limit).contains(&height) {
            return Err(SizeError::Value);
        }

        Ok(Self {
            width: width as u32,
            height: height as u32,
        })
    }

    /// Width in pixels.
    pub fn width(self) -> u32 {
        self.width
    }

    /// Height in pixels.
    pub fn height(self) -> u32 {
        self.height
    }
}

impl fmt::Display for TargetSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

fn parse_dimension(part: &str) -> Result<i64, SizeError> {
    // A leading '-' must reach the range check; '+' is not part of the format
    if part.starts_with('+') {
        return Err(SizeError::Format);
    }
    part.parse::<i64>().map_err(|_| SizeError::Format)
}


// ============================================================================
// Property-Based Tests
// ============================================================================

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Property: Any in-range pair parses back to the same numbers.
        #[test]
        fn prop_valid_pairs_parse(width in 1u32..=4096, height in 1u32..=4096) {
            let size = TargetSize::parse(&format!("{width}x{height}"), 4096).unwrap();
            prop_assert_eq!((size.width(), size.height()), (width, height));
        }

        /// Property: Non-positive values never produce a size.
        #[test]
        fn prop_non_positive_rejected(bad in -1000i64..=0, good in 1i64..=1000) {
            prop_assert_eq!(TargetSize::parse(&format!("{bad}x{good}"), 4096), Err(SizeError::Value));
            prop_assert_eq!(TargetSize::parse(&format!("{good}x{bad}"), 4096), Err(SizeError::Value));
        }

        /// Property: Strings without the separator are format errors.
        #[test]
        fn prop_no_separator_is_format_error(input in "[0-9a-wyzA-Z]{0,12}") {
            prop_assert_eq!(TargetSize::parse(&input, 4096), Err(SizeError::Format));
        }
    }
}
