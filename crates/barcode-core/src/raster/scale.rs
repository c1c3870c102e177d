//! Nearest-neighbour scaling to exact pixel dimensions.
//!
//! Barcode scanners rely on sharp module edges, so no interpolation filter is
//! offered here. Every target pixel copies exactly one source pixel:
//!
//! ```text
//! source_x = floor(target_x * source_width / target_width)
//! source_y = floor(target_y * source_height / target_height)
//! ```

use image::Rgb;
use thiserror::Error;

use super::Raster;

/// Errors that can occur while scaling.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScaleError {
    /// Requested width or height is zero
    #[error("can not scale to {width}x{height}: target dimensions must be non-zero")]
    InvalidTarget { width: u32, height: u32 },

    /// Source has no pixels
    #[error("can not scale a {width}x{height} image: source dimensions must be non-zero")]
    EmptySource { width: u32, height: u32 },
}

/// A raster resized to a target size by nearest-neighbour sampling.
///
/// The source is borrowed, not copied; the column and row lookup tables are
/// computed once so each pixel read is two table lookups.
#[derive(Debug, Clone)]
pub struct Scaled<'a, R: ?Sized> {
    source: &'a R,
    columns: Vec<u32>,
    rows: Vec<u32>,
}

impl<R: Raster + ?Sized> Raster for Scaled<'_, R> {
    fn width(&self) -> u32 {
        self.columns.len() as u32
    }

    fn height(&self) -> u32 {
        self.rows.len() as u32
    }

    fn color_at(&self, x: u32, y: u32) -> Rgb<u8> {
        self.source.color_at(self.source_column(x), self.source_row(y))
    }
}

impl<R: ?Sized> Scaled<'_, R> {
    /// Source column sampled for target column `x`.
    pub fn source_column(&self, x: u32) -> u32 {
        self.columns[x as usize]
    }

    /// Source row sampled for target row `y`.
    pub fn source_row(&self, y: u32) -> u32 {
        self.rows[y as usize]
    }
}

/// Resize a raster to exact dimensions.
///
/// # Arguments
///
/// * `source` - The raster to resize (natural size encoder output, usually)
/// * `width` - Target width in pixels
/// * `height` - Target height in pixels
///
/// # Returns
///
/// A raster of exactly `width x height` pixels. Upscaling repeats modules,
/// downscaling drops them; colors are never blended.
///
/// # Errors
///
/// Returns [`ScaleError::InvalidTarget`] if either target dimension is zero
/// and [`ScaleError::EmptySource`] if the source has no pixels.
pub fn scale<R: Raster + ?Sized>(
    source: &R,
    width: u32,
    height: u32,
) -> Result<Scaled<'_, R>, ScaleError> {
    if width == 0 || height == 0 {
        return Err(ScaleError::InvalidTarget { width, height });
    }
    if source.is_empty() {
        return Err(ScaleError::EmptySource {
            width: source.width(),
            height: source.height(),
        });
    }

    Ok(Scaled {
        source,
        columns: sample_positions(source.width(), width),
        rows: sample_positions(source.height(), height),
    })
}

/// Source index for every target index along one axis.
fn sample_positions(source_len: u32, target_len: u32) -> Vec<u32> {
    (0..u64::from(target_len))
        .map(|t| (t * u64::from(source_len) / u64::from(target_len)) as u32)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::raster::{ModuleMatrix, DARK, LIGHT};

    /// Alternating dark/light columns, one row high.
    fn stripes(width: u32) -> ModuleMatrix {
        ModuleMatrix::from_fn(width, 1, |x, _| x % 2 == 0)
    }

    #[test]
    fn test_scale_exact_dimensions() {
        let src = stripes(10);
        let scaled = scale(&src, 300, 150).unwrap();

        assert_eq!(scaled.width(), 300);
        assert_eq!(scaled.height(), 150);
    }

    #[test]
    fn test_scale_integer_upscale_repeats_modules() {
        let src = stripes(4);
        let scaled = scale(&src, 12, 3).unwrap();

        // Each module becomes a 3 pixel wide bar
        for x in 0..12 {
            let expected = if (x / 3) % 2 == 0 { DARK } else { LIGHT };
            for y in 0..3 {
                assert_eq!(scaled.color_at(x, y), expected, "pixel ({x}, {y})");
            }
        }
    }

    #[test]
    fn test_scale_non_integer_ratio_uses_floor() {
        let src = stripes(3);
        let scaled = scale(&src, 7, 1).unwrap();

        // floor(t * 3 / 7) for t in 0..7
        let columns: Vec<u32> = (0..7).map(|x| scaled.source_column(x)).collect();
        assert_eq!(columns, vec![0, 0, 0, 1, 1, 2, 2]);
    }

    #[test]
    fn test_scale_downscale() {
        let src = stripes(100);
        let scaled = scale(&src, 10, 1).unwrap();

        // Every tenth column, all even, so all dark
        for x in 0..10 {
            assert_eq!(scaled.source_column(x), x * 10);
            assert_eq!(scaled.color_at(x, 0), DARK);
        }
    }

    #[test]
    fn test_scale_to_single_pixel() {
        let src = ModuleMatrix::from_fn(21, 21, |x, y| x == 0 && y == 0);
        let scaled = scale(&src, 1, 1).unwrap();

        assert_eq!(scaled.width(), 1);
        assert_eq!(scaled.height(), 1);
        assert_eq!(scaled.color_at(0, 0), DARK);
    }

    #[test]
    fn test_scale_same_dimensions_is_identity() {
        let src = ModuleMatrix::from_fn(5, 4, |x, y| (x + y) % 3 == 0);
        let scaled = scale(&src, 5, 4).unwrap();

        for y in 0..4 {
            for x in 0..5 {
                assert_eq!(scaled.color_at(x, y), src.color_at(x, y));
            }
        }
    }

    #[test]
    fn test_scale_zero_target_error() {
        let src = stripes(10);

        assert_eq!(
            scale(&src, 0, 50).unwrap_err(),
            ScaleError::InvalidTarget { width: 0, height: 50 }
        );
        assert!(matches!(
            scale(&src, 50, 0),
            Err(ScaleError::InvalidTarget { .. })
        ));
    }

    #[test]
    fn test_scale_empty_source_error() {
        let src = ModuleMatrix::new(0, 0, vec![]);
        assert!(matches!(
            scale(&src, 10, 10),
            Err(ScaleError::EmptySource { .. })
        ));
    }

    #[test]
    fn test_sample_positions_large_source_does_not_overflow() {
        // t * source_len would overflow u32 here
        let positions = sample_positions(u32::MAX, 4);
        assert_eq!(positions, vec![0, 1_073_741_823, 2_147_483_647, 3_221_225_471]);
    }

    #[test]
    fn test_scale_error_display() {
        let err = ScaleError::InvalidTarget { width: 0, height: 5 };
        assert_eq!(
            err.to_string(),
            "can not scale to 0x5: target dimensions must be non-zero"
        );
    }
}

// ============================================================================
// Property-Based Tests
// ============================================================================
