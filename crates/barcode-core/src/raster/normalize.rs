//! Color-depth normalization to 24-bit RGB.
//!
//! Encoders produce 1-bit module grids and callers may pass greyscale or
//! RGBA buffers. The PNG writer always receives an `RgbImage`, so the output
//! file never depends on a palette or on the source pixel model.

use image::RgbImage;

use super::Raster;

/// Resolve every pixel of `raster` into a self-contained RGB buffer.
///
/// The result has the same dimensions as the input.
pub fn to_truecolor<R: Raster + ?Sized>(raster: &R) -> RgbImage {
    RgbImage::from_fn(raster.width(), raster.height(), |x, y| raster.color_at(x, y))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::raster::{scale, ModuleMatrix, DARK, LIGHT};
    use image::{GrayImage, Luma, Rgb};

    #[test]
    fn test_module_matrix_to_truecolor() {
        let matrix = ModuleMatrix::new(3, 1, vec![true, false, true]);
        let rgb = to_truecolor(&matrix);

        assert_eq!(rgb.dimensions(), (3, 1));
        assert_eq!(rgb.get_pixel(0, 0), &DARK);
        assert_eq!(rgb.get_pixel(1, 0), &LIGHT);
        assert_eq!(rgb.get_pixel(2, 0), &DARK);
        assert_eq!(rgb.as_raw().len(), 3 * 3);
    }

    #[test]
    fn test_scaled_to_truecolor() {
        let matrix = ModuleMatrix::new(2, 1, vec![true, false]);
        let scaled = scale(&matrix, 4, 2).unwrap();
        let rgb = to_truecolor(&scaled);

        assert_eq!(rgb.dimensions(), (4, 2));
        assert_eq!(rgb.get_pixel(1, 1), &DARK);
        assert_eq!(rgb.get_pixel(2, 0), &LIGHT);
    }

    #[test]
    fn test_gray_to_truecolor() {
        let gray = GrayImage::from_fn(2, 2, |x, _| Luma([if x == 0 { 0 } else { 77 }]));
        let rgb = to_truecolor(&gray);

        assert_eq!(rgb.get_pixel(0, 1), &Rgb([0, 0, 0]));
        assert_eq!(rgb.get_pixel(1, 0), &Rgb([77, 77, 77]));
    }

    #[test]
    fn test_truecolor_is_unchanged() {
        let src = RgbImage::from_fn(3, 3, |x, y| Rgb([x as u8 * 10, y as u8 * 20, 5]));
        assert_eq!(to_truecolor(&src), src);
    }
}
