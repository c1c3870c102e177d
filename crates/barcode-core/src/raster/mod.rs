//! Pixel sources and the transforms that run between encoding and PNG output.
//!
//! Encoders emit 1-bit module grids, while callers may also hand in greyscale
//! or RGBA buffers. Everything downstream of the encoder works against the
//! [`Raster`] capability ("report a color for a coordinate") so the scaler and
//! the normalizer never need to know which pixel model produced the image.
//!
//! # Transform Order
//!
//! 1. [`scale`] - nearest-neighbour resize to the requested size
//! 2. [`to_truecolor`] - resolve every pixel to 24-bit RGB
//!
//! # Coordinate System
//!
//! - Origin is the top-left corner
//! - `x` grows to the right, `y` grows downwards

mod normalize;
mod scale;

pub use normalize::to_truecolor;
pub use scale::{scale, ScaleError, Scaled};

use image::{ImageBuffer, Pixel, Rgb};

/// Color of a dark module (bar or cell).
pub const DARK: Rgb<u8> = Rgb([0, 0, 0]);
/// Color of a light module (space or quiet zone).
pub const LIGHT: Rgb<u8> = Rgb([255, 255, 255]);

/// Anything that can report an RGB color for each of its pixels.
///
/// Callers must keep `x < width()` and `y < height()`.
pub trait Raster {
    /// Width in pixels.
    fn width(&self) -> u32;

    /// Height in pixels.
    fn height(&self) -> u32;

    /// Color of the pixel at `(x, y)`.
    fn color_at(&self, x: u32, y: u32) -> Rgb<u8>;

    /// Returns true if the raster has no pixels.
    fn is_empty(&self) -> bool {
        self.width() == 0 || self.height() == 0
    }
}

impl<R: Raster + ?Sized> Raster for &R {
    fn width(&self) -> u32 {
        (**self).width()
    }

    fn height(&self) -> u32 {
        (**self).height()
    }

    fn color_at(&self, x: u32, y: u32) -> Rgb<u8> {
        (**self).color_at(x, y)
    }
}

/// Any 8-bit `image` buffer (grey, grey+alpha, RGB, RGBA) is a raster.
/// Alpha is dropped.
impl<P> Raster for ImageBuffer<P, Vec<u8>>
where
    P: Pixel<Subpixel = u8>,
{
    fn width(&self) -> u32 {
        ImageBuffer::width(self)
    }

    fn height(&self) -> u32 {
        ImageBuffer::height(self)
    }

    fn color_at(&self, x: u32, y: u32) -> Rgb<u8> {
        self.get_pixel(x, y).to_rgb()
    }
}

/// A 1-bit grid of modules as produced by a symbol encoder.
///
/// One pixel per module, `true` = dark. Linear symbologies are one row high.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModuleMatrix {
    width: u32,
    height: u32,
    /// Row-major, `width * height` entries.
    modules: Vec<bool>,
}

impl ModuleMatrix {
    /// Create a matrix from row-major module data.
    pub fn new(width: u32, height: u32, modules: Vec<bool>) -> Self {
        debug_assert_eq!(
            modules.len(),
            (width as usize) * (height as usize),
            "Module buffer size mismatch"
        );
        Self {
            width,
            height,
            modules,
        }
    }

    /// Build a matrix by evaluating `f(x, y)` for every module.
    pub fn from_fn(width: u32, height: u32, mut f: impl FnMut(u32, u32) -> bool) -> Self {
        let mut modules = Vec::with_capacity((width as usize) * (height as usize));
        for y in 0..height {
            for x in 0..width {
                modules.push(f(x, y));
            }
        }
        Self::new(width, height, modules)
    }

    /// Copy the modules out of an rxing bit matrix.
    pub fn from_bit_matrix(matrix: &rxing::common::BitMatrix) -> Self {
        Self::from_fn(matrix.width(), matrix.height(), |x, y| matrix.get(x, y))
    }

    /// Returns true if the module at `(x, y)` is dark.
    pub fn is_dark(&self, x: u32, y: u32) -> bool {
        self.modules[(y as usize) * (self.width as usize) + (x as usize)]
    }

    /// Number of dark modules.
    pub fn dark_count(&self) -> usize {
        self.modules.iter().filter(|&&dark| dark).count()
    }
}

impl Raster for ModuleMatrix {
    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn color_at(&self, x: u32, y: u32) -> Rgb<u8> {
        if self.is_dark(x, y) {
            DARK
        } else {
            LIGHT
        }
    }
}
