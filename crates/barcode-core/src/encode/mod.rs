//! Image serialization for rendered symbols.
//!
//! This module provides functionality for:
//! - Encoding 24-bit RGB buffers to PNG with fixed, deterministic settings
//! - Streaming the PNG into any `std::io::Write` sink
//!
//! # Examples
//!
//! ```ignore
//! use barcode_core::encode::encode_image;
//! use image::{Rgb, RgbImage};
//!
//! let white = RgbImage::from_pixel(100, 100, Rgb([255, 255, 255]));
//! let png_bytes = encode_image(&white).unwrap();
//! println!("Encoded {} bytes", png_bytes.len());
//! ```

mod png;

pub use png::{encode_image, write_png, EncodeError, PNG_SIGNATURE};
