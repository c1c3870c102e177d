//! Barcode Core - Barcode rendering library
//!
//! This crate turns a symbology name, a payload and a pixel size into a PNG
//! image of the matching barcode or 2-D code. It contains no HTTP code; the
//! server crate calls [`generate`] and maps the result onto a response.
//!
//! # Pipeline
//!
//! 1. Symbology lookup ([`Symbology`])
//! 2. Symbol encoding at natural size ([`symbol`])
//! 3. Size parsing ([`TargetSize`])
//! 4. Nearest-neighbour scaling ([`raster::scale`])
//! 5. Truecolor normalization ([`raster::to_truecolor`])
//! 6. PNG serialization ([`encode`])

pub mod encode;
pub mod pipeline;
pub mod raster;
pub mod size;
pub mod symbol;
pub mod symbology;

pub use pipeline::{generate, GenerateOptions, PipelineError, DEFAULT_MAX_DIMENSION};
pub use raster::{scale, to_truecolor, ModuleMatrix, Raster, ScaleError};
pub use size::{SizeError, TargetSize};
pub use symbol::{encode_symbol, SymbolEncoder, SymbolError};
pub use symbology::{Symbology, UnsupportedSymbology};
