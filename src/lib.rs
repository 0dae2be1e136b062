//! Image-to-matrix conversion and numeric matrix validation
//!
//! Images are decoded into explicit row-major RGB matrices and reduced to
//! grayscale. Loosely typed list-of-lists input from plotting or audio
//! callers is checked to be rectangular and numeric before use.

#![forbid(unsafe_code)]

/// Input/output operations and error handling
pub mod io;
/// Rectangular matrices and pixel conversions
pub mod matrix;
/// Named datasets loaded once at startup
pub mod registry;
/// Structural and numeric validation of caller-supplied data
pub mod validation;

pub use io::error::{MatrixError, Result};
pub use io::image::{load_grayscale_matrix, load_rgb_matrix};
pub use matrix::{GrayscaleMatrix, Matrix, PixelMatrix, RgbPixel, to_grayscale};
pub use registry::DatasetRegistry;
