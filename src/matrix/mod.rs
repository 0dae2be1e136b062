//! Matrix containers and pixel conversions
//!
//! This module contains:
//! - The rectangular `Matrix` container
//! - RGB and grayscale pixel types with the grayscale reduction

/// Rectangular matrix container
pub mod grid;
/// Pixel types and grayscale conversion
pub mod pixel;

pub use grid::Matrix;
pub use pixel::{GrayscaleMatrix, GrayscalePixel, PixelMatrix, RgbPixel, rgb_to_gray, to_grayscale};
