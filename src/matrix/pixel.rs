//! Pixel types and grayscale derivation

use crate::matrix::Matrix;

/// Red, green and blue intensities; alpha is never kept
pub type RgbPixel = [u8; 3];

/// Single-channel luminance
pub type GrayscalePixel = u8;

/// Decoded image as rows of RGB pixels
pub type PixelMatrix = Matrix<RgbPixel>;

/// Luminance image derived from a `PixelMatrix`
pub type GrayscaleMatrix = Matrix<GrayscalePixel>;

/// Unweighted channel average rounded to the nearest integer
///
/// `(r + g + b + 1) / 3` in integer arithmetic equals `round((r + g + b) / 3)`
/// because a sum divided by three never lands exactly on a half.
pub const fn rgb_to_gray(pixel: RgbPixel) -> GrayscalePixel {
    let [r, g, b] = pixel;
    let sum = r as u16 + g as u16 + b as u16;
    // 765 + 1 = 766, 766 / 3 = 255
    ((sum + 1) / 3) as u8
}

/// Reduce every pixel to its luminance, preserving shape
pub fn to_grayscale(pixels: &PixelMatrix) -> GrayscaleMatrix {
    pixels.map(|pixel| rgb_to_gray(*pixel))
}

/// Min, max and mean luminance of a grayscale matrix
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GrayscaleSummary {
    /// Darkest value
    pub min: GrayscalePixel,
    /// Brightest value
    pub max: GrayscalePixel,
    /// Arithmetic mean over all cells
    pub mean: f64,
}

impl GrayscaleSummary {
    /// Summarise a matrix; `None` when it has no cells
    pub fn of(gray: &GrayscaleMatrix) -> Option<Self> {
        let min = gray.iter().copied().min()?;
        let max = gray.iter().copied().max()?;
        let total: u64 = gray.iter().map(|&v| u64::from(v)).sum();
        let mean = total as f64 / gray.iter().count() as f64;
        Some(Self { min, max, mean })
    }
}
