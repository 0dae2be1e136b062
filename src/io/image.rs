//! Image decoding into pixel matrices and grayscale PNG export

use crate::io::error::{MatrixError, Result};
use crate::matrix::{GrayscaleMatrix, Matrix, PixelMatrix, to_grayscale};
use image::{GrayImage, ImageError, Luma};
use log::debug;
use std::path::Path;

/// Decode an image file into a row-major RGB matrix
///
/// The result has one row per image line and one column per pixel in that
/// line. Any alpha channel is discarded.
///
/// # Errors
///
/// Returns an error if:
/// - The path does not exist (`FileNotFound`)
/// - The decoder cannot read the file as a supported image (`Decode`)
pub fn load_rgb_matrix<P: AsRef<Path>>(path: P) -> Result<PixelMatrix> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(MatrixError::FileNotFound {
            path: path.to_path_buf(),
        });
    }

    let img = image::open(path).map_err(|e| match e {
        ImageError::IoError(io) if io.kind() == std::io::ErrorKind::NotFound => {
            MatrixError::FileNotFound {
                path: path.to_path_buf(),
            }
        }
        source => MatrixError::Decode {
            path: path.to_path_buf(),
            source,
        },
    })?;
    let rgb_img = img.to_rgb8();
    let (width, height) = rgb_img.dimensions();

    let matrix = Matrix::from_fn(height as usize, width as usize, |row, col| {
        rgb_img.get_pixel(col as u32, row as u32).0
    });

    debug!(
        "loaded {} as {}x{} pixel matrix",
        path.display(),
        matrix.rows(),
        matrix.cols()
    );
    Ok(matrix)
}

/// Decode an image file straight into its grayscale matrix
///
/// # Errors
///
/// Same as [`load_rgb_matrix`].
pub fn load_grayscale_matrix<P: AsRef<Path>>(path: P) -> Result<GrayscaleMatrix> {
    load_rgb_matrix(path).map(|rgb| to_grayscale(&rgb))
}

/// Write a grayscale matrix as an 8-bit PNG
///
/// # Errors
///
/// Returns an error if:
/// - The matrix has no cells
/// - The parent directory cannot be created
/// - The image cannot be saved to the specified path
pub fn export_grayscale_png<P: AsRef<Path>>(gray: &GrayscaleMatrix, output_path: P) -> Result<()> {
    let output_path = output_path.as_ref();
    if gray.is_empty() {
        return Err(crate::io::error::invalid_parameter(
            "gray",
            &format!("{}x{}", gray.rows(), gray.cols()),
            &"cannot export an empty matrix",
        ));
    }

    let img = GrayImage::from_fn(gray.cols() as u32, gray.rows() as u32, |x, y| {
        Luma([gray.get(y as usize, x as usize).copied().unwrap_or(0)])
    });

    if let Some(parent) = output_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| MatrixError::FileSystem {
            path: parent.to_path_buf(),
            operation: "create directory",
            source: e,
        })?;
    }

    img.save(output_path).map_err(|e| MatrixError::Encode {
        path: output_path.to_path_buf(),
        source: e,
    })?;

    Ok(())
}
