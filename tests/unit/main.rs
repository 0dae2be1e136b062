//! Unit tests mirroring the `src` module layout


use image::{Rgb, RgbImage, Rgba, RgbaImage};
use std::path::{Path, PathBuf};

/// Write a solid-colour RGB image into `dir`, encoded by the extension of `name`
pub fn write_solid_image(dir: &Path, name: &str, width: u32, height: u32, color: [u8; 3]) -> PathBuf {
    let path = dir.join(name);
    RgbImage::from_pixel(width, height, Rgb(color))
        .save(&path)
        .unwrap();
    path
}

/// Write an RGBA PNG whose pixel (x, y) is `f(x, y)`
pub fn write_rgba_png<F>(dir: &Path, name: &str, width: u32, height: u32, f: F) -> PathBuf
where
    F: Fn(u32, u32) -> [u8; 4],
{
    let path = dir.join(name);
    RgbaImage::from_fn(width, height, |x, y| Rgba(f(x, y)))
        .save(&path)
        .unwrap();
    path
}
