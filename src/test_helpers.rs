//! Shared test utilities for the art-prep test suite.
//!
//! Synthetic image builders used across the imaging and process tests. The
//! coordinate gradient encodes each pixel's position in its color channels,
//! so crop and rotation tests can assert exactly which source region ended up
//! where without fixture files.

use image::{DynamicImage, Rgb, RgbImage, Rgba, RgbaImage};
use std::path::Path;

/// RGB image where pixel (x, y) has color (x % 256, y % 256, 0).
pub fn coordinate_gradient(width: u32, height: u32) -> RgbImage {
    RgbImage::from_fn(width, height, |x, y| Rgb([(x % 256) as u8, (y % 256) as u8, 0]))
}

/// Uniform RGBA image with the given fill color.
pub fn rgba_checker(width: u32, height: u32, fill: [u8; 4]) -> RgbaImage {
    RgbaImage::from_pixel(width, height, Rgba(fill))
}

/// Write a coordinate-gradient PNG to `path`.
pub fn write_png(path: &Path, width: u32, height: u32) {
    DynamicImage::ImageRgb8(coordinate_gradient(width, height))
        .save(path)
        .unwrap();
}

/// Write a uniform RGBA PNG to `path`.
pub fn write_png_rgba(path: &Path, width: u32, height: u32, fill: [u8; 4]) {
    DynamicImage::ImageRgba8(rgba_checker(width, height, fill))
        .save(path)
        .unwrap();
}
