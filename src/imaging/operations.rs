//! Image transforms for the squarify pipeline — pure Rust, in-memory.
//!
//! | Operation | Crate / function |
//! |---|---|
//! | **Decode** | `image::load_from_memory` (format sniffed from bytes) |
//! | **EXIF orientation** | `kamadak-exif` tag 0x0112 + rotate/flip ops |
//! | **Center crop** | `DynamicImage::crop_imm` on the computed region |
//! | **Downscale / thumbnail** | `resize_exact` with `Lanczos3` |
//! | **Encode** | format-specific: JPEG flattens alpha, PNG keeps it |
//!
//! Every function takes and returns [`DynamicImage`] so the pipeline driver
//! composes them without touching pixels itself. The geometry decisions live
//! in [`calculations`](super::calculations); this module only executes them.

use super::calculations::{center_crop_region, needs_downscale, thumbnail_fit};
use image::imageops::FilterType;
use image::{DynamicImage, RgbImage};
use std::io::BufWriter;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ImagingError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("image error: {0}")]
    Image(#[from] image::ImageError),
}

/// JPEG encode quality for square outputs and thumbnails.
const JPEG_QUALITY: u8 = 90;

/// Load an image from disk and correct its EXIF orientation.
///
/// Orientation is read from the raw bytes before decoding; files without
/// EXIF data (or with unreadable EXIF) are treated as orientation 1.
pub fn load_oriented(path: &Path) -> Result<DynamicImage, ImagingError> {
    let bytes = std::fs::read(path)?;
    let img = image::load_from_memory(&bytes)?;
    Ok(apply_orientation(img, read_orientation(&bytes)))
}

/// Read the EXIF orientation tag (0x0112) from raw image bytes.
///
/// Returns 1 (normal) when there is no EXIF segment or no orientation field.
fn read_orientation(bytes: &[u8]) -> u32 {
    let mut cursor = std::io::Cursor::new(bytes);
    match exif::Reader::new().read_from_container(&mut cursor) {
        Ok(meta) => meta
            .get_field(exif::Tag::Orientation, exif::In::PRIMARY)
            .and_then(|f| f.value.get_uint(0))
            .unwrap_or(1),
        Err(_) => 1,
    }
}

/// Apply an EXIF orientation value (1–8) to a decoded image.
///
/// 1 = normal, 2 = mirrored, 3 = 180°, 4 = flipped vertically,
/// 5 = mirrored + 90° CW, 6 = 90° CW, 7 = mirrored + 270° CW, 8 = 270° CW.
/// Unknown values pass the image through unchanged.
pub fn apply_orientation(img: DynamicImage, orientation: u32) -> DynamicImage {
    match orientation {
        2 => img.fliph(),
        3 => img.rotate180(),
        4 => img.flipv(),
        5 => img.rotate90().fliph(),
        6 => img.rotate90(),
        7 => img.rotate270().fliph(),
        8 => img.rotate270(),
        _ => img,
    }
}

/// Center-crop an image to square. Already-square images are returned as-is.
pub fn center_crop_square(img: DynamicImage) -> DynamicImage {
    match center_crop_region(img.width(), img.height()) {
        None => img,
        Some(r) => img.crop_imm(r.x, r.y, r.side, r.side),
    }
}

/// Downscale a square image to `max × max` when both axes exceed the cap.
pub fn downscale_square(img: DynamicImage, max_size: Option<u32>) -> DynamicImage {
    if needs_downscale(img.width(), img.height(), max_size) {
        let max = max_size.unwrap();
        img.resize_exact(max, max, FilterType::Lanczos3)
    } else {
        img
    }
}

/// Derive a bounded thumbnail, preserving aspect ratio (never upscales).
pub fn make_thumbnail(img: &DynamicImage, bound: u32) -> DynamicImage {
    let (w, h) = thumbnail_fit(img.width(), img.height(), bound);
    img.resize_exact(w, h, FilterType::Lanczos3)
}

/// Save an image, applying per-format rules inferred from the extension.
///
/// - JPEG cannot store alpha: transparent images are flattened onto a black
///   background, everything else is converted to RGB. Quality 90.
/// - WebP is encoded from RGBA (the encoder only takes 8-bit RGB/RGBA).
/// - PNG and the remaining formats go through the `image` crate's own
///   extension-based dispatch, retaining alpha where the format supports it.
///
/// Parent directories are created as needed.
pub fn save_image(img: &DynamicImage, path: &Path) -> Result<(), ImagingError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let ext = path
        .extension()
        .map(|e| e.to_string_lossy().to_lowercase())
        .unwrap_or_default();

    match ext.as_str() {
        "jpg" | "jpeg" => save_jpeg(img, path),
        "webp" => {
            let rgba = DynamicImage::ImageRgba8(img.to_rgba8());
            rgba.save(path)?;
            Ok(())
        }
        _ => {
            img.save(path)?;
            Ok(())
        }
    }
}

fn save_jpeg(img: &DynamicImage, path: &Path) -> Result<(), ImagingError> {
    let rgb = if img.color().has_alpha() {
        flatten_alpha(img)
    } else {
        img.to_rgb8()
    };
    let file = std::fs::File::create(path)?;
    let writer = BufWriter::new(file);
    let mut encoder = image::codecs::jpeg::JpegEncoder::new_with_quality(writer, JPEG_QUALITY);
    encoder.encode_image(&rgb)?;
    Ok(())
}

/// Composite an image with alpha onto a black background.
fn flatten_alpha(img: &DynamicImage) -> RgbImage {
    let rgba = img.to_rgba8();
    let mut rgb = RgbImage::new(rgba.width(), rgba.height());
    for (src, dst) in rgba.pixels().zip(rgb.pixels_mut()) {
        let a = src[3] as u32;
        *dst = image::Rgb([
            (src[0] as u32 * a / 255) as u8,
            (src[1] as u32 * a / 255) as u8,
            (src[2] as u32 * a / 255) as u8,
        ]);
    }
    rgb
}
