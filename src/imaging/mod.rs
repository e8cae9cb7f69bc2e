//! Image processing — pure Rust, zero external dependencies.
//!
//! The module is split into:
//! - **Calculations**: pure functions for crop/thumbnail geometry (unit testable)
//! - **Operations**: decode, EXIF orientation, crop, resize, and encode
//!
//! The pipeline driver in [`process`](crate::process) composes these; nothing
//! here knows about directories, relative paths, or dry-run mode.

mod calculations;
mod operations;

pub use calculations::{CropRegion, center_crop_region, needs_downscale, thumbnail_fit};
pub use operations::{
    ImagingError, apply_orientation, center_crop_square, downscale_square, load_oriented,
    make_thumbnail, save_image,
};
