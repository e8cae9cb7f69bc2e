//! Pure calculation functions for crop and thumbnail geometry.
//!
//! All functions here are pure and testable without any I/O or images.

/// Region to crop out of a non-square image: top-left corner + side length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CropRegion {
    pub x: u32,
    pub y: u32,
    pub side: u32,
}

/// Calculate the centered square crop for an image, if one is needed.
///
/// Returns `None` for images that are already square — callers can skip the
/// crop entirely and reuse the original. Otherwise the square uses
/// `side = min(width, height)` with an offset of `(dim - side) / 2` on the
/// larger axis. Integer truncation means the crop favors the top/left by one
/// pixel when the difference is odd.
///
/// # Examples
/// ```
/// # use art_prep::imaging::{CropRegion, center_crop_region};
/// // 100x60 landscape → 60x60 square, 20px in from the left
/// assert_eq!(
///     center_crop_region(100, 60),
///     Some(CropRegion { x: 20, y: 0, side: 60 })
/// );
///
/// // Already square → nothing to do
/// assert_eq!(center_crop_region(400, 400), None);
/// ```
pub fn center_crop_region(width: u32, height: u32) -> Option<CropRegion> {
    if width == height {
        return None;
    }
    let side = width.min(height);
    Some(CropRegion {
        x: (width - side) / 2,
        y: (height - side) / 2,
        side,
    })
}

/// Whether a square image should be downscaled to `max × max`.
///
/// Triggers only when *both* dimensions exceed the cap. At the point this is
/// called the image is already square, so the two checks coincide, but the
/// rule is stated over both axes to match the documented trigger condition.
pub fn needs_downscale(width: u32, height: u32, max_size: Option<u32>) -> bool {
    match max_size {
        Some(max) => width > max && height > max,
        None => false,
    }
}

/// Calculate bounded thumbnail dimensions, preserving aspect ratio.
///
/// The result never exceeds `bound` on either axis and never upscales:
/// images already within the bound keep their dimensions. Scaling rounds to
/// the nearest pixel with a floor of 1.
///
/// # Examples
/// ```
/// # use art_prep::imaging::thumbnail_fit;
/// assert_eq!(thumbnail_fit(512, 512, 256), (256, 256));
/// assert_eq!(thumbnail_fit(300, 100, 256), (256, 85));
/// assert_eq!(thumbnail_fit(100, 60, 256), (100, 60)); // already small enough
/// ```
pub fn thumbnail_fit(width: u32, height: u32, bound: u32) -> (u32, u32) {
    if width <= bound && height <= bound {
        return (width, height);
    }
    let scale = bound as f64 / width.max(height) as f64;
    let w = ((width as f64 * scale).round() as u32).max(1);
    let h = ((height as f64 * scale).round() as u32).max(1);
    (w, h)
}

#[cfg(test)]
mod tests {
    use super::*;

    // =========================================================================
    // center_crop_region tests
    // =========================================================================

    #[test]
    fn square_needs_no_crop() {
        assert_eq!(center_crop_region(400, 400), None);
        assert_eq!(center_crop_region(1, 1), None);
    }

    #[test]
    fn landscape_crops_horizontally() {
        // 100x60 → 60x60 with horizontal offset 20, vertical 0
        let r = center_crop_region(100, 60).unwrap();
        assert_eq!(r, CropRegion { x: 20, y: 0, side: 60 });
    }

    #[test]
    fn portrait_crops_vertically() {
        let r = center_crop_region(60, 100).unwrap();
        assert_eq!(r, CropRegion { x: 0, y: 20, side: 60 });
    }

    #[test]
    fn odd_difference_favors_top_left() {
        // 101x60: difference 41, offset 41/2 = 20 (not 21)
        let r = center_crop_region(101, 60).unwrap();
        assert_eq!(r.x, 20);
        assert_eq!(r.side, 60);
    }

    #[test]
    fn one_pixel_strip() {
        let r = center_crop_region(1, 500).unwrap();
        assert_eq!(r, CropRegion { x: 0, y: 249, side: 1 });
    }

    // =========================================================================
    // needs_downscale tests
    // =========================================================================

    #[test]
    fn no_cap_means_no_downscale() {
        assert!(!needs_downscale(5000, 5000, None));
    }

    #[test]
    fn downscale_only_when_both_axes_exceed() {
        assert!(needs_downscale(600, 600, Some(512)));
        assert!(!needs_downscale(512, 512, Some(512)));
        assert!(!needs_downscale(600, 512, Some(512)));
    }

    // =========================================================================
    // thumbnail_fit tests
    // =========================================================================

    #[test]
    fn thumbnail_shrinks_square_to_bound() {
        assert_eq!(thumbnail_fit(512, 512, 256), (256, 256));
    }

    #[test]
    fn thumbnail_preserves_aspect_ratio() {
        // 300x100 → 256 on the long edge, 100 * (256/300) ≈ 85
        assert_eq!(thumbnail_fit(300, 100, 256), (256, 85));
        assert_eq!(thumbnail_fit(100, 300, 256), (85, 256));
    }

    #[test]
    fn thumbnail_never_upscales() {
        assert_eq!(thumbnail_fit(100, 60, 256), (100, 60));
        assert_eq!(thumbnail_fit(256, 256, 256), (256, 256));
    }

    #[test]
    fn thumbnail_extreme_ratio_floors_at_one_pixel() {
        // 10000x1 → short edge would round to 0 without the floor
        let (w, h) = thumbnail_fit(10000, 1, 256);
        assert_eq!(w, 256);
        assert_eq!(h, 1);
    }
}
