//! Crop rectangle derivation.
//!
//! Every slider or orientation change, and every resize of the preview,
//! recomputes the overlay from scratch. The overlay has no state of its own.
//!
//! # Algorithm
//!
//! 1. Seed a crop size from the frame: fill the frame height when the image
//!    is at least as wide as the target ratio, otherwise fill the frame width.
//!    Both are divided by zoom.
//! 2. Force the exact 2:3 / 3:2 ratio (portrait fixes height from width,
//!    landscape fixes width from height).
//! 3. Center the crop on the focus point and clamp it into the frame.
//! 4. Single re-fit pass, width first then height, shrinking any side that
//!    still overhangs and recomputing its partner from the ratio.
//!
//! # Example
//!
//! ```ignore
//! let rect = compute_crop_rectangle(
//!     &SourceImage::new(3000, 2000),
//!     &DisplayFrame::new(600.0, 400.0),
//!     &CropIntent::default(),
//! );
//! assert_eq!(rect.height, 400.0);
//! ```

use super::types::{CropIntent, CropRectangle, DisplayFrame, GeometryError, Orientation, SourceImage};

/// Compute the crop overlay rectangle for the current intent.
///
/// # Arguments
///
/// * `source` - Intrinsic dimensions of the loaded image
/// * `frame` - Rendered size of the preview container
/// * `intent` - Zoom, focus point and orientation chosen by the user
///
/// # Returns
///
/// The rectangle in container display units, at the target ratio and inside
/// the frame.
///
/// # Preconditions
///
/// `zoom`, the frame and the source dimensions must be positive, and the focus
/// point must already be clamped to 0.0..=1.0. Callers must not invoke this
/// before the image has loaded and laid out; use
/// [`try_compute_crop_rectangle`] when that cannot be guaranteed.
pub fn compute_crop_rectangle(
    source: &SourceImage,
    frame: &DisplayFrame,
    intent: &CropIntent,
) -> CropRectangle {
    let orientation = intent.orientation;
    let (mut crop_w, mut crop_h) = seed_size(source, frame, intent);

    let cx = frame.width * intent.focus_x;
    let cy = frame.height * intent.focus_y;
    let mut left = cx - crop_w / 2.0;
    let mut top = cy - crop_h / 2.0;

    left = left.min(frame.width - crop_w).max(0.0);
    top = top.min(frame.height - crop_h).max(0.0);

    // One pass only, width before height.
    if left + crop_w > frame.width {
        crop_w = frame.width - left;
        crop_h = match orientation {
            Orientation::Portrait => crop_w * 3.0 / 2.0,
            Orientation::Landscape => crop_w * 2.0 / 3.0,
        };
    }
    if top + crop_h > frame.height {
        crop_h = frame.height - top;
        crop_w = match orientation {
            Orientation::Portrait => crop_h * 2.0 / 3.0,
            Orientation::Landscape => crop_h * 3.0 / 2.0,
        };
    }

    CropRectangle {
        left,
        top,
        width: crop_w,
        height: crop_h,
    }
}

/// Validate the inputs, then compute the crop overlay rectangle.
///
/// # Errors
///
/// Returns an error if:
/// - `zoom` is not a finite value greater than zero
/// - either focus coordinate is outside 0.0..=1.0
/// - the frame has not been laid out (non-positive or non-finite size)
/// - the source image has a zero dimension
pub fn try_compute_crop_rectangle(
    source: &SourceImage,
    frame: &DisplayFrame,
    intent: &CropIntent,
) -> Result<CropRectangle, GeometryError> {
    if !source.is_valid() {
        return Err(GeometryError::EmptySource {
            width: source.natural_width,
            height: source.natural_height,
        });
    }
    if !frame.is_laid_out() {
        return Err(GeometryError::EmptyFrame {
            width: frame.width,
            height: frame.height,
        });
    }
    if !(intent.zoom.is_finite() && intent.zoom > 0.0) {
        return Err(GeometryError::InvalidZoom(intent.zoom));
    }
    for (axis, value) in [('x', intent.focus_x), ('y', intent.focus_y)] {
        if !(0.0..=1.0).contains(&value) {
            return Err(GeometryError::InvalidFocus { axis, value });
        }
    }

    Ok(compute_crop_rectangle(source, frame, intent))
}

/// Crop size after the ratio fixing step, before positioning and re-fit.
///
/// The ratio fixing is the compatibility contract with the cropping service,
/// so it always runs, whichever branch seeded the size.
fn seed_size(source: &SourceImage, frame: &DisplayFrame, intent: &CropIntent) -> (f64, f64) {
    let target_ratio = intent.orientation.target_ratio();
    let actual_ratio = source.aspect_ratio();
    let zoom_factor = 1.0 / intent.zoom;

    let (mut crop_w, mut crop_h);
    if actual_ratio >= target_ratio {
        crop_h = frame.height * zoom_factor;
        crop_w = crop_h * target_ratio;
    } else {
        crop_w = frame.width * zoom_factor;
        crop_h = crop_w / target_ratio;
    }

    match intent.orientation {
        Orientation::Portrait => crop_h = crop_w * 3.0 / 2.0,
        Orientation::Landscape => crop_w = crop_h * 3.0 / 2.0,
    }

    (crop_w, crop_h)
}


// ============================================================================
// Property-Based Tests
// ============================================================================
