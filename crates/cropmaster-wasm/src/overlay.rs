//! WASM bindings for the crop overlay calculator.
//!
//! Use this directly when the page keeps its own state; `JsCropSession`
//! wraps the same computation with owned state.

use crate::types::{orientation_from_str, to_js_error, JsCropRectangle};
use cropmaster_core::geometry::{
    try_compute_crop_rectangle, CropIntent, DisplayFrame, GeometryError, SourceImage,
};
use wasm_bindgen::prelude::*;

/// Compute the crop overlay for a preview.
///
/// # Arguments
///
/// * `natural_width` / `natural_height` - Intrinsic size of the preview image
/// * `frame_width` / `frame_height` - Rendered size of the preview (`getBoundingClientRect`)
/// * `zoom` - Zoom slider value (1.0 = no zoom)
/// * `focus_x` / `focus_y` - Focus sliders (0.0 to 1.0)
/// * `orientation` - `"portrait"` or `"landscape"`
///
/// # Errors
///
/// Returns an error string if the image has not loaded or laid out yet, if
/// zoom is not positive, if a focus value is outside 0..=1, or if the
/// orientation is unknown.
///
/// # Example (TypeScript)
///
/// ```typescript
/// const rect = imagePreview.getBoundingClientRect();
/// const overlay = compute_crop_overlay(
///   imagePreview.naturalWidth, imagePreview.naturalHeight,
///   rect.width, rect.height,
///   zoom, focusX, focusY, orientation,
/// );
/// cropOverlay.style.left = overlay.css_left;
/// ```
#[wasm_bindgen]
#[allow(clippy::too_many_arguments)]
pub fn compute_crop_overlay(
    natural_width: u32,
    natural_height: u32,
    frame_width: f64,
    frame_height: f64,
    zoom: f64,
    focus_x: f64,
    focus_y: f64,
    orientation: &str,
) -> Result<JsCropRectangle, JsValue> {
    overlay_for(
        SourceImage::new(natural_width, natural_height),
        DisplayFrame::new(frame_width, frame_height),
        zoom,
        focus_x,
        focus_y,
        orientation,
    )
    .map_err(to_js_error)
}

/// Target width / height ratio for an orientation (2/3 or 3/2).
#[wasm_bindgen]
pub fn target_ratio(orientation: &str) -> Result<f64, JsValue> {
    orientation_from_str(orientation)
        .map(|o| o.target_ratio())
        .map_err(to_js_error)
}

fn overlay_for(
    source: SourceImage,
    frame: DisplayFrame,
    zoom: f64,
    focus_x: f64,
    focus_y: f64,
    orientation: &str,
) -> Result<JsCropRectangle, GeometryError> {
    let intent = CropIntent {
        zoom,
        focus_x,
        focus_y,
        orientation: orientation_from_str(orientation)?,
    };
    try_compute_crop_rectangle(&source, &frame, &intent).map(JsCropRectangle::from)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn photo() -> (SourceImage, DisplayFrame) {
        (SourceImage::new(3000, 2000), DisplayFrame::new(600.0, 400.0))
    }

    #[test]
    fn test_overlay_default_portrait() {
        let (src, frame) = photo();
        let rect = overlay_for(src, frame, 1.0, 0.5, 0.5, "portrait").unwrap();
        assert!((rect.left() - 166.667).abs() < 1e-3);
        assert!(rect.top().abs() < 1e-9);
        assert!((rect.width() - 266.667).abs() < 1e-3);
        assert!((rect.height() - 400.0).abs() < 1e-9);
    }

    #[test]
    fn test_overlay_landscape_zoomed() {
        let (src, frame) = photo();
        let rect = overlay_for(src, frame, 2.0, 0.5, 0.5, "landscape").unwrap();
        assert!((rect.width() - 300.0).abs() < 1e-9);
        assert!((rect.height() - 200.0).abs() < 1e-9);
        assert!((rect.left() - 150.0).abs() < 1e-9);
        assert!((rect.top() - 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_overlay_errors() {
        let (src, frame) = photo();
        assert_eq!(
            overlay_for(src, frame, 1.0, 0.5, 0.5, "diagonal"),
            Err(GeometryError::InvalidOrientation("diagonal".to_string()))
        );
        assert_eq!(
            overlay_for(src, frame, -1.0, 0.5, 0.5, "portrait"),
            Err(GeometryError::InvalidZoom(-1.0))
        );
        assert!(matches!(
            overlay_for(src, DisplayFrame::new(0.0, 0.0), 1.0, 0.5, 0.5, "portrait"),
            Err(GeometryError::EmptyFrame { .. })
        ));
    }

    #[test]
    fn test_compute_crop_overlay_success_path() {
        let rect = compute_crop_overlay(3000, 2000, 600.0, 400.0, 5.0, 0.5, 0.5, "portrait").unwrap();
        assert!((rect.height() - 80.0).abs() < 1e-9);
        assert!((rect.top() - 160.0).abs() < 1e-9);
    }
}
