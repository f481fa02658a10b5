//! WASM-compatible wrapper types for crop geometry.
//!
//! This module provides JavaScript-friendly types that wrap the core CropMaster
//! types, handling the conversion between Rust and JavaScript representations.

use cropmaster_core::geometry::{CropRectangle, GeometryError, Orientation};
use wasm_bindgen::prelude::*;

/// Crop overlay geometry for JavaScript.
///
/// Values are in CSS pixels of the preview container. The `css_*` getters
/// return ready-to-assign style strings, e.g. `"166.66px"`.
#[wasm_bindgen]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct JsCropRectangle {
    left: f64,
    top: f64,
    width: f64,
    height: f64,
}

#[wasm_bindgen]
impl JsCropRectangle {
    #[wasm_bindgen(getter)]
    pub fn left(&self) -> f64 {
        self.left
    }

    #[wasm_bindgen(getter)]
    pub fn top(&self) -> f64 {
        self.top
    }

    #[wasm_bindgen(getter)]
    pub fn width(&self) -> f64 {
        self.width
    }

    #[wasm_bindgen(getter)]
    pub fn height(&self) -> f64 {
        self.height
    }

    #[wasm_bindgen(getter)]
    pub fn css_left(&self) -> String {
        css_px(self.left)
    }

    #[wasm_bindgen(getter)]
    pub fn css_top(&self) -> String {
        css_px(self.top)
    }

    #[wasm_bindgen(getter)]
    pub fn css_width(&self) -> String {
        css_px(self.width)
    }

    #[wasm_bindgen(getter)]
    pub fn css_height(&self) -> String {
        css_px(self.height)
    }
}

impl From<CropRectangle> for JsCropRectangle {
    fn from(rect: CropRectangle) -> Self {
        Self {
            left: rect.left,
            top: rect.top,
            width: rect.width,
            height: rect.height,
        }
    }
}

impl From<JsCropRectangle> for CropRectangle {
    fn from(rect: JsCropRectangle) -> Self {
        CropRectangle {
            left: rect.left,
            top: rect.top,
            width: rect.width,
            height: rect.height,
        }
    }
}

pub(crate) fn css_px(value: f64) -> String {
    format!("{}px", value)
}

/// Parse the value of the orientation radio group.
pub(crate) fn orientation_from_str(value: &str) -> Result<Orientation, GeometryError> {
    value.parse()
}

/// Convert any core error into a JavaScript error value.
pub(crate) fn to_js_error<E: std::fmt::Display>(err: E) -> JsValue {
    JsValue::from_str(&err.to_string())
}
