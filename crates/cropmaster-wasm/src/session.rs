//! Crop session WASM bindings.
//!
//! The page controller creates one `JsCropSession`, forwards every input
//! event to it and repaints the overlay from [`JsCropSession::overlay`].
//! Service payloads cross the boundary as plain objects via serde_wasm_bindgen.

use crate::api::bytes_from_js;
use crate::log;
use crate::types::{orientation_from_str, to_js_error, JsCropRectangle};
use cropmaster_core::api::{ProcessResponse, UploadResponse};
use cropmaster_core::config::ControlConfig;
use cropmaster_core::info::quality_indicators;
use cropmaster_core::session::CropSession;
use cropmaster_core::upload::UploadError;
use wasm_bindgen::prelude::*;

/// Crop page state for JavaScript.
#[wasm_bindgen]
pub struct JsCropSession {
    inner: CropSession,
}

impl Default for JsCropSession {
    fn default() -> Self {
        Self::new()
    }
}

#[wasm_bindgen]
impl JsCropSession {
    /// Create a session with the default slider ranges (zoom 0.2 to 5.0).
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self {
            inner: CropSession::new(),
        }
    }

    /// Create a session from a config object, e.g. `{ zoom_max: 3 }`.
    ///
    /// Missing fields take their defaults.
    pub fn with_config(config: JsValue) -> Result<JsCropSession, JsValue> {
        let config: ControlConfig = serde_wasm_bindgen::from_value(config)
            .map_err(|e| JsValue::from_str(&format!("Invalid config: {}", e)))?;
        let inner = CropSession::with_config(config).map_err(|e| {
            log::warn(&format!("Rejected crop config: {}", e));
            to_js_error(e)
        })?;
        Ok(Self { inner })
    }

    // =========================================================================
    // Current controls
    // =========================================================================

    #[wasm_bindgen(getter)]
    pub fn zoom(&self) -> f64 {
        self.inner.intent().zoom
    }

    #[wasm_bindgen(getter)]
    pub fn focus_x(&self) -> f64 {
        self.inner.intent().focus_x
    }

    #[wasm_bindgen(getter)]
    pub fn focus_y(&self) -> f64 {
        self.inner.intent().focus_y
    }

    #[wasm_bindgen(getter)]
    pub fn orientation(&self) -> String {
        self.inner.intent().orientation.to_string()
    }

    #[wasm_bindgen(getter)]
    pub fn zoom_min(&self) -> f64 {
        self.inner.config().zoom_min
    }

    #[wasm_bindgen(getter)]
    pub fn zoom_max(&self) -> f64 {
        self.inner.config().zoom_max
    }

    #[wasm_bindgen(getter)]
    pub fn zoom_step(&self) -> f64 {
        self.inner.config().zoom_step
    }

    #[wasm_bindgen(getter)]
    pub fn focus_step(&self) -> f64 {
        self.inner.config().focus_step
    }

    /// Upload limit in bytes, for the file picker hint.
    #[wasm_bindgen(getter)]
    pub fn max_upload_bytes(&self) -> f64 {
        self.inner.config().max_upload_bytes as f64
    }

    /// Zoom readout text, one decimal.
    #[wasm_bindgen(getter)]
    pub fn zoom_label(&self) -> String {
        self.inner.zoom_label()
    }

    #[wasm_bindgen(getter)]
    pub fn filename(&self) -> Option<String> {
        self.inner.filename().map(str::to_string)
    }

    /// Name the service will give the crop, from the upload's format.
    #[wasm_bindgen(getter)]
    pub fn expected_output_filename(&self) -> Option<String> {
        self.inner.expected_output_filename()
    }

    #[wasm_bindgen(getter)]
    pub fn output_filename(&self) -> Option<String> {
        self.inner.output().map(|o| o.output_filename.clone())
    }

    // =========================================================================
    // Input events
    // =========================================================================

    pub fn set_zoom(&mut self, zoom: f64) {
        self.inner.set_zoom(zoom);
    }

    pub fn set_focus_x(&mut self, focus_x: f64) {
        self.inner.set_focus_x(focus_x);
    }

    pub fn set_focus_y(&mut self, focus_y: f64) {
        self.inner.set_focus_y(focus_y);
    }

    /// Set orientation from the radio value (`"portrait"` or `"landscape"`).
    pub fn set_orientation(&mut self, orientation: &str) -> Result<(), JsValue> {
        let orientation = orientation_from_str(orientation).map_err(to_js_error)?;
        self.inner.set_orientation(orientation);
        Ok(())
    }

    /// Check a selected file against this session's upload limit.
    ///
    /// `size` is `File.size` in bytes. Throws the message to show the user.
    pub fn check_upload(&self, name: &str, size: f64) -> Result<(), JsValue> {
        self.check_upload_size(name, size).map_err(|e| {
            log::warn(&format!("Upload refused for {}: {}", name, e));
            to_js_error(e)
        })
    }

    /// Record the preview's rendered size; call on load and on window resize.
    pub fn resize(&mut self, width: f64, height: f64) {
        self.inner.resize(width, height);
    }

    /// Record the preview's `naturalWidth` / `naturalHeight`.
    pub fn image_loaded(&mut self, natural_width: u32, natural_height: u32) {
        self.inner.image_loaded(natural_width, natural_height);
    }

    /// Store a parsed `/upload` response. Returns the preview filename to load.
    pub fn upload_accepted(&mut self, response: JsValue) -> Result<String, JsValue> {
        let response: UploadResponse = serde_wasm_bindgen::from_value(response)
            .map_err(|_| JsValue::from_str("Upload failed: invalid server response"))?;
        match self.inner.upload_accepted(response) {
            Ok(preview) => {
                log::info(&format!("Upload accepted, preview {}", preview));
                Ok(preview.to_string())
            }
            Err(e) => {
                log::error(&format!("Upload rejected: {}", e));
                Err(to_js_error(e))
            }
        }
    }

    /// Store a parsed `/process` response. Returns the output filename.
    pub fn process_completed(&mut self, response: JsValue) -> Result<String, JsValue> {
        let response: ProcessResponse = serde_wasm_bindgen::from_value(response)
            .map_err(|e| JsValue::from_str(&format!("Processing failed: {}", e)))?;
        match self.inner.process_completed(response) {
            Ok(processed) => {
                log::info(&format!("Crop ready: {}", processed.output_filename));
                Ok(processed.output_filename.clone())
            }
            Err(e) => {
                log::error(&format!("Processing failed: {}", e));
                Err(to_js_error(e))
            }
        }
    }

    /// Back to zoom 1, centered focus, portrait.
    pub fn reset_controls(&mut self) {
        self.inner.reset_controls();
    }

    /// Forget the current image. Returns the `/cleanup` body, or `null`.
    pub fn reset(&mut self) -> Result<JsValue, JsValue> {
        match self.inner.reset() {
            Some(cleanup) => serde_wasm_bindgen::to_value(&cleanup).map_err(to_js_error),
            None => Ok(JsValue::NULL),
        }
    }

    // =========================================================================
    // Queries
    // =========================================================================

    /// Current overlay, or `undefined` until the image has loaded and laid out.
    pub fn overlay(&self) -> Option<JsCropRectangle> {
        self.inner.overlay().map(JsCropRectangle::from)
    }

    /// The `/process` body for the current intent, or `null` before an upload.
    pub fn process_request(&self) -> Result<JsValue, JsValue> {
        match self.inner.process_request() {
            Some(request) => serde_wasm_bindgen::to_value(&request).map_err(to_js_error),
            None => Ok(JsValue::NULL),
        }
    }

    /// The `/cleanup` body for the current upload, or `null`.
    pub fn cleanup_request(&self) -> Result<JsValue, JsValue> {
        match self.inner.cleanup_request() {
            Some(cleanup) => serde_wasm_bindgen::to_value(&cleanup).map_err(to_js_error),
            None => Ok(JsValue::NULL),
        }
    }

    /// Preview URL under `base` (see `api_base`).
    pub fn preview_url(&self, base: &str) -> Option<String> {
        self.inner.preview_endpoint().map(|e| e.url(base))
    }

    /// Download URL for the processed file under `base`.
    pub fn download_url(&self, base: &str) -> Option<String> {
        self.inner.download_endpoint().map(|e| e.url(base))
    }

    /// Quality badge labels for the uploaded image.
    pub fn quality_labels(&self) -> js_sys::Array {
        self.quality_label_list()
            .into_iter()
            .map(JsValue::from)
            .collect()
    }
}

impl JsCropSession {
    fn check_upload_size(&self, name: &str, size: f64) -> Result<(), UploadError> {
        self.inner.check_upload(name, bytes_from_js(size))
    }

    fn quality_label_list(&self) -> Vec<&'static str> {
        self.inner
            .image_info()
            .map(|info| quality_indicators(info).into_iter().map(|q| q.label()).collect())
            .unwrap_or_default()
    }
}
