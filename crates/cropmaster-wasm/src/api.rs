//! Service helper bindings.
//!
//! Small pure helpers the page needs around the network calls: where the API
//! lives, whether a file is worth uploading, and how to label what comes back.

use crate::log;
use crate::types::{orientation_from_str, to_js_error};
use cropmaster_core::api::{api_base_for_host, expected_output_filename, output_extension};
use cropmaster_core::config::ControlConfig;
use cropmaster_core::info::{human_file_size, ColorProfileKind, ImageInfo};
use cropmaster_core::upload::{validate_upload, UploadError};
use wasm_bindgen::prelude::*;

/// API prefix for the page's host (`location.hostname`).
///
/// ```typescript
/// const API_BASE = api_base(location.hostname);
/// ```
#[wasm_bindgen]
pub fn api_base(host: &str) -> String {
    api_base_for_host(host).to_string()
}

/// Check a selected file against the default 500MB limit.
///
/// `size` is `File.size` in bytes. Throws the message to show the user.
/// Sessions with a custom limit use `JsCropSession.check_upload`.
#[wasm_bindgen]
pub fn check_upload(name: &str, size: f64) -> Result<(), JsValue> {
    check_upload_with(name, size, &ControlConfig::default()).map_err(|e| {
        log::warn(&format!("Upload refused for {}: {}", name, e));
        to_js_error(e)
    })
}

/// Filename the service will give the crop of `upload_name`.
///
/// `output_ext` (with the dot) overrides the extension. Without it, TIFF and
/// HEIC/HEIF uploads are assumed to come back as `.jpg`; a 16-bit TIFF keeps
/// `.tiff`, which only `JsCropSession.expected_output_filename` can tell.
#[wasm_bindgen]
pub fn predicted_output_filename(
    upload_name: &str,
    orientation: &str,
    output_ext: Option<String>,
) -> Result<String, JsValue> {
    let orientation = orientation_from_str(orientation).map_err(to_js_error)?;
    let ext = match output_ext.as_deref() {
        Some(ext) => ext,
        None => output_extension(upload_name, &ImageInfo::default()),
    };
    Ok(expected_output_filename(upload_name, orientation, Some(ext)))
}

/// Badge label for a color profile name from the service.
#[wasm_bindgen]
pub fn color_profile_label(profile: &str) -> String {
    ColorProfileKind::from_label(profile).label().to_string()
}

/// Format a byte count as B / KB / MB / GB.
#[wasm_bindgen]
pub fn format_file_size(bytes: f64) -> String {
    human_file_size(bytes_from_js(bytes))
}

/// JS numbers are f64; sizes are whole, non-negative bytes.
pub(crate) fn bytes_from_js(bytes: f64) -> u64 {
    if bytes.is_finite() && bytes > 0.0 {
        bytes as u64
    } else {
        0
    }
}

fn check_upload_with(name: &str, size: f64, config: &ControlConfig) -> Result<(), UploadError> {
    validate_upload(name, bytes_from_js(size), config)
}
