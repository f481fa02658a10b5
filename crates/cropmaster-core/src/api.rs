//! Wire types for the cropping service.
//!
//! The page talks to five endpoints. Transport (XHR, fetch, beacons) stays in
//! JavaScript; this module owns the request and response shapes so they are
//! built from the same state the overlay is computed from.
//!
//! # Endpoints
//!
//! - `POST /upload` (multipart) -> [`UploadResponse`]
//! - `GET /preview/<name>` -> image bytes
//! - `POST /process` with [`ProcessRequest`] -> [`ProcessResponse`]
//! - `GET /download/<name>` -> cropped file
//! - `POST /cleanup` with [`CleanupRequest`]

use crate::geometry::{CropIntent, Orientation};
use crate::info::ImageInfo;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error types for service responses.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// The service answered with an `error` field.
    #[error("{0}")]
    Server(String),

    /// A successful response lacked a required field.
    #[error("Invalid server response: missing {0}")]
    MissingField(&'static str),
}

/// Body of `POST /process`. The service crops with these exact values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProcessRequest {
    pub filename: String,
    pub focus_x: f64,
    pub focus_y: f64,
    pub zoom: f64,
    pub orientation: Orientation,
}

impl ProcessRequest {
    pub fn new(filename: impl Into<String>, intent: &CropIntent) -> Self {
        Self {
            filename: filename.into(),
            focus_x: intent.focus_x,
            focus_y: intent.focus_y,
            zoom: intent.zoom,
            orientation: intent.orientation,
        }
    }
}

/// Body of `POST /cleanup`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CleanupRequest {
    pub filenames: Vec<String>,
}

/// Response of `POST /upload`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UploadResponse {
    pub success: bool,
    /// Stored name of the original upload
    pub filename: Option<String>,
    /// Browser-displayable copy (HEIC/HEIF uploads get a JPEG preview)
    pub preview_filename: Option<String>,
    pub image_info: Option<ImageInfo>,
    pub error: Option<String>,
}

/// A validated upload.
#[derive(Debug, Clone, PartialEq)]
pub struct AcceptedUpload {
    pub filename: String,
    pub preview_filename: String,
    pub image_info: ImageInfo,
}

impl UploadResponse {
    /// Name to load in the preview, falling back to the original upload.
    pub fn preview_name(&self) -> Option<&str> {
        self.preview_filename
            .as_deref()
            .filter(|name| !name.is_empty())
            .or(self.filename.as_deref())
    }

    pub fn into_result(mut self) -> Result<AcceptedUpload, ApiError> {
        if let Some(error) = self.error.take() {
            return Err(ApiError::Server(error));
        }
        let preview_filename = self
            .preview_name()
            .ok_or(ApiError::MissingField("filename"))?
            .to_string();
        let filename = self.filename.ok_or(ApiError::MissingField("filename"))?;
        let image_info = self.image_info.ok_or(ApiError::MissingField("image_info"))?;
        Ok(AcceptedUpload {
            filename,
            preview_filename,
            image_info,
        })
    }
}

/// Response of `POST /process`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProcessResponse {
    pub success: bool,
    pub output_filename: Option<String>,
    pub processed_info: Option<ImageInfo>,
    pub error: Option<String>,
}

/// A finished crop, ready for download.
#[derive(Debug, Clone, PartialEq)]
pub struct ProcessedImage {
    pub output_filename: String,
    pub processed_info: ImageInfo,
}

impl ProcessResponse {
    pub fn into_result(self) -> Result<ProcessedImage, ApiError> {
        if let Some(error) = self.error {
            return Err(ApiError::Server(error));
        }
        Ok(ProcessedImage {
            output_filename: self
                .output_filename
                .ok_or(ApiError::MissingField("output_filename"))?,
            processed_info: self
                .processed_info
                .ok_or(ApiError::MissingField("processed_info"))?,
        })
    }
}

/// Service endpoints.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Endpoint {
    Upload,
    Process,
    Cleanup,
    Preview(String),
    Download(String),
}

impl Endpoint {
    pub fn path(&self) -> String {
        match self {
            Endpoint::Upload => "/upload".to_string(),
            Endpoint::Process => "/process".to_string(),
            Endpoint::Cleanup => "/cleanup".to_string(),
            Endpoint::Preview(name) => format!("/preview/{}", name),
            Endpoint::Download(name) => format!("/download/{}", name),
        }
    }

    /// Full URL under `base` (see [`api_base_for_host`]).
    pub fn url(&self, base: &str) -> String {
        format!("{}{}", base.trim_end_matches('/'), self.path())
    }
}

/// API prefix for the host serving the page.
///
/// Served directly by Cloud Run the API lives at the root; anywhere else the
/// front end sits behind a proxy that mounts it under `/api`.
pub fn api_base_for_host(host: &str) -> &'static str {
    if host.ends_with(".run.app") {
        ""
    } else {
        "/api"
    }
}

/// Upload extensions the service re-encodes as JPEG, unless 16-bit TIFF.
const JPEG_OUTPUT_EXTENSIONS: &[&str] = &[".tif", ".tiff", ".heic", ".heif"];

/// Split `name` into base and extension (with the dot). A leading dot is
/// part of the base, so `.hidden` has no extension.
fn split_extension(name: &str) -> (&str, &str) {
    match name.rfind('.') {
        Some(idx) if idx > 0 => name.split_at(idx),
        _ => (name, ""),
    }
}

/// Extension the service writes the crop of `upload_name` with.
///
/// TIFF and HEIC/HEIF uploads come back as `.jpg`; a 16-bit TIFF keeps its
/// own extension. Everything else keeps the upload's extension as is.
pub fn output_extension<'a>(upload_name: &'a str, info: &ImageInfo) -> &'a str {
    let (_, ext) = split_extension(upload_name);
    let is_16bit_tiff = info.format == "TIFF" && info.bit_depth.bits() == Some(16);
    let converted = JPEG_OUTPUT_EXTENSIONS
        .iter()
        .any(|candidate| ext.eq_ignore_ascii_case(candidate));
    if converted && !is_16bit_tiff {
        ".jpg"
    } else {
        ext
    }
}

/// Name the service gives the cropped file: `<base>_cropped_<2x3|3x2><ext>`.
///
/// `output_ext` includes the dot, usually from [`output_extension`]; pass
/// `None` to keep the upload's extension.
pub fn expected_output_filename(
    upload_name: &str,
    orientation: Orientation,
    output_ext: Option<&str>,
) -> String {
    let (base, ext) = split_extension(upload_name);
    format!(
        "{}_cropped_{}{}",
        base,
        orientation.crop_suffix(),
        output_ext.unwrap_or(ext)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_process_request_json_shape() {
        let intent = CropIntent {
            zoom: 2.0,
            focus_x: 0.25,
            focus_y: 0.75,
            orientation: Orientation::Landscape,
        };
        let request = ProcessRequest::new("abc_photo.jpg", &intent);
        let value = serde_json::to_value(&request).unwrap();

        assert_eq!(
            value,
            serde_json::json!({
                "filename": "abc_photo.jpg",
                "focus_x": 0.25,
                "focus_y": 0.75,
                "zoom": 2.0,
                "orientation": "landscape"
            })
        );
    }

    #[test]
    fn test_cleanup_request_json_shape() {
        let request = CleanupRequest {
            filenames: vec!["a.png".to_string()],
        };
        assert_eq!(
            serde_json::to_string(&request).unwrap(),
            r#"{"filenames":["a.png"]}"#
        );
    }

    #[test]
    fn test_upload_response_success() {
        let json = r#"{
            "success": true,
            "filename": "123_photo.heic",
            "preview_filename": "123_photo_preview.jpg",
            "image_info": {"format": "HEIF", "width": 4032, "height": 3024}
        }"#;
        let accepted = serde_json::from_str::<UploadResponse>(json)
            .unwrap()
            .into_result()
            .unwrap();
        assert_eq!(accepted.filename, "123_photo.heic");
        assert_eq!(accepted.preview_filename, "123_photo_preview.jpg");
        assert_eq!(accepted.image_info.width, 4032);
    }

    #[test]
    fn test_upload_response_preview_fallback() {
        let response = UploadResponse {
            filename: Some("x.png".to_string()),
            image_info: Some(ImageInfo::default()),
            ..Default::default()
        };
        assert_eq!(response.preview_name(), Some("x.png"));
        assert_eq!(response.into_result().unwrap().preview_filename, "x.png");
    }

    #[test]
    fn test_upload_response_errors() {
        let response: UploadResponse =
            serde_json::from_str(r#"{"error": "Invalid or corrupted image file"}"#).unwrap();
        assert_eq!(
            response.into_result(),
            Err(ApiError::Server("Invalid or corrupted image file".to_string()))
        );

        let response: UploadResponse = serde_json::from_str(r#"{"success": true}"#).unwrap();
        assert_eq!(response.into_result(), Err(ApiError::MissingField("filename")));
    }

    #[test]
    fn test_process_response() {
        let json = r#"{
            "success": true,
            "output_filename": "123_photo_cropped_2x3.jpg",
            "processed_info": {"format": "JPEG", "width": 1333, "height": 2000}
        }"#;
        let processed = serde_json::from_str::<ProcessResponse>(json)
            .unwrap()
            .into_result()
            .unwrap();
        assert_eq!(processed.output_filename, "123_photo_cropped_2x3.jpg");
        assert_eq!(processed.processed_info.height, 2000);

        let failed: ProcessResponse =
            serde_json::from_str(r#"{"error": "Image processing failed"}"#).unwrap();
        assert_eq!(
            failed.into_result().unwrap_err().to_string(),
            "Image processing failed"
        );
    }

    #[test]
    fn test_endpoint_urls() {
        assert_eq!(Endpoint::Upload.url("/api"), "/api/upload");
        assert_eq!(Endpoint::Process.url(""), "/process");
        assert_eq!(
            Endpoint::Download("x_cropped_3x2.jpg".to_string()).url("/api/"),
            "/api/download/x_cropped_3x2.jpg"
        );
        assert_eq!(Endpoint::Preview("p.jpg".to_string()).path(), "/preview/p.jpg");
        assert_eq!(Endpoint::Cleanup.path(), "/cleanup");
    }

    #[test]
    fn test_api_base_for_host() {
        assert_eq!(api_base_for_host("cropmaster-abc123.a.run.app"), "");
        assert_eq!(api_base_for_host("cropmaster.netlify.app"), "/api");
        assert_eq!(api_base_for_host("localhost"), "/api");
    }

    #[test]
    fn test_expected_output_filename() {
        assert_eq!(
            expected_output_filename("123_photo.png", Orientation::Portrait, None),
            "123_photo_cropped_2x3.png"
        );
        assert_eq!(
            expected_output_filename("123_scan.tiff", Orientation::Landscape, Some(".jpg")),
            "123_scan_cropped_3x2.jpg"
        );
        assert_eq!(
            expected_output_filename("noext", Orientation::Portrait, None),
            "noext_cropped_2x3"
        );
    }

    #[test]
    fn test_output_extension_follows_service_conversion() {
        use crate::info::BitDepth;

        let jpeg_like = ImageInfo {
            format: "HEIF".to_string(),
            bit_depth: BitDepth::Bits(8),
            ..Default::default()
        };
        assert_eq!(output_extension("7_x.heic", &jpeg_like), ".jpg");
        assert_eq!(output_extension("7_x.HEIF", &jpeg_like), ".jpg");

        let tiff_8 = ImageInfo {
            format: "TIFF".to_string(),
            bit_depth: BitDepth::Bits(8),
            ..Default::default()
        };
        assert_eq!(output_extension("7_scan.tif", &tiff_8), ".jpg");

        let tiff_16 = ImageInfo {
            bit_depth: BitDepth::Bits(16),
            ..tiff_8.clone()
        };
        assert_eq!(output_extension("7_scan.tiff", &tiff_16), ".tiff");

        let png = ImageInfo {
            format: "PNG".to_string(),
            bit_depth: BitDepth::Bits(16),
            ..Default::default()
        };
        assert_eq!(output_extension("7_art.png", &png), ".png");
        assert_eq!(output_extension("noext", &png), "");

        assert_eq!(
            expected_output_filename(
                "7_x.heic",
                Orientation::Portrait,
                Some(output_extension("7_x.heic", &jpeg_like))
            ),
            "7_x_cropped_2x3.jpg"
        );
    }
}
