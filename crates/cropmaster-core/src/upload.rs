//! Client-side upload checks.
//!
//! The cropping service rejects these files anyway; checking first saves
//! sending hundreds of megabytes just to read an error back.

use crate::config::ControlConfig;
use thiserror::Error;

/// Extensions the cropping service accepts (lowercase, no dot).
pub const ALLOWED_EXTENSIONS: &[&str] = &["tiff", "tif", "png", "jpg", "jpeg", "heic", "heif", "webp"];

/// Error types for rejected uploads.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UploadError {
    #[error("No file selected")]
    EmptyFilename,

    #[error("Invalid file format ({0}). Please upload TIFF, PNG, JPEG, HEIC, or WebP files.")]
    UnsupportedExtension(String),

    #[error("File size exceeds {limit_label} limit")]
    TooLarge {
        size: u64,
        limit: u64,
        limit_label: String,
    },
}

/// Lowercased extension of `name`, if it has one.
pub fn file_extension(name: &str) -> Option<String> {
    let (_, ext) = name.rsplit_once('.')?;
    if ext.is_empty() {
        return None;
    }
    Some(ext.to_ascii_lowercase())
}

pub fn is_allowed_file(name: &str) -> bool {
    file_extension(name).is_some_and(|ext| ALLOWED_EXTENSIONS.contains(&ext.as_str()))
}

/// Check a selected file before it is sent to `/upload`.
///
/// The size check runs first, matching the order the page reports errors in.
pub fn validate_upload(name: &str, size: u64, config: &ControlConfig) -> Result<(), UploadError> {
    if size > config.max_upload_bytes {
        return Err(UploadError::TooLarge {
            size,
            limit: config.max_upload_bytes,
            limit_label: config.upload_limit_label(),
        });
    }
    if name.trim().is_empty() {
        return Err(UploadError::EmptyFilename);
    }
    if !is_allowed_file(name) {
        let ext = file_extension(name).unwrap_or_default();
        return Err(UploadError::UnsupportedExtension(ext));
    }
    Ok(())
}
