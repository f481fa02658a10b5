//! Crop session state.
//!
//! One `CropSession` is owned by the page controller for the lifetime of the
//! page. Each input event updates exactly one field through a method here,
//! then the controller asks for the [`CropSession::overlay`] again. Nothing is
//! shared, so no locking is involved.
//!
//! # Lifecycle
//!
//! 1. `upload_accepted` stores the server-side filenames
//! 2. `image_loaded` records the preview's intrinsic size
//! 3. `resize` records the rendered size (and again on every window resize)
//! 4. slider and orientation events update the [`CropIntent`]
//! 5. `process_request` builds the commit payload
//! 6. `process_completed` stores the output filename for download
//! 7. `reset` clears it all and hands back the cleanup payload

use crate::api::{
    expected_output_filename, output_extension, ApiError, CleanupRequest, Endpoint,
    ProcessRequest, ProcessResponse, ProcessedImage, UploadResponse,
};
use crate::config::{ConfigError, ControlConfig};
use crate::geometry::{
    compute_crop_rectangle, CropIntent, CropRectangle, DisplayFrame, Orientation, SourceImage,
};
use crate::info::ImageInfo;
use crate::upload::{validate_upload, UploadError};

/// Explicit, owned state of the crop page.
#[derive(Debug, Clone, Default)]
pub struct CropSession {
    config: ControlConfig,
    filename: Option<String>,
    preview_filename: Option<String>,
    image_info: Option<ImageInfo>,
    source: Option<SourceImage>,
    frame: Option<DisplayFrame>,
    intent: CropIntent,
    output: Option<ProcessedImage>,
}

impl CropSession {
    /// Create a session with the default slider ranges.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a session with custom slider ranges.
    pub fn with_config(config: ControlConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            config,
            ..Self::default()
        })
    }

    pub fn config(&self) -> &ControlConfig {
        &self.config
    }

    pub fn intent(&self) -> &CropIntent {
        &self.intent
    }

    pub fn filename(&self) -> Option<&str> {
        self.filename.as_deref()
    }

    pub fn preview_filename(&self) -> Option<&str> {
        self.preview_filename.as_deref()
    }

    pub fn image_info(&self) -> Option<&ImageInfo> {
        self.image_info.as_ref()
    }

    pub fn output(&self) -> Option<&ProcessedImage> {
        self.output.as_ref()
    }

    pub fn source(&self) -> Option<SourceImage> {
        self.source
    }

    pub fn frame(&self) -> Option<DisplayFrame> {
        self.frame
    }

    // =========================================================================
    // Input events
    // =========================================================================

    pub fn set_zoom(&mut self, zoom: f64) {
        self.intent.zoom = self.config.clamp_zoom(zoom);
    }

    pub fn set_focus_x(&mut self, focus_x: f64) {
        self.intent.focus_x = self.config.clamp_focus(focus_x);
    }

    pub fn set_focus_y(&mut self, focus_y: f64) {
        self.intent.focus_y = self.config.clamp_focus(focus_y);
    }

    pub fn set_orientation(&mut self, orientation: Orientation) {
        self.intent.orientation = orientation;
    }

    /// Record the rendered size of the preview.
    ///
    /// A zero or non-finite size means the preview is not laid out (hidden
    /// panel, image not decoded yet), so the overlay is withheld until the
    /// next real size arrives.
    pub fn resize(&mut self, width: f64, height: f64) {
        let frame = DisplayFrame::new(width, height);
        self.frame = frame.is_laid_out().then_some(frame);
    }

    /// Record the intrinsic size of the loaded preview image.
    pub fn image_loaded(&mut self, natural_width: u32, natural_height: u32) {
        let source = SourceImage::new(natural_width, natural_height);
        self.source = source.is_valid().then_some(source);
    }

    /// Store the filenames from a successful upload.
    ///
    /// Any previous output is forgotten; the crop controls are left as they are.
    pub fn upload_accepted(&mut self, response: UploadResponse) -> Result<&str, ApiError> {
        let accepted = response.into_result()?;
        self.filename = Some(accepted.filename);
        self.image_info = Some(accepted.image_info);
        self.output = None;
        self.source = None;
        Ok(self.preview_filename.insert(accepted.preview_filename).as_str())
    }

    /// Store the result of `POST /process`.
    pub fn process_completed(&mut self, response: ProcessResponse) -> Result<&ProcessedImage, ApiError> {
        let processed = response.into_result()?;
        Ok(&*self.output.insert(processed))
    }

    /// Put the controls back to zoom 1, centered focus, portrait.
    pub fn reset_controls(&mut self) {
        self.intent = CropIntent::default();
    }

    /// Forget the current image, returning the cleanup payload for it.
    pub fn reset(&mut self) -> Option<CleanupRequest> {
        let cleanup = self.cleanup_request();
        let config = self.config;
        *self = Self {
            config,
            ..Self::default()
        };
        cleanup
    }

    // =========================================================================
    // Queries
    // =========================================================================

    /// Current crop overlay, or `None` until the image has loaded and laid out.
    pub fn overlay(&self) -> Option<CropRectangle> {
        let source = self.source.as_ref()?;
        let frame = self.frame.as_ref()?;
        Some(compute_crop_rectangle(source, frame, &self.intent))
    }

    /// Commit payload for `POST /process`, or `None` before an upload.
    pub fn process_request(&self) -> Option<ProcessRequest> {
        let filename = self.filename.as_deref()?;
        Some(ProcessRequest::new(filename, &self.intent))
    }

    /// Cleanup payload for the current upload, if there is one.
    pub fn cleanup_request(&self) -> Option<CleanupRequest> {
        self.filename.as_ref().map(|filename| CleanupRequest {
            filenames: vec![filename.clone()],
        })
    }

    /// Preview path for the current upload, relative to the API base.
    pub fn preview_endpoint(&self) -> Option<Endpoint> {
        self.preview_filename.clone().map(Endpoint::Preview)
    }

    /// Download path for the processed file, relative to the API base.
    pub fn download_endpoint(&self) -> Option<Endpoint> {
        self.output
            .as_ref()
            .map(|output| Endpoint::Download(output.output_filename.clone()))
    }

    /// Check a selected file against this session's upload limit.
    pub fn check_upload(&self, name: &str, size: u64) -> Result<(), UploadError> {
        validate_upload(name, size, &self.config)
    }

    /// Filename `POST /process` will answer with for the current intent.
    pub fn expected_output_filename(&self) -> Option<String> {
        let filename = self.filename.as_deref()?;
        let info = self.image_info.as_ref()?;
        Some(expected_output_filename(
            filename,
            self.intent.orientation,
            Some(output_extension(filename, info)),
        ))
    }

    /// Zoom badge text, one decimal like the slider readout.
    pub fn zoom_label(&self) -> String {
        format!("{:.1}", self.intent.zoom)
    }
}
