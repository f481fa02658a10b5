//! CropMaster Core - crop overlay geometry and page state
//!
//! This crate provides the logic behind the ImageCropMaster crop page: the
//! live overlay geometry that mirrors the cropping service, the owned session
//! state the page controller drives, and the request/response shapes of the
//! service. It has no browser dependencies; `cropmaster-wasm` exposes it to
//! JavaScript.
//!
//! # Modules
//!
//! - `geometry` - crop rectangle derivation from zoom, focus and orientation
//! - `session` - explicit state holder updated by page events
//! - `config` - slider ranges and upload limits
//! - `api` - service endpoints and payloads
//! - `upload` - client-side upload checks
//! - `info` - service image metadata and quality indicators

pub mod api;
pub mod config;
pub mod geometry;
pub mod info;
pub mod session;
pub mod upload;

pub use api::{ApiError, CleanupRequest, Endpoint, ProcessRequest};
pub use config::{ConfigError, ControlConfig};
pub use geometry::{
    compute_crop_rectangle, try_compute_crop_rectangle, CropIntent, CropRectangle, DisplayFrame,
    GeometryError, Orientation, SourceImage,
};
pub use info::{quality_indicators, ImageInfo, QualityIndicator};
pub use session::CropSession;
pub use upload::{validate_upload, UploadError};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_overlay_matches_calculator() {
        let mut session = CropSession::new();
        session.image_loaded(4000, 6000);
        session.resize(320.0, 480.0);
        session.set_zoom(1.8);
        session.set_focus_x(0.2);

        let expected = compute_crop_rectangle(
            &SourceImage::new(4000, 6000),
            &DisplayFrame::new(320.0, 480.0),
            session.intent(),
        );
        assert_eq!(session.overlay(), Some(expected));
    }

    #[test]
    fn test_commit_payload_matches_overlay_intent() {
        let mut session = CropSession::new();
        session
            .upload_accepted(api::UploadResponse {
                success: true,
                filename: Some("7_portrait.png".to_string()),
                image_info: Some(ImageInfo::default()),
                ..Default::default()
            })
            .unwrap();
        session.set_orientation(Orientation::Landscape);
        session.set_zoom(2.0);

        let request = session.process_request().unwrap();
        let intent = CropIntent {
            zoom: request.zoom,
            focus_x: request.focus_x,
            focus_y: request.focus_y,
            orientation: request.orientation,
        };
        assert_eq!(&intent, session.intent());
    }
}
