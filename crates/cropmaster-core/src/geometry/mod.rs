//! Crop overlay geometry.
//!
//! This module derives the on-screen crop rectangle from the user's crop
//! intent (zoom, focus point, orientation), the rendered size of the preview
//! and the intrinsic aspect ratio of the uploaded image.
//!
//! # Coordinate System
//!
//! - All rectangle values are in display units of the preview container
//! - Origin is the top-left corner of the container
//! - Focus coordinates are fractions (0.0 to 1.0) of the container size
//!
//! # Target Ratios
//!
//! The output is always 2:3 (portrait) or 3:2 (landscape). The ratio fixing
//! step of [`compute_crop_rectangle`] must stay in lockstep with the cropping
//! service, which produces the final file from the same intent values.

mod overlay;
mod types;

pub use overlay::{compute_crop_rectangle, try_compute_crop_rectangle};
pub use types::{
    CropIntent, CropRectangle, DisplayFrame, GeometryError, Orientation, SourceImage,
};
