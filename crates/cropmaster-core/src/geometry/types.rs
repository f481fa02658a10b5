//! Core types for crop geometry.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Error types for crop geometry inputs.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GeometryError {
    /// Zoom must be a finite value greater than zero.
    #[error("Invalid zoom: {0} (must be > 0)")]
    InvalidZoom(f64),

    /// Focus coordinates must be within 0.0 to 1.0.
    #[error("Invalid focus {axis}: {value} (must be within 0..=1)")]
    InvalidFocus { axis: char, value: f64 },

    /// The preview container has not been laid out yet.
    #[error("Display frame not laid out: {width}x{height}")]
    EmptyFrame { width: f64, height: f64 },

    /// The source image has a zero dimension.
    #[error("Invalid source image dimensions: {width}x{height}")]
    EmptySource { width: u32, height: u32 },

    /// The orientation string is neither "portrait" nor "landscape".
    #[error("Unknown orientation: {0}")]
    InvalidOrientation(String),
}

/// Target orientation of the output crop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    /// 2:3, taller than wide.
    #[default]
    Portrait,
    /// 3:2, wider than tall.
    Landscape,
}

impl Orientation {
    /// Target width / height ratio for this orientation.
    #[inline]
    pub fn target_ratio(self) -> f64 {
        match self {
            Orientation::Portrait => 2.0 / 3.0,
            Orientation::Landscape => 3.0 / 2.0,
        }
    }

    /// Suffix the cropping service appends to output filenames.
    pub fn crop_suffix(self) -> &'static str {
        match self {
            Orientation::Portrait => "2x3",
            Orientation::Landscape => "3x2",
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Orientation::Portrait => "portrait",
            Orientation::Landscape => "landscape",
        }
    }

    /// The other orientation.
    pub fn flipped(self) -> Self {
        match self {
            Orientation::Portrait => Orientation::Landscape,
            Orientation::Landscape => Orientation::Portrait,
        }
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Orientation {
    type Err = GeometryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "portrait" => Ok(Orientation::Portrait),
            "landscape" => Ok(Orientation::Landscape),
            _ => Err(GeometryError::InvalidOrientation(s.to_string())),
        }
    }
}

/// Intrinsic pixel dimensions of the decoded image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceImage {
    pub natural_width: u32,
    pub natural_height: u32,
}

impl SourceImage {
    pub fn new(natural_width: u32, natural_height: u32) -> Self {
        Self {
            natural_width,
            natural_height,
        }
    }

    /// Width / height of the intrinsic image.
    #[inline]
    pub fn aspect_ratio(&self) -> f64 {
        self.natural_width as f64 / self.natural_height as f64
    }

    pub fn is_valid(&self) -> bool {
        self.natural_width > 0 && self.natural_height > 0
    }
}

/// Rendered size of the preview container.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DisplayFrame {
    pub width: f64,
    pub height: f64,
}

impl DisplayFrame {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// True once layout has produced a positive, finite box.
    pub fn is_laid_out(&self) -> bool {
        self.width.is_finite() && self.height.is_finite() && self.width > 0.0 && self.height > 0.0
    }
}

/// The user's desired crop, before it is translated into display units.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CropIntent {
    /// Magnification (1.0 = none, larger = smaller crop window)
    pub zoom: f64,
    /// Horizontal crop center (0.0 to 1.0)
    pub focus_x: f64,
    /// Vertical crop center (0.0 to 1.0)
    pub focus_y: f64,
    pub orientation: Orientation,
}

impl Default for CropIntent {
    fn default() -> Self {
        Self {
            zoom: 1.0,
            focus_x: 0.5,
            focus_y: 0.5,
            orientation: Orientation::Portrait,
        }
    }
}

impl CropIntent {
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if all values are at their defaults
    pub fn is_default(&self) -> bool {
        *self == Self::default()
    }
}

/// Crop overlay geometry in container display units.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct CropRectangle {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl CropRectangle {
    #[inline]
    pub fn right(&self) -> f64 {
        self.left + self.width
    }

    #[inline]
    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }

    #[inline]
    pub fn aspect_ratio(&self) -> f64 {
        self.width / self.height
    }

    pub fn center(&self) -> (f64, f64) {
        (self.left + self.width / 2.0, self.top + self.height / 2.0)
    }

    /// Whether the rectangle lies inside `frame`, allowing `eps` of overshoot.
    pub fn fits_within(&self, frame: &DisplayFrame, eps: f64) -> bool {
        self.left >= 0.0
            && self.top >= 0.0
            && self.right() <= frame.width + eps
            && self.bottom() <= frame.height + eps
    }
}
