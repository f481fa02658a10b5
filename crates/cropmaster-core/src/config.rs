//! Control ranges and upload limits.
//!
//! The page sliders are bounded by these values, and every value coming out
//! of a slider is clamped here before it reaches the geometry code.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Upload size limit shared with the cropping service (500 MiB).
pub const DEFAULT_MAX_UPLOAD_BYTES: u64 = 500 * 1024 * 1024;

/// Error types for control configuration.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("zoom_min must be > 0, got {0}")]
    NonPositiveZoomMin(f64),

    #[error("zoom range is empty: {min} > {max}")]
    EmptyZoomRange { min: f64, max: f64 },

    #[error("{name} must be > 0, got {value}")]
    NonPositiveStep { name: &'static str, value: f64 },

    #[error("max_upload_bytes must be > 0")]
    ZeroUploadLimit,
}

/// Slider domains and upload limits.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ControlConfig {
    /// Smallest zoom the slider allows (crop larger than the frame below 1.0)
    pub zoom_min: f64,
    /// Largest zoom the slider allows
    pub zoom_max: f64,
    /// Zoom slider step
    pub zoom_step: f64,
    /// Focus slider step
    pub focus_step: f64,
    /// Largest accepted upload, in bytes
    pub max_upload_bytes: u64,
}

impl Default for ControlConfig {
    fn default() -> Self {
        Self {
            zoom_min: 0.2,
            zoom_max: 5.0,
            zoom_step: 0.1,
            focus_step: 0.01,
            max_upload_bytes: DEFAULT_MAX_UPLOAD_BYTES,
        }
    }
}

impl ControlConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Check that the ranges are usable.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.zoom_min.is_nan() || self.zoom_min <= 0.0 {
            return Err(ConfigError::NonPositiveZoomMin(self.zoom_min));
        }
        if self.zoom_max.is_nan() || self.zoom_min > self.zoom_max {
            return Err(ConfigError::EmptyZoomRange {
                min: self.zoom_min,
                max: self.zoom_max,
            });
        }
        for (name, value) in [("zoom_step", self.zoom_step), ("focus_step", self.focus_step)] {
            if value.is_nan() || value <= 0.0 {
                return Err(ConfigError::NonPositiveStep { name, value });
            }
        }
        if self.max_upload_bytes == 0 {
            return Err(ConfigError::ZeroUploadLimit);
        }
        Ok(())
    }

    /// Clamp a zoom slider value into the configured range.
    ///
    /// NaN (an empty or unparsable slider) falls back to 1.0, also clamped.
    /// Never panics, even on a config that fails [`ControlConfig::validate`].
    pub fn clamp_zoom(&self, zoom: f64) -> f64 {
        let zoom = if zoom.is_nan() { 1.0 } else { zoom };
        zoom.max(self.zoom_min).min(self.zoom_max)
    }

    /// Clamp a focus slider value into 0.0..=1.0. NaN falls back to the center.
    pub fn clamp_focus(&self, focus: f64) -> f64 {
        if focus.is_nan() {
            0.5
        } else {
            focus.clamp(0.0, 1.0)
        }
    }

    /// Human-readable upload limit, e.g. "500MB".
    pub fn upload_limit_label(&self) -> String {
        let mib = self.max_upload_bytes / (1024 * 1024);
        if mib > 0 && self.max_upload_bytes % (1024 * 1024) == 0 {
            format!("{}MB", mib)
        } else {
            format!("{} bytes", self.max_upload_bytes)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        let config = ControlConfig::new();
        assert_eq!(config.validate(), Ok(()));
        assert_eq!(config.zoom_min, 0.2);
        assert_eq!(config.zoom_max, 5.0);
    }

    #[test]
    fn test_clamp_zoom() {
        let config = ControlConfig::default();
        assert_eq!(config.clamp_zoom(0.0), 0.2);
        assert_eq!(config.clamp_zoom(12.0), 5.0);
        assert_eq!(config.clamp_zoom(2.5), 2.5);
        assert_eq!(config.clamp_zoom(f64::NAN), 1.0);
    }

    #[test]
    fn test_clamp_focus() {
        let config = ControlConfig::default();
        assert_eq!(config.clamp_focus(-0.3), 0.0);
        assert_eq!(config.clamp_focus(1.3), 1.0);
        assert_eq!(config.clamp_focus(0.42), 0.42);
        assert_eq!(config.clamp_focus(f64::NAN), 0.5);
    }

    #[test]
    fn test_validate_rejects_bad_ranges() {
        let mut config = ControlConfig::default();
        config.zoom_min = 0.0;
        assert_eq!(config.validate(), Err(ConfigError::NonPositiveZoomMin(0.0)));

        let mut config = ControlConfig::default();
        config.zoom_min = 6.0;
        assert!(matches!(config.validate(), Err(ConfigError::EmptyZoomRange { .. })));

        let mut config = ControlConfig::default();
        config.focus_step = 0.0;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::NonPositiveStep { name: "focus_step", .. })
        ));

        let mut config = ControlConfig::default();
        config.max_upload_bytes = 0;
        assert_eq!(config.validate(), Err(ConfigError::ZeroUploadLimit));
    }

    #[test]
    fn test_partial_overrides_deserialize() {
        let config: ControlConfig = serde_json::from_str(r#"{"zoom_max": 3.0}"#).unwrap();
        assert_eq!(config.zoom_max, 3.0);
        assert_eq!(config.zoom_min, 0.2);
        assert_eq!(config.max_upload_bytes, DEFAULT_MAX_UPLOAD_BYTES);
    }

    #[test]
    fn test_upload_limit_label() {
        assert_eq!(ControlConfig::default().upload_limit_label(), "500MB");
        let mut config = ControlConfig::default();
        config.max_upload_bytes = 1000;
        assert_eq!(config.upload_limit_label(), "1000 bytes");
    }
}
