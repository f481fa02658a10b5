//! Image metadata reported by the cropping service.
//!
//! The service reads the uploaded file and returns a loose JSON description of
//! it. This module turns that into typed values and derives the quality
//! indicators shown next to the preview. Rendering is left to the page.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Bit depth as reported by the service: a number, or a label such as "Unknown".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum BitDepth {
    Bits(u32),
    Label(String),
}

impl Default for BitDepth {
    fn default() -> Self {
        BitDepth::Label("Unknown".to_string())
    }
}

impl BitDepth {
    pub fn bits(&self) -> Option<u32> {
        match self {
            BitDepth::Bits(bits) => Some(*bits),
            BitDepth::Label(_) => None,
        }
    }
}

impl fmt::Display for BitDepth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BitDepth::Bits(bits) => write!(f, "{}-bit", bits),
            BitDepth::Label(label) => f.write_str(label),
        }
    }
}

/// Metadata for an uploaded or processed image.
///
/// Every field has a default so partial payloads still deserialize.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ImageInfo {
    /// Container format (e.g., "JPEG", "TIFF")
    pub format: String,
    pub width: u32,
    pub height: u32,
    /// Width / height, rounded to three decimals by the service
    pub aspect_ratio: f64,
    /// Color mode description (e.g., "RGB 8-bit")
    pub color_type: String,
    pub bit_depth: BitDepth,
    /// Classified profile label (e.g., "sRGB", "Adobe RGB")
    pub color_profile_type: Option<String>,
    pub file_size: Option<u64>,
    pub file_size_human: String,
    /// EXIF orientation tag (1-8) of the original file
    pub exif_orientation: Option<u32>,
}

impl ImageInfo {
    pub fn megapixels(&self) -> f64 {
        (self.width as f64 * self.height as f64) / 1_000_000.0
    }

    pub fn color_profile(&self) -> ColorProfileKind {
        ColorProfileKind::from_label(self.color_profile_type.as_deref().unwrap_or(""))
    }

    /// True when the service rotated the image according to its EXIF tag.
    pub fn has_exif_rotation(&self) -> bool {
        matches!(self.exif_orientation, Some(o) if o != 1)
    }
}

/// Color profile families the page distinguishes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorProfileKind {
    Srgb,
    AdobeRgb,
    ProPhotoRgb,
    DisplayP3,
    Custom,
    None,
    Unknown,
}

impl ColorProfileKind {
    pub fn from_label(label: &str) -> Self {
        match label {
            "sRGB" => ColorProfileKind::Srgb,
            "Adobe RGB" => ColorProfileKind::AdobeRgb,
            "ProPhoto RGB" => ColorProfileKind::ProPhotoRgb,
            "Display P3" => ColorProfileKind::DisplayP3,
            "Custom" => ColorProfileKind::Custom,
            "None" => ColorProfileKind::None,
            _ => ColorProfileKind::Unknown,
        }
    }

    /// Badge text for this profile.
    pub fn label(self) -> &'static str {
        match self {
            ColorProfileKind::Srgb => "sRGB",
            ColorProfileKind::AdobeRgb => "Adobe RGB",
            ColorProfileKind::ProPhotoRgb => "ProPhoto RGB",
            ColorProfileKind::DisplayP3 => "Display P3",
            ColorProfileKind::Custom => "Custom Profile",
            ColorProfileKind::None => "No Profile",
            ColorProfileKind::Unknown => "Unknown",
        }
    }

    pub fn is_wide_gamut(self) -> bool {
        matches!(self, ColorProfileKind::AdobeRgb | ColorProfileKind::ProPhotoRgb)
    }
}

/// Quality badges derived from [`ImageInfo`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum QualityIndicator {
    ProfessionalTiff16,
    LosslessPng,
    HighQualityJpeg,
    ModernWebp,
    UltraHighResolution,
    HighResolution,
    WideColorGamut,
    ModernDisplayProfile,
}

impl QualityIndicator {
    pub fn label(self) -> &'static str {
        match self {
            QualityIndicator::ProfessionalTiff16 => "Professional 16-bit TIFF",
            QualityIndicator::LosslessPng => "Lossless PNG",
            QualityIndicator::HighQualityJpeg => "High-Quality JPEG",
            QualityIndicator::ModernWebp => "Modern WebP",
            QualityIndicator::UltraHighResolution => "Ultra High Resolution",
            QualityIndicator::HighResolution => "High Resolution",
            QualityIndicator::WideColorGamut => "Wide Color Gamut",
            QualityIndicator::ModernDisplayProfile => "Modern Display Profile",
        }
    }
}

/// Derive the quality badges for an image, in display order:
/// format, then resolution, then color gamut.
pub fn quality_indicators(info: &ImageInfo) -> Vec<QualityIndicator> {
    let mut out = Vec::with_capacity(3);
    let bits = info.bit_depth.bits();

    match info.format.as_str() {
        "TIFF" if bits == Some(16) => out.push(QualityIndicator::ProfessionalTiff16),
        "PNG" if bits.is_some_and(|b| b >= 8) => out.push(QualityIndicator::LosslessPng),
        "JPEG" => out.push(QualityIndicator::HighQualityJpeg),
        "WEBP" => out.push(QualityIndicator::ModernWebp),
        _ => {}
    }

    let mp = info.megapixels();
    if mp >= 20.0 {
        out.push(QualityIndicator::UltraHighResolution);
    } else if mp >= 10.0 {
        out.push(QualityIndicator::HighResolution);
    }

    let profile = info.color_profile();
    if profile.is_wide_gamut() {
        out.push(QualityIndicator::WideColorGamut);
    } else if profile == ColorProfileKind::DisplayP3 {
        out.push(QualityIndicator::ModernDisplayProfile);
    }

    out
}

/// Format a byte count the way the service does (B, KB, MB, GB; one decimal).
pub fn human_file_size(bytes: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = KB * 1024;
    const GB: u64 = MB * 1024;

    if bytes < KB {
        format!("{} B", bytes)
    } else if bytes < MB {
        format!("{:.1} KB", bytes as f64 / KB as f64)
    } else if bytes < GB {
        format!("{:.1} MB", bytes as f64 / MB as f64)
    } else {
        format!("{:.1} GB", bytes as f64 / GB as f64)
    }
}
