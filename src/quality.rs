//! Encoder quality profiles.
//!
//! A profile names an intent (thumbnail strip, hover preview, main
//! content, hero/print) and maps to a per-format quality number. AVIF
//! numbers run lower than JPEG/WebP for visually comparable output, so
//! each format gets its own column rather than one shared knob.

use serde::{Deserialize, Serialize};

use crate::format::ImageFormat;

/// Named quality tier for an optimized variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QualityProfile {
    /// Grid thumbnails; smallest acceptable.
    Thumbnail,
    /// Inline previews and cards.
    Preview,
    /// Main content images.
    Standard,
    /// Hero images and anything pixel-peeped.
    High,
}

impl QualityProfile {
    /// Encoder quality (1..=100) for the given delivery format.
    ///
    /// SVG is vector and has no encoder quality; it reports the column
    /// maximum so callers can pass the value through uniformly.
    pub const fn quality_for(self, format: ImageFormat) -> u8 {
        match format {
            ImageFormat::Avif => match self {
                Self::Thumbnail => 35,
                Self::Preview => 45,
                Self::Standard => 55,
                Self::High => 70,
            },
            ImageFormat::WebP => match self {
                Self::Thumbnail => 50,
                Self::Preview => 65,
                Self::Standard => 75,
                Self::High => 88,
            },
            ImageFormat::Jpeg | ImageFormat::Png | ImageFormat::Gif => match self {
                Self::Thumbnail => 55,
                Self::Preview => 70,
                Self::Standard => 80,
                Self::High => 92,
            },
            ImageFormat::Svg => 100,
        }
    }
}

impl Default for QualityProfile {
    fn default() -> Self {
        Self::Standard
    }
}
