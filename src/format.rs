//! Image format detection and MIME mapping.
//!
//! Detection comes in three flavors, cheapest first: file extension,
//! magic-byte sniffing, and HTTP `Accept` negotiation for picking the
//! best delivery format a client supports.

use std::path::Path;

use serde::{Deserialize, Serialize};

/// Delivery formats the optimizer understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImageFormat {
    Jpeg,
    Png,
    WebP,
    Avif,
    Gif,
    Svg,
}

impl ImageFormat {
    /// Detect from a file extension (without or with leading dot).
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.trim_start_matches('.').to_ascii_lowercase().as_str() {
            "jpg" | "jpeg" => Some(Self::Jpeg),
            "png" => Some(Self::Png),
            "webp" => Some(Self::WebP),
            "avif" => Some(Self::Avif),
            "gif" => Some(Self::Gif),
            "svg" => Some(Self::Svg),
            _ => None,
        }
    }

    /// Detect from a file path's extension.
    pub fn from_path(path: &Path) -> Option<Self> {
        path.extension()
            .and_then(|e| e.to_str())
            .and_then(Self::from_extension)
    }

    /// Sniff from leading bytes.
    ///
    /// Recognizes the JPEG SOI marker, PNG signature, GIF87a/89a, RIFF
    /// WEBP, ISO-BMFF `ftypavif`, and SVG documents (with or without an
    /// XML prolog). Returns `None` for anything unrecognized.
    pub fn sniff(bytes: &[u8]) -> Option<Self> {
        if bytes.starts_with(&[0xFF, 0xD8, 0xFF]) {
            return Some(Self::Jpeg);
        }
        if bytes.starts_with(&[0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A]) {
            return Some(Self::Png);
        }
        if bytes.starts_with(b"GIF87a") || bytes.starts_with(b"GIF89a") {
            return Some(Self::Gif);
        }
        if bytes.len() >= 12 && bytes.starts_with(b"RIFF") && &bytes[8..12] == b"WEBP" {
            return Some(Self::WebP);
        }
        // ISO-BMFF: box size (4 bytes), "ftyp", then the brand
        if bytes.len() >= 12 && &bytes[4..8] == b"ftyp" && &bytes[8..12] == b"avif" {
            return Some(Self::Avif);
        }
        // SVG is text; tolerate an XML prolog and leading whitespace
        let head = &bytes[..bytes.len().min(512)];
        if let Ok(text) = std::str::from_utf8(head) {
            let trimmed = text.trim_start();
            if trimmed.starts_with("<svg") || (trimmed.starts_with("<?xml") && text.contains("<svg"))
            {
                return Some(Self::Svg);
            }
        }
        None
    }

    /// Pick the best delivery format from an HTTP `Accept` header.
    ///
    /// Preference order is compression efficiency: AVIF, then WebP, then
    /// the universally supported JPEG fallback.
    pub fn negotiate(accept: &str) -> Self {
        if accept.contains("image/avif") {
            Self::Avif
        } else if accept.contains("image/webp") {
            Self::WebP
        } else {
            Self::Jpeg
        }
    }

    /// MIME type for a `Content-Type` header.
    pub const fn mime(self) -> &'static str {
        match self {
            Self::Jpeg => "image/jpeg",
            Self::Png => "image/png",
            Self::WebP => "image/webp",
            Self::Avif => "image/avif",
            Self::Gif => "image/gif",
            Self::Svg => "image/svg+xml",
        }
    }

    /// Canonical file extension (no dot).
    pub const fn extension(self) -> &'static str {
        match self {
            Self::Jpeg => "jpg",
            Self::Png => "png",
            Self::WebP => "webp",
            Self::Avif => "avif",
            Self::Gif => "gif",
            Self::Svg => "svg",
        }
    }

    /// Whether the format is raster (LQIP and resizing apply).
    pub const fn is_raster(self) -> bool {
        !matches!(self, Self::Svg)
    }
}
