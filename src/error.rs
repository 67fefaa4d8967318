//! Error types for cache-key construction and CDN input guarding.
//!
//! Three kinds, matching the three classes of rejected input:
//!
//! - [`ConfigError`] — an input to key construction is structurally invalid.
//! - [`SecurityError`] — a source path failed an adversarial-input check.
//! - [`ValidationError`] — a numeric bound was exceeded.
//!
//! Every variant carries enough context to reconstruct why the input was
//! rejected. Failures are raised at the point of detection and never
//! retried or silently recovered: a malformed hash or filename must not
//! fall through to a usable-looking key.

use thiserror::Error;

// ============================================================================
// ConfigError
// ============================================================================

/// An input to cache-key construction is structurally invalid.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// The candidate hash is not a 64-char hex digest.
    #[error(
        "invalid cache hash `{hash}`: expected {expected_length} hex characters, got {hash_length}"
    )]
    InvalidCacheHash {
        hash: String,
        hash_length: usize,
        expected_length: usize,
    },

    /// The filename sanitized down to nothing.
    #[error("filename `{original_filename}` is unusable after sanitization")]
    UnusableFilename { original_filename: String },
}

// ============================================================================
// SecurityError
// ============================================================================

/// A CDN source path failed an adversarial-input check.
///
/// The offending path lives in a field named `src` (a field named
/// `source` would be claimed by the derive as the error's cause);
/// [`SecurityError::source_value`] exposes it regardless of variant.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SecurityError {
    #[error("directory traversal sequence in source `{src}`")]
    DirectoryTraversal { src: String },

    #[error("absolute path rejected for source `{src}`")]
    AbsolutePath { src: String },

    #[error("source `{src}` does not have an allowed image extension")]
    InvalidExtension { src: String },
}

impl SecurityError {
    /// Stable reason tag for structured reporting.
    pub fn reason(&self) -> &'static str {
        match self {
            Self::DirectoryTraversal { .. } => "directory_traversal",
            Self::AbsolutePath { .. } => "absolute_path",
            Self::InvalidExtension { .. } => "invalid_extension",
        }
    }

    /// The offending source string.
    pub fn source_value(&self) -> &str {
        match self {
            Self::DirectoryTraversal { src }
            | Self::AbsolutePath { src }
            | Self::InvalidExtension { src } => src,
        }
    }
}

// ============================================================================
// ValidationError
// ============================================================================

/// A requested dimension exceeds the configured ceiling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("width {width} exceeds maximum of {limit}")]
    WidthExceeded { width: u32, limit: u32 },

    #[error("height {height} exceeds maximum of {limit}")]
    HeightExceeded { height: u32, limit: u32 },

    #[error("pixel count {pixels} exceeds budget of {limit}")]
    PixelsExceeded { pixels: u64, limit: u64 },
}

impl ValidationError {
    /// Stable reason tag for structured reporting.
    pub fn reason(&self) -> &'static str {
        match self {
            Self::WidthExceeded { .. } => "width_exceeded",
            Self::HeightExceeded { .. } => "height_exceeded",
            Self::PixelsExceeded { .. } => "pixels_exceeded",
        }
    }
}
