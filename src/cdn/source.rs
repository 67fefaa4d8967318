//! Source-path guarding for CDN requests.
//!
//! A source path is interpolated into a provider URL, so it gets the same
//! adversarial-input treatment as a cache key: traversal and absolute-path
//! checks run on the RAW string (encoding first would hide a `..` from any
//! later substring check), the extension allow-list runs last as the cheap
//! "is this even plausibly an image" disambiguator, and only then is the
//! survivor percent-encoded as a single URI component.
//!
//! The dimension guard is an independent companion check: callers apply it
//! before building a URL so an oversized request is refused before any
//! work is spent on it.

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

use crate::error::{SecurityError, ValidationError};

/// Extensions a source must carry (case-insensitive).
pub const ALLOWED_EXTENSIONS: &[&str] =
    &[".jpg", ".jpeg", ".png", ".webp", ".avif", ".gif", ".svg"];

/// Per-axis ceiling for requested dimensions.
pub const MAX_WIDTH: u32 = 10_000;
pub const MAX_HEIGHT: u32 = 10_000;

/// Total pixel budget (40 MP). Stricter than the per-axis caps combined:
/// both axes at their maximum exceed it.
pub const MAX_PIXELS: u64 = 40_000_000;

/// URI-component alphabet: everything but `[A-Za-z0-9-_.!~*'()]` is
/// escaped, controls and NUL included.
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Validate and encode a CDN image source path.
///
/// Checks run in order on the raw string:
/// 1. no `../` or `..\` anywhere (directory traversal);
/// 2. no leading `/` (absolute paths, including protocol-relative `//`);
/// 3. must end in an allowed image extension, case-insensitively.
///
/// The survivor is returned percent-encoded as a single URI component,
/// safe to splice into a path or query segment.
pub fn sanitize_source(source: &str) -> Result<String, SecurityError> {
    if source.contains("../") || source.contains("..\\") {
        return Err(SecurityError::DirectoryTraversal {
            src: source.to_string(),
        });
    }

    if source.starts_with('/') {
        return Err(SecurityError::AbsolutePath {
            src: source.to_string(),
        });
    }

    let lower = source.to_ascii_lowercase();
    if !ALLOWED_EXTENSIONS.iter().any(|ext| lower.ends_with(ext)) {
        return Err(SecurityError::InvalidExtension {
            src: source.to_string(),
        });
    }

    Ok(utf8_percent_encode(source, URI_COMPONENT).to_string())
}

/// Reject oversized dimension requests.
///
/// Each bound raises its own [`ValidationError`] variant so callers can
/// report which ceiling was hit. Width is checked first, then height,
/// then the combined pixel budget.
pub fn validate_dimensions(width: u32, height: u32) -> Result<(), ValidationError> {
    if width > MAX_WIDTH {
        return Err(ValidationError::WidthExceeded {
            width,
            limit: MAX_WIDTH,
        });
    }
    if height > MAX_HEIGHT {
        return Err(ValidationError::HeightExceeded {
            height,
            limit: MAX_HEIGHT,
        });
    }
    let pixels = u64::from(width) * u64::from(height);
    if pixels > MAX_PIXELS {
        return Err(ValidationError::PixelsExceeded {
            pixels,
            limit: MAX_PIXELS,
        });
    }
    Ok(())
}
