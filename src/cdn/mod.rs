//! CDN input guarding and URL assembly.
//!
//! [`source`] rejects hostile source paths before they ever reach a URL
//! template; [`url`] composes the guarded pieces into a provider request.

pub mod source;
pub mod url;

pub use source::{
    ALLOWED_EXTENSIONS, MAX_HEIGHT, MAX_PIXELS, MAX_WIDTH, sanitize_source, validate_dimensions,
};
pub use url::{CdnError, CdnUrlBuilder, TransformOptions};
