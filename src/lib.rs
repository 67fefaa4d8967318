//! Image optimization helpers.
//!
//! Pure, synchronous building blocks for an image delivery pipeline:
//!
//! - [`cache`] — secure cache-key construction (hash gate + filename
//!   sanitizer), safe to feed attacker-controlled filenames.
//! - [`cdn`] — source-path guarding and provider URL assembly.
//! - [`responsive`] — breakpoint/width selection, `srcset`/`sizes` strings.
//! - [`lqip`] — tiny blurred data-URI placeholders and dominant color.
//! - [`format`] / [`quality`] — delivery format detection and encoder
//!   quality profiles.
//!
//! Plus the small utility surface the rest of a frontend build leans on:
//! [`classnames`], [`datetime`], [`object`], and the [`logger`] facade.
//!
//! Nothing here performs I/O or holds state; every function is a
//! deterministic map from its inputs, so callers may invoke anything
//! concurrently without coordination.

pub mod cache;
pub mod cdn;
pub mod classnames;
pub mod datetime;
pub mod error;
pub mod format;
pub mod logger;
pub mod lqip;
pub mod object;
pub mod quality;
pub mod responsive;

pub use cache::{is_valid_cache_hash, sanitize_filename, secure_cache_key};
pub use cdn::{CdnUrlBuilder, TransformOptions, sanitize_source, validate_dimensions};
pub use error::{ConfigError, SecurityError, ValidationError};
pub use format::ImageFormat;
pub use quality::QualityProfile;
