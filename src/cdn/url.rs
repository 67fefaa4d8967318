//! Provider URL assembly.
//!
//! Guards run first, assembly second: a request URL only ever exists for
//! inputs that already passed the dimension guard and the source-path
//! guard. The builder itself performs no network I/O.

use thiserror::Error;
use url::Url;

use super::source::{sanitize_source, validate_dimensions};
use crate::error::{SecurityError, ValidationError};
use crate::format::ImageFormat;

/// Default encoder quality when the caller does not pick one.
const DEFAULT_QUALITY: u8 = 75;

/// Failure to build a CDN request URL.
///
/// Guard failures pass through untranslated so callers keep their
/// structured context.
#[derive(Debug, Error)]
pub enum CdnError {
    #[error("invalid CDN base URL")]
    InvalidBase(#[from] url::ParseError),

    #[error(transparent)]
    Security(#[from] SecurityError),

    #[error(transparent)]
    Validation(#[from] ValidationError),
}

/// Requested transformation for a single image variant.
#[derive(Debug, Clone, Copy, Default)]
pub struct TransformOptions {
    /// Target width. Always present: the responsive pipeline supplies one
    /// for every variant, and a URL without a width defeats the optimizer.
    pub width: u32,
    pub height: Option<u32>,
    /// Encoder quality 1..=100; falls back to the builder default.
    pub quality: Option<u8>,
    /// Delivery format override (`fm` parameter).
    pub format: Option<ImageFormat>,
}

impl TransformOptions {
    pub fn width(width: u32) -> Self {
        Self {
            width,
            ..Self::default()
        }
    }
}

/// Builds provider request URLs of the form
/// `{base}/{encoded_source}?w=&h=&q=&fm=`.
#[derive(Debug, Clone)]
pub struct CdnUrlBuilder {
    base: Url,
    default_quality: u8,
}

impl CdnUrlBuilder {
    /// Create a builder from an absolute base URL.
    pub fn new(base: &str) -> Result<Self, CdnError> {
        let base = Url::parse(base)?;
        Ok(Self {
            base,
            default_quality: DEFAULT_QUALITY,
        })
    }

    /// Override the default encoder quality.
    pub fn with_default_quality(mut self, quality: u8) -> Self {
        self.default_quality = quality;
        self
    }

    /// Build the request URL for one variant.
    ///
    /// Dimension guard runs first (cheapest, pure arithmetic), then the
    /// source-path guard; only validated inputs reach the URL template.
    pub fn build(&self, source: &str, opts: &TransformOptions) -> Result<String, CdnError> {
        validate_dimensions(opts.width, opts.height.unwrap_or(0))?;
        let encoded = sanitize_source(source)?;

        let mut url = self.base.clone();
        // The source is already encoded as a single component; splice it
        // in textually so `%2F` is not re-escaped.
        let path = format!("{}/{}", url.path().trim_end_matches('/'), encoded);
        url.set_path(&path);

        {
            let mut query = url.query_pairs_mut();
            query.append_pair("w", &opts.width.to_string());
            if let Some(height) = opts.height {
                query.append_pair("h", &height.to_string());
            }
            let quality = opts.quality.unwrap_or(self.default_quality);
            query.append_pair("q", &quality.to_string());
            if let Some(format) = opts.format {
                query.append_pair("fm", format.extension());
            }
        }

        Ok(url.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn builder() -> CdnUrlBuilder {
        CdnUrlBuilder::new("https://images.example.com/v1").unwrap()
    }

    #[test]
    fn test_rejects_relative_base() {
        assert!(matches!(
            CdnUrlBuilder::new("not a url"),
            Err(CdnError::InvalidBase(_))
        ));
    }

    #[test]
    fn test_builds_minimal_url() {
        let url = builder()
            .build("hero.webp", &TransformOptions::width(800))
            .unwrap();
        assert_eq!(url, "https://images.example.com/v1/hero.webp?w=800&q=75");
    }

    #[test]
    fn test_builds_full_url() {
        let opts = TransformOptions {
            width: 1200,
            height: Some(630),
            quality: Some(60),
            format: Some(ImageFormat::Avif),
        };
        let url = builder().build("og/card.png", &opts).unwrap();
        assert_eq!(
            url,
            "https://images.example.com/v1/og%2Fcard.png?w=1200&h=630&q=60&fm=avif"
        );
    }

    #[test]
    fn test_default_quality_override() {
        let url = builder()
            .with_default_quality(85)
            .build("a.jpg", &TransformOptions::width(640))
            .unwrap();
        assert!(url.ends_with("q=85"));
    }

    #[test]
    fn test_security_error_passes_through() {
        let err = builder()
            .build("../../etc/passwd.png", &TransformOptions::width(640))
            .unwrap_err();
        match err {
            CdnError::Security(e) => assert_eq!(e.reason(), "directory_traversal"),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_validation_error_passes_through() {
        let err = builder()
            .build("a.jpg", &TransformOptions::width(20_000))
            .unwrap_err();
        match err {
            CdnError::Validation(e) => assert_eq!(e.reason(), "width_exceeded"),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_guards_run_before_assembly() {
        // Oversized dimensions refuse even a hostile source before the
        // source guard would have reported it
        let err = builder()
            .build("/etc/passwd", &TransformOptions::width(20_000))
            .unwrap_err();
        assert!(matches!(err, CdnError::Validation(_)));
    }

    #[test]
    fn test_source_with_space_is_encoded() {
        let url = builder()
            .build("my image.jpg", &TransformOptions::width(640))
            .unwrap();
        assert!(url.contains("my%20image.jpg"));
        assert!(!url.contains(' '));
    }
}
