//! LQIP (Low Quality Image Placeholder) generation.
//!
//! A placeholder is a few hundred bytes of PNG inlined as a data URI and
//! stretched over the real image's box while it loads; the browser's own
//! upscaling provides the blur. Full-asset decoding and re-encoding stays
//! with the caller — this module only shrinks an already-decoded image.

use std::io::Cursor;

use base64::Engine;
use base64::engine::general_purpose::STANDARD as BASE64;
use image::imageops::FilterType;
use image::{DynamicImage, GenericImageView, ImageFormat};
use thiserror::Error;

/// Longest side of a generated placeholder, in pixels.
pub const PLACEHOLDER_SIZE: u32 = 16;

/// Failure to encode a placeholder.
#[derive(Debug, Error)]
pub enum LqipError {
    #[error("placeholder encoding failed")]
    Encode(#[from] image::ImageError),

    #[error("source image has a zero dimension")]
    EmptyImage,
}

/// Encode a tiny preview of `img` as a `data:image/png;base64,…` URI.
///
/// The longest side is downscaled to [`PLACEHOLDER_SIZE`] with a triangle
/// filter (cheap, and any ringing disappears under the upscale blur).
/// Images already at or below the placeholder size are encoded as-is.
pub fn placeholder_data_uri(img: &DynamicImage) -> Result<String, LqipError> {
    let (w, h) = img.dimensions();
    if w == 0 || h == 0 {
        return Err(LqipError::EmptyImage);
    }

    let tiny = if w <= PLACEHOLDER_SIZE && h <= PLACEHOLDER_SIZE {
        img.clone()
    } else {
        img.resize(PLACEHOLDER_SIZE, PLACEHOLDER_SIZE, FilterType::Triangle)
    };

    let mut png = Vec::new();
    tiny.write_to(&mut Cursor::new(&mut png), ImageFormat::Png)?;

    Ok(format!(
        "data:image/png;base64,{}",
        BASE64.encode(&png)
    ))
}

/// Average color of the image as a `#rrggbb` CSS literal.
///
/// Averaged over a downsampled grid rather than every pixel, which is
/// indistinguishable for a solid-color placeholder and much cheaper on
/// large sources.
pub fn dominant_color(img: &DynamicImage) -> String {
    let sample = img.resize_exact(8, 8, FilterType::Triangle).to_rgb8();

    let (mut r, mut g, mut b) = (0u32, 0u32, 0u32);
    for pixel in sample.pixels() {
        r += u32::from(pixel[0]);
        g += u32::from(pixel[1]);
        b += u32::from(pixel[2]);
    }
    let n = sample.width() * sample.height();

    format!("#{:02x}{:02x}{:02x}", r / n, g / n, b / n)
}
