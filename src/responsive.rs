//! Responsive breakpoint and `srcset`/`sizes` arithmetic.
//!
//! Pure integer math plus string assembly: given an intrinsic image size,
//! pick the variant widths worth generating, then render the `srcset` and
//! `sizes` attributes browsers expect.

/// Device breakpoint widths, ascending. Covers phones through 4K.
pub const DEVICE_WIDTHS: [u32; 8] = [640, 750, 828, 1080, 1200, 1920, 2048, 3840];

/// Fixed-size thumbnail widths, ascending.
pub const THUMB_WIDTHS: [u32; 8] = [16, 32, 48, 64, 96, 128, 256, 384];

/// How an image participates in the page layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layout {
    /// Spans the viewport at every breakpoint.
    FullWidth,
    /// Half the viewport on desktop, full width stacked on mobile.
    Half,
    /// Rendered at a fixed CSS pixel width.
    Fixed(u32),
}

/// Select the variant widths worth generating for an intrinsic width.
///
/// Takes every device breakpoint up to 2x the intrinsic width (retina
/// displays request double density), then caps the list with the first
/// breakpoint at or above the intrinsic width so the full-resolution
/// variant is always available. Upscaling past 2x is never worth the
/// bytes. Always returns at least one entry.
pub fn variant_widths(intrinsic: u32) -> Vec<u32> {
    let ceiling = intrinsic.saturating_mul(2);
    let mut widths: Vec<u32> = DEVICE_WIDTHS
        .iter()
        .copied()
        .filter(|w| *w <= ceiling)
        .collect();

    // Guarantee a variant that covers the intrinsic width itself
    if widths.last().is_none_or(|last| *last < intrinsic) {
        let cover = DEVICE_WIDTHS
            .iter()
            .copied()
            .find(|w| *w >= intrinsic)
            .unwrap_or(DEVICE_WIDTHS[DEVICE_WIDTHS.len() - 1]);
        if widths.last() != Some(&cover) {
            widths.push(cover);
        }
    }

    if widths.is_empty() {
        widths.push(DEVICE_WIDTHS[0]);
    }
    widths
}

/// Aspect-preserving height for a target width, rounded to nearest.
pub fn scaled_height(width: u32, intrinsic_w: u32, intrinsic_h: u32) -> u32 {
    if intrinsic_w == 0 {
        return 0;
    }
    let scaled = u64::from(width) * u64::from(intrinsic_h) + u64::from(intrinsic_w) / 2;
    u32::try_from(scaled / u64::from(intrinsic_w)).unwrap_or(u32::MAX)
}

/// Render a `srcset` attribute from `(url, width)` pairs.
pub fn srcset(entries: impl IntoIterator<Item = (String, u32)>) -> String {
    entries
        .into_iter()
        .map(|(url, width)| format!("{url} {width}w"))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Render the `sizes` attribute for a layout.
pub fn sizes_attribute(layout: Layout) -> String {
    match layout {
        Layout::FullWidth => "100vw".to_string(),
        Layout::Half => "(max-width: 768px) 100vw, 50vw".to_string(),
        Layout::Fixed(px) => format!("{px}px"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_variant_widths_small_image() {
        // 2x ceiling of 200 is 400, below every breakpoint; the first
        // breakpoint covers it
        assert_eq!(variant_widths(200), vec![640]);
    }

    #[test]
    fn test_variant_widths_medium_image() {
        // 800 intrinsic -> ceiling 1600 -> breakpoints through 1200
        assert_eq!(variant_widths(800), vec![640, 750, 828, 1080, 1200]);
    }

    #[test]
    fn test_variant_widths_large_image() {
        // 4K intrinsic keeps the whole table
        assert_eq!(variant_widths(3840).len(), DEVICE_WIDTHS.len());
    }

    #[test]
    fn test_variant_widths_covers_intrinsic() {
        for intrinsic in [100, 640, 700, 1000, 1999, 2500, 5000] {
            let widths = variant_widths(intrinsic);
            assert!(!widths.is_empty());
            let last = *widths.last().unwrap();
            // Either a breakpoint covers the intrinsic width, or the
            // table itself tops out below it
            assert!(
                last >= intrinsic || last == DEVICE_WIDTHS[DEVICE_WIDTHS.len() - 1],
                "intrinsic {intrinsic} got {widths:?}"
            );
        }
    }

    #[test]
    fn test_variant_widths_ascending_and_unique() {
        for intrinsic in [1, 640, 1200, 4000, 10_000] {
            let widths = variant_widths(intrinsic);
            let mut sorted = widths.clone();
            sorted.sort_unstable();
            sorted.dedup();
            assert_eq!(widths, sorted, "intrinsic {intrinsic}");
        }
    }

    #[test]
    fn test_variant_widths_never_exceed_double() {
        let widths = variant_widths(640);
        assert!(widths.iter().all(|w| *w <= 1280));
    }

    #[test]
    fn test_scaled_height() {
        // 16:9 at 1280 wide
        assert_eq!(scaled_height(1280, 1920, 1080), 720);
        // Square stays square
        assert_eq!(scaled_height(100, 500, 500), 100);
        // Rounds to nearest
        assert_eq!(scaled_height(100, 300, 200), 67);
    }

    #[test]
    fn test_scaled_height_zero_width_guard() {
        assert_eq!(scaled_height(100, 0, 100), 0);
    }

    #[test]
    fn test_srcset_shape() {
        let entries = vec![
            ("https://cdn/img.jpg?w=640".to_string(), 640),
            ("https://cdn/img.jpg?w=1200".to_string(), 1200),
        ];
        assert_eq!(
            srcset(entries),
            "https://cdn/img.jpg?w=640 640w, https://cdn/img.jpg?w=1200 1200w"
        );
    }

    #[test]
    fn test_srcset_empty() {
        assert_eq!(srcset(Vec::new()), "");
    }

    #[test]
    fn test_sizes_attribute() {
        assert_eq!(sizes_attribute(Layout::FullWidth), "100vw");
        assert_eq!(
            sizes_attribute(Layout::Half),
            "(max-width: 768px) 100vw, 50vw"
        );
        assert_eq!(sizes_attribute(Layout::Fixed(384)), "384px");
    }

    #[test]
    fn test_thumb_widths_ascending() {
        assert!(THUMB_WIDTHS.windows(2).all(|w| w[0] < w[1]));
    }
}
