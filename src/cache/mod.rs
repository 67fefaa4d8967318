//! Secure cache-key construction.
//!
//! An optimized image variant is stored under a key derived from a
//! user-supplied filename and a content hash computed by the caller
//! (content-addressed, so the variant may be cached indefinitely).
//! Both inputs are untrusted: the filename can carry path separators,
//! traversal sequences, control characters, or arbitrary unicode, and a
//! forged "hash" could inject characters into a storage key. The two
//! leaf checks here close both holes before a key is ever assembled.

use std::sync::LazyLock;

use regex::Regex;

use crate::error::ConfigError;

/// Expected digest length (hex-encoded SHA-256).
pub const HASH_LENGTH: usize = 64;

/// Maximum length of a sanitized filename (common filesystem limit).
pub const MAX_FILENAME_LENGTH: usize = 255;

/// 64 hex chars, either case.
static HASH_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9a-fA-F]{64}$").unwrap());

/// Maximal run of characters outside the safe filename alphabet.
static UNSAFE_RUN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^A-Za-z0-9.\-]+").unwrap());

/// Run of two or more dots (traversal sequences, however embedded).
static DOT_RUN_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\.{2,}").unwrap());

// ============================================================================
// Hash validation
// ============================================================================

/// Check that a candidate cache hash is a well-formed 64-char hex digest.
///
/// Total and side-effect free: returns `false` for anything else, never
/// panics.
#[inline]
pub fn is_valid_cache_hash(candidate: &str) -> bool {
    HASH_RE.is_match(candidate)
}

// ============================================================================
// Filename sanitization
// ============================================================================

/// Map an arbitrary string to a filesystem- and shell-safe filename.
///
/// The pipeline runs in a fixed order (the order is what makes the result
/// idempotent and the collapsing behavior exact):
///
/// 1. every maximal run of characters outside `[A-Za-z0-9.-]` becomes a
///    single `_` (a multi-byte sequence collapses to one underscore, not
///    one per code unit);
/// 2. every run of two or more `.` collapses to a single `.`;
/// 3. results longer than 255 chars are truncated with the final `.ext`
///    suffix kept intact;
/// 4. leading/trailing runs of `.` or `-` are stripped.
///
/// Never fails: empty or all-invalid input legitimately sanitizes to `""`
/// or a lone `_`. The caller decides whether an empty result is acceptable.
///
/// Distinct inputs may sanitize to the same output (`"my/file.jpg"` and
/// `"my_file.jpg"` both become `"my_file.jpg"`). That collision is by
/// design: both spellings address the same safe name, and the content hash
/// beside it in the cache key carries the uniqueness.
pub fn sanitize_filename(raw: &str) -> String {
    let collapsed = UNSAFE_RUN_RE.replace_all(raw, "_");
    let dedotted = DOT_RUN_RE.replace_all(&collapsed, ".");
    let truncated = truncate_keeping_extension(&dedotted, MAX_FILENAME_LENGTH);
    truncated
        .trim_matches(|c| c == '.' || c == '-')
        .to_string()
}

/// Truncate to `max` chars, keeping the final `.ext` suffix intact.
///
/// Input is ASCII-only at this point (step 1 of the pipeline), so char
/// and byte indices coincide.
fn truncate_keeping_extension(name: &str, max: usize) -> String {
    if name.len() <= max {
        return name.to_string();
    }
    match name.rfind('.') {
        // Keep the extension only when the stem retains at least one char
        Some(dot) if name.len() - dot < max => {
            let ext = &name[dot..];
            format!("{}{}", &name[..max - ext.len()], ext)
        }
        _ => name[..max].to_string(),
    }
}

// ============================================================================
// Key construction
// ============================================================================

/// Compose a validated cache key: `"{safe_filename}-{hash}"`.
///
/// The hash is gated first — it is the cheaper, more rigid check, and a
/// request with a bad hash is doomed regardless of what the filename
/// sanitizes to. The returned key embeds the original validated hash
/// string, not a re-derived one.
///
/// Deterministic: equal inputs always produce equal keys, which is what
/// makes cache hits possible.
pub fn secure_cache_key(filename: &str, hash: &str) -> Result<String, ConfigError> {
    if !is_valid_cache_hash(hash) {
        return Err(ConfigError::InvalidCacheHash {
            hash: hash.to_string(),
            hash_length: hash.len(),
            expected_length: HASH_LENGTH,
        });
    }

    let safe_filename = sanitize_filename(filename);
    if safe_filename.is_empty() {
        return Err(ConfigError::UnusableFilename {
            original_filename: filename.to_string(),
        });
    }

    Ok(format!("{safe_filename}-{hash}"))
}
