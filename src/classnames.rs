//! className merging.
//!
//! Joins class fragments into a single attribute value: whitespace-split,
//! empties dropped, duplicates deduped with the LAST occurrence winning
//! (callers append overrides at the end of the list, so later fragments
//! take precedence).

use rustc_hash::FxHashSet;

/// Merge class fragments into one class attribute value.
///
/// Each fragment may itself contain several whitespace-separated classes.
/// Order of first appearance is preserved except that a repeated class
/// moves to the position of its last occurrence.
pub fn cn(parts: &[&str]) -> String {
    let tokens: Vec<&str> = parts
        .iter()
        .flat_map(|part| part.split_whitespace())
        .collect();

    // Walk backwards keeping the last occurrence of each class, then
    // restore order.
    let mut seen = FxHashSet::default();
    let mut kept: Vec<&str> = tokens
        .iter()
        .rev()
        .filter(|token| seen.insert(**token))
        .copied()
        .collect();
    kept.reverse();

    kept.join(" ")
}

/// Build a class attribute from fragments and conditional arms.
///
/// ```
/// use imgopt::classes;
///
/// let active = true;
/// let cls = classes!["btn", "btn-lg", active => "btn-active"];
/// assert_eq!(cls, "btn btn-lg btn-active");
/// ```
#[macro_export]
macro_rules! classes {
    ($($rest:tt)*) => {{
        // Empty invocations never push, so the binding stays unmutated
        #[allow(unused_mut)]
        let mut parts: Vec<&str> = Vec::new();
        $crate::__classes_inner!(parts; $($rest)*);
        $crate::classnames::cn(&parts)
    }};
}

#[doc(hidden)]
#[macro_export]
macro_rules! __classes_inner {
    ($parts:ident;) => {};
    ($parts:ident; $cond:expr => $class:expr $(, $($rest:tt)*)?) => {
        if $cond {
            $parts.push($class);
        }
        $crate::__classes_inner!($parts; $($($rest)*)?);
    };
    ($parts:ident; $class:expr $(, $($rest:tt)*)?) => {
        $parts.push($class);
        $crate::__classes_inner!($parts; $($($rest)*)?);
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cn_joins_fragments() {
        assert_eq!(cn(&["btn", "btn-primary"]), "btn btn-primary");
    }

    #[test]
    fn test_cn_drops_empties_and_extra_whitespace() {
        assert_eq!(cn(&["", "  a   b ", ""]), "a b");
        assert_eq!(cn(&[]), "");
    }

    #[test]
    fn test_cn_dedupes_last_wins() {
        // The repeated class keeps its LAST position
        assert_eq!(cn(&["a b", "c", "a"]), "b c a");
        assert_eq!(cn(&["x x x"]), "x");
    }

    #[test]
    fn test_cn_fragments_with_multiple_classes() {
        assert_eq!(cn(&["flex items-center", "gap-2"]), "flex items-center gap-2");
    }

    #[test]
    fn test_classes_macro_plain() {
        assert_eq!(classes!["a", "b"], "a b");
    }

    #[test]
    fn test_classes_macro_conditional() {
        let on = true;
        let off = false;
        assert_eq!(
            classes!["base", on => "shown", off => "hidden", "tail"],
            "base shown tail"
        );
    }

    #[test]
    fn test_classes_macro_empty() {
        assert_eq!(classes![], "");
    }
}
