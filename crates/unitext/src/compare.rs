//! Caseless string comparison.
//!
//! Because a codepoint's encoded size can change under folding, a length
//! compare cannot rule out equality; both strings are walked in lock-step,
//! one decoded codepoint per side per step, comparing folded scalars.
//!
//! Malformed input gets its own outcome instead of being conflated with
//! "strings differ": decoding errors surface as [`FoldedCmp::Malformed`] and
//! never as a diagnostic side channel.

use crate::codec::{Decoded, decode_utf16, decode_utf8};
use crate::fold::fold_scalar;

/// Outcome of a caseless comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FoldedCmp {
    /// Both strings reached their end with every folded codepoint equal.
    Equal,
    /// A folded codepoint differed, or one string ended before the other.
    NotEqual,
    /// A decode error on either side; the comparison is undefined. Callers
    /// that only need a boolean should treat this as "not equal".
    Malformed,
}

/// Compares two UTF-8 byte strings under simple case folding.
///
/// # Examples
///
/// ```rust
/// use unitext::{FoldedCmp, folded_compare_utf8};
///
/// assert_eq!(folded_compare_utf8(b"HELLO", b"hello"), FoldedCmp::Equal);
/// // Simple folding does not expand ß to "ss".
/// assert_eq!(
///     folded_compare_utf8("Straße".as_bytes(), "STRASSE".as_bytes()),
///     FoldedCmp::NotEqual
/// );
/// assert_eq!(folded_compare_utf8(&[0xFF], &[0xFF]), FoldedCmp::Malformed);
/// ```
#[must_use]
pub fn folded_compare_utf8(a: &[u8], b: &[u8]) -> FoldedCmp {
    folded_compare_with(a, b, decode_utf8)
}

/// Compares two UTF-16 strings under simple case folding.
#[must_use]
pub fn folded_compare_utf16(a: &[u16], b: &[u16]) -> FoldedCmp {
    folded_compare_with(a, b, decode_utf16)
}

/// Boolean convenience over [`folded_compare_utf8`]: `true` only for
/// [`FoldedCmp::Equal`]. Malformed input compares unequal.
#[must_use]
pub fn folded_eq_utf8(a: &[u8], b: &[u8]) -> bool {
    folded_compare_utf8(a, b) == FoldedCmp::Equal
}

/// Boolean convenience over [`folded_compare_utf16`].
#[must_use]
pub fn folded_eq_utf16(a: &[u16], b: &[u16]) -> bool {
    folded_compare_utf16(a, b) == FoldedCmp::Equal
}

fn folded_compare_with<T, F>(a: &[T], b: &[T], decode: F) -> FoldedCmp
where
    F: Fn(&[T]) -> Option<Decoded>,
{
    let mut i = 0;
    let mut j = 0;
    loop {
        match (decode(&a[i..]), decode(&b[j..])) {
            (None, None) => return FoldedCmp::Equal,
            (None, Some(_)) | (Some(_), None) => return FoldedCmp::NotEqual,
            (Some(da), Some(db)) => {
                let (
                    Decoded::Scalar {
                        value: ca,
                        units: ua,
                    },
                    Decoded::Scalar {
                        value: cb,
                        units: ub,
                    },
                ) = (da, db)
                else {
                    return FoldedCmp::Malformed;
                };
                if fold_scalar(ca) != fold_scalar(cb) {
                    return FoldedCmp::NotEqual;
                }
                i += ua;
                j += ub;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn simple_ascii_case_insensitivity() {
        assert_eq!(folded_compare_utf8(b"HELLO", b"hello"), FoldedCmp::Equal);
        assert!(folded_eq_utf8(b"MiXeD", b"mIxEd"));
        assert_eq!(folded_compare_utf8(b"left", b"right"), FoldedCmp::NotEqual);
    }

    #[test]
    fn sharp_s_does_not_match_double_s() {
        // U+00DF folds to itself under simple folding, so these differ.
        assert_eq!(
            folded_compare_utf8("Straße".as_bytes(), "STRASSE".as_bytes()),
            FoldedCmp::NotEqual
        );
        // The capital sharp s folds down to U+00DF, so this pair matches.
        assert_eq!(
            folded_compare_utf8("STRA\u{1E9E}E".as_bytes(), "straße".as_bytes()),
            FoldedCmp::Equal
        );
    }

    #[test]
    fn prefix_is_not_equal() {
        assert_eq!(folded_compare_utf8(b"abc", b"abcd"), FoldedCmp::NotEqual);
        assert_eq!(folded_compare_utf8(b"abcd", b"abc"), FoldedCmp::NotEqual);
    }

    #[test]
    fn empty_strings_are_equal() {
        assert_eq!(folded_compare_utf8(b"", b""), FoldedCmp::Equal);
        assert_eq!(folded_compare_utf16(&[], &[]), FoldedCmp::Equal);
    }

    #[test]
    fn decode_error_is_distinguishable() {
        assert_eq!(folded_compare_utf8(&[0xFF], b"a"), FoldedCmp::Malformed);
        assert_eq!(folded_compare_utf8(b"a", &[0xE0, 0x80]), FoldedCmp::Malformed);
        assert!(!folded_eq_utf8(&[0xFF], &[0xFF]));
        assert_eq!(
            folded_compare_utf16(&[0xD800], &[0xD800]),
            FoldedCmp::Malformed
        );
    }

    #[test]
    fn utf16_comparison_crosses_planes() {
        // Deseret capital vs small letter, surrogate pairs on both sides.
        assert_eq!(
            folded_compare_utf16(&[0xD801, 0xDC00], &[0xD801, 0xDC28]),
            FoldedCmp::Equal
        );
    }

    #[test]
    fn mixed_length_encodings_compare_equal() {
        // Folding U+023A (2 bytes) meets its 3-byte target U+2C65.
        assert_eq!(
            folded_compare_utf8("\u{23A}".as_bytes(), "\u{2C65}".as_bytes()),
            FoldedCmp::Equal
        );
    }
}
