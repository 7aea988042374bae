//! Alphabetic-content detection.
//!
//! Classification is limited to the Basic Multilingual Plane: codepoints at
//! or above U+10000 are never reported as alphabetic. This mirrors the
//! wide-character classifiers the engine replaces and is a documented
//! limitation, not one to silently widen.

use crate::codec::{Decoded, decode_utf8};

/// Returns `true` when the UTF-8 string contains at least one alphabetic
/// codepoint.
///
/// ASCII letters are detected by range check; other codepoints decode and
/// classify only within the BMP. A malformed sequence stops the scan with
/// `false`.
#[must_use]
pub fn has_alpha_utf8(utf8: &[u8]) -> bool {
    let mut i = 0;
    while let Some(&byte) = utf8.get(i) {
        if byte & 0x80 == 0 {
            if byte.is_ascii_alphabetic() {
                return true;
            }
            i += 1;
            continue;
        }
        match decode_utf8(&utf8[i..]) {
            Some(Decoded::Scalar { value, units }) => {
                if value <= 0xFFFF && char::from_u32(value).is_some_and(char::is_alphabetic) {
                    return true;
                }
                i += units;
            }
            _ => return false,
        }
    }
    false
}

/// Returns `true` when the UTF-16 string contains at least one alphabetic
/// BMP codepoint.
///
/// The walk is unit by unit: surrogate halves — and therefore every
/// supplementary-plane character — never classify as alphabetic.
#[must_use]
pub fn has_alpha_utf16(units: &[u16]) -> bool {
    units.iter().any(|&unit| {
        if unit < 0x80 {
            (unit as u8).is_ascii_alphabetic()
        } else if unit & 0xF800 == 0xD800 {
            false
        } else {
            char::from_u32(u32::from(unit)).is_some_and(char::is_alphabetic)
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn digits_and_punctuation_are_not_alphabetic() {
        assert!(!has_alpha_utf8(b"123!?"));
        assert!(!has_alpha_utf16(&[0x31, 0x32, 0x21]));
    }

    #[test]
    fn a_single_letter_suffices() {
        assert!(has_alpha_utf8(b"a1"));
        assert!(has_alpha_utf8("12é".as_bytes()));
        assert!(has_alpha_utf16(&[0x31, 0x3B1])); // "1α"
    }

    #[test]
    fn supplementary_plane_letters_are_not_reported() {
        // U+10400 is alphabetic, but classification stops at the BMP; this
        // limitation is deliberate and load-bearing for callers.
        assert!(!has_alpha_utf8("\u{10400}".as_bytes()));
        assert!(!has_alpha_utf16(&[0xD801, 0xDC00]));
    }

    #[test]
    fn malformed_input_stops_the_scan() {
        assert!(!has_alpha_utf8(&[0xFF, b'a']));
    }

    #[test]
    fn empty_input_has_no_alpha() {
        assert!(!has_alpha_utf8(b""));
        assert!(!has_alpha_utf16(&[]));
    }
}
