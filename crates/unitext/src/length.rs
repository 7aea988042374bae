//! Exact output-length precomputation for whole-string recodes.
//!
//! Each function is a single forward scan that predicts, without allocating,
//! the unit count the corresponding recode will produce under the
//! replacement-character substitution policy. The recoders treat a mismatch
//! between this prediction and their actual output as an internal contract
//! violation ([`Status::InternalError`]), so the walks here must agree with
//! [`decode_utf8`]/[`decode_utf16`] step for step — including the asymmetric
//! edge where a malformed 4-byte lead contributes a single UTF-16 unit, not
//! two.
//!
//! [`Status::InternalError`]: crate::Status::InternalError
//! [`decode_utf8`]: crate::decode_utf8
//! [`decode_utf16`]: crate::decode_utf16

use crate::codec::{Decoded, decode_utf16};

/// Splits a lead byte into its continuation count and payload bits, or
/// `None` when it matches no valid pattern.
fn split_lead(lead: u8) -> Option<(usize, u32)> {
    if lead & 0xE0 == 0xC0 {
        Some((1, u32::from(lead & 0x1F)))
    } else if lead & 0xF0 == 0xE0 {
        Some((2, u32::from(lead & 0x0F)))
    } else if lead & 0xF8 == 0xF0 {
        Some((3, u32::from(lead & 0x07)))
    } else {
        None
    }
}

/// Number of UTF-32 units (codepoints) `utf8` recodes to.
///
/// Every malformed lead byte and every short continuation run contributes
/// exactly one unit — the substitution codepoint — and scanning resumes at
/// the next unconsumed byte.
#[must_use]
pub fn utf32_len(utf8: &[u8]) -> usize {
    let mut len = 0;
    let mut i = 0;
    while let Some(&lead) = utf8.get(i) {
        i += 1;
        len += 1;
        if lead & 0x80 == 0 {
            continue;
        }
        let Some((extra, _)) = split_lead(lead) else {
            continue; // bad lead: one substitution codepoint
        };
        let mut good = 0;
        while good < extra && utf8.get(i).is_some_and(|&u| u & 0xC0 == 0x80) {
            i += 1;
            good += 1;
        }
    }
    len
}

/// Number of UTF-16 units `utf8` recodes to.
///
/// A valid 4-byte sequence contributes 2 units only when its assembled
/// scalar is a supplementary-plane character; overlong 4-byte forms
/// re-encode into a single unit and out-of-range payloads substitute a
/// single U+FFFD unit. A malformed 4-byte lead whose continuation run fails
/// likewise contributes only 1 unit: the would-be second surrogate unit is
/// never emitted.
#[must_use]
pub fn utf16_len(utf8: &[u8]) -> usize {
    let mut len = 0;
    let mut i = 0;
    while let Some(&lead) = utf8.get(i) {
        i += 1;
        if lead & 0x80 == 0 {
            len += 1;
            continue;
        }
        let Some((extra, payload)) = split_lead(lead) else {
            len += 1; // bad lead: one substituted unit
            continue;
        };
        let mut good = 0;
        let mut value = payload;
        while good < extra {
            let Some(&unit) = utf8.get(i) else { break };
            if unit & 0xC0 != 0x80 {
                break;
            }
            value = (value << 6) | u32::from(unit & 0x3F);
            i += 1;
            good += 1;
        }
        if good == extra && (0x10000..=0x10FFFF).contains(&value) {
            len += 2;
        } else {
            len += 1;
        }
    }
    len
}

/// Number of UTF-8 bytes `utf16` recodes to.
///
/// Valid scalars contribute 1/2/3/4 bytes at the standard boundary
/// thresholds; any decode error contributes 3, the length of the replacement
/// character's encoding.
#[must_use]
pub fn utf8_len(utf16: &[u16]) -> usize {
    let mut len = 0;
    let mut i = 0;
    while let Some(decoded) = decode_utf16(&utf16[i..]) {
        match decoded {
            Decoded::Scalar { value, units } => {
                len += utf8_width(value);
                i += units;
            }
            Decoded::Malformed { skip, .. } => {
                len += 3;
                i += skip;
            }
        }
    }
    len
}

/// Byte length of one scalar's UTF-8 encoding, replacement length for
/// out-of-range values.
pub(crate) fn utf8_width(scalar: u32) -> usize {
    if scalar < 0x80 {
        1
    } else if scalar < 0x800 {
        2
    } else if scalar < 0x10000 {
        3
    } else if scalar <= 0x10FFFF {
        4
    } else {
        3
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ascii_counts_bytes() {
        assert_eq!(utf32_len(b"hello"), 5);
        assert_eq!(utf16_len(b"hello"), 5);
    }

    #[test]
    fn surrogate_pair_character_counts_two_utf16_units() {
        let smile = "\u{1F600}".as_bytes();
        assert_eq!(utf16_len(smile), 2);
        assert_eq!(utf32_len(smile), 1);
    }

    #[test]
    fn malformed_four_byte_lead_counts_one_unit() {
        // One complete supplementary-plane character, then a 4-byte lead
        // whose continuation run fails: 2 + 1 units, never 2 + 2.
        let mut buf = "\u{1F600}".as_bytes().to_vec();
        buf.extend_from_slice(&[0xF0, 0x90, 0x41]);
        assert_eq!(utf16_len(&buf), 2 + 1 + 1); // pair + substitution + 'A'
    }

    #[test]
    fn bad_lead_counts_one_unit_each() {
        assert_eq!(utf32_len(&[0xFF, 0xFE, b'a']), 3);
        assert_eq!(utf16_len(&[0xFF, 0xFE, b'a']), 3);
    }

    #[test]
    fn overlong_four_byte_form_counts_one_unit() {
        // F0 80 81 81 assembles to U+0041: it re-encodes into a single
        // UTF-16 unit, and the estimate must say so.
        assert_eq!(utf16_len(&[0xF0, 0x80, 0x81, 0x81]), 1);
        // F5-lead payloads land above U+10FFFF and substitute one unit.
        assert_eq!(utf16_len(&[0xF5, 0x90, 0x80, 0x80]), 1);
    }

    #[test]
    fn utf8_len_follows_thresholds() {
        assert_eq!(utf8_len(&[0x41]), 1);
        assert_eq!(utf8_len(&[0xE9]), 2);
        assert_eq!(utf8_len(&[0x20AC]), 3); // €
        assert_eq!(utf8_len(&[0xD83D, 0xDE00]), 4);
    }

    #[test]
    fn unpaired_surrogate_counts_replacement_length() {
        assert_eq!(utf8_len(&[0xD800, 0x41]), 3 + 1);
        assert_eq!(utf8_len(&[0xDC00]), 3);
    }

    #[test]
    fn truncated_tail_counts_one_substitution() {
        assert_eq!(utf32_len(&[b'a', 0xE2, 0x82]), 2);
        assert_eq!(utf16_len(&[b'a', 0xE2, 0x82]), 2);
    }
}
