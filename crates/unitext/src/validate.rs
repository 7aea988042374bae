//! UTF-8 validation and repair.
//!
//! Validation uses the codec's structural rules — recognized lead patterns
//! and `10xxxxxx` continuation bytes — without assembling scalars. Repair
//! replaces each malformed region with the replacement character so that
//! downstream text processing never has to handle invalid UTF-8 itself.

use alloc::borrow::Cow;
use alloc::vec::Vec;

use crate::codec::REPLACEMENT_UTF8;

/// Result of scanning a buffer for malformed UTF-8.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Validation {
    /// `false` when at least one substitution would occur on repair.
    pub is_valid: bool,
    /// Byte length of the repaired copy: valid sequences contribute their
    /// own length, each malformed region contributes the 3-byte replacement.
    pub repaired_len: usize,
}

/// Scans `utf8` and computes whether (and how large) a repaired copy would
/// be.
#[must_use]
pub fn validate(utf8: &[u8]) -> Validation {
    let mut is_valid = true;
    let mut repaired_len = 0;
    let mut i = 0;
    while let Some(&lead) = utf8.get(i) {
        i += 1;
        if lead & 0x80 == 0 {
            repaired_len += 1;
            continue;
        }
        let Some(extra) = lead_extra(lead) else {
            repaired_len += REPLACEMENT_UTF8.len();
            is_valid = false;
            continue;
        };
        let mut good = 0;
        while good < extra && utf8.get(i).is_some_and(|&u| u & 0xC0 == 0x80) {
            i += 1;
            good += 1;
        }
        if good == extra {
            repaired_len += 1 + extra;
        } else {
            repaired_len += REPLACEMENT_UTF8.len();
            is_valid = false;
        }
    }
    Validation {
        is_valid,
        repaired_len,
    }
}

/// Returns `utf8` with every malformed region replaced by the replacement
/// character.
///
/// Already-valid input is returned borrowed and unchanged; otherwise a fresh
/// buffer of exactly the validated length is built. Valid sequences are
/// copied verbatim, so a truncated multi-byte tail loses only the truncated
/// bytes.
#[must_use]
pub fn repair(utf8: &[u8]) -> Cow<'_, [u8]> {
    let check = validate(utf8);
    if check.is_valid {
        Cow::Borrowed(utf8)
    } else {
        Cow::Owned(rebuild(utf8, check.repaired_len))
    }
}

/// Builds the repaired copy. `repaired_len` must come from [`validate`] on
/// the same buffer.
pub(crate) fn rebuild(utf8: &[u8], repaired_len: usize) -> Vec<u8> {
    let mut out = Vec::with_capacity(repaired_len);
    let mut i = 0;
    while let Some(&lead) = utf8.get(i) {
        if lead & 0x80 == 0 {
            out.push(lead);
            i += 1;
            continue;
        }
        let start = i;
        i += 1;
        let Some(extra) = lead_extra(lead) else {
            out.extend_from_slice(&REPLACEMENT_UTF8);
            continue;
        };
        let mut good = 0;
        while good < extra && utf8.get(i).is_some_and(|&u| u & 0xC0 == 0x80) {
            i += 1;
            good += 1;
        }
        if good == extra {
            out.extend_from_slice(&utf8[start..i]);
        } else {
            out.extend_from_slice(&REPLACEMENT_UTF8);
        }
    }
    debug_assert_eq!(out.len(), repaired_len);
    out
}

fn lead_extra(lead: u8) -> Option<usize> {
    if lead & 0xE0 == 0xC0 {
        Some(1)
    } else if lead & 0xF0 == 0xE0 {
        Some(2)
    } else if lead & 0xF8 == 0xF0 {
        Some(3)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use alloc::borrow::Cow;

    use bstr::ByteSlice;

    use super::*;

    #[test]
    fn valid_input_is_returned_borrowed() {
        let input = "héllo \u{1F600}".as_bytes();
        let check = validate(input);
        assert!(check.is_valid);
        assert_eq!(check.repaired_len, input.len());
        assert!(matches!(repair(input), Cow::Borrowed(_)));
    }

    #[test]
    fn bad_lead_is_replaced() {
        let out = repair(&[b'a', 0xFF, b'b']);
        assert_eq!(out.as_bstr(), b"a\xEF\xBF\xBDb".as_bstr());
        assert_eq!(validate(&[b'a', 0xFF, b'b']).repaired_len, 5);
    }

    #[test]
    fn short_continuation_run_is_replaced_once() {
        // 3-byte lead with one good continuation, then an ASCII byte: the
        // region becomes one replacement and scanning resumes at the ASCII
        // byte.
        let out = repair(&[0xE2, 0x82, b'x']);
        assert_eq!(out.as_bstr(), b"\xEF\xBF\xBDx".as_bstr());
    }

    #[test]
    fn truncated_tail_preserves_valid_prefix() {
        let mut input = "prefix é".as_bytes().to_vec();
        input.extend_from_slice(&[0xF0, 0x90, 0x8D]); // truncated 4-byte sequence
        let out = repair(&input);
        let mut expected = "prefix é".as_bytes().to_vec();
        expected.extend_from_slice(&REPLACEMENT_UTF8);
        assert_eq!(out.as_bstr(), expected.as_bstr());
    }

    #[test]
    fn structurally_valid_overlong_forms_pass() {
        // Validation is structural only; overlong and surrogate encodings
        // survive untouched and surface later, at encode time.
        let check = validate(&[0xC0, 0x80]);
        assert!(check.is_valid);
        assert_eq!(check.repaired_len, 2);
    }

    #[test]
    fn empty_input_is_valid() {
        assert_eq!(validate(&[]), Validation {
            is_valid: true,
            repaired_len: 0
        });
    }
}
