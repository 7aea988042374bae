//! Whole-string recoding between UTF-8 and UTF-16.
//!
//! Output is preallocated from the length estimator and filled through the
//! preallocated-path encoders. The final status separates three worlds:
//! clean input, input that needed substitutions, and a disagreement between
//! the estimate and the produced length — the last one is a defect in this
//! crate, never a property of the input, and is reported distinctly so it is
//! impossible to mistake for ordinary malformed-input recovery.

use alloc::vec::Vec;

use crate::codec::{
    Decoded, REPLACEMENT, REPLACEMENT_UTF8, decode_utf16, decode_utf8, encode_utf8_exact,
    encode_utf16_exact,
};
use crate::length::{utf8_len, utf16_len};

/// Outcome of a string-level recode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// No malformed input found; produced length equals the precomputed
    /// estimate.
    Ok,
    /// Malformed input was substituted with U+FFFD, but the output length
    /// still matches the estimate.
    ConversionError,
    /// Produced length disagrees with the estimate: an estimator/recoder
    /// contract violation.
    InternalError,
}

/// Recodes a UTF-8 byte string to UTF-16.
///
/// Every malformed region becomes one U+FFFD unit; structurally valid
/// sequences whose scalar is out of range substitute at encode time.
///
/// # Examples
///
/// ```rust
/// use unitext::{Status, utf8_to_utf16};
///
/// let (wide, status) = utf8_to_utf16("a\u{1F600}".as_bytes());
/// assert_eq!(wide, [0x61, 0xD83D, 0xDE00]);
/// assert_eq!(status, Status::Ok);
///
/// let (wide, status) = utf8_to_utf16(&[0x61, 0xFF]);
/// assert_eq!(wide, [0x61, 0xFFFD]);
/// assert_eq!(status, Status::ConversionError);
/// ```
#[must_use]
pub fn utf8_to_utf16(utf8: &[u8]) -> (Vec<u16>, Status) {
    let expected = utf16_len(utf8);
    let mut out = Vec::with_capacity(expected);
    let mut clean = true;
    let mut i = 0;
    while let Some(decoded) = decode_utf8(&utf8[i..]) {
        match decoded {
            Decoded::Scalar { value, units } => {
                let mut pair = [0u16; 2];
                let enc = encode_utf16_exact(value, &mut pair);
                if enc.substituted {
                    clean = false;
                }
                out.extend_from_slice(&pair[..enc.units]);
                i += units;
            }
            Decoded::Malformed { skip, .. } => {
                out.push(REPLACEMENT as u16);
                i += skip;
                clean = false;
            }
        }
    }
    let status = settle(out.len(), expected, clean);
    (out, status)
}

/// Recodes a UTF-16 string to UTF-8.
///
/// Decode errors and out-of-range scalars are substituted with the exact
/// byte sequence `EF BF BD`.
#[must_use]
pub fn utf16_to_utf8(utf16: &[u16]) -> (Vec<u8>, Status) {
    let expected = utf8_len(utf16);
    let mut out = Vec::with_capacity(expected);
    let mut clean = true;
    let mut i = 0;
    while let Some(decoded) = decode_utf16(&utf16[i..]) {
        match decoded {
            Decoded::Scalar { value, units } => {
                let mut buf = [0u8; 4];
                let enc = encode_utf8_exact(value, &mut buf);
                if enc.substituted {
                    clean = false;
                }
                out.extend_from_slice(&buf[..enc.units]);
                i += units;
            }
            Decoded::Malformed { skip, .. } => {
                out.extend_from_slice(&REPLACEMENT_UTF8);
                i += skip;
                clean = false;
            }
        }
    }
    let status = settle(out.len(), expected, clean);
    (out, status)
}

fn settle(produced: usize, expected: usize, clean: bool) -> Status {
    if produced != expected {
        Status::InternalError
    } else if clean {
        Status::Ok
    } else {
        Status::ConversionError
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clean_round_trip() {
        let text = "príliš žluťoučký kůň \u{1F40E}";
        let (wide, status) = utf8_to_utf16(text.as_bytes());
        assert_eq!(status, Status::Ok);
        let (bytes, status) = utf16_to_utf8(&wide);
        assert_eq!(status, Status::Ok);
        assert_eq!(bytes, text.as_bytes());
    }

    #[test]
    fn empty_input_recodes_to_empty() {
        assert_eq!(utf8_to_utf16(b""), (alloc::vec![], Status::Ok));
        assert_eq!(utf16_to_utf8(&[]), (alloc::vec![], Status::Ok));
    }

    #[test]
    fn malformed_utf8_substitutes_one_unit_per_region() {
        // bad lead; truncated 3-byte run; then an ASCII tail
        let (wide, status) = utf8_to_utf16(&[0xFF, 0xE2, 0x82, b'x']);
        assert_eq!(wide, [0xFFFD, 0xFFFD, u16::from(b'x')]);
        assert_eq!(status, Status::ConversionError);
    }

    #[test]
    fn unpaired_surrogate_substitutes_exact_bytes() {
        let (bytes, status) = utf16_to_utf8(&[u16::from(b'a'), 0xD800, u16::from(b'b')]);
        assert_eq!(bytes, [b'a', 0xEF, 0xBF, 0xBD, b'b']);
        assert_eq!(status, Status::ConversionError);
    }

    #[test]
    fn out_of_range_payload_substitutes_at_encode_time() {
        // Structurally valid 4-byte sequence above U+10FFFF: the estimator
        // and the encoder agree on a single substituted unit.
        let (wide, status) = utf8_to_utf16(&[0xF5, 0x90, 0x80, 0x80]);
        assert_eq!(wide, [0xFFFD]);
        assert_eq!(status, Status::ConversionError);
    }

    #[test]
    fn overlong_form_recodes_by_scalar_value() {
        // F0 80 81 81 assembles to U+0041; the recode emits it as one unit.
        let (wide, status) = utf8_to_utf16(&[0xF0, 0x80, 0x81, 0x81]);
        assert_eq!(wide, [0x41]);
        assert_eq!(status, Status::Ok);
    }

    #[test]
    fn surrogate_scalar_passes_through_to_utf16() {
        // ED A0 80 encodes U+D800 structurally; it lands as an unpaired
        // surrogate unit in the output, matching the estimator's count.
        let (wide, status) = utf8_to_utf16(&[0xED, 0xA0, 0x80]);
        assert_eq!(wide, [0xD800]);
        assert_eq!(status, Status::Ok);
    }
}
