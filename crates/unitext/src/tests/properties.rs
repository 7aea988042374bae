//! Property tests: the estimator/recoder contract and repair semantics must
//! hold for arbitrary byte and unit soup, not just hand-picked cases.

use alloc::string::String;
use alloc::vec::Vec;

use quickcheck::QuickCheck;
use quickcheck_macros::quickcheck;

use crate::{
    Status, fold_scalar, fold_utf8, folded_eq_utf8, repair, utf8_to_utf16, utf16_len,
    utf16_to_utf8, utf32_len, validate,
};

fn test_count() -> u64 {
    if is_ci::cached() { 10_000 } else { 1_000 }
}

/// Property: recoding valid UTF-8 to UTF-16 and back is lossless and clean.
#[test]
fn recode_round_trip_quickcheck() {
    fn prop(text: String) -> bool {
        let (wide, there) = utf8_to_utf16(text.as_bytes());
        let (bytes, back) = utf16_to_utf8(&wide);
        there == Status::Ok && back == Status::Ok && bytes == text.as_bytes()
    }

    QuickCheck::new()
        .tests(test_count())
        .quickcheck(prop as fn(String) -> bool);
}

/// Property: the estimator predicts the recoder's output exactly, for any
/// input whatsoever — `InternalError` must be unreachable from input alone.
#[test]
fn estimator_is_exact_for_arbitrary_bytes() {
    fn prop(bytes: Vec<u8>) -> bool {
        let expected = utf16_len(&bytes);
        let (wide, status) = utf8_to_utf16(&bytes);
        wide.len() == expected && status != Status::InternalError
    }

    QuickCheck::new()
        .tests(test_count())
        .quickcheck(prop as fn(Vec<u8>) -> bool);
}

#[test]
fn estimator_is_exact_for_arbitrary_units() {
    fn prop(units: Vec<u16>) -> bool {
        let expected = crate::utf8_len(&units);
        let (bytes, status) = utf16_to_utf8(&units);
        bytes.len() == expected && status != Status::InternalError
    }

    QuickCheck::new()
        .tests(test_count())
        .quickcheck(prop as fn(Vec<u16>) -> bool);
}

#[quickcheck]
fn repaired_output_always_validates(bytes: Vec<u8>) -> bool {
    let repaired = repair(&bytes);
    validate(&repaired).is_valid
}

#[quickcheck]
fn repair_is_idempotent(bytes: Vec<u8>) -> bool {
    let once = repair(&bytes).into_owned();
    repair(&once).into_owned() == once
}

#[quickcheck]
fn repair_preserves_codepoint_count(bytes: Vec<u8>) -> bool {
    // Each malformed region collapses into exactly one replacement
    // codepoint, so the UTF-32 length is invariant under repair.
    utf32_len(&repair(&bytes)) == utf32_len(&bytes)
}

#[quickcheck]
fn folded_comparison_is_reflexive(text: String) -> bool {
    folded_eq_utf8(text.as_bytes(), text.as_bytes())
}

#[quickcheck]
fn ascii_case_never_affects_comparison(text: String) -> bool {
    folded_eq_utf8(
        text.to_ascii_uppercase().as_bytes(),
        text.to_ascii_lowercase().as_bytes(),
    )
}

#[quickcheck]
fn string_folding_matches_scalar_folding(text: String) -> bool {
    let mut expected = Vec::with_capacity(text.len());
    for c in text.chars() {
        let folded = fold_scalar(u32::from(c));
        let mut buf = [0u8; 4];
        let enc = crate::encode_utf8_exact(folded, &mut buf);
        expected.extend_from_slice(&buf[..enc.units]);
    }
    fold_utf8(text.as_bytes()) == expected
}
