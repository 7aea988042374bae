//! Exhaustive sweeps over the full scalar space. These pin down the
//! bit-exact contracts that spot checks cannot: encode/decode round-trips
//! for every scalar, and the global invariants of the fold table.

use crate::{
    Decoded, decode_utf8, decode_utf16, encode_utf8_exact, encode_utf16_exact, fold_scalar,
};

fn scalars() -> impl Iterator<Item = u32> {
    (0..=0x10FFFF).filter(|c| !(0xD800..=0xDFFF).contains(c))
}

#[test]
fn utf8_round_trips_every_scalar() {
    for c in scalars() {
        let mut buf = [0u8; 4];
        let enc = encode_utf8_exact(c, &mut buf);
        assert!(!enc.substituted);
        let width = if c < 0x80 {
            1
        } else if c < 0x800 {
            2
        } else if c < 0x10000 {
            3
        } else {
            4
        };
        assert_eq!(enc.units, width, "width of U+{c:04X}");
        assert_eq!(
            decode_utf8(&buf[..enc.units]),
            Some(Decoded::Scalar {
                value: c,
                units: width
            }),
            "round trip of U+{c:04X}"
        );
    }
}

#[test]
fn utf16_round_trips_every_scalar() {
    for c in scalars() {
        let mut buf = [0u16; 2];
        let enc = encode_utf16_exact(c, &mut buf);
        assert!(!enc.substituted);
        let width = if c < 0x10000 { 1 } else { 2 };
        assert_eq!(enc.units, width, "width of U+{c:04X}");
        assert_eq!(
            decode_utf16(&buf[..enc.units]),
            Some(Decoded::Scalar {
                value: c,
                units: width
            }),
            "round trip of U+{c:04X}"
        );
    }
}

#[test]
fn fold_is_idempotent_over_the_whole_space() {
    for c in 0..=0x10FFFF {
        let once = fold_scalar(c);
        assert_eq!(fold_scalar(once), once, "fold of U+{c:04X} is not stable");
    }
}

#[test]
fn fold_never_crosses_the_bmp_boundary() {
    // Load-bearing for in-place UTF-16 folding: a fold target always
    // occupies the same number of units as its source.
    for c in 0..=0x10FFFF {
        let folded = fold_scalar(c);
        assert_eq!(
            c < 0x10000,
            folded < 0x10000,
            "U+{c:04X} folds across the plane boundary to U+{folded:04X}"
        );
    }
}

#[test]
fn fold_agrees_with_ascii_lowercasing() {
    for c in 0..0x80u32 {
        let expected = u32::from(
            char::from_u32(c)
                .expect("ascii scalar")
                .to_ascii_lowercase(),
        );
        assert_eq!(fold_scalar(c), expected);
    }
}
