//! A self-contained Unicode text-encoding engine.
//!
//! The crate provides four layers, leaf first:
//!
//! - [`codec`]-level conversion: decode one UTF-8 or UTF-16 sequence to a
//!   scalar, encode one scalar back, with well-defined recovery on malformed
//!   input ([`decode_utf8`], [`encode_utf8`], …).
//! - String-level recoding between UTF-8 byte strings and UTF-16 wide
//!   strings, with exact output-length precomputation and a three-way
//!   [`Status`] outcome ([`utf8_to_utf16`], [`utf16_to_utf8`]).
//! - Table-driven simple case folding over the full codepoint space, plus
//!   caseless comparison and whole-string folding ([`fold_scalar`],
//!   [`folded_compare_utf8`], [`fold_utf8`]).
//! - A line-oriented buffered text file that stores UTF-8 on disk and
//!   guarantees callers never observe malformed UTF-8 ([`TextFile`], behind
//!   the default `std` feature).
//!
//! Malformed input is never fatal: every irrecoverable sequence is
//! substituted with U+FFFD (`EF BF BD` in UTF-8), bit-exact, and the
//! operation carries on.
//!
//! # Examples
//!
//! ```rust
//! use unitext::{Status, folded_eq_utf8, utf8_to_utf16};
//!
//! let (wide, status) = utf8_to_utf16("héllo".as_bytes());
//! assert_eq!(status, Status::Ok);
//! assert_eq!(wide, [0x68, 0xE9, 0x6C, 0x6C, 0x6F]);
//!
//! assert!(folded_eq_utf8(b"HELLO", b"hello"));
//! ```
#![no_std]
extern crate alloc;

#[cfg(any(test, feature = "std"))]
extern crate std;

mod alpha;
mod codec;
mod compare;
mod fold;
mod length;
mod recode;
mod validate;

#[cfg(feature = "std")]
mod textfile;

#[cfg(test)]
mod tests;

pub use alpha::{has_alpha_utf8, has_alpha_utf16};
pub use codec::{
    Decoded, Encoded, REPLACEMENT, REPLACEMENT_UTF8, decode_utf16, decode_utf8, encode_utf16,
    encode_utf16_exact, encode_utf8, encode_utf8_exact,
};
pub use compare::{FoldedCmp, folded_compare_utf16, folded_compare_utf8, folded_eq_utf16, folded_eq_utf8};
pub use fold::{fold_scalar, fold_utf8, fold_utf16};
pub use length::{utf8_len, utf16_len, utf32_len};
pub use recode::{Status, utf8_to_utf16, utf16_to_utf8};
pub use validate::{Validation, repair, validate};

#[cfg(feature = "std")]
pub use textfile::{TextFile, TextFileError};
