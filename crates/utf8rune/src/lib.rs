//! UTF-8 helpers for code that keeps its text as bytes.
//!
//! Everything here works on borrowed slices and owned `String`/`Vec`
//! outputs. There are two kinds of operation:
//!
//! - tolerant ones ([`next`], [`prev`], [`rune`], [`Runes`], [`is_valid`],
//!   case mapping, [`ctype`]) never fail. A malformed sequence reads as
//!   [`REPLACEMENT_CHARACTER`] and decoding always makes progress.
//! - strict ones ([`runes`], [`widen`], [`narrow`], [`narrow_runes`],
//!   [`encode`]) return an [`Error`] that says what went wrong and where.
//!
//! Inputs that may carry a trailing NUL take an [`Extent`]. The plain
//! functions read the whole slice; the `_with` variants let the caller stop
//! at the first zero unit instead.
//!
//! ```rust
//! use utf8rune::{Extent, narrow, widen, widen_with};
//!
//! let wide = widen("\u{1D11E} clef").unwrap();
//! assert_eq!(wide[..2], [0xD834, 0xDD1E]);
//! assert_eq!(narrow(&wide).unwrap(), "\u{1D11E} clef");
//!
//! assert_eq!(widen_with(b"ab\0cd", Extent::NulTerminated).unwrap(), [0x61, 0x62]);
//! ```

#![no_std]
extern crate alloc;

#[cfg(test)]
extern crate std;

mod case;
mod codec;
mod convert;
mod cursor;
pub mod ctype;
mod error;
mod extent;

#[cfg(test)]
mod tests;

pub use case::{icompare, lower_rune, make_lower, make_upper, to_lower, to_upper, upper_rune};
pub use codec::{
    MAX_SCALAR, REPLACEMENT_CHARACTER, decode_backward, decode_forward, encode, encode_utf8,
    encoded_len,
};
pub use convert::{
    is_valid, is_valid_with, length, narrow, narrow_runes, narrow_runes_with, narrow_with, runes,
    runes_with, widen, widen_with,
};
pub use cursor::{Cursor, Runes, next, prev, rune};
pub use error::{Error, ErrorKind, Result};
pub use extent::Extent;
