//! Simple (one-to-one) Unicode case mapping.
//!
//! Two static tables, sorted by source scalar, hold every scalar whose
//! simple lowercase or uppercase image differs from itself. A scalar missing
//! from a table maps to itself. Lookups are binary searches.
//!
//! Case conversion decodes tolerantly: malformed bytes come out as
//! [`REPLACEMENT_CHARACTER`](crate::REPLACEMENT_CHARACTER). The output length
//! in bytes may differ from the input length.

mod tables;

use alloc::{string::String, vec::Vec};
use core::cmp::Ordering;

use tables::{LOWER_TO_UPPER, UPPER_TO_LOWER};

use crate::{
    codec::{into_string, push_char},
    cursor::Runes,
};

#[inline]
fn lookup(table: &[(char, char)], c: char) -> Option<char> {
    table
        .binary_search_by_key(&c, |&(from, _)| from)
        .ok()
        .map(|i| table[i].1)
}

/// Simple lowercase image of `c`.
#[inline]
#[must_use]
pub fn lower_rune(c: char) -> char {
    lookup(&UPPER_TO_LOWER, c).unwrap_or(c)
}

/// Simple uppercase image of `c`.
#[inline]
#[must_use]
pub fn upper_rune(c: char) -> char {
    lookup(&LOWER_TO_UPPER, c).unwrap_or(c)
}

/// `true` if `c` has a distinct lowercase image (ASCII: `A..=Z`).
#[must_use]
pub fn is_upper(c: char) -> bool {
    if c.is_ascii() {
        return c.is_ascii_uppercase();
    }
    lookup(&UPPER_TO_LOWER, c).is_some()
}

/// `true` if `c` has a distinct uppercase image (ASCII: `a..=z`).
#[must_use]
pub fn is_lower(c: char) -> bool {
    if c.is_ascii() {
        return c.is_ascii_lowercase();
    }
    lookup(&LOWER_TO_UPPER, c).is_some()
}

fn map_runes(text: &[u8], f: fn(char) -> char) -> String {
    let mut out = Vec::with_capacity(text.len());
    for c in Runes::new(text) {
        push_char(&mut out, f(c));
    }
    // SAFETY: every byte of `out` was written by `push_char`.
    unsafe { into_string(out) }
}

/// Lowercases `text`.
///
/// ```rust
/// assert_eq!(
///     utf8rune::to_lower("\u{391}\u{39B}\u{3A6}\u{386}\u{392}\u{397}\u{3A4}\u{39F}"),
///     "\u{3B1}\u{3BB}\u{3C6}\u{3AC}\u{3B2}\u{3B7}\u{3C4}\u{3BF}"
/// );
/// ```
#[must_use]
pub fn to_lower<S: AsRef<[u8]> + ?Sized>(text: &S) -> String {
    map_runes(text.as_ref(), lower_rune)
}

/// Uppercases `text`.
#[must_use]
pub fn to_upper<S: AsRef<[u8]> + ?Sized>(text: &S) -> String {
    map_runes(text.as_ref(), upper_rune)
}

/// Lowercases `text` in place.
pub fn make_lower(text: &mut String) {
    *text = to_lower(text.as_str());
}

/// Uppercases `text` in place.
pub fn make_upper(text: &mut String) {
    *text = to_upper(text.as_str());
}

/// Compares two strings ignoring case.
///
/// Both sides are folded through the lowercase mapping and compared scalar
/// by scalar. When one string is a prefix of the other, the shorter one is
/// [`Ordering::Less`].
///
/// ```rust
/// use core::cmp::Ordering;
///
/// assert_eq!(utf8rune::icompare("MIRCEA", "mircea"), Ordering::Equal);
/// assert_eq!(utf8rune::icompare("mircea", "MIRCEA "), Ordering::Less);
/// ```
#[must_use]
pub fn icompare<A, B>(a: &A, b: &B) -> Ordering
where
    A: AsRef<[u8]> + ?Sized,
    B: AsRef<[u8]> + ?Sized,
{
    let lhs = Runes::new(a.as_ref()).map(lower_rune);
    let rhs = Runes::new(b.as_ref()).map(lower_rune);
    lhs.cmp(rhs)
}
