//! Whole-sequence conversions between UTF-8, UTF-16 and UTF-32.
//!
//! The strict functions here ([`runes`], [`widen`], [`narrow`],
//! [`narrow_runes`]) stop at the first bad position and return no partial
//! output. The error carries the offset of that position; a caller that wants
//! to recover can restart a [`Cursor`](crate::Cursor) from there.
//!
//! Every function has a `_with` twin taking an [`Extent`]. The plain forms
//! read the whole slice, so an embedded zero unit is converted like any other
//! scalar. Under [`Extent::NulTerminated`] the first zero unit ends the input
//! and is not part of the output.

use alloc::{string::String, vec::Vec};

use crate::{
    codec::{self, into_string, is_continuation, push_char, push_encoded},
    error::{Error, Result},
    extent::Extent,
};

/// Decodes all of `text` into scalar values.
///
/// # Errors
///
/// [`Error::InvalidEncoding`] at the first malformed sequence.
///
/// # Examples
///
/// ```rust
/// let runes = utf8rune::runes("\u{1F603}\u{1F60E}\u{1F61B}").unwrap();
/// assert_eq!(runes, ['\u{1F603}', '\u{1F60E}', '\u{1F61B}']);
/// assert!(utf8rune::runes(b"\xFE\xFF\xFF\xFE").is_err());
/// ```
pub fn runes<S: AsRef<[u8]> + ?Sized>(text: &S) -> Result<Vec<char>> {
    runes_with(text, Extent::Length)
}

/// [`runes`] with an explicit [`Extent`].
///
/// # Errors
///
/// [`Error::InvalidEncoding`] at the first malformed sequence.
pub fn runes_with<S: AsRef<[u8]> + ?Sized>(text: &S, extent: Extent) -> Result<Vec<char>> {
    let bytes = extent.clip(text.as_ref());
    let mut out = Vec::with_capacity(length(bytes));
    for_each_rune(bytes, |c| out.push(c))?;
    Ok(out)
}

/// Strict forward walk shared by the UTF-8 readers.
fn for_each_rune(bytes: &[u8], mut f: impl FnMut(char)) -> Result<()> {
    let mut pos = 0;
    while pos < bytes.len() {
        let at = pos;
        match codec::try_decode_forward(bytes, &mut pos, Extent::Length) {
            Some(c) => f(c),
            None => return Err(Error::invalid_encoding(at)),
        }
    }
    Ok(())
}

/// `true` if all of `text` is well-formed UTF-8.
///
/// Accepts exactly what [`core::str::from_utf8`] accepts: no overlong forms,
/// no encoded surrogates, nothing above `U+10FFFF`, no truncated sequence at
/// the end.
///
/// ```rust
/// assert!(utf8rune::is_valid("\u{1F603}"));
/// assert!(utf8rune::is_valid(b"\xEF\xBB\xBF"));
/// assert!(utf8rune::is_valid(""));
/// assert!(!utf8rune::is_valid(b"\xC1\xA1"));
/// ```
#[must_use]
pub fn is_valid<S: AsRef<[u8]> + ?Sized>(text: &S) -> bool {
    is_valid_with(text, Extent::Length)
}

/// [`is_valid`] with an explicit [`Extent`]. Under
/// [`Extent::NulTerminated`] only the bytes before the first zero byte are
/// checked.
#[must_use]
pub fn is_valid_with<S: AsRef<[u8]> + ?Sized>(text: &S, extent: Extent) -> bool {
    let bytes = extent.clip(text.as_ref());
    let mut pos = 0;
    while pos < bytes.len() {
        if codec::try_decode_forward(bytes, &mut pos, Extent::Length).is_none() {
            return false;
        }
    }
    pos == bytes.len()
}

/// Number of scalar values in `text`.
///
/// Counts the bytes that are not continuation bytes, without decoding.
/// The result is only meaningful for valid input; for malformed input it is
/// some number no larger than the byte length.
#[must_use]
pub fn length<S: AsRef<[u8]> + ?Sized>(text: &S) -> usize {
    text.as_ref()
        .iter()
        .filter(|&&b| !is_continuation(b))
        .count()
}

/// Converts UTF-8 to UTF-16.
///
/// # Errors
///
/// [`Error::InvalidEncoding`] at the first malformed byte sequence.
///
/// # Examples
///
/// ```rust
/// let wide = utf8rune::widen("ABCD").unwrap();
/// assert_eq!(wide, [0x41, 0x42, 0x43, 0x44]);
/// ```
pub fn widen<S: AsRef<[u8]> + ?Sized>(text: &S) -> Result<Vec<u16>> {
    widen_with(text, Extent::Length)
}

/// [`widen`] with an explicit [`Extent`].
///
/// # Errors
///
/// [`Error::InvalidEncoding`] at the first malformed byte sequence.
pub fn widen_with<S: AsRef<[u8]> + ?Sized>(text: &S, extent: Extent) -> Result<Vec<u16>> {
    let bytes = extent.clip(text.as_ref());
    let mut out = Vec::with_capacity(bytes.len());
    let mut pair = [0u16; 2];
    for_each_rune(bytes, |c| {
        out.extend_from_slice(c.encode_utf16(&mut pair));
    })?;
    Ok(out)
}

/// Converts UTF-16 to UTF-8.
///
/// # Errors
///
/// [`Error::InvalidEncoding`] at the index of the first unpaired surrogate.
///
/// # Examples
///
/// ```rust
/// // G clef, RFC 8259
/// let s = utf8rune::narrow(&[0xD834, 0xDD1E]).unwrap();
/// assert_eq!(s, "\u{1D11E}");
/// ```
pub fn narrow(units: &[u16]) -> Result<String> {
    narrow_with(units, Extent::Length)
}

/// [`narrow`] with an explicit [`Extent`].
///
/// # Errors
///
/// [`Error::InvalidEncoding`] at the index of the first unpaired surrogate.
pub fn narrow_with(units: &[u16], extent: Extent) -> Result<String> {
    let units = extent.clip(units);
    let mut out = Vec::with_capacity(units.len());
    let mut at = 0;
    for decoded in char::decode_utf16(units.iter().copied()) {
        let c = decoded.map_err(|_| Error::invalid_encoding(at))?;
        push_char(&mut out, c);
        at += c.len_utf16();
    }
    // SAFETY: every byte of `out` was written by `push_char`.
    Ok(unsafe { into_string(out) })
}

/// Converts UTF-32 to UTF-8.
///
/// # Errors
///
/// [`Error::InvalidScalarValue`] for the first surrogate or value above
/// `U+10FFFF`.
///
/// # Examples
///
/// ```rust
/// let s = utf8rune::narrow_runes(&[0x41, 0x1F600]).unwrap();
/// assert_eq!(s, "A\u{1F600}");
/// assert!(utf8rune::narrow_runes(&[0xD800]).is_err());
/// ```
pub fn narrow_runes(values: &[u32]) -> Result<String> {
    narrow_runes_with(values, Extent::Length)
}

/// [`narrow_runes`] with an explicit [`Extent`].
///
/// # Errors
///
/// [`Error::InvalidScalarValue`] for the first surrogate or value above
/// `U+10FFFF`.
pub fn narrow_runes_with(values: &[u32], extent: Extent) -> Result<String> {
    let values = extent.clip(values);
    let mut out = Vec::with_capacity(values.len());
    for &v in values {
        push_encoded(&mut out, v)?;
    }
    // SAFETY: every byte of `out` was written by `push_encoded`.
    Ok(unsafe { into_string(out) })
}

#[cfg(test)]
mod tests {
    use alloc::{string::String, vec, vec::Vec};

    use super::*;
    use crate::error::ErrorKind;

    const EMOJIS: &str = "\u{1F603}\u{1F60E}\u{1F61B}";

    #[test]
    fn runes_decodes_emojis() {
        let r = runes(EMOJIS).unwrap();
        assert_eq!(r.len(), 3);
        assert_eq!(u32::from(r[0]), 0x1F603);
    }

    #[test]
    fn runes_rejects_utf16_boms() {
        let err = runes(b"\xFE\xFF\xFF\xFE").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidEncoding);
        assert_eq!(err.offset(), Some(0));
    }

    #[test]
    fn runes_reports_first_bad_offset_and_nothing_else() {
        let err = runes(b"ok\xC3(").unwrap_err();
        assert_eq!(err, Error::InvalidEncoding { offset: 2 });
    }

    #[test]
    fn runes_keep_literal_replacement_character() {
        assert_eq!(runes("a\u{FFFD}").unwrap(), ['a', '\u{FFFD}']);
        assert!(is_valid("\u{FFFD}"));
    }

    #[test]
    fn valid_str_variants() {
        let mut bytes = Vec::from(EMOJIS.as_bytes());
        assert!(is_valid(&bytes));
        assert!(is_valid_with(&bytes, Extent::NulTerminated));
        assert!(!is_valid(&bytes[..bytes.len() - 1]));

        bytes[8] = 0;
        assert!(is_valid_with(&bytes, Extent::NulTerminated));
        bytes[6] = 0;
        assert!(!is_valid(&bytes));
    }

    #[test]
    fn invalid_sequences() {
        for bad in [
            &b"\xC1\xA1"[..],
            &b"\xE0\x82\xB0"[..],
            &b"\xF0\x82\x82\xAC"[..],
            &b"\xFE\xFF"[..],
            &b"\xFF\xFE"[..],
            &b"\xED\xA0\x80"[..],
        ] {
            assert!(!is_valid(bad), "{bad:?}");
        }
    }

    #[test]
    fn length_counts_scalars() {
        assert_eq!(length("\u{3B5}\u{3BB}\u{3BB}\u{3B7}\u{3BD}\u{3B9}\u{3BA}\u{3CC}"), 8);
        assert_eq!(length(EMOJIS), 3);
        assert_eq!(length(""), 0);
        assert_eq!(length(b"ABC\0DEF"), 7);
    }

    #[test]
    fn widen_with_embedded_nul() {
        let bytes = b"ABC\0DEF";
        assert_eq!(widen(bytes).unwrap().len(), 7);
        assert_eq!(
            widen_with(bytes, Extent::NulTerminated).unwrap(),
            [0x41, 0x42, 0x43]
        );
    }

    #[test]
    fn narrow_with_embedded_nul() {
        let units: Vec<u16> = "ABC\0DEF".encode_utf16().collect();
        assert_eq!(narrow(&units).unwrap().len(), units.len());
        assert_eq!(narrow_with(&units, Extent::NulTerminated).unwrap(), "ABC");
    }

    #[test]
    fn narrow_count_is_a_slice() {
        let units: Vec<u16> = "ABCDEFGH".encode_utf16().collect();
        assert_eq!(narrow(&units[..4]).unwrap(), "ABCD");
        assert_eq!(widen(&b"ABCDEFGH"[..4]).unwrap(), [0x41, 0x42, 0x43, 0x44]);
    }

    #[test]
    fn narrow_surrogate_pair_matches_direct_encoding() {
        let paired = narrow(&[0xD834, 0xDD1E]).unwrap();
        let direct = codec::encode_utf8(0x1D11E).unwrap();
        assert_eq!(paired, direct);
        assert_eq!(narrow_runes(&[0x1D11E]).unwrap(), direct);
    }

    #[test]
    fn narrow_rejects_unpaired_surrogates() {
        assert_eq!(
            narrow(&[0x41, 0xD834, 0x42]),
            Err(Error::InvalidEncoding { offset: 1 })
        );
        assert_eq!(
            narrow(&[0xD834, 0xDD1E, 0xDD1E]),
            Err(Error::InvalidEncoding { offset: 2 })
        );
    }

    #[test]
    fn narrow_runes_rejects_bad_scalars() {
        assert_eq!(
            narrow_runes(&[0x41, 0xD800]),
            Err(Error::InvalidScalarValue(0xD800))
        );
        assert_eq!(
            narrow_runes(&[0x11_0000]).unwrap_err().kind(),
            ErrorKind::InvalidScalarValue
        );
        assert_eq!(
            narrow_runes_with(&[0x41, 0, 0xD800], Extent::NulTerminated).unwrap(),
            "A"
        );
    }

    #[test]
    fn greek_round_trip() {
        let greek = "\u{3B5}\u{3BB}\u{3BB}\u{3B7}\u{3BD}\u{3B9}\u{3BA}\u{3CC} \u{3B1}\u{3BB}\u{3C6}\u{3AC}\u{3B2}\u{3B7}\u{3C4}\u{3BF}";
        let wide: Vec<u16> = greek.encode_utf16().collect();
        let narrowed = narrow(&wide).unwrap();
        assert_eq!(narrowed, greek);
        assert_eq!(widen(&narrowed).unwrap(), wide);
        assert_eq!(length(&narrowed), wide.len());
    }

    #[test]
    fn wide_emoji_is_a_pair() {
        let wide = widen("\u{1F604}").unwrap();
        assert_eq!(wide, vec![0xD83D, 0xDE04]);
        assert_eq!(narrow(&wide).unwrap().as_bytes(), b"\xF0\x9F\x98\x84");
    }

    #[test]
    fn widen_then_narrow_ascii() {
        let s = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
        assert_eq!(narrow(&widen(s).unwrap()).unwrap(), String::from(s));
    }
}
