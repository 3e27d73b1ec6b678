//! Single-scalar UTF-8 codec.
//!
//! [`encode`] writes the canonical (shortest) form of one scalar value.
//! [`decode_forward`] and [`decode_backward`] read one scalar value starting
//! at, respectively ending at, a byte position and move that position.
//!
//! Decoding never fails loudly. A rejected sequence decodes to
//! [`REPLACEMENT_CHARACTER`], and the position rules are:
//!
//! - forward: the position always moves past the bytes that were examined,
//!   so a scanning loop cannot stall. The single exception is a zero lead
//!   byte under [`Extent::NulTerminated`], which is the end of the text.
//! - backward: the position is left untouched on failure.
//!
//! The two directions are implemented separately (UTF-8 only
//! self-synchronizes forwards) but apply the same checks: exact continuation
//! count, no surrogates, no overlong forms, nothing above `U+10FFFF`. For
//! well-formed input they agree on every boundary.

use alloc::{string::String, vec::Vec};

use crate::{
    error::{Error, Result},
    extent::Extent,
};

/// Scalar returned in place of a sequence that could not be decoded.
pub const REPLACEMENT_CHARACTER: char = '\u{FFFD}';

/// Largest Unicode scalar value.
pub const MAX_SCALAR: u32 = 0x10_FFFF;

const SURROGATES: core::ops::RangeInclusive<u32> = 0xD800..=0xDFFF;

#[inline]
pub(crate) const fn is_continuation(b: u8) -> bool {
    b & 0xC0 == 0x80
}

/// Number of bytes in the canonical encoding of `value`, or `None` for a
/// surrogate or a value above [`MAX_SCALAR`].
#[must_use]
pub const fn encoded_len(value: u32) -> Option<usize> {
    if value >= 0xD800 && value <= 0xDFFF {
        return None;
    }
    match value {
        0..0x80 => Some(1),
        0x80..0x800 => Some(2),
        0x800..0x1_0000 => Some(3),
        0x1_0000..=MAX_SCALAR => Some(4),
        _ => None,
    }
}

/// Encodes `value` into `buf` and returns the number of bytes written.
///
/// # Errors
///
/// [`Error::InvalidScalarValue`] if `value` is a surrogate or exceeds
/// [`MAX_SCALAR`]. `buf` is left untouched in that case.
///
/// # Examples
///
/// ```rust
/// let mut buf = [0u8; 4];
/// let n = utf8rune::encode(0x1D11E, &mut buf).unwrap();
/// assert_eq!(&buf[..n], "\u{1D11E}".as_bytes());
/// assert!(utf8rune::encode(0xD800, &mut buf).is_err());
/// ```
pub fn encode(value: u32, buf: &mut [u8; 4]) -> Result<usize> {
    let c = char::from_u32(value).ok_or_else(|| Error::invalid_scalar(value))?;
    Ok(encode_char(c, buf))
}

#[allow(clippy::cast_possible_truncation)]
pub(crate) fn encode_char(c: char, buf: &mut [u8; 4]) -> usize {
    let value = u32::from(c);
    match value {
        0..0x80 => {
            buf[0] = value as u8;
            1
        }
        0x80..0x800 => {
            buf[0] = 0xC0 | (value >> 6) as u8;
            buf[1] = 0x80 | (value & 0x3F) as u8;
            2
        }
        0x800..0x1_0000 => {
            buf[0] = 0xE0 | (value >> 12) as u8;
            buf[1] = 0x80 | ((value >> 6) & 0x3F) as u8;
            buf[2] = 0x80 | (value & 0x3F) as u8;
            3
        }
        _ => {
            buf[0] = 0xF0 | (value >> 18) as u8;
            buf[1] = 0x80 | ((value >> 12) & 0x3F) as u8;
            buf[2] = 0x80 | ((value >> 6) & 0x3F) as u8;
            buf[3] = 0x80 | (value & 0x3F) as u8;
            4
        }
    }
}

/// Encodes a single scalar value into a new `String`.
///
/// # Errors
///
/// [`Error::InvalidScalarValue`] for a surrogate or a value above
/// [`MAX_SCALAR`].
pub fn encode_utf8(value: u32) -> Result<String> {
    let mut out = Vec::with_capacity(4);
    push_encoded(&mut out, value)?;
    // SAFETY: `out` holds exactly one sequence written by `push_encoded`.
    Ok(unsafe { into_string(out) })
}

/// Appends the encoding of `value` to `out`.
pub(crate) fn push_encoded(out: &mut Vec<u8>, value: u32) -> Result<()> {
    let mut buf = [0u8; 4];
    let n = encode(value, &mut buf)?;
    out.extend_from_slice(&buf[..n]);
    Ok(())
}

/// Appends the encoding of `c` to `out`.
pub(crate) fn push_char(out: &mut Vec<u8>, c: char) {
    let mut buf = [0u8; 4];
    let n = encode_char(c, &mut buf);
    out.extend_from_slice(&buf[..n]);
}

/// Wraps encoder output in a `String` without validating it again.
///
/// # Safety
///
/// `bytes` must be well-formed UTF-8, e.g. filled only through
/// [`push_encoded`] and [`push_char`].
pub(crate) unsafe fn into_string(bytes: Vec<u8>) -> String {
    debug_assert!(core::str::from_utf8(&bytes).is_ok());
    // SAFETY: guaranteed by the caller.
    unsafe { String::from_utf8_unchecked(bytes) }
}

/// Lead byte classification: continuation count, payload bits, and the
/// smallest value that needs this many bytes.
#[inline]
fn lead(b: u8) -> Option<(usize, u32, u32)> {
    match b {
        0xC0..=0xDF => Some((1, u32::from(b & 0x1F), 0x80)),
        0xE0..=0xEF => Some((2, u32::from(b & 0x0F), 0x800)),
        0xF0..=0xF7 => Some((3, u32::from(b & 0x07), 0x1_0000)),
        _ => None,
    }
}

/// Checks a fully accumulated multi-byte value. `at` is only used for
/// diagnostics.
#[inline]
fn accept(value: u32, min: u32, at: usize) -> Option<char> {
    if value < min {
        log::trace!("overlong form for U+{value:04X} at byte {at}");
        return None;
    }
    if SURROGATES.contains(&value) {
        log::trace!("encoded surrogate U+{value:04X} at byte {at}");
        return None;
    }
    if value > MAX_SCALAR {
        log::trace!("value {value:#X} above U+10FFFF at byte {at}");
        return None;
    }
    char::from_u32(value)
}

/// Decodes the scalar value starting at `*pos` and advances `*pos` past it.
///
/// At the end of `bytes` nothing is consumed; the result is `'\0'` under
/// [`Extent::NulTerminated`] and [`REPLACEMENT_CHARACTER`] under
/// [`Extent::Length`]. A zero byte under [`Extent::NulTerminated`] is also
/// the end: `'\0'` is returned and `*pos` does not move.
///
/// Malformed input yields [`REPLACEMENT_CHARACTER`] and `*pos` moves past the
/// examined bytes:
///
/// - a stray continuation byte or an impossible lead (`F8..=FF`) swallows
///   the whole run of continuation bytes after it,
/// - a truncated sequence stops before the first byte that is not a
///   continuation byte,
/// - overlong, surrogate and out-of-range values consume the full sequence.
#[inline]
pub fn decode_forward(bytes: &[u8], pos: &mut usize, extent: Extent) -> char {
    try_decode_forward(bytes, pos, extent).unwrap_or(REPLACEMENT_CHARACTER)
}

/// [`decode_forward`] with failure reported as `None`, so that a literal
/// `U+FFFD` in the input stays distinguishable from a rejected sequence.
/// The end of a [`Extent::Length`] slice is `None` as well.
pub(crate) fn try_decode_forward(bytes: &[u8], pos: &mut usize, extent: Extent) -> Option<char> {
    let start = *pos;
    let Some(&b0) = bytes.get(start) else {
        return extent.stops_at_nul().then_some('\0');
    };

    if b0 < 0x80 {
        if b0 == 0 && extent.stops_at_nul() {
            return Some('\0');
        }
        *pos = start + 1;
        return Some(char::from(b0));
    }

    let Some((need, mut value, min)) = lead(b0) else {
        let mut i = start + 1;
        while i < bytes.len() && is_continuation(bytes[i]) {
            i += 1;
        }
        log::trace!("invalid lead byte {b0:#04X} at byte {start}");
        *pos = i;
        return None;
    };

    let mut i = start + 1;
    let mut got = 0;
    while got < need && i < bytes.len() && is_continuation(bytes[i]) {
        value = (value << 6) | u32::from(bytes[i] & 0x3F);
        i += 1;
        got += 1;
    }
    *pos = i;

    if got != need {
        log::trace!("short sequence at byte {start}: {got} of {need} continuation bytes");
        return None;
    }
    accept(value, min, start)
}

/// Decodes the scalar value that ends right before `*pos` and moves `*pos`
/// back to its first byte.
///
/// Walks back over at most three continuation bytes, then requires a lead
/// byte that announces exactly that many. Any mismatch, overlong form,
/// surrogate or out-of-range value yields [`REPLACEMENT_CHARACTER`] and
/// leaves `*pos` unchanged, as does `*pos == 0`.
#[inline]
pub fn decode_backward(bytes: &[u8], pos: &mut usize) -> char {
    try_decode_backward(bytes, pos).unwrap_or(REPLACEMENT_CHARACTER)
}

/// [`decode_backward`] with failure reported as `None`.
pub(crate) fn try_decode_backward(bytes: &[u8], pos: &mut usize) -> Option<char> {
    let end = (*pos).min(bytes.len());
    let mut i = end;
    let mut value = 0u32;
    let mut shift = 0;

    let b = loop {
        if i == 0 {
            return None;
        }
        i -= 1;
        let b = bytes[i];
        if is_continuation(b) && shift < 18 {
            value |= u32::from(b & 0x3F) << shift;
            shift += 6;
        } else {
            break b;
        }
    };

    let (mask, tag, min) = match shift {
        0 => {
            if b < 0x80 {
                *pos = i;
                return Some(char::from(b));
            }
            log::trace!("unexpected byte {b:#04X} before byte {end}");
            return None;
        }
        6 => (0xE0, 0xC0, 0x80),
        12 => (0xF0, 0xE0, 0x800),
        _ => (0xF8, 0xF0, 0x1_0000),
    };
    if b & mask != tag {
        log::trace!("lead byte {b:#04X} at byte {i} does not match its continuation bytes");
        return None;
    }
    value |= u32::from(b & !mask) << shift;

    let c = accept(value, min, i)?;
    *pos = i;
    Some(c)
}

#[cfg(test)]
mod tests {
    use alloc::{string::String, vec::Vec};

    use rstest::rstest;

    use super::*;

    fn forward_all(bytes: &[u8]) -> Vec<(usize, char)> {
        let mut out = Vec::new();
        let mut pos = 0;
        while pos < bytes.len() {
            let at = pos;
            let c = decode_forward(bytes, &mut pos, Extent::Length);
            out.push((at, c));
        }
        out
    }

    #[rstest]
    #[case(0x41, b"A")]
    #[case(0xB0, "\u{B0}".as_bytes())]
    #[case(0x20AC, "\u{20AC}".as_bytes())]
    #[case(0x1F600, "\u{1F600}".as_bytes())]
    #[case(0x7F, b"\x7F")]
    #[case(0x7FF, b"\xDF\xBF")]
    #[case(0xFFFF, b"\xEF\xBF\xBF")]
    #[case(0x10FFFF, b"\xF4\x8F\xBF\xBF")]
    fn encode_canonical(#[case] value: u32, #[case] expected: &[u8]) {
        let mut buf = [0u8; 4];
        let n = encode(value, &mut buf).unwrap();
        assert_eq!(&buf[..n], expected);
        assert_eq!(encoded_len(value), Some(expected.len()));
    }

    #[rstest]
    #[case(0xD800)]
    #[case(0xDBFF)]
    #[case(0xDC00)]
    #[case(0xDFFF)]
    #[case(0x11_0000)]
    #[case(u32::MAX)]
    fn encode_rejects(#[case] value: u32) {
        let mut buf = [0xAAu8; 4];
        assert_eq!(
            encode(value, &mut buf),
            Err(Error::InvalidScalarValue(value))
        );
        assert_eq!(buf, [0xAA; 4]);
        assert!(encode_utf8(value).is_err());
    }

    #[test]
    fn encode_utf8_single_rune() {
        assert_eq!(encode_utf8(0x1D11E).unwrap(), String::from("\u{1D11E}"));
        assert_eq!(encode_utf8(0).unwrap(), String::from("\0"));
    }

    #[test]
    fn encoder_output_wraps_into_string() {
        let text = "a\u{B0}\u{20AC}\u{1F603}\u{FFFD}\0";
        let mut out = Vec::new();
        for c in text.chars() {
            push_char(&mut out, c);
        }
        push_encoded(&mut out, 0x10_FFFF).unwrap();
        // SAFETY: `out` was filled only by `push_char` and `push_encoded`.
        let s = unsafe { into_string(out) };
        assert_eq!(s, alloc::format!("{text}\u{10FFFF}"));
    }

    #[rstest]
    #[case::overlong_a(b"\xC1\xA1", 2)]
    #[case::overlong_degree(b"\xE0\x82\xB0", 3)]
    #[case::overlong_euro(b"\xF0\x82\x82\xAC", 4)]
    #[case::surrogate(b"\xED\xA0\x80", 3)]
    #[case::above_max(b"\xF4\x90\x80\x80", 4)]
    #[case::f5_lead(b"\xF5\x80\x80\x80", 4)]
    #[case::utf16_be_bom(b"\xFE\xFF", 1)]
    #[case::orphan_run(b"\x80\x80\x80", 3)]
    #[case::short_two(b"\xC3", 1)]
    #[case::short_three(b"\xE2\x82", 2)]
    #[case::five_byte_form(b"\xF8\x88\x80\x80\x80", 5)]
    fn forward_rejects(#[case] bytes: &[u8], #[case] consumed: usize) {
        let mut pos = 0;
        assert_eq!(
            decode_forward(bytes, &mut pos, Extent::Length),
            REPLACEMENT_CHARACTER
        );
        assert_eq!(pos, consumed);
    }

    #[rstest]
    #[case::overlong_a(b"\xC1\xA1")]
    #[case::overlong_degree(b"\xE0\x82\xB0")]
    #[case::overlong_euro(b"\xF0\x82\x82\xAC")]
    #[case::utf16_be_bom(b"\xFE\xFF")]
    #[case::utf16_le_bom(b"\xFF\xFE")]
    #[case::surrogate(b"\xED\xA0\x80")]
    #[case::above_max(b"\xF4\x90\x80\x80")]
    #[case::lone_lead(b"\xC3")]
    #[case::too_many_continuations(b"\xF0\x9F\x98\x80\x80")]
    #[case::only_continuations(b"\x80\x80")]
    fn backward_rejects_and_stays(#[case] bytes: &[u8]) {
        let mut pos = bytes.len();
        assert_eq!(decode_backward(bytes, &mut pos), REPLACEMENT_CHARACTER);
        assert_eq!(pos, bytes.len());
    }

    #[test]
    fn literal_replacement_character_is_not_a_failure() {
        let bytes = "\u{FFFD}".as_bytes();
        let mut pos = 0;
        assert_eq!(try_decode_forward(bytes, &mut pos, Extent::Length), Some('\u{FFFD}'));
        assert_eq!(pos, 3);
        assert_eq!(try_decode_backward(bytes, &mut pos), Some('\u{FFFD}'));
        assert_eq!(pos, 0);
    }

    #[test]
    fn short_sequence_resumes_at_next_lead() {
        // E2 82 followed by 'A': the truncated euro sign is one failure, then 'A'.
        let bytes = b"\xE2\x82A";
        assert_eq!(
            forward_all(bytes),
            [(0, REPLACEMENT_CHARACTER), (2, 'A')]
        );
    }

    #[test]
    fn forward_decodes_each_width() {
        let s = "a\u{B0}\u{20AC}\u{1F603}";
        assert_eq!(
            forward_all(s.as_bytes()),
            [(0, 'a'), (1, '\u{B0}'), (3, '\u{20AC}'), (6, '\u{1F603}')]
        );
    }

    #[test]
    fn backward_decodes_each_width() {
        let s = "a\u{B0}\u{20AC}\u{1F603}";
        let bytes = s.as_bytes();
        let mut pos = bytes.len();
        let mut seen = Vec::new();
        while pos > 0 {
            seen.push(decode_backward(bytes, &mut pos));
        }
        assert_eq!(seen, ['\u{1F603}', '\u{20AC}', '\u{B0}', 'a']);
    }

    #[test]
    fn nul_lead_is_end_only_when_terminated() {
        let bytes = b"\0A";
        let mut pos = 0;
        assert_eq!(decode_forward(bytes, &mut pos, Extent::NulTerminated), '\0');
        assert_eq!(pos, 0);
        assert_eq!(decode_forward(bytes, &mut pos, Extent::Length), '\0');
        assert_eq!(pos, 1);
    }

    #[test]
    fn end_of_slice_does_not_advance() {
        let mut pos = 2;
        assert_eq!(
            decode_forward(b"ab", &mut pos, Extent::Length),
            REPLACEMENT_CHARACTER
        );
        assert_eq!(decode_forward(b"ab", &mut pos, Extent::NulTerminated), '\0');
        assert_eq!(pos, 2);

        let mut pos = 0;
        assert_eq!(decode_backward(b"ab", &mut pos), REPLACEMENT_CHARACTER);
        assert_eq!(pos, 0);
    }

    #[test]
    fn truncated_by_nul_terminator() {
        // The smiley is cut by a zero byte: short sequence, then end of text.
        let bytes = b"\xF0\x9F\x98\0";
        let mut pos = 0;
        assert_eq!(
            decode_forward(bytes, &mut pos, Extent::NulTerminated),
            REPLACEMENT_CHARACTER
        );
        assert_eq!(pos, 3);
        assert_eq!(decode_forward(bytes, &mut pos, Extent::NulTerminated), '\0');
        assert_eq!(pos, 3);
    }
}
