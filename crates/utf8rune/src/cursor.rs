//! Rune-by-rune navigation over a byte slice.
//!
//! [`Cursor`] owns nothing: it pairs a borrowed slice with a byte position
//! and the slice's [`Extent`]. The position is always a scalar boundary
//! after a successful [`Cursor::next`] or [`Cursor::prev`].
//!
//! [`Runes`] is the iterator form. It decodes from both ends and the two
//! ends never cross.

use core::iter::FusedIterator;

use crate::{
    codec::{self, REPLACEMENT_CHARACTER},
    extent::Extent,
};

/// Decodes the scalar at `*pos` and advances past it.
///
/// Same contract as [`decode_forward`](crate::decode_forward).
#[inline]
pub fn next(bytes: &[u8], pos: &mut usize, extent: Extent) -> char {
    codec::decode_forward(bytes, pos, extent)
}

/// Decodes the scalar ending before `*pos` and moves back over it, or leaves
/// `*pos` unchanged and returns [`REPLACEMENT_CHARACTER`].
#[inline]
pub fn prev(bytes: &[u8], pos: &mut usize) -> char {
    codec::decode_backward(bytes, pos)
}

/// Decodes the scalar at `pos` without moving.
#[inline]
#[must_use]
pub fn rune(bytes: &[u8], pos: usize, extent: Extent) -> char {
    let mut p = pos;
    codec::decode_forward(bytes, &mut p, extent)
}

/// A byte position inside a UTF-8 slice.
///
/// # Examples
///
/// ```rust
/// use utf8rune::Cursor;
///
/// let mut cur = Cursor::new("a\u{20AC}".as_bytes());
/// assert_eq!(cur.next(), 'a');
/// assert_eq!(cur.rune(), '\u{20AC}');
/// assert_eq!(cur.next(), '\u{20AC}');
/// assert!(cur.is_at_end());
/// assert_eq!(cur.prev(), '\u{20AC}');
/// assert_eq!(cur.position(), 1);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cursor<'a> {
    bytes: &'a [u8],
    pos: usize,
    extent: Extent,
}

impl<'a> Cursor<'a> {
    /// Cursor at the start of `bytes`, reading the whole slice.
    #[must_use]
    pub fn new(bytes: &'a [u8]) -> Self {
        Self::with_extent(bytes, Extent::Length)
    }

    /// Cursor at the start of `bytes`, stopping at the first zero byte.
    #[must_use]
    pub fn nul_terminated(bytes: &'a [u8]) -> Self {
        Self::with_extent(bytes, Extent::NulTerminated)
    }

    /// Cursor at the start of `bytes` with an explicit extent.
    #[must_use]
    pub fn with_extent(bytes: &'a [u8], extent: Extent) -> Self {
        Self {
            bytes,
            pos: 0,
            extent,
        }
    }

    /// The underlying slice.
    #[must_use]
    pub fn bytes(&self) -> &'a [u8] {
        self.bytes
    }

    /// Current byte offset.
    #[must_use]
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Moves to byte offset `pos`, clamped to the slice length. No boundary
    /// check is made.
    pub fn set_position(&mut self, pos: usize) {
        self.pos = pos.min(self.bytes.len());
    }

    /// Bytes from the current position to the end of the slice.
    #[must_use]
    pub fn remaining(&self) -> &'a [u8] {
        &self.bytes[self.pos..]
    }

    /// `true` when no further scalar can be read: the end of the slice, or a
    /// zero byte under [`Extent::NulTerminated`].
    #[must_use]
    pub fn is_at_end(&self) -> bool {
        match self.bytes.get(self.pos) {
            None => true,
            Some(0) => self.extent.stops_at_nul(),
            Some(_) => false,
        }
    }

    /// Decodes the scalar at the cursor without moving.
    #[must_use]
    pub fn rune(&self) -> char {
        rune(self.bytes, self.pos, self.extent)
    }

    /// Decodes one scalar and advances past it. See [`crate::decode_forward`]
    /// for failure and end-of-text results.
    #[allow(clippy::should_implement_trait)]
    pub fn next(&mut self) -> char {
        next(self.bytes, &mut self.pos, self.extent)
    }

    /// Steps back over one scalar. On failure the cursor does not move.
    pub fn prev(&mut self) -> char {
        prev(self.bytes, &mut self.pos)
    }

    /// Iterator over the scalars from the cursor to the end of the text.
    #[must_use]
    pub fn runes(&self) -> Runes<'a> {
        let text = self.extent.clip(self.bytes);
        Runes {
            bytes: text,
            front: self.pos.min(text.len()),
            back: text.len(),
        }
    }
}

/// Double-ended iterator over the scalar values of a byte slice.
///
/// Malformed sequences are yielded as [`REPLACEMENT_CHARACTER`]. From the
/// front, the failure consumes what [`crate::decode_forward`] consumes. From
/// the back, where [`crate::decode_backward`] would not move, one byte is
/// dropped instead so iteration always terminates. On well-formed input both
/// directions produce the same scalars.
///
/// ```rust
/// let s = "\u{1F603}\u{1F60E}\u{1F61B}";
/// let fwd: Vec<char> = utf8rune::Runes::new(s.as_bytes()).collect();
/// let mut bwd: Vec<char> = utf8rune::Runes::new(s.as_bytes()).rev().collect();
/// bwd.reverse();
/// assert_eq!(fwd, bwd);
/// assert_eq!(fwd.len(), 3);
/// ```
#[derive(Debug, Clone)]
pub struct Runes<'a> {
    bytes: &'a [u8],
    front: usize,
    back: usize,
}

impl<'a> Runes<'a> {
    /// Iterates over all of `bytes`.
    #[must_use]
    pub fn new(bytes: &'a [u8]) -> Self {
        Cursor::new(bytes).runes()
    }

    /// Iterates up to the first zero byte of `bytes`.
    #[must_use]
    pub fn nul_terminated(bytes: &'a [u8]) -> Self {
        Cursor::nul_terminated(bytes).runes()
    }

    /// Byte offset of the front end.
    #[must_use]
    pub fn offset(&self) -> usize {
        self.front
    }

    /// Bytes not yet yielded from either end.
    #[must_use]
    pub fn as_bytes(&self) -> &'a [u8] {
        &self.bytes[self.front..self.back]
    }
}

impl Iterator for Runes<'_> {
    type Item = char;

    fn next(&mut self) -> Option<char> {
        if self.front >= self.back {
            return None;
        }
        let window = &self.bytes[..self.back];
        let c = codec::decode_forward(window, &mut self.front, Extent::Length);
        Some(c)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        // One malformed run of any length may collapse into a single item.
        let n = self.back - self.front;
        (usize::from(n > 0), Some(n))
    }
}

impl DoubleEndedIterator for Runes<'_> {
    fn next_back(&mut self) -> Option<char> {
        if self.front >= self.back {
            return None;
        }
        let window = &self.bytes[self.front..self.back];
        let mut pos = window.len();
        match codec::try_decode_backward(window, &mut pos) {
            Some(c) => {
                self.back = self.front + pos;
                Some(c)
            }
            None => {
                self.back -= 1;
                Some(REPLACEMENT_CHARACTER)
            }
        }
    }
}

impl FusedIterator for Runes<'_> {}

#[cfg(test)]
mod tests {
    use alloc::vec::Vec;

    use super::*;

    const EMOJIS: &str = "\u{1F603}\u{1F60E}\u{1F61B}";

    #[test]
    fn next_counts_until_replacement_at_end() {
        let bytes = EMOJIS.as_bytes();
        let mut pos = 0;
        let mut n = 0;
        while next(bytes, &mut pos, Extent::Length) != REPLACEMENT_CHARACTER {
            n += 1;
        }
        assert_eq!(n, 3);
        assert_eq!(pos, bytes.len());
    }

    #[test]
    fn next_stops_on_terminator() {
        let mut buf = Vec::from(EMOJIS.as_bytes());
        buf.push(0);
        buf.extend_from_slice(b"tail");
        let mut cur = Cursor::nul_terminated(&buf);
        let mut n = 0;
        while cur.next() != '\0' {
            n += 1;
        }
        assert_eq!(n, 3);
        assert_eq!(buf[cur.position()], 0);
        assert!(cur.is_at_end());
    }

    #[test]
    fn prev_walks_back_to_start() {
        let bytes = EMOJIS.as_bytes();
        let mut cur = Cursor::new(bytes);
        cur.set_position(bytes.len());
        let mut seen = Vec::new();
        while cur.position() > 0 {
            seen.push(cur.prev());
        }
        seen.reverse();
        assert_eq!(seen, ['\u{1F603}', '\u{1F60E}', '\u{1F61B}']);
    }

    #[test]
    fn rune_does_not_move() {
        let cur = Cursor::new("\u{1F600}".as_bytes());
        assert_eq!(cur.rune(), '\u{1F600}');
        assert_eq!(cur.position(), 0);
        assert_eq!(rune(b"xy", 1, Extent::Length), 'y');
    }

    #[test]
    fn set_position_clamps() {
        let mut cur = Cursor::new(b"abc");
        cur.set_position(10);
        assert_eq!(cur.position(), 3);
        assert!(cur.remaining().is_empty());
    }

    #[test]
    fn runes_from_both_ends_meet() {
        let mut it = Runes::new("ab\u{20AC}cd".as_bytes());
        assert_eq!(it.next(), Some('a'));
        assert_eq!(it.next_back(), Some('d'));
        assert_eq!(it.next_back(), Some('c'));
        assert_eq!(it.next(), Some('b'));
        assert_eq!(it.as_bytes(), "\u{20AC}".as_bytes());
        assert_eq!(it.next_back(), Some('\u{20AC}'));
        assert_eq!(it.next(), None);
        assert_eq!(it.next_back(), None);
    }

    #[test]
    fn runes_back_always_terminates_on_garbage() {
        let bytes = b"\x80\xC3\xFF\xE2\x82";
        let back: Vec<char> = Runes::new(bytes).rev().collect();
        assert!(back.iter().all(|&c| c == REPLACEMENT_CHARACTER));
        assert_eq!(back.len(), bytes.len());
    }

    #[test]
    fn size_hint_holds_on_collapsed_runs() {
        let inputs: [&[u8]; 4] = [
            b"\x80\x80\x80\x80\x80\x80\x80\x80",
            b"\xF8\x88\x80\x80\x80\x80\x80\x80",
            b"\xFF\xBF\xBF\xBF\xBF\xBFa",
            b"",
        ];
        for bytes in inputs {
            let it = Runes::new(bytes);
            let (lower, upper) = it.size_hint();
            let count = it.clone().count();
            assert!(lower <= count, "{bytes:?}: lower {lower} > {count}");
            assert!(upper.is_some_and(|u| count <= u), "{bytes:?}");
        }
        assert_eq!(Runes::new(&[0x80; 8]).count(), 1);
        assert_eq!(Runes::new(b"").size_hint(), (0, Some(0)));
    }

    #[test]
    fn runes_stop_at_nul_when_terminated() {
        let all: Vec<char> = Runes::nul_terminated(b"ab\0cd").collect();
        assert_eq!(all, ['a', 'b']);
        let all: Vec<char> = Runes::new(b"ab\0cd").collect();
        assert_eq!(all, ['a', 'b', '\0', 'c', 'd']);
    }

    #[test]
    fn runes_start_at_cursor_position() {
        let mut cur = Cursor::new(b"xyz");
        cur.next();
        let rest: Vec<char> = cur.runes().collect();
        assert_eq!(rest, ['y', 'z']);
    }
}
