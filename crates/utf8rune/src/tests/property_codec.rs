use alloc::{string::String, vec::Vec};

use quickcheck::QuickCheck;

use super::test_count;
use crate::{
    Extent, REPLACEMENT_CHARACTER, Runes,
    codec::{try_decode_backward, try_decode_forward},
    decode_forward, encode,
};

/// Property: forward decoding always moves on arbitrary bytes, and never
/// past the end of the slice.
#[test]
fn forward_always_progresses() {
    #[allow(clippy::needless_pass_by_value)]
    fn prop(bytes: Vec<u8>) -> bool {
        let mut pos = 0;
        while pos < bytes.len() {
            let before = pos;
            decode_forward(&bytes, &mut pos, Extent::Length);
            if pos <= before || pos > bytes.len() {
                return false;
            }
        }
        true
    }

    QuickCheck::new()
        .tests(test_count())
        .quickcheck(prop as fn(Vec<u8>) -> bool);
}

/// Property: the first and last scalar of arbitrary bytes decode exactly
/// when `bstr` finds a valid scalar there.
#[test]
fn edges_agree_with_bstr() {
    #[allow(clippy::needless_pass_by_value)]
    fn prop(bytes: Vec<u8>) -> bool {
        let mut pos = 0;
        let first = try_decode_forward(&bytes, &mut pos, Extent::Length);
        let (expected, len) = bstr::decode_utf8(&bytes);
        if first != expected || (first.is_some() && pos != len) {
            return false;
        }

        let mut pos = bytes.len();
        let last = try_decode_backward(&bytes, &mut pos);
        let (expected, len) = bstr::decode_last_utf8(&bytes);
        last == expected && (last.is_none() || pos == bytes.len() - len)
    }

    QuickCheck::new()
        .tests(test_count())
        .quickcheck(prop as fn(Vec<u8>) -> bool);
}

/// Property: on valid text, iterating from the back visits the same
/// boundaries as iterating from the front.
#[test]
fn backward_mirrors_forward() {
    #[allow(clippy::needless_pass_by_value)]
    fn prop(text: String) -> bool {
        let fwd: Vec<char> = Runes::new(text.as_bytes()).collect();
        let mut bwd: Vec<char> = Runes::new(text.as_bytes()).rev().collect();
        bwd.reverse();
        fwd == bwd && fwd.iter().copied().eq(text.chars())
    }

    QuickCheck::new()
        .tests(test_count())
        .quickcheck(prop as fn(String) -> bool);
}

/// Property: every scalar value encodes like `char::encode_utf8` and
/// decodes back to itself.
#[test]
fn encode_matches_core() {
    fn prop(c: char) -> bool {
        let mut buf = [0u8; 4];
        let Ok(n) = encode(u32::from(c), &mut buf) else {
            return false;
        };
        let mut expected = [0u8; 4];
        let mut pos = 0;
        buf[..n] == *c.encode_utf8(&mut expected).as_bytes()
            && decode_forward(&buf[..n], &mut pos, Extent::Length) == c
            && pos == n
    }

    QuickCheck::new()
        .tests(test_count())
        .quickcheck(prop as fn(char) -> bool);
}

/// Property: tolerant iteration over arbitrary bytes yields a replacement
/// only where strict decoding would fail, or for a literal U+FFFD.
#[test]
fn tolerant_matches_lossy() {
    #[allow(clippy::needless_pass_by_value)]
    fn prop(bytes: Vec<u8>) -> bool {
        let ours = Runes::new(&bytes).any(|c| c == REPLACEMENT_CHARACTER);
        let lossy = String::from_utf8_lossy(&bytes).contains(REPLACEMENT_CHARACTER);
        ours == lossy
    }

    QuickCheck::new()
        .tests(test_count())
        .quickcheck(prop as fn(Vec<u8>) -> bool);
}
