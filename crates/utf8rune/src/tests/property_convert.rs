use alloc::{string::String, vec::Vec};

use quickcheck::QuickCheck;

use super::test_count;
use crate::{is_valid, length, narrow, narrow_runes, runes, widen};

/// Property: UTF-8 → UTF-16 → UTF-8 is the identity on valid text, and the
/// UTF-16 side matches `str::encode_utf16`.
#[test]
fn widen_narrow_roundtrip() {
    #[allow(clippy::needless_pass_by_value)]
    fn prop(text: String) -> bool {
        let Ok(wide) = widen(&text) else {
            return false;
        };
        wide.iter().copied().eq(text.encode_utf16()) && narrow(&wide).as_deref() == Ok(&*text)
    }

    QuickCheck::new()
        .tests(test_count())
        .quickcheck(prop as fn(String) -> bool);
}

/// Property: UTF-32 → UTF-8 → UTF-32 is the identity for scalar values.
#[test]
fn narrow_runes_roundtrip() {
    #[allow(clippy::needless_pass_by_value)]
    fn prop(chars: Vec<char>) -> bool {
        let values: Vec<u32> = chars.iter().map(|&c| u32::from(c)).collect();
        let Ok(text) = narrow_runes(&values) else {
            return false;
        };
        runes(&text).as_deref() == Ok(&chars[..])
    }

    QuickCheck::new()
        .tests(test_count())
        .quickcheck(prop as fn(Vec<char>) -> bool);
}

/// Property: validity agrees with the standard library, and a strict decode
/// fails exactly where `from_utf8` stops.
#[test]
fn validity_agrees_with_core() {
    #[allow(clippy::needless_pass_by_value)]
    fn prop(bytes: Vec<u8>) -> bool {
        let std = core::str::from_utf8(&bytes);
        if is_valid(&bytes) != std.is_ok() {
            return false;
        }
        match (runes(&bytes), std) {
            (Ok(_), Ok(_)) => true,
            (Err(e), Err(std)) => e.offset() == Some(std.valid_up_to()),
            _ => false,
        }
    }

    QuickCheck::new()
        .tests(test_count())
        .quickcheck(prop as fn(Vec<u8>) -> bool);
}

/// Property: on valid text the byte count shortcut equals the scalar count.
#[test]
fn length_counts_chars() {
    #[allow(clippy::needless_pass_by_value)]
    fn prop(text: String) -> bool {
        length(&text) == text.chars().count()
    }

    QuickCheck::new()
        .tests(test_count())
        .quickcheck(prop as fn(String) -> bool);
}
