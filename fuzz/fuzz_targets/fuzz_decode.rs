#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use utf8rune::{
    Cursor, Extent, REPLACEMENT_CHARACTER, Runes, is_valid_with, narrow_with, runes_with, to_lower,
    to_upper, widen_with,
};

#[derive(Arbitrary, Debug)]
struct Input {
    bytes: Vec<u8>,
    wide: Vec<u16>,
    nul_terminated: bool,
}

fuzz_target!(|input: Input| {
    let extent = if input.nul_terminated {
        Extent::NulTerminated
    } else {
        Extent::Length
    };
    let text = extent.clip(input.bytes.as_slice());
    let expected = std::str::from_utf8(text);

    // Strict and tolerant readers agree with the standard library.
    assert_eq!(is_valid_with(&input.bytes, extent), expected.is_ok());
    match (runes_with(&input.bytes, extent), expected) {
        (Ok(runes), Ok(s)) => {
            assert!(runes.iter().copied().eq(s.chars()));
            let back: Vec<char> = Runes::new(text).rev().collect();
            assert!(back.into_iter().rev().eq(s.chars()));
            let wide: Vec<u16> = s.encode_utf16().collect();
            assert_eq!(widen_with(&input.bytes, extent).unwrap(), wide);
        }
        (Err(e), Err(std_err)) => assert_eq!(e.offset(), Some(std_err.valid_up_to())),
        (ours, theirs) => panic!("disagreement: {ours:?} vs {theirs:?}"),
    }

    // Tolerant walks always terminate and make progress.
    let mut cur = Cursor::with_extent(&input.bytes, extent);
    while !cur.is_at_end() {
        let before = cur.position();
        cur.next();
        assert!(cur.position() > before);
    }
    let replaced = Runes::new(text).filter(|&c| c == REPLACEMENT_CHARACTER).count();
    assert!(replaced <= text.len());

    // Case mapping accepts anything and always produces valid UTF-8.
    assert!(std::str::from_utf8(to_lower(&input.bytes).as_bytes()).is_ok());
    let _ = to_upper(&input.bytes);

    // UTF-16 input agrees with `String::from_utf16`.
    let wide = extent.clip(input.wide.as_slice());
    match (narrow_with(&input.wide, extent), String::from_utf16(wide)) {
        (Ok(ours), Ok(theirs)) => assert_eq!(ours, theirs),
        (Err(_), Err(_)) => {}
        (ours, theirs) => panic!("disagreement: {ours:?} vs {theirs:?}"),
    }
});
