#![expect(missing_docs)]

use core::fmt::Write;

use utf8rune::{Error, Runes, encode_utf8, narrow, narrow_runes, runes, widen};

const MIXED: &[u8] = b"a\xC1\xA1\xE2\x82\xAC\xED\xA0\x80\xF0\x9F\x98z";

fn render_forward(bytes: &[u8]) -> String {
    let mut out = String::new();
    let mut it = Runes::new(bytes);
    loop {
        let start = it.offset();
        let Some(c) = it.next() else { break };
        writeln!(out, "{start}..{} U+{:04X}", it.offset(), u32::from(c)).unwrap();
    }
    out
}

fn render_backward(bytes: &[u8]) -> String {
    let mut out = String::new();
    let mut it = Runes::new(bytes);
    loop {
        let end = it.as_bytes().len();
        let Some(c) = it.next_back() else { break };
        writeln!(out, "{}..{end} U+{:04X}", it.as_bytes().len(), u32::from(c)).unwrap();
    }
    out
}

fn render_errors(results: &[(&str, Result<(), Error>)]) -> String {
    let mut out = String::new();
    for (name, res) in results {
        match res {
            Ok(()) => writeln!(out, "{name}: ok").unwrap(),
            Err(e) => writeln!(out, "{name}: {e} ({e:?})").unwrap(),
        }
    }
    out
}

#[test]
fn snapshot_forward_walk() {
    insta::assert_snapshot!(render_forward(MIXED), @r"
    0..1 U+0061
    1..3 U+FFFD
    3..6 U+20AC
    6..9 U+FFFD
    9..12 U+FFFD
    12..13 U+007A
    ");
}

#[test]
fn snapshot_backward_walk() {
    insta::assert_snapshot!(render_backward(MIXED), @r"
    12..13 U+007A
    11..12 U+FFFD
    10..11 U+FFFD
    9..10 U+FFFD
    8..9 U+FFFD
    7..8 U+FFFD
    6..7 U+FFFD
    3..6 U+20AC
    2..3 U+FFFD
    1..2 U+FFFD
    0..1 U+0061
    ");
}

#[test]
fn snapshot_strict_errors() {
    let results = [
        ("runes", runes(b"ab\xFE").map(drop)),
        ("widen", widen(b"\xED\xA0\x80").map(drop)),
        ("narrow", narrow(&[0x41, 0xDC00]).map(drop)),
        ("narrow_pair", narrow(&[0xD834, 0xDD1E]).map(drop)),
        ("narrow_runes", narrow_runes(&[0x41, 0x11_0000]).map(drop)),
        ("encode_utf8", encode_utf8(0xD800).map(drop)),
    ];
    insta::assert_snapshot!(render_errors(&results), @r"
    runes: invalid encoding at offset 2 (InvalidEncoding { offset: 2 })
    widen: invalid encoding at offset 0 (InvalidEncoding { offset: 0 })
    narrow: invalid encoding at offset 1 (InvalidEncoding { offset: 1 })
    narrow_pair: ok
    narrow_runes: invalid code point U+110000 (InvalidScalarValue(1114112))
    encode_utf8: invalid code point U+D800 (InvalidScalarValue(55296))
    ");
}
