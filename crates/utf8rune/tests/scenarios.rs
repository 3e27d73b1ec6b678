#![expect(missing_docs)]

use core::cmp::Ordering;

use rstest::rstest;
use utf8rune::{
    Cursor, ErrorKind, Extent, REPLACEMENT_CHARACTER, ctype, encode_utf8, icompare, is_valid,
    is_valid_with, length, make_lower, make_upper, narrow, narrow_runes, narrow_with, next, prev,
    rune, runes, to_lower, to_upper, widen, widen_with,
};

const EMOJIS: &str = "\u{1F603}\u{1F60E}\u{1F61B}";
const GREEK: &str = "\u{3B5}\u{3BB}\u{3BB}\u{3B7}\u{3BD}\u{3B9}\u{3BA}\u{3CC}";
const RO_LOWER: &str = "mircea neac\u{219}u \u{103}\u{E2}\u{103}\u{21B}\u{EE}";
const RO_UPPER: &str = "MIRCEA NEAC\u{218}U \u{102}\u{C2}\u{102}\u{21A}\u{CE}";

#[test]
fn narrow_embedded_nul_depends_on_extent() {
    let wide: [u16; 7] = [0x41, 0x42, 0x43, 0, 0x44, 0x45, 0x46];
    assert_eq!(narrow(&wide).unwrap().len(), 7);
    assert_eq!(narrow_with(&wide, Extent::NulTerminated).unwrap(), "ABC");
    assert_eq!(narrow(&wide[..4]).unwrap(), "ABC\0");
}

#[test]
fn widen_embedded_nul_depends_on_extent() {
    let bytes = b"ABC\0DEF";
    assert_eq!(widen(bytes).unwrap().len(), 7);
    assert_eq!(widen_with(bytes, Extent::NulTerminated).unwrap(), [0x41, 0x42, 0x43]);
    assert_eq!(widen(&bytes[..4]).unwrap(), [0x41, 0x42, 0x43, 0]);
}

#[test]
fn widen_narrow_roundtrip() {
    let text = "ABCD";
    assert_eq!(narrow(&widen(text).unwrap()).unwrap(), text);
}

#[test]
fn surrogate_pair_matches_scalar_encoding() {
    let from_pair = narrow(&[0xD834, 0xDD1E]).unwrap();
    let from_scalar = encode_utf8(0x1D11E).unwrap();
    assert_eq!(from_pair, from_scalar);
    assert_eq!(from_pair.as_bytes(), b"\xF0\x9D\x84\x9E");
}

#[test]
fn greek_roundtrip_and_length() {
    let wide = widen(GREEK).unwrap();
    assert_eq!(narrow(&wide).unwrap(), GREEK);
    assert_eq!(length(GREEK), 8);
}

#[test]
fn emoji_bytes() {
    assert_eq!(encode_utf8(0x1F604).unwrap().as_bytes(), b"\xF0\x9F\x98\x84");
    assert_eq!(runes(EMOJIS).unwrap().len(), 3);
}

#[test]
fn rune_peeks_and_next_advances() {
    let bytes = EMOJIS.as_bytes();
    assert_eq!(rune(bytes, 4, Extent::Length), '\u{1F60E}');

    let mut pos = 0;
    let mut count = 0;
    while next(bytes, &mut pos, Extent::Length) != REPLACEMENT_CHARACTER {
        count += 1;
    }
    assert_eq!(count, 3);

    let mut terminated = bytes.to_vec();
    terminated.push(0);
    let mut pos = 0;
    let mut count = 0;
    while next(&terminated, &mut pos, Extent::NulTerminated) != '\0' {
        count += 1;
    }
    assert_eq!(count, 3);
    assert_eq!(pos, bytes.len());
}

#[test]
fn valid_str_variants() {
    let bytes = EMOJIS.as_bytes();
    assert!(is_valid(bytes));
    assert!(!is_valid(&bytes[..bytes.len() - 1]));

    let mut buf = bytes.to_vec();
    buf[8] = 0;
    assert!(is_valid_with(&buf, Extent::NulTerminated));

    let mut buf = bytes.to_vec();
    buf[6] = 0;
    assert!(!is_valid_with(&buf, Extent::Length));
}

#[rstest]
#[case::ascii(b"a")]
#[case::degree("\u{B0}".as_bytes())]
#[case::euro("\u{20AC}".as_bytes())]
#[case::smiley("\u{1F603}".as_bytes())]
#[case::bom(b"\xEF\xBB\xBF")]
#[case::empty(b"")]
fn valid_sequences(#[case] bytes: &[u8]) {
    assert!(is_valid(bytes));
    assert!(runes(bytes).is_ok());
}

#[rstest]
#[case::overlong_a(b"\xC1\xA1")]
#[case::overlong_degree(b"\xE0\x82\xB0")]
#[case::overlong_euro(b"\xF0\x82\x82\xAC")]
#[case::utf16_be_bom(b"\xFE\xFF")]
#[case::utf16_le_bom(b"\xFF\xFE")]
#[case::surrogate(b"\xED\xA0\x80")]
fn invalid_sequences(#[case] bytes: &[u8]) {
    assert!(!is_valid(bytes));
    let mut pos = bytes.len();
    assert_eq!(prev(bytes, &mut pos), REPLACEMENT_CHARACTER);
    assert_eq!(pos, bytes.len());
}

#[test]
fn strict_runes_rejects_boms() {
    let err = runes(b"\xFE\xFF\xFF\xFE").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidEncoding);
    assert_eq!(err.offset(), Some(0));
}

#[test]
fn encoding_a_surrogate_fails() {
    let err = encode_utf8(0xD800).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidScalarValue);
    assert_eq!(narrow_runes(&[0xD800]).unwrap_err(), err);
}

#[test]
fn romanian_in_place() {
    let mut s = String::from(RO_LOWER);
    make_upper(&mut s);
    assert_eq!(s, RO_UPPER);
    make_lower(&mut s);
    assert_eq!(s, RO_LOWER);
}

#[test]
fn greek_case() {
    let lower = "\u{3B1}\u{3BB}\u{3C6}\u{3AC}\u{3B2}\u{3B7}\u{3C4}\u{3BF}";
    let upper = "\u{391}\u{39B}\u{3A6}\u{386}\u{392}\u{397}\u{3A4}\u{39F}";
    assert_eq!(to_upper(lower), upper);
    assert_eq!(to_lower(upper), lower);
}

#[test]
fn icompare_romanian() {
    assert_eq!(icompare(RO_LOWER, RO_UPPER), Ordering::Equal);
    assert_eq!(icompare(RO_LOWER, &format!("{RO_UPPER} ")), Ordering::Less);
    let with_digit = "MIRCEA NEAC\u{218}U \u{102}\u{C2}2\u{21A}\u{CE}";
    assert_eq!(icompare(RO_LOWER, with_digit), Ordering::Greater);
}

#[test]
fn char_class_matches_c_locale() {
    for b in 0u8..0x80 {
        let text = [b, 0];
        let c = char::from(b);
        assert_eq!(ctype::is_alpha(&text), c.is_ascii_alphabetic(), "{b}");
        assert_eq!(ctype::is_alnum(&text), c.is_ascii_alphanumeric(), "{b}");
        assert_eq!(ctype::is_digit(&text), c.is_ascii_digit(), "{b}");
        // C counts vertical tab as space, `char::is_ascii_whitespace` does not.
        assert_eq!(ctype::is_space(&text), c.is_ascii_whitespace() || b == 0x0B, "{b}");
        assert_eq!(ctype::is_blank(&text), b == b' ' || b == b'\t', "{b}");
        assert_eq!(ctype::is_xdigit(&text), c.is_ascii_hexdigit(), "{b}");
        assert_eq!(ctype::is_upper(&text), c.is_ascii_uppercase(), "{b}");
        assert_eq!(ctype::is_lower(&text), c.is_ascii_lowercase(), "{b}");
    }
}

#[test]
fn skip_spaces() {
    let text = " \u{A0}\u{65E5}\u{672C}\u{8A9E}".as_bytes();
    let mut cur = Cursor::new(text);
    let mut blanks = 0;
    while !cur.is_at_end() && ctype::is_space(cur.remaining()) {
        blanks += 1;
        cur.next();
    }
    assert_eq!(blanks, 2);
}

#[test]
fn is_upper_lower_romanian() {
    let mut cur = Cursor::new(b"MIRCEANEAC\xC8\x98U\xC4\x82\xC3\x82\xC8\x9A\xC3\x8E");
    while !cur.is_at_end() {
        assert!(ctype::is_upper(cur.remaining()));
        cur.next();
    }
    let mut cur = Cursor::new("mirceaneac\u{219}u\u{103}\u{E2}\u{21B}\u{EE}".as_bytes());
    while !cur.is_at_end() {
        assert!(ctype::is_lower(cur.remaining()));
        cur.next();
    }
}

#[test]
fn lower_substring() {
    let uc = "\u{21A}EPU\u{218} nicolae";
    let lc = "\u{21A}epu\u{219} nicolae";
    let mut cur = Cursor::new(uc.as_bytes());
    let mut s = encode_utf8(u32::from(cur.rune())).unwrap();
    cur.next();
    s.push_str(&to_lower(cur.remaining()));
    assert_eq!(s, lc);
}
