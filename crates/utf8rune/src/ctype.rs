//! Character classification.
//!
//! The functions at module level test the first scalar of a UTF-8 slice, so
//! a scanner can pass [`Cursor::remaining`](crate::Cursor::remaining) without
//! decoding first. An empty slice or a malformed leading sequence is in no
//! class. [`scalar`] holds the same predicates for an already decoded `char`.
//!
//! The ASCII classes are plain range checks and agree with the C locale for
//! every byte below `0x80`. Letters and digits outside ASCII are in no class.
//!
//! ```rust
//! use utf8rune::{Cursor, ctype};
//!
//! let text = " \u{A0}\u{65E5}\u{672C}".as_bytes();
//! let mut cur = Cursor::new(text);
//! let mut blanks = 0;
//! while !cur.is_at_end() && ctype::is_space(cur.remaining()) {
//!     cur.next();
//!     blanks += 1;
//! }
//! assert_eq!(blanks, 2);
//! ```

use crate::{codec::try_decode_forward, extent::Extent};

/// Predicates on a single scalar value.
pub mod scalar {
    /// `A..=Z` or `a..=z`.
    #[inline]
    #[must_use]
    pub fn is_alpha(c: char) -> bool {
        matches!(c, 'A'..='Z' | 'a'..='z')
    }

    /// `0..=9`.
    #[inline]
    #[must_use]
    pub fn is_digit(c: char) -> bool {
        matches!(c, '0'..='9')
    }

    /// [`is_alpha`] or [`is_digit`].
    #[inline]
    #[must_use]
    pub fn is_alnum(c: char) -> bool {
        is_alpha(c) || is_digit(c)
    }

    /// `0..=9`, `A..=F` or `a..=f`.
    #[inline]
    #[must_use]
    pub fn is_xdigit(c: char) -> bool {
        matches!(c, '0'..='9' | 'A'..='F' | 'a'..='f')
    }

    /// Space or horizontal tab.
    #[inline]
    #[must_use]
    pub fn is_blank(c: char) -> bool {
        matches!(c, ' ' | '\t')
    }

    /// White space: the ASCII controls `\t`, `\n`, vertical tab, form feed
    /// and `\r`, plus the Unicode space separators, NEL and the line and
    /// paragraph separators.
    #[must_use]
    pub fn is_space(c: char) -> bool {
        matches!(
            c,
            '\u{9}'..='\u{D}'
                | ' '
                | '\u{85}'
                | '\u{A0}'
                | '\u{1680}'
                | '\u{2000}'..='\u{200A}'
                | '\u{2028}'
                | '\u{2029}'
                | '\u{202F}'
                | '\u{205F}'
                | '\u{3000}'
        )
    }

    pub use crate::case::{is_lower, is_upper};
}

#[inline]
fn first(text: &[u8]) -> Option<char> {
    let mut pos = 0;
    try_decode_forward(text, &mut pos, Extent::Length)
}

macro_rules! classify {
    ($($(#[$doc:meta])* $name:ident;)*) => {$(
        $(#[$doc])*
        #[must_use]
        pub fn $name<S: AsRef<[u8]> + ?Sized>(text: &S) -> bool {
            first(text.as_ref()).is_some_and(scalar::$name)
        }
    )*};
}

classify! {
    /// [`scalar::is_alpha`] of the first scalar of `text`.
    is_alpha;
    /// [`scalar::is_digit`] of the first scalar of `text`.
    is_digit;
    /// [`scalar::is_alnum`] of the first scalar of `text`.
    is_alnum;
    /// [`scalar::is_xdigit`] of the first scalar of `text`.
    is_xdigit;
    /// [`scalar::is_blank`] of the first scalar of `text`.
    is_blank;
    /// [`scalar::is_space`] of the first scalar of `text`.
    is_space;
    /// [`scalar::is_upper`] of the first scalar of `text`.
    is_upper;
    /// [`scalar::is_lower`] of the first scalar of `text`.
    is_lower;
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    // Reference classes of the "C" locale, spelled out per byte.
    fn c_locale(b: u8) -> [bool; 8] {
        let alpha = b.is_ascii_uppercase() || b.is_ascii_lowercase();
        let digit = (b'0'..=b'9').contains(&b);
        [
            alpha,
            alpha || digit,
            digit,
            matches!(b, b' ' | b'\t' | b'\n' | 0x0B | 0x0C | b'\r'),
            matches!(b, b' ' | b'\t'),
            digit || (b'a'..=b'f').contains(&b) || (b'A'..=b'F').contains(&b),
            (b'A'..=b'Z').contains(&b),
            (b'a'..=b'z').contains(&b),
        ]
    }

    #[test]
    fn ascii_classes_match_c_locale() {
        for b in 0u8..0x80 {
            let text = [b];
            let got = [
                is_alpha(&text),
                is_alnum(&text),
                is_digit(&text),
                is_space(&text),
                is_blank(&text),
                is_xdigit(&text),
                is_upper(&text),
                is_lower(&text),
            ];
            assert_eq!(got, c_locale(b), "byte {b}");
        }
    }

    #[rstest]
    #[case::nbsp("\u{A0}")]
    #[case::nel("\u{85}")]
    #[case::ogham("\u{1680}")]
    #[case::en_quad("\u{2000}")]
    #[case::hair("\u{200A}")]
    #[case::line_sep("\u{2028}")]
    #[case::para_sep("\u{2029}")]
    #[case::narrow_nbsp("\u{202F}")]
    #[case::math_space("\u{205F}")]
    #[case::ideographic("\u{3000}")]
    fn unicode_spaces(#[case] text: &str) {
        assert!(is_space(text));
        assert!(!is_blank(text));
    }

    #[rstest]
    #[case::zero_width_space("\u{200B}")]
    #[case::bom("\u{FEFF}")]
    #[case::cjk("\u{65E5}")]
    fn not_spaces(#[case] text: &str) {
        assert!(!is_space(text));
    }

    #[test]
    fn skip_leading_spaces() {
        let text = " \u{A0}\u{65E5}\u{672C}\u{8A9E}".as_bytes();
        let mut cur = crate::Cursor::new(text);
        let mut blanks = 0;
        while !cur.is_at_end() && is_space(cur.remaining()) {
            cur.next();
            blanks += 1;
        }
        assert_eq!(blanks, 2);
        assert_eq!(cur.rune(), '\u{65E5}');
    }

    #[test]
    fn non_ascii_letters_have_case_but_no_alpha() {
        let text = "\u{218}".as_bytes();
        assert!(is_upper(text));
        assert!(!is_alpha(text));
        assert!(!is_alnum(text));
    }

    #[test]
    fn empty_or_malformed_is_in_no_class() {
        assert!(!is_space(""));
        assert!(!is_alpha(b"\xC1\x81"));
        assert!(!is_space(b"\xE2\x80"));
        assert!(!is_lower(b"\xFF"));
    }

    #[test]
    fn only_first_scalar_counts() {
        assert!(is_digit("7abc"));
        assert!(!is_digit("abc7"));
    }
}
