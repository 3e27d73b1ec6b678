use alloc::string::String;
use core::cmp::Ordering;

use quickcheck::QuickCheck;

use super::test_count;
use crate::{icompare, lower_rune, to_lower, to_upper, upper_rune};

/// Property: mapping a string twice gives the same result as mapping it
/// once.
#[test]
fn case_mapping_is_idempotent() {
    #[allow(clippy::needless_pass_by_value)]
    fn prop(text: String) -> bool {
        let lower = to_lower(&text);
        let upper = to_upper(&text);
        to_lower(&lower) == lower && to_upper(&upper) == upper
    }

    QuickCheck::new()
        .tests(test_count())
        .quickcheck(prop as fn(String) -> bool);
}

/// Property: string mapping is scalar mapping applied to each scalar.
#[test]
fn string_mapping_is_per_scalar() {
    #[allow(clippy::needless_pass_by_value)]
    fn prop(text: String) -> bool {
        let lower: String = text.chars().map(lower_rune).collect();
        let upper: String = text.chars().map(upper_rune).collect();
        to_lower(&text) == lower && to_upper(&text) == upper
    }

    QuickCheck::new()
        .tests(test_count())
        .quickcheck(prop as fn(String) -> bool);
}

/// Property: a string compares equal to its own lowercase form, and
/// `icompare` is antisymmetric.
#[test]
fn icompare_is_consistent() {
    #[allow(clippy::needless_pass_by_value)]
    fn prop(a: String, b: String) -> bool {
        icompare(&a, &to_lower(&a)) == Ordering::Equal
            && icompare(&a, &b) == icompare(&b, &a).reverse()
    }

    QuickCheck::new()
        .tests(test_count())
        .quickcheck(prop as fn(String, String) -> bool);
}
