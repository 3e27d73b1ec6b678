mod property_case;
mod property_codec;
mod property_convert;

/// Number of quickcheck cases per property.
fn test_count() -> u64 {
    #[cfg(not(miri))]
    let tests = if cfg!(feature = "test-fast") {
        100
    } else if is_ci::cached() {
        10_000
    } else {
        1_000
    };
    #[cfg(miri)]
    let tests = 10;
    tests
}
