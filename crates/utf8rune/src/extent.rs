/// How far an input slice extends.
///
/// Every reader in this crate works on a slice whose end is known. `Extent`
/// decides whether a zero unit inside that slice is text or a terminator.
///
/// # Default
///
/// [`Extent::Length`].
///
/// # Examples
///
/// ```rust
/// use utf8rune::{Extent, widen_with};
///
/// let bytes = b"ABC\0DEF";
/// assert_eq!(widen_with(bytes, Extent::Length).unwrap().len(), 7);
/// assert_eq!(widen_with(bytes, Extent::NulTerminated).unwrap().len(), 3);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Extent {
    /// The whole slice is input. Embedded zero units are `U+0000`.
    #[default]
    Length,
    /// Input stops at the first zero unit, or at the end of the slice if
    /// there is none. The terminator is not part of the text.
    NulTerminated,
}

impl Extent {
    /// Returns the prefix of `units` that this extent covers.
    #[must_use]
    pub fn clip<T: Copy + Default + PartialEq>(self, units: &[T]) -> &[T] {
        match self {
            Extent::Length => units,
            Extent::NulTerminated => {
                let zero = T::default();
                let end = units.iter().position(|&u| u == zero).unwrap_or(units.len());
                &units[..end]
            }
        }
    }

    /// `true` for [`Extent::NulTerminated`].
    #[inline]
    #[must_use]
    pub fn stops_at_nul(self) -> bool {
        matches!(self, Extent::NulTerminated)
    }
}

#[cfg(test)]
mod tests {
    use super::Extent;

    #[test]
    fn length_keeps_embedded_zero() {
        let units: &[u16] = &[0x41, 0, 0x42];
        assert_eq!(Extent::Length.clip(units), units);
    }

    #[test]
    fn nul_terminated_stops_at_first_zero() {
        let units: &[u8] = b"AB\0C\0";
        assert_eq!(Extent::NulTerminated.clip(units), b"AB");
    }

    #[test]
    fn nul_terminated_without_terminator_takes_all() {
        let units: &[u32] = &[0x1F600, 0x41];
        assert_eq!(Extent::NulTerminated.clip(units), units);
    }

    #[test]
    fn default_is_length() {
        assert_eq!(Extent::default(), Extent::Length);
    }
}
