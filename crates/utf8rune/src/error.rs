use thiserror::Error;

/// Result type used by the strict conversions.
pub type Result<T, E = Error> = core::result::Result<T, E>;

/// Failure raised by a strict conversion.
///
/// Tolerant entry points (`next`, `prev`, `rune`, [`is_valid`]) never produce
/// this type; they report failure in-band with
/// [`REPLACEMENT_CHARACTER`] or `false`.
///
/// [`is_valid`]: crate::is_valid
/// [`REPLACEMENT_CHARACTER`]: crate::REPLACEMENT_CHARACTER
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Error {
    /// A malformed or out-of-range sequence was found in the input.
    ///
    /// `offset` is the index (in input code units) of the first unit of the
    /// rejected sequence.
    #[error("invalid encoding at offset {offset}")]
    InvalidEncoding {
        /// Index of the first unit of the rejected sequence.
        offset: usize,
    },
    /// A surrogate or a value above `U+10FFFF` was presented for encoding.
    #[error("invalid code point U+{0:04X}")]
    InvalidScalarValue(u32),
}

/// Discriminator for [`Error`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorKind {
    /// See [`Error::InvalidEncoding`].
    InvalidEncoding,
    /// See [`Error::InvalidScalarValue`].
    InvalidScalarValue,
}

impl Error {
    /// Returns the kind of failure.
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::InvalidEncoding { .. } => ErrorKind::InvalidEncoding,
            Error::InvalidScalarValue(_) => ErrorKind::InvalidScalarValue,
        }
    }

    /// Offset of the rejected input sequence, if the error came from decoding.
    #[must_use]
    pub fn offset(&self) -> Option<usize> {
        match self {
            Error::InvalidEncoding { offset } => Some(*offset),
            Error::InvalidScalarValue(_) => None,
        }
    }

    pub(crate) fn invalid_encoding(offset: usize) -> Self {
        log::debug!("rejecting input: invalid encoding at offset {offset}");
        Error::InvalidEncoding { offset }
    }

    pub(crate) fn invalid_scalar(value: u32) -> Self {
        log::debug!("rejecting scalar U+{value:04X}");
        Error::InvalidScalarValue(value)
    }
}

#[cfg(test)]
mod tests {
    use alloc::string::ToString;

    use super::*;

    #[test]
    fn kind_matches_variant() {
        assert_eq!(
            Error::InvalidEncoding { offset: 3 }.kind(),
            ErrorKind::InvalidEncoding
        );
        assert_eq!(
            Error::InvalidScalarValue(0xD800).kind(),
            ErrorKind::InvalidScalarValue
        );
    }

    #[test]
    fn messages() {
        assert_eq!(
            Error::InvalidEncoding { offset: 7 }.to_string(),
            "invalid encoding at offset 7"
        );
        assert_eq!(
            Error::InvalidScalarValue(0xD800).to_string(),
            "invalid code point U+D800"
        );
        assert_eq!(
            Error::InvalidScalarValue(0x11_0000).to_string(),
            "invalid code point U+110000"
        );
    }

    #[test]
    fn offset_only_for_encoding_errors() {
        assert_eq!(Error::InvalidEncoding { offset: 2 }.offset(), Some(2));
        assert_eq!(Error::InvalidScalarValue(0xDFFF).offset(), None);
    }
}
