/// Errors raised when decoding base58 text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecodeError {
    /// The input contained a byte outside the active alphabet. Any code
    /// point at or above 128 is invalid for every alphabet.
    InvalidChar(u8),
}

impl core::fmt::Display for DecodeError {
    fn fmt(&self, formatter: &mut core::fmt::Formatter) -> core::fmt::Result {
        match self {
            DecodeError::InvalidChar(c) => {
                core::write!(formatter, "Illegal base58 char number: {}", c)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for DecodeError {}

/// Errors raised when building an [`Alphabet`](crate::Alphabet) at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlphabetError {
    /// The alphabet string was not exactly 58 bytes long.
    Length(usize),
    /// The alphabet contained a code point at or above 128.
    NonAscii(u8),
    /// The same character appeared twice.
    Duplicate(u8),
}

impl core::fmt::Display for AlphabetError {
    fn fmt(&self, formatter: &mut core::fmt::Formatter) -> core::fmt::Result {
        match self {
            AlphabetError::Length(len) => {
                core::write!(formatter, "Alphabet must be 58 characters, got {}", len)
            }
            AlphabetError::NonAscii(c) => {
                core::write!(formatter, "Alphabet char number {} is not ASCII", c)
            }
            AlphabetError::Duplicate(c) => {
                core::write!(formatter, "Alphabet char number {} appears twice", c)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for AlphabetError {}
