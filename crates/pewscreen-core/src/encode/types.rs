//! Core types for the encoder.

use thiserror::Error;

use super::Alphabet;
use crate::transform::ResizeMode;

/// Errors that can occur while building an alphabet or encoding values.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum EncodeError {
    /// Fewer than two symbols cannot form a numeric base.
    #[error("Alphabet needs at least 2 symbols, got {len}")]
    AlphabetTooShort { len: usize },

    /// The same symbol appears twice, making digits ambiguous.
    #[error("Alphabet contains {0:?} more than once")]
    DuplicateSymbol(char),

    /// Symbols must be single printable ASCII bytes that are safe inside a
    /// double-quoted script string.
    #[error("Alphabet symbol {0:?} is not printable ASCII or needs escaping")]
    UnsupportedSymbol(char),

    /// Three digits in this base cannot hold a full 14-bit group.
    #[error(
        "Alphabet of {base} symbols is too small: three digits hold {capacity} values, \
         a 14-bit group needs {required}"
    )]
    InsufficientCapacity {
        base: u32,
        capacity: u32,
        required: u32,
    },

    /// A value does not fit in three digits of the alphabet's base.
    #[error("Value {value} does not fit in three digits (capacity {capacity})")]
    ValueOutOfRange { value: u32, capacity: u32 },
}

/// Options that shape the encoded output.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EncodingSettings {
    /// Digit symbols, lowest value first.
    pub alphabet: Alphabet,
    /// How the image is fitted to the target size.
    pub mode: ResizeMode,
}

impl EncodingSettings {
    pub fn new(alphabet: Alphabet, mode: ResizeMode) -> Self {
        Self { alphabet, mode }
    }
}
