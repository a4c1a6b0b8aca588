//! Digit alphabets for the triplet encoding.

use std::fmt;

use serde::Deserialize;

use super::{EncodeError, MAX_GROUP_VALUE, TRIPLET_WIDTH};

/// Digits `0-9` followed by `a-z`: base 36.
pub const DEFAULT_ALPHABET: &str = "0123456789abcdefghijklmnopqrstuvwxyz";

/// An ordered set of digit symbols. The position of a symbol is its digit
/// value and the number of symbols is the numeric base.
///
/// Construction guarantees every symbol is a single printable ASCII byte
/// other than `"` or `\`, no symbol repeats, and three digits can hold any
/// 14-bit group value.
#[derive(Clone, PartialEq, Eq, Deserialize)]
#[serde(try_from = "String")]
pub struct Alphabet {
    symbols: Vec<char>,
}

impl Alphabet {
    pub fn new(symbols: &str) -> Result<Self, EncodeError> {
        let symbols: Vec<char> = symbols.chars().collect();

        if symbols.len() < 2 {
            return Err(EncodeError::AlphabetTooShort { len: symbols.len() });
        }

        for (i, &symbol) in symbols.iter().enumerate() {
            if !symbol.is_ascii_graphic() || symbol == '"' || symbol == '\\' {
                return Err(EncodeError::UnsupportedSymbol(symbol));
            }
            if symbols[..i].contains(&symbol) {
                return Err(EncodeError::DuplicateSymbol(symbol));
            }
        }

        let alphabet = Self { symbols };
        let required = MAX_GROUP_VALUE + 1;
        if alphabet.capacity() < required {
            return Err(EncodeError::InsufficientCapacity {
                base: alphabet.base(),
                capacity: alphabet.capacity(),
                required,
            });
        }

        Ok(alphabet)
    }

    /// The numeric base, i.e. the number of symbols.
    pub fn base(&self) -> u32 {
        // At most 92 usable ASCII symbols, so this never truncates
        self.symbols.len() as u32
    }

    /// Number of distinct values a triplet can carry: `base³`.
    pub fn capacity(&self) -> u32 {
        self.base().pow(TRIPLET_WIDTH as u32)
    }

    /// Symbol for digit value `digit`.
    pub fn symbol(&self, digit: u32) -> Option<char> {
        self.symbols.get(digit as usize).copied()
    }

    /// Digit value of `symbol`.
    #[cfg(test)]
    pub(crate) fn digit(&self, symbol: char) -> Option<u32> {
        self.symbols
            .iter()
            .position(|&s| s == symbol)
            .map(|i| i as u32)
    }
}

impl Default for Alphabet {
    fn default() -> Self {
        Self {
            symbols: DEFAULT_ALPHABET.chars().collect(),
        }
    }
}

impl TryFrom<String> for Alphabet {
    type Error = EncodeError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(&value)
    }
}

impl fmt::Display for Alphabet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.symbols.iter().try_for_each(|c| write!(f, "{c}"))
    }
}

impl fmt::Debug for Alphabet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Alphabet({:?})", self.to_string())
    }
}
