//! Target size derivation from the size factor.
//!
//! The width is always a whole number of 14-bit encoder groups, so every row
//! starts on a group boundary. The height shrinks as the width grows, keeping
//! the total pixel budget close to `1200 * 14` bits.

use serde::Deserialize;

use super::TransformError;
use crate::encode::BITS_PER_GROUP;

/// Pixels of width contributed by each unit of size factor.
pub const WIDTH_PER_FACTOR: u32 = BITS_PER_GROUP as u32;

/// Numerator of the height formula.
pub const HEIGHT_BUDGET: u32 = 1200;

/// Largest factor that still yields a non-zero height.
pub const MAX_SIZE_FACTOR: u32 = HEIGHT_BUDGET;

/// Factor used when the configuration does not name one.
pub const DEFAULT_SIZE_FACTOR: u32 = 10;

/// A validated size factor in `1..=MAX_SIZE_FACTOR`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Deserialize)]
#[serde(try_from = "u32")]
pub struct SizeFactor(u32);

impl SizeFactor {
    pub fn new(factor: u32) -> Result<Self, TransformError> {
        if factor == 0 || factor > MAX_SIZE_FACTOR {
            return Err(TransformError::InvalidSizeFactor(factor));
        }
        Ok(Self(factor))
    }

    pub fn get(self) -> u32 {
        self.0
    }

    /// Target `(width, height)` for this factor.
    pub fn target_size(self) -> (u32, u32) {
        (self.0 * WIDTH_PER_FACTOR, HEIGHT_BUDGET / self.0)
    }
}

impl Default for SizeFactor {
    fn default() -> Self {
        Self(DEFAULT_SIZE_FACTOR)
    }
}

impl TryFrom<u32> for SizeFactor {
    type Error = TransformError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// Compute the target `(width, height)` for a raw size factor.
///
/// `width = factor * 14`, `height = 1200 / factor` (integer division).
///
/// # Errors
///
/// Returns `TransformError::InvalidSizeFactor` for 0 and for factors whose
/// height would round down to zero.
pub fn compute_target_size(size_factor: u32) -> Result<(u32, u32), TransformError> {
    SizeFactor::new(size_factor).map(SizeFactor::target_size)
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Property: the size formula holds across the practical factor range.
        #[test]
        fn prop_size_formula(factor in 1u32..=85) {
            let (width, height) = compute_target_size(factor).unwrap();

            prop_assert_eq!(width, factor * 14);
            prop_assert_eq!(height, 1200 / factor);
            prop_assert_eq!(width % 14, 0, "Width must be a whole number of groups");
        }

        /// Property: every accepted factor produces a non-empty target.
        #[test]
        fn prop_target_never_empty(factor in 1u32..=MAX_SIZE_FACTOR) {
            let (width, height) = compute_target_size(factor).unwrap();
            prop_assert!(width > 0 && height > 0);
        }
    }
}
