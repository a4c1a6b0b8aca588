//! Fixed-width three-digit encoding of integers.

use super::{Alphabet, EncodeError};

/// Encode `value` as exactly three symbols of `alphabet`, most significant
/// digit first.
///
/// # Errors
///
/// Returns `EncodeError::ValueOutOfRange` when `value >= base³`.
pub fn encode_triplet(value: u32, alphabet: &Alphabet) -> Result<String, EncodeError> {
    let mut out = String::with_capacity(3);
    push_triplet(&mut out, value, alphabet)?;
    Ok(out)
}

/// Append the triplet for `value` to `out`.
pub(crate) fn push_triplet(
    out: &mut String,
    value: u32,
    alphabet: &Alphabet,
) -> Result<(), EncodeError> {
    let capacity = alphabet.capacity();
    let out_of_range = || EncodeError::ValueOutOfRange { value, capacity };
    if value >= capacity {
        return Err(out_of_range());
    }

    let base = alphabet.base();
    for digit in [value / (base * base), (value / base) % base, value % base] {
        out.push(alphabet.symbol(digit).ok_or_else(out_of_range)?);
    }
    Ok(())
}

/// Inverse of `encode_triplet`, only needed to check round trips.
#[cfg(test)]
fn decode_triplet(triplet: &str, alphabet: &Alphabet) -> Option<u32> {
    let base = alphabet.base();
    triplet
        .chars()
        .try_fold(0u32, |acc, c| Some(acc * base + alphabet.digit(c)?))
}
