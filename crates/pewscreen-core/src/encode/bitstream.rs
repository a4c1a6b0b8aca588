//! Packing a bilevel image into the triplet script.

use tracing::{debug, warn};

use super::triplet::push_triplet;
use super::{EncodeError, EncodingSettings, BITS_PER_GROUP, TRIPLET_WIDTH};
use crate::transform::{BilevelImage, SizeFactor};

/// Encode `image` as a `return"<triplets>"` script statement.
///
/// The first triplet carries the size factor. The pixels follow in row-major
/// order, one bit each (ON = 1), packed big-endian into 14-bit groups with
/// one triplet per group. A trailing run of fewer than 14 bits does not form
/// a group and is dropped; a warning reports how many bits were lost.
///
/// Images produced by [`crate::transform::resize`] are always a whole number
/// of groups wide, so nothing is dropped for them.
///
/// # Errors
///
/// Only fails if a value does not fit the alphabet, which a validated
/// [`super::Alphabet`] rules out for group values and for any [`SizeFactor`].
pub fn encode_image(
    size_factor: SizeFactor,
    image: &BilevelImage,
    settings: &EncodingSettings,
) -> Result<String, EncodeError> {
    let alphabet = &settings.alphabet;
    debug!(
        size_factor = size_factor.get(),
        width = image.width(),
        height = image.height(),
        base = alphabet.base(),
        "Encoding image"
    );

    let groups = image.pixels().chunks_exact(BITS_PER_GROUP);
    let dropped = groups.remainder().len();
    if dropped > 0 {
        warn!(
            dropped,
            total = image.pixel_count(),
            "Trailing pixels do not fill a 14-bit group and are discarded"
        );
    }

    let group_count = groups.len();
    let mut encoded = String::with_capacity((group_count + 1) * TRIPLET_WIDTH + 8);
    encoded.push_str("return\"");
    push_triplet(&mut encoded, size_factor.get(), alphabet)?;
    for group in groups {
        push_triplet(&mut encoded, pack_group(group), alphabet)?;
    }
    encoded.push('"');

    debug!(groups = group_count, len = encoded.len(), "Encoded image");
    Ok(encoded)
}

/// Read a run of bits as a big-endian unsigned integer.
fn pack_group(bits: &[bool]) -> u32 {
    bits.iter().fold(0, |acc, &bit| (acc << 1) | u32::from(bit))
}
