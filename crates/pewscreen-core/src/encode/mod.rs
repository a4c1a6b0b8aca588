//! Serialization of bilevel images into a compact script literal.
//!
//! The output is a single statement, `return"<triplets>"`, that the screen's
//! scripting runtime evaluates to a string. Every triplet is three symbols of
//! the configured [`Alphabet`]:
//!
//! - the first triplet is the size factor, so the reader can recover the
//!   image width (`factor * 14`)
//! - each following triplet is one 14-bit group of pixels, row-major, ON = 1
//!
//! There are no separators, so triplet boundaries are implied by position.
//! This only works because every symbol is a single byte and the same
//! alphabet is used on both ends.
//!
//! # Examples
//!
//! ```ignore
//! use pewscreen_core::encode::{encode_image, EncodingSettings};
//! use pewscreen_core::transform::{BilevelImage, SizeFactor};
//!
//! let img = BilevelImage::filled(14, 1, true);
//! let script = encode_image(SizeFactor::new(1)?, &img, &EncodingSettings::default())?;
//! assert_eq!(script, "return\"001cn3\"");
//! ```

mod alphabet;
mod bitstream;
mod triplet;
mod types;

pub use alphabet::{Alphabet, DEFAULT_ALPHABET};
pub use bitstream::encode_image;
pub use triplet::encode_triplet;
pub use types::{EncodeError, EncodingSettings};

/// Pixels packed into each triplet.
pub const BITS_PER_GROUP: usize = 14;

/// Largest value a group can take.
pub const MAX_GROUP_VALUE: u32 = (1 << BITS_PER_GROUP) - 1;

/// Symbols per encoded value.
pub const TRIPLET_WIDTH: usize = 3;
