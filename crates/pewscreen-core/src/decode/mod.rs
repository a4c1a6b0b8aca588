//! Image loading for pewscreen.
//!
//! This module turns a file on disk (or an in-memory buffer) into an RGB
//! [`DecodedImage`]. Format detection and decoding are delegated to the
//! `image` crate.
//!
//! # Examples
//!
//! ```ignore
//! use pewscreen_core::decode::load_image;
//!
//! let image = load_image("picture.png".as_ref())?;
//! println!("Decoded {}x{} image", image.width, image.height);
//! ```

mod load;
mod types;

pub use load::{decode_image, load_image};
pub use types::{DecodeError, DecodedImage};
