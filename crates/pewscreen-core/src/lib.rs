//! pewscreen core - image to PewPew Live screen encoder
//!
//! This crate turns a raster image into the `return"<triplets>"` statement
//! read by the PewPew Live screen script: the image is dithered to black and
//! white, fitted to a size derived from a single size factor, and packed
//! 14 pixels at a time into base-36 triplets.
//!
//! The stages are usable on their own ([`decode`], [`transform`],
//! [`encode`]) or chained through [`pipeline`].

pub mod config;
pub mod decode;
pub mod encode;
pub mod luminance;
pub mod pipeline;
pub mod transform;

use thiserror::Error;

pub use config::{Config, ConfigError};
pub use decode::{DecodeError, DecodedImage};
pub use encode::{encode_image, encode_triplet, Alphabet, EncodeError, EncodingSettings};
pub use pipeline::{encode_decoded, encode_file, Encoded};
pub use transform::{
    compute_target_size, resize, to_bilevel, BilevelImage, ResizeMode, SizeFactor, TransformError,
};

/// Any failure of a conversion run.
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Decode(#[from] DecodeError),

    #[error(transparent)]
    Transform(#[from] TransformError),

    #[error(transparent)]
    Encode(#[from] EncodeError),
}

/// Broad classes of failure, for reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// A setting is unusable: size factor, resize mode, alphabet, or a crop
    /// that does not fit the source.
    InvalidConfiguration,
    /// A file that must exist does not.
    ResourceNotFound,
    /// Input bytes could not be read or understood as an image.
    DecodeFailure,
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::Config(ConfigError::NotFound(_)) => ErrorKind::ResourceNotFound,
            Error::Config(ConfigError::Io { .. }) => ErrorKind::DecodeFailure,
            Error::Config(ConfigError::Invalid(_)) => ErrorKind::InvalidConfiguration,
            Error::Decode(DecodeError::NotFound(_)) => ErrorKind::ResourceNotFound,
            Error::Decode(_) => ErrorKind::DecodeFailure,
            Error::Transform(_) | Error::Encode(_) => ErrorKind::InvalidConfiguration,
        }
    }
}
