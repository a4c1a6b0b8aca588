//! Shared types for the transform stage.

use std::fmt;
use std::str::FromStr;

use serde::Deserialize;
use thiserror::Error;

/// Errors raised while sizing or reshaping a bilevel image.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TransformError {
    /// The size factor yields no usable target size.
    #[error("Invalid size factor {0}: must be between 1 and {max}", max = super::MAX_SIZE_FACTOR)]
    InvalidSizeFactor(u32),

    /// The resize mode string is not one of the known modes.
    #[error("Unknown resize mode {0:?}: expected \"resize\" or \"crop\"")]
    UnknownMode(String),

    /// Crop mode needs a source at least as large as the target.
    #[error(
        "Source image {source_width}x{source_height} is smaller than the \
         {target_width}x{target_height} crop region"
    )]
    InsufficientSource {
        source_width: u32,
        source_height: u32,
        target_width: u32,
        target_height: u32,
    },

    /// There are no pixels to rescale.
    #[error("Cannot resize an empty image")]
    EmptySource,
}

/// How the bilevel image is brought to the target size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResizeMode {
    /// Rescale the whole image to the target size.
    #[default]
    Resize,
    /// Keep the top-left region of the target size, unscaled.
    Crop,
}

impl ResizeMode {
    pub fn as_str(self) -> &'static str {
        match self {
            ResizeMode::Resize => "resize",
            ResizeMode::Crop => "crop",
        }
    }
}

impl fmt::Display for ResizeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ResizeMode {
    type Err = TransformError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "resize" => Ok(ResizeMode::Resize),
            "crop" => Ok(ResizeMode::Crop),
            other => Err(TransformError::UnknownMode(other.to_string())),
        }
    }
}
