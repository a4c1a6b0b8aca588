//! JSON run configuration.
//!
//! Every field has a default, so `{}` is a valid configuration. Values are
//! validated while deserializing: a [`Config`] that exists holds a usable
//! size factor, a known resize mode and an alphabet wide enough for 14-bit
//! groups.
//!
//! ```json
//! {
//!     "input_path": "picture.png",
//!     "output_path": "picture.lua",
//!     "logs_path": "logs",
//!     "size_factor": 10,
//!     "conversion_settings": { "resize": { "mode": "crop" } },
//!     "encoding": { "alphabet": "0123456789abcdefghijklmnopqrstuvwxyz" }
//! }
//! ```

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;
use tracing::{debug, trace};

use crate::encode::{Alphabet, EncodingSettings};
use crate::transform::{ResizeMode, SizeFactor};

/// Output file used when neither the configuration nor the caller names one.
pub const DEFAULT_OUTPUT_PATH: &str = "output.lua";

/// Errors raised while reading or validating a configuration file.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration file does not exist.
    #[error("Config file not found: {}", .0.display())]
    NotFound(PathBuf),

    /// The file exists but could not be read.
    #[error("Failed to read config {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Malformed JSON, or a value that fails validation.
    #[error("Invalid configuration: {0}")]
    Invalid(#[from] serde_json::Error),
}

/// Top-level configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Image to encode.
    pub input_path: Option<PathBuf>,
    /// Where the encoded script is written.
    pub output_path: PathBuf,
    /// Where to save the final bilevel image, if anywhere.
    pub preview_path: Option<PathBuf>,
    /// Directory for log files. `None` logs to stderr only.
    pub logs_path: Option<PathBuf>,
    pub size_factor: SizeFactor,
    pub conversion_settings: ConversionSettings,
    pub encoding: EncodingConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            input_path: None,
            output_path: PathBuf::from(DEFAULT_OUTPUT_PATH),
            preview_path: None,
            logs_path: None,
            size_factor: SizeFactor::default(),
            conversion_settings: ConversionSettings::default(),
            encoding: EncodingConfig::default(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ConversionSettings {
    pub resize: ResizeSettings,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ResizeSettings {
    pub mode: ResizeMode,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct EncodingConfig {
    pub alphabet: Alphabet,
}

impl Config {
    /// Parse and validate a configuration from JSON text.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Config = serde_json::from_str(json)?;
        trace!(?config, "Parsed configuration");
        Ok(config)
    }

    /// Read, parse and validate a configuration file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let json = fs::read_to_string(path).map_err(|source| match source.kind() {
            io::ErrorKind::NotFound => ConfigError::NotFound(path.to_path_buf()),
            _ => ConfigError::Io {
                path: path.to_path_buf(),
                source,
            },
        })?;

        let config = Self::from_json(&json)?;
        debug!(path = %path.display(), "Loaded config");
        Ok(config)
    }

    pub fn resize_mode(&self) -> ResizeMode {
        self.conversion_settings.resize.mode
    }

    /// The settings the encoder consumes.
    pub fn encoding_settings(&self) -> EncodingSettings {
        EncodingSettings::new(self.encoding.alphabet.clone(), self.resize_mode())
    }
}
