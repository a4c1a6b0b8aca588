//! Merging the config file and command-line overrides into one job.

use std::path::{Path, PathBuf};

use anyhow::{bail, Context};
use pewscreen_core::{Config, ConfigError, EncodingSettings, SizeFactor};

use crate::args::{Args, DEFAULT_CONFIG_PATH};

/// Everything one run needs, fully validated.
#[derive(Debug, Clone)]
pub struct Job {
    pub input_path: PathBuf,
    pub output_path: PathBuf,
    pub preview_path: Option<PathBuf>,
    pub logs_path: Option<PathBuf>,
    pub size_factor: SizeFactor,
    pub settings: EncodingSettings,
}

/// Build the job from `args`, reading `config.json` unless told otherwise.
pub fn resolve(args: &Args) -> anyhow::Result<Job> {
    resolve_with_default(args, Path::new(DEFAULT_CONFIG_PATH))
}

/// Like [`resolve`], with the implicit config location made explicit.
///
/// A missing config at the implicit location is fine as long as the image
/// comes from the command line. A missing config the user asked for is not.
pub fn resolve_with_default(args: &Args, default_config: &Path) -> anyhow::Result<Job> {
    let config_path = args.config.as_deref().unwrap_or(default_config);

    let mut config = match Config::load(config_path) {
        Ok(config) => config,
        Err(ConfigError::NotFound(_)) if args.config.is_none() && args.image.is_some() => {
            Config::default()
        }
        Err(err) => {
            return Err(pewscreen_core::Error::from(err))
                .with_context(|| format!("failed to load config {}", config_path.display()));
        }
    };

    if let Some(image) = &args.image {
        config.input_path = Some(image.clone());
    }
    if let Some(output) = &args.output {
        config.output_path = output.clone();
    }
    if let Some(preview) = &args.preview {
        config.preview_path = Some(preview.clone());
    }
    if let Some(factor) = args.size_factor {
        config.size_factor = SizeFactor::new(factor)
            .map_err(pewscreen_core::Error::from)
            .context("invalid --size-factor")?;
    }
    if let Some(mode) = args.mode {
        config.conversion_settings.resize.mode = mode;
    }

    let Some(input_path) = config.input_path.clone() else {
        bail!(
            "no input image: pass one as an argument or set input_path in {}",
            config_path.display()
        );
    };

    Ok(Job {
        settings: config.encoding_settings(),
        input_path,
        output_path: config.output_path,
        preview_path: config.preview_path,
        logs_path: config.logs_path,
        size_factor: config.size_factor,
    })
}
