//! Command-line argument definitions

use clap::{ArgAction, Parser};
use std::path::PathBuf;

use pewscreen_core::ResizeMode;

/// Config file looked up when `--config` is not given.
pub const DEFAULT_CONFIG_PATH: &str = "config.json";

/// Encode an image for the PewPew Live screen
#[derive(Debug, Parser)]
#[command(name = "pewscreen", version, about, long_about = None)]
pub struct Args {
    /// Image to encode (overrides `input_path` from the config)
    pub image: Option<PathBuf>,

    /// JSON config file [default: config.json, optional when IMAGE is given]
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Where to write the encoded script
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Save the encoded black-and-white image here as well
    #[arg(long, value_name = "FILE")]
    pub preview: Option<PathBuf>,

    /// Size factor: width = factor * 14, height = 1200 / factor
    #[arg(short = 's', long, value_name = "N")]
    pub size_factor: Option<u32>,

    /// How to fit the image to the target size
    #[arg(short, long, value_parser = parse_mode)]
    pub mode: Option<ResizeMode>,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

fn parse_mode(s: &str) -> Result<ResizeMode, String> {
    s.parse().map_err(|e: pewscreen_core::TransformError| e.to_string())
}
