//! pewscreen - encode an image for the PewPew Live screen
//!
//! Usage: `pewscreen [IMAGE] [--config FILE] [--output FILE] [...]`

mod args;
mod logging;
mod resolve;

use std::fs;
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use tracing::{error, info};

use crate::args::Args;
use crate::logging::Diagnostics;
use crate::resolve::Job;

fn main() -> ExitCode {
    let args = Args::parse();
    let job = resolve::resolve(&args);

    let logs_dir = job.as_ref().ok().and_then(|job| job.logs_path.clone());
    let diagnostics = match Diagnostics::init(args.verbose, logs_dir.as_deref()) {
        Ok(diagnostics) => diagnostics,
        Err(err) => {
            eprintln!("error: {err:#}");
            return ExitCode::FAILURE;
        }
    };

    info!("Starting the encoder");
    if let Some(path) = diagnostics.log_file() {
        info!(path = %path.display(), "Logging to file");
    }
    match job.and_then(|job| run(&job)) {
        Ok(()) => {
            info!("Job done, exiting");
            ExitCode::SUCCESS
        }
        Err(err) => {
            match err.downcast_ref::<pewscreen_core::Error>() {
                Some(core) => error!(kind = ?core.kind(), "{err:#}"),
                None => error!("{err:#}"),
            }
            ExitCode::FAILURE
        }
    }
}

fn run(job: &Job) -> anyhow::Result<()> {
    info!(
        input = %job.input_path.display(),
        size_factor = job.size_factor.get(),
        mode = %job.settings.mode,
        "Encoding"
    );

    let encoded = pewscreen_core::encode_file(&job.input_path, job.size_factor, &job.settings)
        .with_context(|| format!("failed to encode {}", job.input_path.display()))?;

    if let Some(preview) = &job.preview_path {
        encoded
            .bilevel
            .to_gray_image()
            .save(preview)
            .with_context(|| format!("failed to save preview {}", preview.display()))?;
        info!(path = %preview.display(), "Saved preview");
    }

    fs::write(&job.output_path, &encoded.script)
        .with_context(|| format!("failed to write {}", job.output_path.display()))?;
    info!(
        path = %job.output_path.display(),
        bytes = encoded.script.len(),
        "Wrote encoded script"
    );

    Ok(())
}
