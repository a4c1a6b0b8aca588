//! Log output for a single run.

use std::fs::{self, File};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use anyhow::Context;
use tracing::subscriber::DefaultGuard;
use tracing::warn;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::{fmt, EnvFilter};

/// Logging for the lifetime of one run.
///
/// Holds the subscriber installed for the current thread. Logging stops when
/// this is dropped.
pub struct Diagnostics {
    _guard: DefaultGuard,
    log_file: Option<PathBuf>,
}

impl Diagnostics {
    /// Log to stderr and, when `logs_dir` is given, to a new file inside it.
    ///
    /// `RUST_LOG` takes precedence over `verbosity` when set.
    pub fn init(verbosity: u8, logs_dir: Option<&Path>) -> anyhow::Result<Self> {
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(default_directive(verbosity)));

        let mut created_dir = false;
        let (file_layer, log_file) = match logs_dir {
            Some(dir) => {
                if !dir.exists() {
                    fs::create_dir_all(dir).with_context(|| {
                        format!("failed to create logs folder {}", dir.display())
                    })?;
                    created_dir = true;
                }
                let path = dir.join(log_file_name(chrono::Local::now()));
                let file = File::create(&path)
                    .with_context(|| format!("failed to create log file {}", path.display()))?;
                let layer = fmt::layer().with_ansi(false).with_writer(Mutex::new(file));
                (Some(layer), Some(path))
            }
            None => (None, None),
        };

        let subscriber = tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().with_writer(std::io::stderr))
            .with(file_layer);
        let guard = tracing::subscriber::set_default(subscriber);

        if let (true, Some(dir)) = (created_dir, logs_dir) {
            warn!(path = %dir.display(), "Logs folder did not exist, created it");
        }

        Ok(Self {
            _guard: guard,
            log_file,
        })
    }

    /// The file this run logs to, if any.
    pub fn log_file(&self) -> Option<&Path> {
        self.log_file.as_deref()
    }
}

fn default_directive(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "info",
        1 => "debug",
        _ => "trace",
    }
}

fn log_file_name(now: chrono::DateTime<chrono::Local>) -> String {
    format!("log-{}.log", now.format("%Y-%m-%d_%H-%M-%S"))
}
