//! Tracing subscriber setup
//!
//! The TUI owns the terminal, so in that mode logs go to a file through a
//! non-blocking writer. Text modes log to stderr.

use crate::config::LogConfig;
use anyhow::{Context, Result};
use std::path::PathBuf;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Where log output should go
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogTarget {
    Stderr,
    File,
}

/// Install the global subscriber
///
/// `RUST_LOG` takes precedence over the configured level. The returned guard must be
/// kept alive for file output to be flushed.
///
/// # Errors
/// Fails if the log directory cannot be created or a subscriber is already set.
pub fn init(config: &LogConfig, target: LogTarget) -> Result<Option<WorkerGuard>> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.level))
        .with_context(|| format!("invalid log level `{}`", config.level))?;

    match target {
        LogTarget::Stderr => {
            tracing_subscriber::registry()
                .with(filter)
                .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
                .try_init()
                .context("failed to install log subscriber")?;
            Ok(None)
        }
        LogTarget::File => {
            let path = config.file.clone().unwrap_or_else(default_log_file);
            let dir = path
                .parent()
                .filter(|parent| !parent.as_os_str().is_empty())
                .map_or_else(|| PathBuf::from("."), PathBuf::from);
            let file_name = path
                .file_name()
                .context("log file path has no file name")?
                .to_owned();
            std::fs::create_dir_all(&dir)
                .with_context(|| format!("failed to create log directory {}", dir.display()))?;

            let appender = tracing_appender::rolling::never(&dir, file_name);
            let (writer, guard) = tracing_appender::non_blocking(appender);

            tracing_subscriber::registry()
                .with(filter)
                .with(
                    tracing_subscriber::fmt::layer()
                        .with_writer(writer)
                        .with_ansi(false),
                )
                .try_init()
                .context("failed to install log subscriber")?;

            tracing::info!(path = %path.display(), "logging to file");
            Ok(Some(guard))
        }
    }
}

/// `<temp dir>/wordle_game/wordle_game.log`
#[must_use]
pub fn default_log_file() -> PathBuf {
    std::env::temp_dir()
        .join("wordle_game")
        .join("wordle_game.log")
}
