//! Tracing subscriber set-up.
//!
//! The interactive screen owns the terminal, so its logs go to a file.
//! One-shot commands log to stderr.

use std::fs;
use std::path::{Path, PathBuf};

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::error::AppError;

/// Where log events are written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogTarget {
    Stderr,
    File(PathBuf),
}

/// Filter directive for a `-v` count. `RUST_LOG` overrides it.
pub fn level_for_verbosity(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    }
}

fn env_filter(verbose: u8) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level_for_verbosity(verbose)))
}

/// Install the global subscriber.
///
/// For file targets the returned guard must be held until exit, or
/// buffered events are lost.
pub fn init(target: &LogTarget, verbose: u8) -> Result<Option<WorkerGuard>, AppError> {
    match target {
        LogTarget::Stderr => {
            tracing_subscriber::registry()
                .with(env_filter(verbose))
                .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
                .try_init()
                .map_err(|e| AppError::Logging(e.to_string()))?;
            Ok(None)
        }
        LogTarget::File(path) => {
            let (dir, file_name) = split_log_path(path)?;
            fs::create_dir_all(&dir)?;

            let appender = tracing_appender::rolling::never(&dir, file_name);
            let (writer, guard) = tracing_appender::non_blocking(appender);

            tracing_subscriber::registry()
                .with(env_filter(verbose))
                .with(
                    fmt::layer()
                        .with_writer(writer)
                        .with_target(true)
                        .with_ansi(false), // No ANSI codes in log files
                )
                .try_init()
                .map_err(|e| AppError::Logging(e.to_string()))?;

            tracing::info!(log_file = %path.display(), "file logging initialized");
            Ok(Some(guard))
        }
    }
}

/// Split a log path into its directory and file name.
fn split_log_path(path: &Path) -> Result<(PathBuf, &std::ffi::OsStr), AppError> {
    let file_name = path
        .file_name()
        .ok_or_else(|| AppError::Logging(format!("{} is not a file path", path.display())))?;
    let dir = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p.to_path_buf(),
        _ => PathBuf::from("."),
    };
    Ok((dir, file_name))
}
