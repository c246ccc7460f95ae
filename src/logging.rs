//! File-based logging.
//!
//! The terminal belongs to the TUI, so tracing output goes to a daily-rotated
//! file instead of stderr.

use std::path::Path;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::LoggingSettings;

/// Initialize the global subscriber.
///
/// Logs are written to `<dir>/<file_prefix>.YYYY-MM-DD`. `RUST_LOG` overrides
/// the configured filter. The returned guard flushes pending lines on drop
/// and must be held until exit.
pub fn init(settings: &LoggingSettings) -> std::io::Result<WorkerGuard> {
    let dir = Path::new(&settings.dir);
    std::fs::create_dir_all(dir)?;

    let file_appender = RollingFileAppender::new(Rotation::DAILY, dir, &settings.file_prefix);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&settings.filter))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let fmt_layer = fmt::layer()
        .with_writer(non_blocking)
        .with_ansi(false)
        .with_target(true);

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .init();

    tracing::info!(dir = %dir.display(), "logging initialized");
    Ok(guard)
}
