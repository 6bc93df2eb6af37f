use std::path::PathBuf;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

const LOG_FILE: &str = "wheelpick.log";
const DEFAULT_FILTER: &str = "wheelpick=info";

/// Dropping this flushes the non-blocking writer.
pub struct LoggingGuard {
    _guard: WorkerGuard,
}

/// Settings log dir when it can be created, otherwise one under the temp dir.
fn resolve_log_dir() -> Option<PathBuf> {
    match wheelpick::services::settings::ensure_log_dir() {
        Ok(dir) => Some(dir),
        Err(_) => {
            let dir = std::env::temp_dir().join("wheelpick").join("logs");
            std::fs::create_dir_all(&dir).ok()?;
            Some(dir)
        }
    }
}

/// Routes `tracing` output to a daily log file; the terminal belongs to the picker.
pub fn init() -> Option<LoggingGuard> {
    let log_dir = resolve_log_dir()?;
    let (writer, guard) =
        tracing_appender::non_blocking(tracing_appender::rolling::daily(&log_dir, LOG_FILE));

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    let fmt = tracing_subscriber::fmt::layer()
        .with_writer(writer)
        .with_ansi(false)
        .with_target(true)
        .with_file(true)
        .with_line_number(true);

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt)
        .try_init()
        .ok()?;

    let previous = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        tracing::error!(panic = %info, "panic");
        previous(info);
    }));

    tracing::info!(log_dir = %log_dir.display(), version = env!("CARGO_PKG_VERSION"), "logging initialized");
    Some(LoggingGuard { _guard: guard })
}
