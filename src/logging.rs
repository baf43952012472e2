//! File-based logging module for Book Explorer
//!
//! This module sets up tracing-based logging that writes to a file instead of stdout,
//! since the application uses a TUI that occupies the terminal.

use std::path::PathBuf;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
    EnvFilter,
};

use crate::config::{LOG_DIR, LOG_DIR_ENV, LOG_FILE_PREFIX};

const DEFAULT_FILTER: &str = "book_explorer=debug,reqwest=info,warn";

/// Initialize the logging system.
///
/// Logs are written to `.logs/book-explorer.YYYY-MM-DD.log` with daily rotation, or under
/// `BOOK_EXPLORER_LOG_DIR` when that is set. The log level can be controlled via the
/// `RUST_LOG` environment variable.
///
/// Default log levels:
/// - `book_explorer` modules: DEBUG
/// - `reqwest`: INFO
/// - Other crates: WARN
///
/// The returned guard flushes buffered lines when dropped; keep it alive until shutdown.
pub fn init_logging() -> anyhow::Result<WorkerGuard> {
    let log_dir = resolve_log_dir(std::env::var(LOG_DIR_ENV).ok());
    std::fs::create_dir_all(&log_dir)?;

    let file_appender = RollingFileAppender::new(Rotation::DAILY, &log_dir, LOG_FILE_PREFIX);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let fmt_layer = fmt::layer()
        .with_writer(non_blocking)
        .with_ansi(false)
        .with_target(true)
        .with_thread_ids(false)
        .with_thread_names(false)
        .with_span_events(FmtSpan::CLOSE);

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init()?;

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        dir = %log_dir.display(),
        "Logging initialized"
    );

    Ok(guard)
}

fn resolve_log_dir(override_dir: Option<String>) -> PathBuf {
    override_dir
        .map(|dir| dir.trim().to_string())
        .filter(|dir| !dir.is_empty())
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(LOG_DIR))
}

/// Log the outcome of a catalog API call, with optional request context
#[macro_export]
macro_rules! log_api_result {
    ($operation:expr, $result:expr $(, $($field:tt)*)?) => {
        match &$result {
            Ok(_) => tracing::info!(operation = $operation, $($($field)*,)? "API request successful"),
            Err(e) => tracing::error!(operation = $operation, $($($field)*,)? error = %e, "API request failed"),
        }
    };
}

/// Log a catalog API request with additional context
#[macro_export]
macro_rules! log_api_request {
    ($operation:expr, $($field:tt)*) => {
        tracing::debug!(operation = $operation, $($field)*, "API request started");
    };
}
