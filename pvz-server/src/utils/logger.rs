//! Logging Infrastructure
//!
//! Structured logging setup with support for both development and production
//! environments. Console output by default; daily-rolling file output takes
//! over when a log directory is provided.

use std::path::Path;

use tracing_subscriber::EnvFilter;

/// Initialize the logger with console output only
pub fn init_logger(log_level: &str) {
    init_logger_with_file(log_level, None);
}

/// Initialize the logger, writing to a daily-rolling file when `log_dir`
/// points at an existing directory (stdout otherwise)
///
/// The level acts as the default for the `RUST_LOG` env filter, so individual
/// targets (`uow`, `http_access`, `sqlx`) can still be tuned per deployment.
pub fn init_logger_with_file(log_level: &str, log_dir: Option<&str>) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("{log_level},sqlx=warn")));

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_file(false)
        .with_line_number(false)
        .with_thread_ids(false)
        .with_target(false);

    // Add file output if log_dir is provided
    if let Some(dir) = log_dir {
        let log_path = Path::new(dir);
        if log_path.exists()
            && let Some(dir_str) = log_path.to_str()
        {
            let file_appender = tracing_appender::rolling::daily(dir_str, "pvz-server");
            subscriber.with_writer(file_appender).init();
            return;
        }
    }

    subscriber.init();
}
