//! Tracing initialization and subscriber setup.

use super::file_writer::FileWriter;
use crate::Config;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initializes the global tracing subscriber with JSON output to a rotating
/// log file.
///
/// # Level Resolution
///
/// 1. `RUST_LOG` if set and valid
/// 2. `config.trace_level`
/// 3. Default: `"info"`
///
/// # File Location
///
/// `multiverse-catalog.log` in the directory holding `config.storage_path`.
///
/// # Initialization Behavior
///
/// - Creates the log directory if it doesn't exist
/// - Silently skips setup if directory creation fails (logging is optional)
/// - Idempotent: only the first successful call installs a subscriber
///
/// # Example
///
/// ```rust
/// use multiverse_catalog::observability::init_tracing;
/// use multiverse_catalog::Config;
///
/// let dir = std::env::temp_dir().join("multiverse-catalog-doc");
/// let config = Config {
///     storage_path: dir.join("storage.json"),
///     trace_level: Some("debug".to_string()),
///     ..Default::default()
/// };
///
/// init_tracing(&config);
/// tracing::debug!("tracing is now active");
/// ```
pub fn init_tracing(config: &Config) {
    let level = config.trace_level.as_deref().unwrap_or("info");

    let log_file = crate::infrastructure::log_path(&config.storage_path);
    if let Some(dir) = log_file.parent().filter(|d| !d.as_os_str().is_empty()) {
        if std::fs::create_dir_all(dir).is_err() {
            return;
        }
    }

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let file_layer = tracing_subscriber::fmt::layer()
        .json()
        .with_ansi(false)
        .with_current_span(true)
        .with_writer(FileWriter::new(log_file));

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(file_layer)
        .try_init();
}
