use std::io;

use configs::{LogFormat, LoggingConfig};
use tracing_subscriber::{fmt, EnvFilter};

/// Initialize tracing subscriber with sensible defaults and stdout writer.
/// - Respects `RUST_LOG` if set
/// - Falls back to `info,sqlx=warn`
pub fn init_logging_default() {
    init_logging(&LoggingConfig::default());
}

/// Initialize tracing subscriber with JSON structured output.
pub fn init_logging_json() {
    init_logging(&LoggingConfig { format: LogFormat::Json, ..LoggingConfig::default() });
}

/// Initialize tracing from the `[logging]` section of the app config.
///
/// Safe to call more than once; later calls are ignored.
pub fn init_logging(cfg: &LoggingConfig) {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(cfg.filter.as_str()));
    let builder = fmt().with_env_filter(env_filter).with_target(false);
    let _ = match cfg.format {
        LogFormat::Compact => builder.compact().with_writer(io::stdout).try_init(),
        LogFormat::Json => builder.json().with_writer(io::stdout).try_init(),
    };
}

/// Subscriber for test binaries: output captured by the harness, never fails on reinit.
pub fn init_test_logging() {
    let _ = fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_test_writer()
        .try_init();
}
