use crate::config::AppConfig;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Target of every event this crate emits
const CRATE_TARGET: &str = env!("CARGO_CRATE_NAME");

/// Filter used when `RUST_LOG` is unset: other crates at `warn`, this
/// crate at the configured level.
fn default_directive(config: &AppConfig) -> String {
    format!("warn,{CRATE_TARGET}={}", config.log_level)
}

/// Install the global subscriber. Keep the guard alive until exit so the
/// non-blocking file writer flushes.
pub fn init_logging(config: &AppConfig) -> WorkerGuard {
    let file_appender = match config.rotation.as_str() {
        "hourly" => tracing_appender::rolling::hourly(&config.log_dir, &config.log_file),
        "daily" => tracing_appender::rolling::daily(&config.log_dir, &config.log_file),
        _ => tracing_appender::rolling::never(&config.log_dir, &config.log_file),
    };

    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    // RUST_LOG wins over the configured level
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(config)));

    let registry = tracing_subscriber::registry().with(filter);

    if config.use_json {
        let file_layer = fmt::layer()
            .json()
            .with_target(true)
            .with_writer(non_blocking)
            .with_ansi(false);
        registry.with(file_layer).init();
    } else {
        let file_layer = fmt::layer()
            .with_target(false)
            .with_writer(non_blocking)
            .with_ansi(false);
        let stderr_layer = fmt::layer()
            .with_target(false)
            .with_writer(std::io::stderr)
            .with_ansi(true);
        registry.with(file_layer).with(stderr_layer).init();
    }

    guard
}
