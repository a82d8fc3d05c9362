use crate::config::LogConfig;
use crate::error::{ReflectorError, Result};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Install the global subscriber. Keep the returned guard alive to flush the file writer.
pub fn init_logging(config: &LogConfig) -> Result<WorkerGuard> {
    std::fs::create_dir_all(&config.directory)?;

    // Roll daily, with the component name as the prefix
    let file_appender = tracing_appender::rolling::daily(&config.directory, &config.component);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.default_filter));

    let file_layer = fmt::layer()
        .with_writer(non_blocking)
        .with_ansi(false)
        .with_target(true);

    let registry = tracing_subscriber::registry().with(filter).with(file_layer);

    let installed = if config.to_stderr {
        let stderr_layer = fmt::layer()
            .with_writer(std::io::stderr)
            .with_ansi(true)
            .with_target(false);
        registry.with(stderr_layer).try_init()
    } else {
        registry.try_init()
    };
    installed.map_err(|e| ReflectorError::Logging(e.to_string()))?;

    Ok(guard)
}
