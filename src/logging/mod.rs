// Logging module - tracing subscriber setup
//
// Human-readable logs go to stderr. When file logging is enabled, a JSON
// layer is added on a non-blocking writer; the returned guard must be held
// until exit so buffered lines are flushed.
//
// Precedence: RUST_LOG env var > config file > default "info"

use crate::config::{LogRotation, LoggingConfig};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Filter directive applied when RUST_LOG is unset
pub fn default_filter(config: &LoggingConfig) -> String {
    format!("catppuccin_thunderbird={}", config.level)
}

/// Install the global subscriber
pub fn init(config: &LoggingConfig) -> Option<WorkerGuard> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| default_filter(config).into());

    let stderr_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false);

    if !config.file_enabled {
        tracing_subscriber::registry()
            .with(filter)
            .with(stderr_layer)
            .init();
        return None;
    }

    if let Err(e) = std::fs::create_dir_all(&config.file_dir) {
        eprintln!(
            "Warning: Could not create log directory {:?}: {}",
            config.file_dir, e
        );
        // Fall back to stderr only
        tracing_subscriber::registry()
            .with(filter)
            .with(stderr_layer)
            .init();
        return None;
    }

    let file_appender = match config.file_rotation {
        LogRotation::Hourly => {
            tracing_appender::rolling::hourly(&config.file_dir, &config.file_prefix)
        }
        LogRotation::Daily => {
            tracing_appender::rolling::daily(&config.file_dir, &config.file_prefix)
        }
        LogRotation::Never => {
            tracing_appender::rolling::never(&config.file_dir, &config.file_prefix)
        }
    };

    // Writes happen on a background thread
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::registry()
        .with(filter)
        .with(stderr_layer)
        .with(
            tracing_subscriber::fmt::layer()
                .json()
                .with_writer(non_blocking)
                .with_ansi(false),
        )
        .init();

    Some(guard)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_filter_uses_configured_level() {
        let mut config = LoggingConfig::default();
        assert_eq!(default_filter(&config), "catppuccin_thunderbird=info");

        config.level = "trace".to_string();
        assert_eq!(default_filter(&config), "catppuccin_thunderbird=trace");
    }
}
