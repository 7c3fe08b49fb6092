//! Tracing subscriber setup
//!
//! Console output goes to stderr so that stdout carries only the run report.
//! File logging writes JSON lines through a non-blocking rolling appender.

use crate::config::LoggingConfig;
use crate::domain::{Result, SeedlogError};
use tracing::{Level, Subscriber};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::registry::{LookupSpan, Registry};
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

const LOG_FILE_PREFIX: &str = "seedlog.log";

type BoxedLayer<S> = Box<dyn Layer<S> + Send + Sync + 'static>;

/// Keeps the file writer alive; drop it last so buffered lines are flushed
pub struct LoggingGuard {
    _file_guard: Option<WorkerGuard>,
}

/// Installs the global subscriber
///
/// `RUST_LOG` takes precedence over `level` when set.
///
/// # Errors
///
/// Returns an error for an unknown log level, when the log directory cannot
/// be created, or when a global subscriber is already installed.
pub fn init_logging(level: &str, config: &LoggingConfig) -> Result<LoggingGuard> {
    let level = parse_log_level(level)?;
    let filter = || {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(format!("seedlog={level}")))
    };

    let mut layers: Vec<BoxedLayer<Registry>> = Vec::with_capacity(2);
    layers.push(
        tracing_subscriber::fmt::layer()
            .with_target(false)
            .with_writer(std::io::stderr)
            .with_filter(filter())
            .boxed(),
    );

    let file_guard = if config.local_enabled {
        let (layer, guard) = json_file_layer(config)?;
        layers.push(layer.with_filter(filter()).boxed());
        Some(guard)
    } else {
        None
    };

    tracing_subscriber::registry()
        .with(layers)
        .try_init()
        .map_err(|e| SeedlogError::Configuration(format!("Failed to initialize logging: {e}")))?;

    tracing::debug!(
        level = %level,
        local_enabled = config.local_enabled,
        local_path = %config.local_path,
        "Logging initialized"
    );

    Ok(LoggingGuard {
        _file_guard: file_guard,
    })
}

fn json_file_layer<S>(config: &LoggingConfig) -> Result<(BoxedLayer<S>, WorkerGuard)>
where
    S: Subscriber + for<'a> LookupSpan<'a>,
{
    std::fs::create_dir_all(&config.local_path).map_err(|e| {
        SeedlogError::Configuration(format!(
            "Failed to create log directory {}: {e}",
            config.local_path
        ))
    })?;

    let appender = RollingFileAppender::new(
        rotation(&config.local_rotation),
        &config.local_path,
        LOG_FILE_PREFIX,
    );
    let (writer, guard) = tracing_appender::non_blocking(appender);

    let layer = tracing_subscriber::fmt::layer()
        .json()
        .with_target(true)
        .with_writer(writer)
        .boxed();
    Ok((layer, guard))
}

fn rotation(name: &str) -> Rotation {
    match name {
        "hourly" => Rotation::HOURLY,
        "never" => Rotation::NEVER,
        _ => Rotation::DAILY,
    }
}

fn parse_log_level(level: &str) -> Result<Level> {
    match level.trim().to_lowercase().as_str() {
        "trace" => Ok(Level::TRACE),
        "debug" => Ok(Level::DEBUG),
        "info" => Ok(Level::INFO),
        "warn" => Ok(Level::WARN),
        "error" => Ok(Level::ERROR),
        _ => Err(SeedlogError::Configuration(format!(
            "Invalid log level: {level}. Must be one of: trace, debug, info, warn, error"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case("trace", Level::TRACE)]
    #[test_case("debug", Level::DEBUG)]
    #[test_case("INFO", Level::INFO)]
    #[test_case("Warn", Level::WARN)]
    #[test_case("error", Level::ERROR)]
    fn test_parse_log_level(input: &str, expected: Level) {
        assert_eq!(parse_log_level(input).unwrap(), expected);
    }

    #[test_case("verbose")]
    #[test_case("")]
    #[test_case("3")]
    fn test_parse_log_level_invalid(input: &str) {
        assert!(parse_log_level(input).is_err());
    }

    #[test]
    fn test_rotation_names() {
        assert_eq!(rotation("hourly"), Rotation::HOURLY);
        assert_eq!(rotation("never"), Rotation::NEVER);
        assert_eq!(rotation("daily"), Rotation::DAILY);
    }

    #[test_case("INFO")]
    #[test_case("Debug")]
    #[test_case(" warn ")]
    fn test_parse_log_level_agrees_with_config_validation(input: &str) {
        let mut config = crate::config::SeedlogConfig::default();
        config.application.log_level = input.to_string();
        assert!(config.validate().is_ok());
        assert!(parse_log_level(input).is_ok());
    }

    #[test]
    fn test_init_logging_rejects_invalid_level() {
        let config = LoggingConfig::default();
        assert!(init_logging("loud", &config).is_err());
    }
}
