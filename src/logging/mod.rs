//! Logging and observability
//!
//! Structured logging through `tracing`: a console layer on stderr and an
//! optional JSON file layer with rotation.
//!
//! # Example
//!
//! ```no_run
//! use seedlog::logging::init_logging;
//! use seedlog::config::LoggingConfig;
//!
//! let config = LoggingConfig::default();
//! let _guard = init_logging("info", &config).expect("Failed to initialize logging");
//!
//! tracing::info!("Application started");
//! ```

pub mod structured;

pub use structured::{init_logging, LoggingGuard};

/// Log the completion of a generator run
///
/// # Example
///
/// ```no_run
/// use seedlog::log_generation_complete;
/// use std::time::Duration;
///
/// let count = 250;
/// let duration = Duration::from_millis(40);
/// log_generation_complete!(count, duration);
/// ```
#[macro_export]
macro_rules! log_generation_complete {
    ($count:expr, $duration:expr) => {
        tracing::info!(
            count = $count,
            duration_ms = $duration.as_millis() as u64,
            "Generation completed"
        );
    };
}

/// Log an error with context
///
/// # Example
///
/// ```no_run
/// use seedlog::log_error_with_context;
/// use seedlog::domain::SeedlogError;
///
/// let error = SeedlogError::Parse("expected value at line 1 column 1".to_string());
/// log_error_with_context!(&error, "Failed to read source");
/// ```
#[macro_export]
macro_rules! log_error_with_context {
    ($error:expr, $context:expr) => {
        tracing::error!(
            error = %$error,
            context = $context,
            "Error occurred"
        );
    };
}

/// Log a batch processing operation
///
/// # Example
///
/// ```no_run
/// use seedlog::log_batch_processing;
///
/// log_batch_processing!(2, 3);
/// ```
#[macro_export]
macro_rules! log_batch_processing {
    ($current:expr, $total:expr) => {
        tracing::debug!(
            current = $current,
            total = $total,
            progress_pct = ($current as f64 / $total as f64 * 100.0),
            "Processing batch"
        );
    };
}
