//! Logging and observability
//!
//! Structured logging through `tracing`, with:
//! - Configurable log levels
//! - Console output on stderr (stdout carries the tools' own progress lines)
//! - Optional JSON file logging with daily rotation
//!
//! # Example
//!
//! ```no_run
//! use stitchkit::logging::init_logging;
//! use stitchkit::config::LoggingConfig;
//!
//! let config = LoggingConfig::default();
//! let _guard = init_logging(&config).expect("Failed to initialize logging");
//!
//! tracing::info!("Application started");
//! ```

pub mod structured;

pub use structured::{init_logging, LoggingGuard};

/// Log the release of an engine handle
///
/// # Example
///
/// ```no_run
/// use stitchkit::log_release;
///
/// log_release!("design", "ROSE-01");
/// ```
#[macro_export]
macro_rules! log_release {
    ($kind:expr, $name:expr) => {
        tracing::trace!(kind = $kind, name = %$name, "Released engine handle");
    };
}
