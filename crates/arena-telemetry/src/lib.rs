//! Structured logging for the arena monitor.
//!
//! - `tracing` subscriber with `EnvFilter` (`RUST_LOG` wins over config)
//! - Pretty output for development, JSON for production
//! - Always writes to stderr; stdout is reserved for command output

pub mod error;
pub mod logging;

pub use error::{TelemetryError, TelemetryResult};
pub use logging::{init_logging, LogFormat, LoggingConfig};
