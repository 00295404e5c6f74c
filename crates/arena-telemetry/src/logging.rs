//! Structured logging initialization.

use crate::error::{TelemetryError, TelemetryResult};
use serde::{Deserialize, Serialize};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Environment variable selecting the deployment environment.
pub const ENV_VAR: &str = "ARENA_ENV";

/// Log output format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

/// `[telemetry]` section.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Default filter directive, used when `RUST_LOG` is unset.
    #[serde(default = "default_log_level")]
    pub log_level: String,
    #[serde(default)]
    pub format: LogFormat,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            format: LogFormat::default(),
        }
    }
}

impl LoggingConfig {
    /// Format after applying the environment; production always logs JSON.
    pub fn effective_format(&self, env: Option<&str>) -> LogFormat {
        match env {
            Some(env) if env.eq_ignore_ascii_case("production") => LogFormat::Json,
            _ => self.format,
        }
    }

    /// Build the filter; a non-empty `rust_log` replaces `log_level`.
    pub fn env_filter(&self, rust_log: Option<&str>) -> TelemetryResult<EnvFilter> {
        let directive = rust_log
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .unwrap_or(self.log_level.as_str());

        EnvFilter::try_new(directive).map_err(|e| TelemetryError::InvalidFilter {
            filter: directive.to_string(),
            reason: e.to_string(),
        })
    }
}

/// Initialize the global tracing subscriber.
///
/// Output goes to stderr. Fails if a subscriber is already installed.
pub fn init_logging(config: &LoggingConfig) -> TelemetryResult<()> {
    let rust_log = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    let env = std::env::var(ENV_VAR).ok();

    let env_filter = config.env_filter(rust_log.as_deref())?;

    let result = match config.effective_format(env.as_deref()) {
        LogFormat::Json => tracing_subscriber::registry()
            .with(env_filter)
            .with(
                fmt::layer()
                    .json()
                    .with_current_span(true)
                    .with_span_list(true)
                    .with_writer(std::io::stderr),
            )
            .try_init(),
        LogFormat::Pretty => tracing_subscriber::registry()
            .with(env_filter)
            .with(
                fmt::layer()
                    .pretty()
                    .with_target(true)
                    .with_writer(std::io::stderr),
            )
            .try_init(),
    };

    result.map_err(|e| TelemetryError::LoggingInit(e.to_string()))
}
