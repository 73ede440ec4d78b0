//! Logging configuration and redaction.
//!
//! The client itself only emits `tracing` events; [`LoggingConfig::init`] is a
//! convenience for applications that do not set up a subscriber themselves.

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Log level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub enum LogLevel {
    /// Trace level.
    Trace,
    /// Debug level.
    Debug,
    /// Info level.
    #[default]
    Info,
    /// Warning level.
    Warn,
    /// Error level.
    Error,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Trace => LevelFilter::TRACE,
            LogLevel::Debug => LevelFilter::DEBUG,
            LogLevel::Info => LevelFilter::INFO,
            LogLevel::Warn => LevelFilter::WARN,
            LogLevel::Error => LevelFilter::ERROR,
        }
    }
}

/// Log output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    /// Human-readable output.
    #[default]
    Pretty,
    /// One JSON object per line.
    Json,
    /// Single-line compact output.
    Compact,
}

/// Logging configuration.
#[derive(Debug, Clone, Default)]
pub struct LoggingConfig {
    /// Minimum log level.
    pub level: LogLevel,
    /// Output format.
    pub format: LogFormat,
    /// Include the module target in each line.
    pub include_target: bool,
}

impl LoggingConfig {
    /// Creates a new logging configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the log level.
    pub fn with_level(mut self, level: LogLevel) -> Self {
        self.level = level;
        self
    }

    /// Sets the output format.
    pub fn with_format(mut self, format: LogFormat) -> Self {
        self.format = format;
        self
    }

    /// Sets whether to include the module target.
    pub fn with_target(mut self, include: bool) -> Self {
        self.include_target = include;
        self
    }

    /// Installs a global `tracing` subscriber with this configuration.
    ///
    /// `RUST_LOG` directives are honoured on top of the configured level.
    ///
    /// # Errors
    ///
    /// Returns an error if a global subscriber is already installed.
    pub fn init(self) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let filter = EnvFilter::builder()
            .with_default_directive(LevelFilter::from(self.level).into())
            .from_env_lossy();

        let registry = tracing_subscriber::registry().with(filter);
        match self.format {
            LogFormat::Pretty => registry
                .with(fmt::layer().with_target(self.include_target))
                .try_init()?,
            LogFormat::Json => registry.with(fmt::layer().json()).try_init()?,
            LogFormat::Compact => registry
                .with(fmt::layer().compact().with_target(self.include_target))
                .try_init()?,
        }

        Ok(())
    }
}

static BEARER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"Bearer [^\s,}]+").unwrap_or_else(|e| unreachable!("bearer pattern: {e}"))
});

/// Redacts credentials from text before it is logged.
///
/// Bearer credentials are masked, and so is every occurrence of `token`
/// (the account token also travels in request paths).
///
/// # Example
///
/// ```
/// use zeus_client::observability::redact;
///
/// assert_eq!(redact("/logs/ZeUsRoCkS/syslog", "ZeUsRoCkS"), "/logs/***/syslog");
/// assert_eq!(redact("Bearer abc123", ""), "Bearer ***");
/// ```
pub fn redact(text: &str, token: &str) -> String {
    let text = BEARER.replace_all(text, "Bearer ***");
    if token.is_empty() {
        text.into_owned()
    } else {
        text.replace(token, "***")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_level_ordering() {
        assert!(LogLevel::Trace < LogLevel::Debug);
        assert!(LogLevel::Debug < LogLevel::Info);
        assert!(LogLevel::Info < LogLevel::Warn);
        assert!(LogLevel::Warn < LogLevel::Error);
    }

    #[test]
    fn test_level_filter_conversion() {
        assert_eq!(LevelFilter::from(LogLevel::Debug), LevelFilter::DEBUG);
        assert_eq!(LevelFilter::from(LogLevel::default()), LevelFilter::INFO);
    }

    #[test]
    fn test_config_builders() {
        let config = LoggingConfig::new()
            .with_level(LogLevel::Warn)
            .with_format(LogFormat::Json)
            .with_target(true);

        assert_eq!(config.level, LogLevel::Warn);
        assert_eq!(config.format, LogFormat::Json);
        assert!(config.include_target);
    }

    #[test]
    fn test_redact_path_token() {
        let redacted = redact("GET /alerts/ZeUsRoCkS/42", "ZeUsRoCkS");
        assert_eq!(redacted, "GET /alerts/***/42");
    }

    #[test]
    fn test_redact_bearer() {
        let redacted = redact("Authorization: Bearer secret-value, next", "");
        assert!(!redacted.contains("secret-value"));
        assert!(redacted.contains("Bearer ***"));
    }
}
