//! Observability module for the Zeus client.
//!
//! Provides logging setup, credential redaction and request metrics.

mod logging;
mod metrics;

pub use logging::{redact, LogFormat, LogLevel, LoggingConfig};
pub use metrics::{DefaultMetricsCollector, MetricsCollector, NoopMetricsCollector, RequestMetrics};

use std::time::{Duration, Instant};

/// Request timer for measuring operation duration.
pub struct RequestTimer {
    start: Instant,
    operation: &'static str,
}

impl RequestTimer {
    /// Starts timing an operation.
    pub fn new(operation: &'static str) -> Self {
        Self {
            start: Instant::now(),
            operation,
        }
    }

    /// Returns the elapsed time.
    pub fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }
}

impl std::fmt::Debug for RequestTimer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RequestTimer")
            .field("operation", &self.operation)
            .field("elapsed", &self.elapsed())
            .finish()
    }
}
