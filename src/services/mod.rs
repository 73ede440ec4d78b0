//! Service implementations for the Zeus API.
//!
//! One service per resource: logs, metrics, alerts and triggered alerts. All
//! of them send through the shared [`RestClient`].

mod alerts;
mod logs;
mod metrics;
mod rest;
mod triggered_alerts;

pub use alerts::AlertsService;
pub use logs::LogsService;
pub use metrics::MetricsService;
pub use rest::{RestClient, BUCKET_HEADER};
pub use triggered_alerts::TriggeredAlertsService;
