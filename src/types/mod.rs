//! Request and response types for the Zeus API.

pub mod alerts;
pub mod common;
pub mod logs;
pub mod metrics;

pub use alerts::{Alert, AlertBuilder, AlertStatus, AlertType};
pub use common::{ApiResponse, DateBound};
pub use logs::LogQuery;
pub use metrics::{MetricNamesQuery, MetricQuery};
