//! Zeus Client Library
//!
//! A Rust client for the Zeus telemetry API. Sends and queries logs and
//! metrics, manages alerts and lists triggered alerts.
//!
//! # Features
//!
//! - **Logs**: send batches of JSON entries, query by pattern and time range
//! - **Metrics**: send points, read aggregated values, list and delete metrics
//! - **Alerts**: create, modify, enable, disable and delete alert definitions
//! - **Validation**: names and date ranges are checked before any request
//! - **Observability**: `tracing` events with credential redaction, request metrics
//! - **Async/Await**: built on Tokio, with a [`blocking`] wrapper for sync code
//!
//! Every operation is a single HTTPS round trip. HTTP 500 is returned as
//! [`ZeusError::RemoteServerError`]; any other status comes back as an
//! [`ApiResponse`] carrying the status and the JSON body, if there was one.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use zeus_client::{MetricQuery, ZeusClient};
//! use serde_json::json;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = ZeusClient::builder()
//!         .token("your-zeus-token")
//!         .build()?;
//!
//!     client
//!         .send_metrics("cpu.load", &[json!({"point": {"value": 0.42}})])
//!         .await?;
//!
//!     let values = client
//!         .query_metric_values(
//!             &MetricQuery::new("cpu.load")
//!                 .aggregator_function("max")
//!                 .group_interval("1m"),
//!         )
//!         .await?;
//!     println!("{:?}", values.body);
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod auth;
pub mod blocking;
pub mod client;
pub mod config;
pub mod errors;
pub mod mocks;
pub mod observability;
pub mod services;
pub mod transport;
pub mod types;
pub mod validation;

// Re-exports for convenience
pub use client::{ZeusClient, ZeusClientBuilder};
pub use config::{ZeusConfig, DEFAULT_ENDPOINT, DEFAULT_TIMEOUT};
pub use errors::{ZeusError, ZeusResult};

// Type re-exports
pub use types::{
    Alert, AlertBuilder, AlertStatus, AlertType, ApiResponse, DateBound, LogQuery,
    MetricNamesQuery, MetricQuery,
};
pub use validation::{validate_date_range, validate_log_name, validate_metric_name};
