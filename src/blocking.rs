//! Synchronous wrapper around the async client.
//!
//! Each call drives the async operation to completion on a private
//! current-thread runtime. Do not use it from inside an async context:
//! blocking on a runtime from within another runtime panics.

use serde::Serialize;

use crate::client::{ZeusClient as AsyncClient, ZeusClientBuilder};
use crate::errors::{ZeusError, ZeusResult};
use crate::types::{Alert, ApiResponse, LogQuery, MetricNamesQuery, MetricQuery};

/// Blocking Zeus client.
///
/// # Example
///
/// ```rust,no_run
/// use zeus_client::blocking::ZeusClient;
/// use serde_json::json;
///
/// let client = ZeusClient::from_token("your-zeus-token")?;
/// let response = client.send_metrics("cpu.load", &[json!({"point": {"value": 0.7}})])?;
/// println!("{}", response.status);
/// # Ok::<(), zeus_client::ZeusError>(())
/// ```
pub struct ZeusClient {
    inner: AsyncClient,
    runtime: tokio::runtime::Runtime,
}

impl ZeusClient {
    /// Wraps an async client.
    pub fn new(inner: AsyncClient) -> ZeusResult<Self> {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .map_err(|e| ZeusError::configuration(format!("Failed to start runtime: {}", e)))?;

        Ok(Self { inner, runtime })
    }

    /// Builds the async client from `builder` and wraps it.
    pub fn from_builder(builder: ZeusClientBuilder) -> ZeusResult<Self> {
        Self::new(builder.build()?)
    }

    /// Creates a client from environment variables.
    pub fn from_env() -> ZeusResult<Self> {
        Self::new(AsyncClient::from_env()?)
    }

    /// Creates a client from a token, using the default endpoint.
    pub fn from_token(token: impl Into<String>) -> ZeusResult<Self> {
        Self::new(AsyncClient::from_token(token)?)
    }

    /// Returns the wrapped async client.
    pub fn inner(&self) -> &AsyncClient {
        &self.inner
    }

    /// Sends log entries to `log_name`.
    pub fn send_logs<T: Serialize + Sync>(
        &self,
        log_name: &str,
        logs: &[T],
    ) -> ZeusResult<ApiResponse> {
        self.runtime.block_on(self.inner.send_logs(log_name, logs))
    }

    /// Sends log entries tagged with `bucket`.
    pub fn send_logs_to_bucket<T: Serialize + Sync>(
        &self,
        bucket: &str,
        log_name: &str,
        logs: &[T],
    ) -> ZeusResult<ApiResponse> {
        self.runtime
            .block_on(self.inner.send_logs_to_bucket(bucket, log_name, logs))
    }

    /// Queries logs.
    pub fn query_logs(&self, query: &LogQuery) -> ZeusResult<ApiResponse> {
        self.runtime.block_on(self.inner.query_logs(query))
    }

    /// Sends metric points to `metric_name`.
    pub fn send_metrics<T: Serialize + Sync>(
        &self,
        metric_name: &str,
        metrics: &[T],
    ) -> ZeusResult<ApiResponse> {
        self.runtime
            .block_on(self.inner.send_metrics(metric_name, metrics))
    }

    /// Sends metric points tagged with `bucket`.
    pub fn send_metrics_to_bucket<T: Serialize + Sync>(
        &self,
        bucket: &str,
        metric_name: &str,
        metrics: &[T],
    ) -> ZeusResult<ApiResponse> {
        self.runtime
            .block_on(self.inner.send_metrics_to_bucket(bucket, metric_name, metrics))
    }

    /// Reads metric values.
    pub fn query_metric_values(&self, query: &MetricQuery) -> ZeusResult<ApiResponse> {
        self.runtime.block_on(self.inner.query_metric_values(query))
    }

    /// Lists metric names.
    pub fn list_metric_names(&self, query: &MetricNamesQuery) -> ZeusResult<ApiResponse> {
        self.runtime.block_on(self.inner.list_metric_names(query))
    }

    /// Deletes a metric.
    pub fn delete_metric(&self, metric_name: &str) -> ZeusResult<ApiResponse> {
        self.runtime.block_on(self.inner.delete_metric(metric_name))
    }

    /// Creates an alert.
    pub fn create_alert(&self, alert: &Alert) -> ZeusResult<ApiResponse> {
        self.runtime.block_on(self.inner.create_alert(alert))
    }

    /// Replaces an alert definition.
    pub fn modify_alert(&self, alert_id: u64, alert: &Alert) -> ZeusResult<ApiResponse> {
        self.runtime.block_on(self.inner.modify_alert(alert_id, alert))
    }

    /// Gets one alert.
    pub fn get_alert(&self, alert_id: u64) -> ZeusResult<ApiResponse> {
        self.runtime.block_on(self.inner.get_alert(alert_id))
    }

    /// Lists alerts.
    pub fn list_alerts(&self) -> ZeusResult<ApiResponse> {
        self.runtime.block_on(self.inner.list_alerts())
    }

    /// Deletes an alert.
    pub fn delete_alert(&self, alert_id: u64) -> ZeusResult<ApiResponse> {
        self.runtime.block_on(self.inner.delete_alert(alert_id))
    }

    /// Enables alerts.
    pub fn enable_alerts(&self, alert_ids: &[u64]) -> ZeusResult<ApiResponse> {
        self.runtime.block_on(self.inner.enable_alerts(alert_ids))
    }

    /// Disables alerts.
    pub fn disable_alerts(&self, alert_ids: &[u64]) -> ZeusResult<ApiResponse> {
        self.runtime.block_on(self.inner.disable_alerts(alert_ids))
    }

    /// Lists triggered alerts.
    pub fn list_triggered_alerts(&self) -> ZeusResult<ApiResponse> {
        self.runtime.block_on(self.inner.list_triggered_alerts())
    }

    /// Lists alerts triggered in the last 24 hours.
    pub fn list_triggered_alerts_last_24_hours(&self) -> ZeusResult<ApiResponse> {
        self.runtime
            .block_on(self.inner.list_triggered_alerts_last_24_hours())
    }
}

impl std::fmt::Debug for ZeusClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("blocking::ZeusClient")
            .field("inner", &self.inner)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mocks::{MockResponse, MockTransport};
    use crate::transport::{HttpMethod, HttpTransport};
    use serde_json::json;
    use std::sync::Arc;

    fn blocking_client(transport: &Arc<MockTransport>) -> ZeusClient {
        let builder = AsyncClient::builder()
            .token("ZeUsRoCkS")
            .transport(Arc::clone(transport) as Arc<dyn HttpTransport>);
        ZeusClient::from_builder(builder).unwrap()
    }

    #[test]
    fn test_blocking_send_logs() {
        let transport = Arc::new(MockTransport::new());
        transport.queue(MockResponse::json(&json!({"successful": 1})));
        let client = blocking_client(&transport);

        let response = client.send_logs("syslog", &[json!({"m": 1})]).unwrap();

        assert_eq!(response.body, Some(json!({"successful": 1})));
        assert_eq!(transport.last_request().unwrap().method, HttpMethod::Post);
    }

    #[test]
    fn test_blocking_validation_error() {
        let transport = Arc::new(MockTransport::new());
        let client = blocking_client(&transport);

        let err = client.delete_metric("-WrongName").unwrap_err();

        assert!(err.is_validation());
        assert_eq!(transport.request_count(), 0);
    }

    #[test]
    fn test_blocking_alert_round_trips() {
        let transport = Arc::new(MockTransport::new());
        let client = blocking_client(&transport);

        client.enable_alerts(&[4]).unwrap();
        client.list_triggered_alerts().unwrap();

        let requests = transport.requests();
        assert_eq!(requests[0].path, "/alerts/ZeUsRoCkS/enable");
        assert_eq!(requests[1].path, "/triggeredalerts/ZeUsRoCkS");
    }
}
