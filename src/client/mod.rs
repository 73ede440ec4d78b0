//! Zeus API client.
//!
//! Provides the main client interface for interacting with the Zeus API.

use serde::Serialize;
use std::sync::Arc;

use crate::auth::{AuthProvider, TokenAuth};
use crate::config::{ZeusConfig, ZeusConfigBuilder};
use crate::errors::{ZeusError, ZeusResult};
use crate::observability::{DefaultMetricsCollector, MetricsCollector};
use crate::services::{
    AlertsService, LogsService, MetricsService, RestClient, TriggeredAlertsService,
};
use crate::transport::{HttpTransport, HttpTransportImpl};
use crate::types::{Alert, ApiResponse, LogQuery, MetricNamesQuery, MetricQuery};

/// The main Zeus client.
///
/// Every operation is one HTTP round trip. The resource services are
/// reachable through [`logs`](Self::logs), [`metrics`](Self::metrics),
/// [`alerts`](Self::alerts) and [`triggered_alerts`](Self::triggered_alerts);
/// the same operations are mirrored as flat methods on the client.
///
/// # Example
///
/// ```rust,no_run
/// use zeus_client::{LogQuery, ZeusClient};
/// use serde_json::json;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let client = ZeusClient::builder()
///         .token("your-zeus-token")
///         .build()?;
///
///     client
///         .send_logs("syslog", &[json!({"message": "service started"})])
///         .await?;
///
///     let found = client
///         .query_logs(&LogQuery::new("syslog").pattern("started"))
///         .await?;
///     println!("{} {:?}", found.status, found.body);
///     Ok(())
/// }
/// ```
pub struct ZeusClient {
    config: ZeusConfig,
    logs_service: LogsService,
    metrics_service: MetricsService,
    alerts_service: AlertsService,
    triggered_alerts_service: TriggeredAlertsService,
    collector: Arc<dyn MetricsCollector>,
}

impl ZeusClient {
    /// Creates a new client builder.
    pub fn builder() -> ZeusClientBuilder {
        ZeusClientBuilder::new()
    }

    /// Creates a client from environment variables.
    ///
    /// Reads `ZEUS_TOKEN` and optionally `ZEUS_ENDPOINT` and `ZEUS_TIMEOUT`.
    pub fn from_env() -> ZeusResult<Self> {
        let config = ZeusConfig::from_env()?;
        ZeusClientBuilder::from_config(config).build()
    }

    /// Creates a client from a token, using the default endpoint.
    pub fn from_token(token: impl Into<String>) -> ZeusResult<Self> {
        ZeusClientBuilder::new().token(token).build()
    }

    /// Returns the logs service.
    pub fn logs(&self) -> &LogsService {
        &self.logs_service
    }

    /// Returns the metrics service.
    pub fn metrics(&self) -> &MetricsService {
        &self.metrics_service
    }

    /// Returns the alerts service.
    pub fn alerts(&self) -> &AlertsService {
        &self.alerts_service
    }

    /// Returns the triggered alerts service.
    pub fn triggered_alerts(&self) -> &TriggeredAlertsService {
        &self.triggered_alerts_service
    }

    /// Returns the configuration.
    pub fn config(&self) -> &ZeusConfig {
        &self.config
    }

    /// Returns the request metrics collector.
    pub fn request_metrics(&self) -> &Arc<dyn MetricsCollector> {
        &self.collector
    }

    /// Sends log entries to `log_name`. See [`LogsService::send`].
    pub async fn send_logs<T: Serialize + Sync>(
        &self,
        log_name: &str,
        logs: &[T],
    ) -> ZeusResult<ApiResponse> {
        self.logs_service.send(log_name, logs).await
    }

    /// Sends log entries tagged with `bucket`. See [`LogsService::send_to_bucket`].
    pub async fn send_logs_to_bucket<T: Serialize + Sync>(
        &self,
        bucket: &str,
        log_name: &str,
        logs: &[T],
    ) -> ZeusResult<ApiResponse> {
        self.logs_service.send_to_bucket(bucket, log_name, logs).await
    }

    /// Queries logs. See [`LogsService::query`].
    pub async fn query_logs(&self, query: &LogQuery) -> ZeusResult<ApiResponse> {
        self.logs_service.query(query).await
    }

    /// Sends metric points to `metric_name`. See [`MetricsService::send`].
    pub async fn send_metrics<T: Serialize + Sync>(
        &self,
        metric_name: &str,
        metrics: &[T],
    ) -> ZeusResult<ApiResponse> {
        self.metrics_service.send(metric_name, metrics).await
    }

    /// Sends metric points tagged with `bucket`. See [`MetricsService::send_to_bucket`].
    pub async fn send_metrics_to_bucket<T: Serialize + Sync>(
        &self,
        bucket: &str,
        metric_name: &str,
        metrics: &[T],
    ) -> ZeusResult<ApiResponse> {
        self.metrics_service
            .send_to_bucket(bucket, metric_name, metrics)
            .await
    }

    /// Reads metric values. See [`MetricsService::query_values`].
    pub async fn query_metric_values(&self, query: &MetricQuery) -> ZeusResult<ApiResponse> {
        self.metrics_service.query_values(query).await
    }

    /// Lists metric names. See [`MetricsService::list_names`].
    pub async fn list_metric_names(&self, query: &MetricNamesQuery) -> ZeusResult<ApiResponse> {
        self.metrics_service.list_names(query).await
    }

    /// Deletes a metric. See [`MetricsService::delete`].
    pub async fn delete_metric(&self, metric_name: &str) -> ZeusResult<ApiResponse> {
        self.metrics_service.delete(metric_name).await
    }

    /// Creates an alert.
    pub async fn create_alert(&self, alert: &Alert) -> ZeusResult<ApiResponse> {
        self.alerts_service.create(alert).await
    }

    /// Replaces an alert definition.
    pub async fn modify_alert(&self, alert_id: u64, alert: &Alert) -> ZeusResult<ApiResponse> {
        self.alerts_service.modify(alert_id, alert).await
    }

    /// Gets one alert.
    pub async fn get_alert(&self, alert_id: u64) -> ZeusResult<ApiResponse> {
        self.alerts_service.get(alert_id).await
    }

    /// Lists alerts.
    pub async fn list_alerts(&self) -> ZeusResult<ApiResponse> {
        self.alerts_service.list().await
    }

    /// Deletes an alert.
    pub async fn delete_alert(&self, alert_id: u64) -> ZeusResult<ApiResponse> {
        self.alerts_service.delete(alert_id).await
    }

    /// Enables alerts.
    pub async fn enable_alerts(&self, alert_ids: &[u64]) -> ZeusResult<ApiResponse> {
        self.alerts_service.enable(alert_ids).await
    }

    /// Disables alerts.
    pub async fn disable_alerts(&self, alert_ids: &[u64]) -> ZeusResult<ApiResponse> {
        self.alerts_service.disable(alert_ids).await
    }

    /// Lists triggered alerts.
    pub async fn list_triggered_alerts(&self) -> ZeusResult<ApiResponse> {
        self.triggered_alerts_service.list().await
    }

    /// Lists alerts triggered in the last 24 hours.
    pub async fn list_triggered_alerts_last_24_hours(&self) -> ZeusResult<ApiResponse> {
        self.triggered_alerts_service.list_last_24_hours().await
    }
}

impl std::fmt::Debug for ZeusClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ZeusClient")
            .field("config", &self.config)
            .finish()
    }
}

/// Builder for the Zeus client.
pub struct ZeusClientBuilder {
    config_builder: ZeusConfigBuilder,
    transport: Option<Arc<dyn HttpTransport>>,
    auth: Option<Arc<dyn AuthProvider>>,
    metrics: Option<Arc<dyn MetricsCollector>>,
}

impl ZeusClientBuilder {
    /// Creates a new client builder.
    pub fn new() -> Self {
        Self {
            config_builder: ZeusConfigBuilder::new(),
            transport: None,
            auth: None,
            metrics: None,
        }
    }

    /// Creates a builder from an existing configuration.
    pub fn from_config(config: ZeusConfig) -> Self {
        let mut config_builder = ZeusConfigBuilder::new()
            .token(config.token())
            .endpoint(config.endpoint.as_str())
            .timeout(config.timeout);
        for (name, value) in &config.custom_headers {
            config_builder = config_builder.header(name.as_str(), value.as_str());
        }

        Self {
            config_builder,
            transport: None,
            auth: None,
            metrics: None,
        }
    }

    /// Sets the account token.
    pub fn token(mut self, token: impl Into<String>) -> Self {
        self.config_builder = self.config_builder.token(token);
        self
    }

    /// Sets the token from an environment variable.
    pub fn token_from_env(mut self, var_name: &str) -> ZeusResult<Self> {
        self.config_builder = self.config_builder.token_from_env(var_name)?;
        Ok(self)
    }

    /// Sets the endpoint. The scheme is always forced to `https`.
    pub fn endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.config_builder = self.config_builder.endpoint(endpoint);
        self
    }

    /// Sets the request timeout.
    pub fn timeout(mut self, timeout: std::time::Duration) -> Self {
        self.config_builder = self.config_builder.timeout(timeout);
        self
    }

    /// Sets the timeout in seconds.
    pub fn timeout_secs(mut self, secs: u64) -> Self {
        self.config_builder = self.config_builder.timeout_secs(secs);
        self
    }

    /// Adds a header sent with every request.
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.config_builder = self.config_builder.header(name, value);
        self
    }

    /// Sets a custom transport.
    pub fn transport(mut self, transport: Arc<dyn HttpTransport>) -> Self {
        self.transport = Some(transport);
        self
    }

    /// Sets a custom auth provider.
    pub fn auth(mut self, auth: Arc<dyn AuthProvider>) -> Self {
        self.auth = Some(auth);
        self
    }

    /// Sets a custom metrics collector.
    pub fn metrics(mut self, metrics: Arc<dyn MetricsCollector>) -> Self {
        self.metrics = Some(metrics);
        self
    }

    /// Builds the client.
    pub fn build(self) -> ZeusResult<ZeusClient> {
        let config = self.config_builder.build()?;

        let transport: Arc<dyn HttpTransport> = match self.transport {
            Some(t) => t,
            None => Arc::new(
                HttpTransportImpl::new(config.endpoint.clone(), config.timeout).map_err(|e| {
                    ZeusError::Configuration {
                        message: e.to_string(),
                    }
                })?,
            ),
        };

        let auth: Arc<dyn AuthProvider> = match self.auth {
            Some(a) => a,
            None => Arc::new(TokenAuth::new(config.token.clone())),
        };
        auth.validate()?;

        let collector: Arc<dyn MetricsCollector> = match self.metrics {
            Some(m) => m,
            None => Arc::new(DefaultMetricsCollector::new()),
        };

        let rest = Arc::new(RestClient::new(
            transport,
            auth,
            Arc::clone(&collector),
            config.token.clone(),
            config.custom_headers.clone(),
        ));

        tracing::debug!(
            endpoint = %config.endpoint,
            token = %config.token_hint(),
            "Zeus client initialized"
        );

        Ok(ZeusClient {
            logs_service: LogsService::new(Arc::clone(&rest)),
            metrics_service: MetricsService::new(Arc::clone(&rest)),
            alerts_service: AlertsService::new(Arc::clone(&rest)),
            triggered_alerts_service: TriggeredAlertsService::new(rest),
            collector,
            config,
        })
    }
}

impl Default for ZeusClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mocks::{MockResponse, MockTransport};
    use serde_json::json;
    use std::time::Duration;

    fn mock_client(transport: &Arc<MockTransport>) -> ZeusClient {
        ZeusClient::builder()
            .token("ZeUsRoCkS")
            .endpoint("zeus.rocks")
            .transport(Arc::clone(transport) as Arc<dyn HttpTransport>)
            .build()
            .unwrap()
    }

    #[test]
    fn test_builder_requires_token() {
        let result = ZeusClient::builder().build();
        assert!(matches!(result, Err(ZeusError::Configuration { .. })));
    }

    #[test]
    fn test_builder_sets_config() {
        let transport = Arc::new(MockTransport::new());
        let client = ZeusClient::builder()
            .token("ZeUsRoCkS")
            .endpoint("http://zeus.rocks")
            .timeout(Duration::from_secs(3))
            .transport(transport)
            .build()
            .unwrap();

        assert_eq!(client.config().endpoint.as_str(), "https://zeus.rocks/");
        assert_eq!(client.config().timeout, Duration::from_secs(3));
    }

    #[test]
    fn test_from_config_keeps_headers() {
        let config = ZeusConfig::builder()
            .token("ZeUsRoCkS")
            .header("X-Team", "ops")
            .build()
            .unwrap();

        let client = ZeusClientBuilder::from_config(config)
            .transport(Arc::new(MockTransport::new()))
            .build()
            .unwrap();

        assert_eq!(
            client.config().custom_headers,
            vec![("X-Team".to_string(), "ops".to_string())]
        );
    }

    #[test]
    fn test_debug_redacts_token() {
        let client = mock_client(&Arc::new(MockTransport::new()));
        let debug = format!("{:?}", client);
        assert!(!debug.contains("ZeUsRoCkS"));
    }

    #[tokio::test]
    async fn test_flat_methods_share_transport() {
        let transport = Arc::new(MockTransport::new());
        transport.queue(MockResponse::json(&json!({"successful": 1})));
        let client = mock_client(&transport);

        client.send_logs("syslog", &[json!({"a": 1})]).await.unwrap();
        client.list_alerts().await.unwrap();
        client.list_triggered_alerts_last_24_hours().await.unwrap();

        assert_eq!(transport.request_count(), 3);
        let metrics = client.request_metrics().get_metrics();
        assert_eq!(metrics.total_requests, 3);
        assert_eq!(metrics.operations.get("send_logs"), Some(&1));
    }
}
