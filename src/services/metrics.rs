//! Metrics service.

use serde::Serialize;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::instrument;

use super::rest::{RestClient, BUCKET_HEADER};
use crate::errors::ZeusResult;
use crate::types::common::to_params;
use crate::types::{ApiResponse, MetricNamesQuery, MetricQuery};
use crate::validation::{validate_date_range, validate_metric_name};

/// Metrics service for sending, reading and deleting metrics.
#[derive(Debug, Clone)]
pub struct MetricsService {
    rest: Arc<RestClient>,
}

impl MetricsService {
    /// Creates a new metrics service.
    pub fn new(rest: Arc<RestClient>) -> Self {
        Self { rest }
    }

    /// Sends metric points to a metric.
    ///
    /// The points are encoded as one JSON array in the `metrics` form field.
    ///
    /// # Errors
    ///
    /// Returns [`ZeusError::InvalidName`](crate::ZeusError::InvalidName)
    /// without contacting the server when `metric_name` is malformed.
    pub async fn send<T: Serialize + Sync>(
        &self,
        metric_name: &str,
        metrics: &[T],
    ) -> ZeusResult<ApiResponse> {
        self.post(metric_name, None, metrics).await
    }

    /// Sends metric points tagged with a target bucket.
    ///
    /// Same as [`send`](Self::send), with the bucket carried in the
    /// `Bucket-Name` header of this request only.
    pub async fn send_to_bucket<T: Serialize + Sync>(
        &self,
        bucket: &str,
        metric_name: &str,
        metrics: &[T],
    ) -> ZeusResult<ApiResponse> {
        self.post(metric_name, Some(bucket), metrics).await
    }

    #[instrument(skip(self, metrics), fields(count = metrics.len()))]
    async fn post<T: Serialize + Sync>(
        &self,
        metric_name: &str,
        bucket: Option<&str>,
        metrics: &[T],
    ) -> ZeusResult<ApiResponse> {
        validate_metric_name(Some(metric_name))?;

        let encoded = serde_json::to_string(metrics)?;
        let mut headers = HashMap::new();
        if let Some(bucket) = bucket {
            headers.insert(BUCKET_HEADER.to_string(), bucket.to_string());
        }

        self.rest
            .post_form(
                "send_metrics",
                self.rest.resource_path("metrics", &[metric_name]),
                vec![("metrics".to_string(), encoded)],
                headers,
            )
            .await
    }

    /// Reads the values of a metric, optionally aggregated.
    ///
    /// # Errors
    ///
    /// Returns [`ZeusError::InvalidDate`](crate::ZeusError::InvalidDate)
    /// when the date range is not numeric or inverted.
    #[instrument(skip(self, query), fields(metric_name = %query.metric_name))]
    pub async fn query_values(&self, query: &MetricQuery) -> ZeusResult<ApiResponse> {
        validate_date_range(query.from_date.as_ref(), query.to_date.as_ref())?;

        self.rest
            .get(
                "query_metric_values",
                self.rest.resource_path("metrics", &["_values"]),
                to_params(query)?,
            )
            .await
    }

    /// Lists metric names.
    #[instrument(skip(self))]
    pub async fn list_names(&self, query: &MetricNamesQuery) -> ZeusResult<ApiResponse> {
        self.rest
            .get(
                "list_metric_names",
                self.rest.resource_path("metrics", &["_names"]),
                to_params(query)?,
            )
            .await
    }

    /// Deletes a metric and all of its points.
    ///
    /// # Errors
    ///
    /// Returns [`ZeusError::InvalidName`](crate::ZeusError::InvalidName)
    /// without contacting the server when `metric_name` is malformed.
    #[instrument(skip(self))]
    pub async fn delete(&self, metric_name: &str) -> ZeusResult<ApiResponse> {
        validate_metric_name(Some(metric_name))?;

        self.rest
            .delete(
                "delete_metric",
                self.rest.resource_path("metrics", &[metric_name]),
            )
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ZeusError;
    use crate::mocks::{MockResponse, MockTransport};
    use crate::services::test_support::rest_client;
    use crate::transport::{HttpMethod, Payload};
    use serde_json::json;

    #[tokio::test]
    async fn test_send_metrics() {
        let transport = Arc::new(MockTransport::new());
        let metrics = MetricsService::new(rest_client(&transport));

        metrics
            .send("cpu.load", &[json!({"point": {"value": 0.5}})])
            .await
            .unwrap();

        let request = transport.last_request().unwrap();
        assert_eq!(request.path, "/metrics/ZeUsRoCkS/cpu.load");
        assert_eq!(request.param("metrics"), Some(r#"[{"point":{"value":0.5}}]"#));
        assert_eq!(request.header(BUCKET_HEADER), None);
    }

    #[tokio::test]
    async fn test_send_metrics_to_bucket() {
        let transport = Arc::new(MockTransport::new());
        let metrics = MetricsService::new(rest_client(&transport));

        metrics
            .send_to_bucket("hourly", "cpu.load", &[json!({"point": {"value": 1}})])
            .await
            .unwrap();

        let request = transport.last_request().unwrap();
        assert_eq!(request.header(BUCKET_HEADER), Some("hourly"));
    }

    #[tokio::test]
    async fn test_query_values_path_and_params() {
        let transport = Arc::new(MockTransport::new());
        transport.queue(MockResponse::json(&json!([{"name": "cpu", "points": []}])));
        let metrics = MetricsService::new(rest_client(&transport));

        let query = MetricQuery::new("cpu")
            .from_date(1)
            .to_date(2)
            .aggregator_function("max")
            .group_interval("1m");
        let response = metrics.query_values(&query).await.unwrap();

        assert!(response.is_success());
        let request = transport.last_request().unwrap();
        assert_eq!(request.method, HttpMethod::Get);
        assert_eq!(request.path, "/metrics/ZeUsRoCkS/_values");
        let params = request.params();
        assert_eq!(params.len(), 5);
        assert_eq!(params.get("from").map(String::as_str), Some("1"));
        assert_eq!(params.get("aggregator_function").map(String::as_str), Some("max"));
    }

    #[tokio::test]
    async fn test_list_names_without_options() {
        let transport = Arc::new(MockTransport::new());
        let metrics = MetricsService::new(rest_client(&transport));

        metrics.list_names(&MetricNamesQuery::new()).await.unwrap();

        let request = transport.last_request().unwrap();
        assert_eq!(request.path, "/metrics/ZeUsRoCkS/_names");
        assert_eq!(request.payload, Payload::Empty);
    }

    #[tokio::test]
    async fn test_delete_metric() {
        let transport = Arc::new(MockTransport::new());
        let metrics = MetricsService::new(rest_client(&transport));

        metrics.delete("cpu").await.unwrap();

        let request = transport.last_request().unwrap();
        assert_eq!(request.method, HttpMethod::Delete);
        assert_eq!(request.path, "/metrics/ZeUsRoCkS/cpu");
    }

    #[tokio::test]
    async fn test_delete_metric_rejects_bad_name() {
        let transport = Arc::new(MockTransport::new());
        let metrics = MetricsService::new(rest_client(&transport));

        let err = metrics.delete("_WrongName").await.unwrap_err();

        assert!(matches!(err, ZeusError::InvalidName { .. }));
        assert_eq!(transport.request_count(), 0);
    }
}
