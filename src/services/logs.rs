//! Logs service.

use serde::Serialize;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::instrument;

use super::rest::{RestClient, BUCKET_HEADER};
use crate::errors::ZeusResult;
use crate::types::common::to_params;
use crate::types::{ApiResponse, LogQuery};
use crate::validation::{validate_date_range, validate_log_name};

/// Logs service for sending and querying log entries.
#[derive(Debug, Clone)]
pub struct LogsService {
    rest: Arc<RestClient>,
}

impl LogsService {
    /// Creates a new logs service.
    pub fn new(rest: Arc<RestClient>) -> Self {
        Self { rest }
    }

    /// Sends log entries to a log stream.
    ///
    /// The entries are encoded as one JSON array in the `logs` form field,
    /// in the order given. An empty slice still issues the request.
    ///
    /// # Errors
    ///
    /// Returns [`ZeusError::InvalidName`](crate::ZeusError::InvalidName)
    /// without contacting the server when `log_name` is malformed.
    pub async fn send<T: Serialize + Sync>(
        &self,
        log_name: &str,
        logs: &[T],
    ) -> ZeusResult<ApiResponse> {
        self.post(log_name, None, logs).await
    }

    /// Sends log entries tagged with a target bucket.
    ///
    /// Same as [`send`](Self::send), with the bucket carried in the
    /// `Bucket-Name` header of this request only.
    pub async fn send_to_bucket<T: Serialize + Sync>(
        &self,
        bucket: &str,
        log_name: &str,
        logs: &[T],
    ) -> ZeusResult<ApiResponse> {
        self.post(log_name, Some(bucket), logs).await
    }

    #[instrument(skip(self, logs), fields(count = logs.len()))]
    async fn post<T: Serialize + Sync>(
        &self,
        log_name: &str,
        bucket: Option<&str>,
        logs: &[T],
    ) -> ZeusResult<ApiResponse> {
        validate_log_name(Some(log_name))?;

        let encoded = serde_json::to_string(logs)?;
        let mut headers = HashMap::new();
        if let Some(bucket) = bucket {
            headers.insert(BUCKET_HEADER.to_string(), bucket.to_string());
        }

        self.rest
            .post_form(
                "send_logs",
                self.rest.resource_path("logs", &[log_name]),
                vec![("logs".to_string(), encoded)],
                headers,
            )
            .await
    }

    /// Queries a log stream.
    ///
    /// # Errors
    ///
    /// Returns [`ZeusError::InvalidDate`](crate::ZeusError::InvalidDate)
    /// when the date range is not numeric or inverted.
    #[instrument(skip(self, query), fields(log_name = %query.log_name))]
    pub async fn query(&self, query: &LogQuery) -> ZeusResult<ApiResponse> {
        validate_date_range(query.from_date.as_ref(), query.to_date.as_ref())?;

        self.rest
            .get(
                "query_logs",
                self.rest.resource_path("logs", &[]),
                to_params(query)?,
            )
            .await
    }
}
