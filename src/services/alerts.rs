//! Alerts service.

use serde::Serialize;
use std::sync::Arc;
use tracing::instrument;

use super::rest::RestClient;
use crate::errors::ZeusResult;
use crate::types::{Alert, ApiResponse};

/// Alert body as the server expects it: the alert fields plus the token.
#[derive(Serialize)]
struct AlertPayload<'a> {
    #[serde(flatten)]
    alert: &'a Alert,
    token: &'a str,
}

#[derive(Serialize)]
struct AlertIds<'a> {
    id: &'a [u64],
}

/// Alerts service for managing alert definitions.
#[derive(Debug, Clone)]
pub struct AlertsService {
    rest: Arc<RestClient>,
}

impl AlertsService {
    /// Creates a new alerts service.
    pub fn new(rest: Arc<RestClient>) -> Self {
        Self { rest }
    }

    /// Creates an alert.
    #[instrument(skip(self, alert), fields(alert_name = %alert.name))]
    pub async fn create(&self, alert: &Alert) -> ZeusResult<ApiResponse> {
        let payload = AlertPayload {
            alert,
            token: self.rest.token(),
        };

        self.rest
            .post_json("create_alert", self.rest.resource_path("alerts", &[]), &payload)
            .await
    }

    /// Replaces the definition of an existing alert.
    #[instrument(skip(self, alert), fields(alert_name = %alert.name))]
    pub async fn modify(&self, alert_id: u64, alert: &Alert) -> ZeusResult<ApiResponse> {
        let payload = AlertPayload {
            alert,
            token: self.rest.token(),
        };
        let id = alert_id.to_string();

        self.rest
            .put_json("modify_alert", self.rest.resource_path("alerts", &[id.as_str()]), &payload)
            .await
    }

    /// Gets one alert.
    #[instrument(skip(self))]
    pub async fn get(&self, alert_id: u64) -> ZeusResult<ApiResponse> {
        let id = alert_id.to_string();
        self.rest
            .get("get_alert", self.rest.resource_path("alerts", &[id.as_str()]), Vec::new())
            .await
    }

    /// Lists every alert of the account.
    #[instrument(skip(self))]
    pub async fn list(&self) -> ZeusResult<ApiResponse> {
        self.rest
            .get("list_alerts", self.rest.resource_path("alerts", &[]), Vec::new())
            .await
    }

    /// Deletes an alert.
    #[instrument(skip(self))]
    pub async fn delete(&self, alert_id: u64) -> ZeusResult<ApiResponse> {
        let id = alert_id.to_string();
        self.rest
            .delete("delete_alert", self.rest.resource_path("alerts", &[id.as_str()]))
            .await
    }

    /// Enables the given alerts.
    #[instrument(skip(self))]
    pub async fn enable(&self, alert_ids: &[u64]) -> ZeusResult<ApiResponse> {
        self.rest
            .post_json(
                "enable_alerts",
                self.rest.resource_path("alerts", &["enable"]),
                &AlertIds { id: alert_ids },
            )
            .await
    }

    /// Disables the given alerts.
    #[instrument(skip(self))]
    pub async fn disable(&self, alert_ids: &[u64]) -> ZeusResult<ApiResponse> {
        self.rest
            .post_json(
                "disable_alerts",
                self.rest.resource_path("alerts", &["disable"]),
                &AlertIds { id: alert_ids },
            )
            .await
    }
}
