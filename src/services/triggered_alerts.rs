//! Triggered alerts service.

use std::sync::Arc;
use tracing::instrument;

use super::rest::RestClient;
use crate::errors::ZeusResult;
use crate::types::ApiResponse;

/// Read-only access to alerts that have fired.
#[derive(Debug, Clone)]
pub struct TriggeredAlertsService {
    rest: Arc<RestClient>,
}

impl TriggeredAlertsService {
    /// Creates a new triggered alerts service.
    pub fn new(rest: Arc<RestClient>) -> Self {
        Self { rest }
    }

    /// Lists every triggered alert.
    #[instrument(skip(self))]
    pub async fn list(&self) -> ZeusResult<ApiResponse> {
        self.rest
            .get(
                "list_triggered_alerts",
                self.rest.resource_path("triggeredalerts", &[]),
                Vec::new(),
            )
            .await
    }

    /// Lists alerts triggered in the last 24 hours.
    #[instrument(skip(self))]
    pub async fn list_last_24_hours(&self) -> ZeusResult<ApiResponse> {
        self.rest
            .get(
                "list_triggered_alerts_last_24_hours",
                self.rest.resource_path("triggeredalerts", &["last24"]),
                Vec::new(),
            )
            .await
    }
}
