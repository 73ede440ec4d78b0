//! Alert types.

use serde::{Deserialize, Serialize};

use crate::errors::{ZeusError, ZeusResult};

/// Data an alert is evaluated against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlertType {
    /// Evaluated against metric values.
    Metric,
    /// Evaluated against log entries.
    Log,
}

/// Whether an alert is evaluated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlertStatus {
    /// The alert is evaluated and notifies.
    #[default]
    Active,
    /// The alert is kept but not evaluated.
    Disabled,
}

/// An alert definition, as sent on create and modify.
///
/// Field names on the wire follow the server: `alert_name`, `alerts_type`,
/// `alert_expression` and `alert_severity`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Alert {
    /// Name of the alert.
    #[serde(rename = "alert_name")]
    pub name: String,

    /// User the alert belongs to.
    pub username: String,

    /// Metric or log alert.
    #[serde(rename = "alerts_type")]
    pub alert_type: AlertType,

    /// Expression to evaluate, e.g. `cpu.value > 20`.
    #[serde(rename = "alert_expression")]
    pub expression: String,

    /// Severity label, e.g. `S1`.
    #[serde(rename = "alert_severity")]
    pub severity: String,

    /// Metric associated with the alert.
    pub metric_name: String,

    /// Addresses notified when the alert triggers.
    pub emails: String,

    /// Active or disabled.
    pub status: AlertStatus,

    /// Seconds between notifications.
    pub notify_period: u64,
}

impl Alert {
    /// Creates a new alert builder.
    pub fn builder() -> AlertBuilder {
        AlertBuilder::default()
    }
}

/// Builder for [`Alert`].
///
/// # Example
///
/// ```
/// use zeus_client::types::{Alert, AlertType};
///
/// let alert = Alert::builder()
///     .name("cpu-high")
///     .username("ops")
///     .alert_type(AlertType::Metric)
///     .expression("cpu.value > 20")
///     .severity("S1")
///     .metric_name("cpu.value")
///     .emails("ops@example.com")
///     .notify_period(60)
///     .build()
///     .unwrap();
/// assert_eq!(alert.name, "cpu-high");
/// ```
#[derive(Debug, Default)]
pub struct AlertBuilder {
    name: Option<String>,
    username: Option<String>,
    alert_type: Option<AlertType>,
    expression: Option<String>,
    severity: Option<String>,
    metric_name: Option<String>,
    emails: Option<String>,
    status: AlertStatus,
    notify_period: Option<u64>,
}

impl AlertBuilder {
    /// Sets the alert name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Sets the owning user.
    pub fn username(mut self, username: impl Into<String>) -> Self {
        self.username = Some(username.into());
        self
    }

    /// Sets the alert type.
    pub fn alert_type(mut self, alert_type: AlertType) -> Self {
        self.alert_type = Some(alert_type);
        self
    }

    /// Sets the evaluated expression.
    pub fn expression(mut self, expression: impl Into<String>) -> Self {
        self.expression = Some(expression.into());
        self
    }

    /// Sets the severity label.
    pub fn severity(mut self, severity: impl Into<String>) -> Self {
        self.severity = Some(severity.into());
        self
    }

    /// Sets the associated metric.
    pub fn metric_name(mut self, metric_name: impl Into<String>) -> Self {
        self.metric_name = Some(metric_name.into());
        self
    }

    /// Sets the notification addresses.
    pub fn emails(mut self, emails: impl Into<String>) -> Self {
        self.emails = Some(emails.into());
        self
    }

    /// Sets the status. Defaults to active.
    pub fn status(mut self, status: AlertStatus) -> Self {
        self.status = status;
        self
    }

    /// Sets the notification period in seconds.
    pub fn notify_period(mut self, seconds: u64) -> Self {
        self.notify_period = Some(seconds);
        self
    }

    /// Builds the alert.
    ///
    /// # Errors
    ///
    /// Returns [`ZeusError::Validation`] naming the first missing field.
    pub fn build(self) -> ZeusResult<Alert> {
        Ok(Alert {
            name: required(self.name, "name")?,
            username: required(self.username, "username")?,
            alert_type: required(self.alert_type, "alert_type")?,
            expression: required(self.expression, "expression")?,
            severity: required(self.severity, "severity")?,
            metric_name: required(self.metric_name, "metric_name")?,
            emails: required(self.emails, "emails")?,
            status: self.status,
            notify_period: required(self.notify_period, "notify_period")?,
        })
    }
}

fn required<T>(value: Option<T>, param: &str) -> ZeusResult<T> {
    value.ok_or_else(|| {
        ZeusError::validation_param(format!("Alert field '{}' is required", param), param)
    })
}
