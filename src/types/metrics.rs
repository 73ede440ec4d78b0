//! Metric query types.

use serde::Serialize;

use super::common::DateBound;

/// Parameters for reading the values of a metric.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MetricQuery {
    /// Name of the metric.
    pub metric_name: String,

    /// Start of the time range.
    #[serde(rename = "from", skip_serializing_if = "Option::is_none")]
    pub from_date: Option<DateBound>,

    /// End of the time range.
    #[serde(rename = "to", skip_serializing_if = "Option::is_none")]
    pub to_date: Option<DateBound>,

    /// Aggregator function, e.g. `sum`, `count`, `min`, `max`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub aggregator_function: Option<String>,

    /// Column the aggregator function applies to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub aggregator_column: Option<String>,

    /// Grouping interval, e.g. `1m`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group_interval: Option<String>,

    /// Filter applied to values, e.g. `value > 90`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filter_condition: Option<String>,

    /// Result offset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset: Option<u64>,

    /// Maximum number of results.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u64>,
}

impl MetricQuery {
    /// Creates a query for the given metric.
    pub fn new(metric_name: impl Into<String>) -> Self {
        Self {
            metric_name: metric_name.into(),
            from_date: None,
            to_date: None,
            aggregator_function: None,
            aggregator_column: None,
            group_interval: None,
            filter_condition: None,
            offset: None,
            limit: None,
        }
    }

    /// Sets the start of the time range.
    pub fn from_date(mut self, from: impl Into<DateBound>) -> Self {
        self.from_date = Some(from.into());
        self
    }

    /// Sets the end of the time range.
    pub fn to_date(mut self, to: impl Into<DateBound>) -> Self {
        self.to_date = Some(to.into());
        self
    }

    /// Sets the aggregator function.
    pub fn aggregator_function(mut self, function: impl Into<String>) -> Self {
        self.aggregator_function = Some(function.into());
        self
    }

    /// Sets the aggregated column.
    pub fn aggregator_column(mut self, column: impl Into<String>) -> Self {
        self.aggregator_column = Some(column.into());
        self
    }

    /// Sets the grouping interval.
    pub fn group_interval(mut self, interval: impl Into<String>) -> Self {
        self.group_interval = Some(interval.into());
        self
    }

    /// Sets the filter condition.
    pub fn filter_condition(mut self, condition: impl Into<String>) -> Self {
        self.filter_condition = Some(condition.into());
        self
    }

    /// Sets the result offset.
    pub fn offset(mut self, offset: u64) -> Self {
        self.offset = Some(offset);
        self
    }

    /// Sets the maximum number of results.
    pub fn limit(mut self, limit: u64) -> Self {
        self.limit = Some(limit);
        self
    }
}

/// Parameters for listing metric names.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct MetricNamesQuery {
    /// Pattern the metric names must match.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metric_name: Option<String>,

    /// Maximum number of results.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u64>,

    /// Starting offset in the result list.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset: Option<u64>,
}

impl MetricNamesQuery {
    /// Creates an empty query, listing every metric.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the name pattern.
    pub fn metric_name(mut self, pattern: impl Into<String>) -> Self {
        self.metric_name = Some(pattern.into());
        self
    }

    /// Sets the maximum number of results.
    pub fn limit(mut self, limit: u64) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Sets the result offset.
    pub fn offset(mut self, offset: u64) -> Self {
        self.offset = Some(offset);
        self
    }
}
