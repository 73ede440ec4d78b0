//! Log query types.

use serde::Serialize;

use super::common::DateBound;

/// Parameters for querying a log stream.
///
/// Only `log_name` is required. Unset options are left out of the request.
///
/// # Example
///
/// ```
/// use zeus_client::types::LogQuery;
///
/// let query = LogQuery::new("syslog")
///     .attribute_name("message")
///     .pattern("error*")
///     .from_date(1_451_606_400)
///     .limit(50);
/// assert_eq!(query.limit, Some(50));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LogQuery {
    /// Name of the log stream.
    pub log_name: String,

    /// Field to search. All fields are searched when absent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attribute_name: Option<String>,

    /// Pattern the logs must match.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pattern: Option<String>,

    /// Start of the time range.
    #[serde(rename = "from", skip_serializing_if = "Option::is_none")]
    pub from_date: Option<DateBound>,

    /// End of the time range.
    #[serde(rename = "to", skip_serializing_if = "Option::is_none")]
    pub to_date: Option<DateBound>,

    /// Result offset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset: Option<u64>,

    /// Maximum number of results.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u64>,
}

impl LogQuery {
    /// Creates a query for the given log stream.
    pub fn new(log_name: impl Into<String>) -> Self {
        Self {
            log_name: log_name.into(),
            attribute_name: None,
            pattern: None,
            from_date: None,
            to_date: None,
            offset: None,
            limit: None,
        }
    }

    /// Restricts the search to one field.
    pub fn attribute_name(mut self, attribute_name: impl Into<String>) -> Self {
        self.attribute_name = Some(attribute_name.into());
        self
    }

    /// Sets the match pattern.
    pub fn pattern(mut self, pattern: impl Into<String>) -> Self {
        self.pattern = Some(pattern.into());
        self
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
