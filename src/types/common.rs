//! Common types shared across the Zeus API.

use chrono::{DateTime, Utc};
use serde::{Serialize, Serializer};
use serde_json::Value;

use crate::errors::{ZeusError, ZeusResult};

/// Result of a Zeus API call.
///
/// Every status except 500 is returned here, successful or not. `body` is
/// `None` when the response was not valid JSON, in which case the status
/// code is the whole answer.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiResponse {
    /// HTTP status code.
    pub status: u16,
    /// Parsed JSON body, passed through unchanged.
    pub body: Option<Value>,
}

impl ApiResponse {
    /// Creates a response from a status code and an optional body.
    pub fn new(status: u16, body: Option<Value>) -> Self {
        Self { status, body }
    }

    /// Returns true if the status indicates success (2xx).
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Decodes the body into a typed value.
    ///
    /// Returns `Ok(None)` when there was no JSON body.
    pub fn json<T: serde::de::DeserializeOwned>(&self) -> ZeusResult<Option<T>> {
        self.body
            .clone()
            .map(serde_json::from_value)
            .transpose()
            .map_err(ZeusError::from)
    }
}

/// One end of a date range, as a Unix timestamp.
///
/// The value is kept as text so it reaches the server exactly as the caller
/// wrote it; [`validate_date_range`](crate::validation::validate_date_range)
/// checks that it is numeric.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DateBound(String);

impl DateBound {
    /// Returns the raw representation.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Parses the bound as seconds since the epoch.
    ///
    /// Returns `None` for anything that is not a finite number.
    pub fn timestamp(&self) -> Option<f64> {
        self.0
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|value| value.is_finite())
    }
}

impl std::fmt::Display for DateBound {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl Serialize for DateBound {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

macro_rules! date_bound_from_number {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for DateBound {
                fn from(value: $ty) -> Self {
                    DateBound(value.to_string())
                }
            }
        )*
    };
}

date_bound_from_number!(i32, i64, u32, u64, f64);

impl From<&str> for DateBound {
    fn from(value: &str) -> Self {
        DateBound(value.to_string())
    }
}

impl From<String> for DateBound {
    fn from(value: String) -> Self {
        DateBound(value)
    }
}

impl From<DateTime<Utc>> for DateBound {
    fn from(value: DateTime<Utc>) -> Self {
        DateBound(value.timestamp().to_string())
    }
}

/// Flattens a serializable query struct into `key=value` pairs.
///
/// `None` fields are expected to be skipped by the struct's serde attributes;
/// any remaining nulls are dropped here as well. Strings are passed verbatim,
/// other scalars use their JSON text.
pub(crate) fn to_params<T: Serialize>(value: &T) -> ZeusResult<Vec<(String, String)>> {
    match serde_json::to_value(value)? {
        Value::Object(map) => Ok(map
            .into_iter()
            .filter(|(_, v)| !v.is_null())
            .map(|(k, v)| {
                let v = match v {
                    Value::String(s) => s,
                    other => other.to_string(),
                };
                (k, v)
            })
            .collect()),
        Value::Null => Ok(Vec::new()),
        other => Err(ZeusError::Serialization {
            message: format!("query parameters must serialize to an object, got {}", other),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use serde_json::json;

    #[test]
    fn test_date_bound_from_numbers() {
        assert_eq!(DateBound::from(123_456_789).as_str(), "123456789");
        assert_eq!(DateBound::from(1.5_f64).as_str(), "1.5");
        assert_eq!(DateBound::from(12345_u64).timestamp(), Some(12345.0));
    }

    #[test]
    fn test_date_bound_from_datetime() {
        let dt = Utc.with_ymd_and_hms(2016, 1, 1, 0, 0, 0).unwrap();
        assert_eq!(DateBound::from(dt).as_str(), "1451606400");
    }

    #[test]
    fn test_date_bound_rejects_non_numeric() {
        assert_eq!(DateBound::from("wrongvalue").timestamp(), None);
        assert_eq!(DateBound::from("NaN").timestamp(), None);
        assert_eq!(DateBound::from("inf").timestamp(), None);
        assert_eq!(DateBound::from(" 42 ").timestamp(), Some(42.0));
    }

    #[test]
    fn test_api_response_success() {
        assert!(ApiResponse::new(200, None).is_success());
        assert!(ApiResponse::new(204, None).is_success());
        assert!(!ApiResponse::new(404, None).is_success());
    }

    #[test]
    fn test_api_response_json() {
        #[derive(serde::Deserialize)]
        struct Inserted {
            successful: u32,
        }

        let response = ApiResponse::new(200, Some(json!({"successful": 3})));
        let inserted: Inserted = response.json().unwrap().unwrap();
        assert_eq!(inserted.successful, 3);

        let empty = ApiResponse::new(200, None);
        assert!(empty.json::<Inserted>().unwrap().is_none());
    }

    #[test]
    fn test_to_params_skips_nulls() {
        let params = to_params(&json!({"a": "x", "b": 2, "c": null})).unwrap();
        assert_eq!(params.len(), 2);
        assert!(params.contains(&("a".to_string(), "x".to_string())));
        assert!(params.contains(&("b".to_string(), "2".to_string())));
    }

    #[test]
    fn test_to_params_rejects_non_object() {
        assert!(to_params(&json!([1, 2])).is_err());
        assert!(to_params(&()).unwrap().is_empty());
    }
}
