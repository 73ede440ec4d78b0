//! Client-side checks for log names, metric names and date ranges.
//!
//! All checks run before a request is built, so a rejected argument never
//! reaches the network.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::errors::{ZeusError, ZeusResult};
use crate::types::DateBound;

/// Maximum length of a log or metric name, in characters.
pub const MAX_NAME_LENGTH: usize = 255;

static LOG_NAME: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9]+$").unwrap_or_else(|e| unreachable!("log name pattern: {e}"))
});

// First character alphanumeric, the rest may also use path-like separators.
static METRIC_NAME: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9][A-Za-z0-9_.\-]*$")
        .unwrap_or_else(|e| unreachable!("metric name pattern: {e}"))
});

fn check_length(kind: &str, name: &str) -> ZeusResult<()> {
    let len = name.chars().count();
    if len < 1 || len > MAX_NAME_LENGTH {
        return Err(ZeusError::invalid_name(
            format!(
                "{} name must be between 1 and {} characters long",
                kind, MAX_NAME_LENGTH
            ),
            Some(name),
        ));
    }
    Ok(())
}

/// Validates a log name.
///
/// A log name is 1 to 255 ASCII letters or digits.
///
/// # Errors
///
/// Returns [`ZeusError::InvalidName`] when the name is absent, empty, too
/// long, or contains anything other than letters and digits.
///
/// # Example
///
/// ```
/// use zeus_client::validation::validate_log_name;
///
/// assert!(validate_log_name(Some("syslog")).is_ok());
/// assert!(validate_log_name(Some("sys.log")).is_err());
/// assert!(validate_log_name(None).is_err());
/// ```
pub fn validate_log_name(name: Option<&str>) -> ZeusResult<()> {
    let name = name.ok_or_else(|| ZeusError::invalid_name("Log name cannot be None", None))?;
    check_length("Log", name)?;

    if !LOG_NAME.is_match(name) {
        return Err(ZeusError::invalid_name(
            "Log name can only contain letters or numbers",
            Some(name),
        ));
    }
    Ok(())
}

/// Validates a metric name.
///
/// A metric name is 1 to 255 characters from `[A-Za-z0-9_.-]` and does not
/// start with `_`, `.` or `-`.
///
/// # Errors
///
/// Returns [`ZeusError::InvalidName`] when any of those rules is broken or the
/// name is absent.
///
/// # Example
///
/// ```
/// use zeus_client::validation::validate_metric_name;
///
/// assert!(validate_metric_name(Some("cpu.load-avg_1m")).is_ok());
/// assert!(validate_metric_name(Some(".cpu")).is_err());
/// ```
pub fn validate_metric_name(name: Option<&str>) -> ZeusResult<()> {
    let name = name.ok_or_else(|| ZeusError::invalid_name("Metric name cannot be None", None))?;
    check_length("Metric", name)?;

    if !METRIC_NAME.is_match(name) {
        return Err(ZeusError::invalid_name(
            "Metric name needs to start with a letter or number and can only contain \
             letters, numbers, _ - or .",
            Some(name),
        ));
    }
    Ok(())
}

/// Validates an optional `from`/`to` pair of Unix timestamps.
///
/// Either bound may be absent, which leaves the range open on that side.
///
/// # Errors
///
/// Returns [`ZeusError::InvalidDate`] if a present bound is not numeric, or if
/// `from` is after `to`.
///
/// # Example
///
/// ```
/// use zeus_client::types::DateBound;
/// use zeus_client::validation::validate_date_range;
///
/// let from = DateBound::from(12345);
/// let to = DateBound::from(12346);
/// assert!(validate_date_range(Some(&from), Some(&to)).is_ok());
/// assert!(validate_date_range(Some(&to), Some(&from)).is_err());
/// assert!(validate_date_range(None, Some(&to)).is_ok());
/// ```
pub fn validate_date_range(from: Option<&DateBound>, to: Option<&DateBound>) -> ZeusResult<()> {
    let from = from.map(parse_bound).transpose()?;
    let to = to.map(parse_bound).transpose()?;

    match (from, to) {
        (Some(from), Some(to)) if from > to => Err(ZeusError::invalid_date(
            "The from_date should not be after to_date",
        )),
        _ => Ok(()),
    }
}

fn parse_bound(bound: &DateBound) -> ZeusResult<f64> {
    bound.timestamp().ok_or_else(|| {
        ZeusError::invalid_date(format!(
            "could not convert '{}' to a Unix timestamp",
            bound.as_str()
        ))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case("ZeusTest" ; "letters")]
    #[test_case("abc123" ; "letters and digits")]
    #[test_case("0" ; "single digit")]
    fn test_valid_log_names(name: &str) {
        assert!(validate_log_name(Some(name)).is_ok());
    }

    #[test_case("W.rongName" ; "dot")]
    #[test_case("_WrongName" ; "underscore")]
    #[test_case("W#?rongName" ; "symbols")]
    #[test_case("W-rongName" ; "dash")]
    #[test_case("" ; "empty")]
    #[test_case("with space" ; "space")]
    #[test_case("caf\u{e9}" ; "non ascii")]
    fn test_invalid_log_names(name: &str) {
        assert!(matches!(
            validate_log_name(Some(name)),
            Err(ZeusError::InvalidName { .. })
        ));
    }

    #[test]
    fn test_log_name_none() {
        assert!(matches!(
            validate_log_name(None),
            Err(ZeusError::InvalidName { name: None, .. })
        ));
    }

    #[test]
    fn test_log_name_length_bounds() {
        let longest = "a".repeat(MAX_NAME_LENGTH);
        assert!(validate_log_name(Some(&longest)).is_ok());

        let too_long = "0123456789ABCDEF".repeat(16);
        assert_eq!(too_long.len(), 256);
        assert!(validate_log_name(Some(&too_long)).is_err());
    }

    #[test_case("ZeusTest" ; "letters")]
    #[test_case("Zeus.Test" ; "dotted")]
    #[test_case("cpu.load-avg_1m" ; "all separators")]
    #[test_case("9lives" ; "leading digit")]
    #[test_case("a" ; "single char")]
    fn test_valid_metric_names(name: &str) {
        assert!(validate_metric_name(Some(name)).is_ok());
    }

    #[test_case("_WrongName" ; "leading underscore")]
    #[test_case("-WrongName" ; "leading dash")]
    #[test_case(".WrongName" ; "leading dot")]
    #[test_case("W#?rongName" ; "symbols")]
    #[test_case("Wrong Name" ; "space")]
    #[test_case("#WrongName" ; "leading hash")]
    #[test_case("" ; "empty")]
    fn test_invalid_metric_names(name: &str) {
        assert!(matches!(
            validate_metric_name(Some(name)),
            Err(ZeusError::InvalidName { .. })
        ));
    }

    #[test]
    fn test_metric_name_none() {
        assert!(validate_metric_name(None).is_err());
    }

    #[test]
    fn test_metric_name_length_bounds() {
        let longest = format!("m{}", ".".repeat(MAX_NAME_LENGTH - 1));
        assert!(validate_metric_name(Some(&longest)).is_ok());

        let too_long = "0123456789ABCDEF".repeat(16);
        assert!(validate_metric_name(Some(&too_long)).is_err());
    }

    #[test]
    fn test_date_range_open_ended() {
        let x = DateBound::from(12346);
        assert!(validate_date_range(None, None).is_ok());
        assert!(validate_date_range(None, Some(&x)).is_ok());
        assert!(validate_date_range(Some(&x), None).is_ok());
    }

    #[test]
    fn test_date_range_ordering() {
        let earlier = DateBound::from(12345);
        let later = DateBound::from(12346);

        assert!(validate_date_range(Some(&earlier), Some(&later)).is_ok());
        assert!(validate_date_range(Some(&earlier), Some(&earlier)).is_ok());
        assert!(matches!(
            validate_date_range(Some(&later), Some(&earlier)),
            Err(ZeusError::InvalidDate { .. })
        ));
    }

    #[test]
    fn test_date_range_unparseable() {
        let wrong = DateBound::from("wrongvalue");
        let to = DateBound::from(12346);

        assert!(matches!(
            validate_date_range(Some(&wrong), Some(&to)),
            Err(ZeusError::InvalidDate { .. })
        ));
        // A bad bound fails even when the other side is open.
        assert!(validate_date_range(Some(&wrong), None).is_err());
    }

    #[test]
    fn test_date_range_mixed_representations() {
        let from = DateBound::from("123456789.5");
        let to = DateBound::from(126_235_344_235_i64);
        assert!(validate_date_range(Some(&from), Some(&to)).is_ok());
    }
}
