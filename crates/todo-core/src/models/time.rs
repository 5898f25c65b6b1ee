//! Timestamp parsing for user input.

use jiff::{
    civil::{Date, DateTime},
    tz::TimeZone,
    Timestamp,
};

use crate::error::{Result, TodoError};

/// Parses a point in time given on the command line or in a request.
///
/// Accepts RFC 3339 timestamps (`2025-01-02T09:30:00Z`), civil date-times
/// (`2025-01-02T09:30:00`) and plain dates (`2025-01-02`). Civil values
/// without an offset are taken as UTC.
pub fn parse_timestamp(field: &str, input: &str) -> Result<Timestamp> {
    let input = input.trim();

    if let Ok(ts) = input.parse::<Timestamp>() {
        return Ok(ts);
    }

    let zoned = if let Ok(dt) = input.parse::<DateTime>() {
        dt.to_zoned(TimeZone::UTC)
    } else if let Ok(date) = input.parse::<Date>() {
        date.to_zoned(TimeZone::UTC)
    } else {
        return Err(TodoError::invalid_argument(field)
            .with_reason(format!("'{input}' is not a date or timestamp")));
    };

    zoned
        .map(|z| z.timestamp())
        .map_err(|e| TodoError::invalid_argument(field).with_reason(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_rfc3339() {
        let ts = parse_timestamp("due", "2025-01-02T09:30:00Z").unwrap();
        assert_eq!(ts.as_second(), 1735810200);
    }

    #[test]
    fn test_parse_civil_values_as_utc() {
        assert_eq!(
            parse_timestamp("due", "2025-01-02").unwrap(),
            "2025-01-02T00:00:00Z".parse::<Timestamp>().unwrap()
        );
        assert_eq!(
            parse_timestamp("due", "2025-01-02T09:30:00").unwrap(),
            "2025-01-02T09:30:00Z".parse::<Timestamp>().unwrap()
        );
    }

    #[test]
    fn test_reject_garbage() {
        let err = parse_timestamp("due", "next tuesday").unwrap_err();
        assert!(err.is_invalid_argument());
        assert!(err.to_string().contains("'due'"));
    }
}
