//! Parsing of user-supplied date/time strings.

use anyhow::Result;
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

/// Accepted formats for a full date/time input.
const DATETIME_FORMATS: [&str; 4] = [
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M",
];

/// Parse a date/time like "2024-05-01 19:00"; a bare date means midnight.
pub fn parse_cli_datetime(input: &str) -> Result<NaiveDateTime> {
    let trimmed = input.trim();

    for format in DATETIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(trimmed, format) {
            return Ok(dt);
        }
    }

    if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        return Ok(date.and_time(NaiveTime::MIN));
    }

    anyhow::bail!(
        "Could not parse date/time: \"{}\" (expected e.g. \"2024-05-01\" or \"2024-05-01 19:00\")",
        input
    )
}

/// Parse a calendar date like "2024-05-01".
pub fn parse_cli_date(input: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(input.trim(), "%Y-%m-%d")
        .map_err(|_| anyhow::anyhow!("Could not parse date: \"{}\" (expected YYYY-MM-DD)", input))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_datetime_with_minutes() {
        let dt = parse_cli_datetime("2024-05-01 19:00").unwrap();
        assert_eq!(dt.to_string(), "2024-05-01 19:00:00");
    }

    #[test]
    fn parse_datetime_with_seconds() {
        let dt = parse_cli_datetime("2024-05-01 19:00:30").unwrap();
        assert_eq!(dt.to_string(), "2024-05-01 19:00:30");
    }

    #[test]
    fn parse_datetime_t_separator() {
        let dt = parse_cli_datetime("2024-05-01T19:00").unwrap();
        assert_eq!(dt.to_string(), "2024-05-01 19:00:00");
    }

    #[test]
    fn parse_bare_date_means_midnight() {
        let dt = parse_cli_datetime("2024-05-01").unwrap();
        assert_eq!(dt.to_string(), "2024-05-01 00:00:00");
    }

    #[test]
    fn parse_datetime_trims_whitespace() {
        assert!(parse_cli_datetime("  2024-05-01 19:00  ").is_ok());
    }

    #[test]
    fn parse_datetime_rejects_garbage() {
        let err = parse_cli_datetime("next thursday").unwrap_err();
        assert!(err.to_string().contains("Could not parse date/time"));
    }

    #[test]
    fn parse_date_valid() {
        let date = parse_cli_date("2024-05-01").unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(2024, 5, 1).unwrap());
    }

    #[test]
    fn parse_date_rejects_datetime() {
        assert!(parse_cli_date("2024-05-01 19:00").is_err());
    }
}
