//! NovaDAX timestamp → Koinly date conversion.

use chrono::NaiveDateTime;

/// In-band sentinel for timestamps that do not parse.
pub const INVALID_DATE: &str = "Invalid Date";

/// Convert "25/12/2023 14:30:00" into "2023-12-25 14:30 UTC".
///
/// Seconds are truncated, not rounded. Anything that does not parse as
/// `DD/MM/YYYY HH:MM:SS` yields [`INVALID_DATE`]; a malformed timestamp is
/// recoverable per record and never aborts the run.
pub fn convert_timestamp(raw: &str) -> String {
    match NaiveDateTime::parse_from_str(raw, "%d/%m/%Y %H:%M:%S") {
        Ok(dt) => dt.format("%Y-%m-%d %H:%M UTC").to_string(),
        Err(_) => INVALID_DATE.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_convert_valid_timestamp() {
        assert_eq!(
            convert_timestamp("25/12/2023 14:30:00"),
            "2023-12-25 14:30 UTC"
        );
        assert_eq!(
            convert_timestamp("01/01/2024 00:00:00"),
            "2024-01-01 00:00 UTC"
        );
    }

    #[test]
    fn test_seconds_are_truncated() {
        assert_eq!(
            convert_timestamp("25/12/2023 14:30:59"),
            "2023-12-25 14:30 UTC"
        );
    }

    #[test]
    fn test_wrong_delimiters() {
        assert_eq!(convert_timestamp("2023-12-25 14:30:00"), INVALID_DATE);
        assert_eq!(convert_timestamp("25.12.2023 14:30:00"), INVALID_DATE);
    }

    #[test]
    fn test_out_of_range_fields() {
        assert_eq!(convert_timestamp("32/01/2024 10:00:00"), INVALID_DATE);
        assert_eq!(convert_timestamp("25/13/2023 10:00:00"), INVALID_DATE);
        assert_eq!(convert_timestamp("25/12/2023 25:00:00"), INVALID_DATE);
    }

    #[test]
    fn test_non_numeric_and_empty() {
        assert_eq!(convert_timestamp("not a date"), INVALID_DATE);
        assert_eq!(convert_timestamp(""), INVALID_DATE);
    }

    #[test]
    fn test_sentinel_is_idempotent() {
        assert_eq!(convert_timestamp(INVALID_DATE), INVALID_DATE);
    }
}
