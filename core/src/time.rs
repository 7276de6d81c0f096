//! Time related utils.

use chrono::Utc;

/// DateTime used across the apisign workspace, always in UTC.
pub type DateTime = chrono::DateTime<Utc>;

/// Get current time.
pub fn now() -> DateTime {
    Utc::now()
}

/// Format time into date: `20220301`
pub fn format_date(t: DateTime) -> String {
    t.format("%Y%m%d").to_string()
}

/// Format time into ISO8601: `20220313T072004Z`
pub fn format_iso8601(t: DateTime) -> String {
    t.format("%Y%m%dT%H%M%SZ").to_string()
}

/// Unix timestamp in seconds: `1700000000`
pub fn unix_timestamp(t: DateTime) -> i64 {
    t.timestamp()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_format() {
        let t = Utc.with_ymd_and_hms(2022, 3, 13, 7, 20, 4).unwrap();

        assert_eq!(format_date(t), "20220313");
        assert_eq!(format_iso8601(t), "20220313T072004Z");
        assert_eq!(unix_timestamp(t), 1647156004);
    }
}
