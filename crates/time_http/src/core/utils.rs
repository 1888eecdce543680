use chrono::{DateTime, TimeZone};
use chrono_tz::Tz;

// Constants for format strings
pub const LOCAL_TIME_FORMAT: &str = "%H:%M:%S";
pub const OFFSET_TIME_FORMAT: &str = "%H:%M:%S%:z";
pub const OFFSET_DATETIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%:z";

/// Zone used by the single-zone `/time` endpoint
pub const REFERENCE_TIMEZONE: Tz = chrono_tz::US::Central;

/// Format a zoned datetime as an ISO 8601 offset datetime with the zone name
/// appended in brackets, e.g. `2018-03-15T17:45:00-05:00[US/Central]`.
pub fn format_zoned_datetime(dt: &DateTime<Tz>) -> String {
    format!(
        "{}[{}]",
        dt.format(OFFSET_DATETIME_FORMAT),
        dt.timezone().name()
    )
}

/// Format the wall-clock time of a datetime as `HH:MM:SS`
pub fn format_local_time<Z>(dt: &DateTime<Z>) -> String
where
    Z: TimeZone,
    Z::Offset: std::fmt::Display,
{
    dt.format(LOCAL_TIME_FORMAT).to_string()
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use super::*;

    #[test]
    fn test_format_zoned_datetime() {
        let dt = Utc
            .with_ymd_and_hms(2018, 3, 15, 22, 45, 0)
            .unwrap()
            .with_timezone(&REFERENCE_TIMEZONE);

        assert_eq!(
            format_zoned_datetime(&dt),
            "2018-03-15T17:45:00-05:00[US/Central]"
        );
    }

    #[test]
    fn test_format_local_time_pads_fields() {
        let dt = Utc.with_ymd_and_hms(2024, 1, 2, 3, 4, 5).unwrap();
        assert_eq!(format_local_time(&dt), "03:04:05");
    }

    #[test]
    fn test_format_local_time_with_fractional_offset() {
        let dt = Utc
            .with_ymd_and_hms(2024, 1, 2, 23, 59, 59)
            .unwrap()
            .with_timezone(&chrono_tz::Asia::Kathmandu);
        // UTC+5:45 in Nepal
        assert_eq!(format_local_time(&dt), "05:44:59");
    }
}
