//! Value formatting for the generator and the deep-link builders.

use chrono::{DateTime, NaiveDateTime, Utc};

/// `YYYYMMDD`
#[must_use]
pub fn format_date(value: NaiveDateTime) -> String {
    value.format("%Y%m%d").to_string()
}

/// `YYYYMMDDTHHMMSSZ`; the value must already be UTC.
#[must_use]
pub fn format_utc_datetime(value: NaiveDateTime) -> String {
    value.format("%Y%m%dT%H%M%SZ").to_string()
}

/// `YYYYMMDDTHHMMSS`, for values qualified by a `TZID` parameter.
#[must_use]
pub fn format_local_datetime(value: NaiveDateTime) -> String {
    value.format("%Y%m%dT%H%M%S").to_string()
}

#[must_use]
pub fn format_timestamp(value: DateTime<Utc>) -> String {
    format_utc_datetime(value.naive_utc())
}

/// Formats signed minutes as a DURATION value (RFC 5545 §3.3.6).
///
/// Whole days use the `D` designator; zero is `PT0M`.
#[must_use]
pub fn format_duration(minutes: i64) -> String {
    let sign = if minutes < 0 { "-" } else { "" };
    let total = minutes.unsigned_abs();
    let (days, hours, mins) = (total / 1440, total % 1440 / 60, total % 60);

    let mut out = format!("{sign}P");
    if days > 0 {
        out.push_str(&format!("{days}D"));
    }
    if hours > 0 || mins > 0 || days == 0 {
        out.push('T');
        if hours > 0 {
            out.push_str(&format!("{hours}H"));
        }
        if mins > 0 || hours == 0 {
            out.push_str(&format!("{mins}M"));
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;
    use crate::ical::parse::parse_duration;

    fn dt() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 6, 15)
            .and_then(|d| d.and_hms_opt(9, 5, 7))
            .expect("valid datetime")
    }

    #[test]
    fn date_and_time_forms() {
        assert_eq!(format_date(dt()), "20250615");
        assert_eq!(format_utc_datetime(dt()), "20250615T090507Z");
        assert_eq!(format_local_datetime(dt()), "20250615T090507");
        assert_eq!(format_timestamp(dt().and_utc()), "20250615T090507Z");
    }

    #[test]
    fn duration_forms() {
        assert_eq!(format_duration(15), "PT15M");
        assert_eq!(format_duration(-15), "-PT15M");
        assert_eq!(format_duration(0), "PT0M");
        assert_eq!(format_duration(60), "PT1H");
        assert_eq!(format_duration(90), "PT1H30M");
        assert_eq!(format_duration(1440), "P1D");
        assert_eq!(format_duration(-1530), "-P1DT1H30M");
        assert_eq!(format_duration(2 * 1440 + 5), "P2DT5M");
    }

    #[test]
    fn duration_round_trip() {
        for minutes in [0, 1, -1, 15, -15, 59, 61, 1439, 1440, -1441, 10_080, -525_600] {
            assert_eq!(parse_duration(&format_duration(minutes), 1).expect("valid"), minutes);
        }
    }
}
