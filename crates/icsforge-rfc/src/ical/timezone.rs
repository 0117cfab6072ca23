//! Static table of common timezones.
//!
//! There is no timezone database behind this. Each zone carries a standard
//! offset and at most one daylight offset, and daylight time is assumed to
//! run from the last Sunday of March 02:00 to the last Sunday of October
//! 03:00 local time, as in Western Europe.

use chrono::{Datelike, NaiveDate, NaiveDateTime, NaiveTime, TimeDelta};

use crate::model::TimezoneDefinition;

/// A zone of the static table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommonTimezone {
    pub tzid: &'static str,
    pub standard_offset: &'static str,
    pub standard_name: &'static str,
    pub daylight_offset: Option<&'static str>,
    pub daylight_name: Option<&'static str>,
}

impl CommonTimezone {
    const fn fixed(tzid: &'static str, offset: &'static str, name: &'static str) -> Self {
        Self {
            tzid,
            standard_offset: offset,
            standard_name: name,
            daylight_offset: None,
            daylight_name: None,
        }
    }

    const fn seasonal(
        tzid: &'static str,
        standard: (&'static str, &'static str),
        daylight: (&'static str, &'static str),
    ) -> Self {
        Self {
            tzid,
            standard_offset: standard.0,
            standard_name: standard.1,
            daylight_offset: Some(daylight.0),
            daylight_name: Some(daylight.1),
        }
    }

    #[must_use]
    pub fn definition(&self) -> TimezoneDefinition {
        TimezoneDefinition {
            tzid: self.tzid.to_string(),
            standard_offset: self.standard_offset.to_string(),
            daylight_offset: self.daylight_offset.map(str::to_string),
            standard_name: Some(self.standard_name.to_string()),
            daylight_name: self.daylight_name.map(str::to_string),
        }
    }
}

pub static COMMON_TIMEZONES: &[CommonTimezone] = &[
    CommonTimezone::seasonal("America/New_York", ("-0500", "EST"), ("-0400", "EDT")),
    CommonTimezone::seasonal("America/Chicago", ("-0600", "CST"), ("-0500", "CDT")),
    CommonTimezone::seasonal("America/Denver", ("-0700", "MST"), ("-0600", "MDT")),
    CommonTimezone::seasonal("America/Los_Angeles", ("-0800", "PST"), ("-0700", "PDT")),
    CommonTimezone::seasonal("Europe/London", ("+0000", "GMT"), ("+0100", "BST")),
    CommonTimezone::seasonal("Europe/Paris", ("+0100", "CET"), ("+0200", "CEST")),
    CommonTimezone::seasonal("Europe/Berlin", ("+0100", "CET"), ("+0200", "CEST")),
    CommonTimezone::fixed("Asia/Tokyo", "+0900", "JST"),
    CommonTimezone::fixed("Asia/Shanghai", "+0800", "CST"),
    CommonTimezone::seasonal("Australia/Sydney", ("+1000", "AEST"), ("+1100", "AEDT")),
    CommonTimezone::fixed("UTC", "+0000", "UTC"),
];

/// Looks up a zone of the static table by its exact identifier.
#[must_use]
pub fn lookup(tzid: &str) -> Option<&'static CommonTimezone> {
    COMMON_TIMEZONES.iter().find(|tz| tz.tzid == tzid)
}

/// Converts a `±HHMM[SS]` offset into signed minutes east of UTC.
#[must_use]
pub fn offset_minutes(offset: &str) -> Option<i64> {
    let offset = offset.trim();
    let (sign, digits) = match offset.as_bytes().first()? {
        b'+' => (1, &offset[1..]),
        b'-' => (-1, &offset[1..]),
        _ => return None,
    };
    if !matches!(digits.len(), 4 | 6) || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }

    let hours: i64 = digits[0..2].parse().ok()?;
    let minutes: i64 = digits[2..4].parse().ok()?;
    Some(sign * (hours * 60 + minutes))
}

/// Whether a local wall-clock time falls in the daylight window.
#[must_use]
pub fn in_daylight_window(local: NaiveDateTime) -> bool {
    let year = local.year();
    let (Some(begin), Some(end)) = (
        last_sunday(year, 3).map(|d| d.and_time(at_hour(2))),
        last_sunday(year, 10).map(|d| d.and_time(at_hour(3))),
    ) else {
        return false;
    };
    local >= begin && local < end
}

fn at_hour(hour: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(hour, 0, 0).unwrap_or(NaiveTime::MIN)
}

/// Last Sunday of a 31-day month.
fn last_sunday(year: i32, month: u32) -> Option<NaiveDate> {
    let last = NaiveDate::from_ymd_opt(year, month, 31)?;
    let back = i64::from(last.weekday().num_days_from_sunday());
    last.checked_sub_signed(TimeDelta::days(back))
}

/// Offset in effect for a local time in the given zone, in minutes.
#[must_use]
pub fn offset_at(zone: &TimezoneDefinition, local: NaiveDateTime) -> i64 {
    let offset = match &zone.daylight_offset {
        Some(daylight) if in_daylight_window(local) => daylight,
        _ => &zone.standard_offset,
    };
    offset_minutes(offset).unwrap_or(0)
}

/// Converts a wall-clock time local to `tzid` into UTC.
///
/// Zones outside the static table are treated as UTC.
#[must_use]
pub fn to_utc(local: NaiveDateTime, tzid: Option<&str>) -> NaiveDateTime {
    let Some(zone) = tzid.and_then(lookup) else {
        return local;
    };
    let offset = offset_at(&zone.definition(), local);
    local
        .checked_sub_signed(TimeDelta::minutes(offset))
        .unwrap_or(local)
}
