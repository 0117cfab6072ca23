//! Value type decoders for iCalendar (RFC 5545 §3.3).
//!
//! Each decoder maps one raw (unfolded, still escaped) value onto a model
//! type. Failures carry the logical line number so the parser can log what
//! it skipped.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

use super::error::{ParseError, ParseErrorKind, ParseResult};
use crate::ical::core::ContentLine;
use crate::model::{Frequency, GeoLocation, RecurrenceRule, Weekday, WeekdayNum};

/// A decoded DATE or DATE-TIME value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateValue {
    /// `YYYYMMDD`
    Date(NaiveDate),
    /// `YYYYMMDDTHHMMSS[Z]`
    DateTime { value: NaiveDateTime, utc: bool },
}

impl DateValue {
    /// The wall-clock value; dates map to midnight.
    #[must_use]
    pub fn naive(self) -> NaiveDateTime {
        match self {
            Self::Date(d) => d.and_time(chrono::NaiveTime::MIN),
            Self::DateTime { value, .. } => value,
        }
    }

    #[must_use]
    pub const fn is_date(self) -> bool {
        matches!(self, Self::Date(_))
    }
}

/// Parses a DATE value (RFC 5545 §3.3.4).
///
/// Format: YYYYMMDD (e.g., "19970714")
///
/// ## Errors
/// Returns an error if the string is not a valid 8-digit date.
pub fn parse_date(s: &str, line: usize) -> ParseResult<NaiveDate> {
    if s.len() != 8 || !s.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ParseError::new(ParseErrorKind::InvalidDate, line).with_context(s));
    }

    NaiveDate::parse_from_str(s, "%Y%m%d")
        .map_err(|e| ParseError::new(ParseErrorKind::InvalidDate, line).with_context(e.to_string()))
}

/// Parses a DATE-TIME value (RFC 5545 §3.3.5).
///
/// Format: YYYYMMDD"T"HHMMSS[Z] (e.g., "19970714T133000Z"). Returns the
/// wall-clock value and whether it was UTC-suffixed.
///
/// ## Errors
/// Returns an error if the string is not a valid date-time.
pub fn parse_datetime(s: &str, line: usize) -> ParseResult<(NaiveDateTime, bool)> {
    let (body, utc) = s
        .strip_suffix(['Z', 'z'])
        .map_or((s, false), |stripped| (stripped, true));

    if body.len() != 15 {
        return Err(ParseError::new(ParseErrorKind::InvalidDateTime, line).with_context(s));
    }

    let value = NaiveDateTime::parse_from_str(body, "%Y%m%dT%H%M%S").map_err(|e| {
        ParseError::new(ParseErrorKind::InvalidDateTime, line).with_context(e.to_string())
    })?;

    Ok((value, utc))
}

/// Parses the value of a date-bearing property such as `DTSTART`.
///
/// A `VALUE=DATE` parameter, or a bare eight-digit value, selects the DATE
/// form; everything else is read as DATE-TIME.
///
/// ## Errors
/// Returns an error if the value matches neither form.
pub fn parse_date_value(cl: &ContentLine, line: usize) -> ParseResult<DateValue> {
    let raw = cl.raw_value.trim();
    let is_date = cl
        .value_type()
        .is_some_and(|v| v.eq_ignore_ascii_case("DATE"))
        || (raw.len() == 8 && !raw.contains('T'));

    if is_date {
        parse_date(raw, line).map(DateValue::Date)
    } else {
        parse_datetime(raw, line).map(|(value, utc)| DateValue::DateTime { value, utc })
    }
}

/// Parses a timestamp property (`CREATED`, `LAST-MODIFIED`) as UTC.
///
/// Values without the `Z` suffix are read as UTC as well.
///
/// ## Errors
/// Returns an error if the value is not a valid date-time.
pub fn parse_timestamp(s: &str, line: usize) -> ParseResult<DateTime<Utc>> {
    parse_datetime(s.trim(), line).map(|(value, _)| value.and_utc())
}

/// Parses a DURATION value (RFC 5545 §3.3.6) into signed whole minutes.
///
/// Format: [+|-]P[nW][nD][T[nH][nM][nS]]. Weeks count 7 days; seconds are
/// truncated toward zero.
///
/// ## Errors
/// Returns an error if the string is not a valid duration.
pub fn parse_duration(s: &str, line: usize) -> ParseResult<i64> {
    let invalid = || ParseError::new(ParseErrorKind::InvalidDuration, line).with_context(s);

    let trimmed = s.trim();
    let (negative, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };
    let body = rest
        .strip_prefix(['P', 'p'])
        .ok_or_else(invalid)?
        .to_ascii_uppercase();

    let mut seconds: i64 = 0;
    let mut in_time = false;
    let mut digits = String::new();
    let mut saw_component = false;

    for c in body.chars() {
        if c.is_ascii_digit() {
            digits.push(c);
            continue;
        }
        if c == 'T' {
            if in_time || !digits.is_empty() {
                return Err(invalid());
            }
            in_time = true;
            continue;
        }

        let n: i64 = digits.parse().map_err(|_e| invalid())?;
        digits.clear();
        let unit = match (c, in_time) {
            ('W', false) => 7 * 86_400,
            ('D', false) => 86_400,
            ('H', true) => 3_600,
            ('M', true) => 60,
            ('S', true) => 1,
            _ => return Err(invalid()),
        };
        seconds = n
            .checked_mul(unit)
            .and_then(|v| seconds.checked_add(v))
            .ok_or_else(invalid)?;
        saw_component = true;
    }

    if !digits.is_empty() || !saw_component {
        return Err(invalid());
    }

    let minutes = seconds / 60;
    Ok(if negative { -minutes } else { minutes })
}

/// Parses a GEO value: `latitude;longitude` as floats.
///
/// ## Errors
/// Returns an error if either coordinate is missing or not a number.
pub fn parse_geo(s: &str, line: usize) -> ParseResult<GeoLocation> {
    let invalid = || ParseError::new(ParseErrorKind::InvalidGeo, line).with_context(s);

    let (lat, lon) = s.split_once(';').ok_or_else(invalid)?;
    Ok(GeoLocation {
        latitude: lat.trim().parse().map_err(|_e| invalid())?,
        longitude: lon.trim().parse().map_err(|_e| invalid())?,
    })
}

/// Parses an Apple `geo:lat,lon` URI.
///
/// ## Errors
/// Returns an error if the URI scheme or coordinates are invalid.
pub fn parse_geo_uri(s: &str, line: usize) -> ParseResult<GeoLocation> {
    let invalid = || ParseError::new(ParseErrorKind::InvalidGeo, line).with_context(s);

    let coords = s
        .trim()
        .strip_prefix("geo:")
        .ok_or_else(invalid)?;
    // geo URIs may carry ;u=uncertainty and similar parameters
    let coords = coords.split(';').next().unwrap_or_default();
    let (lat, lon) = coords.split_once(',').ok_or_else(invalid)?;
    Ok(GeoLocation {
        latitude: lat.trim().parse().map_err(|_e| invalid())?,
        longitude: lon.trim().parse().map_err(|_e| invalid())?,
    })
}

/// Parses a RECUR (RRULE) value (RFC 5545 §3.3.10).
///
/// Unrecognized keys are ignored, and so are recognized keys whose value
/// does not decode. Only a missing or unknown `FREQ` rejects the rule.
///
/// ## Errors
/// Returns an error if `FREQ` is missing or invalid.
pub fn parse_rrule(s: &str, line: usize) -> ParseResult<RecurrenceRule> {
    let mut frequency = None;
    let mut rule = RecurrenceRule::new(Frequency::Daily);

    for part in s.trim().split(';').filter(|p| !p.is_empty()) {
        let Some((key, value)) = part.split_once('=') else {
            tracing::debug!(line, part, "Ignoring RRULE part without '='");
            continue;
        };

        let key = key.trim().to_ascii_uppercase();
        if key == "FREQ" {
            frequency = Some(Frequency::parse(value.trim()).ok_or_else(|| {
                ParseError::new(ParseErrorKind::InvalidFrequency, line).with_context(value)
            })?);
        } else if !apply_rrule_part(&mut rule, &key, value.trim(), line) {
            tracing::debug!(line, key, value, "Ignoring undecodable RRULE part");
        }
    }

    rule.frequency = frequency.ok_or_else(|| {
        ParseError::new(ParseErrorKind::InvalidRRule, line).with_context("missing FREQ")
    })?;
    Ok(rule)
}

/// Applies a single RRULE key-value pair. Returns `false` if a recognized
/// key carried a value that does not decode.
fn apply_rrule_part(rule: &mut RecurrenceRule, key: &str, value: &str, line: usize) -> bool {
    match key {
        "INTERVAL" => value.parse().map(|v| rule.interval = Some(v)).is_ok(),
        "COUNT" => value.parse().map(|v| rule.count = Some(v)).is_ok(),
        "UNTIL" => parse_until(value, line).map(|v| rule.until = Some(v)).is_ok(),
        "WKST" => Weekday::parse(value).map(|v| rule.week_start = Some(v)).is_some(),
        "BYDAY" => parse_list(value, WeekdayNum::parse)
            .map(|v| rule.by_day = v)
            .is_some(),
        "BYMONTHDAY" => parse_list(value, |v| v.parse().ok())
            .map(|v| rule.by_month_day = v)
            .is_some(),
        "BYMONTH" => parse_list(value, |v| v.parse().ok())
            .map(|v| rule.by_month = v)
            .is_some(),
        "BYSETPOS" => parse_list(value, |v| v.parse().ok())
            .map(|v| rule.by_set_pos = v)
            .is_some(),
        // Unknown rule part - ignore
        _ => true,
    }
}

/// UNTIL can be DATE or DATE-TIME.
fn parse_until(value: &str, line: usize) -> ParseResult<NaiveDateTime> {
    if value.contains('T') {
        parse_datetime(value, line).map(|(v, _)| v)
    } else {
        parse_date(value, line).map(|d| d.and_time(chrono::NaiveTime::MIN))
    }
}

/// Parses a comma-separated list, failing if any item fails.
fn parse_list<T>(s: &str, item: impl Fn(&str) -> Option<T>) -> Option<Vec<T>> {
    s.split(',').map(|v| item(v.trim())).collect()
}

/// Checks a UTC-OFFSET value (RFC 5545 §3.3.14): `(+|-)HHMM[SS]`.
///
/// ## Errors
/// Returns an error if the string is not a valid UTC offset.
pub fn parse_utc_offset(s: &str, line: usize) -> ParseResult<String> {
    let s = s.trim();
    let valid = matches!(s.len(), 5 | 7)
        && s.starts_with(['+', '-'])
        && s[1..].bytes().all(|b| b.is_ascii_digit());

    if valid {
        Ok(s.to_string())
    } else {
        Err(ParseError::new(ParseErrorKind::InvalidUtcOffset, line).with_context(s))
    }
}

/// Unescapes text values (RFC 5545 §3.3.11).
///
/// Escape sequences: `\n` `\N` `\,` `\;` `\\`. The input is scanned once left
/// to right, so an escaped backslash followed by `n` stays a literal
/// backslash and `n`.
#[must_use]
pub fn unescape_text(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    let mut chars = s.chars();

    while let Some(c) = chars.next() {
        if c == '\\' {
            match chars.next() {
                Some('n' | 'N') => result.push('\n'),
                Some(',') => result.push(','),
                Some(';') => result.push(';'),
                Some('\\') | None => result.push('\\'),
                Some(other) => {
                    // Invalid escape, preserve as-is
                    result.push('\\');
                    result.push(other);
                }
            }
        } else {
            result.push(c);
        }
    }

    result
}

/// Splits a TEXT list on unescaped commas and unescapes each item.
#[must_use]
pub fn split_text_list(s: &str) -> Vec<String> {
    let mut items = Vec::new();
    let mut current = String::new();
    let mut chars = s.chars();

    while let Some(c) = chars.next() {
        match c {
            '\\' => {
                current.push(c);
                if let Some(next) = chars.next() {
                    current.push(next);
                }
            }
            ',' => items.push(unescape_text(&std::mem::take(&mut current))),
            _ => current.push(c),
        }
    }
    items.push(unescape_text(&current));

    items.retain(|item| !item.is_empty());
    items
}

/// Parses a BOOLEAN value (RFC 5545 §3.3.2).
///
/// ## Errors
/// Returns an error if the string is not "TRUE" or "FALSE".
pub fn parse_boolean(s: &str, line: usize) -> ParseResult<bool> {
    match s.trim().to_ascii_uppercase().as_str() {
        "TRUE" => Ok(true),
        "FALSE" => Ok(false),
        _ => Err(ParseError::new(ParseErrorKind::InvalidBoolean, line).with_context(s)),
    }
}

/// Parses an INTEGER value (RFC 5545 §3.3.8) into any integer type.
///
/// ## Errors
/// Returns an error if the string is not a valid integer for `T`.
pub fn parse_integer<T: std::str::FromStr>(s: &str, line: usize) -> ParseResult<T> {
    s.trim()
        .parse()
        .map_err(|_e| ParseError::new(ParseErrorKind::InvalidInteger, line).with_context(s))
}

/// Strips a `mailto:` scheme (case-insensitive) from a CAL-ADDRESS.
#[must_use]
pub fn strip_mailto(s: &str) -> &str {
    let s = s.trim();
    match s.get(..7) {
        Some(scheme) if scheme.eq_ignore_ascii_case("mailto:") => &s[7..],
        _ => s,
    }
}
