use chrono::{NaiveDate, NaiveDateTime, TimeDelta};
use icsforge_core::error::{CoreError, CoreResult};
use icsforge_rfc::ical::timezone;
use icsforge_rfc::model::{Alarm, CalendarEvent, Location, generate_uid};

use crate::cli::NewEventArgs;

const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
];

/// ## Summary
/// Parses a command line date or date-time.
///
/// Accepts `YYYY-MM-DD` (midnight) and `YYYY-MM-DD[T| ]HH:MM[:SS]`.
///
/// ## Errors
/// Returns [`CoreError::InvalidInput`] for anything else.
pub fn parse_cli_datetime(value: &str) -> CoreResult<NaiveDateTime> {
    let value = value.trim();
    if let Some(parsed) = DATETIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(value, fmt).ok())
    {
        return Ok(parsed);
    }
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .map(|date| date.and_time(chrono::NaiveTime::MIN))
        .map_err(|e| CoreError::InvalidInput(format!("invalid date/time '{value}': {e}")))
}

/// ## Summary
/// Builds a fresh event from `icsforge new` arguments.
///
/// All-day events keep only the dates. A missing end defaults to one hour
/// (one day for all-day events) after the start.
///
/// ## Errors
/// Returns an error if a date cannot be parsed, the end precedes the start,
/// or the alarm offset is negative.
pub fn build_event(args: &NewEventArgs) -> CoreResult<CalendarEvent> {
    let mut start = parse_cli_datetime(&args.start)?;
    let mut end = args.end.as_deref().map(parse_cli_datetime).transpose()?;
    if args.all_day {
        start = start.date().and_time(chrono::NaiveTime::MIN);
        end = end.map(|e| e.date().and_time(chrono::NaiveTime::MIN));
    }

    let end = match end {
        Some(end) => end,
        None => {
            let span = if args.all_day {
                TimeDelta::days(1)
            } else {
                TimeDelta::hours(1)
            };
            start
                .checked_add_signed(span)
                .ok_or_else(|| CoreError::InvalidInput(format!("start out of range: {start}")))?
        }
    };
    if end < start {
        return Err(CoreError::ValidationError(format!(
            "end {end} is before start {start}"
        )));
    }

    let mut event = CalendarEvent::new(generate_uid(), args.summary.clone(), start, end);
    event.all_day = args.all_day;
    event.description.clone_from(&args.description);
    event.location = args.location.as_deref().map(Location::text);

    if let Some(tzid) = &args.timezone {
        if timezone::lookup(tzid).is_none() {
            tracing::warn!(tzid, "Zone not in the built-in table; no VTIMEZONE will be emitted");
        }
        event.timezone = Some(tzid.clone());
    }

    if let Some(minutes) = args.alarm {
        if minutes < 0 {
            return Err(CoreError::ValidationError(format!(
                "alarm offset must not be negative: {minutes}"
            )));
        }
        event.alarms.push(Alarm {
            description: Some(args.summary.clone()),
            ..Alarm::display_before_start(minutes)
        });
    }

    tracing::debug!(uid = %event.uid, all_day = event.all_day, "Event created");
    Ok(event)
}
