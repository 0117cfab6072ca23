//! iCalendar generator (RFC 5545).
//!
//! Writes a [`Calendar`] as folded, CRLF-terminated ICS text. Every line goes
//! through [`fold_line`], so no physical line exceeds 75 octets.

use chrono::{DateTime, Utc};

use super::escape::escape_text;
use super::fold::fold_line;
use super::format::{
    format_date, format_duration, format_local_datetime, format_timestamp, format_utc_datetime,
};
use super::options::GeneratorOptions;
use crate::ical::core::{ContentLine, Parameter};
use crate::ical::timezone;
use crate::model::{
    Alarm, AppleExtensions, Attendee, Calendar, CalendarEvent, GoogleExtensions,
    MicrosoftExtensions, Organizer, TimezoneDefinition, TriggerType,
};

/// Synthetic onset of standard time: last Sunday of October, 03:00.
const STANDARD_DTSTART: &str = "19701025T030000";
const STANDARD_RRULE: &str = "FREQ=YEARLY;BYMONTH=10;BYDAY=-1SU";
/// Synthetic onset of daylight time: last Sunday of March, 02:00.
const DAYLIGHT_DTSTART: &str = "19700329T020000";
const DAYLIGHT_RRULE: &str = "FREQ=YEARLY;BYMONTH=3;BYDAY=-1SU";

/// Generates ICS text for a calendar.
#[must_use]
#[tracing::instrument(skip_all, fields(events = calendar.events.len(), platform = %options.target_platform))]
pub fn generate(calendar: &Calendar, options: &GeneratorOptions) -> String {
    let mut w = IcsWriter::default();

    w.begin("VCALENDAR");
    w.property("VERSION", &calendar.version);
    w.property(
        "PRODID",
        options.prod_id.as_deref().unwrap_or(&calendar.prod_id),
    );
    w.property("CALSCALE", &calendar.calscale);
    if let Some(method) = options.method.as_ref().or(calendar.method.as_ref()) {
        w.property("METHOD", method);
    }
    if let Some(name) = &calendar.name {
        w.text("X-WR-CALNAME", name);
    }
    if let Some(description) = &calendar.description {
        w.text("X-WR-CALDESC", description);
    }

    if options.include_timezone {
        for tzid in referenced_zones(calendar) {
            match resolve_zone(calendar, tzid) {
                Some(zone) => write_timezone(&mut w, &zone),
                None => tracing::debug!(tzid, "No definition for zone; VTIMEZONE omitted"),
            }
        }
    }

    for event in &calendar.events {
        write_event(&mut w, event);
    }

    w.end("VCALENDAR");

    tracing::debug!(bytes = w.out.len(), "Generated calendar");
    w.out
}

/// Generates ICS text for one event wrapped in a default calendar.
#[must_use]
pub fn generate_single(event: &CalendarEvent, options: &GeneratorOptions) -> String {
    generate(&Calendar::with_event(event.clone()), options)
}

#[derive(Debug, Default)]
struct IcsWriter {
    out: String,
}

impl IcsWriter {
    fn line(&mut self, line: &ContentLine) {
        self.out.push_str(&fold_line(&line.to_string()));
    }

    fn property(&mut self, name: &str, value: &str) {
        self.line(&ContentLine::new(name, value));
    }

    fn text(&mut self, name: &str, value: &str) {
        self.property(name, &escape_text(value));
    }

    fn begin(&mut self, component: &str) {
        self.property("BEGIN", component);
    }

    fn end(&mut self, component: &str) {
        self.property("END", component);
    }
}

/// Distinct zone identifiers in order of first use.
fn referenced_zones(calendar: &Calendar) -> Vec<&str> {
    let mut zones: Vec<&str> = Vec::new();
    for tzid in calendar.events.iter().filter_map(|e| e.timezone.as_deref()) {
        if !zones.contains(&tzid) {
            zones.push(tzid);
        }
    }
    zones
}

/// The calendar's own definition wins over the static table.
fn resolve_zone(calendar: &Calendar, tzid: &str) -> Option<TimezoneDefinition> {
    calendar
        .timezone
        .as_ref()
        .filter(|tz| tz.tzid == tzid)
        .cloned()
        .or_else(|| timezone::lookup(tzid).map(timezone::CommonTimezone::definition))
}

fn write_timezone(w: &mut IcsWriter, zone: &TimezoneDefinition) {
    let standard = zone.standard_offset.as_str();
    let daylight = zone.daylight_offset.as_deref();

    w.begin("VTIMEZONE");
    w.property("TZID", &zone.tzid);

    w.begin("STANDARD");
    w.property("DTSTART", STANDARD_DTSTART);
    if daylight.is_some() {
        w.property("RRULE", STANDARD_RRULE);
    }
    w.property("TZOFFSETFROM", daylight.unwrap_or(standard));
    w.property("TZOFFSETTO", standard);
    if let Some(name) = &zone.standard_name {
        w.text("TZNAME", name);
    }
    w.end("STANDARD");

    if let Some(daylight) = daylight {
        w.begin("DAYLIGHT");
        w.property("DTSTART", DAYLIGHT_DTSTART);
        w.property("RRULE", DAYLIGHT_RRULE);
        w.property("TZOFFSETFROM", standard);
        w.property("TZOFFSETTO", daylight);
        if let Some(name) = &zone.daylight_name {
            w.text("TZNAME", name);
        }
        w.end("DAYLIGHT");
    }

    w.end("VTIMEZONE");
}

fn write_event(w: &mut IcsWriter, event: &CalendarEvent) {
    w.begin("VEVENT");

    w.property("UID", &event.uid);
    let stamp = event.last_modified.unwrap_or_else(Utc::now);
    w.property("DTSTAMP", &format_timestamp(stamp));
    w.text("SUMMARY", &event.summary);
    write_event_times(w, event);

    if let Some(description) = &event.description {
        w.text("DESCRIPTION", description);
    }
    if let Some(location) = &event.location {
        if !location.text.is_empty() {
            w.text("LOCATION", &location.text);
        }
        if let Some(geo) = location.geo {
            w.property("GEO", &format!("{};{}", geo.latitude, geo.longitude));
        }
    }
    if let Some(url) = &event.url {
        w.property("URL", url);
    }
    if let Some(status) = event.status {
        w.property("STATUS", status.as_str());
    }
    if let Some(class) = event.classification {
        w.property("CLASS", class.as_str());
    }
    if let Some(transp) = event.transparency {
        w.property("TRANSP", transp.as_str());
    }
    if !event.categories.is_empty() {
        let categories: Vec<String> = event.categories.iter().map(|c| escape_text(c)).collect();
        w.property("CATEGORIES", &categories.join(","));
    }
    if let Some(priority) = event.priority {
        w.property("PRIORITY", &priority.to_string());
    }
    if let Some(sequence) = event.sequence {
        w.property("SEQUENCE", &sequence.to_string());
    }
    if let Some(created) = event.created {
        w.property("CREATED", &format_timestamp(created));
    }
    if let Some(last_modified) = event.last_modified {
        w.property("LAST-MODIFIED", &format_timestamp(last_modified));
    }
    if let Some(rule) = &event.recurrence_rule {
        w.property("RRULE", &rule.to_value(event.all_day));
    }
    if let Some(organizer) = &event.organizer {
        w.line(&organizer_line(organizer));
    }
    for attendee in &event.attendees {
        w.line(&attendee_line(attendee));
    }

    if let Some(apple) = &event.apple_extensions {
        write_apple(w, apple);
    }
    if let Some(microsoft) = &event.microsoft_extensions {
        write_microsoft(w, microsoft);
    }
    if let Some(google) = &event.google_extensions {
        write_google(w, google);
    }

    for alarm in &event.alarms {
        write_alarm(w, alarm);
    }

    w.end("VEVENT");
}

/// `VALUE=DATE` for all-day events, `TZID`-qualified local times for zoned
/// events, UTC otherwise.
fn write_event_times(w: &mut IcsWriter, event: &CalendarEvent) {
    for (name, value) in [("DTSTART", event.start_date), ("DTEND", event.end_date)] {
        let line = if event.all_day {
            ContentLine::with_params(name, vec![Parameter::value_type("DATE")], format_date(value))
        } else if let Some(tzid) = &event.timezone {
            ContentLine::with_params(
                name,
                vec![Parameter::tzid(tzid)],
                format_local_datetime(value),
            )
        } else {
            ContentLine::new(name, format_utc_datetime(value))
        };
        w.line(&line);
    }
}

fn mailto(email: &str) -> String {
    format!("mailto:{email}")
}

fn organizer_line(organizer: &Organizer) -> ContentLine {
    let mut params = Vec::new();
    if let Some(name) = &organizer.name {
        params.push(Parameter::cn(name));
    }
    if let Some(dir) = &organizer.directory {
        params.push(Parameter::new("DIR", dir));
    }
    ContentLine::with_params("ORGANIZER", params, mailto(&organizer.email))
}

fn attendee_line(attendee: &Attendee) -> ContentLine {
    let mut params = Vec::new();
    if let Some(name) = &attendee.name {
        params.push(Parameter::cn(name));
    }
    params.push(Parameter::new("ROLE", attendee.role.as_str()));
    params.push(Parameter::new(
        "PARTSTAT",
        attendee.participation_status.as_str(),
    ));
    if let Some(rsvp) = attendee.rsvp {
        params.push(Parameter::new("RSVP", boolean(rsvp)));
    }
    if let Some(dir) = &attendee.directory {
        params.push(Parameter::new("DIR", dir));
    }
    ContentLine::with_params("ATTENDEE", params, mailto(&attendee.email))
}

const fn boolean(value: bool) -> &'static str {
    if value { "TRUE" } else { "FALSE" }
}

fn write_apple(w: &mut IcsWriter, apple: &AppleExtensions) {
    if let Some(behavior) = &apple.travel_advisory_behavior {
        w.property("X-APPLE-TRAVEL-ADVISORY-BEHAVIOR", behavior);
    }
    if let Some(minutes) = apple.travel_duration {
        w.line(
            &ContentLine::new("X-APPLE-TRAVEL-DURATION", format_duration(minutes))
                .param("VALUE", "DURATION"),
        );
    }
    if let Some(location) = &apple.structured_location {
        let mut line = ContentLine::new(
            "X-APPLE-STRUCTURED-LOCATION",
            format!("geo:{},{}", location.geo.latitude, location.geo.longitude),
        )
        .param("VALUE", "URI");
        if let Some(address) = &location.address {
            line = line.param("X-ADDRESS", address);
        }
        if let Some(radius) = location.radius {
            line = line.param("X-APPLE-RADIUS", radius.to_string());
        }
        w.line(&line.param("X-TITLE", &location.title));
    }
    for property in &apple.other {
        w.line(&ContentLine::from(property));
    }
}

fn write_microsoft(w: &mut IcsWriter, microsoft: &MicrosoftExtensions) {
    if let Some(status) = microsoft.busy_status {
        w.property("X-MICROSOFT-CDO-BUSYSTATUS", status.as_str());
    }
    if let Some(status) = microsoft.intended_status {
        w.property("X-MICROSOFT-CDO-INTENDEDSTATUS", status.as_str());
    }
    if let Some(importance) = microsoft.importance {
        w.property("X-MICROSOFT-CDO-IMPORTANCE", &importance.to_string());
    }
    if let Some(all_day) = microsoft.all_day_event {
        w.property("X-MICROSOFT-CDO-ALLDAYEVENT", boolean(all_day));
    }
    if let Some(disallow) = microsoft.disallow_counter {
        w.property("X-MICROSOFT-DISALLOW-COUNTER", boolean(disallow));
    }
    for property in &microsoft.other {
        w.line(&ContentLine::from(property));
    }
}

fn write_google(w: &mut IcsWriter, google: &GoogleExtensions) {
    if let Some(url) = &google.conference_url {
        w.property("X-GOOGLE-CONFERENCE", url);
    }
    for property in &google.other {
        w.line(&ContentLine::from(property));
    }
}

fn write_alarm(w: &mut IcsWriter, alarm: &Alarm) {
    w.begin("VALARM");
    w.property("ACTION", alarm.action.as_str());
    w.line(&trigger_line(alarm));
    if let Some(description) = &alarm.description {
        w.text("DESCRIPTION", description);
    }
    if let Some(summary) = &alarm.summary {
        w.text("SUMMARY", summary);
    }
    if let Some(repeat) = alarm.repeat {
        w.property("REPEAT", &repeat.to_string());
    }
    if let Some(duration) = alarm.duration {
        w.property("DURATION", &format_duration(duration));
    }
    w.end("VALARM");
}

/// Inverse of the parser's trigger decoding.
fn trigger_line(alarm: &Alarm) -> ContentLine {
    if alarm.trigger_type == TriggerType::Absolute {
        let at = DateTime::<Utc>::from_timestamp_millis(alarm.trigger_value).unwrap_or_default();
        return ContentLine::new("TRIGGER", format_timestamp(at)).param("VALUE", "DATE-TIME");
    }

    let sign = if alarm.trigger_type.is_before() { "-" } else { "" };
    let line = ContentLine::new(
        "TRIGGER",
        format!("{sign}{}", format_duration(alarm.trigger_value.abs())),
    );
    if alarm.trigger_type.is_related_to_end() {
        line.param("RELATED", "END")
    } else {
        line
    }
}
