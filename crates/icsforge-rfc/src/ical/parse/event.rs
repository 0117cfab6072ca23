//! Accumulates the properties of one `VEVENT`.

use chrono::{DateTime, TimeDelta, Utc};

use super::error::{ParseError, ParseErrorKind, ParseResult};
use super::values::{
    DateValue, parse_boolean, parse_date_value, parse_duration, parse_geo, parse_geo_uri,
    parse_integer, parse_rrule, parse_timestamp, split_text_list, strip_mailto, unescape_text,
};
use crate::ical::core::ContentLine;
use crate::model::{
    Alarm, AppleExtensions, Attendee, AttendeeRole, BusyStatus, CalendarEvent, Classification,
    EventStatus, GeoLocation, GoogleExtensions, Location, MicrosoftExtensions, Organizer,
    ParticipationStatus, RecurrenceRule, StructuredLocation, Transparency, VendorProperty,
};

const APPLE_PREFIX: &str = "X-APPLE-";
const MICROSOFT_PREFIX: &str = "X-MICROSOFT-";
const GOOGLE_PREFIX: &str = "X-GOOGLE-";

/// Event under construction.
///
/// Every field stays optional until [`EventBuilder::finish`], which decides
/// whether the event is complete enough to keep.
#[derive(Debug, Default)]
pub struct EventBuilder {
    uid: Option<String>,
    summary: Option<String>,
    description: Option<String>,
    url: Option<String>,
    start: Option<DateValue>,
    end: Option<DateValue>,
    duration: Option<i64>,
    timezone: Option<String>,
    location: Option<String>,
    geo: Option<GeoLocation>,
    status: Option<EventStatus>,
    classification: Option<Classification>,
    transparency: Option<Transparency>,
    categories: Vec<String>,
    priority: Option<u8>,
    organizer: Option<Organizer>,
    attendees: Vec<Attendee>,
    recurrence_rule: Option<RecurrenceRule>,
    alarms: Vec<Alarm>,
    created: Option<DateTime<Utc>>,
    last_modified: Option<DateTime<Utc>>,
    sequence: Option<u32>,
    apple: Option<AppleExtensions>,
    microsoft: Option<MicrosoftExtensions>,
    google: Option<GoogleExtensions>,
}

impl EventBuilder {
    /// Applies one property of the event.
    ///
    /// ## Errors
    /// Returns an error if the property value does not decode; the builder
    /// is left unchanged in that case.
    pub fn apply(&mut self, cl: &ContentLine, line: usize) -> ParseResult<()> {
        let raw = cl.raw_value.as_str();

        match cl.name.as_str() {
            "UID" => self.uid = Some(raw.trim().to_string()),
            "SUMMARY" => self.summary = Some(unescape_text(raw)),
            "DESCRIPTION" => self.description = Some(unescape_text(raw)),
            "URL" => self.url = Some(raw.trim().to_string()),
            "DTSTART" => {
                let start = parse_date_value(cl, line)?;
                self.timezone = match start {
                    DateValue::DateTime { utc: false, .. } => cl.tzid().map(str::to_string),
                    _ => None,
                };
                self.start = Some(start);
            }
            "DTEND" => self.end = Some(parse_date_value(cl, line)?),
            "DURATION" => self.duration = Some(parse_duration(raw, line)?),
            "LOCATION" => self.location = Some(unescape_text(raw)),
            "GEO" => self.geo = Some(parse_geo(raw, line)?),
            "STATUS" => self.status = Some(parse_enum(raw, line, EventStatus::parse)?),
            "CLASS" => {
                self.classification = Some(parse_enum(raw, line, Classification::parse)?);
            }
            "TRANSP" => self.transparency = Some(parse_enum(raw, line, Transparency::parse)?),
            "CATEGORIES" => self.categories.extend(split_text_list(raw)),
            "PRIORITY" => {
                let priority: u8 = parse_integer(raw, line)?;
                if !(1..=9).contains(&priority) {
                    return Err(invalid_value(line, raw));
                }
                self.priority = Some(priority);
            }
            "SEQUENCE" => self.sequence = Some(parse_integer(raw, line)?),
            "CREATED" => self.created = Some(parse_timestamp(raw, line)?),
            "LAST-MODIFIED" => self.last_modified = Some(parse_timestamp(raw, line)?),
            "ORGANIZER" => self.organizer = Some(parse_organizer(cl, line)?),
            "ATTENDEE" => self.attendees.push(parse_attendee(cl, line)?),
            "RRULE" => self.recurrence_rule = Some(parse_rrule(raw, line)?),
            name if name.starts_with(APPLE_PREFIX) => self.apply_apple(cl, line)?,
            name if name.starts_with(MICROSOFT_PREFIX) => self.apply_microsoft(cl, line)?,
            name if name.starts_with(GOOGLE_PREFIX) => self.apply_google(cl),
            name => tracing::trace!(line, name, "Ignoring event property"),
        }

        Ok(())
    }

    /// Attaches an alarm closed inside this event.
    pub fn push_alarm(&mut self, alarm: Alarm) {
        self.alarms.push(alarm);
    }

    /// Returns the UID seen so far, for logging.
    #[must_use]
    pub fn uid(&self) -> Option<&str> {
        self.uid.as_deref()
    }

    /// Builds the event, or `None` if `UID` or `DTSTART` is missing.
    ///
    /// Without `DTEND` the end is derived from `DURATION`, and falls back to
    /// the start.
    #[must_use]
    pub fn finish(self) -> Option<CalendarEvent> {
        let uid = self.uid.filter(|uid| !uid.is_empty())?;
        let start = self.start?;
        let start_date = start.naive();

        let end_date = match (self.end, self.duration) {
            (Some(end), _) => end.naive(),
            (None, Some(minutes)) => TimeDelta::try_minutes(minutes)
                .and_then(|d| start_date.checked_add_signed(d))
                .unwrap_or(start_date),
            (None, None) => start_date,
        };

        let location = match (self.location, self.geo) {
            (None, None) => None,
            (text, geo) => Some(Location {
                text: text.unwrap_or_default(),
                geo,
            }),
        };

        Some(CalendarEvent {
            uid,
            summary: self.summary.unwrap_or_default(),
            description: self.description,
            url: self.url,
            start_date,
            end_date,
            all_day: start.is_date(),
            timezone: self.timezone,
            location,
            status: self.status,
            classification: self.classification,
            transparency: self.transparency,
            categories: self.categories,
            priority: self.priority,
            organizer: self.organizer,
            attendees: self.attendees,
            recurrence_rule: self.recurrence_rule,
            alarms: self.alarms,
            created: self.created,
            last_modified: self.last_modified,
            sequence: self.sequence,
            apple_extensions: self.apple,
            microsoft_extensions: self.microsoft,
            google_extensions: self.google,
        })
    }

    fn apply_apple(&mut self, cl: &ContentLine, line: usize) -> ParseResult<()> {
        let raw = cl.raw_value.as_str();

        match cl.name.as_str() {
            "X-APPLE-TRAVEL-ADVISORY-BEHAVIOR" => {
                self.apple().travel_advisory_behavior = Some(raw.trim().to_string());
            }
            "X-APPLE-TRAVEL-DURATION" => {
                let minutes = parse_duration(raw, line)?;
                self.apple().travel_duration = Some(minutes);
            }
            "X-APPLE-STRUCTURED-LOCATION" => {
                let geo = parse_geo_uri(raw, line)?;
                let radius = cl
                    .get_param_value("X-APPLE-RADIUS")
                    .map(|r| r.trim().parse().map_err(|_e| invalid_value(line, r)))
                    .transpose()?;
                self.apple().structured_location = Some(StructuredLocation {
                    title: cl.get_param_value("X-TITLE").unwrap_or_default().to_string(),
                    address: cl.get_param_value("X-ADDRESS").map(str::to_string),
                    radius,
                    geo,
                });
            }
            _ => self.apple().other.push(VendorProperty::from(cl)),
        }

        Ok(())
    }

    fn apply_microsoft(&mut self, cl: &ContentLine, line: usize) -> ParseResult<()> {
        let raw = cl.raw_value.as_str();

        match cl.name.as_str() {
            "X-MICROSOFT-CDO-BUSYSTATUS" => {
                let status = parse_enum(raw, line, BusyStatus::parse)?;
                self.microsoft().busy_status = Some(status);
            }
            "X-MICROSOFT-CDO-INTENDEDSTATUS" => {
                let status = parse_enum(raw, line, BusyStatus::parse)?;
                self.microsoft().intended_status = Some(status);
            }
            "X-MICROSOFT-CDO-IMPORTANCE" => {
                let importance: u8 = parse_integer(raw, line)?;
                if importance > 2 {
                    return Err(invalid_value(line, raw));
                }
                self.microsoft().importance = Some(importance);
            }
            "X-MICROSOFT-CDO-ALLDAYEVENT" => {
                let all_day = parse_boolean(raw, line)?;
                self.microsoft().all_day_event = Some(all_day);
            }
            "X-MICROSOFT-DISALLOW-COUNTER" => {
                let disallow = parse_boolean(raw, line)?;
                self.microsoft().disallow_counter = Some(disallow);
            }
            _ => self.microsoft().other.push(VendorProperty::from(cl)),
        }

        Ok(())
    }

    fn apply_google(&mut self, cl: &ContentLine) {
        let raw = cl.raw_value.as_str();

        if cl.name == "X-GOOGLE-CONFERENCE" {
            self.google().conference_url = Some(raw.trim().to_string());
        } else {
            self.google().other.push(VendorProperty::from(cl));
        }
    }

    fn apple(&mut self) -> &mut AppleExtensions {
        self.apple.get_or_insert_with(AppleExtensions::default)
    }

    fn microsoft(&mut self) -> &mut MicrosoftExtensions {
        self.microsoft.get_or_insert_with(MicrosoftExtensions::default)
    }

    fn google(&mut self) -> &mut GoogleExtensions {
        self.google.get_or_insert_with(GoogleExtensions::default)
    }
}

fn invalid_value(line: usize, value: &str) -> ParseError {
    ParseError::new(ParseErrorKind::InvalidValue, line).with_context(value)
}

fn parse_enum<T>(raw: &str, line: usize, parse: impl Fn(&str) -> Option<T>) -> ParseResult<T> {
    parse(raw.trim()).ok_or_else(|| invalid_value(line, raw))
}

/// Decodes the address shared by `ORGANIZER` and `ATTENDEE`.
fn parse_address(cl: &ContentLine, line: usize) -> ParseResult<String> {
    let email = strip_mailto(&cl.raw_value);
    if email.is_empty() {
        return Err(invalid_value(line, &cl.raw_value));
    }
    Ok(email.to_string())
}

fn parse_organizer(cl: &ContentLine, line: usize) -> ParseResult<Organizer> {
    Ok(Organizer {
        name: cl.get_param_value("CN").map(str::to_string),
        email: parse_address(cl, line)?,
        directory: cl.get_param_value("DIR").map(str::to_string),
    })
}

/// Unknown `ROLE`/`PARTSTAT` values fall back to the RFC defaults.
fn parse_attendee(cl: &ContentLine, line: usize) -> ParseResult<Attendee> {
    Ok(Attendee {
        name: cl.get_param_value("CN").map(str::to_string),
        email: parse_address(cl, line)?,
        role: cl
            .get_param_value("ROLE")
            .and_then(AttendeeRole::parse)
            .unwrap_or_default(),
        participation_status: cl
            .get_param_value("PARTSTAT")
            .and_then(ParticipationStatus::parse)
            .unwrap_or_default(),
        rsvp: cl
            .get_param_value("RSVP")
            .and_then(|v| parse_boolean(v, line).ok()),
        directory: cl.get_param_value("DIR").map(str::to_string),
    })
}
