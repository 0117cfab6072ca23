//! Component frames of the parser's `BEGIN`/`END` stack.

use super::error::{ParseError, ParseErrorKind, ParseResult};
use super::event::EventBuilder;
use super::values::{parse_datetime, parse_duration, parse_integer, parse_utc_offset, unescape_text};
use crate::ical::core::ContentLine;
use crate::model::{Alarm, AlarmAction, TimezoneDefinition, TriggerType};

/// Offset used for a `VTIMEZONE` that carries no usable observance.
const UTC_OFFSET: &str = "+0000";

/// One open component.
#[derive(Debug)]
pub enum Frame {
    Calendar,
    Event(Box<EventBuilder>),
    Alarm(AlarmBuilder),
    Timezone(TimezoneBuilder),
    Observance(ObservanceBuilder),
    /// A component the codec does not model. Everything nested inside is
    /// skipped as well.
    Unknown(String),
}

impl Frame {
    /// Opens the frame for `BEGIN:<name>` inside `parent`.
    ///
    /// Components in a position the model has no place for become
    /// [`Frame::Unknown`].
    #[must_use]
    pub fn begin(name: &str, parent: Option<&Self>) -> Self {
        match (name, parent) {
            (_, Some(Self::Unknown(_))) => Self::Unknown(name.to_string()),
            ("VCALENDAR", None) => Self::Calendar,
            ("VEVENT", None | Some(Self::Calendar)) => Self::Event(Box::default()),
            ("VTIMEZONE", None | Some(Self::Calendar)) => Self::Timezone(TimezoneBuilder::default()),
            ("VALARM", Some(Self::Event(_))) => Self::Alarm(AlarmBuilder::default()),
            ("STANDARD", Some(Self::Timezone(_))) => {
                Self::Observance(ObservanceBuilder::new(false))
            }
            ("DAYLIGHT", Some(Self::Timezone(_))) => {
                Self::Observance(ObservanceBuilder::new(true))
            }
            _ => Self::Unknown(name.to_string()),
        }
    }

    /// The component name an `END` line must carry to close this frame.
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::Calendar => "VCALENDAR",
            Self::Event(_) => "VEVENT",
            Self::Alarm(_) => "VALARM",
            Self::Timezone(_) => "VTIMEZONE",
            Self::Observance(o) if o.daylight => "DAYLIGHT",
            Self::Observance(_) => "STANDARD",
            Self::Unknown(name) => name,
        }
    }
}

/// `VALARM` under construction.
#[derive(Debug, Default)]
pub struct AlarmBuilder {
    action: Option<AlarmAction>,
    trigger: Option<(TriggerType, i64)>,
    description: Option<String>,
    summary: Option<String>,
    repeat: Option<u32>,
    duration: Option<i64>,
}

impl AlarmBuilder {
    /// Applies one property of the alarm.
    ///
    /// ## Errors
    /// Returns an error if the property value does not decode.
    pub fn apply(&mut self, cl: &ContentLine, line: usize) -> ParseResult<()> {
        let raw = cl.raw_value.as_str();

        match cl.name.as_str() {
            "ACTION" => {
                self.action = Some(AlarmAction::parse(raw.trim()).ok_or_else(|| {
                    ParseError::new(ParseErrorKind::InvalidValue, line).with_context(raw)
                })?);
            }
            "TRIGGER" => self.trigger = Some(parse_trigger(cl, line)?),
            "DESCRIPTION" => self.description = Some(unescape_text(raw)),
            "SUMMARY" => self.summary = Some(unescape_text(raw)),
            "REPEAT" => self.repeat = Some(parse_integer(raw, line)?),
            "DURATION" => self.duration = Some(parse_duration(raw, line)?),
            name => tracing::trace!(line, name, "Ignoring alarm property"),
        }

        Ok(())
    }

    /// Builds the alarm. Missing fields take the defaults of [`Alarm`].
    #[must_use]
    pub fn finish(self) -> Alarm {
        let defaults = Alarm::default();
        let (trigger_type, trigger_value) = self
            .trigger
            .unwrap_or((defaults.trigger_type, defaults.trigger_value));

        Alarm {
            action: self.action.unwrap_or(defaults.action),
            trigger_type,
            trigger_value,
            description: self.description,
            summary: self.summary,
            repeat: self.repeat,
            duration: self.duration,
        }
    }
}

/// Decodes `TRIGGER` into its type and value.
///
/// A `VALUE=DATE-TIME` parameter, or a value that does not look like a
/// duration, is an absolute trigger in epoch milliseconds. Otherwise the
/// value is a duration whose sign picks before/after and whose `RELATED`
/// parameter picks the anchor.
fn parse_trigger(cl: &ContentLine, line: usize) -> ParseResult<(TriggerType, i64)> {
    let raw = cl.raw_value.trim();
    let absolute = cl
        .value_type()
        .is_some_and(|v| v.eq_ignore_ascii_case("DATE-TIME"))
        || !raw.starts_with(['P', 'p', '+', '-']);

    if absolute {
        let (value, _) = parse_datetime(raw, line)?;
        return Ok((TriggerType::Absolute, value.and_utc().timestamp_millis()));
    }

    let minutes = parse_duration(raw, line)?;
    let related_end = cl
        .get_param_value("RELATED")
        .is_some_and(|r| r.eq_ignore_ascii_case("END"));
    // The sign is read from the text so that "-PT0M" stays a before-trigger
    let negative = raw.starts_with('-');

    Ok((TriggerType::relative(negative, related_end), minutes.abs()))
}

/// `VTIMEZONE` under construction.
#[derive(Debug, Default)]
pub struct TimezoneBuilder {
    tzid: Option<String>,
    standard: Option<ObservanceBuilder>,
    daylight: Option<ObservanceBuilder>,
}

impl TimezoneBuilder {
    pub fn apply(&mut self, cl: &ContentLine, line: usize) {
        if cl.name == "TZID" {
            self.tzid = Some(cl.raw_value.trim().to_string());
        } else {
            tracing::trace!(line, name = %cl.name, "Ignoring timezone property");
        }
    }

    /// Attaches a closed observance. A later observance of the same kind
    /// replaces an earlier one.
    pub fn push_observance(&mut self, observance: ObservanceBuilder) {
        if observance.daylight {
            self.daylight = Some(observance);
        } else {
            self.standard = Some(observance);
        }
    }

    /// Builds the definition, or `None` without a `TZID`.
    ///
    /// The standard offset comes from the `STANDARD` observance, falling back
    /// to the offset a `DAYLIGHT` observance changes from, then to UTC.
    #[must_use]
    pub fn finish(self) -> Option<TimezoneDefinition> {
        let tzid = self.tzid.filter(|t| !t.is_empty())?;

        let standard_offset = self
            .standard
            .as_ref()
            .and_then(|s| s.offset_to.clone())
            .or_else(|| self.daylight.as_ref().and_then(|d| d.offset_from.clone()))
            .unwrap_or_else(|| UTC_OFFSET.to_string());

        Some(TimezoneDefinition {
            tzid,
            standard_offset,
            daylight_offset: self.daylight.as_ref().and_then(|d| d.offset_to.clone()),
            standard_name: self.standard.and_then(|s| s.name),
            daylight_name: self.daylight.and_then(|d| d.name),
        })
    }
}

/// `STANDARD` or `DAYLIGHT` sub-component under construction.
#[derive(Debug)]
pub struct ObservanceBuilder {
    daylight: bool,
    offset_to: Option<String>,
    offset_from: Option<String>,
    name: Option<String>,
}

impl ObservanceBuilder {
    #[must_use]
    pub const fn new(daylight: bool) -> Self {
        Self {
            daylight,
            offset_to: None,
            offset_from: None,
            name: None,
        }
    }

    /// ## Errors
    /// Returns an error if an offset is not `±HHMM[SS]`.
    pub fn apply(&mut self, cl: &ContentLine, line: usize) -> ParseResult<()> {
        match cl.name.as_str() {
            "TZOFFSETTO" => self.offset_to = Some(parse_utc_offset(&cl.raw_value, line)?),
            "TZOFFSETFROM" => self.offset_from = Some(parse_utc_offset(&cl.raw_value, line)?),
            "TZNAME" => self.name = Some(unescape_text(&cl.raw_value)),
            name => tracing::trace!(line, name, "Ignoring observance property"),
        }
        Ok(())
    }
}
