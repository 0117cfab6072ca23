//! Component parser for iCalendar (RFC 5545 §3.4-3.6).
//!
//! Drives the frame stack from `BEGIN`/`END` lines and routes every other
//! property to the innermost open component.

use std::path::Path;

use super::frames::Frame;
use super::lexer::{parse_content_line, split_lines};
use super::values::unescape_text;
use crate::error::{RfcError, RfcResult};
use crate::ical::core::ContentLine;
use crate::model::Calendar;

/// Parses ICS text into a calendar.
///
/// Parsing is best effort and never fails: malformed lines and undecodable
/// properties are skipped, events without `UID` or `DTSTART` are dropped, and
/// unsupported components are ignored together with their children. Input
/// without any `VCALENDAR` yields a default calendar.
#[must_use]
#[tracing::instrument(skip(input), fields(input_len = input.len()))]
pub fn parse(input: &str) -> Calendar {
    let mut parser = Parser::default();

    for (line_num, line) in split_lines(input) {
        match parse_content_line(&line, line_num) {
            Ok(cl) => parser.feed(&cl, line_num),
            Err(e) => tracing::debug!(error = %e, "Skipping malformed content line"),
        }
    }

    parser.finish()
}

/// Reads a UTF-8 ICS file and parses it.
///
/// ## Errors
/// Returns [`RfcError::Io`] if the file cannot be read or is not UTF-8.
#[tracing::instrument(skip_all, fields(path = %path.as_ref().display()))]
pub async fn parse_file(path: impl AsRef<Path>) -> RfcResult<Calendar> {
    let path = path.as_ref();
    let input = tokio::fs::read_to_string(path)
        .await
        .map_err(|source| RfcError::Io {
            path: path.display().to_string(),
            source,
        })?;

    tracing::debug!(bytes = input.len(), "Read calendar file");

    Ok(parse(&input))
}

#[derive(Debug, Default)]
struct Parser {
    calendar: Calendar,
    stack: Vec<Frame>,
}

impl Parser {
    fn feed(&mut self, cl: &ContentLine, line: usize) {
        match cl.name.as_str() {
            "BEGIN" => {
                let name = cl.raw_value.trim().to_ascii_uppercase();
                let frame = Frame::begin(&name, self.stack.last());
                tracing::trace!(line, component = %name, "BEGIN");
                self.stack.push(frame);
            }
            "END" => self.end(cl.raw_value.trim(), line),
            _ => self.property(cl, line),
        }
    }

    /// Closes the innermost frame named `name`, closing any frames opened
    /// after it first. An `END` without a matching open frame is ignored.
    fn end(&mut self, name: &str, line: usize) {
        let Some(pos) = self
            .stack
            .iter()
            .rposition(|f| f.name().eq_ignore_ascii_case(name))
        else {
            tracing::debug!(line, component = name, "Ignoring END without matching BEGIN");
            return;
        };

        while self.stack.len() > pos {
            if let Some(frame) = self.stack.pop() {
                if self.stack.len() > pos {
                    tracing::debug!(line, component = frame.name(), "Closing unterminated component");
                }
                self.close(frame);
            }
        }
    }

    /// Hands a finished frame to its parent.
    fn close(&mut self, frame: Frame) {
        match frame {
            Frame::Event(builder) => {
                let uid = builder.uid().map(str::to_string);
                match builder.finish() {
                    Some(event) => self.calendar.events.push(event),
                    None => tracing::debug!(?uid, "Dropping event without UID or DTSTART"),
                }
            }
            Frame::Alarm(builder) => {
                if let Some(Frame::Event(event)) = self.stack.last_mut() {
                    event.push_alarm(builder.finish());
                }
            }
            Frame::Observance(builder) => {
                if let Some(Frame::Timezone(tz)) = self.stack.last_mut() {
                    tz.push_observance(builder);
                }
            }
            Frame::Timezone(builder) => match builder.finish() {
                Some(tz) => self.calendar.timezone = Some(tz),
                None => tracing::debug!("Dropping VTIMEZONE without TZID"),
            },
            Frame::Calendar | Frame::Unknown(_) => {}
        }
    }

    fn property(&mut self, cl: &ContentLine, line: usize) {
        let result = match self.stack.last_mut() {
            Some(Frame::Calendar) => {
                apply_calendar_property(&mut self.calendar, cl, line);
                Ok(())
            }
            Some(Frame::Event(builder)) => builder.apply(cl, line),
            Some(Frame::Alarm(builder)) => builder.apply(cl, line),
            Some(Frame::Timezone(builder)) => {
                builder.apply(cl, line);
                Ok(())
            }
            Some(Frame::Observance(builder)) => builder.apply(cl, line),
            Some(Frame::Unknown(_)) | None => Ok(()),
        };

        if let Err(e) = result {
            tracing::debug!(error = %e, property = %cl.name, "Skipping undecodable property");
        }
    }

    fn finish(mut self) -> Calendar {
        if !self.stack.is_empty() {
            tracing::warn!(
                open = self.stack.len(),
                "Input ended inside an open component; closing it"
            );
        }
        while let Some(frame) = self.stack.pop() {
            self.close(frame);
        }
        tracing::debug!(events = self.calendar.events.len(), "Parsed calendar");
        self.calendar
    }
}

fn apply_calendar_property(calendar: &mut Calendar, cl: &ContentLine, line: usize) {
    let value = cl.raw_value.trim();
    match cl.name.as_str() {
        "PRODID" => calendar.prod_id = value.to_string(),
        "VERSION" => calendar.version = value.to_string(),
        "CALSCALE" => calendar.calscale = value.to_ascii_uppercase(),
        "METHOD" => calendar.method = Some(value.to_ascii_uppercase()),
        "X-WR-CALNAME" => calendar.name = Some(unescape_text(value)),
        "X-WR-CALDESC" => calendar.description = Some(unescape_text(value)),
        name => tracing::trace!(line, name, "Ignoring calendar property"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{AlarmAction, TriggerType};

    #[test_log::test]
    fn parse_minimal_calendar() {
        let input = "BEGIN:VCALENDAR\r\n\
VERSION:2.0\r\n\
PRODID:-//Test//Test//EN\r\n\
BEGIN:VEVENT\r\n\
UID:test-123@example.com\r\n\
DTSTART:20260123T120000Z\r\n\
SUMMARY:Test Event\r\n\
END:VEVENT\r\n\
END:VCALENDAR\r\n";

        let calendar = parse(input);
        assert_eq!(calendar.prod_id, "-//Test//Test//EN");
        assert_eq!(calendar.events.len(), 1);
        assert_eq!(calendar.events[0].summary, "Test Event");
    }

    #[test_log::test]
    fn parse_calendar_properties() {
        let input = "BEGIN:VCALENDAR\n\
VERSION:2.0\n\
METHOD:publish\n\
X-WR-CALNAME:Team\\, shared\n\
X-WR-CALDESC:All hands\n\
END:VCALENDAR\n";

        let calendar = parse(input);
        assert_eq!(calendar.method.as_deref(), Some("PUBLISH"));
        assert_eq!(calendar.name.as_deref(), Some("Team, shared"));
        assert_eq!(calendar.description.as_deref(), Some("All hands"));
    }

    #[test_log::test]
    fn parse_event_with_alarm() {
        let input = "BEGIN:VCALENDAR\r\n\
BEGIN:VEVENT\r\n\
UID:alarm@x\r\n\
DTSTART:20260123T120000Z\r\n\
BEGIN:VALARM\r\n\
ACTION:DISPLAY\r\n\
TRIGGER:-PT15M\r\n\
END:VALARM\r\n\
END:VEVENT\r\n\
END:VCALENDAR\r\n";

        let calendar = parse(input);
        let alarms = &calendar.events[0].alarms;
        assert_eq!(alarms.len(), 1);
        assert_eq!(alarms[0].action, AlarmAction::Display);
        assert_eq!(alarms[0].trigger_type, TriggerType::BeforeStart);
        assert_eq!(alarms[0].trigger_value, 15);
    }

    #[test_log::test]
    fn alarm_properties_do_not_leak_into_event() {
        let input = "BEGIN:VCALENDAR\r\n\
BEGIN:VEVENT\r\n\
UID:leak@x\r\n\
DTSTART:20260123T120000Z\r\n\
SUMMARY:Event title\r\n\
BEGIN:VALARM\r\n\
DESCRIPTION:Alarm text\r\n\
SUMMARY:Alarm title\r\n\
END:VALARM\r\n\
END:VEVENT\r\n\
END:VCALENDAR\r\n";

        let event = &parse(input).events[0];
        assert_eq!(event.summary, "Event title");
        assert_eq!(event.description, None);
        assert_eq!(event.alarms[0].summary.as_deref(), Some("Alarm title"));
    }

    #[test_log::test]
    fn unknown_components_are_skipped_with_children() {
        let input = "BEGIN:VCALENDAR\r\n\
BEGIN:VTODO\r\n\
UID:todo@x\r\n\
DTSTART:20260123T120000Z\r\n\
BEGIN:VALARM\r\n\
TRIGGER:-PT5M\r\n\
END:VALARM\r\n\
END:VTODO\r\n\
BEGIN:VEVENT\r\n\
UID:event@x\r\n\
DTSTART:20260123T120000Z\r\n\
END:VEVENT\r\n\
END:VCALENDAR\r\n";

        let calendar = parse(input);
        assert_eq!(calendar.events.len(), 1);
        assert_eq!(calendar.events[0].uid, "event@x");
        assert!(calendar.events[0].alarms.is_empty());
    }

    #[test_log::test]
    fn mismatched_end_unwinds_to_open_frame() {
        let input = "BEGIN:VCALENDAR\r\n\
BEGIN:VEVENT\r\n\
UID:unwind@x\r\n\
DTSTART:20260123T120000Z\r\n\
BEGIN:VALARM\r\n\
TRIGGER:-PT5M\r\n\
END:VEVENT\r\n\
END:VJOURNAL\r\n\
END:VCALENDAR\r\n";

        let calendar = parse(input);
        assert_eq!(calendar.events.len(), 1);
        assert_eq!(calendar.events[0].alarms.len(), 1);
    }

    #[test_log::test]
    fn later_timezone_replaces_earlier() {
        let input = "BEGIN:VCALENDAR\r\n\
BEGIN:VTIMEZONE\r\n\
TZID:America/New_York\r\n\
BEGIN:STANDARD\r\n\
TZOFFSETTO:-0500\r\n\
END:STANDARD\r\n\
END:VTIMEZONE\r\n\
BEGIN:VTIMEZONE\r\n\
TZID:Asia/Tokyo\r\n\
BEGIN:STANDARD\r\n\
TZOFFSETTO:+0900\r\n\
TZNAME:JST\r\n\
END:STANDARD\r\n\
END:VTIMEZONE\r\n\
END:VCALENDAR\r\n";

        let tz = parse(input).timezone.expect("timezone");
        assert_eq!(tz.tzid, "Asia/Tokyo");
        assert_eq!(tz.standard_offset, "+0900");
        assert_eq!(tz.standard_name.as_deref(), Some("JST"));
    }

    #[test_log::test]
    fn unterminated_input_keeps_complete_events() {
        let input = "BEGIN:VCALENDAR\r\n\
BEGIN:VEVENT\r\n\
UID:open@x\r\n\
DTSTART:20260123T120000Z\r\n";

        let calendar = parse(input);
        assert_eq!(calendar.events.len(), 1);
    }

    #[test_log::test]
    fn empty_and_garbage_input() {
        assert_eq!(parse(""), Calendar::default());
        assert!(parse("not an ics file\r\nat all").events.is_empty());
    }

    #[test_log::test(tokio::test)]
    async fn parse_file_reads_and_parses() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("meeting.ics");
        std::fs::write(
            &path,
            "BEGIN:VCALENDAR\r\nBEGIN:VEVENT\r\nUID:file@x\r\nDTSTART:20260123T120000Z\r\nEND:VEVENT\r\nEND:VCALENDAR\r\n",
        )
        .expect("write fixture");

        let calendar = parse_file(&path).await.expect("readable file");
        assert_eq!(calendar.events[0].uid, "file@x");
    }

    #[test_log::test(tokio::test)]
    async fn parse_file_skips_byte_order_mark() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("outlook.ics");
        let mut bytes = vec![0xEF, 0xBB, 0xBF];
        bytes.extend_from_slice(
            b"BEGIN:VCALENDAR\r\nMETHOD:REQUEST\r\nX-WR-CALNAME:Work\r\nBEGIN:VEVENT\r\n\
UID:bom@x\r\nDTSTART:20260123T120000Z\r\nEND:VEVENT\r\nEND:VCALENDAR\r\n",
        );
        std::fs::write(&path, bytes).expect("write fixture");

        let calendar = parse_file(&path).await.expect("readable file");
        assert_eq!(calendar.method.as_deref(), Some("REQUEST"));
        assert_eq!(calendar.name.as_deref(), Some("Work"));
        assert_eq!(calendar.events.len(), 1);
    }

    #[test_log::test(tokio::test)]
    async fn parse_file_missing_is_io_error() {
        let dir = tempfile::tempdir().expect("temp dir");
        let err = parse_file(dir.path().join("missing.ics"))
            .await
            .expect_err("missing file");
        assert!(matches!(err, RfcError::Io { .. }));
    }
}
