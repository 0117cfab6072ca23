//! Shared test fixtures.

use chrono::{NaiveDate, NaiveDateTime};

use crate::model::{
    Alarm, AlarmAction, AppleExtensions, Attendee, AttendeeRole, BusyStatus, CalendarEvent,
    Classification, EventStatus, Frequency, GeoLocation, GoogleExtensions, Location,
    MicrosoftExtensions, Organizer, ParticipationStatus, RecurrenceRule, StructuredLocation,
    Transparency, TriggerType, VendorProperty, Weekday, WeekdayNum,
};

pub fn dt(y: i32, mo: u32, d: u32, h: u32, mi: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(y, mo, d)
        .and_then(|date| date.and_hms_opt(h, mi, 0))
        .expect("valid datetime")
}

/// Minimal calendar with one timed UTC event.
pub const SIMPLE_EVENT: &str = "BEGIN:VCALENDAR\r\n\
VERSION:2.0\r\n\
BEGIN:VEVENT\r\n\
UID:abc@x\r\n\
DTSTART:20250101T100000Z\r\n\
DTEND:20250101T110000Z\r\n\
SUMMARY:Test\r\n\
END:VEVENT\r\n\
END:VCALENDAR\r\n";

/// Outlook-style export: zoned times, a VTIMEZONE, folded description and
/// Microsoft properties.
pub const OUTLOOK_EXPORT: &str = "BEGIN:VCALENDAR\r\n\
PRODID:-//Microsoft Corporation//Outlook 16.0 MIMEDIR//EN\r\n\
VERSION:2.0\r\n\
METHOD:REQUEST\r\n\
X-MS-OLK-FORCEINSPECTOROPEN:TRUE\r\n\
BEGIN:VTIMEZONE\r\n\
TZID:W. Europe Standard Time\r\n\
BEGIN:STANDARD\r\n\
DTSTART:16011028T030000\r\n\
RRULE:FREQ=YEARLY;BYDAY=-1SU;BYMONTH=10\r\n\
TZOFFSETFROM:+0200\r\n\
TZOFFSETTO:+0100\r\n\
END:STANDARD\r\n\
BEGIN:DAYLIGHT\r\n\
DTSTART:16010325T020000\r\n\
RRULE:FREQ=YEARLY;BYDAY=-1SU;BYMONTH=3\r\n\
TZOFFSETFROM:+0100\r\n\
TZOFFSETTO:+0200\r\n\
END:DAYLIGHT\r\n\
END:VTIMEZONE\r\n\
BEGIN:VEVENT\r\n\
ORGANIZER;CN=\"Meier, Anna\":mailto:anna.meier@example.com\r\n\
ATTENDEE;ROLE=REQ-PARTICIPANT;PARTSTAT=NEEDS-ACTION;RSVP=TRUE;CN=Tom:mailto:\r\n tom@example.com\r\n\
DESCRIPTION:Quarterly planning. Agenda:\\n1. Budget\\n2. Hiring\\, onboarding\r\n  and tooling\r\n\
UID:040000008200E00074C5B7101A82E008000000001@example.com\r\n\
SUMMARY;LANGUAGE=de-DE:Q3 Planung\r\n\
DTSTART;TZID=W. Europe Standard Time:20250710T140000\r\n\
DTEND;TZID=W. Europe Standard Time:20250710T153000\r\n\
CLASS:PUBLIC\r\n\
PRIORITY:5\r\n\
DTSTAMP:20250701T081500Z\r\n\
TRANSP:OPAQUE\r\n\
STATUS:CONFIRMED\r\n\
SEQUENCE:2\r\n\
LOCATION;LANGUAGE=de-DE:Raum 4.12\r\n\
X-MICROSOFT-CDO-BUSYSTATUS:BUSY\r\n\
X-MICROSOFT-CDO-INTENDEDSTATUS:BUSY\r\n\
X-MICROSOFT-CDO-ALLDAYEVENT:FALSE\r\n\
X-MICROSOFT-CDO-IMPORTANCE:1\r\n\
X-MICROSOFT-DISALLOW-COUNTER:FALSE\r\n\
X-MICROSOFT-CDO-INSTTYPE:0\r\n\
BEGIN:VALARM\r\n\
TRIGGER:-PT15M\r\n\
ACTION:DISPLAY\r\n\
DESCRIPTION:Reminder\r\n\
END:VALARM\r\n\
END:VEVENT\r\n\
END:VCALENDAR\r\n";

/// Apple Calendar export with bare LF line endings.
pub const APPLE_EXPORT: &str = "BEGIN:VCALENDAR\n\
VERSION:2.0\n\
PRODID:-//Apple Inc.//macOS 14.5//EN\n\
CALSCALE:GREGORIAN\n\
X-WR-CALNAME:Home\n\
BEGIN:VEVENT\n\
UID:5B1F0C7E-2A7D-4F8E-9C41-0E6F8D3A7B21\n\
DTSTART;VALUE=DATE:20250615\n\
DTEND;VALUE=DATE:20250616\n\
SUMMARY:Birthday\n\
CREATED:20250101T120000Z\n\
LAST-MODIFIED:20250102T090000Z\n\
X-APPLE-TRAVEL-ADVISORY-BEHAVIOR:AUTOMATIC\n\
X-APPLE-STRUCTURED-LOCATION;VALUE=URI;X-ADDRESS=\"1 Infinite Loop, Cupertino\";X-APPLE-RADIUS=141.17;X-TITLE=Home:geo:37.331741,-122.030333\n\
BEGIN:VALARM\n\
ACTION:AUDIO\n\
TRIGGER;VALUE=DATE-TIME:20250614T170000Z\n\
END:VALARM\n\
END:VEVENT\n\
END:VCALENDAR\n";

/// Google export with a recurrence rule and a Meet link.
pub const GOOGLE_EXPORT: &str = "BEGIN:VCALENDAR\r\n\
PRODID:-//Google Inc//Google Calendar 70.9054//EN\r\n\
VERSION:2.0\r\n\
CALSCALE:GREGORIAN\r\n\
METHOD:PUBLISH\r\n\
X-WR-CALNAME:Work\r\n\
X-WR-TIMEZONE:America/Los_Angeles\r\n\
BEGIN:VEVENT\r\n\
DTSTART;TZID=America/Los_Angeles:20250106T093000\r\n\
DTEND;TZID=America/Los_Angeles:20250106T094500\r\n\
RRULE:FREQ=WEEKLY;WKST=MO;BYDAY=MO,WE,FR\r\n\
DTSTAMP:20250105T000000Z\r\n\
UID:7kukuqrfedlm2f9t0vr42q2nsk@google.com\r\n\
X-GOOGLE-CONFERENCE:https://meet.google.com/abc-defg-hij\r\n\
CATEGORIES:Engineering,Daily\r\n\
SUMMARY:Standup\r\n\
END:VEVENT\r\n\
END:VCALENDAR\r\n";

/// An event whose DTSTART cannot be decoded next to a valid one.
pub const MALFORMED_START: &str = "BEGIN:VCALENDAR\r\n\
VERSION:2.0\r\n\
BEGIN:VEVENT\r\n\
UID:good@x\r\n\
DTSTART:20250101T100000Z\r\n\
SUMMARY:Good\r\n\
END:VEVENT\r\n\
BEGIN:VEVENT\r\n\
UID:bad@x\r\n\
DTSTART:2025-01-01 10:00\r\n\
SUMMARY:Bad\r\n\
END:VEVENT\r\n\
END:VCALENDAR\r\n";

/// An event that uses every field the model has.
pub fn rich_event() -> CalendarEvent {
    let mut event = CalendarEvent::new(
        "rich-1@icsforge",
        "Design review; phase 2, final",
        dt(2025, 3, 12, 15, 0),
        dt(2025, 3, 12, 16, 30),
    );

    event.description = Some("Line one\nLine two with \\ backslash, comma; semicolon".into());
    event.url = Some("https://example.com/reviews/42?tab=notes".into());
    event.timezone = Some("Europe/Paris".into());
    event.location = Some(Location {
        text: "Salle Rivoli, 3e étage".into(),
        geo: Some(GeoLocation {
            latitude: 48.859_375,
            longitude: 2.343_75,
        }),
    });
    event.status = Some(EventStatus::Tentative);
    event.classification = Some(Classification::Confidential);
    event.transparency = Some(Transparency::Transparent);
    event.categories = vec!["Design".into(), "Review, external".into(), "Design".into()];
    event.priority = Some(1);
    event.sequence = Some(3);
    event.created = Some(dt(2025, 2, 1, 8, 0).and_utc());
    event.last_modified = Some(dt(2025, 2, 3, 9, 45).and_utc());

    event.organizer = Some(Organizer {
        name: Some("Dupont, Claire".into()),
        email: "claire@example.com".into(),
        directory: Some("ldap://example.com:6666/o=ABC".into()),
    });
    event.attendees = vec![
        Attendee {
            name: Some("Ravi".into()),
            email: "ravi@example.com".into(),
            role: AttendeeRole::Chair,
            participation_status: ParticipationStatus::Accepted,
            rsvp: Some(false),
            directory: None,
        },
        Attendee {
            role: AttendeeRole::OptParticipant,
            participation_status: ParticipationStatus::Tentative,
            rsvp: Some(true),
            ..Attendee::new("mei@example.com")
        },
    ];

    event.recurrence_rule = Some(RecurrenceRule {
        interval: Some(1),
        until: Some(dt(2025, 12, 31, 23, 0)),
        by_day: vec![WeekdayNum::nth(-1, Weekday::Wednesday).expect("valid ordinal")],
        by_month: vec![3, 6, 9, 12],
        week_start: Some(Weekday::Monday),
        ..RecurrenceRule::new(Frequency::Monthly)
    });

    event.alarms = vec![
        Alarm::display_before_start(0),
        Alarm {
            action: AlarmAction::Email,
            trigger_type: TriggerType::BeforeEnd,
            trigger_value: 1500,
            description: Some("Wrap up".into()),
            summary: Some("Ending soon".into()),
            repeat: Some(1),
            duration: Some(10),
        },
        Alarm {
            action: AlarmAction::Audio,
            trigger_type: TriggerType::Absolute,
            trigger_value: dt(2025, 3, 12, 13, 0).and_utc().timestamp_millis(),
            ..Alarm::default()
        },
    ];

    event.apple_extensions = Some(AppleExtensions {
        travel_advisory_behavior: Some("AUTOMATIC".into()),
        travel_duration: Some(25),
        structured_location: Some(StructuredLocation {
            title: "Louvre".into(),
            address: Some("Rue de Rivoli, Paris".into()),
            radius: Some(70.5),
            geo: GeoLocation {
                latitude: 48.859_375,
                longitude: 2.343_75,
            },
        }),
        other: vec![VendorProperty {
            name: "X-APPLE-TRAVEL-START".into(),
            params: vec![
                ("ROUTING".into(), vec!["CAR".into()]),
                ("VALUE".into(), vec!["URI".into()]),
                ("X-ADDRESS".into(), vec!["Rue de Rivoli, Paris".into()]),
            ],
            value: String::new(),
        }],
    });
    event.microsoft_extensions = Some(MicrosoftExtensions {
        busy_status: Some(BusyStatus::Tentative),
        intended_status: Some(BusyStatus::WorkingElsewhere),
        importance: Some(2),
        all_day_event: Some(false),
        disallow_counter: Some(true),
        other: vec![VendorProperty::new("X-MICROSOFT-CDO-INSTTYPE", "1")],
    });
    event.google_extensions = Some(GoogleExtensions {
        conference_url: Some("https://meet.google.com/xyz-abcd-efg".into()),
        other: Vec::new(),
    });

    event
}
