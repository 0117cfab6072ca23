//! `parse(generate(c))` reproduces what was generated.

use super::fixtures::{APPLE_EXPORT, GOOGLE_EXPORT, OUTLOOK_EXPORT, dt, rich_event};
use crate::ical::{GeneratorOptions, generate, parse};
use crate::model::{Calendar, CalendarEvent, Frequency, RecurrenceRule, Weekday, WeekdayNum};

fn round_trip(calendar: &Calendar) -> Calendar {
    let ics = generate(calendar, &GeneratorOptions::default());
    parse(&ics)
}

#[test_log::test]
fn rich_event_survives_unchanged() {
    let calendar = Calendar::with_event(rich_event());
    let parsed = round_trip(&calendar);
    assert_eq!(parsed.events, calendar.events);
}

#[test_log::test]
fn calendar_properties_survive() {
    let calendar = Calendar {
        method: Some("PUBLISH".to_string()),
        name: Some("Team; shared".to_string()),
        description: Some("Everything, everywhere".to_string()),
        ..Calendar::with_event(rich_event())
    };
    let parsed = round_trip(&calendar);
    assert_eq!(parsed.prod_id, calendar.prod_id);
    assert_eq!(parsed.method, calendar.method);
    assert_eq!(parsed.name, calendar.name);
    assert_eq!(parsed.description, calendar.description);
}

#[test_log::test]
fn zone_definition_comes_back_from_vtimezone() {
    let parsed = round_trip(&Calendar::with_event(rich_event()));
    let tz = parsed.timezone.expect("VTIMEZONE emitted");
    assert_eq!(tz.tzid, "Europe/Paris");
    assert_eq!(tz.standard_offset, "+0100");
    assert_eq!(tz.daylight_offset.as_deref(), Some("+0200"));
    assert_eq!(tz.daylight_name.as_deref(), Some("CEST"));
}

#[test_log::test]
fn event_order_is_preserved() {
    let mut calendar = Calendar::default();
    for (i, hour) in [9, 7, 12].into_iter().enumerate() {
        calendar.events.push(CalendarEvent::new(
            format!("e{i}@x"),
            format!("Event {i}"),
            dt(2025, 5, 1, hour, 0),
            dt(2025, 5, 1, hour + 1, 0),
        ));
    }
    let uids: Vec<String> = round_trip(&calendar)
        .events
        .into_iter()
        .map(|e| e.uid)
        .collect();
    assert_eq!(uids, vec!["e0@x", "e1@x", "e2@x"]);
}

#[test_log::test]
fn all_day_event_survives() {
    let mut event = CalendarEvent::new("bday@x", "Birthday", dt(2025, 6, 15, 0, 0), dt(2025, 6, 16, 0, 0));
    event.all_day = true;
    let parsed = round_trip(&Calendar::with_event(event.clone()));
    assert_eq!(parsed.events, vec![event]);
}

#[test_log::test]
fn all_day_yearly_rule_keeps_date_until() {
    let mut event = CalendarEvent::new("bday@x", "Birthday", dt(2025, 6, 15, 0, 0), dt(2025, 6, 16, 0, 0));
    event.all_day = true;
    event.recurrence_rule = Some(RecurrenceRule {
        until: Some(dt(2030, 6, 15, 0, 0)),
        ..RecurrenceRule::new(Frequency::Yearly)
    });

    let ics = generate(&Calendar::with_event(event.clone()), &GeneratorOptions::default());
    assert!(ics.contains("DTSTART;VALUE=DATE:20250615\r\n"));
    assert!(ics.contains("RRULE:FREQ=YEARLY;UNTIL=20300615\r\n"));
    assert_eq!(parse(&ics).events, vec![event]);
}

#[test_log::test]
fn long_unicode_text_survives_folding() {
    let mut event = CalendarEvent::new("long@x", "Résumé", dt(2025, 1, 1, 9, 0), dt(2025, 1, 1, 10, 0));
    event.description = Some("Ünïcödé téxt, with; specials\\ and 日本語 🎉 ".repeat(12));
    let parsed = round_trip(&Calendar::with_event(event.clone()));
    assert_eq!(parsed.events[0].description, event.description);
}

#[test_log::test]
fn lone_carriage_returns_survive() {
    let mut event = CalendarEvent::new("cr@x", "Notes", dt(2025, 1, 1, 9, 0), dt(2025, 1, 1, 10, 0));
    event.description = Some("first\rsecond\r".to_string());
    let parsed = round_trip(&Calendar::with_event(event.clone()));
    assert_eq!(parsed.events[0].description, event.description);
}

#[test_log::test]
fn recurrence_rule_variants_survive() {
    let rules = [
        RecurrenceRule {
            count: Some(10),
            ..RecurrenceRule::new(Frequency::Daily)
        },
        RecurrenceRule {
            by_day: vec![
                WeekdayNum::every(Weekday::Tuesday),
                WeekdayNum::every(Weekday::Thursday),
            ],
            week_start: Some(Weekday::Sunday),
            ..RecurrenceRule::new(Frequency::Weekly)
        },
        RecurrenceRule {
            by_month_day: vec![1, 15, -1],
            ..RecurrenceRule::new(Frequency::Monthly)
        },
        RecurrenceRule {
            by_day: vec![WeekdayNum::every(Weekday::Monday)],
            by_set_pos: vec![1],
            by_month: vec![9],
            ..RecurrenceRule::new(Frequency::Yearly)
        },
    ];

    for rule in rules {
        let mut event = CalendarEvent::new("r@x", "Repeat", dt(2025, 1, 1, 9, 0), dt(2025, 1, 1, 10, 0));
        event.recurrence_rule = Some(rule.clone());
        let parsed = round_trip(&Calendar::with_event(event));
        assert_eq!(parsed.events[0].recurrence_rule, Some(rule));
    }
}

/// Files from other producers come back unchanged after one normalization
/// pass.
#[test_log::test]
fn vendor_exports_are_stable_after_normalization() {
    for input in [OUTLOOK_EXPORT, APPLE_EXPORT, GOOGLE_EXPORT] {
        let first = parse(input);
        assert_eq!(first.events.len(), 1);
        let second = round_trip(&first);
        assert_eq!(second.events, first.events);
    }
}
