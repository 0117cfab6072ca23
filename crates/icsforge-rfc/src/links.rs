//! "Add to calendar" deep links for web calendar services.
//!
//! Each builder encodes the title, start/end, description and location of an
//! event as query parameters of the service's compose endpoint. Timed values
//! are converted to UTC through the static timezone table.

use chrono::NaiveDateTime;
use urlencoding::encode;

use crate::ical::build::{format_date, format_utc_datetime};
use crate::ical::timezone::to_utc;
use crate::model::CalendarEvent;

const GOOGLE_BASE: &str = "https://calendar.google.com/calendar/render";
const OUTLOOK_BASE: &str = "https://outlook.live.com/calendar/0/deeplink/compose";
const OFFICE365_BASE: &str = "https://outlook.office.com/calendar/0/deeplink/compose";
const YAHOO_BASE: &str = "https://calendar.yahoo.com/";

/// Start and end in UTC, or the dates unchanged for all-day events.
fn utc_range(event: &CalendarEvent) -> (NaiveDateTime, NaiveDateTime) {
    if event.all_day {
        return (event.start_date, event.end_date);
    }
    let tz = event.timezone.as_deref();
    (to_utc(event.start_date, tz), to_utc(event.end_date, tz))
}

/// `yyyyMMdd` for all-day events, `yyyyMMddTHHmmssZ` otherwise.
fn compact(event: &CalendarEvent, value: NaiveDateTime) -> String {
    if event.all_day {
        format_date(value)
    } else {
        format_utc_datetime(value)
    }
}

/// ISO 8601: `yyyy-MM-dd` for all-day events, `yyyy-MM-ddTHH:mm:ssZ`
/// otherwise.
fn iso(event: &CalendarEvent, value: NaiveDateTime) -> String {
    if event.all_day {
        value.format("%Y-%m-%d").to_string()
    } else {
        value.format("%Y-%m-%dT%H:%M:%SZ").to_string()
    }
}

fn description(event: &CalendarEvent) -> &str {
    event.description.as_deref().unwrap_or_default()
}

fn location(event: &CalendarEvent) -> &str {
    event.location_text().unwrap_or_default()
}

/// Google Calendar event template. Carries the recurrence rule, if any.
#[must_use]
pub fn google_calendar_url(event: &CalendarEvent) -> String {
    let (start, end) = utc_range(event);
    let mut url = format!(
        "{GOOGLE_BASE}?action=TEMPLATE&text={}&dates={}/{}&details={}&location={}",
        encode(&event.summary),
        compact(event, start),
        compact(event, end),
        encode(description(event)),
        encode(location(event)),
    );
    if let Some(rule) = &event.recurrence_rule {
        url.push_str("&recur=");
        url.push_str(&encode(&format!("RRULE:{}", rule.to_value(event.all_day))));
    }
    url
}

fn outlook_compose(base: &str, event: &CalendarEvent) -> String {
    let (start, end) = utc_range(event);
    format!(
        "{base}?path=/calendar/action/compose&rru=addevent&subject={}&startdt={}&enddt={}{}&body={}&location={}",
        encode(&event.summary),
        iso(event, start),
        iso(event, end),
        if event.all_day { "&allday=true" } else { "" },
        encode(description(event)),
        encode(location(event)),
    )
}

/// Outlook.com compose link.
#[must_use]
pub fn outlook_calendar_url(event: &CalendarEvent) -> String {
    outlook_compose(OUTLOOK_BASE, event)
}

/// Office 365 compose link.
#[must_use]
pub fn office365_calendar_url(event: &CalendarEvent) -> String {
    outlook_compose(OFFICE365_BASE, event)
}

/// Yahoo Calendar add-event link.
#[must_use]
pub fn yahoo_calendar_url(event: &CalendarEvent) -> String {
    let (start, end) = utc_range(event);
    format!(
        "{YAHOO_BASE}?v=60&title={}&st={}&et={}{}&desc={}&in_loc={}",
        encode(&event.summary),
        compact(event, start),
        compact(event, end),
        if event.all_day { "&dur=allday" } else { "" },
        encode(description(event)),
        encode(location(event)),
    )
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;
    use crate::model::{Frequency, Location, RecurrenceRule};

    fn dt(y: i32, mo: u32, d: u32, h: u32, mi: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, mo, d)
            .and_then(|date| date.and_hms_opt(h, mi, 0))
            .expect("valid datetime")
    }

    fn lunch() -> CalendarEvent {
        let mut event = CalendarEvent::new(
            "lunch@x",
            "Lunch & Learn",
            dt(2025, 1, 15, 12, 0),
            dt(2025, 1, 15, 13, 0),
        );
        event.description = Some("Bring questions".to_string());
        event.location = Some(Location::text("Room 4"));
        event
    }

    #[test]
    fn google_timed_utc() {
        assert_eq!(
            google_calendar_url(&lunch()),
            "https://calendar.google.com/calendar/render?action=TEMPLATE&text=Lunch%20%26%20Learn\
&dates=20250115T120000Z/20250115T130000Z&details=Bring%20questions&location=Room%204"
        );
    }

    #[test]
    fn google_converts_zoned_times_and_adds_recurrence() {
        let mut event = lunch();
        event.timezone = Some("America/New_York".to_string());
        event.recurrence_rule = Some(RecurrenceRule {
            interval: Some(2),
            ..RecurrenceRule::new(Frequency::Weekly)
        });

        let url = google_calendar_url(&event);
        assert!(url.contains("&dates=20250115T170000Z/20250115T180000Z&"));
        assert!(url.ends_with("&recur=RRULE%3AFREQ%3DWEEKLY%3BINTERVAL%3D2"));
    }

    #[test]
    fn google_all_day_dates() {
        let mut event = lunch();
        event.all_day = true;
        event.start_date = dt(2025, 6, 15, 0, 0);
        event.end_date = dt(2025, 6, 16, 0, 0);
        assert!(google_calendar_url(&event).contains("&dates=20250615/20250616&"));
    }

    #[test]
    fn google_all_day_recurrence_uses_date_until() {
        let mut event = lunch();
        event.all_day = true;
        event.recurrence_rule = Some(RecurrenceRule {
            until: Some(dt(2030, 1, 15, 0, 0)),
            ..RecurrenceRule::new(Frequency::Yearly)
        });
        assert!(
            google_calendar_url(&event).ends_with("&recur=RRULE%3AFREQ%3DYEARLY%3BUNTIL%3D20300115")
        );
    }

    #[test]
    fn google_empty_fields_still_present() {
        let event = CalendarEvent::new("x", "Solo", dt(2025, 1, 1, 9, 0), dt(2025, 1, 1, 10, 0));
        assert!(google_calendar_url(&event).ends_with("&details=&location="));
    }

    #[test]
    fn outlook_and_office365() {
        let outlook = outlook_calendar_url(&lunch());
        assert_eq!(
            outlook,
            "https://outlook.live.com/calendar/0/deeplink/compose?path=/calendar/action/compose\
&rru=addevent&subject=Lunch%20%26%20Learn&startdt=2025-01-15T12:00:00Z\
&enddt=2025-01-15T13:00:00Z&body=Bring%20questions&location=Room%204"
        );

        let mut all_day = lunch();
        all_day.all_day = true;
        let office = office365_calendar_url(&all_day);
        assert!(office.starts_with("https://outlook.office.com/calendar/0/deeplink/compose?"));
        assert!(office.contains("&startdt=2025-01-15&enddt=2025-01-15&allday=true&"));
    }

    #[test]
    fn yahoo() {
        assert_eq!(
            yahoo_calendar_url(&lunch()),
            "https://calendar.yahoo.com/?v=60&title=Lunch%20%26%20Learn&st=20250115T120000Z\
&et=20250115T130000Z&desc=Bring%20questions&in_loc=Room%204"
        );

        let mut all_day = lunch();
        all_day.all_day = true;
        assert!(yahoo_calendar_url(&all_day).contains("&st=20250115&et=20250115&dur=allday&"));
    }
}
