use icsforge_core::constants::DEFAULT_PROD_ID;
use serde::{Deserialize, Serialize};

use super::CalendarEvent;

/// iCalendar version written and expected by the codec.
pub const ICAL_VERSION: &str = "2.0";

/// The only calendar scale in use.
pub const GREGORIAN: &str = "GREGORIAN";

/// A `VCALENDAR` document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Calendar {
    /// Product identifier of the producing application (`PRODID`).
    pub prod_id: String,
    pub version: String,
    pub calscale: String,
    /// iTIP method (`PUBLISH`, `REQUEST`, ...).
    pub method: Option<String>,
    /// Display name (`X-WR-CALNAME`).
    pub name: Option<String>,
    /// Display description (`X-WR-CALDESC`).
    pub description: Option<String>,
    /// The calendar's own `VTIMEZONE`, if it carried one.
    pub timezone: Option<TimezoneDefinition>,
    /// Events in insertion order.
    pub events: Vec<CalendarEvent>,
}

impl Default for Calendar {
    fn default() -> Self {
        Self {
            prod_id: DEFAULT_PROD_ID.to_string(),
            version: ICAL_VERSION.to_string(),
            calscale: GREGORIAN.to_string(),
            method: None,
            name: None,
            description: None,
            timezone: None,
            events: Vec::new(),
        }
    }
}

impl Calendar {
    /// Wraps a single event in an otherwise default calendar.
    #[must_use]
    pub fn with_event(event: CalendarEvent) -> Self {
        Self {
            events: vec![event],
            ..Self::default()
        }
    }
}

/// A simplified `VTIMEZONE`: one standard and at most one daylight offset.
///
/// Offsets use the iCalendar `±HHMM` form, e.g. `-0500`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimezoneDefinition {
    pub tzid: String,
    pub standard_offset: String,
    pub daylight_offset: Option<String>,
    pub standard_name: Option<String>,
    pub daylight_name: Option<String>,
}

impl TimezoneDefinition {
    /// Creates a zone without daylight saving time.
    #[must_use]
    pub fn fixed(tzid: impl Into<String>, offset: impl Into<String>) -> Self {
        Self {
            tzid: tzid.into(),
            standard_offset: offset.into(),
            daylight_offset: None,
            standard_name: None,
            daylight_name: None,
        }
    }

    /// Returns whether the zone observes daylight saving time.
    #[must_use]
    pub const fn has_daylight(&self) -> bool {
        self.daylight_offset.is_some()
    }
}
