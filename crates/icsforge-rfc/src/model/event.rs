use std::fmt;

use chrono::{DateTime, NaiveDateTime, Utc};
use icsforge_core::constants::UID_DOMAIN;
use serde::{Deserialize, Serialize};

use super::{
    Alarm, AppleExtensions, Attendee, GoogleExtensions, MicrosoftExtensions, Organizer,
    RecurrenceRule,
};

/// Generates a fresh globally unique event identifier.
#[must_use]
pub fn generate_uid() -> String {
    format!("{}@{UID_DOMAIN}", uuid::Uuid::new_v4())
}

/// A `VEVENT`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarEvent {
    pub uid: String,
    pub summary: String,
    pub description: Option<String>,
    pub url: Option<String>,

    pub start_date: NaiveDateTime,
    pub end_date: NaiveDateTime,
    /// Dates are emitted as `VALUE=DATE` when set.
    pub all_day: bool,
    /// Zone the start/end wall-clock times are local to.
    pub timezone: Option<String>,

    pub location: Option<Location>,
    pub status: Option<EventStatus>,
    pub classification: Option<Classification>,
    pub transparency: Option<Transparency>,
    pub categories: Vec<String>,
    /// 1 (highest) to 9 (lowest).
    pub priority: Option<u8>,

    pub organizer: Option<Organizer>,
    pub attendees: Vec<Attendee>,
    pub recurrence_rule: Option<RecurrenceRule>,
    pub alarms: Vec<Alarm>,

    pub created: Option<DateTime<Utc>>,
    pub last_modified: Option<DateTime<Utc>>,
    /// Revision counter, bumped by the editor on every change.
    pub sequence: Option<u32>,

    pub apple_extensions: Option<AppleExtensions>,
    pub microsoft_extensions: Option<MicrosoftExtensions>,
    pub google_extensions: Option<GoogleExtensions>,
}

impl CalendarEvent {
    /// Creates an event with only the required fields set.
    #[must_use]
    pub fn new(
        uid: impl Into<String>,
        summary: impl Into<String>,
        start_date: NaiveDateTime,
        end_date: NaiveDateTime,
    ) -> Self {
        Self {
            uid: uid.into(),
            summary: summary.into(),
            description: None,
            url: None,
            start_date,
            end_date,
            all_day: false,
            timezone: None,
            location: None,
            status: None,
            classification: None,
            transparency: None,
            categories: Vec::new(),
            priority: None,
            organizer: None,
            attendees: Vec::new(),
            recurrence_rule: None,
            alarms: Vec::new(),
            created: None,
            last_modified: None,
            sequence: None,
            apple_extensions: None,
            microsoft_extensions: None,
            google_extensions: None,
        }
    }

    /// Returns the location text, if any.
    #[must_use]
    pub fn location_text(&self) -> Option<&str> {
        self.location.as_ref().map(|l| l.text.as_str())
    }
}

/// Where an event takes place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub text: String,
    pub geo: Option<GeoLocation>,
}

impl Location {
    #[must_use]
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            geo: None,
        }
    }
}

/// `GEO` coordinates in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoLocation {
    pub latitude: f64,
    pub longitude: f64,
}

/// Event status (RFC 5545 §3.8.1.11).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum EventStatus {
    Tentative,
    Confirmed,
    Cancelled,
}

impl EventStatus {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Tentative => "TENTATIVE",
            Self::Confirmed => "CONFIRMED",
            Self::Cancelled => "CANCELLED",
        }
    }

    /// Parses a status (case-insensitive).
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        Some(match s.to_ascii_uppercase().as_str() {
            "TENTATIVE" => Self::Tentative,
            "CONFIRMED" => Self::Confirmed,
            "CANCELLED" => Self::Cancelled,
            _ => return None,
        })
    }
}

impl fmt::Display for EventStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Access classification (RFC 5545 §3.8.1.3).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Classification {
    Public,
    Private,
    Confidential,
}

impl Classification {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Public => "PUBLIC",
            Self::Private => "PRIVATE",
            Self::Confidential => "CONFIDENTIAL",
        }
    }

    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        Some(match s.to_ascii_uppercase().as_str() {
            "PUBLIC" => Self::Public,
            "PRIVATE" => Self::Private,
            "CONFIDENTIAL" => Self::Confidential,
            _ => return None,
        })
    }
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Busy/free transparency (RFC 5545 §3.8.2.7).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Transparency {
    Opaque,
    Transparent,
}

impl Transparency {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Opaque => "OPAQUE",
            Self::Transparent => "TRANSPARENT",
        }
    }

    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        Some(match s.to_ascii_uppercase().as_str() {
            "OPAQUE" => Self::Opaque,
            "TRANSPARENT" => Self::Transparent,
            _ => return None,
        })
    }
}

impl fmt::Display for Transparency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;

    fn at(hour: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 1, 1)
            .and_then(|d| d.and_hms_opt(hour, 0, 0))
            .expect("valid datetime")
    }

    #[test]
    fn new_event_has_only_required_fields() {
        let event = CalendarEvent::new("abc@x", "Standup", at(9), at(10));
        assert_eq!(event.uid, "abc@x");
        assert!(!event.all_day);
        assert!(event.alarms.is_empty());
        assert!(event.apple_extensions.is_none());
        assert_eq!(event.location_text(), None);
    }

    #[test]
    fn generated_uids_are_unique() {
        let a = generate_uid();
        let b = generate_uid();
        assert_ne!(a, b);
        assert!(a.ends_with(&format!("@{UID_DOMAIN}")));
    }

    #[test]
    fn enums_parse_case_insensitively() {
        assert_eq!(EventStatus::parse("cancelled"), Some(EventStatus::Cancelled));
        assert_eq!(
            Classification::parse("Confidential"),
            Some(Classification::Confidential)
        );
        assert_eq!(Transparency::parse("transparent"), Some(Transparency::Transparent));
        assert_eq!(EventStatus::parse("POSTPONED"), None);
    }

    #[test]
    fn serializes_with_camel_case_fields() {
        let event = CalendarEvent::new("abc@x", "Standup", at(9), at(10));
        let json = serde_json::to_value(&event).expect("serialize");
        assert_eq!(json["allDay"], serde_json::Value::Bool(false));
        assert!(json.get("startDate").is_some());
    }
}
