//! Vendor-specific property bags.
//!
//! Each bag is independently optional and only created when at least one of
//! its vendor's `X-` properties was seen. Properties the bag has no typed
//! field for are kept verbatim in `other` so they survive a round trip.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::GeoLocation;

/// `X-APPLE-*` properties written by Apple Calendar.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppleExtensions {
    /// `X-APPLE-TRAVEL-ADVISORY-BEHAVIOR` (`AUTOMATIC` / `DISABLED`).
    pub travel_advisory_behavior: Option<String>,
    /// `X-APPLE-TRAVEL-DURATION` in minutes.
    pub travel_duration: Option<i64>,
    /// `X-APPLE-STRUCTURED-LOCATION`.
    pub structured_location: Option<StructuredLocation>,
    /// Remaining `X-APPLE-*` properties.
    pub other: Vec<VendorProperty>,
}

/// A map-pinned location as Apple Calendar stores it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StructuredLocation {
    /// `X-TITLE` parameter.
    pub title: String,
    /// `X-ADDRESS` parameter.
    pub address: Option<String>,
    /// `X-APPLE-RADIUS` parameter, in meters.
    pub radius: Option<f64>,
    /// Coordinates from the `geo:lat,lon` value.
    pub geo: GeoLocation,
}

/// `X-MICROSOFT-*` properties written by Outlook and Exchange.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MicrosoftExtensions {
    /// `X-MICROSOFT-CDO-BUSYSTATUS`.
    pub busy_status: Option<BusyStatus>,
    /// `X-MICROSOFT-CDO-INTENDEDSTATUS`.
    pub intended_status: Option<BusyStatus>,
    /// `X-MICROSOFT-CDO-IMPORTANCE`: 0 low, 1 normal, 2 high.
    pub importance: Option<u8>,
    /// `X-MICROSOFT-CDO-ALLDAYEVENT`.
    pub all_day_event: Option<bool>,
    /// `X-MICROSOFT-DISALLOW-COUNTER`.
    pub disallow_counter: Option<bool>,
    pub other: Vec<VendorProperty>,
}

/// `X-GOOGLE-*` properties written by Google Calendar.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GoogleExtensions {
    /// `X-GOOGLE-CONFERENCE`: the Meet link.
    pub conference_url: Option<String>,
    pub other: Vec<VendorProperty>,
}

/// A vendor property with no typed field, kept exactly as read.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VendorProperty {
    pub name: String,
    /// Parameters in order of appearance, each with its values.
    pub params: Vec<(String, Vec<String>)>,
    /// Still escaped value text.
    pub value: String,
}

impl VendorProperty {
    /// A property without parameters.
    #[must_use]
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            params: Vec::new(),
            value: value.into(),
        }
    }
}

/// Outlook free/busy state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum BusyStatus {
    Free,
    Tentative,
    Busy,
    Oof,
    WorkingElsewhere,
}

impl BusyStatus {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Free => "FREE",
            Self::Tentative => "TENTATIVE",
            Self::Busy => "BUSY",
            Self::Oof => "OOF",
            Self::WorkingElsewhere => "WORKINGELSEWHERE",
        }
    }

    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        Some(match s.to_ascii_uppercase().as_str() {
            "FREE" => Self::Free,
            "TENTATIVE" => Self::Tentative,
            "BUSY" => Self::Busy,
            "OOF" => Self::Oof,
            "WORKINGELSEWHERE" => Self::WorkingElsewhere,
            _ => return None,
        })
    }
}

impl fmt::Display for BusyStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
