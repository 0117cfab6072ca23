use std::fmt;

use serde::{Deserialize, Serialize};

/// A `VALARM` reminder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Alarm {
    pub action: AlarmAction,
    pub trigger_type: TriggerType,
    /// Minutes before/after the anchor for relative triggers, epoch
    /// milliseconds (UTC) for [`TriggerType::Absolute`].
    pub trigger_value: i64,
    pub description: Option<String>,
    pub summary: Option<String>,
    /// Additional repetitions after the first trigger.
    pub repeat: Option<u32>,
    /// Minutes between repetitions.
    pub duration: Option<i64>,
}

impl Alarm {
    /// A display reminder `minutes` before the event starts.
    #[must_use]
    pub const fn display_before_start(minutes: i64) -> Self {
        Self {
            action: AlarmAction::Display,
            trigger_type: TriggerType::BeforeStart,
            trigger_value: minutes,
            description: None,
            summary: None,
            repeat: None,
            duration: None,
        }
    }
}

impl Default for Alarm {
    fn default() -> Self {
        Self::display_before_start(0)
    }
}

/// Alarm action (RFC 5545 §3.8.6.1).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum AlarmAction {
    Audio,
    #[default]
    Display,
    Email,
}

impl AlarmAction {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Audio => "AUDIO",
            Self::Display => "DISPLAY",
            Self::Email => "EMAIL",
        }
    }

    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        Some(match s.to_ascii_uppercase().as_str() {
            "AUDIO" => Self::Audio,
            "DISPLAY" => Self::Display,
            "EMAIL" => Self::Email,
            _ => return None,
        })
    }
}

impl fmt::Display for AlarmAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What an alarm trigger is anchored to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TriggerType {
    BeforeStart,
    BeforeEnd,
    AfterStart,
    AfterEnd,
    Absolute,
}

impl TriggerType {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::BeforeStart => "BEFORE_START",
            Self::BeforeEnd => "BEFORE_END",
            Self::AfterStart => "AFTER_START",
            Self::AfterEnd => "AFTER_END",
            Self::Absolute => "ABSOLUTE",
        }
    }

    /// Relative trigger for a signed offset and anchor.
    ///
    /// Negative offsets fire before the anchor.
    #[must_use]
    pub const fn relative(negative: bool, related_end: bool) -> Self {
        match (negative, related_end) {
            (true, false) => Self::BeforeStart,
            (true, true) => Self::BeforeEnd,
            (false, false) => Self::AfterStart,
            (false, true) => Self::AfterEnd,
        }
    }

    /// Whether the trigger fires before its anchor.
    #[must_use]
    pub const fn is_before(self) -> bool {
        matches!(self, Self::BeforeStart | Self::BeforeEnd)
    }

    /// Whether the trigger is anchored to the event end (`RELATED=END`).
    #[must_use]
    pub const fn is_related_to_end(self) -> bool {
        matches!(self, Self::BeforeEnd | Self::AfterEnd)
    }
}

impl fmt::Display for TriggerType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
