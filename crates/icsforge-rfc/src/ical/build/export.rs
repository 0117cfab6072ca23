//! Helpers for handing generated ICS text to a file or a download.

use icsforge_core::util::filename::{FALLBACK_FILENAME, ics_filename};

use crate::model::Calendar;

/// MIME type of generated output.
pub const ICS_MIME_TYPE: &str = "text/calendar";

/// Suggested filename for an export.
///
/// A single-event calendar is named after the event's summary; anything
/// else is `calendar.ics`.
#[must_use]
pub fn export_filename(calendar: &Calendar) -> String {
    match calendar.events.as_slice() {
        [event] => ics_filename(&event.summary),
        _ => FALLBACK_FILENAME.to_string(),
    }
}
