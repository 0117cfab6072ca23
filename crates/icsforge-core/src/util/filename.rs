//! Filename helpers for exported calendar files.
//!
//! ## Summary
//! Exported files are named after the event title with everything outside
//! `[A-Za-z0-9]` removed, so names are safe on every filesystem and in
//! `Content-Disposition` headers.

/// Extension used for exported iCalendar files.
pub const ICS_EXTENSION: &str = "ics";

/// Fallback filename when no usable title exists.
pub const FALLBACK_FILENAME: &str = "calendar.ics";

/// Strips every character outside `[A-Za-z0-9]`.
///
/// Examples:
/// - "Team Sync #4" -> "TeamSync4"
/// - "Café" -> "Caf"
#[must_use]
pub fn sanitize_stem(name: &str) -> String {
    name.chars().filter(char::is_ascii_alphanumeric).collect()
}

/// Builds `<sanitized-title>.ics`, or [`FALLBACK_FILENAME`] when the title
/// has no alphanumeric characters.
#[must_use]
pub fn ics_filename(title: &str) -> String {
    let stem = sanitize_stem(title);
    if stem.is_empty() {
        FALLBACK_FILENAME.to_string()
    } else {
        format!("{stem}.{ICS_EXTENSION}")
    }
}
