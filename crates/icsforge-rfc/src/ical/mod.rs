//! iCalendar RFC 5545 codec.
//!
//! - `core`: content lines and parameters shared by both directions
//! - `parse`: ICS text to [`Calendar`](crate::model::Calendar), best effort
//! - `build`: [`Calendar`](crate::model::Calendar) to folded ICS text
//! - `timezone`: the static table of common zones
//!
//! ## Example
//!
//! ```rust
//! use icsforge_rfc::ical::{GeneratorOptions, generate, parse};
//!
//! let input = "BEGIN:VCALENDAR\r\nVERSION:2.0\r\nBEGIN:VEVENT\r\nUID:abc@x\r\n\
//!              DTSTART:20250101T100000Z\r\nSUMMARY:Test\r\nEND:VEVENT\r\nEND:VCALENDAR\r\n";
//! let calendar = parse(input);
//! assert_eq!(calendar.events.len(), 1);
//!
//! let output = generate(&calendar, &GeneratorOptions::default());
//! assert!(output.contains("UID:abc@x\r\n"));
//! ```

pub mod build;
pub mod core;
pub mod parse;
pub mod timezone;

#[cfg(test)]
mod tests;

pub use build::{GeneratorOptions, ICS_MIME_TYPE, export_filename, generate, generate_single};
pub use parse::{parse, parse_file};
