//! iCalendar (RFC 5545) codec for the icsforge calendar editor.
//!
//! - `model`: the structured calendar/event records exchanged with the editor
//! - `ical`: the parser (ICS text to [`model::Calendar`]) and the generator
//!   ([`model::Calendar`] to folded ICS text)
//! - `links`: "add to calendar" deep links for web calendar services

pub mod error;
pub mod ical;
pub mod links;
pub mod model;
