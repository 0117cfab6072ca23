//! Calendar data model.
//!
//! Plain value types shared by the parser and the generator. Neither side
//! mutates a value it was given; parsing builds fresh values.
//!
//! Event times are [`chrono::NaiveDateTime`] wall-clock values read in the
//! event's frame: UTC when [`CalendarEvent::timezone`] is `None`, the named
//! zone otherwise. All-day events hold midnight of their date.

mod alarm;
mod calendar;
mod event;
mod extensions;
mod participant;
mod recurrence;

pub use alarm::{Alarm, AlarmAction, TriggerType};
pub use calendar::{Calendar, TimezoneDefinition};
pub use event::{
    CalendarEvent, Classification, EventStatus, GeoLocation, Location, Transparency, generate_uid,
};
pub use extensions::{
    AppleExtensions, BusyStatus, GoogleExtensions, MicrosoftExtensions, StructuredLocation,
    VendorProperty,
};
pub use participant::{Attendee, AttendeeRole, Organizer, ParticipationStatus};
pub use recurrence::{Frequency, RecurrenceRule, Weekday, WeekdayNum};
