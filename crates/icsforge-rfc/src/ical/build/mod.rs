//! iCalendar generation (RFC 5545).
//!
//! - `escape`: TEXT and parameter value escaping
//! - `fold`: content line folding at 75 octets
//! - `format`: date, date-time and duration values
//! - `generator`: [`Calendar`](crate::model::Calendar) to ICS text
//! - `export`: MIME type and filename for exported files

mod escape;
mod export;
mod fold;
mod format;
mod generator;
mod options;

pub use escape::{escape_param_value, escape_text};
pub use export::{ICS_MIME_TYPE, export_filename};
pub use fold::{MAX_LINE_OCTETS, fold_line};
pub use format::{
    format_date, format_duration, format_local_datetime, format_timestamp, format_utc_datetime,
};
pub use generator::{generate, generate_single};
pub use options::GeneratorOptions;
