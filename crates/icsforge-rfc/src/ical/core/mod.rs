//! Content-line level types (RFC 5545 §3.1, §3.2).

mod content_line;
mod parameter;

pub use content_line::ContentLine;
pub use parameter::Parameter;
