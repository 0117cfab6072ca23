//! iCalendar parsing (RFC 5545).
//!
//! - `lexer`: line unfolding and content line decomposition
//! - `values`: value type decoders
//! - `frames`/`event`: the component state machine and its builders
//! - `parser`: the entry points

mod error;
mod event;
mod frames;
mod lexer;
mod parser;
mod values;

pub use error::{ParseError, ParseErrorKind, ParseResult};
pub use lexer::{parse_content_line, split_lines, unfold};
pub use parser::{parse, parse_file};
pub use values::{parse_duration, unescape_text};
