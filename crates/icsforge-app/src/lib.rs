//! The `icsforge` command line: import, inspect, re-export and create ICS
//! files on top of `icsforge-rfc`.

pub mod cli;
pub mod commands;
pub mod error;
