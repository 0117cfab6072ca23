//! Shared building blocks for the icsforge workspace: settings, the core
//! error type, constants and small utilities with no codec dependencies.

pub mod config;
pub mod constants;
pub mod error;
pub mod types;
pub mod util;
