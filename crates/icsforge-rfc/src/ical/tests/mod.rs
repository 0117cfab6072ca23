//! Cross-module tests: parse/generate round trips and end-to-end scenarios.

mod fixtures;
mod round_trip;
