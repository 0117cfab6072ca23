use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use icsforge_core::types::TargetPlatform;

#[derive(Debug, Parser)]
#[command(name = "icsforge")]
#[command(about = "Import, inspect and export iCalendar (.ics) files")]
pub struct Cli {
    /// Settings file (defaults to ./icsforge.toml when present)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Parse an ICS file and list its events
    Inspect {
        file: PathBuf,

        /// Print the parsed calendar as JSON
        #[arg(long)]
        json: bool,
    },
    /// Parse an ICS file and write it back out through the generator
    Export {
        file: PathBuf,

        #[command(flatten)]
        output: OutputArgs,

        /// iTIP method to stamp on the calendar (e.g. PUBLISH)
        #[arg(long)]
        method: Option<String>,

        /// Skip VTIMEZONE components
        #[arg(long)]
        no_timezones: bool,

        /// Calendar application the export is meant for
        #[arg(long, value_parser = parse_platform)]
        platform: Option<TargetPlatform>,
    },
    /// Print "add to calendar" links for every event of an ICS file
    Links { file: PathBuf },
    /// Create a single-event calendar
    New(NewEventArgs),
}

#[derive(Debug, Args)]
pub struct OutputArgs {
    /// Output file, or a directory to write `<title>.ics` into
    /// (stdout when omitted)
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

#[derive(Debug, Args)]
pub struct NewEventArgs {
    /// Event title
    #[arg(long)]
    pub summary: String,

    /// Start date/time (e.g. "2025-03-20" or "2025-03-20T15:00")
    #[arg(short, long)]
    pub start: String,

    /// End date/time (one hour, or one day for all-day events, after the
    /// start when omitted)
    #[arg(short, long)]
    pub end: Option<String>,

    /// Create an all-day event
    #[arg(long)]
    pub all_day: bool,

    /// Zone the start and end are local to (e.g. "Europe/Berlin")
    #[arg(long)]
    pub timezone: Option<String>,

    #[arg(long)]
    pub description: Option<String>,

    #[arg(short, long)]
    pub location: Option<String>,

    /// Display reminder this many minutes before the start
    #[arg(long)]
    pub alarm: Option<i64>,

    #[command(flatten)]
    pub output: OutputArgs,
}

fn parse_platform(value: &str) -> Result<TargetPlatform, String> {
    TargetPlatform::parse(value)
        .ok_or_else(|| format!("unknown platform '{value}' (generic, apple, google, microsoft)"))
}
