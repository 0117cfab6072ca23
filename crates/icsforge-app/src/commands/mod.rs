//! Subcommand implementations.
//!
//! Each command renders its result to a `String` so it can be tested without
//! a terminal; [`run`] does the printing.

pub mod export;
pub mod inspect;
pub mod links;
pub mod new;
pub mod output;

use icsforge_core::config::Settings;
use icsforge_rfc::ical::parse_file;

use crate::cli::Command;
use crate::error::AppResult;

/// ## Summary
/// Runs one subcommand against the resolved settings.
///
/// ## Errors
/// Returns an error if an input file cannot be read, the output cannot be
/// written, or the command line carries invalid values.
pub async fn run(command: Command, settings: &Settings) -> AppResult<()> {
    match command {
        Command::Inspect { file, json } => {
            let calendar = parse_file(&file).await?;
            println!("{}", inspect::render(&calendar, json)?);
        }
        Command::Export {
            file,
            output,
            method,
            no_timezones,
            platform,
        } => {
            let calendar = parse_file(&file).await?;
            let options =
                export::options(&settings.generator, method.as_deref(), no_timezones, platform);
            let ics = icsforge_rfc::ical::generate(&calendar, &options);
            output::write_calendar(output.output.as_deref(), &calendar, &ics).await?;
        }
        Command::Links { file } => {
            let calendar = parse_file(&file).await?;
            println!("{}", links::render(&calendar));
        }
        Command::New(args) => {
            let event = new::build_event(&args)?;
            let options = export::options(&settings.generator, None, false, None);
            let ics = icsforge_rfc::ical::generate_single(&event, &options);
            let calendar = icsforge_rfc::model::Calendar::with_event(event);
            output::write_calendar(args.output.output.as_deref(), &calendar, &ics).await?;
        }
    }

    Ok(())
}
