use std::path::{Path, PathBuf};

use icsforge_rfc::ical::{ICS_MIME_TYPE, export_filename};
use icsforge_rfc::model::Calendar;

use crate::error::{AppError, AppResult};

/// Where to write an export: the path itself, or `<title>.ics` inside it
/// when it names an existing directory.
pub async fn resolve_path(output: &Path, calendar: &Calendar) -> PathBuf {
    match tokio::fs::metadata(output).await {
        Ok(meta) if meta.is_dir() => output.join(export_filename(calendar)),
        _ => output.to_path_buf(),
    }
}

/// ## Summary
/// Writes generated ICS text to `output`, or to stdout when no output is
/// given.
///
/// ## Errors
/// Returns [`AppError::WriteError`] if the file cannot be written.
#[tracing::instrument(skip(calendar, ics), fields(bytes = ics.len()))]
pub async fn write_calendar(
    output: Option<&Path>,
    calendar: &Calendar,
    ics: &str,
) -> AppResult<Option<PathBuf>> {
    let Some(output) = output else {
        print!("{ics}");
        return Ok(None);
    };

    let path = resolve_path(output, calendar).await;
    tokio::fs::write(&path, ics)
        .await
        .map_err(|source| AppError::WriteError {
            path: path.display().to_string(),
            source,
        })?;

    tracing::info!(
        path = %path.display(),
        content_type = ICS_MIME_TYPE,
        events = calendar.events.len(),
        "Calendar written"
    );
    Ok(Some(path))
}
