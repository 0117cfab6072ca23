use icsforge_rfc::model::{Calendar, CalendarEvent};

use crate::error::AppResult;

/// ## Summary
/// Renders a parsed calendar as a human-readable listing, or as pretty JSON.
///
/// ## Errors
/// Returns an error if JSON serialization fails.
pub fn render(calendar: &Calendar, json: bool) -> AppResult<String> {
    if json {
        return Ok(serde_json::to_string_pretty(calendar)?);
    }

    let mut lines = vec![
        format!(
            "Calendar: {}",
            calendar.name.as_deref().unwrap_or("(unnamed)")
        ),
        format!("PRODID: {}", calendar.prod_id),
    ];
    if let Some(method) = &calendar.method {
        lines.push(format!("METHOD: {method}"));
    }
    if let Some(zone) = &calendar.timezone {
        lines.push(format!("Timezone: {} ({})", zone.tzid, zone.standard_offset));
    }
    lines.push(format!("Events: {}", calendar.events.len()));

    for event in &calendar.events {
        lines.push(String::new());
        lines.extend(describe(event));
    }

    Ok(lines.join("\n"))
}

fn describe(event: &CalendarEvent) -> Vec<String> {
    let title = if event.summary.is_empty() {
        "(no title)"
    } else {
        &event.summary
    };
    let mut lines = vec![
        format!("- {title} [{}]", event.uid),
        format!("  when: {}", when(event)),
    ];

    if let Some(location) = event.location_text().filter(|l| !l.is_empty()) {
        lines.push(format!("  location: {location}"));
    }
    if let Some(status) = event.status {
        lines.push(format!("  status: {status}"));
    }
    if let Some(rule) = &event.recurrence_rule {
        lines.push(format!("  repeats: {rule}"));
    }
    if let Some(organizer) = &event.organizer {
        lines.push(format!("  organizer: {}", organizer.email));
    }
    if !event.attendees.is_empty() {
        lines.push(format!("  attendees: {}", event.attendees.len()));
    }
    if !event.alarms.is_empty() {
        lines.push(format!("  alarms: {}", event.alarms.len()));
    }

    let vendors: Vec<&str> = [
        event.apple_extensions.is_some().then_some("apple"),
        event.microsoft_extensions.is_some().then_some("microsoft"),
        event.google_extensions.is_some().then_some("google"),
    ]
    .into_iter()
    .flatten()
    .collect();
    if !vendors.is_empty() {
        lines.push(format!("  extensions: {}", vendors.join(", ")));
    }

    lines
}

fn when(event: &CalendarEvent) -> String {
    if event.all_day {
        return format!(
            "{} to {} (all day)",
            event.start_date.format("%Y-%m-%d"),
            event.end_date.format("%Y-%m-%d")
        );
    }
    format!(
        "{} to {} ({})",
        event.start_date.format("%Y-%m-%d %H:%M"),
        event.end_date.format("%Y-%m-%d %H:%M"),
        event.timezone.as_deref().unwrap_or("UTC")
    )
}
