use icsforge_rfc::links::{
    google_calendar_url, office365_calendar_url, outlook_calendar_url, yahoo_calendar_url,
};
use icsforge_rfc::model::Calendar;

/// Lists the four "add to calendar" links of every event.
#[must_use]
pub fn render(calendar: &Calendar) -> String {
    calendar
        .events
        .iter()
        .map(|event| {
            [
                event.summary.clone(),
                format!("  Google:    {}", google_calendar_url(event)),
                format!("  Outlook:   {}", outlook_calendar_url(event)),
                format!("  Office365: {}", office365_calendar_url(event)),
                format!("  Yahoo:     {}", yahoo_calendar_url(event)),
            ]
            .join("\n")
        })
        .collect::<Vec<_>>()
        .join("\n\n")
}

#[cfg(test)]
mod tests {
    use icsforge_rfc::ical::parse;

    use super::*;

    #[test_log::test]
    fn one_block_per_event() {
        let calendar = parse(
            "BEGIN:VCALENDAR\r\nBEGIN:VEVENT\r\nUID:a@x\r\nSUMMARY:First\r\n\
DTSTART:20250115T120000Z\r\nDTEND:20250115T130000Z\r\nEND:VEVENT\r\n\
BEGIN:VEVENT\r\nUID:b@x\r\nSUMMARY:Second\r\nDTSTART:20250116T120000Z\r\n\
END:VEVENT\r\nEND:VCALENDAR\r\n",
        );

        let text = render(&calendar);
        let blocks: Vec<&str> = text.split("\n\n").collect();
        assert_eq!(blocks.len(), 2);
        assert!(blocks[0].starts_with("First\n  Google:    https://calendar.google.com/"));
        assert!(blocks[0].contains("&dates=20250115T120000Z/20250115T130000Z&"));
        assert!(blocks[1].starts_with("Second\n"));
        assert!(blocks[1].contains("  Yahoo:     https://calendar.yahoo.com/?v=60&title=Second&"));
    }

    #[test_log::test]
    fn empty_calendar_prints_nothing() {
        assert_eq!(render(&Calendar::default()), "");
    }
}
