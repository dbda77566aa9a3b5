//! Terminal formatting for events.

use chrono::NaiveDateTime;
use gigcal_core::Event;
use owo_colors::OwoColorize;

/// Format a numbered listing line, e.g.
/// `  1. 2024-05-01 19:00  Gig A  (Hall 1)`
pub fn event_line(number: usize, event: &Event) -> String {
    format!(
        "{:>3}. {}  {}{}",
        number,
        format_time(&event.time).dimmed(),
        event.title.bold(),
        location_suffix(event)
    )
}

/// Dimmed `  (location)` suffix; empty when the event has no location.
pub fn location_suffix(event: &Event) -> String {
    if event.location.is_empty() {
        String::new()
    } else {
        format!("  {}", format!("({})", event.location).dimmed())
    }
}

/// Format an event's date and time (e.g. "2024-05-01 19:00").
pub fn format_time(time: &NaiveDateTime) -> String {
    time.format("%Y-%m-%d %H:%M").to_string()
}

/// Format only the time-of-day, right-aligned (e.g. "  19:00").
pub fn format_time_of_day(time: &NaiveDateTime) -> String {
    format!("{:>7}", time.format("%H:%M"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn sample(location: &str) -> Event {
        Event::new(
            "Gig A",
            NaiveDate::from_ymd_opt(2024, 5, 1)
                .unwrap()
                .and_hms_opt(19, 0, 0)
                .unwrap(),
            location,
        )
    }

    #[test]
    fn location_suffix_empty_without_location() {
        assert_eq!(location_suffix(&sample("")), "");
    }

    #[test]
    fn location_suffix_wraps_location_in_parens() {
        assert!(location_suffix(&sample("Hall 1")).contains("(Hall 1)"));
    }

    #[test]
    fn event_line_carries_number_time_title_and_location() {
        let line = event_line(1, &sample("Hall 1"));
        assert!(line.contains("1."));
        assert!(line.contains("2024-05-01 19:00"));
        assert!(line.contains("Gig A"));
        assert!(line.contains("(Hall 1)"));
    }
}
