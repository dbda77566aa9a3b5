//! Rendering an [`EventStore`] to the events file format.

use std::fmt::Write as _;
use std::path::Path;

use crate::codec::TIME_FORMAT;
use crate::error::GigcalResult;
use crate::store::EventStore;

/// Render every event, in order, as a `Title:`/`Time:`/`Location:` record
/// with a blank separator line after each.
pub fn to_text(store: &EventStore) -> String {
    let mut out = String::new();
    for event in store.iter() {
        let _ = writeln!(out, "Title: {}", event.title);
        let _ = writeln!(out, "Time: {}", event.time.format(TIME_FORMAT));
        let _ = writeln!(out, "Location: {}", event.location);
        out.push('\n');
    }
    out
}

/// Write the store to `path`, replacing any existing content.
pub fn write_store(store: &EventStore, path: &Path) -> GigcalResult<()> {
    std::fs::write(path, to_text(store))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::read_store;
    use crate::event::Event;
    use chrono::NaiveDate;

    fn sample_store() -> EventStore {
        let mut store = EventStore::new();
        store.add(Event::new(
            "Gig A",
            NaiveDate::from_ymd_opt(2024, 5, 1)
                .unwrap()
                .and_hms_opt(19, 0, 0)
                .unwrap(),
            "Hall 1",
        ));
        store
    }

    #[test]
    fn renders_three_line_records_with_blank_separator() {
        let text = to_text(&sample_store());
        assert_eq!(
            text,
            "Title: Gig A\nTime: 2024-05-01 19:00:00\nLocation: Hall 1\n\n"
        );
    }

    #[test]
    fn empty_store_renders_empty_text() {
        assert_eq!(to_text(&EventStore::new()), "");
    }

    #[test]
    fn write_store_truncates_existing_content() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("events.txt");

        std::fs::write(&path, "old content that should disappear\n".repeat(50)).unwrap();
        write_store(&sample_store(), &path).unwrap();

        let loaded = read_store(&path).unwrap();
        assert_eq!(loaded, sample_store());
        let content = std::fs::read_to_string(&path).unwrap();
        assert!(!content.contains("old content"));
    }
}
