use std::path::Path;

use anyhow::Result;
use gigcal_core::codec;
use owo_colors::OwoColorize;

use crate::commands::load_store_for_update;

pub fn run(events_path: &Path, number: usize) -> Result<()> {
    let mut store = load_store_for_update(events_path)?;

    let removed = match number.checked_sub(1).map(|index| store.remove_at(index)) {
        Some(Ok(event)) => event,
        _ => {
            report_invalid_number(number, store.len());
            return Ok(());
        }
    };

    codec::write_store(&store, events_path)?;
    println!("{}", format!("  Removed: {}", removed.title).green());

    Ok(())
}

fn report_invalid_number(number: usize, len: usize) {
    eprintln!(
        "{}",
        format!("Invalid event number: {} (there are {} events)", number, len).red()
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use gigcal_core::{Event, EventStore};

    fn seeded_file(dir: &tempfile::TempDir) -> std::path::PathBuf {
        let path = dir.path().join("events.txt");
        let mut store = EventStore::new();
        store.add(Event::new(
            "Only",
            NaiveDate::from_ymd_opt(2024, 5, 1)
                .unwrap()
                .and_hms_opt(19, 0, 0)
                .unwrap(),
            "Hall 1",
        ));
        codec::write_store(&store, &path).unwrap();
        path
    }

    #[test]
    fn removes_event_and_persists() {
        let dir = tempfile::tempdir().unwrap();
        let path = seeded_file(&dir);

        run(&path, 1).unwrap();

        assert!(codec::read_store(&path).unwrap().is_empty());
    }

    #[test]
    fn invalid_number_is_not_fatal_and_leaves_file_unchanged() {
        let dir = tempfile::tempdir().unwrap();
        let path = seeded_file(&dir);
        let before = std::fs::read_to_string(&path).unwrap();

        assert!(run(&path, 0).is_ok());
        assert!(run(&path, 9).is_ok());

        assert_eq!(std::fs::read_to_string(&path).unwrap(), before);
    }
}
