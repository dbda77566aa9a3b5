pub mod add;
pub mod config;
pub mod edit;
pub mod import;
pub mod list;
pub mod on;
pub mod remove;
pub mod save;

use std::path::Path;

use anyhow::{Context, Result};
use gigcal_core::{codec, EventStore};
use owo_colors::OwoColorize;

/// Load the events file for a read-only command, degrading to an empty
/// store on failure.
///
/// A missing file just means the calendar is empty; any other read failure
/// is reported on stderr and an empty store is returned, so no read-only
/// command ever dies on load.
pub fn load_store(path: &Path) -> EventStore {
    match codec::read_store(path) {
        Ok(store) => store,
        Err(e) => {
            eprintln!(
                "{}",
                format!("Could not load events from {}: {}", path.display(), e).red()
            );
            EventStore::new()
        }
    }
}

/// Load the events file for a command that writes it back.
///
/// A missing file still yields an empty store, but any other read failure
/// aborts the command: writing back a store that silently dropped the
/// existing records would destroy them.
pub fn load_store_for_update(path: &Path) -> Result<EventStore> {
    codec::read_store(path).with_context(|| {
        format!(
            "Could not load events from {}; leaving the file untouched",
            path.display()
        )
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    /// One valid record followed by a byte that is not valid UTF-8, so
    /// reading the file fails with something other than NotFound.
    fn unreadable_events_file(dir: &tempfile::TempDir) -> std::path::PathBuf {
        let path = dir.path().join("events.txt");
        let mut bytes =
            b"Title: Keeper\nTime: 2024-05-01 19:00:00\nLocation: Hall 1\n\n".to_vec();
        bytes.push(0xFF);
        fs::write(&path, bytes).unwrap();
        path
    }

    #[test]
    fn load_store_degrades_to_empty_on_unreadable_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = unreadable_events_file(&dir);

        assert!(load_store(&path).is_empty());
    }

    #[test]
    fn load_store_for_update_refuses_unreadable_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = unreadable_events_file(&dir);

        assert!(load_store_for_update(&path).is_err());
    }

    #[test]
    fn load_store_for_update_missing_file_yields_empty_store() {
        let dir = tempfile::tempdir().unwrap();
        let store = load_store_for_update(&dir.path().join("none.txt")).unwrap();
        assert!(store.is_empty());
    }

    #[test]
    fn mutating_command_leaves_unreadable_file_untouched() {
        let dir = tempfile::tempdir().unwrap();
        let path = unreadable_events_file(&dir);
        let before = fs::read(&path).unwrap();

        assert!(crate::commands::remove::run(&path, 1).is_err());

        assert_eq!(fs::read(&path).unwrap(), before);
    }
}
