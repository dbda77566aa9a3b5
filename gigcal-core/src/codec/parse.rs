//! Parsing the events file format back into an [`EventStore`].
//!
//! The scanner is strict and fixed-order: after a `Title:` line it consumes
//! exactly one line for `Time:` and one for `Location:`, with no
//! resynchronization. A missing or misordered field line is silently dropped
//! for the current record and can swallow one stray line, which is inherited
//! from the legacy format. The one guard on top of the legacy behavior: a
//! `Title:` line is never consumed as a field candidate, so it always opens
//! a new record.

use std::io::ErrorKind;
use std::iter::Peekable;
use std::path::Path;

use chrono::NaiveDateTime;

use crate::codec::TIME_FORMAT;
use crate::error::GigcalResult;
use crate::event::Event;
use crate::store::EventStore;

/// Parse events file content. Never fails: records with unparsable times
/// keep the epoch sentinel, and lines that don't start a record are ignored.
pub fn parse_text(content: &str) -> EventStore {
    let mut store = EventStore::new();
    let mut lines = content.lines().peekable();

    while let Some(line) = lines.next() {
        let Some(rest) = line.strip_prefix("Title:") else {
            continue;
        };
        let title = rest.trim().to_string();

        let mut time = Event::default_time();
        if let Some(line) = next_field_line(&mut lines) {
            if let Some(rest) = line.strip_prefix("Time:") {
                if let Ok(parsed) = NaiveDateTime::parse_from_str(rest.trim(), TIME_FORMAT) {
                    time = parsed;
                }
            }
        }

        let mut location = String::new();
        if let Some(line) = next_field_line(&mut lines) {
            if let Some(rest) = line.strip_prefix("Location:") {
                location = rest.trim().to_string();
            }
        }

        store.add(Event {
            title,
            time,
            location,
        });
    }

    store
}

/// Consume the next line as a field candidate, unless it opens a new record.
///
/// A wrongly prefixed line in field position is still consumed (and the
/// field dropped); only a `Title:` line is handed back to the record scan.
fn next_field_line<'a, I>(lines: &mut Peekable<I>) -> Option<&'a str>
where
    I: Iterator<Item = &'a str>,
{
    if lines.peek().is_some_and(|l| l.starts_with("Title:")) {
        return None;
    }
    lines.next()
}

/// Read an events file from disk.
///
/// A missing file yields an empty store; any other I/O failure is returned
/// to the caller.
pub fn read_store(path: &Path) -> GigcalResult<EventStore> {
    match std::fs::read_to_string(path) {
        Ok(content) => Ok(parse_text(&content)),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(EventStore::new()),
        Err(e) => Err(e.into()),
    }
}
