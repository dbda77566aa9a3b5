use std::path::Path;

use anyhow::Result;
use owo_colors::OwoColorize;

use crate::commands::load_store;
use crate::datetime::parse_cli_date;
use crate::render;

pub fn run(events_path: &Path, date: &str) -> Result<()> {
    let date = match parse_cli_date(date) {
        Ok(date) => date,
        Err(e) => {
            eprintln!("{}", e.to_string().red());
            return Ok(());
        }
    };
    let store = load_store(events_path);

    let matches = store.events_on(date);
    if matches.is_empty() {
        println!("{}", format!("No events on {}", date).dimmed());
        return Ok(());
    }

    println!("{}", format!("Events on {}", date).bold());
    for event in matches {
        println!(
            "  {} {}{}",
            render::format_time_of_day(&event.time).dimmed(),
            event.title,
            render::location_suffix(event)
        );
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unparsable_date_is_reported_not_fatal() {
        let dir = tempfile::tempdir().unwrap();
        assert!(run(&dir.path().join("events.txt"), "sometime soon").is_ok());
    }
}
