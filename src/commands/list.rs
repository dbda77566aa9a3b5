use std::path::Path;

use anyhow::Result;
use owo_colors::OwoColorize;

use crate::commands::load_store;
use crate::render;

pub fn run(events_path: &Path) -> Result<()> {
    let store = load_store(events_path);

    if store.is_empty() {
        println!("{}", "No events to display".dimmed());
        return Ok(());
    }

    for (i, event) in store.iter().enumerate() {
        println!("{}", render::event_line(i + 1, event));
    }

    Ok(())
}
