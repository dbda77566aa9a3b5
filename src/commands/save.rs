use std::path::Path;

use anyhow::{Context, Result};
use gigcal_core::codec;
use owo_colors::OwoColorize;

use crate::commands::load_store;

pub fn run(events_path: &Path, target: &Path) -> Result<()> {
    let store = load_store(events_path);

    codec::write_store(&store, target)
        .with_context(|| format!("Could not save events to {}", target.display()))?;

    println!(
        "{}",
        format!("  Saved {} events to {}", store.len(), target.display()).green()
    );

    Ok(())
}
