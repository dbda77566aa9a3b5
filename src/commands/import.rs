use std::path::Path;

use anyhow::{Context, Result};
use gigcal_core::codec;
use owo_colors::OwoColorize;

use crate::commands::load_store_for_update;

pub fn run(events_path: &Path, source: &Path) -> Result<()> {
    if !source.exists() {
        anyhow::bail!("File not found: {}", source.display());
    }

    let imported = codec::read_store(source)
        .with_context(|| format!("Could not read events from {}", source.display()))?;
    let count = imported.len();

    let mut store = load_store_for_update(events_path)?;
    store.merge(imported);
    codec::write_store(&store, events_path)?;

    println!(
        "{}",
        format!("  Imported {} events from {}", count, source.display()).green()
    );

    Ok(())
}
