use std::path::PathBuf;

use anyhow::Result;
use gigcal_core::config::GigcalConfig;
use owo_colors::OwoColorize;

pub fn run(set_file: Option<PathBuf>) -> Result<()> {
    let config_path = GigcalConfig::config_path()?;
    let mut cfg = GigcalConfig::load()?;

    if let Some(path) = set_file {
        cfg.events_file = path;
        cfg.save()?;
        println!(
            "{}",
            format!(
                "  Default events file set to {}",
                cfg.display_path().display()
            )
            .green()
        );
        return Ok(());
    }

    println!("{}", "Paths".bold());
    println!("  Config:  {}", config_path.display());
    println!("  Events:  {}", cfg.display_path().display());

    Ok(())
}
