use std::path::Path;

use anyhow::Result;
use chrono::NaiveDateTime;
use dialoguer::Input;
use gigcal_core::{codec, Event};
use owo_colors::OwoColorize;

use crate::commands::load_store_for_update;
use crate::datetime::parse_cli_datetime;

pub fn run(
    events_path: &Path,
    title: Option<String>,
    time: Option<String>,
    location: Option<String>,
) -> Result<()> {
    let interactive = title.is_none() || time.is_none();

    // --- Title ---
    let title = match title {
        Some(t) => t,
        None => Input::<String>::new()
            .with_prompt("  Title")
            .allow_empty(true)
            .interact_text()?,
    };

    // --- Time ---
    let time = if let Some(s) = time {
        parse_cli_datetime(&s)?
    } else {
        prompt_with_retry("  When?")?
    };

    // --- Location ---
    let location = if let Some(loc) = location {
        loc
    } else if interactive {
        Input::new()
            .with_prompt("  Where? (skip)")
            .default(String::new())
            .show_default(false)
            .interact_text()?
    } else {
        String::new()
    };

    let mut store = load_store_for_update(events_path)?;
    let event = Event::new(title, time, location);
    let added_title = event.title.clone();
    store.add(event);
    codec::write_store(&store, events_path)?;

    if interactive {
        println!();
    }
    println!("{}", format!("  Added: {}", added_title).green());

    Ok(())
}

/// Prompt the user with retry on parse errors.
fn prompt_with_retry(prompt: &str) -> Result<NaiveDateTime> {
    loop {
        let input: String = Input::new().with_prompt(prompt).interact_text()?;
        match parse_cli_datetime(&input) {
            Ok(result) => return Ok(result),
            Err(e) => {
                eprintln!("  {}", e.to_string().red());
            }
        }
    }
}
