use std::path::Path;

use anyhow::Result;
use chrono::NaiveDateTime;
use dialoguer::Input;
use gigcal_core::{codec, Event};
use owo_colors::OwoColorize;

use crate::commands::load_store_for_update;
use crate::datetime::parse_cli_datetime;
use crate::render;

pub fn run(
    events_path: &Path,
    number: usize,
    title: Option<String>,
    time: Option<String>,
    location: Option<String>,
) -> Result<()> {
    let mut store = load_store_for_update(events_path)?;

    let Some(current) = number
        .checked_sub(1)
        .and_then(|i| store.get(i))
        .cloned()
    else {
        eprintln!(
            "{}",
            format!(
                "Invalid event number: {} (there are {} events)",
                number,
                store.len()
            )
            .red()
        );
        return Ok(());
    };

    let interactive = title.is_none() && time.is_none() && location.is_none();

    let (new_title, new_time, new_location) = if interactive {
        prompt_fields(&current)?
    } else {
        let new_time = match time {
            Some(s) => parse_cli_datetime(&s)?,
            None => current.time,
        };
        (
            title.unwrap_or_else(|| current.title.clone()),
            new_time,
            location.unwrap_or_else(|| current.location.clone()),
        )
    };

    if let Some(event) = store.get_mut(number - 1) {
        event.title = new_title.clone();
        event.time = new_time;
        event.location = new_location;
    }
    codec::write_store(&store, events_path)?;

    if interactive {
        println!();
    }
    println!("{}", format!("  Updated: {}", new_title).green());

    Ok(())
}

/// Prompt for each field; an empty answer keeps the current value.
fn prompt_fields(current: &Event) -> Result<(String, NaiveDateTime, String)> {
    println!("Editing: {}", current.title.bold());

    let title_input: String = Input::new()
        .with_prompt(format!("  Title [{}] (keep)", current.title))
        .default(String::new())
        .show_default(false)
        .interact_text()?;
    let title = if title_input.is_empty() {
        current.title.clone()
    } else {
        title_input
    };

    let time = prompt_time(&current.time)?;

    let location_input: String = Input::new()
        .with_prompt(format!("  Where [{}] (keep)", current.location))
        .default(String::new())
        .show_default(false)
        .interact_text()?;
    let location = if location_input.is_empty() {
        current.location.clone()
    } else {
        location_input
    };

    Ok((title, time, location))
}

/// Prompt for a new date/time with retry; an empty answer keeps the current one.
fn prompt_time(current: &NaiveDateTime) -> Result<NaiveDateTime> {
    loop {
        let input: String = Input::new()
            .with_prompt(format!("  When [{}] (keep)", render::format_time(current)))
            .default(String::new())
            .show_default(false)
            .interact_text()?;
        if input.is_empty() {
            return Ok(*current);
        }
        match parse_cli_datetime(&input) {
            Ok(result) => return Ok(result),
            Err(e) => {
                eprintln!("  {}", e.to_string().red());
            }
        }
    }
}
