mod commands;
mod datetime;
mod render;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use gigcal_core::config::GigcalConfig;

#[derive(Parser)]
#[command(name = "gigcal")]
#[command(about = "Keep track of gigs and events from the terminal")]
struct Cli {
    /// Events file to operate on (defaults to events_file from config)
    #[arg(short, long, global = true)]
    file: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List all events
    List,
    /// Add a new event
    Add {
        /// Event title (prompted for when omitted)
        title: Option<String>,

        /// Date/time (e.g. "2024-05-01" or "2024-05-01 19:00")
        #[arg(short, long)]
        time: Option<String>,

        /// Event location
        #[arg(short, long)]
        location: Option<String>,
    },
    /// Edit an event by its number
    Edit {
        /// Event number as shown by `gigcal list`
        number: usize,

        /// New title
        #[arg(long)]
        title: Option<String>,

        /// New date/time
        #[arg(long)]
        time: Option<String>,

        /// New location
        #[arg(long)]
        location: Option<String>,
    },
    /// Remove an event by its number
    Remove {
        /// Event number as shown by `gigcal list`
        number: usize,
    },
    /// Show events on a given date
    On {
        /// Date to search (YYYY-MM-DD)
        date: String,
    },
    /// Save a copy of the events to another file
    Save {
        /// Where to write the copy
        path: PathBuf,
    },
    /// Import events from another file and merge them in
    Import {
        /// Events file to import from
        path: PathBuf,
    },
    /// Show or change gigcal configuration
    Config {
        /// Set the default events file
        #[arg(long, value_name = "PATH")]
        set_file: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let events_path = resolve_events_path(cli.file)?;

    match cli.command {
        Commands::List => commands::list::run(&events_path),
        Commands::Add {
            title,
            time,
            location,
        } => commands::add::run(&events_path, title, time, location),
        Commands::Edit {
            number,
            title,
            time,
            location,
        } => commands::edit::run(&events_path, number, title, time, location),
        Commands::Remove { number } => commands::remove::run(&events_path, number),
        Commands::On { date } => commands::on::run(&events_path, &date),
        Commands::Save { path } => commands::save::run(&events_path, &path),
        Commands::Import { path } => commands::import::run(&events_path, &path),
        Commands::Config { set_file } => commands::config::run(set_file),
    }
}

/// `--file` wins; otherwise fall back to the configured events file.
fn resolve_events_path(file: Option<PathBuf>) -> Result<PathBuf> {
    match file {
        Some(path) => Ok(path),
        None => Ok(GigcalConfig::load()?.events_path()),
    }
}
