//! Global gigcal configuration.

use std::path::{Path, PathBuf};

use ::config::{Config, File};
use serde::{Deserialize, Serialize};

use crate::error::{GigcalError, GigcalResult};

static DEFAULT_EVENTS_FILE: &str = "~/events.txt";

fn default_events_file() -> PathBuf {
    PathBuf::from(DEFAULT_EVENTS_FILE)
}

fn is_default_events_file(p: &PathBuf) -> bool {
    *p == default_events_file()
}

/// Global configuration at ~/.config/gigcal/config.toml
#[derive(Serialize, Deserialize, Clone)]
pub struct GigcalConfig {
    /// The events file used when no `--file` flag is given.
    #[serde(
        default = "default_events_file",
        skip_serializing_if = "is_default_events_file"
    )]
    pub events_file: PathBuf,
}

impl Default for GigcalConfig {
    fn default() -> Self {
        GigcalConfig {
            events_file: default_events_file(),
        }
    }
}

impl GigcalConfig {
    pub fn config_path() -> GigcalResult<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| GigcalError::Config("Could not determine config directory".into()))?
            .join("gigcal");

        Ok(config_dir.join("config.toml"))
    }

    /// Load the global config, creating a commented default file on first use.
    pub fn load() -> GigcalResult<Self> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            Self::create_default_config(&config_path)?;
        }

        let config: GigcalConfig = Config::builder()
            .add_source(File::from(config_path).required(false))
            .build()
            .map_err(|e| GigcalError::Config(e.to_string()))?
            .try_deserialize()
            .map_err(|e| GigcalError::Config(e.to_string()))?;

        Ok(config)
    }

    /// The events file path with `~` expanded.
    pub fn events_path(&self) -> PathBuf {
        let full_path_str = shellexpand::tilde(&self.events_file.to_string_lossy()).into_owned();

        PathBuf::from(full_path_str)
    }

    /// Returns the events file path in display-friendly form, keeping `~`
    /// instead of expanding to the full home directory.
    pub fn display_path(&self) -> PathBuf {
        self.events_file.clone()
    }

    /// Save the current config to ~/.config/gigcal/config.toml
    pub fn save(&self) -> GigcalResult<()> {
        let config_path = Self::config_path()?;

        let content =
            toml::to_string_pretty(self).map_err(|e| GigcalError::Config(e.to_string()))?;

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                GigcalError::Config(format!("Could not create config directory: {e}"))
            })?;
        }

        std::fs::write(&config_path, content)
            .map_err(|e| GigcalError::Config(format!("Could not write config file: {e}")))?;

        Ok(())
    }

    /// Create a default config file with all options commented out.
    pub fn create_default_config(path: &Path) -> GigcalResult<()> {
        let contents = format!(
            "\
# gigcal configuration

# Where your events live:
# events_file = \"{}\"
",
            DEFAULT_EVENTS_FILE
        );

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                GigcalError::Config(format!("Could not create config directory: {e}"))
            })?;
        }

        std::fs::write(path, contents)
            .map_err(|e| GigcalError::Config(format!("Could not write config file: {e}")))?;

        Ok(())
    }
}
