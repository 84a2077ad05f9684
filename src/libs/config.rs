//! Application configuration.
//!
//! Settings live in `config.json` inside the platform data directory (see
//! [`DataStorage`]). A missing file is not an error: [`Config::read`] returns
//! the defaults, so the application runs without any setup.
//!
//! ```rust,no_run
//! use productodo::libs::config::Config;
//!
//! let mut config = Config::read()?;
//! config.date_format = "%d.%m.%Y".to_string();
//! config.save()?;
//! # Ok::<(), anyhow::Error>(())
//! ```

use super::data_storage::DataStorage;
use super::messages::Message;
use super::task::Priority;
use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Input, Select};
use serde::{Deserialize, Serialize};
use std::fs::{self, File};
use std::path::{Path, PathBuf};

pub const CONFIG_FILE_NAME: &str = "config.json";

pub const DEFAULT_DATE_FORMAT: &str = "%b %d, %Y";

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Overrides the database location. `PRODUCTODO_DB` still wins.
    pub database_path: Option<PathBuf>,

    /// Priority given to new tasks when `--priority` is omitted.
    pub default_priority: Priority,

    /// `strftime` pattern used when printing due dates.
    pub date_format: String,

    /// Directory for exports without an explicit `--output`.
    pub export_dir: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database_path: None,
            default_priority: Priority::default(),
            date_format: DEFAULT_DATE_FORMAT.to_string(),
            export_dir: None,
        }
    }
}

impl Config {
    pub fn path() -> Result<PathBuf> {
        DataStorage::new().get_path(CONFIG_FILE_NAME)
    }

    pub fn read() -> Result<Config> {
        Self::read_from(Self::path()?)
    }

    pub fn read_from<P: AsRef<Path>>(path: P) -> Result<Config> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(Config::default());
        }

        let config_str = fs::read_to_string(path)?;
        serde_json::from_str(&config_str).map_err(|e| anyhow::Error::msg(Message::ConfigParseError(e.to_string())))
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(Self::path()?)
    }

    pub fn save_to<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let config_file = File::create(path)?;
        serde_json::to_writer_pretty(&config_file, &self)?;
        Ok(())
    }

    /// Interactive setup, prefilled with the current values.
    pub fn init() -> Result<Self> {
        let current = Config::read()?;
        let theme = ColorfulTheme::default();

        let priority_names: Vec<&str> = Priority::ALL.iter().map(Priority::as_str).collect();
        let default_index = Priority::ALL.iter().position(|p| *p == current.default_priority).unwrap_or(1);
        let priority_index = Select::with_theme(&theme)
            .with_prompt(Message::PromptDefaultPriority.to_string())
            .items(&priority_names)
            .default(default_index)
            .interact()?;

        let date_format: String = Input::with_theme(&theme)
            .with_prompt(Message::PromptDateFormat.to_string())
            .default(current.date_format.clone())
            .interact_text()?;

        let database_path: String = Input::with_theme(&theme)
            .with_prompt(Message::PromptDatabasePath.to_string())
            .default(path_to_string(&current.database_path))
            .allow_empty(true)
            .interact_text()?;

        let export_dir: String = Input::with_theme(&theme)
            .with_prompt(Message::PromptExportDir.to_string())
            .default(path_to_string(&current.export_dir))
            .allow_empty(true)
            .interact_text()?;

        Ok(Config {
            database_path: string_to_path(database_path),
            default_priority: Priority::ALL[priority_index],
            date_format,
            export_dir: string_to_path(export_dir),
        })
    }
}

fn path_to_string(path: &Option<PathBuf>) -> String {
    path.as_ref().map(|p| p.display().to_string()).unwrap_or_default()
}

fn string_to_path(value: String) -> Option<PathBuf> {
    let value = value.trim();
    (!value.is_empty()).then(|| PathBuf::from(value))
}
