//! Configuration management for grind.
//!
//! Settings live in `config.json` inside the data directory resolved by
//! [`DataStorage`]. Every section is optional so a fresh install works with
//! no file at all; missing sections fall back to their defaults.
//!
//! The completion API key is deliberately *not* part of the file. It is read
//! from the `GROQ_API_KEY` environment variable, which `main` populates from
//! a `.env` file when one is present.
//!
//! ```rust,no_run
//! use grind::libs::config::Config;
//!
//! let config = Config::read()?;
//! let llm = config.llm_or_default();
//! println!("model: {}", llm.model);
//! # Ok::<(), anyhow::Error>(())
//! ```

use super::data_storage::DataStorage;
use crate::libs::messages::Message;
use crate::msg_print;
use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Input, MultiSelect};
use serde::{Deserialize, Serialize};
use std::fs::{self, File};
use std::path::PathBuf;

pub const CONFIG_FILE_NAME: &str = "config.json";

/// Environment variable holding the completion API key.
pub const API_KEY_ENV: &str = "GROQ_API_KEY";

pub const DEFAULT_API_URL: &str = "https://api.groq.com/openai/v1/chat/completions";
pub const DEFAULT_MODEL: &str = "llama-3.3-70b-versatile";
pub const DEFAULT_DB_FILE_NAME: &str = "grind.db";

/// Settings for the OpenAI-compatible chat completion endpoint.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct LlmConfig {
    /// Full URL of the chat completions endpoint.
    pub api_url: String,
    pub model: String,
    /// Per-request timeout.
    pub timeout_secs: u64,
    #[serde(default = "default_temperature")]
    pub temperature: f32,
    /// Extra attempts after a transient failure. Off unless configured.
    #[serde(default)]
    pub retries: u32,
}

fn default_temperature() -> f32 {
    0.7
}

impl Default for LlmConfig {
    fn default() -> Self {
        LlmConfig {
            api_url: DEFAULT_API_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
            timeout_secs: 30,
            temperature: default_temperature(),
            retries: 0,
        }
    }
}

/// Where the SQLite database lives. A relative path is resolved against the
/// data directory.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct StorageConfig {
    pub database: PathBuf,
}

impl Default for StorageConfig {
    fn default() -> Self {
        StorageConfig {
            database: PathBuf::from(DEFAULT_DB_FILE_NAME),
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, Default)]
pub struct Config {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub llm: Option<LlmConfig>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub storage: Option<StorageConfig>,
}

impl Config {
    /// Reads the configuration from the default data directory.
    pub fn read() -> Result<Config> {
        Self::read_from(&DataStorage::new())
    }

    /// Reads the configuration from `storage`, returning defaults when no
    /// file exists yet.
    pub fn read_from(storage: &DataStorage) -> Result<Config> {
        let config_file_path = storage.get_path(CONFIG_FILE_NAME)?;
        if !config_file_path.exists() {
            return Ok(Config::default());
        }

        let config_str = fs::read_to_string(config_file_path)?;
        let config: Config = serde_json::from_str(&config_str)?;
        Ok(config)
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&DataStorage::new())
    }

    pub fn save_to(&self, storage: &DataStorage) -> Result<()> {
        let config_file_path = storage.get_path(CONFIG_FILE_NAME)?;
        let config_file = File::create(config_file_path)?;
        serde_json::to_writer_pretty(&config_file, &self)?;
        Ok(())
    }

    pub fn llm_or_default(&self) -> LlmConfig {
        self.llm.clone().unwrap_or_default()
    }

    /// Absolute path of the database file for `storage`.
    pub fn database_path(&self, storage: &DataStorage) -> Result<PathBuf> {
        let database = self.storage.clone().unwrap_or_default().database;
        if database.is_absolute() {
            return Ok(database);
        }
        Ok(storage.get_path(&database.to_string_lossy())?)
    }

    /// The completion API key, if one is available in the environment.
    pub fn api_key() -> Option<String> {
        std::env::var(API_KEY_ENV).ok().filter(|key| !key.trim().is_empty())
    }

    /// Interactive setup wizard. Existing values are offered as defaults.
    pub fn init() -> Result<Self> {
        let mut config = Self::read().unwrap_or_default();

        let modules = [Message::ConfigModuleLlm.to_string(), Message::ConfigModuleStorage.to_string()];
        let selected = MultiSelect::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptSelectModules.to_string())
            .items(&modules)
            .interact()?;

        for selection in selected {
            match selection {
                0 => {
                    let default = config.llm_or_default();
                    msg_print!(Message::ConfigModuleLlm);
                    config.llm = Some(LlmConfig {
                        api_url: Input::with_theme(&ColorfulTheme::default())
                            .with_prompt(Message::PromptApiUrl.to_string())
                            .default(default.api_url)
                            .interact_text()?,
                        model: Input::with_theme(&ColorfulTheme::default())
                            .with_prompt(Message::PromptModel.to_string())
                            .default(default.model)
                            .interact_text()?,
                        timeout_secs: Input::with_theme(&ColorfulTheme::default())
                            .with_prompt(Message::PromptTimeout.to_string())
                            .default(default.timeout_secs)
                            .interact_text()?,
                        temperature: default.temperature,
                        retries: Input::with_theme(&ColorfulTheme::default())
                            .with_prompt(Message::PromptRetries.to_string())
                            .default(default.retries)
                            .interact_text()?,
                    });
                }
                1 => {
                    let default = config.storage.clone().unwrap_or_default();
                    msg_print!(Message::ConfigModuleStorage);
                    let database: String = Input::with_theme(&ColorfulTheme::default())
                        .with_prompt(Message::PromptDatabaseFile.to_string())
                        .default(default.database.display().to_string())
                        .interact_text()?;
                    config.storage = Some(StorageConfig {
                        database: PathBuf::from(database),
                    });
                }
                _ => {}
            }
        }

        Ok(config)
    }
}
