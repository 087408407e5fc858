//! Configuration management for the manabi application.
//!
//! The configuration is a small JSON file in the platform data directory. It
//! carries the local account id (the stand-in for the hosted deployment's
//! session identity) and an optional workbook directory override. Everything
//! else the application needs lives in the workbook's settings sheet, which
//! an administrator edits directly.

use super::data_storage::DataStorage;
use crate::libs::messages::Message;
use crate::msg_error_anyhow;
use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Input};
use serde::{Deserialize, Serialize};
use std::fs::{self, File};
use std::path::PathBuf;

pub const CONFIG_FILE_NAME: &str = "config.json";

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct Config {
    /// Account id used to attribute submissions and resolve the dashboard.
    pub user_id: Option<String>,
    /// Workbook directory; the platform data dir when unset.
    pub data_dir: Option<PathBuf>,
}

impl Config {
    /// Reads the configuration file, falling back to defaults when absent.
    pub fn read() -> Result<Self> {
        let config_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;
        if !config_path.exists() {
            return Ok(Config::default());
        }
        let file = File::open(&config_path).map_err(|_| msg_error_anyhow!(Message::ConfigFileNotFound))?;
        let config = serde_json::from_reader(file).map_err(|_| msg_error_anyhow!(Message::ConfigParseError))?;
        Ok(config)
    }

    pub fn save(&self) -> Result<()> {
        let config_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;
        let contents = serde_json::to_string_pretty(self).map_err(|_| msg_error_anyhow!(Message::ConfigSaveError))?;
        fs::write(&config_path, contents).map_err(|_| msg_error_anyhow!(Message::ConfigSaveError))?;
        Ok(())
    }

    /// Interactive setup wizard, starting from the current values.
    pub fn init() -> Result<Self> {
        let current = Config::read().unwrap_or_default();

        let user_id: String = Input::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptUserId.to_string())
            .default(current.user_id.clone().unwrap_or_default())
            .allow_empty(true)
            .interact_text()?;

        let data_dir: String = Input::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptDataDir.to_string())
            .default(
                current
                    .data_dir
                    .as_ref()
                    .map(|p| p.display().to_string())
                    .unwrap_or_default(),
            )
            .allow_empty(true)
            .interact_text()?;

        Ok(Config {
            user_id: Some(user_id).filter(|s| !s.trim().is_empty()),
            data_dir: Some(data_dir).filter(|s| !s.trim().is_empty()).map(PathBuf::from),
        })
    }

    /// Removes the configuration file, if present.
    pub fn delete() -> Result<()> {
        let config_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;
        if config_path.exists() {
            fs::remove_file(config_path)?;
        }
        Ok(())
    }
}
