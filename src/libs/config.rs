//! Application configuration.
//!
//! A small JSON file in the platform data directory holding the defaults the
//! CLI falls back to when flags are omitted: the roster file path and the
//! aircraft category to assume for pilots whose profile carries none.
//! `Config::init()` runs the interactive setup wizard.

use super::data_storage::DataStorage;
use crate::libs::duty::AircraftCategory;
use crate::libs::messages::Message;
use crate::msg_success;
use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Input, Select};
use serde::{Deserialize, Serialize};
use std::fs::{self, File};
use std::path::PathBuf;

pub const CONFIG_FILE_NAME: &str = "config.json";

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Config {
    /// Default roster file consulted when --roster is not passed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub roster: Option<PathBuf>,
    /// Category assumed for pilots with no category on record.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_category: Option<AircraftCategory>,
}

impl Config {
    fn path() -> Result<PathBuf> {
        DataStorage::new().get_path(CONFIG_FILE_NAME)
    }

    /// Loads the configuration, falling back to defaults when the file does
    /// not exist yet.
    pub fn read() -> Result<Self> {
        let path = Self::path()?;
        if !path.exists() {
            return Ok(Config::default());
        }
        let file = File::open(&path)?;
        let config = serde_json::from_reader(file)?;
        Ok(config)
    }

    pub fn save(&self) -> Result<()> {
        let path = Self::path()?;
        fs::write(&path, serde_json::to_string_pretty(self)?)?;
        Ok(())
    }

    /// Interactive setup wizard.
    pub fn init() -> Result<Self> {
        let current = Self::read().unwrap_or_default();
        let theme = ColorfulTheme::default();

        let roster: String = Input::with_theme(&theme)
            .with_prompt(Message::PromptRosterPath.to_string())
            .with_initial_text(
                current
                    .roster
                    .as_ref()
                    .map(|p| p.display().to_string())
                    .unwrap_or_default(),
            )
            .allow_empty(true)
            .interact_text()?;

        let categories = ["Helicopter", "Fixed Wing"];
        let selected = Select::with_theme(&theme)
            .with_prompt(Message::PromptAircraftCategory.to_string())
            .items(&categories)
            .default(0)
            .interact()?;

        let config = Config {
            roster: if roster.trim().is_empty() {
                None
            } else {
                Some(PathBuf::from(roster.trim()))
            },
            default_category: Some(if selected == 0 {
                AircraftCategory::Helicopter
            } else {
                AircraftCategory::FixedWing
            }),
        };
        config.save()?;
        msg_success!(Message::ConfigSaved);
        Ok(config)
    }
}
