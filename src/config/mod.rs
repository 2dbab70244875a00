// Copyright (C) 2026  Caprica Software Limited
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

//! Application configuration.
//!
//! This module manages the application configuration file.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::hours::OpeningHours;

pub(crate) const CONFIG_NAME: &str = "pizzeria";

const LOG_FILE_NAME: &str = "pizzeria.log";

#[derive(Debug, Error, PartialEq, Eq)]
pub(crate) enum ConfigError {
    #[error("invalid opening hours {open}..{close}, expected open < close <= 24")]
    InvalidOpeningHours { open: u32, close: u32 },
}

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(default)]
pub(crate) struct AppConfig {
    pub(crate) version: u32,
    pub(crate) shop_name: String,
    pub(crate) tagline: String,
    pub(crate) opening_hours: OpeningHours,
    pub(crate) log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            version: 1,
            shop_name: "Ding Rui (Dylan)'s Pizza Co.".to_string(),
            tagline: "Authentic Italian Cuisine".to_string(),
            opening_hours: OpeningHours::default(),
            log_level: "info".to_string(),
        }
    }
}

impl AppConfig {
    pub(crate) fn validate(&self) -> Result<(), ConfigError> {
        let OpeningHours { open, close } = self.opening_hours;
        if open >= close || close > 24 {
            return Err(ConfigError::InvalidOpeningHours { open, close });
        }
        Ok(())
    }
}

pub(crate) fn load_config() -> AppConfig {
    confy::load(CONFIG_NAME, None).unwrap_or_default()
}

/// Location of the log file, alongside the configuration file.
pub(crate) fn log_file_path() -> Result<PathBuf, confy::ConfyError> {
    let config_path = confy::get_configuration_file_path(CONFIG_NAME, None)?;
    Ok(config_path.with_file_name(LOG_FILE_NAME))
}
