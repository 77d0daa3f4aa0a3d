// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, including loading and saving
//! user preferences to a `settings.toml` file.
//!
//! # Examples
//!
//! ```no_run
//! use movie_maker::config::{self, Config, ThemePreference};
//! use std::path::PathBuf;
//!
//! // Load existing configuration
//! let mut config = config::load().unwrap_or_default();
//!
//! // Modify a setting
//! config.theme = Some(ThemePreference::Light);
//!
//! // Save the modified configuration
//! config::save(&config).expect("Failed to save config");
//!
//! // To load/save from a specific path (e.g., for testing)
//! let temp_file = PathBuf::from("./temp_config_dir/test_settings.toml");
//! config::save_to_path(&config, &temp_file).expect("Failed to save to path");
//! let loaded = config::load_from_path(&temp_file).expect("Failed to load from path");
//! assert_eq!(loaded.theme, Some(ThemePreference::Light));
//! ```

pub mod defaults;

pub use defaults::*;

use crate::error::Result;
use crate::icon::{IconSize, IconUrlTemplate, Theme};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";
const APP_NAME: &str = "RuurdMovieMaker";

/// Which icon variant the user wants by default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemePreference {
    #[default]
    Dark,
    Light,
    /// Follow the desktop's light/dark setting.
    System,
}

impl ThemePreference {
    /// Resolves the preference to a concrete theme.
    ///
    /// `System` asks the desktop; when it cannot tell, the dark theme is used.
    #[must_use]
    pub fn resolve(self) -> Theme {
        match self {
            ThemePreference::Dark => Theme::Dark,
            ThemePreference::Light => Theme::Light,
            ThemePreference::System => match dark_light::detect() {
                Ok(dark_light::Mode::Light) => Theme::Light,
                Ok(_) => Theme::Dark,
                Err(err) => {
                    tracing::debug!("System theme detection failed: {err}");
                    Theme::Dark
                }
            },
        }
    }

    /// Parses a command-line value (`dark`, `light`, `system`).
    pub fn from_arg(value: &str) -> Option<Self> {
        match value.to_ascii_lowercase().as_str() {
            "dark" => Some(ThemePreference::Dark),
            "light" => Some(ThemePreference::Light),
            "system" | "auto" => Some(ThemePreference::System),
            _ => None,
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub theme: Option<ThemePreference>,
    #[serde(default)]
    pub icon_size: Option<u32>,
    #[serde(default)]
    pub icon_url_template: Option<String>,
    #[serde(default)]
    pub max_icon_bytes: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            theme: Some(ThemePreference::Dark),
            icon_size: Some(DEFAULT_ICON_SIZE),
            icon_url_template: None,
            max_icon_bytes: Some(DEFAULT_MAX_ICON_BYTES),
        }
    }
}

impl Config {
    /// Square icon size, clamped to the supported range.
    #[must_use]
    pub fn icon_size(&self) -> IconSize {
        IconSize::square(self.icon_size.unwrap_or(DEFAULT_ICON_SIZE))
    }

    /// URL template for icon identifiers.
    ///
    /// # Errors
    ///
    /// Returns a config error if a custom template lacks `{icon}`.
    pub fn url_template(&self) -> Result<IconUrlTemplate> {
        match &self.icon_url_template {
            Some(template) => IconUrlTemplate::new(template.clone()),
            None => Ok(IconUrlTemplate::default()),
        }
    }

    #[must_use]
    pub fn max_icon_bytes(&self) -> u64 {
        self.max_icon_bytes.unwrap_or(DEFAULT_MAX_ICON_BYTES)
    }

    #[must_use]
    pub fn theme(&self) -> ThemePreference {
        self.theme.unwrap_or_default()
    }
}

fn get_default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path.push(CONFIG_FILE);
        path
    })
}

pub fn load() -> Result<Config> {
    if let Some(path) = get_default_config_path() {
        if path.exists() {
            return load_from_path(&path);
        }
    }
    Ok(Config::default())
}

pub fn save(config: &Config) -> Result<()> {
    if let Some(path) = get_default_config_path() {
        return save_to_path(config, &path);
    }
    Ok(())
}

pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    match toml::from_str(&content) {
        Ok(config) => Ok(config),
        Err(err) => {
            tracing::warn!("Ignoring invalid settings at {}: {err}", path.display());
            Ok(Config::default())
        }
    }
}

pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}
