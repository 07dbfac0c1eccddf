//! Configuration loader plus strongly typed settings structures.
//!
//! The default `config.toml` is embedded at compile time and extracted to the
//! data directory on first run. Keybinds are validated (and critical ones
//! auto-fixed) every time a config is loaded.

use crate::core::key_roles::{key_event_to_string, normalize_keybind, KeyRole};
use anyhow::{Context, Result};
use crossterm::event::KeyEvent;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub mod keybind_validator;

// Embed default configuration at compile time
const DEFAULT_CONFIG: &str = include_str!("../defaults/config.toml");

/// Environment variable overriding the data directory
pub const DATA_DIR_ENV: &str = "BIOSHSIM_DIR";

/// Top-level configuration object
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub keybinds: Keybinds,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    #[serde(default = "default_poll_timeout_ms")]
    pub poll_timeout_ms: u64, // Event poll timeout in milliseconds
    #[serde(default = "default_show_status_clock")]
    pub show_status_clock: bool,
    #[serde(default = "default_title")]
    pub title: String, // Banner line above the menus
    #[serde(default = "default_status_suffix")]
    pub status_suffix: String, // Simulated hardware info after the clock
    #[serde(default = "default_theme")]
    pub theme: String, // "award", "ami" or "mono"
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            poll_timeout_ms: default_poll_timeout_ms(),
            show_status_clock: default_show_status_clock(),
            title: default_title(),
            status_suffix: default_status_suffix(),
            theme: default_theme(),
        }
    }
}

fn default_poll_timeout_ms() -> u64 {
    50
}

fn default_show_status_clock() -> bool {
    true
}

fn default_title() -> String {
    "CMOS Setup Utility - Copyright (C) 1984-2000 Award Software".to_string()
}

fn default_status_suffix() -> String {
    "HDD: None | FDD: 1.44M".to_string()
}

fn default_theme() -> String {
    "award".to_string()
}

/// Physical key bound to each logical role
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Keybinds {
    // Navigation
    #[serde(default = "default_up")]
    pub up: String,
    #[serde(default = "default_down")]
    pub down: String,

    // Selection
    #[serde(default = "default_confirm")]
    pub confirm: String,
    #[serde(default = "default_cancel")]
    pub cancel: String,

    // Function keys
    #[serde(default = "default_help")]
    pub help: String,
    #[serde(default = "default_quick_save")]
    pub quick_save: String,

    // Value editing
    #[serde(default = "default_increment_value")]
    pub increment_value: String,
    #[serde(default = "default_decrement_value")]
    pub decrement_value: String,

    // Y/N prompts
    #[serde(default = "default_confirm_yes")]
    pub confirm_yes: String,
    #[serde(default = "default_confirm_no")]
    pub confirm_no: String,
}

fn default_up() -> String {
    Keybinds::default_binding(KeyRole::Up).to_string()
}
fn default_down() -> String {
    Keybinds::default_binding(KeyRole::Down).to_string()
}
fn default_confirm() -> String {
    Keybinds::default_binding(KeyRole::Confirm).to_string()
}
fn default_cancel() -> String {
    Keybinds::default_binding(KeyRole::Cancel).to_string()
}
fn default_help() -> String {
    Keybinds::default_binding(KeyRole::Help).to_string()
}
fn default_quick_save() -> String {
    Keybinds::default_binding(KeyRole::QuickSave).to_string()
}
fn default_increment_value() -> String {
    Keybinds::default_binding(KeyRole::IncrementValue).to_string()
}
fn default_decrement_value() -> String {
    Keybinds::default_binding(KeyRole::DecrementValue).to_string()
}
fn default_confirm_yes() -> String {
    Keybinds::default_binding(KeyRole::ConfirmYes).to_string()
}
fn default_confirm_no() -> String {
    Keybinds::default_binding(KeyRole::ConfirmNo).to_string()
}

impl Default for Keybinds {
    fn default() -> Self {
        Self {
            up: default_up(),
            down: default_down(),
            confirm: default_confirm(),
            cancel: default_cancel(),
            help: default_help(),
            quick_save: default_quick_save(),
            increment_value: default_increment_value(),
            decrement_value: default_decrement_value(),
            confirm_yes: default_confirm_yes(),
            confirm_no: default_confirm_no(),
        }
    }
}

impl Keybinds {
    pub fn default_binding(role: KeyRole) -> &'static str {
        match role {
            KeyRole::Up => "Up",
            KeyRole::Down => "Down",
            KeyRole::Confirm => "Enter",
            KeyRole::Cancel => "Esc",
            KeyRole::Help => "F1",
            KeyRole::QuickSave => "F10",
            KeyRole::IncrementValue => "+",
            KeyRole::DecrementValue => "-",
            KeyRole::ConfirmYes => "y",
            KeyRole::ConfirmNo => "n",
        }
    }

    pub fn binding(&self, role: KeyRole) -> &str {
        match role {
            KeyRole::Up => &self.up,
            KeyRole::Down => &self.down,
            KeyRole::Confirm => &self.confirm,
            KeyRole::Cancel => &self.cancel,
            KeyRole::Help => &self.help,
            KeyRole::QuickSave => &self.quick_save,
            KeyRole::IncrementValue => &self.increment_value,
            KeyRole::DecrementValue => &self.decrement_value,
            KeyRole::ConfirmYes => &self.confirm_yes,
            KeyRole::ConfirmNo => &self.confirm_no,
        }
    }

    pub fn binding_mut(&mut self, role: KeyRole) -> &mut String {
        match role {
            KeyRole::Up => &mut self.up,
            KeyRole::Down => &mut self.down,
            KeyRole::Confirm => &mut self.confirm,
            KeyRole::Cancel => &mut self.cancel,
            KeyRole::Help => &mut self.help,
            KeyRole::QuickSave => &mut self.quick_save,
            KeyRole::IncrementValue => &mut self.increment_value,
            KeyRole::DecrementValue => &mut self.decrement_value,
            KeyRole::ConfirmYes => &mut self.confirm_yes,
            KeyRole::ConfirmNo => &mut self.confirm_no,
        }
    }

    /// Every role bound to this key, in `KeyRole::ALL` order
    ///
    /// More than one role comes back only when the config binds a key twice;
    /// the input router then picks the first one the modal mode allows.
    pub fn roles_for(&self, key: KeyEvent) -> Vec<KeyRole> {
        let key_str = key_event_to_string(key);
        if key_str.is_empty() {
            return Vec::new();
        }

        KeyRole::ALL
            .into_iter()
            .filter(|role| {
                let bound = self.binding(*role);
                !bound.trim().is_empty() && normalize_keybind(bound) == key_str
            })
            .collect()
    }
}

impl Config {
    /// Parse a config document; missing tables and fields take their defaults
    pub fn parse(contents: &str) -> Result<Self> {
        toml::from_str(contents).context("Failed to parse config")
    }

    /// Load `config.toml` from the data directory, extracting the embedded
    /// default on first run
    pub fn load_with_options(data_dir: Option<&Path>) -> Result<Self> {
        Self::extract_defaults(data_dir)?;
        let path = Self::config_path(data_dir)?;
        Self::load_from_path(&path)
    }

    /// Load config from a custom file path
    pub fn load_from_path(path: &Path) -> Result<Self> {
        let contents =
            fs::read_to_string(path).context(format!("Failed to read config file: {:?}", path))?;
        let mut config: Config = toml::from_str(&contents)
            .context(format!("Failed to parse config file: {:?}", path))?;

        tracing::info!("Loaded config from {:?}", path);
        config.fix_keybinds();
        Ok(config)
    }

    /// Validate keybinds, restoring defaults for missing critical ones
    fn fix_keybinds(&mut self) {
        let validation = keybind_validator::validate_keybinds(&self.keybinds);
        if validation.has_errors() {
            tracing::warn!(
                "Keybind validation found {} errors",
                validation.errors().len()
            );
            for error in validation.errors() {
                tracing::warn!("  {}", error.message());
            }

            let fixed = keybind_validator::auto_fix_keybinds(&mut self.keybinds, &validation.issues);
            if fixed > 0 {
                tracing::info!("Auto-fixed {} keybind issues", fixed);
            }
        }
        if validation.has_warnings() {
            for warning in validation.warnings() {
                tracing::warn!("Keybind warning: {}", warning.message());
            }
        }
    }

    /// Write the embedded default config on first run
    fn extract_defaults(data_dir: Option<&Path>) -> Result<()> {
        let dir = Self::config_dir(data_dir)?;
        fs::create_dir_all(&dir).context(format!("Failed to create data directory {:?}", dir))?;

        let config_path = dir.join("config.toml");
        if !config_path.exists() {
            fs::write(&config_path, DEFAULT_CONFIG).context("Failed to write config.toml")?;
            tracing::info!("Extracted default config to {:?}", config_path);
        }

        Ok(())
    }

    /// Get the data directory (~/.bioshsim/)
    /// An explicit directory wins, then the BIOSHSIM_DIR environment variable
    pub fn config_dir(data_dir: Option<&Path>) -> Result<PathBuf> {
        if let Some(dir) = data_dir {
            return Ok(dir.to_path_buf());
        }

        if let Ok(custom_dir) = std::env::var(DATA_DIR_ENV) {
            return Ok(PathBuf::from(custom_dir));
        }

        let home = dirs::home_dir().context("Could not find home directory")?;
        Ok(home.join(".bioshsim"))
    }

    /// Returns: ~/.bioshsim/config.toml
    pub fn config_path(data_dir: Option<&Path>) -> Result<PathBuf> {
        Ok(Self::config_dir(data_dir)?.join("config.toml"))
    }

    /// Returns: ~/.bioshsim/debug.log
    pub fn log_path(data_dir: Option<&Path>) -> Result<PathBuf> {
        Ok(Self::config_dir(data_dir)?.join("debug.log"))
    }
}
