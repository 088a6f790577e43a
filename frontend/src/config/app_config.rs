//! Application Configuration
//!
//! Logging, call details, camera device and roster, read from
//! `callscreen.toml`. Every key is optional.

use crate::models::{DEFAULT_ROSTER, PortraitSource};
use config_loader::{ConfigError, find_config_file, load_toml};
use logging::LogLevel;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Name looked up by `config_loader`.
pub const CONFIG_FILE: &str = "callscreen.toml";

/// Application configuration structure
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Path to the log file
    pub log_path: PathBuf,
    /// Logging level
    pub log_level: LogLevel,
    /// Mirror log lines to stdout
    pub console_log: bool,

    pub user_name: String,
    pub meeting_code: String,

    pub camera_on_start: bool,
    pub mic_on_start: bool,
    pub camera_device: i32,
    pub camera_fps: f64,

    /// Root holding `women/<n>.jpg` and `men/<n>.jpg`.
    /// Unset means every tile shows its initial.
    pub portraits_dir: Option<PathBuf>,
    pub participants: Vec<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            log_path: PathBuf::from("callscreen.log"),
            log_level: LogLevel::Info,
            console_log: false,
            user_name: "User".to_string(),
            meeting_code: "zfw-fayf-eeo".to_string(),
            camera_on_start: true,
            mic_on_start: true,
            camera_device: 0,
            camera_fps: 30.0,
            portraits_dir: None,
            participants: DEFAULT_ROSTER.iter().map(|name| name.to_string()).collect(),
        }
    }
}

impl AppConfig {
    /// Searches the usual locations for [`CONFIG_FILE`] and parses it.
    ///
    /// Returns the file that was used along with the configuration.
    pub fn load() -> Result<(Self, PathBuf), ConfigError> {
        let path = find_config_file(CONFIG_FILE)?;
        let config = Self::load_from_file(&path)?;
        Ok((config, path))
    }

    pub fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        load_toml(path)
    }

    /// Portrait file for each of the first `count` roster entries, or `None`
    /// when no portrait directory is configured.
    pub fn portrait_paths(&self, count: usize) -> Option<Vec<(usize, PathBuf)>> {
        let root = self.portraits_dir.as_deref()?;
        Some(
            (0..count)
                .map(|index| (index, PortraitSource::for_index(index).path(root)))
                .collect(),
        )
    }
}
