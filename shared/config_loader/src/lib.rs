//! # Config Loader
//!
//! Locates configuration files and parses them from TOML.
//!
//! ```no_run
//! use config_loader::{find_config_file, load_toml};
//! use serde::Deserialize;
//!
//! #[derive(Deserialize)]
//! struct MyConfig {
//!     name: String,
//! }
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let path = find_config_file("my_app.toml")?;
//!     let config: MyConfig = load_toml(&path)?;
//!     println!("{}", config.name);
//!     Ok(())
//! }
//! ```

pub mod error;

pub use error::{ConfigError, Result};

use serde::de::DeserializeOwned;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// Environment variable that overrides the search.
pub const CONFIG_PATH_ENV: &str = "CONFIG_PATH";

/// Reads a configuration file to a string without interpreting it.
pub fn load_config_file<P: AsRef<Path>>(path: P) -> Result<String> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(ConfigError::FileNotFound(path.display().to_string()));
    }

    fs::read_to_string(path).map_err(|e| ConfigError::ReadError(e.to_string()))
}

/// Parses TOML text into `T`. `origin` only labels errors.
pub fn parse_toml<T: DeserializeOwned>(content: &str, origin: &str) -> Result<T> {
    toml::from_str(content).map_err(|e| ConfigError::ParseError {
        path: origin.to_string(),
        reason: e.message().to_string(),
    })
}

/// Reads and parses a TOML file into `T`.
pub fn load_toml<T: DeserializeOwned, P: AsRef<Path>>(path: P) -> Result<T> {
    let path = path.as_ref();
    let content = load_config_file(path)?;
    parse_toml(&content, &path.display().to_string())
}

/// Candidate locations for `filename`, in search order:
/// 1. `CONFIG_PATH` environment variable (if set)
/// 2. `./config/{filename}`
/// 3. `./{filename}`
/// 4. `{platform config dir}/{app_dir}/{filename}`
pub fn candidate_paths(filename: &str, app_dir: &str) -> Vec<PathBuf> {
    let mut paths = Vec::new();

    if let Ok(path) = env::var(CONFIG_PATH_ENV) {
        paths.push(PathBuf::from(path));
    }

    paths.push(PathBuf::from("./config").join(filename));
    paths.push(PathBuf::from("./").join(filename));

    if let Some(dir) = dirs::config_dir() {
        paths.push(dir.join(app_dir).join(filename));
    }

    paths
}

/// Returns the first existing candidate from [`candidate_paths`].
pub fn find_config_file_in(filename: &str, app_dir: &str) -> Result<PathBuf> {
    let candidates = candidate_paths(filename, app_dir);

    candidates
        .iter()
        .find(|path| path.exists())
        .cloned()
        .ok_or_else(|| {
            let searched: Vec<String> = candidates
                .iter()
                .map(|p| p.display().to_string())
                .collect();
            ConfigError::FileNotFound(format!(
                "'{}' not found. Searched: {}",
                filename,
                searched.join(", ")
            ))
        })
}

/// Like [`find_config_file_in`] using the file stem as the app directory.
pub fn find_config_file(filename: &str) -> Result<PathBuf> {
    let app_dir = Path::new(filename)
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or(filename);
    find_config_file_in(filename, app_dir)
}
