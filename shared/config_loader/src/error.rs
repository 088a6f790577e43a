use thiserror::Error;

/// Result type used across the crate
pub type Result<T> = std::result::Result<T, ConfigError>;

/// Errors that can occur while loading configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    /// No configuration file exists at any searched location
    #[error("Configuration file not found: {0}")]
    FileNotFound(String),

    /// The file exists but could not be read
    #[error("Failed to read configuration file: {0}")]
    ReadError(String),

    /// The file content is not valid TOML for the target type
    #[error("Invalid configuration in {path}: {reason}")]
    ParseError { path: String, reason: String },
}
