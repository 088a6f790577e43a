//! Configuration Module
//!
//! Handles application configuration loading and management.

mod app_config;

pub use app_config::{AppConfig, CONFIG_FILE};
