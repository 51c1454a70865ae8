//! ScaleKit Settings Crate
//!
//! Handles scale control configuration and settings persistence.

pub mod config;
pub mod error;
pub mod persistence;

pub use config::{Config, ScaleSettings, MAX_SHORTCUTS};
pub use error::{ConfigError, SettingsError, SettingsResult};
pub use persistence::SettingsPersistence;
