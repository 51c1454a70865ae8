//! Settings Persistence
//!
//! Locates the configuration file in the platform config directory and loads
//! it, falling back to defaults so a broken file never keeps the editor from
//! opening.

use crate::config::{Config, ScaleSettings};
use crate::error::{SettingsError, SettingsResult};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Directory name under the platform config dir
pub const APP_DIR_NAME: &str = "scalekit";

/// Config file name
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Settings persistence layer
#[derive(Debug, Clone)]
pub struct SettingsPersistence {
    config: Config,
    path: PathBuf,
}

impl SettingsPersistence {
    /// Create persistence for `path` with default settings
    pub fn new(path: PathBuf) -> Self {
        Self {
            config: Config::default(),
            path,
        }
    }

    /// Default config location: `<config_dir>/scalekit/config.toml`
    pub fn default_path() -> SettingsResult<PathBuf> {
        let dir = dirs::config_dir().ok_or_else(|| {
            SettingsError::ConfigDirectory("no config directory on this platform".to_string())
        })?;
        Ok(dir.join(APP_DIR_NAME).join(CONFIG_FILE_NAME))
    }

    /// Load settings from file
    pub fn load_from_file(path: &Path) -> SettingsResult<Self> {
        let config = Config::load_from_file(path)?;
        Ok(Self {
            config,
            path: path.to_path_buf(),
        })
    }

    /// Load settings, or defaults if the file is missing or invalid
    pub fn load_or_default(path: &Path) -> Self {
        if !path.exists() {
            debug!("No settings file at {}, using defaults", path.display());
            return Self::new(path.to_path_buf());
        }

        match Self::load_from_file(path) {
            Ok(persistence) => persistence,
            Err(e) => {
                warn!("Failed to load settings from {}: {}", path.display(), e);
                Self::new(path.to_path_buf())
            }
        }
    }

    /// Save settings, creating the parent directory if needed
    pub fn save(&self) -> SettingsResult<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| SettingsError::ConfigDirectory(format!("{}: {}", parent.display(), e)))?;
        }
        self.config.save_to_file(&self.path)
    }

    /// Path this persistence reads and writes
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Get reference to config
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Get mutable reference to config
    pub fn config_mut(&mut self) -> &mut Config {
        &mut self.config
    }

    /// Scale control settings
    pub fn scale(&self) -> &ScaleSettings {
        &self.config.scale
    }
}
