//! Configuration for the scale control
//!
//! Settings are read once by the composition root and handed to the scale
//! control as a plain value. Keys match the setting ids shown in the host's
//! mod settings page, so a file can be written by hand:
//!
//! ```toml
//! [scale]
//! scale-hack = true
//! shortcut-amount = 3
//! shortcut-one = 0.25
//! ```
//!
//! Missing keys take their defaults. Supports JSON and TOML.

use crate::error::{ConfigError, ConfigResult, SettingsError, SettingsResult};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Most shortcut buttons a row can hold
pub const MAX_SHORTCUTS: usize = 5;

/// Upper bound for `scale-rounding`
pub const MAX_ROUNDING: i64 = 10;

/// Scale control settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct ScaleSettings {
    /// Add numeric text inputs next to the sliders
    pub scale_input_enabled: bool,
    /// Scale each selected object's own transform instead of the editor's
    pub scale_hack: bool,
    /// Maximum characters accepted by an input
    #[serde(rename = "scale-max-characters")]
    pub max_characters: i64,
    /// Fractional digits shown in the inputs
    pub scale_rounding: i64,
    /// Show preset shortcut buttons
    #[serde(rename = "scale-shortcuts-enabled")]
    pub shortcuts_enabled: bool,
    /// Number of shortcut buttons per row (0-5)
    pub shortcut_amount: i64,
    /// Give the X and Y rows their own shortcut buttons
    #[serde(rename = "x-y-shortcuts-enabled")]
    pub xy_shortcuts_enabled: bool,
    pub shortcut_one: f64,
    pub shortcut_two: f64,
    pub shortcut_three: f64,
    pub shortcut_four: f64,
    pub shortcut_five: f64,
}

impl Default for ScaleSettings {
    fn default() -> Self {
        Self {
            scale_input_enabled: true,
            scale_hack: false,
            max_characters: 6,
            scale_rounding: 3,
            shortcuts_enabled: true,
            shortcut_amount: 5,
            xy_shortcuts_enabled: true,
            shortcut_one: 0.5,
            shortcut_two: 1.0,
            shortcut_three: 1.5,
            shortcut_four: 2.0,
            shortcut_five: 3.0,
        }
    }
}

impl ScaleSettings {
    /// All five preset values in button order
    pub fn shortcut_values(&self) -> [f32; MAX_SHORTCUTS] {
        [
            self.shortcut_one as f32,
            self.shortcut_two as f32,
            self.shortcut_three as f32,
            self.shortcut_four as f32,
            self.shortcut_five as f32,
        ]
    }

    /// Presets actually shown, limited to `shortcut_amount`
    pub fn active_shortcuts(&self) -> Vec<f32> {
        let amount = self.shortcut_count();
        self.shortcut_values()[..amount].to_vec()
    }

    /// `shortcut_amount` clamped into `0..=5`
    pub fn shortcut_count(&self) -> usize {
        self.shortcut_amount.clamp(0, MAX_SHORTCUTS as i64) as usize
    }

    /// Fractional digits for input display
    pub fn rounding(&self) -> i32 {
        self.scale_rounding.clamp(0, MAX_ROUNDING) as i32
    }

    /// Validate ranges
    pub fn validate(&self) -> ConfigResult<()> {
        if self.max_characters < 1 {
            return Err(out_of_range("scale-max-characters", self.max_characters));
        }

        if !(0..=MAX_ROUNDING).contains(&self.scale_rounding) {
            return Err(out_of_range("scale-rounding", self.scale_rounding));
        }

        if !(0..=MAX_SHORTCUTS as i64).contains(&self.shortcut_amount) {
            return Err(out_of_range("shortcut-amount", self.shortcut_amount));
        }

        let names = [
            "shortcut-one",
            "shortcut-two",
            "shortcut-three",
            "shortcut-four",
            "shortcut-five",
        ];
        for (name, value) in names.iter().zip(self.shortcut_values()) {
            if !value.is_finite() {
                return Err(out_of_range(name, value));
            }
        }

        Ok(())
    }
}

fn out_of_range(key: &str, value: impl ToString) -> ConfigError {
    ConfigError::ValueOutOfRange {
        key: key.to_string(),
        value: value.to_string(),
    }
}

/// Complete configuration file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Config {
    /// Scale control settings
    #[serde(default)]
    pub scale: ScaleSettings,
}

impl Config {
    /// Create new config with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Load config from file (JSON or TOML)
    pub fn load_from_file(path: &Path) -> SettingsResult<Self> {
        let content = std::fs::read_to_string(path)?;

        let config: Self = if path.extension().is_some_and(|ext| ext == "json") {
            serde_json::from_str(&content)?
        } else if path.extension().is_some_and(|ext| ext == "toml") {
            toml::from_str(&content)?
        } else {
            return Err(unsupported_format(path));
        };

        config.validate()?;
        Ok(config)
    }

    /// Save config to file (JSON or TOML)
    pub fn save_to_file(&self, path: &Path) -> SettingsResult<()> {
        self.validate()?;

        let content = if path.extension().is_some_and(|ext| ext == "json") {
            serde_json::to_string_pretty(self)?
        } else if path.extension().is_some_and(|ext| ext == "toml") {
            toml::to_string_pretty(self)?
        } else {
            return Err(unsupported_format(path));
        };

        std::fs::write(path, content)
            .map_err(|e| SettingsError::SaveError(format!("{}: {}", path.display(), e)))?;

        Ok(())
    }

    /// Validate configuration
    pub fn validate(&self) -> ConfigResult<()> {
        self.scale.validate()
    }
}

fn unsupported_format(path: &Path) -> SettingsError {
    let ext = path
        .extension()
        .map(|e| e.to_string_lossy().into_owned())
        .unwrap_or_default();
    ConfigError::UnsupportedFormat(ext).into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let settings = ScaleSettings::default();
        assert!(settings.validate().is_ok());
        assert_eq!(settings.shortcut_count(), 5);
        assert_eq!(settings.active_shortcuts(), vec![0.5, 1.0, 1.5, 2.0, 3.0]);
    }

    #[test]
    fn test_active_shortcuts_follow_amount() {
        let settings = ScaleSettings {
            shortcut_amount: 2,
            ..Default::default()
        };
        assert_eq!(settings.active_shortcuts(), vec![0.5, 1.0]);

        let none = ScaleSettings {
            shortcut_amount: 0,
            ..Default::default()
        };
        assert!(none.active_shortcuts().is_empty());
    }

    #[test]
    fn test_validation_rejects_out_of_range() {
        let settings = ScaleSettings {
            shortcut_amount: 6,
            ..Default::default()
        };
        assert!(matches!(
            settings.validate(),
            Err(ConfigError::ValueOutOfRange { ref key, .. }) if key == "shortcut-amount"
        ));

        let settings = ScaleSettings {
            max_characters: 0,
            ..Default::default()
        };
        assert!(settings.validate().is_err());

        let settings = ScaleSettings {
            shortcut_three: f64::NAN,
            ..Default::default()
        };
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_kebab_case_keys_with_defaults() {
        let config: Config = toml::from_str(
            r#"
            [scale]
            scale-hack = true
            scale-max-characters = 8
            x-y-shortcuts-enabled = false
            shortcut-amount = 3
            shortcut-one = 0.25
            "#,
        )
        .unwrap();

        assert!(config.scale.scale_hack);
        assert_eq!(config.scale.max_characters, 8);
        assert!(!config.scale.xy_shortcuts_enabled);
        assert_eq!(config.scale.active_shortcuts(), vec![0.25, 1.0, 1.5]);
        assert!(config.scale.scale_input_enabled);
    }

    #[test]
    fn test_empty_document_is_default() {
        let config: Config = serde_json::from_str("{}").unwrap();
        assert_eq!(config, Config::default());
    }
}
