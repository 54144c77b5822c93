//! Demo configuration
//!
//! Configuration is stored as YAML in the user's config directory.
//! Default location: ~/.config/slate-demo/config.yaml

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use slate_widgets::{
    SheetConfig, DEFAULT_DISMISS_POSITION, DEFAULT_MINIMUM_DRAG_DISTANCE, DEFAULT_SHEET_HEIGHT,
};

/// Root configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DemoConfig {
    /// Sheet behavior settings
    pub sheet: SheetSection,
}

/// Sheet configuration section
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SheetSection {
    /// Backdrop dim opacity (0.0 - 1.0)
    pub out_of_focus_opacity: f32,
    /// Downward travel in pixels that dismisses the sheet
    pub minimum_drag_distance: f32,
    /// Absolute pointer position that dismisses regardless of travel
    pub dismiss_position: f32,
    /// Card height in pixels
    pub sheet_height: f32,
}

impl Default for SheetSection {
    fn default() -> Self {
        Self {
            // Lighter dim than the widget default; the demo screen stays readable
            out_of_focus_opacity: 0.2,
            minimum_drag_distance: DEFAULT_MINIMUM_DRAG_DISTANCE,
            dismiss_position: DEFAULT_DISMISS_POSITION,
            sheet_height: DEFAULT_SHEET_HEIGHT,
        }
    }
}

impl DemoConfig {
    /// Build the widget configuration for a window of the given height
    pub fn sheet_config(&self, hidden_offset: f32) -> SheetConfig {
        SheetConfig {
            out_of_focus_opacity: self.sheet.out_of_focus_opacity,
            minimum_drag_distance: self.sheet.minimum_drag_distance,
            dismiss_position: self.sheet.dismiss_position,
            sheet_height: self.sheet.sheet_height,
            hidden_offset,
            ..SheetConfig::default()
        }
    }
}

/// Get the default config file path
///
/// Returns: ~/.config/slate-demo/config.yaml
pub fn default_config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| dirs::home_dir().unwrap_or_else(|| PathBuf::from(".")))
        .join("slate-demo")
        .join("config.yaml")
}

/// Load configuration from a YAML file
///
/// If the file doesn't exist, writes the defaults there so users have a
/// template to edit. If the file exists but is invalid, logs a warning and
/// returns the default config.
pub fn load_config(path: &Path) -> DemoConfig {
    if !path.exists() {
        log::info!("load_config: no config at {:?}, writing defaults", path);
        let config = DemoConfig::default();
        if let Err(e) = save_config(path, &config) {
            log::warn!("load_config: could not write default config: {:#}", e);
        }
        return config;
    }

    match std::fs::read_to_string(path) {
        Ok(contents) => match serde_yaml::from_str::<DemoConfig>(&contents) {
            Ok(config) => {
                log::info!("load_config: loaded {:?}", path);
                config
            }
            Err(e) => {
                log::warn!("load_config: invalid config {:?}: {}, using defaults", path, e);
                DemoConfig::default()
            }
        },
        Err(e) => {
            log::warn!("load_config: could not read {:?}: {}, using defaults", path, e);
            DemoConfig::default()
        }
    }
}

/// Save configuration as YAML
pub fn save_config(path: &Path, config: &DemoConfig) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("creating config directory {:?}", parent))?;
    }
    let yaml = serde_yaml::to_string(config).context("serializing config")?;
    std::fs::write(path, yaml).with_context(|| format!("writing config to {:?}", path))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = DemoConfig::default();
        assert_eq!(config.sheet.out_of_focus_opacity, 0.2);
        assert_eq!(config.sheet.minimum_drag_distance, 150.0);
        assert_eq!(config.sheet.dismiss_position, 200.0);
    }

    #[test]
    fn test_sheet_config_mapping() {
        let config = DemoConfig::default();
        let sheet = config.sheet_config(800.0);
        assert_eq!(sheet.hidden_offset, 800.0);
        assert_eq!(sheet.out_of_focus_opacity, 0.2);
    }

    #[test]
    fn test_yaml_roundtrip() {
        let config = DemoConfig {
            sheet: SheetSection {
                out_of_focus_opacity: 0.5,
                minimum_drag_distance: 120.0,
                dismiss_position: 240.0,
                sheet_height: 400.0,
            },
        };

        let yaml = serde_yaml::to_string(&config).unwrap();
        let parsed: DemoConfig = serde_yaml::from_str(&yaml).unwrap();

        assert_eq!(parsed.sheet.out_of_focus_opacity, 0.5);
        assert_eq!(parsed.sheet.minimum_drag_distance, 120.0);
        assert_eq!(parsed.sheet.dismiss_position, 240.0);
    }

    #[test]
    fn test_partial_yaml_uses_defaults() {
        let parsed: DemoConfig = serde_yaml::from_str("sheet:\n  sheet_height: 280.0\n").unwrap();
        assert_eq!(parsed.sheet.sheet_height, 280.0);
        assert_eq!(parsed.sheet.minimum_drag_distance, 150.0);
    }
}
