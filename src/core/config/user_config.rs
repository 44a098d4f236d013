//! User configuration file handling
//!
//! Manages settings from ~/.config/ztheme/settings.json

use crate::ui::theme_system::embedded_themes;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// User configuration from ~/.config/ztheme/settings.json
///
/// These settings override built-in defaults but are overridden by CLI arguments
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct ConfigFile {
    /// Default theme to use (e.g., "warm-dark", "cool-dark")
    pub default_theme: Option<String>,
    /// Extra directory scanned for theme files
    #[serde(default)]
    pub themes_dir: Option<PathBuf>,
}

impl ConfigFile {
    /// Get the path to the ztheme config directory
    pub fn config_dir() -> PathBuf {
        let config_dir = dirs::config_dir()
            .unwrap_or_else(|| dirs::home_dir().unwrap_or_else(|| PathBuf::from(".")));
        config_dir.join("ztheme")
    }

    /// Get the path to the user config file
    pub fn config_path() -> PathBuf {
        Self::config_dir().join("settings.json")
    }

    /// Load configuration from the user config file
    pub fn load() -> Option<Self> {
        Self::load_from(&Self::config_path())
    }

    /// Load configuration from `path`, logging and ignoring unreadable files
    pub fn load_from(path: &Path) -> Option<Self> {
        if !path.exists() {
            return None;
        }

        match fs::read_to_string(path) {
            Ok(contents) => match serde_json::from_str(&contents) {
                Ok(config) => {
                    debug!("Loaded user settings from {:?}", path);
                    Some(config)
                }
                Err(e) => {
                    warn!("Failed to parse {:?}: {}", path, e);
                    None
                }
            },
            Err(e) => {
                warn!("Failed to read {:?}: {}", path, e);
                None
            }
        }
    }

    /// Save configuration to the user config file
    pub fn save(&self) -> anyhow::Result<()> {
        self.save_to(&Self::config_path())
    }

    pub fn save_to(&self, path: &Path) -> anyhow::Result<()> {
        // Create parent directory if it doesn't exist
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let contents = serde_json::to_string_pretty(self)?;
        fs::write(path, contents)?;

        debug!("Saved settings to {:?}", path);
        Ok(())
    }

    /// Initialize the complete user configuration directory
    pub fn initialize_config_directory() -> anyhow::Result<()> {
        Self::initialize_in(&Self::config_dir())
    }

    /// Initialize a configuration directory at `config_dir`
    ///
    /// This creates:
    /// 1. The directory itself
    /// 2. A settings.json file with default values
    /// 3. A themes/ directory with copies of all embedded themes
    /// 4. A logs/ directory for application logs
    ///
    /// Existing files are left untouched.
    pub fn initialize_in(config_dir: &Path) -> anyhow::Result<()> {
        fs::create_dir_all(config_dir)?;
        println!("Created config directory: {:?}", config_dir);

        let logs_dir = config_dir.join("logs");
        fs::create_dir_all(&logs_dir)?;
        println!("Created logs directory: {:?}", logs_dir);

        let settings_path = config_dir.join("settings.json");
        if !settings_path.exists() {
            let example = ConfigFile {
                default_theme: Some(crate::ui::theme::ThemeVariant::default().name().to_string()),
                themes_dir: None,
            };
            example.save_to(&settings_path)?;
            println!("Created settings file: {:?}", settings_path);
        } else {
            println!("Settings file already exists: {:?}", settings_path);
        }

        let themes_dir = config_dir.join("themes");
        fs::create_dir_all(&themes_dir)?;
        println!("Created themes directory: {:?}", themes_dir);

        for (name, content) in embedded_themes::get_embedded_themes() {
            let theme_path = themes_dir.join(format!("{}.json", name));
            if !theme_path.exists() {
                fs::write(&theme_path, content)?;
                println!("  - Copied theme: {}.json", name);
            } else {
                println!("  - Theme already exists: {}.json", name);
            }
        }

        println!("\nConfiguration initialized successfully!");
        println!("You can now:");
        println!("  - Edit settings at: {:?}", settings_path);
        println!("  - Customize themes in: {:?}", themes_dir);
        println!("  - View application logs in: {:?}", logs_dir);

        Ok(())
    }
}
