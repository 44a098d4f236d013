//! Command line interface for ztheme
//!
//! Handles parsing command line arguments and provides
//! validation for user inputs.

use crate::core::config::ConfigFile;
use crate::ui::theme::ThemeVariant;
use clap::Parser;
use std::path::PathBuf;
use tracing::debug;

/// ztheme CLI arguments
///
/// Examples:
///   ztheme                               # Print the active theme as JSON
///   ztheme --theme cool-dark             # Print the cool-dark theme
///   ztheme --list                        # List every available theme
///   ztheme --validate ~/my-theme.json    # Check a theme file
///   ztheme --themes-dir ./themes --list  # Include themes from a directory
///   ztheme --new-config                  # Create ~/.config/ztheme
#[derive(Parser, Debug, Clone, Default)]
#[clap(
    name = "ztheme",
    version,
    about = "Inspect and validate GUI theme constants",
    long_about = "ztheme loads GUI themes (color and font size constants), validates them and prints the active one. Built-in themes are warm-dark and cool-dark; more can be added as JSON files in the user themes directory."
)]
pub struct CliArgs {
    /// Theme to use
    ///
    /// Built-in themes: warm-dark (default), cool-dark.
    /// Any theme file in a themes directory can be selected by its file stem.
    #[clap(
        long = "theme",
        short = 't',
        help = "Theme to use",
        long_help = "Theme to use. Built-in themes: warm-dark (default), cool-dark. Theme files in a themes directory are selected by file name without the .json extension. Names are case-insensitive."
    )]
    pub theme: Option<String>,

    /// Additional directory of theme files
    #[clap(
        long = "themes-dir",
        value_name = "DIR",
        help = "Additional directory of *.json theme files"
    )]
    pub themes_dir: Option<PathBuf>,

    /// List available themes instead of printing the active one
    #[clap(long = "list", short = 'l', help = "List available themes")]
    pub list: bool,

    /// Validate a theme file and exit
    #[clap(
        long = "validate",
        value_name = "FILE",
        conflicts_with_all = ["list", "new_config"],
        help = "Validate a theme file and exit",
        long_help = "Validate a theme file and exit. Every field must be present, colors must be #RRGGBB and pixel sizes must be positive integers. Exits with status 1 if the file is invalid."
    )]
    pub validate: Option<PathBuf>,

    /// Initialize user configuration directory with settings and themes
    ///
    /// This creates the ~/.config/ztheme directory with:
    /// - settings.json: User preferences like default theme
    /// - themes/: Copies of all built-in themes that you can customize
    #[clap(
        long = "new-config",
        help = "Initialize user config directory with settings and themes",
        long_help = "Initialize the ~/.config/ztheme directory with a settings.json file and copies of the built-in themes. This allows you to customize themes and set a default theme without command line arguments."
    )]
    pub new_config: bool,

    /// Log debug output
    #[clap(long = "verbose", short = 'v', help = "Enable debug logging")]
    pub verbose: bool,

    /// Also write logs to ~/.config/ztheme/logs
    #[clap(long = "log-file", help = "Also write logs to the config logs directory")]
    pub log_file: bool,
}

impl CliArgs {
    /// Validate the CLI arguments after parsing
    ///
    /// This ensures that all paths exist before anything is loaded,
    /// providing clear error messages for common mistakes.
    pub fn validate(&self) -> Result<(), String> {
        if let Some(path) = &self.validate {
            if !path.is_file() {
                return Err(format!(
                    "Theme file does not exist: {}\nMake sure the path is correct and the file exists.",
                    path.display()
                ));
            }
        }

        if let Some(dir) = &self.themes_dir {
            if !dir.is_dir() {
                return Err(format!(
                    "Themes directory does not exist: {}\nPass a directory containing .json theme files.",
                    dir.display()
                ));
            }
        }

        if let Some(theme_name) = &self.theme {
            if theme_name.trim().is_empty() {
                return Err("Theme name must not be empty".to_string());
            }
        }

        Ok(())
    }

    /// Get the theme name from CLI args, config file, or default
    ///
    /// Priority order:
    /// 1. CLI argument (--theme)
    /// 2. Config file setting (~/.config/ztheme/settings.json)
    /// 3. Built-in default (warm-dark)
    ///
    /// Built-in names are normalized, so `Cool_Dark` selects `cool-dark`.
    pub fn theme_name(&self, config: Option<&ConfigFile>) -> String {
        if let Some(theme_name) = &self.theme {
            debug!("Using theme from CLI: {}", theme_name);
            return normalize_theme_name(theme_name);
        }

        if let Some(theme_name) = config.and_then(|c| c.default_theme.as_ref()) {
            debug!("Using theme from config file: {}", theme_name);
            return normalize_theme_name(theme_name);
        }

        let default = ThemeVariant::default();
        debug!("Using default theme: {}", default);
        default.name().to_string()
    }

    /// Extra directories scanned for theme files, lowest priority first
    ///
    /// The user themes directory is not included; the runner adds it.
    pub fn theme_dirs(&self, config: Option<&ConfigFile>) -> Vec<PathBuf> {
        let mut dirs = Vec::new();
        if let Some(dir) = config.and_then(|c| c.themes_dir.clone()) {
            dirs.push(dir);
        }
        if let Some(dir) = &self.themes_dir {
            dirs.push(dir.clone());
        }
        dirs
    }
}

fn normalize_theme_name(name: &str) -> String {
    ThemeVariant::parse(name)
        .map(|variant| variant.name().to_string())
        .unwrap_or_else(|| name.trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> CliArgs {
        CliArgs::parse_from(std::iter::once("ztheme").chain(list.iter().copied()))
    }

    #[test]
    fn theme_priority_is_cli_then_config_then_default() {
        let config = ConfigFile {
            default_theme: Some("cool-dark".to_string()),
            themes_dir: None,
        };

        assert_eq!(args(&["--theme", "warm-dark"]).theme_name(Some(&config)), "warm-dark");
        assert_eq!(args(&[]).theme_name(Some(&config)), "cool-dark");
        assert_eq!(args(&[]).theme_name(None), "warm-dark");
        assert_eq!(args(&[]).theme_name(Some(&ConfigFile::default())), "warm-dark");
    }

    #[test]
    fn builtin_names_are_normalized_and_custom_names_kept() {
        assert_eq!(args(&["-t", "COOL_DARK"]).theme_name(None), "cool-dark");
        assert_eq!(args(&["-t", "ocean"]).theme_name(None), "ocean");
    }

    #[test]
    fn cli_themes_dir_has_highest_priority() {
        let config = ConfigFile {
            default_theme: None,
            themes_dir: Some(PathBuf::from("/from/config")),
        };
        let dirs = args(&["--themes-dir", "/from/cli"]).theme_dirs(Some(&config));
        assert_eq!(
            dirs,
            vec![PathBuf::from("/from/config"), PathBuf::from("/from/cli")]
        );
        assert!(args(&[]).theme_dirs(None).is_empty());
    }

    #[test]
    fn validate_rejects_missing_paths() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing.json");
        let cli = args(&["--validate", missing.to_str().unwrap()]);
        assert!(cli.validate().unwrap_err().contains("does not exist"));

        let cli = args(&["--themes-dir", missing.to_str().unwrap()]);
        assert!(cli.validate().is_err());

        let cli = args(&["--themes-dir", dir.path().to_str().unwrap()]);
        assert!(cli.validate().is_ok());
    }

    #[test]
    fn validate_conflicts_with_list() {
        let result = CliArgs::try_parse_from(["ztheme", "--validate", "a.json", "--list"]);
        assert!(result.is_err());
    }
}
