//! Application runner logic
//!
//! Handles the different things the ztheme binary can do

use crate::core::config::{CliArgs, ConfigFile};
use crate::ui::theme::{get_user_themes_dir, ThemeConstants, ThemeRegistry};
use anyhow::{Context, Result};
use std::io::{self, Write};
use std::path::Path;
use tracing::{info, warn};

/// Run the application with the given CLI arguments.
/// Handles special CLI flags and delegates to `execute`.
pub fn run_app(cli_args: CliArgs) -> Result<()> {
    cli_args.validate().map_err(anyhow::Error::msg)?;

    // Handle --new-config flag specially
    if cli_args.new_config {
        return ConfigFile::initialize_config_directory()
            .context("Failed to initialize config directory");
    }

    let config = ConfigFile::load();
    let user_themes_dir = get_user_themes_dir();
    let stdout = io::stdout();
    execute(
        &cli_args,
        config.as_ref(),
        Some(&user_themes_dir),
        &mut stdout.lock(),
    )
}

/// Validate, list or print themes, writing results to `out`.
///
/// `user_themes_dir` is scanned before any directory the arguments or
/// settings name.
pub fn execute(
    cli_args: &CliArgs,
    config: Option<&ConfigFile>,
    user_themes_dir: Option<&Path>,
    out: &mut impl Write,
) -> Result<()> {
    if let Some(path) = &cli_args.validate {
        return validate_theme_file(path, out);
    }

    let registry = build_registry(cli_args, config, user_themes_dir)?;
    let theme_name = cli_args.theme_name(config);

    if cli_args.list {
        // Listing still works when the configured theme is gone
        let active = registry.get(&theme_name);
        if active.is_none() {
            warn!("Active theme '{}' is not available", theme_name);
        }
        let active_name = active.as_ref().map(|theme| theme.name());
        for name in registry.names() {
            let marker = if Some(name) == active_name { "*" } else { " " };
            writeln!(out, "{marker} {name}")?;
        }
        return Ok(());
    }

    let current = registry.select(&theme_name)?;
    info!("Active theme: {}", current.name());
    writeln!(out, "{}", current.to_json_pretty()?)?;
    Ok(())
}

/// Built-in themes plus the user themes directory and every themes
/// directory the arguments and settings name.
pub fn build_registry(
    cli_args: &CliArgs,
    config: Option<&ConfigFile>,
    user_themes_dir: Option<&Path>,
) -> Result<ThemeRegistry> {
    let mut registry = ThemeRegistry::with_builtins().context("Built-in themes are invalid")?;
    let dirs = user_themes_dir
        .map(Path::to_path_buf)
        .into_iter()
        .chain(cli_args.theme_dirs(config));
    for dir in dirs {
        // Bad files are logged by the registry and skipped
        let skipped = registry.load_dir(&dir);
        if !skipped.is_empty() {
            info!("{} theme file(s) in {:?} were skipped", skipped.len(), dir);
        }
    }
    Ok(registry)
}

fn validate_theme_file(path: &Path, out: &mut impl Write) -> Result<()> {
    let theme = ThemeConstants::from_path(path)
        .with_context(|| format!("Invalid theme file: {}", path.display()))?;
    let label = theme.name().unwrap_or("unnamed");
    writeln!(out, "ok: {} ({label})", path.display())?;
    Ok(())
}
