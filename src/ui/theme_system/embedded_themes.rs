use std::path::PathBuf;

pub const WARM_DARK_JSON: &str = include_str!("../themes/warm_dark.json");
pub const COOL_DARK_JSON: &str = include_str!("../themes/cool_dark.json");

/// Built-in theme literals keyed by their registry name.
pub fn get_embedded_themes() -> [(&'static str, &'static str); 2] {
    [("warm-dark", WARM_DARK_JSON), ("cool-dark", COOL_DARK_JSON)]
}

pub fn get_user_themes_dir() -> PathBuf {
    crate::core::config::ConfigFile::config_dir().join("themes")
}
