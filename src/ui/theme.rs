//! UI Theme Interface
//!
//! Main entry point for the theme system. Everything consumers need is
//! re-exported here.
//!
//! To add a theme, drop a JSON file with every field of `ThemeConstants`
//! into the user themes directory (see `ztheme --new-config`).

pub use crate::ui::theme_system::{
    embedded_themes::get_user_themes_dir, ColorRole, CurrentTheme, HexColor, InvalidHexColor,
    PixelSize, SizeRole, ThemeConstants, ThemeError, ThemeRegistry, ThemeVariant,
};
