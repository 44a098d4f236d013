//! ztheme
//!
//! Validated, immutable GUI theme constants. Load a theme once, then hand the
//! `CurrentTheme` handle to whatever needs to style something.
pub mod core;
pub mod logging;
pub mod ui;

pub use ui::theme::{
    ColorRole, CurrentTheme, HexColor, PixelSize, SizeRole, ThemeConstants, ThemeError,
    ThemeRegistry, ThemeVariant,
};
