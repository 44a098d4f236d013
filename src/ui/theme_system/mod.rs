//! Theme system infrastructure
//!
//! This module contains the code behind theming: the theme record and its
//! value types, JSON loading and validation, the built-in variants and the
//! theme registry.
//!
//! The built-in theme literals live in ../themes/

pub mod constants;
pub mod core;
pub mod embedded_themes;
pub mod errors;
pub mod json_theme;
pub mod values;

// Re-export commonly used items
pub use constants::{ColorRole, SizeRole, ThemeConstants};
pub use self::core::{CurrentTheme, ThemeRegistry, ThemeVariant};
pub use errors::ThemeError;
pub use values::{HexColor, InvalidHexColor, PixelSize};
