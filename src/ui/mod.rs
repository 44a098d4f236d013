//! User interface theming

pub mod theme;
pub mod theme_system;
