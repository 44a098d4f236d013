//! The theme record
//!
//! `ThemeConstants` is the single schema every theme variant instantiates.
//! Fields are private and only exposed through read accessors, so a loaded
//! theme cannot be changed by anyone holding it.

use super::errors::ThemeError;
use super::json_theme::RawTheme;
use super::values::{HexColor, PixelSize};
use serde::Serialize;
use std::fs;
use std::path::Path;
use tracing::debug;

/// Named color slots of a theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColorRole {
    Background,
    Panel,
    PanelBorder,
    Text,
    TextDisabled,
    Accent,
    ButtonNormal,
    ButtonHover,
    ButtonPressed,
    Selection,
    InputBackground,
    InputBorder,
    InputBorderActive,
}

impl ColorRole {
    pub const ALL: [ColorRole; 13] = [
        ColorRole::Background,
        ColorRole::Panel,
        ColorRole::PanelBorder,
        ColorRole::Text,
        ColorRole::TextDisabled,
        ColorRole::Accent,
        ColorRole::ButtonNormal,
        ColorRole::ButtonHover,
        ColorRole::ButtonPressed,
        ColorRole::Selection,
        ColorRole::InputBackground,
        ColorRole::InputBorder,
        ColorRole::InputBorderActive,
    ];

    /// Key used for this slot in theme files.
    pub fn key(self) -> &'static str {
        match self {
            ColorRole::Background => "background",
            ColorRole::Panel => "panel",
            ColorRole::PanelBorder => "panelBorder",
            ColorRole::Text => "text",
            ColorRole::TextDisabled => "textDisabled",
            ColorRole::Accent => "accent",
            ColorRole::ButtonNormal => "buttonNormal",
            ColorRole::ButtonHover => "buttonHover",
            ColorRole::ButtonPressed => "buttonPressed",
            ColorRole::Selection => "selection",
            ColorRole::InputBackground => "inputBackground",
            ColorRole::InputBorder => "inputBorder",
            ColorRole::InputBorderActive => "inputBorderActive",
        }
    }
}

/// Named font size slots of a theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SizeRole {
    Font,
    SmallFont,
    HeaderFont,
}

impl SizeRole {
    pub const ALL: [SizeRole; 3] = [SizeRole::Font, SizeRole::SmallFont, SizeRole::HeaderFont];

    pub fn key(self) -> &'static str {
        match self {
            SizeRole::Font => "fontPixelSize",
            SizeRole::SmallFont => "smallFontPixelSize",
            SizeRole::HeaderFont => "headerFontPixelSize",
        }
    }
}

/// One complete, validated theme.
///
/// Values can only be read. Assigning a field does not compile:
///
/// ```compile_fail
/// use ztheme::{HexColor, ThemeVariant};
///
/// let mut theme = ThemeVariant::WarmDark.load().unwrap();
/// theme.accent = HexColor::from_rgb(0xff, 0x00, 0xff);
/// ```
///
/// ```
/// use ztheme::ThemeVariant;
///
/// let theme = ThemeVariant::WarmDark.load().unwrap();
/// assert_eq!(theme.accent(), "#d07010");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemeConstants {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(super) name: Option<String>,
    pub(super) background: HexColor,
    pub(super) panel: HexColor,
    pub(super) panel_border: HexColor,
    pub(super) text: HexColor,
    pub(super) text_disabled: HexColor,
    pub(super) accent: HexColor,
    pub(super) button_normal: HexColor,
    pub(super) button_hover: HexColor,
    pub(super) button_pressed: HexColor,
    pub(super) selection: HexColor,
    pub(super) input_background: HexColor,
    pub(super) input_border: HexColor,
    pub(super) input_border_active: HexColor,
    pub(super) font_pixel_size: PixelSize,
    pub(super) small_font_pixel_size: PixelSize,
    pub(super) header_font_pixel_size: PixelSize,
}

impl ThemeConstants {
    /// Parse and validate a theme literal.
    pub fn from_json_str(content: &str) -> Result<Self, ThemeError> {
        let raw: RawTheme = serde_json::from_str(content)?;
        raw.validate()
    }

    /// Read and validate a theme file.
    pub fn from_path(path: &Path) -> Result<Self, ThemeError> {
        let content = fs::read_to_string(path).map_err(|source| ThemeError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let theme = Self::from_json_str(&content)?;
        debug!("Loaded theme from {:?}", path);
        Ok(theme)
    }

    /// Render the theme back into its file format.
    pub fn to_json_pretty(&self) -> Result<String, ThemeError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Display name, if the theme literal carried one.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn background(&self) -> HexColor {
        self.background
    }

    pub fn panel(&self) -> HexColor {
        self.panel
    }

    pub fn panel_border(&self) -> HexColor {
        self.panel_border
    }

    pub fn text(&self) -> HexColor {
        self.text
    }

    pub fn text_disabled(&self) -> HexColor {
        self.text_disabled
    }

    pub fn accent(&self) -> HexColor {
        self.accent
    }

    pub fn button_normal(&self) -> HexColor {
        self.button_normal
    }

    pub fn button_hover(&self) -> HexColor {
        self.button_hover
    }

    pub fn button_pressed(&self) -> HexColor {
        self.button_pressed
    }

    /// List selection highlight background.
    pub fn selection(&self) -> HexColor {
        self.selection
    }

    pub fn input_background(&self) -> HexColor {
        self.input_background
    }

    pub fn input_border(&self) -> HexColor {
        self.input_border
    }

    /// Text field border while focused.
    pub fn input_border_active(&self) -> HexColor {
        self.input_border_active
    }

    pub fn font_pixel_size(&self) -> PixelSize {
        self.font_pixel_size
    }

    pub fn small_font_pixel_size(&self) -> PixelSize {
        self.small_font_pixel_size
    }

    pub fn header_font_pixel_size(&self) -> PixelSize {
        self.header_font_pixel_size
    }

    pub fn color(&self, role: ColorRole) -> HexColor {
        match role {
            ColorRole::Background => self.background,
            ColorRole::Panel => self.panel,
            ColorRole::PanelBorder => self.panel_border,
            ColorRole::Text => self.text,
            ColorRole::TextDisabled => self.text_disabled,
            ColorRole::Accent => self.accent,
            ColorRole::ButtonNormal => self.button_normal,
            ColorRole::ButtonHover => self.button_hover,
            ColorRole::ButtonPressed => self.button_pressed,
            ColorRole::Selection => self.selection,
            ColorRole::InputBackground => self.input_background,
            ColorRole::InputBorder => self.input_border,
            ColorRole::InputBorderActive => self.input_border_active,
        }
    }

    pub fn pixel_size(&self, role: SizeRole) -> PixelSize {
        match role {
            SizeRole::Font => self.font_pixel_size,
            SizeRole::SmallFont => self.small_font_pixel_size,
            SizeRole::HeaderFont => self.header_font_pixel_size,
        }
    }

    /// Every color slot in schema order.
    pub fn colors(&self) -> impl Iterator<Item = (ColorRole, HexColor)> + '_ {
        ColorRole::ALL
            .into_iter()
            .map(move |role| (role, self.color(role)))
    }

    /// Every size slot in schema order.
    pub fn pixel_sizes(&self) -> impl Iterator<Item = (SizeRole, PixelSize)> + '_ {
        SizeRole::ALL
            .into_iter()
            .map(move |role| (role, self.pixel_size(role)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = include_str!("../themes/warm_dark.json");

    #[test]
    fn accessors_match_role_lookup() {
        let theme = ThemeConstants::from_json_str(SAMPLE).unwrap();
        assert_eq!(theme.color(ColorRole::Accent), theme.accent());
        assert_eq!(theme.color(ColorRole::PanelBorder), theme.panel_border());
        assert_eq!(
            theme.pixel_size(SizeRole::HeaderFont),
            theme.header_font_pixel_size()
        );
        assert_eq!(theme.colors().count(), ColorRole::ALL.len());
        assert_eq!(theme.pixel_sizes().count(), 3);
    }

    #[test]
    fn json_output_uses_file_keys_and_reloads_identically() {
        let theme = ThemeConstants::from_json_str(SAMPLE).unwrap();
        let json = theme.to_json_pretty().unwrap();
        for role in ColorRole::ALL {
            assert!(json.contains(&format!("\"{}\"", role.key())), "{json}");
        }
        for role in SizeRole::ALL {
            assert!(json.contains(&format!("\"{}\"", role.key())), "{json}");
        }
        assert_eq!(ThemeConstants::from_json_str(&json).unwrap(), theme);
    }

    #[test]
    fn from_path_reports_missing_files() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.json");
        match ThemeConstants::from_path(&missing) {
            Err(ThemeError::Io { path, .. }) => assert_eq!(path, missing),
            other => panic!("expected Io error, got {other:?}"),
        }
    }

    #[test]
    fn from_path_reads_theme_files() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("warm.json");
        std::fs::write(&path, SAMPLE).unwrap();
        let theme = ThemeConstants::from_path(&path).unwrap();
        assert_eq!(theme.name(), Some("Warm Dark"));
    }
}
