//! JSON theme literal parsing
//!
//! Theme files are deserialized into `RawTheme` first, where every field is
//! optional and untyped. `validate` then turns that into a `ThemeConstants`
//! so absent keys and bad values come back as typed errors instead of a
//! generic serde message.

use super::constants::ThemeConstants;
use super::errors::ThemeError;
use super::values::{HexColor, InvalidHexColor, PixelSize};
use serde::Deserialize;
use serde_json::Value;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub(crate) struct RawTheme {
    #[serde(default)]
    name: Option<String>,
    background: Option<Value>,
    panel: Option<Value>,
    panel_border: Option<Value>,
    text: Option<Value>,
    text_disabled: Option<Value>,
    accent: Option<Value>,
    button_normal: Option<Value>,
    button_hover: Option<Value>,
    button_pressed: Option<Value>,
    selection: Option<Value>,
    input_background: Option<Value>,
    input_border: Option<Value>,
    input_border_active: Option<Value>,
    font_pixel_size: Option<Value>,
    small_font_pixel_size: Option<Value>,
    header_font_pixel_size: Option<Value>,
}

impl RawTheme {
    pub(crate) fn validate(self) -> Result<ThemeConstants, ThemeError> {
        Ok(ThemeConstants {
            name: self.name,
            background: color("background", self.background)?,
            panel: color("panel", self.panel)?,
            panel_border: color("panelBorder", self.panel_border)?,
            text: color("text", self.text)?,
            text_disabled: color("textDisabled", self.text_disabled)?,
            accent: color("accent", self.accent)?,
            button_normal: color("buttonNormal", self.button_normal)?,
            button_hover: color("buttonHover", self.button_hover)?,
            button_pressed: color("buttonPressed", self.button_pressed)?,
            selection: color("selection", self.selection)?,
            input_background: color("inputBackground", self.input_background)?,
            input_border: color("inputBorder", self.input_border)?,
            input_border_active: color("inputBorderActive", self.input_border_active)?,
            font_pixel_size: pixel_size("fontPixelSize", self.font_pixel_size)?,
            small_font_pixel_size: pixel_size("smallFontPixelSize", self.small_font_pixel_size)?,
            header_font_pixel_size: pixel_size(
                "headerFontPixelSize",
                self.header_font_pixel_size,
            )?,
        })
    }
}

// A JSON `null` counts as absent.
fn color(field: &'static str, value: Option<Value>) -> Result<HexColor, ThemeError> {
    match value.ok_or(ThemeError::MissingField(field))? {
        Value::String(s) => s
            .parse()
            .map_err(|e: InvalidHexColor| ThemeError::malformed(field, &s, e.to_string())),
        other => Err(ThemeError::malformed(
            field,
            other,
            "expected a \"#RRGGBB\" string",
        )),
    }
}

fn pixel_size(field: &'static str, value: Option<Value>) -> Result<PixelSize, ThemeError> {
    let value = value.ok_or(ThemeError::MissingField(field))?;
    let Some(px) = value.as_i64() else {
        return Err(ThemeError::malformed(
            field,
            value,
            "expected an integer pixel size",
        ));
    };
    if px <= 0 {
        return Err(ThemeError::malformed(field, px, "must be positive"));
    }
    u32::try_from(px)
        .ok()
        .and_then(PixelSize::new)
        .ok_or_else(|| ThemeError::malformed(field, px, "too large"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn complete() -> serde_json::Map<String, Value> {
        let value = json!({
            "background": "#1e1e1e",
            "panel": "#2b2b2b",
            "panelBorder": "#3e3e3e",
            "text": "#d4d4d4",
            "textDisabled": "#707070",
            "accent": "#d07010",
            "buttonNormal": "#353535",
            "buttonHover": "#454545",
            "buttonPressed": "#202020",
            "selection": "#404040",
            "inputBackground": "#151515",
            "inputBorder": "#3e3e3e",
            "inputBorderActive": "#d07010",
            "fontPixelSize": 12,
            "smallFontPixelSize": 10,
            "headerFontPixelSize": 16
        });
        match value {
            Value::Object(map) => map,
            _ => unreachable!(),
        }
    }

    fn load(map: serde_json::Map<String, Value>) -> Result<ThemeConstants, ThemeError> {
        ThemeConstants::from_json_str(&Value::Object(map).to_string())
    }

    #[test]
    fn complete_literal_loads_without_name() {
        let theme = load(complete()).unwrap();
        assert_eq!(theme.name(), None);
        assert_eq!(theme.accent(), "#d07010");
        assert_eq!(theme.small_font_pixel_size().get(), 10);
    }

    #[test]
    fn every_field_is_mandatory() {
        for key in complete().keys() {
            let mut map = complete();
            map.remove(key);
            match load(map) {
                Err(ThemeError::MissingField(field)) => assert_eq!(field, key),
                other => panic!("removing {key} gave {other:?}"),
            }
        }
    }

    #[test]
    fn null_is_treated_as_missing() {
        let mut map = complete();
        map.insert("selection".into(), Value::Null);
        assert!(matches!(
            load(map),
            Err(ThemeError::MissingField("selection"))
        ));
    }

    #[test]
    fn malformed_colors_are_rejected() {
        for bad in [json!("#abc"), json!("#12345g"), json!("d07010"), json!(42)] {
            let mut map = complete();
            map.insert("accent".into(), bad.clone());
            let err = load(map).unwrap_err();
            assert!(
                matches!(err, ThemeError::MalformedValue { field: "accent", .. }),
                "{bad} gave {err:?}"
            );
        }
    }

    #[test]
    fn non_positive_or_fractional_sizes_are_rejected() {
        for bad in [json!(0), json!(-4), json!(12.5), json!("12"), json!(5_000_000_000i64)] {
            let mut map = complete();
            map.insert("fontPixelSize".into(), bad.clone());
            let err = load(map).unwrap_err();
            assert_eq!(err.field(), Some("fontPixelSize"), "{bad} gave {err:?}");
        }
    }

    #[test]
    fn unknown_keys_are_a_parse_error() {
        let mut map = complete();
        map.insert("accentColour".into(), json!("#ffffff"));
        assert!(matches!(load(map), Err(ThemeError::Parse(_))));
    }

    #[test]
    fn error_messages_name_the_field_and_value() {
        let mut map = complete();
        map.insert("buttonHover".into(), json!("#45454"));
        let message = load(map).unwrap_err().to_string();
        assert!(message.contains("buttonHover"), "{message}");
        assert!(message.contains("#45454"), "{message}");
    }
}
