//! Theme loading errors
//!
//! Every failure happens at load time. Once a `ThemeConstants` exists it is
//! valid, so nothing downstream of construction returns these.

use std::path::PathBuf;

/// Error that can occur when building a theme from its literal form.
#[derive(Debug, thiserror::Error)]
pub enum ThemeError {
    /// A field holds a value outside its declared type's valid range.
    #[error("Malformed value for '{field}': {value} ({reason})")]
    MalformedValue {
        field: &'static str,
        value: String,
        reason: String,
    },

    /// A mandatory field is absent from the theme literal.
    #[error("Missing required field in theme: {0}")]
    MissingField(&'static str),

    /// The theme literal is not valid JSON or has unexpected keys.
    #[error("Invalid theme JSON: {0}")]
    Parse(#[from] serde_json::Error),

    /// A theme file could not be read.
    #[error("Failed to read theme file {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// No theme is registered under the requested name.
    #[error("Unknown theme: '{name}'\nAvailable themes: {available}")]
    UnknownTheme { name: String, available: String },
}

impl ThemeError {
    pub(crate) fn malformed(
        field: &'static str,
        value: impl ToString,
        reason: impl Into<String>,
    ) -> Self {
        Self::MalformedValue {
            field,
            value: value.to_string(),
            reason: reason.into(),
        }
    }

    /// The field this error refers to, when it is about a single field.
    pub fn field(&self) -> Option<&'static str> {
        match self {
            Self::MalformedValue { field, .. } | Self::MissingField(field) => Some(field),
            _ => None,
        }
    }
}
