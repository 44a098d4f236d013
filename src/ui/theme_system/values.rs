//! Validated value types for theme fields
//!
//! A theme only holds two kinds of values: `#RRGGBB` colors and positive
//! pixel sizes. Both are checked once when they are constructed.

use serde::{Serialize, Serializer};
use std::fmt;
use std::num::NonZeroU32;
use std::str::FromStr;

/// A 24-bit color written as `#RRGGBB`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HexColor {
    r: u8,
    g: u8,
    b: u8,
}

/// Why a string was rejected as a hex color.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InvalidHexColor {
    #[error("expected a leading '#'")]
    MissingHash,
    #[error("expected exactly 6 hex digits, found {0}")]
    WrongLength(usize),
    #[error("'{0}' is not a hex digit")]
    NotHex(char),
}

impl HexColor {
    pub const fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub fn rgb(self) -> (u8, u8, u8) {
        (self.r, self.g, self.b)
    }

    /// Channels scaled to `0.0..=1.0`, the form most renderers take.
    pub fn to_srgb_f32(self) -> [f32; 3] {
        [
            f32::from(self.r) / 255.0,
            f32::from(self.g) / 255.0,
            f32::from(self.b) / 255.0,
        ]
    }
}

impl FromStr for HexColor {
    type Err = InvalidHexColor;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let hex = s.strip_prefix('#').ok_or(InvalidHexColor::MissingHash)?;
        if let Some(bad) = hex.chars().find(|c| !c.is_ascii_hexdigit()) {
            return Err(InvalidHexColor::NotHex(bad));
        }
        // All ASCII past this point, so byte slicing is safe
        if hex.len() != 6 {
            return Err(InvalidHexColor::WrongLength(hex.len()));
        }
        let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16);
        match (channel(0), channel(2), channel(4)) {
            (Ok(r), Ok(g), Ok(b)) => Ok(Self { r, g, b }),
            _ => Err(InvalidHexColor::WrongLength(hex.len())),
        }
    }
}

impl fmt::Display for HexColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl PartialEq<str> for HexColor {
    fn eq(&self, other: &str) -> bool {
        other.parse::<HexColor>().is_ok_and(|c| c == *self)
    }
}

impl PartialEq<&str> for HexColor {
    fn eq(&self, other: &&str) -> bool {
        self == *other
    }
}

impl Serialize for HexColor {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// A font size in pixels. Always positive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct PixelSize(NonZeroU32);

impl PixelSize {
    pub fn new(px: u32) -> Option<Self> {
        NonZeroU32::new(px).map(Self)
    }

    pub fn get(self) -> u32 {
        self.0.get()
    }
}

impl fmt::Display for PixelSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}px", self.0)
    }
}

impl PartialEq<u32> for PixelSize {
    fn eq(&self, other: &u32) -> bool {
        self.get() == *other
    }
}
