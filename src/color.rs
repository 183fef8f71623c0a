//! Color values: RGB/hex conversion, brightness adjustment and validation.
//!
//! Colors enter the toolkit in two textual shapes, a `[r, g, b]` triple or a
//! six-digit hex string. [`ColorValue`] keeps that distinction as a tagged
//! union decided at parse time; [`Color`] is the resolved, always-valid form
//! every widget works with.

use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Errors produced while validating or parsing a color.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ColorError {
    #[error("color component {component} is out of range 0-255: {value}")]
    OutOfRange { component: &'static str, value: i64 },
    #[error("hex color must have exactly 6 digits: '{0}'")]
    InvalidHexLength(String),
    #[error("hex color contains a non-hex digit: '{0}'")]
    InvalidHexDigit(String),
}

// ---------------------------------------------------------------------------
// Color
// ---------------------------------------------------------------------------

/// An opaque RGB color.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const WHITE: Color = Color::rgb(255, 255, 255);

    /// Create a color from already-valid channels.
    #[inline]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Create a color from wide integer components, rejecting anything
    /// outside 0-255.
    pub fn from_rgb_components(r: i64, g: i64, b: i64) -> Result<Self, ColorError> {
        validate_rgb(r, g, b)?;
        Ok(Self::rgb(r as u8, g as u8, b as u8))
    }

    /// Parse a `#rrggbb` or `rrggbb` string.
    pub fn from_hex(hex: &str) -> Result<Self, ColorError> {
        validate_color_str(hex)?;
        let digits = hex.strip_prefix('#').unwrap_or(hex);
        let channel = |i: usize| {
            u8::from_str_radix(&digits[i..i + 2], 16)
                .map_err(|_| ColorError::InvalidHexDigit(hex.to_owned()))
        };
        Ok(Self::rgb(channel(0)?, channel(2)?, channel(4)?))
    }

    /// Lowercase `#rrggbb` representation.
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Add `offset` to every channel, clamping each to 0-255.
    ///
    /// Offsets are expected in -255..=255; anything beyond saturates.
    pub fn with_brightness(self, offset: i32) -> Self {
        let shift = |c: u8| i32::from(c).saturating_add(offset).clamp(0, 255) as u8;
        Self::rgb(shift(self.r), shift(self.g), shift(self.b))
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl FromStr for Color {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Color::from_hex(s)
    }
}

impl From<(u8, u8, u8)> for Color {
    fn from((r, g, b): (u8, u8, u8)) -> Self {
        Color::rgb(r, g, b)
    }
}

// ---------------------------------------------------------------------------
// ColorValue
// ---------------------------------------------------------------------------

/// A color as written in a theme file or by a caller, before validation.
///
/// Deserializes from either a `[r, g, b]` array or a hex string.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum ColorValue {
    Rgb([i64; 3]),
    Hex(String),
}

impl ColorValue {
    /// Validate and convert into a [`Color`].
    pub fn resolve(&self) -> Result<Color, ColorError> {
        match self {
            ColorValue::Rgb([r, g, b]) => Color::from_rgb_components(*r, *g, *b),
            ColorValue::Hex(hex) => Color::from_hex(hex),
        }
    }
}

impl From<Color> for ColorValue {
    fn from(color: Color) -> Self {
        ColorValue::Rgb([color.r as i64, color.g as i64, color.b as i64])
    }
}

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

/// Check that every component of an RGB triple is within 0-255.
pub fn validate_rgb(r: i64, g: i64, b: i64) -> Result<(), ColorError> {
    for (component, value) in [("red", r), ("green", g), ("blue", b)] {
        if !(0..=255).contains(&value) {
            return Err(ColorError::OutOfRange { component, value });
        }
    }
    Ok(())
}

/// Check that `s` is a six-digit hex color, optionally prefixed with `#`.
pub fn validate_color_str(s: &str) -> Result<(), ColorError> {
    let digits = s.strip_prefix('#').unwrap_or(s);
    if digits.chars().count() != 6 {
        return Err(ColorError::InvalidHexLength(s.to_owned()));
    }
    if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(ColorError::InvalidHexDigit(s.to_owned()));
    }
    Ok(())
}

// ===========================================================================
// Tests
// ===========================================================================
