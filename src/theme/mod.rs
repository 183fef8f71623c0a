//! Themes: named, immutable palettes of semantic colors.
//!
//! A [`Theme`] carries twelve base colors (primary/secondary/background/
//! surface/error and their `on-*` counterparts) plus a table of signed
//! brightness offsets keyed by interaction state. Widgets derive their
//! per-state colors by shifting a base color by the matching offset.
//!
//! Themes are decoded from JSON or TOML files with the keys listed in
//! [`REQUIRED_KEYS`]; a file missing any of them is rejected.

pub mod builtin;
pub mod registry;

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use indexmap::IndexMap;
use serde::Deserialize;

use crate::color::{Color, ColorError, ColorValue};

pub use registry::ThemeRegistry;

/// Every key a theme file must define.
pub const REQUIRED_KEYS: [&str; 13] = [
    "primary",
    "primary-variant",
    "secondary",
    "secondary-variant",
    "background",
    "surface",
    "error",
    "on-primary",
    "on-secondary",
    "on-background",
    "on-surface",
    "on-error",
    "brightness-offsets",
];

/// Name of the theme used when a lookup misses.
pub const DEFAULT_THEME_NAME: &str = "default";

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Errors produced while building, loading or registering themes.
#[derive(Debug, thiserror::Error)]
pub enum ThemeError {
    #[error("theme '{theme}' is missing required key '{key}'")]
    MissingKey { theme: String, key: &'static str },
    #[error("theme '{theme}' has an invalid color for '{key}': {source}")]
    InvalidColor {
        theme: String,
        key: &'static str,
        source: ColorError,
    },
    #[error("theme name must not be empty")]
    EmptyName,
    #[error("default theme '{0}' is not registered")]
    DefaultMissing(String),
    #[error("a theme named '{0}' is already registered")]
    Duplicate(String),
    #[error("failed to decode theme '{theme}' as JSON: {source}")]
    Json {
        theme: String,
        source: serde_json::Error,
    },
    #[error("failed to decode theme '{theme}' as TOML: {source}")]
    Toml {
        theme: String,
        source: toml::de::Error,
    },
    #[error("failed to read theme file {}: {source}", .path.display())]
    Io { path: PathBuf, source: io::Error },
    #[error("unsupported theme file {}, expected .json or .toml", .0.display())]
    UnsupportedFormat(PathBuf),
}

// ---------------------------------------------------------------------------
// ThemeColors
// ---------------------------------------------------------------------------

/// The twelve semantic base colors of a theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ThemeColors {
    pub primary: Color,
    pub primary_variant: Color,
    pub secondary: Color,
    pub secondary_variant: Color,
    pub background: Color,
    pub surface: Color,
    pub error: Color,
    pub on_primary: Color,
    pub on_secondary: Color,
    pub on_background: Color,
    pub on_surface: Color,
    pub on_error: Color,
}

/// Optional descriptive metadata carried by a theme file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ThemeInfo {
    #[serde(default)]
    pub author: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

// ---------------------------------------------------------------------------
// Theme
// ---------------------------------------------------------------------------

/// A named palette of semantic colors and state brightness offsets.
///
/// Themes are immutable once built; widgets share them through
/// `Rc<Theme>` handles obtained from a [`ThemeRegistry`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    name: String,
    colors: ThemeColors,
    brightness_offsets: IndexMap<String, i32>,
    info: Option<ThemeInfo>,
}

impl Theme {
    /// Build a theme from already-validated parts.
    ///
    /// The name is normalized to lowercase.
    pub fn new(
        name: &str,
        colors: ThemeColors,
        brightness_offsets: IndexMap<String, i32>,
    ) -> Result<Self, ThemeError> {
        let name = normalize_name(name);
        if name.is_empty() {
            return Err(ThemeError::EmptyName);
        }
        log::debug!("created theme '{name}'");
        Ok(Self {
            name,
            colors,
            brightness_offsets,
            info: None,
        })
    }

    /// Attach descriptive metadata.
    pub fn with_info(mut self, info: ThemeInfo) -> Self {
        self.info = Some(info);
        self
    }

    /// Decode a theme from a JSON document.
    pub fn from_json_str(name: &str, json: &str) -> Result<Self, ThemeError> {
        let file: ThemeFile = serde_json::from_str(json).map_err(|source| ThemeError::Json {
            theme: name.to_owned(),
            source,
        })?;
        file.into_theme(name)
    }

    /// Decode a theme from a TOML document.
    pub fn from_toml_str(name: &str, toml_src: &str) -> Result<Self, ThemeError> {
        let file: ThemeFile = toml::from_str(toml_src).map_err(|source| ThemeError::Toml {
            theme: name.to_owned(),
            source,
        })?;
        file.into_theme(name)
    }

    /// Load a theme file, naming the theme after the file stem.
    ///
    /// The format is chosen by extension: `.json` or `.toml`.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ThemeError> {
        let path = path.as_ref();
        let name = path
            .file_stem()
            .and_then(|s| s.to_str())
            .ok_or_else(|| ThemeError::UnsupportedFormat(path.to_path_buf()))?;
        let format = path.extension().and_then(|s| s.to_str()).map(str::to_ascii_lowercase);
        let read = || {
            fs::read_to_string(path).map_err(|source| ThemeError::Io {
                path: path.to_path_buf(),
                source,
            })
        };
        match format.as_deref() {
            Some("json") => Self::from_json_str(name, &read()?),
            Some("toml") => Self::from_toml_str(name, &read()?),
            _ => Err(ThemeError::UnsupportedFormat(path.to_path_buf())),
        }
    }

    /// The theme's unique, lowercase name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The semantic base colors.
    pub fn colors(&self) -> &ThemeColors {
        &self.colors
    }

    /// Descriptive metadata, if the theme file carried any.
    pub fn info(&self) -> Option<&ThemeInfo> {
        self.info.as_ref()
    }

    /// All brightness offsets, in file order.
    pub fn brightness_offsets(&self) -> &IndexMap<String, i32> {
        &self.brightness_offsets
    }

    /// The signed brightness offset for `state`, or 0 if the theme does not
    /// define one.
    pub fn brightness_offset(&self, state: &str) -> i32 {
        match self.brightness_offsets.get(state) {
            Some(offset) => *offset,
            None => {
                log::warn!("theme '{}' has no brightness offset for '{state}', using 0", self.name);
                0
            }
        }
    }

    /// `base` shifted by the brightness offset for `state`.
    pub fn shade(&self, base: Color, state: &str) -> Color {
        base.with_brightness(self.brightness_offset(state))
    }
}

pub(crate) fn normalize_name(name: &str) -> String {
    name.trim().to_lowercase()
}

// ---------------------------------------------------------------------------
// Theme file decoding
// ---------------------------------------------------------------------------

/// On-disk theme shape. Every key is optional here so that a missing one can
/// be reported by name instead of as a generic decode error.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
struct ThemeFile {
    primary: Option<ColorValue>,
    primary_variant: Option<ColorValue>,
    secondary: Option<ColorValue>,
    secondary_variant: Option<ColorValue>,
    background: Option<ColorValue>,
    surface: Option<ColorValue>,
    error: Option<ColorValue>,
    on_primary: Option<ColorValue>,
    on_secondary: Option<ColorValue>,
    on_background: Option<ColorValue>,
    on_surface: Option<ColorValue>,
    on_error: Option<ColorValue>,
    brightness_offsets: Option<IndexMap<String, i32>>,
    info: Option<ThemeInfo>,
}

impl ThemeFile {
    fn into_theme(self, name: &str) -> Result<Theme, ThemeError> {
        let color = |value: Option<ColorValue>, key: &'static str| -> Result<Color, ThemeError> {
            let value = value.ok_or_else(|| missing(name, key))?;
            value.resolve().map_err(|source| ThemeError::InvalidColor {
                theme: name.to_owned(),
                key,
                source,
            })
        };
        let colors = ThemeColors {
            primary: color(self.primary, "primary")?,
            primary_variant: color(self.primary_variant, "primary-variant")?,
            secondary: color(self.secondary, "secondary")?,
            secondary_variant: color(self.secondary_variant, "secondary-variant")?,
            background: color(self.background, "background")?,
            surface: color(self.surface, "surface")?,
            error: color(self.error, "error")?,
            on_primary: color(self.on_primary, "on-primary")?,
            on_secondary: color(self.on_secondary, "on-secondary")?,
            on_background: color(self.on_background, "on-background")?,
            on_surface: color(self.on_surface, "on-surface")?,
            on_error: color(self.on_error, "on-error")?,
        };
        let offsets = self
            .brightness_offsets
            .ok_or_else(|| missing(name, "brightness-offsets"))?;
        let theme = Theme::new(name, colors, offsets)?;
        Ok(match self.info {
            Some(info) => theme.with_info(info),
            None => theme,
        })
    }
}

fn missing(theme: &str, key: &'static str) -> ThemeError {
    log::error!("theme '{theme}' is missing essential key '{key}'");
    ThemeError::MissingKey {
        theme: theme.to_owned(),
        key,
    }
}

// ===========================================================================
// Tests
// ===========================================================================
