//! Themes shipped with the crate, embedded at compile time.

use super::{Theme, ThemeError};

const SOURCES: [(&str, &str); 4] = [
    ("default", include_str!("../../themes/default.json")),
    ("default_light", include_str!("../../themes/default_light.json")),
    ("navy", include_str!("../../themes/navy.json")),
    ("powder_blue", include_str!("../../themes/powder_blue.json")),
];

/// Names of the built-in themes.
pub fn names() -> impl Iterator<Item = &'static str> {
    SOURCES.iter().map(|(name, _)| *name)
}

/// Decode one built-in theme by exact name.
pub fn load(name: &str) -> Option<Theme> {
    SOURCES
        .iter()
        .find(|(n, _)| *n == name)
        .and_then(|(n, src)| Theme::from_json_str(n, src).ok())
}

/// Decode every built-in theme.
pub fn load_all() -> Result<Vec<Theme>, ThemeError> {
    SOURCES
        .iter()
        .map(|(name, src)| Theme::from_json_str(name, src))
        .collect()
}
