//! Theme registry: name → shared theme, with a guaranteed default.

use std::path::Path;
use std::rc::Rc;

use indexmap::IndexMap;

use super::{builtin, normalize_name, Theme, ThemeError, DEFAULT_THEME_NAME};

/// All themes known to a [`Context`](crate::context::Context).
///
/// Lookups are case-insensitive. A registry always holds a default theme,
/// so [`get`](Self::get) never fails: unknown names resolve to the default.
#[derive(Debug, Clone)]
pub struct ThemeRegistry {
    themes: IndexMap<String, Rc<Theme>>,
    default: Rc<Theme>,
}

impl ThemeRegistry {
    /// A registry holding the built-in themes, with `default` as default.
    pub fn with_builtin_themes() -> Result<Self, ThemeError> {
        let mut themes = IndexMap::new();
        for theme in builtin::load_all()? {
            themes.insert(theme.name().to_owned(), Rc::new(theme));
        }
        let default = themes
            .get(DEFAULT_THEME_NAME)
            .cloned()
            .ok_or_else(|| default_missing(DEFAULT_THEME_NAME))?;
        log::debug!("initialized {} themes", themes.len());
        Ok(Self { themes, default })
    }

    /// A registry holding exactly one theme, which becomes the default.
    pub fn with_default(theme: Theme) -> Self {
        let theme = Rc::new(theme);
        let mut themes = IndexMap::new();
        themes.insert(theme.name().to_owned(), Rc::clone(&theme));
        Self { themes, default: theme }
    }

    /// Add a theme. Names must be unique.
    pub fn register(&mut self, theme: Theme) -> Result<Rc<Theme>, ThemeError> {
        if self.themes.contains_key(theme.name()) {
            return Err(ThemeError::Duplicate(theme.name().to_owned()));
        }
        let theme = Rc::new(theme);
        self.themes.insert(theme.name().to_owned(), Rc::clone(&theme));
        log::debug!("registered theme '{}'", theme.name());
        Ok(theme)
    }

    /// Load a JSON or TOML theme file and register it under its file stem.
    pub fn load_file(&mut self, path: impl AsRef<Path>) -> Result<Rc<Theme>, ThemeError> {
        self.register(Theme::from_file(path)?)
    }

    /// Look up a theme by name, falling back to the default theme.
    pub fn get(&self, name: &str) -> Rc<Theme> {
        match self.find(name) {
            Some(theme) => theme,
            None => {
                log::warn!("theme '{name}' not found, using '{}'", self.default.name());
                Rc::clone(&self.default)
            }
        }
    }

    /// Look up a theme by name without falling back.
    pub fn find(&self, name: &str) -> Option<Rc<Theme>> {
        self.themes.get(&normalize_name(name)).cloned()
    }

    /// The default theme.
    pub fn default_theme(&self) -> Rc<Theme> {
        Rc::clone(&self.default)
    }

    /// Make an already-registered theme the default.
    pub fn set_default(&mut self, name: &str) -> Result<(), ThemeError> {
        let theme = self.find(name).ok_or_else(|| default_missing(name))?;
        self.default = theme;
        Ok(())
    }

    /// Whether a theme with this name is registered.
    pub fn contains(&self, name: &str) -> bool {
        self.themes.contains_key(&normalize_name(name))
    }

    /// Registered theme names, in registration order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.themes.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.themes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.themes.is_empty()
    }
}

fn default_missing(name: &str) -> ThemeError {
    log::error!("default theme '{name}' not found");
    ThemeError::DefaultMissing(name.to_owned())
}

// ===========================================================================
// Tests
// ===========================================================================
