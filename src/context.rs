//! The shared toolkit context handed to every widget at construction.
//!
//! A [`Context`] owns what would otherwise be process-wide state: the theme
//! registry, the host's text measurer and the tooltip-focus flag. It is a
//! cheap, cloneable handle; every clone sees the same state. Two contexts
//! never share anything, which keeps tests isolated.

use std::cell::{Cell, RefCell};
use std::fmt;
use std::path::Path;
use std::rc::Rc;

use crate::backend::{Font, TextMeasurer};
use crate::geometry::Size;
use crate::theme::{Theme, ThemeError, ThemeRegistry};

struct Shared {
    themes: RefCell<ThemeRegistry>,
    measurer: Rc<dyn TextMeasurer>,
    tooltip_focus: Cell<bool>,
}

/// Cloneable handle to the toolkit's shared state.
#[derive(Clone)]
pub struct Context {
    shared: Rc<Shared>,
}

impl Context {
    /// Create a context from a prepared registry and a text measurer.
    pub fn new(themes: ThemeRegistry, measurer: Rc<dyn TextMeasurer>) -> Self {
        Self {
            shared: Rc::new(Shared {
                themes: RefCell::new(themes),
                measurer,
                tooltip_focus: Cell::new(false),
            }),
        }
    }

    /// Create a context holding the built-in themes.
    pub fn with_builtin_themes(measurer: Rc<dyn TextMeasurer>) -> Result<Self, ThemeError> {
        Ok(Self::new(ThemeRegistry::with_builtin_themes()?, measurer))
    }

    // ── Themes ───────────────────────────────────────────────────────

    /// Look up a theme by name, falling back to the default theme.
    pub fn theme(&self, name: &str) -> Rc<Theme> {
        self.shared.themes.borrow().get(name)
    }

    /// Look up a theme by name without falling back.
    pub fn find_theme(&self, name: &str) -> Option<Rc<Theme>> {
        self.shared.themes.borrow().find(name)
    }

    /// The current default theme.
    pub fn default_theme(&self) -> Rc<Theme> {
        self.shared.themes.borrow().default_theme()
    }

    /// Register a custom theme.
    pub fn register_theme(&self, theme: Theme) -> Result<Rc<Theme>, ThemeError> {
        self.shared.themes.borrow_mut().register(theme)
    }

    /// Load and register a JSON or TOML theme file.
    pub fn load_theme_file(&self, path: impl AsRef<Path>) -> Result<Rc<Theme>, ThemeError> {
        self.shared.themes.borrow_mut().load_file(path)
    }

    /// Change the default theme. Widgets already built keep their theme.
    pub fn set_default_theme(&self, name: &str) -> Result<(), ThemeError> {
        self.shared.themes.borrow_mut().set_default(name)
    }

    /// Registered theme names, in registration order.
    pub fn theme_names(&self) -> Vec<String> {
        self.shared.themes.borrow().names().map(str::to_owned).collect()
    }

    // ── Text ─────────────────────────────────────────────────────────

    pub fn measurer(&self) -> &dyn TextMeasurer {
        self.shared.measurer.as_ref()
    }

    pub fn measure_text(&self, text: &str, font: &Font) -> Size {
        self.shared.measurer.measure_text(text, font)
    }

    // ── Tooltip focus ────────────────────────────────────────────────

    /// Try to take the single tooltip-focus slot. Returns `false` if another
    /// tooltip already holds it.
    pub fn claim_tooltip_focus(&self) -> bool {
        !self.shared.tooltip_focus.replace(true)
    }

    /// Free the tooltip-focus slot.
    pub fn release_tooltip_focus(&self) {
        self.shared.tooltip_focus.set(false);
    }

    /// Whether some tooltip currently holds focus.
    pub fn tooltip_focus_claimed(&self) -> bool {
        self.shared.tooltip_focus.get()
    }
}

impl fmt::Debug for Context {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Context")
            .field("themes", &self.theme_names())
            .field("default_theme", &self.default_theme().name())
            .field("tooltip_focus", &self.tooltip_focus_claimed())
            .finish()
    }
}

// ===========================================================================
// Tests
// ===========================================================================
