//! App: a thin driver that owns elements and forwards the frame hooks.
//!
//! [`App`] builds the shared [`Context`] from an [`AppConfig`], stores
//! elements in a slot map and, once per frame, hands every element its
//! pending input events, an update and a render, in insertion order.
//! Opening a window and pacing frames are left to the host.

use std::fs;
use std::path::{Path, PathBuf};
use std::rc::Rc;

use serde::Deserialize;
use slotmap::{new_key_type, SlotMap};

use crate::backend::{Platform, TextMeasurer};
use crate::context::Context;
use crate::error::{Error, Result};
use crate::render::Surface;
use crate::theme::{ThemeRegistry, DEFAULT_THEME_NAME};
use crate::widget::{ConfigError, Element};

/// Environment variable naming the default theme.
pub const THEME_ENV: &str = "BUTTONUP_THEME";
/// Environment variable pointing at a TOML config file.
pub const CONFIG_ENV: &str = "BUTTONUP_CONFIG";

// ---------------------------------------------------------------------------
// AppConfig
// ---------------------------------------------------------------------------

/// Configuration for the application.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AppConfig {
    /// Default theme name.
    pub theme: String,
    /// Extra JSON/TOML theme files registered at startup.
    pub theme_files: Vec<PathBuf>,
    /// Frame rate the host is expected to target.
    pub fps_hint: u32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            theme: DEFAULT_THEME_NAME.to_owned(),
            theme_files: Vec::new(),
            fps_hint: 60,
        }
    }
}

impl AppConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the default theme (builder).
    pub fn with_theme(mut self, name: impl Into<String>) -> Self {
        self.theme = name.into();
        self
    }

    /// Add a theme file to load at startup (builder).
    pub fn with_theme_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.theme_files.push(path.into());
        self
    }

    /// Set the frame-rate hint (builder).
    pub fn with_fps_hint(mut self, fps: u32) -> Self {
        self.fps_hint = fps;
        self
    }

    /// Parse a TOML config. Missing keys keep their defaults.
    pub fn from_toml_str(source: &str) -> Result<Self> {
        Ok(toml::from_str(source)?)
    }

    /// Read and parse a TOML config file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let source = fs::read_to_string(path).map_err(|source| Error::ConfigIo {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&source)
    }

    /// Build from `BUTTONUP_CONFIG` (a TOML file) and `BUTTONUP_THEME`,
    /// falling back to defaults for anything unset.
    pub fn from_env_or_default() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// [`from_env_or_default`](Self::from_env_or_default) with a custom
    /// variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let mut config = match lookup(CONFIG_ENV) {
            Some(path) if !path.trim().is_empty() => Self::from_file(path.trim())?,
            _ => Self::default(),
        };
        if let Some(theme) = lookup(THEME_ENV).filter(|t| !t.trim().is_empty()) {
            config.theme = theme.trim().to_owned();
        }
        Ok(config)
    }
}

// ---------------------------------------------------------------------------
// App
// ---------------------------------------------------------------------------

new_key_type! {
    /// Stable handle to an element owned by an [`App`].
    pub struct ElementKey;
}

/// Owns the context and every element, and drives them frame by frame.
pub struct App {
    ctx: Context,
    config: AppConfig,
    elements: SlotMap<ElementKey, Box<dyn Element>>,
    /// Insertion order; slot maps reuse freed slots.
    order: Vec<ElementKey>,
    frames: u64,
}

impl App {
    /// Build the context: built-in themes, then the configured theme files,
    /// then the configured default theme.
    pub fn new(config: AppConfig, measurer: Rc<dyn TextMeasurer>) -> Result<Self> {
        let ctx = Context::new(ThemeRegistry::with_builtin_themes()?, measurer);
        for path in &config.theme_files {
            ctx.load_theme_file(path)?;
        }
        ctx.set_default_theme(&config.theme)?;
        log::debug!(
            "app ready with {} themes, default '{}'",
            ctx.theme_names().len(),
            ctx.default_theme().name()
        );
        Ok(Self {
            ctx,
            config,
            elements: SlotMap::with_key(),
            order: Vec::new(),
            frames: 0,
        })
    }

    /// The shared context to build widgets with.
    pub fn context(&self) -> &Context {
        &self.ctx
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    // ── Elements ─────────────────────────────────────────────────────

    /// Add an element. It is driven after every element added before it.
    pub fn add(&mut self, element: impl Element + 'static) -> ElementKey {
        let key = self.elements.insert(Box::new(element));
        self.order.push(key);
        key
    }

    pub fn remove(&mut self, key: ElementKey) -> Option<Box<dyn Element>> {
        let element = self.elements.remove(key)?;
        self.order.retain(|k| *k != key);
        Some(element)
    }

    pub fn element(&self, key: ElementKey) -> Option<&dyn Element> {
        self.elements.get(key).map(|e| e.as_ref())
    }

    /// Borrow an element as its concrete type.
    pub fn get<E: Element + 'static>(&self, key: ElementKey) -> Option<&E> {
        self.elements.get(key)?.as_any().downcast_ref()
    }

    /// Mutably borrow an element as its concrete type.
    pub fn get_mut<E: Element + 'static>(&mut self, key: ElementKey) -> Option<&mut E> {
        self.elements.get_mut(key)?.as_any_mut().downcast_mut()
    }

    pub fn contains(&self, key: ElementKey) -> bool {
        self.elements.contains_key(key)
    }

    /// Element keys in driving order.
    pub fn keys(&self) -> &[ElementKey] {
        &self.order
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    // ── Frame ────────────────────────────────────────────────────────

    /// Run one frame: poll input once, then give each element, in order,
    /// every event, an update and a render.
    pub fn frame(&mut self, platform: &mut dyn Platform, surface: &mut dyn Surface, dt_ms: f64) {
        let events = platform.poll_input();
        for key in &self.order {
            let Some(element) = self.elements.get_mut(*key) else {
                continue;
            };
            for event in &events {
                element.event(event);
            }
            element.update(dt_ms, platform);
            element.render(surface);
        }
        self.frames += 1;
    }

    /// Frames run so far.
    pub fn frame_count(&self) -> u64 {
        self.frames
    }

    /// Make `name` the default theme and switch every element to it.
    pub fn set_theme(&mut self, name: &str) -> Result<()> {
        let theme = self
            .ctx
            .find_theme(name)
            .ok_or_else(|| ConfigError::UnknownTheme(name.to_owned()))?;
        self.ctx.set_default_theme(theme.name())?;
        for element in self.elements.values_mut() {
            element.reload_theme(Rc::clone(&theme));
        }
        self.config.theme = theme.name().to_owned();
        log::debug!("switched {} elements to theme '{}'", self.elements.len(), theme.name());
        Ok(())
    }
}

impl std::fmt::Debug for App {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("App")
            .field("config", &self.config)
            .field("elements", &self.order.len())
            .field("frames", &self.frames)
            .finish()
    }
}

// ===========================================================================
// Tests
// ===========================================================================
