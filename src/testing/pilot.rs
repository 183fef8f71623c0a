//! Pilot: programmatic interaction with a headless App.
//!
//! The `Pilot` owns an [`App`], a [`HeadlessPlatform`] and a
//! [`RecordingSurface`]. Tests move the pointer, press buttons and keys,
//! then run frames and inspect what was drawn and which cursors were set.

use std::rc::Rc;

use crate::app::{App, AppConfig};
use crate::backend::SystemCursor;
use crate::context::Context;
use crate::error::Result;
use crate::event::input::{InputEvent, Key, KeyEvent, Modifiers};
use crate::testing::headless::{HeadlessPlatform, MonospaceMetrics};
use crate::testing::snapshot::{commands_to_string, DrawCommand, RecordingSurface};

/// Frame length used by [`Pilot::step`], in milliseconds.
pub const DEFAULT_FRAME_MS: f64 = 16.0;

// ---------------------------------------------------------------------------
// Pilot
// ---------------------------------------------------------------------------

/// A headless app driver for testing.
///
/// # Examples
///
/// ```ignore
/// let mut pilot = Pilot::new()?;
/// let ctx = pilot.context().clone();
/// let key = pilot.app_mut().add(Button::new(0, 0, ButtonOptions::default(), &ctx)?);
/// pilot.move_pointer(10, 10);
/// pilot.press();
/// pilot.step();
/// ```
pub struct Pilot {
    app: App,
    platform: HeadlessPlatform,
    surface: RecordingSurface,
    metrics: Rc<MonospaceMetrics>,
}

impl Pilot {
    /// A pilot over an app with the default config.
    pub fn new() -> Result<Self> {
        Self::with_config(AppConfig::default())
    }

    /// A pilot over an app built from `config`.
    pub fn with_config(config: AppConfig) -> Result<Self> {
        let metrics = Rc::new(MonospaceMetrics::new());
        let app = App::new(config, metrics.clone())?;
        Ok(Self {
            app,
            platform: HeadlessPlatform::new(),
            surface: RecordingSurface::new(),
            metrics,
        })
    }

    pub fn app(&self) -> &App {
        &self.app
    }

    pub fn app_mut(&mut self) -> &mut App {
        &mut self.app
    }

    pub fn context(&self) -> &Context {
        self.app.context()
    }

    /// The text measurer shared by every widget in the app.
    pub fn metrics(&self) -> &MonospaceMetrics {
        &self.metrics
    }

    // ── Input simulation ─────────────────────────────────────────────

    pub fn move_pointer(&mut self, x: i32, y: i32) {
        self.platform.move_pointer(x, y);
    }

    /// Hold the primary button.
    pub fn press(&mut self) {
        self.platform.press();
    }

    /// Release the primary button.
    pub fn release(&mut self) {
        self.platform.release();
    }

    /// Queue a key press with no modifiers for the next frame.
    pub fn press_key(&mut self, key: Key) {
        self.press_key_with(key, Modifiers::NONE);
    }

    /// Queue a key press with the given modifiers for the next frame.
    pub fn press_key_with(&mut self, key: Key, modifiers: Modifiers) {
        self.platform
            .push_event(InputEvent::Key(KeyEvent::new(key, modifiers)));
    }

    pub fn push_event(&mut self, event: InputEvent) {
        self.platform.push_event(event);
    }

    // ── Frames ───────────────────────────────────────────────────────

    /// Run one frame of `dt_ms`. Only this frame's drawing is kept.
    pub fn frame(&mut self, dt_ms: f64) {
        self.surface.clear();
        self.app.frame(&mut self.platform, &mut self.surface, dt_ms);
    }

    /// Run one frame of [`DEFAULT_FRAME_MS`].
    pub fn step(&mut self) {
        self.frame(DEFAULT_FRAME_MS);
    }

    /// Move the pointer to `(x, y)`, then press and release there, one
    /// frame each.
    pub fn click(&mut self, x: i32, y: i32) {
        self.move_pointer(x, y);
        self.release();
        self.step();
        self.press();
        self.step();
        self.release();
        self.step();
    }

    // ── Inspection ───────────────────────────────────────────────────

    /// Drawing recorded during the last frame.
    pub fn commands(&self) -> &[DrawCommand] {
        self.surface.commands()
    }

    /// [`commands`](Self::commands) printed one per line.
    pub fn commands_string(&self) -> String {
        commands_to_string(self.surface.commands())
    }

    /// Every cursor requested so far, oldest first.
    pub fn cursor_history(&self) -> &[SystemCursor] {
        self.platform.cursor_history()
    }

    pub fn cursor(&self) -> SystemCursor {
        self.platform.cursor()
    }
}

// ===========================================================================
// Tests
// ===========================================================================
