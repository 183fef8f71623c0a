//! Seams to the graphics/windowing library that hosts the toolkit.
//!
//! The toolkit never opens a window, owns a font system or talks to the OS
//! cursor directly. A host implements [`Platform`] for per-frame input and
//! cursor control and [`TextMeasurer`] for font metrics; rendering goes
//! through [`Surface`](crate::render::Surface).

use std::fmt;

use crate::event::input::InputEvent;
use crate::geometry::{Offset, Size};

// ---------------------------------------------------------------------------
// SystemCursor
// ---------------------------------------------------------------------------

/// The system pointer shapes widgets may request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SystemCursor {
    #[default]
    Arrow,
    Hand,
    No,
}

// ---------------------------------------------------------------------------
// PointerButtons
// ---------------------------------------------------------------------------

/// Snapshot of the pointer buttons: primary, middle, secondary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct PointerButtons(pub [bool; 3]);

impl PointerButtons {
    /// No button held.
    pub const NONE: PointerButtons = PointerButtons([false, false, false]);
    /// Only the primary button held.
    pub const PRIMARY: PointerButtons = PointerButtons([true, false, false]);

    /// Whether the primary (left) button is held.
    #[inline]
    pub fn primary(self) -> bool {
        self.0[0]
    }

    /// Whether the middle button is held.
    #[inline]
    pub fn middle(self) -> bool {
        self.0[1]
    }

    /// Whether the secondary (right) button is held.
    #[inline]
    pub fn secondary(self) -> bool {
        self.0[2]
    }
}

// ---------------------------------------------------------------------------
// Platform
// ---------------------------------------------------------------------------

/// Input and cursor services provided by the host, queried every frame.
///
/// The system cursor is a single shared resource: every widget that changes
/// it writes through this trait, so within one frame the last widget updated
/// wins.
pub trait Platform {
    /// Drain input events queued since the last call.
    fn poll_input(&mut self) -> Vec<InputEvent>;

    /// Current pointer position in window pixels.
    fn pointer_position(&self) -> Offset;

    /// Current pointer button state.
    fn pointer_buttons(&self) -> PointerButtons;

    /// Replace the system pointer shape.
    fn set_system_cursor(&mut self, cursor: SystemCursor);
}

// ---------------------------------------------------------------------------
// Font / TextMeasurer
// ---------------------------------------------------------------------------

/// Default font family requested by widgets.
pub const DEFAULT_FONT_FAMILY: &str = "consolas";

/// Default text size in points.
pub const DEFAULT_TEXT_SIZE: u32 = 20;

/// A font request: family name plus point size.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Font {
    pub family: String,
    pub size: u32,
}

impl Font {
    /// Create a font request.
    pub fn new(family: impl Into<String>, size: u32) -> Self {
        Self { family: family.into(), size }
    }
}

impl Default for Font {
    fn default() -> Self {
        Self::new(DEFAULT_FONT_FAMILY, DEFAULT_TEXT_SIZE)
    }
}

impl fmt::Display for Font {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}pt", self.family, self.size)
    }
}

/// Font metrics provided by the host's font system.
pub trait TextMeasurer {
    /// Pixel size of `text` rendered in `font`.
    fn measure_text(&self, text: &str, font: &Font) -> Size;
}

// ===========================================================================
// Tests
// ===========================================================================
