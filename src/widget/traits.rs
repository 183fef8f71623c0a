//! Element trait: the per-frame hooks every widget exposes.
//!
//! A host drives each element once per frame: `event` for every pending
//! input event, then `update`, then `render`. All hooks except `render`
//! default to no-ops.

use std::any::Any;
use std::rc::Rc;

use crate::backend::Platform;
use crate::event::input::InputEvent;
use crate::render::Surface;
use crate::theme::Theme;

// ---------------------------------------------------------------------------
// Element trait
// ---------------------------------------------------------------------------

/// Core trait implemented by every widget.
///
/// Object-safe so an [`App`](crate::app::App) can hold heterogeneous
/// elements as `Box<dyn Element>`.
pub trait Element {
    /// Type name, e.g. `"Button"`.
    fn element_type(&self) -> &str;

    /// Handle one raw input event.
    fn event(&mut self, _event: &InputEvent) {}

    /// Advance the interaction state machine by one frame.
    ///
    /// `dt_ms` is the time since the previous frame in milliseconds.
    fn update(&mut self, _dt_ms: f64, _platform: &mut dyn Platform) {}

    /// Draw the element.
    fn render(&self, surface: &mut dyn Surface);

    /// Switch to `theme` and recompute every theme-derived color.
    fn reload_theme(&mut self, _theme: Rc<Theme>) {}

    /// Downcast to `&dyn Any` for runtime type inspection.
    fn as_any(&self) -> &dyn Any;

    /// Downcast to `&mut dyn Any` for mutable runtime type inspection.
    fn as_any_mut(&mut self) -> &mut dyn Any;
}

// ===========================================================================
// Tests
// ===========================================================================
