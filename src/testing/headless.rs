//! Headless stand-ins for the host platform and font system.

use std::cell::Cell;
use std::collections::VecDeque;

use crate::backend::{Font, Platform, PointerButtons, SystemCursor, TextMeasurer};
use crate::event::input::InputEvent;
use crate::geometry::{Offset, Size};

// ---------------------------------------------------------------------------
// HeadlessPlatform
// ---------------------------------------------------------------------------

/// A [`Platform`] whose pointer and input queue are set by the test.
///
/// Every cursor change is recorded in order, so tests can check both what
/// was requested and that nothing was requested redundantly.
#[derive(Debug, Clone, Default)]
pub struct HeadlessPlatform {
    pointer: Offset,
    buttons: PointerButtons,
    queue: VecDeque<InputEvent>,
    cursors: Vec<SystemCursor>,
}

impl HeadlessPlatform {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn move_pointer(&mut self, x: i32, y: i32) {
        self.pointer = Offset::new(x, y);
    }

    /// Hold the primary button.
    pub fn press(&mut self) {
        self.buttons.0[0] = true;
    }

    /// Let go of the primary button.
    pub fn release(&mut self) {
        self.buttons.0[0] = false;
    }

    pub fn set_buttons(&mut self, buttons: PointerButtons) {
        self.buttons = buttons;
    }

    /// Queue an event for the next [`Platform::poll_input`].
    pub fn push_event(&mut self, event: InputEvent) {
        self.queue.push_back(event);
    }

    pub fn pending_events(&self) -> usize {
        self.queue.len()
    }

    /// Every cursor requested so far, oldest first.
    pub fn cursor_history(&self) -> &[SystemCursor] {
        &self.cursors
    }

    /// The cursor currently shown.
    pub fn cursor(&self) -> SystemCursor {
        self.cursors.last().copied().unwrap_or_default()
    }
}

impl Platform for HeadlessPlatform {
    fn poll_input(&mut self) -> Vec<InputEvent> {
        self.queue.drain(..).collect()
    }

    fn pointer_position(&self) -> Offset {
        self.pointer
    }

    fn pointer_buttons(&self) -> PointerButtons {
        self.buttons
    }

    fn set_system_cursor(&mut self, cursor: SystemCursor) {
        self.cursors.push(cursor);
    }
}

// ---------------------------------------------------------------------------
// MonospaceMetrics
// ---------------------------------------------------------------------------

/// A [`TextMeasurer`] where every glyph is `size / 2` wide and `size` tall.
///
/// Counts calls so tests can assert text is not re-measured needlessly.
#[derive(Debug, Default)]
pub struct MonospaceMetrics {
    calls: Cell<usize>,
}

impl MonospaceMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    /// How many times text has been measured.
    pub fn calls(&self) -> usize {
        self.calls.get()
    }
}

impl TextMeasurer for MonospaceMetrics {
    fn measure_text(&self, text: &str, font: &Font) -> Size {
        self.calls.set(self.calls.get() + 1);
        let size = i32::try_from(font.size).unwrap_or(i32::MAX);
        let chars = i32::try_from(text.chars().count()).unwrap_or(i32::MAX);
        Size::new(chars.saturating_mul(size / 2), size)
    }
}
