//! Interaction states and system-cursor feedback.

use std::fmt;
use std::str::FromStr;

use crate::backend::{Platform, SystemCursor};

/// An interaction-state name was not recognized.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StateError {
    #[error("unknown interaction state '{0}', expected one of: inactive, hovered, pressed, disabled")]
    Unknown(String),
}

// ---------------------------------------------------------------------------
// InteractionState
// ---------------------------------------------------------------------------

/// Where a widget stands relative to the pointer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum InteractionState {
    #[default]
    Inactive,
    Hovered,
    Pressed,
    /// Sticky: only cleared by an explicit state change.
    Disabled,
}

impl InteractionState {
    pub const ALL: [InteractionState; 4] = [
        InteractionState::Inactive,
        InteractionState::Hovered,
        InteractionState::Pressed,
        InteractionState::Disabled,
    ];

    /// Lowercase name, also used as the theme brightness-offset key.
    pub const fn as_str(self) -> &'static str {
        match self {
            InteractionState::Inactive => "inactive",
            InteractionState::Hovered => "hovered",
            InteractionState::Pressed => "pressed",
            InteractionState::Disabled => "disabled",
        }
    }

    pub const fn is_disabled(self) -> bool {
        matches!(self, InteractionState::Disabled)
    }

    /// Hovered or pressed.
    pub const fn is_engaged(self) -> bool {
        matches!(self, InteractionState::Hovered | InteractionState::Pressed)
    }

    /// The pointer-driven transition for one frame.
    ///
    /// A held button only presses when it was already hovering or pressed,
    /// so dragging onto a widget from outside never activates it.
    pub fn next(self, inside: bool, primary_held: bool) -> Self {
        match self {
            InteractionState::Disabled => InteractionState::Disabled,
            _ if !inside => InteractionState::Inactive,
            InteractionState::Hovered | InteractionState::Pressed if primary_held => {
                InteractionState::Pressed
            }
            _ if primary_held => InteractionState::Inactive,
            _ => InteractionState::Hovered,
        }
    }
}

impl fmt::Display for InteractionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for InteractionState {
    type Err = StateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|state| state.as_str() == wanted)
            .ok_or_else(|| StateError::Unknown(s.to_owned()))
    }
}

// ---------------------------------------------------------------------------
// CursorFeedback
// ---------------------------------------------------------------------------

/// Tracks whether a widget changed the system cursor, so it restores the
/// arrow exactly once when it stops wanting a different shape.
///
/// The cursor is shared by every widget. Whichever widget updates last in a
/// frame decides its shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CursorFeedback {
    changed: bool,
}

impl CursorFeedback {
    /// Request `wanted` for this frame, or release the cursor with `None`.
    pub fn apply(&mut self, platform: &mut dyn Platform, wanted: Option<SystemCursor>) {
        match wanted {
            Some(cursor) => {
                platform.set_system_cursor(cursor);
                self.changed = true;
            }
            None if self.changed => {
                platform.set_system_cursor(SystemCursor::Arrow);
                self.changed = false;
            }
            None => {}
        }
    }

    /// Whether the last frame left the cursor changed.
    pub fn is_changed(&self) -> bool {
        self.changed
    }
}

// ===========================================================================
// Tests
// ===========================================================================
