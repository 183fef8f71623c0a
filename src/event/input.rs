//! Input events delivered to widgets.
//!
//! Pointer position and buttons are polled from the
//! [`Platform`](crate::backend::Platform) every frame, so the queue only
//! carries discrete events: key presses, surface resizes and focus changes.
//! Terminal hosts can translate crossterm events with
//! [`InputEvent::from_crossterm`].

use crossterm::event as ct;

/// Keys widgets react to. Anything else is dropped at the host boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Left,
    Right,
    Up,
    Down,
    Enter,
    Escape,
    Tab,
    Char(char),
}

/// Modifier keys held during a key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Modifiers {
    pub shift: bool,
    pub ctrl: bool,
    pub alt: bool,
}

impl Modifiers {
    pub const NONE: Modifiers = Modifiers { shift: false, ctrl: false, alt: false };

    pub fn is_empty(self) -> bool {
        self == Self::NONE
    }

    fn from_crossterm(m: ct::KeyModifiers) -> Self {
        Self {
            shift: m.contains(ct::KeyModifiers::SHIFT),
            ctrl: m.contains(ct::KeyModifiers::CONTROL),
            alt: m.contains(ct::KeyModifiers::ALT),
        }
    }
}

/// A key going down (or auto-repeating while held).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyEvent {
    pub code: Key,
    pub modifiers: Modifiers,
}

impl KeyEvent {
    pub fn new(code: Key, modifiers: Modifiers) -> Self {
        Self { code, modifiers }
    }

    /// A key press without modifiers.
    pub fn plain(code: Key) -> Self {
        Self::new(code, Modifiers::NONE)
    }

    /// Translate a crossterm key event.
    ///
    /// Releases and key codes with no [`Key`] counterpart yield `None`.
    pub fn from_crossterm(event: ct::KeyEvent) -> Option<Self> {
        if event.kind == ct::KeyEventKind::Release {
            return None;
        }
        let code = match event.code {
            ct::KeyCode::Left => Key::Left,
            ct::KeyCode::Right => Key::Right,
            ct::KeyCode::Up => Key::Up,
            ct::KeyCode::Down => Key::Down,
            ct::KeyCode::Enter => Key::Enter,
            ct::KeyCode::Esc => Key::Escape,
            ct::KeyCode::Tab => Key::Tab,
            ct::KeyCode::Char(c) => Key::Char(c),
            _ => return None,
        };
        Some(Self::new(code, Modifiers::from_crossterm(event.modifiers)))
    }
}

/// A discrete event queued by the host between frames.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputEvent {
    Key(KeyEvent),
    /// The drawing surface changed size, in the host's units.
    Resize { width: i32, height: i32 },
    FocusGained,
    FocusLost,
}

impl InputEvent {
    /// The key event, if this is a key press.
    pub fn as_key(&self) -> Option<&KeyEvent> {
        match self {
            InputEvent::Key(ke) => Some(ke),
            _ => None,
        }
    }

    /// Translate a crossterm event.
    ///
    /// Mouse events are dropped since the pointer is polled through the
    /// platform; so are key releases and unmapped keys.
    pub fn from_crossterm(event: ct::Event) -> Option<Self> {
        match event {
            ct::Event::Key(ke) => KeyEvent::from_crossterm(ke).map(InputEvent::Key),
            ct::Event::Resize(w, h) => Some(InputEvent::Resize {
                width: i32::from(w),
                height: i32::from(h),
            }),
            ct::Event::FocusGained => Some(InputEvent::FocusGained),
            ct::Event::FocusLost => Some(InputEvent::FocusLost),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ct_key(code: ct::KeyCode, kind: ct::KeyEventKind) -> ct::Event {
        ct::Event::Key(ct::KeyEvent::new_with_kind(code, ct::KeyModifiers::NONE, kind))
    }

    #[test]
    fn press_and_repeat_become_keys() {
        for kind in [ct::KeyEventKind::Press, ct::KeyEventKind::Repeat] {
            assert_eq!(
                InputEvent::from_crossterm(ct_key(ct::KeyCode::Right, kind)),
                Some(InputEvent::Key(KeyEvent::plain(Key::Right)))
            );
        }
    }

    #[test]
    fn release_is_dropped() {
        assert_eq!(
            InputEvent::from_crossterm(ct_key(ct::KeyCode::Left, ct::KeyEventKind::Release)),
            None
        );
    }

    #[test]
    fn unmapped_codes_are_dropped() {
        for code in [ct::KeyCode::Insert, ct::KeyCode::F(5), ct::KeyCode::PageUp] {
            assert_eq!(InputEvent::from_crossterm(ct_key(code, ct::KeyEventKind::Press)), None);
        }
    }

    #[test]
    fn modifiers_carry_over() {
        let event = ct::KeyEvent::new(
            ct::KeyCode::Char('a'),
            ct::KeyModifiers::SHIFT | ct::KeyModifiers::CONTROL,
        );
        let ke = KeyEvent::from_crossterm(event).unwrap();
        assert_eq!(ke.code, Key::Char('a'));
        assert_eq!(ke.modifiers, Modifiers { shift: true, ctrl: true, alt: false });
        assert!(!ke.modifiers.is_empty());
    }

    #[test]
    fn mouse_is_left_to_the_platform() {
        let event = ct::Event::Mouse(ct::MouseEvent {
            kind: ct::MouseEventKind::Moved,
            column: 3,
            row: 4,
            modifiers: ct::KeyModifiers::NONE,
        });
        assert_eq!(InputEvent::from_crossterm(event), None);
    }

    #[test]
    fn resize_and_focus_pass_through() {
        assert_eq!(
            InputEvent::from_crossterm(ct::Event::Resize(120, 40)),
            Some(InputEvent::Resize { width: 120, height: 40 })
        );
        assert_eq!(InputEvent::from_crossterm(ct::Event::FocusLost), Some(InputEvent::FocusLost));
    }
}
