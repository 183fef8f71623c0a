//! Input events delivered to widgets.

pub mod input;

pub use input::{InputEvent, Key, KeyEvent, Modifiers};
