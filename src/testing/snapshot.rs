//! Recorded drawing and snapshot helpers.
//!
//! [`RecordingSurface`] stands in for the host's render target and keeps
//! every call as a [`DrawCommand`]. [`commands_to_string`] prints them one
//! per line for snapshot assertions.

use std::fmt;

use crate::color::Color;
use crate::geometry::Region;
use crate::render::{RectStyle, Surface, TextSurface};

// ---------------------------------------------------------------------------
// DrawCommand
// ---------------------------------------------------------------------------

/// One recorded drawing call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DrawCommand {
    Rect { rect: Region, color: Color, style: RectStyle },
    Text { text: String, rect: Region, color: Color },
}

fn write_region(f: &mut fmt::Formatter<'_>, r: Region) -> fmt::Result {
    write!(f, "({}, {}, {}x{})", r.x, r.y, r.width, r.height)
}

impl fmt::Display for DrawCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DrawCommand::Rect { rect, color, style } => {
                f.write_str("rect ")?;
                write_region(f, *rect)?;
                write!(f, " {}", color.to_hex())?;
                if style.is_filled() {
                    write!(f, " fill r={}", style.border_radius)
                } else {
                    write!(f, " outline w={} r={}", style.border_width, style.border_radius)
                }
            }
            DrawCommand::Text { text, rect, color } => {
                write!(f, "text '{text}' at ")?;
                write_region(f, *rect)?;
                write!(f, " {}", color.to_hex())
            }
        }
    }
}

// ---------------------------------------------------------------------------
// RecordingSurface
// ---------------------------------------------------------------------------

/// A [`Surface`] that records instead of drawing.
#[derive(Debug, Clone, Default)]
pub struct RecordingSurface {
    commands: Vec<DrawCommand>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Take the recorded commands, leaving the surface empty for the next frame.
    pub fn take(&mut self) -> Vec<DrawCommand> {
        std::mem::take(&mut self.commands)
    }

    pub fn clear(&mut self) {
        self.commands.clear();
    }

    /// Text of every blit, in draw order.
    pub fn texts(&self) -> Vec<&str> {
        self.commands
            .iter()
            .filter_map(|c| match c {
                DrawCommand::Text { text, .. } => Some(text.as_str()),
                DrawCommand::Rect { .. } => None,
            })
            .collect()
    }
}

impl Surface for RecordingSurface {
    fn draw_rect(&mut self, rect: Region, color: Color, style: RectStyle) {
        self.commands.push(DrawCommand::Rect { rect, color, style });
    }

    fn blit(&mut self, text: &TextSurface, dest: Region) {
        self.commands.push(DrawCommand::Text {
            text: text.text.clone(),
            rect: dest,
            color: text.color,
        });
    }
}

/// One line per command, no trailing newline.
pub fn commands_to_string(commands: &[DrawCommand]) -> String {
    commands
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("\n")
}
