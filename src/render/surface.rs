//! The drawing target widgets render into.
//!
//! [`Surface`] is the host's side of rendering: a filled or outlined
//! rectangle primitive and a blit of a previously rendered text surface.
//! Widgets never draw text glyph by glyph.

use crate::color::Color;
use crate::geometry::Region;
use crate::render::text::TextSurface;

// ---------------------------------------------------------------------------
// RectStyle
// ---------------------------------------------------------------------------

/// How a rectangle is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct RectStyle {
    /// Outline width in pixels. `0` fills the rectangle.
    pub border_width: u32,
    /// Corner radius in pixels. `0` draws square corners.
    pub border_radius: u32,
}

impl RectStyle {
    /// A filled rectangle with the given corner radius.
    pub const fn filled(border_radius: u32) -> Self {
        Self { border_width: 0, border_radius }
    }

    /// An outline of `border_width` pixels with the given corner radius.
    pub const fn outline(border_width: u32, border_radius: u32) -> Self {
        Self { border_width, border_radius }
    }

    /// Whether this style fills the rectangle.
    pub const fn is_filled(&self) -> bool {
        self.border_width == 0
    }
}

// ---------------------------------------------------------------------------
// Surface
// ---------------------------------------------------------------------------

/// A render target provided by the host graphics library.
pub trait Surface {
    /// Draw a filled or outlined rectangle.
    fn draw_rect(&mut self, rect: Region, color: Color, style: RectStyle);

    /// Copy a rendered text surface onto this surface at `dest`.
    fn blit(&mut self, text: &TextSurface, dest: Region);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rect_style_constructors() {
        assert!(RectStyle::filled(4).is_filled());
        assert_eq!(RectStyle::filled(4).border_radius, 4);
        let o = RectStyle::outline(3, 2);
        assert!(!o.is_filled());
        assert_eq!(o.border_width, 3);
        assert!(RectStyle::default().is_filled());
    }
}
