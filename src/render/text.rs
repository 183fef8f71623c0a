//! Cached text surfaces.
//!
//! A [`TextSurface`] is the toolkit's equivalent of a pre-rendered text
//! bitmap: the string, font, color and antialiasing flag it was produced with,
//! plus its measured size. Widgets keep one around and regenerate it only when
//! one of those inputs changes.

use crate::backend::{Font, TextMeasurer};
use crate::color::Color;
use crate::geometry::Size;

/// A measured, renderable run of single-colored text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextSurface {
    pub text: String,
    pub font: Font,
    pub color: Color,
    pub antialias: bool,
    pub size: Size,
}

impl TextSurface {
    /// Measure `text` and build a surface for it.
    pub fn render(
        measurer: &dyn TextMeasurer,
        text: &str,
        font: &Font,
        color: Color,
        antialias: bool,
    ) -> Self {
        Self {
            text: text.to_owned(),
            font: font.clone(),
            color,
            antialias,
            size: measurer.measure_text(text, font),
        }
    }

    /// Whether this surface was produced from exactly these inputs.
    pub fn matches(&self, text: &str, font: &Font, color: Color, antialias: bool) -> bool {
        self.text == text && &self.font == font && self.color == color && self.antialias == antialias
    }

    /// Whether there is anything to draw.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}
