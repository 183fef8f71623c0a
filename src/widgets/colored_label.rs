//! ColoredLabel: text with inline color keywords.
//!
//! The source text is tokenized against a [`ColorPalette`]. Keywords are
//! removed and switch the color of the text that follows; each colored run
//! becomes its own fragment, laid out left to right. Any change rebuilds
//! every fragment.

use std::any::Any;
use std::rc::Rc;

use crate::backend::{Font, DEFAULT_FONT_FAMILY, DEFAULT_TEXT_SIZE};
use crate::color::Color;
use crate::context::Context;
use crate::geometry::{Offset, Region, Size};
use crate::palette::{ColorPalette, PaletteError};
use crate::render::{Surface, TextSurface};
use crate::theme::Theme;
use crate::widget::config::{self, ConfigError};
use crate::widget::Element;

/// Construction options for [`ColoredLabel`].
#[derive(Debug, Clone, PartialEq)]
pub struct ColoredLabelOptions {
    pub theme: Option<String>,
    pub text: String,
    pub text_size: u32,
    pub font: String,
    pub antialias: bool,
    pub palette: ColorPalette,
    /// Base color, used before the first keyword and after resets.
    /// Defaults to the theme's `on-background`.
    pub color: Option<Color>,
}

impl Default for ColoredLabelOptions {
    fn default() -> Self {
        Self {
            theme: None,
            text: String::new(),
            text_size: DEFAULT_TEXT_SIZE,
            font: DEFAULT_FONT_FAMILY.to_owned(),
            antialias: true,
            palette: ColorPalette::new(),
            color: None,
        }
    }
}

impl ColoredLabelOptions {
    pub fn with_theme(mut self, name: impl Into<String>) -> Self {
        self.theme = Some(name.into());
        self
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    pub fn with_text_size(mut self, size: u32) -> Self {
        self.text_size = size;
        self
    }

    pub fn with_font(mut self, family: impl Into<String>) -> Self {
        self.font = family.into();
        self
    }

    pub fn with_antialias(mut self, antialias: bool) -> Self {
        self.antialias = antialias;
        self
    }

    pub fn with_palette(mut self, palette: ColorPalette) -> Self {
        self.palette = palette;
        self
    }

    pub fn with_color(mut self, color: Color) -> Self {
        self.color = Some(color);
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        config::text_size(self.text_size)?;
        config::font_family(&self.font)?;
        Ok(())
    }
}

/// One single-colored run of a [`ColoredLabel`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fragment {
    pub surface: TextSurface,
    pub rect: Region,
}

/// A label whose text switches color at palette keywords.
#[derive(Debug)]
pub struct ColoredLabel {
    ctx: Context,
    position: Offset,
    theme: Rc<Theme>,
    text: String,
    font: Font,
    antialias: bool,
    palette: ColorPalette,
    color: Option<Color>,
    fragments: Vec<Fragment>,
}

impl ColoredLabel {
    pub fn new(x: i32, y: i32, options: ColoredLabelOptions, ctx: &Context) -> Result<Self, ConfigError> {
        options.validate()?;
        let theme = config::resolve_theme(ctx, options.theme.as_deref())?;
        let mut label = Self {
            ctx: ctx.clone(),
            position: Offset::new(x, y),
            theme,
            text: options.text,
            font: Font::new(options.font, options.text_size),
            antialias: options.antialias,
            palette: options.palette,
            color: options.color,
            fragments: Vec::new(),
        };
        label.relayout();
        Ok(label)
    }

    // ── Accessors ────────────────────────────────────────────────────

    /// Source text, keywords included.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// The visible text: the source with every keyword removed.
    pub fn keywordless_text(&self) -> String {
        self.palette.strip_keywords(&self.text)
    }

    pub fn fragments(&self) -> &[Fragment] {
        &self.fragments
    }

    pub fn palette(&self) -> &ColorPalette {
        &self.palette
    }

    pub fn font(&self) -> &Font {
        &self.font
    }

    pub fn theme(&self) -> &Rc<Theme> {
        &self.theme
    }

    pub fn position(&self) -> Offset {
        self.position
    }

    /// Color of text outside any keyword run.
    pub fn base_color(&self) -> Color {
        self.color.unwrap_or(self.theme.colors().on_background)
    }

    /// Bounding box of every fragment.
    pub fn rect(&self) -> Region {
        let width = self.fragments.iter().map(|f| f.rect.width).sum();
        let height = self.fragments.iter().map(|f| f.rect.height).max().unwrap_or(0);
        Size::new(width, height).at(self.position)
    }

    // ── Setters ──────────────────────────────────────────────────────

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
        self.relayout();
    }

    pub fn set_text_size(&mut self, size: u32) -> Result<(), ConfigError> {
        self.font.size = config::text_size(size)?;
        self.relayout();
        Ok(())
    }

    pub fn set_font(&mut self, family: &str) -> Result<(), ConfigError> {
        config::font_family(family)?;
        self.font.family = family.to_owned();
        self.relayout();
        Ok(())
    }

    pub fn set_antialias(&mut self, antialias: bool) {
        self.antialias = antialias;
        self.relayout();
    }

    /// `None` goes back to the theme color.
    pub fn set_color(&mut self, color: Option<Color>) {
        self.color = color;
        self.relayout();
    }

    pub fn set_position(&mut self, x: i32, y: i32) {
        self.position = Offset::new(x, y);
        self.relayout();
    }

    pub fn set_palette(&mut self, palette: ColorPalette) {
        self.palette = palette;
        self.relayout();
    }

    pub fn add_color(&mut self, keyword: &str, color: Color) -> Result<(), PaletteError> {
        self.palette.add_color(keyword, color)?;
        self.relayout();
        Ok(())
    }

    pub fn add_color_str(&mut self, keyword: &str, hex: &str) -> Result<(), PaletteError> {
        self.palette.add_color_str(keyword, hex)?;
        self.relayout();
        Ok(())
    }

    pub fn add_reset(&mut self, keyword: &str) -> Result<(), PaletteError> {
        self.palette.add_reset(keyword)?;
        self.relayout();
        Ok(())
    }

    pub fn remove_keyword(&mut self, keyword: &str) -> Result<(), PaletteError> {
        self.palette.remove(keyword)?;
        self.relayout();
        Ok(())
    }

    pub fn set_theme(&mut self, name: &str) -> Result<(), ConfigError> {
        let theme = config::resolve_theme(&self.ctx, Some(name))?;
        self.reload_theme(theme);
        Ok(())
    }

    fn relayout(&mut self) {
        let spans = self.palette.tokenize(&self.text, self.base_color());
        let mut x = self.position.x;
        self.fragments = spans
            .into_iter()
            .map(|span| {
                let surface =
                    TextSurface::render(self.ctx.measurer(), &span.text, &self.font, span.color, self.antialias);
                let rect = surface.size.at(Offset::new(x, self.position.y));
                x += rect.width;
                Fragment { surface, rect }
            })
            .collect();
    }
}

impl Element for ColoredLabel {
    fn element_type(&self) -> &str {
        "ColoredLabel"
    }

    fn render(&self, surface: &mut dyn Surface) {
        for fragment in &self.fragments {
            surface.blit(&fragment.surface, fragment.rect);
        }
    }

    fn reload_theme(&mut self, theme: Rc<Theme>) {
        self.theme = theme;
        self.relayout();
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

// ===========================================================================
// Tests
// ===========================================================================
