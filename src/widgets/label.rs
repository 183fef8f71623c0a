//! Label: positioned, single-colored text.

use std::any::Any;
use std::rc::Rc;

use crate::backend::{Font, DEFAULT_FONT_FAMILY, DEFAULT_TEXT_SIZE};
use crate::color::Color;
use crate::context::Context;
use crate::geometry::{Offset, Region};
use crate::render::{Surface, TextSurface};
use crate::theme::Theme;
use crate::widget::config::{self, ConfigError};
use crate::widget::Element;

/// Construction options for [`Label`].
#[derive(Debug, Clone, PartialEq)]
pub struct LabelOptions {
    pub theme: Option<String>,
    pub text: String,
    pub text_size: u32,
    pub font: String,
    pub antialias: bool,
    /// Overrides the theme's `on-background` color.
    pub color: Option<Color>,
}

impl Default for LabelOptions {
    fn default() -> Self {
        Self {
            theme: None,
            text: String::new(),
            text_size: DEFAULT_TEXT_SIZE,
            font: DEFAULT_FONT_FAMILY.to_owned(),
            antialias: true,
            color: None,
        }
    }
}

impl LabelOptions {
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

/// A text label whose size is that of its measured text.
#[derive(Debug)]
pub struct Label {
    ctx: Context,
    position: Offset,
    theme: Rc<Theme>,
    text: String,
    font: Font,
    antialias: bool,
    color: Option<Color>,
    surface: TextSurface,
}

impl Label {
    pub fn new(x: i32, y: i32, options: LabelOptions, ctx: &Context) -> Result<Self, ConfigError> {
        options.validate()?;
        let theme = config::resolve_theme(ctx, options.theme.as_deref())?;
        let font = Font::new(options.font, options.text_size);
        let color = options.color.unwrap_or(theme.colors().on_background);
        let surface = TextSurface::render(ctx.measurer(), &options.text, &font, color, options.antialias);
        Ok(Self {
            ctx: ctx.clone(),
            position: Offset::new(x, y),
            theme,
            text: options.text,
            font,
            antialias: options.antialias,
            color: options.color,
            surface,
        })
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn font(&self) -> &Font {
        &self.font
    }

    pub fn antialias(&self) -> bool {
        self.antialias
    }

    pub fn theme(&self) -> &Rc<Theme> {
        &self.theme
    }

    pub fn position(&self) -> Offset {
        self.position
    }

    /// The color the text is drawn in.
    pub fn color(&self) -> Color {
        self.color.unwrap_or(self.theme.colors().on_background)
    }

    pub fn width(&self) -> i32 {
        self.surface.size.width
    }

    pub fn height(&self) -> i32 {
        self.surface.size.height
    }

    pub fn rect(&self) -> Region {
        self.surface.size.at(self.position)
    }

    pub fn text_surface(&self) -> &TextSurface {
        &self.surface
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
        self.refresh();
    }

    pub fn set_text_size(&mut self, size: u32) -> Result<(), ConfigError> {
        self.font.size = config::text_size(size)?;
        self.refresh();
        Ok(())
    }

    pub fn set_font(&mut self, family: &str) -> Result<(), ConfigError> {
        config::font_family(family)?;
        self.font.family = family.to_owned();
        self.refresh();
        Ok(())
    }

    pub fn set_antialias(&mut self, antialias: bool) {
        self.antialias = antialias;
        self.refresh();
    }

    /// `None` goes back to the theme color.
    pub fn set_color(&mut self, color: Option<Color>) {
        self.color = color;
        self.refresh();
    }

    pub fn set_position(&mut self, x: i32, y: i32) {
        self.position = Offset::new(x, y);
    }

    /// Center the measured text on `(x, y)`.
    pub fn set_center(&mut self, x: i32, y: i32) {
        self.position = self.rect().centered_on(Offset::new(x, y)).offset();
    }

    pub fn set_theme(&mut self, name: &str) -> Result<(), ConfigError> {
        let theme = config::resolve_theme(&self.ctx, Some(name))?;
        self.reload_theme(theme);
        Ok(())
    }

    fn refresh(&mut self) {
        let color = self.color();
        if !self.surface.matches(&self.text, &self.font, color, self.antialias) {
            self.surface = TextSurface::render(self.ctx.measurer(), &self.text, &self.font, color, self.antialias);
        }
    }
}

impl Element for Label {
    fn element_type(&self) -> &str {
        "Label"
    }

    fn render(&self, surface: &mut dyn Surface) {
        if !self.surface.is_empty() {
            surface.blit(&self.surface, self.rect());
        }
    }

    fn reload_theme(&mut self, theme: Rc<Theme>) {
        self.theme = theme;
        self.refresh();
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}
