//! ToolTip: a single-shot hint box that disappears once the pointer leaves.
//!
//! A tooltip is built visible. On its first update it claims the context's
//! tooltip-focus slot; if another tooltip already holds it, this one hides
//! immediately. Leaving the rectangle hides it for good. Owners drop hidden
//! tooltips and build a fresh one when they need it again.

use std::any::Any;
use std::rc::Rc;

use crate::align::TextAlignment;
use crate::backend::{Font, Platform, DEFAULT_FONT_FAMILY, DEFAULT_TEXT_SIZE};
use crate::color::Color;
use crate::context::Context;
use crate::geometry::{Offset, Region};
use crate::render::{RectStyle, Surface, TextSurface};
use crate::theme::Theme;
use crate::widget::config::{self, ConfigError};
use crate::widget::Element;

// ---------------------------------------------------------------------------
// ToolTipOptions
// ---------------------------------------------------------------------------

/// Construction options for [`ToolTip`].
#[derive(Debug, Clone, PartialEq)]
pub struct ToolTipOptions {
    pub width: i32,
    pub height: i32,
    pub theme: Option<String>,
    pub text: String,
    pub text_size: u32,
    pub font: String,
    /// `None` rounds automatically; the default is square corners.
    pub border_radius: Option<i32>,
}

impl Default for ToolTipOptions {
    fn default() -> Self {
        Self {
            width: 200,
            height: 40,
            theme: None,
            text: String::new(),
            text_size: DEFAULT_TEXT_SIZE,
            font: DEFAULT_FONT_FAMILY.to_owned(),
            border_radius: Some(0),
        }
    }
}

impl ToolTipOptions {
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    pub fn with_size(mut self, width: i32, height: i32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    pub fn with_theme(mut self, name: impl Into<String>) -> Self {
        self.theme = Some(name.into());
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

    pub fn with_border_radius(mut self, radius: Option<i32>) -> Self {
        self.border_radius = radius;
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        config::dimension("width", self.width)?;
        config::dimension("height", self.height)?;
        config::text_size(self.text_size)?;
        config::font_family(&self.font)?;
        config::border_radius(self.border_radius, self.width, self.height)?;
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// ToolTip
// ---------------------------------------------------------------------------

/// A floating hint box.
#[derive(Debug)]
pub struct ToolTip {
    ctx: Context,
    rect: Region,
    theme: Rc<Theme>,
    text: String,
    font: Font,
    border_radius: u32,
    fill: Color,
    text_color: Color,
    text_surface: TextSurface,
    hidden: bool,
    holds_focus: bool,
}

impl ToolTip {
    pub fn new(x: i32, y: i32, options: ToolTipOptions, ctx: &Context) -> Result<Self, ConfigError> {
        options.validate()?;
        let theme = config::resolve_theme(ctx, options.theme.as_deref())?;
        let border_radius = config::border_radius(options.border_radius, options.width, options.height)?;
        let font = Font::new(options.font, options.text_size);
        let (fill, text_color) = colors(&theme);
        let text_surface = TextSurface::render(ctx.measurer(), &options.text, &font, text_color, true);
        log::debug!("tooltip '{}' shown at ({x}, {y})", options.text);
        Ok(Self {
            ctx: ctx.clone(),
            rect: Region::new(x, y, options.width, options.height),
            theme,
            text: options.text,
            font,
            border_radius,
            fill,
            text_color,
            text_surface,
            hidden: false,
            holds_focus: false,
        })
    }

    /// Build a tooltip centered on `center`.
    pub fn centered_on(center: Offset, options: ToolTipOptions, ctx: &Context) -> Result<Self, ConfigError> {
        let x = center.x - options.width / 2;
        let y = center.y - options.height / 2;
        Self::new(x, y, options, ctx)
    }

    pub fn rect(&self) -> Region {
        self.rect
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn theme(&self) -> &Rc<Theme> {
        &self.theme
    }

    pub fn is_hidden(&self) -> bool {
        self.hidden
    }

    /// Whether this tooltip currently owns the context's focus slot.
    pub fn holds_focus(&self) -> bool {
        self.holds_focus
    }

    /// Where the text is drawn: centered in the box.
    pub fn text_rect(&self) -> Region {
        TextAlignment::default().place(self.rect, self.text_surface.size)
    }

    /// Hide permanently and give up the focus slot.
    pub fn hide(&mut self) {
        if !self.hidden {
            log::debug!("tooltip '{}' hidden", self.text);
        }
        self.hidden = true;
        self.release_focus();
    }

    fn release_focus(&mut self) {
        if self.holds_focus {
            self.ctx.release_tooltip_focus();
            self.holds_focus = false;
        }
    }
}

fn colors(theme: &Theme) -> (Color, Color) {
    let c = theme.colors();
    (theme.shade(c.surface, "tooltip"), c.on_surface)
}

impl Element for ToolTip {
    fn element_type(&self) -> &str {
        "ToolTip"
    }

    fn update(&mut self, _dt_ms: f64, platform: &mut dyn Platform) {
        if self.hidden {
            return;
        }
        if !self.rect.contains(platform.pointer_position()) {
            self.hide();
            return;
        }
        if !self.holds_focus {
            if self.ctx.claim_tooltip_focus() {
                self.holds_focus = true;
            } else {
                self.hide();
            }
        }
    }

    fn render(&self, surface: &mut dyn Surface) {
        if self.hidden {
            return;
        }
        surface.draw_rect(self.rect, self.fill, RectStyle::filled(self.border_radius));
        if !self.text_surface.is_empty() {
            surface.blit(&self.text_surface, self.text_rect());
        }
    }

    fn reload_theme(&mut self, theme: Rc<Theme>) {
        let (fill, text_color) = colors(&theme);
        self.theme = theme;
        self.fill = fill;
        if text_color != self.text_color {
            self.text_color = text_color;
            self.text_surface =
                TextSurface::render(self.ctx.measurer(), &self.text, &self.font, text_color, true);
        }
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

impl Drop for ToolTip {
    fn drop(&mut self) {
        self.release_focus();
    }
}

// ===========================================================================
// Tests
// ===========================================================================
