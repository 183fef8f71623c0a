//! Button widget: a themed, clickable rectangle with aligned text.
//!
//! Every frame the button reads the pointer and moves through the
//! [`InteractionState`] machine. Click and hover callbacks are
//! edge-triggered: a click fires once when the button becomes pressed, a
//! hover fires once when it becomes hovered from anything but pressed.
//!
//! Colors come from the theme: the surface color shifted by the state's
//! brightness offset. Any state's colors can be overridden explicitly.

use std::any::Any;
use std::rc::Rc;

use crate::align::{HorizontalAlign, TextAlignment, VerticalAlign};
use crate::backend::{Font, Platform, SystemCursor, DEFAULT_FONT_FAMILY, DEFAULT_TEXT_SIZE};
use crate::color::Color;
use crate::context::Context;
use crate::geometry::{Offset, Region, Size};
use crate::render::{RectStyle, Surface, TextSurface};
use crate::theme::Theme;
use crate::widget::config::{self, ConfigError};
use crate::widget::{Callback, CursorFeedback, Element, InteractionState, StateError};
use crate::widgets::tooltip::{ToolTip, ToolTipOptions};

/// Minimum outline width drawn while hovered.
pub const HOVER_OUTLINE_WIDTH: u32 = 3;

// ---------------------------------------------------------------------------
// StateColors
// ---------------------------------------------------------------------------

/// Fill, outline and text color for one interaction state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct StateColors {
    pub fill: Color,
    pub outline: Color,
    pub text: Color,
}

impl StateColors {
    /// Derive a state's colors from a theme.
    pub fn from_theme(theme: &Theme, state: InteractionState) -> Self {
        let c = theme.colors();
        match state {
            InteractionState::Inactive => Self {
                fill: c.surface,
                outline: theme.shade(c.surface, "outline"),
                text: c.on_surface,
            },
            InteractionState::Hovered => Self {
                fill: theme.shade(c.surface, "hovered"),
                outline: theme.shade(c.surface, "hovered-outline"),
                text: c.on_surface,
            },
            InteractionState::Pressed => Self {
                fill: theme.shade(c.surface, "pressed"),
                outline: theme.shade(c.surface, "pressed-outline"),
                text: theme.shade(c.on_surface, "pressed-text"),
            },
            InteractionState::Disabled => Self {
                fill: theme.shade(c.surface, "disabled"),
                outline: theme.shade(c.surface, "disabled-outline"),
                text: theme.shade(c.on_surface, "disabled-text"),
            },
        }
    }
}

fn slot(state: InteractionState) -> usize {
    match state {
        InteractionState::Inactive => 0,
        InteractionState::Hovered => 1,
        InteractionState::Pressed => 2,
        InteractionState::Disabled => 3,
    }
}

fn theme_colors(theme: &Theme) -> [StateColors; 4] {
    InteractionState::ALL.map(|state| StateColors::from_theme(theme, state))
}

// ---------------------------------------------------------------------------
// ButtonOptions
// ---------------------------------------------------------------------------

/// Hover tooltip attached to a button.
#[derive(Debug, Clone, PartialEq)]
pub struct TooltipSpec {
    pub text: String,
    /// How long the pointer must hover before the tooltip appears.
    pub delay_ms: f64,
}

/// Construction options for [`Button`].
#[derive(Debug)]
pub struct ButtonOptions {
    pub width: i32,
    pub height: i32,
    pub theme: Option<String>,
    pub text: String,
    pub text_size: u32,
    pub font: String,
    pub antialias: bool,
    pub horizontal_align: HorizontalAlign,
    pub vertical_align: VerticalAlign,
    pub text_margin: i32,
    /// `None` rounds automatically from the size.
    pub border_radius: Option<i32>,
    pub border_width: i32,
    pub on_click: Option<Callback>,
    pub on_hover: Option<Callback>,
    pub cursor_change_hover: bool,
    pub cursor_change_disabled: bool,
    pub disabled: bool,
    pub tooltip: Option<TooltipSpec>,
}

impl Default for ButtonOptions {
    fn default() -> Self {
        Self {
            width: 100,
            height: 40,
            theme: None,
            text: String::new(),
            text_size: DEFAULT_TEXT_SIZE,
            font: DEFAULT_FONT_FAMILY.to_owned(),
            antialias: true,
            horizontal_align: HorizontalAlign::Center,
            vertical_align: VerticalAlign::Center,
            text_margin: 10,
            border_radius: None,
            border_width: 2,
            on_click: None,
            on_hover: None,
            cursor_change_hover: true,
            cursor_change_disabled: false,
            disabled: false,
            tooltip: None,
        }
    }
}

impl ButtonOptions {
    pub fn with_size(mut self, width: i32, height: i32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

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

    pub fn with_alignment(mut self, horizontal: HorizontalAlign, vertical: VerticalAlign) -> Self {
        self.horizontal_align = horizontal;
        self.vertical_align = vertical;
        self
    }

    pub fn with_text_margin(mut self, margin: i32) -> Self {
        self.text_margin = margin;
        self
    }

    pub fn with_border_radius(mut self, radius: i32) -> Self {
        self.border_radius = Some(radius);
        self
    }

    pub fn with_border_width(mut self, width: i32) -> Self {
        self.border_width = width;
        self
    }

    pub fn with_on_click(mut self, callback: impl Into<Callback>) -> Self {
        self.on_click = Some(callback.into());
        self
    }

    pub fn with_on_hover(mut self, callback: impl Into<Callback>) -> Self {
        self.on_hover = Some(callback.into());
        self
    }

    pub fn with_cursor_change_hover(mut self, enabled: bool) -> Self {
        self.cursor_change_hover = enabled;
        self
    }

    pub fn with_cursor_change_disabled(mut self, enabled: bool) -> Self {
        self.cursor_change_disabled = enabled;
        self
    }

    pub fn with_disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Show a tooltip after the pointer hovers for `delay_ms`.
    pub fn with_tooltip(mut self, text: impl Into<String>, delay_ms: f64) -> Self {
        self.tooltip = Some(TooltipSpec { text: text.into(), delay_ms });
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        config::dimension("width", self.width)?;
        config::dimension("height", self.height)?;
        config::text_size(self.text_size)?;
        config::font_family(&self.font)?;
        config::margin(self.text_margin)?;
        config::border_radius(self.border_radius, self.width, self.height)?;
        config::border_width(self.border_width)?;
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Button
// ---------------------------------------------------------------------------

/// A clickable button.
///
/// # Examples
///
/// ```ignore
/// let ok = Button::new(10, 10, ButtonOptions::default().with_text("OK").with_on_click(|| save()), &ctx)?;
/// ```
#[derive(Debug)]
pub struct Button {
    ctx: Context,
    rect: Region,
    theme: Rc<Theme>,
    text: String,
    font: Font,
    antialias: bool,
    alignment: TextAlignment,
    radius: Option<u32>,
    border_width: u32,
    theme_colors: [StateColors; 4],
    overrides: [Option<StateColors>; 4],
    state: InteractionState,
    on_click: Option<Callback>,
    on_hover: Option<Callback>,
    cursor_change_hover: bool,
    cursor_change_disabled: bool,
    cursor: CursorFeedback,
    text_surface: TextSurface,
    text_rect: Region,
    tooltip_spec: Option<TooltipSpec>,
    tooltip: Option<ToolTip>,
    hover_ms: f64,
    tooltip_shown: bool,
}

impl Button {
    /// Validate `options` and build a button at `(x, y)`.
    pub fn new(x: i32, y: i32, options: ButtonOptions, ctx: &Context) -> Result<Self, ConfigError> {
        options.validate()?;
        let theme = config::resolve_theme(ctx, options.theme.as_deref())?;
        let radius = match options.border_radius {
            None => None,
            Some(r) => Some(config::border_radius(Some(r), options.width, options.height)?),
        };
        let margin = config::margin(options.text_margin)?;
        let border_width = config::border_width(options.border_width)?;
        let font = Font::new(options.font, options.text_size);
        let theme_colors = theme_colors(&theme);
        let state = if options.disabled {
            InteractionState::Disabled
        } else {
            InteractionState::Inactive
        };
        let text_surface = TextSurface::render(
            ctx.measurer(),
            &options.text,
            &font,
            theme_colors[slot(state)].text,
            options.antialias,
        );

        let mut button = Self {
            ctx: ctx.clone(),
            rect: Region::new(x, y, options.width, options.height),
            theme,
            text: options.text,
            font,
            antialias: options.antialias,
            alignment: TextAlignment::new(options.horizontal_align, options.vertical_align, margin),
            radius,
            border_width,
            theme_colors,
            overrides: [None; 4],
            state,
            on_click: options.on_click,
            on_hover: options.on_hover,
            cursor_change_hover: options.cursor_change_hover,
            cursor_change_disabled: options.cursor_change_disabled,
            cursor: CursorFeedback::default(),
            text_surface,
            text_rect: Region::EMPTY,
            tooltip_spec: options.tooltip,
            tooltip: None,
            hover_ms: 0.0,
            tooltip_shown: false,
        };
        button.place_text();
        Ok(button)
    }

    // ── Accessors ────────────────────────────────────────────────────

    pub fn rect(&self) -> Region {
        self.rect
    }

    pub fn position(&self) -> Offset {
        self.rect.offset()
    }

    pub fn size(&self) -> Size {
        self.rect.size()
    }

    pub fn center(&self) -> Offset {
        self.rect.center()
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

    pub fn alignment(&self) -> TextAlignment {
        self.alignment
    }

    pub fn theme(&self) -> &Rc<Theme> {
        &self.theme
    }

    pub fn state(&self) -> InteractionState {
        self.state
    }

    pub fn is_disabled(&self) -> bool {
        self.state.is_disabled()
    }

    /// Effective corner radius in pixels.
    pub fn border_radius(&self) -> u32 {
        self.radius
            .unwrap_or_else(|| config::auto_radius(self.rect.width, self.rect.height))
    }

    pub fn border_width(&self) -> u32 {
        self.border_width
    }

    /// Colors used for `state`, including any override.
    pub fn colors(&self, state: InteractionState) -> StateColors {
        self.overrides[slot(state)].unwrap_or(self.theme_colors[slot(state)])
    }

    /// Colors for the current state.
    pub fn active_colors(&self) -> StateColors {
        self.colors(self.state)
    }

    pub fn text_surface(&self) -> &TextSurface {
        &self.text_surface
    }

    /// Where the text is blitted.
    pub fn text_rect(&self) -> Region {
        self.text_rect
    }

    /// The tooltip currently on screen, if any.
    pub fn tooltip(&self) -> Option<&ToolTip> {
        self.tooltip.as_ref()
    }

    // ── Setters ──────────────────────────────────────────────────────

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
        self.refresh_text();
    }

    pub fn set_text_size(&mut self, size: u32) -> Result<(), ConfigError> {
        self.font.size = config::text_size(size)?;
        self.refresh_text();
        Ok(())
    }

    pub fn set_font(&mut self, family: &str) -> Result<(), ConfigError> {
        config::font_family(family)?;
        self.font.family = family.to_owned();
        self.refresh_text();
        Ok(())
    }

    pub fn set_antialias(&mut self, antialias: bool) {
        self.antialias = antialias;
        self.refresh_text();
    }

    pub fn set_alignment(&mut self, horizontal: HorizontalAlign, vertical: VerticalAlign) {
        self.alignment.horizontal = horizontal;
        self.alignment.vertical = vertical;
        self.place_text();
    }

    pub fn set_text_margin(&mut self, margin: i32) -> Result<(), ConfigError> {
        self.alignment.margin = config::margin(margin)?;
        self.place_text();
        Ok(())
    }

    /// `None` switches to automatic rounding.
    pub fn set_border_radius(&mut self, radius: Option<i32>) -> Result<(), ConfigError> {
        self.radius = match radius {
            None => None,
            Some(r) => Some(config::border_radius(Some(r), self.rect.width, self.rect.height)?),
        };
        Ok(())
    }

    pub fn set_border_width(&mut self, width: i32) -> Result<(), ConfigError> {
        self.border_width = config::border_width(width)?;
        Ok(())
    }

    pub fn set_position(&mut self, x: i32, y: i32) {
        self.rect = self.rect.with_offset(Offset::new(x, y));
        self.place_text();
    }

    pub fn set_center(&mut self, x: i32, y: i32) {
        self.rect = self.rect.centered_on(Offset::new(x, y));
        self.place_text();
    }

    pub fn set_size(&mut self, width: i32, height: i32) -> Result<(), ConfigError> {
        let width = config::dimension("width", width)?;
        let height = config::dimension("height", height)?;
        self.rect = self.rect.with_size(Size::new(width, height));
        self.place_text();
        Ok(())
    }

    /// Switch to a registered theme.
    pub fn set_theme(&mut self, name: &str) -> Result<(), ConfigError> {
        let theme = config::resolve_theme(&self.ctx, Some(name))?;
        self.reload_theme(theme);
        Ok(())
    }

    /// Replace (or with `None`, clear) the colors used for `state`.
    pub fn set_color_override(&mut self, state: InteractionState, colors: Option<StateColors>) {
        self.overrides[slot(state)] = colors;
        self.refresh_text();
    }

    /// Force the interaction state. `Disabled` sticks until changed here.
    pub fn set_state(&mut self, state: InteractionState) {
        if state != self.state {
            self.state = state;
            self.refresh_text();
        }
    }

    /// [`set_state`](Self::set_state) by name.
    pub fn set_state_name(&mut self, name: &str) -> Result<(), StateError> {
        self.set_state(name.parse()?);
        Ok(())
    }

    /// Disable, or re-enable into `Inactive`.
    pub fn set_disabled(&mut self, disabled: bool) {
        if disabled {
            self.set_state(InteractionState::Disabled);
        } else if self.state.is_disabled() {
            self.set_state(InteractionState::Inactive);
        }
    }

    pub fn set_on_click(&mut self, callback: Option<Callback>) {
        self.on_click = callback;
    }

    pub fn set_on_hover(&mut self, callback: Option<Callback>) {
        self.on_hover = callback;
    }

    pub fn set_cursor_change_hover(&mut self, enabled: bool) {
        self.cursor_change_hover = enabled;
    }

    pub fn set_cursor_change_disabled(&mut self, enabled: bool) {
        self.cursor_change_disabled = enabled;
    }

    pub fn set_tooltip(&mut self, tooltip: Option<TooltipSpec>) {
        self.tooltip_spec = tooltip;
        self.tooltip = None;
    }

    // ── Internals ────────────────────────────────────────────────────

    /// Re-render the text surface if its inputs changed, then re-place it.
    fn refresh_text(&mut self) {
        let color = self.active_colors().text;
        if !self
            .text_surface
            .matches(&self.text, &self.font, color, self.antialias)
        {
            self.text_surface =
                TextSurface::render(self.ctx.measurer(), &self.text, &self.font, color, self.antialias);
        }
        self.place_text();
    }

    fn place_text(&mut self) {
        self.text_rect = self.alignment.place(self.rect, self.text_surface.size);
    }

    fn wanted_cursor(&self, inside: bool) -> Option<SystemCursor> {
        if self.state.is_disabled() && inside && self.cursor_change_disabled {
            Some(SystemCursor::No)
        } else if self.state.is_engaged() && self.cursor_change_hover {
            Some(SystemCursor::Hand)
        } else {
            None
        }
    }

    fn update_tooltip(&mut self, dt_ms: f64, inside: bool, pointer: Offset, platform: &mut dyn Platform) {
        let Some(spec) = &self.tooltip_spec else {
            return;
        };
        if !inside {
            self.hover_ms = 0.0;
            self.tooltip_shown = false;
        } else if self.state == InteractionState::Hovered && !self.tooltip_shown {
            self.hover_ms += dt_ms;
            if self.hover_ms >= spec.delay_ms {
                self.tooltip_shown = true;
                let options = ToolTipOptions::default()
                    .with_text(spec.text.clone())
                    .with_theme(self.theme.name());
                match ToolTip::centered_on(pointer, options, &self.ctx) {
                    Ok(tip) => self.tooltip = Some(tip),
                    Err(err) => log::warn!("could not show tooltip for button '{}': {err}", self.text),
                }
            }
        }

        if let Some(tip) = &mut self.tooltip {
            tip.update(dt_ms, platform);
            if tip.is_hidden() {
                self.tooltip = None;
            }
        }
    }
}

impl Element for Button {
    fn element_type(&self) -> &str {
        "Button"
    }

    fn update(&mut self, dt_ms: f64, platform: &mut dyn Platform) {
        let pointer = platform.pointer_position();
        let inside = self.rect.contains(pointer);
        let previous = self.state;
        self.state = previous.next(inside, platform.pointer_buttons().primary());

        if self.state == InteractionState::Hovered
            && !matches!(previous, InteractionState::Hovered | InteractionState::Pressed)
        {
            if let Some(callback) = &mut self.on_hover {
                callback.call();
            }
        }
        if self.state == InteractionState::Pressed && previous != InteractionState::Pressed {
            if let Some(callback) = &mut self.on_click {
                callback.call();
            }
        }
        if self.state != previous {
            self.refresh_text();
        }

        let wanted = self.wanted_cursor(inside);
        self.cursor.apply(platform, wanted);
        self.update_tooltip(dt_ms, inside, pointer, platform);
    }

    fn render(&self, surface: &mut dyn Surface) {
        let colors = self.active_colors();
        let radius = self.border_radius();
        surface.draw_rect(self.rect, colors.fill, RectStyle::filled(radius));

        let outline = if self.state == InteractionState::Hovered {
            self.border_width.max(HOVER_OUTLINE_WIDTH)
        } else {
            self.border_width
        };
        if outline > 0 {
            surface.draw_rect(self.rect, colors.outline, RectStyle::outline(outline, radius));
        }
        if !self.text_surface.is_empty() {
            surface.blit(&self.text_surface, self.text_rect);
        }
        if let Some(tip) = &self.tooltip {
            tip.render(surface);
        }
    }

    fn reload_theme(&mut self, theme: Rc<Theme>) {
        self.theme_colors = theme_colors(&theme);
        self.theme = theme;
        self.refresh_text();
        if let Some(tip) = &mut self.tooltip {
            tip.reload_theme(Rc::clone(&self.theme));
        }
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{DrawCommand, HeadlessPlatform, MonospaceMetrics, RecordingSurface};
    use std::cell::Cell;

    struct Rig {
        ctx: Context,
        metrics: Rc<MonospaceMetrics>,
        platform: HeadlessPlatform,
    }

    impl Rig {
        fn new() -> Self {
            let metrics = Rc::new(MonospaceMetrics::new());
            let ctx = Context::with_builtin_themes(metrics.clone()).unwrap();
            Self { ctx, metrics, platform: HeadlessPlatform::new() }
        }

        fn button(&self, options: ButtonOptions) -> Button {
            Button::new(10, 10, options, &self.ctx).unwrap()
        }

        fn frame(&mut self, button: &mut Button, x: i32, y: i32, held: bool) {
            self.platform.move_pointer(x, y);
            if held {
                self.platform.press();
            } else {
                self.platform.release();
            }
            button.update(16.0, &mut self.platform);
        }
    }

    fn counter() -> (Rc<Cell<u32>>, Callback) {
        let hits = Rc::new(Cell::new(0));
        let h = Rc::clone(&hits);
        (hits, Callback::new(move || h.set(h.get() + 1)))
    }

    // ---- Construction ----

    #[test]
    fn defaults() {
        let rig = Rig::new();
        let b = rig.button(ButtonOptions::default());
        assert_eq!(b.rect(), Region::new(10, 10, 100, 40));
        assert_eq!(b.state(), InteractionState::Inactive);
        assert_eq!(b.border_radius(), 10);
        assert_eq!(b.border_width(), 2);
        assert_eq!(b.font(), &Font::new("consolas", 20));
        assert_eq!(b.theme().name(), "default");
    }

    #[test]
    fn negative_width_rejected() {
        let rig = Rig::new();
        let err = Button::new(0, 0, ButtonOptions::default().with_size(-1, 40), &rig.ctx).unwrap_err();
        assert_eq!(err, ConfigError::NegativeDimension { field: "width", value: -1 });
    }

    #[test]
    fn invalid_options_rejected_before_measuring() {
        let rig = Rig::new();
        for options in [
            ButtonOptions::default().with_border_radius(-1),
            ButtonOptions::default().with_border_width(-3),
            ButtonOptions::default().with_text_margin(-1),
            ButtonOptions::default().with_text_size(0),
            ButtonOptions::default().with_theme("missing"),
        ] {
            assert!(Button::new(0, 0, options, &rig.ctx).is_err());
        }
        assert_eq!(rig.metrics.calls(), 0);
    }

    #[test]
    fn zero_radius_is_square() {
        let rig = Rig::new();
        assert_eq!(rig.button(ButtonOptions::default().with_border_radius(0)).border_radius(), 0);
    }

    #[test]
    fn text_is_aligned_in_rect() {
        let rig = Rig::new();
        let b = rig.button(
            ButtonOptions::default()
                .with_text("hi")
                .with_alignment(HorizontalAlign::Left, VerticalAlign::Top),
        );
        assert_eq!(b.text_rect(), Region::new(20, 20, 20, 20));
    }

    // ---- State machine ----

    #[test]
    fn click_fires_once_per_press() {
        let mut rig = Rig::new();
        let (clicks, cb) = counter();
        let mut b = rig.button(ButtonOptions::default().with_on_click(cb));
        rig.frame(&mut b, 50, 30, false);
        assert_eq!(b.state(), InteractionState::Hovered);
        for _ in 0..5 {
            rig.frame(&mut b, 50, 30, true);
        }
        assert_eq!(b.state(), InteractionState::Pressed);
        rig.frame(&mut b, 50, 30, false);
        assert_eq!(clicks.get(), 1);
    }

    #[test]
    fn dragging_in_with_button_held_does_not_press() {
        let mut rig = Rig::new();
        let (clicks, cb) = counter();
        let mut b = rig.button(ButtonOptions::default().with_on_click(cb));
        rig.frame(&mut b, 0, 0, true);
        rig.frame(&mut b, 50, 30, true);
        assert_eq!(b.state(), InteractionState::Inactive);
        assert_eq!(clicks.get(), 0);
    }

    #[test]
    fn hover_fires_on_entry_not_after_release() {
        let mut rig = Rig::new();
        let (hovers, cb) = counter();
        let mut b = rig.button(ButtonOptions::default().with_on_hover(cb));
        rig.frame(&mut b, 50, 30, false);
        rig.frame(&mut b, 50, 30, false);
        assert_eq!(hovers.get(), 1);
        rig.frame(&mut b, 50, 30, true);
        rig.frame(&mut b, 50, 30, false);
        assert_eq!(b.state(), InteractionState::Hovered);
        assert_eq!(hovers.get(), 1);
        rig.frame(&mut b, 0, 0, false);
        rig.frame(&mut b, 50, 30, false);
        assert_eq!(hovers.get(), 2);
    }

    #[test]
    fn disabled_suppresses_transitions_until_cleared() {
        let mut rig = Rig::new();
        let (clicks, cb) = counter();
        let mut b = rig.button(ButtonOptions::default().with_on_click(cb));
        b.set_disabled(true);
        rig.frame(&mut b, 50, 30, false);
        rig.frame(&mut b, 50, 30, true);
        assert_eq!(b.state(), InteractionState::Disabled);
        assert_eq!(clicks.get(), 0);
        b.set_disabled(false);
        rig.frame(&mut b, 50, 30, false);
        assert_eq!(b.state(), InteractionState::Hovered);
    }

    #[test]
    fn state_by_name() {
        let rig = Rig::new();
        let mut b = rig.button(ButtonOptions::default());
        b.set_state_name("DISABLED").unwrap();
        assert!(b.is_disabled());
        assert_eq!(b.set_state_name("gone"), Err(StateError::Unknown("gone".into())));
        assert!(b.is_disabled());
    }

    // ---- Cursor ----

    #[test]
    fn hand_cursor_while_engaged_then_arrow_once() {
        let mut rig = Rig::new();
        let mut b = rig.button(ButtonOptions::default());
        rig.frame(&mut b, 50, 30, false);
        rig.frame(&mut b, 0, 0, false);
        rig.frame(&mut b, 0, 0, false);
        assert_eq!(rig.platform.cursor_history(), &[SystemCursor::Hand, SystemCursor::Arrow]);
    }

    #[test]
    fn no_cursor_over_disabled_only_when_enabled() {
        let mut rig = Rig::new();
        let mut quiet = rig.button(ButtonOptions::default().with_disabled(true));
        rig.frame(&mut quiet, 50, 30, false);
        assert!(rig.platform.cursor_history().is_empty());

        let mut loud = rig.button(
            ButtonOptions::default()
                .with_disabled(true)
                .with_cursor_change_disabled(true),
        );
        rig.frame(&mut loud, 50, 30, false);
        assert_eq!(rig.platform.cursor_history(), &[SystemCursor::No]);
    }

    #[test]
    fn hover_cursor_can_be_turned_off() {
        let mut rig = Rig::new();
        let mut b = rig.button(ButtonOptions::default().with_cursor_change_hover(false));
        rig.frame(&mut b, 50, 30, false);
        assert!(rig.platform.cursor_history().is_empty());
    }

    // ---- Rendering ----

    #[test]
    fn hovered_draws_thick_outline() {
        let mut rig = Rig::new();
        let mut b = rig.button(ButtonOptions::default().with_border_width(0));
        let mut surface = RecordingSurface::new();
        b.render(&mut surface);
        assert_eq!(surface.commands().len(), 1);

        rig.frame(&mut b, 50, 30, false);
        let mut surface = RecordingSurface::new();
        b.render(&mut surface);
        let hovered = b.colors(InteractionState::Hovered);
        assert_eq!(
            surface.commands(),
            &[
                DrawCommand::Rect { rect: b.rect(), color: hovered.fill, style: RectStyle::filled(10) },
                DrawCommand::Rect {
                    rect: b.rect(),
                    color: hovered.outline,
                    style: RectStyle::outline(HOVER_OUTLINE_WIDTH, 10),
                },
            ]
        );
    }

    #[test]
    fn state_colors_follow_theme_offsets() {
        let rig = Rig::new();
        let b = rig.button(ButtonOptions::default());
        let t = rig.ctx.default_theme();
        let surface = t.colors().surface;
        assert_eq!(b.colors(InteractionState::Inactive).fill, surface);
        assert_eq!(b.colors(InteractionState::Hovered).fill, t.shade(surface, "hovered"));
        assert_eq!(
            b.colors(InteractionState::Disabled).text,
            t.shade(t.colors().on_surface, "disabled-text")
        );
    }

    #[test]
    fn text_not_remeasured_while_color_unchanged() {
        let mut rig = Rig::new();
        let mut b = rig.button(ButtonOptions::default().with_text("go"));
        let baseline = rig.metrics.calls();
        // Inactive and hovered share a text color.
        for _ in 0..10 {
            rig.frame(&mut b, 50, 30, false);
            rig.frame(&mut b, 0, 0, false);
        }
        assert_eq!(rig.metrics.calls(), baseline);
        // Pressed text differs once.
        rig.frame(&mut b, 50, 30, false);
        rig.frame(&mut b, 50, 30, true);
        rig.frame(&mut b, 50, 30, true);
        assert_eq!(rig.metrics.calls(), baseline + 1);
    }

    #[test]
    fn color_override_applies_to_state() {
        let rig = Rig::new();
        let mut b = rig.button(ButtonOptions::default());
        let custom = StateColors { fill: Color::rgb(1, 2, 3), outline: Color::BLACK, text: Color::WHITE };
        b.set_color_override(InteractionState::Inactive, Some(custom));
        assert_eq!(b.active_colors(), custom);
        b.set_color_override(InteractionState::Inactive, None);
        assert_eq!(b.active_colors().fill, rig.ctx.default_theme().colors().surface);
    }

    #[test]
    fn theme_reload_recomputes_colors() {
        let rig = Rig::new();
        let mut b = rig.button(ButtonOptions::default());
        b.set_theme("navy").unwrap();
        assert_eq!(b.theme().name(), "navy");
        assert_eq!(b.active_colors().fill, rig.ctx.theme("navy").colors().surface);
        assert_eq!(b.set_theme("ghost"), Err(ConfigError::UnknownTheme("ghost".into())));
    }

    // ---- Geometry ----

    #[test]
    fn geometry_setters_move_text() {
        let rig = Rig::new();
        let mut b = rig.button(ButtonOptions::default().with_text("ab"));
        b.set_center(500, 500);
        assert_eq!(b.center(), Offset::new(500, 500));
        assert_eq!(b.text_rect().center(), Offset::new(500, 500));
        b.set_position(0, 0);
        assert_eq!(b.text_rect(), Region::new(40, 10, 20, 20));
        assert!(b.set_size(-1, 5).is_err());
        b.set_size(20, 20).unwrap();
        assert_eq!(b.size(), Size::new(20, 20));
    }

    // ---- Tooltip ----

    #[test]
    fn tooltip_appears_after_delay_and_only_once_per_entry() {
        let mut rig = Rig::new();
        let mut b = rig.button(ButtonOptions::default().with_tooltip("help", 100.0));
        rig.frame(&mut b, 50, 30, false);
        assert!(b.tooltip().is_none());
        for _ in 0..7 {
            rig.frame(&mut b, 50, 30, false);
        }
        let tip = b.tooltip().unwrap();
        assert_eq!(tip.text(), "help");
        assert_eq!(tip.rect().center(), Offset::new(50, 30));
        assert!(rig.ctx.tooltip_focus_claimed());

        // Leaving the tooltip box hides and drops it.
        rig.frame(&mut b, 500, 500, false);
        assert!(b.tooltip().is_none());
        assert!(!rig.ctx.tooltip_focus_claimed());

        // Re-entering starts a fresh delay.
        rig.frame(&mut b, 50, 30, false);
        assert!(b.tooltip().is_none());
    }
}
