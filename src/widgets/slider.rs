//! Slider: a horizontal track with a draggable thumb.
//!
//! The thumb is a text-less [`Button`]. Grabbing it holds the slider until
//! the primary button is released, and while held the thumb follows the
//! pointer along the track. The value is derived from the thumb offset:
//! `offset / (track_width - thumb_width)`, always in `[0, 1]`.
//!
//! While the thumb is pressed, Left/Right arrows nudge it by `step` pixels.
//! After a nudge the pointer no longer drives the thumb until it crosses
//! back over the thumb's center, so the drag does not snap the thumb back.

use std::any::Any;
use std::rc::Rc;

use crate::backend::{Platform, SystemCursor};
use crate::color::Color;
use crate::context::Context;
use crate::event::input::{InputEvent, Key};
use crate::geometry::{Offset, Region};
use crate::render::{RectStyle, Surface};
use crate::theme::Theme;
use crate::widget::config::{self, ConfigError};
use crate::widget::{CursorFeedback, Element, InteractionState, ValueCallback};
use crate::widgets::button::{Button, ButtonOptions};

/// Direction of the last keyboard nudge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Nudge {
    Left,
    Right,
}

// ---------------------------------------------------------------------------
// SliderOptions
// ---------------------------------------------------------------------------

/// Construction options for [`Slider`].
#[derive(Debug)]
pub struct SliderOptions {
    /// Track width.
    pub width: i32,
    /// Track height.
    pub height: i32,
    pub thumb_width: i32,
    /// `None` makes the thumb square.
    pub thumb_height: Option<i32>,
    pub theme: Option<String>,
    pub track_border_radius: Option<i32>,
    pub thumb_border_radius: Option<i32>,
    /// Keyboard nudge in pixels.
    pub step: f64,
    /// Initial value, clamped to `[0, 1]`.
    pub value: f64,
    pub on_change: Option<ValueCallback<f64>>,
    pub cursor_change_hover: bool,
    pub disabled: bool,
}

impl Default for SliderOptions {
    fn default() -> Self {
        Self {
            width: 300,
            height: 10,
            thumb_width: 30,
            thumb_height: None,
            theme: None,
            track_border_radius: Some(10),
            thumb_border_radius: Some(15),
            step: 1.0,
            value: 0.0,
            on_change: None,
            cursor_change_hover: true,
            disabled: false,
        }
    }
}

impl SliderOptions {
    pub fn with_size(mut self, width: i32, height: i32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    pub fn with_thumb_size(mut self, width: i32, height: i32) -> Self {
        self.thumb_width = width;
        self.thumb_height = Some(height);
        self
    }

    pub fn with_theme(mut self, name: impl Into<String>) -> Self {
        self.theme = Some(name.into());
        self
    }

    pub fn with_track_border_radius(mut self, radius: Option<i32>) -> Self {
        self.track_border_radius = radius;
        self
    }

    pub fn with_thumb_border_radius(mut self, radius: Option<i32>) -> Self {
        self.thumb_border_radius = radius;
        self
    }

    pub fn with_step(mut self, step: f64) -> Self {
        self.step = step;
        self
    }

    pub fn with_value(mut self, value: f64) -> Self {
        self.value = value;
        self
    }

    pub fn with_on_change(mut self, func: impl FnMut(f64) + 'static) -> Self {
        self.on_change = Some(ValueCallback::new(func));
        self
    }

    pub fn with_cursor_change_hover(mut self, enabled: bool) -> Self {
        self.cursor_change_hover = enabled;
        self
    }

    pub fn with_disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    fn thumb_height(&self) -> i32 {
        self.thumb_height.unwrap_or(self.thumb_width)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        config::dimension("width", self.width)?;
        config::dimension("height", self.height)?;
        config::dimension("thumb width", self.thumb_width)?;
        config::dimension("thumb height", self.thumb_height())?;
        if self.thumb_width > self.width {
            return Err(ConfigError::ThumbTooWide { thumb: self.thumb_width, track: self.width });
        }
        validate_step(self.step)?;
        config::border_radius(self.track_border_radius, self.width, self.height)?;
        config::border_radius(self.thumb_border_radius, self.thumb_width, self.thumb_height())?;
        Ok(())
    }
}

fn validate_step(step: f64) -> Result<f64, ConfigError> {
    if step.is_finite() && step > 0.0 {
        Ok(step)
    } else {
        Err(ConfigError::InvalidStep(step))
    }
}

fn clamp_unit(value: f64) -> f64 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(0.0, 1.0)
    }
}

// ---------------------------------------------------------------------------
// Slider
// ---------------------------------------------------------------------------

/// A horizontal value slider.
#[derive(Debug)]
pub struct Slider {
    ctx: Context,
    track: Region,
    theme: Rc<Theme>,
    track_radius: u32,
    track_color: Color,
    thumb: Button,
    /// Thumb x relative to the track's left edge, sub-pixel.
    offset: f64,
    step: f64,
    held: bool,
    dont_move: bool,
    nudged: Option<Nudge>,
    disabled: bool,
    cursor_change_hover: bool,
    cursor: CursorFeedback,
    on_change: Option<ValueCallback<f64>>,
}

impl Slider {
    pub fn new(x: i32, y: i32, options: SliderOptions, ctx: &Context) -> Result<Self, ConfigError> {
        options.validate()?;
        let theme = config::resolve_theme(ctx, options.theme.as_deref())?;
        let track_radius = config::border_radius(options.track_border_radius, options.width, options.height)?;
        let thumb_height = options.thumb_height();

        let mut thumb_options = ButtonOptions::default()
            .with_size(options.thumb_width, thumb_height)
            .with_theme(theme.name())
            .with_cursor_change_hover(options.cursor_change_hover)
            .with_disabled(options.disabled);
        thumb_options.border_radius = options.thumb_border_radius;
        let thumb_y = y + options.height / 2 - thumb_height / 2;
        let thumb = Button::new(x, thumb_y, thumb_options, ctx)?;

        let mut slider = Self {
            ctx: ctx.clone(),
            track: Region::new(x, y, options.width, options.height),
            track_color: track_color(&theme),
            theme,
            track_radius,
            thumb,
            offset: 0.0,
            step: options.step,
            held: false,
            dont_move: false,
            nudged: None,
            disabled: options.disabled,
            cursor_change_hover: options.cursor_change_hover,
            cursor: CursorFeedback::default(),
            on_change: None,
        };
        slider.offset = clamp_unit(options.value) * slider.span();
        slider.place_thumb();
        slider.on_change = options.on_change;
        Ok(slider)
    }

    // ── Accessors ────────────────────────────────────────────────────

    /// Current value in `[0, 1]`.
    pub fn value(&self) -> f64 {
        let span = self.span();
        if span <= 0.0 {
            0.0
        } else {
            clamp_unit(self.offset / span)
        }
    }

    pub fn track_rect(&self) -> Region {
        self.track
    }

    pub fn thumb(&self) -> &Button {
        &self.thumb
    }

    pub fn theme(&self) -> &Rc<Theme> {
        &self.theme
    }

    pub fn track_color(&self) -> Color {
        self.track_color
    }

    /// Whether the thumb is being dragged.
    pub fn is_held(&self) -> bool {
        self.held
    }

    pub fn is_disabled(&self) -> bool {
        self.disabled
    }

    pub fn step(&self) -> f64 {
        self.step
    }

    /// Whether a keyboard nudge is currently holding the thumb still.
    pub fn pointer_suppressed(&self) -> bool {
        self.dont_move
    }

    // ── Setters ──────────────────────────────────────────────────────

    /// Set the value, clamped to `[0, 1]`. NaN becomes 0.
    pub fn set_value(&mut self, value: f64) {
        let before = self.value();
        self.offset = clamp_unit(value) * self.span();
        self.place_thumb();
        self.notify(before);
    }

    pub fn set_step(&mut self, step: f64) -> Result<(), ConfigError> {
        self.step = validate_step(step)?;
        Ok(())
    }

    pub fn set_disabled(&mut self, disabled: bool) {
        self.disabled = disabled;
        self.thumb.set_disabled(disabled);
        if disabled {
            self.held = false;
            self.dont_move = false;
        }
    }

    /// Move the track's top-left corner, keeping the value.
    pub fn set_position(&mut self, x: i32, y: i32) {
        self.track = self.track.with_offset(Offset::new(x, y));
        self.place_thumb();
    }

    pub fn set_on_change(&mut self, callback: Option<ValueCallback<f64>>) {
        self.on_change = callback;
    }

    pub fn set_theme(&mut self, name: &str) -> Result<(), ConfigError> {
        let theme = config::resolve_theme(&self.ctx, Some(name))?;
        self.reload_theme(theme);
        Ok(())
    }

    // ── Internals ────────────────────────────────────────────────────

    fn span(&self) -> f64 {
        f64::from(self.track.width - self.thumb.rect().width)
    }

    fn place_thumb(&mut self) {
        let thumb = self.thumb.rect();
        let x = self.track.x + self.offset.round() as i32;
        let y = self.track.y + self.track.height / 2 - thumb.height / 2;
        self.thumb.set_position(x, y);
    }

    fn thumb_center_x(&self) -> f64 {
        f64::from(self.track.x) + self.offset + f64::from(self.thumb.rect().width) / 2.0
    }

    fn notify(&mut self, before: f64) {
        let after = self.value();
        if after != before {
            if let Some(callback) = &mut self.on_change {
                callback.call(after);
            }
        }
    }

    fn nudge(&mut self, direction: Nudge) {
        let before = self.value();
        let delta = match direction {
            Nudge::Left => -self.step,
            Nudge::Right => self.step,
        };
        self.offset = (self.offset + delta).clamp(0.0, self.span().max(0.0));
        self.dont_move = true;
        self.nudged = Some(direction);
        self.place_thumb();
        self.notify(before);
    }

    fn drag_to(&mut self, pointer_x: i32) {
        let px = f64::from(pointer_x);
        if self.dont_move {
            let center = self.thumb_center_x();
            let crossed = match self.nudged {
                Some(Nudge::Left) => px < center,
                Some(Nudge::Right) => px > center,
                None => true,
            };
            if crossed {
                self.dont_move = false;
                self.nudged = None;
            }
        }
        if self.dont_move {
            return;
        }
        let before = self.value();
        let half_thumb = f64::from(self.thumb.rect().width) / 2.0;
        let left = f64::from(self.track.x);
        self.offset = (px - half_thumb - left).clamp(0.0, self.span().max(0.0));
        self.place_thumb();
        self.notify(before);
    }
}

fn track_color(theme: &Theme) -> Color {
    theme.shade(theme.colors().surface, "slider-track")
}

impl Element for Slider {
    fn element_type(&self) -> &str {
        "Slider"
    }

    fn event(&mut self, event: &InputEvent) {
        if self.disabled || self.thumb.state() != InteractionState::Pressed {
            return;
        }
        match event.as_key().map(|key| key.code) {
            Some(Key::Left) => self.nudge(Nudge::Left),
            Some(Key::Right) => self.nudge(Nudge::Right),
            _ => {}
        }
    }

    fn update(&mut self, dt_ms: f64, platform: &mut dyn Platform) {
        self.thumb.update(dt_ms, platform);
        if self.disabled {
            self.cursor.apply(platform, None);
            return;
        }

        if self.thumb.state() == InteractionState::Pressed {
            self.held = true;
        } else if !platform.pointer_buttons().primary() {
            self.held = false;
            self.dont_move = false;
            self.nudged = None;
        }

        if self.held {
            self.drag_to(platform.pointer_position().x);
            self.thumb.set_state(InteractionState::Pressed);
        }

        let wanted = (self.held && self.cursor_change_hover).then_some(SystemCursor::Hand);
        self.cursor.apply(platform, wanted);
    }

    fn render(&self, surface: &mut dyn Surface) {
        surface.draw_rect(self.track, self.track_color, RectStyle::filled(self.track_radius));
        self.thumb.render(surface);
    }

    fn reload_theme(&mut self, theme: Rc<Theme>) {
        self.track_color = track_color(&theme);
        self.thumb.reload_theme(Rc::clone(&theme));
        self.theme = theme;
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
    use crate::event::input::KeyEvent;
    use crate::testing::{HeadlessPlatform, MonospaceMetrics, RecordingSurface};
    use std::cell::RefCell;

    fn ctx() -> Context {
        Context::with_builtin_themes(Rc::new(MonospaceMetrics::new())).unwrap()
    }

    // Track 0..300 at y 100, thumb 30 wide: span 270, thumb center at 15 + offset.
    fn slider(ctx: &Context) -> Slider {
        Slider::new(0, 100, SliderOptions::default(), ctx).unwrap()
    }

    fn frame(s: &mut Slider, p: &mut HeadlessPlatform, x: i32, held: bool) {
        p.move_pointer(x, 105);
        if held {
            p.press();
        } else {
            p.release();
        }
        s.update(16.0, p);
    }

    fn key(s: &mut Slider, code: Key) {
        s.event(&InputEvent::Key(KeyEvent::plain(code)));
    }

    /// Hover then press the thumb at its center.
    fn grab(s: &mut Slider, p: &mut HeadlessPlatform) {
        let x = s.thumb().center().x;
        frame(s, p, x, false);
        frame(s, p, x, true);
        assert!(s.is_held());
    }

    // ---- Construction ----

    #[test]
    fn thumb_centered_on_track() {
        let c = ctx();
        let s = slider(&c);
        assert_eq!(s.thumb().rect(), Region::new(0, 90, 30, 30));
        assert_eq!(s.value(), 0.0);
    }

    #[test]
    fn rejects_bad_options() {
        let c = ctx();
        let err = Slider::new(0, 0, SliderOptions::default().with_thumb_size(400, 30), &c).unwrap_err();
        assert_eq!(err, ConfigError::ThumbTooWide { thumb: 400, track: 300 });
        for step in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            assert!(Slider::new(0, 0, SliderOptions::default().with_step(step), &c).is_err());
        }
        assert!(Slider::new(0, 0, SliderOptions::default().with_size(-1, 10), &c).is_err());
    }

    #[test]
    fn initial_value_clamped() {
        let c = ctx();
        let s = Slider::new(0, 0, SliderOptions::default().with_value(7.0), &c).unwrap();
        assert_eq!(s.value(), 1.0);
        assert_eq!(s.thumb().rect().x, 270);
    }

    // ---- Value ----

    #[test]
    fn value_round_trips() {
        let c = ctx();
        let mut s = slider(&c);
        for i in 0..=100 {
            let v = f64::from(i) / 100.0;
            s.set_value(v);
            assert!((s.value() - v).abs() < 1e-9, "{v} -> {}", s.value());
        }
    }

    #[test]
    fn value_clamps() {
        let c = ctx();
        let mut s = slider(&c);
        s.set_value(-3.0);
        assert_eq!(s.value(), 0.0);
        s.set_value(1.5);
        assert_eq!(s.value(), 1.0);
        s.set_value(f64::NAN);
        assert_eq!(s.value(), 0.0);
    }

    #[test]
    fn thumb_as_wide_as_track_has_zero_value() {
        let c = ctx();
        let mut s = Slider::new(0, 0, SliderOptions::default().with_thumb_size(300, 10), &c).unwrap();
        s.set_value(0.7);
        assert_eq!(s.value(), 0.0);
    }

    #[test]
    fn on_change_fires_only_on_change() {
        let c = ctx();
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        let mut s = Slider::new(
            0,
            100,
            SliderOptions::default().with_on_change(move |v| sink.borrow_mut().push(v)),
            &c,
        )
        .unwrap();
        s.set_value(0.5);
        s.set_value(0.5);
        s.set_value(-1.0);
        assert_eq!(*seen.borrow(), vec![0.5, 0.0]);
    }

    // ---- Dragging ----

    #[test]
    fn drag_follows_pointer_and_clamps() {
        let c = ctx();
        let mut s = slider(&c);
        let mut p = HeadlessPlatform::new();
        grab(&mut s, &mut p);
        frame(&mut s, &mut p, 150, true);
        assert_eq!(s.thumb().center().x, 150);
        assert!((s.value() - 0.5).abs() < 1e-9);
        frame(&mut s, &mut p, 1000, true);
        assert_eq!(s.value(), 1.0);
        frame(&mut s, &mut p, -1000, true);
        assert_eq!(s.value(), 0.0);
        assert_eq!(s.thumb().state(), InteractionState::Pressed);
    }

    #[test]
    fn release_ends_drag() {
        let c = ctx();
        let mut s = slider(&c);
        let mut p = HeadlessPlatform::new();
        grab(&mut s, &mut p);
        frame(&mut s, &mut p, 100, false);
        assert!(!s.is_held());
        let v = s.value();
        frame(&mut s, &mut p, 200, false);
        assert_eq!(s.value(), v);
    }

    #[test]
    fn pressing_the_track_does_not_grab() {
        let c = ctx();
        let mut s = slider(&c);
        let mut p = HeadlessPlatform::new();
        frame(&mut s, &mut p, 200, false);
        frame(&mut s, &mut p, 200, true);
        assert!(!s.is_held());
        assert_eq!(s.value(), 0.0);
    }

    #[test]
    fn hand_cursor_while_held() {
        let c = ctx();
        let mut s = slider(&c);
        let mut p = HeadlessPlatform::new();
        grab(&mut s, &mut p);
        frame(&mut s, &mut p, 100, false);
        frame(&mut s, &mut p, 250, false);
        assert_eq!(p.cursor_history().last(), Some(&SystemCursor::Arrow));
        assert!(p.cursor_history().contains(&SystemCursor::Hand));
    }

    // ---- Keyboard ----

    #[test]
    fn arrows_nudge_only_while_pressed() {
        let c = ctx();
        let mut s = Slider::new(0, 100, SliderOptions::default().with_step(27.0), &c).unwrap();
        key(&mut s, Key::Right);
        assert_eq!(s.value(), 0.0);

        let mut p = HeadlessPlatform::new();
        grab(&mut s, &mut p);
        key(&mut s, Key::Right);
        assert!((s.value() - 0.1).abs() < 1e-9);
        key(&mut s, Key::Left);
        key(&mut s, Key::Left);
        assert_eq!(s.value(), 0.0);
    }

    #[test]
    fn terminal_keystroke_nudges_once() {
        use crossterm::event as ct;
        let c = ctx();
        let mut s = Slider::new(0, 100, SliderOptions::default().with_step(27.0), &c).unwrap();
        let mut p = HeadlessPlatform::new();
        grab(&mut s, &mut p);
        for kind in [ct::KeyEventKind::Press, ct::KeyEventKind::Release] {
            let raw = ct::Event::Key(ct::KeyEvent::new_with_kind(
                ct::KeyCode::Right,
                ct::KeyModifiers::NONE,
                kind,
            ));
            if let Some(event) = InputEvent::from_crossterm(raw) {
                s.event(&event);
            }
        }
        assert!((s.value() - 0.1).abs() < 1e-9);
    }

    #[test]
    fn nudge_suppresses_drag_until_pointer_crosses_thumb() {
        let c = ctx();
        let mut s = Slider::new(0, 100, SliderOptions::default().with_step(50.0), &c).unwrap();
        let mut p = HeadlessPlatform::new();
        grab(&mut s, &mut p);
        assert_eq!(s.thumb().center().x, 15);

        key(&mut s, Key::Right);
        assert_eq!(s.thumb().center().x, 65);
        assert!(s.pointer_suppressed());

        // Pointer still left of the nudged thumb: stays put.
        frame(&mut s, &mut p, 40, true);
        assert_eq!(s.thumb().center().x, 65);
        assert!(s.pointer_suppressed());

        // Crossing the thumb center hands control back to the pointer.
        frame(&mut s, &mut p, 90, true);
        assert!(!s.pointer_suppressed());
        assert_eq!(s.thumb().center().x, 90);
    }

    #[test]
    fn pointer_on_nudged_center_keeps_thumb_still() {
        let c = ctx();
        let mut s = Slider::new(0, 100, SliderOptions::default().with_step(50.0), &c).unwrap();
        let mut p = HeadlessPlatform::new();
        grab(&mut s, &mut p);
        key(&mut s, Key::Right);
        frame(&mut s, &mut p, 65, true);
        assert!(s.pointer_suppressed());
        assert_eq!(s.thumb().center().x, 65);
        frame(&mut s, &mut p, 66, true);
        assert!(!s.pointer_suppressed());
        assert_eq!(s.thumb().center().x, 66);
    }

    #[test]
    fn left_nudge_releases_when_pointer_moves_left_of_center() {
        let c = ctx();
        let mut s = Slider::new(0, 100, SliderOptions::default().with_step(50.0).with_value(0.5), &c).unwrap();
        let mut p = HeadlessPlatform::new();
        grab(&mut s, &mut p);
        let start = s.thumb().center().x;
        key(&mut s, Key::Left);
        frame(&mut s, &mut p, start, true);
        assert!(s.pointer_suppressed());
        frame(&mut s, &mut p, start - 60, true);
        assert!(!s.pointer_suppressed());
        assert_eq!(s.thumb().center().x, start - 60);
    }

    // ---- Disabled ----

    #[test]
    fn disabled_ignores_pointer_and_keys() {
        let c = ctx();
        let mut s = slider(&c);
        s.set_disabled(true);
        let mut p = HeadlessPlatform::new();
        frame(&mut s, &mut p, 15, false);
        frame(&mut s, &mut p, 15, true);
        frame(&mut s, &mut p, 200, true);
        key(&mut s, Key::Right);
        assert!(!s.is_held());
        assert_eq!(s.value(), 0.0);
        assert_eq!(s.thumb().state(), InteractionState::Disabled);
        // Programmatic changes still apply.
        s.set_value(0.25);
        assert!((s.value() - 0.25).abs() < 1e-9);
    }

    // ---- Rendering ----

    #[test]
    fn renders_track_under_thumb() {
        let c = ctx();
        let s = slider(&c);
        let mut surface = RecordingSurface::new();
        s.render(&mut surface);
        let theme = c.default_theme();
        assert_eq!(s.track_color(), theme.shade(theme.colors().surface, "slider-track"));
        // Track, thumb fill, thumb outline.
        assert_eq!(surface.commands().len(), 3);
    }

    #[test]
    fn theme_switch_recolors_track() {
        let c = ctx();
        let mut s = slider(&c);
        s.set_theme("powder_blue").unwrap();
        let t = c.theme("powder_blue");
        assert_eq!(s.track_color(), t.shade(t.colors().surface, "slider-track"));
        assert_eq!(s.thumb().theme().name(), "powder_blue");
    }
}
