//! Integration tests for buttonup.
//!
//! These tests exercise the public API from outside the crate, driving
//! widgets through the `Pilot` harness the way a host application would.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use buttonup::align::{align, HorizontalAlign, VerticalAlign};
use buttonup::event::Key;
use buttonup::geometry::{Region, Size};
use buttonup::palette::{ColorPalette, PaletteError};
use buttonup::testing::{DrawCommand, Pilot};
use buttonup::widget::ConfigError;
use buttonup::widgets::*;
use buttonup::{AppConfig, Color, Error, InteractionState, ThemeRegistry};
use pretty_assertions::assert_eq;

fn pilot() -> Pilot {
    Pilot::new().unwrap()
}

// ---------------------------------------------------------------------------
// Alignment
// ---------------------------------------------------------------------------

#[test]
fn test_align_stays_inside_container() {
    let container = Region::new(10, 20, 200, 80);
    let horizontals = [HorizontalAlign::Left, HorizontalAlign::Center, HorizontalAlign::Right];
    let verticals = [VerticalAlign::Top, VerticalAlign::Center, VerticalAlign::Bottom];
    for h in horizontals {
        for v in verticals {
            for margin in [0, 5, 10, 500] {
                let placed = align(container, Size::new(50, 20), h, v, margin);
                assert!(container.contains_region(placed), "{h:?} {v:?} {margin} -> {placed:?}");
            }
        }
    }
}

#[test]
fn test_centered_alignment_ignores_margin() {
    let container = Region::new(0, 0, 100, 40);
    let a = align(container, Size::new(20, 10), HorizontalAlign::Center, VerticalAlign::Center, 0);
    let b = align(container, Size::new(20, 10), HorizontalAlign::Center, VerticalAlign::Center, 30);
    assert_eq!(a, b);
    assert_eq!(a, Region::new(40, 15, 20, 10));
}

// ---------------------------------------------------------------------------
// Button
// ---------------------------------------------------------------------------

#[test]
fn test_button_click_fires_once_per_gesture() {
    let mut pilot = pilot();
    let ctx = pilot.context().clone();
    let clicks = Rc::new(Cell::new(0));
    let c = Rc::clone(&clicks);
    let key = pilot.app_mut().add(
        Button::new(
            10,
            10,
            ButtonOptions::default()
                .with_text("Save")
                .with_on_click(move || c.set(c.get() + 1)),
            &ctx,
        )
        .unwrap(),
    );

    pilot.move_pointer(50, 30);
    pilot.step();
    pilot.press();
    for _ in 0..20 {
        pilot.step();
    }
    pilot.release();
    pilot.step();
    assert_eq!(clicks.get(), 1);
    assert_eq!(pilot.app().get::<Button>(key).unwrap().state(), InteractionState::Hovered);
}

#[test]
fn test_disabled_button_ignores_pointer_until_enabled() {
    let mut pilot = pilot();
    let ctx = pilot.context().clone();
    let clicks = Rc::new(Cell::new(0));
    let c = Rc::clone(&clicks);
    let key = pilot.app_mut().add(
        Button::new(0, 0, ButtonOptions::default().with_on_click(move || c.set(c.get() + 1)), &ctx).unwrap(),
    );
    pilot
        .app_mut()
        .get_mut::<Button>(key)
        .unwrap()
        .set_state(InteractionState::Disabled);

    pilot.click(50, 20);
    assert_eq!(clicks.get(), 0);
    assert_eq!(pilot.app().get::<Button>(key).unwrap().state(), InteractionState::Disabled);

    pilot.app_mut().get_mut::<Button>(key).unwrap().set_disabled(false);
    pilot.click(50, 20);
    assert_eq!(clicks.get(), 1);
}

#[test]
fn test_button_text_not_regenerated_every_frame() {
    let mut pilot = pilot();
    let ctx = pilot.context().clone();
    pilot
        .app_mut()
        .add(Button::new(0, 0, ButtonOptions::default().with_text("idle"), &ctx).unwrap());
    let before = pilot.metrics().calls();
    for _ in 0..50 {
        pilot.step();
    }
    assert_eq!(pilot.metrics().calls(), before);
}

#[test]
fn test_negative_width_rejected() {
    let pilot = pilot();
    let err = Button::new(0, 0, ButtonOptions::default().with_size(-1, 40), pilot.context()).unwrap_err();
    assert_eq!(err, ConfigError::NegativeDimension { field: "width", value: -1 });
    let err: Error = err.into();
    assert!(err.to_string().contains("width"));
}

#[test]
fn test_button_render_snapshot() {
    let mut pilot = pilot();
    let ctx = pilot.context().clone();
    pilot
        .app_mut()
        .add(Button::new(0, 0, ButtonOptions::default().with_text("OK").with_border_radius(4), &ctx).unwrap());
    pilot.move_pointer(500, 500);
    pilot.step();
    insta::assert_snapshot!(pilot.commands_string(), @r"
    rect (0, 0, 100x40) #2d2d30 fill r=4
    rect (0, 0, 100x40) #4b4b4e outline w=2 r=4
    text 'OK' at (40, 10, 20x20) #e6e6e6
    ");
}

#[test]
fn test_tooltip_follows_hover_delay() {
    let mut pilot = pilot();
    let ctx = pilot.context().clone();
    let key = pilot.app_mut().add(
        Button::new(0, 0, ButtonOptions::default().with_tooltip("Saves the file", 500.0), &ctx).unwrap(),
    );
    pilot.move_pointer(50, 20);
    for _ in 0..10 {
        pilot.frame(40.0);
    }
    assert!(pilot.app().get::<Button>(key).unwrap().tooltip().is_none());
    for _ in 0..5 {
        pilot.frame(40.0);
    }
    assert!(pilot.app().get::<Button>(key).unwrap().tooltip().is_some());
    let texts: Vec<String> = pilot
        .commands()
        .iter()
        .filter_map(|c| match c {
            DrawCommand::Text { text, .. } => Some(text.clone()),
            DrawCommand::Rect { .. } => None,
        })
        .collect();
    assert_eq!(texts, vec!["Saves the file".to_owned()]);
}

// ---------------------------------------------------------------------------
// Slider
// ---------------------------------------------------------------------------

#[test]
fn test_slider_value_round_trip_and_clamp() {
    let pilot = pilot();
    let mut slider = Slider::new(0, 0, SliderOptions::default(), pilot.context()).unwrap();
    for i in 0..=64 {
        let v = f64::from(i) / 64.0;
        slider.set_value(v);
        assert!((slider.value() - v).abs() < 1e-9);
    }
    slider.set_value(2.0);
    assert_eq!(slider.value(), 1.0);
    slider.set_value(-0.5);
    assert_eq!(slider.value(), 0.0);
}

#[test]
fn test_slider_drag_reports_changes() {
    let mut pilot = pilot();
    let ctx = pilot.context().clone();
    let seen = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&seen);
    let key = pilot.app_mut().add(
        Slider::new(
            0,
            100,
            SliderOptions::default().with_on_change(move |v| sink.borrow_mut().push(v)),
            &ctx,
        )
        .unwrap(),
    );
    pilot.move_pointer(15, 105);
    pilot.step();
    pilot.press();
    pilot.step();
    pilot.move_pointer(285, 105);
    pilot.step();
    pilot.release();
    pilot.step();
    assert_eq!(pilot.app().get::<Slider>(key).unwrap().value(), 1.0);
    assert_eq!(*seen.borrow(), vec![1.0]);
}

#[test]
fn test_slider_keyboard_nudge() {
    let mut pilot = pilot();
    let ctx = pilot.context().clone();
    let key = pilot
        .app_mut()
        .add(Slider::new(0, 100, SliderOptions::default().with_step(54.0), &ctx).unwrap());
    pilot.move_pointer(15, 105);
    pilot.step();
    pilot.press();
    pilot.step();
    pilot.press_key(Key::Right);
    pilot.press_key(Key::Right);
    pilot.step();
    let value = pilot.app().get::<Slider>(key).unwrap().value();
    assert!((value - 0.4).abs() < 1e-9);
}

// ---------------------------------------------------------------------------
// Labels and palettes
// ---------------------------------------------------------------------------

#[test]
fn test_colored_label_fragments_match_visible_text() {
    let pilot = pilot();
    let mut palette = ColorPalette::new();
    palette.add_color("AB", Color::rgb(255, 0, 0)).unwrap();
    palette.add_color("<g>", Color::rgb(0, 255, 0)).unwrap();
    palette.add_reset("<x>").unwrap();
    for text in ["", "AB", "A<g>B", "xA<x>Byz", "A<g>B<x>AB", "<g><x>AAB<g>B"] {
        let label = ColoredLabel::new(
            0,
            0,
            ColoredLabelOptions::default().with_text(text).with_palette(palette.clone()),
            pilot.context(),
        )
        .unwrap();
        let visible = label.keywordless_text();
        for keyword in ["AB", "<g>", "<x>"] {
            assert!(!visible.contains(keyword), "{keyword} survived in {visible:?} from {text:?}");
        }
        let joined: String = label.fragments().iter().map(|f| f.surface.text.as_str()).collect();
        assert_eq!(joined, visible);
    }
}

#[test]
fn test_palette_duplicate_and_round_trip() {
    let mut palette = ColorPalette::new();
    palette.add_color("<r>", Color::rgb(255, 0, 0)).unwrap();
    let before = palette.clone();
    assert_eq!(
        palette.add_color("<r>", Color::rgb(1, 1, 1)),
        Err(PaletteError::DuplicateKeyword("<r>".into()))
    );
    palette.add_color_str("<b>", "#0000ff").unwrap();
    palette.remove("<b>").unwrap();
    assert_eq!(palette, before);
}

#[test]
fn test_label_theme_switch_through_app() {
    let mut pilot = pilot();
    let ctx = pilot.context().clone();
    let key = pilot
        .app_mut()
        .add(Label::new(0, 0, LabelOptions::default().with_text("hi"), &ctx).unwrap());
    pilot.app_mut().set_theme("default_light").unwrap();
    let expected = ctx.theme("default_light").colors().on_background;
    assert_eq!(pilot.app().get::<Label>(key).unwrap().color(), expected);
}

// ---------------------------------------------------------------------------
// Themes and configuration
// ---------------------------------------------------------------------------

#[test]
fn test_unknown_theme_falls_back_to_default() {
    let registry = ThemeRegistry::with_builtin_themes().unwrap();
    assert_eq!(registry.get("doesnotexist").name(), "default");
    let pilot = pilot();
    assert_eq!(pilot.context().theme("doesnotexist").name(), "default");
}

#[test]
fn test_config_selects_theme() {
    let config = AppConfig::from_toml_str("theme = \"powder_blue\"\nfps_hint = 30").unwrap();
    let pilot = Pilot::with_config(config).unwrap();
    assert_eq!(pilot.context().default_theme().name(), "powder_blue");
    assert_eq!(pilot.app().config().fps_hint, 30);
}
