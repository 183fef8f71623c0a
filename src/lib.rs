//! # buttonup
//!
//! A themed, retained-mode widget toolkit: buttons, sliders, labels and
//! tooltips driven by a per-frame `event` → `update` → `render` loop.
//!
//! The toolkit never opens a window. A host implements the seams in
//! [`backend`] (input, pointer, system cursor, text measurement) and
//! [`render::Surface`] (rectangles and text blits), builds a [`Context`],
//! and calls each widget's [`Element`] hooks once per frame, directly or
//! through an [`App`].
//!
//! ## Core Systems
//!
//! - **[`geometry`]**, **[`color`]**, **[`align`]**: rectangles, RGB colors, text placement
//! - **[`theme`]**: semantic color themes with brightness offsets, JSON/TOML loading, a registry
//! - **[`palette`]**: keyword → color tables and the colored-text tokenizer
//! - **[`context`]**: the shared handle every widget is built with
//! - **[`widget`]**: the `Element` trait, interaction states, callbacks, option validation
//! - **[`widgets`]**: Button, Slider, Label, ColoredLabel, ToolTip
//! - **[`event`]**: backend-neutral input events
//! - **[`app`]**: thin driver and configuration
//! - **[`testing`]**: headless doubles and the `Pilot` harness

// Foundation
pub mod color;
pub mod error;
pub mod geometry;

// Host seams
pub mod backend;
pub mod event;
pub mod render;

// Styling
pub mod align;
pub mod palette;
pub mod theme;

// Widget system
pub mod context;
pub mod widget;
pub mod widgets;

// Application
pub mod app;
pub mod testing;

pub use app::{App, AppConfig, ElementKey};
pub use color::Color;
pub use context::Context;
pub use error::{Error, Result};
pub use theme::{Theme, ThemeRegistry};
pub use widget::{Callback, Element, InteractionState};
