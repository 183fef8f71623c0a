//! Built-in widgets: Button, Slider, Label, ColoredLabel, ToolTip.

pub mod button;
pub mod colored_label;
pub mod label;
pub mod slider;
pub mod tooltip;

pub use button::{Button, ButtonOptions, StateColors, TooltipSpec};
pub use colored_label::{ColoredLabel, ColoredLabelOptions, Fragment};
pub use label::{Label, LabelOptions};
pub use slider::{Slider, SliderOptions};
pub use tooltip::{ToolTip, ToolTipOptions};
