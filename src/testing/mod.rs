//! Headless testing framework: Pilot, platform and surface doubles, snapshot helpers.
//!
//! Use the [`Pilot`] to drive an [`App`](crate::app::App) without a window.
//! [`HeadlessPlatform`] and [`RecordingSurface`] stand in for the host when
//! testing a single widget; [`commands_to_string`] turns recorded drawing
//! into text for snapshot assertions.

pub mod headless;
pub mod pilot;
pub mod snapshot;

pub use headless::{HeadlessPlatform, MonospaceMetrics};
pub use pilot::Pilot;
pub use snapshot::{commands_to_string, DrawCommand, RecordingSurface};
