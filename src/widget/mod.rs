//! Widget plumbing: the element trait, interaction states, callbacks and
//! option validation.

pub mod callback;
pub mod config;
pub mod state;
pub mod traits;

pub use callback::{Callback, ValueCallback};
pub use config::{auto_radius, ConfigError};
pub use state::{CursorFeedback, InteractionState, StateError};
pub use traits::Element;
