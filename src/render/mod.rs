//! Rendering seams: the target surface and cached text surfaces.

pub mod surface;
pub mod text;

pub use surface::{RectStyle, Surface};
pub use text::TextSurface;
