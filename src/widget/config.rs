//! Validation shared by widget options and setters.
//!
//! Numeric policy:
//! - positions accept any `i32`;
//! - widths, heights, border widths and margins must not be negative;
//! - a border radius of `None` means automatic rounding, `Some(0)` square
//!   corners, and negative values are rejected;
//! - text sizes start at 1.

use std::rc::Rc;

use crate::context::Context;
use crate::theme::Theme;

/// Corner-radius divisor for automatic rounding. Lower is rounder.
pub const SMART_ROUNDED_CORNERS_MULTIPLIER: i32 = 7;

/// An invalid constructor or setter argument.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("{field} must be >= 0, not {value}")]
    NegativeDimension { field: &'static str, value: i32 },
    #[error("border radius must be >= 0, not {0}")]
    NegativeRadius(i32),
    #[error("border width must be >= 0, not {0}")]
    NegativeBorderWidth(i32),
    #[error("text margin must be >= 0, not {0}")]
    NegativeMargin(i32),
    #[error("text size must be >= 1, not {0}")]
    InvalidTextSize(u32),
    #[error("slider step must be a positive finite number, not {0}")]
    InvalidStep(f64),
    #[error("slider thumb ({thumb}px) is wider than its track ({track}px)")]
    ThumbTooWide { thumb: i32, track: i32 },
    #[error("theme '{0}' does not exist")]
    UnknownTheme(String),
    #[error("font family must not be empty")]
    EmptyFont,
}

pub(crate) fn dimension(field: &'static str, value: i32) -> Result<i32, ConfigError> {
    if value < 0 {
        return Err(ConfigError::NegativeDimension { field, value });
    }
    Ok(value)
}

pub(crate) fn border_width(value: i32) -> Result<u32, ConfigError> {
    u32::try_from(value).map_err(|_| ConfigError::NegativeBorderWidth(value))
}

pub(crate) fn margin(value: i32) -> Result<u32, ConfigError> {
    u32::try_from(value).map_err(|_| ConfigError::NegativeMargin(value))
}

pub(crate) fn text_size(value: u32) -> Result<u32, ConfigError> {
    if value == 0 {
        return Err(ConfigError::InvalidTextSize(value));
    }
    Ok(value)
}

pub(crate) fn font_family(family: &str) -> Result<(), ConfigError> {
    if family.trim().is_empty() {
        return Err(ConfigError::EmptyFont);
    }
    Ok(())
}

/// Resolve an explicit or automatic corner radius for a `width`×`height` box.
pub(crate) fn border_radius(radius: Option<i32>, width: i32, height: i32) -> Result<u32, ConfigError> {
    match radius {
        None => Ok(auto_radius(width, height)),
        Some(r) => u32::try_from(r).map_err(|_| ConfigError::NegativeRadius(r)),
    }
}

/// `(w + h) / 14`, truncated.
pub fn auto_radius(width: i32, height: i32) -> u32 {
    let sum = i64::from(width) + i64::from(height);
    (sum / i64::from(2 * SMART_ROUNDED_CORNERS_MULTIPLIER)).max(0) as u32
}

/// The named theme, the context default when `None`.
pub(crate) fn resolve_theme(ctx: &Context, name: Option<&str>) -> Result<Rc<Theme>, ConfigError> {
    match name {
        None => Ok(ctx.default_theme()),
        Some(name) => ctx
            .find_theme(name)
            .ok_or_else(|| ConfigError::UnknownTheme(name.to_owned())),
    }
}
