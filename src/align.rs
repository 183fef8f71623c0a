//! Text alignment: place a text block inside a container rectangle.
//!
//! Alignment is a pair of independent anchors, one horizontal and one
//! vertical, plus an inward margin. The nine combinations are dispatched on
//! the `(horizontal, vertical)` pair, so the x axis is only ever driven by the
//! horizontal anchor and the y axis only by the vertical one.

use std::fmt;
use std::str::FromStr;

use crate::geometry::{Region, Size};

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// An alignment keyword was not recognized.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AlignmentError {
    #[error("invalid horizontal alignment '{0}', expected one of: left, center, right")]
    Horizontal(String),
    #[error("invalid vertical alignment '{0}', expected one of: top, center, bottom")]
    Vertical(String),
}

// ---------------------------------------------------------------------------
// Anchors
// ---------------------------------------------------------------------------

/// Horizontal anchor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum HorizontalAlign {
    Left,
    #[default]
    Center,
    Right,
}

/// Vertical anchor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum VerticalAlign {
    Top,
    #[default]
    Center,
    Bottom,
}

impl FromStr for HorizontalAlign {
    type Err = AlignmentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "left" => Ok(HorizontalAlign::Left),
            "center" => Ok(HorizontalAlign::Center),
            "right" => Ok(HorizontalAlign::Right),
            _ => Err(AlignmentError::Horizontal(s.to_owned())),
        }
    }
}

impl FromStr for VerticalAlign {
    type Err = AlignmentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "top" => Ok(VerticalAlign::Top),
            "center" => Ok(VerticalAlign::Center),
            "bottom" => Ok(VerticalAlign::Bottom),
            _ => Err(AlignmentError::Vertical(s.to_owned())),
        }
    }
}

impl fmt::Display for HorizontalAlign {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            HorizontalAlign::Left => "left",
            HorizontalAlign::Center => "center",
            HorizontalAlign::Right => "right",
        })
    }
}

impl fmt::Display for VerticalAlign {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            VerticalAlign::Top => "top",
            VerticalAlign::Center => "center",
            VerticalAlign::Bottom => "bottom",
        })
    }
}

// ---------------------------------------------------------------------------
// TextAlignment
// ---------------------------------------------------------------------------

/// A complete alignment specification: both anchors and the margin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TextAlignment {
    pub horizontal: HorizontalAlign,
    pub vertical: VerticalAlign,
    /// Inward offset from the anchored edge(s), in pixels. Never negative.
    pub margin: u32,
}

impl Default for TextAlignment {
    fn default() -> Self {
        Self {
            horizontal: HorizontalAlign::Center,
            vertical: VerticalAlign::Center,
            margin: 10,
        }
    }
}

impl TextAlignment {
    /// Create an alignment from anchors and margin.
    pub const fn new(horizontal: HorizontalAlign, vertical: VerticalAlign, margin: u32) -> Self {
        Self { horizontal, vertical, margin }
    }

    /// Parse both anchors from keywords (case-insensitive).
    pub fn from_keywords(horizontal: &str, vertical: &str, margin: u32) -> Result<Self, AlignmentError> {
        Ok(Self {
            horizontal: horizontal.parse()?,
            vertical: vertical.parse()?,
            margin,
        })
    }

    /// Position a block of `text` size inside `container`.
    pub fn place(&self, container: Region, text: Size) -> Region {
        align(container, text, self.horizontal, self.vertical, self.margin)
    }
}

// ---------------------------------------------------------------------------
// align
// ---------------------------------------------------------------------------

/// Place a `text` block inside `container`.
///
/// The result keeps `text`'s size. Edge anchors are pushed inward by
/// `margin`, which is clamped to the free space on that axis so a block that
/// fits is never placed outside the container. Centered axes ignore the
/// margin. When the block is larger than the container the anchor still
/// holds: start edges sit on the container origin, end edges on the far
/// edge, and centered blocks overflow evenly.
pub fn align(
    container: Region,
    text: Size,
    horizontal: HorizontalAlign,
    vertical: VerticalAlign,
    margin: u32,
) -> Region {
    let x = match horizontal {
        HorizontalAlign::Left => start_anchor(container.x, container.width, text.width, margin),
        HorizontalAlign::Center => center_anchor(container.x, container.width, text.width),
        HorizontalAlign::Right => end_anchor(container.x, container.width, text.width, margin),
    };
    let y = match vertical {
        VerticalAlign::Top => start_anchor(container.y, container.height, text.height, margin),
        VerticalAlign::Center => center_anchor(container.y, container.height, text.height),
        VerticalAlign::Bottom => end_anchor(container.y, container.height, text.height, margin),
    };
    Region::new(x, y, text.width, text.height)
}

/// Keyword form of [`align`]; fails if either keyword is unknown.
pub fn align_keywords(
    container: Region,
    text: Size,
    horizontal: &str,
    vertical: &str,
    margin: u32,
) -> Result<Region, AlignmentError> {
    Ok(TextAlignment::from_keywords(horizontal, vertical, margin)?.place(container, text))
}

fn slack(outer: i32, inner: i32) -> i32 {
    outer - inner
}

fn clamped_margin(slack: i32, margin: u32) -> i32 {
    let margin = i32::try_from(margin).unwrap_or(i32::MAX);
    margin.min(slack.max(0))
}

fn start_anchor(origin: i32, outer: i32, inner: i32, margin: u32) -> i32 {
    origin + clamped_margin(slack(outer, inner), margin)
}

fn center_anchor(origin: i32, outer: i32, inner: i32) -> i32 {
    origin + slack(outer, inner) / 2
}

fn end_anchor(origin: i32, outer: i32, inner: i32, margin: u32) -> i32 {
    let free = slack(outer, inner);
    origin + free - clamped_margin(free, margin)
}

// ===========================================================================
// Tests
// ===========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Offset;

    const H: [HorizontalAlign; 3] = [
        HorizontalAlign::Left,
        HorizontalAlign::Center,
        HorizontalAlign::Right,
    ];
    const V: [VerticalAlign; 3] = [VerticalAlign::Top, VerticalAlign::Center, VerticalAlign::Bottom];

    fn container() -> Region {
        Region::new(100, 50, 200, 80)
    }

    fn text() -> Size {
        Size::new(60, 20)
    }

    #[test]
    fn nine_way_placement() {
        let c = container();
        let t = text();
        let m = 10;
        let cases = [
            (HorizontalAlign::Left, VerticalAlign::Top, (110, 60)),
            (HorizontalAlign::Center, VerticalAlign::Top, (170, 60)),
            (HorizontalAlign::Right, VerticalAlign::Top, (230, 60)),
            (HorizontalAlign::Left, VerticalAlign::Center, (110, 80)),
            (HorizontalAlign::Center, VerticalAlign::Center, (170, 80)),
            (HorizontalAlign::Right, VerticalAlign::Center, (230, 80)),
            (HorizontalAlign::Left, VerticalAlign::Bottom, (110, 100)),
            (HorizontalAlign::Center, VerticalAlign::Bottom, (170, 100)),
            (HorizontalAlign::Right, VerticalAlign::Bottom, (230, 100)),
        ];
        for (h, v, (x, y)) in cases {
            let r = align(c, t, h, v, m);
            assert_eq!((r.x, r.y), (x, y), "{h}/{v}");
            assert_eq!(r.size(), t);
        }
    }

    #[test]
    fn horizontal_anchor_never_moves_y() {
        // Legacy dispatch swapped the axes; each anchor must only drive its own axis.
        let c = container();
        for v in V {
            let ys: Vec<i32> = H.iter().map(|&h| align(c, text(), h, v, 10).y).collect();
            assert!(ys.windows(2).all(|w| w[0] == w[1]));
        }
        for h in H {
            let xs: Vec<i32> = V.iter().map(|&v| align(c, text(), h, v, 10).x).collect();
            assert!(xs.windows(2).all(|w| w[0] == w[1]));
        }
    }

    #[test]
    fn center_center_ignores_margin() {
        let c = container();
        let a = align(c, text(), HorizontalAlign::Center, VerticalAlign::Center, 0);
        let b = align(c, text(), HorizontalAlign::Center, VerticalAlign::Center, 35);
        assert_eq!(a, b);
    }

    #[test]
    fn fitting_text_always_contained() {
        let c = container();
        for margin in [0, 1, 10, 69, 70, 71, 500, u32::MAX] {
            for h in H {
                for v in V {
                    let r = align(c, text(), h, v, margin);
                    assert!(c.contains_region(r), "{h}/{v} margin={margin}: {r:?}");
                }
            }
        }
    }

    #[test]
    fn oversized_text_keeps_anchor() {
        let c = Region::new(0, 0, 50, 10);
        let t = Size::new(70, 30);
        assert_eq!(align(c, t, HorizontalAlign::Left, VerticalAlign::Top, 5).offset(), Offset::new(0, 0));
        assert_eq!(
            align(c, t, HorizontalAlign::Right, VerticalAlign::Bottom, 5).offset(),
            Offset::new(-20, -20)
        );
        assert_eq!(
            align(c, t, HorizontalAlign::Center, VerticalAlign::Center, 5).offset(),
            Offset::new(-10, -10)
        );
    }

    #[test]
    fn keywords_are_case_insensitive() {
        let a = TextAlignment::from_keywords("LEFT", "Bottom", 3).unwrap();
        assert_eq!(a.horizontal, HorizontalAlign::Left);
        assert_eq!(a.vertical, VerticalAlign::Bottom);
        assert_eq!(a.margin, 3);
    }

    #[test]
    fn unknown_keywords_rejected() {
        assert_eq!(
            align_keywords(container(), text(), "middle", "top", 0),
            Err(AlignmentError::Horizontal("middle".into()))
        );
        assert_eq!(
            align_keywords(container(), text(), "left", "left", 0),
            Err(AlignmentError::Vertical("left".into()))
        );
    }

    #[test]
    fn swapped_axis_keywords_rejected() {
        // "top" is a vertical keyword; it is not accepted on the horizontal axis.
        assert!(align_keywords(container(), text(), "top", "left", 0).is_err());
    }

    #[test]
    fn default_alignment_is_centered() {
        let a = TextAlignment::default();
        assert_eq!(a.horizontal, HorizontalAlign::Center);
        assert_eq!(a.vertical, VerticalAlign::Center);
    }
}
