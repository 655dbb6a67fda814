// Copyright 2026 the Strata Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Mark types: stable identities plus plain payloads.

use kurbo::{BezPath, Point, Rect, Shape};
use peniko::Brush;

/// A stable mark identity.
///
/// Identity is what makes diffing meaningful: a mark regenerated with the
/// same id on the next render is an update, not an exit/enter pair.
/// Generators derive ids deterministically from a per-component base.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MarkId(pub u64);

impl MarkId {
    /// Creates a mark id from a raw value.
    pub fn from_raw(raw: u64) -> Self {
        Self(raw)
    }
}

/// Horizontal text anchoring relative to the mark position.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TextAnchor {
    /// The position is the start of the text.
    Start,
    /// The position is the horizontal center of the text.
    Middle,
    /// The position is the end of the text.
    End,
}

/// Vertical text baseline relative to the mark position.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TextBaseline {
    /// The position is the vertical midline.
    Middle,
    /// The position is the alphabetic baseline.
    Alphabetic,
    /// The position is the top (hanging) edge.
    Hanging,
}

/// A filled, optionally rounded rectangle.
#[derive(Clone, Debug, PartialEq)]
pub struct RectMark {
    /// Rectangle geometry in scene coordinates.
    pub rect: Rect,
    /// Fill paint.
    pub fill: Brush,
    /// Corner radius in scene coordinates (`0.0` for square corners).
    pub corner_radius: f64,
}

/// An unshaped text run.
#[derive(Clone, Debug, PartialEq)]
pub struct TextMark {
    /// Anchor position in scene coordinates.
    pub pos: Point,
    /// The text content.
    pub text: String,
    /// Font size in scene coordinates.
    pub font_size: f64,
    /// Text paint.
    pub fill: Brush,
    /// Horizontal anchoring.
    pub anchor: TextAnchor,
    /// Vertical baseline.
    pub baseline: TextBaseline,
    /// Rotation angle in degrees around `pos`.
    pub angle: f64,
}

/// A filled and/or stroked path.
#[derive(Clone, Debug, PartialEq)]
pub struct PathMark {
    /// Path geometry in scene coordinates.
    pub path: BezPath,
    /// Fill paint (use a transparent brush for stroke-only paths).
    pub fill: Brush,
    /// Stroke paint.
    pub stroke: Brush,
    /// Stroke width; `0.0` disables the stroke.
    pub stroke_width: f64,
    /// Optional `(on, off)` dash pattern for the stroke.
    pub dash: Option<[f64; 2]>,
}

/// The renderable content of a mark.
#[derive(Clone, Debug, PartialEq)]
pub enum MarkPayload {
    /// A rectangle mark.
    Rect(RectMark),
    /// A text mark.
    Text(TextMark),
    /// A path mark.
    Path(PathMark),
}

impl MarkPayload {
    /// Returns geometric bounds, if they can be computed without text metrics.
    ///
    /// Text marks return `None`; measuring them is a renderer concern.
    pub fn bounds(&self) -> Option<Rect> {
        match self {
            Self::Rect(r) => Some(r.rect),
            Self::Text(_) => None,
            Self::Path(p) => {
                if p.path.elements().is_empty() {
                    None
                } else {
                    Some(p.path.bounding_box())
                }
            }
        }
    }
}

/// A mark: stable identity, render order, payload.
#[derive(Clone, Debug, PartialEq)]
pub struct Mark {
    /// Stable identity across renders.
    pub id: MarkId,
    /// Render order hint; renderers sort by `(z_index, id)` for a
    /// deterministic tie-break.
    pub z_index: i32,
    /// Renderable content.
    pub payload: MarkPayload,
}

impl Mark {
    /// Creates a mark from its parts.
    pub fn new(id: MarkId, z_index: i32, payload: MarkPayload) -> Self {
        Self {
            id,
            z_index,
            payload,
        }
    }

    /// Convenience constructor for a rectangle mark.
    pub fn rect(id: MarkId, z_index: i32, rect: RectMark) -> Self {
        Self::new(id, z_index, MarkPayload::Rect(rect))
    }

    /// Convenience constructor for a text mark.
    pub fn text(id: MarkId, z_index: i32, text: TextMark) -> Self {
        Self::new(id, z_index, MarkPayload::Text(text))
    }

    /// Convenience constructor for a path mark.
    pub fn path(id: MarkId, z_index: i32, path: PathMark) -> Self {
        Self::new(id, z_index, MarkPayload::Path(path))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use peniko::color::palette::css;

    #[test]
    fn rect_bounds_are_the_rect() {
        let mark = RectMark {
            rect: Rect::new(1.0, 2.0, 3.0, 4.0),
            fill: css::BLACK.into(),
            corner_radius: 0.0,
        };
        assert_eq!(
            MarkPayload::Rect(mark).bounds(),
            Some(Rect::new(1.0, 2.0, 3.0, 4.0))
        );
    }

    #[test]
    fn empty_path_has_no_bounds() {
        let mark = PathMark {
            path: BezPath::new(),
            fill: css::BLACK.into(),
            stroke: css::BLACK.into(),
            stroke_width: 1.0,
            dash: None,
        };
        assert_eq!(MarkPayload::Path(mark).bounds(), None);
    }
}
