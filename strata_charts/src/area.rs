// Copyright 2026 the Strata Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Stacked band mark generation.

use kurbo::{BezPath, Point};
use peniko::Brush;
use peniko::color::palette::css;
use strata_core::{Mark, MarkId, PathMark};
use strata_data::StackedPoint;

use crate::axis::StrokeStyle;
use crate::curve::append_monotone_x;
use crate::scale::{ScaleDate, ScaleLinear};
use crate::z_order;

/// Interpolation used along band edges.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Curve {
    /// Straight segments between samples.
    Linear,
    /// Monotone-in-x cubic segments (no overshoot between samples).
    MonotoneX,
}

/// A filled band between a layer's `y0` and `y1` boundaries.
///
/// The band path runs along the top edge forward and the bottom edge in
/// reverse, then closes, so a single mark carries both fill and outline.
#[derive(Clone, Debug)]
pub struct StackedBandSpec {
    /// Stable mark id for the band.
    pub id: MarkId,
    /// X scale mapping bucket dates into scene x.
    pub x_scale: ScaleDate,
    /// Y scale mapping stacked values into scene y.
    pub y_scale: ScaleLinear,
    /// Fill paint for the band.
    pub fill: Brush,
    /// Outline stroke around the whole band.
    pub stroke: Option<StrokeStyle>,
    /// Edge interpolation.
    pub curve: Curve,
    /// Render order for the band.
    pub z_index: i32,
}

impl StackedBandSpec {
    /// Creates a band spec with a white half-pixel outline and monotone
    /// edges.
    pub fn new(id: MarkId, x_scale: ScaleDate, y_scale: ScaleLinear) -> Self {
        Self {
            id,
            x_scale,
            y_scale,
            fill: Brush::default(),
            stroke: Some(StrokeStyle::solid(css::WHITE, 0.5)),
            curve: Curve::MonotoneX,
            z_index: z_order::SERIES_FILL,
        }
    }

    /// Sets the fill paint.
    pub fn with_fill(mut self, fill: impl Into<Brush>) -> Self {
        self.fill = fill.into();
        self
    }

    /// Sets the outline stroke.
    pub fn with_stroke(mut self, stroke: StrokeStyle) -> Self {
        self.stroke = Some(stroke);
        self
    }

    /// Disables the outline stroke.
    pub fn without_stroke(mut self) -> Self {
        self.stroke = None;
        self
    }

    /// Sets the edge interpolation.
    pub fn with_curve(mut self, curve: Curve) -> Self {
        self.curve = curve;
        self
    }

    /// Sets the render order.
    pub fn with_z_index(mut self, z_index: i32) -> Self {
        self.z_index = z_index;
        self
    }

    /// Generates the band mark for a layer's boundary samples.
    ///
    /// Returns no marks for an empty layer.
    pub fn marks(&self, points: &[StackedPoint]) -> Vec<Mark> {
        if points.is_empty() {
            return Vec::new();
        }

        let top: Vec<Point> = points
            .iter()
            .map(|p| Point::new(self.x_scale.map(p.bucket), self.y_scale.map(p.y1)))
            .collect();
        let bottom: Vec<Point> = points
            .iter()
            .rev()
            .map(|p| Point::new(self.x_scale.map(p.bucket), self.y_scale.map(p.y0)))
            .collect();

        let mut path = BezPath::new();
        match self.curve {
            Curve::Linear => {
                path.move_to(top[0]);
                for &p in &top[1..] {
                    path.line_to(p);
                }
                for &p in &bottom {
                    path.line_to(p);
                }
            }
            Curve::MonotoneX => {
                append_monotone_x(&mut path, &top, true);
                append_monotone_x(&mut path, &bottom, false);
            }
        }
        path.close_path();

        let (stroke, stroke_width) = match &self.stroke {
            Some(s) => (s.brush.clone(), s.stroke_width),
            None => (Brush::Solid(peniko::Color::TRANSPARENT), 0.0),
        };
        vec![Mark::path(
            self.id,
            self.z_index,
            PathMark {
                path,
                fill: self.fill.clone(),
                stroke,
                stroke_width,
                dash: None,
            },
        )]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use kurbo::Shape;
    use strata_core::MarkPayload;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn sample_points() -> Vec<StackedPoint> {
        vec![
            StackedPoint {
                bucket: date(2020, 1, 1),
                y0: 0.0,
                y1: 4.0,
            },
            StackedPoint {
                bucket: date(2020, 1, 2),
                y0: 0.0,
                y1: 6.0,
            },
            StackedPoint {
                bucket: date(2020, 1, 3),
                y0: 0.0,
                y1: 5.0,
            },
        ]
    }

    fn scales() -> (ScaleDate, ScaleLinear) {
        (
            ScaleDate::new((date(2020, 1, 1), date(2020, 1, 3)), (0.0, 100.0)),
            ScaleLinear::new((0.0, 10.0), (100.0, 0.0)),
        )
    }

    #[test]
    fn empty_layer_emits_nothing() {
        let (x, y) = scales();
        let marks = StackedBandSpec::new(MarkId::from_raw(1), x, y).marks(&[]);
        assert!(marks.is_empty());
    }

    #[test]
    fn band_is_a_single_closed_path_spanning_the_x_extent() {
        let (x, y) = scales();
        let marks = StackedBandSpec::new(MarkId::from_raw(1), x, y).marks(&sample_points());
        assert_eq!(marks.len(), 1);
        let MarkPayload::Path(p) = &marks[0].payload else {
            panic!("expected a path payload");
        };
        assert!(matches!(
            p.path.elements().last(),
            Some(kurbo::PathEl::ClosePath)
        ));
        let bbox = p.path.bounding_box();
        assert!((bbox.x0 - 0.0).abs() < 1e-9);
        assert!((bbox.x1 - 100.0).abs() < 1e-9);
    }

    #[test]
    fn linear_band_touches_its_extremes_exactly() {
        let (x, y) = scales();
        let marks = StackedBandSpec::new(MarkId::from_raw(1), x, y)
            .with_curve(Curve::Linear)
            .marks(&sample_points());
        let MarkPayload::Path(p) = &marks[0].payload else {
            panic!("expected a path payload");
        };
        let bbox = p.path.bounding_box();
        // y1 max of 6.0 maps to 40.0; baseline 0.0 maps to 100.0.
        assert!((bbox.y0 - 40.0).abs() < 1e-9);
        assert!((bbox.y1 - 100.0).abs() < 1e-9);
    }
}
