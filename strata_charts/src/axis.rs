// Copyright 2026 the Strata Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Axis mark generation.
//!
//! Two concrete axes cover this chart family: a bottom calendar-date axis
//! whose label format follows the aggregation granularity, and a left value
//! axis whose labels follow the configured value format.

use kurbo::{BezPath, Point, Rect};
use peniko::Brush;
use peniko::color::palette::css;
use strata_core::{Mark, MarkId, PathMark, TextAnchor, TextBaseline, TextMark};
use strata_data::{Granularity, ValueFormat};

use crate::format::{format_date, format_tick};
use crate::scale::{ScaleDate, ScaleLinear};
use crate::z_order;

const DOMAIN_ID: u64 = 0;
const TICK_ID_BASE: u64 = 1;
const LABEL_ID_BASE: u64 = 1000;

/// A paint + width pair for stroked paths (domain lines, tick marks).
#[derive(Clone, Debug, PartialEq)]
pub struct StrokeStyle {
    /// Stroke paint.
    pub brush: Brush,
    /// Stroke width in scene coordinates.
    pub stroke_width: f64,
}

impl StrokeStyle {
    /// Convenience for a solid stroke.
    pub fn solid(brush: impl Into<Brush>, stroke_width: f64) -> Self {
        Self {
            brush: brush.into(),
            stroke_width,
        }
    }
}

impl Default for StrokeStyle {
    fn default() -> Self {
        Self::solid(css::BLACK, 1.0)
    }
}

/// Axis styling defaults.
#[derive(Clone, Debug, PartialEq)]
pub struct AxisStyle {
    /// Style for the axis domain line and tick marks.
    pub rule: StrokeStyle,
    /// Fill paint for tick labels.
    pub label_fill: Brush,
    /// Font size for tick labels.
    pub label_font_size: f64,
}

impl Default for AxisStyle {
    fn default() -> Self {
        Self {
            rule: StrokeStyle::default(),
            label_fill: Brush::Solid(peniko::Color::from_rgb8(0x77, 0x77, 0x77)),
            label_font_size: 12.0,
        }
    }
}

/// A bottom calendar-date axis.
#[derive(Clone, Debug)]
pub struct DateAxisSpec {
    /// Stable-id base; each generated mark uses a deterministic offset.
    pub id_base: u64,
    /// The axis scale.
    pub scale: ScaleDate,
    /// Granularity driving the tick label format.
    pub granularity: Granularity,
    /// Approximate number of ticks.
    pub tick_count: usize,
    /// Tick line length below the domain line.
    pub tick_size: f64,
    /// Padding between the tick end and the tick label.
    pub tick_padding: f64,
    /// Axis styling.
    pub style: AxisStyle,
}

impl DateAxisSpec {
    /// Creates a date axis with 5 ticks and default styling.
    pub fn new(id_base: u64, scale: ScaleDate, granularity: Granularity) -> Self {
        Self {
            id_base,
            scale,
            granularity,
            tick_count: 5,
            tick_size: 5.0,
            tick_padding: 12.0,
            style: AxisStyle::default(),
        }
    }

    /// Sets the approximate tick count.
    pub fn with_tick_count(mut self, tick_count: usize) -> Self {
        self.tick_count = tick_count;
        self
    }

    /// Sets the axis style.
    pub fn with_style(mut self, style: AxisStyle) -> Self {
        self.style = style;
        self
    }

    /// Generates axis marks along the bottom edge of `plot`.
    pub fn marks(&self, plot: Rect) -> Vec<Mark> {
        let y = plot.y1;
        let mut out = vec![domain_mark(
            self.id_base,
            (plot.x0, y),
            (plot.x1, y),
            &self.style.rule,
        )];

        let ticks = self.scale.ticks(self.tick_count);
        let ticks_len = ticks.len();
        for (i, date) in ticks.into_iter().enumerate() {
            let x = self.scale.map(date);
            if x < plot.x0 - 1.0e-9 || x > plot.x1 + 1.0e-9 {
                continue;
            }

            out.push(tick_mark(
                self.id_base,
                i,
                (x, y),
                (x, y + self.tick_size),
                &self.style.rule,
            ));

            // Clamp the first/last labels inward so they don't hang past
            // the plot edges.
            let (anchor, x) = if i == 0 {
                (TextAnchor::Start, x.clamp(plot.x0, plot.x1))
            } else if i + 1 == ticks_len {
                (TextAnchor::End, x.clamp(plot.x0, plot.x1))
            } else {
                (TextAnchor::Middle, x)
            };
            out.push(Mark::text(
                MarkId::from_raw(self.id_base + LABEL_ID_BASE + i as u64),
                z_order::AXIS_LABELS,
                TextMark {
                    pos: Point::new(x, y + self.tick_size + self.tick_padding),
                    text: format_date(date, self.granularity.tick_format()),
                    font_size: self.style.label_font_size,
                    fill: self.style.label_fill.clone(),
                    anchor,
                    baseline: TextBaseline::Hanging,
                    angle: 0.0,
                },
            ));
        }

        out
    }
}

/// A left value axis.
#[derive(Clone, Debug)]
pub struct ValueAxisSpec {
    /// Stable-id base; each generated mark uses a deterministic offset.
    pub id_base: u64,
    /// The axis scale.
    pub scale: ScaleLinear,
    /// Value label rendering.
    pub format: ValueFormat,
    /// Approximate number of ticks.
    pub tick_count: usize,
    /// Tick line length left of the domain line.
    pub tick_size: f64,
    /// Padding between the tick end and the tick label.
    pub tick_padding: f64,
    /// Axis styling.
    pub style: AxisStyle,
}

impl ValueAxisSpec {
    /// Creates a value axis with 10 ticks and default styling.
    pub fn new(id_base: u64, scale: ScaleLinear, format: ValueFormat) -> Self {
        Self {
            id_base,
            scale,
            format,
            tick_count: 10,
            tick_size: 5.0,
            tick_padding: 6.0,
            style: AxisStyle::default(),
        }
    }

    /// Sets the approximate tick count.
    pub fn with_tick_count(mut self, tick_count: usize) -> Self {
        self.tick_count = tick_count;
        self
    }

    /// Sets the axis style.
    pub fn with_style(mut self, style: AxisStyle) -> Self {
        self.style = style;
        self
    }

    /// Generates axis marks along the left edge of `plot`.
    pub fn marks(&self, plot: Rect) -> Vec<Mark> {
        let x = plot.x0;
        let mut out = vec![domain_mark(
            self.id_base,
            (x, plot.y0),
            (x, plot.y1),
            &self.style.rule,
        )];

        let ticks = self.scale.ticks(self.tick_count);
        let step = tick_step(&ticks);
        for (i, v) in ticks.into_iter().enumerate() {
            let y = self.scale.map(v);
            if y < plot.y0 - 1.0e-9 || y > plot.y1 + 1.0e-9 {
                continue;
            }

            out.push(tick_mark(
                self.id_base,
                i,
                (x - self.tick_size, y),
                (x, y),
                &self.style.rule,
            ));
            out.push(Mark::text(
                MarkId::from_raw(self.id_base + LABEL_ID_BASE + i as u64),
                z_order::AXIS_LABELS,
                TextMark {
                    pos: Point::new(x - self.tick_size - self.tick_padding, y),
                    text: format_tick(v, step, self.format),
                    font_size: self.style.label_font_size,
                    fill: self.style.label_fill.clone(),
                    anchor: TextAnchor::End,
                    baseline: TextBaseline::Middle,
                    angle: 0.0,
                },
            ));
        }

        out
    }
}

fn tick_step(ticks: &[f64]) -> f64 {
    if ticks.len() >= 2 {
        (ticks[1] - ticks[0]).abs()
    } else {
        0.0
    }
}

fn domain_mark(id_base: u64, from: (f64, f64), to: (f64, f64), rule: &StrokeStyle) -> Mark {
    let mut path = BezPath::new();
    path.move_to(from);
    path.line_to(to);
    Mark::path(
        MarkId::from_raw(id_base + DOMAIN_ID),
        z_order::AXIS_RULES,
        PathMark {
            path,
            fill: Brush::Solid(peniko::Color::TRANSPARENT),
            stroke: rule.brush.clone(),
            stroke_width: rule.stroke_width,
            dash: None,
        },
    )
}

fn tick_mark(
    id_base: u64,
    i: usize,
    from: (f64, f64),
    to: (f64, f64),
    rule: &StrokeStyle,
) -> Mark {
    let mut path = BezPath::new();
    path.move_to(from);
    path.line_to(to);
    Mark::path(
        MarkId::from_raw(id_base + TICK_ID_BASE + i as u64),
        z_order::AXIS_RULES,
        PathMark {
            path,
            fill: Brush::Solid(peniko::Color::TRANSPARENT),
            stroke: rule.brush.clone(),
            stroke_width: rule.stroke_width,
            dash: None,
        },
    )
}
