// Copyright 2026 the Strata Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Hover readout: nearest-bucket lookup and indicator marks.

use chrono::NaiveDate;
use kurbo::{BezPath, Circle, Point, Rect, Shape};
use peniko::Brush;
use peniko::color::palette::css;
use strata_core::{Mark, MarkId, PathMark, RectMark, TextAnchor, TextBaseline, TextMark};
use strata_data::{ActiveSelection, AggregatedRow, ValueFormat};

use crate::format::{HOVER_DATE_FORMAT, format_date, format_value};
use crate::measure::TextMeasurer;
use crate::scale::{ScaleDate, ScaleLinear};
use crate::z_order;

const POINT_ID: u64 = 0;
const VLINE_ID: u64 = 1;
const HLINE_ID: u64 = 2;
const BOX_ID: u64 = 3;
const DATE_FLAG_ID: u64 = 4;
const LINE_ID_BASE: u64 = 1000;

/// The values shown for the hovered bucket.
#[derive(Clone, Debug, PartialEq)]
pub struct HoverReadout {
    /// The hovered bucket date.
    pub bucket: NaiveDate,
    /// Total across the active selection.
    pub total: f64,
    /// Per-category `(category index, value)` pairs for active categories
    /// only, in stacking order.
    pub entries: Vec<(usize, f64)>,
}

/// Resolves the bucket nearest to a pointer position.
///
/// `target_days` is the pointer's position inverted into fractional days
/// from the x-scale's domain start (see [`ScaleDate::position_to_days`]).
/// Nearest-neighbor by absolute date distance; an exact midpoint between
/// two buckets resolves to the later one.
pub fn hover_readout(
    rows: &[AggregatedRow],
    selection: &ActiveSelection,
    target_days: f64,
    x_scale: &ScaleDate,
) -> Option<HoverReadout> {
    let mut best: Option<(f64, &AggregatedRow)> = None;
    for row in rows {
        let dist = (x_scale.days_from_start(row.bucket) - target_days).abs();
        // `<=` so later rows win exact ties (rows are bucket-ascending).
        if best.is_none_or(|(best_dist, _)| dist <= best_dist) {
            best = Some((dist, row));
        }
    }
    let (_, row) = best?;

    let active = selection.active_indices();
    let entries: Vec<(usize, f64)> = active
        .iter()
        .map(|&ix| (ix, row.values.get(ix).copied().unwrap_or(0.0)))
        .collect();
    let total = entries.iter().map(|(_, v)| v).sum();

    Some(HoverReadout {
        bucket: row.bucket,
        total,
        entries,
    })
}

/// Indicator + tooltip mark generation for a hover readout.
#[derive(Clone, Debug)]
pub struct HoverMarkSpec<'a> {
    /// Stable-id base; each generated mark uses a deterministic offset.
    pub id_base: u64,
    /// The plot rectangle (crosshair extent).
    pub plot: Rect,
    /// X scale mapping bucket dates into scene x.
    pub x_scale: ScaleDate,
    /// Y scale mapping stacked values into scene y.
    pub y_scale: ScaleLinear,
    /// Category labels, indexed by category-set index.
    pub labels: &'a [String],
    /// Value rendering for the tooltip.
    pub format: ValueFormat,
}

impl HoverMarkSpec<'_> {
    /// Generates the indicator point, crosshair, tooltip, and date flag.
    pub fn marks(&self, readout: &HoverReadout, measurer: &dyn TextMeasurer) -> Vec<Mark> {
        let x = self.x_scale.map(readout.bucket);
        let y = self.y_scale.map(readout.total);

        let mut out = Vec::new();

        // Dashed crosshair: down to the axis and across the plot.
        out.push(dashed_line(
            MarkId::from_raw(self.id_base + VLINE_ID),
            Point::new(x, y),
            Point::new(x, self.plot.y1),
        ));
        out.push(dashed_line(
            MarkId::from_raw(self.id_base + HLINE_ID),
            Point::new(self.plot.x0, y),
            Point::new(self.plot.x1, y),
        ));

        // Indicator point.
        out.push(Mark::path(
            MarkId::from_raw(self.id_base + POINT_ID),
            z_order::HOVER_POINT,
            PathMark {
                path: Circle::new((x, y), 5.0).to_path(0.1),
                fill: Brush::Solid(css::RED.with_alpha(0.7)),
                stroke: Brush::Solid(css::WHITE),
                stroke_width: 1.0,
                dash: None,
            },
        ));

        // Tooltip block: total first, then one line per active category.
        let font_size = 12.0;
        let line_height = font_size + 4.0;
        let mut lines = vec![format!(
            "Total: {}",
            format_value(readout.total, self.format)
        )];
        for &(ix, value) in &readout.entries {
            let label = self.labels.get(ix).map(String::as_str).unwrap_or("?");
            lines.push(format!("{label}: {}", format_value(value, self.format)));
        }

        let pad = 6.0;
        let box_w = lines
            .iter()
            .map(|l| measurer.measure(l, font_size).0)
            .fold(0.0_f64, f64::max)
            + 2.0 * pad;
        let box_h = lines.len() as f64 * line_height + 2.0 * pad;
        let (bx, by) = (x + 15.0, y - 28.0);
        out.push(Mark::rect(
            MarkId::from_raw(self.id_base + BOX_ID),
            z_order::HOVER_BACKGROUND,
            RectMark {
                rect: Rect::new(bx, by, bx + box_w, by + box_h),
                fill: Brush::Solid(css::WHITE.with_alpha(0.9)),
                corner_radius: 3.0,
            },
        ));
        for (i, line) in lines.into_iter().enumerate() {
            out.push(Mark::text(
                MarkId::from_raw(self.id_base + LINE_ID_BASE + i as u64),
                z_order::HOVER_TEXT,
                TextMark {
                    pos: Point::new(bx + pad, by + pad + (i as f64 + 0.5) * line_height),
                    text: line,
                    font_size,
                    fill: Brush::Solid(css::BLACK),
                    anchor: TextAnchor::Start,
                    baseline: TextBaseline::Middle,
                    angle: 0.0,
                },
            ));
        }

        // Date flag under the axis.
        out.push(Mark::text(
            MarkId::from_raw(self.id_base + DATE_FLAG_ID),
            z_order::HOVER_TEXT,
            TextMark {
                pos: Point::new(x, self.plot.y1 + 15.0),
                text: format_date(readout.bucket, HOVER_DATE_FORMAT),
                font_size,
                fill: Brush::Solid(peniko::Color::from_rgb8(0x77, 0x77, 0x77)),
                anchor: TextAnchor::Middle,
                baseline: TextBaseline::Hanging,
                angle: 0.0,
            },
        ));

        out
    }
}

fn dashed_line(id: MarkId, from: Point, to: Point) -> Mark {
    let mut path = BezPath::new();
    path.move_to(from);
    path.line_to(to);
    Mark::path(
        id,
        z_order::HOVER_LINES,
        PathMark {
            path,
            fill: Brush::Solid(peniko::Color::TRANSPARENT),
            stroke: Brush::Solid(css::RED),
            stroke_width: 1.0,
            dash: Some([2.0, 2.0]),
        },
    )
}
