// Copyright 2026 the Strata Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Range-slider widget.
//!
//! The slider spans the full dataset bounds and renders into its own scene:
//! a track, a filled segment between the two handles, circular handles, and
//! date tick labels. Pointer positions map back to clamped dates via
//! [`RangeSlider::date_at`], so the host can interpret drags without
//! knowing anything about scales.

use chrono::NaiveDate;
use kurbo::{BezPath, Circle, Point, Shape};
use peniko::{Brush, Color};
use peniko::color::palette::css;
use strata_core::{Mark, MarkId, PathMark, TextAnchor, TextBaseline, TextMark};
use strata_charts::{
    SLIDER_HANDLES, SLIDER_LABELS, SLIDER_TICK_FORMAT, SLIDER_TRACK, ScaleDate, format_date,
};
use strata_data::DateRange;

const TRACK_ID: u64 = 0;
const FILL_ID: u64 = 1;
const HANDLE_START_ID: u64 = 2;
const HANDLE_END_ID: u64 = 3;
const TICK_ID_BASE: u64 = 10;
const LABEL_ID_BASE: u64 = 1000;

const TRACK_COLOR: Color = Color::from_rgb8(0xdd, 0xdd, 0xdd);
const FILL_COLOR: Color = Color::from_rgb8(0x66, 0x66, 0x66);
const LABEL_COLOR: Color = Color::from_rgb8(0x77, 0x77, 0x77);

/// A two-handle date range slider.
#[derive(Clone, Debug)]
pub struct RangeSlider {
    /// Stable-id base; each generated mark uses a deterministic offset.
    pub id_base: u64,
    /// Full selectable bounds (the dataset's date bounds).
    pub bounds: DateRange,
    /// Horizontal track extent in scene coordinates.
    pub track: (f64, f64),
    /// Track centerline y in scene coordinates.
    pub y: f64,
    /// Number of date tick labels.
    pub tick_count: usize,
    /// Handle radius.
    pub handle_radius: f64,
}

impl RangeSlider {
    /// Creates a slider over `bounds` along the given track extent.
    pub fn new(id_base: u64, bounds: DateRange, track: (f64, f64), y: f64) -> Self {
        Self {
            id_base,
            bounds,
            track,
            y,
            tick_count: 5,
            handle_radius: 9.0,
        }
    }

    /// Returns the scale mapping bounds dates onto the track.
    pub fn scale(&self) -> ScaleDate {
        ScaleDate::new((self.bounds.start, self.bounds.end), self.track)
    }

    /// Maps a pointer x position to a date, clamped to the bounds.
    pub fn date_at(&self, x: f64) -> NaiveDate {
        self.scale().date_at(x)
    }

    /// Generates slider marks for the currently selected range.
    pub fn marks(&self, current: DateRange) -> Vec<Mark> {
        let scale = self.scale();
        let x0 = scale.map(current.start);
        let x1 = scale.map(current.end);

        let mut out = vec![
            line_mark(
                MarkId::from_raw(self.id_base + TRACK_ID),
                SLIDER_TRACK,
                Point::new(self.track.0, self.y),
                Point::new(self.track.1, self.y),
                TRACK_COLOR,
                6.0,
            ),
            line_mark(
                MarkId::from_raw(self.id_base + FILL_ID),
                SLIDER_TRACK,
                Point::new(x0, self.y),
                Point::new(x1, self.y),
                FILL_COLOR,
                6.0,
            ),
            handle_mark(
                MarkId::from_raw(self.id_base + HANDLE_START_ID),
                Point::new(x0, self.y),
                self.handle_radius,
            ),
            handle_mark(
                MarkId::from_raw(self.id_base + HANDLE_END_ID),
                Point::new(x1, self.y),
                self.handle_radius,
            ),
        ];

        for (i, date) in scale.ticks(self.tick_count).into_iter().enumerate() {
            let x = scale.map(date);
            let mut tick = BezPath::new();
            tick.move_to((x, self.y + 7.0));
            tick.line_to((x, self.y + 11.0));
            out.push(Mark::path(
                MarkId::from_raw(self.id_base + TICK_ID_BASE + i as u64),
                SLIDER_TRACK,
                PathMark {
                    path: tick,
                    fill: Brush::Solid(Color::TRANSPARENT),
                    stroke: Brush::Solid(LABEL_COLOR),
                    stroke_width: 1.0,
                    dash: None,
                },
            ));
            out.push(Mark::text(
                MarkId::from_raw(self.id_base + LABEL_ID_BASE + i as u64),
                SLIDER_LABELS,
                TextMark {
                    pos: Point::new(x, self.y + 14.0),
                    text: format_date(date, SLIDER_TICK_FORMAT),
                    font_size: 10.0,
                    fill: Brush::Solid(LABEL_COLOR),
                    anchor: TextAnchor::Middle,
                    baseline: TextBaseline::Hanging,
                    angle: 0.0,
                },
            ));
        }

        out
    }
}

fn line_mark(id: MarkId, z: i32, from: Point, to: Point, color: Color, width: f64) -> Mark {
    let mut path = BezPath::new();
    path.move_to(from);
    path.line_to(to);
    Mark::path(
        id,
        z,
        PathMark {
            path,
            fill: Brush::Solid(Color::TRANSPARENT),
            stroke: Brush::Solid(color),
            stroke_width: width,
            dash: None,
        },
    )
}

fn handle_mark(id: MarkId, center: Point, radius: f64) -> Mark {
    Mark::path(
        id,
        SLIDER_HANDLES,
        PathMark {
            path: Circle::new(center, radius).to_path(0.1),
            fill: Brush::Solid(css::WHITE),
            stroke: Brush::Solid(FILL_COLOR),
            stroke_width: 1.0,
            dash: None,
        },
    )
}
