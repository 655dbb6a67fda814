// Copyright 2026 the Strata Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The chart controller: view state plus the render pipeline.
//!
//! The controller owns the two pieces of state interaction mutates (the
//! visible [`DateRange`] and the [`ActiveSelection`]) and re-runs
//! aggregate → stack → marks → scene-diff on every change. Slider drags are
//! throttled with a trailing-edge guarantee; slider release, legend
//! toggles, and rebuilds render with animation; hover updates render
//! immediately.
//!
//! All timing is explicit: hosts pass millisecond timestamps into
//! [`ChartController::slider_drag`] and [`ChartController::poll`].

use chrono::NaiveDate;
use kurbo::Point;
use log::{debug, trace};
use peniko::Color;
use peniko::color::palette::css;
use thiserror::Error;

use strata_charts::{
    ChartFrame, DateAxisSpec, HeuristicTextMeasurer, HoverMarkSpec, HoverReadout, LegendArrangement,
    LegendItem, LegendSpec, ScaleDate, ScaleLinear, Size, StackedBandSpec, ValueAxisSpec,
    category_colors, hover_readout,
};
use strata_core::{Mark, MarkDiff, MarkId, Scene};
use strata_data::{
    ActiveSelection, AggregatedRow, ChartConfig, DateRange, Dataset, Granularity, StackedData,
    aggregate, stack,
};

use crate::slider::RangeSlider;
use crate::throttle::Throttle;

const X_AXIS_ID_BASE: u64 = 0x1000;
const Y_AXIS_ID_BASE: u64 = 0x2000;
const BAND_ID_BASE: u64 = 0x3000;
const LEGEND_ID_BASE: u64 = 0x4000;
const HOVER_ID_BASE: u64 = 0x7000;
const SLIDER_ID_BASE: u64 = 0x100;

/// Height of the slider strip under the chart.
pub const SLIDER_HEIGHT: f64 = 70.0;
const SLIDER_TRACK_Y: f64 = 30.0;

const BAND_FILL_OPACITY: f32 = 0.7;

/// How the host should apply a render update.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RenderMode {
    /// Apply without transitions (throttled drag updates, hover).
    Immediate,
    /// Apply with a bounded transition.
    Animated {
        /// Transition duration in milliseconds.
        duration_ms: u64,
    },
}

/// One render's worth of scene changes.
#[derive(Debug)]
pub struct RenderUpdate {
    /// How to apply the update.
    pub mode: RenderMode,
    /// When set, the renderer must drop all retained state first; every
    /// mark re-enters.
    pub rebuild: bool,
    /// Chart scene diffs.
    pub chart: Vec<MarkDiff>,
    /// Slider scene diffs.
    pub slider: Vec<MarkDiff>,
}

/// Errors surfaced by controller construction.
#[derive(Debug, Error)]
pub enum ControllerError {
    /// The dataset loaded successfully but contains no observations.
    #[error("dataset contains no observations")]
    EmptyDataset,
}

/// The interactive chart state machine.
#[derive(Debug)]
pub struct ChartController {
    dataset: Dataset,
    config: ChartConfig,
    bounds: DateRange,
    colors: Vec<Color>,

    range: DateRange,
    selection: ActiveSelection,
    viewport: Size,
    frame: ChartFrame,
    hover: Option<HoverReadout>,

    throttle: Throttle<DateRange>,
    chart_scene: Scene,
    slider_scene: Scene,
    measurer: HeuristicTextMeasurer,

    // Pipeline caches, recomputed when range or selection change.
    granularity: Granularity,
    rows: Vec<AggregatedRow>,
    stacked: StackedData,
    x_scale: ScaleDate,
    y_scale: ScaleLinear,
}

impl ChartController {
    /// Creates a controller over a non-empty dataset.
    ///
    /// The initial range is the full dataset bounds with every category
    /// active. No marks are generated yet; call
    /// [`ChartController::rebuild`] for the initial render.
    pub fn new(
        dataset: Dataset,
        config: ChartConfig,
        viewport: Size,
    ) -> Result<Self, ControllerError> {
        let bounds = dataset.bounds().ok_or(ControllerError::EmptyDataset)?;
        let colors = category_colors(config.base_color, dataset.categories().len());
        let selection = ActiveSelection::all(dataset.categories());
        let frame = ChartFrame::new(viewport, config.mobile_breakpoint);
        let throttle = Throttle::new(config.update_delay_ms);

        let mut out = Self {
            dataset,
            config,
            bounds,
            colors,
            range: bounds,
            selection,
            viewport,
            frame,
            hover: None,
            throttle,
            chart_scene: Scene::new(),
            slider_scene: Scene::new(),
            measurer: HeuristicTextMeasurer,
            granularity: Granularity::Daily,
            rows: Vec::new(),
            stacked: StackedData {
                series: Vec::new(),
                max_top: 0.0,
            },
            x_scale: ScaleDate::new((bounds.start, bounds.end), (0.0, 1.0)),
            y_scale: ScaleLinear::new((0.0, 1.0), (1.0, 0.0)),
        };
        out.recompute();
        Ok(out)
    }

    /// Returns the current visible range.
    pub fn range(&self) -> DateRange {
        self.range
    }

    /// Returns the current granularity.
    pub fn granularity(&self) -> Granularity {
        self.granularity
    }

    /// Returns the current active selection.
    pub fn selection(&self) -> &ActiveSelection {
        &self.selection
    }

    /// Returns the aggregated rows for the current range.
    pub fn rows(&self) -> &[AggregatedRow] {
        &self.rows
    }

    /// Returns the stacked layers for the current range and selection.
    pub fn stacked(&self) -> &StackedData {
        &self.stacked
    }

    /// Returns the current hover readout, if any.
    pub fn hover(&self) -> Option<&HoverReadout> {
        self.hover.as_ref()
    }

    /// Returns the current frame layout.
    pub fn frame(&self) -> &ChartFrame {
        &self.frame
    }

    /// Returns when a pending throttled update becomes due, if any.
    pub fn pending_update_due(&self) -> Option<u64> {
        self.throttle.next_due()
    }

    /// Renders everything from scratch (initial render and after
    /// [`ChartController::resize`]).
    ///
    /// Any pending throttled range update is dropped: it would otherwise
    /// fire against torn-down render state.
    pub fn rebuild(&mut self) -> RenderUpdate {
        self.frame = ChartFrame::new(self.viewport, self.config.mobile_breakpoint);
        if self.throttle.cancel().is_some() {
            debug!("dropping pending range update for full rebuild");
        }
        self.hover = None;
        self.recompute();
        self.render(self.animated(), true)
    }

    /// Applies a new viewport and rebuilds.
    pub fn resize(&mut self, viewport: Size) -> RenderUpdate {
        debug!(
            "resize to {}x{} (mobile below {})",
            viewport.width, viewport.height, self.config.mobile_breakpoint
        );
        self.viewport = viewport;
        self.rebuild()
    }

    /// Offers a range from an in-progress slider drag at time `now_ms`.
    ///
    /// Throttled: returns a render (without animation) for the leading
    /// call; bursts store the newest value for [`ChartController::poll`].
    pub fn slider_drag(&mut self, range: DateRange, now_ms: u64) -> Option<RenderUpdate> {
        trace!("slider drag {} to {}", range.start, range.end);
        let fired = self.throttle.submit(range, now_ms)?;
        Some(self.apply_range(fired, RenderMode::Immediate))
    }

    /// Fires a pending throttled drag update once its window has elapsed.
    ///
    /// Hosts call this from their event loop; the newest dragged range is
    /// always eventually applied even when intermediate drags are dropped.
    pub fn poll(&mut self, now_ms: u64) -> Option<RenderUpdate> {
        let range = self.throttle.poll(now_ms)?;
        trace!("applying trailing drag update {} to {}", range.start, range.end);
        Some(self.apply_range(range, RenderMode::Immediate))
    }

    /// Applies the exact released range with animation.
    ///
    /// Any pending throttled value is dropped first, so the release value
    /// is always the one that sticks.
    pub fn slider_release(&mut self, range: DateRange) -> RenderUpdate {
        if self.throttle.cancel().is_some() {
            debug!("release supersedes a pending drag update");
        }
        self.apply_range(range, self.animated())
    }

    /// Toggles a category's membership in the active selection.
    ///
    /// Reactivated categories return to their original stacking position.
    /// Returns `None` for unknown labels.
    pub fn toggle_category(&mut self, label: &str) -> Option<RenderUpdate> {
        let now_active = self.selection.toggle(label)?;
        debug!(
            "category {label:?} {}",
            if now_active { "activated" } else { "deactivated" }
        );
        self.hover = None;
        self.recompute();
        Some(self.render(self.animated(), false))
    }

    /// Updates the hover readout for a pointer position over the plot.
    ///
    /// Returns `None` (no render) when the pointer is outside the plot or
    /// the readout is unchanged.
    pub fn pointer_move(&mut self, x: f64, y: f64) -> Option<RenderUpdate> {
        if !self.frame.plot.contains(Point::new(x, y)) {
            return None;
        }
        let days = self.x_scale.position_to_days(x);
        let readout = hover_readout(&self.rows, &self.selection, days, &self.x_scale);
        if readout == self.hover {
            return None;
        }
        self.hover = readout;
        Some(self.render(RenderMode::Immediate, false))
    }

    /// Hides the hover readout.
    pub fn pointer_leave(&mut self) -> Option<RenderUpdate> {
        self.hover.take()?;
        Some(self.render(RenderMode::Immediate, false))
    }

    /// Maps a legend click position to its category label, if any.
    pub fn legend_label_at(&self, x: f64, y: f64) -> Option<String> {
        self.legend_spec()
            .hit(self.frame.legend_origin(), &self.measurer, Point::new(x, y))
            .map(str::to_owned)
    }

    /// Maps a slider pointer position to a clamped date.
    pub fn slider_date_at(&self, x: f64) -> NaiveDate {
        self.slider().date_at(x)
    }

    fn animated(&self) -> RenderMode {
        RenderMode::Animated {
            duration_ms: self.config.update_delay_ms,
        }
    }

    fn apply_range(&mut self, range: DateRange, mode: RenderMode) -> RenderUpdate {
        self.range = range.clamp_to(self.bounds);
        self.hover = None;
        self.recompute();
        self.render(mode, false)
    }

    fn recompute(&mut self) {
        self.granularity = Granularity::from_span_days(self.range.span_days());
        self.rows = aggregate(
            &self.dataset,
            self.range,
            self.granularity,
            self.config.aggregate,
        );
        self.stacked = stack(&self.rows, &self.selection);

        // The x domain follows the aggregated rows' extent, not the raw
        // range: buckets are floored, so the first bucket can predate the
        // range start.
        let domain = match (self.rows.first(), self.rows.last()) {
            (Some(first), Some(last)) => (first.bucket, last.bucket),
            _ => (self.range.start, self.range.end),
        };
        let plot = self.frame.plot;
        self.x_scale = ScaleDate::new(domain, (plot.x0, plot.x1));
        self.y_scale = ScaleLinear::new((0.0, self.stacked.max_top), (plot.y1, plot.y0));

        trace!(
            "pipeline: {:?}, {} buckets, max {}",
            self.granularity,
            self.rows.len(),
            self.stacked.max_top
        );
    }

    fn render(&mut self, mode: RenderMode, rebuild: bool) -> RenderUpdate {
        if rebuild {
            self.chart_scene.clear();
            self.slider_scene.clear();
        }
        let chart_marks = self.chart_marks();
        let slider_marks = self.slider().marks(self.range);
        RenderUpdate {
            mode,
            rebuild,
            chart: self.chart_scene.tick(chart_marks),
            slider: self.slider_scene.tick(slider_marks),
        }
    }

    fn chart_marks(&self) -> Vec<Mark> {
        let mut out = Vec::new();

        for series in &self.stacked.series {
            let color = self
                .colors
                .get(series.category)
                .copied()
                .unwrap_or(css::BLACK);
            out.extend(
                StackedBandSpec::new(
                    MarkId::from_raw(BAND_ID_BASE + series.category as u64),
                    self.x_scale,
                    self.y_scale,
                )
                .with_fill(color.with_alpha(BAND_FILL_OPACITY))
                .marks(&series.points),
            );
        }

        out.extend(
            DateAxisSpec::new(X_AXIS_ID_BASE, self.x_scale, self.granularity)
                .marks(self.frame.plot),
        );
        out.extend(
            ValueAxisSpec::new(Y_AXIS_ID_BASE, self.y_scale, self.config.value_format)
                .marks(self.frame.plot),
        );

        out.extend(
            self.legend_spec()
                .marks(self.frame.legend_origin(), &self.measurer),
        );

        if let Some(readout) = &self.hover {
            out.extend(
                HoverMarkSpec {
                    id_base: HOVER_ID_BASE,
                    plot: self.frame.plot,
                    x_scale: self.x_scale,
                    y_scale: self.y_scale,
                    labels: self.dataset.categories(),
                    format: self.config.value_format,
                }
                .marks(readout, &self.measurer),
            );
        }

        out
    }

    fn legend_spec(&self) -> LegendSpec {
        // Reverse display order: the topmost band lists first.
        let items: Vec<LegendItem> = (0..self.dataset.categories().len())
            .rev()
            .map(|ix| LegendItem {
                label: self.dataset.categories()[ix].clone(),
                color: self.colors.get(ix).copied().unwrap_or(css::BLACK),
                active: self.selection.is_active(ix),
            })
            .collect();
        let arrangement = if self.frame.is_mobile {
            LegendArrangement::Wrap {
                max_width: self.frame.legend_max_width(),
            }
        } else {
            LegendArrangement::Column
        };
        LegendSpec::new(LEGEND_ID_BASE, items).with_arrangement(arrangement)
    }

    fn slider(&self) -> RangeSlider {
        RangeSlider::new(
            SLIDER_ID_BASE,
            self.bounds,
            (self.frame.plot.x0, self.frame.plot.x1),
            SLIDER_TRACK_Y,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Days;
    use strata_charts::SERIES_FILL;
    use strata_core::MarkPayload;
    use strata_data::Observation;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    /// Three categories, 400 observation days spanning roughly two years.
    fn sample_dataset() -> Dataset {
        let start = date(2018, 1, 1);
        let mut observations = Vec::new();
        for i in 0..400u64 {
            let d = start.checked_add_days(Days::new(i * 2)).unwrap();
            for (category, value) in [("NES", 10.0), ("SNES", 5.0), ("N64", 2.0)] {
                observations.push(Observation {
                    date: d,
                    category: category.into(),
                    value,
                });
            }
        }
        Dataset::new(observations)
    }

    fn controller() -> ChartController {
        ChartController::new(
            sample_dataset(),
            ChartConfig::default(),
            Size {
                width: 1200.0,
                height: 600.0,
            },
        )
        .unwrap()
    }

    fn entered_bands(update: &RenderUpdate) -> usize {
        update
            .chart
            .iter()
            .filter(|d| matches!(d, MarkDiff::Enter { z_index, .. } if *z_index == SERIES_FILL))
            .count()
    }

    #[test]
    fn empty_dataset_is_rejected() {
        let err = ChartController::new(
            Dataset::new(Vec::new()),
            ChartConfig::default(),
            Size {
                width: 800.0,
                height: 400.0,
            },
        )
        .unwrap_err();
        assert!(matches!(err, ControllerError::EmptyDataset));
    }

    #[test]
    fn initial_render_stacks_three_monthly_layers() {
        let mut c = controller();
        // ~800 days visible: more than a year, at most five.
        assert_eq!(c.granularity(), Granularity::Monthly);

        let update = c.rebuild();
        assert!(update.rebuild);
        assert!(matches!(update.mode, RenderMode::Animated { .. }));
        assert_eq!(entered_bands(&update), 3);

        // One toggleable pill per category.
        let pills = update
            .chart
            .iter()
            .filter(|d| {
                matches!(
                    d,
                    MarkDiff::Enter { new, .. }
                        if matches!(&**new, MarkPayload::Rect(r) if r.corner_radius > 0.0)
                )
            })
            .count();
        assert_eq!(pills, 3);
        assert!(!update.slider.is_empty());
    }

    #[test]
    fn narrowing_to_ten_days_switches_to_daily_buckets() {
        let mut c = controller();
        c.rebuild();
        let update = c.slider_release(DateRange::new(date(2018, 3, 1), date(2018, 3, 11)));
        assert!(matches!(update.mode, RenderMode::Animated { .. }));
        assert_eq!(c.granularity(), Granularity::Daily);
        assert!(c.rows().len() <= 10, "got {} rows", c.rows().len());
    }

    #[test]
    fn drag_bursts_throttle_with_a_trailing_fire_of_the_newest_value() {
        let mut c = controller();
        c.rebuild();
        let r1 = DateRange::new(date(2018, 1, 1), date(2019, 1, 1));
        let r2 = DateRange::new(date(2018, 1, 1), date(2018, 10, 1));
        let r3 = DateRange::new(date(2018, 1, 1), date(2018, 6, 1));

        let leading = c.slider_drag(r1, 0).expect("leading drag renders");
        assert_eq!(leading.mode, RenderMode::Immediate);
        assert_eq!(c.range(), r1);

        assert!(c.slider_drag(r2, 20).is_none());
        assert!(c.slider_drag(r3, 40).is_none());
        assert_eq!(c.range(), r1, "burst values must not apply early");

        assert!(c.poll(99).is_none());
        let trailing = c.poll(100).expect("trailing fire");
        assert_eq!(trailing.mode, RenderMode::Immediate);
        assert_eq!(c.range(), r3, "the newest dragged value wins");
        assert!(c.poll(1000).is_none());
    }

    #[test]
    fn release_always_applies_the_exact_released_range() {
        let mut c = controller();
        c.rebuild();
        let dragged = DateRange::new(date(2018, 1, 1), date(2018, 10, 1));
        let released = DateRange::new(date(2018, 2, 1), date(2018, 8, 1));

        c.slider_drag(DateRange::new(date(2018, 1, 1), date(2019, 1, 1)), 0);
        c.slider_drag(dragged, 30);

        let update = c.slider_release(released);
        assert!(matches!(update.mode, RenderMode::Animated { .. }));
        assert_eq!(c.range(), released);
        // The suppressed drag value never fires afterwards.
        assert!(c.poll(10_000).is_none());
        assert_eq!(c.range(), released);
    }

    #[test]
    fn ranges_are_clamped_to_the_dataset_bounds() {
        let mut c = controller();
        c.rebuild();
        c.slider_release(DateRange::new(date(2000, 1, 1), date(2030, 1, 1)));
        let bounds = sample_dataset().bounds().unwrap();
        assert_eq!(c.range(), bounds);
    }

    #[test]
    fn toggling_a_category_drops_its_layer_and_its_hover_share() {
        let mut c = controller();
        c.rebuild();

        let update = c.toggle_category("SNES").expect("known label");
        assert!(matches!(update.mode, RenderMode::Animated { .. }));
        assert_eq!(c.stacked().series.len(), 2);
        assert!(
            update
                .chart
                .iter()
                .any(|d| matches!(d, MarkDiff::Exit { .. })),
            "the deactivated band should exit"
        );

        // Hover totals exclude the deactivated category: monthly means are
        // 10 + 2 per bucket.
        let center = c.frame().plot.center();
        c.pointer_move(center.x, center.y).expect("hover renders");
        let readout = c.hover().expect("hover present");
        assert!((readout.total - 12.0).abs() < 1e-9, "got {}", readout.total);
        assert_eq!(readout.entries.len(), 2);

        // Reactivation restores the original stacking position.
        c.toggle_category("SNES").expect("known label");
        let order: Vec<usize> = c.stacked().series.iter().map(|s| s.category).collect();
        assert_eq!(order, vec![0, 1, 2]);
    }

    #[test]
    fn unknown_legend_label_is_ignored() {
        let mut c = controller();
        c.rebuild();
        assert!(c.toggle_category("GameCube").is_none());
    }

    #[test]
    fn pointer_move_and_leave_drive_the_hover_readout() {
        let mut c = controller();
        c.rebuild();
        let center = c.frame().plot.center();

        assert!(c.pointer_move(center.x, center.y).is_some());
        assert!(c.hover().is_some());
        // Unchanged position re-renders nothing.
        assert!(c.pointer_move(center.x, center.y).is_none());

        assert!(c.pointer_leave().is_some());
        assert!(c.hover().is_none());
        assert!(c.pointer_leave().is_none());

        // Outside the plot nothing happens.
        assert!(c.pointer_move(-100.0, -100.0).is_none());
    }

    #[test]
    fn resize_rebuilds_and_cancels_pending_updates() {
        let mut c = controller();
        c.rebuild();
        c.slider_drag(DateRange::new(date(2018, 1, 1), date(2019, 1, 1)), 0);
        c.slider_drag(DateRange::new(date(2018, 1, 1), date(2018, 6, 1)), 10);
        assert!(c.pending_update_due().is_some());

        let update = c.resize(Size {
            width: 400.0,
            height: 500.0,
        });
        assert!(update.rebuild);
        assert!(c.frame().is_mobile);
        assert!(c.pending_update_due().is_none());
        assert!(c.poll(10_000).is_none());
    }

    #[test]
    fn legend_hit_testing_resolves_labels() {
        let mut c = controller();
        c.rebuild();
        let (ox, oy) = c.frame().legend_origin();
        // Display order is reversed, so the first pill is the last
        // category.
        assert_eq!(c.legend_label_at(ox + 5.0, oy + 5.0), Some("N64".into()));
        assert_eq!(c.legend_label_at(-10.0, -10.0), None);
    }

    #[test]
    fn slider_positions_resolve_to_dates() {
        let mut c = controller();
        c.rebuild();
        let plot = c.frame().plot;
        assert_eq!(c.slider_date_at(plot.x0), date(2018, 1, 1));
        let end = sample_dataset().bounds().unwrap().end;
        assert_eq!(c.slider_date_at(plot.x1), end);
    }
}
