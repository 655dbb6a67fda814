// Copyright 2026 the Strata Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Z-order conventions for chart-generated marks.
//!
//! `strata_core` marks carry an explicit `z_index` for render ordering. The
//! chart layer assigns these consistently so callers never hand-tune paint
//! order. Renderers sort by `(z_index, MarkId)` for a deterministic
//! tie-break.

/// Plot background fills.
pub const PLOT_BACKGROUND: i32 = -100;

/// Filled stacked band marks.
pub const SERIES_FILL: i32 = 0;

/// Axis domain lines and tick marks.
pub const AXIS_RULES: i32 = 30;
/// Axis tick labels.
pub const AXIS_LABELS: i32 = 40;

/// Legend pill swatches.
pub const LEGEND_SWATCHES: i32 = 60;
/// Legend labels.
pub const LEGEND_LABELS: i32 = 70;

/// Hover crosshair lines.
pub const HOVER_LINES: i32 = 80;
/// Hover indicator point.
pub const HOVER_POINT: i32 = 85;
/// Hover tooltip background.
pub const HOVER_BACKGROUND: i32 = 90;
/// Hover tooltip and date-flag text.
pub const HOVER_TEXT: i32 = 95;

/// Slider track and fill.
pub const SLIDER_TRACK: i32 = 0;
/// Slider handles.
pub const SLIDER_HANDLES: i32 = 10;
/// Slider tick labels.
pub const SLIDER_LABELS: i32 = 20;
