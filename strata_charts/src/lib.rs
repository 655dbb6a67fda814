// Copyright 2026 the Strata Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Chart building blocks for Strata.
//!
//! This crate is the layer between the pure data pipeline (`strata_data`)
//! and the retained scene (`strata_core`):
//! - **Scales** map dates and values into plot coordinates.
//! - **Guides** (axes, legend) and **series** (stacked bands, hover readout)
//!   are generated as `strata_core::Mark`s with stable, deterministic ids.
//!
//! Text shaping and real rendering stay downstream; guide sizing uses a
//! heuristic text measurer.

mod area;
mod axis;
mod curve;
mod format;
mod hover;
mod layout;
mod legend;
mod measure;
mod palette;
mod scale;
mod z_order;

pub use area::{Curve, StackedBandSpec};
pub use axis::{AxisStyle, DateAxisSpec, StrokeStyle, ValueAxisSpec};
pub use curve::append_monotone_x;
pub use format::{
    HOVER_DATE_FORMAT, SLIDER_TICK_FORMAT, format_date, format_tick, format_value,
};
pub use hover::{HoverMarkSpec, HoverReadout, hover_readout};
pub use layout::{ChartFrame, Margin, Size};
pub use legend::{LegendArrangement, LegendItem, LegendSlot, LegendSpec};
pub use measure::{HeuristicTextMeasurer, TextMeasurer};
pub use palette::category_colors;
pub use scale::{ScaleDate, ScaleLinear, date_ticks};
pub use z_order::*;
