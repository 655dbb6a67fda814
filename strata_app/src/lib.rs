// Copyright 2026 the Strata Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The interaction layer for Strata charts.
//!
//! [`ChartController`] owns the mutable view state (visible range, active
//! selection, viewport) and re-runs the aggregate → stack → marks pipeline
//! on every change. Slider drags go through a trailing-edge [`Throttle`]
//! advanced by explicit timestamps, so the whole event model is
//! single-threaded and testable with a fake clock.
//!
//! Rendering output is a stream of scene diffs; [`SvgScene`] applies them
//! into deterministic SVG, and [`page`] wraps the chart and slider SVGs in
//! the host page with the two fixed container elements.

mod controller;
pub mod page;
mod slider;
mod svg;
mod throttle;

pub use controller::{ChartController, ControllerError, RenderMode, RenderUpdate, SLIDER_HEIGHT};
pub use slider::RangeSlider;
pub use svg::SvgScene;
pub use throttle::Throttle;
