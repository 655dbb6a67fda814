// Copyright 2026 the Strata Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Cumulative band boundaries for stacked-area rendering.

use chrono::NaiveDate;

use crate::aggregate::AggregatedRow;
use crate::selection::ActiveSelection;

/// One band boundary sample: a bucket with the layer's bottom and top.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StackedPoint {
    /// Bucket start date.
    pub bucket: NaiveDate,
    /// Bottom of the band in data units.
    pub y0: f64,
    /// Top of the band in data units.
    pub y1: f64,
}

/// One stacked layer for a single active category.
#[derive(Clone, Debug, PartialEq)]
pub struct StackedSeries {
    /// Category-set index of the layer.
    pub category: usize,
    /// Band boundaries, aligned to the aggregated rows.
    pub points: Vec<StackedPoint>,
}

/// The stacked layers plus the vertical extent they need.
#[derive(Clone, Debug, PartialEq)]
pub struct StackedData {
    /// Layers in stacking order (bottom first).
    pub series: Vec<StackedSeries>,
    /// Largest band top across all rows and layers; `0.0` when the
    /// selection is empty or there are no rows.
    pub max_top: f64,
}

/// Builds cumulative band boundaries for the active categories.
///
/// The first layer's baseline is `0`; each further layer's baseline is the
/// previous layer's top, so baselines are non-decreasing layer over layer.
pub fn stack(rows: &[AggregatedRow], selection: &ActiveSelection) -> StackedData {
    let active = selection.active_indices();
    let mut series: Vec<StackedSeries> = active
        .iter()
        .map(|&category| StackedSeries {
            category,
            points: Vec::with_capacity(rows.len()),
        })
        .collect();
    let mut max_top = 0.0_f64;

    for row in rows {
        let mut base = 0.0;
        for (layer, &category) in series.iter_mut().zip(&active) {
            let value = row.values.get(category).copied().unwrap_or(0.0);
            let top = base + value;
            layer.points.push(StackedPoint {
                bucket: row.bucket,
                y0: base,
                y1: top,
            });
            base = top;
        }
        max_top = max_top.max(base);
    }

    StackedData { series, max_top }
}
