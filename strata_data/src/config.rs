// Copyright 2026 the Strata Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Unified chart configuration.
//!
//! The recognized options cover the observed deployment variants: sum vs
//! mean aggregation, a base color for the category palette, plain vs
//! currency value labels, the mobile layout breakpoint, and the throttle
//! window for slider updates.

use crate::aggregate::AggregateOp;

/// How numeric values are rendered on the y-axis and in the hover readout.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ValueFormat {
    /// Trimmed plain numbers (`42`, `1.5`).
    Plain,
    /// Euro suffix with two decimals (`12.34€`).
    Eur,
    /// Dollar prefix with two decimals (`$12.34`).
    Usd,
}

/// Chart-wide configuration, fixed at construction time.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ChartConfig {
    /// Per-bucket combination rule.
    pub aggregate: AggregateOp,
    /// Base RGB color the category palette is interpolated from.
    pub base_color: [u8; 3],
    /// Value label rendering.
    pub value_format: ValueFormat,
    /// Container widths below this use the mobile layout.
    pub mobile_breakpoint: f64,
    /// Throttle window for slider-drag updates, in milliseconds. Also used
    /// as the animated-render transition duration.
    pub update_delay_ms: u64,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            aggregate: AggregateOp::Mean,
            base_color: [0x2d, 0x46, 0x92],
            value_format: ValueFormat::Plain,
            mobile_breakpoint: 800.0,
            update_delay_ms: 100,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_primary_variant() {
        let config = ChartConfig::default();
        assert_eq!(config.aggregate, AggregateOp::Mean);
        assert_eq!(config.base_color, [0x2d, 0x46, 0x92]);
        assert_eq!(config.value_format, ValueFormat::Plain);
        assert_eq!(config.mobile_breakpoint, 800.0);
        assert_eq!(config.update_delay_ms, 100);
    }
}
