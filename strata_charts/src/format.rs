// Copyright 2026 the Strata Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Value and date label formatting.

use chrono::NaiveDate;
use strata_data::ValueFormat;

/// Date format used by the hover date flag.
pub const HOVER_DATE_FORMAT: &str = "%Y-%m-%d";

/// Date format used by range-slider tick labels.
pub const SLIDER_TICK_FORMAT: &str = "%d.%m.%Y";

/// Formats a date with a `strftime`-style format string.
pub fn format_date(date: NaiveDate, fmt: &str) -> String {
    date.format(fmt).to_string()
}

/// Formats a standalone value (hover totals and entries).
///
/// Currency formats use two fixed decimals; plain values trim trailing
/// zeros from two decimals.
pub fn format_value(v: f64, format: ValueFormat) -> String {
    match format {
        ValueFormat::Plain => trim_decimals(v, 2),
        ValueFormat::Eur => format!("{v:.2}€"),
        ValueFormat::Usd => format!("${v:.2}"),
    }
}

/// Formats an axis tick value given the tick step.
///
/// Plain ticks pick their decimal places from the step magnitude so a tick
/// run formats consistently; currency ticks keep the fixed two decimals.
pub fn format_tick(v: f64, step: f64, format: ValueFormat) -> String {
    if !v.is_finite() {
        return String::new();
    }
    match format {
        ValueFormat::Plain => {
            let decimals = step_decimals(step);
            format!("{v:.decimals$}")
        }
        ValueFormat::Eur => format!("{v:.2}€"),
        ValueFormat::Usd => format!("${v:.2}"),
    }
}

fn step_decimals(step: f64) -> usize {
    let step = step.abs();
    if step == 0.0 || step >= 1.0 {
        0
    } else if step >= 0.1 {
        1
    } else if step >= 0.01 {
        2
    } else {
        3
    }
}

fn trim_decimals(v: f64, max_decimals: usize) -> String {
    let mut out = format!("{v:.max_decimals$}");
    if out.contains('.') {
        while out.ends_with('0') {
            out.pop();
        }
        if out.ends_with('.') {
            out.pop();
        }
    }
    out
}
