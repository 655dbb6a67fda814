// Copyright 2026 the Strata Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Coordinate scales: linear values and calendar dates.

use chrono::{Datelike, Days, Months, NaiveDate};

/// A linear mapping from a continuous domain to a continuous range.
#[derive(Clone, Copy, Debug)]
pub struct ScaleLinear {
    domain: (f64, f64),
    range: (f64, f64),
}

impl ScaleLinear {
    /// Creates a new scale mapping `domain` values to `range` values.
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        Self { domain, range }
    }

    /// Maps a value from domain space into range space.
    pub fn map(&self, x: f64) -> f64 {
        let (d0, d1) = self.domain;
        let (r0, r1) = self.range;
        let denom = d1 - d0;
        if denom == 0.0 {
            return r0;
        }
        let t = (x - d0) / denom;
        r0 + t * (r1 - r0)
    }

    /// Returns the minimum of the configured domain (as authored).
    pub fn domain_min(&self) -> f64 {
        self.domain.0
    }

    /// Returns the maximum of the configured domain (as authored).
    pub fn domain_max(&self) -> f64 {
        self.domain.1
    }

    /// Returns "nice-ish" tick values for the domain.
    pub fn ticks(&self, count: usize) -> Vec<f64> {
        nice_ticks(self.domain.0, self.domain.1, count)
    }
}

fn nice_ticks(mut min: f64, mut max: f64, count: usize) -> Vec<f64> {
    if count == 0 {
        return Vec::new();
    }
    if min == max {
        return vec![min];
    }
    if min > max {
        std::mem::swap(&mut min, &mut max);
    }
    let span = max - min;
    let step0 = span / count.max(1) as f64;
    let step = nice_step(step0);
    if step == 0.0 {
        return vec![min, max];
    }

    // Ticks cover the domain from inside: the axis clamps, so only emit
    // ticks that fall within [min, max].
    let start = (min / step).ceil() * step;
    let n_f = ((max - start) / step).floor();
    let n = if n_f.is_finite() && n_f >= 0.0 {
        let n_f = n_f.min(10_000.0);
        #[allow(
            clippy::cast_possible_truncation,
            clippy::cast_sign_loss,
            reason = "guarded by finite/non-negative checks and capped at 10k"
        )]
        {
            n_f as u64
        }
    } else {
        return vec![min, max];
    };
    (0..=n).map(|i| start + step * i as f64).collect()
}

fn nice_step(step: f64) -> f64 {
    if !step.is_finite() || step <= 0.0 {
        return 0.0;
    }
    let power = step.log10().floor();
    let base = 10_f64.powf(power);
    let error = step / base;
    let nice = if error >= 7.5 {
        10.0
    } else if error >= 3.5 {
        5.0
    } else if error >= 1.5 {
        2.0
    } else {
        1.0
    };
    nice * base
}

/// A linear mapping from a calendar-date domain to a continuous range.
#[derive(Clone, Copy, Debug)]
pub struct ScaleDate {
    domain: (NaiveDate, NaiveDate),
    range: (f64, f64),
}

impl ScaleDate {
    /// Creates a new scale mapping `domain` dates to `range` values.
    pub fn new(domain: (NaiveDate, NaiveDate), range: (f64, f64)) -> Self {
        Self { domain, range }
    }

    /// Returns the configured date domain.
    pub fn domain(&self) -> (NaiveDate, NaiveDate) {
        self.domain
    }

    /// Returns whole days from the domain start to `date` (may be negative).
    pub fn days_from_start(&self, date: NaiveDate) -> f64 {
        (date - self.domain.0).num_days() as f64
    }

    /// Maps a date into range space.
    pub fn map(&self, date: NaiveDate) -> f64 {
        let span = (self.domain.1 - self.domain.0).num_days() as f64;
        let (r0, r1) = self.range;
        if span == 0.0 {
            return r0;
        }
        let t = self.days_from_start(date) / span;
        r0 + t * (r1 - r0)
    }

    /// Inverts a range position into fractional days from the domain start.
    ///
    /// Fractional precision matters for nearest-bucket lookups: rounding to
    /// whole dates first would move exact midpoints.
    pub fn position_to_days(&self, x: f64) -> f64 {
        let span = (self.domain.1 - self.domain.0).num_days() as f64;
        let (r0, r1) = self.range;
        let denom = r1 - r0;
        if denom == 0.0 {
            return 0.0;
        }
        (x - r0) / denom * span
    }

    /// Inverts a range position into the nearest date, clamped to the domain.
    pub fn date_at(&self, x: f64) -> NaiveDate {
        let days = self.position_to_days(x).round();
        let span = (self.domain.1 - self.domain.0).num_days() as f64;
        let days = days.clamp(0.0, span.max(0.0));
        #[allow(
            clippy::cast_possible_truncation,
            clippy::cast_sign_loss,
            reason = "clamped to the non-negative domain span"
        )]
        let days = days as u64;
        self.domain
            .0
            .checked_add_days(Days::new(days))
            .unwrap_or(self.domain.1)
    }

    /// Returns calendar-aligned tick dates for the domain.
    pub fn ticks(&self, count: usize) -> Vec<NaiveDate> {
        date_ticks(self.domain.0, self.domain.1, count)
    }
}

/// Returns "nice" calendar tick dates between `min` and `max`.
///
/// The step ladder runs days → weeks → months → quarters → years, with
/// multi-year steps rounded to 1/2/5 × 10ⁿ. Ticks align to calendar
/// boundaries (weeks start Sunday, months on the 1st, years on Jan 1) and
/// only dates inside `[min, max]` are emitted.
pub fn date_ticks(mut min: NaiveDate, mut max: NaiveDate, count: usize) -> Vec<NaiveDate> {
    if count == 0 {
        return Vec::new();
    }
    if min > max {
        std::mem::swap(&mut min, &mut max);
    }
    if min == max {
        return vec![min];
    }

    let span = (max - min).num_days() as f64;
    let step0 = span / count.max(1) as f64;

    const DAY: f64 = 1.0;
    const WEEK: f64 = 7.0;
    const MONTH: f64 = 30.44;
    const QUARTER: f64 = 91.31;
    const YEAR: f64 = 365.25;

    if step0 <= DAY {
        day_ticks(min, max, 1)
    } else if step0 <= 2.0 * DAY {
        day_ticks(min, max, 2)
    } else if step0 <= WEEK {
        week_ticks(min, max, 1)
    } else if step0 <= MONTH {
        month_ticks(min, max, 1)
    } else if step0 <= QUARTER {
        month_ticks(min, max, 3)
    } else if step0 <= YEAR {
        year_ticks(min, max, 1)
    } else {
        let step = nice_step(step0 / YEAR).max(1.0);
        #[allow(
            clippy::cast_possible_truncation,
            clippy::cast_sign_loss,
            reason = "year steps are small positive integers"
        )]
        year_ticks(min, max, (step.min(10_000.0)) as i32)
    }
}

const MAX_TICKS: usize = 10_000;

fn day_ticks(min: NaiveDate, max: NaiveDate, step: u64) -> Vec<NaiveDate> {
    let mut out = Vec::new();
    let mut d = min;
    while d <= max && out.len() < MAX_TICKS {
        out.push(d);
        let Some(next) = d.checked_add_days(Days::new(step)) else {
            break;
        };
        d = next;
    }
    out
}

fn week_ticks(min: NaiveDate, max: NaiveDate, step_weeks: u64) -> Vec<NaiveDate> {
    let back = u64::from(min.weekday().num_days_from_sunday());
    let mut d = min.checked_sub_days(Days::new(back)).unwrap_or(min);
    let mut out = Vec::new();
    while d <= max && out.len() < MAX_TICKS {
        if d >= min {
            out.push(d);
        }
        let Some(next) = d.checked_add_days(Days::new(7 * step_weeks)) else {
            break;
        };
        d = next;
    }
    out
}

fn month_ticks(min: NaiveDate, max: NaiveDate, step_months: u32) -> Vec<NaiveDate> {
    let mut d = min.with_day(1).unwrap_or(min);
    let mut out = Vec::new();
    while d <= max && out.len() < MAX_TICKS {
        if d >= min {
            out.push(d);
        }
        let Some(next) = d.checked_add_months(Months::new(step_months)) else {
            break;
        };
        d = next;
    }
    out
}

fn year_ticks(min: NaiveDate, max: NaiveDate, step_years: i32) -> Vec<NaiveDate> {
    let step = step_years.max(1);
    let first = min.year().div_euclid(step) * step;
    let mut year = first;
    let mut out = Vec::new();
    while out.len() < MAX_TICKS {
        let Some(d) = NaiveDate::from_ymd_opt(year, 1, 1) else {
            break;
        };
        if d > max {
            break;
        }
        if d >= min {
            out.push(d);
        }
        year = match year.checked_add(step) {
            Some(y) => y,
            None => break,
        };
    }
    out
}
