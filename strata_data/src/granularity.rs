// Copyright 2026 the Strata Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Bucket granularity policy and calendar flooring.

use chrono::{Datelike, Days, NaiveDate};

/// The bucket width used when aggregating a visible range.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Granularity {
    /// One bucket per day.
    Daily,
    /// One bucket per week (weeks start on Sunday).
    Weekly,
    /// One bucket per calendar month.
    Monthly,
    /// One bucket per calendar year.
    Yearly,
}

impl Granularity {
    /// Picks a granularity from a span in days.
    ///
    /// Boundaries are strict greater-than: a span of exactly 1825 days is
    /// monthly, exactly 31 days is daily.
    pub fn from_span_days(days: f64) -> Self {
        if days > 1825.0 {
            Self::Yearly
        } else if days > 365.0 {
            Self::Monthly
        } else if days > 31.0 {
            Self::Weekly
        } else {
            Self::Daily
        }
    }

    /// Floors a date to the start of its bucket.
    pub fn floor(&self, date: NaiveDate) -> NaiveDate {
        match self {
            Self::Daily => date,
            Self::Weekly => {
                let back = u64::from(date.weekday().num_days_from_sunday());
                // Dates near NaiveDate::MIN cannot underflow in practice;
                // fall back to the date itself if they somehow do.
                date.checked_sub_days(Days::new(back)).unwrap_or(date)
            }
            Self::Monthly => date.with_day(1).unwrap_or(date),
            Self::Yearly => NaiveDate::from_ymd_opt(date.year(), 1, 1).unwrap_or(date),
        }
    }

    /// Returns the axis tick label format for this granularity.
    ///
    /// Yearly shows the year only, monthly a month + year, and finer
    /// granularities a full day + month + year.
    pub fn tick_format(&self) -> &'static str {
        match self {
            Self::Yearly => "%Y",
            Self::Monthly => "%b. %Y",
            Self::Weekly | Self::Daily => "%d. %b. %Y",
        }
    }
}
