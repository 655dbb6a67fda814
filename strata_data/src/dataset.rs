// Copyright 2026 the Strata Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Observations and derived dataset metadata.

use chrono::NaiveDate;

/// A single loaded data point.
#[derive(Clone, Debug, PartialEq)]
pub struct Observation {
    /// Calendar date of the observation.
    pub date: NaiveDate,
    /// Category label (e.g. a console name).
    pub category: String,
    /// Numeric value; always finite once loaded.
    pub value: f64,
}

/// An inclusive date window.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DateRange {
    /// First visible date.
    pub start: NaiveDate,
    /// Last visible date.
    pub end: NaiveDate,
}

impl DateRange {
    /// Creates a range, swapping the endpoints if given in reverse order.
    pub fn new(a: NaiveDate, b: NaiveDate) -> Self {
        if a <= b {
            Self { start: a, end: b }
        } else {
            Self { start: b, end: a }
        }
    }

    /// Returns the span in whole days (`0` for a single-day range).
    pub fn span_days(&self) -> f64 {
        (self.end - self.start).num_days() as f64
    }

    /// Returns `true` if `date` lies within the range (inclusive).
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }

    /// Clamps both endpoints into `bounds`.
    pub fn clamp_to(&self, bounds: Self) -> Self {
        Self {
            start: self.start.clamp(bounds.start, bounds.end),
            end: self.end.clamp(bounds.start, bounds.end),
        }
    }
}

/// Loaded observations plus metadata derived once at load time.
///
/// The category set is fixed after load, in first-seen order; that order
/// determines both stacking order and color assignment.
#[derive(Clone, Debug)]
pub struct Dataset {
    observations: Vec<Observation>,
    categories: Vec<String>,
    // Category-set index per observation, aligned to `observations`.
    category_ix: Vec<usize>,
    bounds: Option<DateRange>,
}

impl Dataset {
    /// Builds a dataset from an observation sequence.
    pub fn new(observations: Vec<Observation>) -> Self {
        let mut categories: Vec<String> = Vec::new();
        let mut category_ix = Vec::with_capacity(observations.len());
        let mut bounds: Option<DateRange> = None;

        for obs in &observations {
            let ix = match categories.iter().position(|c| c == &obs.category) {
                Some(ix) => ix,
                None => {
                    categories.push(obs.category.clone());
                    categories.len() - 1
                }
            };
            category_ix.push(ix);
            bounds = Some(match bounds {
                None => DateRange::new(obs.date, obs.date),
                Some(b) => DateRange {
                    start: b.start.min(obs.date),
                    end: b.end.max(obs.date),
                },
            });
        }

        Self {
            observations,
            categories,
            category_ix,
            bounds,
        }
    }

    /// Returns the observations in load order.
    pub fn observations(&self) -> &[Observation] {
        &self.observations
    }

    /// Returns the distinct category labels in first-seen order.
    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    /// Returns the category-set index for a label, if known.
    pub fn category_index(&self, label: &str) -> Option<usize> {
        self.categories.iter().position(|c| c == label)
    }

    /// Returns the overall min/max date bounds, or `None` if empty.
    pub fn bounds(&self) -> Option<DateRange> {
        self.bounds
    }

    /// Returns `true` if no observations were loaded.
    pub fn is_empty(&self) -> bool {
        self.observations.is_empty()
    }

    /// Iterates observations together with their category-set index.
    pub fn indexed(&self) -> impl Iterator<Item = (&Observation, usize)> {
        self.observations
            .iter()
            .zip(self.category_ix.iter().copied())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn obs(y: i32, m: u32, d: u32, category: &str, value: f64) -> Observation {
        Observation {
            date: date(y, m, d),
            category: category.into(),
            value,
        }
    }

    #[test]
    fn categories_keep_first_seen_order() {
        let ds = Dataset::new(vec![
            obs(2020, 1, 2, "Switch", 1.0),
            obs(2020, 1, 1, "Wii", 2.0),
            obs(2020, 1, 3, "Switch", 3.0),
            obs(2020, 1, 4, "DS", 4.0),
        ]);
        assert_eq!(ds.categories(), ["Switch", "Wii", "DS"]);
        assert_eq!(ds.category_index("Wii"), Some(1));
        assert_eq!(ds.category_index("GameCube"), None);
    }

    #[test]
    fn bounds_cover_min_and_max_dates() {
        let ds = Dataset::new(vec![
            obs(2020, 3, 5, "A", 1.0),
            obs(2019, 12, 31, "A", 1.0),
            obs(2020, 6, 1, "B", 1.0),
        ]);
        assert_eq!(
            ds.bounds(),
            Some(DateRange::new(date(2019, 12, 31), date(2020, 6, 1)))
        );
    }

    #[test]
    fn empty_dataset_has_no_bounds() {
        let ds = Dataset::new(Vec::new());
        assert!(ds.is_empty());
        assert_eq!(ds.bounds(), None);
    }

    #[test]
    fn range_swaps_reversed_endpoints() {
        let r = DateRange::new(date(2021, 1, 1), date(2020, 1, 1));
        assert_eq!(r.start, date(2020, 1, 1));
        assert_eq!(r.end, date(2021, 1, 1));
        assert_eq!(r.span_days(), 366.0);
    }

    #[test]
    fn clamp_keeps_range_inside_bounds() {
        let bounds = DateRange::new(date(2020, 1, 1), date(2020, 12, 31));
        let r = DateRange::new(date(2019, 6, 1), date(2020, 6, 1)).clamp_to(bounds);
        assert_eq!(r.start, date(2020, 1, 1));
        assert_eq!(r.end, date(2020, 6, 1));
    }
}
