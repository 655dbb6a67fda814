// Copyright 2026 the Strata Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Bucket aggregation over a visible range.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use smallvec::SmallVec;

use crate::dataset::{DateRange, Dataset};
use crate::granularity::Granularity;

/// How values of the same (bucket, category) pair are combined.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AggregateOp {
    /// Sum values (skips non-finite).
    Sum,
    /// Mean value (skips non-finite).
    Mean,
}

/// One aggregated bucket: a date plus a value per category-set member.
///
/// `values` is aligned to the dataset's category order and zero-filled, so
/// every row carries exactly one entry per category regardless of which
/// categories were present in the bucket.
#[derive(Clone, Debug, PartialEq)]
pub struct AggregatedRow {
    /// Bucket start date.
    pub bucket: NaiveDate,
    /// Combined value per category, aligned to the dataset category order.
    pub values: SmallVec<[f64; 8]>,
}

impl AggregatedRow {
    /// Sums the values of the given category indices.
    pub fn total(&self, categories: &[usize]) -> f64 {
        categories
            .iter()
            .filter_map(|&ix| self.values.get(ix))
            .sum()
    }
}

/// Buckets in-range observations and combines them per category.
///
/// Output rows are sorted ascending by bucket date and cover only buckets
/// with at least one in-range observation; no rows are synthesized for
/// empty buckets. Range endpoints are inclusive.
pub fn aggregate(
    dataset: &Dataset,
    range: DateRange,
    granularity: Granularity,
    op: AggregateOp,
) -> Vec<AggregatedRow> {
    let n = dataset.categories().len();
    let mut buckets: BTreeMap<NaiveDate, (SmallVec<[f64; 8]>, SmallVec<[u32; 8]>)> =
        BTreeMap::new();

    for (obs, ix) in dataset.indexed() {
        if !range.contains(obs.date) {
            continue;
        }
        if !obs.value.is_finite() {
            continue;
        }
        let bucket = granularity.floor(obs.date);
        let (sums, counts) = buckets.entry(bucket).or_insert_with(|| {
            (
                SmallVec::from_elem(0.0, n),
                SmallVec::from_elem(0, n),
            )
        });
        sums[ix] += obs.value;
        counts[ix] += 1;
    }

    buckets
        .into_iter()
        .map(|(bucket, (sums, counts))| {
            let values = sums
                .into_iter()
                .zip(counts)
                .map(|(sum, count)| match op {
                    AggregateOp::Sum => sum,
                    AggregateOp::Mean => {
                        if count == 0 {
                            0.0
                        } else {
                            sum / f64::from(count)
                        }
                    }
                })
                .collect();
            AggregatedRow { bucket, values }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::Observation;

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

    fn sample() -> Dataset {
        Dataset::new(vec![
            obs(2020, 1, 1, "A", 10.0),
            obs(2020, 1, 2, "A", 20.0),
            obs(2020, 1, 1, "B", 5.0),
            obs(2020, 2, 10, "A", 7.0),
            obs(2020, 2, 11, "C", 3.0),
        ])
    }

    #[test]
    fn rows_are_zero_filled_for_every_category() {
        let ds = sample();
        let range = DateRange::new(date(2020, 1, 1), date(2020, 12, 31));
        let rows = aggregate(&ds, range, Granularity::Monthly, AggregateOp::Sum);
        assert_eq!(rows.len(), 2);
        for row in &rows {
            assert_eq!(row.values.len(), ds.categories().len());
        }
        // January: A = 30, B = 5, C absent => 0.
        assert_eq!(rows[0].bucket, date(2020, 1, 1));
        assert_eq!(rows[0].values.as_slice(), [30.0, 5.0, 0.0]);
        // February: A = 7, B => 0, C = 3.
        assert_eq!(rows[1].values.as_slice(), [7.0, 0.0, 3.0]);
    }

    #[test]
    fn mean_divides_by_per_category_count() {
        let ds = sample();
        let range = DateRange::new(date(2020, 1, 1), date(2020, 1, 31));
        let rows = aggregate(&ds, range, Granularity::Monthly, AggregateOp::Mean);
        assert_eq!(rows.len(), 1);
        // A has two January observations (10, 20); B one (5); C none.
        assert_eq!(rows[0].values.as_slice(), [15.0, 5.0, 0.0]);
    }

    #[test]
    fn out_of_range_observations_are_ignored() {
        let ds = sample();
        let range = DateRange::new(date(2020, 2, 1), date(2020, 2, 29));
        let rows = aggregate(&ds, range, Granularity::Daily, AggregateOp::Sum);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].bucket, date(2020, 2, 10));
        assert_eq!(rows[1].bucket, date(2020, 2, 11));
    }

    #[test]
    fn buckets_sort_ascending_even_for_unsorted_input() {
        let ds = Dataset::new(vec![
            obs(2020, 3, 1, "A", 1.0),
            obs(2020, 1, 1, "A", 2.0),
            obs(2020, 2, 1, "A", 3.0),
        ]);
        let range = DateRange::new(date(2020, 1, 1), date(2020, 12, 31));
        let rows = aggregate(&ds, range, Granularity::Monthly, AggregateOp::Sum);
        let buckets: Vec<NaiveDate> = rows.iter().map(|r| r.bucket).collect();
        assert_eq!(
            buckets,
            vec![date(2020, 1, 1), date(2020, 2, 1), date(2020, 3, 1)]
        );
    }

    #[test]
    fn narrow_range_uses_daily_buckets_bounded_by_window() {
        let mut observations = Vec::new();
        for i in 0..400u64 {
            let d = date(2019, 1, 1) + chrono::Days::new(i * 2);
            observations.push(Observation {
                date: d,
                category: "A".into(),
                value: 1.0,
            });
        }
        let ds = Dataset::new(observations);
        let range = DateRange::new(date(2019, 5, 1), date(2019, 5, 10));
        let granularity = Granularity::from_span_days(range.span_days());
        assert_eq!(granularity, Granularity::Daily);
        let rows = aggregate(&ds, range, granularity, AggregateOp::Sum);
        assert!(rows.len() <= 10, "expected at most 10 rows, got {}", rows.len());
    }

    #[test]
    fn total_sums_only_requested_categories() {
        let ds = sample();
        let range = DateRange::new(date(2020, 1, 1), date(2020, 1, 31));
        let rows = aggregate(&ds, range, Granularity::Monthly, AggregateOp::Sum);
        assert_eq!(rows[0].total(&[0, 1, 2]), 35.0);
        assert_eq!(rows[0].total(&[1]), 5.0);
        assert_eq!(rows[0].total(&[]), 0.0);
    }
}
