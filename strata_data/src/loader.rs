// Copyright 2026 the Strata Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! CSV observation loading.
//!
//! The expected resource is a header row plus `Date` (`%Y-%m-%d`), `Close`
//! (decimal), and `Console` (category label) columns. Any malformed row
//! aborts the load with a row-indexed error; values never reach the
//! pipeline as `NaN`.

use std::io::Read;
use std::path::Path;

use chrono::NaiveDate;
use log::info;
use serde::Deserialize;
use thiserror::Error;

use crate::dataset::{Dataset, Observation};

/// Column holding the observation date.
const DATE_COLUMN: &str = "Date";
/// Column holding the numeric value.
const VALUE_COLUMN: &str = "Close";
/// Column holding the category label.
const CATEGORY_COLUMN: &str = "Console";

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Errors surfaced by observation loading.
///
/// All of these are fatal to chart initialization; an *empty* (header-only)
/// resource is not an error here and yields an empty [`Dataset`] instead.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The resource could not be read or is not structurally valid CSV.
    #[error("failed to read observation data")]
    Read(#[from] csv::Error),
    /// A required column is missing from the header row.
    #[error("missing required column `{0}`")]
    MissingColumn(&'static str),
    /// A date field did not match the expected format.
    #[error("row {row}: invalid date `{value}` (expected {DATE_FORMAT})")]
    InvalidDate {
        /// 1-based data row index.
        row: usize,
        /// The offending field text.
        value: String,
    },
    /// A numeric field did not parse, or parsed to a non-finite value.
    #[error("row {row}: invalid value `{value}`")]
    InvalidValue {
        /// 1-based data row index.
        row: usize,
        /// The offending field text.
        value: String,
    },
}

#[derive(Debug, Deserialize)]
struct RawRecord {
    #[serde(rename = "Date")]
    date: String,
    #[serde(rename = "Close")]
    close: String,
    #[serde(rename = "Console")]
    console: String,
}

/// Loads observations from a CSV file on disk.
pub fn load_csv_path(path: impl AsRef<Path>) -> Result<Dataset, LoadError> {
    let reader = csv::Reader::from_path(path)?;
    load_csv(reader)
}

/// Loads observations from any CSV byte stream.
pub fn load_csv_reader(input: impl Read) -> Result<Dataset, LoadError> {
    load_csv(csv::Reader::from_reader(input))
}

fn load_csv<R: Read>(mut reader: csv::Reader<R>) -> Result<Dataset, LoadError> {
    let headers = reader.headers()?.clone();
    for required in [DATE_COLUMN, VALUE_COLUMN, CATEGORY_COLUMN] {
        if !headers.iter().any(|h| h == required) {
            return Err(LoadError::MissingColumn(required));
        }
    }

    let mut observations = Vec::new();
    for (ix, record) in reader.deserialize::<RawRecord>().enumerate() {
        let row = ix + 1;
        let record = record?;

        let date = NaiveDate::parse_from_str(record.date.trim(), DATE_FORMAT).map_err(|_| {
            LoadError::InvalidDate {
                row,
                value: record.date.clone(),
            }
        })?;
        let value: f64 = record.close.trim().parse().map_err(|_| LoadError::InvalidValue {
            row,
            value: record.close.clone(),
        })?;
        if !value.is_finite() {
            return Err(LoadError::InvalidValue {
                row,
                value: record.close,
            });
        }

        observations.push(Observation {
            date,
            category: record.console,
            value,
        });
    }

    let dataset = Dataset::new(observations);
    match dataset.bounds() {
        Some(bounds) => info!(
            "loaded {} observations across {} categories ({} to {})",
            dataset.observations().len(),
            dataset.categories().len(),
            bounds.start,
            bounds.end,
        ),
        None => info!("loaded an empty observation set"),
    }
    Ok(dataset)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn load(input: &str) -> Result<Dataset, LoadError> {
        load_csv_reader(input.as_bytes())
    }

    #[test]
    fn loads_rows_and_metadata() {
        let ds = load(
            "Date,Close,Console\n\
             2020-01-02,12.5,Switch\n\
             2020-01-03,13.0,Wii\n\
             2020-01-04,14.25,Switch\n",
        )
        .unwrap();
        assert_eq!(ds.observations().len(), 3);
        assert_eq!(ds.categories(), ["Switch", "Wii"]);
        let bounds = ds.bounds().unwrap();
        assert_eq!(bounds.start, NaiveDate::from_ymd_opt(2020, 1, 2).unwrap());
        assert_eq!(bounds.end, NaiveDate::from_ymd_opt(2020, 1, 4).unwrap());
    }

    #[test]
    fn extra_columns_are_tolerated() {
        let ds = load(
            "Date,Open,Close,Console\n\
             2020-01-02,11.0,12.5,Switch\n",
        )
        .unwrap();
        assert_eq!(ds.observations()[0].value, 12.5);
    }

    #[test]
    fn header_only_input_is_an_empty_dataset_not_an_error() {
        let ds = load("Date,Close,Console\n").unwrap();
        assert!(ds.is_empty());
    }

    #[test]
    fn missing_column_is_reported_by_name() {
        let err = load("Date,Close\n2020-01-02,12.5\n").unwrap_err();
        assert!(matches!(err, LoadError::MissingColumn("Console")));
    }

    #[test]
    fn invalid_date_reports_the_row() {
        let err = load(
            "Date,Close,Console\n\
             2020-01-02,12.5,Switch\n\
             02/01/2020,13.0,Wii\n",
        )
        .unwrap_err();
        match err {
            LoadError::InvalidDate { row, value } => {
                assert_eq!(row, 2);
                assert_eq!(value, "02/01/2020");
            }
            other => panic!("expected InvalidDate, got {other:?}"),
        }
    }

    #[test]
    fn invalid_number_reports_the_row() {
        let err = load(
            "Date,Close,Console\n\
             2020-01-02,n/a,Switch\n",
        )
        .unwrap_err();
        match err {
            LoadError::InvalidValue { row, value } => {
                assert_eq!(row, 1);
                assert_eq!(value, "n/a");
            }
            other => panic!("expected InvalidValue, got {other:?}"),
        }
    }

    #[test]
    fn non_finite_values_are_rejected() {
        let err = load(
            "Date,Close,Console\n\
             2020-01-02,NaN,Switch\n",
        )
        .unwrap_err();
        assert!(matches!(err, LoadError::InvalidValue { row: 1, .. }));
    }
}
