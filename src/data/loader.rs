//! CSV Series Loader Module
//! Reads a `year,value` CSV file into a [`Series`] using the csv crate.

use crate::data::Series;
use std::num::{ParseFloatError, ParseIntError};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info, warn};

#[derive(Error, Debug)]
pub enum LoaderError {
    #[error("File not found: {}", .0.display())]
    NotFound(PathBuf),
    #[error("Failed to read CSV: {0}")]
    Csv(#[from] csv::Error),
    #[error("Record {record}: expected a period and a value")]
    MissingField { record: usize },
    #[error("Record {record}: invalid period '{raw}': {source}")]
    InvalidPeriod {
        record: usize,
        raw: String,
        #[source]
        source: ParseIntError,
    },
    #[error("Record {record}: invalid value '{raw}': {source}")]
    InvalidValue {
        record: usize,
        raw: String,
        #[source]
        source: ParseFloatError,
    },
}

impl LoaderError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, LoaderError::NotFound(_))
    }
}

/// Loads two-column period/value files.
pub struct SeriesLoader;

impl SeriesLoader {
    /// Load a CSV file whose first record is a header.
    ///
    /// The header is skipped without looking at it. Field 0 of every other
    /// record is parsed as an integer period and field 1 as a float value;
    /// further fields are ignored. A file with only a header yields an empty
    /// series. Empty lines are not records.
    pub fn load(path: impl AsRef<Path>) -> Result<Series, LoaderError> {
        let path = path.as_ref();
        if !path.is_file() {
            warn!(path = %path.display(), "CSV file not found");
            return Err(LoaderError::NotFound(path.to_path_buf()));
        }

        // Records may be wider or narrower than the header.
        let mut reader = csv::ReaderBuilder::new()
            .delimiter(b',')
            .has_headers(true)
            .flexible(true)
            .from_path(path)?;

        let series = Self::read_records(&mut reader)?;
        info!(
            path = %path.display(),
            records = series.len(),
            "Loaded series"
        );
        Ok(series)
    }

    fn read_records<R: std::io::Read>(reader: &mut csv::Reader<R>) -> Result<Series, LoaderError> {
        let mut points = Vec::new();

        for (idx, result) in reader.records().enumerate() {
            let record = idx + 1;
            let row = result?;

            let (Some(period), Some(value)) = (row.get(0), row.get(1)) else {
                return Err(LoaderError::MissingField { record });
            };
            points.push((
                Self::parse_period(record, period.trim())?,
                Self::parse_value(record, value.trim())?,
            ));
        }

        if points.is_empty() {
            debug!("CSV contains no data records");
        }
        Ok(Series::from_points(points))
    }

    fn parse_period(record: usize, raw: &str) -> Result<i64, LoaderError> {
        raw.parse::<i64>().map_err(|source| LoaderError::InvalidPeriod {
            record,
            raw: raw.to_string(),
            source,
        })
    }

    fn parse_value(record: usize, raw: &str) -> Result<f64, LoaderError> {
        raw.parse::<f64>().map_err(|source| LoaderError::InvalidValue {
            record,
            raw: raw.to_string(),
            source,
        })
    }
}
