//! Descriptive statistics shown under the chart.

use crate::data::Series;
use serde::Serialize;
use statrs::statistics::Statistics;

/// Change from the previous observation, in percent.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PeriodChange {
    pub period: i64,
    /// `None` when the previous value is zero.
    pub percent: Option<f64>,
}

/// Summary of the loaded values.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SeriesSummary {
    pub count: usize,
    pub first_period: i64,
    pub last_period: i64,
    pub min: f64,
    pub max: f64,
    pub mean: f64,
    pub median: f64,
    /// Sample standard deviation; NaN for a single observation.
    pub std_dev: f64,
    pub changes: Vec<PeriodChange>,
}

impl SeriesSummary {
    pub fn from_series(series: &Series) -> Option<Self> {
        let values = series.values();
        let first_period = *series.periods().first()?;
        let last_period = series.last_period()?;

        let changes = series
            .points()
            .skip(1)
            .zip(values.iter().copied())
            .map(|((period, value), previous)| PeriodChange {
                period,
                percent: (previous != 0.0).then(|| (value / previous - 1.0) * 100.0),
            })
            .collect();

        Some(Self {
            count: values.len(),
            first_period,
            last_period,
            min: Statistics::min(values),
            max: Statistics::max(values),
            mean: Statistics::mean(values),
            median: Self::median(values),
            std_dev: Statistics::std_dev(values),
            changes,
        })
    }

    fn median(values: &[f64]) -> f64 {
        let mut sorted = values.to_vec();
        sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));

        let n = sorted.len();
        if n == 0 {
            f64::NAN
        } else if n % 2 == 0 {
            (sorted[n / 2 - 1] + sorted[n / 2]) / 2.0
        } else {
            sorted[n / 2]
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn series(periods: &[i64], values: &[f64]) -> Series {
        Series::new(periods.to_vec(), values.to_vec()).unwrap()
    }

    #[test]
    fn empty_series_has_no_summary() {
        assert!(SeriesSummary::from_series(&Series::default()).is_none());
    }

    #[test]
    fn descriptive_values() {
        let summary =
            SeriesSummary::from_series(&series(&[2020, 2021, 2022, 2023], &[10.0, 20.0, 40.0, 30.0]))
                .unwrap();

        assert_eq!(summary.count, 4);
        assert_eq!(summary.first_period, 2020);
        assert_eq!(summary.last_period, 2023);
        assert_eq!(summary.min, 10.0);
        assert_eq!(summary.max, 40.0);
        assert!((summary.mean - 25.0).abs() < 1e-12);
        assert!((summary.median - 25.0).abs() < 1e-12);
        // sample variance of [10, 20, 40, 30] is 500/3
        assert!((summary.std_dev - (500.0f64 / 3.0).sqrt()).abs() < 1e-9);
    }

    #[test]
    fn period_changes() {
        let summary =
            SeriesSummary::from_series(&series(&[2020, 2021, 2022], &[0.0, 50.0, 25.0])).unwrap();

        assert_eq!(
            summary.changes,
            vec![
                PeriodChange {
                    period: 2021,
                    percent: None
                },
                PeriodChange {
                    period: 2022,
                    percent: Some(-50.0)
                },
            ]
        );
    }
}
