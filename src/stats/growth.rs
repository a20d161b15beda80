//! Growth Estimator Module
//! Compound growth rate across a series and a one-period projection.

use serde::Serialize;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum EstimateError {
    #[error("at least two data points are required, got {0}")]
    InsufficientData(usize),
    #[error("the first value is zero")]
    DivisionByZero,
    #[error("{0}")]
    InvalidValue(String),
}

/// Compound growth rate and the value projected one period past the last.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GrowthEstimate {
    pub rate: f64,
    pub projected_value: f64,
}

impl GrowthEstimate {
    /// Period the projection belongs to, `None` if it overflows `i64`.
    pub fn projected_period(last_period: i64) -> Option<i64> {
        last_period.checked_add(1)
    }

    /// Rate as a percentage, e.g. `0.05` -> `5.0`.
    pub fn rate_percent(&self) -> f64 {
        self.rate * 100.0
    }
}

/// Derives growth estimates from value sequences.
pub struct GrowthEstimator;

impl GrowthEstimator {
    /// Compute `rate = (last / first)^(1/n) - 1` with `n = len - 1`, and
    /// `projected_value = last * (1 + rate)`.
    ///
    /// A negative ratio only has a real root for odd `n`; even `n` is rejected.
    pub fn estimate(values: &[f64]) -> Result<GrowthEstimate, EstimateError> {
        let (Some(&first), Some(&last)) = (values.first(), values.last()) else {
            return Err(EstimateError::InsufficientData(values.len()));
        };
        if values.len() < 2 {
            return Err(EstimateError::InsufficientData(values.len()));
        }
        if !first.is_finite() || !last.is_finite() {
            return Err(EstimateError::InvalidValue(format!(
                "values must be finite (first = {first}, last = {last})"
            )));
        }
        if first == 0.0 {
            return Err(EstimateError::DivisionByZero);
        }

        let n = values.len() - 1;
        let ratio = last / first;
        let exponent = 1.0 / n as f64;

        let growth_factor = if ratio >= 0.0 {
            ratio.powf(exponent)
        } else if n % 2 == 1 {
            -(-ratio).powf(exponent)
        } else {
            return Err(EstimateError::InvalidValue(format!(
                "no real {n}-th root of negative ratio {ratio}"
            )));
        };

        let rate = growth_factor - 1.0;
        let projected_value = last * (1.0 + rate);

        if !rate.is_finite() || !projected_value.is_finite() {
            return Err(EstimateError::InvalidValue(format!(
                "growth rate is not a finite number (ratio = {ratio})"
            )));
        }

        Ok(GrowthEstimate {
            rate,
            projected_value,
        })
    }
}
