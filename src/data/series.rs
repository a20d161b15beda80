//! Period/value series loaded from a CSV file.

use serde::Serialize;

/// Aligned historical observations: `periods[i]` belongs to `values[i]`.
///
/// Built once by the loader and never mutated afterwards. Periods are expected
/// to increase but this is not enforced.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Series {
    periods: Vec<i64>,
    values: Vec<f64>,
}

impl Series {
    /// Build a series from two aligned vectors.
    ///
    /// Returns `None` if the lengths differ.
    pub fn new(periods: Vec<i64>, values: Vec<f64>) -> Option<Self> {
        if periods.len() != values.len() {
            return None;
        }
        Some(Self { periods, values })
    }

    /// Build a series from `(period, value)` pairs; alignment holds by construction.
    pub fn from_points(points: Vec<(i64, f64)>) -> Self {
        let (periods, values) = points.into_iter().unzip();
        Self { periods, values }
    }

    pub fn periods(&self) -> &[i64] {
        &self.periods
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn last_period(&self) -> Option<i64> {
        self.periods.last().copied()
    }

    /// Iterate `(period, value)` pairs in file order.
    pub fn points(&self) -> impl Iterator<Item = (i64, f64)> + '_ {
        self.periods.iter().copied().zip(self.values.iter().copied())
    }
}
