//! Stats module - growth estimation and descriptive statistics

mod growth;
mod summary;

pub use growth::{EstimateError, GrowthEstimate, GrowthEstimator};
pub use summary::{PeriodChange, SeriesSummary};
