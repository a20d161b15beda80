//! Analysis pipeline and application state.
//!
//! A load runs Loader -> Estimator -> Summary -> Chart and produces one
//! [`Analysis`]. [`AppState`] swaps the current analysis only when every step
//! succeeded, so a failing file never leaves a half-updated label or chart.

use crate::charts::ChartArtifact;
use crate::data::{LoaderError, Series, SeriesLoader};
use crate::stats::{EstimateError, GrowthEstimate, GrowthEstimator, SeriesSummary};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{info, warn};

#[derive(Error, Debug)]
pub enum AnalysisError {
    #[error(transparent)]
    Load(#[from] LoaderError),
    #[error(transparent)]
    Estimate(#[from] EstimateError),
}

impl AnalysisError {
    /// Message shown to the user in the error dialog.
    pub fn user_message(&self) -> String {
        match self {
            AnalysisError::Load(err) if err.is_not_found() => "File not found.".to_string(),
            AnalysisError::Load(err) => {
                format!("An error occurred while reading the file: {err}")
            }
            AnalysisError::Estimate(err) => format!("Unable to compute the growth rate: {err}"),
        }
    }
}

/// Result of one successful load.
#[derive(Debug, Clone)]
pub struct Analysis {
    pub source: PathBuf,
    pub series: Series,
    pub estimate: GrowthEstimate,
    pub projected_period: i64,
    pub summary: SeriesSummary,
    pub chart: ChartArtifact,
}

impl Analysis {
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, AnalysisError> {
        let path = path.as_ref();
        let series = SeriesLoader::load(path)?;
        Self::from_series(path.to_path_buf(), series)
    }

    pub fn from_series(source: PathBuf, series: Series) -> Result<Self, AnalysisError> {
        let estimate = GrowthEstimator::estimate(series.values())?;

        // The estimator guarantees at least two points.
        let (Some(last_period), Some(summary)) =
            (series.last_period(), SeriesSummary::from_series(&series))
        else {
            return Err(EstimateError::InsufficientData(series.len()).into());
        };
        let projected_period = GrowthEstimate::projected_period(last_period).ok_or_else(|| {
            EstimateError::InvalidValue(format!("no period follows {last_period}"))
        })?;
        let chart = ChartArtifact::render(&series, projected_period, estimate.projected_value);

        Ok(Self {
            source,
            series,
            estimate,
            projected_period,
            summary,
            chart,
        })
    }

    /// Growth rate as shown in the result label.
    pub fn rate_label(&self) -> String {
        format!(
            "Average annual growth rate: {:.2} %",
            self.estimate.rate_percent()
        )
    }
}

/// State owned by the application window.
#[derive(Debug, Default)]
pub struct AppState {
    current: Option<Analysis>,
    generation: u64,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> Option<&Analysis> {
        self.current.as_ref()
    }

    /// Load `path` and make it the current analysis.
    ///
    /// On error the previous analysis is kept unchanged.
    pub fn load(&mut self, path: impl AsRef<Path>) -> Result<&Analysis, AnalysisError> {
        let path = path.as_ref();
        match Analysis::from_path(path) {
            Ok(analysis) => Ok(self.replace(analysis)),
            Err(err) => {
                warn!(path = %path.display(), error = %err, "Load rejected");
                Err(err)
            }
        }
    }

    /// Install a new analysis, giving its chart a fresh generation.
    pub fn replace(&mut self, mut analysis: Analysis) -> &Analysis {
        self.generation += 1;
        analysis.chart = analysis.chart.with_generation(self.generation);
        info!(
            source = %analysis.source.display(),
            rate = analysis.estimate.rate,
            projected_period = analysis.projected_period,
            projected_value = analysis.estimate.projected_value,
            "Analysis updated"
        );
        self.current.insert(analysis)
    }

    pub fn rate_label(&self) -> String {
        self.current
            .as_ref()
            .map(Analysis::rate_label)
            .unwrap_or_default()
    }
}
