//! JSON analysis report export.

use crate::analysis::Analysis;
use crate::stats::SeriesSummary;
use anyhow::Context;
use serde::Serialize;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::info;

#[derive(Debug, Serialize)]
pub struct AnalysisReport<'a> {
    pub source: &'a Path,
    pub periods: &'a [i64],
    pub values: &'a [f64],
    pub growth_rate: f64,
    pub growth_rate_percent: f64,
    pub projected_period: i64,
    pub projected_value: f64,
    pub summary: &'a SeriesSummary,
}

impl<'a> AnalysisReport<'a> {
    pub fn from_analysis(analysis: &'a Analysis) -> Self {
        Self {
            source: &analysis.source,
            periods: analysis.series.periods(),
            values: analysis.series.values(),
            growth_rate: analysis.estimate.rate,
            growth_rate_percent: analysis.estimate.rate_percent(),
            projected_period: analysis.projected_period,
            projected_value: analysis.estimate.projected_value,
            summary: &analysis.summary,
        }
    }

    pub fn to_json(&self) -> anyhow::Result<String> {
        serde_json::to_string_pretty(self).context("failed to serialize report")
    }

    pub fn write_json(&self, path: &Path) -> anyhow::Result<PathBuf> {
        let file = File::create(path)
            .with_context(|| format!("cannot create report {}", path.display()))?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer_pretty(&mut writer, self).context("failed to serialize report")?;
        writer
            .flush()
            .with_context(|| format!("cannot write report {}", path.display()))?;

        info!(path = %path.display(), "Report exported");
        Ok(path.to_path_buf())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::Series;

    #[test]
    fn report_carries_estimate_and_series() {
        let series = Series::new(vec![2020, 2021], vec![100.0, 150.0]).unwrap();
        let analysis = Analysis::from_series(PathBuf::from("salary.csv"), series).unwrap();

        let json: serde_json::Value =
            serde_json::from_str(&AnalysisReport::from_analysis(&analysis).to_json().unwrap())
                .unwrap();

        assert_eq!(json["source"], "salary.csv");
        assert_eq!(json["periods"], serde_json::json!([2020, 2021]));
        assert_eq!(json["growth_rate"], 0.5);
        assert_eq!(json["projected_period"], 2022);
        assert_eq!(json["projected_value"], 225.0);
        assert_eq!(json["summary"]["count"], 2);
    }

    #[test]
    fn writes_report_file() {
        let dir = tempfile::tempdir().unwrap();
        let series = Series::new(vec![1, 2, 3], vec![1.0, 2.0, 4.0]).unwrap();
        let analysis = Analysis::from_series(PathBuf::from("in.csv"), series).unwrap();

        let path = dir.path().join("report.json");
        AnalysisReport::from_analysis(&analysis)
            .write_json(&path)
            .unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        assert!(text.contains("\"projected_period\": 4"));
    }
}
