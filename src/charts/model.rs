//! Chart Model Module
//! Backend-independent description of the growth chart and its hover readout.

use crate::data::Series;

pub const CHART_TITLE: &str = "Value Over Year:";
pub const HOVER_TITLE: &str = "Value Over Years";
pub const X_AXIS_LABEL: &str = "Year";
pub const Y_AXIS_LABEL: &str = "Value";
pub const ACTUAL_LABEL: &str = "Actual Data";
pub const PROJECTION_LABEL: &str = "Projected Value for next review";

/// Which trace a legend entry describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TraceKind {
    Actual,
    Projection,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LegendEntry {
    pub kind: TraceKind,
    pub label: String,
}

/// Everything needed to draw one chart.
///
/// Rebuilt from scratch for every loaded file. `generation` identifies the
/// artifact so view state tied to a previous one can be dropped.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartArtifact {
    generation: u64,
    historical: Vec<(i64, f64)>,
    projected: (i64, f64),
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub show_grid: bool,
    pub legend: Vec<LegendEntry>,
}

impl ChartArtifact {
    pub fn render(series: &Series, projected_period: i64, projected_value: f64) -> Self {
        Self {
            generation: 0,
            historical: series.points().collect(),
            projected: (projected_period, projected_value),
            title: CHART_TITLE.to_string(),
            x_label: X_AXIS_LABEL.to_string(),
            y_label: Y_AXIS_LABEL.to_string(),
            show_grid: true,
            legend: vec![
                LegendEntry {
                    kind: TraceKind::Actual,
                    label: ACTUAL_LABEL.to_string(),
                },
                LegendEntry {
                    kind: TraceKind::Projection,
                    label: PROJECTION_LABEL.to_string(),
                },
            ],
        }
    }

    pub fn with_generation(mut self, generation: u64) -> Self {
        self.generation = generation;
        self
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn historical_points(&self) -> &[(i64, f64)] {
        &self.historical
    }

    pub fn projected_point(&self) -> (i64, f64) {
        self.projected
    }

    pub fn legend_label(&self, kind: TraceKind) -> &str {
        self.legend
            .iter()
            .find(|entry| entry.kind == kind)
            .map(|entry| entry.label.as_str())
            .unwrap_or_default()
    }

    /// Historical points as plot coordinates.
    pub fn historical_xy(&self) -> Vec<[f64; 2]> {
        self.historical
            .iter()
            .map(|&(period, value)| [period as f64, value])
            .collect()
    }

    /// `(min, max)` over x and y of all plotted points, projection included.
    pub fn bounds(&self) -> ([f64; 2], [f64; 2]) {
        let points = self
            .historical
            .iter()
            .chain(std::iter::once(&self.projected))
            .map(|&(period, value)| (period as f64, value));

        let mut x = [f64::INFINITY, f64::NEG_INFINITY];
        let mut y = [f64::INFINITY, f64::NEG_INFINITY];
        for (px, py) in points {
            x = [x[0].min(px), x[1].max(px)];
            y = [y[0].min(py), y[1].max(py)];
        }
        (x, y)
    }

    /// Title to display, replaced by the hover readout while one is active.
    pub fn display_title(&self, hover: Option<&HoverReadout>) -> String {
        match hover {
            Some(readout) => readout.title(),
            None => self.title.clone(),
        }
    }
}

/// Cursor position translated to chart terms.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HoverReadout {
    pub year: i64,
    pub value: f64,
}

impl HoverReadout {
    /// Readout for a pointer in data coordinates.
    ///
    /// `None` when either coordinate cannot be resolved. The year is the x
    /// coordinate truncated toward zero.
    pub fn from_pointer(x: f64, y: f64) -> Option<Self> {
        if !x.is_finite() || !y.is_finite() {
            return None;
        }
        Some(Self {
            year: x.trunc() as i64,
            value: y,
        })
    }

    pub fn title(&self) -> String {
        format!(
            "{}\nYear: {}, Value: {:.2}",
            HOVER_TITLE, self.year, self.value
        )
    }
}
