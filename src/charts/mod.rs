//! Charts module - Chart model, interactive plotting and static export

mod model;
mod plotter;
mod renderer;

pub use model::{ChartArtifact, HoverReadout, LegendEntry, TraceKind, CHART_TITLE, HOVER_TITLE};
pub use plotter::ChartPlotter;
pub use renderer::StaticChartRenderer;
