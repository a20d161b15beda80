//! Static Chart Renderer
//! Renders a [`ChartArtifact`] to a PNG file with plotters.
//!
//! Layout mirrors the interactive chart:
//! 1. Title centered on top
//! 2. Blue line with circle markers for the historical values
//! 3. Red marker for the projected value
//! 4. Grid, axis descriptions and a legend in the upper left corner

use crate::charts::{ChartArtifact, TraceKind};
use anyhow::{anyhow, Context};
use plotters::prelude::*;
use std::path::Path;
use tracing::info;

const ACTUAL_RGB: RGBColor = RGBColor(52, 152, 219);
const PROJECTION_RGB: RGBColor = RGBColor(231, 76, 60);
const FONT_FAMILY: &str = "sans-serif";

pub struct StaticChartRenderer;

impl StaticChartRenderer {
    /// Write `chart` as a `width` x `height` PNG at `path`.
    pub fn render_png(
        chart: &ChartArtifact,
        path: &Path,
        width: u32,
        height: u32,
    ) -> anyhow::Result<()> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("cannot create {}", parent.display()))?;
        }

        let root = BitMapBackend::new(path, (width, height)).into_drawing_area();
        root.fill(&WHITE).map_err(draw_error)?;

        let (x_range, y_range) = chart.bounds();
        let y_pad = ((y_range[1] - y_range[0]).abs() * 0.1).max(1.0);

        let mut ctx = ChartBuilder::on(&root)
            .caption(&chart.title, (FONT_FAMILY, 28))
            .margin(20)
            .x_label_area_size(50)
            .y_label_area_size(80)
            .build_cartesian_2d(
                (x_range[0] - 0.5)..(x_range[1] + 0.5),
                (y_range[0] - y_pad)..(y_range[1] + y_pad),
            )
            .map_err(draw_error)?;

        let mut mesh = ctx.configure_mesh();
        mesh.x_desc(chart.x_label.as_str())
            .y_desc(chart.y_label.as_str())
            .x_label_formatter(&|v| format!("{:.0}", v))
            .y_label_formatter(&|v| format!("{:.2}", v))
            .label_style((FONT_FAMILY, 14));
        if !chart.show_grid {
            mesh.disable_mesh();
        }
        mesh.draw().map_err(draw_error)?;

        let historical: Vec<(f64, f64)> = chart
            .historical_points()
            .iter()
            .map(|&(period, value)| (period as f64, value))
            .collect();

        ctx.draw_series(LineSeries::new(
            historical.iter().copied(),
            ACTUAL_RGB.stroke_width(2),
        ))
        .map_err(draw_error)?
        .label(chart.legend_label(TraceKind::Actual))
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], ACTUAL_RGB.stroke_width(2)));

        ctx.draw_series(
            historical
                .iter()
                .map(|&point| Circle::new(point, 4, ACTUAL_RGB.filled())),
        )
        .map_err(draw_error)?;

        let (projected_period, projected_value) = chart.projected_point();
        ctx.draw_series(std::iter::once(Circle::new(
            (projected_period as f64, projected_value),
            6,
            PROJECTION_RGB.filled(),
        )))
        .map_err(draw_error)?
        .label(chart.legend_label(TraceKind::Projection))
        .legend(|(x, y)| Circle::new((x + 10, y), 5, PROJECTION_RGB.filled()));

        ctx.configure_series_labels()
            .position(SeriesLabelPosition::UpperLeft)
            .label_font((FONT_FAMILY, 14))
            .background_style(WHITE.mix(0.85))
            .border_style(BLACK)
            .draw()
            .map_err(draw_error)?;

        root.present().map_err(draw_error)?;

        info!(path = %path.display(), width, height, "Chart exported");
        Ok(())
    }
}

fn draw_error(err: impl std::fmt::Display) -> anyhow::Error {
    anyhow!("failed to draw chart: {err}")
}
