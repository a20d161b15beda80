//! Chart Plotter Module
//! Draws the interactive growth chart using egui_plot.

use crate::charts::{ChartArtifact, HoverReadout, TraceKind};
use egui::Color32;
use egui_plot::{Corner, Legend, Line, MarkerShape, Plot, PlotPoints, Points};

pub const ACTUAL_COLOR: Color32 = Color32::from_rgb(52, 152, 219); // Blue
pub const PROJECTION_COLOR: Color32 = Color32::from_rgb(231, 76, 60); // Red

const PLOT_MIN_HEIGHT: f32 = 300.0;

/// Draws [`ChartArtifact`]s into an egui UI.
pub struct ChartPlotter;

impl ChartPlotter {
    /// Draw the chart and return the hover readout for this frame, if the
    /// pointer is over the plot.
    ///
    /// The plot id includes the artifact generation, so zoom and drag state of
    /// a previous chart never carries over to a new one.
    pub fn draw(ui: &mut egui::Ui, chart: &ChartArtifact, height: f32) -> Option<HoverReadout> {
        let (x_range, y_range) = chart.bounds();
        let historical = chart.historical_xy();
        let (projected_period, projected_value) = chart.projected_point();
        let actual_label = chart.legend_label(TraceKind::Actual).to_string();
        let projection_label = chart.legend_label(TraceKind::Projection).to_string();

        let response = Plot::new(("growth_chart", chart.generation()))
            .height(height.max(PLOT_MIN_HEIGHT))
            .legend(Legend::default().position(Corner::LeftTop))
            .x_axis_label(chart.x_label.clone())
            .y_axis_label(chart.y_label.clone())
            .show_grid(chart.show_grid)
            .allow_scroll(false)
            .include_x(x_range[0] - 0.5)
            .include_x(x_range[1] + 0.5)
            .include_y(y_range[0])
            .include_y(y_range[1])
            // Periods are integers; hide fractional tick labels.
            .x_axis_formatter(|mark, _range| {
                if mark.value.fract() == 0.0 {
                    format!("{:.0}", mark.value)
                } else {
                    String::new()
                }
            })
            .label_formatter(|name, point| {
                if name.is_empty() {
                    format!("Year: {:.0}\nValue: {:.2}", point.x, point.y)
                } else {
                    format!("{}\nYear: {:.0}\nValue: {:.2}", name, point.x, point.y)
                }
            })
            .show(ui, |plot_ui| {
                plot_ui.line(
                    Line::new(PlotPoints::from(historical.clone()))
                        .color(ACTUAL_COLOR)
                        .width(2.0)
                        .name(&actual_label),
                );
                plot_ui.points(
                    Points::new(PlotPoints::from(historical))
                        .shape(MarkerShape::Circle)
                        .radius(4.0)
                        .color(ACTUAL_COLOR)
                        .name(&actual_label),
                );
                plot_ui.points(
                    Points::new(PlotPoints::from(vec![[
                        projected_period as f64,
                        projected_value,
                    ]]))
                    .shape(MarkerShape::Circle)
                    .radius(6.0)
                    .filled(true)
                    .color(PROJECTION_COLOR)
                    .name(&projection_label),
                );

                plot_ui.pointer_coordinate()
            });

        response
            .inner
            .and_then(|point| HoverReadout::from_pointer(point.x, point.y))
    }
}
