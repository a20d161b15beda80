//! Chart Viewer Widget
//! Central panel hosting the interactive growth chart and the summary table.

use crate::analysis::Analysis;
use crate::charts::{ChartArtifact, ChartPlotter, HoverReadout};
use crate::stats::SeriesSummary;
use egui::{Color32, RichText, ScrollArea};

const SUMMARY_HEIGHT: f32 = 170.0;
const TITLE_HEIGHT: f32 = 48.0;

/// Hosts the chart of the current analysis.
///
/// Hover state belongs to one chart generation and is dropped as soon as a
/// different chart is shown.
#[derive(Default)]
pub struct ChartViewer {
    generation: Option<u64>,
    hover: Option<HoverReadout>,
}

impl ChartViewer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Title for `chart`, taking the latest hover readout into account.
    pub fn title(&self, chart: &ChartArtifact) -> String {
        chart.display_title(self.hover.as_ref())
    }

    /// Record the pointer readout of the current frame.
    ///
    /// Positions outside the plot keep the last readout.
    pub fn track_hover(&mut self, chart: &ChartArtifact, readout: Option<HoverReadout>) {
        self.attach(chart);
        if readout.is_some() {
            self.hover = readout;
        }
    }

    fn attach(&mut self, chart: &ChartArtifact) {
        if self.generation != Some(chart.generation()) {
            self.generation = Some(chart.generation());
            self.hover = None;
        }
    }

    pub fn show(&mut self, ui: &mut egui::Ui, analysis: Option<&Analysis>) {
        let Some(analysis) = analysis else {
            ui.centered_and_justified(|ui| {
                ui.label(RichText::new("No Data").size(20.0).color(Color32::GRAY));
            });
            return;
        };

        let chart = &analysis.chart;
        self.attach(chart);

        ui.vertical_centered(|ui| {
            ui.label(RichText::new(self.title(chart)).size(16.0).strong());
        });

        let plot_height = ui.available_height() - SUMMARY_HEIGHT - TITLE_HEIGHT;
        let readout = ChartPlotter::draw(ui, chart, plot_height);
        self.track_hover(chart, readout);

        ui.add_space(8.0);
        ScrollArea::vertical()
            .id_salt("summary_scroll")
            .max_height(SUMMARY_HEIGHT)
            .show(ui, |ui| {
                Self::draw_summary_table(ui, analysis);
            });
    }

    fn draw_summary_table(ui: &mut egui::Ui, analysis: &Analysis) {
        let summary: &SeriesSummary = &analysis.summary;

        egui::Frame::none()
            .fill(ui.visuals().widgets.noninteractive.bg_fill)
            .rounding(5.0)
            .inner_margin(8.0)
            .show(ui, |ui| {
                ui.horizontal_top(|ui| {
                    egui::Grid::new("summary_stats")
                        .striped(true)
                        .min_col_width(70.0)
                        .spacing([8.0, 4.0])
                        .show(ui, |ui| {
                            let rows = [
                                ("Records", summary.count.to_string()),
                                (
                                    "Periods",
                                    format!("{} - {}", summary.first_period, summary.last_period),
                                ),
                                ("Min", format!("{:.2}", summary.min)),
                                ("Max", format!("{:.2}", summary.max)),
                                ("Mean", format!("{:.2}", summary.mean)),
                                ("Median", format!("{:.2}", summary.median)),
                                ("Std", format!("{:.2}", summary.std_dev)),
                                (
                                    "Projection",
                                    format!(
                                        "{}: {:.2}",
                                        analysis.projected_period,
                                        analysis.estimate.projected_value
                                    ),
                                ),
                            ];
                            for (name, value) in rows {
                                ui.label(RichText::new(name).strong().size(11.0));
                                ui.label(RichText::new(value).size(11.0));
                                ui.end_row();
                            }
                        });

                    ui.add_space(24.0);

                    egui::Grid::new("period_changes")
                        .striped(true)
                        .min_col_width(60.0)
                        .spacing([8.0, 4.0])
                        .show(ui, |ui| {
                            ui.label(RichText::new("Year").strong().size(11.0));
                            ui.label(RichText::new("Change").strong().size(11.0));
                            ui.end_row();

                            let default_color = ui.visuals().text_color();
                            for change in &summary.changes {
                                ui.label(RichText::new(change.period.to_string()).size(11.0));
                                match change.percent {
                                    Some(pct) => {
                                        let color = if pct < 0.0 {
                                            Color32::from_rgb(220, 53, 69)
                                        } else {
                                            default_color
                                        };
                                        ui.label(
                                            RichText::new(format!("{:+.2} %", pct))
                                                .size(11.0)
                                                .color(color),
                                        );
                                    }
                                    None => {
                                        ui.label(RichText::new("-").size(11.0));
                                    }
                                }
                                ui.end_row();
                            }
                        });
                });
            });
    }
}
