//! Growth Lens Main Application
//! Main window with the control bar and chart viewer.

use crate::analysis::AppState;
use crate::charts::StaticChartRenderer;
use crate::config::ViewerConfig;
use crate::gui::{ChartViewer, ControlPanel, ControlPanelAction, StatusKind};
use crate::report::AnalysisReport;
use egui::TopBottomPanel;
use rfd::{MessageButtons, MessageDialog, MessageLevel};
use std::path::PathBuf;
use tracing::{debug, warn};

/// Main application window.
pub struct GrowthApp {
    config: ViewerConfig,
    state: AppState,
    control_panel: ControlPanel,
    chart_viewer: ChartViewer,
}

impl GrowthApp {
    pub fn new(_cc: &eframe::CreationContext<'_>, config: ViewerConfig) -> Self {
        Self {
            config,
            state: AppState::new(),
            control_panel: ControlPanel::new(),
            chart_viewer: ChartViewer::new(),
        }
    }

    /// Blocking error notification.
    fn notify_error(&mut self, message: &str) {
        self.control_panel
            .set_status(StatusKind::Error, &format!("Error: {}", message));
        MessageDialog::new()
            .set_level(MessageLevel::Error)
            .set_title("Error")
            .set_description(message)
            .set_buttons(MessageButtons::Ok)
            .show();
    }

    /// Handle CSV file selection
    fn handle_browse_csv(&mut self) {
        let Some(path) = rfd::FileDialog::new()
            .add_filter(
                &self.config.file_filter_name,
                self.config.file_extensions.as_slice(),
            )
            .pick_file()
        else {
            debug!("File selection cancelled");
            return;
        };

        if !self.config.accepts(&path) {
            let message = format!("Unsupported file type: {}", path.display());
            self.notify_error(&message);
            return;
        }

        self.load_file(path);
    }

    fn load_file(&mut self, path: PathBuf) {
        let outcome = self
            .state
            .load(&path)
            .map(|analysis| (analysis.rate_label(), analysis.series.len()));

        match outcome {
            Ok((label, records)) => self.control_panel.set_loaded(&path, label, records),
            Err(err) => {
                let message = err.user_message();
                self.notify_error(&message);
            }
        }
    }

    /// Render the current chart to PNG and open it.
    fn handle_export_png(&mut self) {
        let Some(analysis) = self.state.current() else {
            self.control_panel
                .set_status(StatusKind::Info, "No chart to export");
            return;
        };

        let Some(output_path) = rfd::FileDialog::new()
            .add_filter("PNG image", &["png"])
            .set_file_name(&self.config.export_png_name)
            .save_file()
        else {
            return;
        };

        let (width, height) = self.config.export_size;
        let result = StaticChartRenderer::render_png(&analysis.chart, &output_path, width, height);
        match result {
            Ok(()) => {
                self.control_panel.set_status(
                    StatusKind::Success,
                    &format!("Chart exported: {}", output_path.display()),
                );
                if let Err(err) = open::that(&output_path) {
                    warn!(path = %output_path.display(), error = %err, "Cannot open exported chart");
                }
            }
            Err(err) => self.notify_error(&format!("Chart export failed: {err:#}")),
        }
    }

    fn handle_export_report(&mut self) {
        let Some(analysis) = self.state.current() else {
            self.control_panel
                .set_status(StatusKind::Info, "No analysis to export");
            return;
        };

        let Some(output_path) = rfd::FileDialog::new()
            .add_filter("JSON", &["json"])
            .set_file_name(&self.config.export_report_name)
            .save_file()
        else {
            return;
        };

        let result = AnalysisReport::from_analysis(analysis).write_json(&output_path);
        match result {
            Ok(path) => self.control_panel.set_status(
                StatusKind::Success,
                &format!("Report exported: {}", path.display()),
            ),
            Err(err) => self.notify_error(&format!("Report export failed: {err:#}")),
        }
    }
}

impl eframe::App for GrowthApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        TopBottomPanel::top("control_panel").show(ctx, |ui| {
            let action = self.control_panel.show(ui);

            match action {
                ControlPanelAction::BrowseCsv => self.handle_browse_csv(),
                ControlPanelAction::ExportPng => self.handle_export_png(),
                ControlPanelAction::ExportReport => self.handle_export_report(),
                ControlPanelAction::None => {}
            }
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            self.chart_viewer.show(ui, self.state.current());
        });
    }
}
