//! Control Panel Widget
//! Top bar with the file button, growth rate readout and export actions.

use egui::{Color32, RichText};
use std::path::Path;

const ERROR_COLOR: Color32 = Color32::from_rgb(220, 53, 69);
const OK_COLOR: Color32 = Color32::from_rgb(40, 167, 69);

/// Status line severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    Info,
    Success,
    Error,
}

/// Top bar with file selection and result display.
pub struct ControlPanel {
    pub file_name: Option<String>,
    pub rate_label: String,
    pub status: String,
    pub status_kind: StatusKind,
    pub export_enabled: bool,
}

impl Default for ControlPanel {
    fn default() -> Self {
        Self {
            file_name: None,
            rate_label: String::new(),
            status: "Ready".to_string(),
            status_kind: StatusKind::Info,
            export_enabled: false,
        }
    }
}

impl ControlPanel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reflect a successful load.
    pub fn set_loaded(&mut self, path: &Path, rate_label: String, records: usize) {
        self.file_name = path
            .file_name()
            .map(|name| name.to_string_lossy().to_string());
        self.rate_label = rate_label;
        self.export_enabled = true;
        self.set_status(
            StatusKind::Success,
            &format!("Loaded {} records", records),
        );
    }

    pub fn set_status(&mut self, kind: StatusKind, status: &str) {
        self.status_kind = kind;
        self.status = status.to_string();
    }

    /// Draw the panel
    pub fn show(&mut self, ui: &mut egui::Ui) -> ControlPanelAction {
        let mut action = ControlPanelAction::None;

        ui.add_space(6.0);
        ui.vertical_centered(|ui| {
            if ui.button(RichText::new("📂 Browse CSV").size(14.0)).clicked() {
                action = ControlPanelAction::BrowseCsv;
            }

            ui.add_space(4.0);
            ui.label(RichText::new(&self.rate_label).size(15.0).strong());
        });

        ui.add_space(4.0);
        ui.horizontal(|ui| {
            let file_text = self
                .file_name
                .clone()
                .unwrap_or_else(|| "No file selected".to_string());
            ui.label(RichText::new(file_text).size(12.0).color(Color32::GRAY));

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.add_enabled_ui(self.export_enabled, |ui| {
                    if ui.button("📄 Export Report").clicked() {
                        action = ControlPanelAction::ExportReport;
                    }
                    if ui.button("🖼 Export PNG").clicked() {
                        action = ControlPanelAction::ExportPng;
                    }
                });

                let status_color = match self.status_kind {
                    StatusKind::Error => ERROR_COLOR,
                    StatusKind::Success => OK_COLOR,
                    StatusKind::Info => Color32::GRAY,
                };
                ui.label(RichText::new(&self.status).size(11.0).color(status_color));
            });
        });
        ui.add_space(4.0);

        action
    }
}

/// Actions triggered by control panel
#[derive(Debug, Clone, PartialEq)]
pub enum ControlPanelAction {
    None,
    BrowseCsv,
    ExportPng,
    ExportReport,
}
