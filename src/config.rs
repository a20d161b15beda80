//! Application defaults.

/// Window, file dialog and export settings.
#[derive(Debug, Clone)]
pub struct ViewerConfig {
    pub window_title: String,
    pub inner_size: [f32; 2],
    pub min_inner_size: [f32; 2],
    pub file_filter_name: String,
    pub file_extensions: Vec<String>,
    pub export_size: (u32, u32),
    pub export_png_name: String,
    pub export_report_name: String,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            window_title: "Salary Growth Analysis".to_string(),
            inner_size: [800.0, 600.0],
            min_inner_size: [640.0, 480.0],
            file_filter_name: "CSV files".to_string(),
            file_extensions: vec!["csv".to_string()],
            export_size: (1200, 800),
            export_png_name: "growth_chart.png".to_string(),
            export_report_name: "growth_report.json".to_string(),
        }
    }
}

impl ViewerConfig {
    /// Whether `path` has one of the accepted extensions (case-insensitive).
    pub fn accepts(&self, path: &std::path::Path) -> bool {
        path.extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| {
                self.file_extensions
                    .iter()
                    .any(|allowed| allowed.eq_ignore_ascii_case(ext))
            })
            .unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn accepts_csv_extension_only() {
        let config = ViewerConfig::default();
        assert!(config.accepts(Path::new("data/salary.csv")));
        assert!(config.accepts(Path::new("SALARY.CSV")));
        assert!(!config.accepts(Path::new("salary.txt")));
        assert!(!config.accepts(Path::new("salary")));
    }
}
