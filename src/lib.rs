//! Growth Lens - CSV Growth Rate Analysis & Projection Chart Viewer
//!
//! Loads a `year,value` CSV file, computes the compound annual growth rate and
//! a one-period projection, and shows both on an interactive chart.

pub mod analysis;
pub mod charts;
pub mod config;
pub mod data;
pub mod gui;
pub mod report;
pub mod stats;

pub use analysis::{Analysis, AnalysisError, AppState};
pub use config::ViewerConfig;
