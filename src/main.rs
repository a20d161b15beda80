//! Growth Lens - CSV Growth Rate Analysis & Projection Chart Viewer

use eframe::egui;
use growth_lens::gui::GrowthApp;
use growth_lens::ViewerConfig;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> eframe::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "growth_lens=info".into()),
        )
        .init();

    let config = ViewerConfig::default();

    // Configure native options
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size(config.inner_size)
            .with_min_inner_size(config.min_inner_size)
            .with_title(&config.window_title),
        ..Default::default()
    };

    let app_name = config.window_title.clone();
    tracing::info!("Starting {}", app_name);

    // Run the application
    eframe::run_native(
        &app_name,
        options,
        Box::new(|cc| Ok(Box::new(GrowthApp::new(cc, config)))),
    )
}
