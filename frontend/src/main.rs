//! Call screen application entry point.

// Application modules
mod app;
mod components;
mod config;
mod events;
mod logic;
mod models;
mod pages;

use app::App;
use config::AppConfig;
use config_loader::ConfigError;
use logging::LogSettings;
use tracing::{error, info, warn};

const COMPONENT: &str = "CallScreen";

fn main() {
    let loaded = AppConfig::load();
    let config = match &loaded {
        Ok((config, _)) => config.clone(),
        Err(_) => AppConfig::default(),
    };

    init_logging(&config);

    match loaded {
        Ok((_, path)) => info!("[APP] Configuration loaded from {}", path.display()),
        Err(ConfigError::FileNotFound(detail)) => {
            info!("[APP] No configuration file, using defaults ({})", detail)
        }
        Err(e) => warn!("[APP] Ignoring configuration: {}", e),
    }
    info!(
        "[APP] log_level: {:?}, camera device: {} @ {} fps, portraits: {:?}",
        config.log_level, config.camera_device, config.camera_fps, config.portraits_dir
    );

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1280.0, 720.0])
            .with_min_inner_size([480.0, 480.0])
            .with_title(format!("Meeting {}", config.meeting_code)),
        ..Default::default()
    };

    let result = eframe::run_native(
        "CallScreen",
        native_options,
        Box::new(move |cc| {
            cc.egui_ctx.set_theme(egui::Theme::Dark);

            let mut style = (*cc.egui_ctx.style()).clone();
            style.visuals.window_fill = egui::Color32::from_rgb(0x20, 0x21, 0x24);
            style.visuals.panel_fill = egui::Color32::from_rgb(0x20, 0x21, 0x24);
            cc.egui_ctx.set_style(style);

            Ok(Box::new(App::new(config)))
        }),
    );

    if let Err(e) = result {
        error!("[APP] Window closed with error: {}", e);
    }
}

/// File logging as configured; console only if the file can't be opened.
fn init_logging(config: &AppConfig) {
    let settings = LogSettings::new(config.log_level)
        .with_component(COMPONENT)
        .with_console(config.console_log)
        .with_file(config.log_path.clone());

    if let Err(e) = logging::init(settings) {
        eprintln!(
            "Failed to open log file {}: {}, logging to console",
            config.log_path.display(),
            e
        );

        let fallback = LogSettings::new(config.log_level)
            .with_component(COMPONENT)
            .with_console(true);
        if let Err(e) = logging::init(fallback) {
            eprintln!("Failed to initialize logging: {}", e);
        }
    }
}
