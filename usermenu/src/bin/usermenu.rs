#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")] // hide console window on Windows in release

use egui::ViewportBuilder;
use std::io::stdout;
use tracing::Level;
use tracing_subscriber::fmt::writer::MakeWriterExt;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Registry};
use usermenu::app::{UserMenu, UserMenuOptions};
use usermenu::consts::PKG_NAME;

fn init_log() {
    // menu transitions are logged at debug
    let level = if cfg!(debug_assertions) {
        Level::DEBUG
    } else {
        Level::INFO
    };
    let env_filter = EnvFilter::new(format!("{PKG_NAME}={level},menu_toggle={level}"));
    let formatting_layer = tracing_subscriber::fmt::layer()
        .with_target(true)
        .with_level(true)
        .with_ansi(true)
        .with_line_number(true)
        .with_writer(stdout.with_max_level(level));

    Registry::default()
        .with(env_filter)
        .with(formatting_layer)
        .init();
}

pub fn main() -> eframe::Result<()> {
    init_log();

    let options = eframe::NativeOptions {
        centered: true,
        viewport: ViewportBuilder::default()
            .with_title("Script Server")
            .with_inner_size((960.0, 600.0))
            .with_min_inner_size((800.0, 500.0)),
        ..Default::default()
    };
    UserMenu::start(options, UserMenuOptions::default())
}
