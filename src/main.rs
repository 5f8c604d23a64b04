//! # mazed entry point
//!
//! mazed carves a perfect maze over a tile grid and draws it in a
//! window. G (or R) regenerates the maze, Escape (or Q) quits, and
//! resizing the window rebuilds the grid to fit. This file wires up
//! logging and configuration and starts the eframe event loop.

use std::error::Error;
use std::path::Path;

use log::info;

use mazed::config::MazeConfig;
use mazed::ui::MazedApp;

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();
    info!("mazed starting...");

    let config = MazeConfig::load_or_default(Path::new("mazed.json"));

    let initial_size = eframe::egui::vec2(
        (config.rows as u32 * config.cell_width) as f32,
        (config.cols as u32 * config.cell_height) as f32,
    );
    let min_size = eframe::egui::vec2(config.cell_width as f32, config.cell_height as f32);

    let native_options = eframe::NativeOptions {
        initial_window_size: Some(initial_size),
        min_window_size: Some(min_size),
        ..Default::default()
    };

    let app = MazedApp::new(config)?;
    eframe::run_native("mazed", native_options, Box::new(move |_cc| Box::new(app)));

    info!("mazed exiting.");
    Ok(())
}
