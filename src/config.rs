// src/config.rs

//! Visual and layout configuration, overridable through an optional
//! JSON file next to the executable. Defaults reproduce the classic
//! look: 20x20 grid of 40px tiles, 3px gray walls on a dark background.

use std::fs;
use std::path::Path;

use log::{info, warn};
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct MazeConfig {
    /// Initial grid dimensions; the window resizing to fit fewer or more
    /// tiles replaces these at runtime.
    pub rows: usize,
    pub cols: usize,

    /// Tile size in pixels.
    pub cell_width: u32,
    pub cell_height: u32,

    /// Thickness of the drawn wall strips, in pixels.
    pub wall_thickness: u32,

    /// Colors as 0xRRGGBB.
    pub wall_color: u32,
    pub background_color: u32,

    /// Whether to draw the decorative corner dots.
    pub corner_dots: bool,
}

impl Default for MazeConfig {
    fn default() -> Self {
        Self {
            rows: 20,
            cols: 20,
            cell_width: 40,
            cell_height: 40,
            wall_thickness: 3,
            wall_color: 0x0070_7070,
            background_color: 0x0028_2828,
            corner_dots: true,
        }
    }
}

impl MazeConfig {
    /// Loads the config from `path`, falling back to defaults when the
    /// file is absent or malformed. A malformed file is worth a warning;
    /// an absent one is the normal case.
    pub fn load_or_default(path: &Path) -> Self {
        match fs::read_to_string(path) {
            Ok(text) => match serde_json::from_str(&text) {
                Ok(config) => {
                    info!("loaded config from {}", path.display());
                    config
                }
                Err(err) => {
                    warn!("ignoring invalid config {}: {}", path.display(), err);
                    Self::default()
                }
            },
            Err(_) => Self::default(),
        }
    }

    /// How many whole tiles fit into a pixel area, at least 1x1. Rows
    /// count along the x axis, matching the grid's pixel formula.
    pub fn tile_capacity(&self, width: f32, height: f32) -> (usize, usize) {
        let rows = (width / self.cell_width as f32) as usize;
        let cols = (height / self.cell_height as f32) as usize;
        (rows.max(1), cols.max(1))
    }
}
