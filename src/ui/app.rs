//! The controller: owns the session and dispatches commands.
//!
//! eframe drives the event loop; each frame polls the keyboard, checks
//! whether the window now fits a different number of tiles, and hands
//! the grid to the maze panel for drawing. Generation is synchronous,
//! so a command is fully applied before the frame is painted.

use eframe::egui;
use log::{error, info};

use crate::config::MazeConfig;
use crate::maze::GridError;
use crate::session::Session;
use crate::ui::input::{self, Command};
use crate::ui::maze_panel::MazePanel;

pub struct MazedApp {
    session: Session,
    panel: MazePanel,
    config: MazeConfig,
}

impl MazedApp {
    pub fn new(config: MazeConfig) -> Result<Self, GridError> {
        let session = Session::new(config.rows, config.cols)?;
        let panel = MazePanel::new(&config);
        Ok(Self {
            session,
            panel,
            config,
        })
    }

    fn apply(&mut self, command: Command, frame: &mut eframe::Frame) {
        let result = match command {
            Command::Quit => {
                info!("quit requested");
                frame.close();
                Ok(())
            }
            Command::Regenerate => self.session.regenerate(),
            Command::Resize { rows, cols } => self.session.resize(rows, cols),
        };

        // Grid errors here mean a controller defect, not a user mistake.
        if let Err(err) = result {
            error!("maze generation failed: {}", err);
        }
    }
}

impl eframe::App for MazedApp {
    fn update(&mut self, ctx: &egui::Context, frame: &mut eframe::Frame) {
        if let Some(command) = input::poll(ctx) {
            self.apply(command, frame);
        }

        let avail = ctx.available_rect();
        let (rows, cols) = self.config.tile_capacity(avail.width(), avail.height());
        let grid = self.session.grid();
        if (rows, cols) != (grid.rows(), grid.cols()) {
            self.apply(Command::Resize { rows, cols }, frame);
        }

        self.panel.show(ctx, self.session.grid());
    }
}
