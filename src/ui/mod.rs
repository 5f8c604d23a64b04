// src/ui/mod.rs

pub mod app;
pub mod input;
pub mod maze_panel;

pub use app::MazedApp;
pub use input::Command;
