// src/ui/input.rs

//! Key-to-command mapping. The controller understands exactly three
//! commands; everything else on the keyboard is ignored.

use eframe::egui::{Context, Key};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Re-carve the current grid, keeping its dimensions.
    Regenerate,
    /// Replace the grid with freshly carved new dimensions.
    Resize { rows: usize, cols: usize },
    /// Close the window and exit.
    Quit,
}

/// Polls this frame's key presses. G or R regenerates, Escape or Q
/// quits. Quit wins if both were pressed in the same frame.
pub fn poll(ctx: &Context) -> Option<Command> {
    let input = ctx.input();

    if input.key_pressed(Key::Escape) || input.key_pressed(Key::Q) {
        Some(Command::Quit)
    } else if input.key_pressed(Key::G) || input.key_pressed(Key::R) {
        Some(Command::Regenerate)
    } else {
        None
    }
}
