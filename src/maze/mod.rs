// src/maze/mod.rs

pub mod cell;
pub mod generator;
pub mod grid;

pub use cell::{Cell, Walls};
pub use generator::carve;
pub use grid::{Grid, GridError, Position};
