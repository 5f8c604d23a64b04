// src/session.rs

//! Owned application state: the current grid plus the random source.
//!
//! Exactly one session exists per window. The generator borrows the
//! grid mutably for the duration of one carve, the renderer borrows it
//! read-only for one draw; nothing else touches it.

use log::info;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::maze::{carve, Grid, GridError};

pub struct Session {
    grid: Grid,
    rng: StdRng,
}

impl Session {
    /// Creates a session with an OS-seeded rng and a freshly carved maze.
    pub fn new(rows: usize, cols: usize) -> Result<Self, GridError> {
        Self::from_rng(rows, cols, StdRng::from_os_rng())
    }

    /// Creates a session with a fixed seed, making every maze this
    /// session ever carves reproducible.
    pub fn with_seed(rows: usize, cols: usize, seed: u64) -> Result<Self, GridError> {
        Self::from_rng(rows, cols, StdRng::seed_from_u64(seed))
    }

    fn from_rng(rows: usize, cols: usize, mut rng: StdRng) -> Result<Self, GridError> {
        let mut grid = Grid::new(rows, cols)?;
        carve(&mut grid, &mut rng)?;
        Ok(Self { grid, rng })
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Re-carves the current grid in place, keeping its dimensions.
    pub fn regenerate(&mut self) -> Result<(), GridError> {
        self.grid.reset();
        carve(&mut self.grid, &mut self.rng)?;
        info!(
            "regenerated {}x{} maze",
            self.grid.rows(),
            self.grid.cols()
        );
        Ok(())
    }

    /// Replaces the grid wholesale with new dimensions and carves it.
    /// The old grid is kept untouched if the new dimensions are invalid.
    pub fn resize(&mut self, rows: usize, cols: usize) -> Result<(), GridError> {
        let mut grid = Grid::new(rows, cols)?;
        carve(&mut grid, &mut self.rng)?;
        info!(
            "resized maze from {}x{} to {}x{}",
            self.grid.rows(),
            self.grid.cols(),
            rows,
            cols
        );
        self.grid = grid;
        Ok(())
    }
}
