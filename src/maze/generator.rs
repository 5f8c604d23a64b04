//! Maze carving: the iterative recursive-backtracker.
//!
//! Walks the grid depth-first with an explicit stack (the call stack
//! would overflow on large grids), opening a wall pair each time it
//! steps into an unvisited tile. Every tile is discovered at most once,
//! so the opened connections always form a spanning tree: exactly one
//! path between any two tiles, `rows * cols - 1` connections total.

use rand::Rng;

use crate::maze::grid::{Grid, GridError, Position};

/// Carves `grid` into a perfect maze in place, drawing every random
/// choice from `rng`. Seeding the rng makes the whole maze reproducible.
///
/// The walk starts at (0, 0). Each step looks at the top of the stack,
/// collects its unvisited neighbors and either opens a wall to one of
/// them chosen uniformly at random, or pops to backtrack. The stack
/// empties exactly when every tile has been visited.
///
/// Errors from `connect` are impossible as long as `neighbors_of` only
/// yields adjacent in-bounds positions; they are propagated rather than
/// swallowed so a grid-model defect aborts the run loudly.
pub fn carve<R: Rng + ?Sized>(grid: &mut Grid, rng: &mut R) -> Result<(), GridError> {
    let mut visited = vec![false; grid.len()];
    let mut stack: Vec<Position> = Vec::with_capacity(grid.len());
    stack.push(Position::new(0, 0));

    while let Some(&current) = stack.last() {
        visited[grid.index_of(current.row, current.col)] = true;

        // at most 4 candidates, no per-step allocation
        let mut candidates = [Position::new(0, 0); 4];
        let mut count = 0;
        for neighbor in grid.neighbors_of(current.row, current.col) {
            if !visited[grid.index_of(neighbor.row, neighbor.col)] {
                candidates[count] = neighbor;
                count += 1;
            }
        }

        if count == 0 {
            stack.pop();
        } else {
            let next = candidates[rng.random_range(0..count)];
            grid.connect(current, next)?;
            stack.push(next);
        }
    }

    Ok(())
}
