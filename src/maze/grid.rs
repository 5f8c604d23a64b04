//! Grid model: a rows x cols container of walled tiles.
//!
//! Axis convention (shared with the renderer): the row index advances
//! along the x axis and the column index along the y axis, so a tile's
//! pixel origin is `(row * cell_width, col * cell_height)`. Crossing to
//! `(row + 1, col)` opens the right/left wall pair, crossing to
//! `(row, col + 1)` opens the bottom/top pair.
//!
//! Mutual wall consistency between adjacent tiles is enforced by
//! funnelling every mutation through [`Grid::connect`]; there is no way
//! to clear a single side of a shared wall from outside this module.

use thiserror::Error;

use crate::maze::cell::{Cell, Walls};

/// A (row, col) coordinate in the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum GridError {
    #[error("maze dimensions must be non-zero, got {rows}x{cols}")]
    InvalidDimensions { rows: usize, cols: usize },

    #[error("position ({row}, {col}) lies outside the {rows}x{cols} grid")]
    OutOfBounds {
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },

    #[error("tiles {a:?} and {b:?} are not adjacent")]
    NotAdjacent { a: Position, b: Position },
}

/// The maze grid. Dimensions are fixed at construction; resizing means
/// building a new grid and discarding this one.
#[derive(Debug)]
pub struct Grid {
    cells: Vec<Cell>,
    rows: usize,
    cols: usize,
}

impl Grid {
    /// Creates a fully walled grid. Fails if either dimension is zero.
    pub fn new(rows: usize, cols: usize) -> Result<Self, GridError> {
        if rows == 0 || cols == 0 {
            return Err(GridError::InvalidDimensions { rows, cols });
        }

        let mut cells = Vec::with_capacity(rows * cols);
        for row in 0..rows {
            for col in 0..cols {
                cells.push(Cell::new(row, col));
            }
        }

        Ok(Self { cells, rows, cols })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Total number of tiles.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Restores every tile to the fully walled state, keeping dimensions.
    pub fn reset(&mut self) {
        for cell in &mut self.cells {
            cell.reset();
        }
    }

    /// The orthogonally adjacent in-bounds positions of `(row, col)`,
    /// always yielded in the fixed order (row-1, col), (row, col-1),
    /// (row+1, col), (row, col+1). The order matters only for
    /// reproducibility of seeded generation runs.
    pub fn neighbors_of(&self, row: usize, col: usize) -> impl Iterator<Item = Position> {
        let (rows, cols) = (self.rows, self.cols);

        // wrapping_sub sends 0-1 to usize::MAX, which the bounds filter
        // rejects along with anything past the far edge.
        [
            (row.wrapping_sub(1), col),
            (row, col.wrapping_sub(1)),
            (row.saturating_add(1), col),
            (row, col.saturating_add(1)),
        ]
        .into_iter()
        .filter(move |&(r, c)| r < rows && c < cols)
        .map(|(r, c)| Position::new(r, c))
    }

    /// Clears the mutually facing wall pair between two adjacent tiles.
    ///
    /// Fails with `NotAdjacent` unless exactly one coordinate differs by
    /// one (so diagonal and identical positions are rejected). Connecting
    /// two already-connected tiles is a no-op.
    pub fn connect(&mut self, a: Position, b: Position) -> Result<(), GridError> {
        self.check_bounds(a.row, a.col)?;
        self.check_bounds(b.row, b.col)?;

        let (wall_a, wall_b) = if a.row + 1 == b.row && a.col == b.col {
            (Walls::RIGHT, Walls::LEFT)
        } else if b.row + 1 == a.row && a.col == b.col {
            (Walls::LEFT, Walls::RIGHT)
        } else if a.col + 1 == b.col && a.row == b.row {
            (Walls::BOTTOM, Walls::TOP)
        } else if b.col + 1 == a.col && a.row == b.row {
            (Walls::TOP, Walls::BOTTOM)
        } else {
            return Err(GridError::NotAdjacent { a, b });
        };

        let index_a = self.index_of(a.row, a.col);
        let index_b = self.index_of(b.row, b.col);
        self.cells[index_a].clear_wall(wall_a);
        self.cells[index_b].clear_wall(wall_b);
        Ok(())
    }

    /// Read-only access to one tile.
    pub fn cell_at(&self, row: usize, col: usize) -> Result<&Cell, GridError> {
        self.check_bounds(row, col)?;
        Ok(&self.cells[self.index_of(row, col)])
    }

    /// Lazy, restartable walk over every tile in row-major order (all of
    /// row 0 first), yielding the position, the wall bits and the pixel
    /// origin under the given tile size. This is the whole surface the
    /// renderer consumes; it knows nothing else about the grid.
    pub fn tiles(
        &self,
        cell_width: u32,
        cell_height: u32,
    ) -> impl Iterator<Item = (Position, Walls, (u32, u32))> + '_ {
        self.cells.iter().map(move |cell| {
            (
                Position::new(cell.row, cell.col),
                cell.walls(),
                (
                    cell.row as u32 * cell_width,
                    cell.col as u32 * cell_height,
                ),
            )
        })
    }

    #[inline]
    pub(crate) fn index_of(&self, row: usize, col: usize) -> usize {
        row * self.cols + col
    }

    fn check_bounds(&self, row: usize, col: usize) -> Result<(), GridError> {
        if row >= self.rows || col >= self.cols {
            return Err(GridError::OutOfBounds {
                row,
                col,
                rows: self.rows,
                cols: self.cols,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_zero_dimensions() {
        assert_eq!(
            Grid::new(0, 5).unwrap_err(),
            GridError::InvalidDimensions { rows: 0, cols: 5 }
        );
        assert_eq!(
            Grid::new(5, 0).unwrap_err(),
            GridError::InvalidDimensions { rows: 5, cols: 0 }
        );
        assert!(Grid::new(1, 1).is_ok());
    }

    #[test]
    fn new_grid_is_fully_walled_with_matching_positions() {
        let grid = Grid::new(3, 4).unwrap();
        assert_eq!(grid.len(), 12);

        for row in 0..3 {
            for col in 0..4 {
                let cell = grid.cell_at(row, col).unwrap();
                assert_eq!(cell.row, row);
                assert_eq!(cell.col, col);
                assert_eq!(cell.walls(), Walls::ALL);
            }
        }
    }

    #[test]
    fn neighbors_are_ordered_and_bounded() {
        let grid = Grid::new(3, 3).unwrap();

        let center: Vec<Position> = grid.neighbors_of(1, 1).collect();
        assert_eq!(
            center,
            vec![
                Position::new(0, 1),
                Position::new(1, 0),
                Position::new(2, 1),
                Position::new(1, 2),
            ]
        );

        let corner: Vec<Position> = grid.neighbors_of(0, 0).collect();
        assert_eq!(corner, vec![Position::new(1, 0), Position::new(0, 1)]);

        let far_corner: Vec<Position> = grid.neighbors_of(2, 2).collect();
        assert_eq!(far_corner, vec![Position::new(1, 2), Position::new(2, 1)]);
    }

    #[test]
    fn connect_clears_only_the_facing_pair() {
        let mut grid = Grid::new(2, 2).unwrap();
        grid.connect(Position::new(0, 0), Position::new(1, 0)).unwrap();

        let a = grid.cell_at(0, 0).unwrap().walls();
        let b = grid.cell_at(1, 0).unwrap().walls();

        assert!(!a.contains(Walls::RIGHT));
        assert!(a.contains(Walls::LEFT));
        assert!(a.contains(Walls::TOP));
        assert!(a.contains(Walls::BOTTOM));
        assert!(a.contains(Walls::DOT));

        assert!(!b.contains(Walls::LEFT));
        assert!(b.contains(Walls::RIGHT));

        // untouched tiles stay fully walled
        assert_eq!(grid.cell_at(0, 1).unwrap().walls(), Walls::ALL);
        assert_eq!(grid.cell_at(1, 1).unwrap().walls(), Walls::ALL);
    }

    #[test]
    fn connect_works_along_the_column_axis() {
        let mut grid = Grid::new(2, 2).unwrap();
        grid.connect(Position::new(0, 1), Position::new(0, 0)).unwrap();

        assert!(!grid.cell_at(0, 1).unwrap().walls().contains(Walls::TOP));
        assert!(!grid.cell_at(0, 0).unwrap().walls().contains(Walls::BOTTOM));
    }

    #[test]
    fn connect_is_idempotent() {
        let mut grid = Grid::new(2, 2).unwrap();
        let (a, b) = (Position::new(0, 0), Position::new(0, 1));

        grid.connect(a, b).unwrap();
        let first = grid.cell_at(0, 0).unwrap().walls();
        grid.connect(a, b).unwrap();
        grid.connect(b, a).unwrap();

        assert_eq!(grid.cell_at(0, 0).unwrap().walls(), first);
    }

    #[test]
    fn connect_rejects_non_adjacent_positions() {
        let mut grid = Grid::new(3, 3).unwrap();

        for (a, b) in [
            (Position::new(0, 0), Position::new(0, 0)), // identical
            (Position::new(0, 0), Position::new(1, 1)), // diagonal
            (Position::new(0, 0), Position::new(2, 0)), // two apart
        ] {
            assert_eq!(
                grid.connect(a, b).unwrap_err(),
                GridError::NotAdjacent { a, b }
            );
        }
    }

    #[test]
    fn connect_rejects_out_of_bounds_positions() {
        let mut grid = Grid::new(2, 2).unwrap();
        let err = grid
            .connect(Position::new(1, 1), Position::new(2, 1))
            .unwrap_err();
        assert_eq!(
            err,
            GridError::OutOfBounds {
                row: 2,
                col: 1,
                rows: 2,
                cols: 2
            }
        );
    }

    #[test]
    fn cell_at_checks_bounds() {
        let grid = Grid::new(2, 3).unwrap();
        assert!(grid.cell_at(1, 2).is_ok());
        assert_eq!(
            grid.cell_at(2, 0).unwrap_err(),
            GridError::OutOfBounds {
                row: 2,
                col: 0,
                rows: 2,
                cols: 3
            }
        );
        assert_eq!(
            grid.cell_at(0, 3).unwrap_err(),
            GridError::OutOfBounds {
                row: 0,
                col: 3,
                rows: 2,
                cols: 3
            }
        );
    }

    #[test]
    fn reset_restores_all_walls() {
        let mut grid = Grid::new(3, 3).unwrap();
        grid.connect(Position::new(0, 0), Position::new(1, 0)).unwrap();
        grid.connect(Position::new(1, 0), Position::new(1, 1)).unwrap();

        grid.reset();

        for row in 0..3 {
            for col in 0..3 {
                assert_eq!(grid.cell_at(row, col).unwrap().walls(), Walls::ALL);
            }
        }
    }

    #[test]
    fn tiles_walk_row_major_with_pixel_origins() {
        let grid = Grid::new(2, 3).unwrap();
        let seen: Vec<(Position, (u32, u32))> = grid
            .tiles(40, 30)
            .map(|(pos, _, origin)| (pos, origin))
            .collect();

        assert_eq!(
            seen,
            vec![
                (Position::new(0, 0), (0, 0)),
                (Position::new(0, 1), (0, 30)),
                (Position::new(0, 2), (0, 60)),
                (Position::new(1, 0), (40, 0)),
                (Position::new(1, 1), (40, 30)),
                (Position::new(1, 2), (40, 60)),
            ]
        );

        // restartable: a second walk sees the same sequence
        assert_eq!(grid.tiles(40, 30).count(), 6);
    }
}
