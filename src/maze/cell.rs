// src/maze/cell.rs

/// Wall flags for a single tile, packed into a `u8`.
///
/// Bit layout is a stable contract with the renderer:
/// bit 0 = left, bit 1 = right, bit 2 = top, bit 3 = bottom,
/// bit 4 = decorative corner dot. Bits are independent; clearing one
/// never touches the others.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Walls(u8);

impl Walls {
    pub const LEFT: Walls = Walls(0b00001);
    pub const RIGHT: Walls = Walls(0b00010);
    pub const TOP: Walls = Walls(0b00100);
    pub const BOTTOM: Walls = Walls(0b01000);
    pub const DOT: Walls = Walls(0b10000);
    pub const ALL: Walls = Walls(0b11111);

    /// Raw bit pattern, for display code and exact assertions.
    pub fn bits(self) -> u8 {
        self.0
    }

    pub fn contains(self, other: Walls) -> bool {
        self.0 & other.0 == other.0
    }

    pub fn remove(&mut self, other: Walls) {
        self.0 &= !other.0;
    }

    /// Number of closed sides (the corner dot does not count).
    pub fn side_count(self) -> u32 {
        (self.0 & 0b01111).count_ones()
    }
}

/// One tile of the maze: its fixed grid position and its current walls.
///
/// `row` and `col` identify the tile and never change after creation;
/// the grid guarantees they match the tile's slot. Walls are only
/// mutated through the grid's `connect` and `reset` operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cell {
    pub row: usize,
    pub col: usize,
    walls: Walls,
}

impl Cell {
    pub(crate) fn new(row: usize, col: usize) -> Self {
        Self {
            row,
            col,
            walls: Walls::ALL,
        }
    }

    pub fn walls(&self) -> Walls {
        self.walls
    }

    pub(crate) fn reset(&mut self) {
        self.walls = Walls::ALL;
    }

    pub(crate) fn clear_wall(&mut self, wall: Walls) {
        self.walls.remove(wall);
    }
}
