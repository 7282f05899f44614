/// Grid position in logical cell coordinates.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub struct Cell {
    pub x: i32,
    pub y: i32,
}

impl Cell {
    /// Creates a cell at `(x, y)`.
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// Square board of `size` × `size` logical cells.
///
/// Pure bounds arithmetic only; occupancy lives in the snake body.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct Grid {
    size: u16,
}

impl Grid {
    /// Creates a board with the given side length.
    #[must_use]
    pub const fn new(size: u16) -> Self {
        Self { size }
    }

    /// Returns the side length in cells.
    #[must_use]
    pub fn size(self) -> u16 {
        self.size
    }

    /// Returns true when the cell lies inside the board on both axes.
    #[must_use]
    pub fn in_bounds(self, cell: Cell) -> bool {
        cell.x >= 0
            && cell.y >= 0
            && cell.x < i32::from(self.size)
            && cell.y < i32::from(self.size)
    }

    /// Returns the center cell, used as the fixed snake start position.
    #[must_use]
    pub fn center(self) -> Cell {
        Cell::new(i32::from(self.size / 2), i32::from(self.size / 2))
    }

    /// Returns the total number of cells on the board.
    #[must_use]
    pub fn total_cells(self) -> usize {
        usize::from(self.size) * usize::from(self.size)
    }
}
