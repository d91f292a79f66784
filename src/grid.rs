use crate::snake::Cell;

/// Square play field, fixed at construction.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct Grid {
    size: u16,
}

impl Grid {
    /// Creates a grid of `size` × `size` cells.
    ///
    /// # Panics
    ///
    /// Panics when `size` is zero.
    #[must_use]
    pub fn new(size: u16) -> Self {
        assert!(size > 0, "grid size must be at least 1");
        Self { size }
    }

    /// Returns the side length in cells.
    #[must_use]
    pub fn size(self) -> u16 {
        self.size
    }

    /// Returns true when `cell` lies inside the grid.
    #[must_use]
    pub fn contains(self, cell: Cell) -> bool {
        cell.x >= 0
            && cell.y >= 0
            && cell.x < i32::from(self.size)
            && cell.y < i32::from(self.size)
    }

    /// Returns the total number of cells.
    #[must_use]
    pub fn total_cells(self) -> usize {
        usize::from(self.size) * usize::from(self.size)
    }
}

#[cfg(test)]
mod tests {
    use super::Grid;
    use crate::snake::Cell;

    #[test]
    fn contains_accepts_interior_and_edge_cells() {
        let grid = Grid::new(20);

        assert!(grid.contains(Cell { x: 0, y: 0 }));
        assert!(grid.contains(Cell { x: 19, y: 19 }));
        assert!(grid.contains(Cell { x: 7, y: 12 }));
    }

    #[test]
    fn contains_rejects_cells_outside_every_edge() {
        let grid = Grid::new(20);

        assert!(!grid.contains(Cell { x: -1, y: 5 }));
        assert!(!grid.contains(Cell { x: 5, y: -1 }));
        assert!(!grid.contains(Cell { x: 20, y: 5 }));
        assert!(!grid.contains(Cell { x: 5, y: 20 }));
    }

    #[test]
    fn total_cells_is_side_squared() {
        assert_eq!(Grid::new(20).total_cells(), 400);
        assert_eq!(Grid::new(1).total_cells(), 1);
    }

    #[test]
    #[should_panic(expected = "grid size must be at least 1")]
    fn zero_size_grid_is_rejected() {
        let _ = Grid::new(0);
    }
}
