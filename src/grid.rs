use super::types::Mark;

pub const CELL_COUNT: usize = 9;
pub const GRID_SIDE: usize = 3;

/// 3x3 board stored row-major: indices 0..=2 are the top row,
/// 3..=5 the middle row, 6..=8 the bottom row.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Grid {
    cells: [Mark; CELL_COUNT],
}

impl Grid {
    pub fn new() -> Self {
        Self {
            cells: [Mark::Empty; CELL_COUNT],
        }
    }

    pub fn from_cells(cells: [Mark; CELL_COUNT]) -> Self {
        Self { cells }
    }

    pub fn get(&self, index: usize) -> Mark {
        self.cells[index]
    }

    pub fn set(&mut self, index: usize, mark: Mark) {
        self.cells[index] = mark;
    }

    pub fn cells(&self) -> &[Mark; CELL_COUNT] {
        &self.cells
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|&cell| cell != Mark::Empty)
    }

    pub fn available_moves(&self) -> Vec<usize> {
        let mut moves = Vec::new();
        for (index, &cell) in self.cells.iter().enumerate() {
            if cell == Mark::Empty {
                moves.push(index);
            }
        }
        moves
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_grid_is_all_empty() {
        let grid = Grid::new();
        assert!(grid.cells().iter().all(|&cell| cell == Mark::Empty));
        assert!(!grid.is_full());
    }

    #[test]
    fn test_available_moves_ascending_order() {
        let mut grid = Grid::new();
        grid.set(4, Mark::X);
        grid.set(0, Mark::O);

        assert_eq!(grid.available_moves(), vec![1, 2, 3, 5, 6, 7, 8]);
    }

    #[test]
    fn test_is_full_after_nine_marks() {
        let mut grid = Grid::new();
        for index in 0..CELL_COUNT {
            grid.set(index, if index % 2 == 0 { Mark::X } else { Mark::O });
        }

        assert!(grid.is_full());
        assert!(grid.available_moves().is_empty());
    }
}
