use super::grid::Grid;
use super::types::{GameStatus, Mark};

/// The 8 three-in-a-row index triples: rows, columns, diagonals.
/// Checked in this order, first match wins. Under legal alternating
/// play at most one pattern can ever match, so the order is only kept
/// stable for easy diffing against other implementations.
pub const WIN_PATTERNS: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

pub fn check_win(grid: &Grid) -> Option<Mark> {
    for [a, b, c] in WIN_PATTERNS {
        let mark = grid.get(a);
        if mark != Mark::Empty && grid.get(b) == mark && grid.get(c) == mark {
            return Some(mark);
        }
    }
    None
}

/// Terminal classification of a grid. Total over all well-formed grids.
pub fn evaluate(grid: &Grid) -> GameStatus {
    match check_win(grid) {
        Some(Mark::X) => GameStatus::XWon,
        Some(Mark::O) => GameStatus::OWon,
        Some(Mark::Empty) => unreachable!(),
        None => {
            if grid.is_full() {
                GameStatus::Draw
            } else {
                GameStatus::InProgress
            }
        }
    }
}
