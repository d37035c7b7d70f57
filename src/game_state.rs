use super::grid::{CELL_COUNT, Grid};
use super::types::{GameStatus, Mark};
use super::win_detector::evaluate;

/// One game of tic-tac-toe as the presentation layer sees it: a grid
/// plus whose turn it is. X always moves first.
#[derive(Clone, Copy, Debug)]
pub struct GameState {
    grid: Grid,
    current_mark: Mark,
    status: GameStatus,
    last_move: Option<usize>,
}

impl GameState {
    pub fn new() -> Self {
        Self {
            grid: Grid::new(),
            current_mark: Mark::X,
            status: GameStatus::InProgress,
            last_move: None,
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn current_mark(&self) -> Mark {
        self.current_mark
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn last_move(&self) -> Option<usize> {
        self.last_move
    }

    pub fn winner(&self) -> Option<Mark> {
        self.status.winner()
    }

    pub fn place_mark(&mut self, index: usize) -> Result<(), String> {
        if self.status != GameStatus::InProgress {
            return Err("Game is already over".to_string());
        }

        if index >= CELL_COUNT {
            return Err(format!("Cell index {} is out of bounds", index));
        }

        if self.grid.get(index) != Mark::Empty {
            return Err("Cell is already marked".to_string());
        }

        self.grid.set(index, self.current_mark);
        self.last_move = Some(index);
        self.status = evaluate(&self.grid);

        if self.status == GameStatus::InProgress {
            self.switch_turn();
        }

        Ok(())
    }

    fn switch_turn(&mut self) {
        self.current_mark = match self.current_mark {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
            Mark::Empty => unreachable!(),
        };
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_x_moves_first_and_turns_alternate() {
        let mut state = GameState::new();
        assert_eq!(state.current_mark(), Mark::X);

        state.place_mark(4).unwrap();
        assert_eq!(state.current_mark(), Mark::O);
        assert_eq!(state.grid().get(4), Mark::X);
        assert_eq!(state.last_move(), Some(4));

        state.place_mark(0).unwrap();
        assert_eq!(state.current_mark(), Mark::X);
        assert_eq!(state.grid().get(0), Mark::O);
    }

    #[test]
    fn test_occupied_cell_rejected() {
        let mut state = GameState::new();
        state.place_mark(4).unwrap();

        assert!(state.place_mark(4).is_err());
        // Turn must not advance on a rejected move.
        assert_eq!(state.current_mark(), Mark::O);
    }

    #[test]
    fn test_out_of_bounds_rejected() {
        let mut state = GameState::new();
        assert!(state.place_mark(9).is_err());
    }

    #[test]
    fn test_win_is_detected_and_ends_game() {
        let mut state = GameState::new();
        // X: 0, 1, 2 wins the top row; O answers on the middle row.
        for index in [0, 3, 1, 4, 2] {
            state.place_mark(index).unwrap();
        }

        assert_eq!(state.status(), GameStatus::XWon);
        assert_eq!(state.winner(), Some(Mark::X));
        assert!(state.place_mark(5).is_err());
    }

    #[test]
    fn test_turn_does_not_switch_after_game_over() {
        let mut state = GameState::new();
        for index in [0, 3, 1, 4, 2] {
            state.place_mark(index).unwrap();
        }

        assert_eq!(state.current_mark(), Mark::X);
    }

    #[test]
    fn test_full_board_without_line_is_draw() {
        let mut state = GameState::new();
        // Ends as X O X / O X X / O X O, no three-in-a-row.
        for index in [0, 1, 2, 3, 4, 6, 5, 8, 7] {
            state.place_mark(index).unwrap();
        }

        assert_eq!(state.status(), GameStatus::Draw);
        assert_eq!(state.winner(), None);
    }
}
