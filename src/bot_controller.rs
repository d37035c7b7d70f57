use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use super::grid::{CELL_COUNT, Grid};
use super::session_rng::SessionRng;
use super::types::{GameStatus, Mark};
use super::win_detector::{check_win, evaluate};

const WIN_SCORE: i32 = 10;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum BotType {
    Random,
    Minimax,
}

pub fn calculate_move(
    bot_type: BotType,
    grid: &Grid,
    mark: Mark,
    rng: &mut SessionRng,
) -> Option<usize> {
    match bot_type {
        BotType::Random => calculate_random_move(grid, rng),
        BotType::Minimax => calculate_minimax_move(grid, mark),
    }
}

fn calculate_random_move(grid: &Grid, rng: &mut SessionRng) -> Option<usize> {
    let available_moves = grid.available_moves();
    if available_moves.is_empty() {
        return None;
    }
    let idx = rng.random_range(0..available_moves.len());
    Some(available_moves[idx])
}

/// Index of the optimal empty cell for `side_to_move`, assuming optimal
/// play by both sides afterwards.
///
/// Returns `None` when there is no move to make: the grid is full,
/// already has a winner, or `side_to_move` is `Mark::Empty`. The caller's
/// grid is never modified.
pub fn calculate_minimax_move(grid: &Grid, side_to_move: Mark) -> Option<usize> {
    side_to_move.opponent()?;

    if evaluate(grid) != GameStatus::InProgress {
        return None;
    }

    // The search mutates a scratch copy and restores every cell on every
    // path, including pruned branches.
    let mut scratch = *grid;
    minimax(&mut scratch, side_to_move, 0, true, i32::MIN, i32::MAX).cell
}

struct SearchResult {
    score: i32,
    cell: Option<usize>,
}

fn minimax(
    grid: &mut Grid,
    bot_mark: Mark,
    depth: i32,
    is_maximizing: bool,
    mut alpha: i32,
    mut beta: i32,
) -> SearchResult {
    if let Some(winner) = check_win(grid) {
        // Depth bias: prefer the fastest win and the slowest loss.
        let score = if winner == bot_mark {
            WIN_SCORE - depth
        } else {
            depth - WIN_SCORE
        };
        return SearchResult { score, cell: None };
    }

    if grid.is_full() {
        return SearchResult { score: 0, cell: None };
    }

    if is_maximizing {
        let mut best_score = i32::MIN;
        let mut best_cell = None;

        for index in 0..CELL_COUNT {
            if grid.get(index) != Mark::Empty {
                continue;
            }
            grid.set(index, bot_mark);
            let result = minimax(grid, bot_mark, depth + 1, false, alpha, beta);
            grid.set(index, Mark::Empty);

            // Strict comparison keeps the first-seen (lowest-index) move
            // on ties, so the output is deterministic.
            if result.score > best_score {
                best_score = result.score;
                best_cell = Some(index);
            }
            alpha = alpha.max(best_score);
            if beta <= alpha {
                break;
            }
        }

        SearchResult {
            score: best_score,
            cell: best_cell,
        }
    } else {
        let opponent_mark = bot_mark.opponent().unwrap();
        let mut best_score = i32::MAX;
        let mut best_cell = None;

        for index in 0..CELL_COUNT {
            if grid.get(index) != Mark::Empty {
                continue;
            }
            grid.set(index, opponent_mark);
            let result = minimax(grid, bot_mark, depth + 1, true, alpha, beta);
            grid.set(index, Mark::Empty);

            if result.score < best_score {
                best_score = result.score;
                best_cell = Some(index);
            }
            beta = beta.min(best_score);
            if beta <= alpha {
                break;
            }
        }

        SearchResult {
            score: best_score,
            cell: best_cell,
        }
    }
}
