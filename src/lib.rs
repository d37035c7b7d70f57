mod bot_controller;
mod game_state;
mod grid;
mod session_rng;
mod types;
mod win_detector;

pub mod config;
pub mod logger;

pub use bot_controller::{BotType, calculate_minimax_move, calculate_move};
pub use game_state::GameState;
pub use grid::{CELL_COUNT, GRID_SIDE, Grid};
pub use session_rng::SessionRng;
pub use types::{GameStatus, Mark};
pub use win_detector::{WIN_PATTERNS, check_win, evaluate};
