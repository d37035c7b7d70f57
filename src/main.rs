use std::io::Write;

use clap::Parser;

use tictactoe::config::{ConfigManager, FirstMoveMode};
use tictactoe::{
    BotType, GameState, GameStatus, Grid, GRID_SIDE, Mark, SessionRng, calculate_move, log, logger,
};

#[derive(Parser)]
#[command(name = "tictactoe_cli")]
struct Args {
    /// Path to the YAML config file (created with defaults if missing)
    #[arg(long, default_value = "tictactoe_config.yaml")]
    config: String,

    /// Override the configured bot type
    #[arg(long, value_enum)]
    bot: Option<BotType>,

    /// Session RNG seed; random when omitted
    #[arg(long)]
    seed: Option<u64>,

    #[arg(long)]
    use_log_prefix: bool,
}

fn main() -> Result<(), String> {
    let args = Args::parse();

    let prefix = if args.use_log_prefix {
        Some("TicTacToe".to_string())
    } else {
        None
    };
    logger::init_logger(prefix);

    let config = ConfigManager::from_yaml_file(&args.config).get_config()?;
    let bot_type = args.bot.unwrap_or(config.bot_type);

    let mut rng = match args.seed {
        Some(seed) => SessionRng::new(seed),
        None => SessionRng::from_random(),
    };
    log!("Session seed: {}", rng.seed());

    let human_mark = match config.first_move {
        FirstMoveMode::Human => Mark::X,
        FirstMoveMode::Bot => Mark::O,
        FirstMoveMode::Random => {
            if rng.random_bool() {
                Mark::X
            } else {
                Mark::O
            }
        }
    };
    log!("You play {}, the bot plays {:?}", human_mark, bot_type);

    let mut state = GameState::new();

    while state.status() == GameStatus::InProgress {
        if state.current_mark() == human_mark {
            print_grid(state.grid());
            let Some(index) = read_human_move()? else {
                log!("Input closed, aborting game");
                return Ok(());
            };
            if let Err(message) = state.place_mark(index) {
                println!("{}", message);
            }
        } else {
            if config.bot_delay_ms > 0 {
                std::thread::sleep(std::time::Duration::from_millis(config.bot_delay_ms));
            }
            let Some(index) =
                calculate_move(bot_type, state.grid(), state.current_mark(), &mut rng)
            else {
                break;
            };
            log!("Bot plays cell {}", index);
            state
                .place_mark(index)
                .map_err(|e| format!("Bot produced an illegal move: {}", e))?;
        }
    }

    print_grid(state.grid());
    match state.status() {
        GameStatus::Draw => log!("Game over: draw"),
        status => match status.winner() {
            Some(winner) if winner == human_mark => log!("Game over: you win!"),
            Some(_) => log!("Game over: the bot wins"),
            None => log!("Game over"),
        },
    }

    Ok(())
}

/// Reads a cell index 0..=8; `None` means stdin was closed.
fn read_human_move() -> Result<Option<usize>, String> {
    loop {
        print!("Your move [0-8]: ");
        std::io::stdout()
            .flush()
            .map_err(|e| format!("Failed to flush stdout: {}", e))?;

        let mut line = String::new();
        let bytes = std::io::stdin()
            .read_line(&mut line)
            .map_err(|e| format!("Failed to read input: {}", e))?;
        if bytes == 0 {
            return Ok(None);
        }

        match line.trim().parse::<usize>() {
            Ok(index) if index < 9 => return Ok(Some(index)),
            _ => println!("Enter a number between 0 and 8"),
        }
    }
}

fn print_grid(grid: &Grid) {
    println!();
    for row in 0..GRID_SIDE {
        let cells: Vec<String> = (0..GRID_SIDE)
            .map(|col| grid.get(row * GRID_SIDE + col).to_string())
            .collect();
        println!(" {}", cells.join(" | "));
        if row + 1 < GRID_SIDE {
            println!("---+---+---");
        }
    }
    println!();
}
