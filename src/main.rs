use std::io;
use std::time::{Duration, Instant};

use clap::Parser;

use snake_sim::config::{GameConfig, DEFAULT_GRID_SIZE, DEFAULT_SPEED_CELLS_PER_SEC};
use snake_sim::game::{GameController, GameEvent, GameStatus};
use snake_sim::input::{self, Command};
use snake_sim::renderer;
use snake_sim::score::{load_high_score, save_high_score};
use snake_sim::terminal_runtime::TerminalSession;

const INPUT_POLL_INTERVAL: Duration = Duration::from_millis(10);

#[derive(Debug, Parser)]
#[command(name = "snake-sim", about = "Grid snake in the terminal")]
struct Cli {
    /// Side length of the square grid, in cells.
    #[arg(long, default_value_t = DEFAULT_GRID_SIZE)]
    grid_size: u16,

    /// Initial speed in cells per second.
    #[arg(long, default_value_t = DEFAULT_SPEED_CELLS_PER_SEC)]
    speed: f64,

    /// Fixed RNG seed for reproducible food placement.
    #[arg(long)]
    seed: Option<u64>,

    /// Do not load or persist the high score.
    #[arg(long)]
    no_high_score: bool,
}

fn main() -> io::Result<()> {
    let cli = Cli::parse();

    let config = GameConfig {
        grid_size: cli.grid_size,
        initial_speed: cli.speed,
        ..GameConfig::default()
    };
    let mut game = match cli.seed {
        Some(seed) => GameController::with_seed(config, seed),
        None => GameController::new(config),
    };

    let mut high_score = if cli.no_high_score {
        0
    } else {
        match load_high_score() {
            Ok(score) => score,
            Err(error) => {
                eprintln!("warning: could not read high score: {error}");
                0
            }
        }
    };

    let mut session = TerminalSession::enter()?;
    let mut last_frame = Instant::now();

    loop {
        let shown_high_score = high_score;
        session
            .terminal_mut()
            .draw(|frame| renderer::render(frame, &game, shown_high_score))?;

        if let Some(command) = input::poll_command(INPUT_POLL_INTERVAL)? {
            match command {
                Command::Quit => break,
                Command::Direction(direction) => game.request_direction(direction),
                Command::StartOrPause => match game.status {
                    GameStatus::Running | GameStatus::Paused => game.pause(),
                    _ => game.start(),
                },
                Command::Restart => game.restart(),
            }
        }

        let delta = last_frame.elapsed();
        last_frame = Instant::now();
        game.tick(delta.as_secs_f64() * 1000.0);

        for event in game.drain_events() {
            let final_score = match event {
                GameEvent::GameOver { final_score, .. } | GameEvent::Won { final_score } => {
                    final_score
                }
                _ => continue,
            };

            if final_score > high_score {
                high_score = final_score;
                if !cli.no_high_score {
                    if let Err(error) = save_high_score(high_score) {
                        eprintln!("warning: could not save high score: {error}");
                    }
                }
            }
        }
    }

    Ok(())
}
