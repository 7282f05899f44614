use std::io;
use std::panic;
use std::time::{Duration, Instant};

use clap::Parser;
use crossterm::cursor::{Hide, Show};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;

use gridsnake::config::{GameConfig, DEFAULT_GRID_SIZE, DEFAULT_TICK_INTERVAL_MS, THEME_CLASSIC};
use gridsnake::game::{GameState, GameStatus};
use gridsnake::input::{self, GameInput};
use gridsnake::renderer;
use gridsnake::scheduler::TickScheduler;
use gridsnake::score::{load_high_score, save_high_score};
use gridsnake::ui::hud::HudInfo;

/// Terminal snake on a fixed-tick grid simulation.
#[derive(Debug, Parser)]
#[command(version)]
struct Cli {
    /// Board side length in cells.
    #[arg(long = "grid-size", default_value_t = DEFAULT_GRID_SIZE)]
    grid_size: u16,

    /// Simulation tick interval in milliseconds.
    #[arg(long = "tick-ms", default_value_t = DEFAULT_TICK_INTERVAL_MS)]
    tick_ms: u64,

    /// Seed for a reproducible food sequence.
    #[arg(long)]
    seed: Option<u64>,
}

/// Upper bound on one pass through the main loop; doubles as frame pacing.
const INPUT_POLL_TIMEOUT: Duration = Duration::from_millis(16);

fn main() -> io::Result<()> {
    let cli = Cli::parse();
    let config = GameConfig::new(cli.grid_size, Duration::from_millis(cli.tick_ms))
        .map_err(io::Error::other)?;

    let high_score = match load_high_score() {
        Ok(value) => value,
        Err(error) => {
            eprintln!("Warning: could not read high score: {error}");
            0
        }
    };

    install_panic_hook();

    let result = run(config, cli.seed, high_score);
    cleanup_terminal()?;
    result
}

fn run(config: GameConfig, seed: Option<u64>, mut high_score: u32) -> io::Result<()> {
    let mut terminal = setup_terminal()?;
    let mut state = match seed {
        Some(seed) => GameState::new_with_seed(config, seed),
        None => GameState::new(config),
    };
    let mut scheduler = TickScheduler::new(config.tick_interval);
    let mut last_status = state.status;

    loop {
        let snapshot = state.snapshot();
        let info = HudInfo {
            high_score,
            grid_size: config.grid_size,
        };
        terminal
            .draw(|frame| renderer::render(frame, &snapshot, state.grid(), info, &THEME_CLASSIC))?;

        if let Some(game_input) = input::poll_input(INPUT_POLL_TIMEOUT)? {
            match game_input {
                GameInput::Quit => break,
                GameInput::Restart => {
                    state.reset();
                    // Re-arm so a due time from the previous game never
                    // advances the fresh instance.
                    scheduler.restart(Instant::now());
                    last_status = state.status;
                }
                GameInput::Direction(direction) => state.set_direction_intent(direction),
            }
        }

        if scheduler.poll(Instant::now()) {
            state.tick();
        }

        if state.status != last_status {
            if state.status == GameStatus::GameOver && state.score > high_score {
                high_score = state.score;
                if let Err(error) = save_high_score(high_score) {
                    eprintln!("Failed to save high score: {error}");
                }
            }

            last_status = state.status;
        }
    }

    Ok(())
}

fn setup_terminal() -> io::Result<Terminal<CrosstermBackend<io::Stdout>>> {
    enable_raw_mode()?;

    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, Hide)?;

    let backend = CrosstermBackend::new(stdout);
    Terminal::new(backend)
}

fn cleanup_terminal() -> io::Result<()> {
    disable_raw_mode()?;

    let mut stdout = io::stdout();
    execute!(stdout, Show, LeaveAlternateScreen)?;

    Ok(())
}

fn install_panic_hook() {
    let default_hook = panic::take_hook();

    panic::set_hook(Box::new(move |panic_info| {
        restore_terminal_after_panic();
        default_hook(panic_info);
    }));
}

fn restore_terminal_after_panic() {
    let _ = disable_raw_mode();

    let mut stdout = io::stdout();
    let _ = execute!(stdout, Show, LeaveAlternateScreen);
}
