use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Instant;

use clap::Parser;
use log::info;
use rand::SeedableRng;
use rand::rngs::StdRng;
use toroidal_snake::board_info::BoardInfo;
use toroidal_snake::config::{PALETTE_CLASSIC, Settings};
use toroidal_snake::error::AppError;
use toroidal_snake::game::GameState;
use toroidal_snake::game_loop::GameLoop;
use toroidal_snake::input::{GameInput, poll_input};
use toroidal_snake::logging::{LogLevel, default_log_path, init_file_logger};
use toroidal_snake::renderer;
use toroidal_snake::terminal_runtime::TerminalSession;

/// Snake on a wrap-around board.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// Settings file (JSON). Defaults to the platform config directory.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Board width in cells.
    #[arg(long)]
    width: Option<u16>,

    /// Board height in cells.
    #[arg(long)]
    height: Option<u16>,

    /// Column of the snake's head after every reset; defaults to the centre.
    #[arg(long = "start-x", allow_negative_numbers = true)]
    start_x: Option<i32>,

    /// Row of the snake's head after every reset; defaults to the centre.
    #[arg(long = "start-y", allow_negative_numbers = true)]
    start_y: Option<i32>,

    /// Snake length after every reset.
    #[arg(long = "start-length")]
    start_length: Option<usize>,

    /// Milliseconds between ticks.
    #[arg(long = "tick-ms")]
    tick_ms: Option<u64>,

    /// Seed for apple placement; random when omitted.
    #[arg(long)]
    seed: Option<u64>,

    /// Log file path.
    #[arg(long = "log-file")]
    log_file: Option<PathBuf>,

    /// Log verbosity.
    #[arg(long = "log-level", value_enum, default_value_t = LogLevel::Info)]
    log_level: LogLevel,

    /// Print the board geometry and exit.
    #[arg(long = "print-board")]
    print_board: bool,
}

impl Cli {
    fn apply_overrides(&self, settings: &mut Settings) {
        if let Some(width) = self.width {
            settings.width = width;
        }
        if let Some(height) = self.height {
            settings.height = height;
        }
        if self.start_x.is_some() {
            settings.start_x = self.start_x;
        }
        if self.start_y.is_some() {
            settings.start_y = self.start_y;
        }
        if let Some(start_length) = self.start_length {
            settings.start_length = start_length;
        }
        if let Some(tick_ms) = self.tick_ms {
            settings.tick_interval_ms = tick_ms;
        }
        if self.seed.is_some() {
            settings.seed = self.seed;
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            eprintln!("Error: {error}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), AppError> {
    let mut settings = Settings::load(cli.config.as_deref())?;
    cli.apply_overrides(&mut settings);
    settings.validate()?;

    if cli.print_board {
        println!("{}", BoardInfo::new(settings.grid_size(), settings.cell_size));
        return Ok(());
    }

    let log_path = cli.log_file.clone().unwrap_or_else(default_log_path);
    init_file_logger(&log_path, cli.log_level)?;
    info!("starting with {settings:?}");

    let rng = match settings.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let start = settings.snake_start();
    let game = GameLoop::new(GameState::with_rng(settings.grid_size(), start, rng), start);

    let mut session = TerminalSession::enter()?;
    play(&mut session, game, &settings)?;
    drop(session);

    info!("session ended");
    Ok(())
}

fn play(
    session: &mut TerminalSession,
    mut game: GameLoop,
    settings: &Settings,
) -> Result<(), AppError> {
    let tick_interval = settings.tick_interval();
    let mut last_tick = Instant::now();

    session.draw(|frame| renderer::render(frame, &game, &PALETTE_CLASSIC))?;

    loop {
        let timeout = tick_interval.saturating_sub(last_tick.elapsed());
        match poll_input(timeout)? {
            Some(GameInput::Quit) => break,
            Some(GameInput::Direction(direction)) => game.request_direction(direction),
            None => {}
        }

        if last_tick.elapsed() < tick_interval {
            continue;
        }

        last_tick = Instant::now();
        game.step();
        session.draw(|frame| renderer::render(frame, &game, &PALETTE_CLASSIC))?;
    }

    info!(
        "quit after {} ticks in round {} at length {}",
        game.tick_count(),
        game.round(),
        game.state().len()
    );
    Ok(())
}
