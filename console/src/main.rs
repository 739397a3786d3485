use chess_client::{
    AutomatedPlayer, Color, TurnController, controller::PlayerSlots, enum_map::EnumMap,
};
use clap::{Parser, ValueEnum};
use console::{Config, LineInput, TerminalAudio, TextRenderer};
use random_player::RandomPlayer;
use rules::ChessPosition;
use simplelog::{ColorChoice, CombinedLogger, SharedLogger, TermLogger, TerminalMode, WriteLogger};
use std::{error::Error, fs::File, path::PathBuf, process::ExitCode};

/// Play chess in the terminal against a random mover.
#[derive(Parser, Debug)]
struct Args {
    /// TOML configuration file.
    config: Option<PathBuf>,
    /// Starting position in FEN.
    #[arg(long)]
    fen: Option<String>,
    #[arg(long, value_enum)]
    white: Option<Side>,
    #[arg(long, value_enum)]
    black: Option<Side>,
    #[arg(long)]
    verbose: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Side {
    Human,
    Computer,
}

impl Args {
    fn apply(&self, config: &mut Config) {
        if let Some(fen) = &self.fen {
            config.fen.clone_from(fen);
        }
        for (color, side) in [(Color::White, self.white), (Color::Black, self.black)] {
            if let Some(side) = side {
                config.set_computer(color, side == Side::Computer);
            }
        }
        config.verbose |= self.verbose;
    }
}

fn main() -> ExitCode {
    if let Err(e) = run() {
        log::error!("{e}");
        eprintln!("Error: {e}");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}

fn run() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();
    let mut config = match &args.config {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };
    args.apply(&mut config);
    init_logger(&config)?;

    let position = config.position()?;
    let players: PlayerSlots<ChessPosition> = EnumMap::from_fn(|color: Color| {
        if !config.is_computer(color) {
            return None;
        }
        let player = match config.seed {
            Some(seed) => RandomPlayer::with_seed(seed.wrapping_mul(2).wrapping_add(color as u64)),
            None => RandomPlayer::new(),
        };
        Some(Box::new(player) as Box<dyn AutomatedPlayer<ChessPosition>>)
    });

    let mut controller = TurnController::new(
        position,
        players,
        TextRenderer::stdout(),
        TerminalAudio::new(true),
        LineInput::stdin(),
        config.controller_settings(),
    );
    let state = controller.run();
    log::info!("Final state: {state:?}");
    Ok(())
}

fn init_logger(config: &Config) -> Result<(), Box<dyn Error>> {
    let level = config.log_level()?;
    let mut loggers: Vec<Box<dyn SharedLogger>> = vec![TermLogger::new(
        level,
        simplelog::Config::default(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    )];
    if let Some(path) = &config.log_file {
        let log_file = File::create(path)?;
        loggers.push(WriteLogger::new(level, simplelog::Config::default(), log_file));
    }
    CombinedLogger::init(loggers)?;
    Ok(())
}
