use chess_client::{
    Color, ControllerSettings, IdlePolicy, ParseError,
    constants::{
        DEFAULT_FRAME_INTERVAL, DEFAULT_GAME_DURATION, DEFAULT_IDLE_INTERVAL,
        DEFAULT_IDLE_THRESHOLD, DEFAULT_THINK_DELAY, START_FEN,
    },
};
use log::LevelFilter;
use rules::ChessPosition;
use serde::Deserialize;
use std::{error::Error, fs, path::Path, path::PathBuf, str::FromStr, time::Duration};

/// Contents of the TOML configuration file. Every key is optional.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub computer_is_white: bool,
    pub computer_is_black: bool,
    /// Starting position, for resumed games.
    pub fen: String,
    pub game_duration_ms: u64,
    pub verbose: bool,
    pub think_delay_ms: u64,
    pub frame_interval_ms: u64,
    pub idle_interval_ms: u64,
    pub idle_threshold_ms: u64,
    pub log_level: String,
    pub log_file: Option<PathBuf>,
    /// Random player seed. Each side gets its own stream.
    pub seed: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            computer_is_white: false,
            computer_is_black: true,
            fen: START_FEN.to_string(),
            game_duration_ms: millis(DEFAULT_GAME_DURATION),
            verbose: false,
            think_delay_ms: millis(DEFAULT_THINK_DELAY),
            frame_interval_ms: millis(DEFAULT_FRAME_INTERVAL),
            idle_interval_ms: millis(DEFAULT_IDLE_INTERVAL),
            idle_threshold_ms: millis(DEFAULT_IDLE_THRESHOLD),
            log_level: "info".to_string(),
            log_file: None,
            seed: None,
        }
    }
}

fn millis(duration: Duration) -> u64 {
    duration.as_millis() as u64
}

impl Config {
    pub fn load(path: &Path) -> Result<Self, Box<dyn Error>> {
        let text = fs::read_to_string(path)?;
        Ok(toml::from_str(&text)?)
    }

    pub fn is_computer(&self, color: Color) -> bool {
        match color {
            Color::White => self.computer_is_white,
            Color::Black => self.computer_is_black,
        }
    }

    pub fn set_computer(&mut self, color: Color, computer: bool) {
        match color {
            Color::White => self.computer_is_white = computer,
            Color::Black => self.computer_is_black = computer,
        }
    }

    pub fn position(&self) -> Result<ChessPosition, ParseError> {
        ChessPosition::from_str(&self.fen)
    }

    pub fn log_level(&self) -> Result<LevelFilter, Box<dyn Error>> {
        LevelFilter::from_str(&self.log_level)
            .map_err(|_| format!("Unknown log level {:?}", self.log_level).into())
    }

    pub fn controller_settings(&self) -> ControllerSettings {
        ControllerSettings {
            game_duration: Duration::from_millis(self.game_duration_ms),
            idle: IdlePolicy {
                think_delay: Duration::from_millis(self.think_delay_ms),
                frame_interval: Duration::from_millis(self.frame_interval_ms),
                idle_interval: Duration::from_millis(self.idle_interval_ms),
                idle_threshold: Duration::from_millis(self.idle_threshold_ms),
            },
            verbose: self.verbose,
        }
    }
}
