use std::time::Duration;

pub const START_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

pub const DEFAULT_GAME_DURATION: Duration = Duration::from_secs(60);

/// Pause before each automated move, during which quit is still honored.
pub const DEFAULT_THINK_DELAY: Duration = Duration::from_millis(500);
pub const DEFAULT_FRAME_INTERVAL: Duration = Duration::from_millis(33);
pub const DEFAULT_IDLE_INTERVAL: Duration = Duration::from_millis(50);
pub const DEFAULT_IDLE_THRESHOLD: Duration = Duration::from_millis(200);
