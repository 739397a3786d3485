mod audio;
mod config;
mod input;
mod text;

pub use audio::TerminalAudio;
pub use config::Config;
pub use input::{LineInput, ParsedLine, parse_line};
pub use text::TextRenderer;
