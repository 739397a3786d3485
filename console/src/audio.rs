use chess_client::frontend::{Audio, Sound};
use std::io::{self, Write};

/// Logs every cue and rings the terminal bell for the ones that need
/// attention.
#[derive(Debug, Default)]
pub struct TerminalAudio {
    bell: bool,
}

impl TerminalAudio {
    pub fn new(bell: bool) -> Self {
        Self { bell }
    }
}

impl Audio for TerminalAudio {
    fn play(&mut self, sound: Sound) {
        log::debug!("Sound: {sound}");
        if self.bell && matches!(sound, Sound::Illegal | Sound::End) {
            let mut stdout = io::stdout();
            if let Err(e) = stdout.write_all(b"\x07").and_then(|()| stdout.flush()) {
                log::warn!("Bell failed: {e}");
            }
        }
    }
}
