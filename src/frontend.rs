//! Seams between the turn controller and whatever draws the board, plays
//! sounds and collects clicks.

use crate::{Color, Move, Square, controller::GameResult, notation::PreMove};
use std::fmt::{self, Display, Formatter};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Sound {
    Start,
    Move,
    Capture,
    Check,
    Castle,
    Promote,
    Illegal,
    End,
}

impl Sound {
    /// Sound for an applied ply: check, then promotion, then capture, then
    /// castling, then a plain move.
    pub fn for_ply(mov: Move, pre: &PreMove, is_check: bool) -> Self {
        if is_check {
            Self::Check
        } else if mov.is_promotion() {
            Self::Promote
        } else if pre.is_capture(mov) {
            Self::Capture
        } else if pre.is_castling(mov) {
            Self::Castle
        } else {
            Self::Move
        }
    }
}

impl Display for Sound {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Start => "start",
            Self::Move => "move",
            Self::Capture => "capture",
            Self::Check => "check",
            Self::Castle => "castle",
            Self::Promote => "promote",
            Self::Illegal => "illegal",
            Self::End => "end",
        };
        write!(f, "{name}")
    }
}

/// Everything a front end needs to show one applied ply.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlyEvent {
    /// Absolute ply number; even plies are white's.
    pub ply: u32,
    pub mover: Color,
    pub mov: Move,
    /// Move to un-highlight.
    pub previous: Option<Move>,
    pub san: String,
    pub sound: Sound,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameReport {
    pub result: GameResult,
    /// Move history, one line per move number.
    pub transcript: Vec<String>,
}

impl Display for GameReport {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self.result {
            GameResult::Checkmate { winner } => writeln!(f, "{winner} has won the game!")?,
            GameResult::Draw => writeln!(f, "Draw!")?,
        }
        writeln!(f, "Move history:")?;
        for line in &self.transcript {
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}

pub trait Renderer<P: ?Sized> {
    fn game_started(&mut self, _position: &P) {}

    /// `selected` is `None` when the selection was cleared.
    fn selection_changed(&mut self, _position: &P, _selected: Option<Square>, _targets: &[Move]) {}

    fn ply_applied(&mut self, _position: &P, _event: &PlyEvent) {}

    fn illegal_move(&mut self, _position: &P, _from: Square, _to: Square) {}

    fn game_over(&mut self, _report: &GameReport) {}
}

pub trait Audio {
    fn play(&mut self, sound: Sound);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputEvent {
    Select(Square),
    Quit,
}

pub trait Input {
    /// Never blocks.
    fn poll(&mut self) -> Option<InputEvent>;

    /// Blocks until the user names a promotion piece. `None` means quit.
    fn promotion_token(&mut self) -> Option<String>;
}
