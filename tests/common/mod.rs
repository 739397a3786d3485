#![allow(dead_code)]

use chess_client::{
    AutomatedPlayer, Color, Move, PieceKind, Position, Square,
    clock::Timer,
    enum_map::EnumMap,
    frontend::{Audio, GameReport, Input, InputEvent, PlyEvent, Renderer, Sound},
    notation::Suffix,
};
use std::collections::{HashMap, VecDeque};

/// Board with a fixed list of candidate moves. A candidate is legal when its
/// origin holds a piece of the side to move and its destination does not.
/// Check, mate and draw are scripted by the number of moves applied.
#[derive(Debug, Clone)]
pub struct FakePosition {
    pieces: EnumMap<Square, Option<(Color, PieceKind)>>,
    to_move: Color,
    candidates: Vec<Move>,
    verdicts: HashMap<usize, Suffix>,
    pub applied: Vec<Move>,
    start_ply: u32,
}

impl FakePosition {
    pub fn new(to_move: Color, pieces: &[(Square, Color, PieceKind)], candidates: &[Move]) -> Self {
        let mut map = EnumMap::from_fn(|_| None);
        for &(square, color, kind) in pieces {
            map[square] = Some((color, kind));
        }
        Self {
            pieces: map,
            to_move,
            candidates: candidates.to_vec(),
            verdicts: HashMap::new(),
            applied: Vec::new(),
            start_ply: match to_move {
                Color::White => 0,
                Color::Black => 1,
            },
        }
    }

    /// Marks the position after `applied` moves.
    pub fn with_verdict(mut self, applied: usize, suffix: Suffix) -> Self {
        _ = self.verdicts.insert(applied, suffix);
        self
    }

    pub fn with_start_ply(mut self, ply: u32) -> Self {
        self.start_ply = ply;
        self
    }

    pub fn piece(&self, square: Square) -> Option<(Color, PieceKind)> {
        self.pieces[square]
    }

    fn verdict(&self) -> Suffix {
        self.verdicts
            .get(&self.applied.len())
            .copied()
            .unwrap_or(Suffix::None)
    }
}

impl Position for FakePosition {
    fn piece_kind_at(&self, square: Square) -> Option<PieceKind> {
        self.pieces[square].map(|(_, kind)| kind)
    }

    fn color_to_move_owns_square(&self, square: Square) -> bool {
        matches!(self.pieces[square], Some((color, _)) if color == self.to_move)
    }

    fn legal_moves_from(&self, square: Square) -> Vec<Move> {
        self.all_legal_moves()
            .into_iter()
            .filter(|mov| mov.from() == square)
            .collect()
    }

    fn all_legal_moves(&self) -> Vec<Move> {
        if matches!(self.verdict(), Suffix::Checkmate | Suffix::Draw) {
            return Vec::new();
        }
        self.candidates
            .iter()
            .copied()
            .filter(|mov| {
                self.color_to_move_owns_square(mov.from())
                    && !self.color_to_move_owns_square(mov.to())
            })
            .collect()
    }

    fn apply_move(&mut self, mov: Move) {
        let mut piece = self.pieces[mov.from()].take();
        if mov.is_promotion() {
            piece = piece.map(|(color, _)| (color, mov.promotion_piece().into()));
        }
        self.pieces[mov.to()] = piece;
        self.to_move = self.to_move.opposite();
        self.applied.push(mov);
    }

    fn is_check(&self) -> bool {
        matches!(self.verdict(), Suffix::Check | Suffix::Checkmate)
    }

    fn is_checkmate(&self) -> bool {
        self.verdict() == Suffix::Checkmate
    }

    fn is_draw(&self) -> bool {
        self.verdict() == Suffix::Draw
    }

    fn last_applied_move(&self) -> Option<Move> {
        self.applied.last().copied()
    }

    fn side_to_move(&self) -> Color {
        self.to_move
    }

    fn ply(&self) -> u32 {
        self.start_ply + self.applied.len() as u32
    }
}

/// Replays a script of polls, then asks to quit.
#[derive(Debug, Default)]
pub struct ScriptedInput {
    events: VecDeque<Option<InputEvent>>,
    tokens: VecDeque<String>,
    pub prompts: usize,
}

impl ScriptedInput {
    pub fn clicks(squares: &[Square]) -> Self {
        Self {
            events: squares.iter().map(|&s| Some(InputEvent::Select(s))).collect(),
            tokens: VecDeque::new(),
            prompts: 0,
        }
    }

    pub fn with_tokens(mut self, tokens: &[&str]) -> Self {
        self.tokens = tokens.iter().map(|t| t.to_string()).collect();
        self
    }

    /// Polls that find nothing pending. An automated turn with no think
    /// delay polls once.
    pub fn idle(mut self, polls: usize) -> Self {
        self.events.extend(std::iter::repeat_n(None, polls));
        self
    }

    pub fn then_quit(mut self) -> Self {
        self.events.push_back(Some(InputEvent::Quit));
        self
    }
}

impl Input for ScriptedInput {
    fn poll(&mut self) -> Option<InputEvent> {
        self.events.pop_front().unwrap_or(Some(InputEvent::Quit))
    }

    fn promotion_token(&mut self) -> Option<String> {
        self.prompts += 1;
        self.tokens.pop_front()
    }
}

#[derive(Debug, Default)]
pub struct RecordingRenderer {
    pub started: usize,
    pub selections: Vec<Option<Square>>,
    pub plies: Vec<PlyEvent>,
    pub illegal: Vec<(Square, Square)>,
    pub reports: Vec<GameReport>,
}

impl<P> Renderer<P> for RecordingRenderer {
    fn game_started(&mut self, _position: &P) {
        self.started += 1;
    }

    fn selection_changed(&mut self, _position: &P, selected: Option<Square>, _targets: &[Move]) {
        self.selections.push(selected);
    }

    fn ply_applied(&mut self, _position: &P, event: &PlyEvent) {
        self.plies.push(event.clone());
    }

    fn illegal_move(&mut self, _position: &P, from: Square, to: Square) {
        self.illegal.push((from, to));
    }

    fn game_over(&mut self, report: &GameReport) {
        self.reports.push(report.clone());
    }
}

#[derive(Debug, Default)]
pub struct RecordingAudio {
    pub sounds: Vec<Sound>,
}

impl Audio for RecordingAudio {
    fn play(&mut self, sound: Sound) {
        self.sounds.push(sound);
    }
}

#[derive(Debug)]
pub struct ScriptedPlayer {
    moves: VecDeque<Move>,
}

impl ScriptedPlayer {
    pub fn new(moves: &[Move]) -> Self {
        Self {
            moves: moves.iter().copied().collect(),
        }
    }
}

impl<P> AutomatedPlayer<P> for ScriptedPlayer {
    fn choose_move(&mut self, _position: &P, timer: &Timer, _verbose: bool) -> Move {
        assert!(timer.is_running());
        self.moves.pop_front().expect("script exhausted")
    }
}

pub fn mv(from: Square, to: Square) -> Move {
    Move::normal(from, to).unwrap()
}
