//! Standard algebraic notation for a single ply.

use crate::{Bitboard, Move, PieceKind, Position, Square};
use std::fmt::Write;

/// Appended to the SAN of a move that leaves a drawn position.
pub const DRAW_MARKER: &str = " 1/2-1/2";

/// What the position looked like before the move was applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PreMove {
    /// Piece on the origin square.
    pub moving: PieceKind,
    /// Piece on the destination square, `None` if it was empty.
    pub captured: Option<PieceKind>,
    /// Origins of every legal move by a piece of the moving kind to the
    /// same destination, the moving piece included.
    pub attackers: Bitboard,
}

impl PreMove {
    pub fn query<P: Position + ?Sized>(position: &P, mov: Move) -> Option<Self> {
        let moving = position.piece_kind_at(mov.from())?;
        Some(Self {
            moving,
            captured: position.piece_kind_at(mov.to()),
            attackers: attackers(position, mov.to(), moving),
        })
    }

    /// King moving two files.
    pub fn is_castling(&self, mov: Move) -> bool {
        self.moving == PieceKind::King && mov.from().file_distance(mov.to()) == 2
    }

    /// A pawn changing file onto an empty square is an en passant capture.
    pub fn is_capture(&self, mov: Move) -> bool {
        self.captured.is_some()
            || (self.moving == PieceKind::Pawn && mov.from().file() != mov.to().file())
    }
}

/// End-of-ply marker, read from the position after the move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Suffix {
    None,
    Check,
    Checkmate,
    Draw,
}

impl Suffix {
    pub fn of<P: Position + ?Sized>(position: &P) -> Self {
        if position.is_checkmate() {
            Self::Checkmate
        } else if position.is_draw() {
            Self::Draw
        } else if position.is_check() {
            Self::Check
        } else {
            Self::None
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::None => "",
            Self::Check => "+",
            Self::Checkmate => "#",
            Self::Draw => DRAW_MARKER,
        }
    }
}

/// Origin squares of all legal moves to `to` made by pieces of `kind`.
pub fn attackers<P: Position + ?Sized>(position: &P, to: Square, kind: PieceKind) -> Bitboard {
    position
        .all_legal_moves()
        .into_iter()
        .filter(|mov| mov.to() == to && position.piece_kind_at(mov.from()) == Some(kind))
        .map(Move::from)
        .collect()
}

/// Castling gets the check, mate and draw suffixes like any other move.
pub fn san(mov: Move, pre: &PreMove, suffix: Suffix) -> String {
    let from = mov.from();
    let to = mov.to();
    let mut san = String::new();

    if pre.is_castling(mov) {
        san.push_str(if to.file() > from.file() {
            "O-O"
        } else {
            "O-O-O"
        });
    } else if pre.moving == PieceKind::Pawn {
        if pre.is_capture(mov) {
            san.push(from.file_char());
            san.push('x');
        }
        push_square(&mut san, to);
        let last_rank = to.rank() == 0 || to.rank() == Square::HEIGHT - 1;
        if mov.is_promotion() || last_rank {
            san.push('=');
            san.push(mov.promotion_piece().letter());
        }
    } else {
        san.extend(pre.moving.letter());
        push_disambiguation(&mut san, from, pre.attackers);
        if pre.captured.is_some() {
            san.push('x');
        }
        push_square(&mut san, to);
    }

    san.push_str(suffix.as_str());
    san
}

fn push_square(san: &mut String, square: Square) {
    _ = write!(san, "{square}");
}

fn push_disambiguation(san: &mut String, from: Square, attackers: Bitboard) {
    if attackers.count() <= 1 {
        return;
    }
    let mut others = attackers;
    others.remove(from);
    let same_file = others.count_on_file(from.file()) > 0;
    let same_rank = others.count_on_rank(from.rank()) > 0;
    if same_file && same_rank {
        san.push(from.file_char());
        san.push(from.rank_char());
    } else if same_file {
        san.push(from.rank_char());
    } else {
        san.push(from.file_char());
    }
}
