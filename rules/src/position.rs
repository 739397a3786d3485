use crate::{
    Board, CastlingRights, CastlingSide, ColoredPiece,
    attacks::{self, pawn_attacks},
    movegen,
};
use chess_client::{Color, Move, ParseError, PieceKind, Position, Square};

/// Full game state: placement, side to move, castling and en passant
/// rights, move clocks and enough history for repetition detection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChessPosition {
    board: Board,
    to_move: Color,
    castling: CastlingRights,
    en_passant: Option<Square>,
    halfmove_clock: u32,
    fullmove_number: u32,
    moves: Vec<Move>,
    /// Positions since the last irreversible move, the current one last.
    repetitions: Vec<RepetitionKey>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
struct RepetitionKey {
    board: Board,
    to_move: Color,
    castling: CastlingRights,
    /// Only set when an en passant capture is available.
    en_passant: Option<Square>,
}

impl ChessPosition {
    pub fn initial() -> Self {
        Self::from_parts(Board::initial(), Color::White, CastlingRights::ALL, None, 0, 1)
    }

    /// Castling rights whose king or rook is not on its starting square are
    /// dropped, as is an en passant square with no pawn behind it.
    pub fn from_parts(
        board: Board,
        to_move: Color,
        mut castling: CastlingRights,
        en_passant: Option<Square>,
        halfmove_clock: u32,
        fullmove_number: u32,
    ) -> Self {
        for color in [Color::White, Color::Black] {
            let rank = color.back_rank();
            let king = Square::from_file_rank(CastlingRights::KING_FILE, rank);
            for side in [CastlingSide::King, CastlingSide::Queen] {
                let rook = Square::from_file_rank(side.rook_file(), rank);
                if board.square(king) != Some(ColoredPiece::new(color, PieceKind::King))
                    || board.square(rook) != Some(ColoredPiece::new(color, PieceKind::Rook))
                {
                    castling.remove(color, side);
                }
            }
        }
        let them = to_move.opposite();
        let (skipped_rank, pawn_rank) = match them {
            Color::White => (2, 3),
            Color::Black => (5, 4),
        };
        let en_passant = en_passant.filter(|&square| {
            square.rank() == skipped_rank
                && board.square(Square::from_file_rank(square.file(), pawn_rank))
                    == Some(ColoredPiece::new(them, PieceKind::Pawn))
        });
        let mut position = Self {
            board,
            to_move,
            castling,
            en_passant,
            halfmove_clock,
            fullmove_number: fullmove_number.max(1),
            moves: Vec::new(),
            repetitions: Vec::new(),
        };
        position.repetitions.push(position.repetition_key());
        position
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn to_move(&self) -> Color {
        self.to_move
    }

    pub fn castling_rights(&self) -> CastlingRights {
        self.castling
    }

    /// Square a pawn skipped over on the previous move.
    pub fn en_passant(&self) -> Option<Square> {
        self.en_passant
    }

    pub fn halfmove_clock(&self) -> u32 {
        self.halfmove_clock
    }

    pub fn fullmove_number(&self) -> u32 {
        self.fullmove_number
    }

    /// Moves applied since this position was created.
    pub fn moves(&self) -> &[Move] {
        &self.moves
    }

    pub fn legal_moves(&self) -> Vec<Move> {
        let mut moves = movegen::pseudo_moves(self);
        moves.retain(|&mov| self.keeps_king_safe(mov));
        moves
    }

    pub fn is_legal(&self, mov: Move) -> bool {
        self.legal_moves().contains(&mov)
    }

    /// Finds a legal move by its long algebraic form, e.g. `e2e4` or `e7e8q`.
    pub fn parse_move(&self, s: &str) -> Result<Move, ParseError> {
        self.legal_moves()
            .into_iter()
            .find(|mov| mov.to_string() == s)
            .ok_or(ParseError)
    }

    pub fn in_check(&self) -> bool {
        self.board
            .king(self.to_move)
            .is_some_and(|king| attacks::is_attacked(&self.board, king, self.to_move.opposite()))
    }

    pub fn is_stalemate(&self) -> bool {
        !self.in_check() && self.legal_moves().is_empty()
    }

    /// Bare kings, or a single minor piece against a bare king.
    pub fn is_insufficient_material(&self) -> bool {
        let others: Vec<PieceKind> = self
            .board
            .occupied()
            .iter()
            .filter_map(|square| self.board.square(square))
            .map(|piece| piece.kind)
            .filter(|&kind| kind != PieceKind::King)
            .collect();
        match others.as_slice() {
            [] => true,
            [kind] => matches!(kind, PieceKind::Bishop | PieceKind::Knight),
            _ => false,
        }
    }

    pub fn is_fifty_move_draw(&self) -> bool {
        self.halfmove_clock >= 100
    }

    pub fn is_threefold_repetition(&self) -> bool {
        let Some(current) = self.repetitions.last() else {
            return false;
        };
        self.repetitions.iter().filter(|&key| key == current).count() >= 3
    }

    fn keeps_king_safe(&self, mov: Move) -> bool {
        let board = self.board_after(mov);
        board
            .king(self.to_move)
            .is_none_or(|king| !attacks::is_attacked(&board, king, self.to_move.opposite()))
    }

    /// Placement after `mov`, including the rook of a castling move and the
    /// pawn taken en passant.
    fn board_after(&self, mov: Move) -> Board {
        let mut board = self.board;
        let (from, to) = (mov.from(), mov.to());
        let Some(piece) = board.take(from) else {
            return board;
        };
        match piece.kind {
            PieceKind::Pawn if from.file() != to.file() && board.square(to).is_none() => {
                _ = board.take(Square::from_file_rank(to.file(), from.rank()));
            }
            PieceKind::King if from.file_distance(to) == 2 => {
                let side = CastlingSide::from_king_target_file(to.file());
                let rank = from.rank();
                if let Some(rook) = board.take(Square::from_file_rank(side.rook_file(), rank)) {
                    _ = board.put(Square::from_file_rank(side.rook_target_file(), rank), rook);
                }
            }
            _ => {}
        }
        let placed = if mov.is_promotion() {
            ColoredPiece::new(piece.color, mov.promotion_piece().into())
        } else {
            piece
        };
        _ = board.put(to, placed);
        board
    }

    fn repetition_key(&self) -> RepetitionKey {
        let capturers = self
            .board
            .pieces(ColoredPiece::new(self.to_move, PieceKind::Pawn));
        let en_passant = self.en_passant.filter(|&square| {
            !(pawn_attacks(self.to_move.opposite(), square) & capturers).is_empty()
        });
        RepetitionKey {
            board: self.board,
            to_move: self.to_move,
            castling: self.castling,
            en_passant,
        }
    }
}

impl Default for ChessPosition {
    fn default() -> Self {
        Self::initial()
    }
}

impl Position for ChessPosition {
    fn piece_kind_at(&self, square: Square) -> Option<PieceKind> {
        self.board.square(square).map(|piece| piece.kind)
    }

    fn color_to_move_owns_square(&self, square: Square) -> bool {
        self.board
            .square(square)
            .is_some_and(|piece| piece.color == self.to_move)
    }

    fn legal_moves_from(&self, square: Square) -> Vec<Move> {
        let mut moves = self.legal_moves();
        moves.retain(|mov| mov.from() == square);
        moves
    }

    fn all_legal_moves(&self) -> Vec<Move> {
        self.legal_moves()
    }

    fn apply_move(&mut self, mov: Move) {
        let (from, to) = (mov.from(), mov.to());
        let moving = self.board.square(from);
        let is_pawn = moving.is_some_and(|piece| piece.kind == PieceKind::Pawn);
        let is_capture =
            self.board.square(to).is_some() || (is_pawn && from.file() != to.file());
        let castling_before = self.castling;

        self.board = self.board_after(mov);
        self.castling.touch(from);
        self.castling.touch(to);
        self.en_passant = if is_pawn && from.rank().abs_diff(to.rank()) == 2 {
            Some(Square::from_file_rank(from.file(), (from.rank() + to.rank()) / 2))
        } else {
            None
        };
        if is_pawn || is_capture {
            self.halfmove_clock = 0;
        } else {
            self.halfmove_clock += 1;
        }
        if self.to_move == Color::Black {
            self.fullmove_number += 1;
        }
        self.to_move = self.to_move.opposite();
        self.moves.push(mov);

        if is_pawn || is_capture || self.castling != castling_before {
            self.repetitions.clear();
        }
        let key = self.repetition_key();
        self.repetitions.push(key);
    }

    fn is_check(&self) -> bool {
        self.in_check()
    }

    fn is_checkmate(&self) -> bool {
        self.in_check() && self.legal_moves().is_empty()
    }

    fn is_draw(&self) -> bool {
        self.is_insufficient_material()
            || self.is_fifty_move_draw()
            || self.is_threefold_repetition()
            || self.is_stalemate()
    }

    fn last_applied_move(&self) -> Option<Move> {
        self.moves.last().copied()
    }

    fn side_to_move(&self) -> Color {
        self.to_move
    }

    fn ply(&self) -> u32 {
        (self.fullmove_number - 1) * 2 + u32::from(self.to_move == Color::Black)
    }
}
