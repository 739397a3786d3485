use crate::{
    Board, CastlingSide, ChessPosition, ColoredPiece,
    attacks::{self, pawn_forward},
};
use chess_client::{Color, Direction, Move, PieceKind, PromotionPiece, Square, enum_map::SimpleEnumExt};

/// Moves that obey piece movement but may leave the mover's king attacked.
/// Castling is only generated when the king does not start in or pass
/// through check.
pub fn pseudo_moves(position: &ChessPosition) -> Vec<Move> {
    let board = position.board();
    let us = position.to_move();
    let own = board.occupied_by(us);
    let occupied = board.occupied();
    let mut moves = Vec::new();
    for from in own.iter() {
        let Some(piece) = board.square(from) else {
            continue;
        };
        match piece.kind {
            PieceKind::Pawn => pawn_moves(position, from, &mut moves),
            kind => {
                let targets = attacks::piece_attacks(piece, from, occupied) & !own;
                moves.extend(targets.iter().filter_map(|to| Move::normal(from, to).ok()));
                if kind == PieceKind::King {
                    castling_moves(position, from, &mut moves);
                }
            }
        }
    }
    moves
}

fn pawn_moves(position: &ChessPosition, from: Square, moves: &mut Vec<Move>) {
    let board = position.board();
    let us = position.to_move();
    let forward = pawn_forward(us);

    if let Some(to) = from.add(Direction::new(0, forward))
        && board.square(to).is_none()
    {
        push_pawn_move(us, from, to, moves);
        let start_rank = match us {
            Color::White => 1,
            Color::Black => 6,
        };
        if from.rank() == start_rank
            && let Some(to2) = to.add(Direction::new(0, forward))
            && board.square(to2).is_none()
        {
            moves.extend(Move::normal(from, to2));
        }
    }

    let enemies = board.occupied_by(us.opposite());
    for to in attacks::pawn_attacks(us, from).iter() {
        if enemies.contains(to) || position.en_passant() == Some(to) {
            push_pawn_move(us, from, to, moves);
        }
    }
}

fn push_pawn_move(us: Color, from: Square, to: Square, moves: &mut Vec<Move>) {
    if to.rank() == us.promotion_rank() {
        for piece in PromotionPiece::all() {
            moves.extend(Move::encode(from, to, false, Some(piece), true));
        }
    } else {
        moves.extend(Move::normal(from, to));
    }
}

fn castling_moves(position: &ChessPosition, from: Square, moves: &mut Vec<Move>) {
    let board = position.board();
    let us = position.to_move();
    let them = us.opposite();
    let rank = us.back_rank();
    if from != Square::from_file_rank(crate::CastlingRights::KING_FILE, rank)
        || attacks::is_attacked(board, from, them)
    {
        return;
    }
    for side in CastlingSide::all() {
        if !position.castling_rights().has(us, side) {
            continue;
        }
        let rook_square = Square::from_file_rank(side.rook_file(), rank);
        if board.square(rook_square) != Some(ColoredPiece::new(us, PieceKind::Rook)) {
            continue;
        }
        if !path_is_clear(board, from, rook_square) {
            continue;
        }
        let passed = Square::from_file_rank(side.rook_target_file(), rank);
        if attacks::is_attacked(board, passed, them) {
            continue;
        }
        let to = Square::from_file_rank(side.king_target_file(), rank);
        moves.extend(Move::encode(from, to, true, None, false));
    }
}

/// No pieces strictly between two squares on the same rank.
fn path_is_clear(board: &Board, a: Square, b: Square) -> bool {
    let (low, high) = (a.file().min(b.file()), a.file().max(b.file()));
    (low + 1..high).all(|file| board.square(Square::from_file_rank(file, a.rank())).is_none())
}
