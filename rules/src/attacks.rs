//! Attack sets. Leapers use precomputed tables, sliders walk rays.

use crate::{Board, ColoredPiece};
use chess_client::{Bitboard, Color, Direction, PieceKind, Square, enum_map::SimpleEnum};

const NUM_SQUARES: usize = Square::WIDTH * Square::HEIGHT;

const KNIGHT_DIRECTIONS: [Direction; 8] = [
    Direction::new(1, 2),
    Direction::new(2, 1),
    Direction::new(2, -1),
    Direction::new(1, -2),
    Direction::new(-1, -2),
    Direction::new(-2, -1),
    Direction::new(-2, 1),
    Direction::new(-1, 2),
];

const KING_DIRECTIONS: [Direction; 8] = [
    Direction::new(0, 1),
    Direction::new(1, 1),
    Direction::new(1, 0),
    Direction::new(1, -1),
    Direction::new(0, -1),
    Direction::new(-1, -1),
    Direction::new(-1, 0),
    Direction::new(-1, 1),
];

pub const ROOK_DIRECTIONS: [Direction; 4] = [
    Direction::new(0, 1),
    Direction::new(1, 0),
    Direction::new(0, -1),
    Direction::new(-1, 0),
];

pub const BISHOP_DIRECTIONS: [Direction; 4] = [
    Direction::new(1, 1),
    Direction::new(1, -1),
    Direction::new(-1, -1),
    Direction::new(-1, 1),
];

static KNIGHT_ATTACKS: [Bitboard; NUM_SQUARES] = leaper_table(&KNIGHT_DIRECTIONS);
static KING_ATTACKS: [Bitboard; NUM_SQUARES] = leaper_table(&KING_DIRECTIONS);

const fn leaper_table(directions: &[Direction]) -> [Bitboard; NUM_SQUARES] {
    let mut table = [Bitboard::EMPTY; NUM_SQUARES];
    let mut index = 0;
    while index != NUM_SQUARES {
        let square = Square::from_file_rank(index % Square::WIDTH, index / Square::WIDTH);
        let mut bitboard = Bitboard::EMPTY;
        let mut i = 0;
        while i != directions.len() {
            if let Some(target) = square.add(directions[i]) {
                bitboard = bitboard.with_square(target);
            }
            i += 1;
        }
        table[index] = bitboard;
        index += 1;
    }
    table
}

pub fn knight_attacks(square: Square) -> Bitboard {
    KNIGHT_ATTACKS[square.index()]
}

pub fn king_attacks(square: Square) -> Bitboard {
    KING_ATTACKS[square.index()]
}

/// Squares a pawn of `color` on `square` attacks.
pub fn pawn_attacks(color: Color, square: Square) -> Bitboard {
    let forward = pawn_forward(color);
    [Direction::new(-1, forward), Direction::new(1, forward)]
        .into_iter()
        .filter_map(|direction| square.add(direction))
        .collect()
}

pub fn pawn_forward(color: Color) -> isize {
    match color {
        Color::White => 1,
        Color::Black => -1,
    }
}

/// Each ray stops at the first occupied square, which is included.
pub fn ray_attacks(square: Square, directions: &[Direction], occupied: Bitboard) -> Bitboard {
    let mut attacks = Bitboard::EMPTY;
    for &direction in directions {
        let mut current = square;
        while let Some(next) = current.add(direction) {
            attacks.add(next);
            if occupied.contains(next) {
                break;
            }
            current = next;
        }
    }
    attacks
}

pub fn bishop_attacks(square: Square, occupied: Bitboard) -> Bitboard {
    ray_attacks(square, &BISHOP_DIRECTIONS, occupied)
}

pub fn rook_attacks(square: Square, occupied: Bitboard) -> Bitboard {
    ray_attacks(square, &ROOK_DIRECTIONS, occupied)
}

pub fn queen_attacks(square: Square, occupied: Bitboard) -> Bitboard {
    bishop_attacks(square, occupied) | rook_attacks(square, occupied)
}

/// Squares attacked by the piece on `square`, given the board's occupancy.
pub fn piece_attacks(piece: ColoredPiece, square: Square, occupied: Bitboard) -> Bitboard {
    match piece.kind {
        PieceKind::Pawn => pawn_attacks(piece.color, square),
        PieceKind::Knight => knight_attacks(square),
        PieceKind::Bishop => bishop_attacks(square, occupied),
        PieceKind::Rook => rook_attacks(square, occupied),
        PieceKind::Queen => queen_attacks(square, occupied),
        PieceKind::King => king_attacks(square),
    }
}

pub fn is_attacked(board: &Board, square: Square, by: Color) -> bool {
    let occupied = board.occupied();
    let pieces = |kind| board.pieces(ColoredPiece::new(by, kind));
    let diagonal = pieces(PieceKind::Bishop) | pieces(PieceKind::Queen);
    let straight = pieces(PieceKind::Rook) | pieces(PieceKind::Queen);
    !(knight_attacks(square) & pieces(PieceKind::Knight)).is_empty()
        || !(king_attacks(square) & pieces(PieceKind::King)).is_empty()
        || !(pawn_attacks(by.opposite(), square) & pieces(PieceKind::Pawn)).is_empty()
        || !(bishop_attacks(square, occupied) & diagonal).is_empty()
        || !(rook_attacks(square, occupied) & straight).is_empty()
}
