use crate::ColoredPiece;
use chess_client::{
    Bitboard, Color, PieceKind, Square,
    enum_map::{EnumMap, SimpleEnumExt},
};
use std::fmt::{self, Display, Formatter};

/// Piece placement, indexed both by square and by piece.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board {
    squares: EnumMap<Square, Option<ColoredPiece>>,
    pieces: EnumMap<Color, EnumMap<PieceKind, Bitboard>>,
}

impl Board {
    pub fn empty() -> Self {
        Self {
            squares: EnumMap::from_fn(|_| None),
            pieces: EnumMap::from_fn(|_| EnumMap::from_fn(|_| Bitboard::EMPTY)),
        }
    }

    pub fn initial() -> Self {
        const BACK_RANK: [PieceKind; 8] = [
            PieceKind::Rook,
            PieceKind::Knight,
            PieceKind::Bishop,
            PieceKind::Queen,
            PieceKind::King,
            PieceKind::Bishop,
            PieceKind::Knight,
            PieceKind::Rook,
        ];
        let mut board = Self::empty();
        for color in Color::all() {
            let back_rank = color.back_rank();
            let pawn_rank = match color {
                Color::White => back_rank + 1,
                Color::Black => back_rank - 1,
            };
            for (file, kind) in BACK_RANK.into_iter().enumerate() {
                _ = board.put(
                    Square::from_file_rank(file, back_rank),
                    ColoredPiece::new(color, kind),
                );
                _ = board.put(
                    Square::from_file_rank(file, pawn_rank),
                    ColoredPiece::new(color, PieceKind::Pawn),
                );
            }
        }
        board
    }

    pub fn square(&self, square: Square) -> Option<ColoredPiece> {
        self.squares[square]
    }

    pub fn pieces(&self, piece: ColoredPiece) -> Bitboard {
        self.pieces[piece.color][piece.kind]
    }

    pub fn occupied_by(&self, color: Color) -> Bitboard {
        self.pieces[color]
            .iter()
            .fold(Bitboard::EMPTY, |acc, (_, &bitboard)| acc | bitboard)
    }

    pub fn occupied(&self) -> Bitboard {
        self.occupied_by(Color::White) | self.occupied_by(Color::Black)
    }

    pub fn king(&self, color: Color) -> Option<Square> {
        self.pieces(ColoredPiece::new(color, PieceKind::King))
            .iter()
            .next()
    }

    /// Places `piece` on `square`, returning whatever was there.
    pub fn put(&mut self, square: Square, piece: ColoredPiece) -> Option<ColoredPiece> {
        let previous = self.take(square);
        self.squares[square] = Some(piece);
        self.pieces[piece.color][piece.kind].add(square);
        previous
    }

    pub fn take(&mut self, square: Square) -> Option<ColoredPiece> {
        let piece = self.squares[square].take()?;
        self.pieces[piece.color][piece.kind].remove(square);
        Some(piece)
    }
}

/// Rank 8 on top, `.` for empty squares.
impl Display for Board {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for rank in (0..Square::HEIGHT).rev() {
            for file in 0..Square::WIDTH {
                match self.square(Square::from_file_rank(file, rank)) {
                    Some(piece) => write!(f, "{piece}")?,
                    None => write!(f, ".")?,
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
