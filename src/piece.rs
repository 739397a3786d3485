use crate::{MoveError, unsafe_simple_enum};
use std::{
    fmt::{self, Display, Formatter},
    str::FromStr,
};

/// Kind of a piece, independent of color.
///
/// Externally a kind is a small integer: 0 for an empty square, 1..=6 for
/// pawn through king. `Option<PieceKind>` is the in-crate form of that code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

unsafe_simple_enum!(PieceKind, 6);

impl PieceKind {
    pub fn code(self) -> u8 {
        self as u8 + 1
    }

    /// Panics on codes above 6.
    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            0 => None,
            1 => Some(Self::Pawn),
            2 => Some(Self::Knight),
            3 => Some(Self::Bishop),
            4 => Some(Self::Rook),
            5 => Some(Self::Queen),
            6 => Some(Self::King),
            _ => panic!("Invalid piece code {code}"),
        }
    }

    /// SAN letter. Pawns have none.
    pub fn letter(self) -> Option<char> {
        match self {
            Self::Pawn => None,
            Self::Knight => Some('N'),
            Self::Bishop => Some('B'),
            Self::Rook => Some('R'),
            Self::Queen => Some('Q'),
            Self::King => Some('K'),
        }
    }
}

impl From<PromotionPiece> for PieceKind {
    fn from(piece: PromotionPiece) -> Self {
        match piece {
            PromotionPiece::Knight => Self::Knight,
            PromotionPiece::Bishop => Self::Bishop,
            PromotionPiece::Rook => Self::Rook,
            PromotionPiece::Queen => Self::Queen,
        }
    }
}

/// Piece a pawn promotes to, with its 2-bit move code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum PromotionPiece {
    Knight,
    Bishop,
    Rook,
    Queen,
}

unsafe_simple_enum!(PromotionPiece, 4);

impl PromotionPiece {
    pub fn code(self) -> u8 {
        self as u8
    }

    /// Only the low two bits are used.
    pub fn from_code(code: u8) -> Self {
        match code & 0b11 {
            0 => Self::Knight,
            1 => Self::Bishop,
            2 => Self::Rook,
            _ => Self::Queen,
        }
    }

    pub fn letter(self) -> char {
        match self {
            Self::Knight => 'N',
            Self::Bishop => 'B',
            Self::Rook => 'R',
            Self::Queen => 'Q',
        }
    }
}

impl Display for PromotionPiece {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

impl FromStr for PromotionPiece {
    type Err = MoveError;

    fn from_str(s: &str) -> Result<Self, MoveError> {
        match s.trim().to_ascii_lowercase().as_str() {
            "q" => Ok(Self::Queen),
            "r" => Ok(Self::Rook),
            "b" => Ok(Self::Bishop),
            "n" => Ok(Self::Knight),
            _ => Err(MoveError::AmbiguousPromotionInput(s.to_string())),
        }
    }
}
