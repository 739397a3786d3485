use chess_client::{Color, ParseError, Square, unsafe_simple_enum};
use std::{
    fmt::{self, Display, Formatter},
    str::FromStr,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum CastlingSide {
    King,
    Queen,
}

unsafe_simple_enum!(CastlingSide, 2);

impl CastlingSide {
    pub fn rook_file(self) -> usize {
        match self {
            Self::King => 7,
            Self::Queen => 0,
        }
    }

    pub fn king_target_file(self) -> usize {
        match self {
            Self::King => 6,
            Self::Queen => 2,
        }
    }

    pub fn rook_target_file(self) -> usize {
        match self {
            Self::King => 5,
            Self::Queen => 3,
        }
    }

    /// Side of a castling move whose king lands on `file`.
    pub fn from_king_target_file(file: usize) -> Self {
        if file > 4 { Self::King } else { Self::Queen }
    }
}

/// Which castling moves are still allowed, in FEN order `KQkq`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct CastlingRights(u8);

impl CastlingRights {
    pub const NONE: Self = Self(0);
    pub const ALL: Self = Self(0b1111);

    /// The king starts on the e-file.
    pub const KING_FILE: usize = 4;

    fn bit(color: Color, side: CastlingSide) -> u8 {
        let shift = match (color, side) {
            (Color::White, CastlingSide::King) => 0,
            (Color::White, CastlingSide::Queen) => 1,
            (Color::Black, CastlingSide::King) => 2,
            (Color::Black, CastlingSide::Queen) => 3,
        };
        1 << shift
    }

    pub fn has(self, color: Color, side: CastlingSide) -> bool {
        self.0 & Self::bit(color, side) != 0
    }

    pub fn add(&mut self, color: Color, side: CastlingSide) {
        self.0 |= Self::bit(color, side);
    }

    pub fn remove(&mut self, color: Color, side: CastlingSide) {
        self.0 &= !Self::bit(color, side);
    }

    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Drops the rights that depend on a piece standing on `square`. Called
    /// for both ends of every move.
    pub fn touch(&mut self, square: Square) {
        for color in [Color::White, Color::Black] {
            if square.rank() != color.back_rank() {
                continue;
            }
            for side in [CastlingSide::King, CastlingSide::Queen] {
                if square.file() == Self::KING_FILE || square.file() == side.rook_file() {
                    self.remove(color, side);
                }
            }
        }
    }
}

impl Display for CastlingRights {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return write!(f, "-");
        }
        for (color, side, c) in FEN_ORDER {
            if self.has(color, side) {
                write!(f, "{c}")?;
            }
        }
        Ok(())
    }
}

impl FromStr for CastlingRights {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, ParseError> {
        let mut rights = Self::NONE;
        if s == "-" {
            return Ok(rights);
        }
        if s.is_empty() {
            return Err(ParseError);
        }
        for c in s.chars() {
            let &(color, side, _) = FEN_ORDER
                .iter()
                .find(|&&(_, _, letter)| letter == c)
                .ok_or(ParseError)?;
            rights.add(color, side);
        }
        Ok(rights)
    }
}

const FEN_ORDER: [(Color, CastlingSide, char); 4] = [
    (Color::White, CastlingSide::King, 'K'),
    (Color::White, CastlingSide::Queen, 'Q'),
    (Color::Black, CastlingSide::King, 'k'),
    (Color::Black, CastlingSide::Queen, 'q'),
];
