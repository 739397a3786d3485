use crate::{ParseError, enum_map::SimpleEnum, unsafe_simple_enum};
use std::{
    fmt::{self, Display, Formatter},
    str::FromStr,
};

/// Board square. Index is `rank * 8 + file`, so `A1 == 0` and `H8 == 63`.
#[rustfmt::skip]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum Square {
    A1, B1, C1, D1, E1, F1, G1, H1,
    A2, B2, C2, D2, E2, F2, G2, H2,
    A3, B3, C3, D3, E3, F3, G3, H3,
    A4, B4, C4, D4, E4, F4, G4, H4,
    A5, B5, C5, D5, E5, F5, G5, H5,
    A6, B6, C6, D6, E6, F6, G6, H6,
    A7, B7, C7, D7, E7, F7, G7, H7,
    A8, B8, C8, D8, E8, F8, G8, H8,
}

unsafe_simple_enum!(Square, 64);

impl Square {
    pub const WIDTH: usize = 8;
    pub const HEIGHT: usize = 8;

    pub const fn from_file_rank(file: usize, rank: usize) -> Self {
        assert!(file < Self::WIDTH && rank < Self::HEIGHT);
        let index = rank * Self::WIDTH + file;
        unsafe { std::mem::transmute(index as u8) }
    }

    pub const fn file(self) -> usize {
        self as usize % Self::WIDTH
    }

    pub const fn rank(self) -> usize {
        self as usize / Self::WIDTH
    }

    /// Row on screen for boards drawn with rank 8 at the top.
    pub const fn display_row(self) -> usize {
        Self::HEIGHT - 1 - self.rank()
    }

    pub const fn file_char(self) -> char {
        (b'a' + self.file() as u8) as char
    }

    pub const fn rank_char(self) -> char {
        (b'1' + self.rank() as u8) as char
    }

    pub const fn add(self, direction: Direction) -> Option<Self> {
        let file = (self.file() as i8).wrapping_add(direction.file);
        let rank = (self.rank() as i8).wrapping_add(direction.rank);
        if file >= 0 && file < Self::WIDTH as i8 && rank >= 0 && rank < Self::HEIGHT as i8 {
            Some(Self::from_file_rank(file as usize, rank as usize))
        } else {
            None
        }
    }

    /// Number of files between two squares.
    pub fn file_distance(self, other: Square) -> usize {
        self.file().abs_diff(other.file())
    }
}

impl Display for Square {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.file_char(), self.rank_char())
    }
}

impl FromStr for Square {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, ParseError> {
        let &[file, rank] = s.as_bytes() else {
            return Err(ParseError);
        };
        if !(b'a'..=b'h').contains(&file) || !(b'1'..=b'8').contains(&rank) {
            return Err(ParseError);
        }
        Ok(Self::from_file_rank(
            usize::from(file - b'a'),
            usize::from(rank - b'1'),
        ))
    }
}

impl From<Square> for u8 {
    fn from(square: Square) -> u8 {
        square as u8
    }
}

impl TryFrom<u8> for Square {
    type Error = ParseError;

    fn try_from(index: u8) -> Result<Self, ParseError> {
        if usize::from(index) < Self::WIDTH * Self::HEIGHT {
            Ok(Self::from_index(index.into()))
        } else {
            Err(ParseError)
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Direction {
    file: i8,
    rank: i8,
}

impl Direction {
    pub const MAX: isize = Square::WIDTH as isize - 1;

    pub const fn new(file: isize, rank: isize) -> Self {
        assert!(file >= -Self::MAX && file <= Self::MAX && rank >= -Self::MAX && rank <= Self::MAX);
        Self {
            file: file as i8,
            rank: rank as i8,
        }
    }

    pub const fn file(self) -> isize {
        self.file as isize
    }

    pub const fn rank(self) -> isize {
        self.rank as isize
    }
}
