use crate::{ParseError, unsafe_simple_enum};
use std::{
    fmt::{self, Display, Formatter},
    str::FromStr,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Color {
    White,
    Black,
}

unsafe_simple_enum!(Color, 2);

impl Color {
    pub fn opposite(self) -> Self {
        match self {
            Self::White => Self::Black,
            Self::Black => Self::White,
        }
    }

    /// Rank a pawn of this color promotes on.
    pub fn promotion_rank(self) -> usize {
        match self {
            Self::White => 7,
            Self::Black => 0,
        }
    }

    pub fn back_rank(self) -> usize {
        self.opposite().promotion_rank()
    }
}

impl Display for Color {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::White => "white",
            Self::Black => "black",
        };
        write!(f, "{name}")
    }
}

impl FromStr for Color {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, ParseError> {
        match s {
            "white" => Ok(Self::White),
            "black" => Ok(Self::Black),
            _ => Err(ParseError),
        }
    }
}
