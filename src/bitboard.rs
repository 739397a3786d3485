use crate::{Square, enum_map::SimpleEnum};
use std::{
    fmt::{self, Display, Formatter},
    ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign, Not},
};

/// Set of squares.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Bitboard(u64);

impl Bitboard {
    pub const EMPTY: Self = Self(0);

    pub const fn single(square: Square) -> Self {
        Self(1 << (square as u8))
    }

    pub const fn from_bits(bits: u64) -> Self {
        Self(bits)
    }

    pub const fn bits(self) -> u64 {
        self.0
    }

    pub const fn contains(self, square: Square) -> bool {
        self.0 & Self::single(square).0 != 0
    }

    pub fn add(&mut self, square: Square) {
        *self |= Self::single(square);
    }

    pub fn remove(&mut self, square: Square) {
        *self &= !Self::single(square);
    }

    pub const fn with_square(self, square: Square) -> Self {
        Self(self.0 | Self::single(square).0)
    }

    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    pub const fn count(self) -> usize {
        self.0.count_ones() as usize
    }

    /// Number of squares in the set on the given file.
    pub fn count_on_file(self, file: usize) -> usize {
        self.iter().filter(|square| square.file() == file).count()
    }

    /// Number of squares in the set on the given rank.
    pub fn count_on_rank(self, rank: usize) -> usize {
        self.iter().filter(|square| square.rank() == rank).count()
    }

    /// Squares in increasing index order.
    pub fn iter(self) -> impl Iterator<Item = Square> {
        let mut bits = self.0;
        std::iter::from_fn(move || {
            if bits == 0 {
                return None;
            }
            let index = bits.trailing_zeros() as usize;
            bits &= bits - 1;
            Some(Square::from_index(index))
        })
    }
}

impl FromIterator<Square> for Bitboard {
    fn from_iter<I: IntoIterator<Item = Square>>(iter: I) -> Self {
        let mut bitboard = Self::EMPTY;
        for square in iter {
            bitboard.add(square);
        }
        bitboard
    }
}

impl BitAnd for Bitboard {
    type Output = Self;

    fn bitand(self, other: Self) -> Self::Output {
        Self(self.0 & other.0)
    }
}

impl BitOr for Bitboard {
    type Output = Self;

    fn bitor(self, other: Self) -> Self::Output {
        Self(self.0 | other.0)
    }
}

impl Not for Bitboard {
    type Output = Self;

    fn not(self) -> Self::Output {
        Self(!self.0)
    }
}

impl BitAndAssign for Bitboard {
    fn bitand_assign(&mut self, other: Self) {
        *self = *self & other;
    }
}

impl BitOrAssign for Bitboard {
    fn bitor_assign(&mut self, other: Self) {
        *self = *self | other;
    }
}

/// Rank 8 on top, file a on the left.
impl Display for Bitboard {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for rank in (0..Square::HEIGHT).rev() {
            for file in 0..Square::WIDTH {
                if self.contains(Square::from_file_rank(file, rank)) {
                    write!(f, "x")?;
                } else {
                    write!(f, ".")?;
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
