use crate::{MoveError, PromotionPiece, Square, enum_map::SimpleEnum};
use std::fmt::{self, Display, Formatter};

/// A move packed into 16 bits.
///
/// | bits  | field                                   |
/// |-------|-----------------------------------------|
/// | 0-5   | from square                             |
/// | 6-11  | to square                               |
/// | 12    | castling flag                           |
/// | 13-14 | promotion piece (N=0, B=1, R=2, Q=3)    |
/// | 15    | promotion flag                          |
///
/// Accessors are plain projections and accept any 16-bit value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Move(u16);

impl Move {
    const SQUARE_MASK: u16 = 0x3F;
    const TO_SHIFT: u32 = 6;
    const CASTLING_BIT: u16 = 1 << 12;
    const PROMOTION_SHIFT: u32 = 13;
    const PROMOTION_MASK: u16 = 0b11 << Self::PROMOTION_SHIFT;
    const PROMOTION_BIT: u16 = 1 << 15;

    pub fn encode(
        from: Square,
        to: Square,
        is_castling: bool,
        promotion_piece: Option<PromotionPiece>,
        is_promotion: bool,
    ) -> Result<Self, MoveError> {
        if from == to || (promotion_piece.is_some() && !is_promotion) {
            return Err(MoveError::InvalidMove);
        }
        let mut bits = u16::from(u8::from(from)) | u16::from(u8::from(to)) << Self::TO_SHIFT;
        if is_castling {
            bits |= Self::CASTLING_BIT;
        }
        if let Some(piece) = promotion_piece {
            bits |= u16::from(piece.code()) << Self::PROMOTION_SHIFT;
        }
        if is_promotion {
            bits |= Self::PROMOTION_BIT;
        }
        Ok(Self(bits))
    }

    /// Quiet or capturing move without flags.
    pub fn normal(from: Square, to: Square) -> Result<Self, MoveError> {
        Self::encode(from, to, false, None, false)
    }

    pub fn from_bits(bits: u16) -> Self {
        Self(bits)
    }

    pub fn bits(self) -> u16 {
        self.0
    }

    pub fn from(self) -> Square {
        Square::from_index(usize::from(self.0 & Self::SQUARE_MASK))
    }

    pub fn to(self) -> Square {
        Square::from_index(usize::from(self.0 >> Self::TO_SHIFT & Self::SQUARE_MASK))
    }

    pub fn is_castling(self) -> bool {
        self.0 & Self::CASTLING_BIT != 0
    }

    /// Meaningful only when `is_promotion` is set.
    pub fn promotion_piece(self) -> PromotionPiece {
        PromotionPiece::from_code((self.0 >> Self::PROMOTION_SHIFT) as u8)
    }

    pub fn is_promotion(self) -> bool {
        self.0 & Self::PROMOTION_BIT != 0
    }

    /// Replaces the promotion piece, keeping every other field.
    pub fn with_promotion_piece(self, piece: PromotionPiece) -> Self {
        Self(self.0 & !Self::PROMOTION_MASK | u16::from(piece.code()) << Self::PROMOTION_SHIFT)
    }
}

impl From<Move> for u16 {
    fn from(mov: Move) -> u16 {
        mov.0
    }
}

/// Long algebraic form, e.g. `e2e4` or `e7e8q`.
impl Display for Move {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from(), self.to())?;
        if self.is_promotion() {
            let letter = self.promotion_piece().letter().to_ascii_lowercase();
            write!(f, "{letter}")?;
        }
        Ok(())
    }
}
