use crate::{Move, Position, Square};

/// Human move entry: pick up a piece, then click where it goes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Selection {
    #[default]
    NoSelection,
    PieceSelected(Square),
}

/// Result of one click.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Click {
    /// Nothing selected and the square holds no piece of the side to move.
    Ignored,
    Selected { square: Square, targets: Vec<Move> },
    /// The selected square was clicked again.
    Deselected,
    /// A legal destination was clicked. The promotion piece may still need
    /// to be filled in.
    Candidate(Move),
    Illegal { from: Square, to: Square },
}

impl Selection {
    pub fn selected(self) -> Option<Square> {
        match self {
            Self::NoSelection => None,
            Self::PieceSelected(square) => Some(square),
        }
    }

    pub fn clear(&mut self) {
        *self = Self::NoSelection;
    }

    pub fn click<P: Position + ?Sized>(&mut self, square: Square, position: &P) -> Click {
        match *self {
            Self::NoSelection => {
                if owns(position, square) {
                    self.select(square, position)
                } else {
                    Click::Ignored
                }
            }
            Self::PieceSelected(from) => {
                if square == from {
                    self.clear();
                    return Click::Deselected;
                }
                let candidate = position
                    .legal_moves_from(from)
                    .into_iter()
                    .find(|mov| mov.to() == square);
                if let Some(mov) = candidate {
                    self.clear();
                    Click::Candidate(mov)
                } else if owns(position, square) {
                    self.select(square, position)
                } else {
                    self.clear();
                    Click::Illegal { from, to: square }
                }
            }
        }
    }

    fn select<P: Position + ?Sized>(&mut self, square: Square, position: &P) -> Click {
        *self = Self::PieceSelected(square);
        Click::Selected {
            square,
            targets: position.legal_moves_from(square),
        }
    }
}

fn owns<P: Position + ?Sized>(position: &P, square: Square) -> bool {
    position.piece_kind_at(square).is_some() && position.color_to_move_owns_square(square)
}
