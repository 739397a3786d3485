use crate::{Color, Move, PieceKind, Square};

/// Rules oracle the turn controller plays against.
///
/// Legality, move generation and game-end detection all live behind this
/// trait. The controller only asks questions and applies moves it has
/// already checked against `legal_moves_from` (human moves) or received from
/// an automated player.
pub trait Position {
    fn piece_kind_at(&self, square: Square) -> Option<PieceKind>;

    /// Whether the piece on `square` belongs to the side to move.
    fn color_to_move_owns_square(&self, square: Square) -> bool;

    fn legal_moves_from(&self, square: Square) -> Vec<Move>;

    fn all_legal_moves(&self) -> Vec<Move>;

    /// Irreversible. The move must be legal in the current position.
    fn apply_move(&mut self, mov: Move);

    fn is_check(&self) -> bool;

    fn is_checkmate(&self) -> bool;

    fn is_draw(&self) -> bool;

    /// Most recently applied move, `None` before the first one.
    fn last_applied_move(&self) -> Option<Move>;

    fn side_to_move(&self) -> Color;

    /// Plies played since the standard starting position, so that white
    /// plies are even.
    fn ply(&self) -> u32;
}
