use crate::{Move, clock::Timer};

/// Picks moves for one side.
pub trait AutomatedPlayer<P> {
    /// Blocks until a move is chosen. Should return before `timer` runs out.
    /// The move must be legal in `position`; it is applied without
    /// re-validation.
    fn choose_move(&mut self, position: &P, timer: &Timer, verbose: bool) -> Move;
}
