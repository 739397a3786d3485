use crate::ChessPosition;
use chess_client::{Move, Position};

/// Number of leaf nodes of the legal move tree at `depth`.
pub fn perft(position: &ChessPosition, depth: u32) -> u64 {
    if depth == 0 {
        return 1;
    }
    let moves = position.legal_moves();
    if depth == 1 {
        return moves.len() as u64;
    }
    moves
        .into_iter()
        .map(|mov| perft(&position.after(mov), depth - 1))
        .sum()
}

/// Perft split by first move, sorted by move.
pub fn divide(position: &ChessPosition, depth: u32) -> Vec<(Move, u64)> {
    let mut counts: Vec<(Move, u64)> = position
        .legal_moves()
        .into_iter()
        .map(|mov| (mov, perft(&position.after(mov), depth.saturating_sub(1))))
        .collect();
    counts.sort_unstable_by_key(|&(mov, _)| mov);
    counts
}

impl ChessPosition {
    fn after(&self, mov: Move) -> Self {
        let mut next = self.clone();
        next.apply_move(mov);
        next
    }
}
