use chess_client::{AutomatedPlayer, Move, Position, clock::Timer};
use rand::{SeedableRng, rngs::StdRng, seq::IteratorRandom};

/// Plays a uniformly random legal move.
#[derive(Debug)]
pub struct RandomPlayer {
    rng: StdRng,
}

impl RandomPlayer {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }

    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl<P: Position> AutomatedPlayer<P> for RandomPlayer {
    fn choose_move(&mut self, position: &P, timer: &Timer, verbose: bool) -> Move {
        let moves = position.all_legal_moves();
        let mov = moves
            .iter()
            .copied()
            .choose(&mut self.rng)
            .expect("No legal moves");
        if verbose {
            log::info!(
                "Picked {mov} out of {} moves, {:?} left",
                moves.len(),
                timer.remaining()
            );
        }
        mov
    }
}
