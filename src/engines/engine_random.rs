//! Uniform random move selection. Useful as a baseline opponent and for
//! smoke-testing the full move pipeline.

use rand::prelude::IndexedRandom;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::chess_errors::ChessErrors;
use crate::engines::engine_trait::Engine;
use crate::game_state::chess_move::ChessMove;
use crate::game_state::game_state::GameState;

pub struct RandomEngine {
    rng: StdRng,
}

impl RandomEngine {
    pub fn new() -> Self {
        RandomEngine {
            rng: StdRng::from_rng(&mut rand::rng()),
        }
    }

    /// Deterministic variant for reproducible games and tests.
    pub fn seeded(seed: u64) -> Self {
        RandomEngine {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine for RandomEngine {
    fn choose_move(
        &mut self,
        _game: &mut GameState,
        legal_moves: &[ChessMove],
    ) -> Result<ChessMove, ChessErrors> {
        legal_moves
            .choose(&mut self.rng)
            .copied()
            .ok_or(ChessErrors::NoLegalMoves)
    }
}
