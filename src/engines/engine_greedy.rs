//! One-ply greedy engine.
//!
//! For every candidate move, plays it and measures the best material swing
//! the opponent can achieve in reply, then picks the candidate whose worst
//! case is smallest. Candidates are shuffled first so equal-scoring moves
//! vary between games.

use rand::prelude::SliceRandom;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::chess_errors::ChessErrors;
use crate::engines::engine_trait::Engine;
use crate::game_state::chess_move::ChessMove;
use crate::game_state::chess_types::PieceTeam;
use crate::game_state::game_state::GameState;
use crate::search::board_scoring::{
    material_balance, Score, CHECKMATE_SCORE, STALEMATE_SCORE,
};

pub struct GreedyEngine {
    rng: StdRng,
}

impl GreedyEngine {
    pub fn new() -> Self {
        GreedyEngine {
            rng: StdRng::from_rng(&mut rand::rng()),
        }
    }

    pub fn seeded(seed: u64) -> Self {
        GreedyEngine {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for GreedyEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine for GreedyEngine {
    fn choose_move(
        &mut self,
        game: &mut GameState,
        legal_moves: &[ChessMove],
    ) -> Result<ChessMove, ChessErrors> {
        let mut candidates = legal_moves.to_vec();
        if candidates.is_empty() {
            return Err(ChessErrors::NoLegalMoves);
        }
        candidates.shuffle(&mut self.rng);

        let turn_multiplier: Score = match game.turn {
            PieceTeam::Light => 1.0,
            PieceTeam::Dark => -1.0,
        };

        // Even if every candidate walks into mate, some move must be played.
        let mut best_move = candidates[0];
        let mut opponent_min_max: Score = f32::INFINITY;

        for candidate in candidates {
            game.apply_move(candidate);
            let replies = game.legal_moves();

            let opponent_max = if game.is_stalemate() {
                STALEMATE_SCORE
            } else if game.is_checkmate() {
                -CHECKMATE_SCORE
            } else {
                let mut max: Score = f32::NEG_INFINITY;
                for reply in replies {
                    game.apply_move(reply);
                    game.legal_moves();
                    let score = if game.is_checkmate() {
                        CHECKMATE_SCORE
                    } else if game.is_stalemate() {
                        STALEMATE_SCORE
                    } else {
                        -turn_multiplier * material_balance(&game.board)
                    };
                    if score > max {
                        max = score;
                    }
                    game.undo_move();
                }
                max
            };

            if opponent_max < opponent_min_max {
                opponent_min_max = opponent_max;
                best_move = candidate;
            }
            game.undo_move();
        }

        Ok(best_move)
    }
}
