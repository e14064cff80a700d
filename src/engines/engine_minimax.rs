//! Plain minimax over material.
//!
//! Light maximizes and Dark minimizes an absolute score. The recursion
//! threads the best move up alongside the score instead of stashing it in
//! shared state, so the search is plain functions over one `&mut GameState`.

use rand::prelude::SliceRandom;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::chess_errors::ChessErrors;
use crate::engines::engine_trait::{Engine, DEFAULT_MINIMAX_DEPTH};
use crate::game_state::chess_move::ChessMove;
use crate::game_state::chess_types::PieceTeam;
use crate::game_state::game_state::GameState;
use crate::search::board_scoring::{material_balance, BoardScorer, MaterialScorer, Score};

/// Recursive minimax. `candidates` must be the legal moves of the side to
/// move; an empty list means the game is over and the terminal-aware scorer
/// decides (its flags were refreshed by the caller's move generation).
pub fn minimax_search(
    game: &mut GameState,
    candidates: &[ChessMove],
    depth: usize,
) -> (Score, Option<ChessMove>) {
    if depth == 0 {
        return (material_balance(&game.board), None);
    }
    if candidates.is_empty() {
        return (MaterialScorer.score(game), None);
    }

    let maximizing = game.turn == PieceTeam::Light;
    let mut best_score: Score = if maximizing {
        f32::NEG_INFINITY
    } else {
        f32::INFINITY
    };
    let mut best_move: Option<ChessMove> = None;

    for &candidate in candidates {
        game.apply_move(candidate);
        let replies = game.legal_moves();
        let (score, _) = minimax_search(game, &replies, depth - 1);
        game.undo_move();

        let improved = if maximizing {
            score > best_score
        } else {
            score < best_score
        };
        if improved {
            best_score = score;
            best_move = Some(candidate);
        }
    }

    (best_score, best_move)
}

pub struct MinimaxEngine {
    depth: usize,
    rng: StdRng,
}

impl MinimaxEngine {
    pub fn new(depth: usize) -> Self {
        MinimaxEngine {
            depth,
            rng: StdRng::from_rng(&mut rand::rng()),
        }
    }

    pub fn seeded(depth: usize, seed: u64) -> Self {
        MinimaxEngine {
            depth,
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for MinimaxEngine {
    fn default() -> Self {
        Self::new(DEFAULT_MINIMAX_DEPTH)
    }
}

impl Engine for MinimaxEngine {
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

        let (_, best_move) = minimax_search(game, &candidates, self.depth.max(1));
        best_move.ok_or(ChessErrors::NoLegalMoves)
    }
}
