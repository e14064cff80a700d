//! Negamax search.
//!
//! The same tree as minimax, folded to one case: scores are always from the
//! side to move's point of view, so each level negates its children. The
//! turn multiplier converts the scorer's Light-positive convention.

use rand::prelude::SliceRandom;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::chess_errors::ChessErrors;
use crate::engines::engine_trait::{Engine, DEFAULT_MINIMAX_DEPTH};
use crate::game_state::chess_move::ChessMove;
use crate::game_state::chess_types::PieceTeam;
use crate::game_state::game_state::GameState;
use crate::search::board_scoring::{BoardScorer, MaterialScorer, Score};

/// Multiplier converting a Light-positive score to a side-to-move score.
pub fn turn_multiplier(team: PieceTeam) -> Score {
    match team {
        PieceTeam::Light => 1.0,
        PieceTeam::Dark => -1.0,
    }
}

/// Recursive negamax. `candidates` must be the legal moves of the side to
/// move so that leaf evaluation sees fresh terminal flags.
pub fn negamax_search(
    game: &mut GameState,
    candidates: &[ChessMove],
    depth: usize,
    turn_multiplier: Score,
    scorer: &dyn BoardScorer,
) -> (Score, Option<ChessMove>) {
    if depth == 0 || candidates.is_empty() {
        return (turn_multiplier * scorer.score(game), None);
    }

    let mut best_score: Score = f32::NEG_INFINITY;
    let mut best_move: Option<ChessMove> = None;

    for &candidate in candidates {
        game.apply_move(candidate);
        let replies = game.legal_moves();
        let (child_score, _) =
            negamax_search(game, &replies, depth - 1, -turn_multiplier, scorer);
        game.undo_move();

        let score = -child_score;
        if score > best_score {
            best_score = score;
            best_move = Some(candidate);
        }
    }

    (best_score, best_move)
}

pub struct NegamaxEngine {
    depth: usize,
    rng: StdRng,
}

impl NegamaxEngine {
    pub fn new(depth: usize) -> Self {
        NegamaxEngine {
            depth,
            rng: StdRng::from_rng(&mut rand::rng()),
        }
    }

    pub fn seeded(depth: usize, seed: u64) -> Self {
        NegamaxEngine {
            depth,
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for NegamaxEngine {
    fn default() -> Self {
        Self::new(DEFAULT_MINIMAX_DEPTH)
    }
}

impl Engine for NegamaxEngine {
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

        let (_, best_move) = negamax_search(
            game,
            &candidates,
            self.depth.max(1),
            turn_multiplier(game.turn),
            &MaterialScorer,
        );
        best_move.ok_or(ChessErrors::NoLegalMoves)
    }
}
