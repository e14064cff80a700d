//! Negamax with alpha-beta pruning.
//!
//! Identical scores to plain negamax; the alpha/beta window only skips
//! branches that cannot change the result. This is the strongest engine in
//! the set and the only one using the weighted positional scorer.

use rand::prelude::SliceRandom;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::chess_errors::ChessErrors;
use crate::engines::engine_negamax::turn_multiplier;
use crate::engines::engine_trait::{Engine, DEFAULT_ALPHA_BETA_DEPTH};
use crate::game_state::chess_move::ChessMove;
use crate::game_state::game_state::GameState;
use crate::search::board_scoring::{BoardScorer, Score, WeightedScorer};

/// Recursive alpha-beta negamax. Callers start with the full window
/// `(-INFINITY, INFINITY)`.
pub fn negamax_alpha_beta_search(
    game: &mut GameState,
    candidates: &[ChessMove],
    depth: usize,
    mut alpha: Score,
    beta: Score,
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
        let (child_score, _) = negamax_alpha_beta_search(
            game,
            &replies,
            depth - 1,
            -beta,
            -alpha,
            -turn_multiplier,
            scorer,
        );
        game.undo_move();

        let score = -child_score;
        if score > best_score {
            best_score = score;
            best_move = Some(candidate);
        }
        if best_score > alpha {
            alpha = best_score;
        }
        if alpha >= beta {
            break;
        }
    }

    (best_score, best_move)
}

pub struct NegamaxAlphaBetaEngine {
    depth: usize,
    rng: StdRng,
}

impl NegamaxAlphaBetaEngine {
    pub fn new(depth: usize) -> Self {
        NegamaxAlphaBetaEngine {
            depth,
            rng: StdRng::from_rng(&mut rand::rng()),
        }
    }

    pub fn seeded(depth: usize, seed: u64) -> Self {
        NegamaxAlphaBetaEngine {
            depth,
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for NegamaxAlphaBetaEngine {
    fn default() -> Self {
        Self::new(DEFAULT_ALPHA_BETA_DEPTH)
    }
}

impl Engine for NegamaxAlphaBetaEngine {
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

        let (_, best_move) = negamax_alpha_beta_search(
            game,
            &candidates,
            self.depth.max(1),
            f32::NEG_INFINITY,
            f32::INFINITY,
            turn_multiplier(game.turn),
            &WeightedScorer,
        );
        best_move.ok_or(ChessErrors::NoLegalMoves)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engines::engine_negamax::negamax_search;
    use crate::game_state::board::Board;
    use crate::game_state::chess_types::*;
    use crate::search::board_scoring::MaterialScorer;
    use crate::utils::algebraic::algebraic_to_location;

    fn place(board: &mut Board, team: PieceTeam, class: PieceClass, square: &str) {
        board.place(
            PieceRecord { team, class },
            algebraic_to_location(square).unwrap(),
        );
    }

    #[test]
    fn matches_plain_negamax_with_the_same_ordering() {
        let mut game = GameState::new_game();
        let legal_moves = game.legal_moves();
        let multiplier = turn_multiplier(game.turn);

        let (plain, _) =
            negamax_search(&mut game, &legal_moves, 2, multiplier, &MaterialScorer);
        let (pruned, _) = negamax_alpha_beta_search(
            &mut game,
            &legal_moves,
            2,
            f32::NEG_INFINITY,
            f32::INFINITY,
            multiplier,
            &MaterialScorer,
        );

        assert_eq!(plain, pruned);
        assert_eq!(game.ply(), 0);
    }

    #[test]
    fn finds_the_back_rank_mate() {
        let mut board = Board::empty();
        place(&mut board, PieceTeam::Light, PieceClass::King, "g1");
        place(&mut board, PieceTeam::Light, PieceClass::Rook, "a1");
        place(&mut board, PieceTeam::Dark, PieceClass::King, "g8");
        place(&mut board, PieceTeam::Dark, PieceClass::Pawn, "f7");
        place(&mut board, PieceTeam::Dark, PieceClass::Pawn, "g7");
        place(&mut board, PieceTeam::Dark, PieceClass::Pawn, "h7");
        let mut game = GameState::from_board(board, PieceTeam::Light).unwrap();
        let legal_moves = game.legal_moves();
        let multiplier = turn_multiplier(game.turn);

        let (score, best_move) = negamax_alpha_beta_search(
            &mut game,
            &legal_moves,
            3,
            f32::NEG_INFINITY,
            f32::INFINITY,
            multiplier,
            &WeightedScorer,
        );

        assert_eq!(best_move.unwrap().end, algebraic_to_location("a8").unwrap());
        assert_eq!(score, 1000.0);
    }

    #[test]
    fn takes_the_hanging_queen() {
        let mut board = Board::empty();
        place(&mut board, PieceTeam::Light, PieceClass::King, "e1");
        place(&mut board, PieceTeam::Light, PieceClass::Rook, "d1");
        place(&mut board, PieceTeam::Dark, PieceClass::King, "h8");
        place(&mut board, PieceTeam::Dark, PieceClass::Queen, "d5");
        let mut game = GameState::from_board(board, PieceTeam::Light).unwrap();

        let legal_moves = game.legal_moves();
        let chosen = NegamaxAlphaBetaEngine::seeded(2, 5)
            .choose_move(&mut game, &legal_moves)
            .unwrap();

        assert_eq!(chosen.end, algebraic_to_location("d5").unwrap());
        assert_eq!(game.ply(), 0);
    }
}
