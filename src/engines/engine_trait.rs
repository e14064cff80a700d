//! The engine interface and strategy dispatch.

use crate::chess_errors::ChessErrors;
use crate::engines::engine_greedy::GreedyEngine;
use crate::engines::engine_minimax::MinimaxEngine;
use crate::engines::engine_negamax::NegamaxEngine;
use crate::engines::engine_negamax_ab::NegamaxAlphaBetaEngine;
use crate::engines::engine_random::RandomEngine;
use crate::game_state::chess_move::ChessMove;
use crate::game_state::game_state::GameState;

pub const DEFAULT_MINIMAX_DEPTH: usize = 2;
pub const DEFAULT_ALPHA_BETA_DEPTH: usize = 3;

/// A move-selection strategy. Engines may explore the game state in place
/// but must leave it exactly as they found it.
pub trait Engine {
    fn choose_move(
        &mut self,
        game: &mut GameState,
        legal_moves: &[ChessMove],
    ) -> Result<ChessMove, ChessErrors>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    Random,
    Greedy,
    Minimax,
    Negamax,
    NegamaxAlphaBeta,
}

/// One-shot dispatch: builds the requested engine and asks it for a move.
pub fn select_move(
    game: &mut GameState,
    legal_moves: &[ChessMove],
    strategy: Strategy,
    depth: usize,
) -> Result<ChessMove, ChessErrors> {
    if legal_moves.is_empty() {
        return Err(ChessErrors::NoLegalMoves);
    }

    match strategy {
        Strategy::Random => RandomEngine::new().choose_move(game, legal_moves),
        Strategy::Greedy => GreedyEngine::new().choose_move(game, legal_moves),
        Strategy::Minimax => MinimaxEngine::new(depth).choose_move(game, legal_moves),
        Strategy::Negamax => NegamaxEngine::new(depth).choose_move(game, legal_moves),
        Strategy::NegamaxAlphaBeta => {
            NegamaxAlphaBetaEngine::new(depth).choose_move(game, legal_moves)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_candidate_list_is_an_error() {
        let mut game = GameState::new_game();
        let result = select_move(&mut game, &[], Strategy::Random, 1);
        assert!(matches!(result, Err(ChessErrors::NoLegalMoves)));
    }

    #[test]
    fn every_strategy_returns_a_legal_move() {
        for strategy in [
            Strategy::Random,
            Strategy::Greedy,
            Strategy::Minimax,
            Strategy::Negamax,
            Strategy::NegamaxAlphaBeta,
        ] {
            let mut game = GameState::new_game();
            let legal_moves = game.legal_moves();
            let chosen = select_move(&mut game, &legal_moves, strategy, 2).unwrap();
            assert!(
                legal_moves.contains(&chosen),
                "{strategy:?} returned a move outside the legal set"
            );
            assert_eq!(game.ply(), 0, "{strategy:?} left the position disturbed");
        }
    }
}
