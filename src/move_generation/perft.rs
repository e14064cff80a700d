//! Perft node counting for move-generation validation.
//!
//! Walks the legal move tree with apply/undo and counts leaf nodes. The
//! totals for the standard starting position are well known, which makes
//! this the quickest way to catch generation or undo regressions.

use crate::game_state::game_state::GameState;

pub fn perft(game: &mut GameState, depth: usize) -> u64 {
    if depth == 0 {
        return 1;
    }

    let legal_moves = game.legal_moves();
    if depth == 1 {
        return legal_moves.len() as u64;
    }

    let mut nodes = 0u64;
    for mv in legal_moves {
        game.apply_move(mv);
        nodes += perft(game, depth - 1);
        game.undo_move();
    }
    nodes
}
