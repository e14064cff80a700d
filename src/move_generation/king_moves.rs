//! Pseudo-legal king moves: the eight adjacent squares.
//!
//! No self-check filtering happens here; the shared apply-check-undo filter
//! in the legal move generator rejects moves into attacked squares.

use crate::game_state::chess_move::ChessMove;
use crate::game_state::chess_types::*;
use crate::game_state::game_state::GameState;
use crate::move_generation::attack_checks::KING_OFFSETS;

pub fn generate_king_moves(game: &GameState, from: BoardLocation, moves: &mut Vec<ChessMove>) {
    let Some(king) = game.board.view(from) else {
        return;
    };
    debug_assert_eq!(king.class, PieceClass::King);

    for &(d_row, d_col) in &KING_OFFSETS {
        let Ok(target) = offset_location(from, d_row, d_col) else {
            continue;
        };
        match game.board.view(target) {
            None => moves.push(ChessMove::new(from, target, king, None)),
            Some(other) => {
                if other.team != king.team {
                    moves.push(ChessMove::new(from, target, king, Some(other)));
                }
            }
        }
    }
}
