//! Pseudo-legal knight moves: the eight fixed-offset jumps.

use crate::game_state::chess_move::ChessMove;
use crate::game_state::chess_types::*;
use crate::game_state::game_state::GameState;
use crate::move_generation::attack_checks::KNIGHT_OFFSETS;

pub fn generate_knight_moves(game: &GameState, from: BoardLocation, moves: &mut Vec<ChessMove>) {
    let Some(knight) = game.board.view(from) else {
        return;
    };
    debug_assert_eq!(knight.class, PieceClass::Knight);

    for &(d_row, d_col) in &KNIGHT_OFFSETS {
        let Ok(target) = offset_location(from, d_row, d_col) else {
            continue;
        };
        match game.board.view(target) {
            None => moves.push(ChessMove::new(from, target, knight, None)),
            Some(other) => {
                if other.team != knight.team {
                    moves.push(ChessMove::new(from, target, knight, Some(other)));
                }
            }
        }
    }
}
