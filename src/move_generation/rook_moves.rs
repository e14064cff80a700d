//! Pseudo-legal rook moves.

use crate::game_state::chess_move::ChessMove;
use crate::game_state::chess_types::BoardLocation;
use crate::game_state::game_state::GameState;
use crate::move_generation::attack_checks::ORTHOGONAL_DIRECTIONS;
use crate::move_generation::ray_moves::generate_ray_moves;

pub fn generate_rook_moves(game: &GameState, from: BoardLocation, moves: &mut Vec<ChessMove>) {
    generate_ray_moves(game, from, &ORTHOGONAL_DIRECTIONS, moves);
}
