//! Shared ray-casting for the sliding pieces.

use crate::game_state::chess_move::ChessMove;
use crate::game_state::chess_types::*;
use crate::game_state::game_state::GameState;

/// Cast rays from `from` in each direction until the board edge, an own
/// piece (stop, exclude) or an enemy piece (stop, include as capture).
pub fn generate_ray_moves(
    game: &GameState,
    from: BoardLocation,
    directions: &[(i8, i8)],
    moves: &mut Vec<ChessMove>,
) {
    let Some(piece) = game.board.view(from) else {
        return;
    };

    for &(d_row, d_col) in directions {
        let mut cursor = from;
        while let Ok(next) = offset_location(cursor, d_row, d_col) {
            match game.board.view(next) {
                None => {
                    moves.push(ChessMove::new(from, next, piece, None));
                    cursor = next;
                }
                Some(other) => {
                    if other.team != piece.team {
                        moves.push(ChessMove::new(from, next, piece, Some(other)));
                    }
                    break;
                }
            }
        }
    }
}
