//! Castling move generation.
//!
//! A castling move is only produced when the relevant right still holds, the
//! rook is at its home square, the squares between king and rook are empty,
//! and neither the king's start square nor the square it crosses is
//! attacked. The destination square is covered by the shared legality
//! filter, which rejects the move if the king would land in check.

use crate::game_state::chess_move::ChessMove;
use crate::game_state::chess_types::*;
use crate::game_state::game_state::GameState;
use crate::move_generation::attack_checks::square_under_attack;

pub fn generate_castling_moves(game: &GameState, moves: &mut Vec<ChessMove>) {
    let team = game.turn;
    let enemy = team.opposite();
    let row = team.back_rank();
    let king_start: BoardLocation = (row, 4);

    if game.king_location(team) != king_start {
        return;
    }
    let Some(king) = game.board.view(king_start) else {
        return;
    };
    debug_assert_eq!(king.class, PieceClass::King);

    let rook = PieceRecord {
        team,
        class: PieceClass::Rook,
    };

    if game.castling_rights.kingside(team)
        && game.board.view((row, 7)) == Some(rook)
        && game.board.view((row, 5)).is_none()
        && game.board.view((row, 6)).is_none()
        && !square_under_attack(&game.board, king_start, enemy)
        && !square_under_attack(&game.board, (row, 5), enemy)
    {
        moves.push(ChessMove {
            is_castling: true,
            ..ChessMove::new(king_start, (row, 6), king, None)
        });
    }

    if game.castling_rights.queenside(team)
        && game.board.view((row, 0)) == Some(rook)
        && game.board.view((row, 1)).is_none()
        && game.board.view((row, 2)).is_none()
        && game.board.view((row, 3)).is_none()
        && !square_under_attack(&game.board, king_start, enemy)
        && !square_under_attack(&game.board, (row, 3), enemy)
    {
        moves.push(ChessMove {
            is_castling: true,
            ..ChessMove::new(king_start, (row, 2), king, None)
        });
    }
}
