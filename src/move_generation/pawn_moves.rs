//! Pseudo-legal pawn moves: pushes, double steps, captures, en passant,
//! promotion flagging.

use crate::game_state::chess_move::ChessMove;
use crate::game_state::chess_types::*;
use crate::game_state::game_state::GameState;

pub fn generate_pawn_moves(game: &GameState, from: BoardLocation, moves: &mut Vec<ChessMove>) {
    let Some(pawn) = game.board.view(from) else {
        return;
    };
    debug_assert_eq!(pawn.class, PieceClass::Pawn);

    let direction = pawn.team.pawn_direction();
    let promotion_row = pawn.team.promotion_row();

    // Forward pushes need empty squares; they never capture.
    if let Ok(one_step) = offset_location(from, direction, 0) {
        if game.board.view(one_step).is_none() {
            moves.push(ChessMove {
                is_promotion: one_step.0 == promotion_row,
                ..ChessMove::new(from, one_step, pawn, None)
            });

            if from.0 == pawn.team.pawn_start_row() {
                if let Ok(two_step) = offset_location(from, 2 * direction, 0) {
                    if game.board.view(two_step).is_none() {
                        moves.push(ChessMove::new(from, two_step, pawn, None));
                    }
                }
            }
        }
    }

    // Diagonal captures, including onto the en-passant target square.
    for d_col in [-1i8, 1] {
        let Ok(target) = offset_location(from, direction, d_col) else {
            continue;
        };
        match game.board.view(target) {
            Some(other) => {
                if other.team != pawn.team {
                    moves.push(ChessMove {
                        is_promotion: target.0 == promotion_row,
                        ..ChessMove::new(from, target, pawn, Some(other))
                    });
                }
            }
            None => {
                if game.en_passant_target == Some(target) {
                    // The victim pawn sits beside us, not on the target.
                    let victim = game.board.view((from.0, target.1));
                    debug_assert!(
                        matches!(victim, Some(p) if p.class == PieceClass::Pawn),
                        "en passant target without a passed pawn"
                    );
                    moves.push(ChessMove {
                        is_en_passant: true,
                        ..ChessMove::new(from, target, pawn, victim)
                    });
                }
            }
        }
    }
}
