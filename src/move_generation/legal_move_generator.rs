//! Full legal move generation pipeline.
//!
//! Pseudo-legal moves are produced piece-wise, castling candidates are
//! appended, and the shared apply-check-undo filter rejects every move that
//! leaves the mover's own king in check. Every exploratory apply has a
//! matching undo, including for rejected moves; this is what keeps one
//! shared `GameState` safe to search in place.

use crate::game_state::chess_move::ChessMove;
use crate::game_state::chess_types::*;
use crate::game_state::game_state::GameState;
use crate::move_generation::attack_checks::{in_check, square_under_attack};
use crate::move_generation::bishop_moves::generate_bishop_moves;
use crate::move_generation::castling_moves::generate_castling_moves;
use crate::move_generation::king_moves::generate_king_moves;
use crate::move_generation::knight_moves::generate_knight_moves;
use crate::move_generation::pawn_moves::generate_pawn_moves;
use crate::move_generation::queen_moves::generate_queen_moves;
use crate::move_generation::rook_moves::generate_rook_moves;

/// All moves obeying piece geometry for the side to move, ignoring check.
pub fn generate_pseudo_moves(game: &GameState) -> Vec<ChessMove> {
    let mut moves = Vec::<ChessMove>::with_capacity(64);

    for row in 0..8i8 {
        for col in 0..8i8 {
            let from: BoardLocation = (row, col);
            let Some(piece) = game.board.view(from) else {
                continue;
            };
            if piece.team != game.turn {
                continue;
            }
            match piece.class {
                PieceClass::Pawn => generate_pawn_moves(game, from, &mut moves),
                PieceClass::Knight => generate_knight_moves(game, from, &mut moves),
                PieceClass::Bishop => generate_bishop_moves(game, from, &mut moves),
                PieceClass::Rook => generate_rook_moves(game, from, &mut moves),
                PieceClass::Queen => generate_queen_moves(game, from, &mut moves),
                PieceClass::King => generate_king_moves(game, from, &mut moves),
            }
        }
    }

    moves
}

/// Legal moves for the side to move. Sets the checkmate/stalemate flags as a
/// side effect and leaves the position exactly as it found it.
pub fn generate_legal_moves(game: &mut GameState) -> Vec<ChessMove> {
    let mut candidates = generate_pseudo_moves(game);
    generate_castling_moves(game, &mut candidates);

    let mover = game.turn;
    let mut legal = Vec::<ChessMove>::with_capacity(candidates.len());

    for mv in candidates {
        game.apply_move(mv);
        let safe = !square_under_attack(&game.board, game.king_location(mover), game.turn);
        game.undo_move();
        if safe {
            legal.push(mv);
        }
    }

    let checked = in_check(game);
    game.checkmate = legal.is_empty() && checked;
    game.stalemate = legal.is_empty() && !checked;

    legal
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::board::Board;
    use crate::utils::algebraic::algebraic_to_location;

    fn place(board: &mut Board, team: PieceTeam, class: PieceClass, square: &str) {
        board.place(
            PieceRecord { team, class },
            algebraic_to_location(square).unwrap(),
        );
    }

    #[test]
    fn start_position_has_twenty_moves() {
        let mut game = GameState::new_game();
        assert_eq!(generate_pseudo_moves(&game).len(), 20);
        assert_eq!(generate_legal_moves(&mut game).len(), 20);
    }

    #[test]
    fn pinned_rook_may_only_move_along_the_pin_line() {
        // Ke1, Re2 against re8: the light rook is pinned to the e-file.
        let mut board = Board::empty();
        place(&mut board, PieceTeam::Light, PieceClass::King, "e1");
        place(&mut board, PieceTeam::Light, PieceClass::Rook, "e2");
        place(&mut board, PieceTeam::Dark, PieceClass::King, "a8");
        place(&mut board, PieceTeam::Dark, PieceClass::Rook, "e8");
        let mut game = GameState::from_board(board, PieceTeam::Light).unwrap();

        let e2 = algebraic_to_location("e2").unwrap();
        let legal_moves = generate_legal_moves(&mut game);
        let rook_moves: Vec<_> = legal_moves.iter().filter(|mv| mv.start == e2).collect();

        assert!(!rook_moves.is_empty());
        assert!(
            rook_moves.iter().all(|mv| mv.end.1 == e2.1),
            "pinned rook left the e-file: {rook_moves:?}"
        );

        // The pseudo set does contain the illegal sideways moves.
        let pseudo = generate_pseudo_moves(&game);
        assert!(pseudo
            .iter()
            .any(|mv| mv.start == e2 && mv.end.1 != e2.1));
    }

    #[test]
    fn filter_leaves_the_position_untouched() {
        let mut game = GameState::new_game();
        let board_before = game.board.clone();
        let turn_before = game.turn;

        generate_legal_moves(&mut game);

        assert_eq!(game.board, board_before);
        assert_eq!(game.turn, turn_before);
        assert_eq!(game.ply(), 0);
    }

    #[test]
    fn check_must_be_resolved() {
        // Ke1 in check from re8; blocking, capturing along the file, or
        // stepping aside are the only options.
        let mut board = Board::empty();
        place(&mut board, PieceTeam::Light, PieceClass::King, "e1");
        place(&mut board, PieceTeam::Light, PieceClass::Queen, "d1");
        place(&mut board, PieceTeam::Dark, PieceClass::King, "a8");
        place(&mut board, PieceTeam::Dark, PieceClass::Rook, "e8");
        let mut game = GameState::from_board(board, PieceTeam::Light).unwrap();

        let legal_moves = generate_legal_moves(&mut game);
        let e_file = algebraic_to_location("e2").unwrap().1;

        for mv in &legal_moves {
            let resolves = mv.piece_moved.class == PieceClass::King && mv.end.1 != e_file
                || mv.end.1 == e_file;
            assert!(resolves, "move {mv} does not address the check");
        }
        // Qd1-e2 blocks; king can step to d2/f2 but not d1 (occupied) or
        // stay on the e-file.
        assert!(legal_moves
            .iter()
            .any(|mv| mv.piece_moved.class == PieceClass::Queen
                && mv.end == algebraic_to_location("e2").unwrap()));
    }
}
