//! Attack and check queries.
//!
//! `square_under_attack` tests per-piece attack patterns directly (pawn
//! capture diagonals, knight and king offsets, sliding rays) instead of
//! generating and scanning the attacker's move list. That keeps it exact for
//! empty squares too, which castling relies on for the traversal check.

use crate::game_state::board::Board;
use crate::game_state::chess_types::*;
use crate::game_state::game_state::GameState;

pub const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (-2, -1),
    (-2, 1),
    (-1, -2),
    (-1, 2),
    (1, -2),
    (1, 2),
    (2, -1),
    (2, 1),
];

pub const KING_OFFSETS: [(i8, i8); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

pub const ORTHOGONAL_DIRECTIONS: [(i8, i8); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];
pub const DIAGONAL_DIRECTIONS: [(i8, i8); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];

/// Is the side to move's king attacked right now?
pub fn in_check(game: &GameState) -> bool {
    square_under_attack(
        &game.board,
        game.king_location(game.turn),
        game.turn.opposite(),
    )
}

pub fn square_under_attack(board: &Board, target: BoardLocation, attacker: PieceTeam) -> bool {
    // Pawns. A pawn attacks diagonally forward, so look one row behind the
    // target along the attacker's direction of travel.
    let pawn_row = target.0 - attacker.pawn_direction();
    for d_col in [-1i8, 1] {
        if let Ok(from) = offset_location((pawn_row, target.1), 0, d_col) {
            if board.view(from)
                == Some(PieceRecord {
                    team: attacker,
                    class: PieceClass::Pawn,
                })
            {
                return true;
            }
        }
    }

    for &(d_row, d_col) in &KNIGHT_OFFSETS {
        if let Ok(from) = offset_location(target, d_row, d_col) {
            if board.view(from)
                == Some(PieceRecord {
                    team: attacker,
                    class: PieceClass::Knight,
                })
            {
                return true;
            }
        }
    }

    for &(d_row, d_col) in &KING_OFFSETS {
        if let Ok(from) = offset_location(target, d_row, d_col) {
            if board.view(from)
                == Some(PieceRecord {
                    team: attacker,
                    class: PieceClass::King,
                })
            {
                return true;
            }
        }
    }

    if ray_hits(board, target, attacker, &ORTHOGONAL_DIRECTIONS, PieceClass::Rook) {
        return true;
    }
    if ray_hits(board, target, attacker, &DIAGONAL_DIRECTIONS, PieceClass::Bishop) {
        return true;
    }

    false
}

/// Walk rays from the target; the first piece met on each ray decides.
/// Queens attack along both ray families.
fn ray_hits(
    board: &Board,
    target: BoardLocation,
    attacker: PieceTeam,
    directions: &[(i8, i8)],
    slider: PieceClass,
) -> bool {
    for &(d_row, d_col) in directions {
        let mut cursor = target;
        while let Ok(next) = offset_location(cursor, d_row, d_col) {
            match board.view(next) {
                None => cursor = next,
                Some(piece) => {
                    if piece.team == attacker
                        && (piece.class == slider || piece.class == PieceClass::Queen)
                    {
                        return true;
                    }
                    break;
                }
            }
        }
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::algebraic::algebraic_to_location;

    fn piece(team: PieceTeam, class: PieceClass) -> PieceRecord {
        PieceRecord { team, class }
    }

    #[test]
    fn pawn_attacks_are_directional() {
        let mut board = Board::empty();
        let e4 = algebraic_to_location("e4").unwrap();
        board.place(piece(PieceTeam::Light, PieceClass::Pawn), e4);

        // A light pawn on e4 attacks d5 and f5, never d3/f3 or e5.
        for square in ["d5", "f5"] {
            let target = algebraic_to_location(square).unwrap();
            assert!(square_under_attack(&board, target, PieceTeam::Light));
        }
        for square in ["d3", "f3", "e5"] {
            let target = algebraic_to_location(square).unwrap();
            assert!(!square_under_attack(&board, target, PieceTeam::Light));
        }
    }

    #[test]
    fn empty_squares_are_not_attacked_by_pawn_pushes() {
        // Relevant for castling: the traversal squares are empty, and a pawn
        // that could push onto one still does not attack it.
        let mut board = Board::empty();
        let f3 = algebraic_to_location("f3").unwrap();
        board.place(piece(PieceTeam::Dark, PieceClass::Pawn), f3);

        let f2 = algebraic_to_location("f2").unwrap();
        let e2 = algebraic_to_location("e2").unwrap();
        let g2 = algebraic_to_location("g2").unwrap();
        assert!(!square_under_attack(&board, f2, PieceTeam::Dark));
        assert!(square_under_attack(&board, e2, PieceTeam::Dark));
        assert!(square_under_attack(&board, g2, PieceTeam::Dark));
    }

    #[test]
    fn sliders_stop_at_blockers() {
        let mut board = Board::empty();
        let a1 = algebraic_to_location("a1").unwrap();
        let a4 = algebraic_to_location("a4").unwrap();
        let a6 = algebraic_to_location("a6").unwrap();
        board.place(piece(PieceTeam::Dark, PieceClass::Rook), a1);
        board.place(piece(PieceTeam::Light, PieceClass::Pawn), a4);

        assert!(square_under_attack(&board, a4, PieceTeam::Dark));
        assert!(!square_under_attack(&board, a6, PieceTeam::Dark));
    }

    #[test]
    fn knight_and_queen_patterns() {
        let mut board = Board::empty();
        let b1 = algebraic_to_location("b1").unwrap();
        let d5 = algebraic_to_location("d5").unwrap();
        board.place(piece(PieceTeam::Dark, PieceClass::Knight), b1);
        board.place(piece(PieceTeam::Dark, PieceClass::Queen), d5);

        let c3 = algebraic_to_location("c3").unwrap();
        assert!(square_under_attack(&board, c3, PieceTeam::Dark));

        let d1 = algebraic_to_location("d1").unwrap();
        let h1 = algebraic_to_location("h1").unwrap();
        assert!(square_under_attack(&board, d1, PieceTeam::Dark));
        assert!(square_under_attack(&board, h1, PieceTeam::Dark));
    }

    #[test]
    fn in_check_reads_the_side_to_move() {
        let mut board = Board::empty();
        board.place(
            piece(PieceTeam::Light, PieceClass::King),
            algebraic_to_location("e1").unwrap(),
        );
        board.place(
            piece(PieceTeam::Dark, PieceClass::King),
            algebraic_to_location("e8").unwrap(),
        );
        board.place(
            piece(PieceTeam::Dark, PieceClass::Rook),
            algebraic_to_location("e4").unwrap(),
        );

        let light_to_move = GameState::from_board(board.clone(), PieceTeam::Light).unwrap();
        assert!(light_to_move.in_check());

        let dark_to_move = GameState::from_board(board, PieceTeam::Dark).unwrap();
        assert!(!dark_to_move.in_check());
    }
}
