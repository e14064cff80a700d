//! Terminal-oriented Unicode board renderer.
//!
//! Creates a human-readable board view for debugging, tests, and
//! diagnostics in text environments.

use crate::game_state::{chess_types::*, game_state::GameState};

/// Render the board to a Unicode string for terminal output.
///
/// Rank 8 (Dark's back rank, row 0) is printed at the top.
pub fn render_game_state(game: &GameState) -> String {
    let mut out = String::new();

    out.push_str("  a b c d e f g h\n");

    for row in 0..8i8 {
        let rank_label = char::from(b'8' - row as u8);
        out.push(rank_label);
        out.push(' ');

        for col in 0..8i8 {
            match game.board.view((row, col)) {
                Some(piece) => out.push(piece_to_unicode(piece)),
                None => out.push('·'),
            }

            if col < 7 {
                out.push(' ');
            }
        }

        out.push(' ');
        out.push(rank_label);
        out.push('\n');
    }

    out.push_str("  a b c d e f g h");

    out
}

fn piece_to_unicode(piece: PieceRecord) -> char {
    match (piece.team, piece.class) {
        (PieceTeam::Light, PieceClass::Pawn) => '♙',
        (PieceTeam::Light, PieceClass::Knight) => '♘',
        (PieceTeam::Light, PieceClass::Bishop) => '♗',
        (PieceTeam::Light, PieceClass::Rook) => '♖',
        (PieceTeam::Light, PieceClass::Queen) => '♕',
        (PieceTeam::Light, PieceClass::King) => '♔',
        (PieceTeam::Dark, PieceClass::Pawn) => '♟',
        (PieceTeam::Dark, PieceClass::Knight) => '♞',
        (PieceTeam::Dark, PieceClass::Bishop) => '♝',
        (PieceTeam::Dark, PieceClass::Rook) => '♜',
        (PieceTeam::Dark, PieceClass::Queen) => '♛',
        (PieceTeam::Dark, PieceClass::King) => '♚',
    }
}
