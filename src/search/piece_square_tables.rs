//! Fixed per-square positional bonus tables.
//!
//! Tables are written from Light's point of view with row 0 as the far
//! (promotion) rank; Dark lookups mirror the row index top-to-bottom. The
//! pawn table rewards advancement, knights/bishops/queens share one
//! center-weighted table, rooks use a rank-only table, and the king tables
//! are explicit per side.

use crate::game_state::chess_types::*;
use crate::search::board_scoring::Score;

pub const PAWN_TABLE: [[Score; 8]; 8] = [
    [8.0, 8.0, 8.0, 8.0, 8.0, 8.0, 8.0, 8.0],
    [8.0, 8.0, 8.0, 8.0, 8.0, 8.0, 8.0, 8.0],
    [5.0, 6.0, 6.0, 7.0, 7.0, 6.0, 6.0, 5.0],
    [2.0, 3.0, 3.0, 5.0, 5.0, 3.0, 3.0, 2.0],
    [1.0, 2.0, 3.0, 5.0, 5.0, 3.0, 2.0, 1.0],
    [1.0, 1.0, 2.0, 3.0, 3.0, 2.0, 1.0, 1.0],
    [1.0, 1.0, 1.0, 0.0, 0.0, 1.0, 1.0, 1.0],
    [0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0],
];

/// Shared center-weighted table for knights, bishops, and queens.
pub const PIECE_TABLE: [[Score; 8]; 8] = [
    [1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0],
    [1.0, 2.0, 2.0, 2.0, 2.0, 2.0, 2.0, 1.0],
    [1.0, 2.0, 3.0, 3.0, 3.0, 3.0, 2.0, 1.0],
    [1.0, 2.0, 3.0, 4.0, 4.0, 3.0, 2.0, 1.0],
    [1.0, 2.0, 3.0, 4.0, 4.0, 3.0, 2.0, 1.0],
    [1.0, 2.0, 3.0, 3.0, 3.0, 3.0, 2.0, 1.0],
    [1.0, 2.0, 2.0, 2.0, 2.0, 2.0, 2.0, 1.0],
    [1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0],
];

/// Rooks are scored by rank only; the seventh rank is the prize.
pub const ROOK_RANK_TABLE: [Score; 8] = [4.0, 6.0, 2.0, 2.0, 2.0, 2.0, 2.0, 4.0];

pub const KING_TABLE_LIGHT: [[Score; 8]; 8] = [
    [1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0],
    [1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0],
    [1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0],
    [1.0, 1.0, 2.0, 2.0, 2.0, 2.0, 1.0, 1.0],
    [1.0, 2.0, 2.0, 2.0, 2.0, 2.0, 2.0, 1.0],
    [2.0, 2.0, 2.0, 2.0, 2.0, 2.0, 2.0, 2.0],
    [3.0, 3.0, 2.0, 2.0, 2.0, 2.0, 3.0, 3.0],
    [4.0, 4.0, 3.0, 2.0, 2.0, 3.0, 4.0, 4.0],
];

/// Dark's king table is the light table mirrored top-to-bottom.
pub const KING_TABLE_DARK: [[Score; 8]; 8] = [
    [4.0, 4.0, 3.0, 2.0, 2.0, 3.0, 4.0, 4.0],
    [3.0, 3.0, 2.0, 2.0, 2.0, 2.0, 3.0, 3.0],
    [2.0, 2.0, 2.0, 2.0, 2.0, 2.0, 2.0, 2.0],
    [1.0, 2.0, 2.0, 2.0, 2.0, 2.0, 2.0, 1.0],
    [1.0, 1.0, 2.0, 2.0, 2.0, 2.0, 1.0, 1.0],
    [1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0],
    [1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0],
    [1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0],
];

/// Positional bonus for one piece on one square, side-relative.
pub fn positional_bonus(piece: PieceRecord, x: BoardLocation) -> Score {
    let col = x.1 as usize;
    let row = match piece.team {
        PieceTeam::Light => x.0 as usize,
        PieceTeam::Dark => (7 - x.0) as usize,
    };

    match piece.class {
        PieceClass::Pawn => PAWN_TABLE[row][col],
        PieceClass::Knight | PieceClass::Bishop | PieceClass::Queen => PIECE_TABLE[row][col],
        PieceClass::Rook => ROOK_RANK_TABLE[row],
        PieceClass::King => match piece.team {
            PieceTeam::Light => KING_TABLE_LIGHT[x.0 as usize][col],
            PieceTeam::Dark => KING_TABLE_DARK[x.0 as usize][col],
        },
    }
}
