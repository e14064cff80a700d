//! Core piece and coordinate types shared across the engine.

use crate::chess_errors::ChessErrors;

/// Board coordinate as (row, col). Row 0 is Dark's back rank, row 7 is
/// Light's back rank; columns run from the a-file (0) to the h-file (7).
pub type BoardLocation = (i8, i8);

/// Shift a location by a (row, col) delta, rejecting off-board results.
pub fn offset_location(
    x: BoardLocation,
    d_row: i8,
    d_col: i8,
) -> Result<BoardLocation, ChessErrors> {
    let y: BoardLocation = (x.0 + d_row, x.1 + d_col);
    if (y.0 < 0) | (y.0 > 7) | (y.1 < 0) | (y.1 > 7) {
        Err(ChessErrors::OutOfBounds(y))
    } else {
        Ok(y)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PieceTeam {
    Light,
    Dark,
}

impl PieceTeam {
    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            PieceTeam::Light => PieceTeam::Dark,
            PieceTeam::Dark => PieceTeam::Light,
        }
    }

    /// Row delta of a forward pawn step. Light pawns move toward row 0.
    #[inline]
    pub const fn pawn_direction(self) -> i8 {
        match self {
            PieceTeam::Light => -1,
            PieceTeam::Dark => 1,
        }
    }

    #[inline]
    pub const fn pawn_start_row(self) -> i8 {
        match self {
            PieceTeam::Light => 6,
            PieceTeam::Dark => 1,
        }
    }

    #[inline]
    pub const fn promotion_row(self) -> i8 {
        match self {
            PieceTeam::Light => 0,
            PieceTeam::Dark => 7,
        }
    }

    #[inline]
    pub const fn back_rank(self) -> i8 {
        match self {
            PieceTeam::Light => 7,
            PieceTeam::Dark => 0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PieceClass {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl PieceClass {
    /// Uppercase letter used in move notation.
    #[inline]
    pub const fn letter(self) -> char {
        match self {
            PieceClass::Pawn => 'P',
            PieceClass::Knight => 'N',
            PieceClass::Bishop => 'B',
            PieceClass::Rook => 'R',
            PieceClass::Queen => 'Q',
            PieceClass::King => 'K',
        }
    }
}

/// One occupied square: a colored piece. Empty squares are represented as
/// `Option::<PieceRecord>::None` on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PieceRecord {
    pub team: PieceTeam,
    pub class: PieceClass,
}
