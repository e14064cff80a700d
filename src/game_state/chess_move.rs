//! Move value object.
//!
//! A `ChessMove` captures one ply: source and destination squares, the piece
//! moved, the piece captured (if any), and special-move flags. Equality is
//! intentionally coarse: two moves are equal iff their (start, end) squares
//! are equal. Always compare on those four coordinates, never on the derived
//! integer id alone.

use std::fmt;

use crate::game_state::chess_types::*;
use crate::utils::algebraic::location_to_algebraic;

#[derive(Debug, Clone, Copy)]
pub struct ChessMove {
    pub start: BoardLocation,
    pub end: BoardLocation,
    pub piece_moved: PieceRecord,
    pub piece_captured: Option<PieceRecord>,
    pub is_promotion: bool,
    pub is_en_passant: bool,
    pub is_castling: bool,
}

impl ChessMove {
    pub fn new(
        start: BoardLocation,
        end: BoardLocation,
        piece_moved: PieceRecord,
        piece_captured: Option<PieceRecord>,
    ) -> Self {
        ChessMove {
            start,
            end,
            piece_moved,
            piece_captured,
            is_promotion: false,
            is_en_passant: false,
            is_castling: false,
        }
    }

    /// Compact integer key derived from the four coordinates. Useful for fast
    /// ordering and hashing, but it carries no piece identity.
    #[inline]
    pub fn id(&self) -> u16 {
        (self.start.0 as u16) * 1000
            + (self.start.1 as u16) * 100
            + (self.end.0 as u16) * 10
            + (self.end.1 as u16)
    }

    /// Algebraic-style notation for logs and display: piece letter, start
    /// square, `-` or `x`, end square. Castling renders as `O-O` / `O-O-O`.
    pub fn notation(&self) -> String {
        if self.is_castling {
            return if self.end.1 == 6 {
                "O-O".to_string()
            } else {
                "O-O-O".to_string()
            };
        }
        let separator = if self.piece_captured.is_some() {
            'x'
        } else {
            '-'
        };
        format!(
            "{}{}{}{}",
            self.piece_moved.class.letter(),
            location_to_algebraic(self.start),
            separator,
            location_to_algebraic(self.end)
        )
    }
}

impl PartialEq for ChessMove {
    fn eq(&self, other: &Self) -> bool {
        self.start == other.start && self.end == other.end
    }
}

impl Eq for ChessMove {}

impl fmt::Display for ChessMove {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.notation())
    }
}
