//! Castling rights for both sides.
//!
//! Four independent flags. During play they are only ever turned off; undo
//! restores them from a per-ply snapshot, never by recomputation.

use crate::game_state::chess_types::{BoardLocation, PieceTeam};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CastlingRights {
    pub can_castle_king_light: bool,
    pub can_castle_queen_light: bool,
    pub can_castle_king_dark: bool,
    pub can_castle_queen_dark: bool,
}

impl CastlingRights {
    pub const fn all() -> Self {
        CastlingRights {
            can_castle_king_light: true,
            can_castle_queen_light: true,
            can_castle_king_dark: true,
            can_castle_queen_dark: true,
        }
    }

    pub const fn none() -> Self {
        CastlingRights {
            can_castle_king_light: false,
            can_castle_queen_light: false,
            can_castle_king_dark: false,
            can_castle_queen_dark: false,
        }
    }

    #[inline]
    pub const fn kingside(&self, team: PieceTeam) -> bool {
        match team {
            PieceTeam::Light => self.can_castle_king_light,
            PieceTeam::Dark => self.can_castle_king_dark,
        }
    }

    #[inline]
    pub const fn queenside(&self, team: PieceTeam) -> bool {
        match team {
            PieceTeam::Light => self.can_castle_queen_light,
            PieceTeam::Dark => self.can_castle_queen_dark,
        }
    }

    pub fn revoke_for_king_move(&mut self, team: PieceTeam) {
        match team {
            PieceTeam::Light => {
                self.can_castle_king_light = false;
                self.can_castle_queen_light = false;
            }
            PieceTeam::Dark => {
                self.can_castle_king_dark = false;
                self.can_castle_queen_dark = false;
            }
        }
    }

    /// Revoke the right tied to a rook home square. Covers both a rook
    /// leaving home and anything landing on a rook home square.
    pub fn revoke_for_rook_square(&mut self, x: BoardLocation) {
        match x {
            (7, 0) => self.can_castle_queen_light = false,
            (7, 7) => self.can_castle_king_light = false,
            (0, 0) => self.can_castle_queen_dark = false,
            (0, 7) => self.can_castle_king_dark = false,
            _ => {}
        }
    }
}

impl Default for CastlingRights {
    fn default() -> Self {
        CastlingRights::all()
    }
}
