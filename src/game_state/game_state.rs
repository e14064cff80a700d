//! Core incremental position state.
//!
//! `GameState` is the central model for the engine. It owns the board, the
//! side to move, king-location caches, the en-passant target, castling
//! rights, and a single append-only history log used by make/unmake style
//! workflows. Search borrows one `GameState` exclusively, mutates it with
//! `apply_move`, and must restore it with `undo_move` before returning.

use crate::chess_errors::ChessErrors;
use crate::game_state::board::Board;
use crate::game_state::castling_rights::CastlingRights;
use crate::game_state::chess_move::ChessMove;
use crate::game_state::chess_types::*;
use crate::move_generation::attack_checks::in_check;
use crate::move_generation::legal_move_generator::{generate_legal_moves, generate_pseudo_moves};

/// Single undo record for `apply_move` / `undo_move`, indexed by ply.
///
/// The board itself is restored exactly from the recorded move; castling
/// rights and the en-passant target are restored from these snapshots and
/// never recomputed.
#[derive(Debug, Clone)]
pub struct UndoState {
    pub mv: ChessMove,
    pub prev_castling_rights: CastlingRights,
    pub prev_en_passant_target: Option<BoardLocation>,
}

#[derive(Debug, Clone)]
pub struct GameState {
    pub board: Board,
    pub turn: PieceTeam,
    pub light_king_location: BoardLocation,
    pub dark_king_location: BoardLocation,
    /// Square skipped by the last double pawn step, if the last move was one.
    pub en_passant_target: Option<BoardLocation>,
    pub castling_rights: CastlingRights,
    /// Terminal flags. Valid only immediately after `legal_moves`; stale
    /// after any apply/undo until move generation runs again.
    pub checkmate: bool,
    pub stalemate: bool,
    history: Vec<UndoState>,
}

impl GameState {
    pub fn new_game() -> Self {
        GameState {
            board: Board::new_game(),
            turn: PieceTeam::Light,
            light_king_location: (7, 4),
            dark_king_location: (0, 4),
            en_passant_target: None,
            castling_rights: CastlingRights::all(),
            checkmate: false,
            stalemate: false,
            history: Vec::new(),
        }
    }

    /// Build a position from an arbitrary board. Both kings must be present.
    ///
    /// Castling rights start fully revoked; tests that need them set the
    /// `castling_rights` field directly.
    pub fn from_board(board: Board, turn: PieceTeam) -> Result<Self, ChessErrors> {
        let light_king_location = board
            .find_king(PieceTeam::Light)
            .ok_or(ChessErrors::MissingKing(PieceTeam::Light))?;
        let dark_king_location = board
            .find_king(PieceTeam::Dark)
            .ok_or(ChessErrors::MissingKing(PieceTeam::Dark))?;

        Ok(GameState {
            board,
            turn,
            light_king_location,
            dark_king_location,
            en_passant_target: None,
            castling_rights: CastlingRights::none(),
            checkmate: false,
            stalemate: false,
            history: Vec::new(),
        })
    }

    #[inline]
    pub fn king_location(&self, team: PieceTeam) -> BoardLocation {
        match team {
            PieceTeam::Light => self.light_king_location,
            PieceTeam::Dark => self.dark_king_location,
        }
    }

    /// Number of committed plies.
    #[inline]
    pub fn ply(&self) -> usize {
        self.history.len()
    }

    #[inline]
    pub fn last_move(&self) -> Option<&ChessMove> {
        self.history.last().map(|undo| &undo.mv)
    }

    pub fn move_log(&self) -> impl Iterator<Item = &ChessMove> {
        self.history.iter().map(|undo| &undo.mv)
    }

    #[inline]
    pub fn is_checkmate(&self) -> bool {
        self.checkmate
    }

    #[inline]
    pub fn is_stalemate(&self) -> bool {
        self.stalemate
    }

    pub fn in_check(&self) -> bool {
        in_check(self)
    }

    /// All moves obeying piece geometry and turn ownership, ignoring whether
    /// the mover's own king ends up in check.
    pub fn pseudo_moves(&self) -> Vec<ChessMove> {
        generate_pseudo_moves(self)
    }

    /// Full legal moves for the side to move. Also recomputes the
    /// checkmate/stalemate flags as a side effect.
    pub fn legal_moves(&mut self) -> Vec<ChessMove> {
        generate_legal_moves(self)
    }

    /// Commit one ply submitted by a caller. The move must be present in the
    /// current legal-move set (compared on start/end squares); otherwise the
    /// state is left untouched and an error is returned.
    pub fn make_move_checked(&mut self, mv: ChessMove) -> Result<(), ChessErrors> {
        let legal_moves = self.legal_moves();
        match legal_moves.iter().find(|candidate| **candidate == mv) {
            // Apply the generator's copy so special-move flags are trusted
            // even when the caller built the move from bare squares.
            Some(&found) => {
                self.apply_move(found);
                Ok(())
            }
            None => Err(ChessErrors::IllegalMoveSubmitted {
                start: mv.start,
                end: mv.end,
            }),
        }
    }

    /// Mutate the position by one ply. The move must come from this
    /// position's move generation; corrupt input is a programming defect and
    /// trips debug assertions rather than returning an error.
    pub fn apply_move(&mut self, mv: ChessMove) {
        debug_assert_eq!(
            self.board.view(mv.start),
            Some(mv.piece_moved),
            "apply_move: start square out of sync with move"
        );
        debug_assert_eq!(mv.piece_moved.team, self.turn, "apply_move: not mover's turn");

        self.history.push(UndoState {
            mv,
            prev_castling_rights: self.castling_rights,
            prev_en_passant_target: self.en_passant_target,
        });

        self.board.clear(mv.start);
        if mv.is_promotion {
            self.board.place(
                PieceRecord {
                    team: mv.piece_moved.team,
                    class: PieceClass::Queen,
                },
                mv.end,
            );
        } else {
            self.board.place(mv.piece_moved, mv.end);
        }

        // En passant captures the pawn on the mover's own rank, not the
        // destination square.
        if mv.is_en_passant {
            let victim = self.board.clear((mv.start.0, mv.end.1));
            debug_assert!(
                matches!(victim, Some(p) if p.class == PieceClass::Pawn),
                "apply_move: en passant without a victim pawn"
            );
        }

        // Castling relocates the rook as well; the king shift is mv itself.
        if mv.is_castling {
            let row = mv.start.0;
            let (rook_from, rook_to) = if mv.end.1 == 6 {
                ((row, 7), (row, 5))
            } else {
                ((row, 0), (row, 3))
            };
            let rook = self.board.clear(rook_from);
            debug_assert!(
                matches!(rook, Some(p) if p.class == PieceClass::Rook),
                "apply_move: castling without a rook at home"
            );
            if let Some(rook) = rook {
                self.board.place(rook, rook_to);
            }
        }

        if mv.piece_moved.class == PieceClass::King {
            match mv.piece_moved.team {
                PieceTeam::Light => self.light_king_location = mv.end,
                PieceTeam::Dark => self.dark_king_location = mv.end,
            }
            self.castling_rights.revoke_for_king_move(mv.piece_moved.team);
        }
        self.castling_rights.revoke_for_rook_square(mv.start);
        self.castling_rights.revoke_for_rook_square(mv.end);

        // The en-passant target survives exactly one ply.
        self.en_passant_target = if mv.piece_moved.class == PieceClass::Pawn
            && (mv.start.0 - mv.end.0).abs() == 2
        {
            Some(((mv.start.0 + mv.end.0) / 2, mv.start.1))
        } else {
            None
        };

        self.turn = self.turn.opposite();
        self.checkmate = false;
        self.stalemate = false;
    }

    /// Undo the most recent ply. A no-op returning `None` when no move has
    /// been applied.
    pub fn undo_move(&mut self) -> Option<ChessMove> {
        let undo = self.history.pop()?;
        let mv = undo.mv;

        self.board.clear(mv.end);
        self.board.place(mv.piece_moved, mv.start);

        if let Some(captured) = mv.piece_captured {
            let square = if mv.is_en_passant {
                (mv.start.0, mv.end.1)
            } else {
                mv.end
            };
            self.board.place(captured, square);
        }

        if mv.is_castling {
            let row = mv.start.0;
            let (rook_from, rook_to) = if mv.end.1 == 6 {
                ((row, 5), (row, 7))
            } else {
                ((row, 3), (row, 0))
            };
            if let Some(rook) = self.board.clear(rook_from) {
                self.board.place(rook, rook_to);
            }
        }

        if mv.piece_moved.class == PieceClass::King {
            match mv.piece_moved.team {
                PieceTeam::Light => self.light_king_location = mv.start,
                PieceTeam::Dark => self.dark_king_location = mv.start,
            }
        }

        self.castling_rights = undo.prev_castling_rights;
        self.en_passant_target = undo.prev_en_passant_target;
        self.turn = self.turn.opposite();
        self.checkmate = false;
        self.stalemate = false;
        Some(mv)
    }
}
