//! Errors used throughout the chess engine.
//!
//! A single enum is used as the error type across the crate to simplify
//! propagation and matching. Variants carry contextual payloads where that
//! helps diagnostics.

use std::fmt;

use crate::game_state::chess_types::{BoardLocation, PieceTeam};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChessErrors {
    /// Attempted to address a square outside the 8x8 board.
    ///
    /// Payload: the raw (row, col) that was requested.
    OutOfBounds((i8, i8)),

    /// A board was supplied that does not contain a king for one side.
    ///
    /// This is an invalid position, not a playable state.
    MissingKing(PieceTeam),

    /// A caller submitted a move that is not in the current legal-move set.
    ///
    /// The game state is left untouched when this is returned.
    IllegalMoveSubmitted {
        start: BoardLocation,
        end: BoardLocation,
    },

    /// No legal moves are available for the side to move. The position is
    /// terminal (checkmate or stalemate) and move selection must not run.
    NoLegalMoves,

    /// An algebraic square string (for example "e4") failed to parse.
    InvalidAlgebraic(String),
}

impl fmt::Display for ChessErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChessErrors::OutOfBounds((row, col)) => {
                write!(f, "square ({row}, {col}) is outside the board")
            }
            ChessErrors::MissingKing(team) => {
                write!(f, "position has no {team:?} king")
            }
            ChessErrors::IllegalMoveSubmitted { start, end } => {
                write!(
                    f,
                    "move ({}, {}) -> ({}, {}) is not legal in this position",
                    start.0, start.1, end.0, end.1
                )
            }
            ChessErrors::NoLegalMoves => {
                write!(f, "no legal moves available; position is terminal")
            }
            ChessErrors::InvalidAlgebraic(text) => {
                write!(f, "invalid algebraic square: {text}")
            }
        }
    }
}

impl std::error::Error for ChessErrors {}
