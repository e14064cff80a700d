//! Position scoring for the search engines.
//!
//! All scores are from Light's point of view: positive favors Light,
//! negative favors Dark. Side-relative searches fold in a turn multiplier
//! at the call site. Terminal positions override everything: a mated side
//! loses the full checkmate score and stalemate is a dead draw.

use crate::game_state::board::Board;
use crate::game_state::chess_types::*;
use crate::game_state::game_state::GameState;
use crate::search::piece_square_tables::positional_bonus;

pub type Score = f32;

/// Magnitude assigned to checkmate; the sign depends on who is mated.
pub const CHECKMATE_SCORE: Score = 1000.0;
pub const STALEMATE_SCORE: Score = 0.0;

/// Weight applied to piece-square-table bonuses relative to material.
pub const POSITIONAL_WEIGHT: Score = 0.5;

pub fn piece_value(class: PieceClass) -> Score {
    match class {
        PieceClass::Pawn => 1.0,
        PieceClass::Knight => 3.0,
        PieceClass::Bishop => 3.0,
        PieceClass::Rook => 5.0,
        PieceClass::Queen => 9.0,
        PieceClass::King => 100.0,
    }
}

/// Light's material minus Dark's material.
pub fn material_balance(board: &Board) -> Score {
    let mut balance = 0.0;
    for row in 0..8i8 {
        for col in 0..8i8 {
            if let Some(piece) = board.view((row, col)) {
                match piece.team {
                    PieceTeam::Light => balance += piece_value(piece.class),
                    PieceTeam::Dark => balance -= piece_value(piece.class),
                }
            }
        }
    }
    balance
}

/// A scoring heuristic over full game states.
///
/// Implementations must respect the terminal flags on the state: callers
/// refresh them by generating legal moves before scoring.
pub trait BoardScorer {
    fn score(&self, game: &GameState) -> Score;
}

/// Returns the terminal score if the position is over, otherwise `None`.
fn terminal_score(game: &GameState) -> Option<Score> {
    if game.checkmate {
        // The side to move is the side with no escape.
        return Some(match game.turn {
            PieceTeam::Light => -CHECKMATE_SCORE,
            PieceTeam::Dark => CHECKMATE_SCORE,
        });
    }
    if game.stalemate {
        return Some(STALEMATE_SCORE);
    }
    None
}

/// Material count only.
pub struct MaterialScorer;

impl BoardScorer for MaterialScorer {
    fn score(&self, game: &GameState) -> Score {
        if let Some(terminal) = terminal_score(game) {
            return terminal;
        }
        material_balance(&game.board)
    }
}

/// Material plus weighted piece-square-table bonuses.
pub struct WeightedScorer;

impl BoardScorer for WeightedScorer {
    fn score(&self, game: &GameState) -> Score {
        if let Some(terminal) = terminal_score(game) {
            return terminal;
        }

        let mut score = 0.0;
        for row in 0..8i8 {
            for col in 0..8i8 {
                if let Some(piece) = game.board.view((row, col)) {
                    let value = piece_value(piece.class)
                        + POSITIONAL_WEIGHT * positional_bonus(piece, (row, col));
                    match piece.team {
                        PieceTeam::Light => score += value,
                        PieceTeam::Dark => score -= value,
                    }
                }
            }
        }
        score
    }
}
