//! 8x8 piece grid.
//!
//! The board is a plain array of optional piece records. Its shape is fixed;
//! contents are mutated in place by `GameState` only.

use crate::game_state::chess_types::*;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    squares: [[Option<PieceRecord>; 8]; 8],
}

impl Board {
    pub fn empty() -> Self {
        Board {
            squares: [[None; 8]; 8],
        }
    }

    /// Standard starting position.
    pub fn new_game() -> Self {
        use PieceClass::*;

        let mut board = Board::empty();
        let back_rank = [Rook, Knight, Bishop, Queen, King, Bishop, Knight, Rook];

        for (col, &class) in back_rank.iter().enumerate() {
            board.place(
                PieceRecord {
                    team: PieceTeam::Dark,
                    class,
                },
                (0, col as i8),
            );
            board.place(
                PieceRecord {
                    team: PieceTeam::Light,
                    class,
                },
                (7, col as i8),
            );
        }
        for col in 0..8 {
            board.place(
                PieceRecord {
                    team: PieceTeam::Dark,
                    class: Pawn,
                },
                (1, col),
            );
            board.place(
                PieceRecord {
                    team: PieceTeam::Light,
                    class: Pawn,
                },
                (6, col),
            );
        }
        board
    }

    #[inline]
    pub fn view(&self, x: BoardLocation) -> Option<PieceRecord> {
        self.squares[x.0 as usize][x.1 as usize]
    }

    /// Write a piece to a square, overwriting whatever was there.
    #[inline]
    pub fn place(&mut self, piece: PieceRecord, x: BoardLocation) {
        self.squares[x.0 as usize][x.1 as usize] = Some(piece);
    }

    #[inline]
    pub fn clear(&mut self, x: BoardLocation) -> Option<PieceRecord> {
        self.squares[x.0 as usize][x.1 as usize].take()
    }

    pub fn find_king(&self, team: PieceTeam) -> Option<BoardLocation> {
        for row in 0..8 {
            for col in 0..8 {
                if let Some(piece) = self.squares[row][col] {
                    if piece.team == team && piece.class == PieceClass::King {
                        return Some((row as i8, col as i8));
                    }
                }
            }
        }
        None
    }
}
