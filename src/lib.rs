//! Crate root module declarations for the Opal Chess engine.
//!
//! This file exposes all top-level subsystems (game state, move generation,
//! scoring, engines, and utility helpers) so binaries, tests, and external
//! tooling can import stable module paths.

pub mod chess_errors;

pub mod game_state {
    pub mod board;
    pub mod castling_rights;
    pub mod chess_move;
    pub mod chess_types;
    pub mod game_state;
}

pub mod move_generation {
    pub mod attack_checks;
    pub mod bishop_moves;
    pub mod castling_moves;
    pub mod king_moves;
    pub mod knight_moves;
    pub mod legal_move_generator;
    pub mod pawn_moves;
    pub mod perft;
    pub mod queen_moves;
    pub mod ray_moves;
    pub mod rook_moves;
}

pub mod search {
    pub mod board_scoring;
    pub mod piece_square_tables;
}

pub mod engines {
    pub mod engine_greedy;
    pub mod engine_minimax;
    pub mod engine_negamax;
    pub mod engine_negamax_ab;
    pub mod engine_random;
    pub mod engine_trait;
}

pub mod utils {
    pub mod algebraic;
    pub mod render_game_state;
}
