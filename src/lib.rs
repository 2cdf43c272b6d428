//! Crate root module declarations for the chess rules engine.
//!
//! This file exposes the rule-enforcing subsystems (board and game state,
//! per-piece movement, legality and outcome detection, a random mover, and
//! notation helpers) so tests, benches, and host applications can import
//! stable module paths.

pub mod chess_errors;

pub mod game_state {
    pub mod board;
    pub mod chess_move;
    pub mod chess_rules;
    pub mod chess_types;
    pub mod game;
    pub mod position;
}

pub mod moves {
    pub mod bishop_moves;
    pub mod king_moves;
    pub mod knight_moves;
    pub mod pawn_moves;
    pub mod piece_moves;
    pub mod queen_moves;
    pub mod rook_moves;
    pub mod slider_moves;
}

pub mod move_generation {
    pub mod game_outcome;
    pub mod legal_move_apply;
    pub mod legal_move_checks;
    pub mod legal_move_filter;
    pub mod perft;
}

pub mod engines {
    pub mod engine_random;
    pub mod engine_trait;
}

pub mod utils {
    pub mod algebraic;
    pub mod board_text;
    pub mod long_algebraic;
    pub mod render_board;
}
