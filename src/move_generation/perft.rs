//! Perft: exhaustive legal move tree counting.
//!
//! Walks every legal line to a fixed depth and tallies the leaves. Known node
//! counts for the standard position make this the broadest check of move
//! generation and legality filtering together.

use crate::game_state::board::Board;
use crate::game_state::chess_types::Team;
use crate::game_state::game::Game;
use crate::move_generation::game_outcome::is_in_checkmate;
use crate::move_generation::legal_move_checks::is_in_check;
use crate::move_generation::legal_move_filter::{all_valid_moves, board_after_move};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PerftCounts {
    pub nodes: usize,
    pub captures: usize,
    pub promotions: usize,
    pub checks: usize,
    pub checkmates: usize,
}

impl PerftCounts {
    fn merge(&mut self, rhs: PerftCounts) {
        self.nodes += rhs.nodes;
        self.captures += rhs.captures;
        self.promotions += rhs.promotions;
        self.checks += rhs.checks;
        self.checkmates += rhs.checkmates;
    }
}

/// Counts the leaves `depth` plies below the game's current position.
pub fn perft(game: &Game, depth: u8) -> PerftCounts {
    perft_board(game.board(), game.team_turn(), depth)
}

pub fn perft_board(board: &Board, team: Team, depth: u8) -> PerftCounts {
    if depth == 0 {
        return PerftCounts {
            nodes: 1,
            ..PerftCounts::default()
        };
    }

    let mut total = PerftCounts::default();
    for chess_move in all_valid_moves(board, team) {
        let next = board_after_move(board, &chess_move);

        if depth == 1 {
            total.nodes += 1;
            if !board.is_empty_at(chess_move.end) {
                total.captures += 1;
            }
            if chess_move.promotion.is_some() {
                total.promotions += 1;
            }
            if is_in_check(&next, team.opponent()) {
                total.checks += 1;
                if is_in_checkmate(&next, team.opponent()) {
                    total.checkmates += 1;
                }
            }
        } else {
            total.merge(perft_board(&next, team.opponent(), depth - 1));
        }
    }

    total
}

/// Leaf counts split by root move, in long algebraic form. Handy for
/// narrowing down a perft mismatch.
pub fn perft_divide(game: &Game, depth: u8) -> Vec<(String, usize)> {
    let board = game.board();
    let team = game.team_turn();
    all_valid_moves(board, team)
        .into_iter()
        .map(|chess_move| {
            let next = board_after_move(board, &chess_move);
            let nodes = perft_board(&next, team.opponent(), depth.saturating_sub(1)).nodes;
            (chess_move.to_string(), nodes)
        })
        .collect()
}
