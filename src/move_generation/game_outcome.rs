//! Checkmate and stalemate detection.

use log::trace;

use crate::game_state::board::Board;
use crate::game_state::chess_types::{PieceType, Team};
use crate::move_generation::legal_move_checks::{checker_of, is_in_check, king_square};
use crate::move_generation::legal_move_filter::{has_any_valid_move, valid_moves};

/// Where a team stands at the start of its turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameStatus {
    Ongoing,
    Check,
    Checkmate,
    Stalemate,
}

impl GameStatus {
    #[inline]
    pub const fn is_over(self) -> bool {
        matches!(self, GameStatus::Checkmate | GameStatus::Stalemate)
    }
}

/// True if `team` is in check and nothing it can legally do ends the check.
///
/// Responses are tried cheapest first: the king taking the checker, the king
/// stepping away, another piece taking the checker, and finally any other
/// legal move, which can only be a block since every legal move leaves the
/// king safe.
pub fn is_in_checkmate(board: &Board, team: Team) -> bool {
    let Some(threatener) = checker_of(board, team) else {
        return false;
    };
    let Some(king) = king_square(board, team) else {
        return false;
    };

    let king_moves = valid_moves(board, king).unwrap_or_default();
    if king_moves.iter().any(|chess_move| chess_move.end == threatener) {
        trace!("{team} king can take the checker on {threatener}");
        return false;
    }
    if !king_moves.is_empty() {
        trace!("{team} king can step out of check");
        return false;
    }

    let ally_moves: Vec<_> = board
        .team_squares(team)
        .into_iter()
        .filter(|square| square.piece.piece_type != PieceType::King)
        .flat_map(|square| valid_moves(board, square.position).unwrap_or_default())
        .collect();
    if ally_moves.iter().any(|chess_move| chess_move.end == threatener) {
        trace!("{team} can capture the checker on {threatener}");
        return false;
    }
    if !ally_moves.is_empty() {
        trace!("{team} can block the check");
        return false;
    }

    true
}

/// True if `team` is not in check but has no legal move at all.
pub fn is_in_stalemate(board: &Board, team: Team) -> bool {
    !is_in_check(board, team) && !has_any_valid_move(board, team)
}

pub fn game_status(board: &Board, team: Team) -> GameStatus {
    let in_check = is_in_check(board, team);
    let can_move = has_any_valid_move(board, team);
    match (in_check, can_move) {
        (true, true) => GameStatus::Check,
        (true, false) => GameStatus::Checkmate,
        (false, true) => GameStatus::Ongoing,
        (false, false) => GameStatus::Stalemate,
    }
}
