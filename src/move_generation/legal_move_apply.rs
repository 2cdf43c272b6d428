//! Move validation and commit for `Game::make_move`.
//!
//! Validation runs in a fixed order so every rejected move reports the first
//! rule it breaks.

use crate::chess_errors::{ChessErrors, ChessResult, IllegalMoveReason};
use crate::game_state::board::Board;
use crate::game_state::chess_move::ChessMove;
use crate::game_state::chess_types::{Piece, Team};
use crate::move_generation::legal_move_filter::valid_moves;

fn illegal(chess_move: &ChessMove, reason: IllegalMoveReason) -> ChessErrors {
    ChessErrors::IllegalMove {
        chess_move: *chess_move,
        reason,
    }
}

/// Checks `chess_move` against `board` with `team_turn` to move and returns
/// the moving piece.
pub fn validate_move(board: &Board, team_turn: Team, chess_move: &ChessMove) -> ChessResult<Piece> {
    let piece = board
        .piece_at(chess_move.start)
        .ok_or_else(|| illegal(chess_move, IllegalMoveReason::NoPiece))?;

    if piece.team != team_turn {
        return Err(illegal(chess_move, IllegalMoveReason::NotYourTurn));
    }

    let legal = valid_moves(board, chess_move.start).unwrap_or_default();
    if !legal.contains(chess_move) {
        return Err(illegal(chess_move, IllegalMoveReason::NotALegalDestination));
    }

    if let Some(occupant) = board.piece_at(chess_move.end) {
        if !occupant.is_enemy(&piece) {
            return Err(illegal(chess_move, IllegalMoveReason::CannotCaptureAlly));
        }
    }

    Ok(piece)
}

/// Plays an already validated move, returning the captured piece if any.
pub fn commit_move(board: &mut Board, chess_move: &ChessMove) -> Option<Piece> {
    let captured = if board.is_empty_at(chess_move.end) {
        None
    } else {
        Some(board.remove(chess_move.end))
    };
    board.relocate(chess_move);
    captured
}
