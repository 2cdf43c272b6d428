//! Legal move filtering.
//!
//! Raw geometry from `moves` is narrowed to moves that do not leave the
//! mover's own king attacked. Each candidate is tried on a scratch copy of the
//! board; the caller's board is never touched.

use log::trace;

use crate::game_state::board::Board;
use crate::game_state::chess_move::ChessMove;
use crate::game_state::chess_types::{Piece, PieceType, Team};
use crate::game_state::position::Position;
use crate::move_generation::legal_move_checks::{is_square_threatened, king_square};

/// The board as it would look after `chess_move`, captures and promotion
/// included.
///
/// # Panics
///
/// Panics if the move's start square is empty.
pub fn board_after_move(board: &Board, chess_move: &ChessMove) -> Board {
    let mut next = board.clone();
    if !next.is_empty_at(chess_move.end) {
        next.remove(chess_move.end);
    }
    next.relocate(chess_move);
    next
}

/// True if `team`'s king is not attacked once `chess_move` has been played.
/// A team without a king has nothing to expose.
pub fn leaves_king_safe(board: &Board, chess_move: &ChessMove, team: Team) -> bool {
    let next = board_after_move(board, chess_move);
    match king_square(&next, team) {
        Some(king) => !is_square_threatened(&next, Piece::new(team, PieceType::King), king),
        None => true,
    }
}

/// Legal moves for the piece on `position`, or `None` if the square is empty.
///
/// Turn order is not considered; this answers "where could this piece go".
pub fn valid_moves(board: &Board, position: Position) -> Option<Vec<ChessMove>> {
    let piece = board.piece_at(position)?;
    let mut moves = piece.piece_moves(board, position);

    moves.retain(|chess_move| {
        if piece.piece_type == PieceType::Pawn
            && chess_move.is_diagonal()
            && board.is_empty_at(chess_move.end)
        {
            trace!("dropping {chess_move}: pawn diagonal onto empty square");
            return false;
        }
        if !leaves_king_safe(board, chess_move, piece.team) {
            trace!("dropping {chess_move}: {} king would be attacked", piece.team);
            return false;
        }
        true
    });

    Some(moves)
}

/// Every legal move available to `team`, grouped by square in position order.
pub fn all_valid_moves(board: &Board, team: Team) -> Vec<ChessMove> {
    board
        .team_squares(team)
        .into_iter()
        .flat_map(|square| valid_moves(board, square.position).unwrap_or_default())
        .collect()
}

/// True if `team` has at least one legal move. Stops at the first one found.
pub fn has_any_valid_move(board: &Board, team: Team) -> bool {
    board.team_squares(team).into_iter().any(|square| {
        valid_moves(board, square.position).is_some_and(|moves| !moves.is_empty())
    })
}
