//! Threat detection.
//!
//! Everything here reads the board and never changes it. Hypothetical
//! placements are evaluated on a scratch copy.

use log::warn;

use crate::game_state::board::Board;
use crate::game_state::chess_types::{Piece, PieceType, Team};
use crate::game_state::position::Position;

#[inline]
pub fn king_square(board: &Board, team: Team) -> Option<Position> {
    board.position_of(team, PieceType::King)
}

/// The first opposing square (in position order) whose occupant attacks
/// `position`, evaluated as if `piece` stood there.
///
/// The piece on `position` matters: pawns only attack diagonally onto an
/// occupied square, so the answer depends on who is being attacked.
pub fn threatener_of(board: &Board, piece: Piece, position: Position) -> Option<Position> {
    if board.piece_at(position) == Some(piece) {
        return first_threatener(board, piece.team.opponent(), position);
    }

    let mut probe = board.clone();
    probe.place(position, piece);
    first_threatener(&probe, piece.team.opponent(), position)
}

fn first_threatener(board: &Board, attacker: Team, target: Position) -> Option<Position> {
    board
        .team_squares(attacker)
        .into_iter()
        .find(|square| {
            square.position != target && square.piece.threatens(board, square.position, target)
        })
        .map(|square| square.position)
}

#[inline]
pub fn is_square_threatened(board: &Board, piece: Piece, position: Position) -> bool {
    threatener_of(board, piece, position).is_some()
}

/// True if any opposing piece attacks `team`'s king. A board without that
/// king is never in check.
pub fn is_in_check(board: &Board, team: Team) -> bool {
    let Some(king) = king_square(board, team) else {
        warn!("no {team} king on the board; treating as not in check");
        return false;
    };
    is_square_threatened(board, Piece::new(team, PieceType::King), king)
}

/// The square attacking `team`'s king, if it is in check.
pub fn checker_of(board: &Board, team: Team) -> Option<Position> {
    let king = king_square(board, team)?;
    threatener_of(board, Piece::new(team, PieceType::King), king)
}
