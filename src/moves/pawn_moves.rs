//! Pawn geometry.
//!
//! Pawns push straight ahead onto empty squares only (two squares from their
//! starting row when both are empty) and capture diagonally forward only. Any
//! move that lands on the far row fans out into one move per promotion choice.

use crate::game_state::board::Board;
use crate::game_state::chess_move::ChessMove;
use crate::game_state::chess_rules::{pawn_start_row, promotion_row, PROMOTION_TYPES};
use crate::game_state::chess_types::{Piece, Team};
use crate::game_state::position::{Direction, Position};

/// (forward, forward-left, forward-right) for a team.
#[inline]
pub const fn pawn_directions(team: Team) -> (Direction, Direction, Direction) {
    match team {
        Team::White => (Direction::North, Direction::NorthWest, Direction::NorthEast),
        Team::Black => (Direction::South, Direction::SouthWest, Direction::SouthEast),
    }
}

pub fn generate_pawn_moves(board: &Board, start: Position, piece: Piece, out: &mut Vec<ChessMove>) {
    let (forward, capture_left, capture_right) = pawn_directions(piece.team);

    if let Some(one_step) = start.neighbor(forward) {
        if board.is_empty_at(one_step) {
            push_pawn_move(start, one_step, piece, out);

            if start.row() == pawn_start_row(piece.team) {
                if let Some(two_step) = one_step.neighbor(forward) {
                    if board.is_empty_at(two_step) {
                        push_pawn_move(start, two_step, piece, out);
                    }
                }
            }
        }
    }

    for direction in [capture_left, capture_right] {
        let Some(target) = start.neighbor(direction) else {
            continue;
        };
        if board
            .piece_at(target)
            .is_some_and(|occupant| occupant.is_enemy(&piece))
        {
            push_pawn_move(start, target, piece, out);
        }
    }
}

fn push_pawn_move(start: Position, end: Position, piece: Piece, out: &mut Vec<ChessMove>) {
    if end.row() == promotion_row(piece.team) {
        for promotion in PROMOTION_TYPES {
            out.push(ChessMove::new(start, end, Some(promotion)));
        }
    } else {
        out.push(ChessMove::new(start, end, None));
    }
}
