use crate::game_state::board::Board;
use crate::game_state::chess_move::ChessMove;
use crate::game_state::chess_types::Piece;
use crate::game_state::position::{Direction, Position};

use Direction::{East, North, South, West};

/// Two steps along one axis, then one along the other.
pub const KNIGHT_JUMPS: [[Direction; 3]; 8] = [
    [North, North, East],
    [North, North, West],
    [South, South, East],
    [South, South, West],
    [West, West, North],
    [West, West, South],
    [East, East, North],
    [East, East, South],
];

pub fn generate_knight_moves(board: &Board, start: Position, piece: Piece, out: &mut Vec<ChessMove>) {
    for jump in &KNIGHT_JUMPS {
        let Ok(Some(end)) = start.neighbor_path(jump) else {
            continue;
        };
        match board.piece_at(end) {
            Some(occupant) if !occupant.is_enemy(&piece) => {}
            _ => out.push(ChessMove::new(start, end, None)),
        }
    }
}
