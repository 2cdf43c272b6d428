use crate::game_state::board::Board;
use crate::game_state::chess_move::ChessMove;
use crate::game_state::chess_types::Piece;
use crate::game_state::position::{Direction, Position};
use crate::moves::slider_moves::generate_ray_moves;

/// The queen's eight directions, one step each. No castling.
pub fn generate_king_moves(board: &Board, start: Position, piece: Piece, out: &mut Vec<ChessMove>) {
    generate_ray_moves(board, start, piece, &Direction::ALL, Some(1), out);
}
