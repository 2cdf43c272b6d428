use crate::game_state::board::Board;
use crate::game_state::chess_move::ChessMove;
use crate::game_state::chess_types::Piece;
use crate::game_state::position::{Direction, Position};
use crate::moves::slider_moves::generate_ray_moves;

pub fn generate_queen_moves(board: &Board, start: Position, piece: Piece, out: &mut Vec<ChessMove>) {
    generate_ray_moves(board, start, piece, &Direction::ALL, None, out);
}
