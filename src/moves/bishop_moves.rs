use crate::game_state::board::Board;
use crate::game_state::chess_move::ChessMove;
use crate::game_state::chess_types::Piece;
use crate::game_state::position::{Direction, Position};
use crate::moves::slider_moves::generate_ray_moves;

pub fn generate_bishop_moves(board: &Board, start: Position, piece: Piece, out: &mut Vec<ChessMove>) {
    generate_ray_moves(board, start, piece, &Direction::DIAGONAL, None, out);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::chess_types::{PieceType, Team};

    #[test]
    fn bishop_in_corner_sweeps_long_diagonal() {
        let mut board = Board::new();
        let a1 = Position::new(1, 1).unwrap();
        let bishop = Piece::new(Team::White, PieceType::Bishop);
        board.place(a1, bishop);

        let mut out = Vec::new();
        generate_bishop_moves(&board, a1, bishop, &mut out);

        assert_eq!(out.len(), 7);
        assert!(out.iter().all(|m| m.end.row() == m.end.column()));
    }

    #[test]
    fn bishop_in_centre_has_thirteen_moves() {
        let mut board = Board::new();
        let d4 = Position::new(4, 4).unwrap();
        let bishop = Piece::new(Team::Black, PieceType::Bishop);
        board.place(d4, bishop);

        let mut out = Vec::new();
        generate_bishop_moves(&board, d4, bishop, &mut out);

        assert_eq!(out.len(), 13);
        assert!(out.iter().all(|m| m.is_diagonal()));
    }
}
