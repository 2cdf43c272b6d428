use crate::game_state::board::Board;
use crate::game_state::chess_move::ChessMove;
use crate::game_state::chess_types::Piece;
use crate::game_state::position::{Direction, Position};
use crate::moves::slider_moves::generate_ray_moves;

pub fn generate_rook_moves(board: &Board, start: Position, piece: Piece, out: &mut Vec<ChessMove>) {
    generate_ray_moves(board, start, piece, &Direction::ORTHOGONAL, None, out);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::chess_types::{PieceType, Team};

    fn pos(row: u8, column: u8) -> Position {
        Position::new(row, column).unwrap()
    }

    #[test]
    fn rook_on_d4_has_fourteen_squares() {
        let mut board = Board::new();
        let rook = Piece::new(Team::White, PieceType::Rook);
        board.place(pos(4, 4), rook);

        let mut out = Vec::new();
        generate_rook_moves(&board, pos(4, 4), rook, &mut out);

        assert_eq!(out.len(), 14);
        assert!(out.iter().all(|m| !m.is_diagonal()));
        assert!(out.iter().all(|m| m.end != pos(4, 4)));
    }

    #[test]
    fn rook_blocker_stops_ray() {
        let mut board = Board::new();
        let rook = Piece::new(Team::White, PieceType::Rook);
        board.place(pos(1, 1), rook);
        board.place(pos(4, 1), Piece::new(Team::Black, PieceType::Knight));

        let mut out = Vec::new();
        generate_rook_moves(&board, pos(1, 1), rook, &mut out);

        assert!(out.iter().any(|m| m.end == pos(4, 1)));
        assert!(!out.iter().any(|m| m.end == pos(5, 1)));
        // 3 up the file, 7 along the rank.
        assert_eq!(out.len(), 10);
    }
}
