//! Raw move geometry, dispatched on piece type.
//!
//! These moves ignore whose turn it is and whether the mover's own king would
//! be left in check. `Game` filters them.

use crate::game_state::board::Board;
use crate::game_state::chess_move::ChessMove;
use crate::game_state::chess_types::{Piece, PieceType};
use crate::game_state::position::Position;
use crate::moves::bishop_moves::generate_bishop_moves;
use crate::moves::king_moves::generate_king_moves;
use crate::moves::knight_moves::generate_knight_moves;
use crate::moves::pawn_moves::generate_pawn_moves;
use crate::moves::queen_moves::generate_queen_moves;
use crate::moves::rook_moves::generate_rook_moves;

impl Piece {
    /// Every destination this piece could reach from `position` on `board`,
    /// as if it stood there.
    pub fn piece_moves(&self, board: &Board, position: Position) -> Vec<ChessMove> {
        let mut out = Vec::with_capacity(28);
        match self.piece_type {
            PieceType::King => generate_king_moves(board, position, *self, &mut out),
            PieceType::Queen => generate_queen_moves(board, position, *self, &mut out),
            PieceType::Bishop => generate_bishop_moves(board, position, *self, &mut out),
            PieceType::Knight => generate_knight_moves(board, position, *self, &mut out),
            PieceType::Rook => generate_rook_moves(board, position, *self, &mut out),
            PieceType::Pawn => generate_pawn_moves(board, position, *self, &mut out),
        }
        out
    }

    /// True if this piece, standing on `from`, attacks `target`.
    pub fn threatens(&self, board: &Board, from: Position, target: Position) -> bool {
        self.piece_moves(board, from)
            .iter()
            .any(|chess_move| chess_move.end == target)
    }
}

/// Raw moves of whatever stands on `position`, or `None` for an empty square.
pub fn piece_moves(board: &Board, position: Position) -> Option<Vec<ChessMove>> {
    board
        .piece_at(position)
        .map(|piece| piece.piece_moves(board, position))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::chess_types::Team;

    fn pos(row: u8, column: u8) -> Position {
        Position::new(row, column).unwrap()
    }

    #[test]
    fn empty_square_has_no_moves() {
        assert_eq!(piece_moves(&Board::new(), pos(4, 4)), None);
    }

    #[test]
    fn starting_position_has_twenty_raw_moves_for_white() {
        let board = Board::standard();
        let total: usize = board
            .team_squares(Team::White)
            .iter()
            .map(|square| square.piece.piece_moves(&board, square.position).len())
            .sum();
        assert_eq!(total, 20);
    }

    #[test]
    fn piece_moves_does_not_mutate_board() {
        let board = Board::standard();
        let before = board.clone();
        for square in board.team_squares(Team::Black) {
            let _ = piece_moves(&board, square.position);
        }
        assert_eq!(board, before);
    }

    #[test]
    fn pawn_threatens_diagonal_only_when_occupied() {
        let mut board = Board::new();
        let pawn = Piece::new(Team::White, PieceType::Pawn);
        board.place(pos(4, 4), pawn);
        assert!(!pawn.threatens(&board, pos(4, 4), pos(5, 5)));
        board.place(pos(5, 5), Piece::new(Team::Black, PieceType::King));
        assert!(pawn.threatens(&board, pos(4, 4), pos(5, 5)));
    }
}
