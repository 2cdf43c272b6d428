//! Shared ray walk for bishops, rooks, queens and the king.
//!
//! A walk in one direction adds every empty square, adds the first enemy square
//! and stops there, and stops without adding anything at an ally or the edge.

use crate::game_state::board::Board;
use crate::game_state::chess_move::ChessMove;
use crate::game_state::chess_types::Piece;
use crate::game_state::position::{Direction, Position};

/// Walks each of `directions` from `start` for at most `max_steps` squares
/// (`None` for unbounded) and pushes the reachable destinations onto `out`.
pub fn generate_ray_moves(
    board: &Board,
    start: Position,
    piece: Piece,
    directions: &[Direction],
    max_steps: Option<usize>,
    out: &mut Vec<ChessMove>,
) {
    for direction in directions {
        let mut current = start;
        let mut steps = 0usize;

        while max_steps.map_or(true, |limit| steps < limit) {
            let Some(next) = current.neighbor(*direction) else {
                break;
            };
            steps += 1;

            match board.piece_at(next) {
                None => out.push(ChessMove::new(start, next, None)),
                Some(occupant) => {
                    if occupant.is_enemy(&piece) {
                        out.push(ChessMove::new(start, next, None));
                    }
                    break;
                }
            }

            current = next;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::chess_types::{PieceType, Team};

    fn pos(row: u8, column: u8) -> Position {
        Position::new(row, column).unwrap()
    }

    #[test]
    fn walk_stops_at_enemy_after_adding_it() {
        let mut board = Board::new();
        let rook = Piece::new(Team::White, PieceType::Rook);
        board.place(pos(1, 1), rook);
        board.place(pos(4, 1), Piece::new(Team::Black, PieceType::Pawn));

        let mut out = Vec::new();
        generate_ray_moves(&board, pos(1, 1), rook, &[Direction::North], None, &mut out);

        let ends: Vec<Position> = out.iter().map(|m| m.end).collect();
        assert_eq!(ends, vec![pos(2, 1), pos(3, 1), pos(4, 1)]);
    }

    #[test]
    fn walk_stops_before_ally() {
        let mut board = Board::new();
        let rook = Piece::new(Team::White, PieceType::Rook);
        board.place(pos(1, 1), rook);
        board.place(pos(1, 3), Piece::new(Team::White, PieceType::Bishop));

        let mut out = Vec::new();
        generate_ray_moves(&board, pos(1, 1), rook, &[Direction::East], None, &mut out);

        assert_eq!(out, vec![ChessMove::new(pos(1, 1), pos(1, 2), None)]);
    }

    #[test]
    fn step_limit_caps_the_walk() {
        let board = Board::new();
        let king = Piece::new(Team::White, PieceType::King);

        let mut out = Vec::new();
        generate_ray_moves(&board, pos(4, 4), king, &[Direction::North], Some(1), &mut out);

        assert_eq!(out, vec![ChessMove::new(pos(4, 4), pos(5, 4), None)]);
    }

    #[test]
    fn walk_off_the_edge_adds_nothing() {
        let board = Board::new();
        let bishop = Piece::new(Team::Black, PieceType::Bishop);

        let mut out = Vec::new();
        generate_ray_moves(&board, pos(8, 8), bishop, &[Direction::NorthEast], None, &mut out);

        assert!(out.is_empty());
    }
}
