//! Parser for the textual board layout produced by `Display for Board`.
//!
//! Eight lines of eight characters, top rank first, one character per square:
//! `G Q B K R P` for White, the same in lower case for Black, space for
//! empty. Used to set up puzzles and test positions.

use crate::chess_errors::{ChessErrors, ChessResult};
use crate::game_state::board::Board;
use crate::game_state::chess_rules::{FIRST_COLUMN, LAST_ROW};
use crate::game_state::chess_types::Piece;
use crate::game_state::position::Position;

pub fn parse_board(text: &str) -> ChessResult<Board> {
    let rows: Vec<&str> = text.lines().collect();
    if rows.len() != 8 {
        return Err(ChessErrors::InvalidBoardText(format!(
            "expected 8 rows, found {}",
            rows.len()
        )));
    }

    let mut board = Board::new();
    for (offset, line) in rows.iter().enumerate() {
        let row = LAST_ROW - offset as u8;
        let squares: Vec<char> = line.chars().collect();
        if squares.len() != 8 {
            return Err(ChessErrors::InvalidBoardText(format!(
                "row {row} has {} squares, expected 8",
                squares.len()
            )));
        }

        for (index, code) in squares.into_iter().enumerate() {
            if code == ' ' {
                continue;
            }
            let piece = Piece::from_short_code(code).ok_or_else(|| {
                ChessErrors::InvalidBoardText(format!("unknown piece '{code}' on row {row}"))
            })?;
            board.place(Position::new(row, FIRST_COLUMN + index as u8)?, piece);
        }
    }

    Ok(board)
}
