//! Position conversions for algebraic coordinates.
//!
//! Converts between human-readable coordinates (e.g., `e4`) and `Position`,
//! used by long algebraic move notation and test setup.

use crate::chess_errors::{ChessErrors, ChessResult};
use crate::game_state::position::Position;

/// Convert algebraic notation (for example: "e4") to a position.
pub fn algebraic_to_position(square: &str) -> ChessResult<Position> {
    let mut chars = square.chars();
    let (Some(file), Some(rank), None) = (chars.next(), chars.next(), chars.next()) else {
        return Err(ChessErrors::InvalidAlgebraicString(square.to_owned()));
    };

    let file = file.to_ascii_lowercase();
    if !('a'..='h').contains(&file) {
        return Err(ChessErrors::InvalidAlgebraicChar(file));
    }
    if !('1'..='8').contains(&rank) {
        return Err(ChessErrors::InvalidAlgebraicChar(rank));
    }

    let column = file as u8 - b'a' + 1;
    let row = rank as u8 - b'0';
    Position::new(row, column)
}

/// Convert a position to algebraic notation (for example: "e4").
#[inline]
pub fn position_to_algebraic(position: &Position) -> String {
    format!("{}{}", position.file(), position.rank())
}
