//! Canonical chess-rule constants.
//!
//! Board dimensions, the ranks that give pawns their special behaviour, the
//! promotion choices, and the standard back-rank order used by
//! `Board::reset`.

use crate::game_state::chess_types::{PieceType, Team};

pub const FIRST_ROW: u8 = 1;
pub const LAST_ROW: u8 = 8;
pub const FIRST_COLUMN: u8 = 1;
pub const LAST_COLUMN: u8 = 8;

/// Back rank from column 1 to column 8.
pub const BACK_RANK: [PieceType; 8] = [
    PieceType::Rook,
    PieceType::Knight,
    PieceType::Bishop,
    PieceType::Queen,
    PieceType::King,
    PieceType::Bishop,
    PieceType::Knight,
    PieceType::Rook,
];

/// Pieces a pawn may become, in generation order.
pub const PROMOTION_TYPES: [PieceType; 4] = [
    PieceType::Queen,
    PieceType::Rook,
    PieceType::Knight,
    PieceType::Bishop,
];

#[inline]
pub const fn back_row(team: Team) -> u8 {
    match team {
        Team::White => FIRST_ROW,
        Team::Black => LAST_ROW,
    }
}

/// Row the team's pawns start on; double steps are only allowed from here.
#[inline]
pub const fn pawn_start_row(team: Team) -> u8 {
    match team {
        Team::White => FIRST_ROW + 1,
        Team::Black => LAST_ROW - 1,
    }
}

/// Row on which the team's pawns promote.
#[inline]
pub const fn promotion_row(team: Team) -> u8 {
    back_row(team.opponent())
}
