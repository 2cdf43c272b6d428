use std::fmt;
use std::str::FromStr;

use crate::chess_errors::ChessErrors;
use crate::game_state::chess_types::PieceType;
use crate::game_state::position::Position;
use crate::utils::long_algebraic::{long_algebraic_to_move, move_to_long_algebraic};

/// A request to move whatever stands on `start` to `end`.
///
/// `promotion` is only set for a pawn reaching the far rank. A promotion move
/// and the plain move between the same squares are different moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ChessMove {
    pub start: Position,
    pub end: Position,
    pub promotion: Option<PieceType>,
}

impl ChessMove {
    #[inline]
    pub const fn new(start: Position, end: Position, promotion: Option<PieceType>) -> Self {
        Self {
            start,
            end,
            promotion,
        }
    }

    /// True when start and end share neither a row nor a column.
    #[inline]
    pub fn is_diagonal(&self) -> bool {
        self.start.row() != self.end.row() && self.start.column() != self.end.column()
    }
}

/// Long algebraic form, e.g. `e2e4` or `e7e8q`.
impl fmt::Display for ChessMove {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&move_to_long_algebraic(self))
    }
}

impl FromStr for ChessMove {
    type Err = ChessErrors;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        long_algebraic_to_move(s)
    }
}
