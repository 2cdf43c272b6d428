//! Errors used throughout the rules core.
//!
//! `ChessErrors` is the single error type returned by the crate. Variants fall
//! into two groups:
//! - caller bugs (`InvalidArgument` and the parsing variants), which are never
//!   worth retrying;
//! - rule violations (`IllegalMove`), which are expected during play and can be
//!   reported back to the player.
//!
//! Misuse of `Board` primitives (removing from an empty square) is not
//! represented here; those paths panic.

use thiserror::Error;

use crate::game_state::chess_move::ChessMove;

pub type ChessResult<T> = Result<T, ChessErrors>;

/// Why `Game::make_move` refused a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum IllegalMoveReason {
    #[error("there is no piece at the start position")]
    NoPiece,
    #[error("it is not your turn")]
    NotYourTurn,
    #[error("the piece cannot legally move there")]
    NotALegalDestination,
    #[error("you cannot capture your own piece")]
    CannotCaptureAlly,
}

/// Unified error type for the rules core.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChessErrors {
    /// A required value was out of range or empty. Always a caller bug.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// The move violates turn ownership, geometry, or king safety.
    #[error("illegal move {chess_move}: {reason}")]
    IllegalMove {
        chess_move: ChessMove,
        reason: IllegalMoveReason,
    },

    /// A single character of algebraic notation was invalid.
    #[error("invalid algebraic character '{0}'")]
    InvalidAlgebraicChar(char),

    /// An algebraic square or move string could not be parsed.
    #[error("invalid algebraic string '{0}'")]
    InvalidAlgebraicString(String),

    /// The textual board layout was malformed.
    #[error("invalid board text: {0}")]
    InvalidBoardText(String),
}

impl ChessErrors {
    /// The rejection reason, if this is an `IllegalMove`.
    pub fn illegal_move_reason(&self) -> Option<IllegalMoveReason> {
        match self {
            ChessErrors::IllegalMove { reason, .. } => Some(*reason),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::position::Position;

    #[test]
    fn illegal_move_message_names_move_and_reason() {
        let chess_move = ChessMove::new(
            Position::new(2, 5).unwrap(),
            Position::new(4, 5).unwrap(),
            None,
        );
        let err = ChessErrors::IllegalMove {
            chess_move,
            reason: IllegalMoveReason::NotYourTurn,
        };
        assert_eq!(err.to_string(), "illegal move e2e4: it is not your turn");
        assert_eq!(err.illegal_move_reason(), Some(IllegalMoveReason::NotYourTurn));
    }

    #[test]
    fn invalid_argument_has_no_move_reason() {
        let err = ChessErrors::InvalidArgument("row 9".to_owned());
        assert_eq!(err.illegal_move_reason(), None);
    }
}
