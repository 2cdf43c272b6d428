//! Piece placement on the 8x8 grid.
//!
//! `Board` is a plain map from `Position` to `Piece`. It knows nothing about
//! turns or legality; `Game` layers those on top.

use std::collections::HashMap;
use std::fmt;

use crate::game_state::chess_move::ChessMove;
use crate::game_state::chess_rules::{
    back_row, pawn_start_row, BACK_RANK, FIRST_COLUMN, FIRST_ROW, LAST_COLUMN, LAST_ROW,
};
use crate::game_state::chess_types::{Piece, PieceType, Team};
use crate::game_state::position::Position;

/// A piece together with where it stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Square {
    pub position: Position,
    pub piece: Piece,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Board {
    pieces: HashMap<Position, Piece>,
}

impl Board {
    /// An empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// A board holding the standard 32-piece starting layout.
    pub fn standard() -> Self {
        let mut board = Self::new();
        board.reset();
        board
    }

    /// Clears the board and sets up the standard starting layout.
    pub fn reset(&mut self) {
        self.pieces.clear();

        for position in Position::all() {
            for team in Team::ALL {
                let piece_type = if position.row() == back_row(team) {
                    BACK_RANK[usize::from(position.column() - FIRST_COLUMN)]
                } else if position.row() == pawn_start_row(team) {
                    PieceType::Pawn
                } else {
                    continue;
                };
                self.place(position, Piece::new(team, piece_type));
            }
        }
    }

    #[inline]
    pub fn piece_at(&self, position: Position) -> Option<Piece> {
        self.pieces.get(&position).copied()
    }

    #[inline]
    pub fn is_empty_at(&self, position: Position) -> bool {
        !self.pieces.contains_key(&position)
    }

    /// Puts `piece` on `position`, returning whatever was there before.
    pub fn place(&mut self, position: Position, piece: Piece) -> Option<Piece> {
        self.pieces.insert(position, piece)
    }

    /// Takes the piece off `position`.
    ///
    /// # Panics
    ///
    /// Panics if the square is empty. Callers look before they remove.
    pub fn remove(&mut self, position: Position) -> Piece {
        match self.pieces.remove(&position) {
            Some(piece) => piece,
            None => panic!("tried to remove a piece from empty square {position}"),
        }
    }

    /// Moves the piece on the move's start square to its end square,
    /// overwriting any occupant there. A promotion move lands the promoted
    /// piece instead of the pawn.
    ///
    /// # Panics
    ///
    /// Panics if the start square is empty.
    pub fn relocate(&mut self, chess_move: &ChessMove) {
        let piece = self.remove(chess_move.start);
        let landed = match chess_move.promotion {
            Some(promotion) => Piece::new(piece.team, promotion),
            None => piece,
        };
        self.place(chess_move.end, landed);
    }

    /// Every square occupied by `team`, ordered by position.
    pub fn team_squares(&self, team: Team) -> Vec<Square> {
        let mut squares: Vec<Square> = self
            .pieces
            .iter()
            .filter(|(_, piece)| piece.team == team)
            .map(|(position, piece)| Square {
                position: *position,
                piece: *piece,
            })
            .collect();
        squares.sort_by_key(|square| square.position);
        squares
    }

    /// The square holding `team`'s piece of `piece_type`.
    ///
    /// Meant for unique pieces (the king). With several matches the one with
    /// the lowest position is returned.
    pub fn square_of(&self, team: Team, piece_type: PieceType) -> Option<Square> {
        let wanted = Piece::new(team, piece_type);
        self.pieces
            .iter()
            .filter(|(_, piece)| **piece == wanted)
            .map(|(position, piece)| Square {
                position: *position,
                piece: *piece,
            })
            .min_by_key(|square| square.position)
    }

    #[inline]
    pub fn position_of(&self, team: Team, piece_type: PieceType) -> Option<Position> {
        self.square_of(team, piece_type).map(|square| square.position)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.pieces.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.pieces.is_empty()
    }

    /// Occupied squares in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = Square> + '_ {
        self.pieces.iter().map(|(position, piece)| Square {
            position: *position,
            piece: *piece,
        })
    }
}

/// Eight lines of eight characters, top rank first. Upper-case is White,
/// lower-case Black, space is empty; the king is `G`/`g`.
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in (FIRST_ROW..=LAST_ROW).rev() {
            for column in FIRST_COLUMN..=LAST_COLUMN {
                let code = Position::new(row, column)
                    .ok()
                    .and_then(|position| self.piece_at(position))
                    .map_or(' ', |piece| piece.short_code());
                write!(f, "{code}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
