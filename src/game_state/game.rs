//! The game orchestrator.
//!
//! `Game` owns a `Board`, whose turn it is, and what each side has captured.
//! Queries borrow the board read-only; `make_move` is the only path that
//! changes it during play, and it only does so after full validation.

use log::debug;

use crate::chess_errors::ChessResult;
use crate::game_state::board::Board;
use crate::game_state::chess_move::ChessMove;
use crate::game_state::chess_types::{Piece, Team};
use crate::game_state::position::Position;
use crate::move_generation::game_outcome::{self, GameStatus};
use crate::move_generation::legal_move_apply::{commit_move, validate_move};
use crate::move_generation::legal_move_checks;
use crate::move_generation::legal_move_filter;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    board: Board,
    team_turn: Team,
    captures: [Vec<Piece>; 2],
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

impl Game {
    /// Standard starting position, White to move.
    pub fn new() -> Self {
        Self::from_board(Board::standard(), Team::White)
    }

    /// A game over a custom layout, e.g. a puzzle.
    pub fn from_board(board: Board, team_turn: Team) -> Self {
        Self {
            board,
            team_turn,
            captures: [Vec::new(), Vec::new()],
        }
    }

    #[inline]
    pub fn team_turn(&self) -> Team {
        self.team_turn
    }

    #[inline]
    pub fn set_team_turn(&mut self, team: Team) {
        self.team_turn = team;
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Replaces the board wholesale. Side to move and capture history are
    /// left alone.
    pub fn set_board(&mut self, board: Board) {
        self.board = board;
    }

    /// Pieces `team` has taken from its opponent, oldest first.
    #[inline]
    pub fn captured_by(&self, team: Team) -> &[Piece] {
        &self.captures[team.index()]
    }

    /// Legal moves for the piece on `position`, or `None` for an empty
    /// square. Ignores whose turn it is.
    pub fn valid_moves(&self, position: Position) -> Option<Vec<ChessMove>> {
        legal_move_filter::valid_moves(&self.board, position)
    }

    /// Every legal move `team` could make.
    pub fn all_valid_moves(&self, team: Team) -> Vec<ChessMove> {
        legal_move_filter::all_valid_moves(&self.board, team)
    }

    /// Validates and plays `chess_move` for the side to move.
    ///
    /// On failure the game is unchanged. On success any captured piece is
    /// recorded and the turn passes to the opponent.
    pub fn make_move(&mut self, chess_move: ChessMove) -> ChessResult<()> {
        let piece = validate_move(&self.board, self.team_turn, &chess_move).inspect_err(|err| {
            debug!("rejected {chess_move} for {}: {err}", self.team_turn);
        })?;

        let captured = commit_move(&mut self.board, &chess_move);
        if let Some(captured) = captured {
            debug!("{piece} takes {captured} with {chess_move}");
            self.captures[self.team_turn.index()].push(captured);
        } else {
            debug!("{piece} plays {chess_move}");
        }

        self.team_turn = self.team_turn.opponent();
        Ok(())
    }

    /// The first opposing square attacking `position`, as if `piece` stood
    /// there.
    pub fn threatener_of(&self, piece: Piece, position: Position) -> Option<Position> {
        legal_move_checks::threatener_of(&self.board, piece, position)
    }

    pub fn is_in_check(&self, team: Team) -> bool {
        legal_move_checks::is_in_check(&self.board, team)
    }

    pub fn is_in_checkmate(&self, team: Team) -> bool {
        game_outcome::is_in_checkmate(&self.board, team)
    }

    pub fn is_in_stalemate(&self, team: Team) -> bool {
        game_outcome::is_in_stalemate(&self.board, team)
    }

    /// Status of the side to move.
    pub fn status(&self) -> GameStatus {
        game_outcome::game_status(&self.board, self.team_turn)
    }
}
