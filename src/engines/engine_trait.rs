//! Move-chooser abstraction.
//!
//! A collaborator that needs "some move for the side to move" (a test
//! harness, a practice opponent) asks an `Engine` rather than reaching into
//! move generation itself.

use crate::chess_errors::ChessResult;
use crate::game_state::chess_move::ChessMove;
use crate::game_state::game::Game;

pub trait Engine: Send {
    fn name(&self) -> &str;

    /// A legal move for the side to move, or `None` when it has none.
    fn choose_move(&mut self, game: &Game) -> ChessResult<Option<ChessMove>>;
}
