//! Random-move engine.
//!
//! Selects uniformly from the legal moves of the side to move. Used for
//! random playouts in tests and benchmarks; seed it for reproducible games.

use log::debug;
use rand::prelude::IndexedRandom;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::chess_errors::ChessResult;
use crate::engines::engine_trait::Engine;
use crate::game_state::chess_move::ChessMove;
use crate::game_state::game::Game;

pub struct RandomEngine {
    rng: StdRng,
}

impl RandomEngine {
    /// Seeded from the operating system.
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Same seed, same sequence of choices for the same positions.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine for RandomEngine {
    fn name(&self) -> &str {
        "Random"
    }

    fn choose_move(&mut self, game: &Game) -> ChessResult<Option<ChessMove>> {
        let legal_moves = game.all_valid_moves(game.team_turn());
        debug!(
            "random engine choosing among {} moves for {}",
            legal_moves.len(),
            game.team_turn()
        );
        Ok(legal_moves.as_slice().choose(&mut self.rng).copied())
    }
}

/// Plays up to `max_plies` random moves from `game`, stopping early once the
/// side to move has no legal move. Returns the moves played.
pub fn random_playout(
    game: &mut Game,
    engine: &mut dyn Engine,
    max_plies: usize,
) -> ChessResult<Vec<ChessMove>> {
    let mut played = Vec::new();
    for _ in 0..max_plies {
        let Some(chess_move) = engine.choose_move(game)? else {
            break;
        };
        game.make_move(chess_move)?;
        played.push(chess_move);
    }
    Ok(played)
}
