pub mod minimax;
pub mod random;
pub mod search;

use checkers_core::{GameState, Move};

/// Core trait for checkers agents.
pub trait Agent {
    /// Get a move for the side to move, or None if it has no move.
    fn suggest_move(&mut self, state: &GameState) -> Option<Move>;

    /// Get the agent's name.
    fn name(&self) -> &str;
}

pub use minimax::MinimaxAgent;
pub use random::RandomAgent;
pub use search::{search, SearchResult};
