use crate::{search::search, Agent};
use checkers_core::{GameState, Move};

/// Agent that picks its move by minimax search to a fixed depth.
pub struct MinimaxAgent {
    name: String,
    depth: u8,
}

impl MinimaxAgent {
    pub fn new(depth: u8) -> Self {
        MinimaxAgent {
            name: format!("Minimax(depth={})", depth),
            depth,
        }
    }
}

impl Agent for MinimaxAgent {
    fn suggest_move(&mut self, state: &GameState) -> Option<Move> {
        let result = search(state, self.depth, state.side_to_move()).ok()?;
        result.best_move
    }

    fn name(&self) -> &str {
        &self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use checkers_core::Color;

    #[test]
    fn test_suggests_a_legal_move() {
        let state = GameState::new(3).unwrap();
        let mut agent = MinimaxAgent::new(3);
        let mv = agent.suggest_move(&state).expect("opening move exists");
        assert!(state.is_legal(Color::Light, mv.from, mv.to));
    }

    #[test]
    fn test_name_reports_depth() {
        let agent = MinimaxAgent::new(4);
        assert_eq!(agent.name(), "Minimax(depth=4)");
    }
}
