use crate::Agent;
use checkers_core::{Coord, GameState, Move};
use rand::seq::SliceRandom;
use rand::thread_rng;

/// Baseline agent that plays uniformly at random: any legal piece,
/// then any of its paths. Always drawn from the current legal-move
/// map, never a cached one.
pub struct RandomAgent {
    name: String,
}

impl RandomAgent {
    pub fn new() -> Self {
        RandomAgent {
            name: "Random".to_string(),
        }
    }
}

impl Default for RandomAgent {
    fn default() -> Self {
        Self::new()
    }
}

impl Agent for RandomAgent {
    fn suggest_move(&mut self, state: &GameState) -> Option<Move> {
        let moves = state.legal_moves(state.side_to_move());
        let mut rng = thread_rng();

        let pieces: Vec<Coord> = moves.keys().copied().collect();
        let &from = pieces.choose(&mut rng)?;
        let path = moves.get(&from)?.choose(&mut rng)?;
        let &to = path.last()?;

        Some(Move::new(from, to))
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
        let mut agent = RandomAgent::new();
        for _ in 0..50 {
            let mv = agent.suggest_move(&state).expect("opening move exists");
            assert!(state.is_legal(Color::Light, mv.from, mv.to));
        }
    }

    #[test]
    fn test_no_move_on_an_empty_board() {
        let mut state = GameState::empty(2).unwrap();
        state.set_side_to_move(Color::Dark);
        let mut agent = RandomAgent::new();
        assert_eq!(agent.suggest_move(&state), None);
    }
}
