use crate::game_state::GameState;
use crate::types::Color;

/// Material balance of the position: one point per man and half a
/// point per king of difference. Positive favors Light, negative
/// favors Dark. A heuristic for the search, never a legality check.
pub fn evaluate(state: &GameState) -> f64 {
    let (light_kings, light_men) = state.composition(Color::Light);
    let (dark_kings, dark_men) = state.composition(Color::Dark);

    (light_men as f64 - dark_men as f64) + 0.5 * (light_kings as f64 - dark_kings as f64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Coord, Piece};

    #[test]
    fn test_starting_position_is_balanced() {
        let state = GameState::new(3).unwrap();
        assert_eq!(evaluate(&state), 0.0);
        assert_eq!(state.evaluate(), 0.0);
    }

    #[test]
    fn test_material_scoring() {
        let mut state = GameState::empty(2).unwrap();
        state
            .place_piece(Coord::new(2, 1), Piece::new(Color::Light))
            .unwrap();
        state
            .place_piece(Coord::new(2, 3), Piece::new(Color::Light))
            .unwrap();
        state
            .place_piece(Coord::new(4, 1), Piece::new(Color::Dark))
            .unwrap();
        let mut dark_king = Piece::new(Color::Dark);
        dark_king.promote();
        state.place_piece(Coord::new(4, 3), dark_king).unwrap();

        // Two light men against a dark man and a dark king.
        assert_eq!(evaluate(&state), 0.5);
    }
}
