use checkers_core::{Color, Coord, GameResult, GameState, Move, MovePath};

/// Outcome of a minimax search.
#[derive(Debug, Clone)]
pub struct SearchResult {
    pub best_move: Option<Move>,
    pub score: f64,
    pub nodes: u64,
}

/// Searches for the best move for `color` by plain minimax to the
/// given depth: Light maximizes the evaluation, Dark minimizes it.
///
/// Depth 0 or a decided game returns the static evaluation with no
/// move. Every branch plays out on its own copy of the state, so the
/// caller's game and sibling branches never observe each other's
/// mutations. Ties between equally good moves go to the move
/// enumerated first; the ordering carries no meaning.
pub fn search(state: &GameState, depth: u8, color: Color) -> GameResult<SearchResult> {
    let mut nodes = 0;
    let (score, best_move) = minimax(state, depth, color, &mut nodes)?;
    Ok(SearchResult {
        best_move,
        score,
        nodes,
    })
}

fn minimax(
    state: &GameState,
    depth: u8,
    to_move: Color,
    nodes: &mut u64,
) -> GameResult<(f64, Option<Move>)> {
    *nodes += 1;

    if depth == 0 || state.winner().is_some() {
        return Ok((state.evaluate(), None));
    }

    let moves = state.legal_moves(to_move);
    if moves.is_empty() {
        return Ok((state.evaluate(), None));
    }

    let maximizing = to_move == Color::Light;
    let mut best_score = if maximizing {
        f64::NEG_INFINITY
    } else {
        f64::INFINITY
    };
    let mut best_move = None;

    for (&from, paths) in &moves {
        for path in paths {
            let child = apply_path(state, to_move, from, path)?;
            let (score, _) = minimax(&child, depth - 1, to_move.opponent(), nodes)?;

            let better = if maximizing {
                score > best_score
            } else {
                score < best_score
            };
            if better {
                best_score = score;
                if let Some(&to) = path.last() {
                    best_move = Some(Move::new(from, to));
                }
            }
        }
    }

    Ok((best_score, best_move))
}

/// Plays one complete path on a copy of the state, hop by hop so the
/// chosen chain (not merely its endpoints) is the move explored.
fn apply_path(
    state: &GameState,
    color: Color,
    from: Coord,
    path: &MovePath,
) -> GameResult<GameState> {
    let mut child = state.clone();
    let mut cur = from;
    for &landing in path {
        child.apply_move(color, cur, landing)?;
        cur = landing;
    }
    Ok(child)
}

#[cfg(test)]
mod tests {
    use super::*;
    use checkers_core::Piece;

    fn coord(row: usize, col: usize) -> Coord {
        Coord::new(row, col)
    }

    #[test]
    fn test_depth_zero_returns_static_evaluation() {
        let state = GameState::new(3).unwrap();
        let result = search(&state, 0, Color::Light).unwrap();
        assert_eq!(result.best_move, None);
        assert_eq!(result.score, 0.0);
        assert_eq!(result.nodes, 1);
    }

    #[test]
    fn test_finished_game_returns_no_move() {
        let mut state = GameState::new(3).unwrap();
        state.resign(Color::Dark).unwrap();
        let result = search(&state, 3, Color::Light).unwrap();
        assert_eq!(result.best_move, None);
    }

    #[test]
    fn test_search_takes_forced_jump() {
        let mut state = GameState::empty(3).unwrap();
        state.place_piece(coord(2, 1), Piece::new(Color::Light)).unwrap();
        state.place_piece(coord(3, 2), Piece::new(Color::Dark)).unwrap();
        state.place_piece(coord(6, 1), Piece::new(Color::Dark)).unwrap();

        let result = search(&state, 1, Color::Light).unwrap();
        assert_eq!(
            result.best_move,
            Some(Move::new(coord(2, 1), coord(4, 3)))
        );
    }

    #[test]
    fn test_search_avoids_hanging_a_piece() {
        // Light can step to (3, 2), where Dark is forced to capture
        // it, or to (3, 4), which keeps material level. Two plies are
        // enough to see the difference.
        let mut state = GameState::empty(3).unwrap();
        state.place_piece(coord(2, 3), Piece::new(Color::Light)).unwrap();
        state.place_piece(coord(4, 1), Piece::new(Color::Dark)).unwrap();

        let result = search(&state, 2, Color::Light).unwrap();
        assert_eq!(
            result.best_move,
            Some(Move::new(coord(2, 3), coord(3, 4)))
        );
        assert_eq!(result.score, 0.0);
    }

    #[test]
    fn test_dark_minimizes() {
        // Mirror position: Dark to move can hang its man on (3, 2) or
        // step safely away from the light man.
        let mut state = GameState::empty(3).unwrap();
        state.place_piece(coord(5, 4), Piece::new(Color::Dark)).unwrap();
        state.place_piece(coord(3, 6), Piece::new(Color::Light)).unwrap();
        state.set_side_to_move(Color::Dark);

        let result = search(&state, 2, Color::Dark).unwrap();
        assert_eq!(
            result.best_move,
            Some(Move::new(coord(5, 4), coord(4, 3)))
        );
        assert_eq!(result.score, 0.0);
    }
}
