use crate::error::GameResult;
use crate::game_state::GameState;
use crate::types::{Coord, Move, MovePath};

/// Counts the leaf nodes of the legal-move tree to the given depth.
///
/// Each complete path counts as one move, so two capture chains that
/// share endpoints but pass different victims are counted separately.
/// A decided game is a leaf regardless of remaining depth. Useful for
/// validating move generation against known node counts.
pub fn perft(state: &GameState, depth: u32) -> GameResult<u64> {
    if depth == 0 || state.winner().is_some() {
        return Ok(1);
    }

    let color = state.side_to_move();
    let moves = state.legal_moves(color);

    let mut nodes = 0;
    for (&from, paths) in &moves {
        for path in paths {
            let child = apply_path(state, from, path)?;
            nodes += perft(&child, depth - 1)?;
        }
    }

    Ok(nodes)
}

/// Perft broken down by first move, for pinpointing a generation bug.
pub fn perft_divide(state: &GameState, depth: u32) -> GameResult<Vec<(Move, u64)>> {
    let color = state.side_to_move();
    let moves = state.legal_moves(color);

    let mut results = Vec::new();
    for (&from, paths) in &moves {
        for path in paths {
            let child = apply_path(state, from, path)?;
            let nodes = if depth <= 1 {
                1
            } else {
                perft(&child, depth - 1)?
            };
            if let Some(&to) = path.last() {
                results.push((Move::new(from, to), nodes));
            }
        }
    }

    Ok(results)
}

/// Plays one complete path on a copy of the state, hop by hop so the
/// exact path (not merely its endpoints) is the move applied.
fn apply_path(state: &GameState, from: Coord, path: &MovePath) -> GameResult<GameState> {
    let color = state.side_to_move();
    let mut child = state.clone();
    let mut cur = from;
    for &landing in path {
        child.apply_move(color, cur, landing)?;
        cur = landing;
    }
    Ok(child)
}
