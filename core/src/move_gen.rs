use crate::board::Board;
use crate::types::{Color, Coord, MovePath, Piece};
use std::collections::HashSet;

/// The four diagonal directions as (row, column) deltas.
const DIAGONALS: [(isize, isize); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];

fn moves_along(piece: Piece, dr: isize) -> bool {
    piece.is_king() || dr == piece.color().forward()
}

/// Generates the single-step, non-capturing moves for the piece at
/// `start`: the empty diagonal neighbors, forward-only for a man, all
/// four directions for a king. Each destination is returned as a
/// one-element path so that steps and jump chains share a shape.
pub fn step_paths(board: &Board, start: Coord, piece: Piece) -> Vec<MovePath> {
    let mut paths = Vec::new();

    for &(dr, dc) in &DIAGONALS {
        if !moves_along(piece, dr) {
            continue;
        }
        let Some(dest) = start.offset(dr, dc) else {
            continue;
        };
        if matches!(board.get(dest), Ok(None)) {
            paths.push(vec![dest]);
        }
    }

    paths
}

/// Generates every complete jump sequence for the piece at `start`,
/// each expressed as the ordered landing squares. A sequence is
/// complete when no further jump exists from its last square; all
/// maximal sequences are returned and the caller chooses among them.
pub fn jump_paths(board: &Board, start: Coord, piece: Piece) -> Vec<MovePath> {
    complete_jumps(board, start, piece, &HashSet::new())
}

/// Depth-first search over jump chains. `jumped` holds the squares
/// already jumped over in the current chain: a square may be captured
/// at most once per move, even though its piece stays on the board
/// until the whole move commits. Tracking squares rather than piece
/// identities keeps a chain from re-crossing the same victim from the
/// other side while leaving untouched pieces capturable.
fn complete_jumps(
    board: &Board,
    from: Coord,
    piece: Piece,
    jumped: &HashSet<Coord>,
) -> Vec<MovePath> {
    let mut paths = Vec::new();

    for (landing, victim) in single_jumps(board, from, piece, jumped) {
        let mut seen = jumped.clone();
        seen.insert(victim);

        let tails = complete_jumps(board, landing, piece, &seen);
        if tails.is_empty() {
            paths.push(vec![landing]);
        } else {
            for tail in tails {
                let mut path = Vec::with_capacity(tail.len() + 1);
                path.push(landing);
                path.extend(tail);
                paths.push(path);
            }
        }
    }

    paths
}

/// The single jumps available from `from`: pairs of (landing square,
/// jumped square). A jump is legal when the landing square two steps
/// away is empty, the intervening square holds an opposing piece, and
/// that square has not already been jumped in this chain.
fn single_jumps(
    board: &Board,
    from: Coord,
    piece: Piece,
    jumped: &HashSet<Coord>,
) -> Vec<(Coord, Coord)> {
    let mut jumps = Vec::new();

    for &(dr, dc) in &DIAGONALS {
        if !moves_along(piece, dr) {
            continue;
        }
        let Some(victim) = from.offset(dr, dc) else {
            continue;
        };
        let Some(landing) = from.offset(2 * dr, 2 * dc) else {
            continue;
        };
        if jumped.contains(&victim) {
            continue;
        }
        let Ok(Some(target)) = board.get(victim) else {
            continue;
        };
        if target.color() == piece.color() {
            continue;
        }
        if matches!(board.get(landing), Ok(None)) {
            jumps.push((landing, victim));
        }
    }

    jumps
}
