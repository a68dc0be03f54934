use crate::types::Coord;
use thiserror::Error;

/// Errors reported by the rules engine.
///
/// Every error is detected synchronously at the offending call, before
/// any board mutation; a rejected operation leaves the game untouched.
#[derive(Error, Clone, Debug, Eq, PartialEq)]
pub enum GameError {
    /// Coordinate lies outside the board.
    #[error("coordinate {0} is off the board")]
    OutOfBounds(Coord),

    /// A piece was expected at the coordinate but the cell is empty.
    #[error("no piece at {0}")]
    EmptyCell(Coord),

    /// The cell already holds a piece.
    #[error("cell {0} is already occupied")]
    OccupiedCell(Coord),

    /// The requested move or command fails the legality rules: wrong
    /// turn, forced-capture violation, unreachable destination, or a
    /// command issued after the game has ended.
    #[error("illegal move: {0}")]
    IllegalMove(String),

    /// The row count passed at construction is outside the supported
    /// range (boards from 6x6 through 20x20).
    #[error("invalid configuration: {0} starting rows is not supported")]
    InvalidConfiguration(usize),
}

/// Result type alias for engine operations.
pub type GameResult<T> = Result<T, GameError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = GameError::OutOfBounds(Coord::new(9, 2));
        assert_eq!(err.to_string(), "coordinate (9, 2) is off the board");

        let err = GameError::IllegalMove("it is not Dark's turn".to_string());
        assert_eq!(err.to_string(), "illegal move: it is not Dark's turn");
    }
}
