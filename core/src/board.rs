use crate::error::{GameError, GameResult};
use crate::types::{Coord, Piece};
use std::fmt;

/// Symbol used for an empty cell in rendered output.
pub const EMPTY_SYMBOL: char = '.';

/// A rectangular grid of optional pieces.
///
/// The board stores cell contents and nothing else: it knows no move
/// rules and keeps no turn state. Callers address cells by `Coord`;
/// coordinates off the grid are rejected, never clamped.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Board {
    height: usize,
    width: usize,
    grid: Vec<Option<Piece>>,
}

impl Board {
    /// Creates an empty board with the given extent.
    pub fn new(height: usize, width: usize) -> Self {
        Self {
            height,
            width,
            grid: vec![None; height * width],
        }
    }

    /// Returns the number of rows.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Returns the number of columns.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Returns true if the coordinate lies on the board.
    pub fn in_bounds(&self, at: Coord) -> bool {
        at.row < self.height && at.col < self.width
    }

    fn index(&self, at: Coord) -> GameResult<usize> {
        if self.in_bounds(at) {
            Ok(at.row * self.width + at.col)
        } else {
            Err(GameError::OutOfBounds(at))
        }
    }

    /// Returns the piece at the given coordinate, if any.
    pub fn get(&self, at: Coord) -> GameResult<Option<Piece>> {
        Ok(self.grid[self.index(at)?])
    }

    /// Places a piece on an empty cell.
    pub fn set(&mut self, at: Coord, piece: Piece) -> GameResult<()> {
        let idx = self.index(at)?;
        if self.grid[idx].is_some() {
            return Err(GameError::OccupiedCell(at));
        }
        self.grid[idx] = Some(piece);
        Ok(())
    }

    /// Removes the piece at the given coordinate.
    pub fn remove(&mut self, at: Coord) -> GameResult<()> {
        let idx = self.index(at)?;
        if self.grid[idx].is_none() {
            return Err(GameError::EmptyCell(at));
        }
        self.grid[idx] = None;
        Ok(())
    }

    /// Moves the piece at `from` to `to`, with no validation of
    /// distance or adjacency; move legality is the game's job, not the
    /// board's.
    pub fn relocate(&mut self, from: Coord, to: Coord) -> GameResult<()> {
        let from_idx = self.index(from)?;
        let to_idx = self.index(to)?;
        let piece = self.grid[from_idx]
            .take()
            .ok_or(GameError::EmptyCell(from))?;
        self.grid[to_idx] = Some(piece);
        Ok(())
    }

    /// Returns the board as a grid of symbols with the same dimensions
    /// as the board: `.` for an empty cell, `l`/`L`/`d`/`D` for the
    /// four piece kinds.
    pub fn render(&self) -> Vec<Vec<char>> {
        (0..self.height)
            .map(|row| {
                (0..self.width)
                    .map(|col| match self.grid[row * self.width + col] {
                        Some(piece) => piece.symbol(),
                        None => EMPTY_SYMBOL,
                    })
                    .collect()
            })
            .collect()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.render().iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            for symbol in row {
                write!(f, "{}", symbol)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Color;

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::new(6, 6);
        for row in 0..6 {
            for col in 0..6 {
                assert_eq!(board.get(Coord::new(row, col)), Ok(None));
            }
        }
    }

    #[test]
    fn test_get_out_of_bounds() {
        let board = Board::new(6, 6);
        assert_eq!(
            board.get(Coord::new(6, 0)),
            Err(GameError::OutOfBounds(Coord::new(6, 0)))
        );
        assert_eq!(
            board.get(Coord::new(0, 9)),
            Err(GameError::OutOfBounds(Coord::new(0, 9)))
        );
    }

    #[test]
    fn test_set_rejects_occupied_cell() {
        let mut board = Board::new(6, 6);
        let at = Coord::new(2, 1);
        board.set(at, Piece::new(Color::Light)).unwrap();
        assert_eq!(
            board.set(at, Piece::new(Color::Dark)),
            Err(GameError::OccupiedCell(at))
        );
        // The original piece is untouched.
        assert_eq!(board.get(at).unwrap().unwrap().color(), Color::Light);
    }

    #[test]
    fn test_remove() {
        let mut board = Board::new(6, 6);
        let at = Coord::new(3, 2);
        assert_eq!(board.remove(at), Err(GameError::EmptyCell(at)));

        board.set(at, Piece::new(Color::Dark)).unwrap();
        board.remove(at).unwrap();
        assert_eq!(board.get(at), Ok(None));
    }

    #[test]
    fn test_relocate() {
        let mut board = Board::new(6, 6);
        let from = Coord::new(2, 1);
        let to = Coord::new(3, 0);

        assert_eq!(board.relocate(from, to), Err(GameError::EmptyCell(from)));

        board.set(from, Piece::new(Color::Light)).unwrap();
        board.relocate(from, to).unwrap();
        assert_eq!(board.get(from), Ok(None));
        assert_eq!(board.get(to).unwrap().unwrap().color(), Color::Light);

        assert_eq!(
            board.relocate(to, Coord::new(9, 9)),
            Err(GameError::OutOfBounds(Coord::new(9, 9)))
        );
    }

    #[test]
    fn test_render_dimensions_and_symbols() {
        let mut board = Board::new(6, 6);
        board.set(Coord::new(1, 2), Piece::new(Color::Light)).unwrap();
        let mut king = Piece::new(Color::Dark);
        king.promote();
        board.set(Coord::new(4, 3), king).unwrap();

        let grid = board.render();
        assert_eq!(grid.len(), 6);
        assert!(grid.iter().all(|row| row.len() == 6));
        assert_eq!(grid[1][2], 'l');
        assert_eq!(grid[4][3], 'D');
        assert_eq!(grid[0][0], EMPTY_SYMBOL);
    }

    #[test]
    fn test_display_matches_render() {
        let mut board = Board::new(6, 6);
        board.set(Coord::new(0, 1), Piece::new(Color::Dark)).unwrap();
        let text = format!("{}", board);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 6);
        assert_eq!(lines[0], ".d....");
    }
}
