use crate::board::Board;
use crate::error::{GameError, GameResult};
use crate::move_gen;
use crate::types::{Color, Coord, DrawReply, MovePath, Outcome, Piece, TurnCommand};
use std::collections::BTreeMap;

/// Smallest supported piece-row count (a 6x6 board).
pub const MIN_ROWS: usize = 2;
/// Largest supported piece-row count (a 20x20 board).
pub const MAX_ROWS: usize = 9;

/// The turn state machine of a checkers game.
///
/// Owns the board, per-color coordinate indices derived from it, and
/// the transient turn state: whose move it is, whether a multi-jump is
/// mid-flight, whether a draw is on the table, and the winner once the
/// game ends. All mutation goes through the command methods; every
/// illegal input is rejected before the board is touched.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct GameState {
    board: Board,
    /// Number of piece rows each player starts with.
    rows: usize,
    turn: Color,
    light_coords: Vec<Coord>,
    dark_coords: Vec<Coord>,
    /// Piece in the middle of a jump chain, if any.
    jumping: Option<Coord>,
    winner: Option<Outcome>,
    draw_offered: bool,
}

impl GameState {
    /// Creates a new game with the standard setup: each player starts
    /// with `rows` rows of men on the dark squares of a square board
    /// of side `2 * rows + 2`. Light occupies the low rows and moves
    /// first.
    pub fn new(rows: usize) -> GameResult<Self> {
        let mut state = Self::empty(rows)?;
        state.reset()?;
        Ok(state)
    }

    /// Creates a game with an empty board, for building custom
    /// positions with [`place_piece`](Self::place_piece).
    pub fn empty(rows: usize) -> GameResult<Self> {
        if !(MIN_ROWS..=MAX_ROWS).contains(&rows) {
            return Err(GameError::InvalidConfiguration(rows));
        }
        let size = 2 * rows + 2;
        Ok(Self {
            board: Board::new(size, size),
            rows,
            turn: Color::Light,
            light_coords: Vec::new(),
            dark_coords: Vec::new(),
            jumping: None,
            winner: None,
            draw_offered: false,
        })
    }

    /// Returns the game to the standard starting position, clearing
    /// any turn state, draw offer, and winner.
    pub fn reset(&mut self) -> GameResult<()> {
        let size = self.size();
        self.board = Board::new(size, size);
        self.light_coords.clear();
        self.dark_coords.clear();
        self.turn = Color::Light;
        self.jumping = None;
        self.winner = None;
        self.draw_offered = false;

        for row in 0..size {
            for col in 0..size {
                // Pieces live on the dark squares only.
                if row % 2 == col % 2 {
                    continue;
                }
                let color = if row < self.rows {
                    Color::Light
                } else if row >= size - self.rows {
                    Color::Dark
                } else {
                    continue;
                };
                self.place_piece(Coord::new(row, col), Piece::new(color))?;
            }
        }
        Ok(())
    }

    /// The board's side length.
    pub fn size(&self) -> usize {
        self.board.height()
    }

    /// Read-only view of the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Renders the board as a grid of symbols; see [`Board::render`].
    pub fn render(&self) -> Vec<Vec<char>> {
        self.board.render()
    }

    /// The color whose move it is.
    pub fn side_to_move(&self) -> Color {
        self.turn
    }

    /// The winner, once the game has ended.
    pub fn winner(&self) -> Option<Outcome> {
        self.winner
    }

    /// True if a draw offer is pending.
    pub fn draw_offered(&self) -> bool {
        self.draw_offered
    }

    /// True if the current turn is incomplete: the last move was a
    /// jump and the same piece has further jumps to play.
    pub fn turn_incomplete(&self) -> bool {
        self.jumping.is_some()
    }

    /// The piece obligated to continue its jump chain, if any.
    pub fn continuation(&self) -> Option<Coord> {
        self.jumping
    }

    /// Counts the given color's pieces as (kings, men).
    pub fn composition(&self, color: Color) -> (usize, usize) {
        let mut kings = 0;
        let mut men = 0;
        for &at in self.coords(color) {
            if let Ok(Some(piece)) = self.board.get(at) {
                if piece.is_king() {
                    kings += 1;
                } else {
                    men += 1;
                }
            }
        }
        (kings, men)
    }

    /// Material balance of the position; see [`crate::evaluation`].
    pub fn evaluate(&self) -> f64 {
        crate::evaluation::evaluate(self)
    }

    /// Places a piece on the board and records it in the color index.
    /// Position-setup support; fails like [`Board::set`].
    pub fn place_piece(&mut self, at: Coord, piece: Piece) -> GameResult<()> {
        self.board.set(at, piece)?;
        self.index_mut(piece.color()).push(at);
        Ok(())
    }

    /// Overrides whose move it is. Position-setup support.
    pub fn set_side_to_move(&mut self, color: Color) {
        self.turn = color;
    }

    /// Returns every complete move the given color can make, keyed by
    /// the coordinate of the piece to move.
    ///
    /// Mid jump chain, only the jumping piece's remaining jump paths
    /// are offered. Otherwise capture is forced: if any piece of this
    /// color has a jump, the map holds exactly the jumping pieces and
    /// their jump paths; only when no jump exists anywhere does it
    /// hold the pieces with single-step moves.
    pub fn legal_moves(&self, color: Color) -> BTreeMap<Coord, Vec<MovePath>> {
        let mut moves = BTreeMap::new();

        if let Some(at) = self.jumping {
            if let Ok(Some(piece)) = self.board.get(at) {
                if piece.color() == color {
                    let paths = move_gen::jump_paths(&self.board, at, piece);
                    if !paths.is_empty() {
                        moves.insert(at, paths);
                    }
                    return moves;
                }
            }
        }

        for &at in self.coords(color) {
            let Ok(Some(piece)) = self.board.get(at) else {
                continue;
            };
            let paths = move_gen::jump_paths(&self.board, at, piece);
            if !paths.is_empty() {
                moves.insert(at, paths);
            }
        }
        if !moves.is_empty() {
            return moves;
        }

        for &at in self.coords(color) {
            let Ok(Some(piece)) = self.board.get(at) else {
                continue;
            };
            let paths = move_gen::step_paths(&self.board, at, piece);
            if !paths.is_empty() {
                moves.insert(at, paths);
            }
        }
        moves
    }

    /// All complete moves for the single piece at `at`: its jump paths
    /// if it has any, otherwise its step moves. Ignores the board-wide
    /// forced-capture rule; front ends use this to preview a piece.
    pub fn piece_moves(&self, at: Coord) -> GameResult<Vec<MovePath>> {
        let piece = self.board.get(at)?.ok_or(GameError::EmptyCell(at))?;
        let jumps = move_gen::jump_paths(&self.board, at, piece);
        if jumps.is_empty() {
            Ok(move_gen::step_paths(&self.board, at, piece))
        } else {
            Ok(jumps)
        }
    }

    /// True if moving the piece at `from` so that its move ends on
    /// `to` is a complete legal move for `color` right now.
    pub fn is_legal(&self, color: Color, from: Coord, to: Coord) -> bool {
        self.legal_moves(color)
            .get(&from)
            .is_some_and(|paths| paths.iter().any(|path| path.last() == Some(&to)))
    }

    /// Plays a move for `color`, moving the piece at `from` along a
    /// legal path to `to`.
    ///
    /// For a jump path, every hop up to `to` is applied in order, each
    /// removing its jumped piece. If `to` is an intermediate landing
    /// of the path the turn stays with the mover, restricted to the
    /// same piece's remaining jumps; reaching the path's final square
    /// ends the chain. Promotion is checked after the piece comes to
    /// rest, and when the turn completes the opponent's mobility is
    /// checked: a side to move with no legal moves has lost.
    pub fn apply_move(&mut self, color: Color, from: Coord, to: Coord) -> GameResult<()> {
        self.ensure_ongoing()?;
        if color != self.turn {
            return Err(GameError::IllegalMove(format!(
                "it is not {}'s turn",
                color
            )));
        }

        let moves = self.legal_moves(color);
        let paths = moves.get(&from).ok_or_else(|| {
            GameError::IllegalMove(format!("no movable {} piece at {}", color, from))
        })?;
        let (path, stop) = paths
            .iter()
            .find_map(|path| {
                path.iter()
                    .position(|&landing| landing == to)
                    .map(|i| (path, i))
            })
            .ok_or_else(|| {
                GameError::IllegalMove(format!("{} is not reachable from {}", to, from))
            })?;

        let is_jump = path[0].row.abs_diff(from.row) == 2;
        if is_jump {
            let hops: Vec<Coord> = path[..=stop].to_vec();
            let complete = stop + 1 == path.len();
            let mut cur = from;
            for landing in hops {
                self.remove_at(cur.midpoint(landing))?;
                self.relocate_piece(cur, landing)?;
                cur = landing;
            }
            self.jumping = if complete { None } else { Some(to) };
        } else {
            self.relocate_piece(from, to)?;
            self.jumping = None;
        }

        self.check_promotion(to)?;

        if self.jumping.is_none() {
            self.finish_move(color);
        }
        Ok(())
    }

    /// Dispatches an end-of-turn command for `color`.
    pub fn end_turn(&mut self, color: Color, cmd: TurnCommand) -> GameResult<()> {
        match cmd {
            TurnCommand::EndTurn => self.stop_turn(color),
            TurnCommand::Resign => self.resign(color),
            TurnCommand::OfferDraw => self.offer_draw(),
        }
    }

    /// The given color resigns; the other player wins.
    pub fn resign(&mut self, color: Color) -> GameResult<()> {
        self.ensure_ongoing()?;
        self.winner = Some(Outcome::Winner(color.opponent()));
        Ok(())
    }

    /// Puts a draw offer on the table for the other player to answer.
    pub fn offer_draw(&mut self) -> GameResult<()> {
        self.ensure_ongoing()?;
        self.draw_offered = true;
        Ok(())
    }

    /// Answers a pending draw offer: accepting ends the game in a
    /// draw, declining clears the offer and play continues.
    pub fn respond_draw(&mut self, reply: DrawReply) -> GameResult<()> {
        self.ensure_ongoing()?;
        if !self.draw_offered {
            return Err(GameError::IllegalMove(
                "no draw has been offered".to_string(),
            ));
        }
        self.draw_offered = false;
        if reply == DrawReply::Accept {
            self.winner = Some(Outcome::Draw);
        }
        Ok(())
    }

    fn ensure_ongoing(&self) -> GameResult<()> {
        if self.winner.is_some() {
            return Err(GameError::IllegalMove("the game is already over".to_string()));
        }
        Ok(())
    }

    /// Ends the mover's turn early during a jump chain; a no-op when
    /// no chain is in flight.
    fn stop_turn(&mut self, color: Color) -> GameResult<()> {
        self.ensure_ongoing()?;
        if color != self.turn {
            return Err(GameError::IllegalMove(format!(
                "it is not {}'s turn",
                color
            )));
        }
        if self.jumping.take().is_some() {
            self.finish_move(color);
        }
        Ok(())
    }

    /// Passes the turn to the mover's opponent and declares the mover
    /// the winner if the opponent has no move of either kind: both an
    /// empty side and a fully blocked side lose.
    fn finish_move(&mut self, mover: Color) {
        self.turn = mover.opponent();
        if self.legal_moves(self.turn).is_empty() {
            self.winner = Some(Outcome::Winner(mover));
        }
    }

    fn check_promotion(&mut self, at: Coord) -> GameResult<()> {
        let Some(mut piece) = self.board.get(at)? else {
            return Ok(());
        };
        if !piece.is_king() && at.row == piece.color().promotion_row(self.size()) {
            piece.promote();
            self.board.remove(at)?;
            self.board.set(at, piece)?;
        }
        Ok(())
    }

    fn coords(&self, color: Color) -> &[Coord] {
        match color {
            Color::Light => &self.light_coords,
            Color::Dark => &self.dark_coords,
        }
    }

    fn index_mut(&mut self, color: Color) -> &mut Vec<Coord> {
        match color {
            Color::Light => &mut self.light_coords,
            Color::Dark => &mut self.dark_coords,
        }
    }

    /// Removes a piece from the board and from its color index.
    fn remove_at(&mut self, at: Coord) -> GameResult<()> {
        let piece = self.board.get(at)?.ok_or(GameError::EmptyCell(at))?;
        self.board.remove(at)?;
        self.index_mut(piece.color()).retain(|&c| c != at);
        Ok(())
    }

    /// Moves a piece on the board and updates its index entry.
    fn relocate_piece(&mut self, from: Coord, to: Coord) -> GameResult<()> {
        let piece = self.board.get(from)?.ok_or(GameError::EmptyCell(from))?;
        self.board.relocate(from, to)?;
        if let Some(slot) = self
            .index_mut(piece.color())
            .iter_mut()
            .find(|c| **c == from)
        {
            *slot = to;
        }
        Ok(())
    }
}
