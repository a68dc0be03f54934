use std::fmt;

/// Represents one of the two players in checkers.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum Color {
    Light,
    Dark,
}

impl Color {
    /// Returns the opposite color.
    pub const fn opponent(self) -> Self {
        match self {
            Color::Light => Color::Dark,
            Color::Dark => Color::Light,
        }
    }

    /// Returns the row direction this color's men advance in.
    /// Light starts on the low rows and moves toward higher rows.
    pub const fn forward(self) -> isize {
        match self {
            Color::Light => 1,
            Color::Dark => -1,
        }
    }

    /// Returns the row on which this color's men promote, for a board
    /// of the given height.
    pub const fn promotion_row(self, height: usize) -> usize {
        match self {
            Color::Light => height - 1,
            Color::Dark => 0,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::Light => write!(f, "Light"),
            Color::Dark => write!(f, "Dark"),
        }
    }
}

/// A position on the board as a (row, column) pair, 0-indexed.
/// A plain value type; the upper bounds are the board's concern.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Coord {
    pub row: usize,
    pub col: usize,
}

impl Coord {
    /// Creates a new coordinate.
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Returns the coordinate offset by the given deltas, or None if
    /// the result would fall off the low edge of the grid.
    pub fn offset(self, dr: isize, dc: isize) -> Option<Self> {
        let row = self.row.checked_add_signed(dr)?;
        let col = self.col.checked_add_signed(dc)?;
        Some(Self { row, col })
    }

    /// Returns the square halfway between this coordinate and `other`.
    /// Meaningful for jump endpoints, which are two squares apart on
    /// both axes.
    pub const fn midpoint(self, other: Self) -> Self {
        Self {
            row: (self.row + other.row) / 2,
            col: (self.col + other.col) / 2,
        }
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// A checkers piece: a color plus a king flag.
/// The king flag is set by promotion and never reverts.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub struct Piece {
    color: Color,
    king: bool,
}

impl Piece {
    /// Creates a new man of the given color.
    pub const fn new(color: Color) -> Self {
        Self { color, king: false }
    }

    /// Returns the color of the piece.
    pub const fn color(self) -> Color {
        self.color
    }

    /// Returns true if the piece has been promoted.
    pub const fn is_king(self) -> bool {
        self.king
    }

    /// Promotes the piece to a king.
    pub fn promote(&mut self) {
        self.king = true;
    }

    /// Returns the render symbol for this piece:
    /// `l`/`L` for a light man/king, `d`/`D` for a dark man/king.
    pub const fn symbol(self) -> char {
        match (self.color, self.king) {
            (Color::Light, false) => 'l',
            (Color::Light, true) => 'L',
            (Color::Dark, false) => 'd',
            (Color::Dark, true) => 'D',
        }
    }
}

/// One complete move expressed as the ordered landing squares, not
/// including the start. Non-jump moves are one-element paths so that
/// steps and jump chains share a shape.
pub type MovePath = Vec<Coord>;

/// A move suggestion as an endpoint pair.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub struct Move {
    pub from: Coord,
    pub to: Coord,
}

impl Move {
    /// Creates a move from endpoint coordinates.
    pub const fn new(from: Coord, to: Coord) -> Self {
        Self { from, to }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.from, self.to)
    }
}

/// The result of a finished game.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Outcome {
    Winner(Color),
    Draw,
}

/// Commands a player can issue to end their turn.
/// Opaque tags dispatched by the state machine, never parsed from text.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum TurnCommand {
    EndTurn,
    Resign,
    OfferDraw,
}

/// Responses to a pending draw offer.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum DrawReply {
    Accept,
    Decline,
}
