use std::fmt;
use std::ops::Not;
use std::str::FromStr;

use serde::Serialize;

use crate::error::ParseCoordError;

/// Number of squares along one edge of the board.
pub const BOARD_SIZE: usize = 8;
/// Number of squares on the board.
pub const NUM_SQUARES: usize = BOARD_SIZE * BOARD_SIZE;

/// One of the two sides. Black moves first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Player {
    Black,
    White,
}

impl Player {
    pub const fn opposite(self) -> Self {
        match self {
            Player::Black => Player::White,
            Player::White => Player::Black,
        }
    }

    /// Slot used for per-player counters.
    pub(crate) const fn index(self) -> usize {
        match self {
            Player::Black => 0,
            Player::White => 1,
        }
    }

    /// Wire code shared with [`Snapshot::board`]: 1 = black, 2 = white.
    pub const fn code(self) -> u8 {
        match self {
            Player::Black => 1,
            Player::White => 2,
        }
    }
}

impl Not for Player {
    type Output = Self;

    fn not(self) -> Self {
        self.opposite()
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Player::Black => f.write_str("Black"),
            Player::White => f.write_str("White"),
        }
    }
}

/// What a coordinate query sees.
///
/// `OffBoard` is only ever produced for out-of-range coordinates; the grid
/// itself never stores it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Square {
    Empty,
    Black,
    White,
    OffBoard,
}

impl Square {
    /// The player occupying this square, if any.
    pub const fn owner(self) -> Option<Player> {
        match self {
            Square::Black => Some(Player::Black),
            Square::White => Some(Player::White),
            Square::Empty | Square::OffBoard => None,
        }
    }
}

impl From<Player> for Square {
    fn from(player: Player) -> Self {
        match player {
            Player::Black => Square::Black,
            Player::White => Square::White,
        }
    }
}

impl From<Option<Player>> for Square {
    fn from(cell: Option<Player>) -> Self {
        cell.map_or(Square::Empty, Square::from)
    }
}

/// A board coordinate. `x` runs west to east, `y` north to south, both
/// zero-based. Values outside `0..8` are representable so that off-board
/// queries have an answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct Coord {
    pub x: i32,
    pub y: i32,
}

impl Coord {
    /// Reserved coordinate standing for "no placement, turn forfeited".
    pub const PASS: Self = Self::new(-9, -9);

    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    pub const fn is_pass(self) -> bool {
        self.x == Self::PASS.x && self.y == Self::PASS.y
    }

    pub const fn is_on_board(self) -> bool {
        self.x >= 0 && self.x < BOARD_SIZE as i32 && self.y >= 0 && self.y < BOARD_SIZE as i32
    }

    /// Row-major square index, or `None` when off the board.
    pub const fn index(self) -> Option<usize> {
        if self.is_on_board() {
            Some(self.y as usize * BOARD_SIZE + self.x as usize)
        } else {
            None
        }
    }

    /// The square `distance` steps away in `direction`.
    pub const fn step(self, direction: Direction, distance: i32) -> Self {
        let (dx, dy) = direction.offset();
        Self::new(self.x + dx * distance, self.y + dy * distance)
    }

    /// All 64 on-board coordinates in row-major order.
    pub fn all() -> impl Iterator<Item = Coord> {
        (0..BOARD_SIZE as i32).flat_map(|y| (0..BOARD_SIZE as i32).map(move |x| Coord::new(x, y)))
    }
}

/// Algebraic notation: column letter from `x`, row number from `y` ("c4").
impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_pass() {
            return f.write_str("pass");
        }
        if !self.is_on_board() {
            return write!(f, "({}, {})", self.x, self.y);
        }
        let col = (b'a' + self.x as u8) as char;
        write!(f, "{col}{}", self.y + 1)
    }
}

impl FromStr for Coord {
    type Err = ParseCoordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.eq_ignore_ascii_case("pass") {
            return Ok(Coord::PASS);
        }

        let mut chars = s.chars();
        let col = chars
            .next()
            .ok_or(ParseCoordError::Empty)?
            .to_ascii_lowercase();
        let x = "abcdefgh"
            .find(col)
            .ok_or(ParseCoordError::BadColumn(col))? as i32;
        let row = chars.next().ok_or(ParseCoordError::MissingRow)?;
        let y = match row.to_digit(10) {
            Some(digit @ 1..=8) => digit as i32 - 1,
            _ => return Err(ParseCoordError::BadRow(row)),
        };
        if chars.next().is_some() {
            return Err(ParseCoordError::TrailingInput(s.to_string()));
        }

        Ok(Coord::new(x, y))
    }
}

/// The eight compass directions, `y` growing southward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Northwest,
    North,
    Northeast,
    East,
    Southeast,
    South,
    Southwest,
    West,
}

impl Direction {
    pub const ALL: [Direction; 8] = [
        Direction::Northwest,
        Direction::North,
        Direction::Northeast,
        Direction::East,
        Direction::Southeast,
        Direction::South,
        Direction::Southwest,
        Direction::West,
    ];

    pub const fn offset(self) -> (i32, i32) {
        match self {
            Direction::Northwest => (-1, -1),
            Direction::North => (0, -1),
            Direction::Northeast => (1, -1),
            Direction::East => (1, 0),
            Direction::Southeast => (1, 1),
            Direction::South => (0, 1),
            Direction::Southwest => (-1, 1),
            Direction::West => (-1, 0),
        }
    }

    /// Position of this direction in [`Direction::ALL`] and in flip-count arrays.
    pub const fn index(self) -> usize {
        self as usize
    }
}

/// Something the side to move can do.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    Place(Coord),
    Pass,
}

/// [`Coord::PASS`] converts to [`Action::Pass`]; anything else is a placement.
impl From<Coord> for Action {
    fn from(at: Coord) -> Self {
        if at.is_pass() {
            Action::Pass
        } else {
            Action::Place(at)
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::Place(at) => write!(f, "{at}"),
            Action::Pass => f.write_str("pass"),
        }
    }
}

/// How a finished game ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    Win(Player),
    Tie,
}

impl Outcome {
    pub(crate) fn from_scores(black: u8, white: u8) -> Self {
        match black.cmp(&white) {
            std::cmp::Ordering::Greater => Outcome::Win(Player::Black),
            std::cmp::Ordering::Less => Outcome::Win(Player::White),
            std::cmp::Ordering::Equal => Outcome::Tie,
        }
    }

    pub const fn winner(self) -> Option<Player> {
        match self {
            Outcome::Win(player) => Some(player),
            Outcome::Tie => None,
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Win(player) => write!(f, "{player} wins"),
            Outcome::Tie => f.write_str("Tie"),
        }
    }
}

/// Public game state handed to outer layers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Snapshot {
    /// Row-major cells: 0 = empty, 1 = black, 2 = white.
    pub board: Vec<u8>,
    pub current_player: u8,
    pub black_count: u8,
    pub white_count: u8,
    pub has_legal_move: bool,
    pub is_game_over: bool,
    pub can_undo: bool,
    pub legal_moves: Vec<Coord>,
}

/// Final result after game over. `winner` is 0 for a tie.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GameResult {
    pub winner: u8,
    pub black_count: u8,
    pub white_count: u8,
}
