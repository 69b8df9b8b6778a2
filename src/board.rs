use std::fmt;

use crate::types::{BOARD_SIZE, Coord, Direction, NUM_SQUARES, Player, Square};

/// Othello board: the 8x8 grid plus one live piece counter per player.
///
/// Counters are adjusted in pairs with every cell change, so
/// `score(Black) + score(White) + empty_count() == 64` always holds.
/// Outside the crate the board is read-only.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [Option<Player>; NUM_SQUARES],
    scores: [u8; 2],
}

impl Board {
    /// Creates the initial board:
    /// d4=white, e4=black, d5=black, e5=white.
    pub fn new() -> Self {
        let mut board = Self::empty();
        board.add_piece(Player::White, Coord::new(3, 3));
        board.add_piece(Player::White, Coord::new(4, 4));
        board.add_piece(Player::Black, Coord::new(3, 4));
        board.add_piece(Player::Black, Coord::new(4, 3));
        board
    }

    fn empty() -> Self {
        Self {
            cells: [None; NUM_SQUARES],
            scores: [0; 2],
        }
    }

    /// Contents of a square; [`Square::OffBoard`] when `at` is out of range.
    pub fn contents(&self, at: Coord) -> Square {
        at.index()
            .map_or(Square::OffBoard, |idx| Square::from(self.cells[idx]))
    }

    pub fn score(&self, player: Player) -> u8 {
        self.scores[player.index()]
    }

    /// Returns `(black_count, white_count)`.
    pub fn count(&self) -> (u8, u8) {
        (self.score(Player::Black), self.score(Player::White))
    }

    /// Returns the number of empty squares.
    pub fn empty_count(&self) -> u8 {
        let (black_count, white_count) = self.count();
        NUM_SQUARES as u8 - black_count - white_count
    }

    /// Length of the unbroken run of `owner` pieces starting next to `from`.
    fn run_length(&self, owner: Player, from: Coord, dir: Direction) -> u8 {
        let owner = Square::from(owner);
        let mut len = 0u8;
        while self.contents(from.step(dir, len as i32 + 1)) == owner {
            len += 1;
        }
        len
    }

    /// Opponent pieces `player` would flip along `dir` by playing at `at`:
    /// the run must be non-empty and capped by one of `player`'s own pieces.
    fn bracketed(&self, player: Player, at: Coord, dir: Direction) -> u8 {
        let run = self.run_length(!player, at, dir);
        if run > 0 && self.contents(at.step(dir, run as i32 + 1)) == Square::from(player) {
            run
        } else {
            0
        }
    }

    /// Per-direction flip counts for a placement, or `None` if the square is
    /// not empty or nothing would flip.
    pub fn flips_for(&self, player: Player, at: Coord) -> Option<[u8; 8]> {
        if self.contents(at) != Square::Empty {
            return None;
        }

        let mut flips = [0u8; 8];
        for dir in Direction::ALL {
            flips[dir.index()] = self.bracketed(player, at, dir);
        }

        flips.iter().any(|&n| n > 0).then_some(flips)
    }

    pub fn is_legal(&self, player: Player, at: Coord) -> bool {
        if self.contents(at) != Square::Empty {
            return false;
        }
        Direction::ALL
            .into_iter()
            .any(|dir| self.bracketed(player, at, dir) > 0)
    }

    pub fn has_legal_move(&self, player: Player) -> bool {
        Coord::all().any(|at| self.is_legal(player, at))
    }

    /// Legal placements for `player` in row-major order.
    pub fn legal_moves(&self, player: Player) -> Vec<Coord> {
        Coord::all().filter(|&at| self.is_legal(player, at)).collect()
    }

    /// Places one piece and flips every bracketed run.
    /// Returns the per-direction flip counts, or `None` (board untouched)
    /// when the move is illegal.
    pub(crate) fn place(&mut self, player: Player, at: Coord) -> Option<[u8; 8]> {
        let flips = self.flips_for(player, at)?;

        self.add_piece(player, at);
        for dir in Direction::ALL {
            self.flip_run(at, dir, flips[dir.index()], player);
        }

        Some(flips)
    }

    /// Takes back a placement made by `player` at `at` that flipped `flips`.
    pub(crate) fn unplace(&mut self, player: Player, at: Coord, flips: &[u8; 8]) {
        self.remove_piece(at);
        for dir in Direction::ALL {
            self.flip_run(at, dir, flips[dir.index()], !player);
        }
    }

    fn add_piece(&mut self, owner: Player, at: Coord) {
        if let Some(idx) = at.index() {
            self.cells[idx] = Some(owner);
            self.scores[owner.index()] += 1;
        }
    }

    fn remove_piece(&mut self, at: Coord) {
        if let Some(idx) = at.index()
            && let Some(owner) = self.cells[idx].take()
        {
            self.scores[owner.index()] -= 1;
        }
    }

    /// Gives the `len` squares after `from` along `dir` to `to`.
    fn flip_run(&mut self, from: Coord, dir: Direction, len: u8, to: Player) {
        if len == 0 {
            return;
        }
        for idx in (1..=len as i32).filter_map(|k| from.step(dir, k).index()) {
            self.cells[idx] = Some(to);
        }
        self.scores[(!to).index()] -= len;
        self.scores[to.index()] += len;
    }

    /// Converts board to `[u8; 64]` where 0=empty, 1=black, 2=white.
    pub fn to_array(&self) -> [u8; NUM_SQUARES] {
        let mut board = [0u8; NUM_SQUARES];
        for (cell, owner) in board.iter_mut().zip(self.cells.iter()) {
            *cell = owner.map_or(0, Player::code);
        }
        board
    }

    /// Builds a board from eight rows of `X` (black), `O` (white) and `.`.
    #[cfg(test)]
    pub(crate) fn from_diagram(rows: [&str; BOARD_SIZE]) -> Self {
        let mut board = Self::empty();
        for (y, row) in rows.iter().enumerate() {
            for (x, ch) in row.chars().filter(|c| !c.is_whitespace()).enumerate() {
                let at = Coord::new(x as i32, y as i32);
                match ch {
                    'X' => board.add_piece(Player::Black, at),
                    'O' => board.add_piece(Player::White, at),
                    _ => {}
                }
            }
        }
        board
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "  a b c d e f g h")?;
        for y in 0..BOARD_SIZE as i32 {
            write!(f, "\n{}", y + 1)?;
            for x in 0..BOARD_SIZE as i32 {
                let symbol = match self.contents(Coord::new(x, y)) {
                    Square::Black => 'X',
                    Square::White => 'O',
                    Square::Empty | Square::OffBoard => '.',
                };
                write!(f, " {symbol}")?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(x: i32, y: i32) -> Coord {
        Coord::new(x, y)
    }

    fn assert_counts_consistent(board: &Board) {
        let black = Coord::all()
            .filter(|&c| board.contents(c) == Square::Black)
            .count();
        let white = Coord::all()
            .filter(|&c| board.contents(c) == Square::White)
            .count();
        assert_eq!(board.score(Player::Black) as usize, black);
        assert_eq!(board.score(Player::White) as usize, white);
        assert_eq!(black + white + board.empty_count() as usize, NUM_SQUARES);
    }

    #[test]
    fn initial_position_has_four_center_pieces() {
        let board = Board::new();

        assert_eq!(board.contents(at(3, 3)), Square::White);
        assert_eq!(board.contents(at(4, 4)), Square::White);
        assert_eq!(board.contents(at(3, 4)), Square::Black);
        assert_eq!(board.contents(at(4, 3)), Square::Black);
        assert_eq!(board.count(), (2, 2));
        assert_eq!(board.empty_count(), 60);
        assert_counts_consistent(&board);
    }

    #[test]
    fn initial_black_legal_moves_are_four_expected_squares() {
        let board = Board::new();

        assert_eq!(
            board.legal_moves(Player::Black),
            vec![at(3, 2), at(2, 3), at(5, 4), at(4, 5)]
        );
        assert_eq!(
            board.legal_moves(Player::White),
            vec![at(4, 2), at(5, 3), at(2, 4), at(3, 5)]
        );
    }

    #[test]
    fn off_board_queries_never_panic() {
        let board = Board::new();

        for c in [at(-1, 0), at(8, 0), at(0, -1), at(0, 8), Coord::PASS] {
            assert_eq!(board.contents(c), Square::OffBoard);
            assert!(!board.is_legal(Player::Black, c));
            assert_eq!(board.flips_for(Player::Black, c), None);
        }
        assert!(Coord::all().all(|c| board.contents(c) != Square::OffBoard));
    }

    #[test]
    fn place_flips_opponent_pieces_and_updates_counts() {
        let mut board = Board::new();

        let flips = board.place(Player::Black, at(2, 3)).unwrap();

        let mut expected = [0; 8];
        expected[Direction::East.index()] = 1;
        assert_eq!(flips, expected);
        assert_eq!(board.count(), (4, 1));
        assert_eq!(board.empty_count(), 59);

        let cells = board.to_array();
        assert_eq!(cells[at(2, 3).index().unwrap()], 1);
        assert_eq!(cells[at(3, 3).index().unwrap()], 1);
        assert_eq!(cells[at(3, 4).index().unwrap()], 1);
        assert_eq!(cells[at(4, 3).index().unwrap()], 1);
        assert_eq!(cells[at(4, 4).index().unwrap()], 2);
        assert_counts_consistent(&board);
    }

    #[test]
    fn illegal_place_returns_none_and_keeps_board_unchanged() {
        let mut board = Board::new();
        let before = board.clone();

        assert_eq!(board.place(Player::Black, at(0, 0)), None);
        assert_eq!(board.place(Player::Black, at(2, 4)), None);
        assert_eq!(board.place(Player::Black, at(3, 3)), None);
        assert_eq!(board, before);
    }

    #[test]
    fn place_flips_in_several_directions_and_unplace_restores() {
        let mut board = Board::from_diagram([
            "O . . O . . O .",
            ". X . X . X . .",
            ". . X X X . . .",
            "O X X . X X O .",
            ". . X X X . . .",
            ". X . X . X . .",
            "O . . O . . O .",
            ". . . . . . . .",
        ]);
        let before = board.clone();

        let flips = board.place(Player::White, at(3, 3)).unwrap();

        assert_eq!(flips, [2; 8]);
        assert_eq!(board.count(), (0, 25));
        assert_counts_consistent(&board);

        board.unplace(Player::White, at(3, 3), &flips);
        assert_eq!(board, before);
        assert_counts_consistent(&board);
    }

    #[test]
    fn run_to_the_edge_is_not_bracketed() {
        let board = Board::from_diagram([
            ". . . . . . . .",
            ". . . . . . . .",
            ". . . . . . . .",
            ". . . . . . . .",
            ". . . . . . . .",
            ". . . . . . . .",
            ". . . . . . . .",
            ". . . . . X O O",
        ]);

        assert!(!board.is_legal(Player::Black, at(4, 7)));
        assert!(!board.has_legal_move(Player::Black));
        assert!(board.is_legal(Player::White, at(4, 7)));
    }

    #[test]
    fn display_draws_the_grid() {
        let expected = "  a b c d e f g h\n\
                        1 . . . . . . . .\n\
                        2 . . . . . . . .\n\
                        3 . . . . . . . .\n\
                        4 . . . O X . . .\n\
                        5 . . . X O . . .\n\
                        6 . . . . . . . .\n\
                        7 . . . . . . . .\n\
                        8 . . . . . . . .";
        assert_eq!(Board::new().to_string(), expected);
    }
}
