use std::fmt;

use tracing::{debug, trace};

use crate::board::Board;
use crate::error::MoveError;
use crate::history::MoveRecord;
use crate::types::{Action, Coord, GameResult, Outcome, Player, Snapshot, Square};

/// A single Othello game: board, turn, flow flags and undo history.
///
/// The only ways to change a game are [`Game::apply`] (or
/// [`Game::try_apply`]) and [`Game::undo`]. Both are all-or-nothing.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Game {
    board: Board,
    current_player: Player,
    has_legal_move: bool,
    is_game_over: bool,
    history: Vec<MoveRecord>,
}

impl Game {
    /// Starting position with Black to move.
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            current_player: Player::Black,
            has_legal_move: true,
            is_game_over: false,
            history: Vec::new(),
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn contents(&self, at: Coord) -> Square {
        self.board.contents(at)
    }

    pub fn score(&self, player: Player) -> u8 {
        self.board.score(player)
    }

    pub fn black_score(&self) -> u8 {
        self.board.score(Player::Black)
    }

    pub fn white_score(&self) -> u8 {
        self.board.score(Player::White)
    }

    pub fn empty_count(&self) -> u8 {
        self.board.empty_count()
    }

    pub fn current_player(&self) -> Player {
        self.current_player
    }

    pub fn other_player(&self) -> Player {
        !self.current_player
    }

    /// Whether the side to move has at least one legal placement.
    pub fn has_legal_move(&self) -> bool {
        self.has_legal_move
    }

    pub fn is_game_over(&self) -> bool {
        self.is_game_over
    }

    pub fn can_undo(&self) -> bool {
        !self.history.is_empty()
    }

    /// Applied actions, oldest first.
    pub fn history(&self) -> &[MoveRecord] {
        &self.history
    }

    pub fn last_move(&self) -> Option<&MoveRecord> {
        self.history.last()
    }

    /// Legal placements for the side to move in row-major order.
    pub fn legal_moves(&self) -> Vec<Coord> {
        self.board.legal_moves(self.current_player)
    }

    pub fn is_legal(&self, action: impl Into<Action>) -> bool {
        self.check(action.into()).is_ok()
    }

    /// `None` until the game is over.
    pub fn outcome(&self) -> Option<Outcome> {
        self.is_game_over
            .then(|| Outcome::from_scores(self.black_score(), self.white_score()))
    }

    /// The player with strictly more pieces once the game is over.
    pub fn winner(&self) -> Option<Player> {
        self.outcome().and_then(Outcome::winner)
    }

    /// Status line: whose turn it is, or how the game ended.
    pub fn status(&self) -> String {
        match self.outcome() {
            Some(outcome) => outcome.to_string(),
            None => format!("{}'s turn", self.current_player),
        }
    }

    /// Applies a placement or a pass for the side to move.
    ///
    /// Returns `false`, with nothing changed, if the action is illegal.
    /// [`Coord::PASS`] is accepted as a pass.
    pub fn apply(&mut self, action: impl Into<Action>) -> bool {
        self.try_apply(action).is_ok()
    }

    /// Like [`Game::apply`], but reports why an action was rejected and
    /// returns the record pushed onto the history on success.
    pub fn try_apply(&mut self, action: impl Into<Action>) -> Result<MoveRecord, MoveError> {
        let action = action.into();
        if let Err(err) = self.check(action) {
            debug!(player = %self.current_player, %action, %err, "action rejected");
            return Err(err);
        }

        let record = match action {
            Action::Pass => MoveRecord::Pass,
            Action::Place(at) => {
                let flips = self
                    .board
                    .place(self.current_player, at)
                    .ok_or(MoveError::NoBracket(at))?;
                MoveRecord::Placement {
                    location: at,
                    flips,
                }
            }
        };

        trace!(
            player = %self.current_player,
            %action,
            flipped = record.total_flipped(),
            "action applied"
        );
        self.history.push(record);
        self.end_turn();

        Ok(record)
    }

    /// Takes back the most recent action. Does nothing on an empty history.
    pub fn undo(&mut self) {
        let Some(record) = self.history.pop() else {
            return;
        };

        let mover = !self.current_player;
        match record {
            MoveRecord::Pass => {
                self.has_legal_move = false;
            }
            MoveRecord::Placement { location, flips } => {
                self.board.unplace(mover, location, &flips);
                self.has_legal_move = true;
            }
        }
        self.is_game_over = false;
        self.current_player = mover;

        trace!(player = %mover, action = %Action::from(record.location()), "action undone");
    }

    /// Serializable view for outer layers.
    pub fn snapshot(&self) -> Snapshot {
        let (black_count, white_count) = self.board.count();
        Snapshot {
            board: self.board.to_array().to_vec(),
            current_player: self.current_player.code(),
            black_count,
            white_count,
            has_legal_move: self.has_legal_move,
            is_game_over: self.is_game_over,
            can_undo: self.can_undo(),
            legal_moves: self.legal_moves(),
        }
    }

    /// `None` until the game is over.
    pub fn result(&self) -> Option<GameResult> {
        let outcome = self.outcome()?;
        let (black_count, white_count) = self.board.count();
        Some(GameResult {
            winner: outcome.winner().map_or(0, Player::code),
            black_count,
            white_count,
        })
    }

    /// Validates `action` without touching any state.
    fn check(&self, action: Action) -> Result<(), MoveError> {
        if self.is_game_over {
            return Err(MoveError::GameOver);
        }

        match action {
            Action::Pass if self.has_legal_move => Err(MoveError::PassWithLegalMove),
            Action::Pass => Ok(()),
            Action::Place(at) => match self.board.contents(at) {
                Square::OffBoard => Err(MoveError::OffBoard(at)),
                Square::Black | Square::White => Err(MoveError::Occupied(at)),
                Square::Empty if self.board.is_legal(self.current_player, at) => Ok(()),
                Square::Empty => Err(MoveError::NoBracket(at)),
            },
        }
    }

    /// Hands the turn over and recomputes the flow flags.
    /// The game ends when neither side can place a piece.
    fn end_turn(&mut self) {
        self.current_player = !self.current_player;
        self.has_legal_move = self.board.has_legal_move(self.current_player);
        self.is_game_over =
            !self.has_legal_move && !self.board.has_legal_move(!self.current_player);

        if self.is_game_over {
            debug!(
                black = self.black_score(),
                white = self.white_score(),
                "game over"
            );
        }
    }

    #[cfg(test)]
    fn from_position(board: Board, current_player: Player) -> Self {
        let mut game = Self {
            board,
            current_player: !current_player,
            has_legal_move: true,
            is_game_over: false,
            history: Vec::new(),
        };
        game.end_turn();
        game
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Game {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.board)?;
        write!(
            f,
            "Black {} - White {}  {}",
            self.black_score(),
            self.white_score(),
            self.status()
        )
    }
}
