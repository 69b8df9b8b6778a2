use thiserror::Error;

use crate::types::Coord;

/// Why an action was rejected. A rejected action never changes the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MoveError {
    #[error("game is already over")]
    GameOver,

    #[error("{0} is off the board")]
    OffBoard(Coord),

    #[error("{0} is already occupied")]
    Occupied(Coord),

    #[error("placing at {0} flips nothing")]
    NoBracket(Coord),

    #[error("cannot pass while a legal placement exists")]
    PassWithLegalMove,
}

/// Errors from parsing algebraic square notation such as `"d3"`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseCoordError {
    #[error("empty square notation")]
    Empty,

    #[error("invalid column {0:?}, expected a-h")]
    BadColumn(char),

    #[error("missing row number")]
    MissingRow,

    #[error("invalid row {0:?}, expected 1-8")]
    BadRow(char),

    #[error("unexpected trailing input in {0:?}")]
    TrailingInput(String),
}
