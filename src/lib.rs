//! Rules engine for 8x8 Othello.
//!
//! [`Game`] owns the board, turn, pass/game-over flags and a full undo
//! history. It is changed only through [`Game::apply`] / [`Game::try_apply`]
//! and [`Game::undo`]; everything else is a query. A rejected action leaves
//! the game exactly as it was.
//!
//! ```
//! use othello::{Action, Coord, Game, Player, Square};
//!
//! let mut game = Game::new();
//! assert!(game.apply(Coord::new(2, 3)));
//! assert_eq!(game.contents(Coord::new(3, 3)), Square::Black);
//! assert_eq!(game.current_player(), Player::White);
//!
//! assert!(!game.apply(Action::Pass));
//! game.undo();
//! assert_eq!(game, Game::new());
//! ```

pub mod board;
pub mod error;
pub mod game;
pub mod history;
pub mod types;
pub mod wasm;

pub use board::Board;
pub use error::{MoveError, ParseCoordError};
pub use game::Game;
pub use history::MoveRecord;
pub use types::{
    Action, BOARD_SIZE, Coord, Direction, GameResult, NUM_SQUARES, Outcome, Player, Snapshot,
    Square,
};
