//! JS-facing wrapper around [`Game`]. Adds no rules of its own.

use wasm_bindgen::prelude::*;

use crate::game::Game;
use crate::types::{Action, Coord};

#[wasm_bindgen]
pub fn wasm_ready() -> bool {
    true
}

#[wasm_bindgen]
#[derive(Debug, Default, Clone)]
pub struct WasmGame {
    game: Game,
}

#[wasm_bindgen]
impl WasmGame {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self { game: Game::new() }
    }

    /// Places a piece for the side to move. `false` means the move was illegal.
    pub fn play(&mut self, x: i32, y: i32) -> bool {
        self.game.apply(Action::Place(Coord::new(x, y)))
    }

    pub fn pass(&mut self) -> bool {
        self.game.apply(Action::Pass)
    }

    pub fn undo(&mut self) {
        self.game.undo();
    }

    #[wasm_bindgen(js_name = isGameOver)]
    pub fn is_game_over(&self) -> bool {
        self.game.is_game_over()
    }

    #[wasm_bindgen(js_name = canUndo)]
    pub fn can_undo(&self) -> bool {
        self.game.can_undo()
    }

    pub fn status(&self) -> String {
        self.game.status()
    }

    /// Current [`Snapshot`](crate::types::Snapshot) as a plain JS object.
    pub fn state(&self) -> Result<JsValue, JsValue> {
        Ok(serde_wasm_bindgen::to_value(&self.game.snapshot())?)
    }

    /// [`GameResult`](crate::types::GameResult) once the game is over, else `null`.
    pub fn result(&self) -> Result<JsValue, JsValue> {
        match self.game.result() {
            Some(result) => Ok(serde_wasm_bindgen::to_value(&result)?),
            None => Ok(JsValue::NULL),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wrapper_follows_the_engine() {
        let mut game = WasmGame::new();

        assert!(wasm_ready());
        assert!(!game.pass());
        assert!(!game.play(2, 4));
        assert!(game.play(2, 3));
        assert!(game.can_undo());
        assert_eq!(game.status(), "White's turn");

        game.undo();
        assert!(!game.can_undo());
        assert!(!game.is_game_over());
        assert_eq!(game.game, Game::new());
    }
}
