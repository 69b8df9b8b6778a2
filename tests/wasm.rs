#![cfg(target_arch = "wasm32")]

use js_sys::Reflect;
use othello::wasm::WasmGame;
use wasm_bindgen::JsValue;
use wasm_bindgen_test::*;

#[wasm_bindgen_test]
fn state_is_a_plain_object() {
    let mut game = WasmGame::new();
    assert!(game.play(2, 3));

    let state = game.state().unwrap();
    let current = Reflect::get(&state, &JsValue::from_str("current_player")).unwrap();
    let black = Reflect::get(&state, &JsValue::from_str("black_count")).unwrap();

    assert_eq!(current.as_f64(), Some(2.0));
    assert_eq!(black.as_f64(), Some(4.0));
}

#[wasm_bindgen_test]
fn result_is_null_while_playing() {
    let game = WasmGame::new();

    assert!(game.result().unwrap().is_null());
}
