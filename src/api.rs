//! WASM boundary consumed by the presentation layer.
//!
//! Holds the single in-progress game behind a process-wide slot; the JS
//! side drives turns and re-renders from the returned [`GameState`]
//! snapshots. Rendering, asset loading, and input polling all live on the
//! JS side.

use std::sync::Mutex;

use once_cell::sync::Lazy;
use serde::Serialize;
use wasm_bindgen::prelude::*;

use crate::game::GameInstance;
use crate::types::Side;

static GAME: Lazy<Mutex<Option<GameInstance>>> = Lazy::new(|| Mutex::new(None));

fn with_game<T>(f: impl FnOnce(&mut GameInstance) -> Result<T, String>) -> Result<T, JsValue> {
    let mut slot = GAME
        .lock()
        .map_err(|_| JsValue::from_str("game slot poisoned"))?;
    let game = slot
        .as_mut()
        .ok_or_else(|| JsValue::from_str("no game in progress"))?;
    f(game).map_err(|err| JsValue::from_str(&err))
}

fn to_js<T: Serialize>(value: &T) -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(value).map_err(|err| JsValue::from_str(&err.to_string()))
}

/// Starts a new game. Side selection is a pre-game concern of the
/// presentation layer; the flag only records which side the human plays.
#[wasm_bindgen]
pub fn new_game(human_is_black: bool) -> Result<JsValue, JsValue> {
    let human = if human_is_black {
        Side::Black
    } else {
        Side::White
    };
    let game = GameInstance::new(human);
    let state = game.to_game_state();

    *GAME
        .lock()
        .map_err(|_| JsValue::from_str("game slot poisoned"))? = Some(game);

    to_js(&state)
}

/// Legal moves for the side to act, as `{col, row}` objects.
#[wasm_bindgen]
pub fn legal_moves() -> Result<JsValue, JsValue> {
    let moves = with_game(|game| Ok(game.legal_moves()))?;
    to_js(&moves)
}

/// Plays the human's move and returns the updated state snapshot.
#[wasm_bindgen]
pub fn place(col: u8, row: u8) -> Result<JsValue, JsValue> {
    let state = with_game(|game| {
        game.place(col, row)?;
        Ok(game.to_game_state())
    })?;
    to_js(&state)
}

/// Plays the computer's move and returns the updated state snapshot.
#[wasm_bindgen]
pub fn ai_move() -> Result<JsValue, JsValue> {
    let state = with_game(|game| {
        game.ai_move()?;
        Ok(game.to_game_state())
    })?;
    to_js(&state)
}

#[wasm_bindgen]
pub fn game_state() -> Result<JsValue, JsValue> {
    let state = with_game(|game| Ok(game.to_game_state()))?;
    to_js(&state)
}

#[wasm_bindgen]
pub fn is_terminal() -> Result<bool, JsValue> {
    with_game(|game| Ok(game.board().is_terminal()))
}

#[wasm_bindgen]
pub fn score() -> Result<JsValue, JsValue> {
    let score = with_game(|game| Ok(game.board().score()))?;
    to_js(&score)
}

/// Final score and winner; an error while the game is still running.
#[wasm_bindgen]
pub fn game_result() -> Result<JsValue, JsValue> {
    let result = with_game(|game| {
        if !game.is_game_over() {
            return Err("game is not over".to_string());
        }
        Ok(game.to_game_result())
    })?;
    to_js(&result)
}
