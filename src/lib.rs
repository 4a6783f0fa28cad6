//! Othello/Reversi rules engine with a one-ply heuristic opponent.
//!
//! The core is plain Rust: [`board`] holds the grid plus move validation,
//! enumeration, and execution; [`game`] tracks turns, passes, and game
//! over; [`ai`] picks the computer's moves. [`api`] exposes the whole
//! thing to a JS presentation layer over `wasm-bindgen`.

use wasm_bindgen::prelude::*;

pub mod ai;
pub mod api;
pub mod board;
pub mod game;
pub mod types;

pub use board::{Board, Cell};
pub use game::GameInstance;
pub use types::{GameResult, GameState, Position, Score, Side};

#[wasm_bindgen]
pub fn wasm_ready() -> bool {
    true
}
