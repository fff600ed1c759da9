//! JavaScript-facing handle around [`GameEngine`].
//!
//! The page owns one `TerritoryGame` per match. `move` is the only mutator;
//! every other method hands out plain objects built with `serde-wasm-bindgen`.

use serde::Serialize;
use wasm_bindgen::prelude::*;

use crate::config::{GameConfig, LayoutConfig};
use crate::game::GameEngine;
use crate::types::{MoveReport, Player};
use crate::view::Scene;

#[wasm_bindgen]
pub struct TerritoryGame {
    engine: GameEngine,
}

#[wasm_bindgen]
impl TerritoryGame {
    /// `config` may be omitted for the default 5x5 board.
    #[wasm_bindgen(constructor)]
    pub fn new(config: JsValue) -> Result<TerritoryGame, JsError> {
        let config: GameConfig = from_optional(config)?;
        Ok(Self {
            engine: GameEngine::new(config)?,
        })
    }

    /// Attempts a move for the current player. Never throws for an illegal
    /// move; the returned report says whether it was accepted.
    #[wasm_bindgen(js_name = "move")]
    pub fn play(&mut self, m: i32, n: i32) -> Result<JsValue, JsError> {
        to_js(&MoveReport::from(self.engine.play(m, n)))
    }

    pub fn snapshot(&self) -> Result<JsValue, JsError> {
        to_js(&self.engine.snapshot())
    }

    pub fn scene(&self, layout: JsValue) -> Result<JsValue, JsError> {
        let layout: LayoutConfig = from_optional(layout)?;
        to_js(&Scene::from_snapshot(&self.engine.snapshot(), &layout))
    }

    #[wasm_bindgen(js_name = "legalPoints")]
    pub fn legal_points(&self) -> Result<JsValue, JsError> {
        to_js(&self.engine.legal_points())
    }

    /// Maps a canvas position to a lattice point, or `undefined` on a miss.
    #[wasm_bindgen(js_name = "hitTest")]
    pub fn hit_test(&self, x: f64, y: f64, layout: JsValue) -> Result<JsValue, JsError> {
        let layout: LayoutConfig = from_optional(layout)?;
        to_js(&layout.hit_test(x, y, self.engine.rows(), self.engine.cols()))
    }

    #[wasm_bindgen(js_name = "currentPlayer")]
    pub fn current_player(&self) -> u8 {
        self.engine.current_player().into()
    }

    #[wasm_bindgen(js_name = "moveCount")]
    pub fn move_count(&self) -> u32 {
        self.engine.move_count()
    }

    pub fn score(&self, player: u8) -> Result<u32, JsError> {
        let player = Player::from_index(player)
            .ok_or_else(|| JsError::new(&format!("unknown player index: {player}")))?;
        Ok(self.engine.score(player))
    }

    pub fn rows(&self) -> u16 {
        self.engine.rows()
    }

    pub fn cols(&self) -> u16 {
        self.engine.cols()
    }
}

fn from_optional<T>(value: JsValue) -> Result<T, JsError>
where
    T: serde::de::DeserializeOwned + Default,
{
    if value.is_undefined() || value.is_null() {
        return Ok(T::default());
    }
    Ok(serde_wasm_bindgen::from_value(value)?)
}

fn to_js<T: Serialize + ?Sized>(value: &T) -> Result<JsValue, JsError> {
    Ok(serde_wasm_bindgen::to_value(value)?)
}
