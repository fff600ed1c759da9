use wasm_bindgen::prelude::*;

pub mod board;
pub mod config;
pub mod error;
pub mod game;
pub mod types;
pub mod view;
pub mod wasm;

pub use config::{GameConfig, LayoutConfig};
pub use error::{ConfigError, MoveRejection};
pub use game::GameEngine;
pub use types::{GameSnapshot, Marker, MoveReport, Player, Point};
pub use view::{DrawOp, Scene};
pub use wasm::TerritoryGame;

#[wasm_bindgen]
pub fn wasm_ready() -> bool {
    true
}

/// Installs the panic hook and routes `log` records to the browser console.
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
}
