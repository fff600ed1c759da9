//! Error types for move attempts and board construction.

use derive_more::{Display, Error};
use serde::Serialize;

/// Why a move attempt was refused. A refused attempt leaves the game untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Error, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MoveRejection {
    #[display("position is outside the lattice")]
    OutOfBounds,
    #[display("position is already occupied")]
    Occupied,
    #[display("position does not touch an existing marker")]
    NotAdjacent,
}

/// Invalid board configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum ConfigError {
    #[display("board must have at least one row and one column, got {rows}x{cols}")]
    ZeroDimension { rows: u16, cols: u16 },
    #[display("board must not exceed {max}x{max} cells, got {rows}x{cols}")]
    TooLarge { rows: u16, cols: u16, max: u16 },
}
