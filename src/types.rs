use serde::Serialize;

use crate::error::MoveRejection;

/// One of the two players. Serialized as its index (0 or 1).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(into = "u8")]
pub enum Player {
    First,
    Second,
}

impl Player {
    pub const ALL: [Player; 2] = [Player::First, Player::Second];

    pub fn opponent(self) -> Self {
        match self {
            Player::First => Player::Second,
            Player::Second => Player::First,
        }
    }

    pub fn index(self) -> usize {
        match self {
            Player::First => 0,
            Player::Second => 1,
        }
    }

    pub fn from_index(index: u8) -> Option<Self> {
        match index {
            0 => Some(Player::First),
            1 => Some(Player::Second),
            _ => None,
        }
    }
}

impl From<Player> for u8 {
    fn from(player: Player) -> Self {
        player.index() as u8
    }
}

/// A lattice coordinate. `m` is the row, `n` the column.
///
/// The same type names a cell by its top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct Point {
    pub m: u16,
    pub n: u16,
}

impl Point {
    pub const fn new(m: u16, n: u16) -> Self {
        Self { m, n }
    }
}

/// A placed marker. Never moved or removed once created.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Marker {
    /// Placement order, starting at 0.
    pub sequence: u32,
    pub owner: Player,
    pub position: Point,
}

/// Read-only copy of the game handed to renderers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GameSnapshot {
    pub rows: u16,
    pub cols: u16,
    /// All markers in placement order.
    pub markers: Vec<Marker>,
    /// Cell owners in row-major order (`rows * cols` entries).
    pub owners: Vec<Option<Player>>,
    pub scores: [u32; 2],
    pub current_player: Player,
    pub move_count: u32,
}

impl GameSnapshot {
    /// Owner of cell `(m, n)`, `None` when unclaimed or outside the grid.
    pub fn owner_of(&self, m: u16, n: u16) -> Option<Player> {
        if m >= self.rows || n >= self.cols {
            return None;
        }
        self.owners
            .get(m as usize * self.cols as usize + n as usize)
            .copied()
            .flatten()
    }
}

/// Outcome of a single move attempt as reported across the WASM boundary.
///
/// Contract:
/// - Accepted: `reason` is `None`, `marker` is the new marker.
/// - Rejected: `reason` is set, `marker` is `None`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MoveReport {
    pub accepted: bool,
    pub reason: Option<MoveRejection>,
    pub marker: Option<Marker>,
}

impl From<Result<Marker, MoveRejection>> for MoveReport {
    fn from(outcome: Result<Marker, MoveRejection>) -> Self {
        match outcome {
            Ok(marker) => Self {
                accepted: true,
                reason: None,
                marker: Some(marker),
            },
            Err(reason) => Self {
                accepted: false,
                reason: Some(reason),
                marker: None,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opponent_flips_between_the_two_players() {
        assert_eq!(Player::First.opponent(), Player::Second);
        assert_eq!(Player::Second.opponent(), Player::First);
        assert_eq!(Player::from_index(2), None);
    }

    #[test]
    fn rejected_report_carries_reason_only() {
        let report = MoveReport::from(Err::<Marker, _>(MoveRejection::Occupied));

        assert!(!report.accepted);
        assert_eq!(report.reason, Some(MoveRejection::Occupied));
        assert_eq!(report.marker, None);
    }
}
