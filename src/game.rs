use log::{debug, info};

use crate::board::Board;
use crate::config::GameConfig;
use crate::error::{ConfigError, MoveRejection};
use crate::types::{GameSnapshot, Marker, Player, Point};

/// Rules engine: owns every piece of game state and applies moves.
///
/// `play` is the only mutator. Everything else is a read-only query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameEngine {
    board: Board,
    history: Vec<Marker>,
    scores: [u32; 2],
    current_player: Player,
    move_count: u32,
}

impl GameEngine {
    pub fn new(config: GameConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        info!("new {}x{} game", config.rows, config.cols);
        Ok(Self::with_board(Board::new(config.rows, config.cols)))
    }

    fn with_board(board: Board) -> Self {
        Self {
            board,
            history: Vec::new(),
            scores: [0, 0],
            current_player: Player::First,
            move_count: 0,
        }
    }

    /// Attempts to place a marker for the current player at lattice point `(m, n)`.
    ///
    /// A rejected attempt changes nothing, including whose turn it is.
    pub fn play(&mut self, m: i32, n: i32) -> Result<Marker, MoveRejection> {
        let point = self.check_move(m, n).inspect_err(|reason| {
            debug!("{:?} rejected at ({m}, {n}): {reason}", self.current_player);
        })?;
        Ok(self.apply_move(point))
    }

    /// Runs the legality checks in order: bounds, occupancy, adjacency.
    pub fn check_move(&self, m: i32, n: i32) -> Result<Point, MoveRejection> {
        let point = self.board.point(m, n).ok_or(MoveRejection::OutOfBounds)?;
        if !self.board.is_empty(point) {
            return Err(MoveRejection::Occupied);
        }
        if self.move_count > 0 && !self.board.has_adjacent_marker(point) {
            return Err(MoveRejection::NotAdjacent);
        }
        Ok(point)
    }

    /// Every lattice point where `play` would currently succeed, row-major.
    pub fn legal_points(&self) -> Vec<Point> {
        let (rows, cols) = (self.rows() as i32, self.cols() as i32);
        (0..=rows)
            .flat_map(|m| (0..=cols).map(move |n| (m, n)))
            .filter_map(|(m, n)| self.check_move(m, n).ok())
            .collect()
    }

    pub fn rows(&self) -> u16 {
        self.board.rows()
    }

    pub fn cols(&self) -> u16 {
        self.board.cols()
    }

    pub fn current_player(&self) -> Player {
        self.current_player
    }

    pub fn move_count(&self) -> u32 {
        self.move_count
    }

    pub fn scores(&self) -> [u32; 2] {
        self.scores
    }

    pub fn score(&self, player: Player) -> u32 {
        self.scores[player.index()]
    }

    pub fn marker_at(&self, point: Point) -> Option<&Marker> {
        self.board.marker_at(point)
    }

    pub fn cell_owner(&self, m: u16, n: u16) -> Option<Player> {
        self.board.cell_owner(Point::new(m, n))
    }

    /// Markers in placement order.
    pub fn history(&self) -> &[Marker] {
        &self.history
    }

    pub fn claimed_cells(&self) -> u32 {
        self.scores.iter().sum()
    }

    /// Cells with all four corners marked. Always equal to `claimed_cells`.
    pub fn enclosed_cells(&self) -> usize {
        self.board.enclosed_cells()
    }

    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            rows: self.rows(),
            cols: self.cols(),
            markers: self.history.clone(),
            owners: self.board.owners().to_vec(),
            scores: self.scores,
            current_player: self.current_player,
            move_count: self.move_count,
        }
    }

    fn apply_move(&mut self, point: Point) -> Marker {
        let marker = Marker {
            sequence: self.move_count,
            owner: self.current_player,
            position: point,
        };
        self.move_count += 1;
        self.history.push(marker);
        self.board.place(marker);
        debug!(
            "{:?} placed marker #{} at ({}, {})",
            marker.owner, marker.sequence, point.m, point.n
        );

        for cell in self.board.cells_touching(point) {
            if let Some(owner) = self.board.resolve_cell(cell) {
                info!("cell ({}, {}) claimed by {owner:?}", cell.m, cell.n);
            }
        }
        self.scores = self.board.count();
        self.current_player = self.current_player.opponent();

        marker
    }
}

impl Default for GameEngine {
    fn default() -> Self {
        let config = GameConfig::default();
        Self::with_board(Board::new(config.rows, config.cols))
    }
}
