//! Read-only presenter for the canvas front end.
//!
//! Turns a [`GameSnapshot`] into a flat list of draw operations that the
//! JavaScript side replays onto a 2D canvas every animation frame, and maps
//! canvas clicks back onto lattice points. Nothing here touches the engine.

use serde::Serialize;

use crate::config::LayoutConfig;
use crate::types::{GameSnapshot, Player, Point};

const MARKER_COLORS: [&str; 2] = ["rgb(200, 0, 0)", "rgb(200, 200, 200)"];
const CELL_COLORS: [&str; 2] = ["rgb(100, 50, 0)", "rgb(100, 100, 100)"];
const INK: &str = "rgb(0, 0, 0)";
const SCORE_FONT: &str = "24px serif";
const SCORE_ORIGIN: (f64, f64) = (380.0, 400.0);
const SCORE_LINE_HEIGHT: f64 = 50.0;

/// One canvas primitive, tagged by `kind` on the JS side.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum DrawOp {
    Line {
        x0: f64,
        y0: f64,
        x1: f64,
        y1: f64,
        color: &'static str,
    },
    FillRect {
        x: f64,
        y: f64,
        width: f64,
        height: f64,
        color: &'static str,
    },
    Disc {
        x: f64,
        y: f64,
        radius: f64,
        color: &'static str,
    },
    Text {
        x: f64,
        y: f64,
        text: String,
        font: &'static str,
        color: &'static str,
    },
}

/// Everything needed to paint one frame, in paint order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Scene {
    pub width: f64,
    pub height: f64,
    pub ops: Vec<DrawOp>,
}

impl Scene {
    /// Grid lines first, then claimed cells, markers, and finally the scores.
    pub fn from_snapshot(snapshot: &GameSnapshot, layout: &LayoutConfig) -> Self {
        let mut ops = grid_lines(snapshot.rows, snapshot.cols, layout);

        for m in 0..snapshot.rows {
            for n in 0..snapshot.cols {
                if let Some(owner) = snapshot.owner_of(m, n) {
                    let (x, y) = layout.canvas_position(Point::new(m, n));
                    ops.push(DrawOp::FillRect {
                        x,
                        y,
                        width: layout.grid_spacing,
                        height: layout.grid_spacing,
                        color: CELL_COLORS[owner.index()],
                    });
                }
            }
        }

        ops.extend(snapshot.markers.iter().map(|marker| {
            let (x, y) = layout.canvas_position(marker.position);
            DrawOp::Disc {
                x,
                y,
                radius: layout.marker_radius,
                color: MARKER_COLORS[marker.owner.index()],
            }
        }));

        ops.extend(Player::ALL.into_iter().map(|player| {
            let (x, y) = SCORE_ORIGIN;
            DrawOp::Text {
                x,
                y: y + SCORE_LINE_HEIGHT * player.index() as f64,
                text: format!(
                    "player {}: {}",
                    player.index() + 1,
                    snapshot.scores[player.index()]
                ),
                font: SCORE_FONT,
                color: INK,
            }
        }));

        let (width, height) = layout.canvas_position(Point::new(snapshot.rows, snapshot.cols));
        Self {
            width: width + layout.margin,
            height: height + layout.margin,
            ops,
        }
    }
}

fn grid_lines(rows: u16, cols: u16, layout: &LayoutConfig) -> Vec<DrawOp> {
    let (right, bottom) = layout.canvas_position(Point::new(rows, cols));
    let horizontal = (0..=rows).map(|m| {
        let (_, y) = layout.canvas_position(Point::new(m, 0));
        DrawOp::Line {
            x0: layout.margin,
            y0: y,
            x1: right,
            y1: y,
            color: INK,
        }
    });
    let vertical = (0..=cols).map(|n| {
        let (x, _) = layout.canvas_position(Point::new(0, n));
        DrawOp::Line {
            x0: x,
            y0: layout.margin,
            x1: x,
            y1: bottom,
            color: INK,
        }
    });
    horizontal.chain(vertical).collect()
}

impl LayoutConfig {
    /// Canvas position of a lattice point. Rows grow downwards along `y`.
    pub fn canvas_position(&self, point: Point) -> (f64, f64) {
        (
            self.margin + f64::from(point.n) * self.grid_spacing,
            self.margin + f64::from(point.m) * self.grid_spacing,
        )
    }

    /// Lattice point whose marker disc contains canvas position `(x, y)`.
    pub fn hit_test(&self, x: f64, y: f64, rows: u16, cols: u16) -> Option<Point> {
        if !(x.is_finite() && y.is_finite()) || self.grid_spacing <= 0.0 {
            return None;
        }
        let n = ((x - self.margin) / self.grid_spacing).round();
        let m = ((y - self.margin) / self.grid_spacing).round();
        if m < 0.0 || n < 0.0 || m > f64::from(rows) || n > f64::from(cols) {
            return None;
        }

        let point = Point::new(m as u16, n as u16);
        let (cx, cy) = self.canvas_position(point);
        ((x - cx).hypot(y - cy) <= self.marker_radius).then_some(point)
    }
}
