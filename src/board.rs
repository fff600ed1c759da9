use crate::types::{Marker, Player, Point};

/// Lattice and cell storage for a `rows` x `cols` grid of cells.
///
/// Markers live on the `(rows + 1) x (cols + 1)` lattice points; cell owners
/// live on the `rows x cols` cells, each keyed by its top-left corner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    rows: u16,
    cols: u16,
    markers: Vec<Option<Marker>>,
    owners: Vec<Option<Player>>,
}

impl Board {
    pub fn new(rows: u16, cols: u16) -> Self {
        let points = (rows as usize + 1) * (cols as usize + 1);
        let cells = rows as usize * cols as usize;
        Self {
            rows,
            cols,
            markers: vec![None; points],
            owners: vec![None; cells],
        }
    }

    pub fn rows(&self) -> u16 {
        self.rows
    }

    pub fn cols(&self) -> u16 {
        self.cols
    }

    /// Converts a raw coordinate into a lattice point when
    /// `0 <= m <= rows` and `0 <= n <= cols`.
    pub fn point(&self, m: i32, n: i32) -> Option<Point> {
        let m = u16::try_from(m).ok().filter(|&m| m <= self.rows)?;
        let n = u16::try_from(n).ok().filter(|&n| n <= self.cols)?;
        Some(Point::new(m, n))
    }

    pub fn marker_at(&self, point: Point) -> Option<&Marker> {
        self.point_index(point)
            .and_then(|idx| self.markers[idx].as_ref())
    }

    pub fn is_empty(&self, point: Point) -> bool {
        self.marker_at(point).is_none()
    }

    /// Whether a direct grid neighbour of `point` already holds a marker.
    ///
    /// The neighbour below/right is only consulted while it stays inside the
    /// cell range (`m + 1 < rows`, `n + 1 < cols`), so points on the far edge
    /// of the lattice never count as neighbours of the row/column before it.
    pub fn has_adjacent_marker(&self, point: Point) -> bool {
        let Point { m, n } = point;
        let candidates = [
            (m > 0).then(|| Point::new(m - 1, n)),
            (m + 1 < self.rows).then(|| Point::new(m + 1, n)),
            (n > 0).then(|| Point::new(m, n - 1)),
            (n + 1 < self.cols).then(|| Point::new(m, n + 1)),
        ];
        candidates
            .into_iter()
            .flatten()
            .any(|neighbour| !self.is_empty(neighbour))
    }

    /// Stores a marker. Caller contract: the position is in bounds and empty.
    pub fn place(&mut self, marker: Marker) {
        if let Some(idx) = self.point_index(marker.position) {
            debug_assert!(self.markers[idx].is_none(), "lattice point reused");
            self.markers[idx] = Some(marker);
        }
    }

    /// Cells that have `point` as one of their four corners.
    pub fn cells_touching(&self, point: Point) -> impl Iterator<Item = Point> + use<> {
        let Point { m, n } = point;
        let (rows, cols) = (self.rows, self.cols);
        [
            (m > 0 && n < cols).then(|| Point::new(m - 1, n)),
            (n > 0 && m < rows).then(|| Point::new(m, n - 1)),
            (m < rows && n < cols).then(|| Point::new(m, n)),
            (m > 0 && n > 0).then(|| Point::new(m - 1, n - 1)),
        ]
        .into_iter()
        .flatten()
    }

    /// Claims `cell` for the owner of its most recently placed corner marker.
    ///
    /// Returns the new owner, or `None` when the cell is already claimed or a
    /// corner is still empty.
    pub fn resolve_cell(&mut self, cell: Point) -> Option<Player> {
        let idx = self.cell_index(cell)?;
        if self.owners[idx].is_some() {
            return None;
        }

        let corners = corners_of(cell).map(|corner| self.marker_at(corner));
        if corners.iter().any(Option::is_none) {
            return None;
        }
        let owner = corners
            .into_iter()
            .flatten()
            .max_by_key(|marker| marker.sequence)?
            .owner;

        self.owners[idx] = Some(owner);
        Some(owner)
    }

    pub fn cell_owner(&self, cell: Point) -> Option<Player> {
        self.cell_index(cell).and_then(|idx| self.owners[idx])
    }

    /// Cell owners in row-major order.
    pub fn owners(&self) -> &[Option<Player>] {
        &self.owners
    }

    /// Returns `[first, second]` owned cell counts by scanning every cell.
    pub fn count(&self) -> [u32; 2] {
        let mut score = [0u32; 2];
        for owner in self.owners.iter().flatten() {
            score[owner.index()] += 1;
        }
        score
    }

    /// Cells whose four corners are all occupied.
    pub fn enclosed_cells(&self) -> usize {
        (0..self.rows)
            .flat_map(|m| (0..self.cols).map(move |n| Point::new(m, n)))
            .filter(|&cell| corners_of(cell).iter().all(|&c| !self.is_empty(c)))
            .count()
    }

    fn point_index(&self, point: Point) -> Option<usize> {
        if point.m > self.rows || point.n > self.cols {
            return None;
        }
        Some(point.m as usize * (self.cols as usize + 1) + point.n as usize)
    }

    fn cell_index(&self, cell: Point) -> Option<usize> {
        if cell.m >= self.rows || cell.n >= self.cols {
            return None;
        }
        Some(cell.m as usize * self.cols as usize + cell.n as usize)
    }
}

fn corners_of(cell: Point) -> [Point; 4] {
    let Point { m, n } = cell;
    [
        Point::new(m, n),
        Point::new(m, n + 1),
        Point::new(m + 1, n),
        Point::new(m + 1, n + 1),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn marker(sequence: u32, owner: Player, m: u16, n: u16) -> Marker {
        Marker {
            sequence,
            owner,
            position: Point::new(m, n),
        }
    }

    #[test]
    fn point_rejects_negative_and_past_edge_coordinates() {
        let board = Board::new(5, 5);

        assert_eq!(board.point(5, 5), Some(Point::new(5, 5)));
        assert_eq!(board.point(-1, 0), None);
        assert_eq!(board.point(0, 6), None);
    }

    #[test]
    fn cells_touching_respects_board_edges() {
        let board = Board::new(5, 5);

        let corner: Vec<_> = board.cells_touching(Point::new(0, 0)).collect();
        assert_eq!(corner, vec![Point::new(0, 0)]);

        let far_corner: Vec<_> = board.cells_touching(Point::new(5, 5)).collect();
        assert_eq!(far_corner, vec![Point::new(4, 4)]);

        assert_eq!(board.cells_touching(Point::new(2, 3)).count(), 4);
        assert_eq!(board.cells_touching(Point::new(5, 2)).count(), 2);
    }

    #[test]
    fn resolve_cell_waits_for_all_four_corners() {
        let mut board = Board::new(2, 2);
        board.place(marker(0, Player::First, 0, 0));
        board.place(marker(1, Player::Second, 0, 1));
        board.place(marker(2, Player::First, 1, 0));

        assert_eq!(board.resolve_cell(Point::new(0, 0)), None);
        assert_eq!(board.cell_owner(Point::new(0, 0)), None);

        board.place(marker(3, Player::Second, 1, 1));

        assert_eq!(board.resolve_cell(Point::new(0, 0)), Some(Player::Second));
        assert_eq!(board.cell_owner(Point::new(0, 0)), Some(Player::Second));
        assert_eq!(board.count(), [0, 1]);
        assert_eq!(board.enclosed_cells(), 1);
    }

    #[test]
    fn resolve_cell_uses_highest_sequence_not_last_corner_checked() {
        let mut board = Board::new(1, 1);
        board.place(marker(3, Player::First, 0, 0));
        board.place(marker(0, Player::Second, 0, 1));
        board.place(marker(1, Player::Second, 1, 0));
        board.place(marker(2, Player::Second, 1, 1));

        assert_eq!(board.resolve_cell(Point::new(0, 0)), Some(Player::First));
        // Already claimed.
        assert_eq!(board.resolve_cell(Point::new(0, 0)), None);
    }

    #[test]
    fn adjacency_ignores_neighbours_beyond_the_cell_range() {
        let mut board = Board::new(3, 3);
        board.place(marker(0, Player::First, 3, 1));

        // (3, 1) sits on row 3 == rows, so (2, 1) may not lean on it.
        assert!(!board.has_adjacent_marker(Point::new(2, 1)));
        // The upward neighbour is always consulted.
        assert!(board.has_adjacent_marker(Point::new(3, 2)));
        assert!(board.has_adjacent_marker(Point::new(3, 0)));
    }

    #[test]
    fn single_cell_board_only_expands_away_from_the_origin() {
        let mut board = Board::new(1, 1);
        board.place(marker(0, Player::First, 1, 1));

        assert!(!board.has_adjacent_marker(Point::new(0, 0)));
        assert!(!board.has_adjacent_marker(Point::new(1, 0)));
        assert!(!board.has_adjacent_marker(Point::new(0, 1)));

        let mut board = Board::new(1, 1);
        board.place(marker(0, Player::First, 0, 0));

        assert!(board.has_adjacent_marker(Point::new(1, 0)));
        assert!(board.has_adjacent_marker(Point::new(0, 1)));
        assert!(!board.has_adjacent_marker(Point::new(1, 1)));
    }
}
