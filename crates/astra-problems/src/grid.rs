//! 4-directional pathfinding on a rectangular grid with blocked cells.
//!
//! [`GridProblem`] is the [`SearchProblem`] over [`Point`]s: each step moves
//! one cell north, east, south or west, costs 1, and may neither leave the
//! grid nor enter a blocked cell. The estimate is the Manhattan distance.

use astra_core::{Direction, Point, Range, manhattan};
use astra_search::{AstarSearch, Cost, SearchConfig, SearchOutcome, SearchProblem};

/// A `width × height` grid where some cells cannot be entered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridProblem {
    bounds: Range,
    /// Row-major, one flag per cell of `bounds`.
    blocked: Vec<bool>,
}

impl GridProblem {
    /// Create a grid of the given size. Blocked points outside the grid are
    /// ignored.
    pub fn new(width: i32, height: i32, blocked: impl IntoIterator<Item = Point>) -> Self {
        let bounds = Range::with_size(width, height);
        let mut grid = Self {
            bounds,
            blocked: vec![false; bounds.len()],
        };
        for p in blocked {
            if let Some(i) = grid.idx(p) {
                grid.blocked[i] = true;
            }
        }
        grid
    }

    /// Configuration used for grid searches: cheaper routes re-open cells.
    pub fn config() -> SearchConfig {
        SearchConfig::default()
    }

    /// The grid rectangle.
    #[inline]
    pub fn bounds(&self) -> Range {
        self.bounds
    }

    #[inline]
    pub fn width(&self) -> i32 {
        self.bounds.width()
    }

    #[inline]
    pub fn height(&self) -> i32 {
        self.bounds.height()
    }

    /// Whether `p` is inside the grid and blocked.
    pub fn is_blocked(&self, p: Point) -> bool {
        self.idx(p).is_some_and(|i| self.blocked[i])
    }

    /// Whether `p` is inside the grid and can be entered.
    pub fn is_open(&self, p: Point) -> bool {
        self.idx(p).is_some_and(|i| !self.blocked[i])
    }

    /// All blocked cells in row-major order.
    pub fn blocked(&self) -> impl Iterator<Item = Point> + '_ {
        self.bounds.iter().filter(move |&p| self.is_blocked(p))
    }

    #[inline]
    fn idx(&self, p: Point) -> Option<usize> {
        self.bounds.index(p)
    }
}

impl SearchProblem for GridProblem {
    type State = Point;
    type Action = Direction;

    fn successors(&self, p: &Point, buf: &mut Vec<(Point, Direction)>) {
        for d in Direction::ALL {
            let n = p.step(d);
            if self.is_open(n) {
                buf.push((n, d));
            }
        }
    }

    fn estimate(&self, from: &Point, goal: &Point) -> Cost {
        manhattan(*from, *goal)
    }
}

/// Shortest 4-directional path from `start` to `goal`.
///
/// A blocked or out-of-grid goal is never generated as a successor, so it is
/// only reachable when it equals `start`.
pub fn find_path(grid: &GridProblem, start: Point, goal: Point) -> SearchOutcome<Point, Direction> {
    AstarSearch::with_config(GridProblem::config()).search(grid, start, &goal)
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn path_round_trip() {
        let grid = GridProblem::new(3, 3, []);
        let out = find_path(&grid, Point::new(0, 0), Point::new(2, 2));
        let json = serde_json::to_string(&out.path).unwrap();
        let back: Vec<Point> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, out.path);
    }
}
