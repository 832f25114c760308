//! The 8-puzzle: eight numbered tiles and a blank on a 3×3 board.
//!
//! A [`Board`] is a row-major permutation of `0..=8` where `0` is the blank.
//! A move slides the blank one cell up, down, left or right, swapping it with
//! the tile there. [`PuzzleProblem`] exposes this as a [`SearchProblem`]
//! whose estimate is the summed Manhattan distance of every tile from its
//! goal cell, and [`EightPuzzle`] validates input and runs the solver.

use std::fmt;
use std::str::FromStr;

use astra_core::{Direction, Point, Range, manhattan};
use astra_search::{
    AstarSearch, Cost, Revisit, SearchConfig, SearchOutcome, SearchProblem, SearchStatus,
};

/// Side length of the board.
pub const SIDE: i32 = 3;
/// Number of cells on the board.
pub const CELLS: usize = (SIDE * SIDE) as usize;

#[inline]
fn cell(i: usize) -> Point {
    Point::new(i as i32 % SIDE, i as i32 / SIDE)
}

// ---------------------------------------------------------------------------
// Slide
// ---------------------------------------------------------------------------

/// Direction the blank moves in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Slide {
    Up,
    Down,
    Left,
    Right,
}

impl Slide {
    /// Every slide, in the order successors are generated.
    pub const ALL: [Slide; 4] = [Slide::Up, Slide::Down, Slide::Left, Slide::Right];

    pub const fn direction(self) -> Direction {
        match self {
            Slide::Up => Direction::North,
            Slide::Down => Direction::South,
            Slide::Left => Direction::West,
            Slide::Right => Direction::East,
        }
    }

    /// The slide that undoes this one.
    pub const fn opposite(self) -> Self {
        match self {
            Slide::Up => Slide::Down,
            Slide::Down => Slide::Up,
            Slide::Left => Slide::Right,
            Slide::Right => Slide::Left,
        }
    }
}

impl fmt::Display for Slide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Slide::Up => "up",
            Slide::Down => "down",
            Slide::Left => "left",
            Slide::Right => "right",
        };
        f.write_str(s)
    }
}

// ---------------------------------------------------------------------------
// Board
// ---------------------------------------------------------------------------

/// One arrangement of the tiles. Always a permutation of `0..=8`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Board([u8; CELLS]);

impl Board {
    /// Tiles `1..=8` in row-major order with the blank last.
    pub const GOAL: Board = Board([1, 2, 3, 4, 5, 6, 7, 8, 0]);

    /// Validate `tiles` as a board.
    pub fn new(tiles: &[u8]) -> Result<Self, PuzzleError> {
        if tiles.len() != CELLS {
            return Err(PuzzleError::WrongLength(tiles.len()));
        }
        let mut seen = [false; CELLS];
        let mut board = [0u8; CELLS];
        for (i, &t) in tiles.iter().enumerate() {
            let slot = seen
                .get_mut(t as usize)
                .ok_or_else(|| PuzzleError::NotPermutation(tiles.to_vec()))?;
            if *slot {
                return Err(PuzzleError::NotPermutation(tiles.to_vec()));
            }
            *slot = true;
            board[i] = t;
        }
        Ok(Self(board))
    }

    /// The tiles in row-major order.
    #[inline]
    pub fn tiles(&self) -> &[u8; CELLS] {
        &self.0
    }

    /// Index of the blank.
    pub fn blank(&self) -> usize {
        // A valid board always holds exactly one 0.
        self.0.iter().position(|&t| t == 0).unwrap_or(CELLS - 1)
    }

    /// The board after sliding the blank, or `None` if the blank would leave
    /// the board.
    pub fn apply(&self, slide: Slide) -> Option<Board> {
        let blank = self.blank();
        let target = cell(blank).step(slide.direction());
        let target = Range::with_size(SIDE, SIDE).index(target)?;
        let mut tiles = self.0;
        tiles.swap(blank, target);
        Some(Board(tiles))
    }

    /// Sum over non-blank tiles of the Manhattan distance between the tile's
    /// cell here and its cell in `goal`.
    pub fn manhattan_to(&self, goal: &Board) -> Cost {
        let mut home = [0usize; CELLS];
        for (i, &t) in goal.0.iter().enumerate() {
            home[t as usize] = i;
        }
        self.0
            .iter()
            .enumerate()
            .filter(|&(_, &t)| t != 0)
            .map(|(i, &t)| manhattan(cell(i), cell(home[t as usize])))
            .sum()
    }

    /// Number of tile pairs (blank excluded) in reverse order.
    pub fn inversions(&self) -> usize {
        let tiles: Vec<u8> = self.0.iter().copied().filter(|&t| t != 0).collect();
        tiles
            .iter()
            .enumerate()
            .map(|(i, &a)| tiles[i + 1..].iter().filter(|&&b| b < a).count())
            .sum()
    }

    /// Whether `goal` can be reached from this board. On an odd-width board
    /// every slide keeps the inversion parity, and equal parity suffices.
    ///
    /// The solver does not consult this; it is offered to callers that want
    /// to reject hopeless instances up front.
    pub fn is_solvable_for(&self, goal: &Board) -> bool {
        self.inversions() % 2 == goal.inversions() % 2
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::GOAL
    }
}

impl TryFrom<&[u8]> for Board {
    type Error = PuzzleError;

    fn try_from(tiles: &[u8]) -> Result<Self, Self::Error> {
        Board::new(tiles)
    }
}

impl FromStr for Board {
    type Err = PuzzleError;

    /// Parse tiles separated by whitespace and/or commas, e.g. `"1 2 3 4 5 6 7 0 8"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let tiles = s
            .split(|c: char| c.is_whitespace() || c == ',')
            .filter(|t| !t.is_empty())
            .map(|t| t.parse::<u8>().map_err(|_| PuzzleError::InvalidTile(t.to_string())))
            .collect::<Result<Vec<_>, _>>()?;
        Board::new(&tiles)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Board {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let tiles = <[u8; CELLS] as serde::Deserialize>::deserialize(deserializer)?;
        Board::new(&tiles).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (y, row) in self.0.chunks(SIDE as usize).enumerate() {
            if y > 0 {
                writeln!(f)?;
            }
            for (x, &t) in row.iter().enumerate() {
                if x > 0 {
                    write!(f, " ")?;
                }
                if t == 0 {
                    write!(f, "_")?;
                } else {
                    write!(f, "{t}")?;
                }
            }
        }
        Ok(())
    }
}

/// Errors raised when building a [`Board`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PuzzleError {
    /// Not exactly nine tiles.
    WrongLength(usize),
    /// The tiles are not one each of `0..=8`.
    NotPermutation(Vec<u8>),
    /// A token that is not a small unsigned integer.
    InvalidTile(String),
}

impl fmt::Display for PuzzleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::WrongLength(n) => write!(f, "puzzle: expected {CELLS} tiles, got {n}"),
            Self::NotPermutation(tiles) => {
                write!(f, "puzzle: {tiles:?} is not a permutation of 0..=8")
            }
            Self::InvalidTile(t) => write!(f, "puzzle: invalid tile \u{201c}{t}\u{201d}"),
        }
    }
}

impl std::error::Error for PuzzleError {}

// ---------------------------------------------------------------------------
// Search
// ---------------------------------------------------------------------------

/// The 8-puzzle as a search problem.
#[derive(Debug, Clone, Copy, Default)]
pub struct PuzzleProblem;

impl PuzzleProblem {
    /// Configuration used for puzzle searches: expanded boards are final.
    pub fn config() -> SearchConfig {
        SearchConfig::default().with_revisit(Revisit::Closed)
    }
}

impl SearchProblem for PuzzleProblem {
    type State = Board;
    type Action = Slide;

    fn successors(&self, board: &Board, buf: &mut Vec<(Board, Slide)>) {
        for slide in Slide::ALL {
            if let Some(next) = board.apply(slide) {
                buf.push((next, slide));
            }
        }
    }

    fn estimate(&self, from: &Board, goal: &Board) -> Cost {
        from.manhattan_to(goal)
    }
}

/// A validated puzzle instance ready to solve.
#[derive(Debug, Clone)]
pub struct EightPuzzle {
    initial: Board,
    goal: Board,
    config: SearchConfig,
}

impl EightPuzzle {
    /// Validate `tiles` and target [`Board::GOAL`].
    pub fn new(tiles: &[u8]) -> Result<Self, PuzzleError> {
        Ok(Self::from_board(Board::new(tiles)?))
    }

    pub fn from_board(initial: Board) -> Self {
        Self {
            initial,
            goal: Board::GOAL,
            config: PuzzleProblem::config(),
        }
    }

    /// Target a different arrangement.
    pub fn with_goal(mut self, goal: Board) -> Self {
        self.goal = goal;
        self
    }

    pub fn with_config(mut self, config: SearchConfig) -> Self {
        self.config = config;
        self
    }

    pub fn initial(&self) -> &Board {
        &self.initial
    }

    pub fn goal(&self) -> &Board {
        &self.goal
    }

    /// Run A* from the initial board to the goal.
    ///
    /// Solvability is not checked first: an unsolvable instance exhausts all
    /// 181 440 boards reachable from it before reporting failure.
    pub fn solve(&self) -> Solution {
        log::debug!("puzzle: solving {:?} -> {:?}", self.initial.tiles(), self.goal.tiles());
        let outcome =
            AstarSearch::with_config(self.config).search(&PuzzleProblem, self.initial, &self.goal);
        Solution { outcome }
    }
}

/// Result of [`EightPuzzle::solve`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Solution {
    pub outcome: SearchOutcome<Board, Slide>,
}

impl Solution {
    pub fn is_solved(&self) -> bool {
        self.outcome.is_found()
    }

    pub fn status(&self) -> SearchStatus {
        self.outcome.status
    }

    /// Number of slides, or `None` if unsolved.
    pub fn moves(&self) -> Option<usize> {
        self.is_solved().then(|| self.outcome.actions.len())
    }

    pub fn nodes_expanded(&self) -> usize {
        self.outcome.nodes_expanded
    }

    /// Each board on the solution with the slide that produced it; the
    /// initial board comes first with no slide.
    pub fn trace(&self) -> impl Iterator<Item = (Option<Slide>, &Board)> + '_ {
        let slides = std::iter::once(None).chain(self.outcome.actions.iter().copied().map(Some));
        slides.zip(&self.outcome.path)
    }
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn board_round_trip() {
        let b = Board::new(&[4, 1, 3, 7, 2, 6, 0, 5, 8]).unwrap();
        let json = serde_json::to_string(&b).unwrap();
        let back: Board = serde_json::from_str(&json).unwrap();
        assert_eq!(b, back);
    }

    #[test]
    fn invalid_board_is_rejected() {
        let res: Result<Board, _> = serde_json::from_str("[1,1,2,3,4,5,6,7,8]");
        assert!(res.is_err());
    }
}
