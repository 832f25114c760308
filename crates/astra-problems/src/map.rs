//! Grid layouts written as ASCII art.
//!
//! A [`GridMap`] parses text such as
//!
//! ```text
//! S#...
//! .#.#.
//! ....G
//! ```
//!
//! into a [`GridProblem`] plus start and goal positions. `#` is blocked,
//! `.` is open, `S` marks the start and `G` the goal (both open).

use std::fmt;

use astra_core::{Direction, Point};
use astra_search::SearchOutcome;

use crate::grid::{GridProblem, find_path};

/// A grid with a start and a goal, parsed from text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridMap {
    problem: GridProblem,
    start: Point,
    goal: Point,
}

impl GridMap {
    /// Parse a map. Lines are separated by `'\n'` and must all have the same
    /// width. Leading/trailing whitespace is trimmed from the whole string but
    /// not from individual lines.
    pub fn parse(s: &str) -> Result<Self, MapError> {
        let s = s.trim();
        if s.is_empty() {
            return Err(MapError::Empty);
        }

        let mut width: Option<i32> = None;
        let mut height = 0;
        let mut blocked = Vec::new();
        let mut start = None;
        let mut goal = None;

        for (y, line) in s.split('\n').enumerate() {
            let y = y as i32;
            let mut x = 0;
            for ch in line.chars() {
                let pos = Point::new(x, y);
                match ch {
                    '#' => blocked.push(pos),
                    '.' => {}
                    'S' => set_marker(&mut start, 'S', pos)?,
                    'G' => set_marker(&mut goal, 'G', pos)?,
                    _ => return Err(MapError::InvalidChar { ch, pos }),
                }
                x += 1;
            }
            match width {
                None => width = Some(x),
                Some(w) if w != x => {
                    return Err(MapError::InconsistentWidth {
                        line: y,
                        expected: w,
                        found: x,
                    });
                }
                Some(_) => {}
            }
            height += 1;
        }

        let start = start.ok_or(MapError::MissingMarker('S'))?;
        let goal = goal.ok_or(MapError::MissingMarker('G'))?;
        let problem = GridProblem::new(width.unwrap_or(0), height, blocked);
        log::debug!(
            "map: parsed {}x{} grid, start {start}, goal {goal}",
            problem.width(),
            problem.height()
        );
        Ok(Self {
            problem,
            start,
            goal,
        })
    }

    /// The underlying grid.
    pub fn problem(&self) -> &GridProblem {
        &self.problem
    }

    pub fn start(&self) -> Point {
        self.start
    }

    pub fn goal(&self) -> Point {
        self.goal
    }

    /// Shortest path from the start marker to the goal marker.
    pub fn solve(&self) -> SearchOutcome<Point, Direction> {
        find_path(&self.problem, self.start, self.goal)
    }
}

fn set_marker(slot: &mut Option<Point>, ch: char, pos: Point) -> Result<(), MapError> {
    if slot.is_some() {
        return Err(MapError::DuplicateMarker(ch));
    }
    *slot = Some(pos);
    Ok(())
}

/// Errors that can occur when parsing a map.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MapError {
    /// Nothing but whitespace.
    Empty,
    /// A line differs in width from the first one.
    InconsistentWidth { line: i32, expected: i32, found: i32 },
    /// A character other than `#`, `.`, `S` or `G`.
    InvalidChar { ch: char, pos: Point },
    /// The start or goal marker is absent.
    MissingMarker(char),
    /// The start or goal marker appears more than once.
    DuplicateMarker(char),
}

impl fmt::Display for MapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "map: empty"),
            Self::InconsistentWidth {
                line,
                expected,
                found,
            } => write!(
                f,
                "map: line {line} has width {found}, expected {expected}"
            ),
            Self::InvalidChar { ch, pos } => {
                write!(f, "map contains invalid character \u{201c}{ch}\u{201d} at {pos}")
            }
            Self::MissingMarker(ch) => write!(f, "map: no \u{201c}{ch}\u{201d} marker"),
            Self::DuplicateMarker(ch) => {
                write!(f, "map: more than one \u{201c}{ch}\u{201d} marker")
            }
        }
    }
}

impl std::error::Error for MapError {}

#[cfg(test)]
mod tests {
    use super::*;

    const DEMO: &str = "\
S#...
.#.#.
....G";

    #[test]
    fn parse_demo_layout() {
        let m = GridMap::parse(DEMO).unwrap();
        assert_eq!(m.problem().width(), 5);
        assert_eq!(m.problem().height(), 3);
        assert_eq!(m.start(), Point::new(0, 0));
        assert_eq!(m.goal(), Point::new(4, 2));
        let blocked: Vec<_> = m.problem().blocked().collect();
        assert_eq!(
            blocked,
            vec![Point::new(1, 0), Point::new(1, 1), Point::new(3, 1)]
        );
    }

    #[test]
    fn solve_demo_layout() {
        let m = GridMap::parse(DEMO).unwrap();
        let out = m.solve();
        assert_eq!(out.cost(), Some(6));
    }

    #[test]
    fn surrounding_whitespace_is_trimmed() {
        let m = GridMap::parse("\n\n  S.G  \n").unwrap();
        assert_eq!(m.problem().width(), 3);
        assert_eq!(m.solve().cost(), Some(2));
    }

    #[test]
    fn walled_map_has_no_path() {
        let m = GridMap::parse("S#.\n.#.\n.#G").unwrap();
        assert!(!m.solve().is_found());
    }

    #[test]
    fn inconsistent_width_error() {
        assert_eq!(
            GridMap::parse("S..\n..\n..G"),
            Err(MapError::InconsistentWidth {
                line: 1,
                expected: 3,
                found: 2
            })
        );
    }

    #[test]
    fn invalid_char_error() {
        let err = GridMap::parse("S.x\n..G").unwrap_err();
        assert_eq!(
            err,
            MapError::InvalidChar {
                ch: 'x',
                pos: Point::new(2, 0)
            }
        );
        assert!(err.to_string().contains("(2, 0)"));
    }

    #[test]
    fn marker_errors() {
        assert_eq!(GridMap::parse("...\n..G"), Err(MapError::MissingMarker('S')));
        assert_eq!(GridMap::parse("S..\n..."), Err(MapError::MissingMarker('G')));
        assert_eq!(
            GridMap::parse("S.S\n..G"),
            Err(MapError::DuplicateMarker('S'))
        );
        assert_eq!(GridMap::parse("   "), Err(MapError::Empty));
    }
}
