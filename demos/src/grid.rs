//! Grid demo: argument parsing with built-in defaults and ASCII rendering.

use std::fmt::Write;

use astra_core::Point;
use astra_problems::GridProblem;

pub const DEMO_WIDTH: i32 = 5;
pub const DEMO_HEIGHT: i32 = 3;
pub const DEMO_START: Point = Point::new(0, 0);
pub const DEMO_GOAL: Point = Point::new(4, 2);
pub const DEMO_BLOCKED: [Point; 3] = [Point::new(1, 0), Point::new(1, 1), Point::new(3, 1)];

/// Grid size and endpoints taken from the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridArgs {
    pub width: i32,
    pub height: i32,
    pub start: Point,
    pub goal: Point,
}

impl Default for GridArgs {
    fn default() -> Self {
        Self {
            width: DEMO_WIDTH,
            height: DEMO_HEIGHT,
            start: DEMO_START,
            goal: DEMO_GOAL,
        }
    }
}

impl GridArgs {
    /// Read `WIDTH HEIGHT SX SY GX GY` (program name excluded).
    ///
    /// Fewer than six arguments, or any that fail to parse, select the demo
    /// defaults. Extra arguments are ignored.
    pub fn parse<I, S>(args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let args: Vec<S> = args.into_iter().collect();
        if args.len() < 6 {
            return Self::default();
        }
        let nums: Result<Vec<i32>, _> = args[..6].iter().map(|a| a.as_ref().trim().parse()).collect();
        match nums {
            Ok(n) => Self {
                width: n[0],
                height: n[1],
                start: Point::new(n[2], n[3]),
                goal: Point::new(n[4], n[5]),
            },
            Err(e) => {
                log::warn!("grid: ignoring arguments ({e}), using the demo grid");
                Self::default()
            }
        }
    }

    /// The grid to search. The blocked cells are always the demo set.
    pub fn problem(&self) -> GridProblem {
        GridProblem::new(self.width, self.height, DEMO_BLOCKED)
    }
}

/// Draw the grid row by row: `S` start, `G` goal, `*` path, `#` blocked,
/// `.` open. Cells are separated by single spaces.
pub fn render(grid: &GridProblem, path: &[Point], start: Point, goal: Point) -> String {
    let mut out = String::new();
    for y in 0..grid.height() {
        if y > 0 {
            out.push('\n');
        }
        for x in 0..grid.width() {
            if x > 0 {
                out.push(' ');
            }
            let p = Point::new(x, y);
            let ch = if p == start {
                'S'
            } else if p == goal {
                'G'
            } else if path.contains(&p) {
                '*'
            } else if grid.is_blocked(p) {
                '#'
            } else {
                '.'
            };
            out.push(ch);
        }
    }
    out
}

/// `[(x, y), (x, y), ...]`
pub fn format_path(path: &[Point]) -> String {
    let mut out = String::from("[");
    for (i, p) in path.iter().enumerate() {
        if i > 0 {
            out.push_str(", ");
        }
        let _ = write!(out, "{p}");
    }
    out.push(']');
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use astra_problems::find_path;

    #[test]
    fn too_few_arguments_use_defaults() {
        assert_eq!(GridArgs::parse(Vec::<String>::new()), GridArgs::default());
        assert_eq!(GridArgs::parse(["7", "7", "0"]), GridArgs::default());
    }

    #[test]
    fn bad_argument_uses_defaults() {
        assert_eq!(
            GridArgs::parse(["7", "x", "0", "0", "6", "6"]),
            GridArgs::default()
        );
    }

    #[test]
    fn full_arguments() {
        let args = GridArgs::parse(["8", "6", "1", "2", "7", "5", "extra"]);
        assert_eq!(
            args,
            GridArgs {
                width: 8,
                height: 6,
                start: Point::new(1, 2),
                goal: Point::new(7, 5),
            }
        );
        assert_eq!(args.problem().width(), 8);
    }

    #[test]
    fn render_demo() {
        let args = GridArgs::default();
        let grid = args.problem();
        let out = find_path(&grid, args.start, args.goal);
        let text = render(&grid, &out.path, args.start, args.goal);
        let expected = "\
S # . . .
* # . # .
* * * * G";
        assert_eq!(text, expected);
    }

    #[test]
    fn render_without_path() {
        let grid = GridArgs::default().problem();
        let text = render(&grid, &[], DEMO_START, DEMO_GOAL);
        assert_eq!(text, "S # . . .\n. # . # .\n. . . . G");
    }

    #[test]
    fn path_list() {
        let path = [Point::new(0, 0), Point::new(0, 1)];
        assert_eq!(format_path(&path), "[(0, 0), (0, 1)]");
        assert_eq!(format_path(&[]), "[]");
    }
}
