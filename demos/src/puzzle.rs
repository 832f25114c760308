//! Puzzle demo: input handling and the move-by-move report.

use std::fmt::Write;

use astra_problems::{Board, EightPuzzle, PuzzleError, Solution};
use astra_search::SearchStatus;

/// Boards solved when no input is given.
pub const DEMO_BOARDS: [(&str, [u8; 9]); 4] = [
    ("Simple puzzle (1 move from goal)", [1, 2, 3, 4, 5, 6, 7, 0, 8]),
    ("Medium difficulty puzzle", [1, 2, 3, 4, 0, 5, 7, 8, 6]),
    ("More complex puzzle", [8, 7, 6, 5, 4, 3, 2, 1, 0]),
    ("Already at goal state", [1, 2, 3, 4, 5, 6, 7, 8, 0]),
];

const RULE: &str = "==================================================";

/// Build a board from the command line (program name excluded). Tiles may be
/// separate arguments or one comma-separated argument. No arguments yields
/// `None`.
pub fn parse_args<I, S>(args: I) -> Result<Option<Board>, PuzzleError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let joined = args
        .into_iter()
        .map(|a| a.as_ref().to_string())
        .collect::<Vec<_>>()
        .join(" ");
    if joined.trim().is_empty() {
        return Ok(None);
    }
    joined.parse().map(Some)
}

/// The full text printed for one solved (or unsolved) puzzle.
pub fn report(puzzle: &EightPuzzle, solution: &Solution) -> String {
    let mut out = String::new();
    // Writing into a String cannot fail.
    let _ = write_report(&mut out, puzzle, solution);
    out
}

fn write_report(out: &mut String, puzzle: &EightPuzzle, solution: &Solution) -> std::fmt::Result {
    writeln!(out, "{RULE}")?;
    writeln!(out, "8-PUZZLE SOLVER (A* with Manhattan Distance)")?;
    writeln!(out, "{RULE}")?;
    writeln!(out)?;
    writeln!(out, "Initial State:")?;
    writeln!(out, "{}", puzzle.initial())?;
    writeln!(out)?;

    match solution.status() {
        SearchStatus::Found => {
            writeln!(out, "Solution found!")?;
            writeln!(out, "Number of moves: {}", solution.outcome.actions.len())?;
            writeln!(out, "Nodes expanded: {}", solution.nodes_expanded())?;
            writeln!(out)?;
            writeln!(out, "Solution path:")?;
            for (i, (slide, board)) in solution.trace().enumerate() {
                writeln!(out)?;
                match slide {
                    Some(s) => writeln!(out, "Move {i}: {}", s.to_string().to_uppercase())?,
                    None => writeln!(out, "Initial:")?,
                }
                writeln!(out, "{board}")?;
            }
        }
        SearchStatus::Unreachable => {
            writeln!(out, "No solution found!")?;
            writeln!(out, "Nodes expanded: {}", solution.nodes_expanded())?;
        }
        SearchStatus::LimitReached => {
            writeln!(
                out,
                "Search stopped after {} expansions",
                solution.nodes_expanded()
            )?;
        }
    }
    writeln!(out)?;
    write!(out, "{RULE}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use astra_search::SearchConfig;

    #[test]
    fn no_arguments() {
        assert_eq!(parse_args(Vec::<String>::new()), Ok(None));
    }

    #[test]
    fn separate_and_joined_arguments() {
        let expected = Board::new(&[1, 2, 3, 4, 5, 6, 7, 0, 8]).unwrap();
        let separate = parse_args(["1", "2", "3", "4", "5", "6", "7", "0", "8"]).unwrap();
        let joined = parse_args(["1,2,3,4,5,6,7,0,8"]).unwrap();
        assert_eq!(separate, Some(expected));
        assert_eq!(joined, Some(expected));
    }

    #[test]
    fn invalid_arguments() {
        assert_eq!(parse_args(["1", "2"]), Err(PuzzleError::WrongLength(2)));
        assert!(matches!(
            parse_args(["1", "1", "3", "4", "5", "6", "7", "0", "8"]),
            Err(PuzzleError::NotPermutation(_))
        ));
    }

    #[test]
    fn demo_boards_are_valid() {
        for (_, tiles) in DEMO_BOARDS {
            assert!(EightPuzzle::new(&tiles).is_ok());
        }
    }

    #[test]
    fn report_lists_every_move() {
        let p = EightPuzzle::new(&[1, 2, 3, 4, 0, 5, 7, 8, 6]).unwrap();
        let text = report(&p, &p.solve());
        assert!(text.contains("Number of moves: 2"));
        assert!(text.contains("Initial:\n1 2 3\n4 _ 5\n7 8 6"));
        assert!(text.contains("Move 1: RIGHT\n1 2 3\n4 5 _\n7 8 6"));
        assert!(text.contains("Move 2: DOWN\n1 2 3\n4 5 6\n7 8 _"));
        assert!(text.starts_with(RULE));
        assert!(text.ends_with(RULE));
    }

    #[test]
    fn report_without_solution() {
        let p = EightPuzzle::new(&[2, 1, 3, 4, 5, 6, 7, 8, 0])
            .unwrap()
            .with_config(SearchConfig::default().with_max_expansions(5));
        let text = report(&p, &p.solve());
        assert!(text.contains("Search stopped after 5 expansions"));
        assert!(!text.contains("Solution path"));
    }
}
