//! Search problems for the astra A* engine.
//!
//! - [`GridProblem`]: 4-directional movement on a grid with blocked cells,
//!   optionally parsed from ASCII art with [`GridMap`]
//! - [`PuzzleProblem`]: the 3×3 sliding-tile puzzle, solved through
//!   [`EightPuzzle`]; [`scramble`] generates solvable boards
//!
//! Grid searches let cheaper routes re-open cells ([`Revisit::Relax`]);
//! puzzle searches treat expanded boards as final ([`Revisit::Closed`]).
//!
//! [`Revisit::Relax`]: astra_search::Revisit::Relax
//! [`Revisit::Closed`]: astra_search::Revisit::Closed

pub mod grid;
pub mod map;
pub mod puzzle;
pub mod scramble;

pub use grid::{GridProblem, find_path};
pub use map::{GridMap, MapError};
pub use puzzle::{Board, EightPuzzle, PuzzleError, PuzzleProblem, Slide, Solution};
pub use scramble::{scramble, scramble_from};
