//! Generic A* search over discrete state spaces.
//!
//! A state space is described by implementing [`SearchProblem`]: successor
//! generation with unit step costs, an admissible estimate of the remaining
//! cost, and a goal test. [`AstarSearch`] then finds one optimal path between
//! a start and a goal state.
//!
//! - **A\*** shortest-path search ([`AstarSearch::search`], or the
//!   closure-driven [`search`])
//! - **BFS** reference search ignoring the estimate ([`bfs_path`])
//!
//! Frontier ties are broken by insertion order, so repeated searches over the
//! same input return the same path. Two policies for revisiting states are
//! available through [`SearchConfig`]: see [`Revisit`].

mod astar;
mod bfs;
mod config;
mod engine;
mod outcome;
mod traits;

pub use astar::{FnProblem, search, search_with};
pub use bfs::{bfs_distance, bfs_path};
pub use config::{Revisit, SearchConfig};
pub use engine::AstarSearch;
pub use outcome::{SearchOutcome, SearchStatus};
pub use traits::{Cost, SearchProblem};
