//! **astra-core** — geometry primitives shared by the *astra* search crates.
//!
//! Grid positions are [`Point`]s, grid bounds are half-open [`Range`]s and
//! unit moves are [`Direction`]s.

pub mod distance;
pub mod geom;

pub use distance::manhattan;
pub use geom::{Direction, Point, Range, RangeIter};
