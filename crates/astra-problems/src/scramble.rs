//! Random puzzle generation.
//!
//! Boards are produced by a random walk of slides starting from the goal,
//! so every scrambled board is solvable and at most `steps` moves away.

use rand::Rng;

use crate::puzzle::{Board, Slide};

/// Walk `steps` random slides away from [`Board::GOAL`].
///
/// A slide never immediately undoes the previous one, which keeps short
/// walks from collapsing back onto the goal. The optimal solution may still
/// be shorter than `steps`.
pub fn scramble<R: Rng>(rng: &mut R, steps: usize) -> Board {
    scramble_from(rng, Board::GOAL, steps)
}

/// Like [`scramble`], starting the walk from `board`.
pub fn scramble_from<R: Rng>(rng: &mut R, board: Board, steps: usize) -> Board {
    let mut board = board;
    let mut last: Option<Slide> = None;
    for _ in 0..steps {
        let options: Vec<(Slide, Board)> = Slide::ALL
            .into_iter()
            .filter(|&s| last != Some(s.opposite()))
            .filter_map(|s| board.apply(s).map(|b| (s, b)))
            .collect();
        // The blank always has at least two slides, so one survives the
        // no-backtrack filter.
        let (slide, next) = options[rng.random_range(0..options.len())];
        board = next;
        last = Some(slide);
    }
    board
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn zero_steps_is_goal() {
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(scramble(&mut rng, 0), Board::GOAL);
    }

    #[test]
    fn scrambles_stay_solvable() {
        let mut rng = StdRng::seed_from_u64(3);
        for steps in 1..40 {
            let b = scramble(&mut rng, steps);
            assert!(b.is_solvable_for(&Board::GOAL));
            // Each slide changes the blank's row or column parity.
            assert_eq!(b.blank() % 2, (8 + steps) % 2);
        }
    }

    #[test]
    fn one_step_is_adjacent_to_goal() {
        let mut rng = StdRng::seed_from_u64(8);
        let b = scramble(&mut rng, 1);
        assert!(Slide::ALL.iter().any(|&s| b.apply(s) == Some(Board::GOAL)));
    }

    #[test]
    fn same_seed_same_board() {
        let a = scramble(&mut StdRng::seed_from_u64(42), 30);
        let b = scramble(&mut StdRng::seed_from_u64(42), 30);
        assert_eq!(a, b);
    }
}
