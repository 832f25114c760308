use std::collections::{HashMap, VecDeque};

use crate::traits::SearchProblem;

/// Shortest path from `start` to `goal` by plain breadth-first search.
///
/// Ignores the problem's estimate entirely, which makes it a reference for
/// checking A* results and heuristics on small spaces. Returns `None` when
/// the goal cannot be reached.
pub fn bfs_path<P>(problem: &P, start: P::State, goal: &P::State) -> Option<Vec<P::State>>
where
    P: SearchProblem + ?Sized,
{
    // Arena of (state, parent index); `index` maps states back into it.
    let mut arena: Vec<(P::State, usize)> = Vec::new();
    let mut index: HashMap<P::State, usize> = HashMap::new();
    let mut queue: VecDeque<usize> = VecDeque::new();
    let mut buf = Vec::new();

    index.insert(start.clone(), 0);
    arena.push((start, usize::MAX));
    queue.push_back(0);

    let found = loop {
        let Some(ci) = queue.pop_front() else {
            return None;
        };
        if problem.is_goal(&arena[ci].0, goal) {
            break ci;
        }

        buf.clear();
        problem.successors(&arena[ci].0, &mut buf);

        for (next, _) in buf.drain(..) {
            if index.contains_key(&next) {
                continue;
            }
            let ni = arena.len();
            index.insert(next.clone(), ni);
            arena.push((next, ci));
            queue.push_back(ni);
        }
    };

    let mut path = Vec::new();
    let mut ci = found;
    while ci != usize::MAX {
        path.push(arena[ci].0.clone());
        ci = arena[ci].1;
    }
    path.reverse();
    Some(path)
}

/// Length in moves of the shortest path, or `None` if unreachable.
pub fn bfs_distance<P>(problem: &P, start: P::State, goal: &P::State) -> Option<usize>
where
    P: SearchProblem + ?Sized,
{
    bfs_path(problem, start, goal).map(|p| p.len() - 1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::traits::Cost;

    /// A ring of `n` states where each steps to its two neighbours.
    struct Ring(u32);

    impl SearchProblem for Ring {
        type State = u32;
        type Action = ();

        fn successors(&self, s: &u32, buf: &mut Vec<(u32, ())>) {
            buf.push(((s + 1) % self.0, ()));
            buf.push(((s + self.0 - 1) % self.0, ()));
        }

        fn estimate(&self, _: &u32, _: &u32) -> Cost {
            0
        }
    }

    #[test]
    fn shortest_way_round() {
        let ring = Ring(10);
        assert_eq!(bfs_path(&ring, 0, &3), Some(vec![0, 1, 2, 3]));
        assert_eq!(bfs_path(&ring, 0, &8), Some(vec![0, 9, 8]));
        assert_eq!(bfs_distance(&ring, 4, &4), Some(0));
    }

    #[test]
    fn unreachable_goal() {
        assert_eq!(bfs_path(&Ring(5), 0, &7), None);
        assert_eq!(bfs_distance(&Ring(5), 0, &7), None);
    }
}
