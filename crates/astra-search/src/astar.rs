use std::hash::Hash;
use std::marker::PhantomData;

use log::{debug, trace};

use crate::config::{Revisit, SearchConfig};
use crate::engine::AstarSearch;
use crate::outcome::{SearchOutcome, SearchStatus};
use crate::traits::{Cost, SearchProblem};

enum Stop {
    Goal(usize),
    Exhausted,
    Limit,
}

impl<S: Clone + Eq + Hash, A: Clone> AstarSearch<S, A> {
    /// Compute a shortest path from `start` to a state satisfying
    /// `problem.is_goal(_, &goal)` using A*.
    ///
    /// The returned path includes both endpoints. It is optimal as long as
    /// the problem's estimate is admissible and consistent. Unreachable
    /// goals are reported through [`SearchOutcome::status`], not as errors.
    pub fn search<P>(&mut self, problem: &P, start: S, goal: &S) -> SearchOutcome<S, A>
    where
        P: SearchProblem<State = S, Action = A> + ?Sized,
    {
        if problem.is_goal(&start, goal) {
            debug!("astar: start already satisfies the goal");
            return SearchOutcome::found(vec![start], Vec::new(), 0);
        }

        self.reset();
        let h = problem.estimate(&start, goal);
        let start_idx = self.insert(start, 0, None, None);
        self.push(start_idx, 0, h);
        debug!("astar: searching, initial estimate {h}, policy {:?}", self.config.revisit);

        let mut sbuf = std::mem::take(&mut self.sbuf);
        let mut expanded = 0usize;

        let stop = loop {
            let Some(entry) = self.open.pop() else {
                break Stop::Exhausted;
            };
            let ci = entry.node;

            // Skip stale entries.
            let stale = match self.config.revisit {
                Revisit::Relax => entry.g > self.nodes[ci].g,
                Revisit::Closed => self.nodes[ci].closed,
            };
            if stale {
                continue;
            }

            if problem.is_goal(&self.nodes[ci].state, goal) {
                break Stop::Goal(ci);
            }

            if self.config.limit_hit(expanded) {
                break Stop::Limit;
            }

            let g = self.nodes[ci].g;
            self.nodes[ci].closed = true;
            expanded += 1;
            trace!("astar: expanding node {ci} (g = {g}, f = {})", entry.f);

            sbuf.clear();
            problem.successors(&self.nodes[ci].state, &mut sbuf);

            let tentative_g = g + 1;
            for (next, action) in sbuf.drain(..) {
                let ni = match self.index.get(&next) {
                    Some(&ni) => {
                        let n = &mut self.nodes[ni];
                        if n.closed && self.config.revisit == Revisit::Closed {
                            continue;
                        }
                        if tentative_g >= n.g {
                            continue;
                        }
                        n.g = tentative_g;
                        n.parent = Some(ci);
                        n.action = Some(action);
                        ni
                    }
                    None => self.insert(next, tentative_g, Some(ci), Some(action)),
                };
                let f = tentative_g + problem.estimate(&self.nodes[ni].state, goal);
                self.push(ni, tentative_g, f);
            }
        };

        self.sbuf = sbuf;

        match stop {
            Stop::Goal(gi) => {
                let (path, actions) = self.reconstruct(gi);
                debug!(
                    "astar: found path of {} moves after {expanded} expansions",
                    actions.len()
                );
                SearchOutcome::found(path, actions, expanded)
            }
            Stop::Exhausted => {
                debug!("astar: frontier exhausted after {expanded} expansions");
                SearchOutcome::failed(SearchStatus::Unreachable, expanded)
            }
            Stop::Limit => {
                debug!("astar: expansion limit reached after {expanded} expansions");
                SearchOutcome::failed(SearchStatus::LimitReached, expanded)
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Closure-based form
// ---------------------------------------------------------------------------

/// Adapter turning three closures into a [`SearchProblem`].
pub struct FnProblem<S, FN, FH, FG> {
    successors: FN,
    heuristic: FH,
    is_goal: FG,
    _state: PhantomData<fn(&S)>,
}

impl<S, I, FN, FH, FG> SearchProblem for FnProblem<S, FN, FH, FG>
where
    S: Clone + Eq + Hash,
    I: IntoIterator<Item = S>,
    FN: Fn(&S) -> I,
    FH: Fn(&S, &S) -> Cost,
    FG: Fn(&S) -> bool,
{
    type State = S;
    type Action = ();

    fn successors(&self, state: &S, buf: &mut Vec<(S, ())>) {
        buf.extend((self.successors)(state).into_iter().map(|s| (s, ())));
    }

    fn estimate(&self, from: &S, goal: &S) -> Cost {
        (self.heuristic)(from, goal)
    }

    fn is_goal(&self, state: &S, _goal: &S) -> bool {
        (self.is_goal)(state)
    }
}

/// One-shot A* search driven by closures.
///
/// `successors` lists the states one unit step away, `heuristic` estimates
/// the remaining cost from a state to `goal`, and `is_goal` is the goal
/// test. Uses the default [`SearchConfig`].
pub fn search<S, I, FN, FH, FG>(
    start: S,
    goal: S,
    successors: FN,
    heuristic: FH,
    is_goal: FG,
) -> SearchOutcome<S, ()>
where
    S: Clone + Eq + Hash,
    I: IntoIterator<Item = S>,
    FN: Fn(&S) -> I,
    FH: Fn(&S, &S) -> Cost,
    FG: Fn(&S) -> bool,
{
    search_with(SearchConfig::default(), start, goal, successors, heuristic, is_goal)
}

/// [`search`] with an explicit configuration.
pub fn search_with<S, I, FN, FH, FG>(
    config: SearchConfig,
    start: S,
    goal: S,
    successors: FN,
    heuristic: FH,
    is_goal: FG,
) -> SearchOutcome<S, ()>
where
    S: Clone + Eq + Hash,
    I: IntoIterator<Item = S>,
    FN: Fn(&S) -> I,
    FH: Fn(&S, &S) -> Cost,
    FG: Fn(&S) -> bool,
{
    let problem = FnProblem {
        successors,
        heuristic,
        is_goal,
        _state: PhantomData,
    };
    AstarSearch::with_config(config).search(&problem, start, &goal)
}
