use std::hash::Hash;

/// Path cost and heuristic unit. Every step costs exactly 1.
pub type Cost = u32;

/// A discrete state space searchable by A*.
pub trait SearchProblem {
    /// Position in the state space. Never mutated once created.
    type State: Clone + Eq + Hash;
    /// Label of the move leading from one state to the next. Only used for
    /// display; the search never inspects it.
    type Action: Clone;

    /// Append the states reachable from `state` in one unit-cost move into
    /// `buf`, each with the move taken. The caller clears `buf` before
    /// calling.
    fn successors(&self, state: &Self::State, buf: &mut Vec<(Self::State, Self::Action)>);

    /// Lower bound on the number of moves from `from` to `goal`.
    /// Must never overestimate, and must be 0 when `from` is the goal.
    fn estimate(&self, from: &Self::State, goal: &Self::State) -> Cost;

    /// Whether `state` satisfies the goal test.
    fn is_goal(&self, state: &Self::State, goal: &Self::State) -> bool {
        state == goal
    }
}
