use crate::traits::Cost;

/// How a search ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchStatus {
    /// The goal was popped from the frontier; the path is optimal.
    Found,
    /// The frontier ran dry without reaching the goal.
    Unreachable,
    /// The configured expansion limit stopped the search first.
    LimitReached,
}

/// Result of one search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchOutcome<S, A> {
    pub status: SearchStatus,
    /// States from start to goal inclusive. Empty unless found.
    pub path: Vec<S>,
    /// `actions[i]` leads from `path[i]` to `path[i + 1]`.
    pub actions: Vec<A>,
    /// Number of states whose successors were generated.
    pub nodes_expanded: usize,
}

impl<S, A> SearchOutcome<S, A> {
    pub(crate) fn found(path: Vec<S>, actions: Vec<A>, nodes_expanded: usize) -> Self {
        Self {
            status: SearchStatus::Found,
            path,
            actions,
            nodes_expanded,
        }
    }

    pub(crate) fn failed(status: SearchStatus, nodes_expanded: usize) -> Self {
        Self {
            status,
            path: Vec::new(),
            actions: Vec::new(),
            nodes_expanded,
        }
    }

    /// Whether a path was found.
    #[inline]
    pub fn is_found(&self) -> bool {
        self.status == SearchStatus::Found
    }

    /// Number of moves on the path, or `None` if no path was found.
    pub fn cost(&self) -> Option<Cost> {
        self.is_found().then(|| (self.path.len() - 1) as Cost)
    }
}
