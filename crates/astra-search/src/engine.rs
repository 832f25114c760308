use std::collections::{BinaryHeap, HashMap};
use std::hash::Hash;

use crate::config::SearchConfig;
use crate::traits::Cost;

// ---------------------------------------------------------------------------
// Internal node arena for A* searches
// ---------------------------------------------------------------------------

/// A discovered state with its best-known cost and back-link.
#[derive(Clone, Debug)]
pub(crate) struct Node<S, A> {
    pub(crate) state: S,
    pub(crate) g: Cost,
    /// Arena index of the predecessor; `None` for the start node.
    pub(crate) parent: Option<usize>,
    /// Move taken from the predecessor.
    pub(crate) action: Option<A>,
    pub(crate) closed: bool,
}

/// Frontier entry, ordered by `f` then by insertion sequence, for use in
/// `BinaryHeap`.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct Entry {
    pub(crate) f: Cost,
    pub(crate) seq: u64,
    pub(crate) g: Cost,
    pub(crate) node: usize,
}

impl Ord for Entry {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        // Reverse so BinaryHeap (max-heap) pops smallest f first, and among
        // equal f the earliest inserted.
        other
            .f
            .cmp(&self.f)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for Entry {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

// ---------------------------------------------------------------------------
// AstarSearch
// ---------------------------------------------------------------------------

/// Reusable A* driver for states of type `S` reached by moves of type `A`.
///
/// `AstarSearch` owns the frontier, the node arena and the state index, so
/// repeated searches only reallocate when a search outgrows every earlier
/// one. All tables are cleared at the start of each search.
pub struct AstarSearch<S, A> {
    pub(crate) config: SearchConfig,
    pub(crate) nodes: Vec<Node<S, A>>,
    pub(crate) index: HashMap<S, usize>,
    pub(crate) open: BinaryHeap<Entry>,
    pub(crate) seq: u64,
    // shared scratch buffer for successor queries
    pub(crate) sbuf: Vec<(S, A)>,
}

impl<S: Clone + Eq + Hash, A: Clone> Default for AstarSearch<S, A> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: Clone + Eq + Hash, A: Clone> AstarSearch<S, A> {
    /// Create a driver with the default configuration.
    pub fn new() -> Self {
        Self::with_config(SearchConfig::default())
    }

    /// Create a driver with the given configuration.
    pub fn with_config(config: SearchConfig) -> Self {
        Self {
            config,
            nodes: Vec::new(),
            index: HashMap::new(),
            open: BinaryHeap::new(),
            seq: 0,
            sbuf: Vec::with_capacity(4),
        }
    }

    /// The configuration in use.
    #[inline]
    pub fn config(&self) -> SearchConfig {
        self.config
    }

    /// Replace the configuration for subsequent searches.
    pub fn set_config(&mut self, config: SearchConfig) {
        self.config = config;
    }

    pub(crate) fn reset(&mut self) {
        self.nodes.clear();
        self.index.clear();
        self.open.clear();
        self.seq = 0;
    }

    /// Add a state seen for the first time and return its arena index.
    pub(crate) fn insert(&mut self, state: S, g: Cost, parent: Option<usize>, action: Option<A>) -> usize {
        let idx = self.nodes.len();
        self.index.insert(state.clone(), idx);
        self.nodes.push(Node {
            state,
            g,
            parent,
            action,
            closed: false,
        });
        idx
    }

    /// Push a frontier entry with a fresh sequence number.
    pub(crate) fn push(&mut self, node: usize, g: Cost, f: Cost) {
        self.open.push(Entry {
            f,
            seq: self.seq,
            g,
            node,
        });
        self.seq += 1;
    }

    /// Follow parent links from `last` back to the start and return the
    /// states and moves in start-to-goal order.
    pub(crate) fn reconstruct(&self, last: usize) -> (Vec<S>, Vec<A>) {
        let mut path = Vec::new();
        let mut actions = Vec::new();
        let mut cur = Some(last);
        while let Some(i) = cur {
            let node = &self.nodes[i];
            path.push(node.state.clone());
            if let Some(a) = &node.action {
                actions.push(a.clone());
            }
            cur = node.parent;
        }
        path.reverse();
        actions.reverse();
        (path, actions)
    }
}
