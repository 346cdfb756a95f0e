use std::collections::{BinaryHeap, HashMap};
use std::hash::Hash;

// ---------------------------------------------------------------------------
// Search result
// ---------------------------------------------------------------------------

/// How a search ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Outcome {
    /// A goal state was reached.
    Found,
    /// Every reachable state was expanded without reaching a goal.
    Exhausted,
    /// The expansion cap stopped the search.
    LimitReached,
}

/// Result of one search run.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Search<S> {
    /// States from start to goal, both included. Empty when no path exists.
    pub path: Vec<S>,
    /// Accumulated transition cost of `path`.
    pub cost: i32,
    /// Number of states taken off the open list and expanded.
    pub expanded: usize,
    pub outcome: Outcome,
}

impl<S> Search<S> {
    /// A result without a path.
    pub(crate) fn empty(outcome: Outcome, expanded: usize) -> Self {
        Self {
            path: Vec::new(),
            cost: 0,
            expanded,
            outcome,
        }
    }

    /// Whether a goal state was reached.
    #[inline]
    pub fn is_found(&self) -> bool {
        self.outcome == Outcome::Found
    }
}

// ---------------------------------------------------------------------------
// Internal node for the priority-queue search
// ---------------------------------------------------------------------------

pub(crate) const NO_PARENT: usize = usize::MAX;

#[derive(Clone)]
pub(crate) struct Node<S> {
    pub(crate) state: S,
    pub(crate) g: i32,
    pub(crate) h: i32,
    pub(crate) parent: usize,
    pub(crate) closed: bool,
}

/// Reference into the node arena, ordered for use in `BinaryHeap`.
///
/// Lowest `f` pops first; equal `f` pops in insertion order (`seq`).
/// `g` is the cost the node had when pushed, used to spot stale entries.
#[derive(Clone, Copy, Eq, PartialEq)]
pub(crate) struct NodeRef {
    pub(crate) idx: usize,
    pub(crate) f: i32,
    pub(crate) g: i32,
    pub(crate) seq: u64,
}

impl Ord for NodeRef {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        // Reverse so BinaryHeap (max-heap) pops smallest f, then oldest seq.
        other.f.cmp(&self.f).then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for NodeRef {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

// ---------------------------------------------------------------------------
// SearchArena
// ---------------------------------------------------------------------------

/// Working storage of the best-first search.
///
/// Nodes live in an index-stable vector and refer to their predecessor by
/// index. A state-to-index map finds already discovered states; the open
/// list is a binary heap of [`NodeRef`]s. A single arena can serve many
/// searches in a row: each run clears it but keeps the allocations.
pub struct SearchArena<S> {
    pub(crate) nodes: Vec<Node<S>>,
    pub(crate) lookup: HashMap<S, usize>,
    pub(crate) open: BinaryHeap<NodeRef>,
    pub(crate) seq: u64,
    // scratch buffer for successor queries
    pub(crate) nbuf: Vec<(S, i32)>,
}

impl<S: Copy + Eq + Hash> Default for SearchArena<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: Copy + Eq + Hash> SearchArena<S> {
    /// Create an empty arena.
    pub fn new() -> Self {
        Self {
            nodes: Vec::new(),
            lookup: HashMap::new(),
            open: BinaryHeap::new(),
            seq: 0,
            nbuf: Vec::with_capacity(8),
        }
    }

    /// Create an arena with room for `states` nodes before reallocating.
    pub fn with_capacity(states: usize) -> Self {
        Self {
            nodes: Vec::with_capacity(states),
            lookup: HashMap::with_capacity(states),
            open: BinaryHeap::with_capacity(states),
            seq: 0,
            nbuf: Vec::with_capacity(8),
        }
    }

    /// Number of states discovered by the last search.
    #[inline]
    pub fn discovered(&self) -> usize {
        self.nodes.len()
    }

    /// Drop all nodes, keeping capacity.
    pub(crate) fn reset(&mut self) {
        self.nodes.clear();
        self.lookup.clear();
        self.open.clear();
        self.seq = 0;
    }

    /// Append a newly discovered state and return its index.
    pub(crate) fn add_node(&mut self, state: S, g: i32, h: i32, parent: usize) -> usize {
        let idx = self.nodes.len();
        self.nodes.push(Node {
            state,
            g,
            h,
            parent,
            closed: false,
        });
        self.lookup.insert(state, idx);
        idx
    }

    /// Queue node `idx` with its current cost.
    pub(crate) fn push_open(&mut self, idx: usize) {
        let n = &self.nodes[idx];
        let entry = NodeRef {
            idx,
            f: n.g + n.h,
            g: n.g,
            seq: self.seq,
        };
        self.seq += 1;
        self.open.push(entry);
    }

    /// Walk predecessor links from `idx` back to the start.
    pub(crate) fn path_to(&self, mut idx: usize) -> Vec<S> {
        let mut path = Vec::new();
        while idx != NO_PARENT {
            let n = &self.nodes[idx];
            path.push(n.state);
            idx = n.parent;
        }
        path.reverse();
        path
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn heap_pops_lowest_f_then_fifo() {
        let mut heap = BinaryHeap::new();
        for (seq, (idx, f)) in [(0, 5), (1, 3), (2, 5), (3, 3), (4, 4)].into_iter().enumerate() {
            heap.push(NodeRef {
                idx,
                f,
                g: 0,
                seq: seq as u64,
            });
        }
        let order: Vec<usize> = std::iter::from_fn(|| heap.pop().map(|r| r.idx)).collect();
        assert_eq!(order, vec![1, 3, 4, 0, 2]);
    }

    #[test]
    fn path_follows_parents() {
        let mut arena: SearchArena<char> = SearchArena::new();
        let a = arena.add_node('a', 0, 0, NO_PARENT);
        let b = arena.add_node('b', 1, 0, a);
        let c = arena.add_node('c', 2, 0, b);
        assert_eq!(arena.path_to(c), vec!['a', 'b', 'c']);
        assert_eq!(arena.path_to(a), vec!['a']);
        assert_eq!(arena.lookup.get(&'b'), Some(&b));
    }

    #[test]
    fn reset_keeps_capacity() {
        let mut arena: SearchArena<u32> = SearchArena::with_capacity(64);
        for i in 0..10 {
            let idx = arena.add_node(i, 0, 0, NO_PARENT);
            arena.push_open(idx);
        }
        let cap = arena.nodes.capacity();
        arena.reset();
        assert_eq!(arena.discovered(), 0);
        assert!(arena.open.is_empty());
        assert!(arena.lookup.is_empty());
        assert_eq!(arena.seq, 0);
        assert_eq!(arena.nodes.capacity(), cap);
    }
}
