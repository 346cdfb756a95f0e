use std::hash::Hash;

/// Minimal search interface: successor enumeration.
pub trait Pather {
    /// A node of the searched graph: a grid cell, or a cell plus a velocity.
    type State: Copy + Eq + Hash;

    /// Append the successors of `s` with their transition costs into `buf`.
    /// The caller clears `buf` before calling. Costs must be > 0.
    fn neighbors(&self, s: Self::State, buf: &mut Vec<(Self::State, i32)>);
}

/// Full A* pather: a heuristic plus a goal predicate.
pub trait AstarPather: Pather {
    /// Estimate of the remaining cost from `s` to the goal. Never negative.
    /// The search is optimal only if this never overestimates.
    fn estimate(&self, s: Self::State) -> i32;

    /// Whether `s` counts as having arrived.
    fn is_goal(&self, s: Self::State) -> bool;
}
