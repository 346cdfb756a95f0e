//! Shortest paths on a plain occupancy grid.

use leapgrid_core::Point;

use crate::arena::{Outcome, Search, SearchArena};
use crate::config::SearchConfig;
use crate::distance;
use crate::error::PathError;
use crate::obstacles::ObstacleSet;
use crate::traits::{AstarPather, Pather};

/// Cost of an orthogonal step.
pub const STRAIGHT_COST: i32 = 10;
/// Cost of a diagonal step, √2 in the same fixed-point scale.
pub const DIAGONAL_COST: i32 = 14;

/// Grid movement over an [`ObstacleSet`] towards a fixed goal.
///
/// Diagonal steps are only taken when both orthogonal cells they pass
/// between are free, so paths never cut obstacle corners.
pub struct GridPather<'a> {
    obstacles: &'a ObstacleSet,
    goal: Point,
    diagonal: bool,
}

impl<'a> GridPather<'a> {
    pub fn new(obstacles: &'a ObstacleSet, goal: Point, diagonal: bool) -> Self {
        Self {
            obstacles,
            goal,
            diagonal,
        }
    }
}

impl Pather for GridPather<'_> {
    type State = Point;

    fn neighbors(&self, p: Point, buf: &mut Vec<(Point, i32)>) {
        if !self.diagonal {
            for n in p.neighbors_4() {
                if !self.obstacles.is_blocked(n) {
                    buf.push((n, STRAIGHT_COST));
                }
            }
            return;
        }
        for n in p.neighbors_8() {
            if self.obstacles.is_blocked(n) {
                continue;
            }
            if n.x != p.x && n.y != p.y {
                if self.obstacles.is_blocked(Point::new(n.x, p.y))
                    || self.obstacles.is_blocked(Point::new(p.x, n.y))
                {
                    continue;
                }
                buf.push((n, DIAGONAL_COST));
            } else {
                buf.push((n, STRAIGHT_COST));
            }
        }
    }
}

impl AstarPather for GridPather<'_> {
    fn estimate(&self, p: Point) -> i32 {
        if self.diagonal {
            distance::octile(p, self.goal, STRAIGHT_COST, DIAGONAL_COST)
        } else {
            distance::manhattan(p, self.goal) * STRAIGHT_COST
        }
    }

    fn is_goal(&self, p: Point) -> bool {
        p == self.goal
    }
}

/// Find a shortest path from `start` to `goal` avoiding `obstacles`.
///
/// Fails with [`PathError::InvalidInput`] if either endpoint lies outside the
/// grid. A blocked start or goal is a well-formed query without a path.
pub fn find_grid_path(
    obstacles: &ObstacleSet,
    start: Point,
    goal: Point,
    cfg: &SearchConfig,
) -> Result<Search<Point>, PathError> {
    let rng = obstacles.range();
    if !rng.contains(start) {
        return Err(PathError::input(format!("start {start} outside grid {rng}")));
    }
    if !rng.contains(goal) {
        return Err(PathError::input(format!("goal {goal} outside grid {rng}")));
    }

    if obstacles.contains(start) || obstacles.contains(goal) {
        log::debug!("grid search {start} -> {goal}: endpoint is an obstacle");
        return Ok(Search::empty(Outcome::Exhausted, 0));
    }

    let pather = GridPather::new(obstacles, goal, cfg.diagonal);
    let mut arena = SearchArena::with_capacity(rng.len().min(1 << 16));
    let res = arena.astar(&pather, start, cfg);
    log::debug!(
        "grid search {start} -> {goal}: {:?}, {} steps, {} expanded",
        res.outcome,
        res.path.len(),
        res.expanded
    );
    Ok(res)
}
