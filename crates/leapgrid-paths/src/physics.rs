//! Pathfinding under simplified platformer physics.
//!
//! The search space is (cell, vertical velocity level). Every edge is one
//! simulated tick: the agent steps at most one column sideways while gravity,
//! and optionally a jump impulse, moves it vertically. Horizontal momentum is
//! not modelled.
//!
//! The heuristic only counts horizontal distance. It never overestimates,
//! but vertical reachability does not shrink with distance (a ledge right
//! above the agent may need a long run-up), so the search can expand many
//! states before finding such paths.

use leapgrid_core::Point;

use crate::arena::{Outcome, Search, SearchArena};
use crate::config::PhysicsConfig;
use crate::error::PathError;
use crate::obstacles::ObstacleSet;
use crate::params::PhysicsParams;
use crate::traits::{AstarPather, Pather};

/// Cost of one simulated tick.
pub const TICK_COST: i32 = 10;

/// A node of the physics search: where the agent is and how fast it moves
/// vertically.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PhysicsState {
    pub pos: Point,
    /// Signed velocity level, see [`PhysicsParams::level_velocity`].
    pub vel: i32,
}

impl PhysicsState {
    /// An agent at rest at `pos`.
    #[inline]
    pub const fn at_rest(pos: Point) -> Self {
        Self { pos, vel: 0 }
    }
}

/// What the agent does during one tick. The payload is the horizontal step,
/// -1, 0 or 1.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Action {
    Move(i32),
    Jump(i32),
}

impl Action {
    /// Every action, in the order successors are generated.
    pub const ALL: [Action; 6] = [
        Action::Move(-1),
        Action::Move(0),
        Action::Move(1),
        Action::Jump(-1),
        Action::Jump(0),
        Action::Jump(1),
    ];

    #[inline]
    pub fn dx(self) -> i32 {
        match self {
            Self::Move(dx) | Self::Jump(dx) => dx,
        }
    }

    #[inline]
    pub fn is_jump(self) -> bool {
        matches!(self, Self::Jump(_))
    }
}

// ---------------------------------------------------------------------------
// PhysicsModel
// ---------------------------------------------------------------------------

/// One-tick transition function over an obstacle set.
pub struct PhysicsModel<'a> {
    obstacles: &'a ObstacleSet,
    params: PhysicsParams,
    dt: f32,
    body_height: i32,
    jump_penalty: i32,
}

impl<'a> PhysicsModel<'a> {
    /// Validate `params` and `cfg` and build the model.
    pub fn new(
        obstacles: &'a ObstacleSet,
        params: PhysicsParams,
        cfg: &PhysicsConfig,
    ) -> Result<Self, PathError> {
        params.validate()?;
        cfg.validate()?;
        Ok(Self {
            obstacles,
            params,
            dt: params.time_step_ms / cfg.reference_tick_ms,
            body_height: cfg.body_height,
            jump_penalty: cfg.jump_penalty,
        })
    }

    /// Whether the agent's body fits with its feet at `p`: every cell from
    /// `p` up to the top of the body is inside the grid and free.
    pub fn body_fits(&self, p: Point) -> bool {
        (0..self.body_height).all(|i| !self.obstacles.is_blocked(p.shift(0, -i)))
    }

    /// At rest with something solid, or the bottom edge, right below.
    pub fn is_grounded(&self, s: PhysicsState) -> bool {
        s.vel == 0 && self.obstacles.is_blocked(s.pos.shift(0, 1))
    }

    /// Transition cost of `action`.
    #[inline]
    pub fn cost(&self, action: Action) -> i32 {
        if action.is_jump() {
            TICK_COST + self.jump_penalty
        } else {
            TICK_COST
        }
    }

    /// Simulate one tick of `action` from `s`.
    ///
    /// Returns `None` when the action is not available (a jump while
    /// airborne), when the body would end up outside the grid or inside an
    /// obstacle, or when nothing changes.
    pub fn step(&self, s: PhysicsState, action: Action) -> Option<PhysicsState> {
        if action.is_jump() && !self.is_grounded(s) {
            return None;
        }

        let v0 = match action {
            Action::Jump(_) => self.params.jump_impulse_y,
            Action::Move(_) => self.params.level_velocity(s.vel),
        };
        let mut vel = self.params.accelerate(v0, self.params.gravity_y * self.dt);
        let mut dy = (self.params.level_velocity(vel) * self.dt).round() as i32;
        if dy == 0 {
            dy = vel.signum();
        }

        // Vertical travel happens in the column the agent leaves from; the
        // first blocked cell stops it (landing or head bump).
        let dir = dy.signum();
        let mut y = s.pos.y;
        for _ in 0..dy.abs() {
            if !self.body_fits(Point::new(s.pos.x, y + dir)) {
                vel = 0;
                break;
            }
            y += dir;
        }

        let pos = Point::new(s.pos.x + action.dx(), y);
        if !self.body_fits(pos) {
            log::trace!("{action:?} from {} blocked at {pos}", s.pos);
            return None;
        }

        let next = PhysicsState { pos, vel };
        if next == s {
            return None;
        }
        Some(next)
    }

    /// The cheapest action that takes `from` to `to` in one tick, if any.
    pub fn infer_action(&self, from: PhysicsState, to: PhysicsState) -> Option<Action> {
        Action::ALL
            .into_iter()
            .find(|&a| self.step(from, a) == Some(to))
    }
}

// ---------------------------------------------------------------------------
// Search
// ---------------------------------------------------------------------------

/// Physics transitions towards a goal cell.
pub struct PhysicsPather<'a> {
    model: PhysicsModel<'a>,
    goal: Point,
    tolerance: i32,
}

impl<'a> PhysicsPather<'a> {
    pub fn new(model: PhysicsModel<'a>, goal: Point, tolerance: i32) -> Self {
        Self {
            model,
            goal,
            tolerance,
        }
    }
}

impl Pather for PhysicsPather<'_> {
    type State = PhysicsState;

    fn neighbors(&self, s: PhysicsState, buf: &mut Vec<(PhysicsState, i32)>) {
        for action in Action::ALL {
            if let Some(next) = self.model.step(s, action) {
                buf.push((next, self.model.cost(action)));
            }
        }
    }
}

impl AstarPather for PhysicsPather<'_> {
    fn estimate(&self, s: PhysicsState) -> i32 {
        let dx = ((s.pos.x - self.goal.x).abs() - self.tolerance).max(0);
        dx * TICK_COST
    }

    fn is_goal(&self, s: PhysicsState) -> bool {
        (s.pos.x - self.goal.x).abs() <= self.tolerance
            && (s.pos.y - self.goal.y).abs() <= self.tolerance
    }
}

/// Find a sequence of one-tick transitions taking an agent at rest on
/// `start` to `goal`.
///
/// Parameters and configuration are validated first
/// ([`PathError::InvalidParams`]), then the endpoints
/// ([`PathError::InvalidInput`] if outside the grid). If the agent does not
/// fit at `start`, or at `goal` when `goal_tolerance` is zero, the result is
/// an empty path.
pub fn find_physics_path(
    start: Point,
    goal: Point,
    obstacles: &ObstacleSet,
    params: &PhysicsParams,
    cfg: &PhysicsConfig,
) -> Result<Search<PhysicsState>, PathError> {
    let model = PhysicsModel::new(obstacles, *params, cfg)?;

    let rng = obstacles.range();
    if !rng.contains(start) {
        return Err(PathError::input(format!("start {start} outside grid {rng}")));
    }
    if !rng.contains(goal) {
        return Err(PathError::input(format!("goal {goal} outside grid {rng}")));
    }

    if !model.body_fits(start) || (cfg.goal_tolerance == 0 && !model.body_fits(goal)) {
        log::debug!("physics search {start} -> {goal}: endpoint is blocked");
        return Ok(Search::empty(Outcome::Exhausted, 0));
    }

    let pather = PhysicsPather::new(model, goal, cfg.goal_tolerance);
    let mut arena = SearchArena::new();
    let res = arena.astar(&pather, PhysicsState::at_rest(start), &cfg.search);
    log::debug!(
        "physics search {start} -> {goal}: {:?}, {} ticks, {} expanded",
        res.outcome,
        res.path.len().saturating_sub(1),
        res.expanded
    );
    Ok(res)
}
