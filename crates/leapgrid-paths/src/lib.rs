//! Pathfinding over occupancy grids and simplified platformer physics.
//!
//! Two searches share one best-first engine ([`SearchArena::astar`]):
//!
//! - **Grid search** ([`find_grid_path`]): shortest 4- or 8-way paths
//!   around blocked cells.
//! - **Physics search** ([`find_physics_path`]): paths an agent can actually
//!   follow under gravity, a jump impulse and a speed cap, searched over
//!   (cell, vertical velocity level) states one simulated tick at a time.
//!
//! Callers that speak flat integer arrays use [`find_path_on_grid`] and
//! [`find_path_in_space`]; the [`codec`] module documents the layouts.
//!
//! Every call owns its working memory and touches no global state, so
//! concurrent calls from different threads need no locking.
//!
//! # Trait hierarchy
//!
//! | Trait | Provides |
//! |---|---|
//! | [`Pather`] | successors with transition costs |
//! | [`AstarPather`] : [`Pather`] | heuristic and goal test |

mod api;
mod arena;
mod astar;
pub mod codec;
mod config;
mod distance;
mod error;
mod grid;
mod obstacles;
mod params;
mod physics;
mod traits;

pub use api::{
    find_path_in_space, find_path_in_space_with, find_path_on_grid, find_path_on_grid_with,
};
pub use arena::{Outcome, Search, SearchArena};
pub use config::{PhysicsConfig, SearchConfig};
pub use distance::{manhattan, octile};
pub use error::PathError;
pub use grid::{DIAGONAL_COST, GridPather, STRAIGHT_COST, find_grid_path};
pub use leapgrid_core::{Point, Range};
pub use obstacles::{MAX_GRID_CELLS, ObstacleSet};
pub use params::PhysicsParams;
pub use physics::{
    Action, PhysicsModel, PhysicsPather, PhysicsState, TICK_COST, find_physics_path,
};
pub use traits::{AstarPather, Pather};
