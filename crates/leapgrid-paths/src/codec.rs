//! Conversions between flat `i32` arrays and typed records.
//!
//! Points travel as interleaved pairs `[x0, y0, x1, y1, ...]`. The grid
//! entry point packs everything into one array:
//!
//! ```text
//! [grid_size, start_x, start_y, goal_x, goal_y, ox0, oy0, ox1, oy1, ...]
//! ```
//!
//! a five-integer header followed by obstacle pairs.

use leapgrid_core::{Point, Range};

use crate::error::PathError;
use crate::obstacles::ObstacleSet;
use crate::params::PhysicsParams;
use crate::physics::PhysicsState;

/// Length of the header of a packed grid request.
pub const GRID_HEADER_LEN: usize = 5;

/// A decoded grid search request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridRequest {
    pub grid_size: i32,
    pub start: Point,
    pub goal: Point,
    pub obstacles: ObstacleSet,
}

/// Decode interleaved `(x, y)` pairs.
pub fn decode_points(flat: &[i32]) -> Result<Vec<Point>, PathError> {
    if flat.len() % 2 != 0 {
        return Err(PathError::input(format!(
            "point array must hold (x, y) pairs, got odd length {}",
            flat.len()
        )));
    }
    Ok(flat
        .chunks_exact(2)
        .map(|c| Point::new(c[0], c[1]))
        .collect())
}

/// Decode an obstacle pair array for a `grid_size × grid_size` grid.
///
/// Every obstacle must lie inside the grid.
pub fn decode_obstacles(flat: &[i32], grid_size: i32) -> Result<ObstacleSet, PathError> {
    if grid_size <= 0 {
        return Err(PathError::input(format!(
            "grid size must be positive, got {grid_size}"
        )));
    }
    let cells = decode_points(flat)?;
    ObstacleSet::from_points(Range::square(grid_size), &cells)
}

/// Decode the packed array of the grid entry point.
pub fn decode_grid_request(flat: &[i32]) -> Result<GridRequest, PathError> {
    let Some((header, tail)) = flat.split_first_chunk::<GRID_HEADER_LEN>() else {
        return Err(PathError::input(format!(
            "grid request needs a {GRID_HEADER_LEN}-integer header, got {} integers",
            flat.len()
        )));
    };
    let [grid_size, sx, sy, gx, gy] = *header;
    let obstacles = decode_obstacles(tail, grid_size)?;
    Ok(GridRequest {
        grid_size,
        start: Point::new(sx, sy),
        goal: Point::new(gx, gy),
        obstacles,
    })
}

/// Flatten a path into interleaved `(x, y)` pairs, start first.
///
/// An empty path encodes to an empty array, meaning "no path".
pub fn encode_path(path: &[Point]) -> Vec<i32> {
    path.iter().flat_map(|p| [p.x, p.y]).collect()
}

/// Flatten physics states into `(x, y, vy_milli)` triples, where `vy_milli`
/// is the vertical velocity in thousandths of a cell per reference tick.
pub fn encode_trajectory(states: &[PhysicsState], params: &PhysicsParams) -> Vec<i32> {
    states
        .iter()
        .flat_map(|s| {
            let vy = (params.level_velocity(s.vel) * 1000.0).round() as i32;
            [s.pos.x, s.pos.y, vy]
        })
        .collect()
}
