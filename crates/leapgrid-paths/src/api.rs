//! Flat-array entry points.
//!
//! Both functions validate everything before searching, then return
//! interleaved `(x, y)` coordinates. `Ok` with an empty vector means the
//! input was fine but no path exists.

use leapgrid_core::Point;

use crate::codec;
use crate::config::{PhysicsConfig, SearchConfig};
use crate::error::PathError;
use crate::grid::find_grid_path;
use crate::params::PhysicsParams;
use crate::physics::find_physics_path;

/// Grid search on a packed request, 4-way movement.
///
/// See [`codec`] for the layout of `data`.
pub fn find_path_on_grid(data: &[i32]) -> Result<Vec<i32>, PathError> {
    find_path_on_grid_with(data, &SearchConfig::default())
}

/// [`find_path_on_grid`] with explicit search options.
pub fn find_path_on_grid_with(data: &[i32], cfg: &SearchConfig) -> Result<Vec<i32>, PathError> {
    let req = codec::decode_grid_request(data)?;
    let res = find_grid_path(&req.obstacles, req.start, req.goal, cfg)?;
    Ok(codec::encode_path(&res.path))
}

/// Physics-constrained search on a `grid_size × grid_size` grid.
///
/// `obstacles_flat` holds `(x, y)` pairs of blocked cells.
pub fn find_path_in_space(
    start_x: i32,
    start_y: i32,
    goal_x: i32,
    goal_y: i32,
    obstacles_flat: &[i32],
    params: &PhysicsParams,
    grid_size: i32,
) -> Result<Vec<i32>, PathError> {
    find_path_in_space_with(
        Point::new(start_x, start_y),
        Point::new(goal_x, goal_y),
        obstacles_flat,
        params,
        grid_size,
        &PhysicsConfig::default(),
    )
}

/// [`find_path_in_space`] with explicit physics options.
pub fn find_path_in_space_with(
    start: Point,
    goal: Point,
    obstacles_flat: &[i32],
    params: &PhysicsParams,
    grid_size: i32,
    cfg: &PhysicsConfig,
) -> Result<Vec<i32>, PathError> {
    let obstacles = codec::decode_obstacles(obstacles_flat, grid_size)?;
    let res = find_physics_path(start, goal, &obstacles, params, cfg)?;
    let points: Vec<Point> = res.path.iter().map(|s| s.pos).collect();
    Ok(codec::encode_path(&points))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn open_grid() {
        let path = find_path_on_grid(&[3, 0, 0, 2, 2]).unwrap();
        assert_eq!(path, vec![0, 0, 1, 0, 2, 0, 2, 1, 2, 2]);
    }

    #[test]
    fn blocked_middle_row() {
        let path = find_path_on_grid(&[3, 0, 0, 2, 2, 0, 1, 1, 1, 2, 1]).unwrap();
        assert!(path.is_empty());
    }

    #[test]
    fn odd_obstacle_array_is_rejected() {
        let err = find_path_on_grid(&[3, 0, 0, 2, 2, 1]).unwrap_err();
        assert!(matches!(err, PathError::InvalidInput(_)));
        let err = find_path_in_space(0, 7, 5, 7, &[3], &PhysicsParams::default(), 8).unwrap_err();
        assert!(matches!(err, PathError::InvalidInput(_)));
    }

    #[test]
    fn out_of_grid_endpoints_are_rejected() {
        assert!(find_path_on_grid(&[3, 0, 0, 3, 0]).is_err());
        assert!(find_path_in_space(0, 0, 9, 0, &[], &PhysicsParams::default(), 8).is_err());
    }

    #[test]
    fn diagonal_grid() {
        let cfg = SearchConfig {
            diagonal: true,
            ..Default::default()
        };
        let path = find_path_on_grid_with(&[3, 0, 0, 2, 2], &cfg).unwrap();
        assert_eq!(path, vec![0, 0, 1, 1, 2, 2]);
    }

    #[test]
    fn physics_over_a_wall() {
        let params = PhysicsParams {
            gravity_y: 1.0,
            jump_impulse_y: -5.0,
            max_velocity_y: 5.0,
            time_step_ms: 16.0,
            velocity_granularity: 5,
        };
        let path = find_path_in_space(1, 7, 5, 7, &[3, 7], &params, 8).unwrap();
        assert!(path.len() >= 10);
        assert_eq!(path.len() % 2, 0);
        assert_eq!(&path[..2], &[1, 7]);
        assert_eq!(&path[path.len() - 2..], &[5, 7]);
        // Some waypoint rises above the wall.
        assert!(path.chunks_exact(2).any(|c| c[1] < 6));
    }

    #[test]
    fn bad_physics_params_are_rejected() {
        let params = PhysicsParams {
            time_step_ms: 0.0,
            ..Default::default()
        };
        let err = find_path_in_space(0, 0, 1, 0, &[1, 1], &params, 8).unwrap_err();
        assert!(matches!(err, PathError::InvalidParams(_)));

        let cfg = PhysicsConfig {
            body_height: 0,
            ..Default::default()
        };
        let err = find_path_in_space_with(
            Point::new(0, 7),
            Point::new(2, 7),
            &[],
            &PhysicsParams::default(),
            8,
            &cfg,
        )
        .unwrap_err();
        assert!(matches!(err, PathError::InvalidParams(_)));
    }

    #[test]
    fn huge_grids_are_rejected_not_allocated() {
        let err = find_path_on_grid(&[i32::MAX, 0, 0, 1, 1]).unwrap_err();
        assert!(matches!(err, PathError::InvalidInput(_)));
        let err = find_path_on_grid(&[5000, 0, 0, 1, 1]).unwrap_err();
        assert!(matches!(err, PathError::InvalidInput(_)));
        let err =
            find_path_in_space(0, 0, 1, 0, &[], &PhysicsParams::default(), i32::MAX).unwrap_err();
        assert!(matches!(err, PathError::InvalidInput(_)));
    }

    #[test]
    fn concurrent_callers_share_nothing() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<crate::ObstacleSet>();
        assert_send_sync::<crate::SearchArena<crate::PhysicsState>>();
        assert_send_sync::<PhysicsParams>();
        assert_send_sync::<PathError>();

        let data = [8, 0, 0, 7, 7, 3, 3, 4, 4, 5, 5];
        let expect = find_path_on_grid(&data).unwrap();
        let handles: Vec<_> = (0..4)
            .map(|_| std::thread::spawn(move || find_path_on_grid(&data).unwrap()))
            .collect();
        for h in handles {
            assert_eq!(h.join().unwrap(), expect);
        }
    }

    #[test]
    fn repeated_calls_are_identical() {
        let data = [6, 0, 5, 5, 0, 2, 0, 2, 1, 2, 2, 2, 3, 4, 5, 4, 4];
        let first = find_path_on_grid(&data).unwrap();
        assert!(!first.is_empty());
        for _ in 0..3 {
            assert_eq!(find_path_on_grid(&data).unwrap(), first);
        }
    }
}
