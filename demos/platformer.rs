//! Physics-constrained pathfinding across a random platform level.
//!
//! Run: cargo run --bin platformer [seed]

use leapgrid_core::{Point, Range};
use leapgrid_demos::{SIZE, floor_cell, platform_level, render};
use leapgrid_paths::{
    ObstacleSet, PhysicsConfig, PhysicsModel, PhysicsParams, codec, find_physics_path,
};
use rand::SeedableRng;

fn main() {
    let seed = std::env::args()
        .nth(1)
        .and_then(|s| s.parse().ok())
        .unwrap_or(42);
    let mut rng = rand::rngs::StdRng::seed_from_u64(seed);

    let cells = platform_level(&mut rng);
    let obstacles = match ObstacleSet::from_points(Range::square(SIZE), &cells) {
        Ok(o) => o,
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    };

    let start = floor_cell(&obstacles, 0).unwrap_or(Point::new(0, SIZE - 1));
    let goal = floor_cell(&obstacles, SIZE - 1).unwrap_or(Point::new(SIZE - 1, SIZE - 1));
    let params = PhysicsParams::default();
    let cfg = PhysicsConfig::default();

    let res = match find_physics_path(start, goal, &obstacles, &params, &cfg) {
        Ok(r) => r,
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    };

    let points: Vec<Point> = res.path.iter().map(|s| s.pos).collect();
    print!("{}", render(&obstacles, &points));
    println!(
        "seed {seed}: {:?}, {} ticks, cost {}, {} states expanded",
        res.outcome,
        res.path.len().saturating_sub(1),
        res.cost,
        res.expanded
    );

    if let Ok(model) = PhysicsModel::new(&obstacles, params, &cfg) {
        for w in res.path.windows(2) {
            if let Some(action) = model.infer_action(w[0], w[1]).filter(|a| a.is_jump()) {
                println!("{action:?} at {}", w[0].pos);
            }
        }
    }
    println!("trajectory: {:?}", codec::encode_trajectory(&res.path, &params));
}
