//! Grid pathfinding through a random wall field, 4-way and 8-way.
//!
//! Run: cargo run --bin maze [seed]

use leapgrid_core::{Point, Range};
use leapgrid_demos::{SIZE, render, wall_field};
use leapgrid_paths::{ObstacleSet, SearchConfig, find_grid_path};
use rand::SeedableRng;

fn main() {
    let seed = std::env::args()
        .nth(1)
        .and_then(|s| s.parse().ok())
        .unwrap_or(7);
    let mut rng = rand::rngs::StdRng::seed_from_u64(seed);

    let start = Point::new(0, 0);
    let goal = Point::new(SIZE - 1, SIZE - 1);
    let cells: Vec<Point> = wall_field(&mut rng, 28)
        .into_iter()
        .filter(|&p| p != start && p != goal)
        .collect();
    let obstacles = match ObstacleSet::from_points(Range::square(SIZE), &cells) {
        Ok(o) => o,
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    };

    for diagonal in [false, true] {
        let cfg = SearchConfig {
            diagonal,
            ..Default::default()
        };
        match find_grid_path(&obstacles, start, goal, &cfg) {
            Ok(res) => {
                print!("{}", render(&obstacles, &res.path));
                println!(
                    "{}: {:?}, {} cells, cost {}, {} expanded\n",
                    if diagonal { "8-way" } else { "4-way" },
                    res.outcome,
                    res.path.len(),
                    res.cost,
                    res.expanded
                );
            }
            Err(e) => {
                eprintln!("Error: {e}");
                std::process::exit(1);
            }
        }
    }
}
