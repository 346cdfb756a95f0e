//! Level generation and ASCII rendering shared by the demo binaries.

use leapgrid_core::{Point, Range};
use leapgrid_paths::ObstacleSet;
use rand::{Rng, RngExt};

pub const SIZE: i32 = 24;

// ---------------------------------------------------------------------------
// Levels
// ---------------------------------------------------------------------------

/// A side-view level: floating platforms plus a few pillars on the floor.
/// The bottom edge of the grid acts as the floor.
pub fn platform_level(rng: &mut impl Rng) -> Vec<Point> {
    let mut cells = Vec::new();
    for _ in 0..10 {
        let len = rng.random_range(3..8);
        let x0 = rng.random_range(0..SIZE - len);
        let y = rng.random_range(4..SIZE - 3);
        cells.extend((x0..x0 + len).map(|x| Point::new(x, y)));
    }
    for _ in 0..3 {
        let x = rng.random_range(4..SIZE - 4);
        let h = rng.random_range(1..3);
        cells.extend((0..h).map(|i| Point::new(x, SIZE - 1 - i)));
    }
    cells
}

/// A top-down maze-like field of random walls.
pub fn wall_field(rng: &mut impl Rng, density: u32) -> Vec<Point> {
    Range::square(SIZE)
        .iter()
        .filter(|_| rng.random_range(0..100) < density)
        .collect()
}

// ---------------------------------------------------------------------------
// Rendering
// ---------------------------------------------------------------------------

/// Draw obstacles as `#`, the path as `*`, and its ends as `S` and `G`.
pub fn render(obstacles: &ObstacleSet, path: &[Point]) -> String {
    let rng = obstacles.range();
    let mut rows = vec![vec!['.'; rng.width() as usize]; rng.height() as usize];
    for p in obstacles.iter() {
        rows[p.y as usize][p.x as usize] = '#';
    }
    for &p in path {
        rows[p.y as usize][p.x as usize] = '*';
    }
    if let (Some(s), Some(g)) = (path.first(), path.last()) {
        rows[s.y as usize][s.x as usize] = 'S';
        rows[g.y as usize][g.x as usize] = 'G';
    }
    let mut out = String::new();
    for row in rows {
        out.extend(row);
        out.push('\n');
    }
    out
}

/// The first free cell scanning the given column from the bottom up.
pub fn floor_cell(obstacles: &ObstacleSet, x: i32) -> Option<Point> {
    (0..SIZE)
        .rev()
        .map(|y| Point::new(x, y))
        .find(|&p| !obstacles.is_blocked(p))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn levels_fit_the_grid() {
        let mut rng = StdRng::seed_from_u64(1);
        let cells = platform_level(&mut rng);
        assert!(ObstacleSet::from_points(Range::square(SIZE), &cells).is_ok());
        let cells = wall_field(&mut rng, 20);
        assert!(ObstacleSet::from_points(Range::square(SIZE), &cells).is_ok());
    }

    #[test]
    fn render_marks_path_ends() {
        let obs = ObstacleSet::from_points(Range::square(SIZE), &[Point::new(1, 0)]).unwrap();
        let out = render(&obs, &[Point::new(0, 0), Point::new(0, 1), Point::new(1, 1)]);
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), SIZE as usize);
        assert!(lines[0].starts_with("S#"));
        assert!(lines[1].starts_with("*G"));
    }

    #[test]
    fn floor_cell_skips_pillars() {
        let obs = ObstacleSet::from_points(
            Range::square(SIZE),
            &[Point::new(3, SIZE - 1), Point::new(3, SIZE - 2)],
        )
        .unwrap();
        assert_eq!(floor_cell(&obs, 3), Some(Point::new(3, SIZE - 3)));
        assert_eq!(floor_cell(&obs, 0), Some(Point::new(0, SIZE - 1)));
    }
}
