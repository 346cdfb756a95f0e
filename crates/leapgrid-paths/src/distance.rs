use leapgrid_core::Point;

/// Manhattan (L1) distance between two points.
#[inline]
pub fn manhattan(a: Point, b: Point) -> i32 {
    (a.x - b.x).abs() + (a.y - b.y).abs()
}

/// Octile distance: the exact cost of an unobstructed 8-way path where a
/// straight step costs `straight` and a diagonal step costs `diagonal`.
#[inline]
pub fn octile(a: Point, b: Point, straight: i32, diagonal: i32) -> i32 {
    let dx = (a.x - b.x).abs();
    let dy = (a.y - b.y).abs();
    let (lo, hi) = if dx < dy { (dx, dy) } else { (dy, dx) };
    straight * (hi - lo) + diagonal * lo
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn distances() {
        let a = Point::new(1, 1);
        let b = Point::new(4, -1);
        assert_eq!(manhattan(a, b), 5);
        assert_eq!(octile(a, b, 10, 14), 10 + 2 * 14);
        assert_eq!(octile(a, a, 10, 14), 0);
    }

    #[test]
    fn octile_bounds() {
        let a = Point::new(0, 0);
        for b in [Point::new(3, 7), Point::new(-5, 2), Point::new(6, 6)] {
            let d = octile(a, b, 10, 14);
            let longest = (a.x - b.x).abs().max((a.y - b.y).abs());
            assert!(d >= 10 * longest);
            assert!(d <= 10 * manhattan(a, b));
        }
    }
}
