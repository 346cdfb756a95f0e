//! The immutable set of blocked cells a search runs against.

use leapgrid_core::{Point, Range};

use crate::error::PathError;

/// Largest grid, in cells, a search accepts (4096 × 4096).
pub const MAX_GRID_CELLS: usize = 1 << 24;

/// Blocked cells of a bounded grid, stored as a dense row-major bitmap.
///
/// Built once per search call and never mutated afterwards. Cells outside
/// the range are reported as blocked by [`is_blocked`](Self::is_blocked), so
/// neighbour generation needs no separate bounds test.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObstacleSet {
    rng: Range,
    blocked: Vec<bool>,
    count: usize,
}

impl ObstacleSet {
    /// An obstacle-free grid over `rng`.
    ///
    /// Fails with [`PathError::InvalidInput`] if `rng` holds more than
    /// [`MAX_GRID_CELLS`] cells.
    pub fn new(rng: Range) -> Result<Self, PathError> {
        let len = rng
            .checked_len()
            .filter(|&n| n <= MAX_GRID_CELLS)
            .ok_or_else(|| {
                PathError::input(format!(
                    "grid {rng} exceeds the limit of {MAX_GRID_CELLS} cells"
                ))
            })?;
        Ok(Self {
            rng,
            blocked: vec![false; len],
            count: 0,
        })
    }

    /// Build the set from a list of cells.
    ///
    /// Every cell must lie inside `rng`; duplicates are allowed.
    pub fn from_points(rng: Range, cells: &[Point]) -> Result<Self, PathError> {
        let mut set = Self::new(rng)?;
        for &p in cells {
            let Some(i) = rng.index(p) else {
                return Err(PathError::input(format!("obstacle {p} outside grid {rng}")));
            };
            if !set.blocked[i] {
                set.blocked[i] = true;
                set.count += 1;
            }
        }
        Ok(set)
    }

    /// The grid rectangle.
    #[inline]
    pub fn range(&self) -> Range {
        self.rng
    }

    /// Whether `p` is an obstacle cell. `false` outside the grid.
    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        self.rng.index(p).is_some_and(|i| self.blocked[i])
    }

    /// Whether `p` cannot be entered: an obstacle or outside the grid.
    #[inline]
    pub fn is_blocked(&self, p: Point) -> bool {
        match self.rng.index(p) {
            Some(i) => self.blocked[i],
            None => true,
        }
    }

    /// Number of distinct obstacle cells.
    #[inline]
    pub fn len(&self) -> usize {
        self.count
    }

    /// Whether there are no obstacles at all.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Obstacle cells in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = Point> + '_ {
        self.blocked
            .iter()
            .enumerate()
            .filter(|&(_, &b)| b)
            .map(|(i, _)| self.rng.point(i))
    }
}
