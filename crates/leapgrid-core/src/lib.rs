//! **leapgrid-core**: geometry primitives shared by the *leapgrid* crates.
//!
//! A [`Point`] names one grid cell and a [`Range`] names the bounded
//! rectangle a search runs over, including its row-major cell indexing.

pub mod geom;

pub use geom::{Point, Range, RangeIter};
