//! Spatial partitioning tools.

pub use self::quadtree::{QuadTree, QuadTreeSettings, Quadrants};

mod quadtree;
