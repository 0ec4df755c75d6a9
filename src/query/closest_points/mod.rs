//! Closest points and distance between separated shapes.

pub use self::closest_points::{closest_points, ClosestPoints};

mod closest_points;
