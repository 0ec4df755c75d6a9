//! Shapes supported by portal2d.
//!
//! Every shape is expressed directly in world space: the proxy layer
//! resolves the transform hierarchy before any query runs, so the support
//! functions never need an isometry.

pub use self::circle::Circle;
pub use self::convex_shape::{ConvexShape, ShapeType};
pub use self::dot::Dot;
pub use self::segment::{Segment, SegmentPointLocation};
pub use self::support_map::SupportMap;
pub use self::translated::Translated;

mod aabb_support_map;
mod circle;
mod convex_shape;
mod dot;
mod segment;
mod support_map;
mod translated;
