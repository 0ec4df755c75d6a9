/*!
portal2d
========

**portal2d** is a 2-dimensional collision detection core written with
the rust programming language.

It is meant to be driven once per simulation step:

* [`frame::CollisionFrame`] resolves scene primitives into transform-resolved
  [`frame::Proxy`] snapshots,
* [`partitioning::QuadTree`] prunes the candidate pairs,
* [`query::gjk`] and [`query::mpr`] answer intersection, penetration, MTV and
  distance queries on the survivors,
* [`frame::TOIIslands`] groups the proxies whose swept motion may interact.

The coordinate system is screen-like: `+y` points down.
*/

#![deny(non_camel_case_types)]
#![deny(unused_parens)]
#![deny(non_upper_case_globals)]
#![deny(unused_results)]
#![warn(missing_docs)]
#![warn(unused_imports)]
#![allow(missing_copy_implementations)]
#![allow(clippy::module_inception)]
#![allow(clippy::manual_range_contains)] // This usually makes it way more verbose that it could be.
#![deny(unused_qualifications)]

#[cfg(feature = "serde-serialize")]
#[macro_use]
extern crate serde;
#[macro_use]
extern crate approx;
extern crate num_traits as num;

pub extern crate nalgebra as na;

pub mod bounding_volume;
pub mod frame;
pub mod partitioning;
pub mod query;
pub mod scene;
pub mod shape;
pub mod utils;

mod real {
    /// The scalar type used throughout this crate.
    #[cfg(feature = "f64")]
    pub use f64 as Real;

    /// The scalar type used throughout this crate.
    #[cfg(not(feature = "f64"))]
    pub use f32 as Real;
}

/// Compilation flags dependent aliases for mathematical types.
pub mod math {
    pub use super::real::*;
    pub use na::{Point2, UnitVector2, Vector2};

    /// The default tolerance used for geometric operations.
    pub const DEFAULT_EPSILON: Real = Real::EPSILON;

    /// The dimension of the space.
    pub const DIM: usize = 2;

    /// The point type.
    pub use Point2 as Point;

    /// The vector type.
    pub use Vector2 as Vector;

    /// The unit vector type.
    pub use UnitVector2 as UnitVector;

    /// The "straight up" direction of the screen-like coordinate system.
    ///
    /// Used as the push-apart direction whenever two shapes share the exact same center.
    pub fn up() -> UnitVector<Real> {
        UnitVector::new_unchecked(Vector::new(0.0, -1.0))
    }
}
