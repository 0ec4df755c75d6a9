//! Definition of the point shape.

use crate::bounding_volume::{Aabb, HasAabb};
use crate::math::{Point, Real, Vector};
use crate::shape::SupportMap;

/// A shape reduced to a single point.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(PartialEq, Debug, Copy, Clone)]
#[repr(C)]
pub struct Dot {
    /// The position of the point.
    pub position: Point<Real>,
}

impl Dot {
    /// Creates a new point shape.
    #[inline]
    pub fn new(position: Point<Real>) -> Dot {
        Dot { position }
    }
}

impl SupportMap for Dot {
    #[inline]
    fn support_point(&self, _: &Vector<Real>) -> Point<Real> {
        self.position
    }

    #[inline]
    fn center(&self) -> Point<Real> {
        self.position
    }
}

impl HasAabb for Dot {
    #[inline]
    fn aabb(&self) -> Aabb {
        Aabb::new(self.position, self.position)
    }
}
