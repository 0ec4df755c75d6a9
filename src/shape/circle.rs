use na::Unit;

use crate::bounding_volume::{Aabb, HasAabb};
use crate::math::{Point, Real, Vector, DEFAULT_EPSILON};
use crate::shape::SupportMap;

/// A circle shape.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(PartialEq, Debug, Copy, Clone)]
#[repr(C)]
pub struct Circle {
    /// The center of the circle.
    pub center: Point<Real>,
    /// The radius of the circle.
    pub radius: Real,
}

impl Circle {
    /// Creates a new circle with the given center and radius.
    #[inline]
    pub fn new(center: Point<Real>, radius: Real) -> Circle {
        Circle { center, radius }
    }
}

impl SupportMap for Circle {
    #[inline]
    fn support_point(&self, dir: &Vector<Real>) -> Point<Real> {
        match Unit::try_new(*dir, DEFAULT_EPSILON) {
            Some(dir) => self.support_point_toward(&dir),
            // Any point is extremal along a null direction.
            None => self.center,
        }
    }

    #[inline]
    fn support_point_toward(&self, dir: &Unit<Vector<Real>>) -> Point<Real> {
        self.center + **dir * self.radius
    }

    #[inline]
    fn center(&self) -> Point<Real> {
        self.center
    }
}

impl HasAabb for Circle {
    #[inline]
    fn aabb(&self) -> Aabb {
        Aabb::from_half_extents(self.center, Vector::repeat(self.radius))
    }
}
