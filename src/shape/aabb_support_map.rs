use crate::bounding_volume::Aabb;
use crate::math::{Point, Real, Vector};
use crate::shape::SupportMap;

// An axis-aligned box is its own shape: the support point is the corner
// matching the sign of `dir` on each axis, a zero component picking the
// smallest coordinate.
impl SupportMap for Aabb {
    #[inline]
    fn support_point(&self, dir: &Vector<Real>) -> Point<Real> {
        Point::new(
            if dir.x > 0.0 { self.maxs.x } else { self.mins.x },
            if dir.y > 0.0 { self.maxs.y } else { self.mins.y },
        )
    }

    #[inline]
    fn center(&self) -> Point<Real> {
        Aabb::center(self)
    }
}
