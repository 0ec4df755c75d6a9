//! Definition of the segment shape.

use na::Unit;

use crate::bounding_volume::{Aabb, HasAabb};
use crate::math::{Point, Real, Vector, DEFAULT_EPSILON};
use crate::shape::SupportMap;
use crate::utils::VectorOps;

/// A segment shape.
///
/// Both line primitives and chain links resolve to segments. The order of `a` and `b`
/// matters: it decides which side of the segment its outward normal points to
/// (see [`Segment::normal`]).
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[repr(C)]
#[derive(PartialEq, Debug, Copy, Clone)]
pub struct Segment {
    /// The segment first point.
    pub a: Point<Real>,
    /// The segment second point.
    pub b: Point<Real>,
}

/// Where the projection of a point on a segment falls.
#[derive(PartialEq, Debug, Clone, Copy)]
pub enum SegmentPointLocation {
    /// On the first (`0`) or second (`1`) endpoint.
    OnVertex(u32),
    /// Strictly between the endpoints, with the weights of `a` and `b` (summing to one).
    OnEdge([Real; 2]),
}

impl Segment {
    /// Creates a new segment from two points.
    #[inline]
    pub fn new(a: Point<Real>, b: Point<Real>) -> Segment {
        Segment { a, b }
    }

    /// Swaps the two endpoints, flipping the normal of this segment.
    #[inline]
    pub fn swap(&mut self) {
        core::mem::swap(&mut self.a, &mut self.b)
    }

    /// The outward normal of this segment: `b - a` rotated by +90 degrees.
    ///
    /// With `+y` pointing down, that is the right-hand side when walking from `a` to `b`.
    /// Returns `None` if both endpoints coincide.
    pub fn normal(&self) -> Option<Unit<Vector<Real>>> {
        Unit::try_new((self.b - self.a).ccw_perp(), DEFAULT_EPSILON)
    }

    /// Projects `pt` on this segment, and returns the projection along with its location.
    ///
    /// A projection falling outside of the segment snaps to the closest endpoint.
    pub fn project_point_and_get_location(
        &self,
        pt: &Point<Real>,
    ) -> (Point<Real>, SegmentPointLocation) {
        let dir = self.b - self.a;
        let along = dir.dot(&(pt - self.a));
        let sq_len = dir.norm_squared();

        if along <= 0.0 {
            (self.a, SegmentPointLocation::OnVertex(0))
        } else if along >= sq_len {
            (self.b, SegmentPointLocation::OnVertex(1))
        } else {
            let t = along / sq_len;
            (self.a + dir * t, SegmentPointLocation::OnEdge([1.0 - t, t]))
        }
    }
}

impl SupportMap for Segment {
    #[inline]
    fn support_point(&self, dir: &Vector<Real>) -> Point<Real> {
        // Ties go to the first point.
        if self.a.coords.dot(dir) >= self.b.coords.dot(dir) {
            self.a
        } else {
            self.b
        }
    }

    #[inline]
    fn center(&self) -> Point<Real> {
        na::center(&self.a, &self.b)
    }
}

impl HasAabb for Segment {
    #[inline]
    fn aabb(&self) -> Aabb {
        Aabb::from_points(&[self.a, self.b])
    }
}

impl From<[Point<Real>; 2]> for Segment {
    fn from(arr: [Point<Real>; 2]) -> Self {
        Segment::new(arr[0], arr[1])
    }
}
