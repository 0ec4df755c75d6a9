use core::ops::Sub;

use na::Unit;

use crate::math::{Point, Real, Vector};
use crate::shape::{Segment, SegmentPointLocation, SupportMap};

/// A point of the Minkowski difference `A - B` of two shapes, also called their
/// Configuration-Space Obstacle (CSO).
///
/// Both shapes intersect iff the CSO contains the origin. The points of `A` and `B` the CSO
/// point comes from are kept along, so the narrow-phase can report witness points.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct CSOPoint {
    /// The point of the CSO, `orig1 - orig2` unless it was nudged by
    /// [`translate_mut`](CSOPoint::translate_mut).
    pub point: Point<Real>,
    /// The point of the first shape.
    pub orig1: Point<Real>,
    /// The point of the second shape.
    pub orig2: Point<Real>,
}

impl CSOPoint {
    /// The CSO point `orig1 - orig2`.
    pub fn new(orig1: Point<Real>, orig2: Point<Real>) -> Self {
        CSOPoint {
            point: Point::from(orig1 - orig2),
            orig1,
            orig2,
        }
    }

    /// The CSO point made of the centers of `g1` and `g2`.
    ///
    /// It lies strictly inside the CSO whenever both shapes have an interior.
    pub fn from_centers<G1, G2>(g1: &G1, g2: &G2) -> Self
    where
        G1: ?Sized + SupportMap,
        G2: ?Sized + SupportMap,
    {
        CSOPoint::new(g1.center(), g2.center())
    }

    /// The support point of the CSO of `g1` and `g2` toward the unit direction `dir`.
    pub fn from_shapes_toward<G1, G2>(g1: &G1, g2: &G2, dir: &Unit<Vector<Real>>) -> Self
    where
        G1: ?Sized + SupportMap,
        G2: ?Sized + SupportMap,
    {
        let sp1 = g1.support_point_toward(dir);
        let sp2 = g2.support_point_toward(&-*dir);

        CSOPoint::new(sp1, sp2)
    }

    /// The support point of the CSO of `g1` and `g2` toward `dir`: the support point of `g1`
    /// along `dir` minus the one of `g2` along `-dir`.
    pub fn from_shapes<G1, G2>(g1: &G1, g2: &G2, dir: &Vector<Real>) -> Self
    where
        G1: ?Sized + SupportMap,
        G2: ?Sized + SupportMap,
    {
        let sp1 = g1.support_point(dir);
        let sp2 = g2.support_point(&-*dir);

        CSOPoint::new(sp1, sp2)
    }

    /// Moves the CSO point, leaving the points of the original shapes untouched.
    pub fn translate_mut(&mut self, dir: &Vector<Real>) {
        self.point += dir;
    }

    /// Projects the origin on the CSO edge `[a, b]` and interpolates the original points
    /// of `a` and `b` accordingly.
    ///
    /// Returns the projected point, along with the corresponding points on the first and
    /// second shapes. A projection falling outside of the edge snaps to its closest endpoint.
    pub fn project_origin_on_edge(
        a: &CSOPoint,
        b: &CSOPoint,
    ) -> (Point<Real>, Point<Real>, Point<Real>) {
        let seg = Segment::new(a.point, b.point);
        let (proj, location) = seg.project_point_and_get_location(&Point::origin());

        match location {
            SegmentPointLocation::OnVertex(0) => (proj, a.orig1, a.orig2),
            SegmentPointLocation::OnVertex(_) => (proj, b.orig1, b.orig2),
            SegmentPointLocation::OnEdge([wa, wb]) => (
                proj,
                a.orig1 * wa + b.orig1.coords * wb,
                a.orig2 * wa + b.orig2.coords * wb,
            ),
        }
    }
}

impl Sub<CSOPoint> for CSOPoint {
    type Output = Vector<Real>;

    #[inline]
    fn sub(self, rhs: CSOPoint) -> Vector<Real> {
        self.point - rhs.point
    }
}
