use crate::math::{Real, Vector};
use crate::query::gjk::CSOPoint;
use crate::utils::{points_coincide, VectorOps};

/// The classified state of a [`Portal`].
///
/// Every consumer of a portal must match on this before computing angles or areas from it:
/// only a `Valid` portal spans a non-degenerate triangle.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum PortalValidity {
    /// The view point and both boundary points coincide.
    Singular,
    /// One boundary point coincides with the view point.
    Hinged,
    /// The two boundary points coincide.
    Shut,
    /// The view point and the boundary points are pairwise distinct.
    Valid,
}

/// A portal of the Minkowski Portal Refinement algorithm.
///
/// It is made of a view point `vp` lying inside of the Minkowski difference and of two
/// boundary points `a` and `b` on its boundary. The portal is the segment `[a, b]`, and
/// the rays from `vp` through `a` and `b` bound a cone containing the origin.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Portal {
    /// The view point, interior to the Minkowski difference.
    pub vp: CSOPoint,
    /// The first boundary point.
    pub a: CSOPoint,
    /// The second boundary point.
    pub b: CSOPoint,
}

impl Portal {
    /// Creates a new portal.
    pub fn new(vp: CSOPoint, a: CSOPoint, b: CSOPoint) -> Self {
        Portal { vp, a, b }
    }

    /// Classifies this portal, using `eps` as the tolerance on point coincidence.
    pub fn validity(&self, eps: Real) -> PortalValidity {
        let vp_a = points_coincide(&self.vp.point, &self.a.point, eps);
        let vp_b = points_coincide(&self.vp.point, &self.b.point, eps);

        match (vp_a, vp_b) {
            (true, true) => PortalValidity::Singular,
            (true, false) | (false, true) => PortalValidity::Hinged,
            (false, false) => {
                if points_coincide(&self.a.point, &self.b.point, eps) {
                    PortalValidity::Shut
                } else {
                    PortalValidity::Valid
                }
            }
        }
    }

    /// The portal edge, from `a` to `b`.
    #[inline]
    pub fn edge(&self) -> Vector<Real> {
        self.b - self.a
    }

    /// The (non-normalized) normal of the portal edge, pointing away from the view point.
    ///
    /// Only meaningful for a `Valid` portal.
    pub fn outward_normal(&self) -> Vector<Real> {
        let n = self.edge().ccw_perp();

        if n.dot(&(self.a - self.vp)) < 0.0 {
            -n
        } else {
            n
        }
    }

    /// Is the origin strictly on the view-point side of the portal edge?
    ///
    /// Since the origin lies in the cone of the portal, this means it is strictly inside of
    /// the triangle `(vp, a, b)`, hence inside of the Minkowski difference.
    pub fn encloses_origin(&self) -> bool {
        self.a.point.coords.dot(&self.outward_normal()) > 0.0
    }

    /// Replaces one of the boundary points with `pt`, keeping the origin inside of the cone.
    pub fn refine(&mut self, pt: CSOPoint) {
        let ray = pt - self.vp;
        let origin_side = ray.perp(&-self.vp.point.coords);
        let a_side = ray.perp(&(self.a - self.vp));

        if origin_side * a_side > 0.0 {
            self.b = pt;
        } else {
            self.a = pt;
        }
    }
}
