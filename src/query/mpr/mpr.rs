//! Minkowski Portal Refinement.
//!
//! MPR (also known as XenoCollide) casts a ray from a point `vp` known to be inside the
//! Minkowski difference `A - B` toward the origin. A portal is a segment of support points
//! such that the ray crosses it. Refinement pushes the portal outward until either the
//! origin is found behind it (the shapes intersect), or the support function cannot pass
//! the origin (they do not).

use crate::math::{self, Real, Vector};
use crate::query::gjk::CSOPoint;
use crate::query::mpr::{Portal, PortalValidity};
use crate::query::{Algorithm, QueryError, QueryOptions};
use crate::shape::SupportMap;
use crate::utils::VectorOps;

/// The outcome of [`mpr`].
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct MprResult {
    /// Whether the origin lies strictly inside of the Minkowski difference.
    pub intersecting: bool,
    /// The last portal. Encloses the origin if `intersecting` is `true`, and can seed [`mtv`](super::mtv).
    pub portal: Portal,
    /// The number of refinement iterations performed.
    pub iterations: u32,
}

impl MprResult {
    fn miss(portal: Portal, iterations: u32) -> Self {
        MprResult {
            intersecting: false,
            portal,
            iterations,
        }
    }
}

/// Tests if `g1` and `g2` intersect using Minkowski Portal Refinement.
///
/// Shapes that only touch, or whose Minkowski difference is flat around the origin, are
/// reported as not intersecting.
pub fn mpr<G1, G2>(g1: &G1, g2: &G2, options: &QueryOptions) -> Result<MprResult, QueryError>
where
    G1: ?Sized + SupportMap,
    G2: ?Sized + SupportMap,
{
    let mut portal = match discover_portal(g1, g2, options)? {
        Discovery::Found(portal) => portal,
        Discovery::Separated(portal) => return Ok(MprResult::miss(portal, 0)),
    };

    for iterations in 0..options.max_iterations {
        match portal.validity(options.epsilon) {
            PortalValidity::Valid => {}
            // The Minkowski difference is flat around the portal: the origin can at best
            // lie on its boundary.
            PortalValidity::Singular | PortalValidity::Hinged | PortalValidity::Shut => {
                return Ok(MprResult::miss(portal, iterations))
            }
        }

        if portal.encloses_origin() {
            return Ok(MprResult {
                intersecting: true,
                portal,
                iterations,
            });
        }

        let normal = portal.outward_normal();
        let pt = CSOPoint::from_shapes(g1, g2, &normal);

        if pt.point.coords.dot(&normal) <= 0.0 {
            return Ok(MprResult::miss(portal, iterations));
        }

        let gain = (pt - portal.a).dot(&normal) / normal.norm();

        if gain <= options.epsilon {
            // The portal reached the boundary without passing the origin.
            return Ok(MprResult::miss(portal, iterations));
        }

        portal.refine(pt);
    }

    Err(QueryError::no_convergence(
        Algorithm::Mpr,
        options.max_iterations,
    ))
}

enum Discovery {
    Found(Portal),
    Separated(Portal),
}

/// Builds the first portal: a view point inside of the Minkowski difference, and two
/// support points such that the ray from the view point toward the origin lies between them.
fn discover_portal<G1, G2>(
    g1: &G1,
    g2: &G2,
    options: &QueryOptions,
) -> Result<Discovery, QueryError>
where
    G1: ?Sized + SupportMap,
    G2: ?Sized + SupportMap,
{
    let mut vp = CSOPoint::from_centers(g1, g2);

    if vp.point.coords.norm() <= options.epsilon {
        // Shifting the view point keeps the ray toward the origin well-defined.
        vp.translate_mut(&(*math::up() * options.epsilon));
    }

    let to_origin = -vp.point.coords;
    let mut a = CSOPoint::from_shapes(g1, g2, &to_origin);

    if a.point.coords.dot(&to_origin) <= 0.0 {
        return Ok(Discovery::Separated(Portal::new(vp, a, a)));
    }

    for _ in 0..options.max_iterations {
        let normal = toward_origin(&vp, &(a - vp));
        let b = CSOPoint::from_shapes(g1, g2, &normal);
        let portal = Portal::new(vp, a, b);

        if b.point.coords.dot(&normal) <= 0.0 {
            return Ok(Discovery::Separated(portal));
        }

        let a_side = (a - vp).perp(&to_origin);
        let b_side = (b - vp).perp(&to_origin);

        if a_side * b_side > 0.0 {
            // Both rays are on the same side of the origin: rotate the portal toward it.
            a = b;
        } else {
            return Ok(Discovery::Found(portal));
        }
    }

    Err(QueryError::no_convergence(
        Algorithm::Mpr,
        options.max_iterations,
    ))
}

/// The normal of the ray from `vp` along `ray`, on the side of the origin.
///
/// Picks either side if the origin lies on the ray.
fn toward_origin(vp: &CSOPoint, ray: &Vector<Real>) -> Vector<Real> {
    let n = ray.ccw_perp();

    if n.dot(&vp.point.coords) > 0.0 {
        -n
    } else {
        n
    }
}
