//! Minimum translation vector of two intersecting shapes.
//!
//! Starting from an MPR portal enclosing the origin, the boundary of the Minkowski difference is
//! approximated by a convex polygon of support points which is refined, one edge at a time, on
//! its edge closest to the origin. The search stops once the closest edge lies on the boundary,
//! up to the touching tolerance, or once it subtends an angle smaller than the minimum
//! refinement angle as seen from the origin.
//!
//! The reported depth is read off the support point along the final normal rather than off the
//! polygon edge, which only bounds the depth from below, and is lengthened by the touching
//! tolerance so that the translated shapes end up strictly apart.

use na::Unit;
use smallvec::SmallVec;

use crate::math::{Point, Real, Vector};
use crate::query::gjk::CSOPoint;
use crate::query::mpr::{Portal, PortalValidity};
use crate::query::{Algorithm, QueryError, QueryOptions};
use crate::shape::SupportMap;
use crate::utils::{points_coincide, VectorOps, COS_FRAC_PI_4, SIN_FRAC_PI_4};

/// The outcome of [`mtv`].
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct MtvResult {
    /// The smallest translation of the first shape that separates it from the second one.
    ///
    /// `None` if the shapes do not intersect, only touch, or have a flat Minkowski difference.
    pub translation: Option<Vector<Real>>,
    /// The deepest points of the first and second shape along the translation.
    pub points: Option<[Point<Real>; 2]>,
    /// The portal the search was seeded with.
    pub portal: Portal,
    /// The number of refinement iterations performed.
    pub iterations: u32,
}

/// Computes the minimum translation vector separating `g1` from `g2`.
///
/// `portal` must be the portal returned by a successful [`mpr`](super::mpr) on the same pair
/// of shapes.
pub fn mtv<G1, G2>(
    g1: &G1,
    g2: &G2,
    portal: &Portal,
    options: &QueryOptions,
) -> Result<MtvResult, QueryError>
where
    G1: ?Sized + SupportMap,
    G2: ?Sized + SupportMap,
{
    let none = |iterations| MtvResult {
        translation: None,
        points: None,
        portal: *portal,
        iterations,
    };

    match portal.validity(options.epsilon) {
        PortalValidity::Valid => {}
        PortalValidity::Singular | PortalValidity::Hinged | PortalValidity::Shut => {
            return Ok(none(0))
        }
    }

    let mut polygon = initial_polygon(g1, g2, &portal.outward_normal(), options.epsilon);

    if polygon.len() < 3 {
        return Ok(none(0));
    }

    for iterations in 0..options.max_iterations {
        let Some((i, normal, dist)) = closest_edge(&polygon) else {
            return Ok(none(iterations));
        };
        let j = (i + 1) % polygon.len();
        let pt = CSOPoint::from_shapes_toward(g1, g2, &normal);
        let support_dist = pt.point.coords.dot(&normal);

        if points_coincide(&pt.point, &polygon[i].point, options.epsilon)
            || points_coincide(&pt.point, &polygon[j].point, options.epsilon)
        {
            if dist <= 0.0 {
                return Ok(none(iterations));
            }

            return Ok(penetration(
                &polygon[i],
                &polygon[j],
                &normal,
                support_dist + options.touching_tolerance,
                *portal,
                iterations,
            ));
        }

        if dist <= 0.0 {
            // The polygon does not enclose the origin yet.
            if support_dist <= 0.0 {
                return Ok(none(iterations));
            }
        } else {
            let gap = support_dist - dist;
            let pi = polygon[i].point.coords;
            let pj = polygon[j].point.coords;
            let angle = pi.perp(&pj).abs().atan2(pi.dot(&pj));

            if gap <= options.touching_tolerance || angle < options.mrt {
                return Ok(penetration(
                    &polygon[i],
                    &polygon[j],
                    &normal,
                    support_dist + options.touching_tolerance,
                    *portal,
                    iterations,
                ));
            }
        }

        polygon.insert(j, pt);
    }

    Err(QueryError::no_convergence(
        Algorithm::Mtv,
        options.max_iterations,
    ))
}

fn penetration(
    a: &CSOPoint,
    b: &CSOPoint,
    normal: &Unit<Vector<Real>>,
    depth: Real,
    portal: Portal,
    iterations: u32,
) -> MtvResult {
    let (_, point1, point2) = CSOPoint::project_origin_on_edge(a, b);

    MtvResult {
        translation: Some(-**normal * depth),
        points: Some([point1, point2]),
        portal,
        iterations,
    }
}

/// Support points along eight directions, 45 degrees apart, starting at `dir`.
///
/// The resulting polygon is convex and its vertices are ordered by increasing angle.
fn initial_polygon<G1, G2>(
    g1: &G1,
    g2: &G2,
    dir: &Vector<Real>,
    eps: Real,
) -> SmallVec<[CSOPoint; 16]>
where
    G1: ?Sized + SupportMap,
    G2: ?Sized + SupportMap,
{
    let mut polygon: SmallVec<[CSOPoint; 16]> = SmallVec::new();
    let mut dir = *dir;

    for _ in 0..8 {
        let pt = CSOPoint::from_shapes(g1, g2, &dir);

        if polygon
            .last()
            .map_or(true, |last| !points_coincide(&last.point, &pt.point, eps))
        {
            polygon.push(pt);
        }

        dir = Vector::new(
            dir.x * COS_FRAC_PI_4 - dir.y * SIN_FRAC_PI_4,
            dir.x * SIN_FRAC_PI_4 + dir.y * COS_FRAC_PI_4,
        );
    }

    while let [first, .., last] = polygon.as_slice() {
        if !points_coincide(&first.point, &last.point, eps) {
            break;
        }

        let _ = polygon.pop();
    }

    polygon
}

/// The edge of `polygon` closest to the origin: its first vertex, outward normal and signed
/// distance to the origin (negative if the origin is outside of the edge).
fn closest_edge(polygon: &[CSOPoint]) -> Option<(usize, Unit<Vector<Real>>, Real)> {
    let mut best: Option<(usize, Unit<Vector<Real>>, Real)> = None;

    for i in 0..polygon.len() {
        let j = (i + 1) % polygon.len();
        let edge = polygon[j] - polygon[i];

        if let Some(normal) = Unit::try_new(edge.cw_perp(), crate::math::DEFAULT_EPSILON) {
            let dist = polygon[i].point.coords.dot(&normal);

            if best.map_or(true, |(_, _, best_dist)| dist < best_dist) {
                best = Some((i, normal, dist));
            }
        }
    }

    best
}
