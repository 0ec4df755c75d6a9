//! The Gilbert-Johnson-Keerthi boolean intersection test.
//!
//! GJK operates on the Minkowski difference (also called Configuration Space Obstacle or CSO)
//! `A - B` of two convex shapes: the shapes intersect if, and only if, the origin lies inside
//! of it. The test grows a simplex (up to a triangle in 2D) made of support points of the CSO,
//! each one taken in the direction of the origin as seen from the current simplex, until either
//! the simplex encloses the origin or a support point fails to pass the origin.
//!
//! Shapes that only touch (the origin lies on the CSO boundary) are reported as not
//! intersecting.

use crate::math::{Real, Vector};
use crate::query::gjk::{CSOPoint, Simplex};
use crate::query::{Algorithm, QueryError, QueryOptions};
use crate::shape::SupportMap;
use crate::utils::{fuzzy_zero, VectorOps};

/// Tests if two convex shapes are intersecting.
///
/// Returns an error if the test did not conclude after `options.max_iterations` support points.
pub fn intersection_test<G1, G2>(
    g1: &G1,
    g2: &G2,
    options: &QueryOptions,
) -> Result<bool, QueryError>
where
    G1: ?Sized + SupportMap,
    G2: ?Sized + SupportMap,
{
    let mut simplex = Simplex::new();
    let result = intersection_test_with_simplex(g1, g2, options, &mut simplex);
    simplex.clear();
    result
}

fn intersection_test_with_simplex<G1, G2>(
    g1: &G1,
    g2: &G2,
    options: &QueryOptions,
    simplex: &mut Simplex,
) -> Result<bool, QueryError>
where
    G1: ?Sized + SupportMap,
    G2: ?Sized + SupportMap,
{
    let mut dir = g1.center() - g2.center();

    if dir.norm_squared() <= options.epsilon * options.epsilon {
        dir = *crate::math::up();
    }

    let first = CSOPoint::from_shapes(g1, g2, &dir);

    if first.point.coords.dot(&dir) <= 0.0 {
        return Ok(false);
    }

    simplex.set_a(first);
    dir = -first.point.coords;

    for _ in 0..options.max_iterations {
        let pt = CSOPoint::from_shapes(g1, g2, &dir);

        if pt.point.coords.dot(&dir) <= 0.0 {
            // The CSO does not pass the origin in the direction of `dir`.
            return Ok(false);
        }

        simplex.push_front(pt);

        let step = if simplex.len() == 2 {
            line_case(g1, g2, simplex, options)
        } else {
            triangle_case(g1, g2, simplex, options)
        };

        match step {
            Step::Continue(new_dir) => dir = new_dir,
            Step::Done(result) => return Ok(result),
        }
    }

    Err(QueryError::no_convergence(
        Algorithm::Gjk,
        options.max_iterations,
    ))
}

enum Step {
    Continue(Vector<Real>),
    Done(bool),
}

fn line_case<G1, G2>(g1: &G1, g2: &G2, simplex: &mut Simplex, options: &QueryOptions) -> Step
where
    G1: ?Sized + SupportMap,
    G2: ?Sized + SupportMap,
{
    let (a, b) = match simplex.points() {
        [a, b] => (*a, *b),
        _ => unreachable!(),
    };
    let ab = b - a;
    let ao = -a.point.coords;

    if ab.dot(&ao) > 0.0 {
        let dir = ab.triple(&ao, &ab);

        if dir.norm() <= options.epsilon * ab.norm_squared() {
            // The origin lies on the segment `ab`: it is inside the CSO unless the CSO
            // is flat on one of the sides of that segment.
            let n = ab.ccw_perp();
            let inside = passes_origin(g1, g2, &n) && passes_origin(g1, g2, &-n);
            Step::Done(inside)
        } else {
            Step::Continue(dir)
        }
    } else {
        simplex.truncate(1);
        Step::Continue(ao)
    }
}

fn triangle_case<G1, G2>(
    g1: &G1,
    g2: &G2,
    simplex: &mut Simplex,
    options: &QueryOptions,
) -> Step
where
    G1: ?Sized + SupportMap,
    G2: ?Sized + SupportMap,
{
    let (a, b, c) = match simplex.points() {
        [a, b, c] => (*a, *b, *c),
        _ => unreachable!(),
    };
    let ab = b - a;
    let ac = c - a;
    let ao = -a.point.coords;

    if fuzzy_zero(ab.perp(&ac), options.epsilon * ab.norm() * ac.norm()) {
        // Collinear triangle: keep the longest edge starting at `a`.
        if ac.norm_squared() > ab.norm_squared() {
            let _ = simplex.remove(1);
        } else {
            simplex.truncate(2);
        }

        return line_case(g1, g2, simplex, options);
    }

    let ab_perp = ac.triple(&ab, &ab);
    let ac_perp = ab.triple(&ac, &ac);
    let ab_side = ab_perp.dot(&ao);
    let ac_side = ac_perp.dot(&ao);

    if ab_side > 0.0 {
        simplex.truncate(2);
        Step::Continue(ab_perp)
    } else if ac_side > 0.0 {
        let _ = simplex.remove(1);
        Step::Continue(ac_perp)
    } else if ab_side == 0.0 {
        // The origin lies on the edge `ab` which may be part of the CSO boundary.
        Step::Done(passes_origin(g1, g2, &ab_perp))
    } else if ac_side == 0.0 {
        Step::Done(passes_origin(g1, g2, &ac_perp))
    } else {
        Step::Done(true)
    }
}

/// Does the CSO extend strictly past the origin in the direction `dir`?
fn passes_origin<G1, G2>(g1: &G1, g2: &G2, dir: &Vector<Real>) -> bool
where
    G1: ?Sized + SupportMap,
    G2: ?Sized + SupportMap,
{
    CSOPoint::from_shapes(g1, g2, dir).point.coords.dot(dir) > 0.0
}
