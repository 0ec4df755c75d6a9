use core::mem;

use crate::math::{self, Point, Real};
use crate::query::gjk::{self, CSOPoint, Simplex};
use crate::query::{Algorithm, QueryError, QueryOptions};
use crate::shape::SupportMap;

/// Closest points information.
#[derive(Debug, PartialEq, Clone, Copy)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub enum ClosestPoints {
    /// The two objects are intersecting.
    Intersecting,
    /// The two objects are non-intersecting, or touching if `distance` is zero.
    WithinDistance {
        /// The point of the first shape closest to the second shape.
        point1: Point<Real>,
        /// The point of the second shape closest to the first shape.
        point2: Point<Real>,
        /// The distance between the two shapes.
        distance: Real,
        /// The number of refinement iterations performed.
        iterations: u32,
    },
}

impl ClosestPoints {
    /// The distance between the shapes, zero if they intersect.
    pub fn distance(&self) -> Real {
        match self {
            ClosestPoints::Intersecting => 0.0,
            ClosestPoints::WithinDistance { distance, .. } => *distance,
        }
    }

    /// Swaps the two points.
    pub fn flip(&mut self) {
        if let ClosestPoints::WithinDistance { point1, point2, .. } = self {
            mem::swap(point1, point2)
        }
    }

    /// Returns the result of swapping the two points if `self` is `WithinDistance`.
    #[must_use]
    pub fn flipped(&self) -> Self {
        let mut result = *self;
        result.flip();
        result
    }
}

/// Computes the closest points between two convex shapes.
///
/// Shapes closer than `options.touching_tolerance` are touching: their distance is reported as
/// zero.
pub fn closest_points<G1, G2>(
    g1: &G1,
    g2: &G2,
    options: &QueryOptions,
) -> Result<ClosestPoints, QueryError>
where
    G1: ?Sized + SupportMap,
    G2: ?Sized + SupportMap,
{
    if gjk::intersection_test(g1, g2, options)? {
        return Ok(ClosestPoints::Intersecting);
    }

    let mut dir = g2.center() - g1.center();

    if dir.norm_squared() <= options.epsilon * options.epsilon {
        dir = -*math::up();
    }

    let mut simplex = Simplex::new();
    let first = CSOPoint::from_shapes(g1, g2, &dir);
    simplex.set_a(first);

    let mut closest = (first.point, first.orig1, first.orig2);

    for iterations in 0..options.max_iterations {
        let (proj, point1, point2) = closest;
        let dist = proj.coords.norm();

        if dist <= options.touching_tolerance {
            return Ok(ClosestPoints::WithinDistance {
                point1,
                point2,
                distance: 0.0,
                iterations,
            });
        }

        let pt = CSOPoint::from_shapes(g1, g2, &-proj.coords);
        // Lower bound of the distance given by the support point.
        let bound = pt.point.coords.dot(&proj.coords) / dist;

        if dist - bound <= options.touching_tolerance {
            return Ok(ClosestPoints::WithinDistance {
                point1,
                point2,
                distance: dist,
                iterations,
            });
        }

        // Keep the edge, made of the new point and one of the previous ones, closest to the
        // origin.
        let mut best: Option<(CSOPoint, (Point<Real>, Point<Real>, Point<Real>))> = None;

        for kept in simplex.points() {
            let candidate = CSOPoint::project_origin_on_edge(&pt, kept);

            if best.map_or(true, |(_, b)| {
                candidate.0.coords.norm_squared() < b.0.coords.norm_squared()
            }) {
                best = Some((*kept, candidate));
            }
        }

        let Some((kept, candidate)) = best else {
            break;
        };

        if candidate.0.coords.norm() >= dist {
            // No progress: the current closest point is as good as it gets.
            return Ok(ClosestPoints::WithinDistance {
                point1,
                point2,
                distance: dist,
                iterations,
            });
        }

        simplex.clear();
        simplex.set_a(pt);
        simplex.set_b(kept);
        closest = candidate;
    }

    Err(QueryError::no_convergence(
        Algorithm::GjkDistance,
        options.max_iterations,
    ))
}
